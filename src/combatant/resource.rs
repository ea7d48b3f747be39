//! Bounded resource pools.
//!
//! The effective maximum is always computed through the owner's
//! [`ModifierManager`], never cached, so a fortify or sap status changes
//! the cap the moment it is applied.

use serde::{Deserialize, Serialize};

use crate::core::ResourceKind;
use crate::modifiers::ModifierManager;

/// A single bounded numeric pool.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Resource {
    pub kind: ResourceKind,
    pub max_value: i32,
    pub current: i32,
}

impl Resource {
    /// Create a full resource.
    #[must_use]
    pub fn new(kind: ResourceKind, max_value: i32) -> Self {
        Self {
            kind,
            max_value,
            current: max_value,
        }
    }

    /// Create a resource with an explicit current value.
    #[must_use]
    pub fn with_current(kind: ResourceKind, max_value: i32, current: i32) -> Self {
        Self {
            kind,
            max_value,
            current,
        }
    }

    /// Maximum after modifiers.
    #[must_use]
    pub fn effective_max(&self, modifiers: &ModifierManager) -> i32 {
        modifiers.get_max_resource(self.kind, self.max_value)
    }

    /// Add `amount` (may be negative), clamping to `[min_resource, effective_max]`.
    ///
    /// Returns the change actually applied.
    pub fn change(&mut self, amount: i32, modifiers: &ModifierManager) -> i32 {
        let before = self.current;
        let max = self.effective_max(modifiers);
        let min = modifiers.min_resource().min(max);
        self.current = self.current.saturating_add(amount).clamp(min, max);
        self.current - before
    }

    /// Debit `amount` if affordable. Never partially debits.
    pub fn try_spend(&mut self, amount: i32, modifiers: &ModifierManager) -> bool {
        if amount < 0 || self.current < amount {
            return false;
        }
        self.change(-amount, modifiers);
        true
    }

    /// Refill to the effective maximum.
    pub fn replenish(&mut self, modifiers: &ModifierManager) {
        self.current = self.effective_max(modifiers);
    }

    /// Pull the current value back inside the bounds after the cap moved.
    pub fn clamp(&mut self, modifiers: &ModifierManager) {
        self.change(0, modifiers);
    }
}
