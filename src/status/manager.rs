//! Per-combatant status stacks.
//!
//! Each status id maps to a stacked level. A level that reaches zero or
//! below is removed immediately ("zombie kill"), so `has_status` is always
//! equivalent to `level > 0`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use tracing::debug;

use super::definition::{StatusId, StatusKind};
use super::registry::StatusRegistry;

/// How much of a status to remove.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum RemoveAmount {
    /// Remove the whole stack.
    All,
    /// Remove this many levels.
    Levels(i32),
}

/// A single active status.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusEntry {
    pub id: StatusId,
    pub level: i32,
}

/// Active statuses on one combatant, in insertion order.
///
/// Insertion order is the trigger order, so two poisons applied in
/// sequence always tick in the same order.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StatusManager {
    entries: Vec<StatusEntry>,
}

impl StatusManager {
    /// Create an empty status manager.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Apply `level` of a status.
    ///
    /// Positive levels stack onto any existing entry. Zero or negative
    /// levels remove `|level|` instead.
    pub fn apply(&mut self, id: &StatusId, level: i32) {
        if level <= 0 {
            self.remove(id, RemoveAmount::Levels(level.saturating_abs()));
            return;
        }

        match self.entries.iter_mut().find(|e| &e.id == id) {
            Some(entry) => entry.level = entry.level.saturating_add(level),
            None => self.entries.push(StatusEntry {
                id: id.clone(),
                level,
            }),
        }
        debug!(status = %id, level, total = self.level(id), "status applied");
        self.zombie_kill();
    }

    /// Alias of [`apply`](Self::apply) used by status-changing effects.
    pub fn change_status(&mut self, id: &StatusId, level: i32) {
        self.apply(id, level);
    }

    /// Remove some or all levels of a status.
    pub fn remove(&mut self, id: &StatusId, amount: RemoveAmount) {
        if let Some(entry) = self.entries.iter_mut().find(|e| &e.id == id) {
            match amount {
                RemoveAmount::All => entry.level = 0,
                RemoveAmount::Levels(n) => entry.level = entry.level.saturating_sub(n.max(0)),
            }
            debug!(status = %id, remaining = entry.level, "status removed");
        }
        self.zombie_kill();
    }

    /// End-of-turn decay: every active status loses exactly one level.
    pub fn decrement_statuses(&mut self) {
        for entry in &mut self.entries {
            entry.level -= 1;
        }
        self.zombie_kill();
    }

    /// Remove every status.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Current level of a status (0 if absent).
    #[must_use]
    pub fn level(&self, id: &StatusId) -> i32 {
        self.entries
            .iter()
            .find(|e| &e.id == id)
            .map_or(0, |e| e.level)
    }

    /// Check if a status is active.
    #[must_use]
    pub fn has_status(&self, id: &StatusId) -> bool {
        self.level(id) > 0
    }

    /// Total level of every active status whose kind satisfies `pred`.
    #[must_use]
    pub fn level_of_kind(
        &self,
        registry: &StatusRegistry,
        pred: impl Fn(&StatusKind) -> bool,
    ) -> i32 {
        self.entries
            .iter()
            .filter(|e| registry.kind(&e.id).is_some_and(&pred))
            .map(|e| e.level)
            .sum()
    }

    /// Consume up to `amount` levels from statuses whose kind satisfies
    /// `pred`, in insertion order. Returns the levels actually consumed.
    pub fn consume_kind(
        &mut self,
        registry: &StatusRegistry,
        pred: impl Fn(&StatusKind) -> bool,
        amount: i32,
    ) -> i32 {
        let mut remaining = amount.max(0);
        for entry in &mut self.entries {
            if remaining == 0 {
                break;
            }
            if registry.kind(&entry.id).is_some_and(&pred) {
                let taken = entry.level.min(remaining);
                entry.level -= taken;
                remaining -= taken;
            }
        }
        self.zombie_kill();
        amount.max(0) - remaining
    }

    /// Remove every status whose kind satisfies `pred`.
    pub fn remove_kind(&mut self, registry: &StatusRegistry, pred: impl Fn(&StatusKind) -> bool) {
        self.entries
            .retain(|e| !registry.kind(&e.id).is_some_and(&pred));
    }

    /// Snapshot of active status ids in trigger order.
    #[must_use]
    pub fn ids(&self) -> SmallVec<[StatusId; 8]> {
        self.entries.iter().map(|e| e.id.clone()).collect()
    }

    /// Iterate over active statuses in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = &StatusEntry> {
        self.entries.iter()
    }

    /// Number of active statuses.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Check if no status is active.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn zombie_kill(&mut self) {
        self.entries.retain(|e| e.level > 0);
    }
}
