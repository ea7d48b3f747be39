//! Card instances - runtime card state.
//!
//! A `Card` is one physical copy in a combatant's collection. It keeps its
//! [`InstanceId`] for life; moving between library, deck, hand and discard
//! never re-clones it. The only mutable state is the modifier attached to
//! its cost and to each leveled effect.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::definition::{CardId, CardType};
use crate::effects::EffectId;

/// Unique identifier for a card copy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct InstanceId(pub u32);

impl InstanceId {
    /// Create a new instance ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for InstanceId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card#{}", self.0)
    }
}

/// A magnitude attached to a reference, scaled by a resettable modifier.
///
/// `effective_level = max(round(base_level * (1 + modifier)), floor)`
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LeveledMechanic<R> {
    pub reference: R,
    pub base_level: i32,
    pub modifier: f64,
}

impl<R> LeveledMechanic<R> {
    /// Create a mechanic with no modifier.
    #[must_use]
    pub fn new(reference: R, base_level: i32) -> Self {
        Self {
            reference,
            base_level,
            modifier: 0.0,
        }
    }

    /// Level after modifiers, floored at `min`.
    #[must_use]
    pub fn effective_level(&self, min: i32) -> i32 {
        scale(self.base_level, self.modifier).max(min)
    }

    /// Strip any modifier contribution.
    pub fn reset(&mut self) {
        self.modifier = 0.0;
    }
}

fn scale(base: i32, modifier: f64) -> i32 {
    (f64::from(base) * (1.0 + modifier)).round() as i32
}

/// A card copy in a combatant's collection.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub instance: InstanceId,
    pub card_id: CardId,
    pub name: String,
    pub card_type: CardType,

    /// Base stamina cost.
    pub cost: i32,

    /// Net effect-level contribution aimed at the cost.
    pub cost_modifier: f64,

    pub value: i32,

    /// Leveled effects in resolution order.
    pub effects: SmallVec<[LeveledMechanic<EffectId>; 4]>,
}

impl Card {
    /// Stamina cost after modifiers. Never negative.
    #[must_use]
    pub fn effective_cost(&self) -> i32 {
        scale(self.cost, self.cost_modifier).max(0)
    }

    /// Effect ids with their effective levels, in resolution order.
    #[must_use]
    pub fn effective_effects(&self, min_level: i32) -> SmallVec<[(EffectId, i32); 4]> {
        self.effects
            .iter()
            .map(|e| (e.reference.clone(), e.effective_level(min_level)))
            .collect()
    }

    /// Strip every modifier from cost and effects.
    pub fn reset_modifiers(&mut self) {
        self.cost_modifier = 0.0;
        for effect in &mut self.effects {
            effect.reset();
        }
    }

    /// Check if any modifier is attached.
    #[must_use]
    pub fn is_modified(&self) -> bool {
        self.cost_modifier != 0.0 || self.effects.iter().any(|e| e.modifier != 0.0)
    }
}
