//! Card definitions - static card data.
//!
//! `CardDefinition` is the immutable prototype loaded from the catalog.
//! For example, "Firebolt" costs 2 stamina and carries `DAMAGE_FIRE_TARGET`
//! at level 4. Every copy in a deck is a separate [`Card`] instantiated from
//! the prototype.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

use super::instance::{Card, InstanceId, LeveledMechanic};
use crate::effects::EffectId;

/// Unique identifier for a card definition.
///
/// This identifies the "type" of card (e.g., "FIREBOLT"),
/// not a specific copy in a deck.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardId(String);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Get the raw ID value.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for CardId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// Card category. Effect-level statuses may target one category only.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum CardType {
    Attack,
    Spell,
    Skill,
    Item,
}

/// One effect on a card prototype, at its base level.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct EffectEntry {
    pub effect: EffectId,
    pub level: i32,
}

/// Static card definition.
///
/// ## Example
///
/// ```
/// use card_combat::cards::{CardDefinition, CardId, CardType};
///
/// let bolt = CardDefinition::new(CardId::new("FIREBOLT"), "Firebolt", CardType::Spell, 2)
///     .with_effect("DAMAGE_FIRE_TARGET".parse().unwrap(), 4);
///
/// assert_eq!(bolt.effects.len(), 1);
/// assert_eq!(bolt.level_of(&"DAMAGE_FIRE_TARGET".parse().unwrap()), 4);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardDefinition {
    /// Unique identifier for this card definition.
    pub id: CardId,

    /// Display name.
    pub name: String,

    pub card_type: CardType,

    /// Base stamina cost.
    pub cost: i32,

    /// Gold value (shops, enchanting).
    #[serde(default)]
    pub value: i32,

    /// Effects in resolution order.
    #[serde(default)]
    pub effects: Vec<EffectEntry>,
}

impl CardDefinition {
    /// Create a new card definition with no effects.
    #[must_use]
    pub fn new(id: CardId, name: impl Into<String>, card_type: CardType, cost: i32) -> Self {
        Self {
            id,
            name: name.into(),
            card_type,
            cost,
            value: 0,
            effects: Vec::new(),
        }
    }

    /// Add an effect (builder pattern).
    #[must_use]
    pub fn with_effect(mut self, effect: EffectId, level: i32) -> Self {
        self.effects.push(EffectEntry { effect, level });
        self
    }

    /// Set the gold value (builder pattern).
    #[must_use]
    pub fn with_value(mut self, value: i32) -> Self {
        self.value = value;
        self
    }

    /// Base level of an effect on this card (0 if absent).
    #[must_use]
    pub fn level_of(&self, effect: &EffectId) -> i32 {
        self.effects
            .iter()
            .find(|e| &e.effect == effect)
            .map_or(0, |e| e.level)
    }

    /// Create a mutable runtime copy of this prototype.
    #[must_use]
    pub fn instantiate(&self, instance: InstanceId) -> Card {
        Card {
            instance,
            card_id: self.id.clone(),
            name: self.name.clone(),
            card_type: self.card_type,
            cost: self.cost,
            cost_modifier: 0.0,
            value: self.value,
            effects: self
                .effects
                .iter()
                .map(|e| LeveledMechanic::new(e.effect.clone(), e.level))
                .collect(),
        }
    }
}
