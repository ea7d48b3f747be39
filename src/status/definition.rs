//! Status definitions - what a status *is*.
//!
//! A status is identified by a [`StatusId`] (e.g. `POISON`,
//! `WEAKNESS_FIRE`) and behaves according to its [`StatusKind`]. The kind
//! is a closed set: adding a behaviour means adding a variant and letting
//! the compiler point at every `match` that must handle it.

use serde::{Deserialize, Serialize};

use crate::cards::CardType;
use crate::core::{DamageType, ResourceKind};
use crate::effects::{EffectAction, Qualifier};

/// Identifier of a status definition.
///
/// Must be non-empty and made of `A-Z`, `0-9` and `_` so that it can be
/// embedded in an effect identifier such as `APPLY_POISON_TARGET`.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatusId(String);

impl StatusId {
    /// Create a status id. Validation happens when the registry is built.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The raw identifier.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check that the id can be embedded in effect identifiers.
    #[must_use]
    pub fn is_well_formed(&self) -> bool {
        !self.0.is_empty()
            && !self.0.starts_with('_')
            && !self.0.ends_with('_')
            && self
                .0
                .chars()
                .all(|c| c.is_ascii_uppercase() || c.is_ascii_digit() || c == '_')
    }
}

impl std::fmt::Display for StatusId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for StatusId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

/// When a status's on-turn hook fires.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum TriggerTiming {
    TurnStart,
    TurnEnd,
}

/// What an effect-level modifier scales on matching cards.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "target", rename_all = "snake_case")]
pub enum LevelTarget {
    /// The card's stamina cost.
    Cost,
    /// Levels of card effects matching `action` and any of `qualifiers`.
    Effect {
        #[serde(default)]
        action: Option<EffectAction>,
        #[serde(default)]
        qualifiers: Vec<Qualifier>,
    },
}

/// Behaviour of a status.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum StatusKind {
    /// Deals `level` damage to the holder at turn start.
    DamageOverTime { damage_type: DamageType },

    /// Restores `level` of a resource at turn end.
    RestoreOverTime { resource: ResourceKind },

    /// Blocks physical damage point for point, consuming itself.
    Defense,

    /// Reduces non-physical damage by a percentage per level.
    Willpower,

    /// Multiplies the holder's outgoing damage, then breaks.
    Hidden,

    /// Bounces non-physical damage back at the attacker.
    Reflect,

    /// Converts non-physical damage into magicka.
    SpellAbsorption,

    /// Scales incoming damage of one type (weakness > 0, resistance < 0).
    DamageTaken {
        damage_type: DamageType,
        per_level: f64,
    },

    /// Adds to the number of cards drawn at turn start.
    DrawCount { per_level: i32 },

    /// Adds to a resource's effective maximum.
    MaxResource {
        resource: ResourceKind,
        per_level: i32,
    },

    /// Scales cost or effect levels of cards in hand.
    EffectLevel {
        #[serde(default)]
        card_type: Option<CardType>,
        #[serde(flatten)]
        target: LevelTarget,
        per_level: f64,
    },
}

impl StatusKind {
    /// When this kind's on-turn hook fires, if it has one.
    #[must_use]
    pub fn timing(&self) -> Option<TriggerTiming> {
        match self {
            Self::DamageOverTime { .. } => Some(TriggerTiming::TurnStart),
            Self::RestoreOverTime { .. } => Some(TriggerTiming::TurnEnd),
            _ => None,
        }
    }

    /// Check if this kind feeds one of the modifier pools.
    #[must_use]
    pub fn is_modifier(&self) -> bool {
        matches!(
            self,
            Self::DamageTaken { .. }
                | Self::DrawCount { .. }
                | Self::MaxResource { .. }
                | Self::EffectLevel { .. }
        )
    }
}

/// A status definition from the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct StatusDefinition {
    pub id: StatusId,
    pub name: String,
    #[serde(flatten)]
    pub kind: StatusKind,
}

impl StatusDefinition {
    /// Create a status definition.
    #[must_use]
    pub fn new(id: impl Into<StatusId>, name: impl Into<String>, kind: StatusKind) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            kind,
        }
    }
}

impl From<String> for StatusId {
    fn from(s: String) -> Self {
        Self(s)
    }
}
