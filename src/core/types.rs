//! Shared vocabulary: damage types, resource kinds and combat sides.
//!
//! These enums are closed sets. They double as the qualifier tokens inside
//! effect identifiers (`DAMAGE_FIRE_TARGET`, `DRAIN_STAMINA_TARGET`), so each
//! one round-trips through its SCREAMING_SNAKE_CASE string form.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumIter, EnumString};

/// Type of incoming damage.
///
/// Physical damage is mitigated by defense. Everything else goes through
/// willpower, reflect and spell absorption.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum DamageType {
    Physical,
    Fire,
    Frost,
    Shock,
    Poison,
}

impl DamageType {
    /// Check if this damage type is mitigated by defense.
    #[must_use]
    pub const fn is_physical(self) -> bool {
        matches!(self, Self::Physical)
    }
}

/// A bounded numeric pool owned by a combatant.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumIter, EnumString,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum ResourceKind {
    Health,
    Stamina,
    Magicka,
    Gold,
}

impl ResourceKind {
    /// Number of resource kinds.
    pub const COUNT: usize = 4;

    /// All kinds in storage order.
    pub const ALL: [ResourceKind; Self::COUNT] =
        [Self::Health, Self::Stamina, Self::Magicka, Self::Gold];

    /// Storage index of this kind.
    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Self::Health => 0,
            Self::Stamina => 1,
            Self::Magicka => 2,
            Self::Gold => 3,
        }
    }

    /// Resources refilled when a combat starts. Gold carries over.
    #[must_use]
    pub const fn replenished_at_combat_start(self) -> bool {
        !matches!(self, Self::Gold)
    }
}

/// Which side of the fight a combatant is on.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Side {
    Player,
    Enemy,
}

impl Side {
    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Self {
        match self {
            Self::Player => Self::Enemy,
            Self::Enemy => Self::Player,
        }
    }
}
