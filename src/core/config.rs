//! Combat configuration.
//!
//! Every rule constant the engine consults lives here. All fields have
//! defaults, so a JSON config only needs to list what it overrides.

use serde::{Deserialize, Serialize};

/// Tunable rule constants for a combat session.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CombatConfig {
    /// Cards drawn at the start of each turn before draw modifiers.
    pub hand_size: usize,

    /// Floor for the modified draw count.
    pub min_hand_size: usize,

    /// Hard cap on cards held; drawing into a full hand fails.
    pub max_hand_size: usize,

    /// Floor for any card effect level after modifiers.
    pub min_effect_level: i32,

    /// Floor for a resource's current value.
    pub min_resource: i32,

    /// Floor for a resource's effective maximum after modifiers.
    pub min_max_resource: i32,

    /// Extra damage multiplier per level of the attacker's hidden status.
    pub hidden_crit_per_level: f64,

    /// Non-physical damage reduction per willpower level, in percent.
    pub willpower_percent_per_level: i32,

    /// Cap on willpower reduction, in percent.
    pub max_willpower_percent: i32,

    /// Safety valve for enemy turns made of zero-cost cards.
    pub max_plays_per_turn: usize,

    /// Seed for the combat RNG.
    pub seed: u64,
}

impl Default for CombatConfig {
    fn default() -> Self {
        Self {
            hand_size: 6,
            min_hand_size: 3,
            max_hand_size: 10,
            min_effect_level: 0,
            min_resource: 0,
            min_max_resource: 1,
            hidden_crit_per_level: 0.5,
            willpower_percent_per_level: 10,
            max_willpower_percent: 100,
            max_plays_per_turn: 50,
            seed: 42,
        }
    }
}

impl CombatConfig {
    /// Parse a config from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> crate::error::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Set the base hand size.
    #[must_use]
    pub fn with_hand_size(mut self, size: usize) -> Self {
        self.hand_size = size;
        self
    }

    /// Set the maximum hand size.
    #[must_use]
    pub fn with_max_hand_size(mut self, size: usize) -> Self {
        self.max_hand_size = size;
        self
    }

    /// Set the willpower reduction per level.
    #[must_use]
    pub fn with_willpower_percent(mut self, percent: i32) -> Self {
        self.willpower_percent_per_level = percent;
        self
    }
}
