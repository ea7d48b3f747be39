//! Enchantments.
//!
//! Enchanting never mutates a prototype. It produces a new, immutable
//! [`CardDefinition`] whose effect levels are the merge of the base card
//! and the enchantment deltas.

use serde::{Deserialize, Serialize};

use super::definition::{CardDefinition, CardId, EffectEntry};

/// An enchantment definition from the catalog.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Enchantment {
    pub id: String,
    pub name: String,

    /// Levels added to (or introduced on) the enchanted card.
    #[serde(default)]
    pub effect_deltas: Vec<EffectEntry>,

    /// Factor applied to the card's gold value.
    #[serde(default = "default_value_multiplier")]
    pub value_multiplier: f64,
}

fn default_value_multiplier() -> f64 {
    1.0
}

impl Enchantment {
    /// Create an enchantment with no deltas.
    #[must_use]
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            effect_deltas: Vec::new(),
            value_multiplier: 1.0,
        }
    }

    /// Add an effect delta (builder pattern).
    #[must_use]
    pub fn with_delta(mut self, entry: EffectEntry) -> Self {
        self.effect_deltas.push(entry);
        self
    }

    /// Set the value multiplier (builder pattern).
    #[must_use]
    pub fn with_value_multiplier(mut self, multiplier: f64) -> Self {
        self.value_multiplier = multiplier;
        self
    }

    /// Id of the prototype produced by enchanting `card`.
    #[must_use]
    pub fn enchanted_id(&self, card: &CardId) -> CardId {
        CardId::new(format!("{}+{}", card, self.id))
    }

    /// Produce the enchanted prototype.
    ///
    /// Existing effects gain the delta level; new effects are appended
    /// after the card's own so resolution order is stable.
    #[must_use]
    pub fn apply(&self, card: &CardDefinition) -> CardDefinition {
        let mut enchanted = card.clone();
        enchanted.id = self.enchanted_id(&card.id);
        enchanted.name = format!("{} of {}", card.name, self.name);
        enchanted.value = (f64::from(card.value) * self.value_multiplier).round() as i32;

        for delta in &self.effect_deltas {
            match enchanted
                .effects
                .iter_mut()
                .find(|e| e.effect == delta.effect)
            {
                Some(existing) => existing.level += delta.level,
                None => enchanted.effects.push(delta.clone()),
            }
        }
        enchanted
    }
}
