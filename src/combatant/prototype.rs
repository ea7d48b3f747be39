//! Combatant prototypes and loot.
//!
//! Enemies are instantiated fresh for every encounter from an immutable
//! [`EnemyPrototype`]. The player is built once from a [`PlayerTemplate`]
//! and persists across a quest.

use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::core::{GameRng, ResourceKind};

/// Starting maxima of a combatant's resources.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResourceValues {
    pub health: i32,
    pub stamina: i32,
    pub magicka: i32,
    pub gold: i32,
}

impl Default for ResourceValues {
    fn default() -> Self {
        Self {
            health: 10,
            stamina: 3,
            magicka: 0,
            gold: 0,
        }
    }
}

impl ResourceValues {
    /// Value for one resource kind.
    #[must_use]
    pub fn get(&self, kind: ResourceKind) -> i32 {
        match kind {
            ResourceKind::Health => self.health,
            ResourceKind::Stamina => self.stamina,
            ResourceKind::Magicka => self.magicka,
            ResourceKind::Gold => self.gold,
        }
    }

    #[must_use]
    pub fn with_health(mut self, health: i32) -> Self {
        self.health = health;
        self
    }

    #[must_use]
    pub fn with_stamina(mut self, stamina: i32) -> Self {
        self.stamina = stamina;
        self
    }

    #[must_use]
    pub fn with_magicka(mut self, magicka: i32) -> Self {
        self.magicka = magicka;
        self
    }

    #[must_use]
    pub fn with_gold(mut self, gold: i32) -> Self {
        self.gold = gold;
        self
    }
}

/// A card that may drop on victory.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct LootDrop {
    pub card: CardId,
    /// Drop probability in `[0, 1]`.
    pub chance: f64,
}

/// Rewards granted to the player for defeating an enemy.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rewards {
    pub gold: i32,
    pub cards: Vec<CardId>,
}

impl Rewards {
    /// Check if nothing was won.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.gold == 0 && self.cards.is_empty()
    }
}

/// An enemy's loot table.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LootTable {
    pub gold_min: i32,
    pub gold_max: i32,
    pub drops: Vec<LootDrop>,
}

impl LootTable {
    /// Roll gold within `[gold_min, gold_max]` and each drop independently.
    pub fn roll(&self, rng: &mut GameRng) -> Rewards {
        let gold = rng.gen_range_inclusive(self.gold_min, self.gold_max).max(0);
        let cards = self
            .drops
            .iter()
            .filter(|drop| rng.gen_bool(drop.chance))
            .map(|drop| drop.card.clone())
            .collect();
        Rewards { gold, cards }
    }
}

/// Immutable enemy template.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EnemyPrototype {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub resources: ResourceValues,
    /// Card ids of the enemy deck, one entry per copy.
    pub deck: Vec<CardId>,
    #[serde(default)]
    pub loot: LootTable,
}

/// Starting state of the player.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct PlayerTemplate {
    pub name: String,
    #[serde(default)]
    pub resources: ResourceValues,
    /// Cards in the combat deck.
    pub deck: Vec<CardId>,
    /// Owned cards kept out of the deck.
    #[serde(default)]
    pub library: Vec<CardId>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_roll_gold_range() {
        let table = LootTable {
            gold_min: 5,
            gold_max: 10,
            drops: Vec::new(),
        };
        let mut rng = GameRng::new(9);
        for _ in 0..50 {
            let gold = table.roll(&mut rng).gold;
            assert!((5..=10).contains(&gold));
        }
    }

    #[test]
    fn test_roll_certain_and_impossible_drops() {
        let table = LootTable {
            gold_min: 0,
            gold_max: 0,
            drops: vec![
                LootDrop {
                    card: CardId::new("ALWAYS"),
                    chance: 1.0,
                },
                LootDrop {
                    card: CardId::new("NEVER"),
                    chance: 0.0,
                },
            ],
        };
        let rewards = table.roll(&mut GameRng::new(1));
        assert_eq!(rewards.cards, vec![CardId::new("ALWAYS")]);
        assert_eq!(rewards.gold, 0);
    }

    #[test]
    fn test_roll_is_deterministic() {
        let table = LootTable {
            gold_min: 1,
            gold_max: 100,
            drops: vec![LootDrop {
                card: CardId::new("MAYBE"),
                chance: 0.5,
            }],
        };
        let a = table.roll(&mut GameRng::new(77));
        let b = table.roll(&mut GameRng::new(77));
        assert_eq!(a, b);
    }

    #[test]
    fn test_resource_values_defaults_from_json() {
        let values: ResourceValues = serde_json::from_str(r#"{"health": 30}"#).unwrap();
        assert_eq!(values.get(ResourceKind::Health), 30);
        assert_eq!(values.get(ResourceKind::Stamina), 3);
    }
}
