//! Raw catalog records as loaded from JSON.

use serde::{Deserialize, Serialize};

use crate::cards::{CardDefinition, Enchantment};
use crate::combatant::{EnemyPrototype, PlayerTemplate};
use crate::quest::QuestDefinition;
use crate::status::StatusDefinition;

/// Every record the engine consumes, unvalidated.
///
/// Each list defaults to empty, so a partial catalog (only statuses and
/// cards, say) is still valid JSON.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogData {
    pub statuses: Vec<StatusDefinition>,
    pub cards: Vec<CardDefinition>,
    pub enemies: Vec<EnemyPrototype>,
    pub enchantments: Vec<Enchantment>,
    pub quests: Vec<QuestDefinition>,
    pub player: Option<PlayerTemplate>,
}

impl CatalogData {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_status(mut self, status: StatusDefinition) -> Self {
        self.statuses.push(status);
        self
    }

    #[must_use]
    pub fn with_card(mut self, card: CardDefinition) -> Self {
        self.cards.push(card);
        self
    }

    #[must_use]
    pub fn with_enemy(mut self, enemy: EnemyPrototype) -> Self {
        self.enemies.push(enemy);
        self
    }

    #[must_use]
    pub fn with_enchantment(mut self, enchantment: Enchantment) -> Self {
        self.enchantments.push(enchantment);
        self
    }

    #[must_use]
    pub fn with_quest(mut self, quest: QuestDefinition) -> Self {
        self.quests.push(quest);
        self
    }

    #[must_use]
    pub fn with_player(mut self, player: PlayerTemplate) -> Self {
        self.player = Some(player);
        self
    }
}
