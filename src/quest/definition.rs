use serde::{Deserialize, Serialize};

use crate::cards::CardId;
use crate::combatant::Combatant;

/// An ordered chain of encounters.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestDefinition {
    pub id: String,
    pub name: String,
    /// Enemy ids, fought in order.
    pub encounters: Vec<String>,
    /// Gold paid once every encounter is won.
    #[serde(default)]
    pub reward_gold: i32,
}

impl QuestDefinition {
    pub fn new(id: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            encounters: Vec::new(),
            reward_gold: 0,
        }
    }

    #[must_use]
    pub fn with_encounter(mut self, enemy: impl Into<String>) -> Self {
        self.encounters.push(enemy.into());
        self
    }

    #[must_use]
    pub fn with_reward_gold(mut self, gold: i32) -> Self {
        self.reward_gold = gold;
        self
    }
}

/// What a quest run produced.
#[derive(Clone, Debug)]
pub struct QuestOutcome {
    /// Every encounter was won.
    pub completed: bool,
    pub encounters_won: usize,
    /// Loot gold plus the completion reward.
    pub gold_earned: i32,
    /// Cards added to the player's library.
    pub cards_earned: Vec<CardId>,
    /// The player after the last combat fought.
    pub player: Combatant,
}
