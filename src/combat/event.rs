//! Combat notifications and intents.
//!
//! The engine never calls into presentation. It queues [`CombatEvent`]s,
//! which a front end drains (or receives through a
//! [`PlayerController`](super::PlayerController)) after each intent.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId, CardType, InstanceId};
use crate::combatant::Rewards;
use crate::core::Side;
use crate::damage::DamageReport;
use crate::effects::EffectId;
use crate::status::StatusId;

/// Snapshot of a card as the player sees it.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CardView {
    pub instance: InstanceId,
    pub card_id: CardId,
    pub name: String,
    pub card_type: CardType,
    /// Cost after modifiers.
    pub cost: i32,
    /// Effects with effective levels.
    pub effects: Vec<(EffectId, i32)>,
}

impl CardView {
    /// Snapshot a card with its current modifiers.
    #[must_use]
    pub fn from_card(card: &Card, min_level: i32) -> Self {
        Self {
            instance: card.instance,
            card_id: card.card_id.clone(),
            name: card.name.clone(),
            card_type: card.card_type,
            cost: card.effective_cost(),
            effects: card.effective_effects(min_level).into_vec(),
        }
    }
}

/// Inbound intents from the input layer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum CombatIntent {
    StartPlayerTurn,
    PlayCard(usize),
    EndTurn,
}

/// Outbound notifications to the presentation layer.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum CombatEvent {
    /// Both combatants are prepared.
    CombatStarted { player: String, enemy: String },

    /// A side's turn began (before draws).
    TurnStarted { side: Side, turn: u32 },

    /// The player may act; carries the hand.
    StartActionPhase { hand: Vec<CardView> },

    /// A card was paid for and all its effects resolved.
    CardResolved { side: Side, card: CardView },

    /// The player tried to play a card they cannot afford.
    CardNotPlayable { card: CardView, reason: String },

    /// A hit went through the damage pipeline.
    DamageDealt { target: Side, report: DamageReport },

    /// A status fired its on-turn hook.
    StatusTriggered {
        side: Side,
        status: StatusId,
        level: i32,
    },

    /// Free-form message for the combat log.
    Message(String),

    EndEnemyTurn,

    EndCombat { victory: bool, rewards: Rewards },
}
