//! Error types for the combat engine.
//!
//! Only data-integrity failures and API misuse are errors. A player asking
//! to play a card they cannot afford is a normal outcome, reported through
//! [`PlayOutcome`](crate::combat::PlayOutcome) and a combat event instead.

use thiserror::Error;

use crate::cards::{CardId, InstanceId};
use crate::combat::CombatPhase;

/// Errors raised by the combat engine.
#[derive(Error, Debug)]
pub enum CombatError {
    #[error("Unknown effect: {0}")]
    UnknownEffect(String),

    #[error("Unknown status: {0}")]
    UnknownStatus(String),

    #[error("Unknown card: {0}")]
    UnknownCard(CardId),

    #[error("Unknown enemy: {0}")]
    UnknownEnemy(String),

    #[error("Unknown enchantment: {0}")]
    UnknownEnchantment(String),

    #[error("Unknown quest: {0}")]
    UnknownQuest(String),

    #[error("Invalid identifier '{value}': {reason}")]
    InvalidIdentifier { value: String, reason: String },

    #[error("Invalid catalog record '{id}': {reason}")]
    InvalidRecord { id: String, reason: String },

    #[error("Duplicate {kind} id: {id}")]
    DuplicateId { kind: &'static str, id: String },

    #[error("Card {0} is not in hand")]
    CardNotInHand(InstanceId),

    #[error("Card {0} is not in the expected zone")]
    CardNotInZone(InstanceId),

    #[error("Intent not valid in phase {actual:?} (expected {expected:?})")]
    InvalidPhase {
        expected: CombatPhase,
        actual: CombatPhase,
    },

    #[error("Combat is not active")]
    CombatNotActive,

    #[error("Catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

impl CombatError {
    /// Shorthand for an identifier that failed to parse.
    pub fn invalid_identifier(value: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidIdentifier {
            value: value.into(),
            reason: reason.into(),
        }
    }

    /// Shorthand for a catalog record that failed validation.
    pub fn invalid_record(id: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::InvalidRecord {
            id: id.into(),
            reason: reason.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, CombatError>;
