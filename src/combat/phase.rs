//! Combat phases.

use serde::{Deserialize, Serialize};
use strum::Display;

/// Turn state machine.
///
/// ```text
/// PlayerTurnStart -> PlayerAction -> PlayerTurnEnd -> EnemyTurn
///        ^                                               |
///        +------------------ CombatCheck <---------------+
///                                 |
///                                Over
/// ```
///
/// `CombatCheck` runs after every card, trigger pass and turn end; any
/// death moves straight to `Over`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum CombatPhase {
    PlayerTurnStart,
    PlayerAction,
    PlayerTurnEnd,
    EnemyTurn,
    CombatCheck,
    Over,
}

impl CombatPhase {
    /// Check if the combat has ended.
    #[must_use]
    pub fn is_over(self) -> bool {
        self == Self::Over
    }
}
