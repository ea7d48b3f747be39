//! Combat orchestration.
//!
//! - `CombatManager`: turn state machine for one encounter
//! - `CombatPhase`: where the state machine is
//! - `CombatIntent` / `CombatEvent`: typed inbound and outbound interface
//! - `PlayerController`: blocking source of player decisions

mod controller;
mod event;
mod manager;
mod phase;

pub use controller::{
    CombatView, GreedyController, PlayerChoice, PlayerController, RandomController,
    ScriptedController,
};
pub use event::{CardView, CombatEvent, CombatIntent};
pub use manager::{CombatManager, CombatResult, PlayOutcome};
pub use phase::CombatPhase;
