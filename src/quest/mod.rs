//! Quests: chains of encounters with persistent player state.

mod definition;
mod runner;

pub use definition::{QuestDefinition, QuestOutcome};
pub use runner::QuestRun;
