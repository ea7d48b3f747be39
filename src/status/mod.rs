//! Status system.
//!
//! - `StatusDefinition` / `StatusKind`: what a status does
//! - `StatusRegistry`: definitions built once from the catalog
//! - `StatusManager`: per-combatant stacked levels
//! - `trigger_statuses`: turn-start / turn-end hooks

mod definition;
mod manager;
mod registry;
mod trigger;

pub use definition::{LevelTarget, StatusDefinition, StatusId, StatusKind, TriggerTiming};
pub use manager::{RemoveAmount, StatusEntry, StatusManager};
pub use registry::StatusRegistry;
pub use trigger::trigger_statuses;
