//! Combatants and their building blocks.
//!
//! - `Resource`: bounded pool with clamped mutation
//! - `Combatant`: resources, cards, statuses and modifiers of one side
//! - `EnemyPrototype` / `PlayerTemplate`: catalog templates
//! - `LootTable` / `Rewards`: victory rewards

mod actor;
mod prototype;
mod resource;

pub use actor::Combatant;
pub use prototype::{EnemyPrototype, LootDrop, LootTable, PlayerTemplate, ResourceValues, Rewards};
pub use resource::Resource;
