//! Core engine types: shared enums, configuration and RNG.

pub mod config;
pub mod rng;
pub mod types;

pub use config::CombatConfig;
pub use rng::GameRng;
pub use types::{DamageType, ResourceKind, Side};
