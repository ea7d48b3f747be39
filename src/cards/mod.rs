//! Card system: definitions, instances, enchantments and registry.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for card definitions
//! - `CardType`: Attack, spell, skill or item
//! - `CardDefinition`: Immutable prototype with base effect levels
//! - `Card`: Runtime copy carrying leveled effects and cost modifier
//! - `LeveledMechanic`: A level scaled by a resettable modifier
//! - `Enchantment`: Produces a new prototype from an existing one
//! - `CardRegistry`: Card definition lookup

pub mod definition;
pub mod enchantment;
pub mod instance;
pub mod registry;

pub use definition::{CardDefinition, CardId, CardType, EffectEntry};
pub use enchantment::Enchantment;
pub use instance::{Card, InstanceId, LeveledMechanic};
pub use registry::CardRegistry;
