//! Data collaborators: statuses, cards, enemies, enchantments, quests.
//!
//! - `CatalogData`: raw serde records
//! - `Catalog`: validated registries, built once and shared read-only

mod data;
mod registry;

pub use data::CatalogData;
pub use registry::Catalog;
