//! # card-combat
//!
//! Combat resolution engine for a turn-based deck-building RPG card game.
//!
//! ## Design Principles
//!
//! 1. **Data-Driven**: Statuses, cards, enemies, enchantments and quests are
//!    catalog records. The engine hardcodes only the effect vocabulary
//!    (damage types, resources, hand actions) and the mitigation pipeline.
//!
//! 2. **Deterministic**: Every shuffle, random discard and loot roll draws
//!    from one seeded `GameRng` per combat. Same seed plus same choices
//!    gives the same combat.
//!
//! 3. **Typed Interface**: The UI and AI sit behind `CombatIntent`,
//!    `CombatEvent` and the `PlayerController` trait. No callbacks reach
//!    back into the engine.
//!
//! ## Modules
//!
//! - `core`: Damage types, resources, sides, configuration, RNG
//! - `cards`: Card definitions, runtime cards, enchantments
//! - `zones`: Library / deck / hand / discard movement
//! - `effects`: Effect identifiers, registry and resolution
//! - `status`: Status definitions, stacking and turn triggers
//! - `modifiers`: Status-derived modifiers on cards and combatants
//! - `damage`: Mitigation pipeline and per-hit reports
//! - `combatant`: Resources and the per-side combat state
//! - `combat`: The turn state machine and player controllers
//! - `catalog`: Validated data collaborators
//! - `quest`: Chains of encounters

pub mod cards;
pub mod catalog;
pub mod combat;
pub mod combatant;
pub mod core;
pub mod damage;
pub mod effects;
pub mod error;
pub mod modifiers;
pub mod quest;
pub mod status;
pub mod zones;

// Re-export commonly used types
pub use crate::core::{CombatConfig, DamageType, GameRng, ResourceKind, Side};

pub use crate::error::{CombatError, Result};

pub use crate::cards::{Card, CardDefinition, CardId, CardRegistry, CardType, Enchantment};

pub use crate::zones::{CardManager, Zone};

pub use crate::effects::{EffectId, EffectRegistry, EffectResolver, TargetType};

pub use crate::status::{StatusDefinition, StatusId, StatusKind, StatusManager, StatusRegistry};

pub use crate::modifiers::ModifierManager;

pub use crate::damage::{DamageCalculator, DamageReport};

pub use crate::combatant::{Combatant, EnemyPrototype, PlayerTemplate, Rewards};

pub use crate::combat::{
    CombatEvent, CombatIntent, CombatManager, CombatPhase, CombatResult, PlayerController,
};

pub use crate::catalog::{Catalog, CatalogData};

pub use crate::quest::{QuestDefinition, QuestOutcome, QuestRun};
