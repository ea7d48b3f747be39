//! Effect system for card actions.
//!
//! - `EffectId`: composite action + subject + target identifier
//! - `Effect` / `EffectDefinition`: what resolving an effect does
//! - `EffectRegistry`: every resolvable effect, enumerated once
//! - `EffectResolver`: applies effects to combatants
//!
//! Card effects and effect-level statuses refer to effects by id. Status
//! modifiers select card effects with `EffectId::matches` rather than by
//! exact id, so one modifier can scale a whole family of effects.

mod effect;
mod id;
mod registry;
mod resolver;
mod targeting;

pub use effect::{Effect, EffectDefinition, HandAction};
pub use id::{EffectAction, EffectId, EffectSubject, Qualifier};
pub use registry::EffectRegistry;
pub use resolver::{EffectContext, EffectResolver};
pub use targeting::TargetType;
