//! Status-driven modifiers.
//!
//! - `ModifierPool`: per-source contributions to one derived quantity
//! - `ModifierManager`: the four pools of a combatant and the derived-value
//!   calculations built on them

mod manager;
mod pool;

pub use manager::{EffectLevelModifier, ModifierFloors, ModifierManager};
pub use pool::ModifierPool;
