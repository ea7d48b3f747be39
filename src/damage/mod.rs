//! Damage mitigation.
//!
//! - `DamageCalculator`: the ordered crit / weakness / defense / willpower /
//!   reflect / absorption pipeline
//! - `DamageReport`: per-stage breakdown emitted with every hit

mod calculator;
mod report;

pub use calculator::DamageCalculator;
pub use report::{DamageReport, DamageStage};
