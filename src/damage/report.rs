//! Damage reports.
//!
//! A report records what each mitigation stage did to one hit. It is an
//! observation for the presentation layer; the authoritative number is
//! `final_amount`.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::DamageType;

/// One stage of the damage pipeline that changed the amount.
///
/// `amount` is the damage left after the stage.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub enum DamageStage {
    /// Attacker's hidden status turned the hit into a critical.
    Crit { multiplier: f64, amount: i32 },

    /// Defender's weakness (> 0) or resistance (< 0) to the damage type.
    Weakness { net: f64, amount: i32 },

    /// Physical damage blocked by defense.
    Defense { blocked: i32, amount: i32 },

    /// Percentage reduction from willpower.
    Willpower { percent: i32, amount: i32 },

    /// Damage turned back at the attacker. `countered` is the part the
    /// attacker's own reflect cancelled; `bounced` is what hit the attacker.
    Reflect {
        reflected: i32,
        countered: i32,
        bounced: i32,
        amount: i32,
    },

    /// Damage converted into defender magicka.
    SpellAbsorption { absorbed: i32, amount: i32 },
}

/// Full breakdown of one damage resolution.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct DamageReport {
    pub damage_type: DamageType,
    pub incoming: i32,
    pub stages: Vec<DamageStage>,
    pub final_amount: i32,
}

impl DamageReport {
    /// Start a report for an incoming hit.
    #[must_use]
    pub fn new(damage_type: DamageType, incoming: i32) -> Self {
        Self {
            damage_type,
            incoming,
            stages: Vec::new(),
            final_amount: 0,
        }
    }

    pub(crate) fn push(&mut self, stage: DamageStage) {
        debug!(damage_type = %self.damage_type, ?stage, "damage stage");
        self.stages.push(stage);
    }

    pub(crate) fn finish(mut self, amount: i32) -> Self {
        self.final_amount = amount.max(0);
        self
    }

    /// Damage the attacker took from reflect, if any.
    #[must_use]
    pub fn bounced(&self) -> i32 {
        self.stages
            .iter()
            .map(|s| match s {
                DamageStage::Reflect { bounced, .. } => *bounced,
                _ => 0,
            })
            .sum()
    }

    /// Magicka the defender gained from absorption, if any.
    #[must_use]
    pub fn absorbed(&self) -> i32 {
        self.stages
            .iter()
            .map(|s| match s {
                DamageStage::SpellAbsorption { absorbed, .. } => *absorbed,
                _ => 0,
            })
            .sum()
    }

    /// Check if the hit was fully mitigated.
    #[must_use]
    pub fn was_negated(&self) -> bool {
        self.final_amount == 0
    }
}
