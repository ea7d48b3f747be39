//! Damage calculation pipeline.
//!
//! Stages run in a fixed order and the pipeline stops as soon as the
//! remaining damage reaches zero:
//!
//! 1. crit from the attacker's hidden status
//! 2. weakness / resistance from the defender's damage-taken pool
//! 3. physical: defense blocks point for point and is consumed
//!    non-physical: willpower, then (attacker present) reflect and spell
//!    absorption
//!
//! The calculator mutates statuses it consumes (hidden, defense, reflect,
//! absorption), the attacker's health on a bounce and the defender's
//! magicka on absorption. It never touches the defender's health; the
//! caller applies `final_amount`.

use super::report::{DamageReport, DamageStage};
use crate::combatant::Combatant;
use crate::core::{CombatConfig, DamageType, ResourceKind};
use crate::status::{StatusKind, StatusRegistry};

fn is_hidden(kind: &StatusKind) -> bool {
    matches!(kind, StatusKind::Hidden)
}

fn is_defense(kind: &StatusKind) -> bool {
    matches!(kind, StatusKind::Defense)
}

fn is_willpower(kind: &StatusKind) -> bool {
    matches!(kind, StatusKind::Willpower)
}

fn is_reflect(kind: &StatusKind) -> bool {
    matches!(kind, StatusKind::Reflect)
}

fn is_absorption(kind: &StatusKind) -> bool {
    matches!(kind, StatusKind::SpellAbsorption)
}

/// Runs the mitigation pipeline for one hit.
#[derive(Clone, Copy, Debug)]
pub struct DamageCalculator<'a> {
    registry: &'a StatusRegistry,
    config: &'a CombatConfig,
}

impl<'a> DamageCalculator<'a> {
    #[must_use]
    pub fn new(registry: &'a StatusRegistry, config: &'a CombatConfig) -> Self {
        Self { registry, config }
    }

    /// Mitigate `amount` of `damage_type` aimed at `defender`.
    ///
    /// `attacker` is `None` for environmental and self-inflicted damage.
    pub fn calculate(
        &self,
        defender: &mut Combatant,
        mut attacker: Option<&mut Combatant>,
        damage_type: DamageType,
        amount: i32,
    ) -> DamageReport {
        let mut report = DamageReport::new(damage_type, amount);
        if amount <= 0 {
            return report.finish(0);
        }

        let damage = self.crit(&mut report, attacker.as_deref_mut(), amount);
        if damage <= 0 {
            return report.finish(0);
        }

        let damage = self.weakness(&mut report, defender, damage_type, damage);
        if damage <= 0 {
            return report.finish(0);
        }

        if damage_type.is_physical() {
            let damage = self.defense(&mut report, defender, damage);
            return report.finish(damage);
        }

        let damage = self.willpower(&mut report, defender, damage);
        if damage <= 0 {
            return report.finish(0);
        }

        let Some(attacker) = attacker else {
            return report.finish(damage);
        };

        let damage = self.reflect(&mut report, defender, attacker, damage);
        if damage <= 0 {
            return report.finish(0);
        }

        let damage = self.absorb(&mut report, defender, damage);
        report.finish(damage)
    }

    fn crit(
        &self,
        report: &mut DamageReport,
        attacker: Option<&mut Combatant>,
        damage: i32,
    ) -> i32 {
        let Some(attacker) = attacker else {
            return damage;
        };
        let hidden = attacker.statuses().level_of_kind(self.registry, is_hidden);
        if hidden <= 0 {
            return damage;
        }

        let multiplier = 1.0 + f64::from(hidden) * self.config.hidden_crit_per_level;
        let damage = (f64::from(damage) * multiplier).round() as i32;
        // Hidden breaks on the first hit.
        attacker.statuses_mut().remove_kind(self.registry, is_hidden);
        report.push(DamageStage::Crit {
            multiplier,
            amount: damage,
        });
        damage
    }

    fn weakness(
        &self,
        report: &mut DamageReport,
        defender: &Combatant,
        damage_type: DamageType,
        damage: i32,
    ) -> i32 {
        let net = defender.modifiers().damage_taken_net(damage_type);
        if net == 0.0 {
            return damage;
        }
        let damage = defender.modifiers().calculate_damage(damage_type, damage);
        report.push(DamageStage::Weakness {
            net,
            amount: damage,
        });
        damage
    }

    fn defense(&self, report: &mut DamageReport, defender: &mut Combatant, damage: i32) -> i32 {
        let defense = defender.statuses().level_of_kind(self.registry, is_defense);
        if defense <= 0 {
            return damage;
        }
        let blocked = defense.min(damage);
        defender
            .statuses_mut()
            .consume_kind(self.registry, is_defense, blocked);
        let damage = damage - blocked;
        report.push(DamageStage::Defense {
            blocked,
            amount: damage,
        });
        damage
    }

    fn willpower(&self, report: &mut DamageReport, defender: &Combatant, damage: i32) -> i32 {
        let level = defender
            .statuses()
            .level_of_kind(self.registry, is_willpower);
        if level <= 0 {
            return damage;
        }
        let percent = level
            .saturating_mul(self.config.willpower_percent_per_level)
            .clamp(0, self.config.max_willpower_percent);
        let scaled = i64::from(damage) * i64::from(100 - percent) / 100;
        let damage = i32::try_from(scaled).unwrap_or(i32::MAX);
        report.push(DamageStage::Willpower {
            percent,
            amount: damage,
        });
        damage
    }

    /// Reflect never recurses: the attacker's own reflect can only cancel
    /// the bounce, it never sends anything back a second time.
    fn reflect(
        &self,
        report: &mut DamageReport,
        defender: &mut Combatant,
        attacker: &mut Combatant,
        damage: i32,
    ) -> i32 {
        let defender_reflect = defender.statuses().level_of_kind(self.registry, is_reflect);
        if defender_reflect <= 0 {
            return damage;
        }

        let reflected = damage.min(defender_reflect);
        defender
            .statuses_mut()
            .consume_kind(self.registry, is_reflect, reflected);

        let attacker_reflect = attacker.statuses().level_of_kind(self.registry, is_reflect);
        let countered = attacker_reflect.min(reflected);
        if countered > 0 {
            attacker
                .statuses_mut()
                .consume_kind(self.registry, is_reflect, countered);
        }

        let bounced = reflected - countered;
        if bounced > 0 {
            attacker.change_resource(ResourceKind::Health, -bounced);
        }

        let damage = damage - reflected;
        report.push(DamageStage::Reflect {
            reflected,
            countered,
            bounced,
            amount: damage,
        });
        damage
    }

    fn absorb(&self, report: &mut DamageReport, defender: &mut Combatant, damage: i32) -> i32 {
        let level = defender
            .statuses()
            .level_of_kind(self.registry, is_absorption);
        if level <= 0 {
            return damage;
        }
        let absorbed = damage.min(level);
        defender
            .statuses_mut()
            .consume_kind(self.registry, is_absorption, absorbed);
        defender.change_resource(ResourceKind::Magicka, absorbed);

        let damage = damage - absorbed;
        report.push(DamageStage::SpellAbsorption {
            absorbed,
            amount: damage,
        });
        damage
    }
}
