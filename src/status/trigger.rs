//! On-turn status hooks.
//!
//! Damage-over-time ticks at turn start; restore-over-time at turn end.
//! Passive kinds never trigger.

use tracing::debug;

use super::definition::{StatusKind, TriggerTiming};
use crate::combat::CombatEvent;
use crate::combatant::Combatant;
use crate::effects::EffectContext;

/// Fire every status on `subject` whose hook runs at `timing`.
///
/// Statuses fire in insertion order from a snapshot of ids taken up front.
/// Iteration stops the moment the subject dies; later statuses do not
/// fire. Returns how many statuses fired.
pub fn trigger_statuses(
    subject: &mut Combatant,
    timing: TriggerTiming,
    ctx: &mut EffectContext<'_>,
) -> usize {
    let registry = ctx.registry;
    let mut fired = 0;

    for id in subject.statuses().ids() {
        if subject.is_dead() {
            debug!(combatant = %subject.name, "died mid-trigger, remaining statuses skipped");
            break;
        }
        let level = subject.statuses().level(&id);
        if level <= 0 {
            continue;
        }
        let Some(kind) = registry.kind(&id) else {
            continue;
        };
        if kind.timing() != Some(timing) {
            continue;
        }

        match kind {
            StatusKind::DamageOverTime { damage_type } => {
                subject.take_damage(level, *damage_type, None, ctx);
            }
            StatusKind::RestoreOverTime { resource } => {
                subject.change_resource(*resource, level);
            }
            _ => continue,
        }

        debug!(combatant = %subject.name, status = %id, level, "status triggered");
        ctx.emit(CombatEvent::StatusTriggered {
            side: subject.side,
            status: id.clone(),
            level,
        });
        fired += 1;
    }
    fired
}
