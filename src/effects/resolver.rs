//! Effect resolution - applying effects to combatants.
//!
//! The `EffectResolver` turns a leveled effect into mutations of the
//! source or its opponent. Shared read-only tables and the per-combat
//! mutable services (RNG, event queue) travel in an [`EffectContext`].

use tracing::debug;

use super::effect::{Effect, EffectDefinition, HandAction};
use super::id::EffectId;
use super::registry::EffectRegistry;
use crate::combat::CombatEvent;
use crate::combatant::Combatant;
use crate::core::{CombatConfig, GameRng, ResourceKind};
use crate::error::Result;
use crate::status::StatusRegistry;

/// Context for resolving effects.
pub struct EffectContext<'a> {
    /// Status definitions, for status effects and the damage pipeline.
    pub registry: &'a StatusRegistry,
    /// Rule constants.
    pub config: &'a CombatConfig,
    /// Combat RNG (random discards).
    pub rng: &'a mut GameRng,
    /// Outbound notifications.
    pub events: &'a mut Vec<CombatEvent>,
}

impl<'a> EffectContext<'a> {
    /// Create a new context.
    pub fn new(
        registry: &'a StatusRegistry,
        config: &'a CombatConfig,
        rng: &'a mut GameRng,
        events: &'a mut Vec<CombatEvent>,
    ) -> Self {
        Self {
            registry,
            config,
            rng,
            events,
        }
    }

    /// Queue an outbound notification.
    pub fn emit(&mut self, event: CombatEvent) {
        self.events.push(event);
    }
}

/// Resolves effects on combatants.
pub struct EffectResolver;

impl EffectResolver {
    /// Resolve a list of leveled effects in order.
    ///
    /// Stops as soon as either combatant is dead. Returns how many effects
    /// were resolved.
    pub fn resolve_all(
        effects: &EffectRegistry,
        leveled: &[(EffectId, i32)],
        source: &mut Combatant,
        opponent: &mut Combatant,
        ctx: &mut EffectContext<'_>,
    ) -> Result<usize> {
        let mut resolved = 0;
        for (id, level) in leveled {
            if source.is_dead() || opponent.is_dead() {
                break;
            }
            let def = effects.get(id)?;
            Self::resolve(def, source, opponent, *level, ctx)?;
            resolved += 1;
        }
        Ok(resolved)
    }

    /// Resolve a single effect at `level`.
    pub fn resolve(
        def: &EffectDefinition,
        source: &mut Combatant,
        opponent: &mut Combatant,
        level: i32,
        ctx: &mut EffectContext<'_>,
    ) -> Result<()> {
        debug!(effect = %def.id, level, source = %source.name, "resolving effect");
        let (target, actor) = def.target.select(source, opponent);

        match &def.effect {
            Effect::Nothing => {}

            Effect::Pickpocket => {
                if let Some(thief) = actor {
                    let stolen = target.current(ResourceKind::Gold).min(level.max(0));
                    target.change_resource(ResourceKind::Gold, -stolen);
                    thief.change_resource(ResourceKind::Gold, stolen);
                    debug!(stolen, from = %target.name, "pickpocket");
                }
            }

            Effect::Damage { damage_type } => {
                target.take_damage(level, *damage_type, actor, ctx);
            }

            Effect::ChangeStatus { status, remove } => {
                let level = if *remove { -level } else { level };
                target.change_status(status, level, ctx.registry)?;
            }

            Effect::ChangeResource { resource, drain } => {
                let amount = if *drain { -level } else { level };
                target.change_resource(*resource, amount);
            }

            Effect::Hand(action) => {
                let count = usize::try_from(level).unwrap_or(0);
                if count == 0 {
                    return Ok(());
                }
                match action {
                    HandAction::Draw => {
                        target.draw(count, ctx.rng);
                    }
                    HandAction::Discard => {
                        target.discard_random(count, ctx.rng);
                    }
                }
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId, CardType};
    use crate::combatant::ResourceValues;
    use crate::core::Side;
    use crate::status::{StatusDefinition, StatusKind};

    fn statuses() -> StatusRegistry {
        StatusRegistry::from_definitions([StatusDefinition::new(
            "DEFENSE",
            "Defense",
            StatusKind::Defense,
        )])
        .unwrap()
    }

    fn combatant(name: &str, side: Side, gold: i32) -> Combatant {
        let mut combatant = Combatant::new(
            name,
            side,
            ResourceValues::default()
                .with_health(20)
                .with_stamina(5)
                .with_gold(gold),
            &CombatConfig::default(),
        );
        let filler = CardDefinition::new(CardId::new("FILLER"), "Filler", CardType::Skill, 0);
        for _ in 0..6 {
            combatant.cards_mut().add_to_deck(&filler);
        }
        combatant
    }

    fn resolve(
        ids: &[(&str, i32)],
        source: &mut Combatant,
        opponent: &mut Combatant,
    ) -> (usize, Vec<CombatEvent>) {
        let statuses = statuses();
        let effects = EffectRegistry::build(&statuses);
        let config = CombatConfig::default();
        let mut rng = GameRng::new(9);
        let mut events = Vec::new();
        let leveled: Vec<(EffectId, i32)> = ids
            .iter()
            .map(|(id, level)| (id.parse().unwrap(), *level))
            .collect();
        let mut ctx = EffectContext::new(&statuses, &config, &mut rng, &mut events);
        let resolved =
            EffectResolver::resolve_all(&effects, &leveled, source, opponent, &mut ctx).unwrap();
        (resolved, events)
    }

    #[test]
    fn test_self_and_target_routing() {
        let mut hero = combatant("Hero", Side::Player, 0);
        let mut rat = combatant("Rat", Side::Enemy, 0);

        resolve(
            &[("APPLY_DEFENSE_SELF", 3), ("DRAIN_STAMINA_TARGET", 2)],
            &mut hero,
            &mut rat,
        );

        assert_eq!(hero.statuses().level(&"DEFENSE".into()), 3);
        assert_eq!(rat.statuses().level(&"DEFENSE".into()), 0);
        assert_eq!(rat.current(ResourceKind::Stamina), 3);
        assert_eq!(hero.current(ResourceKind::Stamina), 5);
    }

    #[test]
    fn test_damage_emits_report() {
        let mut hero = combatant("Hero", Side::Player, 0);
        let mut rat = combatant("Rat", Side::Enemy, 0);

        let (_, events) = resolve(&[("DAMAGE_PHYSICAL_TARGET", 6)], &mut hero, &mut rat);

        assert_eq!(rat.health(), 14);
        assert!(matches!(
            events.as_slice(),
            [CombatEvent::DamageDealt { target: Side::Enemy, report }] if report.final_amount == 6
        ));
    }

    #[test]
    fn test_stops_once_someone_dies() {
        let mut hero = combatant("Hero", Side::Player, 0);
        let mut rat = combatant("Rat", Side::Enemy, 0);

        let (resolved, _) = resolve(
            &[
                ("DAMAGE_PHYSICAL_TARGET", 25),
                ("RESTORE_HEALTH_TARGET", 10),
            ],
            &mut hero,
            &mut rat,
        );

        assert_eq!(resolved, 1);
        assert!(rat.is_dead());
    }

    #[test]
    fn test_pickpocket_is_capped_by_target_gold() {
        let mut hero = combatant("Hero", Side::Player, 2);
        let mut rat = combatant("Rat", Side::Enemy, 4);

        resolve(&[("PICKPOCKET_GOLD_TARGET", 10)], &mut hero, &mut rat);

        assert_eq!(hero.current(ResourceKind::Gold), 6);
        assert_eq!(rat.current(ResourceKind::Gold), 0);
    }

    #[test]
    fn test_hand_draw_and_discard() {
        let mut hero = combatant("Hero", Side::Player, 0);
        let mut rat = combatant("Rat", Side::Enemy, 0);
        rat.draw(4, &mut GameRng::new(1));

        resolve(
            &[("DRAW_CARDS_SELF", 3), ("DISCARD_CARDS_TARGET", 3)],
            &mut hero,
            &mut rat,
        );

        assert_eq!(hero.cards().hand().len(), 3);
        assert_eq!(rat.cards().hand().len(), 1);
        assert_eq!(rat.cards().discard_pile().len(), 3);
    }

    #[test]
    fn test_zero_level_hand_effect_is_a_no_op() {
        let mut hero = combatant("Hero", Side::Player, 0);
        let mut rat = combatant("Rat", Side::Enemy, 0);

        resolve(&[("DRAW_CARDS_SELF", 0)], &mut hero, &mut rat);
        assert!(hero.cards().hand().is_empty());
    }
}
