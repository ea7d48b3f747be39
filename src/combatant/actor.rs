//! Combatants.
//!
//! Player and enemy share one shape: resources, cards, statuses and the
//! modifiers derived from those statuses. Enemies additionally carry a
//! loot table.
//!
//! Any mutation that can change a modifier pool goes through a method here
//! so the pools, the hand and the resource caps stay in step.

use serde::{Deserialize, Serialize};
use tracing::debug;

use super::prototype::{EnemyPrototype, LootTable, PlayerTemplate, ResourceValues};
use super::resource::Resource;
use crate::cards::{CardRegistry, InstanceId};
use crate::combat::CombatEvent;
use crate::core::{CombatConfig, DamageType, GameRng, ResourceKind, Side};
use crate::damage::{DamageCalculator, DamageReport};
use crate::effects::EffectContext;
use crate::error::Result;
use crate::modifiers::{ModifierFloors, ModifierManager};
use crate::status::{RemoveAmount, StatusId, StatusManager, StatusRegistry};
use crate::zones::CardManager;

/// One side of a fight.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Combatant {
    pub name: String,
    pub side: Side,
    resources: [Resource; ResourceKind::COUNT],
    cards: CardManager,
    statuses: StatusManager,
    modifiers: ModifierManager,
    loot: Option<LootTable>,
}

impl Combatant {
    /// Create a combatant with full resources and no cards.
    #[must_use]
    pub fn new(
        name: impl Into<String>,
        side: Side,
        values: ResourceValues,
        config: &CombatConfig,
    ) -> Self {
        let resources = ResourceKind::ALL.map(|kind| {
            let max = match kind {
                // Gold is a purse, not a pool.
                ResourceKind::Gold => i32::MAX,
                _ => values.get(kind),
            };
            Resource::with_current(kind, max, values.get(kind))
        });
        Self {
            name: name.into(),
            side,
            resources,
            cards: CardManager::new(config.max_hand_size),
            statuses: StatusManager::new(),
            modifiers: ModifierManager::new(ModifierFloors::from(config)),
            loot: None,
        }
    }

    /// Instantiate an enemy from its prototype.
    pub fn enemy(
        proto: &EnemyPrototype,
        cards: &CardRegistry,
        config: &CombatConfig,
    ) -> Result<Self> {
        let mut enemy = Self::new(proto.name.clone(), Side::Enemy, proto.resources, config);
        for id in &proto.deck {
            enemy.cards.add_to_deck(cards.get(id)?);
        }
        enemy.loot = Some(proto.loot.clone());
        Ok(enemy)
    }

    /// Build the player from a template.
    pub fn player(
        template: &PlayerTemplate,
        cards: &CardRegistry,
        config: &CombatConfig,
    ) -> Result<Self> {
        let mut player = Self::new(
            template.name.clone(),
            Side::Player,
            template.resources,
            config,
        );
        for id in &template.deck {
            player.cards.add_to_deck(cards.get(id)?);
        }
        for id in &template.library {
            player.cards.add_to_library(cards.get(id)?);
        }
        Ok(player)
    }

    /// Attach a loot table (builder pattern).
    #[must_use]
    pub fn with_loot(mut self, loot: LootTable) -> Self {
        self.loot = Some(loot);
        self
    }

    // === Resources ===

    #[must_use]
    pub fn resource(&self, kind: ResourceKind) -> &Resource {
        &self.resources[kind.index()]
    }

    /// Current value of a resource.
    #[must_use]
    pub fn current(&self, kind: ResourceKind) -> i32 {
        self.resource(kind).current
    }

    /// Maximum of a resource after modifiers.
    #[must_use]
    pub fn effective_max(&self, kind: ResourceKind) -> i32 {
        self.resource(kind).effective_max(&self.modifiers)
    }

    #[must_use]
    pub fn health(&self) -> i32 {
        self.current(ResourceKind::Health)
    }

    #[must_use]
    pub fn is_dead(&self) -> bool {
        self.health() <= 0
    }

    /// Add `amount` to a resource, clamped. Returns the change applied.
    pub fn change_resource(&mut self, kind: ResourceKind, amount: i32) -> i32 {
        let applied = self.resources[kind.index()].change(amount, &self.modifiers);
        debug!(combatant = %self.name, %kind, amount, applied, "resource changed");
        applied
    }

    /// Spend a resource if affordable.
    pub fn try_spend(&mut self, kind: ResourceKind, amount: i32) -> bool {
        self.resources[kind.index()].try_spend(amount, &self.modifiers)
    }

    /// Refill a resource to its effective maximum.
    pub fn replenish(&mut self, kind: ResourceKind) {
        self.resources[kind.index()].replenish(&self.modifiers);
    }

    // === Statuses and modifiers ===

    #[must_use]
    pub fn statuses(&self) -> &StatusManager {
        &self.statuses
    }

    /// Direct status access for the damage pipeline, which only touches
    /// kinds that feed no modifier pool.
    pub(crate) fn statuses_mut(&mut self) -> &mut StatusManager {
        &mut self.statuses
    }

    #[must_use]
    pub fn modifiers(&self) -> &ModifierManager {
        &self.modifiers
    }

    /// Apply (level > 0) or remove (level <= 0) a status.
    ///
    /// Unknown ids are a content bug and fail.
    pub fn change_status(
        &mut self,
        id: &StatusId,
        level: i32,
        registry: &StatusRegistry,
    ) -> Result<()> {
        let def = registry.get(id)?;
        self.statuses.change_status(id, level);
        if def.kind.is_modifier() {
            self.refresh_modifiers(registry);
        }
        Ok(())
    }

    /// Remove some or all levels of a status.
    pub fn remove_status(
        &mut self,
        id: &StatusId,
        amount: RemoveAmount,
        registry: &StatusRegistry,
    ) -> Result<()> {
        let def = registry.get(id)?;
        self.statuses.remove(id, amount);
        if def.kind.is_modifier() {
            self.refresh_modifiers(registry);
        }
        Ok(())
    }

    /// End-of-turn decay of every status.
    pub fn decrement_statuses(&mut self, registry: &StatusRegistry) {
        self.statuses.decrement_statuses();
        self.refresh_modifiers(registry);
    }

    /// Recalculate every modifier pool, re-apply card modifiers and pull
    /// resources back under any lowered cap.
    pub fn refresh_modifiers(&mut self, registry: &StatusRegistry) {
        self.modifiers.recalculate(&self.statuses, registry);
        self.reapply_card_modifiers();
        for resource in &mut self.resources {
            resource.clamp(&self.modifiers);
        }
    }

    /// Re-apply effect-level modifiers to every card in hand.
    pub fn reapply_card_modifiers(&mut self) {
        for card in self.cards.hand_mut() {
            self.modifiers.apply_to_card(card);
        }
    }

    // === Cards ===

    #[must_use]
    pub fn cards(&self) -> &CardManager {
        &self.cards
    }

    /// Zone access outside combat (deck building, rewards).
    pub fn cards_mut(&mut self) -> &mut CardManager {
        &mut self.cards
    }

    /// Cards to draw at turn start after draw modifiers.
    #[must_use]
    pub fn cards_to_draw(&self, hand_size: usize) -> usize {
        self.modifiers.calculate_cards_to_draw(hand_size)
    }

    /// Draw up to `n` cards and apply current modifiers to them.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> bool {
        let ok = self.cards.draw(n, rng);
        self.reapply_card_modifiers();
        ok
    }

    /// Discard a card from hand.
    pub fn discard(&mut self, instance: InstanceId) -> Result<()> {
        self.cards.discard(instance)?;
        self.reapply_card_modifiers();
        Ok(())
    }

    pub fn discard_hand(&mut self) {
        self.cards.discard_hand();
    }

    /// Discard up to `n` random cards from hand.
    pub fn discard_random(&mut self, n: usize, rng: &mut GameRng) -> usize {
        let discarded = self.cards.discard_random(n, rng);
        self.reapply_card_modifiers();
        discarded
    }

    // === Combat lifecycle ===

    /// Reset for a new fight: gather cards, clear statuses and modifiers,
    /// refill everything except gold.
    pub fn prepare_for_combat(&mut self) {
        self.cards.prepare_for_combat();
        self.statuses.clear();
        self.modifiers.clear();
        for kind in ResourceKind::ALL {
            if kind.replenished_at_combat_start() {
                self.replenish(kind);
            }
        }
    }

    /// Run an incoming hit through the damage pipeline and apply it.
    pub fn take_damage(
        &mut self,
        amount: i32,
        damage_type: DamageType,
        attacker: Option<&mut Combatant>,
        ctx: &mut EffectContext<'_>,
    ) -> DamageReport {
        let report =
            DamageCalculator::new(ctx.registry, ctx.config).calculate(self, attacker, damage_type, amount);
        if report.final_amount > 0 {
            self.change_resource(ResourceKind::Health, -report.final_amount);
        }
        debug!(
            defender = %self.name,
            %damage_type,
            incoming = amount,
            dealt = report.final_amount,
            health = self.health(),
            "damage taken"
        );
        ctx.emit(CombatEvent::DamageDealt {
            target: self.side,
            report: report.clone(),
        });
        report
    }

    #[must_use]
    pub fn loot(&self) -> Option<&LootTable> {
        self.loot.as_ref()
    }
}
