//! Modifier manager.
//!
//! Aggregates the contributions of active statuses into four pools:
//!
//! - **effect level**: scales cost or effect levels of matching cards in hand
//! - **max resource**: additive change to a resource's maximum
//! - **draw count**: additive change to cards drawn per turn
//! - **damage taken**: multiplicative change to incoming damage by type
//!
//! Pools are recalculated by a full pass over the status set whenever
//! statuses change or cards move between zones, so a card leaving the hand
//! can never keep a stale bonus.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use super::pool::ModifierPool;
use crate::cards::{Card, CardType};
use crate::core::{CombatConfig, DamageType, ResourceKind};
use crate::status::{LevelTarget, StatusId, StatusKind, StatusManager, StatusRegistry};

/// Floors applied to derived values.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModifierFloors {
    pub min_resource: i32,
    pub min_max_resource: i32,
    pub min_hand_size: usize,
}

impl From<&CombatConfig> for ModifierFloors {
    fn from(config: &CombatConfig) -> Self {
        Self {
            min_resource: config.min_resource,
            min_max_resource: config.min_max_resource,
            min_hand_size: config.min_hand_size,
        }
    }
}

impl Default for ModifierFloors {
    fn default() -> Self {
        Self::from(&CombatConfig::default())
    }
}

/// One entry of the effect-level pool.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EffectLevelModifier {
    pub source: StatusId,
    pub card_type: Option<CardType>,
    pub target: LevelTarget,
    pub contribution: f64,
}

impl EffectLevelModifier {
    fn applies_to(&self, card_type: CardType) -> bool {
        self.card_type.map_or(true, |t| t == card_type)
    }
}

/// Per-combatant modifier pools.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct ModifierManager {
    floors: ModifierFloors,
    effect_levels: Vec<EffectLevelModifier>,
    max_resources: FxHashMap<ResourceKind, ModifierPool<i32>>,
    draw_count: ModifierPool<i32>,
    damage_taken: FxHashMap<DamageType, ModifierPool<f64>>,
}

impl ModifierManager {
    /// Create an empty manager with the given floors.
    #[must_use]
    pub fn new(floors: ModifierFloors) -> Self {
        Self {
            floors,
            ..Self::default()
        }
    }

    /// Floors applied to derived values.
    #[must_use]
    pub fn floors(&self) -> ModifierFloors {
        self.floors
    }

    /// Drop every contribution.
    pub fn clear(&mut self) {
        self.effect_levels.clear();
        self.max_resources.clear();
        self.draw_count.clear();
        self.damage_taken.clear();
    }

    /// Rebuild every pool from the current status set.
    pub fn recalculate(&mut self, statuses: &StatusManager, registry: &StatusRegistry) {
        self.clear();

        for entry in statuses.iter() {
            let Some(kind) = registry.kind(&entry.id) else {
                tracing::warn!(status = %entry.id, "active status missing from registry");
                continue;
            };
            let level = entry.level;

            match kind {
                StatusKind::DamageTaken {
                    damage_type,
                    per_level,
                } => self
                    .damage_taken
                    .entry(*damage_type)
                    .or_default()
                    .add(&entry.id, per_level * f64::from(level)),
                StatusKind::DrawCount { per_level } => {
                    self.draw_count.add(&entry.id, per_level * level);
                }
                StatusKind::MaxResource {
                    resource,
                    per_level,
                } => self
                    .max_resources
                    .entry(*resource)
                    .or_default()
                    .add(&entry.id, per_level * level),
                StatusKind::EffectLevel {
                    card_type,
                    target,
                    per_level,
                } => self.effect_levels.push(EffectLevelModifier {
                    source: entry.id.clone(),
                    card_type: *card_type,
                    target: target.clone(),
                    contribution: per_level * f64::from(level),
                }),
                StatusKind::DamageOverTime { .. }
                | StatusKind::RestoreOverTime { .. }
                | StatusKind::Defense
                | StatusKind::Willpower
                | StatusKind::Hidden
                | StatusKind::Reflect
                | StatusKind::SpellAbsorption => {}
            }
        }
    }

    /// Reset a card and re-apply every matching effect-level contribution.
    pub fn apply_to_card(&self, card: &mut Card) {
        card.reset_modifiers();
        let card_type = card.card_type;
        for modifier in self.effect_levels.iter().filter(|m| m.applies_to(card_type)) {
            match &modifier.target {
                LevelTarget::Cost => card.cost_modifier += modifier.contribution,
                LevelTarget::Effect { action, qualifiers } => {
                    for effect in card
                        .effects
                        .iter_mut()
                        .filter(|e| e.reference.matches(*action, qualifiers))
                    {
                        effect.modifier += modifier.contribution;
                    }
                }
            }
        }
    }

    /// Effective maximum of a resource: `max(base + net, floor)`.
    #[must_use]
    pub fn get_max_resource(&self, kind: ResourceKind, base: i32) -> i32 {
        let net = self.max_resources.get(&kind).map_or(0, ModifierPool::net);
        base.saturating_add(net).max(self.floors.min_max_resource)
    }

    /// Cards to draw this turn: `max(base + net, min_hand_size)`.
    #[must_use]
    pub fn calculate_cards_to_draw(&self, base: usize) -> usize {
        let total = i64::try_from(base).unwrap_or(i64::MAX) + i64::from(self.draw_count.net());
        let floor = i64::try_from(self.floors.min_hand_size).unwrap_or(0);
        usize::try_from(total.max(floor)).unwrap_or(self.floors.min_hand_size)
    }

    /// Incoming damage after weakness/resistance: `max(round((1 + net) * amount), 0)`.
    #[must_use]
    pub fn calculate_damage(&self, damage_type: DamageType, amount: i32) -> i32 {
        let net = self.damage_taken_net(damage_type);
        let scaled = ((1.0 + net) * f64::from(amount)).round();
        (scaled as i32).max(0)
    }

    /// Net multiplicative damage modifier for a type.
    #[must_use]
    pub fn damage_taken_net(&self, damage_type: DamageType) -> f64 {
        self.damage_taken
            .get(&damage_type)
            .map_or(0.0, ModifierPool::net)
    }

    /// Net additive draw-count modifier.
    #[must_use]
    pub fn draw_count_net(&self) -> i32 {
        self.draw_count.net()
    }

    /// Entries of the effect-level pool.
    #[must_use]
    pub fn effect_level_modifiers(&self) -> &[EffectLevelModifier] {
        &self.effect_levels
    }

    /// Lowest value a resource may hold.
    #[must_use]
    pub fn min_resource(&self) -> i32 {
        self.floors.min_resource
    }
}
