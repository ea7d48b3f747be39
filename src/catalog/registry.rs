//! Validated, immutable catalog.
//!
//! `Catalog::build` checks every cross reference once: card effects
//! resolve in the effect registry, enemy decks and loot name real cards,
//! quests name real enemies. After that, lookups during play can only fail
//! on ids that came from outside the catalog.

use rustc_hash::FxHashMap;
use tracing::info;

use super::data::CatalogData;
use crate::cards::{CardDefinition, CardId, CardRegistry, EffectEntry, Enchantment};
use crate::combat::CombatManager;
use crate::combatant::{Combatant, EnemyPrototype, PlayerTemplate};
use crate::core::{CombatConfig, GameRng};
use crate::effects::{EffectRegistry, Qualifier};
use crate::error::{CombatError, Result};
use crate::quest::QuestDefinition;
use crate::status::{LevelTarget, StatusKind, StatusRegistry};

/// Read-only tables shared by every combat.
#[derive(Clone, Debug)]
pub struct Catalog {
    statuses: StatusRegistry,
    effects: EffectRegistry,
    cards: CardRegistry,
    enemies: FxHashMap<String, EnemyPrototype>,
    enchantments: FxHashMap<String, Enchantment>,
    quests: FxHashMap<String, QuestDefinition>,
    player: Option<PlayerTemplate>,
}

impl Catalog {
    /// Parse and validate a JSON catalog.
    pub fn from_json(json: &str) -> Result<Self> {
        let data: CatalogData = serde_json::from_str(json)?;
        Self::build(data)
    }

    /// Validate raw records and build every registry.
    pub fn build(data: CatalogData) -> Result<Self> {
        let statuses = StatusRegistry::from_definitions(data.statuses)?;
        for def in statuses.iter() {
            validate_status_kind(def.id.as_str(), &def.kind, &statuses)?;
        }
        let effects = EffectRegistry::build(&statuses);

        let mut cards = CardRegistry::new();
        for card in data.cards {
            validate_effects(card.id.as_str(), &card.effects, &effects)?;
            if card.cost < 0 {
                return Err(CombatError::invalid_record(card.id.as_str(), "negative cost"));
            }
            cards.register(card)?;
        }

        let mut enchantments = FxHashMap::default();
        for ench in data.enchantments {
            validate_effects(&ench.id, &ench.effect_deltas, &effects)?;
            insert_unique(&mut enchantments, "enchantment", ench.id.clone(), ench)?;
        }

        let mut enemies = FxHashMap::default();
        for enemy in data.enemies {
            validate_enemy(&enemy, &cards)?;
            insert_unique(&mut enemies, "enemy", enemy.id.clone(), enemy)?;
        }

        let mut quests = FxHashMap::default();
        for quest in data.quests {
            if quest.encounters.is_empty() {
                return Err(CombatError::invalid_record(&quest.id, "quest has no encounters"));
            }
            if let Some(missing) = quest.encounters.iter().find(|e| !enemies.contains_key(*e)) {
                return Err(CombatError::UnknownEnemy(missing.clone()));
            }
            insert_unique(&mut quests, "quest", quest.id.clone(), quest)?;
        }

        if let Some(player) = &data.player {
            for id in player.deck.iter().chain(&player.library) {
                cards.get(id)?;
            }
        }

        info!(
            statuses = statuses.len(),
            effects = effects.len(),
            cards = cards.len(),
            enemies = enemies.len(),
            quests = quests.len(),
            "catalog built"
        );
        Ok(Self {
            statuses,
            effects,
            cards,
            enemies,
            enchantments,
            quests,
            player: data.player,
        })
    }

    #[must_use]
    pub fn statuses(&self) -> &StatusRegistry {
        &self.statuses
    }

    #[must_use]
    pub fn effects(&self) -> &EffectRegistry {
        &self.effects
    }

    #[must_use]
    pub fn cards(&self) -> &CardRegistry {
        &self.cards
    }

    pub fn card(&self, id: &CardId) -> Result<&CardDefinition> {
        self.cards.get(id)
    }

    pub fn enemy(&self, id: &str) -> Result<&EnemyPrototype> {
        self.enemies
            .get(id)
            .ok_or_else(|| CombatError::UnknownEnemy(id.to_string()))
    }

    pub fn enchantment(&self, id: &str) -> Result<&Enchantment> {
        self.enchantments
            .get(id)
            .ok_or_else(|| CombatError::UnknownEnchantment(id.to_string()))
    }

    pub fn quest(&self, id: &str) -> Result<&QuestDefinition> {
        self.quests
            .get(id)
            .ok_or_else(|| CombatError::UnknownQuest(id.to_string()))
    }

    /// Produce an enchanted prototype of a catalog card.
    pub fn enchant(&self, card: &CardId, enchantment: &str) -> Result<CardDefinition> {
        Ok(self.enchantment(enchantment)?.apply(self.card(card)?))
    }

    /// Fresh enemy for one encounter.
    pub fn instantiate_enemy(&self, id: &str, config: &CombatConfig) -> Result<Combatant> {
        Combatant::enemy(self.enemy(id)?, &self.cards, config)
    }

    /// Build the player from the catalog's player template.
    pub fn new_player(&self, config: &CombatConfig) -> Result<Combatant> {
        let template = self
            .player
            .as_ref()
            .ok_or_else(|| CombatError::invalid_record("player", "catalog has no player template"))?;
        Combatant::player(template, &self.cards, config)
    }

    /// Start a combat against these registries.
    pub fn start_combat(
        &self,
        config: CombatConfig,
        rng: GameRng,
        player: Combatant,
        enemy: Combatant,
    ) -> CombatManager<'_> {
        CombatManager::start_with_rng(&self.statuses, &self.effects, config, rng, player, enemy)
    }
}

fn insert_unique<T>(
    map: &mut FxHashMap<String, T>,
    kind: &'static str,
    id: String,
    value: T,
) -> Result<()> {
    if map.contains_key(&id) {
        return Err(CombatError::DuplicateId { kind, id });
    }
    map.insert(id, value);
    Ok(())
}

fn validate_effects(owner: &str, entries: &[EffectEntry], effects: &EffectRegistry) -> Result<()> {
    for entry in entries {
        effects.get(&entry.effect)?;
        if entry.level < 0 {
            return Err(CombatError::invalid_record(
                owner,
                format!("negative level for {}", entry.effect),
            ));
        }
    }
    Ok(())
}

fn validate_status_kind(id: &str, kind: &StatusKind, statuses: &StatusRegistry) -> Result<()> {
    let StatusKind::EffectLevel {
        target: LevelTarget::Effect { qualifiers, .. },
        ..
    } = kind
    else {
        return Ok(());
    };
    for qualifier in qualifiers {
        if let Qualifier::Status(status) = qualifier {
            if !statuses.contains(status) {
                return Err(CombatError::invalid_record(
                    id,
                    format!("qualifier names unknown status {status}"),
                ));
            }
        }
    }
    Ok(())
}

fn validate_enemy(enemy: &EnemyPrototype, cards: &CardRegistry) -> Result<()> {
    for id in &enemy.deck {
        cards.get(id)?;
    }
    let loot = &enemy.loot;
    if loot.gold_min > loot.gold_max {
        return Err(CombatError::invalid_record(&enemy.id, "gold_min exceeds gold_max"));
    }
    for drop in &loot.drops {
        cards.get(&drop.card)?;
        if !(0.0..=1.0).contains(&drop.chance) {
            return Err(CombatError::invalid_record(
                &enemy.id,
                format!("drop chance {} for {} outside [0, 1]", drop.chance, drop.card),
            ));
        }
    }
    Ok(())
}
