//! Quest runner: fights a quest's encounters back to back.
//!
//! The player carries over between combats (gold, library, enchanted
//! cards); every combat gets its own RNG forked from the quest stream, so a
//! quest replays identically from the same seed and choices.

use tracing::info;

use super::definition::{QuestDefinition, QuestOutcome};
use crate::catalog::Catalog;
use crate::combat::{CombatResult, PlayerController};
use crate::combatant::{Combatant, Rewards};
use crate::core::{CombatConfig, GameRng, ResourceKind};
use crate::error::Result;

/// Runs one quest against a catalog.
///
/// ## Example
///
/// ```
/// use card_combat::catalog::{Catalog, CatalogData};
/// use card_combat::cards::{CardDefinition, CardType};
/// use card_combat::combat::GreedyController;
/// use card_combat::combatant::{EnemyPrototype, PlayerTemplate, ResourceValues};
/// use card_combat::core::{CombatConfig, DamageType};
/// use card_combat::effects::{EffectId, TargetType};
/// use card_combat::quest::{QuestDefinition, QuestRun};
///
/// let strike = CardDefinition::new("STRIKE".into(), "Strike", CardType::Attack, 1)
///     .with_effect(EffectId::damage(DamageType::Physical, TargetType::Opponent), 5);
/// let data = CatalogData::new()
///     .with_card(strike)
///     .with_enemy(EnemyPrototype {
///         id: "RAT".into(),
///         name: "Rat".into(),
///         resources: ResourceValues::default().with_health(4).with_stamina(0),
///         deck: vec!["STRIKE".into()],
///         loot: Default::default(),
///     })
///     .with_quest(QuestDefinition::new("CELLAR", "Cellar").with_encounter("RAT").with_reward_gold(10))
///     .with_player(PlayerTemplate {
///         name: "Hero".into(),
///         resources: ResourceValues::default(),
///         deck: vec!["STRIKE".into(); 5],
///         library: Vec::new(),
///     });
/// let catalog = Catalog::build(data).unwrap();
/// let config = CombatConfig::default();
///
/// let player = catalog.new_player(&config).unwrap();
/// let mut run = QuestRun::new(&catalog, "CELLAR", config).unwrap();
/// let outcome = run.run(player, &mut GreedyController).unwrap();
/// assert!(outcome.completed);
/// assert_eq!(outcome.gold_earned, 10);
/// ```
pub struct QuestRun<'a> {
    catalog: &'a Catalog,
    quest: &'a QuestDefinition,
    config: CombatConfig,
    rng: GameRng,
}

impl<'a> QuestRun<'a> {
    /// Prepare a run seeded from `config.seed`.
    pub fn new(catalog: &'a Catalog, quest_id: &str, config: CombatConfig) -> Result<Self> {
        let quest = catalog.quest(quest_id)?;
        let rng = GameRng::new(config.seed);
        Ok(Self {
            catalog,
            quest,
            config,
            rng,
        })
    }

    #[must_use]
    pub fn quest(&self) -> &QuestDefinition {
        self.quest
    }

    /// Fight every encounter in order, stopping at the first defeat.
    pub fn run<C: PlayerController + ?Sized>(
        &mut self,
        mut player: Combatant,
        controller: &mut C,
    ) -> Result<QuestOutcome> {
        let mut encounters_won = 0;
        let mut gold_earned = 0;
        let mut cards_earned = Vec::new();

        for (index, enemy_id) in self.quest.encounters.iter().enumerate() {
            let enemy = self.catalog.instantiate_enemy(enemy_id, &self.config)?;
            info!(quest = %self.quest.id, encounter = index + 1, enemy = %enemy.name, "encounter");

            let mut combat =
                self.catalog
                    .start_combat(self.config.clone(), self.rng.fork(), player, enemy);
            let CombatResult { victory, rewards, .. } = combat.run(controller)?;
            player = combat.into_player();

            if !victory {
                info!(quest = %self.quest.id, encounters_won, "quest failed");
                return Ok(QuestOutcome {
                    completed: false,
                    encounters_won,
                    gold_earned,
                    cards_earned,
                    player,
                });
            }
            encounters_won += 1;
            gold_earned += self.grant(&mut player, &rewards)?;
            cards_earned.extend(rewards.cards);
        }

        player.change_resource(ResourceKind::Gold, self.quest.reward_gold);
        gold_earned += self.quest.reward_gold;
        info!(quest = %self.quest.id, gold_earned, "quest completed");

        Ok(QuestOutcome {
            completed: true,
            encounters_won,
            gold_earned,
            cards_earned,
            player,
        })
    }

    /// Add loot to the player. Returns the gold actually gained.
    fn grant(&self, player: &mut Combatant, rewards: &Rewards) -> Result<i32> {
        for id in &rewards.cards {
            player.cards_mut().add_to_library(self.catalog.card(id)?);
        }
        Ok(player.change_resource(ResourceKind::Gold, rewards.gold))
    }
}
