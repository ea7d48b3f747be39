//! Combat manager - the turn state machine.
//!
//! A `CombatManager` owns both combatants, the combat RNG and the event
//! queue for one encounter. It borrows the status and effect registries
//! read-only, so any number of combats can share one catalog.
//!
//! ## Turn structure
//!
//! - **Turn start** (either side): shuffle deck, draw `hand_size` adjusted
//!   by draw modifiers, refill stamina, fire turn-start statuses.
//! - **Player action loop**: play cards by hand index until the player
//!   passes or someone dies. A bad index is ignored; an unaffordable card
//!   is rejected with a `CardNotPlayable` event. Neither ends the turn.
//! - **Enemy turn**: repeatedly play the first affordable card in hand
//!   order until none is left.
//! - **Turn end**: discard hand, decay statuses, fire turn-end statuses.
//!
//! Death is checked after every card, trigger pass and turn end. When both
//! sides are dead at the same check, the acting side wins: its opponent is
//! treated as having died first.

use tracing::{info, warn};

use super::controller::{CombatView, PlayerChoice, PlayerController};
use super::event::{CardView, CombatEvent, CombatIntent};
use super::phase::CombatPhase;
use crate::combatant::{Combatant, Rewards};
use crate::core::{CombatConfig, GameRng, ResourceKind, Side};
use crate::effects::{EffectContext, EffectRegistry, EffectResolver};
use crate::error::{CombatError, Result};
use crate::status::{trigger_statuses, StatusRegistry, TriggerTiming};

/// Outcome of a `play_card` intent.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayOutcome {
    /// The card was paid for and resolved.
    Resolved,
    /// Not enough stamina; nothing changed.
    NotPlayable,
    /// No card at that index; nothing changed.
    InvalidIndex,
}

/// Final result of a combat.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CombatResult {
    pub victory: bool,
    pub rewards: Rewards,
    pub turns: u32,
}

/// Turn state machine for one encounter.
pub struct CombatManager<'a> {
    statuses: &'a StatusRegistry,
    effects: &'a EffectRegistry,
    config: CombatConfig,
    rng: GameRng,
    player: Combatant,
    enemy: Combatant,
    phase: CombatPhase,
    turn: u32,
    actions_this_turn: usize,
    events: Vec<CombatEvent>,
    dispatched: usize,
    result: Option<CombatResult>,
}

impl<'a> CombatManager<'a> {
    /// Start a combat seeded from `config.seed`.
    pub fn start(
        statuses: &'a StatusRegistry,
        effects: &'a EffectRegistry,
        config: CombatConfig,
        player: Combatant,
        enemy: Combatant,
    ) -> Self {
        let rng = GameRng::new(config.seed);
        Self::start_with_rng(statuses, effects, config, rng, player, enemy)
    }

    /// Start a combat with an explicit RNG stream.
    ///
    /// Both combatants are reset: cards gathered into the deck, statuses
    /// cleared, resources other than gold refilled.
    pub fn start_with_rng(
        statuses: &'a StatusRegistry,
        effects: &'a EffectRegistry,
        config: CombatConfig,
        rng: GameRng,
        mut player: Combatant,
        mut enemy: Combatant,
    ) -> Self {
        player.prepare_for_combat();
        enemy.prepare_for_combat();
        info!(player = %player.name, enemy = %enemy.name, seed = rng.seed(), "combat started");

        let events = vec![CombatEvent::CombatStarted {
            player: player.name.clone(),
            enemy: enemy.name.clone(),
        }];
        Self {
            statuses,
            effects,
            config,
            rng,
            player,
            enemy,
            phase: CombatPhase::PlayerTurnStart,
            turn: 0,
            actions_this_turn: 0,
            events,
            dispatched: 0,
            result: None,
        }
    }

    // === Inbound intents ===

    /// Dispatch an intent. Returns the play outcome for `PlayCard`.
    pub fn handle(&mut self, intent: CombatIntent) -> Result<Option<PlayOutcome>> {
        match intent {
            CombatIntent::StartPlayerTurn => self.start_player_turn().map(|()| None),
            CombatIntent::PlayCard(index) => self.play_card(index).map(Some),
            CombatIntent::EndTurn => self.end_turn().map(|()| None),
        }
    }

    /// Begin the player's turn and open the action phase.
    pub fn start_player_turn(&mut self) -> Result<()> {
        self.expect_phase(CombatPhase::PlayerTurnStart)?;
        self.turn += 1;
        self.actions_this_turn = 0;

        self.start_turn(Side::Player);
        if self.check_combat_end(Side::Player) {
            return Ok(());
        }

        self.phase = CombatPhase::PlayerAction;
        let min_level = self.config.min_effect_level;
        let hand = self
            .player
            .cards()
            .hand()
            .iter()
            .map(|c| CardView::from_card(c, min_level))
            .collect();
        self.events.push(CombatEvent::StartActionPhase { hand });
        Ok(())
    }

    /// Try to play the card at `index` of the player's hand.
    ///
    /// Bad indices and unaffordable cards are normal outcomes, not errors.
    pub fn play_card(&mut self, index: usize) -> Result<PlayOutcome> {
        self.expect_phase(CombatPhase::PlayerAction)?;

        let Some(card) = self.player.cards().card_in_hand(index) else {
            warn!(index, hand = self.player.cards().hand().len(), "invalid hand index");
            return Ok(PlayOutcome::InvalidIndex);
        };
        let view = CardView::from_card(card, self.config.min_effect_level);
        let stamina = self.player.current(ResourceKind::Stamina);

        if !self.player.try_spend(ResourceKind::Stamina, view.cost) {
            warn!(card = %view.name, cost = view.cost, stamina, "card not playable");
            let reason = format!("Not enough stamina: {} needed, {} available", view.cost, stamina);
            self.events
                .push(CombatEvent::CardNotPlayable { card: view, reason });
            return Ok(PlayOutcome::NotPlayable);
        }

        self.resolve_from_hand(Side::Player, index)?;
        self.check_combat_end(Side::Player);
        Ok(PlayOutcome::Resolved)
    }

    /// End the player's turn and run the enemy's.
    ///
    /// Afterwards the phase is `PlayerTurnStart`, or `Over` if someone died.
    pub fn end_turn(&mut self) -> Result<()> {
        self.expect_phase(CombatPhase::PlayerAction)?;

        self.phase = CombatPhase::PlayerTurnEnd;
        self.end_side_turn(Side::Player);
        if self.check_combat_end(Side::Player) {
            return Ok(());
        }

        self.phase = CombatPhase::EnemyTurn;
        self.run_enemy_turn()?;
        if self.result.is_none() {
            self.phase = CombatPhase::PlayerTurnStart;
        }
        Ok(())
    }

    /// Drive the whole combat with a controller.
    ///
    /// Every event is forwarded to `controller.on_event` before its next
    /// decision. The player loop is capped at `max_plays_per_turn`
    /// decisions per turn.
    pub fn run<C: PlayerController + ?Sized>(&mut self, controller: &mut C) -> Result<CombatResult> {
        loop {
            self.dispatch(controller);
            if let Some(result) = &self.result {
                return Ok(result.clone());
            }

            match self.phase {
                CombatPhase::PlayerTurnStart => self.start_player_turn()?,
                CombatPhase::PlayerAction => {
                    if self.actions_this_turn >= self.config.max_plays_per_turn {
                        warn!(turn = self.turn, "player action cap reached, ending turn");
                        self.end_turn()?;
                        continue;
                    }
                    self.actions_this_turn += 1;
                    match controller.choose_action(&self.view()) {
                        PlayerChoice::PlayCard(index) => {
                            self.play_card(index)?;
                        }
                        PlayerChoice::Pass => self.end_turn()?,
                    }
                }
                actual => {
                    return Err(CombatError::InvalidPhase {
                        expected: CombatPhase::PlayerAction,
                        actual,
                    })
                }
            }
        }
    }

    // === Turn machinery ===

    fn split(&mut self, acting: Side) -> (&mut Combatant, &mut Combatant, EffectContext<'_>) {
        let ctx = EffectContext::new(self.statuses, &self.config, &mut self.rng, &mut self.events);
        match acting {
            Side::Player => (&mut self.player, &mut self.enemy, ctx),
            Side::Enemy => (&mut self.enemy, &mut self.player, ctx),
        }
    }

    fn start_turn(&mut self, side: Side) {
        let hand_size = self.config.hand_size;
        let turn = self.turn;
        info!(%side, turn, "turn started");
        self.events.push(CombatEvent::TurnStarted { side, turn });

        let (actor, _, mut ctx) = self.split(side);
        actor.cards_mut().shuffle_deck(ctx.rng);
        let count = actor.cards_to_draw(hand_size);
        actor.draw(count, ctx.rng);
        actor.replenish(ResourceKind::Stamina);
        trigger_statuses(actor, TriggerTiming::TurnStart, &mut ctx);
    }

    fn end_side_turn(&mut self, side: Side) {
        let statuses = self.statuses;
        let (actor, _, mut ctx) = self.split(side);
        actor.discard_hand();
        actor.decrement_statuses(statuses);
        trigger_statuses(actor, TriggerTiming::TurnEnd, &mut ctx);
    }

    fn run_enemy_turn(&mut self) -> Result<()> {
        self.start_turn(Side::Enemy);
        if self.check_combat_end(Side::Enemy) {
            return Ok(());
        }

        let mut plays = 0;
        loop {
            if plays >= self.config.max_plays_per_turn {
                warn!(enemy = %self.enemy.name, plays, "enemy play cap reached");
                break;
            }
            let stamina = self.enemy.current(ResourceKind::Stamina);
            let playable = self
                .enemy
                .cards()
                .hand()
                .iter()
                .position(|c| c.effective_cost() <= stamina);
            let Some(index) = playable else {
                self.events.push(CombatEvent::Message(format!(
                    "{} has no playable cards",
                    self.enemy.name
                )));
                break;
            };

            let cost = self.enemy.cards().hand()[index].effective_cost();
            if !self.enemy.try_spend(ResourceKind::Stamina, cost) {
                break;
            }
            self.resolve_from_hand(Side::Enemy, index)?;
            plays += 1;

            if self.check_combat_end(Side::Enemy) {
                return Ok(());
            }
        }

        self.end_side_turn(Side::Enemy);
        self.events.push(CombatEvent::EndEnemyTurn);
        self.check_combat_end(Side::Enemy);
        Ok(())
    }

    /// Discard the card at `index` and resolve its effects.
    ///
    /// Levels are captured before the discard, which strips modifiers.
    fn resolve_from_hand(&mut self, side: Side, index: usize) -> Result<()> {
        let min_level = self.config.min_effect_level;
        let effects = self.effects;
        let (actor, opponent, mut ctx) = self.split(side);

        let Some(card) = actor.cards().card_in_hand(index) else {
            return Ok(());
        };
        let view = CardView::from_card(card, min_level);
        let leveled = card.effective_effects(min_level);

        actor.discard(view.instance)?;
        info!(%side, card = %view.name, cost = view.cost, "card played");
        EffectResolver::resolve_all(effects, &leveled, actor, opponent, &mut ctx)?;
        ctx.emit(CombatEvent::CardResolved { side, card: view });
        Ok(())
    }

    /// End the combat if anyone is dead. Returns `true` if it is over.
    fn check_combat_end(&mut self, acting: Side) -> bool {
        if self.result.is_some() {
            return true;
        }
        let resume = self.phase;
        self.phase = CombatPhase::CombatCheck;

        let player_dead = self.player.is_dead();
        let enemy_dead = self.enemy.is_dead();
        if !player_dead && !enemy_dead {
            self.phase = resume;
            return false;
        }

        let victory = if player_dead && enemy_dead {
            acting == Side::Player
        } else {
            enemy_dead
        };
        self.finish(victory);
        true
    }

    fn finish(&mut self, victory: bool) {
        let rewards = if victory {
            self.enemy
                .loot()
                .map(|loot| loot.roll(&mut self.rng))
                .unwrap_or_default()
        } else {
            Rewards::default()
        };
        info!(victory, turns = self.turn, gold = rewards.gold, "combat over");

        self.events.push(CombatEvent::EndCombat {
            victory,
            rewards: rewards.clone(),
        });
        self.result = Some(CombatResult {
            victory,
            rewards,
            turns: self.turn,
        });
        self.phase = CombatPhase::Over;
    }

    fn expect_phase(&self, expected: CombatPhase) -> Result<()> {
        if self.phase.is_over() {
            return Err(CombatError::CombatNotActive);
        }
        if self.phase != expected {
            return Err(CombatError::InvalidPhase {
                expected,
                actual: self.phase,
            });
        }
        Ok(())
    }

    fn dispatch<C: PlayerController + ?Sized>(&mut self, controller: &mut C) {
        for event in &self.events[self.dispatched..] {
            controller.on_event(event);
        }
        self.dispatched = self.events.len();
    }

    // === Accessors ===

    /// Read-only view for controllers and front ends.
    #[must_use]
    pub fn view(&self) -> CombatView<'_> {
        CombatView {
            turn: self.turn,
            player: &self.player,
            enemy: &self.enemy,
        }
    }

    #[must_use]
    pub fn phase(&self) -> CombatPhase {
        self.phase
    }

    #[must_use]
    pub fn turn(&self) -> u32 {
        self.turn
    }

    #[must_use]
    pub fn player(&self) -> &Combatant {
        &self.player
    }

    #[must_use]
    pub fn enemy(&self) -> &Combatant {
        &self.enemy
    }

    /// Mutable player access, for setting up scenarios.
    pub fn player_mut(&mut self) -> &mut Combatant {
        &mut self.player
    }

    /// Mutable enemy access, for setting up scenarios.
    pub fn enemy_mut(&mut self) -> &mut Combatant {
        &mut self.enemy
    }

    #[must_use]
    pub fn config(&self) -> &CombatConfig {
        &self.config
    }

    /// Events queued since the last drain.
    #[must_use]
    pub fn events(&self) -> &[CombatEvent] {
        &self.events
    }

    /// Take every queued event.
    pub fn drain_events(&mut self) -> Vec<CombatEvent> {
        self.dispatched = 0;
        std::mem::take(&mut self.events)
    }

    /// Result, once the combat is over.
    #[must_use]
    pub fn result(&self) -> Option<&CombatResult> {
        self.result.as_ref()
    }

    /// Hand the player back for the rest of the quest.
    #[must_use]
    pub fn into_player(self) -> Combatant {
        self.player
    }
}
