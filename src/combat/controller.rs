//! Player controllers.
//!
//! The player's action loop blocks on a controller for each decision:
//! - `ScriptedController`: replays a fixed list of choices (tests, demos)
//! - `GreedyController`: plays the first affordable card
//! - `RandomController`: picks uniformly among affordable cards or passing

use std::collections::VecDeque;

use crate::cards::Card;
use crate::combatant::Combatant;
use crate::core::{GameRng, ResourceKind};

use super::event::CombatEvent;

// =============================================================================
// Views and choices
// =============================================================================

/// Read-only view of the combat offered to a controller.
#[derive(Clone, Copy, Debug)]
pub struct CombatView<'v> {
    pub turn: u32,
    pub player: &'v Combatant,
    pub enemy: &'v Combatant,
}

impl<'v> CombatView<'v> {
    /// The player's hand.
    #[must_use]
    pub fn hand(&self) -> &'v [Card] {
        self.player.cards().hand()
    }

    /// Check if the card at `index` is affordable right now.
    #[must_use]
    pub fn is_playable(&self, index: usize) -> bool {
        self.hand()
            .get(index)
            .is_some_and(|c| c.effective_cost() <= self.player.current(ResourceKind::Stamina))
    }

    /// Indices of every affordable card.
    pub fn playable_indices(&self) -> impl Iterator<Item = usize> + 'v {
        let stamina = self.player.current(ResourceKind::Stamina);
        self.hand()
            .iter()
            .enumerate()
            .filter(move |(_, c)| c.effective_cost() <= stamina)
            .map(|(i, _)| i)
    }
}

/// One decision of the player's action loop.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PlayerChoice {
    /// Play the card at this hand index.
    PlayCard(usize),
    /// End the turn.
    Pass,
}

/// Source of player decisions.
pub trait PlayerController {
    /// Choose the next action. Called until the player passes or the
    /// combat ends.
    fn choose_action(&mut self, view: &CombatView<'_>) -> PlayerChoice;

    /// Observe a combat event.
    fn on_event(&mut self, _event: &CombatEvent) {}
}

// =============================================================================
// Implementations
// =============================================================================

/// Replays a fixed list of choices, then passes forever.
#[derive(Clone, Debug, Default)]
pub struct ScriptedController {
    choices: VecDeque<PlayerChoice>,
    /// Every event observed, in order.
    pub events: Vec<CombatEvent>,
}

impl ScriptedController {
    #[must_use]
    pub fn new(choices: impl IntoIterator<Item = PlayerChoice>) -> Self {
        Self {
            choices: choices.into_iter().collect(),
            events: Vec::new(),
        }
    }

    /// Choices not yet consumed.
    #[must_use]
    pub fn remaining(&self) -> usize {
        self.choices.len()
    }
}

impl PlayerController for ScriptedController {
    fn choose_action(&mut self, _view: &CombatView<'_>) -> PlayerChoice {
        self.choices.pop_front().unwrap_or(PlayerChoice::Pass)
    }

    fn on_event(&mut self, event: &CombatEvent) {
        self.events.push(event.clone());
    }
}

/// Plays the first affordable card in hand order; passes when none is.
#[derive(Clone, Copy, Debug, Default)]
pub struct GreedyController;

impl PlayerController for GreedyController {
    fn choose_action(&mut self, view: &CombatView<'_>) -> PlayerChoice {
        view.playable_indices()
            .next()
            .map_or(PlayerChoice::Pass, PlayerChoice::PlayCard)
    }
}

/// Picks uniformly among every affordable card and passing.
#[derive(Clone, Debug)]
pub struct RandomController {
    rng: GameRng,
}

impl RandomController {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            rng: GameRng::new(seed),
        }
    }
}

impl PlayerController for RandomController {
    fn choose_action(&mut self, view: &CombatView<'_>) -> PlayerChoice {
        let playable: Vec<usize> = view.playable_indices().collect();
        let pick = self.rng.gen_index(playable.len() + 1);
        playable
            .get(pick)
            .copied()
            .map_or(PlayerChoice::Pass, PlayerChoice::PlayCard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{CardDefinition, CardId, CardType};
    use crate::combatant::ResourceValues;
    use crate::core::{CombatConfig, Side};

    fn with_hand(costs: &[i32], stamina: i32) -> Combatant {
        let mut hero = Combatant::new(
            "Hero",
            Side::Player,
            ResourceValues::default()
                .with_health(10)
                .with_stamina(stamina),
            &CombatConfig::default(),
        );
        for (i, cost) in costs.iter().enumerate() {
            let def = CardDefinition::new(CardId::new(format!("C{i}")), "Card", CardType::Skill, *cost);
            hero.cards_mut().add_to_deck(&def);
        }
        hero.cards_mut().draw(costs.len(), &mut GameRng::new(0));
        hero
    }

    fn enemy() -> Combatant {
        Combatant::new(
            "Rat",
            Side::Enemy,
            ResourceValues::default().with_health(5),
            &CombatConfig::default(),
        )
    }

    #[test]
    fn test_playable_indices() {
        let hero = with_hand(&[3, 1, 2, 5], 2);
        let rat = enemy();
        let view = CombatView {
            turn: 1,
            player: &hero,
            enemy: &rat,
        };

        let mut playable: Vec<usize> = view.playable_indices().collect();
        playable.sort_unstable();
        assert_eq!(playable.len(), 2);
        assert!(!view.is_playable(9));
        assert!(playable.iter().all(|&i| view.is_playable(i)));
    }

    #[test]
    fn test_greedy_passes_when_broke() {
        let hero = with_hand(&[4, 6], 3);
        let rat = enemy();
        let view = CombatView {
            turn: 1,
            player: &hero,
            enemy: &rat,
        };
        assert_eq!(GreedyController.choose_action(&view), PlayerChoice::Pass);
    }

    #[test]
    fn test_scripted_then_pass() {
        let hero = with_hand(&[0], 0);
        let rat = enemy();
        let view = CombatView {
            turn: 1,
            player: &hero,
            enemy: &rat,
        };
        let mut script = ScriptedController::new([PlayerChoice::PlayCard(0)]);

        assert_eq!(script.choose_action(&view), PlayerChoice::PlayCard(0));
        assert_eq!(script.remaining(), 0);
        assert_eq!(script.choose_action(&view), PlayerChoice::Pass);
    }

    #[test]
    fn test_random_only_picks_playable() {
        let hero = with_hand(&[0, 9, 0, 9], 1);
        let rat = enemy();
        let view = CombatView {
            turn: 1,
            player: &hero,
            enemy: &rat,
        };
        let mut random = RandomController::new(4);
        for _ in 0..50 {
            match random.choose_action(&view) {
                PlayerChoice::PlayCard(i) => assert!(view.is_playable(i)),
                PlayerChoice::Pass => {}
            }
        }
    }
}
