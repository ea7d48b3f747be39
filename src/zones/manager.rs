//! Card manager for a combatant's card zones.
//!
//! Every card copy lives in exactly one of four zones:
//! - **library**: owned but not in the combat deck
//! - **deck**: draw pile; the top is the end of the vector
//! - **hand**
//! - **discard**
//!
//! Drawing and discarding are the only zone transitions during combat. A
//! card keeps its [`InstanceId`] through every transition.

use serde::{Deserialize, Serialize};
use strum::Display;
use tracing::debug;

use crate::cards::{Card, CardDefinition, InstanceId};
use crate::core::GameRng;
use crate::error::{CombatError, Result};

/// A card zone.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
pub enum Zone {
    Library,
    Deck,
    Hand,
    Discard,
}

/// Owns a combatant's cards across zones.
///
/// ## Usage
///
/// ```
/// use card_combat::cards::{CardDefinition, CardId, CardType};
/// use card_combat::core::GameRng;
/// use card_combat::zones::CardManager;
///
/// let strike = CardDefinition::new(CardId::new("STRIKE"), "Strike", CardType::Attack, 1);
/// let mut cards = CardManager::new(10);
/// for _ in 0..3 {
///     cards.add_to_deck(&strike);
/// }
///
/// let mut rng = GameRng::new(42);
/// assert!(cards.draw(2, &mut rng));
/// assert_eq!(cards.hand().len(), 2);
/// assert_eq!(cards.deck().len(), 1);
/// ```
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
pub struct CardManager {
    library: Vec<Card>,
    deck: Vec<Card>,
    hand: Vec<Card>,
    discard: Vec<Card>,
    next_instance: u32,
    max_hand_size: usize,
    reshuffles: u32,
}

impl CardManager {
    /// Create an empty manager with a hand cap.
    #[must_use]
    pub fn new(max_hand_size: usize) -> Self {
        Self {
            max_hand_size,
            ..Self::default()
        }
    }

    fn alloc(&mut self, def: &CardDefinition) -> Card {
        let instance = InstanceId::new(self.next_instance);
        self.next_instance += 1;
        def.instantiate(instance)
    }

    /// Add a fresh copy of a prototype to the deck.
    pub fn add_to_deck(&mut self, def: &CardDefinition) -> InstanceId {
        let card = self.alloc(def);
        let id = card.instance;
        self.deck.push(card);
        id
    }

    /// Add a fresh copy of a prototype to the library.
    pub fn add_to_library(&mut self, def: &CardDefinition) -> InstanceId {
        let card = self.alloc(def);
        let id = card.instance;
        self.library.push(card);
        id
    }

    /// Move a card from the library into the deck.
    pub fn move_to_deck(&mut self, instance: InstanceId) -> Result<()> {
        let card = take(&mut self.library, instance)?;
        self.deck.push(card);
        Ok(())
    }

    /// Move a card from the deck back into the library.
    pub fn move_to_library(&mut self, instance: InstanceId) -> Result<()> {
        let card = take(&mut self.deck, instance)?;
        self.library.push(card);
        Ok(())
    }

    /// Gather hand and discard back into the deck and strip all modifiers.
    pub fn prepare_for_combat(&mut self) {
        self.deck.append(&mut self.hand);
        self.deck.append(&mut self.discard);
        for card in &mut self.deck {
            card.reset_modifiers();
        }
        self.reshuffles = 0;
    }

    /// Shuffle the deck.
    pub fn shuffle_deck(&mut self, rng: &mut GameRng) {
        rng.shuffle(&mut self.deck);
    }

    fn reshuffle_discard(&mut self, rng: &mut GameRng) {
        self.deck.append(&mut self.discard);
        rng.shuffle(&mut self.deck);
        self.reshuffles += 1;
        debug!(deck = self.deck.len(), "discard reshuffled into deck");
    }

    /// Draw up to `n` cards.
    ///
    /// Returns `false` if the hand filled up before `n` cards were drawn.
    /// Running out of both deck and discard is not a failure; drawing just
    /// stops short.
    pub fn draw(&mut self, n: usize, rng: &mut GameRng) -> bool {
        for _ in 0..n {
            if self.hand.len() >= self.max_hand_size {
                debug!(hand = self.hand.len(), "hand full, draw aborted");
                return false;
            }
            if self.deck.is_empty() {
                if self.discard.is_empty() {
                    break;
                }
                self.reshuffle_discard(rng);
            }
            let Some(mut card) = self.deck.pop() else {
                break;
            };
            card.reset_modifiers();
            debug!(card = %card.name, instance = %card.instance, "card drawn");
            self.hand.push(card);
        }
        true
    }

    /// Move a card from hand to discard, stripping its modifiers.
    pub fn discard(&mut self, instance: InstanceId) -> Result<()> {
        let mut card = take(&mut self.hand, instance)
            .map_err(|_| CombatError::CardNotInHand(instance))?;
        card.reset_modifiers();
        debug!(card = %card.name, instance = %card.instance, "card discarded");
        self.discard.push(card);
        Ok(())
    }

    /// Discard the whole hand.
    pub fn discard_hand(&mut self) {
        for mut card in self.hand.drain(..) {
            card.reset_modifiers();
            self.discard.push(card);
        }
    }

    /// Discard up to `n` random cards from hand. Returns how many were discarded.
    pub fn discard_random(&mut self, n: usize, rng: &mut GameRng) -> usize {
        let count = n.min(self.hand.len());
        for _ in 0..count {
            let index = rng.gen_index(self.hand.len());
            let mut card = self.hand.remove(index);
            card.reset_modifiers();
            self.discard.push(card);
        }
        count
    }

    /// Zone currently holding a card.
    #[must_use]
    pub fn zone_of(&self, instance: InstanceId) -> Option<Zone> {
        [
            (Zone::Library, &self.library),
            (Zone::Deck, &self.deck),
            (Zone::Hand, &self.hand),
            (Zone::Discard, &self.discard),
        ]
        .into_iter()
        .find(|(_, cards)| cards.iter().any(|c| c.instance == instance))
        .map(|(zone, _)| zone)
    }

    /// Cards in a zone.
    #[must_use]
    pub fn cards_in(&self, zone: Zone) -> &[Card] {
        match zone {
            Zone::Library => &self.library,
            Zone::Deck => &self.deck,
            Zone::Hand => &self.hand,
            Zone::Discard => &self.discard,
        }
    }

    #[must_use]
    pub fn library(&self) -> &[Card] {
        &self.library
    }

    #[must_use]
    pub fn deck(&self) -> &[Card] {
        &self.deck
    }

    #[must_use]
    pub fn hand(&self) -> &[Card] {
        &self.hand
    }

    /// Mutable hand, for re-applying modifiers.
    pub fn hand_mut(&mut self) -> &mut [Card] {
        &mut self.hand
    }

    #[must_use]
    pub fn discard_pile(&self) -> &[Card] {
        &self.discard
    }

    /// Card at a hand index.
    #[must_use]
    pub fn card_in_hand(&self, index: usize) -> Option<&Card> {
        self.hand.get(index)
    }

    /// Total cards owned across all zones.
    #[must_use]
    pub fn total_cards(&self) -> usize {
        self.library.len() + self.deck.len() + self.hand.len() + self.discard.len()
    }

    /// Discard-into-deck reshuffles since the last `prepare_for_combat`.
    #[must_use]
    pub fn reshuffles(&self) -> u32 {
        self.reshuffles
    }

    #[must_use]
    pub fn max_hand_size(&self) -> usize {
        self.max_hand_size
    }
}

fn take(zone: &mut Vec<Card>, instance: InstanceId) -> Result<Card> {
    let index = zone
        .iter()
        .position(|c| c.instance == instance)
        .ok_or(CombatError::CardNotInZone(instance))?;
    Ok(zone.remove(index))
}
