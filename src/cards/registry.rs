//! Card registry for definition lookup.
//!
//! The `CardRegistry` stores all card prototypes of a catalog.
//! It provides fast lookup by `CardId` and supports iteration.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::error::{CombatError, Result};

/// Registry of card definitions.
///
/// ## Example
///
/// ```
/// use card_combat::cards::{CardDefinition, CardId, CardRegistry, CardType};
///
/// let mut registry = CardRegistry::new();
/// registry
///     .register(CardDefinition::new(CardId::new("BLOCK"), "Block", CardType::Skill, 1))
///     .unwrap();
///
/// let found = registry.get(&CardId::new("BLOCK")).unwrap();
/// assert_eq!(found.name, "Block");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, CardDefinition>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition. Duplicate ids are rejected.
    pub fn register(&mut self, card: CardDefinition) -> Result<()> {
        if self.cards.contains_key(&card.id) {
            return Err(CombatError::DuplicateId {
                kind: "card",
                id: card.id.to_string(),
            });
        }
        self.cards.insert(card.id.clone(), card);
        Ok(())
    }

    /// Get a card definition by ID.
    pub fn get(&self, id: &CardId) -> Result<&CardDefinition> {
        self.cards
            .get(id)
            .ok_or_else(|| CombatError::UnknownCard(id.clone()))
    }

    /// Check if a card is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all card definitions.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.cards.values()
    }
}
