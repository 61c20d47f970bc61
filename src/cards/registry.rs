//! Card registry for template lookup.
//!
//! The `CardRegistry` stores one template per card id. Battles never
//! share template instances: `instantiate` hands out a fresh clone every
//! time, so per-battle pile movement cannot leak between runs.

use rustc_hash::FxHashMap;

use super::definition::{Card, CardType};
use crate::core::{CardId, LoadError};

/// Registry of card templates.
///
/// ## Example
///
/// ```
/// use deck_battle::cards::{Card, CardRegistry, CardType, Cost};
/// use deck_battle::core::CardId;
///
/// let mut registry = CardRegistry::new();
/// registry
///     .register(Card::new("1", "Strike", Cost::Fixed(1), CardType::Attack))
///     .unwrap();
///
/// let strike = registry.instantiate(&CardId::new("1")).unwrap();
/// assert_eq!(strike.name, "Strike");
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card template.
    ///
    /// Fails if a card with the same id already exists.
    pub fn register(&mut self, card: Card) -> Result<(), LoadError> {
        if self.cards.contains_key(&card.id) {
            return Err(LoadError::Duplicate {
                kind: "card",
                id: card.id.to_string(),
            });
        }
        self.cards.insert(card.id.clone(), card);
        Ok(())
    }

    /// Get a template by id.
    #[must_use]
    pub fn get(&self, id: &CardId) -> Option<&Card> {
        self.cards.get(id)
    }

    /// Fresh copy of a template.
    #[must_use]
    pub fn instantiate(&self, id: &CardId) -> Option<Card> {
        self.cards.get(id).cloned()
    }

    /// Build a deck from a list of ids, in order.
    pub fn build_deck(&self, ids: &[CardId]) -> Result<Vec<Card>, LoadError> {
        ids.iter()
            .map(|id| {
                self.instantiate(id)
                    .ok_or_else(|| LoadError::UnknownCard(id.clone()))
            })
            .collect()
    }

    /// Check if a card id is registered.
    #[must_use]
    pub fn contains(&self, id: &CardId) -> bool {
        self.cards.contains_key(id)
    }

    /// Get the number of registered cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the registry is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all templates.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }

    /// Find templates by type.
    pub fn find_by_type(&self, card_type: CardType) -> impl Iterator<Item = &Card> {
        self.cards.values().filter(move |c| c.card_type == card_type)
    }
}
