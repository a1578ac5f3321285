//! Card catalog for definition lookup.
//!
//! The `CardCatalog` stores every card definition for a match. It keeps
//! insertion order (decks are built in catalog order before shuffling)
//! and provides fast lookup by `CardId`.

use rustc_hash::FxHashMap;

use super::definition::{CardDefinition, CardId};
use crate::core::CatalogError;

/// Catalog of card definitions. Immutable once a match starts.
///
/// ## Example
///
/// ```
/// use duel_ccg::cards::{CardCatalog, CardDefinition, CardId};
///
/// let mut catalog = CardCatalog::new();
/// catalog
///     .register(CardDefinition::creature(CardId::new(7), "Iron Troll", 7, 7, 7))
///     .unwrap();
///
/// let troll = catalog.get(CardId::new(7)).unwrap();
/// assert_eq!(troll.name, "Iron Troll");
/// assert!(catalog.register(troll.clone()).is_err());
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardCatalog {
    cards: FxHashMap<CardId, CardDefinition>,
    order: Vec<CardId>,
}

impl CardCatalog {
    /// Create a new empty catalog.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a card definition.
    pub fn register(&mut self, card: CardDefinition) -> Result<(), CatalogError> {
        if self.cards.contains_key(&card.id) {
            return Err(CatalogError::DuplicateCard(card.id));
        }
        if card.is_creature() && (card.attack.is_none() || card.health.is_none()) {
            return Err(CatalogError::MissingStats(card.id));
        }
        self.order.push(card.id);
        self.cards.insert(card.id, card);
        Ok(())
    }

    /// Build a catalog from an ordered list of definitions.
    pub fn from_definitions(
        cards: impl IntoIterator<Item = CardDefinition>,
    ) -> Result<Self, CatalogError> {
        let mut catalog = Self::new();
        for card in cards {
            catalog.register(card)?;
        }
        if catalog.is_empty() {
            return Err(CatalogError::Empty);
        }
        Ok(catalog)
    }

    /// Parse a JSON array of card definitions.
    pub fn from_json(json: &str) -> Result<Self, CatalogError> {
        let cards: Vec<CardDefinition> = serde_json::from_str(json)?;
        Self::from_definitions(cards)
    }

    /// Get a card definition by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&CardDefinition> {
        self.cards.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.order.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Iterate definitions in registration order.
    pub fn iter(&self) -> impl Iterator<Item = &CardDefinition> {
        self.order.iter().filter_map(|id| self.cards.get(id))
    }
}
