//! The immutable card catalog.
//!
//! Content is compiled into the binary: [`data`] holds the
//! hand-authored decks, and [`Catalog::build`] stitches them into one
//! list with catalog-wide sequential ids. Consumers share a single
//! memoized instance through [`Catalog::shared`]; nothing mutates a
//! catalog after construction, so it is handed around without locking.

mod data;

use once_cell::sync::Lazy;
use tracing::debug;
use wonders_model::{Card, CardId, Category};

static SHARED: Lazy<Catalog> = Lazy::new(Catalog::build);

/// The full ordered card collection.
#[derive(Debug, Clone)]
pub struct Catalog {
    cards: Vec<Card>,
}

impl Catalog {
    /// The process-wide catalog, built on first use and read-only
    /// thereafter.
    pub fn shared() -> &'static Catalog {
        &SHARED
    }

    /// Builds the catalog from scratch. Pure and deterministic: every
    /// call yields identical cards with identical ids, because ids are
    /// assigned by walking the decks in [`Category::ALL`] order.
    pub fn build() -> Catalog {
        let mut cards = Vec::new();
        let mut next_id = 1u32;
        for category in Category::ALL {
            for mut card in data::deck(category) {
                debug_assert!(
                    !card.translations.is_empty(),
                    "card {}/{} has no translations",
                    category,
                    card.order
                );
                card.id = CardId::new(next_id);
                next_id += 1;
                cards.push(card);
            }
        }
        Catalog { cards }
    }

    /// Every card, in ascending id order.
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Looks a card up by its catalog-wide id.
    pub fn card(&self, id: CardId) -> Option<&Card> {
        self.cards.iter().find(|card| card.id == id)
    }

    /// Cards of one category, in ascending `order`.
    pub fn cards_in(&self, category: Category) -> Vec<&Card> {
        let mut deck: Vec<&Card> = self
            .cards
            .iter()
            .filter(|card| card.category == category)
            .collect();
        deck.sort_by_key(|card| card.order);
        deck
    }

    /// Cards for a category named in either language, any casing, with
    /// or without diacritics.
    ///
    /// Unknown names yield an empty deck rather than an error; callers
    /// render an empty grid and the miss is only logged.
    pub fn cards_for_category(&self, name_or_alias: &str) -> Vec<&Card> {
        match Category::from_alias(name_or_alias) {
            Some(category) => self.cards_in(category),
            None => {
                debug!(name = name_or_alias, "unknown category requested");
                Vec::new()
            }
        }
    }

    /// The declared category list, in deck order.
    pub fn categories(&self) -> &'static [Category] {
        &Category::ALL
    }

    pub fn len(&self) -> usize {
        self.cards.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
