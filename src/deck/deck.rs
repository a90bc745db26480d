//! The deck record: a schema plus its card collection.
//!
//! Decks come into existence two ways:
//! - `Deck::generate` builds the full deck over a schema (cartesian product
//!   of the value lists), ids assigned 0..N-1 in generation order.
//! - Deserialization of a `{dimensions, cards}` record, which must pass
//!   `validate` before the engine adopts it.

use serde::{Deserialize, Serialize};

use crate::cards::{Card, CardId};

use super::error::{InvalidCardError, InvalidData};
use super::schema::DimensionSchema;

/// A schema and the concrete cards drawn from it.
///
/// Invariant (for validated decks): every key in every card's `dims` exists
/// in `dimensions`, and every value is a member of that attribute's
/// legal-value list.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Deck {
    /// The dimension schema the cards are drawn from.
    pub dimensions: DimensionSchema,

    /// Cards, in deck order.
    pub cards: Vec<Card>,
}

impl Deck {
    /// Create an empty deck over a schema.
    #[must_use]
    pub fn new(dimensions: DimensionSchema) -> Self {
        Self {
            dimensions,
            cards: Vec::new(),
        }
    }

    /// Append a card.
    ///
    /// Low-level builder used during construction and deserialization; the
    /// engine never mutates an adopted deck through this, it replaces the
    /// whole deck on load.
    pub fn add_card(&mut self, card: Card) {
        self.cards.push(card);
    }

    /// Build the full deck over a schema: one card per combination in the
    /// cartesian product of the value lists.
    ///
    /// The first attribute varies slowest and the last varies fastest, and
    /// ids are assigned 0..N-1 in that order, so identical schemas always
    /// produce identical decks.
    #[must_use]
    pub fn generate(dimensions: DimensionSchema) -> Self {
        let mut deck = Deck::new(dimensions);

        let lengths: Vec<usize> = deck.dimensions.iter().map(|(_, vs)| vs.len()).collect();
        if lengths.contains(&0) {
            // An empty value list empties the whole product.
            return deck;
        }

        let mut indices = vec![0usize; lengths.len()];
        let mut next_id = 0u32;
        loop {
            let dims = deck
                .dimensions
                .iter()
                .zip(&indices)
                .map(|((attr, values), &i)| (attr.to_string(), values[i].clone()))
                .collect();
            deck.cards.push(Card {
                id: CardId::new(next_id),
                dims,
            });
            next_id += 1;

            // Odometer step: advance the last attribute first.
            let mut pos = lengths.len();
            loop {
                if pos == 0 {
                    return deck;
                }
                pos -= 1;
                indices[pos] += 1;
                if indices[pos] < lengths[pos] {
                    break;
                }
                indices[pos] = 0;
            }
        }
    }

    /// Check every card against the schema.
    ///
    /// Walks the card list in order and, within a card, its attribute
    /// mapping in order; the first violation wins and is returned as the
    /// offending `(card, key-or-value)` pair. No aggregation.
    pub fn validate(&self) -> Result<(), InvalidCardError> {
        for card in &self.cards {
            for (attr, value) in &card.dims {
                let Some(legal) = self.dimensions.values(attr) else {
                    return Err(InvalidCardError {
                        card: card.id,
                        data: InvalidData::Key(attr.clone()),
                    });
                };
                if !legal.contains(value) {
                    return Err(InvalidCardError {
                        card: card.id,
                        data: InvalidData::Value(value.clone()),
                    });
                }
            }
        }
        Ok(())
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// Check if the deck has no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }
}
