//! The deck engine: holds a validated deck and answers set queries.
//!
//! A *set* is a group of exactly `choose` cards (3 by default) where every
//! schema attribute is either all-same or all-pairwise-distinct across the
//! group. The engine enumerates valid sets and completes partial ones.
//!
//! The engine has two states, empty and loaded. `generate_deck` and
//! `load_deck` are the only transitions into loaded; both replace the deck
//! wholesale, so no partially validated state is ever observable.

use rustc_hash::FxHashSet;
use smallvec::SmallVec;

use crate::cards::{Card, CardId, DimValue};
use crate::deck::{Deck, DimensionSchema, InvalidCardError};

use super::combinations::Combinations;

/// Ids of the member cards of one valid set, in card-list index order.
pub type SetIds = SmallVec<[CardId; 4]>;

/// Engine over a validated deck.
///
/// ## Example
///
/// ```
/// use setfinder::deck::DimensionSchema;
/// use setfinder::engine::DeckEngine;
///
/// let schema = DimensionSchema::new()
///     .with_dimension("color", ["red", "green", "purple"])
///     .with_dimension("number", [1i64, 2, 3]);
///
/// let mut engine = DeckEngine::new();
/// engine.generate_deck(schema);
///
/// assert_eq!(engine.cards().len(), 9);
/// assert_eq!(engine.possible_sets(3).len(), 12);
/// ```
#[derive(Clone, Debug, Default)]
pub struct DeckEngine {
    deck: Deck,
}

impl DeckEngine {
    /// Create an empty engine.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build and adopt the full deck over a schema (cartesian product,
    /// ids 0..N-1 in generation order). Replaces any previous deck.
    pub fn generate_deck(&mut self, schema: DimensionSchema) {
        self.deck = Deck::generate(schema);
    }

    /// Validate and adopt a deck record.
    ///
    /// On failure the current deck is left untouched; the engine never
    /// holds unvalidated cards.
    pub fn load_deck(&mut self, deck: Deck) -> Result<(), InvalidCardError> {
        deck.validate()?;
        self.deck = deck;
        Ok(())
    }

    /// The current deck, in the `{dimensions, cards}` record shape a
    /// writer collaborator serializes.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// Cards of the current deck, in deck order.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.deck.cards
    }

    /// The current dimension schema.
    #[must_use]
    pub fn schema(&self) -> &DimensionSchema {
        &self.deck.dimensions
    }

    /// Check the set rule for a group of cards.
    ///
    /// For every attribute in the schema, the number of distinct values the
    /// group takes must be exactly 1 or exactly the group size. Membership,
    /// not order, determines the result.
    ///
    /// ## Panics
    ///
    /// Panics if a card lacks a schema attribute. Validation only checks
    /// that a card's attributes are a subset of the schema, so a card can
    /// legally omit attributes; passing such a card here is a malformed
    /// group and fails loudly rather than counting a phantom value.
    #[must_use]
    pub fn is_valid_set(&self, group: &[&Card]) -> bool {
        let mut seen: SmallVec<[&DimValue; 8]> = SmallVec::new();
        for attr in self.deck.dimensions.attributes() {
            seen.clear();
            for card in group {
                let value = card.get(attr).unwrap_or_else(|| {
                    panic!("malformed card {}: missing attribute \"{attr}\"", card.id)
                });
                if !seen.contains(&value) {
                    seen.push(value);
                }
            }
            if seen.len() != 1 && seen.len() != group.len() {
                return false;
            }
        }
        true
    }

    /// Enumerate every valid set of `choose` cards in the current deck.
    ///
    /// Candidate groups are the combinations (not permutations) of the card
    /// list, visited in lexicographic card-index order; each valid group is
    /// reported as its member ids in that same order. This fixes the output
    /// order, so repeated calls on unchanged state are identical.
    ///
    /// This is the combinatorial hot path: C(N, choose) candidates, each
    /// checked in O(schema). The group and distinct-value scratch live on
    /// the stack; only retained results allocate.
    #[must_use]
    pub fn possible_sets(&self, choose: usize) -> Vec<SetIds> {
        let cards = &self.deck.cards;
        let mut group: SmallVec<[&Card; 4]> = SmallVec::new();
        let mut sets = Vec::new();

        for combo in Combinations::new(cards.len(), choose) {
            group.clear();
            group.extend(combo.iter().map(|&i| &cards[i]));
            if self.is_valid_set(&group) {
                sets.push(group.iter().map(|c| c.id).collect());
            }
        }
        sets
    }

    /// Find every card that completes a partial group into a valid set.
    ///
    /// The partial group has `choose - 1` cards (typically 2). Candidates
    /// are taken from the deck in deck order, skipping cards already in the
    /// partial group by id; the returned ids follow that deck order.
    #[must_use]
    pub fn complete_set(&self, partial: &[&Card]) -> Vec<CardId> {
        let taken: FxHashSet<CardId> = partial.iter().map(|c| c.id).collect();
        let mut group: SmallVec<[&Card; 4]> = SmallVec::from_slice(partial);
        let mut completions = Vec::new();

        for card in &self.deck.cards {
            if taken.contains(&card.id) {
                continue;
            }
            group.push(card);
            if self.is_valid_set(&group) {
                completions.push(card.id);
            }
            group.pop();
        }
        completions
    }
}
