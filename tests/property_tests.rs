//! Property-based tests for generation and the set rule.

use proptest::prelude::*;

use setfinder::cards::Card;
use setfinder::deck::{Deck, DimensionSchema};
use setfinder::engine::DeckEngine;

/// Strategy: 1..=4 attributes, each with 1..=4 distinct text values.
fn schema_strategy() -> impl Strategy<Value = DimensionSchema> {
    prop::collection::vec(1usize..=4, 1..=4).prop_map(|value_counts| {
        let mut schema = DimensionSchema::new();
        for (i, count) in value_counts.into_iter().enumerate() {
            let values: Vec<String> = (0..count).map(|v| format!("v{v}")).collect();
            schema = schema.with_dimension(format!("d{i}"), values);
        }
        schema
    })
}

proptest! {
    /// Generation yields exactly the cartesian-product count of cards,
    /// with contiguous ids 0..N-1.
    #[test]
    fn generate_count_and_contiguous_ids(schema in schema_strategy()) {
        let expected = schema.deck_size();
        let deck = Deck::generate(schema);

        prop_assert_eq!(deck.len(), expected);
        for (i, card) in deck.cards.iter().enumerate() {
            prop_assert_eq!(card.id.raw() as usize, i);
        }
    }

    /// Every generated deck passes validation against its own schema.
    #[test]
    fn generated_decks_validate(schema in schema_strategy()) {
        let deck = Deck::generate(schema);
        prop_assert!(deck.validate().is_ok());
    }

    /// Generated cards carry every schema attribute, in schema order.
    #[test]
    fn generated_cards_are_complete(schema in schema_strategy()) {
        let deck = Deck::generate(schema);
        let attrs: Vec<&str> = deck.dimensions.attributes().collect();

        for card in &deck.cards {
            let card_attrs: Vec<&str> = card.dims.keys().map(String::as_str).collect();
            prop_assert_eq!(&card_attrs, &attrs);
        }
    }

    /// Set validity depends on group membership, not order.
    #[test]
    fn valid_set_is_permutation_symmetric(
        indices in prop::sample::subsequence((0..27usize).collect::<Vec<_>>(), 3),
    ) {
        let mut engine = DeckEngine::new();
        engine.generate_deck(
            DimensionSchema::new()
                .with_dimension("a", ["x", "y", "z"])
                .with_dimension("b", ["x", "y", "z"])
                .with_dimension("c", ["x", "y", "z"]),
        );
        let cards = engine.cards();

        let group: Vec<&Card> = indices.iter().map(|&i| &cards[i]).collect();
        let baseline = engine.is_valid_set(&group);

        // All 6 orderings of 3 cards.
        for perm in [
            [0, 1, 2], [0, 2, 1], [1, 0, 2], [1, 2, 0], [2, 0, 1], [2, 1, 0],
        ] {
            let reordered: Vec<&Card> = perm.iter().map(|&p| group[p]).collect();
            prop_assert_eq!(engine.is_valid_set(&reordered), baseline);
        }
    }

    /// Enumeration on unchanged state is idempotent: same sets, same order.
    #[test]
    fn possible_sets_is_idempotent(schema in schema_strategy()) {
        // Cap the deck so C(N, 3) stays small.
        prop_assume!(schema.deck_size() <= 64);

        let mut engine = DeckEngine::new();
        engine.generate_deck(schema);

        prop_assert_eq!(engine.possible_sets(3), engine.possible_sets(3));
    }

    /// Every enumerated set really satisfies the validity rule, and its ids
    /// appear in ascending card-index order.
    #[test]
    fn enumerated_sets_are_valid(schema in schema_strategy()) {
        prop_assume!(schema.deck_size() <= 64);

        let mut engine = DeckEngine::new();
        engine.generate_deck(schema);
        let cards = engine.cards();

        for set in engine.possible_sets(3) {
            let group: Vec<&Card> =
                set.iter().map(|id| &cards[id.raw() as usize]).collect();
            prop_assert!(engine.is_valid_set(&group));
            prop_assert!(set.windows(2).all(|w| w[0] < w[1]));
        }
    }
}
