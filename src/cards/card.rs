//! The card record - an id plus its attribute mapping.
//!
//! `Card` is a pure data holder. It exposes its id and its dims and a
//! serde view in the `{"id": n, "dims": {...}}` record shape; there is no
//! behavior beyond construction and lookup.

use serde::{Deserialize, Serialize};

use super::dims::{DimValue, Dims};

/// Unique identifier for a card within a deck.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A single card: an id and its attribute mapping.
///
/// ## Example
///
/// ```
/// use setfinder::cards::{Card, CardId};
///
/// let card = Card::new(CardId::new(0))
///     .with_dim("color", "red")
///     .with_dim("number", 2i64);
///
/// assert_eq!(card.get("color").and_then(|v| v.as_text()), Some("red"));
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Card {
    /// Unique within the containing deck.
    pub id: CardId,

    /// Attribute mapping, in source order.
    pub dims: Dims,
}

impl Card {
    /// Create a card with no attributes.
    #[must_use]
    pub fn new(id: CardId) -> Self {
        Self {
            id,
            dims: Dims::default(),
        }
    }

    /// Add an attribute (builder pattern).
    #[must_use]
    pub fn with_dim(mut self, attr: impl Into<String>, value: impl Into<DimValue>) -> Self {
        self.dims.insert(attr.into(), value.into());
        self
    }

    /// Get an attribute value.
    #[must_use]
    pub fn get(&self, attr: &str) -> Option<&DimValue> {
        self.dims.get(attr)
    }
}
