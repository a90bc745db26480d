//! # setfinder
//!
//! A deck generation and set-finding engine for attribute-tagged cards.
//!
//! Every card carries a mapping from named attributes ("color", "shape", ...)
//! to values drawn from a dimension schema. A group of cards is a *set* when,
//! for each attribute in the schema, the cards are either all the same or all
//! pairwise distinct in that attribute.
//!
//! ## Design Principles
//!
//! 1. **Schema-Agnostic**: No hardcoded attributes or values. Decks configure
//!    their universe via a `DimensionSchema`.
//!
//! 2. **Validate-Then-Adopt**: The engine never holds a partially validated
//!    deck. Loading either adopts a fully checked deck or fails with the
//!    first violation.
//!
//! 3. **Plain Records At The Edges**: File reading/writing and the CLI are
//!    thin collaborators over the same serde-derived record shapes the
//!    engine consumes and produces.
//!
//! ## Modules
//!
//! - `cards`: Card ids, attribute values, the card record
//! - `deck`: Dimension schema, deck generation and validation
//! - `engine`: Set validity, enumeration, and completion queries
//! - `io`: JSON file collaborators for schemas and decks

pub mod cards;
pub mod deck;
pub mod engine;
pub mod io;

// Re-export commonly used types
pub use crate::cards::{Card, CardId, DimValue, Dims};

pub use crate::deck::{Deck, DimensionSchema, InvalidCardError, InvalidData};

pub use crate::engine::{Combinations, ComboIndices, DeckEngine, SetIds};

pub use crate::io::DeckFileError;
