//! Deck system: dimension schema, the deck record, generation, validation.
//!
//! ## Key Types
//!
//! - `DimensionSchema`: Ordered attribute -> legal-value-list mapping
//! - `Deck`: Schema + card collection, the `{dimensions, cards}` record
//! - `InvalidCardError`: First validation violation, as structured data
//!
//! A deck is either generated from a schema (full cartesian product) or
//! loaded from an external record and validated before the engine adopts it.

pub mod deck;
pub mod error;
pub mod schema;

pub use deck::Deck;
pub use error::{InvalidCardError, InvalidData};
pub use schema::DimensionSchema;
