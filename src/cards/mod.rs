//! Card system: ids, attribute values, and the card record.
//!
//! ## Key Types
//!
//! - `CardId`: Identifier for a card within a deck
//! - `DimValue`: A single attribute value (text, integer, or flag)
//! - `Dims`: A card's attribute mapping, in insertion order
//! - `Card`: Pure data holder `{id, dims}`
//!
//! Cards carry no behavior beyond construction and lookup; whether a card's
//! attributes are legal is decided against a `DimensionSchema` during deck
//! validation, not here.

pub mod card;
pub mod dims;

pub use card::{Card, CardId};
pub use dims::{DimValue, Dims};
