//! Typed deck validation errors.
//!
//! Validation reports the first violation it finds as structured data
//! (which card, which key or value) rather than a formatted string, so
//! callers can match on the payload.

use thiserror::Error;

use crate::cards::{CardId, DimValue};

/// The offending element of a failed validation: either an attribute key
/// the schema doesn't define, or a value outside the attribute's legal list.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum InvalidData {
    /// Attribute key not present in the schema.
    Key(String),
    /// Value not in the attribute's legal-value list.
    Value(DimValue),
}

impl std::fmt::Display for InvalidData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidData::Key(k) => f.write_str(k),
            InvalidData::Value(v) => write!(f, "{v}"),
        }
    }
}

/// A deck record failed validation during load.
///
/// Carries the first offending `(card, data)` pair found in card-then-
/// attribute order. The engine does not recover from this; the caller
/// decides whether to abort or report.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
#[error("invalid deck: card \"{id}\" contains invalid data \"{data}\"", id = .card.raw())]
pub struct InvalidCardError {
    /// Id of the first offending card.
    pub card: CardId,
    /// The offending key or value.
    pub data: InvalidData,
}
