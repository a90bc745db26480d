//! JSON file collaborators for schemas and decks.
//!
//! The engine only consumes and produces in-memory records; reading and
//! writing files is this module's concern. A deck read here is *not*
//! validated - hand it to `DeckEngine::load_deck`, which validates before
//! adopting.
//!
//! Record shapes:
//! - Schema file: `{"color": ["red", "green", "purple"], ...}`
//! - Deck file: `{"dimensions": {...}, "cards": [{"id": 0, "dims": {...}}, ...]}`

use std::fs;
use std::path::Path;

use thiserror::Error;

use crate::deck::{Deck, DimensionSchema};

/// Failure reading or writing a schema or deck file.
#[derive(Debug, Error)]
pub enum DeckFileError {
    /// The file could not be read or written.
    #[error("deck file i/o failed: {0}")]
    Io(#[from] std::io::Error),

    /// The file contents were not valid JSON for the expected record shape.
    #[error("deck file is not valid json: {0}")]
    Json(#[from] serde_json::Error),
}

/// Read a dimension schema record from a JSON file.
pub fn read_schema(path: impl AsRef<Path>) -> Result<DimensionSchema, DeckFileError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Read a deck record (schema + cards) from a JSON file.
pub fn read_deck(path: impl AsRef<Path>) -> Result<Deck, DeckFileError> {
    let text = fs::read_to_string(path)?;
    Ok(serde_json::from_str(&text)?)
}

/// Write a deck to a JSON file in the `{dimensions, cards}` record shape,
/// pretty-printed.
pub fn write_deck(path: impl AsRef<Path>, deck: &Deck) -> Result<(), DeckFileError> {
    let text = serde_json::to_string_pretty(deck)?;
    fs::write(path, text)?;
    Ok(())
}
