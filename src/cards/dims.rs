//! Attribute values for cards.
//!
//! Cards have attributes like "color", "shape", "number", etc.
//! These are schema-specific - the engine doesn't interpret them.
//!
//! ## DimValue Types
//!
//! - `Text`: Strings ("red", "oval")
//! - `Int`: Numbers (1, 2, 3)
//! - `Bool`: Flags (shaded or not)
//!
//! Values serialize untagged, so a JSON schema can mix `"red"`, `3`, and
//! `true` in its value lists without any wrapper objects.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Value for a card attribute.
///
/// Equality and hashing are derived, so values can be deduplicated when
/// counting distinct values across a group. Floats are not legal values.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum DimValue {
    /// Boolean flag.
    Bool(bool),
    /// Integer value.
    Int(i64),
    /// Text value.
    Text(String),
}

impl DimValue {
    /// Get as bool if this is a Bool value.
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            DimValue::Bool(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as integer if this is an Int value.
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            DimValue::Int(v) => Some(*v),
            _ => None,
        }
    }

    /// Get as string reference if this is a Text value.
    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            DimValue::Text(s) => Some(s),
            _ => None,
        }
    }
}

impl std::fmt::Display for DimValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DimValue::Bool(v) => write!(f, "{v}"),
            DimValue::Int(v) => write!(f, "{v}"),
            DimValue::Text(s) => f.write_str(s),
        }
    }
}

// Convenient From implementations
impl From<bool> for DimValue {
    fn from(v: bool) -> Self {
        DimValue::Bool(v)
    }
}

impl From<i64> for DimValue {
    fn from(v: i64) -> Self {
        DimValue::Int(v)
    }
}

impl From<i32> for DimValue {
    fn from(v: i32) -> Self {
        DimValue::Int(v as i64)
    }
}

impl From<String> for DimValue {
    fn from(v: String) -> Self {
        DimValue::Text(v)
    }
}

impl From<&str> for DimValue {
    fn from(v: &str) -> Self {
        DimValue::Text(v.to_string())
    }
}

/// A card's attribute mapping, in insertion order.
///
/// Order matters: deck validation reports the first violation in the card's
/// own attribute order, so the map must preserve its source order.
pub type Dims = IndexMap<String, DimValue>;
