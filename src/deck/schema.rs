//! Dimension schema - the universe of legal attribute values.
//!
//! A schema maps each attribute name to its ordered list of legal values.
//! Attribute order is significant: deck generation iterates the first
//! attribute slowest, and set validity walks attributes in schema order.
//! The schema is immutable once adopted by the engine for a session.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

use crate::cards::DimValue;

/// Ordered mapping from attribute name to its legal values.
///
/// Serializes transparently as a JSON object, so a schema file is just
/// `{"color": ["red", "green", "purple"], ...}`. Insertion order is the
/// source order and is preserved.
///
/// ## Example
///
/// ```
/// use setfinder::deck::DimensionSchema;
///
/// let schema = DimensionSchema::new()
///     .with_dimension("color", ["red", "green", "purple"])
///     .with_dimension("number", [1i64, 2, 3]);
///
/// assert!(schema.allows("color", &"red".into()));
/// assert!(!schema.allows("color", &"fuzzy".into()));
/// assert_eq!(schema.deck_size(), 9);
/// ```
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct DimensionSchema(IndexMap<String, Vec<DimValue>>);

impl DimensionSchema {
    /// Create an empty schema.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an attribute with its ordered legal values (builder pattern).
    #[must_use]
    pub fn with_dimension<V>(mut self, name: impl Into<String>, values: V) -> Self
    where
        V: IntoIterator,
        V::Item: Into<DimValue>,
    {
        self.0
            .insert(name.into(), values.into_iter().map(Into::into).collect());
        self
    }

    /// Legal values for an attribute, if the attribute exists.
    #[must_use]
    pub fn values(&self, attr: &str) -> Option<&[DimValue]> {
        self.0.get(attr).map(Vec::as_slice)
    }

    /// Check whether an attribute exists in the schema.
    #[must_use]
    pub fn contains(&self, attr: &str) -> bool {
        self.0.contains_key(attr)
    }

    /// Check whether `value` is a legal value for `attr`.
    #[must_use]
    pub fn allows(&self, attr: &str, value: &DimValue) -> bool {
        self.values(attr).is_some_and(|vs| vs.contains(value))
    }

    /// Iterate attributes and their value lists in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[DimValue])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }

    /// Iterate attribute names in schema order.
    pub fn attributes(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }

    /// Number of attributes.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Check if the schema has no attributes.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Number of cards in the full deck over this schema: the product of
    /// all value-list lengths. An empty schema yields 1 (the empty card),
    /// matching the cartesian product of zero lists.
    #[must_use]
    pub fn deck_size(&self) -> usize {
        self.0.values().map(Vec::len).product()
    }
}
