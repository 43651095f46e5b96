//! Abstract column types and the ordered schema map

use serde::ser::{Serialize, SerializeMap, Serializer};
use std::fmt;

/// Abstract column type inferred from sampled values
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AbstractType {
    /// True/false values.
    Boolean,
    /// Whole numbers.
    Integer,
    /// Fractional numbers.
    Float,
    /// Free-form text.
    String,
    /// Strict `YYYY-MM-DD HH:MM:SS` values, assigned only by promotion.
    Timestamp,
    /// Compound, heterogeneous, or evidence-free data. The fallback.
    Variant,
}

impl AbstractType {
    /// Widen to the narrowest type that represents both sides.
    ///
    /// Within the scalar order `Boolean < Integer < Float < String` the
    /// wider side wins. `Variant` absorbs everything and nothing narrows
    /// it back; pairs with no common scalar shape also widen to `Variant`.
    pub fn widen(self, other: AbstractType) -> AbstractType {
        if self == other {
            return self;
        }
        match (self.scalar_rank(), other.scalar_rank()) {
            (Some(a), Some(b)) => {
                if a >= b {
                    self
                } else {
                    other
                }
            }
            _ => AbstractType::Variant,
        }
    }

    fn scalar_rank(self) -> Option<u8> {
        match self {
            AbstractType::Boolean => Some(0),
            AbstractType::Integer => Some(1),
            AbstractType::Float => Some(2),
            AbstractType::String => Some(3),
            AbstractType::Timestamp | AbstractType::Variant => None,
        }
    }
}

impl fmt::Display for AbstractType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AbstractType::Boolean => write!(f, "boolean"),
            AbstractType::Integer => write!(f, "integer"),
            AbstractType::Float => write!(f, "float"),
            AbstractType::String => write!(f, "string"),
            AbstractType::Timestamp => write!(f, "timestamp"),
            AbstractType::Variant => write!(f, "variant"),
        }
    }
}

/// Insertion-ordered mapping from column path to storage type token.
///
/// Order is first-appearance order across the sampled files, not
/// alphabetical; it serializes as a JSON map in that order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Schema {
    columns: Vec<(String, String)>,
}

impl Schema {
    /// Create an empty schema.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a column's type token: replaces in place if the column exists,
    /// appends otherwise. These are exactly the override semantics.
    pub fn set(&mut self, column: impl Into<String>, token: impl Into<String>) {
        let column = column.into();
        let token = token.into();
        match self.columns.iter_mut().find(|(name, _)| *name == column) {
            Some((_, existing)) => *existing = token,
            None => self.columns.push((column, token)),
        }
    }

    /// Look up a column's token.
    pub fn get(&self, column: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, token)| token.as_str())
    }

    /// Number of columns.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the schema has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over `(column path, token)` pairs in schema order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.columns
            .iter()
            .map(|(name, token)| (name.as_str(), token.as_str()))
    }

    /// Convert to a JSON value (an ordered map).
    pub fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}

impl Serialize for Schema {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.columns.len()))?;
        for (name, token) in &self.columns {
            map.serialize_entry(name, token)?;
        }
        map.end()
    }
}

impl FromIterator<(String, String)> for Schema {
    fn from_iter<I: IntoIterator<Item = (String, String)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}
