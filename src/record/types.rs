//! Record and scalar value types

/// A single cell value observed in a sampled file.
///
/// `Text` stays raw: whether `"1"` means the integer one is a
/// classification decision, not a parsing one.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// Missing or explicitly null value.
    Null,
    /// JSON boolean.
    Bool(bool),
    /// Whole number.
    Int(i64),
    /// Fractional number.
    Float(f64),
    /// Raw text content.
    Text(String),
    /// Nested array or other structure that is not flattened further.
    Compound,
}

impl Scalar {
    /// Whether this value carries no evidence for classification.
    pub fn is_null(&self) -> bool {
        matches!(self, Scalar::Null)
    }
}

/// One flat record: an ordered list of `(column path, value)` pairs.
///
/// Order is the order columns were encountered in the source row or
/// document, which drives first-appearance ordering in the final schema.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FlatRecord {
    columns: Vec<(String, Scalar)>,
}

impl FlatRecord {
    /// Create an empty record.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a column observation.
    pub fn push(&mut self, column: impl Into<String>, value: Scalar) {
        self.columns.push((column.into(), value));
    }

    /// Number of columns in this record.
    pub fn len(&self) -> usize {
        self.columns.len()
    }

    /// Whether the record has no columns.
    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    /// Iterate over `(column path, value)` pairs in order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.columns.iter().map(|(name, value)| (name.as_str(), value))
    }
}

impl IntoIterator for FlatRecord {
    type Item = (String, Scalar);
    type IntoIter = std::vec::IntoIter<(String, Scalar)>;

    fn into_iter(self) -> Self::IntoIter {
        self.columns.into_iter()
    }
}

impl FromIterator<(String, Scalar)> for FlatRecord {
    fn from_iter<I: IntoIterator<Item = (String, Scalar)>>(iter: I) -> Self {
        Self {
            columns: iter.into_iter().collect(),
        }
    }
}
