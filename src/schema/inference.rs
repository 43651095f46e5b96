//! Column type classification over pooled observations

use crate::record::{FlatRecord, Scalar};
use crate::schema::types::AbstractType;
use chrono::NaiveDateTime;
use std::collections::HashMap;
use tracing::debug;

/// Timestamp shape accepted by datetime promotion. Exact matches only.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Pooled per-column observations across every record of every sampled
/// file of one inference call.
///
/// Column order is first-appearance order, which fixes the order of the
/// final schema. A column absent from some records simply has fewer
/// observations; absence itself is not recorded.
#[derive(Debug, Default)]
pub struct ObservationSet {
    order: Vec<String>,
    values: HashMap<String, Vec<Scalar>>,
}

impl ObservationSet {
    /// Create an empty observation set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a column without recording a value.
    ///
    /// Used for columns a file declares but never fills, such as the
    /// header of a delimited file with no data rows. With zero non-null
    /// evidence the column classifies as `Variant`.
    pub fn declare(&mut self, column: &str) {
        if !self.values.contains_key(column) {
            self.order.push(column.to_string());
            self.values.insert(column.to_string(), Vec::new());
        }
    }

    /// Record a single observed value for a column.
    pub fn observe(&mut self, column: &str, value: Scalar) {
        match self.values.get_mut(column) {
            Some(seen) => seen.push(value),
            None => {
                self.order.push(column.to_string());
                self.values.insert(column.to_string(), vec![value]);
            }
        }
    }

    /// Absorb every column of a record.
    pub fn add_record(&mut self, record: FlatRecord) {
        for (column, value) in record {
            self.observe(&column, value);
        }
    }

    /// Column paths in first-appearance order.
    pub fn columns(&self) -> impl Iterator<Item = &str> {
        self.order.iter().map(String::as_str)
    }

    /// All values observed for a column, in observation order.
    pub fn values(&self, column: &str) -> &[Scalar] {
        self.values.get(column).map_or(&[], Vec::as_slice)
    }

    /// Number of observed columns.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    /// Whether no column was observed at all.
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}

/// Column classifier with per-pipeline text handling
#[derive(Debug, Clone, Default)]
pub struct ColumnClassifier {
    /// Lexically coerce raw text into booleans and numbers.
    coerce_text: bool,
}

impl ColumnClassifier {
    /// Create a classifier that takes text values at face value (JSON
    /// values already carry their types).
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable/disable lexical coercion of text values. Delimited files
    /// carry untyped cells, so their pipeline turns this on.
    #[must_use]
    pub fn with_text_coercion(mut self, enabled: bool) -> Self {
        self.coerce_text = enabled;
        self
    }

    /// Classify every observed column, in column order.
    pub fn classify(&self, observations: &ObservationSet) -> Vec<(String, AbstractType)> {
        observations
            .columns()
            .map(|column| {
                let dtype = self.classify_column(observations.values(column));
                (column.to_string(), dtype)
            })
            .collect()
    }

    /// Narrowest type consistent with all non-null values of one column.
    fn classify_column(&self, values: &[Scalar]) -> AbstractType {
        let mut result: Option<AbstractType> = None;
        for value in values {
            let dtype = match value {
                Scalar::Null => continue,
                // Compound data wins outright; no later value narrows it.
                Scalar::Compound => return AbstractType::Variant,
                Scalar::Bool(_) => AbstractType::Boolean,
                Scalar::Int(_) => AbstractType::Integer,
                Scalar::Float(_) => AbstractType::Float,
                Scalar::Text(text) => self.classify_text(text),
            };
            result = Some(match result {
                Some(current) => current.widen(dtype),
                None => dtype,
            });
        }

        // No non-null evidence at all: do not guess a stronger type.
        result.unwrap_or(AbstractType::Variant)
    }

    fn classify_text(&self, text: &str) -> AbstractType {
        if !self.coerce_text {
            return AbstractType::String;
        }
        if text.eq_ignore_ascii_case("true") || text.eq_ignore_ascii_case("false") {
            AbstractType::Boolean
        } else if text.parse::<i64>().is_ok() {
            AbstractType::Integer
        } else if text.parse::<f64>().is_ok() {
            AbstractType::Float
        } else {
            AbstractType::String
        }
    }
}

/// Promote string columns whose every non-null value parses under the
/// strict timestamp format.
///
/// All-or-nothing per column: a single non-conforming value keeps the
/// column a string. Evaluated independently for each column.
pub fn promote_datetime_columns(
    observations: &ObservationSet,
    columns: &mut [(String, AbstractType)],
) {
    for (column, dtype) in columns.iter_mut() {
        if *dtype != AbstractType::String {
            continue;
        }

        let all_timestamps = observations
            .values(column)
            .iter()
            .filter(|value| !value.is_null())
            .all(|value| match value {
                Scalar::Text(text) => {
                    NaiveDateTime::parse_from_str(text, TIMESTAMP_FORMAT).is_ok()
                }
                _ => false,
            });

        if all_timestamps {
            debug!(column = column.as_str(), "promoted string column to timestamp");
            *dtype = AbstractType::Timestamp;
        }
    }
}
