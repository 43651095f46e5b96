//! JSON document parsing and flattening

use crate::error::{Error, Result};
use crate::record::types::{FlatRecord, Scalar};
use crate::sample::SampledObject;
use serde_json::Value;

/// Parsed contents of one JSON file
#[derive(Debug, Clone, PartialEq)]
pub struct JsonDocument {
    /// Flattened records: one per array element, or one for the whole
    /// document.
    pub records: Vec<FlatRecord>,
    /// Whether the document's root value is an array.
    pub top_level_array: bool,
}

/// Decode one sampled object as a single JSON document.
///
/// A root array explodes into one record per element; any other root
/// becomes one record.
pub fn parse(object: &SampledObject) -> Result<JsonDocument> {
    let value: Value = serde_json::from_slice(&object.data)
        .map_err(|e| Error::json_parse(object.identifier(), e.to_string()))?;

    Ok(match value {
        Value::Array(elements) => JsonDocument {
            records: elements.iter().map(flatten).collect(),
            top_level_array: true,
        },
        other => JsonDocument {
            records: vec![flatten(&other)],
            top_level_array: false,
        },
    })
}

/// Flatten one document into a single flat record.
///
/// Nested objects merge into the parent under dot-joined paths
/// (`{"a":{"b":1}}` observes column `a.b`). Arrays are leaves: an array
/// value lands as a single compound marker at its own path and is never
/// descended into. A non-object root yields an empty record.
pub fn flatten(value: &Value) -> FlatRecord {
    let mut record = FlatRecord::new();
    if let Value::Object(map) = value {
        for (key, val) in map {
            flatten_into(&mut record, key, val);
        }
    }
    record
}

fn flatten_into(record: &mut FlatRecord, path: &str, value: &Value) {
    match value {
        Value::Object(map) => {
            for (key, val) in map {
                flatten_into(record, &format!("{path}.{key}"), val);
            }
        }
        Value::Array(_) => record.push(path, Scalar::Compound),
        Value::Null => record.push(path, Scalar::Null),
        Value::Bool(b) => record.push(path, Scalar::Bool(*b)),
        Value::Number(n) => {
            if let Some(i) = n.as_i64() {
                record.push(path, Scalar::Int(i));
            } else {
                record.push(path, Scalar::Float(n.as_f64().unwrap_or(f64::NAN)));
            }
        }
        Value::String(s) => record.push(path, Scalar::Text(s.clone())),
    }
}
