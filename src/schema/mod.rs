//! Schema inference over sampled object-store files
//!
//! The top of the crate: sample a bounded set of files, parse them into
//! flat records, pool every observation, classify a type per column,
//! promote timestamp-shaped string columns, map abstract types to storage
//! tokens, and apply caller overrides verbatim.
//!
//! # Pipeline
//!
//! ```text
//! SampleSource → parser → (JSON: structure check) → ObservationSet
//!     → ColumnClassifier → datetime promotion → storage tokens
//!     → overrides → Schema
//! ```
//!
//! Inference is global over the pooled sample: there is one schema per
//! call, never per-file schemas reconciled afterwards.

mod inference;
mod mapper;
mod types;

pub use inference::{promote_datetime_columns, ColumnClassifier, ObservationSet};
pub use mapper::storage_token;
pub use types::{AbstractType, Schema};

use crate::error::{Error, Result};
use crate::record::csv::CsvParser;
use crate::record::json::{self, JsonDocument};
use crate::sample::{SampleSource, SampledObject};
use serde::Serialize;
use tracing::info;

/// Result of delimited-text schema inference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CsvInference {
    /// Ordered column paths and their storage type tokens.
    pub schema: Schema,
}

/// Result of JSON schema inference
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct JsonInference {
    /// Ordered column paths and their storage type tokens.
    pub schema: Schema,
    /// Whether the sampled documents are wrapped in a top-level array.
    pub top_level_array: bool,
}

/// Infer a table schema from delimited-text files with a header row.
///
/// Samples up to `limit` non-empty objects under `prefix` whose keys end
/// in `suffix`, pools every row of every file, and classifies each column
/// with lexical text coercion. `overrides` are applied last, verbatim and
/// unvalidated; an override for an unknown column appends it.
///
/// # Errors
///
/// [`Error::NoSampleData`] when nothing matches, [`Error::CsvParse`] when
/// a sampled file cannot be decoded. Both abort the call.
pub async fn infer_csv_schema(
    source: &SampleSource,
    prefix: &str,
    suffix: &str,
    limit: usize,
    overrides: &[(String, String)],
) -> Result<CsvInference> {
    let objects = sample_or_fail(source, prefix, suffix, limit).await?;

    let parser = CsvParser::new();
    let mut observations = ObservationSet::new();
    for object in &objects {
        let document = parser.parse(object)?;
        // Header columns count even when no data rows follow.
        for column in &document.columns {
            observations.declare(column);
        }
        for record in document.records {
            observations.add_record(record);
        }
    }

    let classifier = ColumnClassifier::new().with_text_coercion(true);
    let schema = resolve_schema(&observations, &classifier, overrides)?;
    info!(
        files = objects.len(),
        columns = schema.len(),
        "inferred delimited-text schema"
    );

    Ok(CsvInference { schema })
}

/// Infer a table schema from JSON files.
///
/// Samples like [`infer_csv_schema`], decodes each file as one document,
/// and requires every file to agree on whether its root is an array (a
/// root array contributes one record per element). Text values are taken
/// at face value; JSON scalars already carry their types.
///
/// # Errors
///
/// [`Error::NoSampleData`] when nothing matches, [`Error::JsonParse`] when
/// a sampled file cannot be decoded, [`Error::StructuralInconsistency`]
/// when files disagree on top-level-array-ness. All abort the call.
pub async fn infer_json_schema(
    source: &SampleSource,
    prefix: &str,
    suffix: &str,
    limit: usize,
    overrides: &[(String, String)],
) -> Result<JsonInference> {
    let objects = sample_or_fail(source, prefix, suffix, limit).await?;

    let mut documents = Vec::with_capacity(objects.len());
    for object in &objects {
        documents.push((object.identifier(), json::parse(object)?));
    }

    // Array and non-array files must not be silently pooled together.
    let top_level_array = check_structure(&documents)?;

    let mut observations = ObservationSet::new();
    for (_, document) in documents {
        for record in document.records {
            observations.add_record(record);
        }
    }

    let classifier = ColumnClassifier::new();
    let schema = resolve_schema(&observations, &classifier, overrides)?;
    info!(
        files = objects.len(),
        columns = schema.len(),
        top_level_array,
        "inferred JSON schema"
    );

    Ok(JsonInference {
        schema,
        top_level_array,
    })
}

async fn sample_or_fail(
    source: &SampleSource,
    prefix: &str,
    suffix: &str,
    limit: usize,
) -> Result<Vec<SampledObject>> {
    let objects = source.sample(prefix, suffix, limit).await?;
    if objects.is_empty() {
        return Err(Error::no_sample_data(prefix, suffix));
    }
    Ok(objects)
}

/// All sampled files must agree on whether the root is an array.
///
/// Mixed samples fail, naming the minority shape as non-conforming: the
/// non-array files when arrays dominate, the array files otherwise. A tie
/// reports the non-array files.
fn check_structure(documents: &[(String, JsonDocument)]) -> Result<bool> {
    let arrays = documents
        .iter()
        .filter(|(_, document)| document.top_level_array)
        .count();

    if arrays == 0 {
        return Ok(false);
    }
    if arrays == documents.len() {
        return Ok(true);
    }

    let non_arrays = documents.len() - arrays;
    let offending_shape = arrays < non_arrays;
    let objects = documents
        .iter()
        .filter(|(_, document)| document.top_level_array == offending_shape)
        .map(|(identifier, _)| identifier.clone())
        .collect();

    Err(Error::StructuralInconsistency { objects })
}

/// Classify, promote, map to tokens, then lay overrides on top.
fn resolve_schema(
    observations: &ObservationSet,
    classifier: &ColumnClassifier,
    overrides: &[(String, String)],
) -> Result<Schema> {
    let mut columns = classifier.classify(observations);
    promote_datetime_columns(observations, &mut columns);

    let mut schema = Schema::new();
    for (column, dtype) in columns {
        schema.set(column, storage_token(dtype)?);
    }
    for (column, token) in overrides {
        schema.set(column.clone(), token.clone());
    }

    Ok(schema)
}
