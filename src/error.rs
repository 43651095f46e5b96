//! Error types for pipelayer
//!
//! All public APIs return `Result<T, Error>` where `Error` is defined here.
//! Every error is fatal to the inference call it occurs in; there is no
//! retry or partial-result path.

use thiserror::Error;

/// The main error type for pipelayer
#[derive(Error, Debug)]
pub enum Error {
    /// The sampler found no matching, non-empty objects.
    #[error("no sample data found under prefix '{prefix}' with suffix '{suffix}'")]
    NoSampleData {
        /// Prefix the listing was scoped to.
        prefix: String,
        /// Suffix filter applied to listed keys.
        suffix: String,
    },

    /// Sampled JSON files disagree on whether their root is an array.
    #[error(
        "top-level array must be present in all sampled files or none of them; \
         non-conforming files: {}",
        objects.join(", ")
    )]
    StructuralInconsistency {
        /// Full `container/key` identifiers of the non-conforming files.
        objects: Vec<String>,
    },

    /// The type mapper has no token for an inferred type. This is a defect
    /// in the type lattice, not an input problem.
    #[error("no storage type mapping for inferred type '{dtype}'")]
    UnmappedType {
        /// The inferred type that missed the table.
        dtype: String,
    },

    /// A sampled JSON file could not be decoded.
    #[error("failed to parse JSON in '{object}': {message}")]
    JsonParse {
        /// Identifier of the offending object.
        object: String,
        /// Decoder message.
        message: String,
    },

    /// A sampled delimited-text file could not be decoded.
    #[error("failed to parse delimited text in '{object}': {message}")]
    CsvParse {
        /// Identifier of the offending object.
        object: String,
        /// Parser message.
        message: String,
    },

    /// Underlying object store failure (listing or fetch).
    #[error("object store error: {0}")]
    ObjectStore(#[from] object_store::Error),

    /// IO failure outside the object store.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Bad sample source configuration (unparseable URL, missing directory).
    #[error("configuration error: {message}")]
    Config {
        /// What was wrong with the configuration.
        message: String,
    },
}

impl Error {
    /// Create a no-sample-data error.
    pub fn no_sample_data(prefix: impl Into<String>, suffix: impl Into<String>) -> Self {
        Self::NoSampleData {
            prefix: prefix.into(),
            suffix: suffix.into(),
        }
    }

    /// Create a JSON parse error for one sampled object.
    pub fn json_parse(object: impl Into<String>, message: impl Into<String>) -> Self {
        Self::JsonParse {
            object: object.into(),
            message: message.into(),
        }
    }

    /// Create a delimited-text parse error for one sampled object.
    pub fn csv_parse(object: impl Into<String>, message: impl Into<String>) -> Self {
        Self::CsvParse {
            object: object.into(),
            message: message.into(),
        }
    }

    /// Create a config error.
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }
}

/// Result type alias for pipelayer
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = Error::no_sample_data("events/", "json");
        assert_eq!(
            err.to_string(),
            "no sample data found under prefix 'events/' with suffix 'json'"
        );

        let err = Error::config("bad source URL");
        assert_eq!(err.to_string(), "configuration error: bad source URL");

        let err = Error::json_parse("bucket/a.json", "unexpected EOF");
        assert_eq!(
            err.to_string(),
            "failed to parse JSON in 'bucket/a.json': unexpected EOF"
        );
    }

    #[test]
    fn test_structural_inconsistency_lists_objects() {
        let err = Error::StructuralInconsistency {
            objects: vec!["bucket/a.json".to_string(), "bucket/b.json".to_string()],
        };
        let message = err.to_string();
        assert!(message.contains("bucket/a.json, bucket/b.json"));
    }
}
