//! # pipelayer
//!
//! Infer a unified tabular schema from a bounded sample of semi-structured
//! files (delimited text or JSON) in an object store, suitable for
//! declaring a table in an analytical database.
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pipelayer::{infer_json_schema, Result, SampleSource};
//!
//! #[tokio::main]
//! async fn main() -> Result<()> {
//!     let source = SampleSource::parse("s3://my-bucket")?;
//!     let result = infer_json_schema(&source, "events/", "json", 10, &[]).await?;
//!
//!     for (column, dtype) in result.schema.iter() {
//!         println!("{column}: {dtype}");
//!     }
//!     println!("top-level array: {}", result.top_level_array);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! ```text
//! ┌─────────┐   ┌────────────┐   ┌──────────────┐   ┌─────────────┐
//! │ Sampler │ → │   Record   │ → │  Classifier  │ → │   Schema    │
//! │ (store) │   │   Parser   │   │ + promotion  │   │ + overrides │
//! └─────────┘   └────────────┘   └──────────────┘   └─────────────┘
//! ```
//!
//! Every inference call is independent and stateless: files are sampled,
//! parsed, and pooled into one in-memory observation set before any type
//! is decided, so a call sees the full merged sample or fails outright.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]
#![allow(clippy::missing_errors_doc)]
#![allow(clippy::missing_panics_doc)]
#![allow(clippy::doc_markdown)]

/// Error types
pub mod error;

/// Object sampling from cloud and local stores
pub mod sample;

/// Flat record parsing for delimited text and JSON
pub mod record;

/// Schema inference, type lattice, and storage type mapping
pub mod schema;

pub use error::{Error, Result};
pub use sample::{SampleSource, SampledObject};
pub use schema::{
    infer_csv_schema, infer_json_schema, AbstractType, CsvInference, JsonInference, Schema,
};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Crate name
pub const NAME: &str = env!("CARGO_PKG_NAME");
