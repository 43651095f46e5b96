//! Flat record parsing
//!
//! Turns the raw bytes of one sampled file into an ordered sequence of
//! flat records: `(column path, scalar)` pairs, one record per logical
//! row. Delimited text maps header fields straight to column paths; JSON
//! documents are flattened so nested objects become dot-joined paths while
//! arrays stay opaque.

pub mod csv;
pub mod json;
mod types;

pub use types::{FlatRecord, Scalar};

#[cfg(test)]
mod tests;
