//! Object sampling
//!
//! Fetches a bounded sample of files from an object store for schema
//! inference. A sample is one bounded listing call, filtered down to
//! non-empty objects whose keys carry the requested suffix, with each
//! survivor's bytes fetched eagerly.

mod source;
mod types;

pub use source::SampleSource;
pub use types::SampledObject;

#[cfg(test)]
mod tests;
