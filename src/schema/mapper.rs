//! Abstract type to storage type token mapping

use crate::error::{Error, Result};
use crate::schema::types::AbstractType;
use once_cell::sync::Lazy;
use std::collections::HashMap;

/// Fixed, non-extensible mapping from inferred abstract types to
/// storage-system type tokens.
static STORAGE_TOKENS: Lazy<HashMap<AbstractType, &'static str>> = Lazy::new(|| {
    HashMap::from([
        (AbstractType::Integer, "NUMBER(38,0)"),
        (AbstractType::Float, "NUMBER(38,8)"),
        (AbstractType::String, "VARCHAR"),
        (AbstractType::Boolean, "BOOLEAN"),
        (AbstractType::Variant, "VARIANT"),
        (AbstractType::Timestamp, "TIMESTAMP WITHOUT TIME ZONE"),
    ])
});

/// Look up the storage token for an inferred type.
///
/// A missing entry signals a defect in the type lattice and must surface
/// as an error, never a silent default.
pub fn storage_token(dtype: AbstractType) -> Result<&'static str> {
    STORAGE_TOKENS
        .get(&dtype)
        .copied()
        .ok_or_else(|| Error::UnmappedType {
            dtype: dtype.to_string(),
        })
}
