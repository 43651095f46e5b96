//! Sampled object type

use bytes::Bytes;

/// One object fetched from the sample source: identifying names plus its
/// full contents. Immutable once fetched; parsers only borrow it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SampledObject {
    /// Container (bucket, namespace, or local root) the object came from.
    pub container: String,
    /// Object key within the container.
    pub key: String,
    /// Raw object contents.
    pub data: Bytes,
}

impl SampledObject {
    /// Create a sampled object from its parts.
    pub fn new(container: impl Into<String>, key: impl Into<String>, data: Bytes) -> Self {
        Self {
            container: container.into(),
            key: key.into(),
            data,
        }
    }

    /// Full identifier used in operator-facing messages.
    pub fn identifier(&self) -> String {
        format!("{}/{}", self.container, self.key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_identifier_joins_container_and_key() {
        let object = SampledObject::new("events", "2020/01/data.json", Bytes::new());
        assert_eq!(object.identifier(), "events/2020/01/data.json");
    }
}
