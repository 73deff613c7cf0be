//! Standard codec implementations.

use carrier_core::{BoxError, Codec};
use serde::{Serialize, de::DeserializeOwned};

/// JSON codec backed by `serde_json`.
///
/// This is the default codec of [`Registry`](crate::dispatch::Registry).
/// Missing fields are rejected unless the target type opts into defaults
/// with `#[serde(default)]`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct JsonCodec;

impl JsonCodec {
    /// MIME type produced and accepted by this codec.
    pub const CONTENT_TYPE: &'static str = "application/json";
}

impl Codec for JsonCodec {
    fn content_type(&self) -> &'static str {
        Self::CONTENT_TYPE
    }

    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, BoxError> {
        Ok(serde_json::from_slice(bytes)?)
    }

    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, BoxError> {
        Ok(serde_json::to_vec(value)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::Deserialize;

    #[derive(Debug, Deserialize, PartialEq)]
    struct OrderCreated {
        id: String,
        total: f64,
    }

    #[derive(Debug, Deserialize, PartialEq, Default)]
    #[serde(default)]
    struct Sparse {
        id: String,
        note: Option<String>,
    }

    #[test]
    fn test_decode_integer_into_float() {
        let order: OrderCreated = JsonCodec.decode(br#"{"id":"o1","total":42}"#).unwrap();
        assert_eq!(
            order,
            OrderCreated {
                id: "o1".to_string(),
                total: 42.0
            }
        );
    }

    #[test]
    fn test_decode_rejects_garbage() {
        let result: Result<OrderCreated, _> = JsonCodec.decode(b"not-json");
        assert!(result.is_err());
    }

    #[test]
    fn test_serde_default_fills_missing_fields() {
        let sparse: Sparse = JsonCodec.decode(b"{}").unwrap();
        assert_eq!(sparse, Sparse::default());
    }

    #[test]
    fn test_content_type() {
        assert_eq!(JsonCodec.content_type(), "application/json");
    }
}
