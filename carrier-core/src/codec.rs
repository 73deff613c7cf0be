//! Codec trait: the seam between raw payload bytes and typed shapes.

use crate::error::BoxError;
use serde::{Serialize, de::DeserializeOwned};

/// Converts payload bytes to and from typed values.
///
/// A registry decodes the same payload once per binding, so `decode` must
/// build a fresh value on every call and must not keep state between calls.
pub trait Codec: Send + Sync + 'static {
    /// MIME type of the encoded form, e.g. `application/json`.
    fn content_type(&self) -> &'static str;

    /// Decode `bytes` into a fresh `T`.
    fn decode<T: DeserializeOwned>(&self, bytes: &[u8]) -> Result<T, BoxError>;

    /// Encode `value` into bytes.
    fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>, BoxError>;
}
