//! Deterministic binary serialization.
//!
//! Unsigned transactions are serialized using bincode with a deterministic
//! configuration, so identical inputs always produce byte-identical
//! artifacts across platforms.

use bincode::Options;
use serde::{de::DeserializeOwned, Serialize};

use crate::error::SerializationError;

/// Get the deterministic bincode configuration.
///
/// Configuration:
/// - Fixed-size integer encoding (not variable-length)
/// - Little-endian byte order
/// - Reject trailing bytes on deserialization
fn config() -> impl Options {
    bincode::DefaultOptions::new()
        .with_fixint_encoding()
        .with_little_endian()
        .reject_trailing_bytes()
}

/// Serialize a value to bytes using deterministic configuration.
pub fn serialize<T: Serialize>(value: &T) -> Result<Vec<u8>, SerializationError> {
    config()
        .serialize(value)
        .map_err(|e| SerializationError::EncodeFailed(e.to_string()))
}

/// Deserialize a value from bytes.
///
/// Returns an error if the bytes are malformed, there are trailing bytes
/// after the value, or the value doesn't match the expected type.
pub fn deserialize<T: DeserializeOwned>(bytes: &[u8]) -> Result<T, SerializationError> {
    config()
        .deserialize(bytes)
        .map_err(|e| SerializationError::DecodeFailed(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_determinism() {
        let value: Vec<u64> = vec![1, 2, 3];
        assert_eq!(serialize(&value).unwrap(), serialize(&value).unwrap());
    }

    #[test]
    fn test_rejects_trailing_bytes() {
        let mut bytes = serialize(&42u64).unwrap();
        bytes.push(0xFF);

        let result: Result<u64, _> = deserialize(&bytes);
        assert!(result.is_err());
    }

    #[test]
    fn test_fixed_int_little_endian() {
        let bytes = serialize(&0x01020304u32).unwrap();
        assert_eq!(bytes, vec![0x04, 0x03, 0x02, 0x01]);
    }
}
