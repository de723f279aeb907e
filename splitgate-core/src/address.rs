//! Ledger account addresses.
//!
//! An address is a 32-byte account identifier, hex-encoded in text form
//! (64 hex characters). Destinations are only parsed when a transfer is
//! actually constructed for them, so a placeholder string on an unused
//! channel never needs to be valid.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::AddressError;

/// Length of an account address in bytes.
pub const ADDRESS_LEN: usize = 32;

/// A 32-byte ledger account identifier.
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Address([u8; ADDRESS_LEN]);

impl Address {
    /// Create an address from raw bytes.
    pub fn new(bytes: [u8; ADDRESS_LEN]) -> Self {
        Address(bytes)
    }

    /// Get the raw address bytes.
    pub fn as_bytes(&self) -> &[u8; ADDRESS_LEN] {
        &self.0
    }

    /// Hex-encode the full address.
    pub fn to_hex(&self) -> String {
        hex::encode(self.0)
    }

    /// Truncated form for log output: first 4 bytes plus an ellipsis.
    pub fn short(&self) -> String {
        format!("{}..", hex::encode(&self.0[..4]))
    }

    /// Check whether a string parses as a valid address.
    pub fn is_valid(s: &str) -> bool {
        s.parse::<Address>().is_ok()
    }
}

impl FromStr for Address {
    type Err = AddressError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let bytes = hex::decode(s).map_err(|_| AddressError::InvalidHex)?;
        if bytes.len() != ADDRESS_LEN {
            return Err(AddressError::InvalidLength { len: bytes.len() });
        }
        let mut address = [0u8; ADDRESS_LEN];
        address.copy_from_slice(&bytes);
        Ok(Address(address))
    }
}

impl fmt::Display for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_hex())
    }
}

impl fmt::Debug for Address {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Address({})", self.short())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_roundtrip() {
        let addr = Address::new([7u8; 32]);
        let parsed: Address = addr.to_hex().parse().unwrap();
        assert_eq!(addr, parsed);
    }

    #[test]
    fn test_rejects_wrong_length() {
        let short = hex::encode([1u8; 16]);
        assert_eq!(
            short.parse::<Address>(),
            Err(AddressError::InvalidLength { len: 16 })
        );
    }

    #[test]
    fn test_rejects_non_hex() {
        let garbage = "zz".repeat(32);
        assert_eq!(garbage.parse::<Address>(), Err(AddressError::InvalidHex));
    }

    #[test]
    fn test_is_valid() {
        assert!(Address::is_valid(&hex::encode([0u8; 32])));
        assert!(!Address::is_valid("placeholder"));
        assert!(!Address::is_valid(""));
    }

    #[test]
    fn test_short_display() {
        let addr = Address::new([0xAB; 32]);
        assert_eq!(addr.short(), "abababab..");
        assert_eq!(addr.to_string().len(), 64);
    }
}
