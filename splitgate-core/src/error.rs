//! Error types for the Splitgate core crate.

use std::fmt;

use crate::channel::Channel;

/// Top-level error type for splitgate-core operations.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CoreError {
    /// Address parsing or validation failed.
    Address(AddressError),
    /// Distribution planning failed.
    Distribution(DistributionError),
    /// Serialization or deserialization failed.
    Serialization(SerializationError),
}

impl fmt::Display for CoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CoreError::Address(e) => write!(f, "address error: {}", e),
            CoreError::Distribution(e) => write!(f, "distribution error: {}", e),
            CoreError::Serialization(e) => write!(f, "serialization error: {}", e),
        }
    }
}

impl std::error::Error for CoreError {}

impl From<AddressError> for CoreError {
    fn from(e: AddressError) -> Self {
        CoreError::Address(e)
    }
}

impl From<DistributionError> for CoreError {
    fn from(e: DistributionError) -> Self {
        CoreError::Distribution(e)
    }
}

impl From<SerializationError> for CoreError {
    fn from(e: SerializationError) -> Self {
        CoreError::Serialization(e)
    }
}

/// Errors related to account address parsing.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AddressError {
    /// Decoded address is not exactly 32 bytes.
    InvalidLength {
        /// Number of bytes actually decoded.
        len: usize,
    },
    /// Address string contains non-hex characters.
    InvalidHex,
}

impl fmt::Display for AddressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddressError::InvalidLength { len } => {
                write!(f, "address must decode to 32 bytes, got {}", len)
            }
            AddressError::InvalidHex => write!(f, "address contains invalid hex"),
        }
    }
}

impl std::error::Error for AddressError {}

/// Errors raised while planning a fee distribution.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum DistributionError {
    /// Negative or non-finite amount or weight.
    InvalidInput(String),
    /// A channel with a positive share has an unparsable destination.
    InvalidDestination {
        /// The channel whose destination failed to parse.
        channel: Channel,
        /// The offending destination string.
        destination: String,
    },
}

impl fmt::Display for DistributionError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DistributionError::InvalidInput(msg) => write!(f, "invalid input: {}", msg),
            DistributionError::InvalidDestination {
                channel,
                destination,
            } => write!(
                f,
                "invalid destination for {} channel: {:?}",
                channel, destination
            ),
        }
    }
}

impl std::error::Error for DistributionError {}

/// Errors related to serialization and deserialization.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SerializationError {
    /// Failed to encode data to bytes.
    EncodeFailed(String),
    /// Failed to decode data from bytes.
    DecodeFailed(String),
}

impl fmt::Display for SerializationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SerializationError::EncodeFailed(msg) => write!(f, "encode failed: {}", msg),
            SerializationError::DecodeFailed(msg) => write!(f, "decode failed: {}", msg),
        }
    }
}

impl std::error::Error for SerializationError {}
