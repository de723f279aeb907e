//! Client error types.

use thiserror::Error;

use splitgate_core::{AddressError, DistributionError, SerializationError};

/// Errors surfaced by the networking layer.
#[derive(Debug, Error)]
pub enum ClientError {
    /// A wallet or account string failed to parse.
    #[error("invalid address: {0}")]
    InvalidAddress(#[from] AddressError),

    /// Distribution planning failed (bad input or destination).
    #[error(transparent)]
    Distribution(#[from] DistributionError),

    /// A required ledger query could not complete.
    #[error("ledger unavailable: {0}")]
    LedgerUnavailable(String),

    /// The price feed returned a response that could not be parsed at all.
    /// Absence of a quote is not an error; it degrades to a zero price.
    #[error("price feed unavailable: {0}")]
    PriceUnavailable(String),

    /// Encoding the assembled transaction failed.
    #[error("serialization error: {0}")]
    Serialization(#[from] SerializationError),
}

/// Result type for client operations.
pub type ClientResult<T> = Result<T, ClientError>;
