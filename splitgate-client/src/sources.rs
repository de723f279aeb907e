//! Trait seams for the gate and builder.
//!
//! The token gate and distribution builder depend on these traits rather
//! than on concrete clients, so tests can substitute in-process sources
//! and exercise failure paths without a network.

use async_trait::async_trait;

use crate::error::ClientResult;

/// Read-only balance queries against the ledger.
#[async_trait]
pub trait BalanceSource: Send + Sync {
    /// Native-currency balance of a wallet, in native units.
    ///
    /// Fails with `InvalidAddress` on a malformed wallet string and
    /// `LedgerUnavailable` if the query cannot complete.
    async fn native_balance(&self, wallet: &str) -> ClientResult<f64>;

    /// Total holding of `mint` across all token accounts owned by the
    /// wallet, in human-readable units. A wallet with no accounts for
    /// the mint holds zero; that is a normal result, not an error.
    async fn token_balance(&self, wallet: &str, mint: &str) -> ClientResult<f64>;
}

/// USD quotes from an external price feed.
#[async_trait]
pub trait PriceSource: Send + Sync {
    /// USD price of one unit of `mint`. A missing quote degrades to 0.
    async fn usd_price(&self, mint: &str) -> ClientResult<f64>;
}

/// Recent block references for anchoring transaction validity windows.
#[async_trait]
pub trait BlockRefSource: Send + Sync {
    /// Fetch a recent block reference from the ledger.
    async fn recent_block_ref(&self) -> ClientResult<[u8; 32]>;
}
