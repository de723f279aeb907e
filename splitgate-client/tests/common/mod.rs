//! Shared in-process sources for splitgate-client integration tests.

#![allow(dead_code)]

use async_trait::async_trait;

use splitgate_client::{BalanceSource, BlockRefSource, ClientError, ClientResult, PriceSource};

/// Balance source returning a fixed token balance.
pub struct FixedBalances(pub f64);

#[async_trait]
impl BalanceSource for FixedBalances {
    async fn native_balance(&self, _wallet: &str) -> ClientResult<f64> {
        Ok(self.0)
    }

    async fn token_balance(&self, _wallet: &str, _mint: &str) -> ClientResult<f64> {
        Ok(self.0)
    }
}

/// Balance source that always fails as if the node were down.
pub struct FailingBalances;

#[async_trait]
impl BalanceSource for FailingBalances {
    async fn native_balance(&self, _wallet: &str) -> ClientResult<f64> {
        Err(ClientError::LedgerUnavailable("connection refused".into()))
    }

    async fn token_balance(&self, _wallet: &str, _mint: &str) -> ClientResult<f64> {
        Err(ClientError::LedgerUnavailable("connection refused".into()))
    }
}

/// Balance source that panics if touched. Used to prove a path never
/// issues a lookup.
pub struct PanicBalances;

#[async_trait]
impl BalanceSource for PanicBalances {
    async fn native_balance(&self, _wallet: &str) -> ClientResult<f64> {
        panic!("balance source must not be called");
    }

    async fn token_balance(&self, _wallet: &str, _mint: &str) -> ClientResult<f64> {
        panic!("balance source must not be called");
    }
}

/// Price source returning a fixed quote.
pub struct FixedPrice(pub f64);

#[async_trait]
impl PriceSource for FixedPrice {
    async fn usd_price(&self, _mint: &str) -> ClientResult<f64> {
        Ok(self.0)
    }
}

/// Price source that always fails with a malformed response.
pub struct FailingPrice;

#[async_trait]
impl PriceSource for FailingPrice {
    async fn usd_price(&self, _mint: &str) -> ClientResult<f64> {
        Err(ClientError::PriceUnavailable("malformed feed response".into()))
    }
}

/// Price source that panics if touched.
pub struct PanicPrice;

#[async_trait]
impl PriceSource for PanicPrice {
    async fn usd_price(&self, _mint: &str) -> ClientResult<f64> {
        panic!("price source must not be called");
    }
}

/// Block-reference source returning a fixed reference.
pub struct FixedBlockRef(pub [u8; 32]);

#[async_trait]
impl BlockRefSource for FixedBlockRef {
    async fn recent_block_ref(&self) -> ClientResult<[u8; 32]> {
        Ok(self.0)
    }
}

/// Block-reference source that always fails.
pub struct FailingBlockRef;

#[async_trait]
impl BlockRefSource for FailingBlockRef {
    async fn recent_block_ref(&self) -> ClientResult<[u8; 32]> {
        Err(ClientError::LedgerUnavailable("connection refused".into()))
    }
}
