//! # Splitgate Client
//!
//! Networking layer for the Splitgate fee router:
//! - JSON-RPC ledger client for balance, token-account, and block queries
//! - HTTP price-feed client with "absence means worthless" semantics
//! - The token gate: a fail-closed allow/deny decision engine
//! - The distribution builder, which anchors planned transfers to a
//!   recent block reference and hands back an unsigned transaction
//!
//! Every operation is stateless per invocation: no caching, no retries,
//! no cross-request state. Concurrent calls are fully independent.

#![deny(unsafe_code)]

pub mod builder;
pub mod error;
pub mod gate;
pub mod ledger;
pub mod price;
pub mod sources;

pub use builder::{DistributionBuilder, DistributionOutcome};
pub use error::{ClientError, ClientResult};
pub use gate::{GateConfig, GateDecision, TokenGate, DEFAULT_MIN_USD};
pub use ledger::LedgerClient;
pub use price::PriceFeedClient;
pub use sources::{BalanceSource, BlockRefSource, PriceSource};
