//! Token-gate decision engine.
//!
//! Decides whether a wallet may access a protected feature based on the
//! USD value of its holdings of one designated token. The gate is pure
//! policy: whitelist short-circuit, concurrent balance and price lookups,
//! and a fail-closed conversion of every internal failure into a denial.
//! `check` never returns an error and never panics; denial is the only
//! safe default under uncertainty.

use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use splitgate_core::Address;

use crate::sources::{BalanceSource, PriceSource};

/// Default minimum USD value of holdings required for access.
pub const DEFAULT_MIN_USD: f64 = 50.0;

/// Denial reason used whenever verification itself fails.
const VERIFY_FAILED_REASON: &str = "Failed to verify token holdings. Please try again.";

/// Fixed gate configuration, set once at startup.
#[derive(Debug, Clone)]
pub struct GateConfig {
    /// The designated token whose holdings gate access.
    pub token_mint: String,
    /// Minimum USD value of holdings required.
    pub min_usd: f64,
    /// Addresses exempt from the balance/price check.
    pub whitelist: HashSet<Address>,
}

impl GateConfig {
    /// Configuration for `token_mint` with the default threshold and an
    /// empty whitelist.
    pub fn new(token_mint: impl Into<String>) -> Self {
        GateConfig {
            token_mint: token_mint.into(),
            min_usd: DEFAULT_MIN_USD,
            whitelist: HashSet::new(),
        }
    }

    /// Override the minimum USD threshold.
    pub fn with_min_usd(mut self, min_usd: f64) -> Self {
        self.min_usd = min_usd;
        self
    }

    /// Set the whitelist.
    pub fn with_whitelist(mut self, whitelist: HashSet<Address>) -> Self {
        self.whitelist = whitelist;
        self
    }
}

/// The outcome of one gate check. Computed fresh per call, never cached.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GateDecision {
    /// Whether access is granted.
    pub allowed: bool,
    /// Human-readable explanation of the outcome.
    pub reason: String,
    /// Token holdings found for the wallet.
    pub token_balance: f64,
    /// USD price used for the valuation.
    pub token_price_usd: f64,
    /// `token_balance * token_price_usd`.
    pub value_usd: f64,
    /// The threshold that applied to this check.
    pub min_required: f64,
    /// Whether the wallet was whitelisted (short-circuits the check).
    pub is_whitelisted: bool,
}

impl GateDecision {
    fn whitelisted(min_required: f64) -> Self {
        GateDecision {
            allowed: true,
            reason: "Whitelisted address".into(),
            token_balance: 0.0,
            token_price_usd: 0.0,
            value_usd: 0.0,
            min_required,
            is_whitelisted: true,
        }
    }

    fn fail_closed(min_required: f64) -> Self {
        GateDecision {
            allowed: false,
            reason: VERIFY_FAILED_REASON.into(),
            token_balance: 0.0,
            token_price_usd: 0.0,
            value_usd: 0.0,
            min_required,
            is_whitelisted: false,
        }
    }
}

/// Access-control decision engine over a balance source and a price source.
pub struct TokenGate<B, P> {
    config: GateConfig,
    balances: B,
    prices: P,
}

impl<B: BalanceSource, P: PriceSource> TokenGate<B, P> {
    /// Create a gate with fixed configuration.
    pub fn new(config: GateConfig, balances: B, prices: P) -> Self {
        TokenGate {
            config,
            balances,
            prices,
        }
    }

    /// The gate's configuration.
    pub fn config(&self) -> &GateConfig {
        &self.config
    }

    /// Decide whether `wallet` may access the protected feature.
    ///
    /// Whitelisted wallets are allowed before any network call. Otherwise
    /// the balance and price lookups are issued concurrently and both are
    /// awaited before the verdict. Any failure, including a wallet string
    /// that does not parse, resolves to a denial.
    pub async fn check(&self, wallet: &str) -> GateDecision {
        if let Ok(address) = wallet.parse::<Address>() {
            if self.config.whitelist.contains(&address) {
                tracing::info!(wallet = %address.short(), "gate: whitelisted");
                return GateDecision::whitelisted(self.config.min_usd);
            }
        }

        let (balance, price) = tokio::join!(
            self.balances.token_balance(wallet, &self.config.token_mint),
            self.prices.usd_price(&self.config.token_mint),
        );

        let (token_balance, token_price_usd) = match (balance, price) {
            (Ok(b), Ok(p)) => (b, p),
            (balance, price) => {
                if let Err(e) = &balance {
                    tracing::warn!(error = %e, "gate: balance lookup failed, denying");
                }
                if let Err(e) = &price {
                    tracing::warn!(error = %e, "gate: price lookup failed, denying");
                }
                return GateDecision::fail_closed(self.config.min_usd);
            }
        };

        let value_usd = token_balance * token_price_usd;
        let allowed = value_usd >= self.config.min_usd;
        let reason = if allowed {
            "Access granted".to_string()
        } else {
            format!(
                "Insufficient holdings: at least ${:.2} of the token is required",
                self.config.min_usd
            )
        };

        tracing::info!(allowed, value_usd, min = self.config.min_usd, "gate decision");

        GateDecision {
            allowed,
            reason,
            token_balance,
            token_price_usd,
            value_usd,
            min_required: self.config.min_usd,
            is_whitelisted: false,
        }
    }
}
