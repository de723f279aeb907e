//! Token-gate integration tests: whitelist short-circuit, threshold
//! boundaries, and the fail-closed policy.

mod common;

use std::collections::HashSet;

use splitgate_client::{GateConfig, TokenGate, DEFAULT_MIN_USD};
use splitgate_core::Address;

use common::{
    FailingBalances, FailingPrice, FixedBalances, FixedPrice, PanicBalances, PanicPrice,
};

const MINT: &str = "TOKENMINT";

fn wallet() -> String {
    hex::encode([7u8; 32])
}

#[tokio::test]
async fn holdings_above_threshold_allow() {
    // 1000 tokens at $0.10 = $100 against the default $50 threshold.
    let gate = TokenGate::new(GateConfig::new(MINT), FixedBalances(1000.0), FixedPrice(0.1));

    let decision = gate.check(&wallet()).await;
    assert!(decision.allowed);
    assert_eq!(decision.reason, "Access granted");
    assert_eq!(decision.token_balance, 1000.0);
    assert_eq!(decision.token_price_usd, 0.1);
    assert_eq!(decision.value_usd, 100.0);
    assert_eq!(decision.min_required, DEFAULT_MIN_USD);
    assert!(!decision.is_whitelisted);
}

#[tokio::test]
async fn holdings_below_threshold_deny() {
    let gate = TokenGate::new(GateConfig::new(MINT), FixedBalances(10.0), FixedPrice(0.1));

    let decision = gate.check(&wallet()).await;
    assert!(!decision.allowed);
    assert!(decision.reason.contains("$50.00"));
    assert_eq!(decision.value_usd, 1.0);
}

#[tokio::test]
async fn value_exactly_at_threshold_allows() {
    // 500 * 0.1 = 50.0 == min_required.
    let gate = TokenGate::new(GateConfig::new(MINT), FixedBalances(500.0), FixedPrice(0.1));
    assert!(gate.check(&wallet()).await.allowed);
}

#[tokio::test]
async fn value_one_cent_below_threshold_denies() {
    let gate = TokenGate::new(
        GateConfig::new(MINT),
        FixedBalances(49.99),
        FixedPrice(1.0),
    );
    assert!(!gate.check(&wallet()).await.allowed);
}

#[tokio::test]
async fn zero_price_denies() {
    // A feed with no quote reports zero, which can never clear the bar.
    let gate = TokenGate::new(
        GateConfig::new(MINT),
        FixedBalances(1_000_000.0),
        FixedPrice(0.0),
    );

    let decision = gate.check(&wallet()).await;
    assert!(!decision.allowed);
    assert_eq!(decision.value_usd, 0.0);
}

#[tokio::test]
async fn whitelisted_wallet_skips_lookups() {
    // Panicking sources prove no network call is issued for whitelisted
    // wallets.
    let address: Address = wallet().parse().unwrap();
    let mut whitelist = HashSet::new();
    whitelist.insert(address);

    let gate = TokenGate::new(
        GateConfig::new(MINT).with_whitelist(whitelist),
        PanicBalances,
        PanicPrice,
    );

    let decision = gate.check(&wallet()).await;
    assert!(decision.allowed);
    assert!(decision.is_whitelisted);
    assert_eq!(decision.reason, "Whitelisted address");
    assert_eq!(decision.token_balance, 0.0);
    assert_eq!(decision.value_usd, 0.0);
    assert_eq!(decision.min_required, DEFAULT_MIN_USD);
}

#[tokio::test]
async fn balance_failure_fails_closed() {
    let gate = TokenGate::new(GateConfig::new(MINT), FailingBalances, FixedPrice(100.0));

    let decision = gate.check(&wallet()).await;
    assert!(!decision.allowed);
    assert_eq!(
        decision.reason,
        "Failed to verify token holdings. Please try again."
    );
    assert_eq!(decision.token_balance, 0.0);
    assert_eq!(decision.token_price_usd, 0.0);
    assert!(!decision.is_whitelisted);
}

#[tokio::test]
async fn price_failure_fails_closed() {
    let gate = TokenGate::new(GateConfig::new(MINT), FixedBalances(1000.0), FailingPrice);

    let decision = gate.check(&wallet()).await;
    assert!(!decision.allowed);
    assert_eq!(
        decision.reason,
        "Failed to verify token holdings. Please try again."
    );
}

#[tokio::test]
async fn both_failures_fail_closed() {
    let gate = TokenGate::new(GateConfig::new(MINT), FailingBalances, FailingPrice);
    assert!(!gate.check(&wallet()).await.allowed);
}

#[tokio::test]
async fn malformed_wallet_fails_closed() {
    // The ledger would reject the address; the gate still resolves to a
    // denial instead of erroring.
    let gate = TokenGate::new(GateConfig::new(MINT), FailingBalances, FixedPrice(1.0));

    let decision = gate.check("not-an-address").await;
    assert!(!decision.allowed);
    assert!(!decision.is_whitelisted);
}

#[tokio::test]
async fn custom_threshold_applies() {
    let gate = TokenGate::new(
        GateConfig::new(MINT).with_min_usd(10.0),
        FixedBalances(100.0),
        FixedPrice(0.15),
    );

    let decision = gate.check(&wallet()).await;
    assert!(decision.allowed);
    assert_eq!(decision.min_required, 10.0);
}

#[tokio::test]
async fn repeated_checks_are_independent() {
    let gate = TokenGate::new(GateConfig::new(MINT), FixedBalances(1000.0), FixedPrice(0.1));

    let first = gate.check(&wallet()).await;
    let second = gate.check(&wallet()).await;
    assert_eq!(first, second);
}
