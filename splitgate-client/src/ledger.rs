//! JSON-RPC ledger client.
//!
//! Thin read-only client over the ledger node's HTTP JSON-RPC endpoint.
//! Every method is a single round trip; a failed call is final for that
//! invocation (retries are the caller's concern).

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;
use serde_json::{json, Value};

use splitgate_core::Address;

use crate::error::{ClientError, ClientResult};
use crate::sources::{BalanceSource, BlockRefSource};

/// One token-holding account, as reported by the ledger.
#[derive(Debug, Clone, Deserialize)]
struct TokenAccount {
    /// Balance in human-readable units (decimal-adjusted by the node).
    amount: f64,
}

/// Read-only JSON-RPC client for a ledger node.
#[derive(Debug, Clone)]
pub struct LedgerClient {
    http: Client,
    url: String,
}

impl LedgerClient {
    /// Create a client for the node at `url`.
    pub fn new(url: impl Into<String>) -> Self {
        LedgerClient {
            http: Client::new(),
            url: url.into(),
        }
    }

    /// The node URL this client talks to.
    pub fn url(&self) -> &str {
        &self.url
    }

    /// Check whether a string parses as a valid account address.
    ///
    /// Purely syntactic; no round trip.
    pub fn validate_address(&self, s: &str) -> bool {
        Address::is_valid(s)
    }

    /// Make a JSON-RPC request and unwrap the result field.
    async fn rpc_call(&self, method: &str, params: Value) -> ClientResult<Value> {
        let body = json!({
            "jsonrpc": "2.0",
            "method": method,
            "params": params,
            "id": 1
        });

        tracing::debug!(method, url = %self.url, "ledger rpc call");

        let response = self
            .http
            .post(&self.url)
            .json(&body)
            .send()
            .await
            .map_err(|e| ClientError::LedgerUnavailable(e.to_string()))?;

        let envelope: Value = response
            .json()
            .await
            .map_err(|e| ClientError::LedgerUnavailable(e.to_string()))?;

        if let Some(error) = envelope.get("error") {
            return Err(ClientError::LedgerUnavailable(format!(
                "{} returned error: {}",
                method, error
            )));
        }

        envelope
            .get("result")
            .cloned()
            .ok_or_else(|| ClientError::LedgerUnavailable(format!("{}: missing result", method)))
    }

    /// Native-currency balance of an account, in native units.
    pub async fn get_account_balance(&self, address: &Address) -> ClientResult<f64> {
        let result = self
            .rpc_call("getAccountBalance", json!([address.to_hex()]))
            .await?;
        result.as_f64().ok_or_else(|| {
            ClientError::LedgerUnavailable("getAccountBalance: non-numeric result".into())
        })
    }

    /// All token-holding accounts owned by `address` for `mint`.
    ///
    /// An absent or empty list means the wallet simply holds none of the
    /// token, so the node returning nothing is not an error.
    pub async fn get_token_accounts_by_owner(
        &self,
        address: &Address,
        mint: &str,
    ) -> ClientResult<Vec<f64>> {
        let result = self
            .rpc_call(
                "getTokenAccountsByOwner",
                json!([address.to_hex(), mint]),
            )
            .await?;

        if result.is_null() {
            return Ok(Vec::new());
        }
        let accounts: Vec<TokenAccount> = serde_json::from_value(result).map_err(|e| {
            ClientError::LedgerUnavailable(format!("getTokenAccountsByOwner: {}", e))
        })?;
        Ok(accounts.into_iter().map(|a| a.amount).collect())
    }

    /// Fetch a recent block reference for anchoring a transaction.
    pub async fn get_recent_block_reference(&self) -> ClientResult<[u8; 32]> {
        let result = self
            .rpc_call("getRecentBlockReference", json!([]))
            .await?;
        let hex_str = result.as_str().ok_or_else(|| {
            ClientError::LedgerUnavailable("getRecentBlockReference: non-string result".into())
        })?;
        parse_block_ref(hex_str)
    }
}

/// Decode a hex-encoded 32-byte block reference.
fn parse_block_ref(hex_str: &str) -> ClientResult<[u8; 32]> {
    let bytes = hex::decode(hex_str).map_err(|e| {
        ClientError::LedgerUnavailable(format!("malformed block reference: {}", e))
    })?;
    if bytes.len() != 32 {
        return Err(ClientError::LedgerUnavailable(format!(
            "block reference must be 32 bytes, got {}",
            bytes.len()
        )));
    }
    let mut block_ref = [0u8; 32];
    block_ref.copy_from_slice(&bytes);
    Ok(block_ref)
}

#[async_trait]
impl BalanceSource for LedgerClient {
    async fn native_balance(&self, wallet: &str) -> ClientResult<f64> {
        let address: Address = wallet.parse()?;
        self.get_account_balance(&address).await
    }

    async fn token_balance(&self, wallet: &str, mint: &str) -> ClientResult<f64> {
        let address: Address = wallet.parse()?;
        let amounts = self.get_token_accounts_by_owner(&address, mint).await?;
        Ok(amounts.iter().sum())
    }
}

#[async_trait]
impl BlockRefSource for LedgerClient {
    async fn recent_block_ref(&self) -> ClientResult<[u8; 32]> {
        self.get_recent_block_reference().await
    }
}
