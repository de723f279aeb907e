//! HTTP price-feed client.
//!
//! The feed maps a token identifier to a USD quote. A missing quote or a
//! non-success status degrades to a **zero** price rather than an error:
//! a token the feed cannot price is treated as worthless, which forces
//! the gate to deny instead of silently allowing. Only a body that cannot
//! be parsed at all is surfaced as `PriceUnavailable`.

use std::collections::HashMap;

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use crate::error::{ClientError, ClientResult};
use crate::sources::PriceSource;

/// A quote entry keyed by token identifier.
#[derive(Debug, Clone, Deserialize)]
struct PriceEntry {
    price: PriceValue,
}

/// Feeds report prices as JSON numbers or numeric strings.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum PriceValue {
    Number(f64),
    Text(String),
}

impl PriceValue {
    /// Numeric value; an unparsable string degrades to zero like an
    /// absent quote.
    fn as_f64(&self) -> f64 {
        match self {
            PriceValue::Number(n) => *n,
            PriceValue::Text(s) => s.parse().unwrap_or(0.0),
        }
    }
}

/// Client for an HTTP price feed.
#[derive(Debug, Clone)]
pub struct PriceFeedClient {
    http: Client,
    base_url: String,
}

impl PriceFeedClient {
    /// Create a client for the feed at `base_url`.
    pub fn new(base_url: impl Into<String>) -> Self {
        PriceFeedClient {
            http: Client::new(),
            base_url: base_url.into(),
        }
    }

    /// The feed URL this client queries.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// USD price of one unit of `mint`.
    pub async fn get_usd_price(&self, mint: &str) -> ClientResult<f64> {
        let url = format!("{}?ids={}", self.base_url, mint);
        tracing::debug!(%url, "price feed request");

        let response = self
            .http
            .get(&url)
            .send()
            .await
            .map_err(|e| ClientError::PriceUnavailable(e.to_string()))?;

        if !response.status().is_success() {
            tracing::warn!(status = %response.status(), mint, "price feed non-success, using zero");
            return Ok(0.0);
        }

        let body = response
            .text()
            .await
            .map_err(|e| ClientError::PriceUnavailable(e.to_string()))?;

        price_from_body(&body, mint)
    }
}

/// Extract the quote for `mint` from a feed response body.
fn price_from_body(body: &str, mint: &str) -> ClientResult<f64> {
    let quotes: HashMap<String, PriceEntry> = serde_json::from_str(body)
        .map_err(|e| ClientError::PriceUnavailable(format!("malformed feed response: {}", e)))?;

    Ok(quotes.get(mint).map(|entry| entry.price.as_f64()).unwrap_or(0.0))
}

#[async_trait]
impl PriceSource for PriceFeedClient {
    async fn usd_price(&self, mint: &str) -> ClientResult<f64> {
        self.get_usd_price(mint).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_numeric_price() {
        let body = r#"{"MINT": {"price": 1.25}}"#;
        assert_eq!(price_from_body(body, "MINT").unwrap(), 1.25);
    }

    #[test]
    fn test_string_price() {
        let body = r#"{"MINT": {"price": "0.004"}}"#;
        assert_eq!(price_from_body(body, "MINT").unwrap(), 0.004);
    }

    #[test]
    fn test_missing_mint_is_zero() {
        let body = r#"{"OTHER": {"price": 3.0}}"#;
        assert_eq!(price_from_body(body, "MINT").unwrap(), 0.0);
    }

    #[test]
    fn test_empty_map_is_zero() {
        assert_eq!(price_from_body("{}", "MINT").unwrap(), 0.0);
    }

    #[test]
    fn test_unparsable_price_string_is_zero() {
        let body = r#"{"MINT": {"price": "n/a"}}"#;
        assert_eq!(price_from_body(body, "MINT").unwrap(), 0.0);
    }

    #[test]
    fn test_malformed_body_is_error() {
        let err = price_from_body("<html>oops</html>", "MINT").unwrap_err();
        assert!(matches!(err, ClientError::PriceUnavailable(_)));
    }
}
