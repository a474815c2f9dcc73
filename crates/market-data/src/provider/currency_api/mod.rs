//! Currency API provider for daily USD exchange rates.
//!
//! Fetches the open-source Currency API (`@fawazahmed0/currency-api`) table
//! from the jsDelivr CDN. The endpoint needs no key, no parameters and no
//! headers, and publishes one table per day.

mod models;

use std::str::FromStr;
use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use rust_decimal::Decimal;
use serde_json::Value;
use tracing::{debug, warn};

use crate::errors::MarketDataError;
use crate::models::{RateTable, RatesSnapshot};
use crate::provider::RateProvider;

use models::CurrencyApiResponse;

/// Provider ID constant
const PROVIDER_ID: &str = "CURRENCY_API";

/// Base currency of the table served by [`DEFAULT_RATES_URL`]
const BASE_CURRENCY: &str = "usd";

/// Latest USD table on the jsDelivr CDN.
pub const DEFAULT_RATES_URL: &str =
    "https://cdn.jsdelivr.net/npm/@fawazahmed0/currency-api@latest/v1/currencies/usd.json";

/// Default HTTP request timeout
const REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

/// Currency API provider.
///
/// # Example
///
/// ```ignore
/// use usdconv_market_data::{CurrencyApiProvider, RateProvider};
///
/// let provider = CurrencyApiProvider::new();
/// let snapshot = provider.fetch_latest_rates().await?;
/// ```
pub struct CurrencyApiProvider {
    client: Client,
    endpoint: String,
}

impl CurrencyApiProvider {
    /// Create a provider for the public CDN endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_RATES_URL, REQUEST_TIMEOUT)
    }

    /// Create a provider for a custom endpoint serving the same document.
    pub fn with_endpoint(endpoint: impl Into<String>, timeout: Duration) -> Self {
        let client = Client::builder()
            .timeout(timeout)
            .build()
            .unwrap_or_else(|_| Client::new());

        Self {
            client,
            endpoint: endpoint.into(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    fn map_request_error(e: reqwest::Error) -> MarketDataError {
        if e.is_timeout() {
            MarketDataError::Timeout {
                provider: PROVIDER_ID.to_string(),
            }
        } else {
            MarketDataError::Network(e)
        }
    }
}

impl Default for CurrencyApiProvider {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl RateProvider for CurrencyApiProvider {
    fn id(&self) -> &'static str {
        PROVIDER_ID
    }

    async fn fetch_latest_rates(&self) -> Result<RatesSnapshot, MarketDataError> {
        debug!("Fetching latest rates from {}", self.endpoint);

        let response = self
            .client
            .get(&self.endpoint)
            .send()
            .await
            .map_err(Self::map_request_error)?;

        let status = response.status();
        if !status.is_success() {
            return Err(MarketDataError::HttpStatus {
                provider: PROVIDER_ID.to_string(),
                status: status.as_u16(),
            });
        }

        let body = response.text().await.map_err(Self::map_request_error)?;
        let snapshot = parse_rates_body(&body)?;

        debug!(
            "Fetched {} rates (as of {})",
            snapshot.rates.len(),
            snapshot.last_updated.as_deref().unwrap_or("unknown date")
        );
        Ok(snapshot)
    }
}

/// Parse a Currency API `usd.json` body into a snapshot.
///
/// The body must be a JSON object with a `usd` object. Entries that are not
/// positive numbers are skipped; the remaining codes keep the order they had
/// in the body.
pub fn parse_rates_body(body: &str) -> Result<RatesSnapshot, MarketDataError> {
    let parsed: CurrencyApiResponse = serde_json::from_str(body)
        .map_err(|e| MarketDataError::malformed(PROVIDER_ID, e.to_string()))?;

    let mut rates = RateTable::new();
    for (code, value) in &parsed.usd {
        let inserted = parse_rate(value).is_some_and(|rate| rates.insert(code, rate));
        if !inserted {
            warn!("Skipping invalid rate for '{}': {}", code, value);
        }
    }

    let mut snapshot = RatesSnapshot::new(BASE_CURRENCY, rates, PROVIDER_ID);
    if let Some(date) = parsed.date.filter(|d| !d.trim().is_empty()) {
        snapshot = snapshot.with_last_updated(date);
    }
    Ok(snapshot)
}

/// Reads a JSON number through its textual form so the decimal value is
/// exactly what the source published.
fn parse_rate(value: &Value) -> Option<Decimal> {
    let Value::Number(number) = value else {
        return None;
    };
    let text = number.to_string();
    Decimal::from_str(&text)
        .or_else(|_| Decimal::from_scientific(&text))
        .ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_provider_id() {
        let provider = CurrencyApiProvider::new();
        assert_eq!(provider.id(), "CURRENCY_API");
        assert_eq!(provider.endpoint(), DEFAULT_RATES_URL);
    }

    #[test]
    fn test_parse_full_body() {
        let body = r#"{"date": "2026-10-17", "usd": {"eur": 0.93, "jpy": 150.2}}"#;
        let snapshot = parse_rates_body(body).unwrap();

        assert_eq!(snapshot.base, "usd");
        assert_eq!(snapshot.source, "CURRENCY_API");
        assert_eq!(snapshot.last_updated.as_deref(), Some("2026-10-17"));
        assert_eq!(snapshot.rates.get("eur"), Some(dec!(0.93)));
        assert_eq!(snapshot.rates.get("jpy"), Some(dec!(150.2)));
    }

    #[test]
    fn test_parse_keeps_body_order() {
        let body = r#"{"usd": {"zwl": 322.0, "aed": 3.6725, "mxn": 18.1}}"#;
        let snapshot = parse_rates_body(body).unwrap();

        assert_eq!(snapshot.rates.first_code(), Some("zwl"));
        assert_eq!(
            snapshot.rates.codes().collect::<Vec<_>>(),
            vec!["zwl", "aed", "mxn"]
        );
    }

    #[test]
    fn test_parse_without_date() {
        let snapshot = parse_rates_body(r#"{"usd": {"eur": 0.93}}"#).unwrap();
        assert!(snapshot.last_updated.is_none());

        let snapshot = parse_rates_body(r#"{"date": "", "usd": {"eur": 0.93}}"#).unwrap();
        assert!(snapshot.last_updated.is_none());
    }

    #[test]
    fn test_parse_scientific_notation() {
        let snapshot = parse_rates_body(r#"{"usd": {"btc": 1.5e-5}}"#).unwrap();
        assert_eq!(snapshot.rates.get("btc"), Some(dec!(0.000015)));
    }

    #[test]
    fn test_parse_skips_invalid_entries() {
        let body = r#"{"usd": {"eur": 0.93, "bad": "x", "neg": -2, "zero": 0, "nil": null}}"#;
        let snapshot = parse_rates_body(body).unwrap();

        assert_eq!(snapshot.rates.len(), 1);
        assert!(snapshot.rates.contains("eur"));
        assert!(!snapshot.rates.contains("neg"));
    }

    #[test]
    fn test_parse_empty_table() {
        let snapshot = parse_rates_body(r#"{"date": "2026-10-17", "usd": {}}"#).unwrap();
        assert!(snapshot.rates.is_empty());
    }

    #[test]
    fn test_parse_rejects_malformed_bodies() {
        for body in [
            "",
            "not json",
            "[]",
            r#"{"date": "2026-10-17"}"#,
            r#"{"usd": [1, 2]}"#,
            r#"{"usd": null}"#,
        ] {
            let result = parse_rates_body(body);
            assert!(
                matches!(result, Err(MarketDataError::MalformedResponse { .. })),
                "expected malformed for {:?}",
                body
            );
        }
    }
}
