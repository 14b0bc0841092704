//! Core HTTP client for the Alpha Vantage time-series API.
//!
//! The [`AlphaVantageClient`] struct is the entry point for all stock-data
//! operations. It wraps [`reqwest::Client`] with the API key and the quota
//! scheduler, and performs exactly one HTTP GET per fetch — no retries.
//! Failures surface as typed [`AdvisorError`] outcomes; the provider
//! answers soft failures inside 2xx bodies, so the body is inspected for
//! its two known failure markers before the series is extracted.
//!
//! Stock operations are added to `AlphaVantageClient` via an `impl` block
//! in [`crate::api::stocks`].

use serde_json::Value;

use crate::constants::{ALPHA_VANTAGE_BASE_URL, ALPHA_VANTAGE_KEY_VAR, UPSTREAM_TIMEOUT_SECS};
use crate::error::{AdvisorError, Result};
use crate::quota::QuotaScheduler;
use crate::types::quote::{RawSeries, SeriesFunction};

/// Core HTTP client for the quote provider.
///
/// Owns its `reqwest::Client` (bounded request timeout, built once at
/// construction) and the free-tier quota scheduler used by batch fetches.
///
/// # Example
///
/// ```no_run
/// use finadvisor_rs::client::AlphaVantageClient;
///
/// # #[tokio::main]
/// # async fn main() -> finadvisor_rs::error::Result<()> {
/// let client = AlphaVantageClient::new("your-api-key");
/// let summary = client.market_summary().await;
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone)]
pub struct AlphaVantageClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
    quota: QuotaScheduler,
}

impl AlphaVantageClient {
    /// Create a new client with the given API key.
    ///
    /// Uses the default query endpoint and the free-tier quota.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, ALPHA_VANTAGE_BASE_URL)
    }

    /// Create a new client pointing at a custom base URL.
    ///
    /// Useful for testing against a mock server.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
            .build()
            .expect("failed to build reqwest client");

        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
            quota: QuotaScheduler::alpha_vantage_free_tier(),
        }
    }

    /// Replace the quota scheduler (e.g. for a paid tier's higher limit).
    pub fn with_quota(mut self, quota: QuotaScheduler) -> Self {
        self.quota = quota;
        self
    }

    /// Create a client from the `ALPHA_VANTAGE_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        match std::env::var(ALPHA_VANTAGE_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(AdvisorError::MissingConfig(
                "Alpha Vantage API key is not configured",
            )),
        }
    }

    /// Returns the base URL.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    /// Returns the quota scheduler pacing this client's batch fetches.
    pub fn quota(&self) -> &QuotaScheduler {
        &self.quota
    }

    // -----------------------------------------------------------------------
    // Fetch
    // -----------------------------------------------------------------------

    /// Perform one time-series GET and return the raw series payload.
    ///
    /// A single attempt per call; retry policy, if any, belongs to the
    /// caller (the batch aggregator performs none — failures surface as
    /// per-symbol markers).
    pub async fn fetch_series(
        &self,
        function: &SeriesFunction,
        symbol: &str,
    ) -> Result<RawSeries> {
        tracing::debug!(%symbol, function = function.name(), "GET time series");

        let resp = self
            .http
            .get(&self.base_url)
            .query(&function.query_params(symbol))
            .query(&[("apikey", self.api_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        let bytes = resp.bytes().await.unwrap_or_default();

        if !status.is_success() {
            return Err(AdvisorError::HttpStatus {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        let payload: Value = serde_json::from_slice(&bytes)?;
        parse_series_payload(function.series_key(), payload)
    }
}

/// Inspect a 2xx body for the provider's soft-failure markers and extract
/// the raw series.
///
/// - `"Error Message"` present → upstream error with the provider's text.
/// - `"Note"` present → the free-tier quota-exceeded notice.
/// - series key absent → no data for this symbol/function.
pub(crate) fn parse_series_payload(series_key: &str, payload: Value) -> Result<RawSeries> {
    if let Some(message) = payload.get("Error Message") {
        let message = message
            .as_str()
            .map(str::to_owned)
            .unwrap_or_else(|| message.to_string());
        return Err(AdvisorError::Upstream(message));
    }

    if payload.get("Note").is_some() {
        return Err(AdvisorError::RateLimited);
    }

    let Value::Object(mut body) = payload else {
        return Err(AdvisorError::NoData);
    };
    let Some(series) = body.remove(series_key) else {
        return Err(AdvisorError::NoData);
    };

    serde_json::from_value(series).map_err(AdvisorError::Json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    const SERIES_KEY: &str = "Time Series (5min)";

    #[test]
    fn well_formed_series_parses() {
        let payload = json!({
            "Meta Data": { "2. Symbol": "RELIANCE.BSE" },
            SERIES_KEY: {
                "2025-11-02 10:00:00": {
                    "1. open": "2450.00",
                    "2. high": "2462.55",
                    "3. low": "2448.10",
                    "4. close": "2456.75",
                    "5. volume": "125300"
                }
            }
        });

        let series = parse_series_payload(SERIES_KEY, payload).expect("series should parse");
        assert_eq!(series.len(), 1);
        assert_eq!(series["2025-11-02 10:00:00"].close, "2456.75");
    }

    #[test]
    fn quota_notice_maps_to_rate_limited() {
        let payload = json!({
            "Note": "Thank you for using Alpha Vantage! Our standard API rate limit is 5 requests per minute."
        });
        assert!(matches!(
            parse_series_payload(SERIES_KEY, payload),
            Err(AdvisorError::RateLimited)
        ));
    }

    #[test]
    fn explicit_error_message_maps_to_upstream_error() {
        let payload = json!({
            "Error Message": "Invalid API call. Please retry or visit the documentation."
        });
        match parse_series_payload(SERIES_KEY, payload) {
            Err(AdvisorError::Upstream(message)) => {
                assert!(message.starts_with("Invalid API call"));
            }
            other => panic!("expected upstream error, got {other:?}"),
        }
    }

    #[test]
    fn error_message_is_checked_before_the_quota_notice() {
        let payload = json!({
            "Error Message": "Invalid API call.",
            "Note": "rate limit"
        });
        assert!(matches!(
            parse_series_payload(SERIES_KEY, payload),
            Err(AdvisorError::Upstream(_))
        ));
    }

    #[test]
    fn missing_series_key_maps_to_no_data() {
        let payload = json!({ "Meta Data": { "2. Symbol": "UNKNOWN.BSE" } });
        assert!(matches!(
            parse_series_payload(SERIES_KEY, payload),
            Err(AdvisorError::NoData)
        ));
    }

    #[test]
    fn from_env_without_a_key_is_a_configuration_error() {
        // Temporarily clear the variable for this process.
        // SAFETY: tests in this module do not race on this variable.
        unsafe { std::env::remove_var(ALPHA_VANTAGE_KEY_VAR) };
        match AlphaVantageClient::from_env() {
            Err(AdvisorError::MissingConfig(message)) => {
                assert_eq!(message, "Alpha Vantage API key is not configured");
            }
            other => panic!("expected missing-config error, got {other:?}"),
        }
    }
}
