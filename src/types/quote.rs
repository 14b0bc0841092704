//! Quote-provider wire types — raw series payloads and function selection.

use std::collections::BTreeMap;

use serde::Deserialize;

/// A raw time-series payload: provider-native timestamp string → OHLCV bar.
///
/// The source representation implies no order; the `BTreeMap` keeps keys
/// unique and lets the normalizer impose descending-timestamp order.
pub type RawSeries = BTreeMap<String, RawBar>;

/// One bar exactly as the provider serializes it — every field is a
/// numeric string under the provider's fixed positional names.
#[derive(Debug, Clone, Deserialize)]
pub struct RawBar {
    #[serde(rename = "1. open")]
    pub open: String,
    #[serde(rename = "2. high")]
    pub high: String,
    #[serde(rename = "3. low")]
    pub low: String,
    #[serde(rename = "4. close")]
    pub close: String,
    #[serde(rename = "5. volume")]
    pub volume: String,
}

/// Time-series function and parameter selection for one upstream call.
///
/// Each variant knows its query parameters and the body key the provider
/// nests the series under.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeriesFunction {
    /// 5-minute intraday bars, most recent ~100 points.
    IntradayCompact,
    /// Daily bars, most recent ~100 trading days.
    DailyCompact,
    /// Full 5-minute intraday history, optionally filtered to one
    /// `YYYY-MM` month.
    IntradayFull { month: Option<String> },
}

impl SeriesFunction {
    /// Provider function name, for diagnostics and the `function` parameter.
    pub fn name(&self) -> &'static str {
        match self {
            Self::IntradayCompact | Self::IntradayFull { .. } => "TIME_SERIES_INTRADAY",
            Self::DailyCompact => "TIME_SERIES_DAILY",
        }
    }

    /// Body key the provider nests this function's series under.
    pub fn series_key(&self) -> &'static str {
        match self {
            Self::IntradayCompact | Self::IntradayFull { .. } => "Time Series (5min)",
            Self::DailyCompact => "Time Series (Daily)",
        }
    }

    /// Query parameters for this function, excluding the API key (the
    /// client appends that).
    pub fn query_params(&self, symbol: &str) -> Vec<(&'static str, String)> {
        let mut params = vec![
            ("function", self.name().to_owned()),
            ("symbol", symbol.to_owned()),
        ];
        match self {
            Self::IntradayCompact => {
                params.push(("interval", "5min".to_owned()));
                params.push(("outputsize", "compact".to_owned()));
            }
            Self::DailyCompact => {
                params.push(("outputsize", "compact".to_owned()));
            }
            Self::IntradayFull { month } => {
                params.push(("interval", "5min".to_owned()));
                params.push(("outputsize", "full".to_owned()));
                if let Some(month) = month {
                    params.push(("month", month.clone()));
                }
            }
        }
        params
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn param<'a>(params: &'a [(&'static str, String)], key: &str) -> Option<&'a str> {
        params
            .iter()
            .find(|(k, _)| *k == key)
            .map(|(_, v)| v.as_str())
    }

    #[test]
    fn intraday_compact_selects_five_minute_bars() {
        let params = SeriesFunction::IntradayCompact.query_params("RELIANCE.BSE");
        assert_eq!(param(&params, "function"), Some("TIME_SERIES_INTRADAY"));
        assert_eq!(param(&params, "symbol"), Some("RELIANCE.BSE"));
        assert_eq!(param(&params, "interval"), Some("5min"));
        assert_eq!(param(&params, "outputsize"), Some("compact"));
        assert_eq!(
            SeriesFunction::IntradayCompact.series_key(),
            "Time Series (5min)"
        );
    }

    #[test]
    fn daily_compact_has_no_interval() {
        let params = SeriesFunction::DailyCompact.query_params("TCS.BSE");
        assert_eq!(param(&params, "function"), Some("TIME_SERIES_DAILY"));
        assert_eq!(param(&params, "interval"), None);
        assert_eq!(
            SeriesFunction::DailyCompact.series_key(),
            "Time Series (Daily)"
        );
    }

    #[test]
    fn full_history_carries_the_optional_month_filter() {
        let without = SeriesFunction::IntradayFull { month: None }.query_params("INFY.BSE");
        assert_eq!(param(&without, "outputsize"), Some("full"));
        assert_eq!(param(&without, "month"), None);

        let with = SeriesFunction::IntradayFull {
            month: Some("2025-09".to_owned()),
        }
        .query_params("INFY.BSE");
        assert_eq!(param(&with, "month"), Some("2025-09"));
    }

    #[test]
    fn raw_bar_deserializes_the_provider_field_names() {
        let bar: RawBar = serde_json::from_str(
            r#"{
                "1. open": "2450.00",
                "2. high": "2462.55",
                "3. low": "2448.10",
                "4. close": "2456.75",
                "5. volume": "125300"
            }"#,
        )
        .expect("provider bar should deserialize");
        assert_eq!(bar.close, "2456.75");
        assert_eq!(bar.volume, "125300");
    }
}
