//! Per-symbol summaries and the stock operation response shapes.
//!
//! Field names are part of the public wire contract and must stay stable;
//! frontends bind to them directly.

use serde::Serialize;

use crate::error::AdvisorError;
use crate::series::{
    QuotePoint, TimeSeries, UNAVAILABLE, format_change, format_clock_time, format_price,
};

// ---------------------------------------------------------------------------
// Market summary
// ---------------------------------------------------------------------------

/// Derived display record for one watch-list symbol.
///
/// Always produced, even when the symbol's fetch failed — the failure is
/// scoped to this record's `error` field and the display fields fall back
/// to the unavailable marker.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SymbolSummary {
    pub symbol: String,
    /// Latest close, 2-decimal display, or `"N/A"`.
    pub price: String,
    /// Change vs. the previous point, sign-prefixed, or `"N/A"`.
    pub change: String,
    /// Clock time (`HH:MM`) of the latest point, or `"N/A"`.
    pub time: String,
    /// Why this symbol has no data, when it doesn't.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl SymbolSummary {
    /// Build the summary from a normalized series' latest two points.
    ///
    /// An empty series degrades to the unavailable record rather than
    /// erroring — the batch contract guarantees one record per symbol.
    pub fn from_series(symbol: impl Into<String>, series: &TimeSeries) -> Self {
        let Some(latest) = series.latest() else {
            return Self::unavailable(symbol, AdvisorError::NoData.to_string());
        };

        Self {
            symbol: symbol.into(),
            price: format_price(latest.close),
            change: format_change(latest.close, series.previous().map(|p| p.close)),
            time: format_clock_time(&latest.timestamp),
            error: None,
        }
    }

    /// Error-marked record: price/change/time all `"N/A"`.
    pub fn unavailable(symbol: impl Into<String>, error: impl Into<String>) -> Self {
        Self {
            symbol: symbol.into(),
            price: UNAVAILABLE.to_owned(),
            change: UNAVAILABLE.to_owned(),
            time: UNAVAILABLE.to_owned(),
            error: Some(error.into()),
        }
    }
}

/// Response shape of the market summary operation.
#[derive(Debug, Clone, Serialize)]
pub struct MarketSummary {
    /// Always `true` — per-symbol failures live inside `data`.
    pub success: bool,
    pub data: Vec<SymbolSummary>,
}

impl MarketSummary {
    pub fn new(data: Vec<SymbolSummary>) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

// ---------------------------------------------------------------------------
// Live quote
// ---------------------------------------------------------------------------

/// Response shape of the single-symbol live quote operation.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LiveQuote {
    pub success: bool,
    pub symbol: String,
    pub price: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub volume: u64,
    /// Full provider timestamp of the latest point.
    pub last_updated: String,
}

impl LiveQuote {
    pub fn from_latest(symbol: impl Into<String>, latest: &QuotePoint) -> Self {
        Self {
            success: true,
            symbol: symbol.into(),
            price: format_price(latest.close),
            open: format_price(latest.open),
            high: format_price(latest.high),
            low: format_price(latest.low),
            volume: latest.volume,
            last_updated: latest.timestamp.clone(),
        }
    }
}

// ---------------------------------------------------------------------------
// Daily series & intraday history
// ---------------------------------------------------------------------------

/// One trading day in the daily series response.
#[derive(Debug, Clone, Serialize)]
pub struct DailyBar {
    pub date: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: u64,
}

impl From<&QuotePoint> for DailyBar {
    fn from(point: &QuotePoint) -> Self {
        Self {
            date: point.timestamp.clone(),
            open: format_price(point.open),
            high: format_price(point.high),
            low: format_price(point.low),
            close: format_price(point.close),
            volume: point.volume,
        }
    }
}

/// Response shape of the daily series operation (at most 5 entries).
#[derive(Debug, Clone, Serialize)]
pub struct DailySeries {
    pub success: bool,
    pub symbol: String,
    pub data: Vec<DailyBar>,
}

/// One intraday entry in the history response.
#[derive(Debug, Clone, Serialize)]
pub struct HistoryBar {
    pub timestamp: String,
    pub open: String,
    pub high: String,
    pub low: String,
    pub close: String,
    pub volume: u64,
}

impl From<&QuotePoint> for HistoryBar {
    fn from(point: &QuotePoint) -> Self {
        Self {
            timestamp: point.timestamp.clone(),
            open: format_price(point.open),
            high: format_price(point.high),
            low: format_price(point.low),
            close: format_price(point.close),
            volume: point.volume,
        }
    }
}

/// Response shape of the intraday history operation (at most 10 entries).
#[derive(Debug, Clone, Serialize)]
pub struct IntradayHistory {
    pub success: bool,
    pub symbol: String,
    pub data: Vec<HistoryBar>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::quote::{RawBar, RawSeries};

    fn two_point_series() -> TimeSeries {
        let raw: RawSeries = [
            (
                "10:00".to_string(),
                RawBar {
                    open: "99.0".into(),
                    high: "101.0".into(),
                    low: "98.5".into(),
                    close: "100".into(),
                    volume: "1200".into(),
                },
            ),
            (
                "09:55".to_string(),
                RawBar {
                    open: "94.0".into(),
                    high: "96.0".into(),
                    low: "93.5".into(),
                    close: "95".into(),
                    volume: "900".into(),
                },
            ),
        ]
        .into_iter()
        .collect();
        TimeSeries::from_raw(raw).expect("valid series")
    }

    #[test]
    fn summary_derives_price_change_and_time_from_the_latest_two_points() {
        let summary = SymbolSummary::from_series("A.BSE", &two_point_series());
        assert_eq!(summary.price, "100.00");
        assert_eq!(summary.change, "+5.26%");
        assert_eq!(summary.time, "10:00");
        assert!(summary.error.is_none());
    }

    #[test]
    fn single_point_series_reports_change_as_unavailable() {
        let raw: RawSeries = [(
            "2025-11-02 10:00:00".to_string(),
            RawBar {
                open: "99.0".into(),
                high: "101.0".into(),
                low: "98.5".into(),
                close: "100".into(),
                volume: "1200".into(),
            },
        )]
        .into_iter()
        .collect();
        let series = TimeSeries::from_raw(raw).expect("valid series");

        let summary = SymbolSummary::from_series("A.BSE", &series);
        assert_eq!(summary.price, "100.00");
        assert_eq!(summary.change, UNAVAILABLE);
        assert!(summary.error.is_none());
    }

    #[test]
    fn empty_series_degrades_to_the_unavailable_record() {
        let summary = SymbolSummary::from_series("A.BSE", &TimeSeries::default());
        assert_eq!(summary.price, UNAVAILABLE);
        assert_eq!(
            summary.error.as_deref(),
            Some("No data available for this symbol")
        );
    }

    #[test]
    fn error_field_is_omitted_from_successful_records() {
        let json = serde_json::to_value(SymbolSummary::from_series("A.BSE", &two_point_series()))
            .expect("summary serializes");
        assert!(json.get("error").is_none());

        let json = serde_json::to_value(SymbolSummary::unavailable("B.BSE", "boom"))
            .expect("summary serializes");
        assert_eq!(json["price"], "N/A");
        assert_eq!(json["error"], "boom");
    }

    #[test]
    fn live_quote_serializes_last_updated_in_camel_case() {
        let series = two_point_series();
        let quote = LiveQuote::from_latest("A.BSE", series.latest().expect("non-empty"));
        let json = serde_json::to_value(quote).expect("quote serializes");
        assert_eq!(json["success"], true);
        assert_eq!(json["lastUpdated"], "10:00");
        assert_eq!(json["volume"], 1200);
    }
}
