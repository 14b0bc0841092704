//! Series normalizer — raw provider payloads to ordered OHLCV sequences.
//!
//! The quote provider keys every series by a provider-native timestamp
//! string (`"2025-11-02 15:30:00"` intraday, `"2025-11-02"` daily) with no
//! implied order. [`TimeSeries::from_raw`] imposes descending-timestamp
//! order and parses the string-typed OHLCV fields, so "latest" is always
//! index 0 and "previous" index 1. Display formatting for prices, change
//! percentages, and clock times lives here too — the derived views are part
//! of the normalizer's contract.

use chrono::NaiveDateTime;

use crate::error::{AdvisorError, Result};
use crate::types::quote::{RawBar, RawSeries};

/// Literal marker reported when a derived value cannot be computed.
pub const UNAVAILABLE: &str = "N/A";

/// One OHLCV observation. Immutable once produced.
#[derive(Debug, Clone, PartialEq)]
pub struct QuotePoint {
    /// Provider-native timestamp (date + time to the minute for intraday,
    /// date only for daily).
    pub timestamp: String,
    pub open: f64,
    pub high: f64,
    pub low: f64,
    pub close: f64,
    pub volume: u64,
}

/// An ordered sequence of [`QuotePoint`], newest first.
#[derive(Debug, Clone, Default)]
pub struct TimeSeries {
    points: Vec<QuotePoint>,
}

impl TimeSeries {
    /// Normalize a raw timestamp-keyed series into descending-timestamp
    /// order, parsing each numeric field.
    ///
    /// The provider's timestamp format sorts lexicographically, so the
    /// `BTreeMap`'s ascending key order reversed is newest-first.
    pub fn from_raw(raw: RawSeries) -> Result<Self> {
        let mut points = Vec::with_capacity(raw.len());
        for (timestamp, bar) in raw.into_iter().rev() {
            points.push(parse_point(timestamp, bar)?);
        }
        Ok(Self { points })
    }

    /// Most recent observation, if any.
    pub fn latest(&self) -> Option<&QuotePoint> {
        self.points.first()
    }

    /// Observation immediately before the latest. `None` for a
    /// single-point series — change is then reported as unavailable.
    pub fn previous(&self) -> Option<&QuotePoint> {
        self.points.get(1)
    }

    /// The `n` most recent observations (fewer when the series is shorter).
    pub fn head(&self, n: usize) -> &[QuotePoint] {
        &self.points[..self.points.len().min(n)]
    }

    /// All observations, newest first.
    pub fn points(&self) -> &[QuotePoint] {
        &self.points
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }
}

fn parse_point(timestamp: String, bar: RawBar) -> Result<QuotePoint> {
    Ok(QuotePoint {
        open: parse_price(&bar.open)?,
        high: parse_price(&bar.high)?,
        low: parse_price(&bar.low)?,
        close: parse_price(&bar.close)?,
        volume: bar
            .volume
            .trim()
            .parse()
            .map_err(|_| AdvisorError::Malformed(format!("volume {:?}", bar.volume)))?,
        timestamp,
    })
}

fn parse_price(value: &str) -> Result<f64> {
    value
        .trim()
        .parse()
        .map_err(|_| AdvisorError::Malformed(format!("price {value:?}")))
}

// ---------------------------------------------------------------------------
// Display formatting
// ---------------------------------------------------------------------------

/// Format a price for display with 2-decimal precision.
pub fn format_price(value: f64) -> String {
    format!("{value:.2}")
}

/// Percentage change of `current` vs. `previous`, sign-prefixed, 2 decimals.
///
/// Returns the [`UNAVAILABLE`] marker when `previous` is absent or zero —
/// insufficient data is reported distinctly from a genuine flat `+0.00%`,
/// and nothing ever divides by zero.
pub fn format_change(current: f64, previous: Option<f64>) -> String {
    let Some(previous) = previous else {
        return UNAVAILABLE.to_owned();
    };
    if previous == 0.0 {
        return UNAVAILABLE.to_owned();
    }

    let change = (current - previous) / previous * 100.0;
    let sign = if change >= 0.0 { "+" } else { "" };
    format!("{sign}{change:.2}%")
}

/// Extract the `HH:MM` clock component from a provider timestamp.
///
/// `"2025-11-02 15:30:00"` → `"15:30"`. Inputs without a clock component
/// (daily dates, already-bare times) pass through unchanged when no `HH:MM`
/// pattern is found.
pub fn format_clock_time(timestamp: &str) -> String {
    if let Ok(dt) = NaiveDateTime::parse_from_str(timestamp, "%Y-%m-%d %H:%M:%S") {
        return dt.format("%H:%M").to_string();
    }
    extract_clock(timestamp)
        .map(str::to_owned)
        .unwrap_or_else(|| timestamp.to_owned())
}

/// First `dd:dd` substring of `s`, if any.
fn extract_clock(s: &str) -> Option<&str> {
    let bytes = s.as_bytes();
    bytes.windows(5).enumerate().find_map(|(i, w)| {
        let clock = w[0].is_ascii_digit()
            && w[1].is_ascii_digit()
            && w[2] == b':'
            && w[3].is_ascii_digit()
            && w[4].is_ascii_digit();
        clock.then(|| &s[i..i + 5])
    })
}
