//! Stock data operations — watch-list summary, live quote, daily series,
//! and intraday history.
//!
//! The summary is the aggregation core: it fans out one fetch per
//! watch-list symbol, paced by the client's quota scheduler, and folds the
//! outcomes into exactly one record per symbol in input order. A failed
//! symbol never aborts the batch — its record carries the error marker and
//! the other symbols are unaffected. The single-symbol operations bypass
//! the scheduler (batch size 1) and surface failures as their sole result.

use futures_util::future;

use crate::client::AlphaVantageClient;
use crate::constants::{DAILY_SLICE, HISTORY_SLICE, TOP_STOCKS};
use crate::error::{AdvisorError, Result};
use crate::series::TimeSeries;
use crate::types::quote::SeriesFunction;
use crate::types::summary::{
    DailyBar, DailySeries, HistoryBar, IntradayHistory, LiveQuote, MarketSummary, SymbolSummary,
};

impl AlphaVantageClient {
    /// Live prices for the configured watch-list ([`TOP_STOCKS`]).
    ///
    /// Graceful degradation: the response is always success-shaped; failures
    /// are scoped to individual symbol records.
    pub async fn market_summary(&self) -> MarketSummary {
        self.summary_for(&TOP_STOCKS).await
    }

    /// One [`SymbolSummary`] per requested symbol, same order as the input,
    /// regardless of which individual fetches failed or in which order they
    /// completed.
    ///
    /// All fetches run concurrently; the quota scheduler is the sole pacing
    /// mechanism, so a batch never exceeds the provider's per-minute limit
    /// whatever its size. The batch completes only after every symbol
    /// resolves.
    pub async fn summary_for(&self, symbols: &[&str]) -> MarketSummary {
        let tasks = symbols.iter().map(|symbol| self.summarize_symbol(symbol));
        MarketSummary::new(future::join_all(tasks).await)
    }

    async fn summarize_symbol(&self, symbol: &str) -> SymbolSummary {
        self.quota().acquire().await;

        match self
            .normalized_series(&SeriesFunction::IntradayCompact, symbol)
            .await
        {
            Ok(series) => SymbolSummary::from_series(symbol, &series),
            Err(err) => {
                tracing::warn!(%symbol, error = %err, "summary fetch failed");
                SymbolSummary::unavailable(symbol, err.to_string())
            }
        }
    }

    /// Latest intraday quote for one symbol.
    pub async fn live_quote(&self, symbol: &str) -> Result<LiveQuote> {
        let symbol = require_symbol(symbol)?;
        let series = self
            .normalized_series(&SeriesFunction::IntradayCompact, symbol)
            .await?;
        let latest = series.latest().ok_or(AdvisorError::NoData)?;
        Ok(LiveQuote::from_latest(symbol, latest))
    }

    /// Daily OHLCV bars for the last [`DAILY_SLICE`] trading days.
    pub async fn daily_series(&self, symbol: &str) -> Result<DailySeries> {
        let symbol = require_symbol(symbol)?;
        let series = self
            .normalized_series(&SeriesFunction::DailyCompact, symbol)
            .await?;

        Ok(DailySeries {
            success: true,
            symbol: symbol.to_owned(),
            data: series.head(DAILY_SLICE).iter().map(DailyBar::from).collect(),
        })
    }

    /// The [`HISTORY_SLICE`] most recent intraday entries, optionally
    /// filtered to one `YYYY-MM` month (passed through to the provider).
    pub async fn intraday_history(
        &self,
        symbol: &str,
        month: Option<&str>,
    ) -> Result<IntradayHistory> {
        let symbol = require_symbol(symbol)?;
        let function = SeriesFunction::IntradayFull {
            month: month.map(str::to_owned),
        };
        let series = self.normalized_series(&function, symbol).await?;

        Ok(IntradayHistory {
            success: true,
            symbol: symbol.to_owned(),
            data: series
                .head(HISTORY_SLICE)
                .iter()
                .map(HistoryBar::from)
                .collect(),
        })
    }

    async fn normalized_series(
        &self,
        function: &SeriesFunction,
        symbol: &str,
    ) -> Result<TimeSeries> {
        let raw = self.fetch_series(function, symbol).await?;
        TimeSeries::from_raw(raw)
    }
}

/// Caller input validation: a symbol must be present and non-blank.
fn require_symbol(symbol: &str) -> Result<&str> {
    let trimmed = symbol.trim();
    if trimmed.is_empty() {
        return Err(AdvisorError::InvalidArgument(
            "Please provide a symbol parameter".to_owned(),
        ));
    }
    Ok(trimmed)
}
