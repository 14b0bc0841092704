//! Constants for the advisor backend core.
//!
//! Contains upstream base URLs, the summary watch-list, rate limit values,
//! and the environment variable names the deployment provides credentials
//! through. These are used internally by the provider clients but are also
//! exported for advanced usage.

// ---------------------------------------------------------------------------
// Base URLs
// ---------------------------------------------------------------------------

/// Query endpoint for the Alpha Vantage time-series API.
pub const ALPHA_VANTAGE_BASE_URL: &str = "https://www.alphavantage.co/query";

/// Base URL for the Gemini `generateContent` API (model path is appended).
pub const GEMINI_BASE_URL: &str = "https://generativelanguage.googleapis.com/v1beta";

/// Gemini model used for financial-advice completions.
pub const GEMINI_MODEL: &str = "gemini-2.5-flash";

/// Top-headlines endpoint for NewsAPI.org.
pub const NEWS_API_BASE_URL: &str = "https://newsapi.org/v2/top-headlines";

// ---------------------------------------------------------------------------
// Environment variables
// ---------------------------------------------------------------------------

/// Environment variable holding the Alpha Vantage API key.
pub const ALPHA_VANTAGE_KEY_VAR: &str = "ALPHA_VANTAGE_KEY";

/// Environment variable holding the Gemini API key.
pub const GEMINI_KEY_VAR: &str = "GEMINI_API_KEY";

/// Environment variable holding the NewsAPI.org API key.
pub const NEWS_KEY_VAR: &str = "NEWS_API_KEY";

// ---------------------------------------------------------------------------
// Watch-list
// ---------------------------------------------------------------------------

/// Exchange-qualified tickers tracked by the market summary.
pub const TOP_STOCKS: [&str; 5] = [
    "RELIANCE.BSE",
    "TCS.BSE",
    "INFY.BSE",
    "HDFCBANK.BSE",
    "SBIN.BSE",
];

// ---------------------------------------------------------------------------
// Rate Limits & Timeouts
// ---------------------------------------------------------------------------

/// Rate limit configuration for the upstream providers.
pub mod rate_limits {
    /// Alpha Vantage free-tier limits.
    pub mod alpha_vantage {
        /// Maximum time-series requests per rolling minute.
        pub const PER_MINUTE: u32 = 5;
        /// Maximum time-series requests per day.
        pub const PER_DAY: u32 = 500;
    }
}

/// Per-request timeout applied to every upstream HTTP call, in seconds.
pub const UPSTREAM_TIMEOUT_SECS: u64 = 10;

// ---------------------------------------------------------------------------
// Output slices
// ---------------------------------------------------------------------------

/// Number of trading days returned by the daily series operation.
pub const DAILY_SLICE: usize = 5;

/// Number of intraday entries returned by the history operation.
pub const HISTORY_SLICE: usize = 10;
