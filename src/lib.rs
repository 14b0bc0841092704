//! # finadvisor-rs
//!
//! Backend core for a personal-finance advisor. The crate speaks to three
//! upstream providers — a rate-limited stock-quote API, a news API, and an
//! LLM chat API — and computes SIP maturities, exposing typed async
//! operations and stable JSON response shapes for a routing layer to map
//! onto endpoints.
//!
//! The heart of the crate is the stock aggregation pipeline: the quota
//! scheduler ([`quota`]) paces a batch of symbol fetches under the
//! provider's per-minute limit, the client ([`client`]) turns each call's
//! soft-failure markers into typed outcomes, the normalizer ([`series`])
//! orders raw payloads newest-first, and the aggregator
//! ([`api::stocks`]) folds per-symbol results — success or error — into
//! one summary, never aborting the batch.
//!
//! ## Quick Start
//!
//! ```no_run
//! use finadvisor_rs::client::AlphaVantageClient;
//!
//! #[tokio::main]
//! async fn main() -> finadvisor_rs::error::Result<()> {
//!     let client = AlphaVantageClient::from_env()?;
//!     let summary = client.market_summary().await;
//!     for record in &summary.data {
//!         println!("{}: {} ({})", record.symbol, record.price, record.change);
//!     }
//!     Ok(())
//! }
//! ```

pub mod api;
pub mod auth;
pub mod client;
pub mod constants;
pub mod error;
pub mod quota;
pub mod series;
pub mod types;

/// Re-export the quote client at crate root for convenience.
pub use client::AlphaVantageClient;
/// Re-export the proxy clients alongside it.
pub use api::chat::GeminiClient;
pub use api::news::NewsClient;
/// Re-export the error type and Result alias.
pub use error::{AdvisorError, Result};
