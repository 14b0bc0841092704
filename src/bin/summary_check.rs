//! Binary to run the watch-list market summary against the real quote
//! provider and print the resulting records, for inspecting live behavior
//! under the free-tier quota.
//!
//! # Usage
//!
//! ```sh
//! export ALPHA_VANTAGE_KEY="your-api-key"
//! cargo run --bin summary_check --features cli
//! ```

use finadvisor_rs::client::AlphaVantageClient;
use finadvisor_rs::constants::TOP_STOCKS;

#[tokio::main]
async fn main() -> finadvisor_rs::error::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let client = AlphaVantageClient::from_env()?;

    let worst_case = client.quota().dispatch_offset(TOP_STOCKS.len() - 1);
    println!(
        "Fetching {} symbols (free tier — expect up to ~{}s)…",
        TOP_STOCKS.len(),
        worst_case.as_secs()
    );

    let summary = client.market_summary().await;
    for record in &summary.data {
        match &record.error {
            Some(error) => println!("{:<14} unavailable: {error}", record.symbol),
            None => println!(
                "{:<14} {:>10}  {:>8}  at {}",
                record.symbol, record.price, record.change, record.time
            ),
        }
    }

    Ok(())
}
