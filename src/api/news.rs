//! News operations — top business headlines from NewsAPI.org.

use reqwest::StatusCode;

use crate::constants::{NEWS_API_BASE_URL, NEWS_KEY_VAR, UPSTREAM_TIMEOUT_SECS};
use crate::error::{AdvisorError, Result};
use crate::types::news::{Article, Headlines, NewsApiResponse};

/// Client for the news provider's top-headlines endpoint.
#[derive(Debug, Clone)]
pub struct NewsClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl NewsClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, NEWS_API_BASE_URL)
    }

    /// Create a new client pointing at a custom base URL.
    pub fn with_base_url(api_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        let http = reqwest::Client::builder()
            .timeout(std::time::Duration::from_secs(UPSTREAM_TIMEOUT_SECS))
            .build()
            .expect("failed to build reqwest client");

        Self {
            http,
            api_key: api_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Create a client from the `NEWS_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        match std::env::var(NEWS_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(AdvisorError::MissingConfig("NewsAPI key is not configured")),
        }
    }

    /// Fetch the 10 most recent US business headlines, reshaped to the
    /// produced article contract.
    pub async fn top_business_headlines(&self) -> Result<Headlines> {
        tracing::debug!("GET top business headlines");

        let resp = self
            .http
            .get(&self.base_url)
            .query(&[("category", "business"), ("country", "us"), ("pageSize", "10")])
            .query(&[("apiKey", self.api_key.as_str())])
            .send()
            .await?;

        let status = resp.status();
        let bytes = resp.bytes().await.unwrap_or_default();

        if status == StatusCode::UNAUTHORIZED {
            return Err(AdvisorError::MissingConfig(
                "NewsAPI authentication failed. Please check your API key.",
            ));
        }
        if status == StatusCode::TOO_MANY_REQUESTS {
            return Err(AdvisorError::RateLimited);
        }
        if !status.is_success() {
            return Err(AdvisorError::HttpStatus {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        let upstream: NewsApiResponse = serde_json::from_slice(&bytes)?;
        Ok(Headlines {
            success: true,
            total_results: upstream.total_results,
            articles: upstream.articles.into_iter().map(Article::from).collect(),
        })
    }
}
