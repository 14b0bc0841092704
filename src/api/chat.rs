//! Chat operations — LLM-backed financial advice.
//!
//! A thin proxy around the Gemini `generateContent` endpoint: the user's
//! question is wrapped in a fixed advisor system prompt, and the first
//! candidate's text becomes the reply.

use reqwest::StatusCode;

use crate::constants::{GEMINI_BASE_URL, GEMINI_KEY_VAR, GEMINI_MODEL, UPSTREAM_TIMEOUT_SECS};
use crate::error::{AdvisorError, Result};
use crate::types::chat::{ChatReply, GenerateContentRequest, GenerateContentResponse};

/// Context prepended to every user question.
const ADVISOR_CONTEXT: &str = "You are a helpful financial advisor. Answer the user's \
financial questions in a clear, concise, and professional manner. Provide practical advice \
based on sound financial principles.";

/// Reply used when the model returned no candidate text.
const FALLBACK_REPLY: &str = "Sorry, I could not generate a response. Please try again.";

/// Client for the LLM chat provider.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    api_key: String,
    base_url: String,
}

impl GeminiClient {
    /// Create a new client with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self::with_base_url(api_key, GEMINI_BASE_URL)
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

    /// Create a client from the `GEMINI_API_KEY` environment variable.
    pub fn from_env() -> Result<Self> {
        match std::env::var(GEMINI_KEY_VAR) {
            Ok(key) if !key.trim().is_empty() => Ok(Self::new(key)),
            _ => Err(AdvisorError::MissingConfig(
                "Gemini API key is not configured",
            )),
        }
    }

    /// Ask the advisor a question and return the model's reply.
    ///
    /// A blank message is a caller input error and never reaches the
    /// upstream.
    pub async fn financial_advice(&self, message: &str) -> Result<ChatReply> {
        let message = message.trim();
        if message.is_empty() {
            return Err(AdvisorError::InvalidArgument(
                "Please provide a message".to_owned(),
            ));
        }

        let url = format!("{}/models/{}:generateContent", self.base_url, GEMINI_MODEL);
        tracing::debug!(%url, "POST generateContent");

        let prompt = format!("{ADVISOR_CONTEXT}\n\nUser question: {message}");
        let resp = self
            .http
            .post(&url)
            .query(&[("key", self.api_key.as_str())])
            .json(&GenerateContentRequest::from_prompt(prompt))
            .send()
            .await?;

        let status = resp.status();
        let bytes = resp.bytes().await.unwrap_or_default();

        if status == StatusCode::BAD_REQUEST {
            return Err(AdvisorError::InvalidArgument(
                "Invalid request to AI service. Please check your message.".to_owned(),
            ));
        }
        if status == StatusCode::UNAUTHORIZED || status == StatusCode::FORBIDDEN {
            return Err(AdvisorError::MissingConfig(
                "Gemini API authentication failed. Please check your API key.",
            ));
        }
        if !status.is_success() {
            return Err(AdvisorError::HttpStatus {
                status,
                body: String::from_utf8_lossy(&bytes).into_owned(),
            });
        }

        let body: GenerateContentResponse = serde_json::from_slice(&bytes)?;
        let reply = body
            .reply_text()
            .unwrap_or_else(|| FALLBACK_REPLY.to_owned());

        Ok(ChatReply {
            success: true,
            message: reply.trim().to_owned(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn blank_message_is_rejected_before_any_upstream_call() {
        let client = GeminiClient::with_base_url("test-key", "http://127.0.0.1:9");
        match client.financial_advice("   ").await {
            Err(AdvisorError::InvalidArgument(message)) => {
                assert_eq!(message, "Please provide a message");
            }
            other => panic!("expected invalid-argument error, got {other:?}"),
        }
    }
}
