//! Error types for the `finadvisor-rs` crate.
//!
//! All fallible operations in this crate return [`Result<T>`], which is an
//! alias for `std::result::Result<T, AdvisorError>`.
//!
//! [`AdvisorError`] covers:
//! - **Upstream errors** — Explicit error messages returned by a provider
//! - **Rate limiting** — The quote provider's quota-exceeded notice
//! - **Missing data** — A 2xx body without the expected series payload
//! - **HTTP status errors** — Unexpected status codes with response body
//! - **HTTP transport errors** — Network, TLS, timeout failures
//! - **JSON errors** — Deserialization failures
//! - **Configuration errors** — Missing upstream credentials
//! - **Invalid arguments** — Caller-side validation errors
//! - **Auth errors** — Bearer-token gate failures
//!
//! Every variant knows the HTTP status a routing layer should answer with
//! ([`AdvisorError::status_code`]) and how it renders as the uniform
//! `{ success: false, message, error? }` envelope
//! ([`AdvisorError::to_envelope`]).

use reqwest::StatusCode;
use serde::Serialize;

use crate::auth::AuthError;

/// Uniform JSON error envelope produced for every failed operation.
///
/// `message` is always present; `error` carries the underlying diagnostic
/// for server-side failures and is omitted otherwise.
#[derive(Debug, Clone, Serialize)]
pub struct ErrorBody {
    /// Always `false`.
    pub success: bool,
    /// Human-readable description of the failure.
    pub message: String,
    /// Underlying diagnostic detail, when one exists.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

impl ErrorBody {
    fn new(message: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: None,
        }
    }

    fn with_detail(message: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            success: false,
            message: message.into(),
            error: Some(detail.into()),
        }
    }
}

/// All possible errors produced by the advisor backend core.
#[derive(Debug, thiserror::Error)]
pub enum AdvisorError {
    /// The quote provider returned an explicit error message in a 2xx body.
    #[error("{0}")]
    Upstream(String),

    /// The quote provider's quota-exceeded notice was present in the body.
    #[error("API rate limit exceeded. Please try again later.")]
    RateLimited,

    /// A 2xx body arrived without the expected time-series payload.
    #[error("No data available for this symbol")]
    NoData,

    /// The server returned an unexpected HTTP status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code.
        status: StatusCode,
        /// The response body text.
        body: String,
    },

    /// A network or transport-level error from `reqwest`.
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Failed to deserialize a JSON response body.
    #[error("JSON deserialization error: {0}")]
    Json(#[from] serde_json::Error),

    /// A numeric field in the provider's series could not be parsed.
    #[error("malformed series value: {0}")]
    Malformed(String),

    /// A required upstream credential is not configured.
    #[error("{0}")]
    MissingConfig(&'static str),

    /// The caller provided an invalid argument.
    #[error("{0}")]
    InvalidArgument(String),

    /// The bearer-token gate rejected the request.
    #[error(transparent)]
    Auth(#[from] AuthError),
}

impl AdvisorError {
    /// HTTP status a routing layer should answer with for this error.
    ///
    /// Caller input → 400, auth failure → 401, missing data → 404, quota →
    /// 429; configuration, upstream, and network failures all surface as 500.
    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::InvalidArgument(_) => StatusCode::BAD_REQUEST,
            Self::Auth(_) => StatusCode::UNAUTHORIZED,
            Self::NoData => StatusCode::NOT_FOUND,
            Self::RateLimited => StatusCode::TOO_MANY_REQUESTS,
            Self::Upstream(_)
            | Self::HttpStatus { .. }
            | Self::Http(_)
            | Self::Json(_)
            | Self::Malformed(_)
            | Self::MissingConfig(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Render this error as the uniform `{ success, message, error? }`
    /// envelope. Server-side failures carry their diagnostic in `error`;
    /// caller-facing failures put the whole story in `message`.
    pub fn to_envelope(&self) -> ErrorBody {
        match self {
            Self::Upstream(msg) => ErrorBody::with_detail("Upstream provider error", msg),
            Self::HttpStatus { status, body } => {
                ErrorBody::with_detail(format!("Upstream returned HTTP {status}"), body)
            }
            Self::Http(err) => ErrorBody::with_detail(
                "Network error while contacting upstream service",
                err.to_string(),
            ),
            Self::Json(err) => {
                ErrorBody::with_detail("Malformed upstream response", err.to_string())
            }
            Self::Malformed(detail) => {
                ErrorBody::with_detail("Malformed upstream response", detail)
            }
            Self::RateLimited
            | Self::NoData
            | Self::MissingConfig(_)
            | Self::InvalidArgument(_)
            | Self::Auth(_) => ErrorBody::new(self.to_string()),
        }
    }
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, AdvisorError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_codes_follow_the_error_taxonomy() {
        assert_eq!(
            AdvisorError::InvalidArgument("Please provide a symbol parameter".into())
                .status_code(),
            StatusCode::BAD_REQUEST
        );
        assert_eq!(
            AdvisorError::Auth(AuthError::MissingToken).status_code(),
            StatusCode::UNAUTHORIZED
        );
        assert_eq!(AdvisorError::NoData.status_code(), StatusCode::NOT_FOUND);
        assert_eq!(
            AdvisorError::RateLimited.status_code(),
            StatusCode::TOO_MANY_REQUESTS
        );
        assert_eq!(
            AdvisorError::MissingConfig("Alpha Vantage API key is not configured").status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
        assert_eq!(
            AdvisorError::Upstream("Invalid API call".into()).status_code(),
            StatusCode::INTERNAL_SERVER_ERROR
        );
    }

    #[test]
    fn envelope_is_error_shaped_and_omits_empty_detail() {
        let body = AdvisorError::NoData.to_envelope();
        let json = serde_json::to_value(&body).expect("envelope serializes");
        assert_eq!(json["success"], false);
        assert_eq!(json["message"], "No data available for this symbol");
        assert!(json.get("error").is_none());
    }

    #[test]
    fn envelope_carries_upstream_diagnostics() {
        let body = AdvisorError::Upstream("Invalid API call for TIME_SERIES_INTRADAY".into())
            .to_envelope();
        assert_eq!(body.message, "Upstream provider error");
        assert_eq!(
            body.error.as_deref(),
            Some("Invalid API call for TIME_SERIES_INTRADAY")
        );
    }

    #[test]
    fn rate_limited_message_matches_the_public_contract() {
        assert_eq!(
            AdvisorError::RateLimited.to_string(),
            "API rate limit exceeded. Please try again later."
        );
    }
}
