//! Bearer-token authentication gate.
//!
//! Token issuance and verification are owned by the surrounding deployment;
//! this crate only consumes the capability "verify bearer token, resolve to
//! user identity". [`bearer_token`] extracts the credential from an
//! `Authorization` header value and a [`TokenVerifier`] implementation
//! (injected by the host, e.g. a JWT verifier backed by a user store)
//! resolves it. Every failure maps to HTTP 401 via
//! [`AdvisorError::status_code`](crate::error::AdvisorError::status_code).

use serde::Serialize;

/// Scheme prefix expected on the `Authorization` header.
const BEARER_PREFIX: &str = "Bearer ";

/// Why the authentication gate rejected a request.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AuthError {
    /// No `Authorization: Bearer <token>` header was supplied.
    #[error("No token provided. Authorization denied.")]
    MissingToken,

    /// The token failed signature or format verification.
    #[error("Invalid token.")]
    InvalidToken,

    /// The token was valid once but is past its expiry.
    #[error("Token has expired.")]
    ExpiredToken,

    /// The token verified but no matching user record exists.
    #[error("Token is not valid. User not found.")]
    UserNotFound,
}

/// Identity a verified token resolves to.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UserIdentity {
    /// Stable user record identifier.
    pub user_id: String,
    /// Account email, when the user store carries one.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// Resolves a bearer token to a user identity.
///
/// Implemented by the host application (the reference deployment verifies a
/// JWT and looks the subject up in its user store). Verification may suspend
/// on I/O, so the method is `async`.
pub trait TokenVerifier {
    /// Verify `token` and resolve the identity it belongs to.
    fn verify(
        &self,
        token: &str,
    ) -> impl Future<Output = std::result::Result<UserIdentity, AuthError>> + Send;
}

/// Extract the bearer token from an `Authorization` header value.
///
/// Returns [`AuthError::MissingToken`] when the header is absent, uses a
/// different scheme, or carries an empty credential.
pub fn bearer_token(authorization: Option<&str>) -> std::result::Result<&str, AuthError> {
    let header = authorization.ok_or(AuthError::MissingToken)?;
    let token = header
        .strip_prefix(BEARER_PREFIX)
        .ok_or(AuthError::MissingToken)?
        .trim();
    if token.is_empty() {
        return Err(AuthError::MissingToken);
    }
    Ok(token)
}

/// Run the full gate: extract the bearer token, then verify it.
pub async fn authenticate<V: TokenVerifier>(
    verifier: &V,
    authorization: Option<&str>,
) -> std::result::Result<UserIdentity, AuthError> {
    let token = bearer_token(authorization)?;
    verifier.verify(token).await
}
