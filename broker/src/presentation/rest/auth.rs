use axum::{
    extract::{Request, State},
    http::{HeaderMap, header},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use crate::application::{AuthError, TokenVerifier};
use crate::domain::AccountId;
use crate::presentation::rest::{ApiError, AppState};

/// Account resolved from the request's bearer token
#[derive(Debug, Clone, Copy)]
pub struct AuthenticatedAccount(pub AccountId);

/// Bearer token middleware for account routes.
///
/// Resolves the caller through the configured [`TokenVerifier`] and stores an
/// [`AuthenticatedAccount`] in the request extensions; rejects with 401 otherwise.
pub async fn require_account(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Result<Response, ApiError> {
    let account = authenticate(
        request.headers(),
        request.uri().path(),
        state.token_verifier.as_ref(),
    )?;
    request.extensions_mut().insert(AuthenticatedAccount(account));

    Ok(next.run(request).await)
}

fn authenticate(
    headers: &HeaderMap,
    path: &str,
    verifier: &impl TokenVerifier,
) -> Result<AccountId, AuthError> {
    let token = bearer_token(headers).ok_or_else(|| {
        tracing::warn!(path = %path, "request without bearer token");
        AuthError::Missing
    })?;

    verifier.verify(token).map_err(|e| {
        tracing::warn!(path = %path, error = %e, "bearer token rejected");
        e
    })
}

fn bearer_token(headers: &HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| v.strip_prefix("Bearer "))
        .map(str::trim)
        .filter(|t| !t.is_empty())
}
