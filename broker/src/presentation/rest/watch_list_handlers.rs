//! Watchlist endpoints served on the request task

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use crate::application::WatchListService;
use crate::domain::{AccountId, WatchList};
use crate::infrastructure::InMemoryAccountStore;
use crate::presentation::rest::{ApiError, AuthenticatedAccount};

use super::AppState;

/// GET /account/watchlist
pub async fn get_watch_list(
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedAccount(account)): Extension<AuthenticatedAccount>,
) -> Json<WatchList> {
    Json(service(&state).get(account))
}

/// PUT /account/watchlist
pub async fn update_watch_list(
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedAccount(account)): Extension<AuthenticatedAccount>,
    payload: Result<Json<WatchList>, JsonRejection>,
) -> Result<Json<WatchList>, ApiError> {
    let Json(watch_list) = payload?;
    let stored = service(&state).update(account, watch_list)?;
    Ok(Json(stored))
}

/// DELETE /account/watchlist
pub async fn delete_watch_list(
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedAccount(account)): Extension<AuthenticatedAccount>,
) -> StatusCode {
    service(&state).delete(account);
    StatusCode::OK
}

/// DELETE /account/watchlist/{account_id}
pub async fn delete_account_watch_list(
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedAccount(account)): Extension<AuthenticatedAccount>,
    Path(account_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let target = owned_account(account, &account_id)?;
    service(&state).delete(target);
    Ok(StatusCode::OK)
}

fn service(state: &AppState) -> WatchListService<InMemoryAccountStore> {
    WatchListService::new(Arc::clone(&state.account_store), state.watch_list_policy)
}

/// Parse a path account id and check it belongs to the caller
pub(super) fn owned_account(caller: AccountId, raw: &str) -> Result<AccountId, ApiError> {
    let target: AccountId = raw
        .parse()
        .map_err(|_| ApiError::bad_request(format!("Invalid account id: {}", raw)))?;

    if target != caller {
        tracing::warn!(caller = %caller, target = %target, "foreign watchlist delete refused");
        return Err(ApiError::forbidden("Cannot modify another account's watchlist"));
    }
    Ok(target)
}
