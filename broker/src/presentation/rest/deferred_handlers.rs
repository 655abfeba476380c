//! Watchlist endpoints dispatched to the I/O executor

use axum::{
    Extension, Json,
    extract::{Path, State, rejection::JsonRejection},
    http::StatusCode,
};
use std::sync::Arc;

use crate::application::DeferredWatchListService;
use crate::domain::WatchList;
use crate::infrastructure::InMemoryAccountStore;
use crate::presentation::rest::{ApiError, AuthenticatedAccount};

use super::AppState;
use super::watch_list_handlers::owned_account;

/// GET /account/watchlist-reactive
pub async fn get_watch_list(
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedAccount(account)): Extension<AuthenticatedAccount>,
) -> Result<Json<WatchList>, ApiError> {
    let watch_list = service(&state).get(account).await?;
    Ok(Json(watch_list))
}

/// PUT /account/watchlist-reactive
pub async fn update_watch_list(
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedAccount(account)): Extension<AuthenticatedAccount>,
    payload: Result<Json<WatchList>, JsonRejection>,
) -> Result<Json<WatchList>, ApiError> {
    let Json(watch_list) = payload?;
    let stored = service(&state).update(account, watch_list).await?;
    Ok(Json(stored))
}

/// DELETE /account/watchlist-reactive
pub async fn delete_watch_list(
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedAccount(account)): Extension<AuthenticatedAccount>,
) -> Result<StatusCode, ApiError> {
    service(&state).delete(account).await?;
    Ok(StatusCode::OK)
}

/// DELETE /account/watchlist-reactive/{account_id}
pub async fn delete_account_watch_list(
    State(state): State<Arc<AppState>>,
    Extension(AuthenticatedAccount(account)): Extension<AuthenticatedAccount>,
    Path(account_id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let target = owned_account(account, &account_id)?;
    service(&state).delete(target).await?;
    Ok(StatusCode::OK)
}

fn service(state: &AppState) -> DeferredWatchListService<InMemoryAccountStore> {
    DeferredWatchListService::new(
        Arc::clone(&state.account_store),
        state.watch_list_policy,
        Arc::clone(&state.executor),
    )
}
