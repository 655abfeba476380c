use axum::{
    Router, middleware,
    routing::{delete, get},
};
use std::sync::Arc;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use super::{auth, deferred_handlers, handlers, watch_list_handlers};
use crate::application::WatchListPolicy;
use crate::infrastructure::{
    InMemoryAccountStore, InMemoryQuoteRepository, IoExecutor, JwtTokenVerifier,
};

/// Application state shared across handlers - uses concrete infrastructure types
pub struct AppState {
    pub account_store: Arc<InMemoryAccountStore>,
    pub quote_repo: Arc<InMemoryQuoteRepository>,
    pub executor: Arc<IoExecutor>,
    pub token_verifier: Arc<JwtTokenVerifier>,
    pub watch_list_policy: WatchListPolicy,
}

impl AppState {
    pub fn new(
        account_store: Arc<InMemoryAccountStore>,
        quote_repo: Arc<InMemoryQuoteRepository>,
        executor: Arc<IoExecutor>,
        token_verifier: Arc<JwtTokenVerifier>,
        watch_list_policy: WatchListPolicy,
    ) -> Self {
        AppState {
            account_store,
            quote_repo,
            executor,
            token_verifier,
            watch_list_policy,
        }
    }
}

/// Create the REST API router
pub fn create_router(state: Arc<AppState>) -> Router {
    Router::new()
        // Public endpoints
        .route("/markets", get(handlers::list_markets))
        .route("/quotes/{symbol}", get(handlers::get_quote))
        .merge(account_routes(Arc::clone(&state)))
        // Middleware
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Watchlist endpoints, all behind the bearer token check
fn account_routes(state: Arc<AppState>) -> Router<Arc<AppState>> {
    Router::new()
        // Served on the request task
        .route(
            "/account/watchlist",
            get(watch_list_handlers::get_watch_list)
                .put(watch_list_handlers::update_watch_list)
                .delete(watch_list_handlers::delete_watch_list),
        )
        .route(
            "/account/watchlist/{account_id}",
            delete(watch_list_handlers::delete_account_watch_list),
        )
        // Dispatched to the I/O executor
        .route(
            "/account/watchlist-reactive",
            get(deferred_handlers::get_watch_list)
                .put(deferred_handlers::update_watch_list)
                .delete(deferred_handlers::delete_watch_list),
        )
        .route(
            "/account/watchlist-reactive/{account_id}",
            delete(deferred_handlers::delete_account_watch_list),
        )
        .route_layer(middleware::from_fn_with_state(state, auth::require_account))
}
