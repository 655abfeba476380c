//! Broker Service
//!
//! A practice stock-broker REST service: market symbols, price quotes and a
//! per-account watchlist behind bearer-token secured endpoints, all held in memory.
//!
//! # Architecture
//!
//! This crate follows Clean Architecture with clear separation of concerns:
//!
//! - **Domain**: Value types from `broker-core` (Symbol, Quote, WatchList, AccountId)
//! - **Application**: Port interfaces and use cases (WatchListService, GetQuote, etc.)
//! - **Infrastructure**: Implementations of ports (InMemoryAccountStore, IoExecutor, JWT, config)
//! - **Presentation**: REST API handlers
//!
//! # Watchlist access modes
//!
//! `/account/watchlist` runs every store operation on the request task.
//! `/account/watchlist-reactive` dispatches the same operations to a bounded
//! I/O worker pool and awaits the result. Both observe the same store.
//!
//! # Example
//!
//! ```ignore
//! use broker::{Broker, BrokerConfig};
//!
//! #[tokio::main]
//! async fn main() -> anyhow::Result<()> {
//!     let broker = Broker::new(BrokerConfig::default())?;
//!     broker.run().await
//! }
//! ```

pub mod application;
pub mod domain;
pub mod infrastructure;
pub mod presentation;

// Re-export commonly used types
pub use domain::{AccountId, Price, Quote, Symbol, SymbolError, Volume, WatchList};

pub use infrastructure::{
    BrokerConfig, Claims, ConfigError, Deferred, ExecutorConfig, ExecutorError, InMemoryAccountStore,
    InMemoryQuoteRepository, IoExecutor, JwtTokenVerifier,
};

pub use application::{
    DeferredWatchListService, GetQuoteUseCase, ListMarketsUseCase, QuoteError, WatchListError,
    WatchListPolicy, WatchListService,
};

// Re-export port traits for integration tests
pub use application::ports::{AccountStore, QuoteRepository, TokenVerifier};

pub use presentation::{ApiError, AppState, AuthenticatedAccount, create_router};

use axum::Router;
use std::sync::Arc;
use tokio::net::TcpListener;

/// The broker server
pub struct Broker {
    pub config: BrokerConfig,
    pub account_store: Arc<InMemoryAccountStore>,
    pub quote_repo: Arc<InMemoryQuoteRepository>,
    pub executor: Arc<IoExecutor>,
    pub token_verifier: Arc<JwtTokenVerifier>,
}

impl Broker {
    /// Build the broker, seeding one quote per configured market
    pub fn new(config: BrokerConfig) -> Result<Self, ConfigError> {
        let symbols = config.market_symbols()?;
        let quote_repo = Arc::new(InMemoryQuoteRepository::with_symbols(&symbols));
        let account_store = Arc::new(InMemoryAccountStore::new());
        let executor = Arc::new(IoExecutor::new(config.executor.to_executor_config()));
        let token_verifier = Arc::new(JwtTokenVerifier::new(&config.auth.jwt_secret));

        Ok(Broker {
            config,
            account_store,
            quote_repo,
            executor,
            token_verifier,
        })
    }

    /// Shared handler state
    pub fn app_state(&self) -> Arc<AppState> {
        Arc::new(AppState::new(
            Arc::clone(&self.account_store),
            Arc::clone(&self.quote_repo),
            Arc::clone(&self.executor),
            Arc::clone(&self.token_verifier),
            WatchListPolicy::new(self.config.watchlist.max_symbols),
        ))
    }

    /// Create the REST API router
    pub fn rest_router(&self) -> Router {
        create_router(self.app_state())
    }

    /// Serve until Ctrl-C, then drain the I/O executor
    pub async fn run(self) -> anyhow::Result<()> {
        let addr = self.config.bind_address();
        let router = self.rest_router();

        tracing::info!("Broker listening on {}", addr);

        let listener = TcpListener::bind(&addr).await?;
        axum::serve(listener, router)
            .with_graceful_shutdown(shutdown_signal())
            .await?;

        let executor = Arc::clone(&self.executor);
        tokio::task::spawn_blocking(move || executor.shutdown()).await?;

        Ok(())
    }
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!(error = %e, "failed to listen for shutdown signal");
        return;
    }
    tracing::info!("Shutdown signal received");
}
