pub mod auth;
pub mod config;
pub mod executor;
pub mod repositories;

pub use auth::{Claims, JwtTokenVerifier};
pub use config::{BrokerConfig, ConfigError};
pub use executor::{Deferred, ExecutorConfig, ExecutorError, ExecutorStats, IoExecutor};
pub use repositories::{InMemoryAccountStore, InMemoryQuoteRepository};
