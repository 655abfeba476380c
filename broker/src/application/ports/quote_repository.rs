use crate::domain::{Quote, Symbol};
use async_trait::async_trait;

/// Repository for the latest quote of each listed symbol
#[async_trait]
pub trait QuoteRepository: Send + Sync {
    /// Get the quote for a symbol
    async fn get(&self, symbol: &Symbol) -> Option<Quote>;

    /// Save a quote, replacing any previous snapshot for its symbol
    async fn save(&self, quote: Quote);

    /// All listed symbols, sorted
    async fn symbols(&self) -> Vec<Symbol>;
}
