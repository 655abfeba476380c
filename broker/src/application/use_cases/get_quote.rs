use crate::application::ports::QuoteRepository;
use crate::domain::{Quote, Symbol};
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuoteError {
    #[error("Quote for symbol not available: {0}")]
    NotFound(String),
}

pub struct GetQuoteUseCase<Q: QuoteRepository> {
    quotes: Arc<Q>,
}

impl<Q: QuoteRepository> GetQuoteUseCase<Q> {
    pub fn new(quotes: Arc<Q>) -> Self {
        Self { quotes }
    }

    /// Look up by exact symbol, then by its upper-case form
    pub async fn execute(&self, symbol: &str) -> Result<Quote, QuoteError> {
        let not_found = || QuoteError::NotFound(symbol.to_string());

        // Anything that can't be a ticker can't have a quote either
        let parsed = Symbol::new(symbol).map_err(|_| not_found())?;
        if let Some(quote) = self.quotes.get(&parsed).await {
            return Ok(quote);
        }

        let upper = symbol.to_ascii_uppercase();
        if upper == symbol {
            return Err(not_found());
        }
        let folded = Symbol::new(upper).map_err(|_| not_found())?;
        self.quotes.get(&folded).await.ok_or_else(not_found)
    }
}
