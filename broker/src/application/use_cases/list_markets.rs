use crate::application::ports::QuoteRepository;
use crate::domain::Symbol;
use std::sync::Arc;

pub struct ListMarketsUseCase<Q: QuoteRepository> {
    quotes: Arc<Q>,
}

impl<Q: QuoteRepository> ListMarketsUseCase<Q> {
    pub fn new(quotes: Arc<Q>) -> Self {
        Self { quotes }
    }

    /// Every symbol the broker quotes, sorted
    pub async fn execute(&self) -> Vec<Symbol> {
        self.quotes.symbols().await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::infrastructure::InMemoryQuoteRepository;

    #[tokio::test]
    async fn test_lists_seeded_symbols() {
        let symbols = vec![Symbol::new("MSFT").unwrap(), Symbol::new("AAPL").unwrap()];
        let repo = Arc::new(InMemoryQuoteRepository::with_symbols(&symbols));

        let markets = ListMarketsUseCase::new(repo).execute().await;

        assert_eq!(markets, vec![symbols[1].clone(), symbols[0].clone()]);
    }
}
