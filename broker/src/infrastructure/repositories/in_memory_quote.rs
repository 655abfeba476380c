use crate::application::ports::QuoteRepository;
use crate::domain::{Quote, Symbol};
use async_trait::async_trait;
use dashmap::DashMap;
use rand::Rng;
use rust_decimal::Decimal;
use std::sync::Arc;

/// In-memory quote table keyed by symbol
pub struct InMemoryQuoteRepository {
    quotes: Arc<DashMap<Symbol, Quote>>,
}

impl InMemoryQuoteRepository {
    pub fn new() -> Self {
        InMemoryQuoteRepository {
            quotes: Arc::new(DashMap::new()),
        }
    }

    /// Create with a random quote for each symbol
    pub fn with_symbols(symbols: &[Symbol]) -> Self {
        let repo = Self::new();
        let mut rng = rand::thread_rng();

        for symbol in symbols {
            let quote = Quote::new(
                symbol.clone(),
                random_price(&mut rng),
                random_price(&mut rng),
                random_price(&mut rng),
                Decimal::from(rng.gen_range(1_000i64..1_000_000)),
            );
            repo.quotes.insert(symbol.clone(), quote);
        }

        repo
    }

    /// Replace the quote for its symbol (sync)
    pub fn update(&self, quote: Quote) {
        self.quotes.insert(quote.symbol.clone(), quote);
    }

    /// Number of quoted symbols
    pub fn len(&self) -> usize {
        self.quotes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quotes.is_empty()
    }
}

/// Price in [1.00, 100.00) with cent precision
fn random_price(rng: &mut impl Rng) -> Decimal {
    Decimal::new(rng.gen_range(100..10_000), 2)
}

impl Default for InMemoryQuoteRepository {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryQuoteRepository {
    fn clone(&self) -> Self {
        InMemoryQuoteRepository {
            quotes: Arc::clone(&self.quotes),
        }
    }
}

#[async_trait]
impl QuoteRepository for InMemoryQuoteRepository {
    async fn get(&self, symbol: &Symbol) -> Option<Quote> {
        self.quotes.get(symbol).map(|q| q.value().clone())
    }

    async fn save(&self, quote: Quote) {
        self.update(quote);
    }

    async fn symbols(&self) -> Vec<Symbol> {
        let mut symbols: Vec<Symbol> = self.quotes.iter().map(|e| e.key().clone()).collect();
        symbols.sort();
        symbols
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sym(value: &str) -> Symbol {
        Symbol::new(value).unwrap()
    }

    #[tokio::test]
    async fn test_seeded_quotes_are_in_range() {
        let repo = InMemoryQuoteRepository::with_symbols(&[sym("AAPL"), sym("MSFT")]);

        assert_eq!(repo.len(), 2);
        let quote = repo.get(&sym("AAPL")).await.unwrap();
        assert!(quote.bid >= dec!(1) && quote.bid < dec!(100));
        assert!(quote.volume >= dec!(1000));
    }

    #[tokio::test]
    async fn test_save_replaces_quote() {
        let repo = InMemoryQuoteRepository::new();
        let quote = Quote::new(sym("NFLX"), dec!(10), dec!(11), dec!(10.5), dec!(500));

        repo.save(quote.clone()).await;
        assert_eq!(repo.get(&sym("NFLX")).await, Some(quote));

        let updated = Quote::new(sym("NFLX"), dec!(12), dec!(13), dec!(12.5), dec!(700));
        repo.save(updated.clone()).await;
        assert_eq!(repo.get(&sym("NFLX")).await, Some(updated));
        assert_eq!(repo.len(), 1);
    }

    #[tokio::test]
    async fn test_unknown_symbol_is_none() {
        let repo = InMemoryQuoteRepository::with_symbols(&[sym("AAPL")]);
        assert!(repo.get(&sym("XYZ")).await.is_none());
    }

    #[tokio::test]
    async fn test_symbols_are_sorted() {
        let repo = InMemoryQuoteRepository::with_symbols(&[sym("TSLA"), sym("AAPL"), sym("GOOG")]);

        let symbols = repo.symbols().await;
        let values: Vec<&str> = symbols.iter().map(Symbol::as_str).collect();
        assert_eq!(values, vec!["AAPL", "GOOG", "TSLA"]);
    }
}
