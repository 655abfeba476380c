use serde::{Deserialize, Serialize};

use crate::values::{Price, Symbol, Volume};

/// Point-in-time price snapshot for a symbol
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Quote {
    pub symbol: Symbol,
    pub bid: Price,
    pub ask: Price,
    pub last_price: Price,
    pub volume: Volume,
}

impl Quote {
    pub fn new(symbol: Symbol, bid: Price, ask: Price, last_price: Price, volume: Volume) -> Self {
        Self {
            symbol,
            bid,
            ask,
            last_price,
            volume,
        }
    }

    /// Difference between ask and bid
    pub fn spread(&self) -> Price {
        self.ask - self.bid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_quote_serializes_camel_case() {
        let quote = Quote::new(
            Symbol::new("AAPL").unwrap(),
            dec!(189.10),
            dec!(189.15),
            dec!(189.12),
            dec!(1200),
        );

        let json = serde_json::to_value(&quote).unwrap();
        assert_eq!(json["symbol"]["value"], "AAPL");
        assert!(json.get("lastPrice").is_some());
        assert_eq!(quote.spread(), dec!(0.05));
    }
}
