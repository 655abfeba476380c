use serde::{Deserialize, Serialize};
use std::fmt;
use thiserror::Error;

/// Longest ticker accepted by the broker
pub const MAX_SYMBOL_LEN: usize = 5;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SymbolError {
    #[error("Symbol cannot be empty")]
    Empty,

    #[error("Symbol too long ({len} chars, max {MAX_SYMBOL_LEN})")]
    TooLong { len: usize },

    #[error("Symbol cannot contain whitespace or control characters, found {0:?}")]
    InvalidCharacter(char),
}

/// Abbreviation that uniquely identifies publicly traded shares of a stock.
///
/// Kept exactly as given: `amzn` and `AMZN` are different symbols.
/// Serialized as `{"value": "AAPL"}`.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "SymbolRepr", into = "SymbolRepr")]
pub struct Symbol(String);

#[derive(Serialize, Deserialize)]
struct SymbolRepr {
    value: String,
}

impl Symbol {
    pub fn new(value: impl Into<String>) -> Result<Self, SymbolError> {
        let s: String = value.into();
        if s.is_empty() {
            return Err(SymbolError::Empty);
        }
        let len = s.chars().count();
        if len > MAX_SYMBOL_LEN {
            return Err(SymbolError::TooLong { len });
        }
        if let Some(c) = s.chars().find(|c| c.is_whitespace() || c.is_control()) {
            return Err(SymbolError::InvalidCharacter(c));
        }
        Ok(Symbol(s))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl AsRef<str> for Symbol {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl TryFrom<&str> for Symbol {
    type Error = SymbolError;
    fn try_from(value: &str) -> Result<Self, Self::Error> {
        Symbol::new(value)
    }
}

impl TryFrom<String> for Symbol {
    type Error = SymbolError;
    fn try_from(value: String) -> Result<Self, Self::Error> {
        Symbol::new(value)
    }
}

impl TryFrom<SymbolRepr> for Symbol {
    type Error = SymbolError;
    fn try_from(repr: SymbolRepr) -> Result<Self, Self::Error> {
        Symbol::new(repr.value)
    }
}

impl From<Symbol> for SymbolRepr {
    fn from(symbol: Symbol) -> Self {
        SymbolRepr { value: symbol.0 }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbol_kept_verbatim() {
        let symbol = Symbol::new("nflx").unwrap();
        assert_eq!(symbol.as_str(), "nflx");
        assert_ne!(symbol, Symbol::new("NFLX").unwrap());
    }

    #[test]
    fn test_symbol_length_bounds() {
        assert_eq!(Symbol::new(""), Err(SymbolError::Empty));
        assert!(Symbol::new("A").is_ok());
        assert!(Symbol::new("GOOGL").is_ok());
        assert_eq!(Symbol::new("ABCDEF"), Err(SymbolError::TooLong { len: 6 }));
        // Counted in characters, not bytes
        assert!(Symbol::new("ÄÖÜ").is_ok());
    }

    #[test]
    fn test_symbol_accepts_punctuation() {
        assert_eq!(Symbol::new("BRK.B").unwrap().as_str(), "BRK.B");
        assert_eq!(Symbol::new("RDS-A").unwrap().as_str(), "RDS-A");
    }

    #[test]
    fn test_symbol_rejects_whitespace_and_control() {
        assert_eq!(Symbol::new("A B"), Err(SymbolError::InvalidCharacter(' ')));
        assert_eq!(Symbol::new(" AB"), Err(SymbolError::InvalidCharacter(' ')));
        assert_eq!(Symbol::new("AB\n"), Err(SymbolError::InvalidCharacter('\n')));
    }

    #[test]
    fn test_symbol_wire_shape() {
        let symbol = Symbol::new("AMZN").unwrap();
        let json = serde_json::to_string(&symbol).unwrap();
        assert_eq!(json, r#"{"value":"AMZN"}"#);

        let parsed: Symbol = serde_json::from_str(r#"{"value":"tsla"}"#).unwrap();
        assert_eq!(parsed.as_str(), "tsla");
        assert_eq!(serde_json::to_string(&parsed).unwrap(), r#"{"value":"tsla"}"#);
    }

    #[test]
    fn test_invalid_symbol_fails_to_deserialize() {
        let parsed = serde_json::from_str::<Symbol>(r#"{"value":"TOOLONG"}"#);
        assert!(parsed.is_err());
    }
}
