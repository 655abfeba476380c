use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use crate::values::Symbol;

/// Ordered collection of symbols tracked by one account.
///
/// The empty list is the valid state of an account that never stored one.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WatchList {
    #[serde(default)]
    pub symbols: Vec<Symbol>,
}

impl WatchList {
    pub fn new(symbols: Vec<Symbol>) -> Self {
        Self { symbols }
    }

    pub fn symbols(&self) -> &[Symbol] {
        &self.symbols
    }

    pub fn len(&self) -> usize {
        self.symbols.len()
    }

    pub fn is_empty(&self) -> bool {
        self.symbols.is_empty()
    }

    pub fn contains(&self, symbol: &Symbol) -> bool {
        self.symbols.contains(symbol)
    }

    /// First symbol that appears more than once, in list order
    pub fn first_duplicate(&self) -> Option<&Symbol> {
        let mut seen = HashSet::with_capacity(self.symbols.len());
        self.symbols.iter().find(|s| !seen.insert(*s))
    }
}

impl FromIterator<Symbol> for WatchList {
    fn from_iter<I: IntoIterator<Item = Symbol>>(iter: I) -> Self {
        WatchList::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn symbols(values: &[&str]) -> WatchList {
        values.iter().map(|v| Symbol::new(*v).unwrap()).collect()
    }

    #[test]
    fn test_default_is_empty() {
        let list = WatchList::default();
        assert!(list.is_empty());
        assert_eq!(list.len(), 0);
    }

    #[test]
    fn test_preserves_order() {
        let list = symbols(&["APPL", "AMZN", "NFLX"]);
        let values: Vec<&str> = list.symbols().iter().map(Symbol::as_str).collect();
        assert_eq!(values, vec!["APPL", "AMZN", "NFLX"]);
    }

    #[test]
    fn test_first_duplicate() {
        assert_eq!(symbols(&["APPL", "AMZN"]).first_duplicate(), None);
        assert_eq!(symbols(&["AMZN", "amzn"]).first_duplicate(), None);

        let list = symbols(&["APPL", "AMZN", "NFLX", "AMZN"]);
        assert_eq!(list.first_duplicate().map(Symbol::as_str), Some("AMZN"));
    }

    #[test]
    fn test_missing_symbols_field_is_empty() {
        let list: WatchList = serde_json::from_str("{}").unwrap();
        assert!(list.is_empty());

        let list: WatchList =
            serde_json::from_str(r#"{"symbols":[{"value":"APPL"},{"value":"NFLX"}]}"#).unwrap();
        assert_eq!(list.len(), 2);
        assert!(list.contains(&Symbol::new("NFLX").unwrap()));
    }
}
