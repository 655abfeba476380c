// Re-export value types from the shared kernel
pub use broker_core::{AccountId, Price, Quote, Symbol, SymbolError, Volume, WatchList};
