//! Broker Core Domain
//!
//! Pure value types for the broker service: symbols, quotes, watchlists and
//! account identities. This crate contains no async, no I/O, and is 100% unit testable.

pub mod entities;
pub mod values;

// Re-export commonly used types at crate root
pub use entities::{Quote, WatchList};
pub use values::{AccountId, Price, Symbol, SymbolError, Volume};
