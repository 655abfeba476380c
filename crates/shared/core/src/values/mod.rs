use rust_decimal::Decimal;

mod account_id;
mod symbol;

pub use account_id::AccountId;
pub use symbol::{MAX_SYMBOL_LEN, Symbol, SymbolError};

/// Price value - uses Decimal for precision
pub type Price = Decimal;

/// Traded volume - uses Decimal for precision
pub type Volume = Decimal;
