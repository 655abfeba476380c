mod account_store;
mod quote_repository;
mod token_verifier;

pub use account_store::AccountStore;
pub use quote_repository::QuoteRepository;
pub use token_verifier::{AuthError, TokenVerifier};
