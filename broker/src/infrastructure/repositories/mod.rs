mod in_memory_account_store;
mod in_memory_quote;

pub use in_memory_account_store::InMemoryAccountStore;
pub use in_memory_quote::InMemoryQuoteRepository;
