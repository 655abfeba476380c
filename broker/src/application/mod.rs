pub mod ports;
pub mod use_cases;

pub use ports::{AccountStore, AuthError, QuoteRepository, TokenVerifier};
pub use use_cases::{
    DeferredWatchListService, GetQuoteUseCase, ListMarketsUseCase, QuoteError, WatchListError,
    WatchListPolicy, WatchListService,
};
