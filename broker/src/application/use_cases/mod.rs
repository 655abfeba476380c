mod deferred_watch_list;
mod get_quote;
mod list_markets;
mod watch_list;

pub use deferred_watch_list::{DeferredWatchListService, PendingWatchList};
pub use get_quote::{GetQuoteUseCase, QuoteError};
pub use list_markets::ListMarketsUseCase;
pub use watch_list::{WatchListError, WatchListPolicy, WatchListService};
