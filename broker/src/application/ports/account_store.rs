use crate::domain::{AccountId, WatchList};

/// Store holding the single source of truth for per-account watchlists
///
/// Synchronous by contract: implementations are register-speed map operations
/// that may be called from request tasks and from I/O worker threads alike.
/// All operations must be linearizable per account.
pub trait AccountStore: Send + Sync {
    /// Get the account's watchlist, or an empty one if none was stored
    fn watch_list(&self, account: AccountId) -> WatchList;

    /// Replace the account's watchlist and return a copy of the stored value
    fn replace_watch_list(&self, account: AccountId, watch_list: WatchList) -> WatchList;

    /// Remove the account's watchlist (no-op when absent)
    fn delete_watch_list(&self, account: AccountId);
}
