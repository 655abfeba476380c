use crate::application::ports::AccountStore;
use crate::domain::{AccountId, Symbol, WatchList};
use crate::infrastructure::executor::ExecutorError;
use std::sync::Arc;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WatchListError {
    #[error("Duplicate symbol in watchlist: {0}")]
    DuplicateSymbol(Symbol),

    #[error("Watchlist has {count} symbols, max {max}")]
    TooManySymbols { count: usize, max: usize },

    #[error("Watchlist service unavailable: {0}")]
    Unavailable(#[from] ExecutorError),
}

/// Checks applied to a watchlist before it replaces the stored one
#[derive(Debug, Clone, Copy)]
pub struct WatchListPolicy {
    pub max_symbols: usize,
}

impl Default for WatchListPolicy {
    fn default() -> Self {
        Self { max_symbols: 50 }
    }
}

impl WatchListPolicy {
    pub fn new(max_symbols: usize) -> Self {
        Self { max_symbols }
    }

    pub fn validate(&self, watch_list: &WatchList) -> Result<(), WatchListError> {
        if watch_list.len() > self.max_symbols {
            return Err(WatchListError::TooManySymbols {
                count: watch_list.len(),
                max: self.max_symbols,
            });
        }
        if let Some(duplicate) = watch_list.first_duplicate() {
            return Err(WatchListError::DuplicateSymbol(duplicate.clone()));
        }
        Ok(())
    }
}

// Store operations shared by the synchronous and deferred facades
pub(super) fn get_watch_list<S: AccountStore>(store: &S, account: AccountId) -> WatchList {
    tracing::debug!(
        account = %account,
        thread = std::thread::current().name().unwrap_or("unnamed"),
        "get watchlist"
    );
    store.watch_list(account)
}

pub(super) fn update_watch_list<S: AccountStore>(
    store: &S,
    policy: &WatchListPolicy,
    account: AccountId,
    watch_list: WatchList,
) -> Result<WatchList, WatchListError> {
    policy.validate(&watch_list)?;
    tracing::debug!(
        account = %account,
        symbols = watch_list.len(),
        thread = std::thread::current().name().unwrap_or("unnamed"),
        "update watchlist"
    );
    Ok(store.replace_watch_list(account, watch_list))
}

pub(super) fn delete_watch_list<S: AccountStore>(store: &S, account: AccountId) {
    tracing::debug!(
        account = %account,
        thread = std::thread::current().name().unwrap_or("unnamed"),
        "delete watchlist"
    );
    store.delete_watch_list(account);
}

/// Synchronous watchlist facade
///
/// Every operation executes on the calling thread and returns once the store
/// has answered.
pub struct WatchListService<S: AccountStore> {
    store: Arc<S>,
    policy: WatchListPolicy,
}

impl<S: AccountStore> WatchListService<S> {
    pub fn new(store: Arc<S>, policy: WatchListPolicy) -> Self {
        Self { store, policy }
    }

    /// The account's watchlist; empty when none is stored
    pub fn get(&self, account: AccountId) -> WatchList {
        get_watch_list(self.store.as_ref(), account)
    }

    /// Validate and replace the account's watchlist
    pub fn update(
        &self,
        account: AccountId,
        watch_list: WatchList,
    ) -> Result<WatchList, WatchListError> {
        update_watch_list(self.store.as_ref(), &self.policy, account, watch_list)
    }

    pub fn delete(&self, account: AccountId) {
        delete_watch_list(self.store.as_ref(), account)
    }
}
