use crate::application::ports::AccountStore;
use crate::domain::{AccountId, WatchList};
use crate::infrastructure::executor::{Deferred, IoExecutor};
use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::task::{Context, Poll};

use super::watch_list::{
    WatchListError, WatchListPolicy, delete_watch_list, get_watch_list, update_watch_list,
};

/// Handle to a watchlist operation running on the I/O executor
#[must_use = "a pending watchlist operation does nothing unless awaited"]
pub struct PendingWatchList<T> {
    deferred: Deferred<Result<T, WatchListError>>,
}

impl<T> Future for PendingWatchList<T> {
    type Output = Result<T, WatchListError>;

    fn poll(self: Pin<&mut Self>, cx: &mut Context<'_>) -> Poll<Self::Output> {
        Pin::new(&mut self.get_mut().deferred)
            .poll(cx)
            .map(|result| match result {
                Ok(inner) => inner,
                Err(e) => Err(WatchListError::from(e)),
            })
    }
}

/// Deferred watchlist facade
///
/// Same contract as [`WatchListService`](super::WatchListService), but each
/// operation is dispatched to the I/O executor and a [`PendingWatchList`]
/// handle is returned immediately. The store call itself never blocks; this
/// mode keeps request-serving threads free of any work that might.
pub struct DeferredWatchListService<S: AccountStore + 'static> {
    store: Arc<S>,
    policy: WatchListPolicy,
    executor: Arc<IoExecutor>,
}

impl<S: AccountStore + 'static> DeferredWatchListService<S> {
    pub fn new(store: Arc<S>, policy: WatchListPolicy, executor: Arc<IoExecutor>) -> Self {
        Self {
            store,
            policy,
            executor,
        }
    }

    pub fn get(&self, account: AccountId) -> PendingWatchList<WatchList> {
        let store = Arc::clone(&self.store);
        self.dispatch(move || Ok(get_watch_list(store.as_ref(), account)))
    }

    pub fn update(
        &self,
        account: AccountId,
        watch_list: WatchList,
    ) -> PendingWatchList<WatchList> {
        let store = Arc::clone(&self.store);
        let policy = self.policy;
        self.dispatch(move || update_watch_list(store.as_ref(), &policy, account, watch_list))
    }

    pub fn delete(&self, account: AccountId) -> PendingWatchList<()> {
        let store = Arc::clone(&self.store);
        self.dispatch(move || {
            delete_watch_list(store.as_ref(), account);
            Ok(())
        })
    }

    fn dispatch<F, T>(&self, job: F) -> PendingWatchList<T>
    where
        F: FnOnce() -> Result<T, WatchListError> + Send + 'static,
        T: Send + 'static,
    {
        PendingWatchList {
            deferred: self.executor.submit(job),
        }
    }
}
