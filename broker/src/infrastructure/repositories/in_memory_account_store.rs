use crate::application::ports::AccountStore;
use crate::domain::{AccountId, WatchList};
use dashmap::DashMap;
use std::sync::Arc;

/// In-memory watchlist store
///
/// Thread-safe storage keyed by account using DashMap. Each operation holds
/// the shard lock of its key, which makes it linearizable per account.
pub struct InMemoryAccountStore {
    watch_lists: Arc<DashMap<AccountId, WatchList>>,
}

impl InMemoryAccountStore {
    pub fn new() -> Self {
        Self {
            watch_lists: Arc::new(DashMap::new()),
        }
    }

    /// Number of accounts holding a watchlist
    pub fn len(&self) -> usize {
        self.watch_lists.len()
    }

    pub fn is_empty(&self) -> bool {
        self.watch_lists.is_empty()
    }
}

impl Default for InMemoryAccountStore {
    fn default() -> Self {
        Self::new()
    }
}

impl Clone for InMemoryAccountStore {
    fn clone(&self) -> Self {
        Self {
            watch_lists: Arc::clone(&self.watch_lists),
        }
    }
}

impl AccountStore for InMemoryAccountStore {
    fn watch_list(&self, account: AccountId) -> WatchList {
        self.watch_lists
            .get(&account)
            .map(|w| w.value().clone())
            .unwrap_or_default()
    }

    fn replace_watch_list(&self, account: AccountId, watch_list: WatchList) -> WatchList {
        // Write and copy out under the same guard
        let mut entry = self.watch_lists.entry(account).or_default();
        *entry = watch_list;
        entry.value().clone()
    }

    fn delete_watch_list(&self, account: AccountId) {
        self.watch_lists.remove(&account);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Symbol;
    use std::thread;

    fn watch_list(values: &[&str]) -> WatchList {
        values.iter().map(|v| Symbol::new(*v).unwrap()).collect()
    }

    #[test]
    fn test_unknown_account_has_empty_watch_list() {
        let store = InMemoryAccountStore::new();
        assert!(store.watch_list(AccountId::new()).is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_replace_then_get_preserves_order() {
        let store = InMemoryAccountStore::new();
        let account = AccountId::new();
        let list = watch_list(&["APPL", "AMZN", "NFLX"]);

        let stored = store.replace_watch_list(account, list.clone());

        assert_eq!(stored, list);
        assert_eq!(store.watch_list(account), list);
    }

    #[test]
    fn test_replace_is_not_a_merge() {
        let store = InMemoryAccountStore::new();
        let account = AccountId::new();

        store.replace_watch_list(account, watch_list(&["APPL", "AMZN"]));
        store.replace_watch_list(account, watch_list(&["TSLA"]));

        assert_eq!(store.watch_list(account), watch_list(&["TSLA"]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_delete_returns_account_to_empty() {
        let store = InMemoryAccountStore::new();
        let account = AccountId::new();
        store.replace_watch_list(account, watch_list(&["APPL", "AMZN", "NFLX"]));

        store.delete_watch_list(account);

        assert!(store.watch_list(account).is_empty());
        assert!(store.is_empty());
    }

    #[test]
    fn test_delete_absent_account_leaves_others_untouched() {
        let store = InMemoryAccountStore::new();
        let kept = AccountId::new();
        store.replace_watch_list(kept, watch_list(&["MSFT"]));

        store.delete_watch_list(AccountId::new());

        assert_eq!(store.watch_list(kept), watch_list(&["MSFT"]));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_returned_copy_is_detached_from_store() {
        let store = InMemoryAccountStore::new();
        let account = AccountId::new();

        let mut copy = store.replace_watch_list(account, watch_list(&["APPL"]));
        copy.symbols.push(Symbol::new("GOOG").unwrap());

        assert_eq!(store.watch_list(account), watch_list(&["APPL"]));
    }

    #[test]
    fn test_concurrent_replace_is_last_writer_wins() {
        let store = InMemoryAccountStore::new();
        let account = AccountId::new();
        let first = watch_list(&["APPL", "AMZN", "NFLX"]);
        let second = watch_list(&["TSLA", "MSFT"]);

        for _ in 0..50 {
            let handles: Vec<_> = [first.clone(), second.clone()]
                .into_iter()
                .map(|list| {
                    let store = store.clone();
                    thread::spawn(move || {
                        for _ in 0..100 {
                            store.replace_watch_list(account, list.clone());
                        }
                    })
                })
                .collect();

            for handle in handles {
                handle.join().unwrap();
            }

            let result = store.watch_list(account);
            assert!(result == first || result == second, "corrupted: {:?}", result);
        }
    }
}
