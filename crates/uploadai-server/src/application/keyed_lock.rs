//! Per-key async locks
//!
//! At most one holder per key; other callers for the same key wait.
//! Every holder and waiter is counted against its key, and the entry is
//! dropped from the map when that count returns to zero, whether the
//! last user released the lock or gave up waiting.

use std::collections::HashMap;
use std::hash::Hash;
use std::sync::{Arc, Mutex, PoisonError};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type Entries<K> = Arc<Mutex<HashMap<K, Entry>>>;

struct Entry {
    slot: Arc<AsyncMutex<()>>,
    /// Holders plus waiters
    users: usize,
}

pub struct KeyedLocks<K: Eq + Hash + Clone> {
    entries: Entries<K>,
}

impl<K: Eq + Hash + Clone> KeyedLocks<K> {
    pub fn new() -> Self {
        Self {
            entries: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// Wait for exclusive access to `key`
    pub async fn lock(&self, key: K) -> KeyedGuard<K> {
        let (slot, registration) = self.register(key);
        let guard = slot.lock_owned().await;

        KeyedGuard {
            _guard: guard,
            _registration: registration,
        }
    }

    /// Number of keys currently held or waited on
    pub fn in_flight(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    fn register(&self, key: K) -> (Arc<AsyncMutex<()>>, Registration<K>) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.entry(key.clone()).or_insert_with(|| Entry {
            slot: Arc::default(),
            users: 0,
        });
        entry.users += 1;

        (
            Arc::clone(&entry.slot),
            Registration {
                key,
                entries: Arc::clone(&self.entries),
            },
        )
    }
}

impl<K: Eq + Hash + Clone> Default for KeyedLocks<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// One counted user of a key, released on drop
struct Registration<K: Eq + Hash + Clone> {
    key: K,
    entries: Entries<K>,
}

impl<K: Eq + Hash + Clone> Drop for Registration<K> {
    fn drop(&mut self) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let unused = match entries.get_mut(&self.key) {
            Some(entry) => {
                entry.users -= 1;
                entry.users == 0
            }
            None => false,
        };
        if unused {
            entries.remove(&self.key);
        }
    }
}

/// Exclusive access to one key; released on drop
pub struct KeyedGuard<K: Eq + Hash + Clone> {
    // Field order matters: unlock before giving up the registration
    _guard: OwnedMutexGuard<()>,
    _registration: Registration<K>,
}
