//! Shared application state for request handlers.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use crate::config::SchedulerConfig;
use crate::storage::Store;

/// Document store shared across all handlers.
///
/// The mutex serializes each handler's load → transform → save round trip;
/// the engine relies on single-writer access per state document.
pub type SharedStore = Arc<Mutex<Store>>;

/// Application state passed to all handlers
#[derive(Clone)]
pub struct AppState {
    pub store: SharedStore,
    pub scheduler: SchedulerConfig,
}

impl AppState {
    pub fn new(store: Store, scheduler: SchedulerConfig) -> Self {
        Self {
            store: Arc::new(Mutex::new(store)),
            scheduler,
        }
    }
}

/// Error returned when the store lock cannot be acquired
#[derive(Debug)]
pub struct StoreLockError;

impl std::fmt::Display for StoreLockError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Document store unavailable")
    }
}

impl std::error::Error for StoreLockError {}

/// Try to acquire the store lock, reporting a poisoned mutex as an error
pub fn try_lock(store: &SharedStore) -> Result<MutexGuard<'_, Store>, StoreLockError> {
    store.lock().map_err(|_: PoisonError<_>| {
        tracing::error!("Store mutex poisoned - a thread panicked while holding the lock");
        StoreLockError
    })
}
