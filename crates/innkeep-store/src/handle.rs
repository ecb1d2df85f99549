//! # Store Handle
//!
//! Shared, thread-safe access to one `PropertyStore`.
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                                                                         │
//! │   UI thread ──┐                                                         │
//! │               ├──► StoreHandle (clone) ──► Arc<Mutex<PropertyStore>>   │
//! │   sync task ──┘                                                         │
//! │                                                                         │
//! │   Every call holds the lock for the whole closure, so a multi-step     │
//! │   write (check-in, check-out) is never observed half done.             │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use std::sync::{Arc, Mutex, PoisonError};

use crate::store::PropertyStore;

#[derive(Debug, Clone, Default)]
pub struct StoreHandle {
    store: Arc<Mutex<PropertyStore>>,
}

impl StoreHandle {
    pub fn new(store: PropertyStore) -> Self {
        StoreHandle {
            store: Arc::new(Mutex::new(store)),
        }
    }

    /// Executes a function with read access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// let arrivals = handle.read(|store| store.arrivals(today));
    /// ```
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&PropertyStore) -> R,
    {
        // Store writes commit only after every check passes, so the data
        // behind a poisoned lock is still consistent.
        let store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }

    /// Executes a function with write access to the store.
    ///
    /// ## Usage
    /// ```rust,ignore
    /// handle.write(|store| store.check_in("7", "104", None))?;
    /// ```
    pub fn write<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&mut PropertyStore) -> R,
    {
        let mut store = self.store.lock().unwrap_or_else(PoisonError::into_inner);
        f(&mut store)
    }
}
