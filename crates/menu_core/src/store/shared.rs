//! Session-wide shared store handle.
//!
//! # Responsibility
//! - Give every view of one session the same live collection.
//! - Notify subscribers after each successful append.
//!
//! # Invariants
//! - `add` is the only mutation path.
//! - Subscribers observe a full snapshot, never a partially applied append.
//! - Listeners run after the write lock is released.

use crate::filter::course_filter;
use crate::model::menu_item::{MenuItem, MenuItemDraft, MenuValidationError};
use crate::store::menu_store::MenuStore;
use log::debug;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock};

/// Callback invoked with the collection snapshot after an append.
pub type MenuListener = Arc<dyn Fn(&[MenuItem]) + Send + Sync>;

/// Handle returned by [`SharedMenuStore::subscribe`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

/// Cloneable owning reference to one session's [`MenuStore`].
#[derive(Clone)]
pub struct SharedMenuStore {
    inner: Arc<SharedInner>,
}

struct SharedInner {
    store: RwLock<MenuStore>,
    listeners: Mutex<Vec<(SubscriptionId, MenuListener)>>,
    next_subscription: AtomicU64,
}

impl SharedMenuStore {
    pub fn new(store: MenuStore) -> Self {
        Self {
            inner: Arc::new(SharedInner {
                store: RwLock::new(store),
                listeners: Mutex::new(Vec::new()),
                next_subscription: AtomicU64::new(1),
            }),
        }
    }

    /// Validates and appends one item, then notifies subscribers.
    pub fn add(&self, draft: &MenuItemDraft) -> Result<MenuItem, MenuValidationError> {
        let (item, snapshot) = {
            let mut store = self
                .inner
                .store
                .write()
                .unwrap_or_else(PoisonError::into_inner);
            let item = store.add(draft)?;
            (item, store.items().to_vec())
        };

        let listeners = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect::<Vec<_>>();
        debug!(
            "event=menu_notify module=store listeners={} count={}",
            listeners.len(),
            snapshot.len()
        );
        for listener in listeners {
            listener(&snapshot);
        }

        Ok(item)
    }

    /// Snapshot of the collection in insertion order.
    pub fn items(&self) -> Vec<MenuItem> {
        self.read(|store| store.items().to_vec())
    }

    /// Filters the live collection by course.
    pub fn filter(&self, query: &str) -> Vec<MenuItem> {
        self.read(|store| course_filter::apply(store.items(), query))
    }

    pub fn len(&self) -> usize {
        self.read(MenuStore::len)
    }

    pub fn is_empty(&self) -> bool {
        self.read(MenuStore::is_empty)
    }

    /// Registers a listener called after every successful `add`.
    pub fn subscribe(
        &self,
        listener: impl Fn(&[MenuItem]) + Send + Sync + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(
            self.inner
                .next_subscription
                .fetch_add(1, Ordering::Relaxed),
        );
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, Arc::new(listener)));
        id
    }

    /// Removes a listener. Returns `false` when the id is unknown.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut listeners = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        let before = listeners.len();
        listeners.retain(|(existing, _)| *existing != id);
        listeners.len() != before
    }

    fn read<T>(&self, f: impl FnOnce(&MenuStore) -> T) -> T {
        let store = self
            .inner
            .store
            .read()
            .unwrap_or_else(PoisonError::into_inner);
        f(&store)
    }
}
