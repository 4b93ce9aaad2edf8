//! Observable state container with selective subscriptions.
//!
//! A [`Store`] holds one value of some state shape plus the immutable
//! snapshot it was created from. Writers replace or patch the value in a
//! single step; readers subscribe to a derived slice and hear about changes
//! to that slice only.
//!
//! Stores are plain values with no global registry. A UI root owns a
//! [`StoreSlot`] and hands the created store to its subtree.


mod slot;

use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError, RwLock, Weak};

pub use slot::StoreSlot;

/// Error returned when a store is read outside the scope that owns it.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    /// No provider created the named store in the caller's scope.
    #[error("{store} store used outside of its provider")]
    MissingProvider { store: &'static str },
}

type Listener<S> = Arc<dyn Fn(&S) + Send + Sync>;

struct Inner<S> {
    state: RwLock<S>,
    initial: S,
    listeners: Mutex<Vec<(u64, Listener<S>)>>,
    next_id: AtomicU64,
}

trait Unsubscribe: Send + Sync {
    fn unsubscribe(&self, id: u64);
}

impl<S: Send + Sync> Unsubscribe for Inner<S> {
    fn unsubscribe(&self, id: u64) {
        self.listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .retain(|(listener_id, _)| *listener_id != id);
    }
}

/// Shared handle to one state cell. Clones refer to the same cell.
pub struct Store<S> {
    inner: Arc<Inner<S>>,
}

impl<S> Clone for Store<S> {
    fn clone(&self) -> Self {
        Self { inner: Arc::clone(&self.inner) }
    }
}

impl<S: std::fmt::Debug> std::fmt::Debug for Store<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let state = self.inner.state.read().unwrap_or_else(PoisonError::into_inner);
        f.debug_struct("Store").field("state", &*state).finish_non_exhaustive()
    }
}

impl<S: Default + Clone + Send + Sync + 'static> Default for Store<S> {
    fn default() -> Self {
        Self::new(S::default())
    }
}

impl<S> Store<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Create a store whose reset snapshot is `initial`.
    #[must_use]
    pub fn new(initial: S) -> Self {
        Self {
            inner: Arc::new(Inner {
                state: RwLock::new(initial.clone()),
                initial,
                listeners: Mutex::new(Vec::new()),
                next_id: AtomicU64::new(0),
            }),
        }
    }

    /// Clone of the current state.
    #[must_use]
    pub fn get(&self) -> S {
        self.with(S::clone)
    }

    /// Borrow the current state for the duration of `f`.
    pub fn with<R>(&self, f: impl FnOnce(&S) -> R) -> R {
        let state = self.inner.state.read().unwrap_or_else(PoisonError::into_inner);
        f(&state)
    }

    /// Read a derived value once, without subscribing.
    pub fn select<T>(&self, select: impl FnOnce(&S) -> T) -> T {
        self.with(select)
    }

    /// The snapshot `reset` restores.
    #[must_use]
    pub fn initial(&self) -> &S {
        &self.inner.initial
    }

    /// Patch the state in one write, then notify subscribers.
    ///
    /// Subscribers run after the write completes and see the whole new state.
    /// A subscriber that writes to the store triggers a nested round; the
    /// outer round then hands each remaining subscriber the latest state, so
    /// no subscriber observes a value older than one it already received.
    pub fn update(&self, f: impl FnOnce(&mut S)) {
        {
            let mut state = self.inner.state.write().unwrap_or_else(PoisonError::into_inner);
            f(&mut state);
        }
        tracing::trace!(store = std::any::type_name::<S>(), "store updated");
        self.notify();
    }

    /// Replace the whole state.
    pub fn set(&self, next: S) {
        self.update(|state| *state = next);
    }

    /// Restore the initial snapshot in one write.
    pub fn reset(&self) {
        let initial = self.inner.initial.clone();
        tracing::trace!(store = std::any::type_name::<S>(), "store reset");
        self.update(|state| *state = initial);
    }

    /// Subscribe to the slice `select` derives from the state.
    ///
    /// `on_change` runs only when the derived slice differs from the last
    /// value seen by this subscription; writes to unrelated fields are silent.
    /// The subscription ends when the returned handle is dropped.
    #[must_use = "dropping the subscription unsubscribes immediately"]
    pub fn subscribe<T, F, C>(&self, select: F, on_change: C) -> Subscription
    where
        T: Clone + PartialEq + Send + 'static,
        F: Fn(&S) -> T + Send + Sync + 'static,
        C: Fn(&T) + Send + Sync + 'static,
    {
        let last = Mutex::new(self.with(&select));
        let listener: Listener<S> = Arc::new(move |state: &S| {
            let next = select(state);
            {
                let mut seen = last.lock().unwrap_or_else(PoisonError::into_inner);
                if *seen == next {
                    return;
                }
                *seen = next.clone();
            }
            on_change(&next);
        });

        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        self.inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .push((id, listener));

        let inner: Weak<Inner<S>> = Arc::downgrade(&self.inner);
        let weak: Weak<dyn Unsubscribe> = inner;
        Subscription { id, store: Some(weak) }
    }

    /// Number of live subscriptions.
    #[must_use]
    pub fn subscriber_count(&self) -> usize {
        self.inner.listeners.lock().unwrap_or_else(PoisonError::into_inner).len()
    }

    fn notify(&self) {
        // Snapshot the listener list so callbacks may subscribe or write.
        let listeners: Vec<Listener<S>> = self
            .inner
            .listeners
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .map(|(_, listener)| Arc::clone(listener))
            .collect();
        for listener in listeners {
            // Read fresh per listener: an earlier listener may have written.
            let current = self.get();
            listener(&current);
        }
    }
}

/// Live subscription handle. Unsubscribes on drop.
pub struct Subscription {
    id: u64,
    store: Option<Weak<dyn Unsubscribe>>,
}

impl Subscription {
    /// Keep the subscription for as long as the store lives.
    pub fn detach(mut self) {
        self.store = None;
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription").field("id", &self.id).finish()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(store) = self.store.take().and_then(|weak| weak.upgrade()) {
            store.unsubscribe(self.id);
        }
    }
}
