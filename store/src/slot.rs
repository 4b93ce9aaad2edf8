//! Once-per-scope store construction.

use std::sync::{Arc, OnceLock};

use crate::{Store, StoreError};

/// Holder for the store a provider materializes for its subtree.
///
/// `create` builds the store the first time and returns that same handle on
/// every later call, so re-running the provider never resets state.
pub struct StoreSlot<S> {
    name: &'static str,
    cell: Arc<OnceLock<Store<S>>>,
}

impl<S> Clone for StoreSlot<S> {
    fn clone(&self) -> Self {
        Self { name: self.name, cell: Arc::clone(&self.cell) }
    }
}

impl<S> StoreSlot<S>
where
    S: Clone + Send + Sync + 'static,
{
    /// Empty slot for the store called `name` in diagnostics.
    #[must_use]
    pub fn new(name: &'static str) -> Self {
        Self { name, cell: Arc::new(OnceLock::new()) }
    }

    #[must_use]
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Return the slot's store, creating it from `initial` if empty.
    pub fn create(&self, initial: S) -> Store<S> {
        self.create_with(|| initial)
    }

    /// Like [`StoreSlot::create`], building the initial state lazily.
    pub fn create_with(&self, initial: impl FnOnce() -> S) -> Store<S> {
        self.cell
            .get_or_init(|| {
                tracing::debug!(store = self.name, "store created");
                Store::new(initial())
            })
            .clone()
    }

    /// The created store.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::MissingProvider`] if nothing was created yet.
    pub fn get(&self) -> Result<Store<S>, StoreError> {
        self.cell.get().cloned().ok_or(StoreError::MissingProvider { store: self.name })
    }
}
