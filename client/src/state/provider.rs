//! Store providers and selector hooks for the component tree.
//!
//! SYSTEM CONTEXT
//! ==============
//! A provider materializes one store for its subtree's lifetime. Hooks turn
//! a selector into a signal that only changes when the selected slice does,
//! so a component reading `category` does not re-render on `country` edits.

#[cfg(test)]
#[path = "provider_test.rs"]
mod provider_test;

use leptos::prelude::*;
use store::{Store, StoreError, StoreSlot};

use super::market::MarketState;
use super::{AppStore, CategoryStore, MarketStoreKey};

/// Create the slot a provider hands to its subtree, with the store inside.
fn materialize<K: MarketStoreKey>() -> K {
    let slot = StoreSlot::new(K::NAME);
    slot.create(MarketState::default());
    K::new(slot)
}

/// Resolve the store for `K` from an optional context value.
///
/// # Errors
///
/// Returns [`StoreError::MissingProvider`] when no provider is in scope.
pub fn resolve<K: MarketStoreKey>(key: Option<K>) -> Result<Store<MarketState>, StoreError> {
    key.ok_or(StoreError::MissingProvider { store: K::NAME })?.slot().get()
}

/// Store handle for writers.
///
/// # Errors
///
/// Returns [`StoreError::MissingProvider`] outside the `K` provider.
pub fn use_store_handle<K: MarketStoreKey>() -> Result<Store<MarketState>, StoreError> {
    resolve(use_context::<K>())
}

/// Subscribe the calling component to one derived slice of the `K` store.
///
/// The subscription ends when the calling owner is cleaned up.
///
/// # Errors
///
/// Returns [`StoreError::MissingProvider`] outside the `K` provider.
pub fn use_store<K, T, F>(select: F) -> Result<ReadSignal<T>, StoreError>
where
    K: MarketStoreKey,
    T: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(&MarketState) -> T + Send + Sync + 'static,
{
    let store = use_store_handle::<K>()?;
    let (value, set_value) = signal(store.select(&select));
    let subscription = store.subscribe(select, move |next: &T| set_value.set(next.clone()));
    on_cleanup(move || drop(subscription));
    Ok(value)
}

/// Selector hook over the app store.
///
/// # Errors
///
/// Returns [`StoreError::MissingProvider`] outside [`AppStoreProvider`].
pub fn use_app_store<T, F>(select: F) -> Result<ReadSignal<T>, StoreError>
where
    T: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(&MarketState) -> T + Send + Sync + 'static,
{
    use_store::<AppStore, T, F>(select)
}

/// Selector hook over the category store.
///
/// # Errors
///
/// Returns [`StoreError::MissingProvider`] outside [`CategoryStoreProvider`].
pub fn use_category_store<T, F>(select: F) -> Result<ReadSignal<T>, StoreError>
where
    T: Clone + PartialEq + Send + Sync + 'static,
    F: Fn(&MarketState) -> T + Send + Sync + 'static,
{
    use_store::<CategoryStore, T, F>(select)
}

/// Provides the app store to its children.
#[component]
pub fn AppStoreProvider(children: Children) -> impl IntoView {
    provide_context(materialize::<AppStore>());
    children()
}

/// Provides the category store to its children.
#[component]
pub fn CategoryStoreProvider(children: Children) -> impl IntoView {
    provide_context(materialize::<CategoryStore>());
    children()
}
