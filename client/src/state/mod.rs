//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! Two stores share the [`market::MarketState`] shape: the app store drives
//! header chrome and the login flag, the category store drives search
//! filters. Each is a distinct instance created by its own provider.

pub mod market;
pub mod provider;

use store::StoreSlot;

use self::market::MarketState;

/// Context key for a market store provided to a subtree.
pub trait MarketStoreKey: Clone + Send + Sync + 'static {
    /// Store name used in diagnostics and `MissingProvider` errors.
    const NAME: &'static str;

    fn new(slot: StoreSlot<MarketState>) -> Self;

    fn slot(&self) -> &StoreSlot<MarketState>;
}

/// App-wide store: login flag and header selection.
#[derive(Clone)]
pub struct AppStore(StoreSlot<MarketState>);

/// Search-filter store driving category, location, and type selection.
#[derive(Clone)]
pub struct CategoryStore(StoreSlot<MarketState>);

impl MarketStoreKey for AppStore {
    const NAME: &'static str = "app";

    fn new(slot: StoreSlot<MarketState>) -> Self {
        Self(slot)
    }

    fn slot(&self) -> &StoreSlot<MarketState> {
        &self.0
    }
}

impl MarketStoreKey for CategoryStore {
    const NAME: &'static str = "category";

    fn new(slot: StoreSlot<MarketState>) -> Self {
        Self(slot)
    }

    fn slot(&self) -> &StoreSlot<MarketState> {
        &self.0
    }
}
