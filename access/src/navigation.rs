//! Localized redirects and stale-navigation detection.
//!
//! SYSTEM CONTEXT
//! ==============
//! A guard decides to redirect only after its claims fetch resolves. If the
//! viewer navigated elsewhere in the meantime, that redirect belongs to a
//! route that is no longer on screen and must be dropped. Each navigation
//! takes a [`NavigationTicket`] from the shared [`NavigationEpoch`] and the
//! redirect layer checks the ticket before acting.

#[cfg(test)]
#[path = "navigation_test.rs"]
mod navigation_test;

use std::sync::{Arc, Mutex, PoisonError};

use crate::locale::{Locale, localized_href};

/// A navigation target expressed as an unprefixed href plus the locale to
/// render it in.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Redirect {
    pub href: String,
    pub locale: Locale,
}

impl Redirect {
    /// Redirect to the marketplace root in `locale`.
    #[must_use]
    pub fn home(locale: Locale) -> Self {
        Self { href: "/".to_owned(), locale }
    }

    /// The locale-prefixed path to navigate to.
    #[must_use]
    pub fn path(&self) -> String {
        localized_href(self.locale, &self.href)
    }
}

/// Shared navigation counter. Clones observe the same counter.
///
/// The counter advances whenever a different path is entered; entering the
/// path already on screen reuses the current epoch so nested guards of one
/// route share a ticket.
#[derive(Clone, Debug, Default)]
pub struct NavigationEpoch {
    current: Arc<Mutex<EpochState>>,
}

#[derive(Debug, Default)]
struct EpochState {
    epoch: u64,
    path: Option<String>,
}

impl NavigationEpoch {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Enter `path`, advancing the epoch only if it differs from the last path.
    #[must_use]
    pub fn enter(&self, path: &str) -> NavigationTicket {
        let mut state = self.lock();
        if state.path.as_deref() != Some(path) {
            state.epoch += 1;
            state.path = Some(path.to_owned());
        }
        self.ticket_for(state.epoch)
    }

    /// A ticket for the navigation in progress.
    #[must_use]
    pub fn ticket(&self) -> NavigationTicket {
        let epoch = self.lock().epoch;
        self.ticket_for(epoch)
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, EpochState> {
        self.current.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn ticket_for(&self, epoch: u64) -> NavigationTicket {
        NavigationTicket { epoch, current: Arc::clone(&self.current) }
    }
}

/// Proof that a side effect was scheduled during a particular navigation.
#[derive(Clone, Debug)]
pub struct NavigationTicket {
    epoch: u64,
    current: Arc<Mutex<EpochState>>,
}

impl NavigationTicket {
    /// Whether no newer navigation has started since this ticket was issued.
    #[must_use]
    pub fn is_current(&self) -> bool {
        self.current.lock().unwrap_or_else(PoisonError::into_inner).epoch == self.epoch
    }

    /// Apply `redirect` through `navigate` unless the ticket is stale.
    ///
    /// Returns whether the redirect was issued.
    pub fn redirect_with<F>(&self, redirect: &Redirect, navigate: F) -> bool
    where
        F: FnOnce(&str),
    {
        if !self.is_current() {
            tracing::debug!(target_path = %redirect.path(), "dropping redirect from superseded navigation");
            return false;
        }
        navigate(&redirect.path());
        true
    }
}
