//! Boundary to the external session provider.
//!
//! ERROR HANDLING
//! ==============
//! The provider reports "nobody is signed in" as its own variant so guards
//! can branch on it directly. Every other failure is a lookup failure and is
//! never mistaken for a denial.

use async_trait::async_trait;

use crate::claims::{Claims, Roles};

/// Failure resolving the viewer's session.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum SessionError {
    /// No authenticated viewer.
    #[error("no active session")]
    NoSession,
    /// Transport, server, or decoding failure talking to the provider.
    #[error("session lookup failed: {0}")]
    Lookup(String),
}

/// Source of role flags and raw claims for the current viewer.
///
/// Futures are not required to be `Send`: the browser implementation awaits
/// `fetch` promises on the single UI thread.
#[async_trait(?Send)]
pub trait RoleSource {
    /// Resolve role flags for the current viewer.
    async fn get_roles(&self) -> Result<Roles, SessionError>;

    /// Resolve the raw claims, `Ok(None)` when the provider has none.
    async fn get_claims(&self) -> Result<Option<Claims>, SessionError>;
}

