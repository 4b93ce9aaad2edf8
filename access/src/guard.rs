//! Route guards deciding between render, redirect, and failure.
//!
//! DESIGN
//! ======
//! A guard runs once per navigation and moves from `Unchecked` to exactly one
//! terminal state:
//!
//! - `Authorized`: the protected subtree may render.
//! - `DeniedRedirecting`: the viewer is sent to the localized root and the
//!   subtree never renders.
//! - `Fatal`: the session lookup failed; the error propagates to the host's
//!   error boundary instead of being disguised as a redirect.
//!
//! Role guards treat a missing session as an ordinary denial. The session
//! guard checks claims presence and treats every retrieval failure as fatal,
//! including a missing session; `Ok(None)` claims are its denial.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use crate::claims::Roles;
use crate::locale::Locale;
use crate::navigation::Redirect;
use crate::source::{RoleSource, SessionError};

/// Boolean role requirement evaluated against resolved [`Roles`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum RolePredicate {
    /// Any signed-in marketplace user.
    User,
    /// A verified listing agent.
    Verified,
    /// A marketplace administrator.
    Admin,
}

impl RolePredicate {
    #[must_use]
    pub fn allows(self, roles: &Roles) -> bool {
        match self {
            Self::User => roles.is_user,
            Self::Verified => roles.is_verified,
            Self::Admin => roles.is_admin,
        }
    }

    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::User => "user",
            Self::Verified => "verified",
            Self::Admin => "admin",
        }
    }
}

/// One layout boundary's access check.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Guard {
    /// Require a role flag; no session redirects.
    Role(RolePredicate),
    /// Require non-empty claims; any lookup failure is fatal.
    Session,
}

impl Guard {
    #[must_use]
    pub fn name(self) -> &'static str {
        match self {
            Self::Role(predicate) => predicate.name(),
            Self::Session => "session",
        }
    }

    /// Run this guard against `source`, producing a terminal state.
    pub async fn evaluate<S>(self, source: &S, locale: Locale) -> GuardState
    where
        S: RoleSource + ?Sized,
    {
        GuardState::Unchecked.check(self, source, locale).await
    }
}

/// Fatal guard failure, propagated to the nearest error boundary.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{guard} guard could not resolve the session: {source}")]
pub struct GuardError {
    pub guard: &'static str,
    #[source]
    pub source: SessionError,
}

/// What a layout should do after a successful check.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Access {
    /// Render the protected subtree.
    Granted,
    /// Navigate away without rendering.
    Redirect(Redirect),
}

/// Lifecycle of a single guard evaluation.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardState {
    Unchecked,
    Authorized,
    DeniedRedirecting(Redirect),
    Fatal(GuardError),
}

impl GuardState {
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Self::Unchecked)
    }

    #[must_use]
    pub fn is_authorized(&self) -> bool {
        matches!(self, Self::Authorized)
    }

    /// Advance an unchecked state by resolving `guard` against `source`.
    ///
    /// Terminal states are returned unchanged and no lookup is issued.
    pub async fn check<S>(self, guard: Guard, source: &S, locale: Locale) -> GuardState
    where
        S: RoleSource + ?Sized,
    {
        if self.is_terminal() {
            return self;
        }
        let next = match guard {
            Guard::Role(predicate) => match source.get_roles().await {
                Ok(roles) if predicate.allows(&roles) => GuardState::Authorized,
                Ok(_) | Err(SessionError::NoSession) => GuardState::DeniedRedirecting(Redirect::home(locale)),
                Err(err) => GuardState::Fatal(GuardError { guard: guard.name(), source: err }),
            },
            Guard::Session => match source.get_claims().await {
                Ok(Some(_)) => GuardState::Authorized,
                Ok(None) => GuardState::DeniedRedirecting(Redirect::home(locale)),
                Err(err) => GuardState::Fatal(GuardError { guard: guard.name(), source: err }),
            },
        };
        match &next {
            GuardState::Authorized => tracing::debug!(guard = guard.name(), %locale, "guard passed"),
            GuardState::DeniedRedirecting(redirect) => {
                tracing::info!(guard = guard.name(), %locale, target_path = %redirect.path(), "guard denied");
            }
            GuardState::Fatal(err) => tracing::warn!(guard = guard.name(), %locale, error = %err, "guard failed"),
            GuardState::Unchecked => {}
        }
        next
    }

    /// Convert a terminal state into the layout's decision.
    ///
    /// Returns `None` for `Unchecked`.
    ///
    /// # Errors
    ///
    /// Returns the [`GuardError`] carried by a `Fatal` state.
    pub fn into_access(self) -> Option<Result<Access, GuardError>> {
        match self {
            Self::Unchecked => None,
            Self::Authorized => Some(Ok(Access::Granted)),
            Self::DeniedRedirecting(redirect) => Some(Ok(Access::Redirect(redirect))),
            Self::Fatal(err) => Some(Err(err)),
        }
    }
}

/// Gate a subtree behind a role flag.
///
/// # Errors
///
/// Returns a [`GuardError`] when the role lookup fails for any reason other
/// than a missing session.
pub async fn authorize<S>(source: &S, locale: Locale, predicate: RolePredicate) -> Result<Access, GuardError>
where
    S: RoleSource + ?Sized,
{
    terminal(Guard::Role(predicate).evaluate(source, locale).await, locale)
}

/// Gate a subtree behind raw session presence.
///
/// # Errors
///
/// Returns a [`GuardError`] for every claims retrieval failure, including a
/// missing session.
pub async fn authorize_session<S>(source: &S, locale: Locale) -> Result<Access, GuardError>
where
    S: RoleSource + ?Sized,
{
    terminal(Guard::Session.evaluate(source, locale).await, locale)
}

/// Evaluate nested guards outermost first.
///
/// Stops at the first guard that does not authorize; guards after it are
/// never evaluated and issue no lookup. An empty chain authorizes.
pub async fn authorize_chain<S>(source: &S, locale: Locale, guards: &[Guard]) -> GuardState
where
    S: RoleSource + ?Sized,
{
    for guard in guards {
        let state = guard.evaluate(source, locale).await;
        if !state.is_authorized() {
            return state;
        }
    }
    GuardState::Authorized
}

fn terminal(state: GuardState, locale: Locale) -> Result<Access, GuardError> {
    state.into_access().unwrap_or_else(|| Ok(Access::Redirect(Redirect::home(locale))))
}
