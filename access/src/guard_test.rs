use std::cell::Cell;

use async_trait::async_trait;

use super::*;
use crate::claims::Claims;

/// Role source returning canned results and counting lookups.
struct StubSource {
    roles: Result<Roles, SessionError>,
    claims: Result<Option<Claims>, SessionError>,
    role_calls: Cell<usize>,
    claim_calls: Cell<usize>,
}

impl StubSource {
    fn with_roles(roles: Result<Roles, SessionError>) -> Self {
        Self { roles, claims: Ok(None), role_calls: Cell::new(0), claim_calls: Cell::new(0) }
    }

    fn with_claims(claims: Result<Option<Claims>, SessionError>) -> Self {
        Self { roles: Err(SessionError::NoSession), claims, role_calls: Cell::new(0), claim_calls: Cell::new(0) }
    }
}

#[async_trait(?Send)]
impl RoleSource for StubSource {
    async fn get_roles(&self) -> Result<Roles, SessionError> {
        self.role_calls.set(self.role_calls.get() + 1);
        self.roles.clone()
    }

    async fn get_claims(&self) -> Result<Option<Claims>, SessionError> {
        self.claim_calls.set(self.claim_calls.get() + 1);
        self.claims.clone()
    }
}

fn sample_claims() -> Claims {
    Claims { sub: "user-1".to_owned(), email: Some("a@example.com".to_owned()), name: None, exp: None }
}

fn lookup_failure() -> SessionError {
    SessionError::Lookup("503 Service Unavailable".to_owned())
}

// =============================================================================
// RolePredicate
// =============================================================================

#[test]
fn predicates_read_matching_flag() {
    let roles = Roles { is_user: true, is_verified: false, is_admin: true };
    assert!(RolePredicate::User.allows(&roles));
    assert!(!RolePredicate::Verified.allows(&roles));
    assert!(RolePredicate::Admin.allows(&roles));
}

#[test]
fn every_predicate_denies_default_roles() {
    for predicate in [RolePredicate::User, RolePredicate::Verified, RolePredicate::Admin] {
        assert!(!predicate.allows(&Roles::default()), "{predicate:?} should deny");
    }
}

// =============================================================================
// authorize
// =============================================================================

#[tokio::test]
async fn authorize_grants_when_predicate_holds() {
    let source = StubSource::with_roles(Ok(Roles::verified_agent()));
    let access = authorize(&source, Locale::En, RolePredicate::Verified).await;
    assert_eq!(access, Ok(Access::Granted));
    assert_eq!(source.role_calls.get(), 1);
}

#[tokio::test]
async fn authorize_redirects_home_when_predicate_fails() {
    let source = StubSource::with_roles(Ok(Roles::user()));
    let access = authorize(&source, Locale::Fr, RolePredicate::Admin).await;
    assert_eq!(access, Ok(Access::Redirect(Redirect::home(Locale::Fr))));
}

#[tokio::test]
async fn authorize_redirects_on_no_session_for_each_locale() {
    for (locale, path) in [(Locale::En, "/en"), (Locale::Fr, "/fr")] {
        let source = StubSource::with_roles(Err(SessionError::NoSession));
        let access = authorize(&source, locale, RolePredicate::User).await.expect("no session is not fatal");
        let Access::Redirect(redirect) = access else { panic!("expected redirect for {locale}") };
        assert_eq!(redirect.locale, locale);
        assert_eq!(redirect.path(), path);
    }
}

#[tokio::test]
async fn authorize_propagates_lookup_failure() {
    let source = StubSource::with_roles(Err(lookup_failure()));
    let err = authorize(&source, Locale::En, RolePredicate::User).await.expect_err("lookup failure is fatal");
    assert_eq!(err.guard, "user");
    assert_eq!(err.source, lookup_failure());
}

#[tokio::test]
async fn authorize_grants_iff_predicate_true_over_all_roles() {
    let predicates = [RolePredicate::User, RolePredicate::Verified, RolePredicate::Admin];
    for bits in 0u8..8 {
        let roles = Roles { is_user: bits & 1 != 0, is_verified: bits & 2 != 0, is_admin: bits & 4 != 0 };
        for predicate in predicates {
            let source = StubSource::with_roles(Ok(roles));
            let access = authorize(&source, Locale::En, predicate).await.expect("roles resolved");
            assert_eq!(access == Access::Granted, predicate.allows(&roles), "{predicate:?} with {roles:?}");
        }
    }
}

// =============================================================================
// authorize_session
// =============================================================================

#[tokio::test]
async fn session_guard_grants_with_claims() {
    let source = StubSource::with_claims(Ok(Some(sample_claims())));
    assert_eq!(authorize_session(&source, Locale::En).await, Ok(Access::Granted));
    assert_eq!(source.claim_calls.get(), 1);
    assert_eq!(source.role_calls.get(), 0);
}

#[tokio::test]
async fn session_guard_redirects_without_claims() {
    let source = StubSource::with_claims(Ok(None));
    assert_eq!(authorize_session(&source, Locale::Fr).await, Ok(Access::Redirect(Redirect::home(Locale::Fr))));
}

#[tokio::test]
async fn session_guard_treats_no_session_error_as_fatal() {
    let source = StubSource::with_claims(Err(SessionError::NoSession));
    let err = authorize_session(&source, Locale::En).await.expect_err("session guard rethrows");
    assert_eq!(err.guard, "session");
    assert_eq!(err.source, SessionError::NoSession);
}

#[tokio::test]
async fn session_guard_propagates_lookup_failure() {
    let source = StubSource::with_claims(Err(lookup_failure()));
    let err = authorize_session(&source, Locale::En).await.expect_err("fatal");
    assert!(err.to_string().contains("session guard"));
}

// =============================================================================
// GuardState
// =============================================================================

#[tokio::test]
async fn evaluation_always_reaches_terminal_state() {
    let source = StubSource::with_roles(Err(lookup_failure()));
    let state = Guard::Role(RolePredicate::User).evaluate(&source, Locale::En).await;
    assert!(state.is_terminal());
    assert!(matches!(state, GuardState::Fatal(_)));
}

#[tokio::test]
async fn terminal_state_is_not_rechecked() {
    let source = StubSource::with_roles(Ok(Roles::admin()));
    let denied = GuardState::DeniedRedirecting(Redirect::home(Locale::En));
    let state = denied.clone().check(Guard::Role(RolePredicate::Admin), &source, Locale::En).await;
    assert_eq!(state, denied);
    assert_eq!(source.role_calls.get(), 0);
}

#[test]
fn unchecked_state_has_no_access_decision() {
    assert!(!GuardState::Unchecked.is_terminal());
    assert!(GuardState::Unchecked.into_access().is_none());
}

#[test]
fn terminal_states_map_to_access_decisions() {
    assert_eq!(GuardState::Authorized.into_access(), Some(Ok(Access::Granted)));
    let redirect = Redirect::home(Locale::Fr);
    assert_eq!(
        GuardState::DeniedRedirecting(redirect.clone()).into_access(),
        Some(Ok(Access::Redirect(redirect)))
    );
    let err = GuardError { guard: "session", source: lookup_failure() };
    assert_eq!(GuardState::Fatal(err.clone()).into_access(), Some(Err(err)));
}

// =============================================================================
// authorize_chain
// =============================================================================

#[tokio::test]
async fn chain_outer_denial_skips_inner_lookup() {
    let source = StubSource::with_claims(Ok(None));
    let state = authorize_chain(&source, Locale::Fr, &[Guard::Session, Guard::Role(RolePredicate::Verified)]).await;
    assert_eq!(state, GuardState::DeniedRedirecting(Redirect::home(Locale::Fr)));
    assert_eq!(source.claim_calls.get(), 1);
    assert_eq!(source.role_calls.get(), 0);
}

#[tokio::test]
async fn chain_unverified_user_on_agent_route_redirects() {
    let source = StubSource::with_roles(Ok(Roles { is_user: true, is_verified: false, is_admin: false }));
    let guards = [Guard::Role(RolePredicate::User), Guard::Role(RolePredicate::Verified)];
    for locale in Locale::ALL {
        let state = authorize_chain(&source, locale, &guards).await;
        let GuardState::DeniedRedirecting(redirect) = state else { panic!("inner guard should deny") };
        assert_eq!(redirect.path(), format!("/{}", locale.code()));
    }
    assert_eq!(source.role_calls.get(), 4);
}

#[tokio::test]
async fn chain_fatal_outer_stops_evaluation() {
    let source = StubSource::with_roles(Err(lookup_failure()));
    let guards = [Guard::Role(RolePredicate::User), Guard::Role(RolePredicate::Admin)];
    let state = authorize_chain(&source, Locale::En, &guards).await;
    assert!(matches!(state, GuardState::Fatal(_)));
    assert_eq!(source.role_calls.get(), 1);
}

#[tokio::test]
async fn empty_chain_authorizes() {
    let source = StubSource::with_roles(Err(lookup_failure()));
    assert!(authorize_chain(&source, Locale::En, &[]).await.is_authorized());
    assert_eq!(source.role_calls.get(), 0);
}
