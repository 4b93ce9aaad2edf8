//! Layout-boundary access guards.
//!
//! SYSTEM CONTEXT
//! ==============
//! Protected layouts render a [`GuardedOutlet`] instead of a bare `<Outlet/>`.
//! The outlet waits for the full guard chain before showing anything, so no
//! protected markup renders while claims are in flight, and an inner layout's
//! guard never runs unless its parent rendered the outlet.

#[cfg(test)]
#[path = "guard_test.rs"]
mod guard_test;

use std::sync::Arc;

use access::{
    Access, Guard, GuardError, GuardState, Locale, NavigationEpoch, NavigationTicket, RoleSource, authorize_chain,
};
use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};
use leptos_router::hooks::{use_location, use_params_map};

/// Role/session source provided at the application root.
#[derive(Clone)]
pub struct SessionSource(pub Arc<dyn RoleSource + Send + Sync>);

/// Parse the `:locale` route segment. Only exact codes are accepted.
pub fn locale_from_param(param: Option<&str>) -> Option<Locale> {
    let param = param?;
    Locale::ALL.into_iter().find(|locale| locale.code() == param)
}

/// Active locale from the route, falling back to the default locale.
pub fn use_locale() -> Memo<Locale> {
    let params = use_params_map();
    Memo::new(move |_| locale_from_param(params.read().get("locale").as_deref()).unwrap_or_default())
}

/// What a guarded outlet renders once its chain has resolved.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GuardView {
    /// Show the protected child route.
    Render,
    /// Navigate to this locale-prefixed path.
    Redirect(String),
    /// Render nothing; the navigation that asked for this check is gone.
    Discard,
}

/// Translate a resolved guard state into the outlet's view decision.
///
/// # Errors
///
/// Returns the [`GuardError`] of a fatal state so it reaches the nearest
/// error boundary.
pub fn guard_view(state: GuardState, ticket: &NavigationTicket) -> Result<GuardView, GuardError> {
    match state.into_access() {
        Some(Ok(Access::Granted)) => Ok(GuardView::Render),
        Some(Ok(Access::Redirect(redirect))) => {
            let mut target = None;
            ticket.redirect_with(&redirect, |path| target = Some(path.to_owned()));
            Ok(target.map_or(GuardView::Discard, GuardView::Redirect))
        }
        Some(Err(err)) => Err(err),
        None => Ok(GuardView::Discard),
    }
}

/// Run `guards` for a navigation to `path` and decide what the outlet shows.
///
/// The ticket is taken before any lookup starts, so a navigation that lands
/// while the lookup is in flight turns this check's redirect into a discard.
/// The newer navigation runs its own check.
///
/// # Errors
///
/// Returns the [`GuardError`] of a guard whose session lookup failed.
pub async fn check_navigation<S>(
    source: &S,
    epoch: &NavigationEpoch,
    path: &str,
    locale: Locale,
    guards: &[Guard],
) -> Result<GuardView, GuardError>
where
    S: RoleSource + ?Sized,
{
    let ticket = epoch.enter(path);
    let state = authorize_chain(source, locale, guards).await;
    guard_view(state, &ticket)
}

/// Renders the child route only when every guard in `guards` passes.
///
/// The chain re-runs on every path change, including moves between sibling
/// routes that keep this layout mounted.
#[component]
pub fn GuardedOutlet(guards: &'static [Guard]) -> impl IntoView {
    let locale = use_locale();
    let source = expect_context::<SessionSource>();
    let epoch = expect_context::<NavigationEpoch>();
    let pathname = use_location().pathname;

    let decision = LocalResource::new(move || {
        let source = source.clone();
        let epoch = epoch.clone();
        let locale = locale.get();
        let path = pathname.get();
        async move { check_navigation(&*source.0, &epoch, &path, locale, guards).await }
    });

    view! {
        <Suspense fallback=|| view! { <p class="guard-pending">"Checking access..."</p> }>
            {move || Suspend::new(async move {
                decision.await.map(|decision| match decision {
                    GuardView::Render => view! { <Outlet/> }.into_any(),
                    GuardView::Redirect(path) => view! { <Redirect path=path/> }.into_any(),
                    GuardView::Discard => ().into_any(),
                })
            })}
        </Suspense>
    }
}
