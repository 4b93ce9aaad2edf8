//! Route layouts and the guard chain each one enforces.
//!
//! Nesting follows the route tree: `AgentLayout` sits under `UserLayout`, so
//! the verified-agent check only runs after the user check rendered its
//! outlet.

use access::{Guard, RolePredicate};
use leptos::prelude::*;
use leptos_router::components::{Outlet, Redirect};
use leptos_router::hooks::{use_location, use_params_map};

use crate::components::nav_bar::NavBar;
use crate::util::guard::{GuardedOutlet, locale_from_param};

pub const USER_GUARDS: &[Guard] = &[Guard::Role(RolePredicate::User)];
pub const AGENT_GUARDS: &[Guard] = &[Guard::Role(RolePredicate::Verified)];
pub const ADMIN_GUARDS: &[Guard] = &[Guard::Role(RolePredicate::Admin)];
pub const ACCOUNT_GUARDS: &[Guard] = &[Guard::Session];

/// `/:locale` parent: validates the locale and hosts the error boundary.
#[component]
pub fn LocaleLayout() -> impl IntoView {
    let params = use_params_map();
    let epoch = expect_context::<access::NavigationEpoch>();
    let pathname = use_location().pathname;

    Effect::new(move || {
        let _ = epoch.enter(&pathname.get());
    });

    move || {
        if locale_from_param(params.read().get("locale").as_deref()).is_none() {
            return view! { <Redirect path="/en"/> }.into_any();
        }
        view! {
            <ErrorBoundary fallback=|errors| {
                view! {
                    <div class="error-page">
                        <h1>"Something went wrong."</h1>
                        <ul>
                            {move || {
                                errors
                                    .get()
                                    .into_iter()
                                    .map(|(_, e)| view! { <li>{e.to_string()}</li> })
                                    .collect::<Vec<_>>()
                            }}
                        </ul>
                    </div>
                }
            }>
                <NavBar/>
                <main class="page">
                    <Outlet/>
                </main>
            </ErrorBoundary>
        }
        .into_any()
    }
}

/// Signed-in marketplace users.
#[component]
pub fn UserLayout() -> impl IntoView {
    view! { <GuardedOutlet guards=USER_GUARDS/> }
}

/// Verified agents; nested under [`UserLayout`].
#[component]
pub fn AgentLayout() -> impl IntoView {
    view! { <GuardedOutlet guards=AGENT_GUARDS/> }
}

/// Marketplace administrators.
#[component]
pub fn AdminLayout() -> impl IntoView {
    view! { <GuardedOutlet guards=ADMIN_GUARDS/> }
}

/// Any viewer with a live session, whatever their roles.
#[component]
pub fn AccountLayout() -> impl IntoView {
    view! { <GuardedOutlet guards=ACCOUNT_GUARDS/> }
}
