//! Header with locale-aware links, a language switch, and sign-in chrome.
//!
//! Renders inside the locale layout's error boundary; a missing store
//! provider surfaces there as an error page.

#[cfg(test)]
#[path = "nav_bar_test.rs"]
mod nav_bar_test;

use access::{Locale, localized_href};
use leptos::prelude::*;
use leptos_router::hooks::use_location;
use store::StoreError;

use crate::state::market::MarketActions;
use crate::state::provider::{use_app_store, use_store_handle};
use crate::state::{AppStore, CategoryStore};
use crate::util::guard::use_locale;

/// Same page in another locale: swaps the path's locale prefix.
pub fn switch_locale_href(pathname: &str, target: Locale) -> String {
    match Locale::split_path(pathname) {
        Some((_, rest)) => localized_href(target, rest),
        None => localized_href(target, pathname),
    }
}

#[component]
pub fn NavBar() -> impl IntoView {
    nav_bar()
}

fn nav_bar() -> Result<impl IntoView, StoreError> {
    let login = use_app_store(|s| s.login)?;
    let app = use_store_handle::<AppStore>()?;
    let filters = use_store_handle::<CategoryStore>()?;
    let locale = use_locale();
    let pathname = use_location().pathname;

    let href = move |path: &'static str| move || localized_href(locale.get(), path);
    let on_sign_out = move |_: leptos::ev::MouseEvent| {
        app.set_login(false);
        filters.reset();
    };

    Ok(view! {
        <header class="nav-bar">
            <a class="nav-bar__brand" href=href("/")>"Habitat"</a>
            <nav class="nav-bar__links">
                <a href=href("/user/favorites")>"Favorites"</a>
                <a href=href("/user/bookings")>"Bookings"</a>
                <a href=href("/user/agent/listings")>"My listings"</a>
                <a href=href("/admin")>"Admin"</a>
            </nav>
            <div class="nav-bar__locales">
                {Locale::ALL
                    .into_iter()
                    .map(|target| {
                        view! {
                            <a
                                class=move || {
                                    if locale.get() == target { "nav-bar__locale nav-bar__locale--active" } else { "nav-bar__locale" }
                                }
                                href=move || switch_locale_href(&pathname.get(), target)
                            >
                                {target.code()}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
            <Show
                when=move || login.get()
                fallback=move || view! { <a class="nav-bar__account" href=href("/account")>"Sign in"</a> }
            >
                <button class="nav-bar__account" on:click=on_sign_out.clone()>"Sign out"</button>
            </Show>
        </header>
    })
}
