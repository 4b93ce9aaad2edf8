//! Account overview for any live session (behind `AccountLayout`).
//!
//! Reaching this page means the session guard saw claims, so the app store's
//! cosmetic login flag is switched on for header chrome.

use leptos::prelude::*;
use store::StoreError;

use crate::state::AppStore;
use crate::state::market::MarketActions;
use crate::state::provider::use_store_handle;

#[component]
pub fn AccountPage() -> impl IntoView {
    account_page()
}

fn account_page() -> Result<impl IntoView, StoreError> {
    let app = use_store_handle::<AppStore>()?;
    Effect::new(move || app.set_login(true));
    Ok(view! {
        <section class="account-page">
            <h1>"Account"</h1>
            <p>"Profile, security, and notification settings."</p>
        </section>
    })
}
