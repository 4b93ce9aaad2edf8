//! Verified-agent listing management (behind `AgentLayout`).

use leptos::prelude::*;
use store::StoreError;

use crate::state::provider::use_category_store;

#[component]
pub fn AgentListingsPage() -> impl IntoView {
    agent_listings_page()
}

fn agent_listings_page() -> Result<impl IntoView, StoreError> {
    let category = use_category_store(|s| s.category)?;
    Ok(view! {
        <section class="agent-page">
            <h1>"My listings"</h1>
            <p>"Category: " {move || category.get().code()}</p>
        </section>
    })
}
