//! Landing/search page.

#[cfg(test)]
#[path = "home_test.rs"]
mod home_test;

use leptos::prelude::*;
use store::StoreError;

use crate::components::filter_bar::FilterBar;
use crate::state::market::MarketState;
use crate::state::provider::use_category_store;

/// One-line description of the active search selection.
pub fn selection_summary(state: &MarketState) -> String {
    let mut summary = state.property_type.map_or_else(|| state.category.code().to_owned(), |t| t.code().to_owned());
    match (&state.city, &state.country) {
        (Some(city), Some(country)) => summary.push_str(&format!(" in {city}, {country}")),
        (Some(place), None) | (None, Some(place)) => summary.push_str(&format!(" in {place}")),
        (None, None) => {}
    }
    summary
}

#[component]
pub fn HomePage() -> impl IntoView {
    home_page()
}

fn home_page() -> Result<impl IntoView, StoreError> {
    let summary = use_category_store(selection_summary)?;
    Ok(view! {
        <section class="home-page">
            <FilterBar/>
            <p class="home-page__summary">"Showing " {move || summary.get()}</p>
        </section>
    })
}
