//! Search filters bound to the category store.
//!
//! Each control subscribes to its own field only, so typing a city does not
//! re-render the category picker.

use leptos::prelude::*;
use store::StoreError;

use crate::state::CategoryStore;
use crate::state::market::{MarketActions, PropertyCategory, PropertyType};
use crate::state::provider::{use_category_store, use_store_handle};

/// Normalize a free-text filter: blank input clears the filter.
pub fn filter_value(raw: &str) -> Option<String> {
    let trimmed = raw.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_owned())
}

#[component]
pub fn FilterBar() -> impl IntoView {
    filter_bar()
}

fn filter_bar() -> Result<impl IntoView, StoreError> {
    let store = use_store_handle::<CategoryStore>()?;
    let category = use_category_store(|s| s.category)?;
    let country = use_category_store(|s| s.country.clone())?;
    let city = use_category_store(|s| s.city.clone())?;
    let property_type = use_category_store(|s| s.property_type)?;

    let on_category = {
        let store = store.clone();
        move |ev: leptos::ev::Event| {
            let Some(next) = PropertyCategory::from_code(&event_target_value(&ev)) else { return };
            store.set_category(next);
            if !store.select(|s| s.type_fits_category()) {
                store.set_type(None);
            }
        }
    };
    let on_country = {
        let store = store.clone();
        move |ev: leptos::ev::Event| store.set_country(filter_value(&event_target_value(&ev)))
    };
    let on_city = {
        let store = store.clone();
        move |ev: leptos::ev::Event| store.set_city(filter_value(&event_target_value(&ev)))
    };
    let on_type = {
        let store = store.clone();
        move |ev: leptos::ev::Event| store.set_type(PropertyType::from_code(&event_target_value(&ev)))
    };
    let on_clear = move |_: leptos::ev::MouseEvent| store.reset();

    Ok(view! {
        <form class="filter-bar" on:submit=|ev: leptos::ev::SubmitEvent| ev.prevent_default()>
            <select class="filter-bar__category" on:change=on_category prop:value=move || category.get().code()>
                {PropertyCategory::ALL
                    .into_iter()
                    .map(|c| view! { <option value=c.code()>{c.code()}</option> })
                    .collect::<Vec<_>>()}
            </select>
            <input
                class="filter-bar__country"
                type="text"
                placeholder="Country"
                prop:value=move || country.get().unwrap_or_default()
                on:change=on_country
            />
            <input
                class="filter-bar__city"
                type="text"
                placeholder="City"
                prop:value=move || city.get().unwrap_or_default()
                on:change=on_city
            />
            <select
                class="filter-bar__type"
                on:change=on_type
                prop:value=move || property_type.get().map_or("", PropertyType::code)
            >
                <option value="">"Any type"</option>
                {move || {
                    category
                        .get()
                        .types()
                        .into_iter()
                        .map(|t| view! { <option value=t.code()>{t.code()}</option> })
                        .collect::<Vec<_>>()
                }}
            </select>
            <button class="filter-bar__clear" type="button" on:click=on_clear>"Clear"</button>
        </form>
    })
}
