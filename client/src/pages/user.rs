//! Pages for signed-in users (behind `UserLayout`).

use leptos::prelude::*;

#[component]
pub fn FavoritesPage() -> impl IntoView {
    view! {
        <section class="favorites-page">
            <h1>"Favorites"</h1>
            <p>"Listings you saved appear here."</p>
        </section>
    }
}

#[component]
pub fn BookingsPage() -> impl IntoView {
    view! {
        <section class="bookings-page">
            <h1>"Bookings"</h1>
            <p>"Your upcoming visits and reservations."</p>
        </section>
    }
}
