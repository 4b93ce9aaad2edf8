//! Admin dashboard (behind `AdminLayout`).

use leptos::prelude::*;

#[component]
pub fn AdminDashboardPage() -> impl IntoView {
    view! {
        <section class="admin-page">
            <h1>"Dashboard"</h1>
            <p>"Moderation queue, agents awaiting verification, and reports."</p>
        </section>
    }
}
