//! Root application component with routing and context providers.

use std::sync::Arc;

use access::NavigationEpoch;
use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    ParamSegment, StaticSegment,
    components::{ParentRoute, Redirect, Route, Router, Routes},
};

use crate::layouts::{AccountLayout, AdminLayout, AgentLayout, LocaleLayout, UserLayout};
use crate::net::api::HttpRoleSource;
use crate::pages::{
    account::AccountPage,
    admin::AdminDashboardPage,
    agent::AgentListingsPage,
    home::HomePage,
    user::{BookingsPage, FavoritesPage},
};
use crate::state::provider::{AppStoreProvider, CategoryStoreProvider};
use crate::util::guard::SessionSource;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="en">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root application component.
///
/// Provides the session source, navigation epoch, and both market stores,
/// then sets up locale-prefixed routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    provide_context(SessionSource(Arc::new(HttpRoleSource::default())));
    provide_context(NavigationEpoch::new());

    view! {
        <Stylesheet id="leptos" href="/pkg/habitat.css"/>
        <Title text="Habitat"/>

        <AppStoreProvider>
            <CategoryStoreProvider>
                <Router>
                    <Routes fallback=|| "Page not found.".into_view()>
                        <Route path=StaticSegment("") view=|| view! { <Redirect path="/en"/> }/>
                        <ParentRoute path=ParamSegment("locale") view=LocaleLayout>
                            <Route path=StaticSegment("") view=HomePage/>
                            <ParentRoute path=StaticSegment("account") view=AccountLayout>
                                <Route path=StaticSegment("") view=AccountPage/>
                            </ParentRoute>
                            <ParentRoute path=StaticSegment("user") view=UserLayout>
                                <Route path=StaticSegment("favorites") view=FavoritesPage/>
                                <Route path=StaticSegment("bookings") view=BookingsPage/>
                                <ParentRoute path=StaticSegment("agent") view=AgentLayout>
                                    <Route path=StaticSegment("listings") view=AgentListingsPage/>
                                </ParentRoute>
                            </ParentRoute>
                            <ParentRoute path=StaticSegment("admin") view=AdminLayout>
                                <Route path=StaticSegment("") view=AdminDashboardPage/>
                            </ParentRoute>
                        </ParentRoute>
                    </Routes>
                </Router>
            </CategoryStoreProvider>
        </AppStoreProvider>
    }
}
