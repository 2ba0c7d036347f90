//! Root application component, HTML shell and top-level view selection.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment, WildcardSegment,
    components::{Route, Router, Routes},
    hooks::use_location,
};

use crate::config::ClientConfig;
use crate::net::api::ApiClient;
use crate::net::transport::default_transport;
use crate::pages::{home::MainPage, profile::ProfilePage};
use crate::state::auth::{AuthContext, AuthController};
use crate::state::session::BrowserSessionStore;
use crate::util::view_route::{ViewSelector, select_view};

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
/// Builds the API client and session store, starts auth resolution, and
/// renders whichever top-level view the load-time path selects.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = ClientConfig::from_build_env();
    let api = ApiClient::from_config(&config, default_transport());
    let auth = AuthContext::new(AuthController::new(api, Arc::new(BrowserSessionStore)));
    auth.start();

    view! {
        <Stylesheet id="leptos" href="/pkg/devset.css"/>
        <Title text="Devset - Tech Career Guidance"/>

        <Router>
            <Routes fallback=move || view! { <ViewSwitch auth=auth/> }>
                <Route path=StaticSegment("") view=move || view! { <ViewSwitch auth=auth/> }/>
                <Route path=WildcardSegment("any") view=move || view! { <ViewSwitch auth=auth/> }/>
            </Routes>
        </Router>
    }
}

/// Picks the view once from the path seen at load; later in-page URL changes
/// do not switch views.
#[component]
fn ViewSwitch(auth: AuthContext) -> impl IntoView {
    let path = use_location().pathname.get_untracked();
    match select_view(&path) {
        ViewSelector::ProfileCallback => view! { <ProfilePage auth=auth/> }.into_any(),
        ViewSelector::Main => view! { <MainPage auth=auth/> }.into_any(),
    }
}
