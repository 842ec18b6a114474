//! Root application component with routing and context providers.

use std::sync::Arc;

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};
use leptos_router::{
    StaticSegment,
    components::{Route, Router, Routes},
};
use session::{SessionStore, SystemClock};

use crate::pages::{auth::AuthPage, dashboard::DashboardPage, index::IndexPage};
use crate::state::auth::AuthState;
use crate::util::browser::{BrowserStorage, TimerDelay};

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
/// Owns the single [`SessionStore`] and its reactive mirror, provides both
/// through context, and sets up client-side routing.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let store = SessionStore::new(Arc::new(BrowserStorage), Arc::new(TimerDelay), Arc::new(SystemClock));
    let auth = RwSignal::new(AuthState::default());
    store.subscribe(move |session| auth.update(|state| state.sync(session)));

    // Effects only run in the browser, after hydration, so the server render
    // and the first client render agree on a signed-out shell.
    Effect::new({
        let store = store.clone();
        move || {
            store.restore();
            auth.update(|state| state.restored = true);
        }
    });

    provide_context(store);
    provide_context(auth);

    view! {
        <Stylesheet id="leptos" href="/pkg/bluecarbon.css"/>
        <Title text="Blue Carbon Registry"/>

        <Router>
            <Routes fallback=|| "Page not found.".into_view()>
                <Route path=StaticSegment("") view=IndexPage/>
                <Route path=StaticSegment("dashboard") view=DashboardPage/>
                <Route path=StaticSegment("auth") view=AuthPage/>
            </Routes>
        </Router>
    }
}
