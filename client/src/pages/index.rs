//! Public landing page. Signed-in visitors are sent on to the dashboard.

#[cfg(test)]
#[path = "index_test.rs"]
mod index_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;

use crate::state::auth::AuthState;
use crate::util::auth::{AUTH_PATH, install_auth_redirect};

/// Headline figures shown under the hero.
pub(crate) const HIGHLIGHTS: [(&str, &str); 4] = [
    ("2.5M+", "Trees Planted"),
    ("15,000", "Hectares Restored"),
    ("500+", "Communities"),
    ("45.2K", "Credits Issued"),
];

pub(crate) const FEATURES: [(&str, &str); 3] = [
    (
        "AI Fraud Detection",
        "Anomaly detection screens plantation submissions before credits are issued.",
    ),
    ("Satellite Monitoring", "NDVI analysis tracks vegetation health across restoration sites."),
    ("Transparent Ledger", "Every credit issuance is recorded and auditable."),
];

#[component]
pub fn IndexPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_auth_redirect(auth, use_navigate());

    let highlights = HIGHLIGHTS
        .into_iter()
        .map(|(value, label)| {
            view! {
                <div class="landing__stat">
                    <span class="landing__stat-value">{value}</span>
                    <span class="landing__stat-label">{label}</span>
                </div>
            }
        })
        .collect::<Vec<_>>();

    let features = FEATURES
        .into_iter()
        .map(|(title, body)| {
            view! {
                <article class="landing__feature">
                    <h3>{title}</h3>
                    <p>{body}</p>
                </article>
            }
        })
        .collect::<Vec<_>>();

    view! {
        <div class="landing">
            <header class="landing__header">
                <span class="landing__brand">"Blue Carbon Registry"</span>
                <a class="btn btn--primary" href=AUTH_PATH>"Get Started"</a>
            </header>
            <section class="landing__hero">
                <h1>"Protecting Our Blue Planet"</h1>
                <p class="landing__lede">
                    "Track, verify, and account for mangrove restoration credits with complete transparency."
                </p>
                <a class="btn btn--primary" href=AUTH_PATH>"Start Contributing"</a>
            </section>
            <section class="landing__stats">{highlights}</section>
            <section class="landing__features">{features}</section>
            <footer class="landing__footer">"National Centre for Carbon Registry"</footer>
        </div>
    }
}
