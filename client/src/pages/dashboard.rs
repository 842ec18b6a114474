//! Dashboard page: picks the admin or contributor view from the session role.

#[cfg(test)]
#[path = "dashboard_test.rs"]
mod dashboard_test;

use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use session::{Identity, Role};

use crate::components::badge_list::BadgeList;
use crate::components::sidebar::Sidebar;
use crate::components::stats_cards::StatsCards;
use crate::state::auth::AuthState;
use crate::util::auth::install_unauth_redirect;

pub const DASHBOARD_PATH: &str = "/dashboard";

/// Which dashboard branch a role renders.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DashboardView {
    Admin,
    Community,
}

impl DashboardView {
    /// `admin` gets the registry console; community, NGO and panchayat users
    /// share the contributor view.
    #[must_use]
    pub fn for_role(role: Role) -> Self {
        if role.is_admin() { Self::Admin } else { Self::Community }
    }
}

/// Dashboard page. Redirects to `/auth` if the user is not authenticated.
#[component]
pub fn DashboardPage() -> impl IntoView {
    let auth = expect_context::<RwSignal<AuthState>>();
    install_unauth_redirect(auth, use_navigate());

    view! {
        <div class="dashboard-page">
            {move || match auth.with(|state| state.identity.clone()) {
                Some(identity) => dashboard_for(identity).into_any(),
                None => view! { <p class="dashboard-page__loading">"Loading session..."</p> }.into_any(),
            }}
        </div>
    }
}

fn dashboard_for(identity: Identity) -> impl IntoView {
    let body = match DashboardView::for_role(identity.role) {
        DashboardView::Admin => view! { <AdminDashboard identity=identity.clone()/> }.into_any(),
        DashboardView::Community => view! { <CommunityDashboard identity=identity.clone()/> }.into_any(),
    };

    view! {
        <Sidebar identity=identity/>
        <main class="dashboard-page__main">{body}</main>
    }
}

#[component]
fn CommunityDashboard(identity: Identity) -> impl IntoView {
    let location = identity.location.clone().unwrap_or_default();
    let badges = identity.badges.clone();
    let welcome = format!("Welcome back, {}", identity.name);

    view! {
        <header class="dashboard-page__header">
            <h1>{welcome}</h1>
            <p class="dashboard-page__subtitle">{location}</p>
        </header>
        <StatsCards identity=identity/>
        <section class="dashboard-page__section">
            <h2>"Achievements"</h2>
            <BadgeList badges=badges/>
        </section>
    }
}

#[component]
fn AdminDashboard(identity: Identity) -> impl IntoView {
    let organization = identity.organization.unwrap_or_else(|| "Registry".to_owned());
    let location = identity.location.unwrap_or_default();

    view! {
        <header class="dashboard-page__header">
            <h1>"Registry Administration"</h1>
            <p class="dashboard-page__subtitle">{format!("{organization} • {location}")}</p>
        </header>
        <section class="dashboard-page__section">
            <h2>{format!("Signed in as {}", identity.name)}</h2>
            <p>"Review plantation submissions, monitor restoration sites, and issue carbon credits."</p>
        </section>
    }
}
