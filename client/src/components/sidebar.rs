//! Dashboard sidebar: role navigation, identity summary, and logout.

use leptos::prelude::*;
use leptos_router::NavigateOptions;
use leptos_router::hooks::{use_location, use_navigate};
use session::{Identity, SessionStore};

use crate::components::stats_cards::format_count;
use crate::util::auth::AUTH_PATH;
use crate::util::nav::{is_active, nav_items};

#[component]
pub fn Sidebar(identity: Identity) -> impl IntoView {
    let store = expect_context::<SessionStore>();
    let navigate = use_navigate();
    let pathname = use_location().pathname;

    let on_logout = move |_| {
        store.logout();
        navigate(AUTH_PATH, NavigateOptions::default());
    };

    let links = nav_items(identity.role)
        .iter()
        .map(|item| {
            let item = *item;
            let class = move || {
                if is_active(&item, &pathname.get()) {
                    "sidebar__link sidebar__link--active"
                } else {
                    "sidebar__link"
                }
            };
            view! { <a class=class href=item.href>{item.label}</a> }
        })
        .collect::<Vec<_>>();

    let subtitle = if identity.role.is_admin() {
        identity.role.label().to_owned()
    } else {
        format!("{} • Level {}", identity.role.label(), identity.level)
    };

    let counters = (!identity.role.is_admin()).then(|| {
        view! {
            <div class="sidebar__counters">
                <span class="sidebar__counter">"Credits " <strong>{format_count(identity.credits)}</strong></span>
                <span class="sidebar__counter">"Tokens " <strong>{format_count(identity.tokens)}</strong></span>
            </div>
        }
    });

    view! {
        <aside class="sidebar">
            <div class="sidebar__brand">"Blue Carbon Registry"</div>
            <div class="sidebar__identity">
                <span class="sidebar__avatar">{identity.initial()}</span>
                <div class="sidebar__who">
                    <p class="sidebar__name">{identity.name.clone()}</p>
                    <p class="sidebar__role">{subtitle}</p>
                </div>
                {counters}
            </div>
            <nav class="sidebar__nav">{links}</nav>
            <button class="btn sidebar__logout" on:click=on_logout>"Sign Out"</button>
        </aside>
    }
}
