//! Earned badges, oldest first.

use leptos::prelude::*;
use session::{Badge, BadgeRarity};

fn rarity_class(rarity: BadgeRarity) -> &'static str {
    match rarity {
        BadgeRarity::Common => "badge-card badge-card--common",
        BadgeRarity::Rare => "badge-card badge-card--rare",
        BadgeRarity::Epic => "badge-card badge-card--epic",
        BadgeRarity::Legendary => "badge-card badge-card--legendary",
    }
}

#[component]
pub fn BadgeList(badges: Vec<Badge>) -> impl IntoView {
    if badges.is_empty() {
        return view! { <p class="badge-list__empty">"No badges earned yet."</p> }.into_any();
    }

    view! {
        <ul class="badge-list">
            {badges
                .into_iter()
                .map(|badge| {
                    view! {
                        <li class=rarity_class(badge.rarity) title=badge.description>
                            <span class="badge-card__icon">{badge.icon}</span>
                            <span class="badge-card__name">{badge.name}</span>
                            <span class="badge-card__date">{badge.earned_at}</span>
                        </li>
                    }
                })
                .collect::<Vec<_>>()}
        </ul>
    }
        .into_any()
}
