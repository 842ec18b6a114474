//! Counter cards for the contributor dashboard.

#[cfg(test)]
#[path = "stats_cards_test.rs"]
mod stats_cards_test;

use leptos::prelude::*;
use session::Identity;

/// Group digits in threes with commas, e.g. `2450` -> `"2,450"`.
pub fn format_count(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[component]
pub fn StatsCards(identity: Identity) -> impl IntoView {
    let cards = [
        ("Carbon Credits", format_count(identity.credits)),
        ("Tokens", format_count(identity.tokens)),
        ("Level", identity.level.to_string()),
        ("Badges", identity.badges.len().to_string()),
    ];

    view! {
        <div class="stats-cards">
            {cards
                .into_iter()
                .map(|(label, value)| {
                    view! {
                        <div class="stats-card">
                            <span class="stats-card__label">{label}</span>
                            <span class="stats-card__value">{value}</span>
                        </div>
                    }
                })
                .collect::<Vec<_>>()}
        </div>
    }
}
