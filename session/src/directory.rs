//! Fixed table of known identities.
//!
//! `login` resolves an email against this table instead of calling a real
//! identity provider. Passwords are never stored or compared here.

use crate::identity::{Badge, BadgeRarity, Identity, Role};

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Directory {
    entries: Vec<Identity>,
}

impl Directory {
    #[must_use]
    pub fn new(entries: Vec<Identity>) -> Self {
        Self { entries }
    }

    /// The two demo accounts offered on the login form.
    #[must_use]
    pub fn demo() -> Self {
        Self::new(vec![community_leader(), registry_admin()])
    }

    /// Exact, case-sensitive email match. First entry wins on duplicates.
    #[must_use]
    pub fn find_by_email(&self, email: &str) -> Option<&Identity> {
        self.entries.iter().find(|identity| identity.email == email)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Identity> {
        self.entries.iter()
    }
}

pub const DEMO_COMMUNITY_EMAIL: &str = "community@blucarbon.org";
pub const DEMO_ADMIN_EMAIL: &str = "admin@nccr.gov.in";

fn community_leader() -> Identity {
    Identity {
        id: "1".to_owned(),
        email: DEMO_COMMUNITY_EMAIL.to_owned(),
        name: "Community Leader".to_owned(),
        role: Role::Community,
        organization: Some("Village Green Initiative".to_owned()),
        location: Some("Sundarbans, West Bengal".to_owned()),
        avatar: None,
        credits: 2450,
        tokens: 1200,
        level: 7,
        badges: vec![
            Badge {
                id: "1".to_owned(),
                name: "First Plantation".to_owned(),
                icon: "🌱".to_owned(),
                description: "Completed your first mangrove plantation".to_owned(),
                earned_at: "2024-01-15".to_owned(),
                rarity: BadgeRarity::Common,
            },
            Badge {
                id: "2".to_owned(),
                name: "Verified Expert".to_owned(),
                icon: "✅".to_owned(),
                description: "Had 10 plantations verified successfully".to_owned(),
                earned_at: "2024-08-20".to_owned(),
                rarity: BadgeRarity::Rare,
            },
        ],
        joined_at: "2024-01-01".to_owned(),
    }
}

fn registry_admin() -> Identity {
    Identity {
        id: "2".to_owned(),
        email: DEMO_ADMIN_EMAIL.to_owned(),
        name: "Dr. Priya Sharma".to_owned(),
        role: Role::Admin,
        organization: Some("National Centre for Carbon Registry".to_owned()),
        location: Some("New Delhi".to_owned()),
        avatar: None,
        credits: 0,
        tokens: 0,
        level: 1,
        badges: Vec::new(),
        joined_at: "2023-06-01".to_owned(),
    }
}

#[cfg(test)]
#[path = "directory_test.rs"]
mod tests;
