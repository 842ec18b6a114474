//! Identity model persisted in the durable session slot.
//!
//! The JSON shape (camelCase keys, lowercase enum values, optional fields
//! omitted) is what ends up in `localStorage`, so renaming a field here is a
//! storage format change: previously stored sessions would fail to parse and
//! be discarded on the next startup.

use serde::{Deserialize, Serialize};

// =============================================================================
// ROLE
// =============================================================================

/// Principal role. Selects which dashboard and navigation a user sees.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Community,
    Ngo,
    Panchayat,
    Admin,
}

/// Error returned when parsing a [`Role`] from a string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown role: {0}")]
pub struct UnknownRole(pub String);

impl Role {
    /// Every role, in the order the registration form offers them.
    pub const ALL: [Role; 4] = [Role::Community, Role::Ngo, Role::Panchayat, Role::Admin];

    /// Wire value, e.g. `"panchayat"`.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Community => "community",
            Self::Ngo => "ngo",
            Self::Panchayat => "panchayat",
            Self::Admin => "admin",
        }
    }

    /// Human-facing label for selects and profile chips.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Self::Community => "Community",
            Self::Ngo => "NGO",
            Self::Panchayat => "Panchayat",
            Self::Admin => "Administrator",
        }
    }

    #[must_use]
    pub fn is_admin(self) -> bool {
        matches!(self, Self::Admin)
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Role {
    type Err = UnknownRole;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|role| role.as_str() == s)
            .ok_or_else(|| UnknownRole(s.to_owned()))
    }
}

// =============================================================================
// BADGE
// =============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BadgeRarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// An earned achievement. Created once, never edited.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Badge {
    pub id: String,
    pub name: String,
    /// Glyph shown on the badge, usually a single emoji.
    pub icon: String,
    pub description: String,
    pub earned_at: String,
    pub rarity: BadgeRarity,
}

// =============================================================================
// IDENTITY
// =============================================================================

/// The authenticated principal.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Identity {
    pub id: String,
    /// Login key. Matched exactly by the directory.
    pub email: String,
    pub name: String,
    pub role: Role,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub organization: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub avatar: Option<String>,
    /// Carbon credits accrued.
    pub credits: u64,
    /// Gamification tokens accrued.
    pub tokens: u64,
    pub level: u32,
    /// Earned badges, oldest first.
    pub badges: Vec<Badge>,
    /// RFC 3339 (or date-only for seeded accounts); never rewritten.
    pub joined_at: String,
}

impl Identity {
    /// First character of the display name, uppercased, for avatar chips.
    #[must_use]
    pub fn initial(&self) -> String {
        self.name
            .chars()
            .next()
            .map(|c| c.to_uppercase().collect())
            .unwrap_or_default()
    }
}

/// Shallow field-by-field overwrite applied by `SessionStore::update_user`.
///
/// `None` leaves a field alone. The optional profile fields take an inner
/// `Option` so a caller can clear them. `id`, `role` and `joined_at` are not
/// patchable.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct IdentityPatch {
    pub email: Option<String>,
    pub name: Option<String>,
    pub organization: Option<Option<String>>,
    pub location: Option<Option<String>>,
    pub avatar: Option<Option<String>>,
    pub credits: Option<u64>,
    pub tokens: Option<u64>,
    pub level: Option<u32>,
    /// Replaces the whole badge list; there is no per-badge merge.
    pub badges: Option<Vec<Badge>>,
}

impl IdentityPatch {
    /// Overwrite every field this patch carries.
    pub fn apply_to(self, identity: &mut Identity) {
        if let Some(email) = self.email {
            identity.email = email;
        }
        if let Some(name) = self.name {
            identity.name = name;
        }
        if let Some(organization) = self.organization {
            identity.organization = organization;
        }
        if let Some(location) = self.location {
            identity.location = location;
        }
        if let Some(avatar) = self.avatar {
            identity.avatar = avatar;
        }
        if let Some(credits) = self.credits {
            identity.credits = credits;
        }
        if let Some(tokens) = self.tokens {
            identity.tokens = tokens;
        }
        if let Some(level) = self.level {
            identity.level = level;
        }
        if let Some(badges) = self.badges {
            identity.badges = badges;
        }
    }
}

#[cfg(test)]
#[path = "identity_test.rs"]
mod tests;
