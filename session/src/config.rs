//! Session store tuning knobs.

use std::time::Duration;

/// `localStorage` key the serialized identity lives under.
pub const DEFAULT_STORAGE_KEY: &str = "auth_user";
/// Simulated round-trip for `login` / `register`.
pub const DEFAULT_LATENCY_MS: u64 = 1000;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Durable slot holding the JSON identity.
    pub storage_key: String,
    /// Suspension applied before `login` and `register` resolve.
    pub latency: Duration,
}

impl SessionConfig {
    #[must_use]
    pub fn with_storage_key(mut self, key: impl Into<String>) -> Self {
        self.storage_key = key.into();
        self
    }

    #[must_use]
    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            storage_key: DEFAULT_STORAGE_KEY.to_owned(),
            latency: Duration::from_millis(DEFAULT_LATENCY_MS),
        }
    }
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
