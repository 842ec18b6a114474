//! Delay and clock seams.
//!
//! The simulated remote call in `login`/`register` is a [`Delay`] so the
//! browser can back it with a real timer while tests resolve it immediately.
//! Identity ids and join dates come from a [`Clock`].

use std::time::Duration;

use time::OffsetDateTime;

/// Suspends the caller for a fixed amount of time.
///
/// Futures are `?Send`: browser timers are tied to the JS event loop.
#[async_trait::async_trait(?Send)]
pub trait Delay: Send + Sync {
    async fn wait(&self, duration: Duration);
}

/// Resolves immediately regardless of the requested duration.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoDelay;

#[async_trait::async_trait(?Send)]
impl Delay for NoDelay {
    async fn wait(&self, _duration: Duration) {}
}

/// Source of the current UTC time.
pub trait Clock: Send + Sync {
    fn now(&self) -> OffsetDateTime;
}

/// Wall clock. Uses `Date.now()` when compiled to wasm.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> OffsetDateTime {
        OffsetDateTime::now_utc()
    }
}
