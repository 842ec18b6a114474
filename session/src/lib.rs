//! Session store for the Blue Carbon Registry client.
//!
//! This crate owns the identity model rendered by the `client` UI, plus the
//! [`SessionStore`] that decides who is logged in. It has no browser or
//! network dependencies. Durable storage, simulated remote latency, and
//! wall-clock time enter through traits so the browser adapter and the
//! tests can supply their own.
//!
//! ARCHITECTURE
//! ============
//! - [`identity`]: `Identity`, `Badge`, `Role` and the partial update record.
//! - [`directory`]: the fixed table of known identities `login` resolves against.
//! - [`storage`]: the durable key-value seam and an in-memory implementation.
//! - [`runtime`]: delay and clock seams.
//! - [`store`]: the session state machine itself.

pub mod config;
pub mod directory;
pub mod identity;
pub mod runtime;
pub mod storage;
pub mod store;

pub use config::SessionConfig;
pub use directory::Directory;
pub use identity::{Badge, BadgeRarity, Identity, IdentityPatch, Role};
pub use runtime::{Clock, Delay, NoDelay, SystemClock};
pub use storage::{MemoryStorage, Storage, StorageError};
pub use store::{Session, SessionError, SessionStore};
