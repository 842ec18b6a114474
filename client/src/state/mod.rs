//! Shared client-side state modules.
//!
//! DESIGN
//! ======
//! The authoritative session lives in `session::SessionStore`; this module
//! holds the reactive view of it that components subscribe to.

pub mod auth;
