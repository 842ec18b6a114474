//! Reusable UI component modules.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components render dashboard chrome from an `Identity` handed down by the
//! page, or read the session from Leptos context when they need to act on it.

pub mod badge_list;
pub mod sidebar;
pub mod stats_cards;
