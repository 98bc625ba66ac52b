//! Factory presets for the dashboard
//!
//! These are the values a fresh install starts with and the values the store
//! falls back to when persisted state is missing or unreadable.

pub mod button_presets;
pub mod gauge_presets;

pub use button_presets::*;
pub use gauge_presets::*;
