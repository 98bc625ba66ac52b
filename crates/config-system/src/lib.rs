//! Configuration system for the button box dashboard
//! Persists button and gauge layout plus connection settings, with factory
//! presets as the fallback for anything missing or unreadable.

pub mod presets;
pub mod store;
pub mod validation;

pub use store::{keys, ConfigStore};
pub use validation::ConfigValidator;

pub use buttonbox_shared as model;
