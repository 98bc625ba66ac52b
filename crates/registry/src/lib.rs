//! Variable & configuration registry for the button box dashboard
//!
//! Joins the firmware [`VariableCatalog`] with the persisted dashboard
//! settings in a [`ConfigStore`]. Build one with [`RegistryBuilder`]:
//!
//! ```no_run
//! use buttonbox_registry::RegistryBuilder;
//!
//! let mut registry = RegistryBuilder::new()
//!     .with_settings_file("dashboard_settings.json")
//!     .build()?;
//!
//! for variable in registry.search_variables("boost") {
//!     println!("{} ({})", variable.name, variable.hash);
//! }
//! registry.add_gps_speed_gauge();
//! # Ok::<(), buttonbox_registry::RegistryError>(())
//! ```

use thiserror::Error;

pub mod builder;
pub mod catalog;
pub mod registry;

pub use builder::{RegistryBuilder, DEFAULT_SETTINGS_FILE};
pub use catalog::{CatalogError, CatalogSource, VariableCatalog};
pub use registry::{Registry, ResolvedGauge, MAX_GAUGE_LABEL_CHARS};

pub use buttonbox_config::{presets, ConfigStore};
pub use buttonbox_shared as model;
pub use buttonbox_storage::{FileStore, KeyValueStore, MemoryStore, StorageError};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Settings storage error: {0}")]
    Storage(#[from] StorageError),
}

pub type Result<T> = std::result::Result<T, RegistryError>;
