use std::path::PathBuf;

use buttonbox_config::ConfigStore;
use buttonbox_storage::{FileStore, KeyValueStore};

use crate::catalog::{CatalogSource, VariableCatalog};
use crate::registry::Registry;
use crate::Result;

/// Settings file used when none is given
pub const DEFAULT_SETTINGS_FILE: &str = "dashboard_settings.json";

/// Builder for a [`Registry`]
#[derive(Debug, Clone)]
pub struct RegistryBuilder {
    catalog_source: CatalogSource,
    settings_path: PathBuf,
    preload_catalog: bool,
}

impl RegistryBuilder {
    pub fn new() -> Self {
        Self {
            catalog_source: CatalogSource::Bundled,
            settings_path: PathBuf::from(DEFAULT_SETTINGS_FILE),
            preload_catalog: false,
        }
    }

    pub fn with_catalog(mut self, source: CatalogSource) -> Self {
        self.catalog_source = source;
        self
    }

    pub fn with_catalog_file(self, path: impl Into<PathBuf>) -> Self {
        self.with_catalog(CatalogSource::File(path.into()))
    }

    pub fn with_settings_file(mut self, path: impl Into<PathBuf>) -> Self {
        self.settings_path = path.into();
        self
    }

    /// Load the catalog during `build` instead of on the first query
    pub fn preload_catalog(mut self, preload: bool) -> Self {
        self.preload_catalog = preload;
        self
    }

    /// Build a registry persisted to the settings file
    pub fn build(self) -> Result<Registry<FileStore>> {
        let storage = FileStore::open(&self.settings_path)?;
        log::info!("Using settings file {}", self.settings_path.display());
        Ok(self.build_with_store(storage))
    }

    /// Build a registry over any key-value store
    pub fn build_with_store<S: KeyValueStore>(self, storage: S) -> Registry<S> {
        let catalog = VariableCatalog::new(self.catalog_source);
        if self.preload_catalog {
            catalog.load();
        }
        Registry::new(catalog, ConfigStore::new(storage))
    }
}

impl Default for RegistryBuilder {
    fn default() -> Self {
        Self::new()
    }
}
