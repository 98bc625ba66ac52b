//! Firmware variable catalog
//!
//! Loaded lazily from its source on first use and cached afterwards. An empty
//! or failed load is not cached, so the next query retries.

use buttonbox_shared::VariableDefinition;
use std::cell::OnceCell;
use std::fs;
use std::path::PathBuf;
use thiserror::Error;

/// Catalog shipped with the crate
const BUNDLED_CATALOG: &str = include_str!("../assets/variables.json");

/// Where the variable definitions come from
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogSource {
    /// `assets/variables.json`, compiled in
    Bundled,
    /// A JSON file on disk
    File(PathBuf),
    /// JSON text held in memory
    Inline(String),
}

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("Failed to read variable catalog {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Variable catalog parse error: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read-only index of the ECU variables
#[derive(Debug)]
pub struct VariableCatalog {
    source: CatalogSource,
    variables: OnceCell<Vec<VariableDefinition>>,
}

impl VariableCatalog {
    pub fn new(source: CatalogSource) -> Self {
        Self {
            source,
            variables: OnceCell::new(),
        }
    }

    /// Catalog over the bundled definitions
    pub fn bundled() -> Self {
        Self::new(CatalogSource::Bundled)
    }

    /// Catalog over definitions already in memory
    pub fn from_definitions(variables: Vec<VariableDefinition>) -> Self {
        let catalog = Self::new(CatalogSource::Inline("[]".to_string()));
        if !variables.is_empty() {
            catalog.variables.get_or_init(|| variables);
        }
        catalog
    }

    pub fn source(&self) -> &CatalogSource {
        &self.source
    }

    pub fn is_loaded(&self) -> bool {
        self.variables.get().is_some()
    }

    /// Read and parse the source, bypassing the cache
    pub fn try_load(&self) -> Result<Vec<VariableDefinition>, CatalogError> {
        let variables = match &self.source {
            CatalogSource::Bundled => serde_json::from_str(BUNDLED_CATALOG)?,
            CatalogSource::Inline(json) => serde_json::from_str(json)?,
            CatalogSource::File(path) => {
                let content = fs::read_to_string(path).map_err(|source| CatalogError::Io {
                    path: path.clone(),
                    source,
                })?;
                serde_json::from_str(&content)?
            }
        };
        Ok(variables)
    }

    /// All definitions. Empty when the source cannot be read.
    pub fn load(&self) -> &[VariableDefinition] {
        if let Some(variables) = self.variables.get() {
            return variables;
        }

        match self.try_load() {
            Ok(variables) if !variables.is_empty() => {
                let outputs = variables.iter().filter(|var| var.is_output()).count();
                log::info!("Loaded {} variables, {} outputs", variables.len(), outputs);
                self.variables.get_or_init(|| variables).as_slice()
            }
            Ok(_) => {
                log::warn!("Variable catalog {:?} is empty", self.source);
                &[]
            }
            Err(e) => {
                log::error!("{}", e);
                &[]
            }
        }
    }

    /// Variables that can back a gauge
    pub fn output_variables(&self) -> Vec<&VariableDefinition> {
        self.load().iter().filter(|var| var.is_output()).collect()
    }

    pub fn find_by_hash(&self, hash: i32) -> Option<&VariableDefinition> {
        self.load().iter().find(|var| var.hash == hash)
    }

    /// Case-insensitive exact name match
    pub fn find_by_name(&self, name: &str) -> Option<&VariableDefinition> {
        let name = name.to_lowercase();
        self.load().iter().find(|var| var.name.to_lowercase() == name)
    }

    /// Output variables whose name contains `query`, ignoring case.
    /// An empty query returns every output variable.
    pub fn search(&self, query: &str) -> Vec<&VariableDefinition> {
        if query.is_empty() {
            return self.output_variables();
        }

        let query = query.to_lowercase();
        self.load()
            .iter()
            .filter(|var| var.is_output() && var.name.to_lowercase().contains(&query))
            .collect()
    }
}

impl Default for VariableCatalog {
    fn default() -> Self {
        Self::bundled()
    }
}
