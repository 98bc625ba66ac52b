use buttonbox_config::presets::gps_speed_gauge;
use buttonbox_config::ConfigStore;
use buttonbox_shared::{
    ButtonConfig, DashboardConfig, DisplayType, GaugeConfig, GaugePosition, GaugeSource,
    SyntheticGauge, VariableDefinition,
};
use buttonbox_storage::KeyValueStore;

use crate::catalog::VariableCatalog;

/// Longest label given to a gauge added from search
pub const MAX_GAUGE_LABEL_CHARS: usize = 12;

/// What a gauge resolves to for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolvedGauge<'a> {
    GpsSpeed,
    Variable(&'a VariableDefinition),
}

/// Variable & configuration registry used by the dashboard screens
///
/// Owns the catalog and the configuration store. Screens hold a reference
/// to one registry instead of reaching for global state.
pub struct Registry<S: KeyValueStore> {
    catalog: VariableCatalog,
    store: ConfigStore<S>,
}

impl<S: KeyValueStore> Registry<S> {
    pub fn new(catalog: VariableCatalog, store: ConfigStore<S>) -> Self {
        Self { catalog, store }
    }

    pub fn catalog(&self) -> &VariableCatalog {
        &self.catalog
    }

    /// Scalar settings (button grid, speed unit, ECU id, data rate)
    pub fn store(&self) -> &ConfigStore<S> {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut ConfigStore<S> {
        &mut self.store
    }

    // Variables

    pub fn search_variables(&self, query: &str) -> Vec<&VariableDefinition> {
        self.catalog.search(query)
    }

    pub fn output_variables(&self) -> Vec<&VariableDefinition> {
        self.catalog.output_variables()
    }

    pub fn find_variable(&self, name: &str) -> Option<&VariableDefinition> {
        self.catalog.find_by_name(name)
    }

    // Gauges

    pub fn gauges(&self) -> Vec<GaugeConfig> {
        self.store.gauges()
    }

    /// Add a gauge. Duplicates by variable hash are ignored.
    pub fn add_gauge(&mut self, gauge: GaugeConfig) -> bool {
        self.store.add_gauge(gauge)
    }

    /// Add a number gauge for a catalog variable picked from search.
    ///
    /// Returns the gauge stored for that variable, which is the existing one
    /// when the variable already has a gauge. `None` when no variable has that
    /// name or the gauge could not be saved.
    pub fn add_variable_gauge(&mut self, name: &str, position: GaugePosition) -> Option<GaugeConfig> {
        let variable = self.catalog.find_by_name(name)?;
        let hash = variable.hash;
        let label: String = variable.name.chars().take(MAX_GAUGE_LABEL_CHARS).collect();
        let gauge = GaugeConfig::new(hash, variable.name.clone(), label)
            .with_display_type(DisplayType::Number)
            .with_position(position);

        if self.store.add_gauge(gauge) {
            log::info!("Added gauge for hash {}", hash);
        }
        self.store
            .gauges()
            .into_iter()
            .find(|stored| stored.variable_hash == hash)
    }

    /// Add the GPS speed gauge in the current speed unit.
    /// Returns the stored GPS gauge, `None` when it could not be saved.
    pub fn add_gps_speed_gauge(&mut self) -> Option<GaugeConfig> {
        let gauge = gps_speed_gauge().with_unit(self.store.speed_unit().name());
        self.store.add_gauge(gauge);
        self.store.gauges().into_iter().find(|stored| stored.is_gps_speed)
    }

    pub fn remove_gauge(&mut self, variable_hash: i32) -> bool {
        self.store.remove_gauge(variable_hash)
    }

    /// Join a gauge against the catalog. `None` when its variable is unknown.
    pub fn resolve_gauge(&self, gauge: &GaugeConfig) -> Option<ResolvedGauge<'_>> {
        match gauge.source() {
            GaugeSource::Synthetic(SyntheticGauge::GpsSpeed) => Some(ResolvedGauge::GpsSpeed),
            GaugeSource::Catalog { hash } => self.catalog.find_by_hash(hash).map(ResolvedGauge::Variable),
        }
    }

    /// Name to show for a gauge: its label, else the catalog name, else the
    /// name stored with the gauge
    pub fn gauge_display_name(&self, gauge: &GaugeConfig) -> String {
        if !gauge.label.is_empty() {
            return gauge.label.clone();
        }
        match self.resolve_gauge(gauge) {
            Some(ResolvedGauge::Variable(variable)) => variable.name.clone(),
            Some(ResolvedGauge::GpsSpeed) => gps_speed_gauge().label,
            None => gauge.variable_name.clone(),
        }
    }

    /// Configured gauges whose variable is missing from the catalog
    pub fn unresolved_gauges(&self) -> Vec<GaugeConfig> {
        self.gauges()
            .into_iter()
            .filter(|gauge| self.resolve_gauge(gauge).is_none())
            .collect()
    }

    // Buttons

    pub fn buttons(&self) -> Vec<ButtonConfig> {
        self.store.buttons()
    }

    pub fn button(&self, id: u8) -> ButtonConfig {
        self.store.button(id)
    }

    pub fn update_button(&mut self, id: u8, config: ButtonConfig) {
        self.store.update_button(id, config);
    }

    /// Text for a button slot, falling back to its 1-based number
    pub fn button_label(&self, id: u8) -> String {
        self.store.button(id).display_label()
    }

    pub fn dashboard_config(&self) -> DashboardConfig {
        self.store.dashboard_config()
    }
}
