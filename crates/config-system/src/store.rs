//! Persistent dashboard configuration
//!
//! Every setting is its own key in a [`KeyValueStore`]. Reads never fail:
//! a missing or unreadable value is replaced by its factory default. Writes
//! clamp into bounds first and storage failures are logged and absorbed.

use crate::presets::{default_buttons, default_gauges};
use crate::validation::{
    clamp_button_columns, clamp_button_count, clamp_data_rate_hz, clamp_ecu_id, data_delay_ms,
    ConfigValidator,
};
use buttonbox_shared::{ButtonConfig, DashboardConfig, GaugeConfig, SpeedUnit, MAX_BUTTONS};
use buttonbox_storage::KeyValueStore;
use serde::de::DeserializeOwned;
use serde::Serialize;

/// Storage keys owned by the configuration store
pub mod keys {
    pub const BUTTON_COUNT: &str = "button_count";
    pub const BUTTON_COLUMNS: &str = "button_columns";
    pub const SPEED_UNIT: &str = "speed_unit";
    pub const GAUGES: &str = "gauges";
    pub const BUTTONS: &str = "buttons";
    pub const ECU_ID: &str = "ecu_id";
    pub const SHOW_SPEEDOMETER: &str = "show_speedometer";
    pub const DATA_RATE: &str = "data_rate";

    pub const ALL: [&str; 8] = [
        BUTTON_COUNT,
        BUTTON_COLUMNS,
        SPEED_UNIT,
        GAUGES,
        BUTTONS,
        ECU_ID,
        SHOW_SPEEDOMETER,
        DATA_RATE,
    ];
}

pub const DEFAULT_BUTTON_COUNT: u8 = MAX_BUTTONS;
pub const DEFAULT_BUTTON_COLUMNS: u8 = 4;
pub const DEFAULT_ECU_ID: u8 = 1;
pub const DEFAULT_DATA_RATE_HZ: u32 = 20;
pub const DEFAULT_SHOW_SPEEDOMETER: bool = true;

/// Dashboard settings on top of a key-value namespace
pub struct ConfigStore<S: KeyValueStore> {
    storage: S,
}

impl<S: KeyValueStore> ConfigStore<S> {
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_inner(self) -> S {
        self.storage
    }

    /// Decode `key`, or produce the default when it is missing or unreadable
    fn read_or<T: DeserializeOwned>(&self, key: &str, default: impl FnOnce() -> T) -> T {
        match self.storage.get_json::<T>(key) {
            Ok(Some(value)) => value,
            Ok(None) => default(),
            Err(e) => {
                log::warn!("Stored '{}' is unreadable, using default: {}", key, e);
                default()
            }
        }
    }

    /// Encode and store `value`. Failures are logged; returns whether the
    /// value was persisted.
    fn write<T: Serialize + ?Sized>(&mut self, key: &str, value: &T) -> bool {
        match self.storage.set_json(key, value) {
            Ok(()) => true,
            Err(e) => {
                log::error!("Failed to persist '{}': {}", key, e);
                false
            }
        }
    }

    // Scalar settings

    pub fn button_count(&self) -> u8 {
        clamp_button_count(self.read_or(keys::BUTTON_COUNT, || DEFAULT_BUTTON_COUNT.into()))
    }

    pub fn set_button_count(&mut self, count: i64) {
        self.write(keys::BUTTON_COUNT, &clamp_button_count(count));
    }

    pub fn button_columns(&self) -> u8 {
        clamp_button_columns(self.read_or(keys::BUTTON_COLUMNS, || DEFAULT_BUTTON_COLUMNS.into()))
    }

    pub fn set_button_columns(&mut self, columns: i64) {
        self.write(keys::BUTTON_COLUMNS, &clamp_button_columns(columns));
    }

    pub fn speed_unit(&self) -> SpeedUnit {
        let name: String = self.read_or(keys::SPEED_UNIT, || SpeedUnit::default().name().to_string());
        SpeedUnit::from_name(&name).unwrap_or_else(|| {
            log::warn!("Unknown speed unit '{}', using default", name);
            SpeedUnit::default()
        })
    }

    pub fn set_speed_unit(&mut self, unit: SpeedUnit) {
        self.write(keys::SPEED_UNIT, unit.name());
    }

    pub fn ecu_id(&self) -> u8 {
        clamp_ecu_id(self.read_or(keys::ECU_ID, || DEFAULT_ECU_ID.into()))
    }

    pub fn set_ecu_id(&mut self, id: i64) {
        self.write(keys::ECU_ID, &clamp_ecu_id(id));
    }

    pub fn show_speedometer(&self) -> bool {
        self.read_or(keys::SHOW_SPEEDOMETER, || DEFAULT_SHOW_SPEEDOMETER)
    }

    pub fn set_show_speedometer(&mut self, show: bool) {
        self.write(keys::SHOW_SPEEDOMETER, &show);
    }

    /// Telemetry polling rate in Hz
    pub fn data_rate_hz(&self) -> u32 {
        clamp_data_rate_hz(self.read_or(keys::DATA_RATE, || DEFAULT_DATA_RATE_HZ.into()))
    }

    pub fn set_data_rate_hz(&mut self, rate: i64) {
        self.write(keys::DATA_RATE, &clamp_data_rate_hz(rate));
    }

    /// Delay between telemetry requests, derived from the polling rate
    pub fn data_delay_ms(&self) -> u64 {
        data_delay_ms(self.data_rate_hz())
    }

    // Buttons

    /// Persisted buttons, or 16 default slots when missing or unreadable
    pub fn buttons(&self) -> Vec<ButtonConfig> {
        ConfigValidator::normalize_buttons(self.read_or(keys::BUTTONS, default_buttons))
    }

    /// Overwrite the whole button list
    pub fn set_buttons(&mut self, buttons: &[ButtonConfig]) {
        let buttons = ConfigValidator::normalize_buttons(buttons.to_vec());
        self.write(keys::BUTTONS, &buttons);
    }

    /// Replace the button with this id in place, or append it
    pub fn update_button(&mut self, id: u8, mut config: ButtonConfig) {
        if id >= MAX_BUTTONS {
            log::warn!("Ignoring update for out-of-range button id {}", id);
            return;
        }
        config.id = id;

        let mut buttons = self.buttons();
        match buttons.iter_mut().find(|button| button.id == id) {
            Some(existing) => *existing = config,
            None => buttons.push(config),
        }
        self.write(keys::BUTTONS, &buttons);
    }

    /// The button with this id, or a default one
    pub fn button(&self, id: u8) -> ButtonConfig {
        self.buttons()
            .into_iter()
            .find(|button| button.id == id)
            .unwrap_or_else(|| ButtonConfig::new(id))
    }

    // Gauges

    /// Persisted gauges, or GPS speed plus the first common gauge when
    /// missing or unreadable
    pub fn gauges(&self) -> Vec<GaugeConfig> {
        ConfigValidator::normalize_gauges(self.read_or(keys::GAUGES, default_gauges))
    }

    /// Overwrite the whole gauge list
    pub fn set_gauges(&mut self, gauges: &[GaugeConfig]) {
        let gauges = ConfigValidator::normalize_gauges(gauges.to_vec());
        self.write(keys::GAUGES, &gauges);
    }

    /// Add a gauge unless one with the same variable hash exists.
    /// Returns whether the gauge was added and persisted.
    pub fn add_gauge(&mut self, gauge: GaugeConfig) -> bool {
        let mut gauges = self.gauges();
        if gauges.iter().any(|existing| existing.variable_hash == gauge.variable_hash) {
            log::debug!("Gauge for hash {} already present", gauge.variable_hash);
            return false;
        }

        let gauge = ConfigValidator::sanitize_gauge(gauge);
        for warning in ConfigValidator::validate_gauge(&gauge) {
            log::warn!("{}", warning);
        }

        gauges.push(gauge);
        self.write(keys::GAUGES, &gauges)
    }

    /// Remove every gauge with this variable hash. Returns whether any was
    /// removed and the change persisted.
    pub fn remove_gauge(&mut self, variable_hash: i32) -> bool {
        let mut gauges = self.gauges();
        let before = gauges.len();
        gauges.retain(|gauge| gauge.variable_hash != variable_hash);

        if gauges.len() == before {
            return false;
        }
        self.write(keys::GAUGES, &gauges)
    }

    /// Snapshot of the whole dashboard. Reads only.
    pub fn dashboard_config(&self) -> DashboardConfig {
        let button_count = self.button_count();
        let stored = self.buttons();
        let buttons = (0..button_count)
            .map(|id| {
                stored
                    .iter()
                    .find(|button| button.id == id)
                    .cloned()
                    .unwrap_or_else(|| ButtonConfig::new(id))
            })
            .collect();

        DashboardConfig {
            button_count,
            button_columns: self.button_columns(),
            buttons,
            gauges: self.gauges(),
            show_speedometer: self.show_speedometer(),
            speed_unit: self.speed_unit(),
        }
    }

    /// Forget every stored setting
    pub fn reset_to_defaults(&mut self) {
        for key in keys::ALL {
            if let Err(e) = self.storage.remove(key) {
                log::error!("Failed to remove '{}': {}", key, e);
            }
        }
        log::info!("Dashboard settings reset to defaults");
    }
}
