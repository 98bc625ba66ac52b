//! Gauge configuration and how a gauge maps onto its data source

use serde::{Deserialize, Serialize};

/// Hash stored for the GPS speed gauge, which has no catalog entry
pub const GPS_SPEED_HASH: i32 = 0;

/// How a gauge is drawn
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum DisplayType {
    /// Circular gauge
    #[default]
    Gauge,
    /// Horizontal bar
    Bar,
    /// Large number display
    Number,
    /// On/off indicator light
    Indicator,
}

/// Dashboard row a gauge is placed in
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum GaugePosition {
    /// Top row, larger
    Top,
    /// Secondary row, smaller
    #[default]
    Secondary,
}

/// Gauges fed by the phone rather than the ECU
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SyntheticGauge {
    GpsSpeed,
}

/// Tagged view of what backs a gauge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GaugeSource {
    Catalog { hash: i32 },
    Synthetic(SyntheticGauge),
}

/// Threshold classification of a live value
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum GaugeSeverity {
    Normal,
    Warning,
    Critical,
}

fn default_max_value() -> f32 {
    100.0
}

/// A user-configured dashboard gauge
///
/// `variable_hash` is the uniqueness key within a dashboard. `variable_name`
/// is a denormalized copy of the catalog name so the gauge can still be
/// labelled when the catalog is unavailable. `min_value < max_value` is
/// expected but not enforced.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct GaugeConfig {
    pub variable_hash: i32,
    #[serde(default)]
    pub variable_name: String,
    #[serde(default)]
    pub label: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub min_value: f32,
    #[serde(default = "default_max_value")]
    pub max_value: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub warning_threshold: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub critical_threshold: Option<f32>,
    #[serde(default)]
    pub display_type: DisplayType,
    #[serde(default)]
    pub position: GaugePosition,
    #[serde(default)]
    pub is_gps_speed: bool,
}

impl GaugeConfig {
    /// Gauge bound to a catalog variable, with default range 0..100
    pub fn new(variable_hash: i32, variable_name: impl Into<String>, label: impl Into<String>) -> Self {
        Self {
            variable_hash,
            variable_name: variable_name.into(),
            label: label.into(),
            unit: String::new(),
            min_value: 0.0,
            max_value: default_max_value(),
            warning_threshold: None,
            critical_threshold: None,
            display_type: DisplayType::Gauge,
            position: GaugePosition::Secondary,
            is_gps_speed: false,
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_range(mut self, min_value: f32, max_value: f32) -> Self {
        self.min_value = min_value;
        self.max_value = max_value;
        self
    }

    pub fn with_thresholds(mut self, warning: Option<f32>, critical: Option<f32>) -> Self {
        self.warning_threshold = warning;
        self.critical_threshold = critical;
        self
    }

    pub fn with_display_type(mut self, display_type: DisplayType) -> Self {
        self.display_type = display_type;
        self
    }

    pub fn with_position(mut self, position: GaugePosition) -> Self {
        self.position = position;
        self
    }

    /// What feeds this gauge. Decided by the GPS flag, never by the hash value.
    pub fn source(&self) -> GaugeSource {
        if self.is_gps_speed {
            GaugeSource::Synthetic(SyntheticGauge::GpsSpeed)
        } else {
            GaugeSource::Catalog {
                hash: self.variable_hash,
            }
        }
    }

    pub fn has_valid_range(&self) -> bool {
        self.min_value < self.max_value
    }

    /// Classify a live value against the configured thresholds
    pub fn severity(&self, value: f32) -> GaugeSeverity {
        if self.critical_threshold.is_some_and(|critical| value >= critical) {
            GaugeSeverity::Critical
        } else if self.warning_threshold.is_some_and(|warning| value >= warning) {
            GaugeSeverity::Warning
        } else {
            GaugeSeverity::Normal
        }
    }

    /// Position of `value` within the range, clamped to `[0, 1]`
    pub fn fraction(&self, value: f32) -> f32 {
        if !self.has_valid_range() {
            return 0.0;
        }
        ((value - self.min_value) / (self.max_value - self.min_value)).clamp(0.0, 1.0)
    }
}
