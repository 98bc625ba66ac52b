// Dashboard snapshot handed to the renderers.
// Assembled from the individual persisted settings, never stored as a whole.

use serde::{Deserialize, Serialize};

use crate::{ButtonConfig, GaugeConfig, MAX_BUTTONS};

/// Unit the GPS speed gauge is shown in
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "UPPERCASE")]
pub enum SpeedUnit {
    #[default]
    Mph,
    #[serde(alias = "KPH")]
    Kmh,
    Ms,
}

impl SpeedUnit {
    pub const ALL: [SpeedUnit; 3] = [SpeedUnit::Mph, SpeedUnit::Kmh, SpeedUnit::Ms];

    /// Persisted name, also used as the GPS gauge unit
    pub fn name(self) -> &'static str {
        match self {
            SpeedUnit::Mph => "MPH",
            SpeedUnit::Kmh => "KMH",
            SpeedUnit::Ms => "MS",
        }
    }

    /// Short label for pickers
    pub fn label(self) -> &'static str {
        match self {
            SpeedUnit::Mph => "MPH",
            SpeedUnit::Kmh => "KMH",
            SpeedUnit::Ms => "M/S",
        }
    }

    /// Factor applied to a GPS speed in m/s
    pub fn multiplier(self) -> f64 {
        match self {
            SpeedUnit::Mph => 2.23694,
            SpeedUnit::Kmh => 3.6,
            SpeedUnit::Ms => 1.0,
        }
    }

    pub fn from_meters_per_second(self, speed: f64) -> f64 {
        speed * self.multiplier()
    }

    /// Lenient parse of a persisted name
    pub fn from_name(name: &str) -> Option<Self> {
        match name.trim().to_ascii_uppercase().as_str() {
            "MPH" => Some(SpeedUnit::Mph),
            "KMH" | "KPH" => Some(SpeedUnit::Kmh),
            "MS" | "M/S" => Some(SpeedUnit::Ms),
            _ => None,
        }
    }
}

impl std::fmt::Display for SpeedUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// Complete dashboard layout
///
/// `buttons.len()` always equals `button_count`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct DashboardConfig {
    pub button_count: u8,
    pub button_columns: u8,
    pub buttons: Vec<ButtonConfig>,
    pub gauges: Vec<GaugeConfig>,
    pub show_speedometer: bool,
    pub speed_unit: SpeedUnit,
}

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            button_count: MAX_BUTTONS,
            button_columns: 4,
            buttons: (0..MAX_BUTTONS).map(ButtonConfig::new).collect(),
            gauges: Vec::new(),
            show_speedometer: true,
            speed_unit: SpeedUnit::Mph,
        }
    }
}

impl DashboardConfig {
    /// Gauges placed in the given row, in configured order
    pub fn gauges_at(&self, position: crate::GaugePosition) -> impl Iterator<Item = &GaugeConfig> {
        self.gauges.iter().filter(move |gauge| gauge.position == position)
    }
}
