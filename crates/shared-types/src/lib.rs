//! Shared types for the button box dashboard
//!
//! This crate contains the configuration model shared between the storage,
//! config-system and registry crates. Every platform binding serializes the
//! same schema, so the field set cannot drift between them.

use serde::{Deserialize, Serialize};

pub mod button_config;
pub mod dashboard;
pub mod gauge_config;

pub use button_config::{ButtonConfig, ButtonMode, Color, MAX_BUTTONS};
pub use dashboard::{DashboardConfig, SpeedUnit};
pub use gauge_config::{
    DisplayType, GaugeConfig, GaugePosition, GaugeSeverity, GaugeSource, SyntheticGauge,
    GPS_SPEED_HASH,
};

/// Where a telemetry variable lives on the ECU
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum VariableSource {
    /// Live output channel, can back a gauge
    Output,
    /// Configuration constant; anything that is not "output" lands here
    #[serde(other)]
    Config,
}

/// One entry of the firmware variable catalog
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct VariableDefinition {
    pub name: String,
    pub hash: i32,
    pub source: VariableSource,
}

impl VariableDefinition {
    pub fn new(name: impl Into<String>, hash: i32, source: VariableSource) -> Self {
        Self {
            name: name.into(),
            hash,
            source,
        }
    }

    pub fn is_output(&self) -> bool {
        self.source == VariableSource::Output
    }
}
