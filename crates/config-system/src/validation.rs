//! Setting bounds and normalization
//!
//! Out-of-range input is clamped, never rejected. Structural problems in
//! gauges and button lists are reported as warnings for the store to log.

use buttonbox_shared::{ButtonConfig, GaugeConfig, MAX_BUTTONS};
use std::collections::HashSet;

pub const MIN_BUTTON_COUNT: u8 = 1;
pub const MAX_BUTTON_COUNT: u8 = MAX_BUTTONS;
pub const MIN_BUTTON_COLUMNS: u8 = 2;
pub const MAX_BUTTON_COLUMNS: u8 = 4;
pub const MIN_ECU_ID: u8 = 0;
pub const MAX_ECU_ID: u8 = 255;
pub const MIN_DATA_RATE_HZ: u32 = 1;
pub const MAX_DATA_RATE_HZ: u32 = 60;

pub fn clamp_button_count(count: i64) -> u8 {
    count.clamp(MIN_BUTTON_COUNT.into(), MAX_BUTTON_COUNT.into()) as u8
}

pub fn clamp_button_columns(columns: i64) -> u8 {
    columns.clamp(MIN_BUTTON_COLUMNS.into(), MAX_BUTTON_COLUMNS.into()) as u8
}

pub fn clamp_ecu_id(id: i64) -> u8 {
    id.clamp(MIN_ECU_ID.into(), MAX_ECU_ID.into()) as u8
}

pub fn clamp_data_rate_hz(rate: i64) -> u32 {
    rate.clamp(MIN_DATA_RATE_HZ.into(), MAX_DATA_RATE_HZ.into()) as u32
}

/// Delay between telemetry requests for a polling rate
pub fn data_delay_ms(rate_hz: u32) -> u64 {
    1000 / u64::from(rate_hz.max(MIN_DATA_RATE_HZ))
}

/// Configuration validator
pub struct ConfigValidator;

impl ConfigValidator {
    /// Problems with a gauge that are worth logging but not rejecting
    pub fn validate_gauge(gauge: &GaugeConfig) -> Vec<String> {
        let mut warnings = Vec::new();

        if !gauge.has_valid_range() {
            warnings.push(format!(
                "Gauge '{}' has min_value {} not below max_value {}",
                gauge.label, gauge.min_value, gauge.max_value
            ));
        }

        let in_range = |value: f32| value >= gauge.min_value && value <= gauge.max_value;
        if let Some(warning) = gauge.warning_threshold {
            if !in_range(warning) {
                warnings.push(format!(
                    "Gauge '{}' warning threshold {} is outside its range",
                    gauge.label, warning
                ));
            }
        }
        if let Some(critical) = gauge.critical_threshold {
            if !in_range(critical) {
                warnings.push(format!(
                    "Gauge '{}' critical threshold {} is outside its range",
                    gauge.label, critical
                ));
            }
        }

        if let (Some(warning), Some(critical)) = (gauge.warning_threshold, gauge.critical_threshold) {
            if warning > critical {
                warnings.push(format!(
                    "Gauge '{}' warning threshold {} is above critical threshold {}",
                    gauge.label, warning, critical
                ));
            }
        }

        warnings
    }

    /// Drop buttons with an out-of-range id and repeated ids. First entry wins.
    pub fn normalize_buttons(buttons: Vec<ButtonConfig>) -> Vec<ButtonConfig> {
        let mut seen = HashSet::new();
        buttons
            .into_iter()
            .filter(|button| {
                if button.id >= MAX_BUTTONS {
                    log::warn!("Dropping button with out-of-range id {}", button.id);
                    return false;
                }
                if !seen.insert(button.id) {
                    log::warn!("Dropping duplicate button id {}", button.id);
                    return false;
                }
                true
            })
            .collect()
    }

    /// Replace non-finite range bounds with the defaults and drop non-finite
    /// thresholds. JSON has no encoding for NaN or infinity.
    pub fn sanitize_gauge(mut gauge: GaugeConfig) -> GaugeConfig {
        let defaults = GaugeConfig::new(gauge.variable_hash, "", "");

        if !gauge.min_value.is_finite() || !gauge.max_value.is_finite() {
            log::warn!(
                "Gauge '{}' has a non-finite range {}..{}, using {}..{}",
                gauge.label, gauge.min_value, gauge.max_value, defaults.min_value, defaults.max_value
            );
            gauge.min_value = defaults.min_value;
            gauge.max_value = defaults.max_value;
        }

        for threshold in [&mut gauge.warning_threshold, &mut gauge.critical_threshold] {
            if threshold.is_some_and(|value| !value.is_finite()) {
                log::warn!("Gauge '{}' has a non-finite threshold, clearing it", gauge.label);
                *threshold = None;
            }
        }

        gauge
    }

    /// Drop gauges whose variable hash is already present and sanitize the
    /// rest. First entry wins.
    pub fn normalize_gauges(gauges: Vec<GaugeConfig>) -> Vec<GaugeConfig> {
        let mut seen = HashSet::new();
        gauges
            .into_iter()
            .filter(|gauge| {
                let fresh = seen.insert(gauge.variable_hash);
                if !fresh {
                    log::warn!("Dropping duplicate gauge for hash {}", gauge.variable_hash);
                }
                fresh
            })
            .map(Self::sanitize_gauge)
            .collect()
    }
}
