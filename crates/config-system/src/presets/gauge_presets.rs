//! Gauge presets
//!
//! The GPS speed gauge plus the common ECU gauges offered for quick setup.

use buttonbox_shared::{DisplayType, GaugeConfig, GaugePosition, GPS_SPEED_HASH};

/// GPS speed pseudo-gauge, fed by the phone rather than the ECU
pub fn gps_speed_gauge() -> GaugeConfig {
    let mut gauge = GaugeConfig::new(GPS_SPEED_HASH, "gpsSpeed", "GPS Speed")
        .with_unit("MPH")
        .with_range(0.0, 200.0)
        .with_position(GaugePosition::Top);
    gauge.is_gps_speed = true;
    gauge
}

/// Common dashboard variables with their firmware hashes, in display order
pub fn common_gauges() -> Vec<GaugeConfig> {
    vec![
        // Air/fuel ratio
        GaugeConfig::new(-1093429509, "AFRValue", "AFR")
            .with_range(10.0, 20.0)
            .with_thresholds(Some(14.7), Some(16.0))
            .with_position(GaugePosition::Top),
        GaugeConfig::new(-2066867294, "baroPressure", "Baro")
            .with_unit("kPa")
            .with_range(80.0, 110.0)
            .with_display_type(DisplayType::Number),
        GaugeConfig::new(309572379, "ambientTemp", "Ambient")
            .with_unit("°C")
            .with_range(-20.0, 50.0)
            .with_display_type(DisplayType::Number),
        GaugeConfig::new(-1777838088, "baseDwell", "Dwell")
            .with_unit("ms")
            .with_range(0.0, 10.0)
            .with_display_type(DisplayType::Number),
        // Ignition timing
        GaugeConfig::new(493641747, "baseIgnitionAdvance", "Timing")
            .with_unit("°")
            .with_range(-10.0, 50.0),
        GaugeConfig::new(459143268, "boostboostOutput", "Boost")
            .with_unit("%")
            .with_thresholds(Some(80.0), Some(95.0)),
    ]
}

/// GPS speed plus the first common gauge
pub fn default_gauges() -> Vec<GaugeConfig> {
    let mut gauges = vec![gps_speed_gauge()];
    gauges.extend(common_gauges().into_iter().take(1));
    gauges
}
