//! Dashboard registry demonstration

use buttonbox_registry::model::{ButtonConfig, ButtonMode, GaugePosition, SpeedUnit};
use buttonbox_registry::{RegistryBuilder, ResolvedGauge};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Initialize logging
    env_logger::init();

    println!("Button Box Registry Demo\n");

    let settings = std::env::temp_dir().join("buttonbox_demo_settings.json");
    let mut registry = RegistryBuilder::new()
        .with_settings_file(&settings)
        .preload_catalog(true)
        .build()?;

    println!("Settings file: {}", settings.display());
    println!("Output variables: {}", registry.output_variables().len());
    println!();

    // Search like the gauge picker does
    println!("Search 'boost':");
    for variable in registry.search_variables("boost") {
        println!("  {} ({})", variable.name, variable.hash);
    }
    println!();

    registry.store_mut().set_speed_unit(SpeedUnit::Kmh);
    registry.store_mut().set_data_rate_hz(30);
    registry.add_gps_speed_gauge();
    registry.add_variable_gauge("boostboostOutput", GaugePosition::Secondary);
    registry.update_button(
        0,
        ButtonConfig::new(0).with_label("Fuel Pump").with_mode(ButtonMode::Toggle),
    );

    let config = registry.dashboard_config();
    println!("Dashboard:");
    println!("  Buttons: {} in {} columns", config.button_count, config.button_columns);
    println!("  Speed unit: {}", config.speed_unit.label());
    println!("  Data delay: {} ms", registry.store().data_delay_ms());
    println!("  First button: {}", registry.button_label(0));
    println!();

    println!("Gauges:");
    for gauge in &config.gauges {
        let source = match registry.resolve_gauge(gauge) {
            Some(ResolvedGauge::GpsSpeed) => "gps".to_string(),
            Some(ResolvedGauge::Variable(variable)) => format!("hash {}", variable.hash),
            None => "unresolved".to_string(),
        };
        println!("  {:<12} {:?} [{}]", registry.gauge_display_name(gauge), gauge.position, source);
    }

    registry.store_mut().reset_to_defaults();
    Ok(())
}
