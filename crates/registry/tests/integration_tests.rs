use buttonbox_registry::model::{
    ButtonConfig, ButtonMode, Color, GaugeConfig, GaugePosition, SpeedUnit, VariableDefinition,
    VariableSource,
};
use buttonbox_registry::presets::{common_gauges, default_gauges, gps_speed_gauge};
use buttonbox_registry::{
    CatalogSource, ConfigStore, FileStore, KeyValueStore, MemoryStore, Registry, RegistryBuilder,
    ResolvedGauge, VariableCatalog,
};
use std::fs;
use tempfile::TempDir;

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// Wider catalog than the bundled one, with a configuration constant
const ENGINE_CATALOG: &str = r#"[
    {"name": "RPMValue", "hash": 1699696209, "source": "output"},
    {"name": "MAPValue", "hash": 1281101952, "source": "output"},
    {"name": "AFRValue", "hash": -1093429509, "source": "output"},
    {"name": "rpmHardLimit", "hash": -1578131917, "source": "config"},
    {"name": "injectorFlow", "hash": -412087523, "source": "config"}
]"#;

fn memory_registry(catalog_json: &str) -> Registry<MemoryStore> {
    RegistryBuilder::new()
        .with_catalog(CatalogSource::Inline(catalog_json.to_string()))
        .build_with_store(MemoryStore::new())
}

#[cfg(test)]
mod settings_tests {
    use super::*;

    #[test]
    fn test_button_count_is_clamped() {
        init_logging();
        let mut registry = memory_registry("[]");

        for (input, expected) in [(0, 1), (1, 1), (9, 9), (16, 16), (17, 16), (-5, 1)] {
            registry.store_mut().set_button_count(input);
            assert_eq!(registry.store().button_count(), expected, "input {input}");
        }
    }

    #[test]
    fn test_data_rate_drives_delay() {
        init_logging();
        let mut registry = memory_registry("[]");
        assert_eq!(registry.store().data_rate_hz(), 20);
        assert_eq!(registry.store().data_delay_ms(), 50);

        for (rate, delay) in [(0, 1000), (3, 333), (60, 16), (500, 16)] {
            registry.store_mut().set_data_rate_hz(rate);
            assert_eq!(registry.store().data_delay_ms(), delay, "rate {rate}");
        }
    }

    #[test]
    fn test_out_of_range_stored_scalars_clamp_on_read() {
        init_logging();
        let mut storage = MemoryStore::new();
        storage.set("button_columns", "9").unwrap();
        storage.set("ecu_id", "\"seven\"").unwrap();
        storage.set("speed_unit", "\"KPH\"").unwrap();

        let registry = RegistryBuilder::new().build_with_store(storage);
        assert_eq!(registry.store().button_columns(), 4);
        assert_eq!(registry.store().ecu_id(), 1);
        assert_eq!(registry.store().speed_unit(), SpeedUnit::Kmh);
    }

    #[test]
    fn test_dashboard_config_tracks_button_count() {
        init_logging();
        let mut registry = memory_registry("[]");
        registry.update_button(10, ButtonConfig::new(10).with_label("Fan"));

        registry.store_mut().set_button_count(4);
        let config = registry.dashboard_config();
        assert_eq!(config.buttons.len(), 4);
        assert!(config.buttons.iter().enumerate().all(|(i, b)| b.id as usize == i));

        // Shrinking the grid keeps labels of hidden buttons
        registry.store_mut().set_button_count(12);
        assert_eq!(registry.dashboard_config().buttons[10].label, "Fan");
    }

    #[test]
    fn test_reset_to_defaults() {
        init_logging();
        let mut registry = memory_registry("[]");
        registry.store_mut().set_speed_unit(SpeedUnit::Ms);
        registry.store_mut().set_show_speedometer(false);
        registry.add_gauge(common_gauges()[5].clone());

        registry.store_mut().reset_to_defaults();

        let config = registry.dashboard_config();
        assert_eq!(config.speed_unit, SpeedUnit::Mph);
        assert!(config.show_speedometer);
        assert_eq!(config.gauges, default_gauges());
        assert!(registry.store().storage().is_empty());
    }
}

#[cfg(test)]
mod button_tests {
    use super::*;

    #[test]
    fn test_set_buttons_round_trips() {
        init_logging();
        let mut registry = memory_registry("[]");
        let buttons = vec![
            ButtonConfig::new(0).with_label("Horn"),
            ButtonConfig::new(1)
                .with_mode(ButtonMode::Toggle)
                .with_colors(Some(Color::from_rgb(0, 0, 0)), Some(Color::from_rgb(0, 255, 0))),
        ];

        registry.store_mut().set_buttons(&buttons);
        assert_eq!(registry.buttons(), buttons);
    }

    #[test]
    fn test_update_button_appends_then_replaces() {
        init_logging();
        let mut registry = memory_registry("[]");
        registry.store_mut().set_buttons(&[ButtonConfig::new(0), ButtonConfig::new(1)]);

        registry.update_button(3, ButtonConfig::new(3).with_label("Pump"));
        let ids: Vec<u8> = registry.buttons().iter().map(|b| b.id).collect();
        assert_eq!(ids, vec![0, 1, 3]);

        registry.update_button(0, ButtonConfig::new(0).with_label("Start"));
        let buttons = registry.buttons();
        assert_eq!(buttons.len(), 3);
        assert_eq!(buttons[0].label, "Start");
        assert_eq!(registry.button_label(3), "Pump");
    }

    #[test]
    fn test_corrupt_buttons_fall_back() {
        init_logging();
        let mut storage = MemoryStore::new();
        storage.set("buttons", "[{\"id\": \"zero\"}]").unwrap();

        let registry = RegistryBuilder::new().build_with_store(storage);
        let buttons = registry.buttons();
        assert_eq!(buttons.len(), 16);
        assert!(buttons.iter().all(|b| b.mode == ButtonMode::Momentary));
        assert_eq!(registry.button_label(15), "16");
    }
}

#[cfg(test)]
mod gauge_tests {
    use super::*;

    #[test]
    fn test_boost_gauge_added_once() {
        init_logging();
        let mut registry = memory_registry(r#"[{"name": "boost", "hash": 1001, "source": "output"}]"#);

        let boost = GaugeConfig::new(1001, "boost", "Boost");
        registry.add_gauge(boost.clone());
        registry.add_gauge(boost.clone());

        let mut expected = default_gauges();
        expected.push(boost);
        assert_eq!(registry.gauges(), expected);
    }

    #[test]
    fn test_remove_missing_gauge_is_noop() {
        init_logging();
        let mut registry = memory_registry("[]");
        let before = registry.gauges();

        assert!(!registry.remove_gauge(123456));
        assert_eq!(registry.gauges(), before);
        assert!(!registry.store().storage().has("gauges").unwrap());
    }

    #[test]
    fn test_corrupt_gauges_fall_back() {
        init_logging();
        let mut storage = MemoryStore::new();
        storage.set("gauges", "not json at all").unwrap();

        let registry = RegistryBuilder::new().build_with_store(storage);
        let gauges = registry.gauges();
        assert_eq!(gauges, vec![gps_speed_gauge(), common_gauges()[0].clone()]);
    }

    #[test]
    fn test_persisted_gauge_payload_shape() {
        init_logging();
        let mut registry = memory_registry("[]");
        registry.store_mut().set_gauges(&[gps_speed_gauge()]);

        let raw = registry.store().storage().get("gauges").unwrap().unwrap();
        let value: serde_json::Value = serde_json::from_str(&raw).unwrap();
        assert_eq!(value[0]["variableHash"], 0);
        assert_eq!(value[0]["isGpsSpeed"], true);
        assert_eq!(value[0]["position"], "TOP");
        assert_eq!(value[0]["displayType"], "GAUGE");
    }

    #[test]
    fn test_search_then_add() {
        init_logging();
        let mut registry = memory_registry(ENGINE_CATALOG);

        let hits = registry.search_variables("rpm");
        assert!(hits.iter().any(|var| var.name == "RPMValue"));
        assert!(hits.iter().all(|var| var.source == VariableSource::Output));

        let gauge = registry
            .add_variable_gauge("rpmvalue", GaugePosition::Secondary)
            .unwrap();
        assert_eq!(gauge.variable_hash, 1699696209);
        match registry.resolve_gauge(&gauge) {
            Some(ResolvedGauge::Variable(var)) => assert_eq!(var.name, "RPMValue"),
            other => panic!("unexpected resolution {other:?}"),
        }
        assert!(registry.unresolved_gauges().is_empty());
    }

    #[test]
    fn test_config_variables_are_not_searchable() {
        init_logging();
        let registry = memory_registry(ENGINE_CATALOG);

        assert!(registry.search_variables("injectorFlow").is_empty());
        let variable = registry.find_variable("injectorflow").unwrap();
        assert_eq!(variable.source, VariableSource::Config);
    }

    #[test]
    fn test_bundled_catalog_backs_common_gauges() {
        init_logging();
        let registry = RegistryBuilder::new().build_with_store(MemoryStore::new());

        let bundled: Vec<i32> = registry.output_variables().iter().map(|var| var.hash).collect();
        let common: Vec<i32> = common_gauges().iter().map(|gauge| gauge.variable_hash).collect();
        assert_eq!(bundled, common);
        assert!(common_gauges().iter().all(|gauge| registry.resolve_gauge(gauge).is_some()));
    }

    #[test]
    fn test_unbounded_gauge_keeps_other_gauges() {
        init_logging();
        let mut registry = memory_registry(r#"[{"name": "boost", "hash": 1001, "source": "output"}]"#);

        registry.add_gauge(GaugeConfig::new(1001, "boost", "Boost"));
        registry.add_gauge(GaugeConfig::new(7, "egt", "EGT").with_range(0.0, f32::INFINITY));

        let gauges = registry.gauges();
        assert!(gauges.iter().any(|gauge| gauge.variable_hash == 1001));
        assert!(gauges.iter().all(|gauge| gauge.max_value.is_finite()));
        assert_eq!(gauges.len(), default_gauges().len() + 2);
    }
}

#[cfg(test)]
mod persistence_tests {
    use super::*;

    #[test]
    fn test_settings_survive_restart() {
        init_logging();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dashboard_settings.json");

        {
            let mut registry = RegistryBuilder::new().with_settings_file(&path).build().unwrap();
            registry.store_mut().set_speed_unit(SpeedUnit::Kmh);
            registry.store_mut().set_ecu_id(7);
            registry.update_button(2, ButtonConfig::new(2).with_label("Wipers"));
            registry.add_gps_speed_gauge();
            registry.add_gauge(common_gauges()[1].clone());
        }

        let registry = RegistryBuilder::new().with_settings_file(&path).build().unwrap();
        assert_eq!(registry.store().speed_unit(), SpeedUnit::Kmh);
        assert_eq!(registry.store().ecu_id(), 7);
        assert_eq!(registry.button_label(2), "Wipers");
        assert_eq!(registry.gauges().len(), 3);
    }

    #[test]
    fn test_corrupt_settings_file_opens_empty() {
        init_logging();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("dashboard_settings.json");
        fs::write(&path, "{ truncated").unwrap();

        let mut registry = RegistryBuilder::new().with_settings_file(&path).build().unwrap();
        let config = registry.dashboard_config();
        assert_eq!(config.button_count, 16);
        assert_eq!(config.button_columns, 4);
        assert_eq!(config.gauges, default_gauges());

        registry.store_mut().set_button_columns(3);
        let reopened = FileStore::open(&path).unwrap();
        assert_eq!(ConfigStore::new(reopened).button_columns(), 3);
    }

    #[test]
    fn test_catalog_file_source() {
        init_logging();
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("variables.json");
        let variables = vec![
            VariableDefinition::new("oilPressure", 42, VariableSource::Output),
            VariableDefinition::new("idleTarget", 43, VariableSource::Config),
        ];
        fs::write(&path, serde_json::to_string(&variables).unwrap()).unwrap();

        let registry = RegistryBuilder::new()
            .with_catalog_file(&path)
            .preload_catalog(true)
            .build_with_store(MemoryStore::new());
        assert!(registry.catalog().is_loaded());
        assert_eq!(registry.output_variables().len(), 1);
        assert_eq!(registry.find_variable("OILPRESSURE"), Some(&variables[0]));
    }

    #[test]
    fn test_registry_over_explicit_parts() {
        init_logging();
        let registry = Registry::new(
            VariableCatalog::from_definitions(vec![VariableDefinition::new(
                "boost",
                1001,
                VariableSource::Output,
            )]),
            ConfigStore::new(MemoryStore::new()),
        );
        assert_eq!(registry.search_variables("").len(), 1);
    }
}
