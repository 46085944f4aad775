use cabinetkit_core::ConfigError;
use cabinetkit_settings::CabinetProjectConfig;

#[test]
fn test_unparseable_lengths_become_defaults() {
    let mut config: CabinetProjectConfig = toml::from_str(
        r#"
        wall_length = "about four metres"

        [materials]
        door_thickness = "19mm"

        [bottom]
        sink_enabled = true
        sink_width = "wide"
        drawer_widths = [600, "x", 450]
        "#,
    )
    .expect("parse toml");

    let issues = config.sanitize();

    assert_eq!(config.wall_length.value(), 3600.0);
    assert_eq!(config.materials.door_thickness.value(), 19.0);
    assert_eq!(config.bottom.sink_width.value(), 800.0);
    assert_eq!(config.bottom.drawer_widths.values(), vec![600.0, 450.0]);
    assert_eq!(issues.len(), 3);
    assert!(issues.iter().all(|i| matches!(i, ConfigError::InvalidValue { .. })));
}

#[test]
fn test_sanitize_is_idempotent() {
    let mut config: CabinetProjectConfig =
        serde_json::from_str(r#"{"top": {"height": "n/a"}, "max_repair_attempts": 0}"#)
            .expect("parse json");

    assert_eq!(config.sanitize().len(), 2);
    assert!(config.sanitize().is_empty());
    assert_eq!(config.max_repair_attempts, 1);
}
