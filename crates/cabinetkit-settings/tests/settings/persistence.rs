use cabinetkit_settings::{
    CabinetProjectConfig, CornerPosition, DoorSystem, Length, LengthList, SettingsError,
    SidePanelMode,
};
use tempfile::TempDir;

#[test]
fn test_toml_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("kitchen.toml");

    let mut config = CabinetProjectConfig::default();
    config.door_system = DoorSystem::Gola;
    config.corner_position = CornerPosition::Left;
    config.tall.enabled = true;
    config.tall.side_panel_mode = SidePanelMode::Right100mm;
    config.bottom.door_sequence = LengthList::from_mm(&[500.0, 400.0]);

    config.save_to_file(&path).expect("save toml");
    let loaded = CabinetProjectConfig::load_from_file(&path).expect("load toml");

    assert_eq!(loaded, config);
}

#[test]
fn test_json_round_trip() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("kitchen.json");

    let mut config = CabinetProjectConfig::default();
    config.top.hood_enabled = true;
    config.top.corner_blind_width = Some(Length::mm(400.0));

    config.save_to_file(&path).expect("save json");
    let loaded = CabinetProjectConfig::load_from_file(&path).expect("load json");

    assert_eq!(loaded.top.corner_blind_width, Some(Length::mm(400.0)));
    assert!(loaded.top.hood_enabled);
}

#[test]
fn test_unsupported_extension() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("kitchen.yaml");
    std::fs::write(&path, "wall_length: 3000").expect("write yaml");

    let err = CabinetProjectConfig::load_from_file(&path).expect_err("yaml is not supported");
    assert!(matches!(err, SettingsError::Config(_)));

    let err = CabinetProjectConfig::default()
        .save_to_file(&path)
        .expect_err("yaml is not supported");
    assert!(matches!(err, SettingsError::Config(_)));
}

#[test]
fn test_missing_file() {
    let dir = TempDir::new().expect("temp dir");
    let err = CabinetProjectConfig::load_from_file(&dir.path().join("absent.toml"))
        .expect_err("file does not exist");
    assert!(matches!(err, SettingsError::LoadError(_)));
}

#[test]
fn test_partial_file_uses_section_defaults() {
    let dir = TempDir::new().expect("temp dir");
    let path = dir.path().join("partial.toml");
    std::fs::write(
        &path,
        "wall_length = \"3000mm\"\ndoor_system = \"gola\"\n\n[top]\nbox_widths = \"600,600,600\"\n",
    )
    .expect("write toml");

    let mut config = CabinetProjectConfig::load_from_file(&path).expect("load toml");
    assert!(config.sanitize().is_empty());

    assert_eq!(config.wall_length.value(), 3000.0);
    assert_eq!(config.door_system, DoorSystem::Gola);
    assert_eq!(config.top.box_widths.values(), vec![600.0, 600.0, 600.0]);
    assert_eq!(config.top.height.value(), 720.0);
    assert_eq!(config.bottom.drawer_count, 2);
}
