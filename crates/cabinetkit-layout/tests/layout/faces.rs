use cabinetkit_core::{approx_eq, FaceKind, NotchKind, RowKind, Subsystem};
use cabinetkit_layout::{
    build_parts, drawer_stack, leaves, CabinetConfig, CabinetKind, CabinetParts, DoorSystem,
    DoorSystemParams, PanelIds,
};

fn base_unit(width: f64) -> CabinetConfig {
    CabinetConfig::new(CabinetKind::Base, RowKind::Lower, width, 770.0, 560.0)
}

fn parts(config: &CabinetConfig) -> CabinetParts {
    build_parts(config, &mut PanelIds::new(Subsystem::Bottom, 1)).expect("cabinet parts")
}

fn gola() -> DoorSystemParams {
    DoorSystemParams::new(DoorSystem::Gola, 3.0, 20.0)
}

#[test]
fn test_double_door_threshold() {
    let narrow = parts(&base_unit(599.0));
    let wide = parts(&base_unit(600.0));
    assert_eq!(narrow.faces.len(), 1);
    assert_eq!(narrow.faces[0].panel.name, "Door");
    assert_eq!(wide.faces.len(), 2);
    assert_eq!(wide.faces[0].panel.name, "Left Door");
    assert_eq!(wide.faces[1].panel.name, "Right Door");
}

#[test]
fn test_leaves_keep_reveals() {
    let pair = leaves(800.0, 3.0, 3.0, true);
    assert_eq!(pair[0].x, 3.0);
    assert!(approx_eq(pair[0].width, 395.5));
    assert!(approx_eq(pair[1].x + pair[1].width, 797.0));
    assert!(approx_eq(pair[1].x - (pair[0].x + pair[0].width), 3.0));
}

#[test]
fn test_three_drawer_stack_fills_opening() {
    let (bands, split) = drawer_stack(3, 1.0, 770.0, 10.0, 1.5, 3.0);
    assert_eq!(bands.len(), 3);
    assert_eq!(split, 385.5);

    let fronts: f64 = bands.iter().map(|b| b.height).sum();
    // edge band below, top gap above, split gaps and the three-drawer gap between
    assert!(approx_eq(fronts + 1.0 + 10.0 + 3.0 + 3.0, 770.0));
    for pair in bands.windows(2) {
        assert!(pair[0].z + pair[0].height < pair[1].z);
    }
}

#[test]
fn test_drawer_unit_fronts_named_bottom_up() {
    let mut config = base_unit(600.0);
    config.drawer_count = 3;
    let names: Vec<String> = parts(&config)
        .faces
        .iter()
        .filter(|f| f.kind == FaceKind::Drawer)
        .map(|f| f.panel.name.clone())
        .collect();
    assert_eq!(
        names,
        vec!["Bottom Drawer Front", "Middle Drawer Front", "Top Drawer Front"]
    );
}

#[test]
fn test_gola_drawer_unit_notches() {
    let mut config = base_unit(600.0);
    config.drawer_count = 2;
    config.door_system = gola();
    let built = parts(&config);

    let l = built.notches.iter().filter(|n| n.kind == NotchKind::GolaL).count();
    let c: Vec<_> = built
        .notches
        .iter()
        .filter(|n| n.kind == NotchKind::GolaC)
        .collect();
    assert_eq!(l, 2);
    assert_eq!(c.len(), 2);
    // centred on the split line
    assert!(approx_eq(c[0].origin.z + c[0].depth / 2.0, 385.5));
}

#[test]
fn test_gola_lowers_upper_carcass_not_doors() {
    let mut config = CabinetConfig::new(CabinetKind::Wall, RowKind::Upper, 500.0, 720.0, 350.0);
    config.door_system = gola();
    let built = build_parts(&config, &mut PanelIds::new(Subsystem::Top, 1)).expect("wall unit");

    let side = built
        .panels
        .iter()
        .find(|p| p.name == "Left Side")
        .expect("side");
    assert_eq!(side.origin.z, 20.0);
    assert_eq!(side.height, 700.0);

    let door = &built.faces[0].panel;
    assert_eq!(door.origin.z, 0.0);
    assert_eq!(door.height, 720.0);
}

#[test]
fn test_handled_has_no_notches() {
    let mut config = base_unit(600.0);
    config.drawer_count = 2;
    assert!(parts(&config).notches.is_empty());
}
