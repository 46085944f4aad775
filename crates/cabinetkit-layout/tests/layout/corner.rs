use cabinetkit_core::{approx_eq, FaceKind, GenerationWarning, NotchKind, Subsystem};
use cabinetkit_layout::{CabinetInstance, LayoutEngine, ModuleRole};
use cabinetkit_settings::{CabinetProjectConfig, CornerPosition, Length};

fn corner_kitchen(position: CornerPosition) -> CabinetProjectConfig {
    let mut config = CabinetProjectConfig::default();
    config.corner_position = position;
    config.top.corner_enabled = true;
    config.top.corner_width = Length::mm(900.0);
    config.top.corner_blind_width = Some(Length::mm(393.0));
    config.bottom.corner_enabled = true;
    config.bottom.corner_width = Length::mm(900.0);
    config.bottom.blind_width = Length::mm(393.0);
    config
}

fn corner_of(output: &cabinetkit_layout::ProjectOutput, subsystem: Subsystem) -> CabinetInstance {
    output
        .of(subsystem)
        .find(|c| c.role == ModuleRole::Corner)
        .cloned()
        .expect("corner cabinet")
}

fn doors(cabinet: &CabinetInstance) -> usize {
    cabinet
        .faces
        .iter()
        .filter(|f| f.kind == FaceKind::Door)
        .count()
}

#[test]
fn test_same_corner_splits_only_on_bottom_row() {
    let report = LayoutEngine::new(corner_kitchen(CornerPosition::Right)).generate();
    assert!(report.is_complete());
    assert!(!report
        .warnings
        .iter()
        .any(|w| matches!(w, GenerationWarning::FinalGap { .. })));

    let bottom = corner_of(&report.output, Subsystem::Bottom);
    let top = corner_of(&report.output, Subsystem::Top);
    assert_eq!(bottom.width, 900.0);
    assert_eq!(top.width, 900.0);

    // 507 mm door zone: above the lower threshold, below the upper one
    assert_eq!(doors(&bottom), 2);
    assert_eq!(doors(&top), 1);
}

#[test]
fn test_corner_sits_at_wall_end() {
    let report = LayoutEngine::new(corner_kitchen(CornerPosition::Right)).generate();
    for subsystem in [Subsystem::Top, Subsystem::Bottom] {
        let corner = corner_of(&report.output, subsystem);
        assert_eq!(corner.origin.x, 2700.0);
        let last = report.output.of(subsystem).last().expect("row");
        assert_eq!(last.role, ModuleRole::Corner);
    }
}

#[test]
fn test_blind_panel_on_corner_side() {
    let right = LayoutEngine::new(corner_kitchen(CornerPosition::Right)).generate();
    let left = LayoutEngine::new(corner_kitchen(CornerPosition::Left)).generate();

    let blind = |cabinet: &CabinetInstance| {
        cabinet
            .faces
            .iter()
            .find(|f| f.kind == FaceKind::Blind)
            .map(|f| f.panel.clone())
            .expect("blind panel")
    };

    let r = blind(&corner_of(&right.output, Subsystem::Bottom));
    assert!(approx_eq(r.origin.x, 508.5));
    assert!(approx_eq(r.origin.x + r.width, 897.0));

    let l = blind(&corner_of(&left.output, Subsystem::Bottom));
    assert!(approx_eq(l.origin.x, 3.0));
    assert!(approx_eq(l.width, r.width));
    assert_eq!(corner_of(&left.output, Subsystem::Bottom).origin.x, 0.0);
}

#[test]
fn test_mid_shelf_notched_around_upright() {
    let report = LayoutEngine::new(corner_kitchen(CornerPosition::Right)).generate();
    let corner = corner_of(&report.output, Subsystem::Bottom);

    let upright = corner
        .panels
        .iter()
        .find(|p| p.name == "Support Upright")
        .expect("upright");
    let shelf = corner
        .panels
        .iter()
        .find(|p| p.name == "Mid Shelf")
        .expect("shelf");
    let slot = corner
        .notches
        .iter()
        .find(|n| n.kind == NotchKind::UprightSlot)
        .expect("slot");

    assert_eq!(slot.panel_id, shelf.id);
    assert!(slot.origin.x <= upright.origin.x);
    assert!(slot.origin.x + slot.width >= upright.origin.x + upright.thickness);
}

#[test]
fn test_final_gap_widens_corner() {
    let mut config = corner_kitchen(CornerPosition::Right);
    config.top.enabled = false;
    config.bottom.drawer_widths = cabinetkit_settings::LengthList::from_mm(&[600.0]);
    config.wall_length = Length::mm(2410.0);
    let report = LayoutEngine::new(config).generate();
    assert!(report.warnings.is_empty());

    // 910 mm after the box: one 900 filler and a 10 mm sliver for the corner
    let corner = corner_of(&report.output, Subsystem::Bottom);
    assert_eq!(corner.width, 910.0);
    assert_eq!(corner.origin.x, 1500.0);
    let total: f64 = report.output.of(Subsystem::Bottom).map(|c| c.width).sum();
    assert!(approx_eq(total, 2410.0));
}
