use cabinetkit_core::{approx_eq, GenerationWarning, Subsystem};
use cabinetkit_layout::{
    GenerationContext, LayoutEngine, ModuleRole, SubsystemGenerator,
};
use cabinetkit_settings::{CabinetProjectConfig, CornerPosition, Length};

fn row_width(engine: &LayoutEngine, subsystem: Subsystem) -> f64 {
    engine
        .generate()
        .output
        .of(subsystem)
        .map(|c| c.width)
        .sum()
}

fn full_kitchen() -> CabinetProjectConfig {
    let mut config = CabinetProjectConfig::default();
    config.tall.enabled = true;
    config.top.hood_enabled = true;
    config.bottom.sink_enabled = true;
    config.bottom.cooker_enabled = true;
    config.bottom.corner_enabled = true;
    config
}

#[test]
fn test_reference_wall_scenario() {
    let mut config = CabinetProjectConfig::default();
    config.bottom.enabled = false;
    let engine = LayoutEngine::new(config);
    let report = engine.generate();
    assert!(report.is_complete());
    assert!(report.warnings.is_empty());

    let top: Vec<_> = report.output.of(Subsystem::Top).collect();
    let explicit: Vec<(ModuleRole, f64)> = top.iter().take(4).map(|c| (c.role, c.width)).collect();
    assert_eq!(
        explicit,
        vec![
            (ModuleRole::Box, 600.0),
            (ModuleRole::Box, 600.0),
            (ModuleRole::Rack, 450.0),
            (ModuleRole::Rack, 300.0),
        ]
    );

    let fillers: f64 = top
        .iter()
        .filter(|c| c.role == ModuleRole::Filler)
        .map(|c| c.width)
        .sum();
    assert!(approx_eq(fillers, 1650.0));
    assert!(approx_eq(row_width(&engine, Subsystem::Top), 3600.0));
}

#[test]
fn test_full_kitchen_fills_both_rows() {
    let engine = LayoutEngine::new(full_kitchen());
    let report = engine.generate();
    assert!(report.is_complete(), "{:?}", report.failures);

    let tall = report
        .output
        .of(Subsystem::Tall)
        .next()
        .expect("tall unit");
    assert_eq!(tall.origin.x, 0.0);
    assert_eq!(tall.name, "Tall Unit 1 (450 mm)");

    for subsystem in [Subsystem::Top, Subsystem::Bottom] {
        let width: f64 = report.output.of(subsystem).map(|c| c.width).sum();
        assert!(approx_eq(width + tall.width, 3600.0), "{} row: {}", subsystem, width);
    }

    // the 600 drawer unit is the smallest box and makes room for the rest
    assert!(report.warnings.contains(&GenerationWarning::ModuleEvicted {
        subsystem: Subsystem::Bottom,
        width: 600.0,
    }));

    let corner = report
        .output
        .of(Subsystem::Bottom)
        .find(|c| c.role == ModuleRole::Corner)
        .expect("corner");
    assert_eq!(corner.width, 1100.0);
    assert_eq!(corner.origin.x + corner.width, 3600.0);
}

#[test]
fn test_left_corner_puts_tall_at_end() {
    let mut config = full_kitchen();
    config.corner_position = CornerPosition::Left;
    let engine = LayoutEngine::new(config);
    let report = engine.generate();

    let tall = report.output.of(Subsystem::Tall).next().expect("tall");
    assert_eq!(tall.origin.x, 3150.0);

    let bottom: Vec<_> = report.output.of(Subsystem::Bottom).collect();
    assert_eq!(bottom[0].role, ModuleRole::Corner);
    assert_eq!(bottom[0].origin.x, 0.0);
    assert_eq!(bottom[1].origin.x, bottom[0].width);
}

#[test]
fn test_rows_sit_at_their_heights() {
    let engine = LayoutEngine::new(full_kitchen());
    let report = engine.generate();

    for cabinet in report.output.of(Subsystem::Bottom) {
        assert_eq!(cabinet.origin.z, 100.0);
        assert_eq!(cabinet.origin.y, -560.0);
    }
    for cabinet in report.output.of(Subsystem::Top) {
        if cabinet.role != ModuleRole::Hood {
            assert_eq!(cabinet.origin.z, 1500.0);
        }
    }
}

#[test]
fn test_generation_is_deterministic() {
    let engine = LayoutEngine::new(full_kitchen());
    let first = engine.generate().output;
    let second = engine.generate().output;
    assert_eq!(first, second);
    assert_eq!(
        first.to_json().expect("json"),
        second.to_json().expect("json")
    );
}

#[test]
fn test_counters_continue_across_regeneration() {
    let engine = LayoutEngine::new(CabinetProjectConfig::default());
    let mut ctx = GenerationContext::new();
    let first = engine
        .generate_subsystem(Subsystem::Top, &mut ctx)
        .expect("first pass") as u32;
    engine
        .generate_subsystem(Subsystem::Top, &mut ctx)
        .expect("second pass");

    let indices: Vec<u32> = ctx.output.of(Subsystem::Top).map(|c| c.index).collect();
    assert_eq!(indices.len() as u32, 2 * first);
    assert_eq!(indices, (1..=2 * first).collect::<Vec<_>>());
}

#[test]
fn test_invalid_lengths_are_reported_not_fatal() {
    let mut config = CabinetProjectConfig::default();
    config.wall_length = Length::Invalid("three metres".to_string());
    let engine = LayoutEngine::new(config);
    assert_eq!(engine.config_issues().len(), 1);

    let report = engine.generate();
    assert!(matches!(
        report.warnings[0],
        GenerationWarning::ConfigDefaulted(_)
    ));
    assert!(approx_eq(row_width(&engine, Subsystem::Top), 3600.0));
}
