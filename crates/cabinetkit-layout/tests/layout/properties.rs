use cabinetkit_core::constants::{LOWER_FILL_WIDTHS, UPPER_FILL_WIDTHS};
use cabinetkit_core::{RowKind, Subsystem};
use cabinetkit_layout::{
    allocate_row, build_parts, drawer_stack, evict_to_fit, CabinetConfig, CabinetKind, DoorSystem,
    DoorSystemParams, LayoutEngine, ModuleFiller, ModuleRequest, ModuleRole, PanelIds, RowRequest,
};
use cabinetkit_settings::{CabinetProjectConfig, Length, LengthList};
use proptest::prelude::*;

const EPS: f64 = 1e-6;

fn row() -> impl Strategy<Value = RowKind> {
    prop_oneof![Just(RowKind::Upper), Just(RowKind::Lower)]
}

fn widths() -> impl Strategy<Value = Vec<f64>> {
    prop::collection::vec((3u32..=18).prop_map(|w| f64::from(w) * 50.0), 0..5)
}

proptest! {
    #[test]
    fn test_fill_accounts_for_whole_gap(
        row in row(),
        gap in 0.0f64..5000.0,
        racks in widths(),
    ) {
        let outcome = ModuleFiller::for_row(row, 18.0).fill(gap, &racks);
        prop_assert!((outcome.covered() - gap).abs() < EPS);
    }

    #[test]
    fn test_final_gap_only_when_nothing_can_absorb_it(
        row in row(),
        gap in 0.0f64..5000.0,
        racks in widths(),
    ) {
        let outcome = ModuleFiller::for_row(row, 18.0).fill(gap, &racks);
        let smallest = match row {
            RowKind::Upper => UPPER_FILL_WIDTHS[UPPER_FILL_WIDTHS.len() - 1],
            RowKind::Lower => LOWER_FILL_WIDTHS[LOWER_FILL_WIDTHS.len() - 1],
        };
        prop_assert!(outcome.final_gap < smallest);
        prop_assert!(
            outcome.final_gap <= 18.0 || (outcome.fillers.is_empty() && racks.is_empty())
        );
    }

    #[test]
    fn test_eviction_keeps_largest_boxes(
        wall in 1000.0f64..6000.0,
        reserved in 0.0f64..1000.0,
        boxes in widths(),
    ) {
        let mut request = RowRequest::new(Subsystem::Top, RowKind::Upper, wall);
        request.reserved = reserved;
        request.boxes = boxes
            .iter()
            .map(|w| ModuleRequest::new(ModuleRole::Box, *w))
            .collect();

        let (kept, evicted) = evict_to_fit(&request).expect("reserved fits the wall");
        let kept_total: f64 = kept.iter().map(|m| m.width).sum();
        prop_assert!(reserved + kept_total <= wall + EPS);
        prop_assert_eq!(kept.len() + evicted.len(), boxes.len());

        let smallest_kept = kept.iter().map(|m| m.width).fold(f64::INFINITY, f64::min);
        for module in &evicted {
            prop_assert!(module.width <= smallest_kept);
        }
    }

    #[test]
    fn test_allocation_covers_run(
        row in row(),
        wall in 1500.0f64..6000.0,
        boxes in widths(),
        racks in widths(),
    ) {
        let subsystem = match row {
            RowKind::Upper => Subsystem::Top,
            RowKind::Lower => Subsystem::Bottom,
        };
        let mut request = RowRequest::new(subsystem, row, wall);
        request.negligible = 18.0;
        request.boxes = boxes
            .iter()
            .map(|w| ModuleRequest::new(ModuleRole::Box, *w))
            .collect();
        request.racks = racks;

        let plan = allocate_row(&request).expect("no reserved width");
        prop_assert!((plan.placed_width() + plan.final_gap - wall).abs() < 1e-3);

        let mut offset = 0.0;
        for slot in &plan.slots {
            prop_assert!((slot.offset - offset).abs() < 1e-3);
            prop_assert!(slot.width > 0.0);
            offset += slot.width;
        }
    }

    #[test]
    fn test_drawer_fronts_never_overlap(
        count in 2u8..=3,
        body in 500.0f64..900.0,
        gola in any::<bool>(),
    ) {
        let system = if gola { DoorSystem::Gola } else { DoorSystem::Handled };
        let params = DoorSystemParams::new(system, 3.0, 20.0);
        let (bands, split) = drawer_stack(
            count,
            1.0,
            body,
            params.top_gap,
            params.drawer_split_gap,
            params.three_drawer_gap,
        );

        prop_assert_eq!(bands.len(), usize::from(count));
        prop_assert!(bands[0].z + bands[0].height < split);
        prop_assert!(bands[1].z > split);
        for pair in bands.windows(2) {
            prop_assert!(pair[0].z + pair[0].height < pair[1].z);
        }
        let last = bands[bands.len() - 1];
        prop_assert!((last.z + last.height - (body - params.top_gap)).abs() < EPS);
    }

    #[test]
    fn test_gola_recess_keeps_nominal_envelope(
        height in 400.0f64..1000.0,
        recess in 0.0f64..60.0,
    ) {
        let mut config =
            CabinetConfig::new(CabinetKind::Wall, RowKind::Upper, 600.0, height, 350.0);
        config.door_system = DoorSystemParams::new(DoorSystem::Gola, 3.0, recess);
        let parts = build_parts(&config, &mut PanelIds::new(Subsystem::Top, 1)).expect("wall unit");

        let side = parts.panels.iter().find(|p| p.name == "Left Side").expect("side");
        prop_assert!((side.origin.z - recess).abs() < EPS);
        prop_assert!((side.origin.z + side.height - height).abs() < EPS);
        for face in &parts.faces {
            prop_assert!((face.panel.height - height).abs() < EPS);
        }
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(24))]

    #[test]
    fn test_generation_is_repeatable(
        wall in 2000u32..6000,
        gola in any::<bool>(),
        boxes in widths(),
    ) {
        let mut config = CabinetProjectConfig::default();
        config.wall_length = Length::mm(f64::from(wall));
        config.top.box_widths = LengthList::from_mm(&boxes);
        if gola {
            config.door_system = DoorSystem::Gola;
        }
        let engine = LayoutEngine::new(config);
        let first = engine.generate();
        let second = engine.generate();
        prop_assert_eq!(&first.output, &second.output);
        prop_assert_eq!(first.warnings, second.warnings);
    }
}
