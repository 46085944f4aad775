use cabinetkit_core::{GenerationWarning, LayoutError, LayoutResult, Subsystem};
use cabinetkit_layout::{GenerationContext, LayoutEngine, SubsystemGenerator, Supervisor};
use cabinetkit_settings::{CabinetProjectConfig, Length, LengthList};
use std::cell::Cell;

/// Wraps the real engine and fails the lower row a fixed number of times
struct Unreliable {
    engine: LayoutEngine,
    failures_left: Cell<u32>,
}

impl Unreliable {
    fn new(failures: u32) -> Self {
        Self {
            engine: LayoutEngine::new(CabinetProjectConfig::default()),
            failures_left: Cell::new(failures),
        }
    }
}

impl SubsystemGenerator for Unreliable {
    fn is_expected(&self, subsystem: Subsystem) -> bool {
        self.engine.is_expected(subsystem)
    }

    fn generate_subsystem(
        &self,
        subsystem: Subsystem,
        ctx: &mut GenerationContext,
    ) -> LayoutResult<usize> {
        if subsystem == Subsystem::Bottom && self.failures_left.get() > 0 {
            self.failures_left.set(self.failures_left.get() - 1);
            // the failed attempt had already numbered a cabinet
            ctx.next_index(subsystem);
            return Err(LayoutError::InvalidCabinet("transient".to_string()));
        }
        self.engine.generate_subsystem(subsystem, ctx)
    }
}

fn first_pass(generator: &Unreliable, ctx: &mut GenerationContext) {
    for subsystem in Subsystem::ALL {
        if !generator.is_expected(subsystem) {
            continue;
        }
        if let Err(e) = generator.generate_subsystem(subsystem, ctx) {
            ctx.record_failure(e);
        }
    }
}

#[test]
fn test_missing_row_is_repaired() {
    let generator = Unreliable::new(1);
    let mut ctx = GenerationContext::new();
    first_pass(&generator, &mut ctx);
    assert_eq!(ctx.output.count(Subsystem::Bottom), 0);

    let supervisor = Supervisor::new(2);
    assert_eq!(supervisor.missing(&generator, &ctx), vec![Subsystem::Bottom]);
    let unresolved = supervisor.verify_and_repair(&generator, &mut ctx);
    assert!(unresolved.is_empty());
    assert!(ctx.output.count(Subsystem::Bottom) > 0);
}

#[test]
fn test_repaired_cabinets_continue_numbering() {
    let generator = Unreliable::new(1);
    let mut ctx = GenerationContext::new();
    first_pass(&generator, &mut ctx);
    Supervisor::new(1).verify_and_repair(&generator, &mut ctx);

    let first = ctx
        .output
        .of(Subsystem::Bottom)
        .map(|c| c.index)
        .min()
        .expect("bottom row");
    assert_eq!(first, 2);
}

#[test]
fn test_unrepairable_row_recorded() {
    let generator = Unreliable::new(10);
    let mut ctx = GenerationContext::new();
    first_pass(&generator, &mut ctx);

    let unresolved = Supervisor::new(3).verify_and_repair(&generator, &mut ctx);
    assert_eq!(unresolved, vec![Subsystem::Bottom]);
    assert!(ctx.failures().contains(&LayoutError::MissingSubsystem {
        subsystem: Subsystem::Bottom,
        attempts: 3,
        cause: Some(Box::new(LayoutError::InvalidCabinet("transient".to_string()))),
    }));
    // the upper row is untouched by the lower row's trouble
    assert!(ctx.output.count(Subsystem::Top) > 0);
}

#[test]
fn test_supervisor_attempts_at_least_once() {
    let generator = Unreliable::new(0);
    let mut ctx = GenerationContext::new();
    let supervisor = Supervisor::new(0);
    assert_eq!(supervisor.max_attempts(), 1);
    assert_eq!(
        supervisor.attempt(&generator, Subsystem::Top, &mut ctx),
        Ok(1)
    );
}

#[test]
fn test_row_left_empty_reports_each_warning_once() {
    // a tall unit leaves 200 mm: too little for any upper filler
    let mut config = CabinetProjectConfig::default();
    config.tall.enabled = true;
    config.tall.width = Length::mm(3400.0);
    config.top.box_widths = LengthList::from_mm(&[]);
    config.max_repair_attempts = 3;
    let report = LayoutEngine::new(config).generate();

    assert_eq!(report.output.count(Subsystem::Top), 0);
    for (i, warning) in report.warnings.iter().enumerate() {
        assert!(
            !report.warnings[i + 1..].contains(warning),
            "reported twice: {warning}"
        );
    }
    let top_gaps = report
        .warnings
        .iter()
        .filter(|w| {
            matches!(
                w,
                GenerationWarning::FinalGap {
                    subsystem: Subsystem::Top,
                    ..
                }
            )
        })
        .count();
    assert_eq!(top_gaps, 1);

    for subsystem in Subsystem::ALL {
        let failures = report
            .failures
            .iter()
            .filter(|e| e.subsystem() == Some(subsystem))
            .count();
        assert!(failures <= 1, "{subsystem} failed {failures} times");
    }
    assert!(report.failures.contains(&LayoutError::MissingSubsystem {
        subsystem: Subsystem::Top,
        attempts: 3,
        cause: None,
    }));
}
