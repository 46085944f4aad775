//! Layout engine
//!
//! Turns a [`CabinetProjectConfig`] into a [`ProjectOutput`]. Each subsystem
//! (tall unit, upper row, lower row) is generated in isolation: a row that
//! cannot be fitted is recorded as a failure and the others carry on. A
//! verification pass then regenerates any expected subsystem that left no
//! cabinets behind.

use crate::allocator::{allocate_row, ModuleRequest, RowRequest};
use crate::cabinet::{
    assemble, BlindSide, CabinetConfig, CabinetKind, GapSpec, MaterialSpec, ModuleRole,
    SpecialtyKind,
};
use crate::context::{GenerationContext, ProjectOutput};
use crate::door_system::DoorSystemParams;
use crate::supervisor::{SubsystemGenerator, Supervisor};
use cabinetkit_core::constants::LENGTH_TOLERANCE;
use cabinetkit_core::{
    ConfigError, GenerationWarning, LayoutError, LayoutResult, Point3, RowKind, Subsystem,
};
use cabinetkit_settings::{CabinetProjectConfig, CornerPosition};
use tracing::{debug, error, info, warn};

/// Result of one generation run
#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    pub output: ProjectOutput,
    pub warnings: Vec<GenerationWarning>,
    pub failures: Vec<LayoutError>,
}

impl GenerationReport {
    /// True when every expected subsystem was produced
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Subsystems named by a failure, each once, in generation order
    pub fn failed_subsystems(&self) -> Vec<Subsystem> {
        Subsystem::ALL
            .into_iter()
            .filter(|s| self.failures.iter().any(|e| e.subsystem() == Some(*s)))
            .collect()
    }
}

/// Horizontal start of a row's run and position of its corner cabinet
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RowSpan {
    pub run_start: f64,
    pub corner_x: f64,
}

/// Fixed anchors on the wall: tall unit at one end, corners at the other
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct WallFrame {
    pub wall_length: f64,
    pub corner_position: CornerPosition,
    /// Zero when there is no tall unit
    pub tall_width: f64,
}

impl WallFrame {
    pub fn tall_x(&self) -> f64 {
        match self.corner_position {
            CornerPosition::Right => 0.0,
            CornerPosition::Left => self.wall_length - self.tall_width,
        }
    }

    /// Span of a row whose corner cabinet ends up `corner_width` wide
    pub fn row_span(&self, corner_width: f64) -> RowSpan {
        match self.corner_position {
            CornerPosition::Right => RowSpan {
                run_start: self.tall_width,
                corner_x: self.wall_length - corner_width,
            },
            CornerPosition::Left => RowSpan {
                run_start: corner_width,
                corner_x: 0.0,
            },
        }
    }

    pub fn blind_side(&self) -> BlindSide {
        match self.corner_position {
            CornerPosition::Right => BlindSide::Right,
            CornerPosition::Left => BlindSide::Left,
        }
    }
}

/// A cabinet waiting to be built at a position on the wall
struct Placement {
    x: f64,
    role: ModuleRole,
    config: CabinetConfig,
}

pub struct LayoutEngine {
    config: CabinetProjectConfig,
    door_system: DoorSystemParams,
    config_issues: Vec<ConfigError>,
}

impl LayoutEngine {
    /// Create an engine; invalid values are replaced by their defaults
    pub fn new(mut config: CabinetProjectConfig) -> Self {
        let config_issues = config.sanitize();
        let door_system = DoorSystemParams::new(
            config.door_system,
            config.gaps.inner_gap.value(),
            config.top.door_override.value(),
        );
        debug!(
            system = %config.door_system,
            issues = config_issues.len(),
            "layout engine ready"
        );
        Self {
            config,
            door_system,
            config_issues,
        }
    }

    pub fn config(&self) -> &CabinetProjectConfig {
        &self.config
    }

    pub fn door_system(&self) -> &DoorSystemParams {
        &self.door_system
    }

    /// Values that were replaced while sanitizing the configuration
    pub fn config_issues(&self) -> &[ConfigError] {
        &self.config_issues
    }

    pub fn wall_frame(&self) -> WallFrame {
        let tall_width = if self.is_expected(Subsystem::Tall) {
            self.config.tall.width.value()
        } else {
            0.0
        };
        WallFrame {
            wall_length: self.config.wall_length.value(),
            corner_position: self.config.corner_position,
            tall_width,
        }
    }

    /// Run a complete generation into a fresh context
    pub fn generate(&self) -> GenerationReport {
        let mut ctx = GenerationContext::new();
        for issue in &self.config_issues {
            ctx.warn(GenerationWarning::ConfigDefaulted(issue.clone()));
        }
        self.generate_into(&mut ctx);

        let (output, warnings, failures) = ctx.into_parts();
        info!(
            cabinets = output.len(),
            warnings = warnings.len(),
            failures = failures.len(),
            "generation finished"
        );
        GenerationReport {
            output,
            warnings,
            failures,
        }
    }

    /// Generate every expected subsystem, then verify and repair
    pub fn generate_into(&self, ctx: &mut GenerationContext) {
        for subsystem in Subsystem::ALL {
            if !self.is_expected(subsystem) {
                debug!(%subsystem, "subsystem not requested");
                continue;
            }
            let mark = ctx.warning_mark();
            let outcome = self.generate_subsystem(subsystem, ctx);
            if ctx.output.count(subsystem) == 0 {
                // left to the repair pass, which reports it once
                ctx.take_warnings_since(mark);
                match outcome {
                    Ok(_) => warn!(%subsystem, "subsystem produced no cabinets"),
                    Err(e) => error!(%subsystem, error = %e, "subsystem generation failed"),
                }
                continue;
            }
            match outcome {
                Ok(count) => info!(%subsystem, count, "generated subsystem"),
                Err(e) => {
                    error!(%subsystem, error = %e, "subsystem generation failed");
                    ctx.record_failure(e);
                }
            }
        }

        Supervisor::new(self.config.max_repair_attempts).verify_and_repair(self, ctx);
    }

    fn materials(&self) -> MaterialSpec {
        let m = &self.config.materials;
        MaterialSpec {
            carcass: m.carcass_thickness.value(),
            back: m.back_thickness.value(),
            door: m.door_thickness.value(),
            groove_depth: m.groove_depth.value(),
        }
    }

    fn gaps(&self) -> GapSpec {
        let g = &self.config.gaps;
        GapSpec {
            outer: g.outer_gap.value(),
            inner: g.inner_gap.value(),
            edge_band: g.edge_band.value(),
        }
    }

    fn base_config(
        &self,
        kind: CabinetKind,
        row: RowKind,
        width: f64,
        height: f64,
        depth: f64,
    ) -> CabinetConfig {
        let mut config = CabinetConfig::new(kind, row, width, height, depth);
        config.materials = self.materials();
        config.gaps = self.gaps();
        config.door_system = self.door_system;
        config
    }

    fn lower_body_height(&self) -> f64 {
        self.config.default_height.value() - self.config.bottom.plinth_height.value()
    }

    fn hood_height(&self) -> f64 {
        self.config.top.height.value() - self.config.top.hood_space.value()
    }

    /// Cabinet configuration for a run slot
    pub fn slot_config(&self, row: RowKind, role: ModuleRole, width: f64) -> CabinetConfig {
        match row {
            RowKind::Upper => {
                let top = &self.config.top;
                let (height, depth) = (top.height.value(), top.depth.value());
                match role {
                    ModuleRole::Hood => self.base_config(
                        CabinetKind::Specialty(SpecialtyKind::HoodSides),
                        row,
                        width,
                        self.hood_height(),
                        depth,
                    ),
                    _ => {
                        let mut config =
                            self.base_config(CabinetKind::Wall, row, width, height, depth);
                        config.shelf_count = top.shelf_count;
                        config.open_rack = role == ModuleRole::Rack;
                        config
                    }
                }
            }
            RowKind::Lower => {
                let bottom = &self.config.bottom;
                let height = self.lower_body_height();
                let depth = self.config.default_depth.value();
                let kind = match role {
                    ModuleRole::Sink => CabinetKind::Specialty(SpecialtyKind::Sink),
                    ModuleRole::Cooker => CabinetKind::Specialty(SpecialtyKind::Cooker),
                    _ => CabinetKind::Base,
                };
                let mut config = self.base_config(kind, row, width, height, depth);
                config.shelf_count = bottom.shelf_count;
                if role == ModuleRole::DrawerUnit {
                    config.drawer_count = bottom.drawer_count;
                }
                config
            }
        }
    }

    /// Corner cabinet configuration for a row, at its final width
    pub fn corner_config(&self, row: RowKind, width: f64) -> CabinetConfig {
        let mut config = match row {
            RowKind::Upper => {
                let top = &self.config.top;
                let mut config = self.base_config(
                    CabinetKind::Corner,
                    row,
                    width,
                    top.height.value(),
                    top.depth.value(),
                );
                config.blind_width = top.resolved_corner_blind_width();
                config.split_threshold = top.corner_split_threshold.value();
                config
            }
            RowKind::Lower => {
                let bottom = &self.config.bottom;
                let mut config = self.base_config(
                    CabinetKind::Corner,
                    row,
                    width,
                    self.lower_body_height(),
                    self.config.default_depth.value(),
                );
                config.blind_width = bottom.blind_width.value();
                config.split_threshold = bottom.corner_split_threshold.value();
                config
            }
        };
        config.blind_side = Some(self.wall_frame().blind_side());
        config
    }

    /// Tall unit configuration; the body stands on the plinth
    pub fn tall_config(&self) -> CabinetConfig {
        let tall = &self.config.tall;
        let plinth = tall.plinth_height.value();
        let mut config = self.base_config(
            CabinetKind::Tall,
            RowKind::Lower,
            tall.width.value(),
            tall.total_height.value() - plinth,
            tall.depth.value() - self.config.materials.door_thickness.value(),
        );
        config.materials.carcass = tall.carcass_thickness.value();
        config.gaps.inner = tall.door_gap.value();
        config.shelf_count = tall.shelf_count;
        config.side_panel_mode = tall.side_panel_mode;
        config.plinth_height = plinth;
        config
    }

    /// Allocation request for a row, and its corner width if any
    pub fn row_request(&self, subsystem: Subsystem) -> (RowRequest, Option<f64>) {
        let frame = self.wall_frame();
        let top = &self.config.top;
        let bottom = &self.config.bottom;

        let (row, corner) = match subsystem {
            Subsystem::Top => (
                RowKind::Upper,
                top.corner_enabled.then(|| top.corner_width.value()),
            ),
            _ => (
                RowKind::Lower,
                bottom.corner_enabled.then(|| bottom.corner_width.value()),
            ),
        };

        let mut request = RowRequest::new(subsystem, row, frame.wall_length);
        request.reserved = frame.tall_width + corner.unwrap_or(0.0);
        request.negligible = self.config.materials.door_thickness.value();

        let hood = if top.hood_enabled { top.hood_width.value() } else { 0.0 };
        let sink = if bottom.sink_enabled { bottom.sink_width.value() } else { 0.0 };
        let cooker = if bottom.cooker_enabled { bottom.cooker_width.value() } else { 0.0 };

        match row {
            RowKind::Upper => {
                if top.hood_enabled {
                    request.leading.push(ModuleRequest::new(ModuleRole::Hood, hood));
                }
                request.cooker_footprint = hood.max(cooker);
                request.boxes = top
                    .box_widths
                    .values()
                    .into_iter()
                    .map(|w| ModuleRequest::new(ModuleRole::Box, w))
                    .collect();
                request.racks = top.rack_widths.values();
                request.racks_critical = top.rack_beside_cooker;
            }
            RowKind::Lower => {
                if bottom.sink_enabled {
                    request.leading.push(ModuleRequest::new(ModuleRole::Sink, sink));
                }
                if bottom.cooker_enabled {
                    request.leading.push(ModuleRequest::new(ModuleRole::Cooker, cooker));
                }
                request.cooker_footprint = sink + cooker;
                request.boxes = bottom
                    .drawer_widths
                    .values()
                    .into_iter()
                    .map(|w| ModuleRequest::new(ModuleRole::DrawerUnit, w))
                    .chain(
                        bottom
                            .door_sequence
                            .values()
                            .into_iter()
                            .map(|w| ModuleRequest::new(ModuleRole::DoorUnit, w)),
                    )
                    .collect();
            }
        }
        (request, corner)
    }

    /// Absolute position of a cabinet-local origin
    fn origin(&self, x: f64, role: ModuleRole, config: &CabinetConfig) -> Point3 {
        let y = -config.effective_depth();
        let z = match (config.row, role) {
            (_, ModuleRole::Tall) => self.config.tall.plinth_height.value(),
            (RowKind::Upper, ModuleRole::Hood) => {
                self.config.top.elevation.value() + self.config.top.hood_space.value()
            }
            (RowKind::Upper, _) => self.config.top.elevation.value(),
            (RowKind::Lower, _) => self.config.bottom.plinth_height.value(),
        };
        Point3::new(x, y, z)
    }

    fn generate_row(
        &self,
        subsystem: Subsystem,
        ctx: &mut GenerationContext,
    ) -> LayoutResult<usize> {
        let (request, corner) = self.row_request(subsystem);
        let plan = allocate_row(&request)?;
        for warning in plan.warnings {
            ctx.warn(warning);
        }

        let corner_width = corner.map(|w| w + plan.final_gap);
        if corner.is_none() && plan.final_gap > LENGTH_TOLERANCE {
            warn!(%subsystem, gap = plan.final_gap, "row ends with an uncovered gap");
            ctx.warn(GenerationWarning::FinalGap {
                subsystem,
                gap: plan.final_gap,
            });
        }

        let span = self.wall_frame().row_span(corner_width.unwrap_or(0.0));
        let mut placements: Vec<Placement> = plan
            .slots
            .iter()
            .map(|slot| Placement {
                x: span.run_start + slot.offset,
                role: slot.role,
                config: self.slot_config(request.row, slot.role, slot.width),
            })
            .collect();
        if let Some(width) = corner_width {
            debug!(%subsystem, width, absorbed = plan.final_gap, "corner absorbs final gap");
            placements.push(Placement {
                x: span.corner_x,
                role: ModuleRole::Corner,
                config: self.corner_config(request.row, width),
            });
        }
        placements.sort_by(|a, b| a.x.total_cmp(&b.x));

        self.place_all(subsystem, placements, ctx)
    }

    fn generate_tall(&self, ctx: &mut GenerationContext) -> LayoutResult<usize> {
        let frame = self.wall_frame();
        if frame.tall_width > frame.wall_length + LENGTH_TOLERANCE {
            return Err(LayoutError::InsufficientSpace {
                subsystem: Subsystem::Tall,
                required: frame.tall_width,
                available: frame.wall_length,
            });
        }
        let placement = Placement {
            x: frame.tall_x(),
            role: ModuleRole::Tall,
            config: self.tall_config(),
        };
        self.place_all(Subsystem::Tall, vec![placement], ctx)
    }

    /// Build placements in order, appending each instance as soon as it exists
    fn place_all(
        &self,
        subsystem: Subsystem,
        placements: Vec<Placement>,
        ctx: &mut GenerationContext,
    ) -> LayoutResult<usize> {
        let mut added = 0;
        for placement in placements {
            let index = ctx.next_index(subsystem);
            let origin = self.origin(placement.x, placement.role, &placement.config);
            let instance = assemble(subsystem, index, placement.role, &placement.config, origin)?;
            debug!(
                name = %instance.name,
                x = placement.x,
                panels = instance.panel_count(),
                "placed cabinet"
            );
            ctx.output.push(instance);
            added += 1;
        }
        Ok(added)
    }
}

impl SubsystemGenerator for LayoutEngine {
    fn is_expected(&self, subsystem: Subsystem) -> bool {
        let wall = self.config.wall_length.value() > 0.0;
        match subsystem {
            Subsystem::Top => self.config.top.enabled && wall,
            Subsystem::Bottom => self.config.bottom.enabled && wall,
            Subsystem::Tall => {
                let tall = &self.config.tall;
                tall.enabled && tall.total_height.value() > 0.0 && tall.width.value() > 0.0
            }
        }
    }

    fn generate_subsystem(
        &self,
        subsystem: Subsystem,
        ctx: &mut GenerationContext,
    ) -> LayoutResult<usize> {
        match subsystem {
            Subsystem::Tall => self.generate_tall(ctx),
            Subsystem::Top | Subsystem::Bottom => self.generate_row(subsystem, ctx),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cabinetkit_core::approx_eq;
    use cabinetkit_settings::{DoorSystem, Length, LengthList};

    fn top_only() -> CabinetProjectConfig {
        let mut config = CabinetProjectConfig::default();
        config.bottom.enabled = false;
        config
    }

    #[test]
    fn test_wall_frame_right_corner() {
        let frame = WallFrame {
            wall_length: 3600.0,
            corner_position: CornerPosition::Right,
            tall_width: 450.0,
        };
        assert_eq!(frame.tall_x(), 0.0);
        assert_eq!(
            frame.row_span(1060.0),
            RowSpan {
                run_start: 450.0,
                corner_x: 2540.0
            }
        );
    }

    #[test]
    fn test_wall_frame_left_corner() {
        let frame = WallFrame {
            wall_length: 3600.0,
            corner_position: CornerPosition::Left,
            tall_width: 450.0,
        };
        assert_eq!(frame.tall_x(), 3150.0);
        assert_eq!(frame.row_span(1050.0).run_start, 1050.0);
        assert_eq!(frame.blind_side(), BlindSide::Left);
    }

    #[test]
    fn test_top_row_fills_wall() {
        let engine = LayoutEngine::new(top_only());
        let report = engine.generate();
        assert!(report.is_complete());

        let total: f64 = report.output.of(Subsystem::Top).map(|c| c.width).sum();
        assert!(approx_eq(total, 3600.0));
        let indices: Vec<u32> = report.output.of(Subsystem::Top).map(|c| c.index).collect();
        assert_eq!(indices, (1..=indices.len() as u32).collect::<Vec<_>>());
    }

    #[test]
    fn test_hood_raised_to_row_top() {
        let mut config = top_only();
        config.top.hood_enabled = true;
        let engine = LayoutEngine::new(config);
        let report = engine.generate();

        let hood = report
            .output
            .of(Subsystem::Top)
            .find(|c| c.role == ModuleRole::Hood)
            .expect("hood slot");
        assert_eq!(hood.origin.z, 1500.0 + 150.0);
        assert_eq!(hood.height + 150.0, 720.0);
        assert!(!hood.is_cabinet());
    }

    #[test]
    fn test_corner_absorbs_final_gap() {
        let mut config = CabinetProjectConfig::default();
        config.top.enabled = false;
        config.wall_length = Length::mm(2810.0);
        config.bottom.corner_enabled = true;
        config.bottom.drawer_widths = LengthList::from_mm(&[600.0]);
        let engine = LayoutEngine::new(config);
        let report = engine.generate();
        assert!(report.is_complete());

        let corner = report
            .output
            .of(Subsystem::Bottom)
            .find(|c| c.role == ModuleRole::Corner)
            .expect("corner");
        assert_eq!(corner.width, 1060.0);
        assert_eq!(corner.origin.x + corner.width, 2810.0);
        assert!(report.warnings.is_empty());
    }

    #[test]
    fn test_gola_shifts_upper_carcass() {
        let mut config = top_only();
        config.door_system = DoorSystem::Gola;
        let engine = LayoutEngine::new(config);
        let report = engine.generate();

        let cabinet = report
            .output
            .of(Subsystem::Top)
            .find(|c| c.role == ModuleRole::Box)
            .expect("box");
        let side = cabinet
            .panels
            .iter()
            .find(|p| p.name == "Left Side")
            .expect("side");
        assert_eq!(side.origin.z, 20.0);
        assert_eq!(side.origin.z + side.height, 720.0);
    }

    #[test]
    fn test_insufficient_space_isolated_to_row() {
        let mut config = CabinetProjectConfig::default();
        config.wall_length = Length::mm(1200.0);
        config.bottom.sink_enabled = true;
        config.bottom.cooker_enabled = true;
        let engine = LayoutEngine::new(config);
        let report = engine.generate();

        assert!(report.output.count(Subsystem::Top) > 0);
        assert_eq!(report.output.count(Subsystem::Bottom), 0);
        assert_eq!(report.failures.len(), 1);
        match &report.failures[0] {
            LayoutError::MissingSubsystem {
                subsystem: Subsystem::Bottom,
                attempts: 1,
                cause: Some(cause),
            } => assert!(matches!(
                **cause,
                LayoutError::InsufficientSpace {
                    subsystem: Subsystem::Bottom,
                    ..
                }
            )),
            other => panic!("unexpected failure: {other:?}"),
        }
    }

    #[test]
    fn test_failed_subsystems_lists_only_requested_rows() {
        let mut config = CabinetProjectConfig::default();
        config.wall_length = Length::mm(1200.0);
        config.tall.enabled = false;
        config.bottom.sink_enabled = true;
        config.bottom.cooker_enabled = true;
        let report = LayoutEngine::new(config).generate();

        assert_eq!(report.failed_subsystems(), vec![Subsystem::Bottom]);
        assert!(LayoutEngine::new(top_only()).generate().failed_subsystems().is_empty());
    }
}
