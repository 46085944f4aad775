//! # CabinetKit Layout
//!
//! Turns a kitchen project configuration into a complete cutting list.
//!
//! ## Pipeline
//!
//! - **Run Allocator**: places hood, sink, cooker, boxes and racks along a wall run
//! - **Module Filler**: converts the residual gap into standard filler modules
//! - **Carcass Builder**: decomposes one cabinet into boards (sides, top/bottom, back, shelves)
//! - **Face Partitioner**: doors, drawer fronts and handleless notches
//! - **Corner Cabinet Builder**: blind panel, support upright, notched shelf and split doors
//! - **Supervisor**: regenerates expected subsystems that produced nothing
//! - **Bill of Materials**: panel groups, hardware, sheets and cost
//!
//! ## Usage
//!
//! ```no_run
//! use cabinetkit_layout::{BillOfMaterials, LayoutEngine};
//! use cabinetkit_settings::CabinetProjectConfig;
//!
//! let engine = LayoutEngine::new(CabinetProjectConfig::default());
//! let report = engine.generate();
//! let bom = BillOfMaterials::from_output(
//!     &report.output,
//!     engine.door_system(),
//!     &engine.config().pricing,
//! );
//! println!("{} cabinets, {:.2} total", bom.cabinet_count, bom.cost.total);
//! ```

pub mod allocator;
pub mod bom;
pub mod cabinet;
pub mod carcass;
pub mod context;
pub mod corner;
pub mod door_system;
pub mod engine;
pub mod export;
pub mod face;
pub mod filler;
pub mod plinth;
pub mod specialty;
pub mod supervisor;
pub mod tall;

pub use allocator::{allocate_row, evict_to_fit, ModuleRequest, RowPlan, RowRequest, Slot};
pub use bom::{BillOfMaterials, BomLine, BomPanel, CostSummary, HardwareKind, SheetEstimate};
pub use cabinet::{
    assemble, build_parts, BlindSide, CabinetConfig, CabinetInstance, CabinetKind, CabinetParts,
    GapSpec, MaterialSpec, ModuleRole, PanelIds, SpecialtyKind,
};
pub use context::{GenerationContext, ProjectOutput};
pub use corner::{corner_layout, CornerLayout};
pub use door_system::{DoorSystem, DoorSystemParams, NotchProfile};
pub use engine::{GenerationReport, LayoutEngine, RowSpan, WallFrame};
pub use export::{hardware_csv, part_rows, parts_csv, PartRow};
pub use face::{drawer_stack, leaves, Band, FaceLayout, Leaf};
pub use filler::{FillOutcome, ModuleFiller};
pub use plinth::{plinth_covers, plinth_pieces};
pub use supervisor::{SubsystemGenerator, Supervisor};
