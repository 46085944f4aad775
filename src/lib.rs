//! # CabinetKit
//!
//! Kitchen cabinet layout engine: allocates a wall run into cabinets,
//! decomposes every cabinet into panels, faces and notches, and rolls the
//! result up into a cutting list and hardware bill of materials.
//!
//! ## Architecture
//!
//! CabinetKit is organized as a workspace with multiple crates:
//!
//! 1. **cabinetkit-core** - Errors, length parsing, subsystem tags, panel geometry
//! 2. **cabinetkit-settings** - Project configuration, sanitizing, JSON/TOML files
//! 3. **cabinetkit-layout** - Run allocation, cabinet builders, supervisor, BOM, export
//! 4. **cabinetkit** - This crate: re-exports, logging setup and the CLI

pub use cabinetkit_core::{
    approx_eq, format_length, parse_length, ConfigError, Error, Face, FaceKind,
    GenerationWarning, LayoutError, LayoutResult, MaterialClass, Notch, NotchKind, Panel,
    PanelPlane, PanelRole, Point3, Result, RowKind, Subsystem,
};

pub use cabinetkit_settings::{
    CabinetProjectConfig, CornerPosition, DoorSystem, Length, LengthList, SettingsError,
    SidePanelMode,
};

pub use cabinetkit_layout::{
    hardware_csv, part_rows, parts_csv, BillOfMaterials, BomLine, CabinetInstance,
    GenerationContext, GenerationReport, LayoutEngine, ModuleRole, PartRow, ProjectOutput,
};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Initialize logging for the command line tool
///
/// Log lines go to stderr so that tables printed on stdout stay clean.
/// `RUST_LOG` overrides the default `info` level; `json` switches to one
/// JSON object per event.
pub fn init_logging(json: bool) -> anyhow::Result<()> {
    use tracing_subscriber::fmt;
    use tracing_subscriber::prelude::*;
    use tracing_subscriber::EnvFilter;

    let env_filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new("info"))?;

    if json {
        let fmt_layer = fmt::layer()
            .json()
            .with_writer(std::io::stderr)
            .with_target(true);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    } else {
        let fmt_layer = fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(true)
            .with_level(true);
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt_layer)
            .try_init()?;
    }

    Ok(())
}
