//! # CabinetKit Core
//!
//! Core types and utilities shared by the CabinetKit crates.
//! Provides the error taxonomy, length parsing, subsystem tags,
//! panel geometry and shop constants.

pub mod constants;
pub mod error;
pub mod geometry;
pub mod subsystem;
pub mod units;

pub use error::{ConfigError, Error, GenerationWarning, LayoutError, LayoutResult, Result};

pub use geometry::{
    Extents, Face, FaceKind, MaterialClass, Notch, NotchKind, Panel, PanelEdge, PanelPlane,
    PanelRole, Point3,
};

pub use subsystem::{RowKind, Subsystem};

pub use units::{approx_eq, format_length, parse_length, parse_length_list, round_mm};
