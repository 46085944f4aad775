//! CabinetKit Settings Crate
//!
//! Handles the project configuration: lenient length values, per-section
//! defaults, sanitizing and JSON/TOML persistence.

pub mod config;
pub mod error;
pub mod length;

pub use config::{
    default_project_path, BottomRowSettings, CabinetProjectConfig, CornerPosition, DoorSystem,
    GapSettings, MaterialSettings, PricingSettings, SidePanelMode, TallSettings, TopRowSettings,
};
pub use error::{SettingsError, SettingsResult};
pub use length::{Length, LengthList};
