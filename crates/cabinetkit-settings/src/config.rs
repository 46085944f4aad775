//! Project configuration for CabinetKit
//!
//! A project file describes one kitchen wall: its length, the door system,
//! and what each subsystem (upper row, lower row, tall unit) should hold.
//! Supports JSON and TOML file formats.
//!
//! Configuration is organized into sections:
//! - Materials (board thicknesses, back groove)
//! - Gaps (door reveals and edge banding)
//! - Top row (wall cabinets, open racks, cooker hood, top corner)
//! - Bottom row (sink, cooker, drawer and door units, bottom corner)
//! - Tall unit
//! - Pricing (sheet stock, hardware and labour rates)

use crate::error::{SettingsError, SettingsResult};
use crate::length::{Length, LengthList};
use cabinetkit_core::constants::{
    BOTTOM_CORNER_SPLIT_THRESHOLD, CORNER_DEPTH_ADJUST, DEFAULT_DOOR_OVERRIDE,
    TOP_CORNER_SPLIT_THRESHOLD,
};
use cabinetkit_core::ConfigError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;
use tracing::{debug, warn};

/// Door system used for every cabinet in a run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DoorSystem {
    /// Doors and drawers carry physical handles
    #[default]
    Handled,
    /// Handleless: finger-pull profiles and a lowered upper carcass
    Gola,
}

impl fmt::Display for DoorSystem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Handled => write!(f, "Handled"),
            Self::Gola => write!(f, "Gola"),
        }
    }
}

impl FromStr for DoorSystem {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "handled" | "handle" => Ok(Self::Handled),
            "gola" | "handleless" => Ok(Self::Gola),
            _ => Err(format!("Unknown door system: {}", s)),
        }
    }
}

/// End of the wall that holds the corner cabinets
///
/// The tall unit, when present, takes the opposite end.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CornerPosition {
    Left,
    #[default]
    Right,
}

impl fmt::Display for CornerPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Left => write!(f, "left"),
            Self::Right => write!(f, "right"),
        }
    }
}

/// Cover panels fitted to the sides of the tall unit
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum SidePanelMode {
    #[default]
    #[serde(rename = "none")]
    None,
    #[serde(rename = "both")]
    Both,
    #[serde(rename = "left_100mm")]
    Left100mm,
    #[serde(rename = "right_100mm")]
    Right100mm,
    #[serde(rename = "left_only")]
    LeftOnly,
    #[serde(rename = "right_only")]
    RightOnly,
}

impl fmt::Display for SidePanelMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => write!(f, "none"),
            Self::Both => write!(f, "both"),
            Self::Left100mm => write!(f, "left_100mm"),
            Self::Right100mm => write!(f, "right_100mm"),
            Self::LeftOnly => write!(f, "left_only"),
            Self::RightOnly => write!(f, "right_only"),
        }
    }
}

/// Board thicknesses
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MaterialSettings {
    pub carcass_thickness: Length,
    pub back_thickness: Length,
    /// Door, drawer front and open-rack board
    pub door_thickness: Length,
    /// Depth of the rabbet the back panel sits in
    pub groove_depth: Length,
}

impl Default for MaterialSettings {
    fn default() -> Self {
        Self {
            carcass_thickness: Length::mm(18.0),
            back_thickness: Length::mm(6.0),
            door_thickness: Length::mm(18.0),
            groove_depth: Length::mm(5.0),
        }
    }
}

/// Door reveals
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct GapSettings {
    /// Gap between a face and the cabinet's outer edge
    pub outer_gap: Length,
    /// Gap between two neighbouring faces
    pub inner_gap: Length,
    /// Edge band thickness, inset at the bottom of every face
    pub edge_band: Length,
}

impl Default for GapSettings {
    fn default() -> Self {
        Self {
            outer_gap: Length::mm(3.0),
            inner_gap: Length::mm(3.0),
            edge_band: Length::mm(1.0),
        }
    }
}

/// Upper row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TopRowSettings {
    pub enabled: bool,
    pub height: Length,
    pub depth: Length,
    /// Height of the cabinet bottoms above the floor
    pub elevation: Length,
    pub box_widths: LengthList,
    pub rack_widths: LengthList,
    /// Racks that sit beside the cooker are never evicted
    pub rack_beside_cooker: bool,
    pub hood_enabled: bool,
    pub hood_width: Length,
    /// How much shorter the hood is than the row
    pub hood_space: Length,
    /// Gola carcass recess
    pub door_override: Length,
    pub shelf_count: u8,
    pub corner_enabled: bool,
    pub corner_width: Length,
    /// Defaults to the row depth plus 25
    #[serde(skip_serializing_if = "Option::is_none")]
    pub corner_blind_width: Option<Length>,
    pub corner_split_threshold: Length,
}

impl Default for TopRowSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            height: Length::mm(720.0),
            depth: Length::mm(350.0),
            elevation: Length::mm(1500.0),
            box_widths: LengthList::from_mm(&[600.0, 600.0]),
            rack_widths: LengthList::from_mm(&[450.0, 300.0]),
            rack_beside_cooker: false,
            hood_enabled: false,
            hood_width: Length::mm(600.0),
            hood_space: Length::mm(150.0),
            door_override: Length::mm(DEFAULT_DOOR_OVERRIDE),
            shelf_count: 1,
            corner_enabled: false,
            corner_width: Length::mm(750.0),
            corner_blind_width: None,
            corner_split_threshold: Length::mm(TOP_CORNER_SPLIT_THRESHOLD),
        }
    }
}

impl TopRowSettings {
    pub fn resolved_corner_blind_width(&self) -> f64 {
        match &self.corner_blind_width {
            Some(width) if width.is_usable() => width.value(),
            _ => self.depth.value() + CORNER_DEPTH_ADJUST,
        }
    }
}

/// Lower row
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BottomRowSettings {
    pub enabled: bool,
    pub plinth_height: Length,
    pub drawer_widths: LengthList,
    pub door_sequence: LengthList,
    /// 2 or 3 drawers per drawer unit
    pub drawer_count: u8,
    /// Loose shelves in door units
    pub shelf_count: u8,
    pub sink_enabled: bool,
    pub sink_width: Length,
    pub cooker_enabled: bool,
    pub cooker_width: Length,
    pub corner_enabled: bool,
    pub corner_width: Length,
    pub blind_width: Length,
    pub corner_split_threshold: Length,
}

impl Default for BottomRowSettings {
    fn default() -> Self {
        Self {
            enabled: true,
            plinth_height: Length::mm(100.0),
            drawer_widths: LengthList::from_mm(&[600.0, 650.0]),
            door_sequence: LengthList::default(),
            drawer_count: 2,
            shelf_count: 1,
            sink_enabled: false,
            sink_width: Length::mm(800.0),
            cooker_enabled: false,
            cooker_width: Length::mm(600.0),
            corner_enabled: false,
            corner_width: Length::mm(1050.0),
            blind_width: Length::mm(625.0),
            corner_split_threshold: Length::mm(BOTTOM_CORNER_SPLIT_THRESHOLD),
        }
    }
}

/// Tall unit
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TallSettings {
    pub enabled: bool,
    pub total_height: Length,
    pub plinth_height: Length,
    pub width: Length,
    pub depth: Length,
    pub carcass_thickness: Length,
    pub shelf_count: u8,
    /// Gap between the two door leaves
    pub door_gap: Length,
    pub side_panel_mode: SidePanelMode,
}

impl Default for TallSettings {
    fn default() -> Self {
        Self {
            enabled: false,
            total_height: Length::mm(2100.0),
            plinth_height: Length::mm(100.0),
            width: Length::mm(450.0),
            depth: Length::mm(600.0),
            carcass_thickness: Length::mm(15.0),
            shelf_count: 3,
            door_gap: Length::mm(10.0),
            side_panel_mode: SidePanelMode::None,
        }
    }
}

/// Rates used by the cost roll-up
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PricingSettings {
    pub sheet_width: Length,
    pub sheet_height: Length,
    /// Usable fraction of a sheet after nesting waste
    pub sheet_yield: f64,
    pub carcass_sheet_cost: f64,
    pub back_sheet_cost: f64,
    pub face_sheet_cost: f64,
    pub hinge_cost: f64,
    pub slide_pair_cost: f64,
    pub handle_cost: f64,
    pub confirmat_cost: f64,
    pub back_screw_cost: f64,
    pub shelf_pin_cost: f64,
    pub edge_band_cost_per_m: f64,
    pub labor_hours_per_cabinet: f64,
    pub labor_rate: f64,
    pub markup: f64,
}

impl Default for PricingSettings {
    fn default() -> Self {
        Self {
            sheet_width: Length::mm(2440.0),
            sheet_height: Length::mm(1220.0),
            sheet_yield: 0.75,
            carcass_sheet_cost: 45.0,
            back_sheet_cost: 15.0,
            face_sheet_cost: 45.0,
            hinge_cost: 2.5,
            slide_pair_cost: 8.0,
            handle_cost: 3.5,
            confirmat_cost: 0.08,
            back_screw_cost: 0.02,
            shelf_pin_cost: 0.25,
            edge_band_cost_per_m: 2.0,
            labor_hours_per_cabinet: 2.0,
            labor_rate: 50.0,
            markup: 1.2,
        }
    }
}

/// Complete project configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CabinetProjectConfig {
    pub wall_length: Length,
    /// Lower row height, plinth included
    pub default_height: Length,
    /// Lower row depth
    pub default_depth: Length,
    pub door_system: DoorSystem,
    pub corner_position: CornerPosition,
    /// Regeneration attempts for a subsystem that produced nothing
    pub max_repair_attempts: u32,
    pub materials: MaterialSettings,
    pub gaps: GapSettings,
    pub top: TopRowSettings,
    pub bottom: BottomRowSettings,
    pub tall: TallSettings,
    pub pricing: PricingSettings,
}

impl Default for CabinetProjectConfig {
    fn default() -> Self {
        Self {
            wall_length: Length::mm(3600.0),
            default_height: Length::mm(870.0),
            default_depth: Length::mm(560.0),
            door_system: DoorSystem::Handled,
            corner_position: CornerPosition::Right,
            max_repair_attempts: 1,
            materials: MaterialSettings::default(),
            gaps: GapSettings::default(),
            top: TopRowSettings::default(),
            bottom: BottomRowSettings::default(),
            tall: TallSettings::default(),
            pricing: PricingSettings::default(),
        }
    }
}

fn fix_length(field: &str, value: &mut Length, fallback: &Length, issues: &mut Vec<ConfigError>) {
    if !value.is_usable() {
        issues.push(ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.raw(),
            fallback: fallback.raw(),
        });
        *value = fallback.clone();
    }
}

fn fix_list(field: &str, list: &mut LengthList, issues: &mut Vec<ConfigError>) {
    let mut kept = Vec::with_capacity(list.0.len());
    for item in list.0.drain(..) {
        if item.is_usable() && item.value() > 0.0 {
            kept.push(item);
        } else {
            issues.push(ConfigError::InvalidValue {
                field: field.to_string(),
                value: item.raw(),
                fallback: "entry removed".to_string(),
            });
        }
    }
    list.0 = kept;
}

fn fix_ratio(field: &str, value: &mut f64, fallback: f64, issues: &mut Vec<ConfigError>) {
    if !value.is_finite() || *value <= 0.0 {
        issues.push(ConfigError::InvalidValue {
            field: field.to_string(),
            value: value.to_string(),
            fallback: fallback.to_string(),
        });
        *value = fallback;
    }
}

impl CabinetProjectConfig {
    /// Create new config with defaults
    pub fn new() -> Self {
        Self::default()
    }

    /// Load config from file (JSON or TOML)
    ///
    /// Values are not sanitized here; call [`Self::sanitize`] before use.
    pub fn load_from_file(path: &Path) -> SettingsResult<Self> {
        let content = std::fs::read_to_string(path)
            .map_err(|e| SettingsError::LoadError(format!("{}: {}", path.display(), e)))?;

        let config: Self = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::from_str(&content)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::from_str(&content)?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        };

        debug!(path = %path.display(), "loaded project config");
        Ok(config)
    }

    /// Save config to file (JSON or TOML)
    pub fn save_to_file(&self, path: &Path) -> SettingsResult<()> {
        let content = if path.extension().is_some_and(|ext| ext == "json") {
            serde_json::to_string_pretty(self)?
        } else if path.extension().is_some_and(|ext| ext == "toml") {
            toml::to_string_pretty(self)?
        } else {
            return Err(ConfigError::UnsupportedFormat(path.display().to_string()).into());
        };

        std::fs::write(path, content)
            .map_err(|e| SettingsError::SaveError(format!("{}: {}", path.display(), e)))?;
        Ok(())
    }

    /// Replace every unusable value with its default
    ///
    /// Returns one [`ConfigError`] per replaced or clamped value. Nothing
    /// here is fatal: the config is always usable afterwards.
    pub fn sanitize(&mut self) -> Vec<ConfigError> {
        let d = Self::default();
        let mut issues = Vec::new();

        fix_length("wall_length", &mut self.wall_length, &d.wall_length, &mut issues);
        fix_length("default_height", &mut self.default_height, &d.default_height, &mut issues);
        fix_length("default_depth", &mut self.default_depth, &d.default_depth, &mut issues);

        let (m, dm) = (&mut self.materials, &d.materials);
        fix_length(
            "materials.carcass_thickness",
            &mut m.carcass_thickness,
            &dm.carcass_thickness,
            &mut issues,
        );
        fix_length(
            "materials.back_thickness",
            &mut m.back_thickness,
            &dm.back_thickness,
            &mut issues,
        );
        fix_length(
            "materials.door_thickness",
            &mut m.door_thickness,
            &dm.door_thickness,
            &mut issues,
        );
        fix_length("materials.groove_depth", &mut m.groove_depth, &dm.groove_depth, &mut issues);
        if m.groove_depth.value() > m.carcass_thickness.value() {
            issues.push(ConfigError::OutOfRange {
                field: "materials.groove_depth".to_string(),
                value: m.groove_depth.value(),
                min: 0.0,
                max: m.carcass_thickness.value(),
            });
            m.groove_depth = m.carcass_thickness.clone();
        }

        let (g, dg) = (&mut self.gaps, &d.gaps);
        fix_length("gaps.outer_gap", &mut g.outer_gap, &dg.outer_gap, &mut issues);
        fix_length("gaps.inner_gap", &mut g.inner_gap, &dg.inner_gap, &mut issues);
        fix_length("gaps.edge_band", &mut g.edge_band, &dg.edge_band, &mut issues);

        let (t, dt) = (&mut self.top, &d.top);
        fix_length("top.height", &mut t.height, &dt.height, &mut issues);
        fix_length("top.depth", &mut t.depth, &dt.depth, &mut issues);
        fix_length("top.elevation", &mut t.elevation, &dt.elevation, &mut issues);
        fix_list("top.box_widths", &mut t.box_widths, &mut issues);
        fix_list("top.rack_widths", &mut t.rack_widths, &mut issues);
        fix_length("top.hood_width", &mut t.hood_width, &dt.hood_width, &mut issues);
        fix_length("top.hood_space", &mut t.hood_space, &dt.hood_space, &mut issues);
        fix_length("top.door_override", &mut t.door_override, &dt.door_override, &mut issues);
        fix_length("top.corner_width", &mut t.corner_width, &dt.corner_width, &mut issues);
        fix_length(
            "top.corner_split_threshold",
            &mut t.corner_split_threshold,
            &dt.corner_split_threshold,
            &mut issues,
        );
        if let Some(blind) = &t.corner_blind_width {
            if !blind.is_usable() {
                issues.push(ConfigError::InvalidValue {
                    field: "top.corner_blind_width".to_string(),
                    value: blind.raw(),
                    fallback: "depth + 25".to_string(),
                });
                t.corner_blind_width = None;
            }
        }
        if t.hood_space.value() > t.height.value() {
            issues.push(ConfigError::OutOfRange {
                field: "top.hood_space".to_string(),
                value: t.hood_space.value(),
                min: 0.0,
                max: t.height.value(),
            });
            t.hood_space = dt.hood_space.clone();
        }

        let (b, db) = (&mut self.bottom, &d.bottom);
        fix_length("bottom.plinth_height", &mut b.plinth_height, &db.plinth_height, &mut issues);
        fix_list("bottom.drawer_widths", &mut b.drawer_widths, &mut issues);
        fix_list("bottom.door_sequence", &mut b.door_sequence, &mut issues);
        fix_length("bottom.sink_width", &mut b.sink_width, &db.sink_width, &mut issues);
        fix_length("bottom.cooker_width", &mut b.cooker_width, &db.cooker_width, &mut issues);
        fix_length("bottom.corner_width", &mut b.corner_width, &db.corner_width, &mut issues);
        fix_length("bottom.blind_width", &mut b.blind_width, &db.blind_width, &mut issues);
        fix_length(
            "bottom.corner_split_threshold",
            &mut b.corner_split_threshold,
            &db.corner_split_threshold,
            &mut issues,
        );
        if !(2..=3).contains(&b.drawer_count) {
            issues.push(ConfigError::OutOfRange {
                field: "bottom.drawer_count".to_string(),
                value: f64::from(b.drawer_count),
                min: 2.0,
                max: 3.0,
            });
            b.drawer_count = b.drawer_count.clamp(2, 3);
        }

        let (tl, dtl) = (&mut self.tall, &d.tall);
        fix_length("tall.total_height", &mut tl.total_height, &dtl.total_height, &mut issues);
        fix_length("tall.plinth_height", &mut tl.plinth_height, &dtl.plinth_height, &mut issues);
        fix_length("tall.width", &mut tl.width, &dtl.width, &mut issues);
        fix_length("tall.depth", &mut tl.depth, &dtl.depth, &mut issues);
        fix_length(
            "tall.carcass_thickness",
            &mut tl.carcass_thickness,
            &dtl.carcass_thickness,
            &mut issues,
        );
        fix_length("tall.door_gap", &mut tl.door_gap, &dtl.door_gap, &mut issues);

        let (p, dp) = (&mut self.pricing, &d.pricing);
        fix_length("pricing.sheet_width", &mut p.sheet_width, &dp.sheet_width, &mut issues);
        fix_length("pricing.sheet_height", &mut p.sheet_height, &dp.sheet_height, &mut issues);
        fix_ratio("pricing.sheet_yield", &mut p.sheet_yield, dp.sheet_yield, &mut issues);
        fix_ratio("pricing.markup", &mut p.markup, dp.markup, &mut issues);
        if p.sheet_yield > 1.0 {
            issues.push(ConfigError::OutOfRange {
                field: "pricing.sheet_yield".to_string(),
                value: p.sheet_yield,
                min: 0.0,
                max: 1.0,
            });
            p.sheet_yield = 1.0;
        }

        if self.max_repair_attempts == 0 {
            issues.push(ConfigError::OutOfRange {
                field: "max_repair_attempts".to_string(),
                value: 0.0,
                min: 1.0,
                max: f64::from(u32::MAX),
            });
            self.max_repair_attempts = 1;
        }

        for issue in &issues {
            warn!("{}", issue);
        }
        issues
    }
}

/// Default location of the user's project file
pub fn default_project_path() -> SettingsResult<PathBuf> {
    dirs::config_dir()
        .map(|dir| dir.join("cabinetkit").join("project.toml"))
        .ok_or_else(|| SettingsError::ConfigDirectory("no platform config directory".to_string()))
}
