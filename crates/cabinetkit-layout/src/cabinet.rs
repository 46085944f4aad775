//! Cabinet configuration and assembled instances

use crate::door_system::DoorSystemParams;
use crate::{carcass, corner, face, specialty, tall};
use cabinetkit_core::constants::OPEN_RACK_DEPTH_ALLOWANCE;
use cabinetkit_core::{
    format_length, Face, LayoutError, LayoutResult, Notch, Panel, Point3, RowKind, Subsystem,
};
use cabinetkit_settings::SidePanelMode;
use serde::{Deserialize, Serialize};
use std::fmt;
use tracing::debug;

/// What a slot on a wall run is used for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ModuleRole {
    Hood,
    Box,
    Rack,
    Filler,
    Sink,
    Cooker,
    DrawerUnit,
    DoorUnit,
    Corner,
    Tall,
}

impl fmt::Display for ModuleRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hood => write!(f, "Cooker Hood"),
            Self::Box => write!(f, "Cabinet"),
            Self::Rack => write!(f, "Open Rack"),
            Self::Filler => write!(f, "Filler"),
            Self::Sink => write!(f, "Sink Unit"),
            Self::Cooker => write!(f, "Cooker Unit"),
            Self::DrawerUnit => write!(f, "Drawer Unit"),
            Self::DoorUnit => write!(f, "Door Unit"),
            Self::Corner => write!(f, "Corner Cabinet"),
            Self::Tall => write!(f, "Tall Unit"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SpecialtyKind {
    Sink,
    Cooker,
    /// Slot under a cooker hood, dressed with two side panels
    HoodSides,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CabinetKind {
    Base,
    Wall,
    Tall,
    Corner,
    Specialty(SpecialtyKind),
}

/// Side of a corner cabinet hidden behind the blind panel
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlindSide {
    Left,
    Right,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MaterialSpec {
    pub carcass: f64,
    pub back: f64,
    pub door: f64,
    pub groove_depth: f64,
}

impl Default for MaterialSpec {
    fn default() -> Self {
        Self {
            carcass: 18.0,
            back: 6.0,
            door: 18.0,
            groove_depth: 5.0,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GapSpec {
    pub outer: f64,
    pub inner: f64,
    pub edge_band: f64,
}

impl Default for GapSpec {
    fn default() -> Self {
        Self {
            outer: 3.0,
            inner: 3.0,
            edge_band: 1.0,
        }
    }
}

/// Everything needed to build one cabinet
///
/// `height` is the body height: the plinth of a floor unit is not included.
#[derive(Debug, Clone, PartialEq)]
pub struct CabinetConfig {
    pub kind: CabinetKind,
    pub row: RowKind,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    pub materials: MaterialSpec,
    pub gaps: GapSpec,
    pub door_system: DoorSystemParams,
    /// 0 for door cabinets, 2 or 3 for drawer cabinets
    pub drawer_count: u8,
    pub shelf_count: u8,
    pub open_rack: bool,
    pub blind_side: Option<BlindSide>,
    pub blind_width: f64,
    /// Door zone width above which a corner door splits in two
    pub split_threshold: f64,
    pub side_panel_mode: SidePanelMode,
    /// Floor clearance below the body, used by full-height cover panels
    pub plinth_height: f64,
}

impl CabinetConfig {
    pub fn new(kind: CabinetKind, row: RowKind, width: f64, height: f64, depth: f64) -> Self {
        Self {
            kind,
            row,
            width,
            height,
            depth,
            materials: MaterialSpec::default(),
            gaps: GapSpec::default(),
            door_system: DoorSystemParams::default(),
            drawer_count: 0,
            shelf_count: 1,
            open_rack: false,
            blind_side: None,
            blind_width: 0.0,
            split_threshold: 0.0,
            side_panel_mode: SidePanelMode::None,
            plinth_height: 0.0,
        }
    }

    /// Carcass recess; open racks are never recessed
    pub fn carcass_offset(&self) -> f64 {
        if self.open_rack {
            0.0
        } else {
            self.door_system.carcass_offset(self.row)
        }
    }

    pub fn effective_body_height(&self) -> f64 {
        self.height - self.carcass_offset()
    }

    /// Depth including the open-rack allowance
    pub fn effective_depth(&self) -> f64 {
        if self.open_rack {
            self.depth + OPEN_RACK_DEPTH_ALLOWANCE
        } else {
            self.depth
        }
    }

    /// Board used for the carcass; open racks use door board throughout
    pub fn panel_thickness(&self) -> f64 {
        if self.open_rack {
            self.materials.door
        } else {
            self.materials.carcass
        }
    }

    pub fn has_faces(&self) -> bool {
        !self.open_rack && self.kind != CabinetKind::Specialty(SpecialtyKind::HoodSides)
    }

    pub fn validate(&self) -> LayoutResult<()> {
        let t = self.panel_thickness();
        if !(self.width.is_finite() && self.height.is_finite() && self.depth.is_finite()) {
            return Err(LayoutError::InvalidCabinet(
                "dimensions must be finite".to_string(),
            ));
        }
        if self.kind != CabinetKind::Specialty(SpecialtyKind::HoodSides) && self.width <= 2.0 * t {
            return Err(LayoutError::InvalidCabinet(format!(
                "width {} leaves no interior between {} mm sides",
                format_length(self.width),
                t
            )));
        }
        if self.effective_body_height() <= 2.0 * t || self.depth <= t {
            return Err(LayoutError::InvalidCabinet(format!(
                "body {} x {} is too small for {} mm board",
                format_length(self.effective_body_height()),
                format_length(self.depth),
                t
            )));
        }
        let blind_inside = self.blind_width > 0.0 && self.blind_width < self.width;
        if self.kind == CabinetKind::Corner && !blind_inside {
            return Err(LayoutError::InvalidCabinet(format!(
                "blind width {} must be inside corner width {}",
                format_length(self.blind_width),
                format_length(self.width)
            )));
        }
        Ok(())
    }
}

/// Hands out panel ids of the form `bottom-3.07`
#[derive(Debug, Clone)]
pub struct PanelIds {
    prefix: String,
    next: u32,
}

impl PanelIds {
    pub fn new(subsystem: Subsystem, index: u32) -> Self {
        Self {
            prefix: format!("{}-{}", subsystem, index),
            next: 0,
        }
    }

    pub fn next_id(&mut self) -> String {
        self.next += 1;
        format!("{}.{:02}", self.prefix, self.next)
    }
}

/// Boards and cuts produced for one cabinet, in cabinet-local coordinates
#[derive(Debug, Clone, Default, PartialEq)]
pub struct CabinetParts {
    pub panels: Vec<Panel>,
    pub faces: Vec<Face>,
    pub notches: Vec<Notch>,
}

/// A built cabinet. Created once and never changed afterwards.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CabinetInstance {
    pub subsystem: Subsystem,
    /// Position in the subsystem's display numbering, from 1
    pub index: u32,
    pub name: String,
    pub role: ModuleRole,
    pub kind: CabinetKind,
    pub width: f64,
    pub height: f64,
    pub depth: f64,
    /// Absolute position of the cabinet-local origin
    pub origin: Point3,
    pub panels: Vec<Panel>,
    pub faces: Vec<Face>,
    pub notches: Vec<Notch>,
}

impl CabinetInstance {
    /// Carcass panels followed by face panels
    pub fn all_panels(&self) -> impl Iterator<Item = &Panel> {
        self.panels
            .iter()
            .chain(self.faces.iter().map(|face| &face.panel))
    }

    /// Every panel moved into absolute coordinates
    pub fn absolute_panels(&self) -> Vec<Panel> {
        self.all_panels()
            .map(|panel| panel.translated(self.origin))
            .collect()
    }

    pub fn panel_count(&self) -> usize {
        self.panels.len() + self.faces.len()
    }

    /// Whether the instance is a real cabinet rather than dressing panels
    pub fn is_cabinet(&self) -> bool {
        self.kind != CabinetKind::Specialty(SpecialtyKind::HoodSides)
    }
}

pub fn display_name(subsystem: Subsystem, index: u32, role: ModuleRole, width: f64) -> String {
    if role == ModuleRole::Tall {
        format!("{} {} ({})", subsystem.cabinet_label(), index, format_length(width))
    } else {
        format!(
            "{} {} - {} ({})",
            subsystem.cabinet_label(),
            index,
            role,
            format_length(width)
        )
    }
}

/// Build every panel, face and notch of one cabinet
pub fn build_parts(config: &CabinetConfig, ids: &mut PanelIds) -> LayoutResult<CabinetParts> {
    config.validate()?;

    if config.kind == CabinetKind::Specialty(SpecialtyKind::HoodSides) {
        return Ok(CabinetParts {
            panels: specialty::hood_side_panels(config, ids),
            ..CabinetParts::default()
        });
    }

    let carcass = carcass::build_carcass(config, ids);
    let mut parts = CabinetParts {
        panels: carcass.panels,
        ..CabinetParts::default()
    };

    if config.kind == CabinetKind::Corner {
        corner::dress_corner(config, &carcass.layout, &mut parts, ids);
    } else if config.has_faces() {
        let layout = face::partition(config, &carcass.layout, ids);
        parts.faces = layout.faces;
        parts.notches.extend(layout.notches);
    }

    if config.kind == CabinetKind::Tall {
        parts.panels.extend(tall::cover_panels(config, ids));
    }

    debug!(
        kind = ?config.kind,
        width = config.width,
        panels = parts.panels.len(),
        faces = parts.faces.len(),
        notches = parts.notches.len(),
        "built cabinet parts"
    );
    Ok(parts)
}

/// Build a cabinet and place it at `origin`
pub fn assemble(
    subsystem: Subsystem,
    index: u32,
    role: ModuleRole,
    config: &CabinetConfig,
    origin: Point3,
) -> LayoutResult<CabinetInstance> {
    let mut ids = PanelIds::new(subsystem, index);
    let parts = build_parts(config, &mut ids)?;
    Ok(CabinetInstance {
        subsystem,
        index,
        name: display_name(subsystem, index, role, config.width),
        role,
        kind: config.kind,
        width: config.width,
        height: config.height,
        depth: config.effective_depth(),
        origin,
        panels: parts.panels,
        faces: parts.faces,
        notches: parts.notches,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::door_system::DoorSystem;

    #[test]
    fn test_gola_offset_only_on_closed_upper_cabinets() {
        let mut config = CabinetConfig::new(CabinetKind::Wall, RowKind::Upper, 600.0, 720.0, 350.0);
        config.door_system = DoorSystemParams::new(DoorSystem::Gola, 3.0, 20.0);
        assert_eq!(config.carcass_offset(), 20.0);
        assert_eq!(config.effective_body_height(), 700.0);

        config.open_rack = true;
        assert_eq!(config.carcass_offset(), 0.0);
        assert_eq!(config.effective_depth(), 372.0);
    }

    #[test]
    fn test_validate_rejects_degenerate_cabinets() {
        let config = CabinetConfig::new(CabinetKind::Base, RowKind::Lower, 30.0, 770.0, 560.0);
        assert!(matches!(config.validate(), Err(LayoutError::InvalidCabinet(_))));

        let mut corner =
            CabinetConfig::new(CabinetKind::Corner, RowKind::Lower, 900.0, 770.0, 560.0);
        corner.blind_width = 900.0;
        assert!(corner.validate().is_err());
        corner.blind_width = 393.0;
        assert!(corner.validate().is_ok());
    }

    #[test]
    fn test_display_names() {
        assert_eq!(
            display_name(Subsystem::Bottom, 2, ModuleRole::DrawerUnit, 600.0),
            "Bottom Box 2 - Drawer Unit (600 mm)"
        );
        assert_eq!(
            display_name(Subsystem::Tall, 1, ModuleRole::Tall, 450.0),
            "Tall Unit 1 (450 mm)"
        );
    }

    #[test]
    fn test_panel_ids_are_sequential() {
        let mut ids = PanelIds::new(Subsystem::Top, 3);
        assert_eq!(ids.next_id(), "top-3.01");
        assert_eq!(ids.next_id(), "top-3.02");
    }
}
