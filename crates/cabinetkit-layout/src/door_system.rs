//! Door system parameter table
//!
//! The door system is chosen once per project. Everything that differs
//! between Handled and Gola fronts is resolved here, so builders read
//! numbers from one table instead of branching on the system themselves.

use cabinetkit_core::constants::{
    GOLA_C_NOTCH_HEIGHT, GOLA_DRAWER_SPLIT_GAP, GOLA_L_NOTCH_HEIGHT, GOLA_NOTCH_DEPTH,
    GOLA_THREE_DRAWER_GAP, GOLA_TOP_GAP, HANDLED_TOP_GAP,
};
use cabinetkit_core::RowKind;
pub use cabinetkit_settings::DoorSystem;

/// Size of a finger-pull notch cut into a side panel
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct NotchProfile {
    /// Along the panel height
    pub height: f64,
    /// Back from the front edge
    pub depth: f64,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DoorSystemParams {
    pub system: DoorSystem,
    /// Recess applied to upper-row carcasses
    pub door_override: f64,
    /// Space left above the faces of lower-row cabinets
    pub top_gap: f64,
    /// Offset of the first and second drawer fronts from the split line
    pub drawer_split_gap: f64,
    /// Gap between the two upper fronts of a three-drawer stack
    pub three_drawer_gap: f64,
    pub l_notch: Option<NotchProfile>,
    pub c_notch: Option<NotchProfile>,
}

impl DoorSystemParams {
    pub fn new(system: DoorSystem, inner_gap: f64, door_override: f64) -> Self {
        match system {
            DoorSystem::Handled => Self {
                system,
                door_override: 0.0,
                top_gap: HANDLED_TOP_GAP,
                drawer_split_gap: inner_gap / 2.0,
                three_drawer_gap: inner_gap,
                l_notch: None,
                c_notch: None,
            },
            DoorSystem::Gola => Self {
                system,
                door_override,
                top_gap: GOLA_TOP_GAP,
                drawer_split_gap: GOLA_DRAWER_SPLIT_GAP,
                three_drawer_gap: GOLA_THREE_DRAWER_GAP,
                l_notch: Some(NotchProfile {
                    height: GOLA_L_NOTCH_HEIGHT,
                    depth: GOLA_NOTCH_DEPTH,
                }),
                c_notch: Some(NotchProfile {
                    height: GOLA_C_NOTCH_HEIGHT,
                    depth: GOLA_NOTCH_DEPTH,
                }),
            },
        }
    }

    /// How far the carcass is raised inside its nominal envelope
    pub fn carcass_offset(&self, row: RowKind) -> f64 {
        match row {
            RowKind::Upper => self.door_override,
            RowKind::Lower => 0.0,
        }
    }

    pub fn has_handles(&self) -> bool {
        self.system == DoorSystem::Handled
    }
}

impl Default for DoorSystemParams {
    fn default() -> Self {
        Self::new(DoorSystem::Handled, 3.0, 0.0)
    }
}
