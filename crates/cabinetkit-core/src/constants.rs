//! Shop constants
//!
//! Fixed dimensions of hardware profiles, stock boards and construction
//! details. Values a designer is expected to change live in the project
//! configuration instead.

/// Tolerance for length comparisons (mm)
pub const LENGTH_TOLERANCE: f64 = 1e-6;

// Carcass construction
pub const STRETCHER_HEIGHT: f64 = 100.0;
pub const TOP_RAIL_HEIGHT: f64 = 50.0;
/// Set-back of the front top rail behind the carcass front edge
pub const FRONT_RAIL_SETBACK: f64 = 26.0;
/// Extra depth given to open racks so they stand proud of closed cabinets
pub const OPEN_RACK_DEPTH_ALLOWANCE: f64 = 22.0;
pub const OPEN_RACK_SHELF_COUNT: u8 = 2;

// Faces
/// Openings at least this wide get two door leaves
pub const DOUBLE_DOOR_MIN_WIDTH: f64 = 600.0;
pub const HANDLED_TOP_GAP: f64 = 10.0;
pub const GOLA_TOP_GAP: f64 = 30.0;
pub const GOLA_DRAWER_SPLIT_GAP: f64 = 13.0;
pub const GOLA_THREE_DRAWER_GAP: f64 = 3.0;
pub const GOLA_L_NOTCH_HEIGHT: f64 = 59.0;
pub const GOLA_C_NOTCH_HEIGHT: f64 = 73.5;
pub const GOLA_NOTCH_DEPTH: f64 = 26.0;
pub const DEFAULT_DOOR_OVERRIDE: f64 = 20.0;

// Corner cabinets
pub const BOTTOM_CORNER_SPLIT_THRESHOLD: f64 = 500.0;
pub const TOP_CORNER_SPLIT_THRESHOLD: f64 = 749.0;
/// Top corner blind width is the cabinet depth plus this allowance
pub const CORNER_DEPTH_ADJUST: f64 = 25.0;
pub const UPRIGHT_DEPTH: f64 = 100.0;
/// Clearance added to the upright width when notching the corner shelf
pub const SHELF_NOTCH_TOLERANCE: f64 = 2.0;

// Module filler
pub const UPPER_FILL_WIDTHS: [f64; 4] = [600.0, 450.0, 350.0, 250.0];
pub const UPPER_FILL_MIN: f64 = 150.0;
pub const LOWER_FILL_WIDTHS: [f64; 5] = [900.0, 600.0, 450.0, 300.0, 250.0];
pub const LOWER_FILL_MIN: f64 = 250.0;

// Specialty panels
pub const COVER_PANEL_THICKNESS: f64 = 18.0;
/// Clearance between a door face and a flanking cover panel's front edge
pub const COVER_FRONT_CLEARANCE: f64 = 3.0;
pub const NARROW_COVER_DEPTH: f64 = 100.0;

// Tall unit
pub const TALL_BACK_SHORTENING: f64 = 10.0;
pub const TALL_DOOR_SIDE_CLEARANCE: f64 = 3.0;

// Plinth
pub const PLINTH_COVER_HEIGHT: f64 = 98.0;
pub const PLINTH_BOARD_LENGTH: f64 = 2438.0;
pub const PLINTH_THICKNESS: f64 = 18.0;

// Hardware
pub const HINGE_TALL_DOOR_HEIGHT: f64 = 1200.0;
pub const SLIDE_MIN_LENGTH: f64 = 250.0;
pub const SLIDE_MAX_LENGTH: f64 = 600.0;
pub const SLIDE_DEPTH_RATIO: f64 = 0.9;
pub const CONFIRMAT_PER_CORNER: u32 = 4;
pub const BACK_SCREW_SPACING: f64 = 150.0;
pub const SHELF_PINS_PER_SHELF: u32 = 4;
