//! Plinth cover strips
//!
//! The kick board under the lower row is cut from fixed-length boards:
//! as many full boards as the row needs, then one remainder piece.

use crate::context::ProjectOutput;
use cabinetkit_core::constants::{
    LENGTH_TOLERANCE, PLINTH_BOARD_LENGTH, PLINTH_COVER_HEIGHT, PLINTH_THICKNESS,
};
use cabinetkit_core::{MaterialClass, Panel, PanelEdge, PanelPlane, Point3, Subsystem};

/// Lengths of the plinth pieces needed to cover `run_length`
pub fn plinth_pieces(run_length: f64) -> Vec<f64> {
    if run_length <= LENGTH_TOLERANCE {
        return Vec::new();
    }
    let full = (run_length / PLINTH_BOARD_LENGTH + LENGTH_TOLERANCE).floor() as usize;
    let mut pieces = vec![PLINTH_BOARD_LENGTH; full];
    let remainder = run_length - full as f64 * PLINTH_BOARD_LENGTH;
    if remainder > LENGTH_TOLERANCE {
        pieces.push(remainder);
    }
    pieces
}

/// Plinth strips for the lower row, laid end to end along the floor
pub fn plinth_covers(output: &ProjectOutput) -> Vec<Panel> {
    let bottom: Vec<_> = output.of(Subsystem::Bottom).collect();
    if bottom.is_empty() {
        return Vec::new();
    }
    let run_length: f64 = bottom.iter().map(|c| c.width).sum();
    let start_x = bottom
        .iter()
        .map(|c| c.origin.x)
        .fold(f64::INFINITY, f64::min);
    let front_y = bottom
        .iter()
        .map(|c| c.origin.y)
        .fold(f64::INFINITY, f64::min);

    let mut x = start_x;
    plinth_pieces(run_length)
        .into_iter()
        .enumerate()
        .map(|(i, length)| {
            let panel = Panel::new(
                format!("plinth.{:02}", i + 1),
                format!("Plinth Cover {}", i + 1),
                PanelPlane::Frontal,
                Point3::new(x, front_y, 0.0),
                length,
                PLINTH_COVER_HEIGHT,
                PLINTH_THICKNESS,
                MaterialClass::Plinth,
            )
            .with_banding(&[PanelEdge::Top]);
            x += length;
            panel
        })
        .collect()
}
