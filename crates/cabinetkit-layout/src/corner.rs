//! Corner Cabinet Builder
//!
//! A blind corner cabinet is split into a door zone and a blind zone. The
//! blind zone sits in the corner, behind the neighbouring run, and is
//! covered by a fixed blind panel. A support upright marks the boundary
//! between the two zones and the mid shelf is notched around it.

use crate::cabinet::{BlindSide, CabinetConfig, CabinetParts, PanelIds};
use crate::carcass::CarcassLayout;
use crate::face::{self, door_band, door_faces, face_panel, Leaf};
use cabinetkit_core::constants::{SHELF_NOTCH_TOLERANCE, UPRIGHT_DEPTH};
use cabinetkit_core::{FaceKind, MaterialClass, Notch, NotchKind, Panel, PanelPlane, Point3};
use tracing::debug;

/// Horizontal split of a corner cabinet into doors and blind panel
#[derive(Debug, Clone, PartialEq)]
pub struct CornerLayout {
    /// Width of the opening zone; `door_zone + blind_width == total width`
    pub door_zone: f64,
    pub blind_width: f64,
    pub door_leaves: Vec<Leaf>,
    pub blind_face: Leaf,
    /// Left edge of the support upright
    pub upright_x: f64,
}

impl CornerLayout {
    pub fn is_split(&self) -> bool {
        self.door_leaves.len() > 1
    }
}

/// Lay out doors, blind panel and upright across a corner cabinet
///
/// The layout is computed for a blind zone on the right and mirrored when
/// the blind side is left. The door zone splits into two leaves once it is
/// wider than `split_threshold`.
#[allow(clippy::too_many_arguments)]
pub fn corner_layout(
    total_width: f64,
    blind_width: f64,
    blind_side: BlindSide,
    outer: f64,
    inner: f64,
    split_threshold: f64,
    upright_thickness: f64,
) -> CornerLayout {
    let door_zone = total_width - blind_width;
    let door_actual = door_zone - outer - inner / 2.0;

    let door_leaves = if door_zone > split_threshold {
        let width = (door_actual - inner) / 2.0;
        vec![
            Leaf { x: outer, width },
            Leaf {
                x: outer + width + inner,
                width,
            },
        ]
    } else {
        vec![Leaf {
            x: outer,
            width: door_actual,
        }]
    };
    let blind_face = Leaf {
        x: door_zone + inner / 2.0,
        width: blind_width - outer - inner / 2.0,
    };
    let upright_x = door_zone - upright_thickness / 2.0;

    let layout = CornerLayout {
        door_zone,
        blind_width,
        door_leaves,
        blind_face,
        upright_x,
    };
    match blind_side {
        BlindSide::Right => layout,
        BlindSide::Left => mirror(layout, total_width, upright_thickness),
    }
}

fn mirror(layout: CornerLayout, total_width: f64, upright_thickness: f64) -> CornerLayout {
    let flip = |leaf: Leaf| Leaf {
        x: total_width - leaf.x - leaf.width,
        width: leaf.width,
    };
    let mut door_leaves: Vec<Leaf> = layout.door_leaves.into_iter().map(flip).collect();
    door_leaves.sort_by(|a, b| a.x.total_cmp(&b.x));
    CornerLayout {
        door_leaves,
        blind_face: flip(layout.blind_face),
        upright_x: total_width - layout.upright_x - upright_thickness,
        ..layout
    }
}

/// Add upright, shelf notch, doors and blind panel to a corner carcass
pub fn dress_corner(
    config: &CabinetConfig,
    carcass: &CarcassLayout,
    parts: &mut CabinetParts,
    ids: &mut PanelIds,
) {
    let t = carcass.thickness;
    let blind_side = config.blind_side.unwrap_or(BlindSide::Right);
    let layout = corner_layout(
        config.width,
        config.blind_width,
        blind_side,
        config.gaps.outer,
        config.gaps.inner,
        config.split_threshold,
        t,
    );
    debug!(
        door_zone = layout.door_zone,
        blind = layout.blind_width,
        split = layout.is_split(),
        ?blind_side,
        "corner layout"
    );

    parts.panels.push(Panel::new(
        ids.next_id(),
        "Support Upright",
        PanelPlane::Side,
        Point3::new(layout.upright_x, 0.0, carcass.base_z + t),
        UPRIGHT_DEPTH,
        carcass.body_height - 2.0 * t,
        t,
        MaterialClass::Carcass,
    ));

    let notch_width = t + SHELF_NOTCH_TOLERANCE;
    let notch_x = (layout.upright_x - SHELF_NOTCH_TOLERANCE / 2.0)
        .max(t)
        .min(config.width - t - notch_width);
    for panel in parts
        .panels
        .iter_mut()
        .filter(|p| carcass.shelf_ids.contains(&p.id))
    {
        panel.name = "Mid Shelf".to_string();
        parts.notches.push(Notch {
            panel_id: panel.id.clone(),
            kind: NotchKind::UprightSlot,
            origin: Point3::new(notch_x, 0.0, panel.origin.z),
            width: notch_width,
            depth: UPRIGHT_DEPTH,
            cut_depth: t,
        });
    }

    parts.notches.extend(face::gola_l_notches(config, carcass));

    let band = door_band(config);
    parts
        .faces
        .extend(door_faces(config, ids, &layout.door_leaves, band));
    parts.faces.push(face_panel(
        config,
        ids,
        FaceKind::Blind,
        "Blind Panel",
        layout.blind_face.x,
        band,
        layout.blind_face.width,
    ));
}
