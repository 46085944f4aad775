//! Face Partitioner
//!
//! Turns the front opening of a carcass into door leaves or a drawer
//! stack, and cuts the finger-pull notches of the handleless system.
//! Faces sit in front of the carcass, at `y = -door_thickness`.

use crate::cabinet::{CabinetConfig, CabinetKind, PanelIds};
use crate::carcass::CarcassLayout;
use cabinetkit_core::constants::{DOUBLE_DOOR_MIN_WIDTH, TALL_DOOR_SIDE_CLEARANCE};
use cabinetkit_core::{
    Face, FaceKind, MaterialClass, Notch, NotchKind, Panel, PanelEdge, PanelPlane, Point3, RowKind,
};

/// Horizontal position of one door leaf
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Leaf {
    pub x: f64,
    pub width: f64,
}

/// Vertical position of one face
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Band {
    pub z: f64,
    pub height: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct FaceLayout {
    pub faces: Vec<Face>,
    pub notches: Vec<Notch>,
    /// Height of the drawer split line, for drawer cabinets
    pub split_line: Option<f64>,
}

/// Whether an opening is wide enough for a pair of doors
pub fn is_double(opening_width: f64) -> bool {
    opening_width >= DOUBLE_DOOR_MIN_WIDTH
}

/// Door leaves across an opening of `opening_width`
///
/// A single leaf is inset by `outer` on each side. A pair shares the
/// remaining width equally with `inner` between the leaves.
pub fn leaves(opening_width: f64, outer: f64, inner: f64, double: bool) -> Vec<Leaf> {
    let usable = opening_width - 2.0 * outer;
    if double {
        let width = (usable - inner) / 2.0;
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
            width: usable,
        }]
    }
}

/// Drawer fronts from the bottom up, and the split line
///
/// The first split sits halfway between the edge band and the body top.
/// Fronts stop `split_gap` short of it on both sides. With three drawers
/// the region above the split is shared by two fronts `three_gap` apart.
pub fn drawer_stack(
    count: u8,
    edge_band: f64,
    body_height: f64,
    top_gap: f64,
    split_gap: f64,
    three_gap: f64,
) -> (Vec<Band>, f64) {
    let split = (body_height + edge_band) / 2.0;
    let top = body_height - top_gap;

    let mut bands = vec![Band {
        z: edge_band,
        height: split - split_gap - edge_band,
    }];
    let upper_start = split + split_gap;
    if count >= 3 {
        let height = (top - upper_start - three_gap) / 2.0;
        bands.push(Band {
            z: upper_start,
            height,
        });
        bands.push(Band {
            z: upper_start + height + three_gap,
            height,
        });
    } else {
        bands.push(Band {
            z: upper_start,
            height: top - upper_start,
        });
    }
    (bands, split)
}

/// Handle-edge L notches on both sides of a handleless carcass
///
/// Lower cabinets are opened from the top front corner of the sides, upper
/// cabinets from the bottom front corner.
pub(crate) fn gola_l_notches(config: &CabinetConfig, layout: &CarcassLayout) -> Vec<Notch> {
    let Some(profile) = config.door_system.l_notch else {
        return Vec::new();
    };
    let z = match config.row {
        RowKind::Lower => layout.base_z + layout.body_height - profile.height,
        RowKind::Upper => layout.base_z,
    };
    [&layout.left_side, &layout.right_side]
        .into_iter()
        .map(|side| Notch {
            panel_id: side.id.clone(),
            kind: NotchKind::GolaL,
            origin: Point3::new(side.x, 0.0, z),
            width: profile.depth,
            depth: profile.height,
            cut_depth: layout.thickness,
        })
        .collect()
}

/// C notches centred on a drawer split line
fn gola_c_notches(config: &CabinetConfig, layout: &CarcassLayout, split: f64) -> Vec<Notch> {
    let Some(profile) = config.door_system.c_notch else {
        return Vec::new();
    };
    let z = layout.base_z + split - profile.height / 2.0;
    [&layout.left_side, &layout.right_side]
        .into_iter()
        .map(|side| Notch {
            panel_id: side.id.clone(),
            kind: NotchKind::GolaC,
            origin: Point3::new(side.x, 0.0, z),
            width: profile.depth,
            depth: profile.height,
            cut_depth: layout.thickness,
        })
        .collect()
}

/// A face board hung in front of the carcass
pub(crate) fn face_panel(
    config: &CabinetConfig,
    ids: &mut PanelIds,
    kind: FaceKind,
    name: &str,
    x: f64,
    band: Band,
    width: f64,
) -> Face {
    let t = config.materials.door;
    let panel = Panel::new(
        ids.next_id(),
        name,
        PanelPlane::Frontal,
        Point3::new(x, -t, band.z),
        width,
        band.height,
        t,
        MaterialClass::Face,
    )
    .with_banding(&[
        PanelEdge::Top,
        PanelEdge::Bottom,
        PanelEdge::Left,
        PanelEdge::Right,
    ]);
    Face { kind, panel }
}

/// Names door leaves: "Door" alone, "Left Door" and "Right Door" as a pair
pub(crate) fn door_faces(
    config: &CabinetConfig,
    ids: &mut PanelIds,
    leaves: &[Leaf],
    band: Band,
) -> Vec<Face> {
    let pair = leaves.len() > 1;
    leaves
        .iter()
        .enumerate()
        .map(|(i, leaf)| {
            let name = match (pair, i) {
                (false, _) => "Door",
                (true, 0) => "Left Door",
                (true, _) => "Right Door",
            };
            face_panel(config, ids, FaceKind::Door, name, leaf.x, band, leaf.width)
        })
        .collect()
}

/// Vertical extent of the doors of an ordinary cabinet
///
/// Upper doors cover the nominal height, including any carcass recess.
/// Lower doors start above the edge band and stop `top_gap` below the body top.
pub fn door_band(config: &CabinetConfig) -> Band {
    match config.row {
        RowKind::Upper => Band {
            z: 0.0,
            height: config.height,
        },
        RowKind::Lower => {
            let eb = config.gaps.edge_band;
            Band {
                z: eb,
                height: config.effective_body_height() - config.door_system.top_gap - eb,
            }
        }
    }
}

/// Faces and notches for a face-bearing, non-corner cabinet
pub fn partition(config: &CabinetConfig, layout: &CarcassLayout, ids: &mut PanelIds) -> FaceLayout {
    if config.kind == CabinetKind::Tall {
        return tall_doors(config, ids);
    }

    let mut result = FaceLayout {
        notches: gola_l_notches(config, layout),
        ..FaceLayout::default()
    };

    if config.drawer_count >= 2 {
        let (bands, split) = drawer_stack(
            config.drawer_count,
            config.gaps.edge_band,
            layout.body_height,
            config.door_system.top_gap,
            config.door_system.drawer_split_gap,
            config.door_system.three_drawer_gap,
        );
        let outer = config.gaps.outer;
        let width = config.width - 2.0 * outer;
        let names: &[&str] = if bands.len() == 3 {
            &["Bottom Drawer Front", "Middle Drawer Front", "Top Drawer Front"]
        } else {
            &["Bottom Drawer Front", "Top Drawer Front"]
        };
        for (band, name) in bands.into_iter().zip(names) {
            let band = Band {
                z: layout.base_z + band.z,
                ..band
            };
            result
                .faces
                .push(face_panel(config, ids, FaceKind::Drawer, name, outer, band, width));
        }
        result.notches.extend(gola_c_notches(config, layout, split));
        result.split_line = Some(layout.base_z + split);
    } else {
        let leaves = leaves(
            config.width,
            config.gaps.outer,
            config.gaps.inner,
            is_double(config.width),
        );
        result.faces = door_faces(config, ids, &leaves, door_band(config));
    }

    result
}

/// Full-height doors of a tall unit; the pair gap is the unit's own door gap
fn tall_doors(config: &CabinetConfig, ids: &mut PanelIds) -> FaceLayout {
    let face_width = config.width - 2.0 * TALL_DOOR_SIDE_CLEARANCE;
    let leaves = leaves(
        config.width,
        TALL_DOOR_SIDE_CLEARANCE,
        config.gaps.inner,
        is_double(face_width),
    );
    let band = Band {
        z: 0.0,
        height: config.height,
    };
    FaceLayout {
        faces: door_faces(config, ids, &leaves, band),
        ..FaceLayout::default()
    }
}
