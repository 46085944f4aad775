//! Carcass Builder
//!
//! Decomposes a cabinet envelope into its structural boards. The sides
//! run the full body height; top, bottom, shelves and stretchers sit
//! between them. The back seats in a groove, so its rectangle grows by
//! the groove depth on every edge.

use crate::cabinet::{CabinetConfig, CabinetKind, PanelIds, SpecialtyKind};
use crate::specialty;
use cabinetkit_core::constants::{
    FRONT_RAIL_SETBACK, OPEN_RACK_SHELF_COUNT, STRETCHER_HEIGHT, TALL_BACK_SHORTENING,
};
use cabinetkit_core::{MaterialClass, Panel, PanelEdge, PanelPlane, PanelRole, Point3, RowKind};

/// One side panel, as seen by the face and corner builders
#[derive(Debug, Clone, PartialEq)]
pub struct SideRef {
    pub id: String,
    pub x: f64,
}

/// Where the carcass put things that later builders attach to
#[derive(Debug, Clone, PartialEq)]
pub struct CarcassLayout {
    pub left_side: SideRef,
    pub right_side: SideRef,
    pub shelf_ids: Vec<String>,
    /// Bottom of the side panels
    pub base_z: f64,
    /// Height of the side panels
    pub body_height: f64,
    pub thickness: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CarcassBuild {
    pub panels: Vec<Panel>,
    pub layout: CarcassLayout,
}

enum TopClosure {
    /// A full top panel (wall and tall units)
    Panel,
    /// Front and rear top stretchers under a worktop
    Rails,
}

pub fn build_carcass(config: &CabinetConfig, ids: &mut PanelIds) -> CarcassBuild {
    if config.open_rack {
        return open_rack(config, ids);
    }

    match config.kind {
        CabinetKind::Specialty(SpecialtyKind::Sink | SpecialtyKind::Cooker) => {
            specialty::utility_carcass(config, ids)
        }
        CabinetKind::Base => {
            let shelves = if config.drawer_count > 0 {
                0
            } else {
                config.shelf_count
            };
            closed(config, ids, TopClosure::Rails, shelves, 0.0)
        }
        CabinetKind::Corner => {
            let closure = match config.row {
                RowKind::Upper => TopClosure::Panel,
                RowKind::Lower => TopClosure::Rails,
            };
            closed(config, ids, closure, 1, 0.0)
        }
        CabinetKind::Tall => closed(
            config,
            ids,
            TopClosure::Panel,
            config.shelf_count,
            TALL_BACK_SHORTENING,
        ),
        CabinetKind::Wall | CabinetKind::Specialty(SpecialtyKind::HoodSides) => {
            closed(config, ids, TopClosure::Panel, config.shelf_count, 0.0)
        }
    }
}

/// Left and right side panels
pub(crate) fn side_panels(
    config: &CabinetConfig,
    ids: &mut PanelIds,
    base_z: f64,
    height: f64,
    depth: f64,
    material: MaterialClass,
) -> (Panel, Panel) {
    let t = config.panel_thickness();
    let left = Panel::new(
        ids.next_id(),
        "Left Side",
        PanelPlane::Side,
        Point3::new(0.0, 0.0, base_z),
        depth,
        height,
        t,
        material,
    )
    .with_role(PanelRole::Structure)
    .with_banding(&[PanelEdge::Front]);
    let right = Panel::new(
        ids.next_id(),
        "Right Side",
        PanelPlane::Side,
        Point3::new(config.width - t, 0.0, base_z),
        depth,
        height,
        t,
        material,
    )
    .with_role(PanelRole::Structure)
    .with_banding(&[PanelEdge::Front]);
    (left, right)
}

/// A horizontal board spanning the interior width
pub(crate) fn horizontal_between_sides(
    config: &CabinetConfig,
    ids: &mut PanelIds,
    name: &str,
    y: f64,
    z: f64,
    depth: f64,
) -> Panel {
    let t = config.panel_thickness();
    Panel::new(
        ids.next_id(),
        name,
        PanelPlane::Horizontal,
        Point3::new(t, y, z),
        config.width - 2.0 * t,
        depth,
        t,
        MaterialClass::Carcass,
    )
}

/// A vertical strip facing the room, spanning the interior width
pub(crate) fn frontal_between_sides(
    config: &CabinetConfig,
    ids: &mut PanelIds,
    name: &str,
    y: f64,
    z: f64,
    height: f64,
) -> Panel {
    let t = config.panel_thickness();
    Panel::new(
        ids.next_id(),
        name,
        PanelPlane::Frontal,
        Point3::new(t, y, z),
        config.width - 2.0 * t,
        height,
        t,
        MaterialClass::Carcass,
    )
}

/// Back panel seated in the groove of sides, top and bottom
fn grooved_back(
    config: &CabinetConfig,
    ids: &mut PanelIds,
    base_z: f64,
    body: f64,
    shortening: f64,
) -> Panel {
    let t = config.materials.carcass;
    let g = config.materials.groove_depth;
    let bt = config.materials.back;
    Panel::new(
        ids.next_id(),
        "Back Panel",
        PanelPlane::Frontal,
        Point3::new(t - g, config.depth - t - bt, base_z + t - g),
        config.width - 2.0 * t + 2.0 * g,
        body - 2.0 * t + 2.0 * g - shortening,
        bt,
        MaterialClass::Back,
    )
}

/// The two wall-side stretchers, at the bottom and top of the back
fn rear_stretchers(
    config: &CabinetConfig,
    ids: &mut PanelIds,
    base_z: f64,
    body: f64,
) -> [Panel; 2] {
    let t = config.materials.carcass;
    let y = config.depth - t;
    [
        frontal_between_sides(
            config,
            ids,
            "Rear Stretcher (Bottom)",
            y,
            base_z + t,
            STRETCHER_HEIGHT,
        ),
        frontal_between_sides(
            config,
            ids,
            "Rear Stretcher (Top)",
            y,
            base_z + body - t - STRETCHER_HEIGHT,
            STRETCHER_HEIGHT,
        ),
    ]
}

/// Evenly spaced loose shelves
///
/// Shelf `i` of `count` sits at `available_height * i / (count + 1)` above
/// the bottom board, where the available height excludes top and bottom.
pub(crate) fn shelves(
    config: &CabinetConfig,
    ids: &mut PanelIds,
    base_z: f64,
    body: f64,
    count: u8,
    depth: f64,
) -> Vec<Panel> {
    let t = config.panel_thickness();
    let available = body - 2.0 * t;
    (1..=count)
        .map(|i| {
            let name = if count == 1 {
                "Shelf".to_string()
            } else {
                format!("Shelf {}", i)
            };
            let z = base_z + t + available * f64::from(i) / f64::from(count + 1);
            horizontal_between_sides(config, ids, &name, 0.0, z, depth)
                .with_role(PanelRole::Shelf)
                .with_banding(&[PanelEdge::Front])
        })
        .collect()
}

fn closed(
    config: &CabinetConfig,
    ids: &mut PanelIds,
    closure: TopClosure,
    shelf_count: u8,
    back_shortening: f64,
) -> CarcassBuild {
    let t = config.materials.carcass;
    let base_z = config.carcass_offset();
    let body = config.effective_body_height();
    let depth = config.depth;

    let (left, right) = side_panels(config, ids, base_z, body, depth, MaterialClass::Carcass);
    let layout_sides = (
        SideRef {
            id: left.id.clone(),
            x: left.origin.x,
        },
        SideRef {
            id: right.id.clone(),
            x: right.origin.x,
        },
    );
    let mut panels = vec![left, right];

    panels.push(
        horizontal_between_sides(config, ids, "Bottom Panel", 0.0, base_z, depth)
            .with_banding(&[PanelEdge::Front]),
    );
    match closure {
        TopClosure::Panel => panels.push(
            horizontal_between_sides(config, ids, "Top Panel", 0.0, base_z + body - t, depth)
                .with_banding(&[PanelEdge::Front]),
        ),
        TopClosure::Rails => {
            let z = base_z + body - t;
            panels.push(horizontal_between_sides(
                config,
                ids,
                "Front Top Stretcher",
                FRONT_RAIL_SETBACK,
                z,
                STRETCHER_HEIGHT,
            ));
            panels.push(horizontal_between_sides(
                config,
                ids,
                "Rear Top Stretcher",
                depth - t - config.materials.back - STRETCHER_HEIGHT,
                z,
                STRETCHER_HEIGHT,
            ));
        }
    }

    panels.push(grooved_back(config, ids, base_z, body, back_shortening));
    panels.extend(rear_stretchers(config, ids, base_z, body));

    let shelf_depth = depth - config.materials.back - t;
    let shelf_panels = shelves(config, ids, base_z, body, shelf_count, shelf_depth);
    let shelf_ids = shelf_panels.iter().map(|p| p.id.clone()).collect();
    panels.extend(shelf_panels);

    CarcassBuild {
        panels,
        layout: CarcassLayout {
            left_side: layout_sides.0,
            right_side: layout_sides.1,
            shelf_ids,
            base_z,
            body_height: body,
            thickness: t,
        },
    }
}

/// Open rack: door board throughout, flush back, two shelves, no stretchers
fn open_rack(config: &CabinetConfig, ids: &mut PanelIds) -> CarcassBuild {
    let t = config.panel_thickness();
    let depth = config.effective_depth();
    let height = config.height;

    let (left, right) = side_panels(config, ids, 0.0, height, depth, MaterialClass::Face);
    let left_side = SideRef {
        id: left.id.clone(),
        x: left.origin.x,
    };
    let right_side = SideRef {
        id: right.id.clone(),
        x: right.origin.x,
    };

    let face_board = |panel: Panel| Panel {
        material: MaterialClass::Face,
        ..panel
    };

    let mut panels = vec![left, right];
    panels.push(face_board(
        horizontal_between_sides(config, ids, "Bottom Panel", 0.0, 0.0, depth)
            .with_banding(&[PanelEdge::Front]),
    ));
    panels.push(face_board(
        horizontal_between_sides(config, ids, "Top Panel", 0.0, height - t, depth)
            .with_banding(&[PanelEdge::Front]),
    ));
    panels.push(face_board(
        frontal_between_sides(config, ids, "Back Panel", depth - t, t, height - 2.0 * t),
    ));

    let shelf_panels: Vec<Panel> =
        shelves(config, ids, 0.0, height, OPEN_RACK_SHELF_COUNT, depth - t)
            .into_iter()
            .map(face_board)
            .collect();
    let shelf_ids = shelf_panels.iter().map(|p| p.id.clone()).collect();
    panels.extend(shelf_panels);

    CarcassBuild {
        panels,
        layout: CarcassLayout {
            left_side,
            right_side,
            shelf_ids,
            base_z: 0.0,
            body_height: height,
            thickness: t,
        },
    }
}
