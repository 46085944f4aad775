//! Sink and cooker base units, and the side panels of a cooker hood slot

use crate::cabinet::{CabinetConfig, PanelIds};
use crate::carcass::{
    frontal_between_sides, horizontal_between_sides, side_panels, CarcassBuild, CarcassLayout,
    SideRef,
};
use cabinetkit_core::constants::{
    COVER_FRONT_CLEARANCE, COVER_PANEL_THICKNESS, FRONT_RAIL_SETBACK, STRETCHER_HEIGHT,
    TOP_RAIL_HEIGHT,
};
use cabinetkit_core::{MaterialClass, Panel, PanelEdge, PanelPlane, PanelRole, Point3};

/// Open frame for a sink or hob: no back and no shelf, so plumbing and
/// appliances can pass through. Two narrow top rails hold the worktop.
pub(crate) fn utility_carcass(config: &CabinetConfig, ids: &mut PanelIds) -> CarcassBuild {
    let t = config.materials.carcass;
    let height = config.effective_body_height();
    let depth = config.depth;

    let (left, right) = side_panels(config, ids, 0.0, height, depth, MaterialClass::Carcass);
    let layout = CarcassLayout {
        left_side: SideRef {
            id: left.id.clone(),
            x: left.origin.x,
        },
        right_side: SideRef {
            id: right.id.clone(),
            x: right.origin.x,
        },
        shelf_ids: Vec::new(),
        base_z: 0.0,
        body_height: height,
        thickness: t,
    };

    let rail_z = height - TOP_RAIL_HEIGHT;
    let panels = vec![
        left,
        right,
        horizontal_between_sides(config, ids, "Bottom Panel", 0.0, 0.0, depth)
            .with_banding(&[PanelEdge::Front]),
        frontal_between_sides(
            config,
            ids,
            "Front Top Rail",
            FRONT_RAIL_SETBACK,
            rail_z,
            TOP_RAIL_HEIGHT,
        ),
        frontal_between_sides(
            config,
            ids,
            "Rear Top Rail",
            depth - FRONT_RAIL_SETBACK - t,
            rail_z,
            TOP_RAIL_HEIGHT,
        ),
        frontal_between_sides(
            config,
            ids,
            "Rear Stretcher (Bottom)",
            depth - t,
            t,
            STRETCHER_HEIGHT,
        ),
    ];

    CarcassBuild { panels, layout }
}

/// Cover panels either side of a cooker hood
///
/// They sit outside the slot and reach forward past the upper doors.
pub fn hood_side_panels(config: &CabinetConfig, ids: &mut PanelIds) -> Vec<Panel> {
    let forward = config.materials.door + COVER_FRONT_CLEARANCE;
    let depth = config.depth + forward;
    [
        ("Hood Left Side Panel", -COVER_PANEL_THICKNESS),
        ("Hood Right Side Panel", config.width),
    ]
    .into_iter()
    .map(|(name, x)| {
        Panel::new(
            ids.next_id(),
            name,
            PanelPlane::Side,
            Point3::new(x, -forward, 0.0),
            depth,
            config.height,
            COVER_PANEL_THICKNESS,
            MaterialClass::Face,
        )
        .with_role(PanelRole::Cover)
        .with_banding(&[PanelEdge::Front, PanelEdge::Bottom])
    })
    .collect()
}
