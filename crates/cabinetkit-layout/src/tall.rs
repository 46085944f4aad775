//! Tall unit cover panels
//!
//! The tall unit body is an ordinary closed carcass standing on the plinth.
//! Cover panels hide its sides from the floor up, so they start below the
//! body origin by the plinth height.

use crate::cabinet::{CabinetConfig, PanelIds};
use cabinetkit_core::constants::{COVER_FRONT_CLEARANCE, NARROW_COVER_DEPTH};
use cabinetkit_core::{MaterialClass, Panel, PanelEdge, PanelPlane, PanelRole, Point3};
use cabinetkit_settings::SidePanelMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CoverWidth {
    Full,
    Narrow,
}

/// Which covers each side gets
fn covers(mode: SidePanelMode) -> (Option<CoverWidth>, Option<CoverWidth>) {
    use CoverWidth::{Full, Narrow};
    match mode {
        SidePanelMode::None => (None, None),
        SidePanelMode::Both => (Some(Full), Some(Full)),
        SidePanelMode::Left100mm => (Some(Narrow), Some(Full)),
        SidePanelMode::Right100mm => (Some(Full), Some(Narrow)),
        SidePanelMode::LeftOnly => (Some(Full), None),
        SidePanelMode::RightOnly => (None, Some(Full)),
    }
}

/// Cover panels for a tall unit
///
/// `config.height` is the body height; covers add the plinth below it.
pub fn cover_panels(config: &CabinetConfig, ids: &mut PanelIds) -> Vec<Panel> {
    let plinth = config.plinth_height;
    let t = config.materials.carcass;
    let forward = config.materials.door + COVER_FRONT_CLEARANCE;
    let height = config.height + plinth;
    let (left, right) = covers(config.side_panel_mode);

    let mut panels = Vec::new();
    for (width, name, x) in [
        (left, "Left Cover Panel", -t),
        (right, "Right Cover Panel", config.width),
    ] {
        let Some(width) = width else { continue };
        let (depth, name) = match width {
            CoverWidth::Full => (config.depth + forward, name.to_string()),
            CoverWidth::Narrow => (NARROW_COVER_DEPTH, format!("{} (100 mm)", name)),
        };
        panels.push(
            Panel::new(
                ids.next_id(),
                name,
                PanelPlane::Side,
                Point3::new(x, -forward, -plinth),
                depth,
                height,
                t,
                MaterialClass::Face,
            )
            .with_role(PanelRole::Cover)
            .with_banding(&[PanelEdge::Front, PanelEdge::Top]),
        );
    }
    panels
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cabinet::CabinetKind;
    use cabinetkit_core::{RowKind, Subsystem};

    fn tall(mode: SidePanelMode) -> CabinetConfig {
        let mut config =
            CabinetConfig::new(CabinetKind::Tall, RowKind::Lower, 450.0, 2000.0, 582.0);
        config.materials.carcass = 15.0;
        config.side_panel_mode = mode;
        config.plinth_height = 100.0;
        config
    }

    #[test]
    fn test_no_covers() {
        let mut ids = PanelIds::new(Subsystem::Tall, 1);
        let panels = cover_panels(&tall(SidePanelMode::None), &mut ids);
        assert!(panels.is_empty());
    }

    #[test]
    fn test_both_covers_full_height() {
        let mut ids = PanelIds::new(Subsystem::Tall, 1);
        let panels = cover_panels(&tall(SidePanelMode::Both), &mut ids);
        assert_eq!(panels.len(), 2);
        for panel in &panels {
            assert_eq!(panel.height, 2100.0);
            assert_eq!(panel.origin.z, -100.0);
            assert_eq!(panel.width, 582.0 + 21.0);
            assert_eq!(panel.thickness, 15.0);
        }
        assert_eq!(panels[0].origin.x, -15.0);
        assert_eq!(panels[1].origin.x, 450.0);
    }

    #[test]
    fn test_narrow_cover_against_wall() {
        let panels = cover_panels(
            &tall(SidePanelMode::Left100mm),
            &mut PanelIds::new(Subsystem::Tall, 1),
        );
        assert_eq!(panels.len(), 2);
        assert_eq!(panels[0].width, 100.0);
        assert_eq!(panels[1].width, 603.0);

        let only = cover_panels(
            &tall(SidePanelMode::RightOnly),
            &mut PanelIds::new(Subsystem::Tall, 1),
        );
        assert_eq!(only.len(), 1);
        assert_eq!(only[0].name, "Right Cover Panel");
    }
}
