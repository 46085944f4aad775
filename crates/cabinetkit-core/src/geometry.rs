//! Panel geometry
//!
//! A cabinet is described as a set of axis-aligned rectangular boards.
//! Coordinates are cabinet-local unless stated otherwise:
//! - `x` runs along the wall, left to right
//! - `y` runs from the cabinet front (0) to the wall (depth)
//! - `z` runs upward from the cabinet base

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

/// A point in millimetres
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Point3 {
    pub const ORIGIN: Point3 = Point3 {
        x: 0.0,
        y: 0.0,
        z: 0.0,
    };

    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

impl Add for Point3 {
    type Output = Point3;

    fn add(self, rhs: Point3) -> Point3 {
        Point3::new(self.x + rhs.x, self.y + rhs.y, self.z + rhs.z)
    }
}

/// Which plane a board lies in; the thickness runs along the plane normal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelPlane {
    /// Lies flat (shelves, top, bottom, horizontal rails). Width along x, height along y.
    Horizontal,
    /// Faces the room (backs, doors, stretchers). Width along x, height along z.
    Frontal,
    /// Faces sideways (side panels, uprights). Width along y, height along z.
    Side,
}

/// Sheet stock a board is cut from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MaterialClass {
    /// Structural carcass board
    Carcass,
    /// Thin back board
    Back,
    /// Visible door, drawer and cover board
    Face,
    /// Plinth strip
    Plinth,
}

impl fmt::Display for MaterialClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Carcass => write!(f, "Carcass"),
            Self::Back => write!(f, "Back"),
            Self::Face => write!(f, "Face"),
            Self::Plinth => write!(f, "Plinth"),
        }
    }
}

/// What a board does in the cabinet, for hardware counting
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelRole {
    /// Sides, top, bottom, stretchers and rails, joined with screws
    Structure,
    /// Loose shelf resting on pins
    Shelf,
    /// Back panel
    Back,
    /// Door, drawer front or blind panel
    Face,
    /// Finishing panel fixed to the outside of a unit
    Cover,
    Plinth,
}

/// An edge of a board, named by the direction its outward normal points
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PanelEdge {
    Front,
    Back,
    Left,
    Right,
    Top,
    Bottom,
}

/// Axis-aligned size of a board
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Extents {
    pub dx: f64,
    pub dy: f64,
    pub dz: f64,
}

/// A single rectangular board
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Panel {
    /// Stable identifier, unique within a project
    pub id: String,
    pub name: String,
    /// Minimum corner of the board
    pub origin: Point3,
    /// First in-plane dimension (see [`PanelPlane`])
    pub width: f64,
    /// Second in-plane dimension: depth for horizontal boards, height otherwise
    pub height: f64,
    pub thickness: f64,
    pub plane: PanelPlane,
    pub material: MaterialClass,
    pub role: PanelRole,
    /// Edges that receive edge banding
    pub banded_edges: Vec<PanelEdge>,
}

impl Panel {
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        plane: PanelPlane,
        origin: Point3,
        width: f64,
        height: f64,
        thickness: f64,
        material: MaterialClass,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            origin,
            width,
            height,
            thickness,
            plane,
            material,
            role: match material {
                MaterialClass::Carcass => PanelRole::Structure,
                MaterialClass::Back => PanelRole::Back,
                MaterialClass::Face => PanelRole::Face,
                MaterialClass::Plinth => PanelRole::Plinth,
            },
            banded_edges: Vec::new(),
        }
    }

    pub fn with_role(mut self, role: PanelRole) -> Self {
        self.role = role;
        self
    }

    pub fn with_banding(mut self, edges: &[PanelEdge]) -> Self {
        self.banded_edges = edges.to_vec();
        self
    }

    pub fn extents(&self) -> Extents {
        match self.plane {
            PanelPlane::Horizontal => Extents {
                dx: self.width,
                dy: self.height,
                dz: self.thickness,
            },
            PanelPlane::Frontal => Extents {
                dx: self.width,
                dy: self.thickness,
                dz: self.height,
            },
            PanelPlane::Side => Extents {
                dx: self.thickness,
                dy: self.width,
                dz: self.height,
            },
        }
    }

    /// Opposite corner of the board
    pub fn max_corner(&self) -> Point3 {
        let e = self.extents();
        Point3::new(
            self.origin.x + e.dx,
            self.origin.y + e.dy,
            self.origin.z + e.dz,
        )
    }

    /// Face area in mm²
    pub fn area(&self) -> f64 {
        self.width * self.height
    }

    /// Length of an edge; zero for the two broad faces of the board
    pub fn edge_length(&self, edge: PanelEdge) -> f64 {
        let e = self.extents();
        let normal = match edge {
            PanelEdge::Left | PanelEdge::Right => 0,
            PanelEdge::Front | PanelEdge::Back => 1,
            PanelEdge::Top | PanelEdge::Bottom => 2,
        };
        let thickness_axis = plane_axis(self.plane);
        if normal == thickness_axis {
            return 0.0;
        }
        let extents = [e.dx, e.dy, e.dz];
        // The remaining axis is neither the edge normal nor the thickness
        extents[3 - normal - thickness_axis]
    }

    /// Total length of banded edges in mm
    pub fn banding_length(&self) -> f64 {
        self.banded_edges
            .iter()
            .map(|edge| self.edge_length(*edge))
            .sum()
    }

    /// Copy of the board shifted by `offset`
    pub fn translated(&self, offset: Point3) -> Panel {
        Panel {
            origin: self.origin + offset,
            ..self.clone()
        }
    }
}

fn plane_axis(plane: PanelPlane) -> usize {
    match plane {
        PanelPlane::Side => 0,
        PanelPlane::Frontal => 1,
        PanelPlane::Horizontal => 2,
    }
}

/// What a notch is cut for
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotchKind {
    /// Handleless finger-pull profile at the handle edge of a side
    GolaL,
    /// Handleless finger-pull profile on a drawer split line
    GolaC,
    /// Slot letting a corner shelf seat around the support upright
    UprightSlot,
}

impl fmt::Display for NotchKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::GolaL => write!(f, "L Gola"),
            Self::GolaC => write!(f, "C Gola"),
            Self::UprightSlot => write!(f, "Upright Slot"),
        }
    }
}

/// A rectangular subtraction from a panel
///
/// `width` and `depth` are measured in the plane of the panel (along its
/// `width` and `height` axes); `cut_depth` runs through the thickness.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notch {
    pub panel_id: String,
    pub kind: NotchKind,
    pub origin: Point3,
    pub width: f64,
    pub depth: f64,
    pub cut_depth: f64,
}

/// Kind of front face
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FaceKind {
    Door,
    Drawer,
    Blind,
}

impl fmt::Display for FaceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Door => write!(f, "Door"),
            Self::Drawer => write!(f, "Drawer Front"),
            Self::Blind => write!(f, "Blind Panel"),
        }
    }
}

/// A door, drawer front or blind panel
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Face {
    pub kind: FaceKind,
    pub panel: Panel,
}
