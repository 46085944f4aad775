//! Bill of materials
//!
//! A read-only pass over the finished output. Panels are grouped by size
//! and material, hardware is derived from what each panel does, and a
//! sheet count and cost roll-up are estimated from the totals.

use crate::cabinet::CabinetInstance;
use crate::context::ProjectOutput;
use crate::door_system::DoorSystemParams;
use crate::plinth::plinth_covers;
use cabinetkit_core::constants::{
    BACK_SCREW_SPACING, CONFIRMAT_PER_CORNER, HINGE_TALL_DOOR_HEIGHT, SHELF_PINS_PER_SHELF,
    SLIDE_DEPTH_RATIO, SLIDE_MAX_LENGTH, SLIDE_MIN_LENGTH,
};
use cabinetkit_core::{round_mm, FaceKind, MaterialClass, Panel, PanelRole};
use cabinetkit_settings::PricingSettings;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use tracing::debug;

/// Identical boards, counted together
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BomPanel {
    pub material: MaterialClass,
    pub thickness: f64,
    pub width: f64,
    pub height: f64,
    pub quantity: u32,
}

impl BomPanel {
    /// Total face area in m²
    pub fn area_m2(&self) -> f64 {
        self.width * self.height * f64::from(self.quantity) / 1e6
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum HardwareKind {
    Hinge,
    /// Nominal slide length in mm
    DrawerSlide(u32),
    Handle,
    ConfirmatScrew,
    BackScrew,
    ShelfPin,
}

impl fmt::Display for HardwareKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Hinge => write!(f, "Hinge"),
            Self::DrawerSlide(length) => write!(f, "Drawer Slide {} mm", length),
            Self::Handle => write!(f, "Handle"),
            Self::ConfirmatScrew => write!(f, "Confirmat Screw"),
            Self::BackScrew => write!(f, "Back Panel Screw"),
            Self::ShelfPin => write!(f, "Shelf Pin"),
        }
    }
}

impl HardwareKind {
    pub fn unit(&self) -> &'static str {
        match self {
            Self::DrawerSlide(_) => "pair",
            _ => "pcs",
        }
    }

    pub fn unit_cost(&self, pricing: &PricingSettings) -> f64 {
        match self {
            Self::Hinge => pricing.hinge_cost,
            Self::DrawerSlide(_) => pricing.slide_pair_cost,
            Self::Handle => pricing.handle_cost,
            Self::ConfirmatScrew => pricing.confirmat_cost,
            Self::BackScrew => pricing.back_screw_cost,
            Self::ShelfPin => pricing.shelf_pin_cost,
        }
    }
}

/// Sheets needed for one material and thickness
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SheetEstimate {
    pub material: MaterialClass,
    pub thickness: f64,
    pub area_m2: f64,
    pub sheets: u32,
    pub unit_cost: f64,
}

/// One line of the summary table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BomLine {
    pub item: String,
    pub quantity: f64,
    pub unit: String,
    pub unit_cost: f64,
}

impl BomLine {
    pub fn extended_cost(&self) -> f64 {
        self.quantity * self.unit_cost
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct CostSummary {
    pub materials: f64,
    pub hardware: f64,
    pub edge_banding: f64,
    pub labor: f64,
    pub markup: f64,
    pub total: f64,
}

impl CostSummary {
    pub fn subtotal(&self) -> f64 {
        self.materials + self.hardware + self.edge_banding + self.labor
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct BillOfMaterials {
    pub panels: Vec<BomPanel>,
    pub hardware: BTreeMap<HardwareKind, u32>,
    pub sheets: Vec<SheetEstimate>,
    pub edge_banding_m: f64,
    pub cabinet_count: usize,
    pub cost: CostSummary,
}

/// Hundredths of a millimetre, for grouping equal sizes
fn key(value: f64) -> i64 {
    (value * 100.0).round() as i64
}

/// Nominal slide length for a carcass depth
pub fn slide_length(depth: f64) -> u32 {
    (depth * SLIDE_DEPTH_RATIO)
        .floor()
        .clamp(SLIDE_MIN_LENGTH, SLIDE_MAX_LENGTH) as u32
}

/// Hinges for one door leaf
pub fn hinges_for(door: &Panel) -> u32 {
    if door.height > HINGE_TALL_DOOR_HEIGHT {
        3
    } else {
        2
    }
}

fn count_hardware(
    instance: &CabinetInstance,
    door_system: &DoorSystemParams,
    hardware: &mut BTreeMap<HardwareKind, u32>,
) {
    let mut add = |kind: HardwareKind, quantity: u32| {
        if quantity > 0 {
            *hardware.entry(kind).or_insert(0) += quantity;
        }
    };

    for face in &instance.faces {
        match face.kind {
            FaceKind::Door => add(HardwareKind::Hinge, hinges_for(&face.panel)),
            FaceKind::Drawer => add(HardwareKind::DrawerSlide(slide_length(instance.depth)), 1),
            FaceKind::Blind => {}
        }
        if face.kind != FaceKind::Blind && door_system.has_handles() {
            add(HardwareKind::Handle, 1);
        }
    }

    for panel in &instance.panels {
        match panel.role {
            PanelRole::Structure => add(HardwareKind::ConfirmatScrew, CONFIRMAT_PER_CORNER * 4),
            PanelRole::Back => {
                let perimeter = 2.0 * (panel.width + panel.height);
                add(
                    HardwareKind::BackScrew,
                    (perimeter / BACK_SCREW_SPACING).ceil() as u32,
                );
            }
            PanelRole::Shelf => add(HardwareKind::ShelfPin, SHELF_PINS_PER_SHELF),
            PanelRole::Face | PanelRole::Cover | PanelRole::Plinth => {}
        }
    }
}

fn sheet_cost(material: MaterialClass, pricing: &PricingSettings) -> f64 {
    match material {
        MaterialClass::Carcass => pricing.carcass_sheet_cost,
        MaterialClass::Back => pricing.back_sheet_cost,
        MaterialClass::Face | MaterialClass::Plinth => pricing.face_sheet_cost,
    }
}

impl BillOfMaterials {
    /// Aggregate a finished project, plinth covers included
    pub fn from_output(
        output: &ProjectOutput,
        door_system: &DoorSystemParams,
        pricing: &PricingSettings,
    ) -> Self {
        let plinth = plinth_covers(output);
        let panels: Vec<&Panel> = output
            .instances()
            .iter()
            .flat_map(|c| c.all_panels())
            .chain(plinth.iter())
            .collect();

        let mut grouped: BTreeMap<(MaterialClass, i64, i64, i64), BomPanel> = BTreeMap::new();
        for panel in &panels {
            grouped
                .entry((
                    panel.material,
                    key(panel.thickness),
                    key(panel.width),
                    key(panel.height),
                ))
                .and_modify(|entry| entry.quantity += 1)
                .or_insert_with(|| BomPanel {
                    material: panel.material,
                    thickness: round_mm(panel.thickness),
                    width: round_mm(panel.width),
                    height: round_mm(panel.height),
                    quantity: 1,
                });
        }

        let mut hardware = BTreeMap::new();
        for instance in output.instances() {
            count_hardware(instance, door_system, &mut hardware);
        }

        let sheet_area = pricing.sheet_width.value() * pricing.sheet_height.value() / 1e6;
        let usable = sheet_area * pricing.sheet_yield;
        let mut areas: BTreeMap<(MaterialClass, i64), f64> = BTreeMap::new();
        for entry in grouped.values() {
            *areas
                .entry((entry.material, key(entry.thickness)))
                .or_insert(0.0) += entry.area_m2();
        }
        let sheets: Vec<SheetEstimate> = areas
            .into_iter()
            .map(|((material, thickness), area_m2)| SheetEstimate {
                material,
                thickness: thickness as f64 / 100.0,
                area_m2,
                sheets: if usable > 0.0 {
                    (area_m2 / usable).ceil() as u32
                } else {
                    0
                },
                unit_cost: sheet_cost(material, pricing),
            })
            .collect();

        let edge_banding_m = panels.iter().map(|p| p.banding_length()).sum::<f64>() / 1000.0;
        let cabinet_count = output.instances().iter().filter(|c| c.is_cabinet()).count();

        let materials = sheets
            .iter()
            .map(|s| f64::from(s.sheets) * s.unit_cost)
            .sum();
        let hardware_cost = hardware
            .iter()
            .map(|(kind, quantity)| f64::from(*quantity) * kind.unit_cost(pricing))
            .sum();
        let mut cost = CostSummary {
            materials,
            hardware: hardware_cost,
            edge_banding: edge_banding_m * pricing.edge_band_cost_per_m,
            labor: pricing.labor_hours_per_cabinet * pricing.labor_rate * cabinet_count as f64,
            markup: pricing.markup,
            total: 0.0,
        };
        cost.total = cost.subtotal() * cost.markup;

        debug!(
            panels = panels.len(),
            groups = grouped.len(),
            cabinets = cabinet_count,
            total = cost.total,
            "bill of materials"
        );

        Self {
            panels: grouped.into_values().collect(),
            hardware,
            sheets,
            edge_banding_m,
            cabinet_count,
            cost,
        }
    }

    pub fn hardware_count(&self, kind: HardwareKind) -> u32 {
        self.hardware.get(&kind).copied().unwrap_or(0)
    }

    /// Summary table: sheets, hardware, edge banding, labour
    pub fn lines(&self, pricing: &PricingSettings) -> Vec<BomLine> {
        let mut lines: Vec<BomLine> = self
            .sheets
            .iter()
            .map(|s| BomLine {
                item: format!("{} Sheet {} mm", s.material, s.thickness),
                quantity: f64::from(s.sheets),
                unit: "sheet".to_string(),
                unit_cost: s.unit_cost,
            })
            .collect();
        lines.extend(self.hardware.iter().map(|(kind, quantity)| BomLine {
            item: kind.to_string(),
            quantity: f64::from(*quantity),
            unit: kind.unit().to_string(),
            unit_cost: kind.unit_cost(pricing),
        }));
        lines.push(BomLine {
            item: "Edge Banding".to_string(),
            quantity: round_mm(self.edge_banding_m),
            unit: "m".to_string(),
            unit_cost: pricing.edge_band_cost_per_m,
        });
        lines.push(BomLine {
            item: "Labour".to_string(),
            quantity: pricing.labor_hours_per_cabinet * self.cabinet_count as f64,
            unit: "h".to_string(),
            unit_cost: pricing.labor_rate,
        });
        lines
    }
}
