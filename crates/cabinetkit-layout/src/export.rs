//! Cutting list and hardware tables
//!
//! Flattens a project into the two tables handed to the workshop: one row
//! per board, and one row per sheet, hardware or labour item.

use crate::bom::BomLine;
use crate::context::ProjectOutput;
use crate::plinth::plinth_covers;
use cabinetkit_core::{round_mm, Panel, Subsystem};
use serde::Serialize;
use std::borrow::Cow;
use std::fmt::{self, Write};

pub const PARTS_HEADER: &str = "PartName,MaterialThickness,Width,Depth,Height";
pub const HARDWARE_HEADER: &str = "ItemName,Quantity,Unit,UnitCost,ExtendedCost";

/// One board of the cutting list, sized along the absolute axes
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PartRow {
    pub part_name: String,
    pub thickness: f64,
    /// Along the wall
    pub width: f64,
    /// Away from the wall
    pub depth: f64,
    pub height: f64,
}

impl PartRow {
    fn from_panel(name: String, panel: &Panel) -> Self {
        let e = panel.extents();
        Self {
            part_name: name,
            thickness: round_mm(panel.thickness),
            width: round_mm(e.dx),
            depth: round_mm(e.dy),
            height: round_mm(e.dz),
        }
    }
}

/// Cutting list rows
///
/// Cabinet boards are sorted by thickness, then subsystem and cabinet
/// index, then name.
/// Plinth covers follow at the end in cutting order.
pub fn part_rows(output: &ProjectOutput) -> Vec<PartRow> {
    let mut keyed: Vec<((Subsystem, u32), PartRow)> = output
        .instances()
        .iter()
        .flat_map(|instance| {
            let label = format!("{} {}", instance.subsystem.cabinet_label(), instance.index);
            instance.all_panels().map(move |panel| {
                (
                    (instance.subsystem, instance.index),
                    PartRow::from_panel(format!("{} - {}", label, panel.name), panel),
                )
            })
        })
        .collect();
    keyed.sort_by(|(ia, a), (ib, b)| {
        a.thickness
            .total_cmp(&b.thickness)
            .then(ia.cmp(ib))
            .then_with(|| a.part_name.cmp(&b.part_name))
    });

    let mut rows: Vec<PartRow> = keyed.into_iter().map(|(_, row)| row).collect();
    rows.extend(
        plinth_covers(output)
            .iter()
            .map(|panel| PartRow::from_panel(panel.name.clone(), panel)),
    );
    rows
}

/// Quote a CSV field when it needs it
fn field(value: &str) -> Cow<'_, str> {
    if value.contains([',', '"', '\n']) {
        Cow::Owned(format!("\"{}\"", value.replace('"', "\"\"")))
    } else {
        Cow::Borrowed(value)
    }
}

fn number(value: f64) -> String {
    let value = round_mm(value);
    if value.fract() == 0.0 {
        format!("{}", value as i64)
    } else {
        let text = format!("{:.2}", value);
        text.trim_end_matches('0').to_string()
    }
}

pub fn parts_csv(rows: &[PartRow]) -> Result<String, fmt::Error> {
    let mut csv = String::new();
    writeln!(csv, "{}", PARTS_HEADER)?;
    for row in rows {
        writeln!(
            csv,
            "{},{},{},{},{}",
            field(&row.part_name),
            number(row.thickness),
            number(row.width),
            number(row.depth),
            number(row.height)
        )?;
    }
    Ok(csv)
}

pub fn hardware_csv(lines: &[BomLine]) -> Result<String, fmt::Error> {
    let mut csv = String::new();
    writeln!(csv, "{}", HARDWARE_HEADER)?;
    for line in lines {
        writeln!(
            csv,
            "{},{},{},{:.2},{:.2}",
            field(&line.item),
            number(line.quantity),
            field(&line.unit),
            line.unit_cost,
            line.extended_cost()
        )?;
    }
    Ok(csv)
}
