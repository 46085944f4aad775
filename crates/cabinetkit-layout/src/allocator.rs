//! Run Allocator
//!
//! Places the modules of one row along its wall run in priority order:
//! leading slots (hood, or sink and cooker), explicit boxes, open racks and
//! finally filler modules for whatever length is left. Offsets are relative
//! to the start of the run; the wall frame decides where the run starts.

use crate::cabinet::ModuleRole;
use crate::filler::{FillOutcome, ModuleFiller};
use cabinetkit_core::constants::LENGTH_TOLERANCE;
use cabinetkit_core::{GenerationWarning, LayoutError, LayoutResult, RowKind, Subsystem};
use tracing::{debug, warn};

/// A requested module of fixed width
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModuleRequest {
    pub role: ModuleRole,
    pub width: f64,
}

impl ModuleRequest {
    pub fn new(role: ModuleRole, width: f64) -> Self {
        Self { role, width }
    }
}

/// Everything the allocator needs to lay out one row
#[derive(Debug, Clone, PartialEq)]
pub struct RowRequest {
    pub subsystem: Subsystem,
    pub row: RowKind,
    pub wall_length: f64,
    /// Width held by the tall unit and the corner cabinet
    pub reserved: f64,
    /// Placed first and never evicted
    pub leading: Vec<ModuleRequest>,
    /// Width that must stay available for cooking appliances
    pub cooker_footprint: f64,
    /// Explicit boxes, evictable smallest first
    pub boxes: Vec<ModuleRequest>,
    pub racks: Vec<f64>,
    /// Racks stand beside the cooker and count as critical
    pub racks_critical: bool,
    /// Remainders up to this size are not worth a module
    pub negligible: f64,
}

impl RowRequest {
    pub fn new(subsystem: Subsystem, row: RowKind, wall_length: f64) -> Self {
        Self {
            subsystem,
            row,
            wall_length,
            reserved: 0.0,
            leading: Vec::new(),
            cooker_footprint: 0.0,
            boxes: Vec::new(),
            racks: Vec::new(),
            racks_critical: false,
            negligible: 0.0,
        }
    }

    /// Length of the run between the reserved units
    pub fn run_length(&self) -> f64 {
        (self.wall_length - self.reserved).max(0.0)
    }

    /// Width counted by the over-capacity check: critical modules plus boxes.
    /// Racks away from the cooker are left to the skip rule.
    fn requested_total(&self, boxes: &[ModuleRequest]) -> f64 {
        self.critical_total() + boxes.iter().map(|m| m.width).sum::<f64>()
    }

    fn critical_total(&self) -> f64 {
        let racks = if self.racks_critical {
            self.racks.iter().sum()
        } else {
            0.0
        };
        self.reserved + self.cooker_footprint + racks
    }
}

/// A resolved slot on the run
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Slot {
    pub role: ModuleRole,
    /// Offset from the start of the run
    pub offset: f64,
    /// Final width, absorbed gap included
    pub width: f64,
    /// Width added from leftover space
    pub absorbed: f64,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RowPlan {
    pub slots: Vec<Slot>,
    pub final_gap: f64,
    pub warnings: Vec<GenerationWarning>,
}

impl RowPlan {
    pub fn placed_width(&self) -> f64 {
        self.slots.iter().map(|s| s.width).sum()
    }
}

/// Smallest-first eviction of explicit boxes
///
/// Returns the boxes that survive, in their original order, and the boxes
/// that were removed. Fails when the critical modules alone overflow the
/// wall, or when the row still overflows with every box gone.
pub fn evict_to_fit(
    request: &RowRequest,
) -> LayoutResult<(Vec<ModuleRequest>, Vec<ModuleRequest>)> {
    let available = request.wall_length;
    let critical = request.critical_total();
    if critical > available + LENGTH_TOLERANCE {
        return Err(LayoutError::InsufficientSpace {
            subsystem: request.subsystem,
            required: critical,
            available,
        });
    }

    let mut kept: Vec<(usize, ModuleRequest)> =
        request.boxes.iter().copied().enumerate().collect();
    let mut order: Vec<(usize, f64)> = kept.iter().map(|(i, m)| (*i, m.width)).collect();
    order.sort_by(|a, b| a.1.total_cmp(&b.1).then(a.0.cmp(&b.0)));

    let mut evicted = Vec::new();
    let mut candidates = order.into_iter();
    loop {
        let boxes: Vec<ModuleRequest> = kept.iter().map(|(_, m)| *m).collect();
        let total = request.requested_total(&boxes);
        if total <= available + LENGTH_TOLERANCE {
            return Ok((boxes, evicted));
        }
        let Some((index, _)) = candidates.next() else {
            return Err(LayoutError::InsufficientSpace {
                subsystem: request.subsystem,
                required: total,
                available,
            });
        };
        if let Some(pos) = kept.iter().position(|(i, _)| *i == index) {
            evicted.push(kept.remove(pos).1);
        }
    }
}

/// Lay out one row
pub fn allocate_row(request: &RowRequest) -> LayoutResult<RowPlan> {
    let (boxes, evicted) = evict_to_fit(request)?;

    let mut plan = RowPlan::default();
    for module in &evicted {
        warn!(subsystem = %request.subsystem, width = module.width, "evicted box to fit row");
        plan.warnings.push(GenerationWarning::ModuleEvicted {
            subsystem: request.subsystem,
            width: module.width,
        });
    }

    let mut remaining = request.run_length();
    let mut widths: Vec<(ModuleRole, f64)> = Vec::new();

    // Returns the index of the placed width, or None when skipped
    let mut place = |module: ModuleRequest, clamp: bool, plan: &mut RowPlan| -> Option<usize> {
        let width = if clamp {
            module.width.min(remaining)
        } else {
            module.width
        };
        if width <= 0.0 || width > remaining + LENGTH_TOLERANCE {
            warn!(
                subsystem = %request.subsystem,
                role = %module.role,
                width = module.width,
                remaining,
                "skipping module wider than remaining run"
            );
            plan.warnings.push(GenerationWarning::SkippedModule {
                subsystem: request.subsystem,
                role: module.role.to_string(),
                width: module.width,
                remaining,
            });
            return None;
        }
        remaining = (remaining - width).max(0.0);
        widths.push((module.role, width));
        Some(widths.len() - 1)
    };

    for module in &request.leading {
        place(*module, module.role == ModuleRole::Hood, &mut plan);
    }
    for module in &boxes {
        place(*module, false, &mut plan);
    }
    let rack_slots: Vec<usize> = request
        .racks
        .iter()
        .filter_map(|width| place(ModuleRequest::new(ModuleRole::Rack, *width), false, &mut plan))
        .collect();

    let rack_widths: Vec<f64> = rack_slots.iter().map(|i| widths[*i].1).collect();
    let filler = ModuleFiller::for_row(request.row, request.negligible);
    let FillOutcome {
        fillers,
        rack_bonus,
        final_gap,
    } = filler.fill(remaining, &rack_widths);
    debug!(
        subsystem = %request.subsystem,
        remaining,
        fillers = fillers.len(),
        final_gap,
        "filled residual gap"
    );

    let greedy = filler.greedy(remaining).0;
    let mut offset = 0.0;
    for (i, (role, width)) in widths.iter().enumerate() {
        let absorbed = match rack_bonus {
            Some((rack, bonus)) if rack_slots.get(rack) == Some(&i) => bonus,
            _ => 0.0,
        };
        plan.slots.push(Slot {
            role: *role,
            offset,
            width: width + absorbed,
            absorbed,
        });
        offset += width + absorbed;
    }
    for (width, nominal) in fillers.iter().zip(greedy.iter()) {
        plan.slots.push(Slot {
            role: ModuleRole::Filler,
            offset,
            width: *width,
            absorbed: width - nominal,
        });
        offset += width;
    }
    plan.final_gap = final_gap;
    Ok(plan)
}
