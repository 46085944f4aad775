//! Module Filler
//!
//! Converts the length left over after explicit placements into standard
//! filler modules, then decides where any remainder goes.

use cabinetkit_core::constants::{
    LENGTH_TOLERANCE, LOWER_FILL_MIN, LOWER_FILL_WIDTHS, UPPER_FILL_MIN, UPPER_FILL_WIDTHS,
};
use cabinetkit_core::RowKind;

/// Result of filling one residual gap
#[derive(Debug, Clone, PartialEq)]
pub struct FillOutcome {
    /// Filler module widths, remainder already distributed
    pub fillers: Vec<f64>,
    /// Extra width for one open rack: (index into the rack list, amount)
    pub rack_bonus: Option<(usize, f64)>,
    /// Length left for a trailing corner cabinet to absorb
    pub final_gap: f64,
}

impl FillOutcome {
    /// Total length the outcome accounts for
    pub fn covered(&self) -> f64 {
        self.fillers.iter().sum::<f64>()
            + self.rack_bonus.map(|(_, w)| w).unwrap_or(0.0)
            + self.final_gap
    }
}

pub struct ModuleFiller {
    /// Standard widths, largest first
    widths: Vec<f64>,
    min_useful: f64,
    negligible: f64,
}

impl ModuleFiller {
    pub fn new(widths: &[f64], min_useful: f64, negligible: f64) -> Self {
        let mut widths = widths.to_vec();
        widths.sort_by(|a, b| b.total_cmp(a));
        Self {
            widths,
            min_useful,
            negligible,
        }
    }

    /// Standard filler table of a row; `negligible` is usually the door thickness
    pub fn for_row(row: RowKind, negligible: f64) -> Self {
        match row {
            RowKind::Upper => Self::new(&UPPER_FILL_WIDTHS, UPPER_FILL_MIN, negligible),
            RowKind::Lower => Self::new(&LOWER_FILL_WIDTHS, LOWER_FILL_MIN, negligible),
        }
    }

    /// Greedy pass: largest standard width that still fits, until the
    /// remainder drops below the useful minimum
    pub fn greedy(&self, gap: f64) -> (Vec<f64>, f64) {
        let mut remaining = gap.max(0.0);
        let mut picked = Vec::new();
        while remaining + LENGTH_TOLERANCE >= self.min_useful {
            let Some(width) = self
                .widths
                .iter()
                .copied()
                .find(|w| *w <= remaining + LENGTH_TOLERANCE)
            else {
                break;
            };
            picked.push(width);
            remaining = (remaining - width).max(0.0);
        }
        (picked, remaining)
    }

    /// Fill `gap`, given the widths of the open racks already placed
    ///
    /// A remainder up to the negligible size is reported as the final gap.
    /// A larger one widens the fillers evenly, or failing that the narrowest
    /// rack, or failing that is reported as the final gap.
    pub fn fill(&self, gap: f64, racks: &[f64]) -> FillOutcome {
        let (mut fillers, remainder) = self.greedy(gap);

        if remainder <= self.negligible {
            return FillOutcome {
                fillers,
                rack_bonus: None,
                final_gap: remainder,
            };
        }

        if !fillers.is_empty() {
            let share = remainder / fillers.len() as f64;
            for width in &mut fillers {
                *width += share;
            }
            return FillOutcome {
                fillers,
                rack_bonus: None,
                final_gap: 0.0,
            };
        }

        let narrowest = racks
            .iter()
            .enumerate()
            .min_by(|a, b| a.1.total_cmp(b.1).then(a.0.cmp(&b.0)))
            .map(|(index, _)| index);
        match narrowest {
            Some(index) => FillOutcome {
                fillers,
                rack_bonus: Some((index, remainder)),
                final_gap: 0.0,
            },
            None => FillOutcome {
                fillers,
                rack_bonus: None,
                final_gap: remainder,
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_greedy_upper() {
        let filler = ModuleFiller::for_row(RowKind::Upper, 18.0);
        let (widths, rest) = filler.greedy(1650.0);
        assert_eq!(widths, vec![600.0, 600.0, 450.0]);
        assert_eq!(rest, 0.0);
    }

    #[test]
    fn test_remainder_spread_over_fillers() {
        let filler = ModuleFiller::for_row(RowKind::Upper, 18.0);
        let outcome = filler.fill(1300.0, &[]);
        // 600 + 600 leaves 100, below the 150 minimum
        assert_eq!(outcome.fillers, vec![650.0, 650.0]);
        assert_eq!(outcome.final_gap, 0.0);
    }

    #[test]
    fn test_negligible_remainder_is_final_gap() {
        let filler = ModuleFiller::for_row(RowKind::Lower, 18.0);
        let outcome = filler.fill(910.0, &[]);
        assert_eq!(outcome.fillers, vec![900.0]);
        assert_eq!(outcome.final_gap, 10.0);
    }

    #[test]
    fn test_small_gap_goes_to_narrowest_rack() {
        let filler = ModuleFiller::for_row(RowKind::Upper, 18.0);
        let outcome = filler.fill(100.0, &[450.0, 300.0, 300.0]);
        assert!(outcome.fillers.is_empty());
        assert_eq!(outcome.rack_bonus, Some((1, 100.0)));
        assert_eq!(outcome.final_gap, 0.0);
    }

    #[test]
    fn test_small_gap_without_racks_passes_through() {
        let filler = ModuleFiller::for_row(RowKind::Lower, 18.0);
        let outcome = filler.fill(200.0, &[]);
        assert!(outcome.fillers.is_empty());
        assert_eq!(outcome.final_gap, 200.0);
        assert_eq!(outcome.covered(), 200.0);
    }

    #[test]
    fn test_no_useful_width_stops_greedy() {
        let filler = ModuleFiller::for_row(RowKind::Upper, 18.0);
        let (widths, rest) = filler.greedy(200.0);
        assert!(widths.is_empty());
        assert_eq!(rest, 200.0);
    }
}
