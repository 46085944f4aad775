//! Length utilities
//!
//! Every length in CabinetKit is a millimetre value held in an `f64`.
//! Designers type lengths as bare numbers or with a unit suffix (`"600mm"`,
//! `"18 mm"`), so parsing accepts a leading number and discards any
//! trailing unit text.

use crate::constants::LENGTH_TOLERANCE;

/// Parse a length string to millimeters
///
/// * `input` - String to parse, e.g. `"600"`, `"600mm"`, `" 18.5 mm "`
///
/// The leading numeric token is kept and trailing unit text is stripped.
/// Strings without a leading number, or with more digits after the unit
/// text, are rejected.
pub fn parse_length(input: &str) -> Result<f64, String> {
    let input = input.trim();
    if input.is_empty() {
        return Err("Empty length".to_string());
    }

    let numeric_end = input
        .char_indices()
        .find(|&(i, c)| !(c.is_ascii_digit() || c == '.' || (i == 0 && (c == '-' || c == '+'))))
        .map(|(i, _)| i)
        .unwrap_or(input.len());

    let (number, suffix) = input.split_at(numeric_end);
    if suffix.chars().any(|c| c.is_ascii_digit()) {
        return Err(format!("Unexpected trailing text in length: {}", input));
    }

    let value = number
        .parse::<f64>()
        .map_err(|_| format!("Invalid length: {}", input))?;
    if !value.is_finite() {
        return Err(format!("Invalid length: {}", input));
    }
    Ok(value)
}

/// Parse a comma separated list of lengths, e.g. `"600, 600mm,450"`
///
/// Empty items are ignored.
pub fn parse_length_list(input: &str) -> Result<Vec<f64>, String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|item| !item.is_empty())
        .map(parse_length)
        .collect()
}

/// Format a length for display, dropping the fraction when it is whole
pub fn format_length(value_mm: f64) -> String {
    if (value_mm - value_mm.round()).abs() < LENGTH_TOLERANCE {
        format!("{:.0} mm", value_mm.round())
    } else {
        format!("{:.1} mm", value_mm)
    }
}

/// Round to hundredths of a millimetre, for stable keys and export
pub fn round_mm(value_mm: f64) -> f64 {
    let rounded = (value_mm * 100.0).round() / 100.0;
    // Avoid printing "-0"
    if rounded == 0.0 {
        0.0
    } else {
        rounded
    }
}

/// Compare two lengths within the shared tolerance
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() <= LENGTH_TOLERANCE.max(b.abs() * 1e-9)
}
