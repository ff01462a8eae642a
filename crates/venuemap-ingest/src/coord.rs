//! Coordinate recovery from heterogeneously-typed spreadsheet cells.
//!
//! Source sheets mix native floats, comma-decimal strings from regional
//! formatting, and degree-annotated strings like `"50,97°N"`. All failure
//! is represented as `None` and checked by the caller; nothing here panics
//! or returns an error type.

use crate::types::CellValue;

/// Converts a raw cell value into a finite coordinate.
///
/// Native numbers pass through unchanged (no decimal-separator correction
/// is applied to numeric-typed cells). Strings are cleaned of one trailing
/// degree symbol and one `N`/`E` hemisphere letter (case-sensitive, first
/// occurrence each), a comma decimal separator is swapped for a dot, and
/// the remainder is parsed as a float. Empty, non-numeric, and non-finite
/// results all yield `None`.
#[must_use]
pub fn parse_coordinate(raw: &CellValue) -> Option<f64> {
    match raw {
        CellValue::Empty => None,
        CellValue::Number(value) => Some(*value).filter(|v| v.is_finite()),
        CellValue::Text(text) => parse_coordinate_text(text),
    }
}

fn parse_coordinate_text(text: &str) -> Option<f64> {
    let cleaned = text
        .replacen('°', "", 1)
        .replacen('N', "", 1)
        .replacen('E', "", 1)
        .replacen(',', ".", 1);
    // f64::from_str accepts literals like "NaN" and "inf"; those are parse
    // failures here, same as any other non-numeric cell.
    cleaned
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|v| v.is_finite())
}
