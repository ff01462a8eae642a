//! Normalization from a raw spreadsheet row to a canonical
//! [`venuemap_core::Location`].
//!
//! Text fields tolerate the header casing and language variants observed in
//! the source sheets. Coordinates come from two fixed literal headers with
//! no alias fallback; a row survives if and only if both parse.

use venuemap_core::Location;

use crate::coord::parse_coordinate;
use crate::types::{CellValue, RawRow};

/// Header aliases tried in priority order; first non-empty cell wins.
const NAME_ALIASES: [&str; 4] = ["Naam", "naam", "Name", "name"];
const ADDRESS_ALIASES: [&str; 4] = ["Adres", "adres", "Address", "address"];
const PRESENTER_ALIASES: [&str; 4] = ["wie", "Wie", "who", "Who"];
const VIDEO_ALIASES: [&str; 2] = ["Video", "video"];

const LATITUDE_KEY: &str = "Lat";
/// The source spells longitude with this abbreviation, capital I.
const LONGITUDE_KEY: &str = "Ing";

/// Maps one raw row to a [`Location`], or `None` when either coordinate is
/// unrecoverable. Unresolvable name/address/presenter fields default to the
/// empty string and never reject the row; a missing video column defaults
/// to `None`.
#[must_use]
pub fn normalize_row(row: &RawRow) -> Option<Location> {
    let latitude = row.get(LATITUDE_KEY).and_then(parse_coordinate);
    let longitude = row.get(LONGITUDE_KEY).and_then(parse_coordinate);
    let (Some(latitude), Some(longitude)) = (latitude, longitude) else {
        return None;
    };

    Some(Location {
        name: resolve_text(row, &NAME_ALIASES).unwrap_or_default(),
        address: resolve_text(row, &ADDRESS_ALIASES).unwrap_or_default(),
        presenter: resolve_text(row, &PRESENTER_ALIASES).unwrap_or_default(),
        latitude,
        longitude,
        video_url: resolve_text(row, &VIDEO_ALIASES),
    })
}

/// Returns the first alias whose cell holds a non-empty value. Numeric
/// cells resolve to their display form.
fn resolve_text(row: &RawRow, aliases: &[&str]) -> Option<String> {
    aliases
        .iter()
        .find_map(|label| row.get(label).and_then(cell_text))
}

fn cell_text(cell: &CellValue) -> Option<String> {
    match cell {
        CellValue::Text(s) if !s.is_empty() => Some(s.clone()),
        CellValue::Number(n) => Some(n.to_string()),
        _ => None,
    }
}
