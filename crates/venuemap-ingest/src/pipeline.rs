//! Ingestion orchestration: fetch, decode, normalize, filter.

use venuemap_core::Location;

use crate::client::SourceClient;
use crate::decode::decode_rows;
use crate::error::IngestError;
use crate::normalize::normalize_row;
use crate::types::RawRow;

/// Runs one full ingestion pass and returns the ordered location
/// collection. All-or-nothing: no partial result ever escapes, and no
/// retry is attempted here.
///
/// # Errors
///
/// Any [`IngestError`]: transport failure, non-OK status, undecodable
/// workbook, zero rows, or zero rows surviving normalization.
pub async fn load_locations(
    client: &SourceClient,
    url: &str,
) -> Result<Vec<Location>, IngestError> {
    tracing::info!(url, "loading locations from source workbook");
    let bytes = client.fetch_source(url).await?;
    let rows = decode_rows(&bytes)?;
    locations_from_rows(&rows)
}

/// Pure tail of the pipeline: normalizes every row, drops the rejects, and
/// applies the run-level validity gates. Row order is preserved.
///
/// # Errors
///
/// - [`IngestError::EmptySource`] — the decoder produced zero rows.
/// - [`IngestError::NoValidLocations`] — every row was rejected.
pub fn locations_from_rows(rows: &[RawRow]) -> Result<Vec<Location>, IngestError> {
    if rows.is_empty() {
        return Err(IngestError::EmptySource);
    }

    let locations: Vec<Location> = rows
        .iter()
        .enumerate()
        .filter_map(|(idx, row)| {
            let location = normalize_row(row);
            if location.is_none() {
                // Sheet row number: 1-based plus the header row.
                tracing::debug!(row = idx + 2, "dropping row with unrecoverable coordinates");
            }
            location
        })
        .collect();

    if locations.is_empty() {
        return Err(IngestError::NoValidLocations);
    }
    tracing::info!(
        total = rows.len(),
        valid = locations.len(),
        "ingestion complete"
    );
    Ok(locations)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::CellValue;

    fn valid_row(name: &str, lat: f64) -> RawRow {
        RawRow::from_iter([
            ("Naam", CellValue::Text(name.to_string())),
            ("Lat", CellValue::Number(lat)),
            ("Ing", CellValue::Number(4.69)),
        ])
    }

    fn invalid_row() -> RawRow {
        RawRow::from_iter([
            ("Naam", CellValue::Text("Bad".to_string())),
            ("Lat", CellValue::Text("abc".to_string())),
            ("Ing", CellValue::Number(4.69)),
        ])
    }

    #[test]
    fn empty_input_is_an_empty_source() {
        assert!(matches!(
            locations_from_rows(&[]),
            Err(IngestError::EmptySource)
        ));
    }

    #[test]
    fn all_rows_invalid_means_no_valid_locations() {
        let rows = vec![invalid_row(), invalid_row()];
        assert!(matches!(
            locations_from_rows(&rows),
            Err(IngestError::NoValidLocations)
        ));
    }

    #[test]
    fn invalid_rows_are_dropped_and_order_preserved() {
        let rows = vec![
            valid_row("first", 50.1),
            invalid_row(),
            valid_row("second", 50.2),
            valid_row("third", 50.3),
        ];
        let locations = locations_from_rows(&rows).unwrap();
        let names: Vec<_> = locations.iter().map(|l| l.name.as_str()).collect();
        assert_eq!(names, vec!["first", "second", "third"]);
    }

    #[test]
    fn single_valid_row_survives() {
        let locations = locations_from_rows(&[valid_row("only", 50.97)]).unwrap();
        assert_eq!(locations.len(), 1);
        assert!((locations[0].latitude - 50.97).abs() < f64::EPSILON);
    }
}
