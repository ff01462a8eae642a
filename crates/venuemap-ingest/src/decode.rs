//! Workbook decoding: raw bytes in, ordered [`RawRow`]s out.
//!
//! Only this module sees `calamine` types. The first sheet is the sheet of
//! interest; its first row supplies the header labels and every following
//! non-blank row becomes a [`RawRow`] in sheet order.

use std::io::Cursor;

use calamine::{Data, Reader, Xlsx};

use crate::error::IngestError;
use crate::types::{CellValue, RawRow};

/// Decodes an in-memory workbook into raw rows.
///
/// # Errors
///
/// Returns [`IngestError::Workbook`] when the bytes are not a readable
/// workbook, and [`IngestError::EmptySource`] when it contains no sheets.
pub fn decode_rows(bytes: &[u8]) -> Result<Vec<RawRow>, IngestError> {
    let mut workbook: Xlsx<_> = Xlsx::new(Cursor::new(bytes))?;
    let Some(sheet_name) = workbook.sheet_names().first().cloned() else {
        return Err(IngestError::EmptySource);
    };
    tracing::debug!(sheet = %sheet_name, "decoding first sheet");

    let range = workbook.worksheet_range(&sheet_name)?;
    let grid: Vec<Vec<CellValue>> = range
        .rows()
        .map(|cells| cells.iter().map(cell_from_data).collect())
        .collect();
    Ok(assemble_rows(&grid))
}

/// Reduces a calamine cell to the pipeline's scalar model. Numbers (and
/// serial datetimes) keep their native typing; booleans fold to text;
/// error cells count as empty.
fn cell_from_data(data: &Data) -> CellValue {
    match data {
        Data::Empty | Data::Error(_) => CellValue::Empty,
        Data::Int(v) => CellValue::Number(*v as f64),
        Data::Float(v) => CellValue::Number(*v),
        Data::DateTime(v) => CellValue::Number(v.as_f64()),
        Data::String(v) => CellValue::Text(v.clone()),
        Data::Bool(v) => CellValue::Text(v.to_string()),
        Data::DateTimeIso(v) | Data::DurationIso(v) => CellValue::Text(v.clone()),
    }
}

/// Zips data rows against the header row. Columns without a usable header
/// label are dropped, as are rows with no content at all.
fn assemble_rows(grid: &[Vec<CellValue>]) -> Vec<RawRow> {
    let Some((header, data_rows)) = grid.split_first() else {
        return Vec::new();
    };

    let labels: Vec<Option<String>> = header
        .iter()
        .map(|cell| match cell {
            CellValue::Text(s) if !s.is_empty() => Some(s.clone()),
            CellValue::Number(n) => Some(n.to_string()),
            _ => None,
        })
        .collect();

    data_rows
        .iter()
        .map(|cells| {
            labels
                .iter()
                .zip(cells)
                .filter_map(|(label, cell)| {
                    label.as_ref().map(|l| (l.clone(), cell.clone()))
                })
                .collect::<RawRow>()
        })
        .filter(|row| !row.is_blank())
        .collect()
}
