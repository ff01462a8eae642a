//! Raw cell and row model produced by the workbook decoder.

use std::collections::HashMap;

/// A decoded spreadsheet cell, reduced to the scalar shapes the pipeline
/// cares about. Native numeric typing from the workbook is preserved;
/// everything else arrives as text or empty.
#[derive(Debug, Clone, PartialEq)]
pub enum CellValue {
    Number(f64),
    Text(String),
    Empty,
}

/// One raw spreadsheet row: an open mapping from header label to cell
/// value, exactly as the source spelled the labels. Never mutated after
/// decoding.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawRow {
    cells: HashMap<String, CellValue>,
}

impl RawRow {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, label: impl Into<String>, value: CellValue) {
        self.cells.insert(label.into(), value);
    }

    /// Looks up a cell by its exact header label.
    #[must_use]
    pub fn get(&self, label: &str) -> Option<&CellValue> {
        self.cells.get(label)
    }

    /// True when every cell in the row is empty (or the row has none).
    #[must_use]
    pub fn is_blank(&self) -> bool {
        self.cells.values().all(|c| matches!(c, CellValue::Empty))
    }
}

impl<S: Into<String>> FromIterator<(S, CellValue)> for RawRow {
    fn from_iter<T: IntoIterator<Item = (S, CellValue)>>(iter: T) -> Self {
        let mut row = Self::new();
        for (label, value) in iter {
            row.insert(label, value);
        }
        row
    }
}
