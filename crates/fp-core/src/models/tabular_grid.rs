//! TabularGrid - row-major grid of cell values extracted from spreadsheet data.

use crate::CellValue;

/// Ordered rows of ordered cells, exactly as the source returned them.
///
/// Row 0 conventionally holds column headers. Rows are not required to have
/// equal length; ragged rows are kept as-is and export with short/long lines.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct TabularGrid {
    rows: Vec<Vec<CellValue>>,
}

impl TabularGrid {
    pub fn new(rows: Vec<Vec<CellValue>>) -> Self {
        Self { rows }
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn rows(&self) -> &[Vec<CellValue>] {
        &self.rows
    }

    /// Header row (row 0), if any.
    pub fn header(&self) -> Option<&[CellValue]> {
        self.rows.first().map(Vec::as_slice)
    }

    /// All rows after the header.
    pub fn body(&self) -> &[Vec<CellValue>] {
        if self.rows.is_empty() {
            &[]
        } else {
            &self.rows[1..]
        }
    }

    /// Widest row length, used by exporters to size columns.
    pub fn column_count(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }
}

impl From<Vec<Vec<CellValue>>> for TabularGrid {
    fn from(rows: Vec<Vec<CellValue>>) -> Self {
        Self::new(rows)
    }
}
