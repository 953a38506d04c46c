use crate::{SheetsError, SheetsResult};

use fp_core::TabularGrid;

use std::path::{Path, PathBuf};

use log::info;

/// Render a grid as delimited text: every cell wrapped in double quotes,
/// cells joined by commas, rows by newlines.
///
/// Embedded quote characters are NOT escaped. That matches what the portal
/// has always produced; consumers of these files rely on the exact bytes.
pub fn render_csv(grid: &TabularGrid) -> String {
    grid.rows()
        .iter()
        .map(|row| {
            row.iter()
                .map(|cell| format!("\"{cell}\""))
                .collect::<Vec<_>>()
                .join(",")
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Write `resultados_{email}.csv` into `dir`.
///
/// An empty grid produces no file and no error.
pub fn export_csv(grid: &TabularGrid, dir: &Path, email: &str) -> SheetsResult<Option<PathBuf>> {
    if grid.is_empty() {
        return Ok(None);
    }

    let path = dir.join(format!("resultados_{email}.csv"));
    std::fs::write(&path, render_csv(grid)).map_err(|e| SheetsError::io(path.clone(), e))?;

    info!("Exported {} rows to {}", grid.row_count(), path.display());
    Ok(Some(path))
}
