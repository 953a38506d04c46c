//! Formatted-document export: the grid rendered as a paginated A4 table.

use crate::{SheetsError, SheetsResult};

use fp_core::TabularGrid;

use std::path::{Path, PathBuf};

use log::info;
use printpdf::{BuiltinFont, Mm, PdfDocument};

const DOCUMENT_TITLE: &str = "Resultados del Formulario";

const PAGE_WIDTH_MM: f32 = 210.0;
const PAGE_HEIGHT_MM: f32 = 297.0;
const MARGIN_MM: f32 = 14.0;
const TITLE_TOP_MM: f32 = 22.0;
const TABLE_TOP_MM: f32 = 30.0;
const ROW_STEP_MM: f32 = 6.0;

const TITLE_SIZE: f32 = 18.0;
const CELL_SIZE: f32 = 10.0;

/// Render the grid into PDF bytes: a fixed title, row 0 as a bold header
/// band, remaining rows as the body, paginated over as many pages as needed.
pub fn render_pdf(grid: &TabularGrid) -> SheetsResult<Vec<u8>> {
    let (doc, first_page, first_layer) = PdfDocument::new(
        DOCUMENT_TITLE,
        Mm(PAGE_WIDTH_MM),
        Mm(PAGE_HEIGHT_MM),
        "tabla",
    );
    let regular = doc
        .add_builtin_font(BuiltinFont::Helvetica)
        .map_err(|e| SheetsError::pdf(e.to_string()))?;
    let bold = doc
        .add_builtin_font(BuiltinFont::HelveticaBold)
        .map_err(|e| SheetsError::pdf(e.to_string()))?;

    let mut layer = doc.get_page(first_page).get_layer(first_layer);
    layer.use_text(
        DOCUMENT_TITLE,
        TITLE_SIZE,
        Mm(MARGIN_MM),
        Mm(PAGE_HEIGHT_MM - TITLE_TOP_MM),
        &bold,
    );

    let column_width = (PAGE_WIDTH_MM - 2.0 * MARGIN_MM) / grid.column_count().max(1) as f32;
    let mut y = PAGE_HEIGHT_MM - TABLE_TOP_MM;

    for (row_index, row) in grid.rows().iter().enumerate() {
        if y < MARGIN_MM {
            let (page, layer_index) = doc.add_page(Mm(PAGE_WIDTH_MM), Mm(PAGE_HEIGHT_MM), "tabla");
            layer = doc.get_page(page).get_layer(layer_index);
            y = PAGE_HEIGHT_MM - MARGIN_MM;
        }

        let font = if row_index == 0 { &bold } else { &regular };
        for (col, cell) in row.iter().enumerate() {
            let text = cell.to_string();
            if text.is_empty() {
                continue;
            }
            layer.use_text(
                text,
                CELL_SIZE,
                Mm(MARGIN_MM + col as f32 * column_width),
                Mm(y),
                font,
            );
        }

        y -= ROW_STEP_MM;
    }

    doc.save_to_bytes().map_err(|e| SheetsError::pdf(e.to_string()))
}

/// Write `resultados_{email}.pdf` into `dir`.
///
/// An empty grid produces no file and no error.
pub fn export_pdf(grid: &TabularGrid, dir: &Path, email: &str) -> SheetsResult<Option<PathBuf>> {
    if grid.is_empty() {
        return Ok(None);
    }

    let path = dir.join(format!("resultados_{email}.pdf"));
    let bytes = render_pdf(grid)?;
    std::fs::write(&path, bytes).map_err(|e| SheetsError::io(path.clone(), e))?;

    info!("Exported {} rows to {}", grid.row_count(), path.display());
    Ok(Some(path))
}
