use crate::tests::sample_grid;
use crate::{export_csv, render_csv};

use fp_core::{CellValue, TabularGrid};

#[test]
fn test_every_cell_is_quoted() {
    let csv = render_csv(&sample_grid());

    assert_eq!(csv, "\"Nombre\",\"Puntaje\"\n\"Ana\",\"87\"\n\"Luis\",\"92.5\"");
}

#[test]
fn test_embedded_quotes_are_not_escaped() {
    // Long-standing portal behavior: cells are wrapped, never escaped.
    let grid = TabularGrid::new(vec![vec![CellValue::Text("di\"jo".into())]]);

    assert_eq!(render_csv(&grid), "\"di\"jo\"");
}

#[test]
fn test_ragged_rows_export_short_and_long_lines() {
    let grid = TabularGrid::new(vec![
        vec!["a".into(), "b".into()],
        vec!["c".into()],
    ]);

    assert_eq!(render_csv(&grid), "\"a\",\"b\"\n\"c\"");
}

#[test]
fn test_empty_cells_render_as_quoted_nothing() {
    let grid = TabularGrid::new(vec![vec![CellValue::Empty, "x".into()]]);

    assert_eq!(render_csv(&grid), "\"\",\"x\"");
}

#[test]
fn test_export_writes_file_named_after_email() {
    let dir = tempfile::tempdir().unwrap();

    let path = export_csv(&sample_grid(), dir.path(), "ana@example.com")
        .unwrap()
        .unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "resultados_ana@example.com.csv"
    );
    let contents = std::fs::read_to_string(&path).unwrap();
    assert!(contents.starts_with("\"Nombre\""));
}

#[test]
fn test_empty_grid_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let result = export_csv(&TabularGrid::default(), dir.path(), "ana@example.com").unwrap();

    assert!(result.is_none());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
