use crate::{CellValue, TabularGrid};

#[test]
fn test_empty_grid() {
    let grid = TabularGrid::default();

    assert!(grid.is_empty());
    assert_eq!(grid.row_count(), 0);
    assert!(grid.header().is_none());
    assert!(grid.body().is_empty());
    assert_eq!(grid.column_count(), 0);
}

#[test]
fn test_header_and_body_split() {
    let grid = TabularGrid::new(vec![
        vec!["Nombre".into(), "Edad".into()],
        vec!["Ana".into(), CellValue::Number(31.0)],
        vec!["Luis".into(), CellValue::Empty],
    ]);

    assert_eq!(grid.header().unwrap().len(), 2);
    assert_eq!(grid.body().len(), 2);
    assert_eq!(grid.body()[1][1], CellValue::Empty);
}

#[test]
fn test_column_count_of_ragged_rows() {
    // Ragged grids are allowed; the widest row wins.
    let grid = TabularGrid::new(vec![
        vec!["a".into()],
        vec!["b".into(), "c".into(), "d".into()],
        vec![],
    ]);

    assert_eq!(grid.column_count(), 3);
}

#[test]
fn test_cell_display() {
    assert_eq!(CellValue::Text("hola".into()).to_string(), "hola");
    assert_eq!(CellValue::Number(3.0).to_string(), "3");
    assert_eq!(CellValue::Number(3.5).to_string(), "3.5");
    assert_eq!(CellValue::Number(0.0).to_string(), "0");
    assert_eq!(CellValue::Empty.to_string(), "");
}
