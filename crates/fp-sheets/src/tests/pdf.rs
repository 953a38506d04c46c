use crate::tests::sample_grid;
use crate::{export_pdf, render_pdf};

use fp_core::TabularGrid;

#[test]
fn test_render_produces_pdf_bytes() {
    let bytes = render_pdf(&sample_grid()).unwrap();

    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_many_rows_paginate_without_error() {
    let mut rows = vec![vec!["Col".into()]];
    for i in 0..200 {
        rows.push(vec![format!("fila {i}").into()]);
    }

    let bytes = render_pdf(&TabularGrid::new(rows)).unwrap();
    assert!(bytes.starts_with(b"%PDF"));
}

#[test]
fn test_export_writes_file_named_after_email() {
    let dir = tempfile::tempdir().unwrap();

    let path = export_pdf(&sample_grid(), dir.path(), "luis@example.com")
        .unwrap()
        .unwrap();

    assert_eq!(
        path.file_name().unwrap().to_str().unwrap(),
        "resultados_luis@example.com.pdf"
    );
}

#[test]
fn test_empty_grid_writes_nothing() {
    let dir = tempfile::tempdir().unwrap();

    let result = export_pdf(&TabularGrid::default(), dir.path(), "luis@example.com").unwrap();

    assert!(result.is_none());
    assert_eq!(std::fs::read_dir(dir.path()).unwrap().count(), 0);
}
