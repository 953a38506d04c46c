mod csv;
mod pdf;

use fp_core::{CellValue, TabularGrid};

/// Wrap a JSON body the way the provider's endpoint does.
pub(crate) fn wrap(json: &str) -> String {
    format!("/*O_o*/\ngoogle.visualization.Query.setResponse({json});")
}

pub(crate) fn sample_grid() -> TabularGrid {
    TabularGrid::new(vec![
        vec!["Nombre".into(), "Puntaje".into()],
        vec!["Ana".into(), CellValue::Number(87.0)],
        vec!["Luis".into(), CellValue::Number(92.5)],
    ])
}
