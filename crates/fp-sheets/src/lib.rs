//! Spreadsheet-provider envelope parsing and tabular export.
//!
//! The provider's visualization-query endpoint does not return plain JSON: the
//! payload is wrapped in a comment sentinel and a JavaScript callback
//! invocation. `envelope` strips that wrapper deterministically; `csv` and
//! `pdf` turn the resulting grid into downloadable artifacts.

mod csv;
mod envelope;
mod error;
mod fetch;
mod pdf;

#[cfg(test)]
mod tests;

pub use csv::{export_csv, render_csv};
pub use envelope::{SENTINEL_PREFIX, parse_gviz_response};
pub use error::{SheetsError, SheetsResult};
pub use fetch::{extract_sheet_id, fetch_form_results, gviz_query_url};
pub use pdf::{export_pdf, render_pdf};
