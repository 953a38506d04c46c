//! Un-wrapping of the provider's comment-guarded response envelope.

use crate::{SheetsError, SheetsResult};

use fp_core::{CellValue, TabularGrid};

use serde::Deserialize;
use serde_json::Value;

/// Fixed sentinel the provider prefixes every visualization-query response
/// with. Anything else is not a response from that endpoint.
pub const SENTINEL_PREFIX: &str = "/*O_o*/";

// The full wrapper is `/*O_o*/\ngoogle.visualization.Query.setResponse(...);`.
// Both offsets are a contract with the provider, not tunables.
const ENVELOPE_PREFIX_LEN: usize = 47;
const ENVELOPE_SUFFIX_LEN: usize = 2;

#[derive(Debug, Deserialize)]
struct GvizResponse {
    table: Option<GvizTable>,
}

#[derive(Debug, Deserialize)]
struct GvizTable {
    #[serde(default)]
    rows: Option<Vec<GvizRow>>,
}

#[derive(Debug, Deserialize)]
struct GvizRow {
    #[serde(default)]
    c: Vec<Option<GvizCell>>,
}

#[derive(Debug, Deserialize)]
struct GvizCell {
    #[serde(default)]
    v: Option<Value>,
}

/// Strip the envelope from a raw visualization-query payload and convert the
/// nested cell structure into a grid.
///
/// Row and cell order are preserved exactly; nothing is sorted, filtered or
/// deduplicated. Missing and null cells become empty values, never errors.
pub fn parse_gviz_response(raw: &str) -> SheetsResult<TabularGrid> {
    if !raw.starts_with(SENTINEL_PREFIX) {
        return Err(SheetsError::malformed("missing sentinel prefix"));
    }

    let end = raw
        .len()
        .checked_sub(ENVELOPE_SUFFIX_LEN)
        .filter(|&end| end >= ENVELOPE_PREFIX_LEN)
        .ok_or_else(|| SheetsError::malformed("payload shorter than the envelope"))?;
    let body = raw
        .get(ENVELOPE_PREFIX_LEN..end)
        .ok_or_else(|| SheetsError::malformed("envelope offsets split a character"))?;

    let response: GvizResponse =
        serde_json::from_str(body).map_err(|e| SheetsError::malformed(e.to_string()))?;

    let rows = response
        .table
        .and_then(|table| table.rows)
        .ok_or_else(SheetsError::empty_dataset)?;

    let grid = rows
        .into_iter()
        .map(|row| row.c.into_iter().map(cell_value).collect())
        .collect();

    Ok(TabularGrid::new(grid))
}

fn cell_value(cell: Option<GvizCell>) -> CellValue {
    match cell.and_then(|c| c.v) {
        None | Some(Value::Null) => CellValue::Empty,
        Some(Value::String(s)) => CellValue::Text(s),
        Some(Value::Number(n)) => CellValue::Number(n.as_f64().unwrap_or(0.0)),
        Some(Value::Bool(b)) => CellValue::Text(b.to_string()),
        // Dates arrive as objects in some locales; render them verbatim.
        Some(other) => CellValue::Text(other.to_string()),
    }
}
