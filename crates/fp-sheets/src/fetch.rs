use crate::{SheetsError, SheetsResult, parse_gviz_response};

use fp_core::TabularGrid;

use std::sync::LazyLock;

use log::debug;
use regex::Regex;

// A spreadsheet id is the long token inside the share link the form owner
// pasted; anything 25+ word characters long qualifies.
static SHEET_ID: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[-\w]{25,}").expect("sheet id pattern compiles"));

/// Extract the spreadsheet id from a stored form link.
pub fn extract_sheet_id(form_link: &str) -> SheetsResult<&str> {
    SHEET_ID
        .find(form_link)
        .map(|m| m.as_str())
        .ok_or_else(|| SheetsError::invalid_form_link(form_link))
}

/// Visualization-query export URL for a spreadsheet id.
pub fn gviz_query_url(sheet_id: &str) -> String {
    format!("https://docs.google.com/spreadsheets/d/{sheet_id}/gviz/tq?tqx=out:json")
}

/// Fetch a published form's result sheet and parse it into a grid.
pub async fn fetch_form_results(
    http: &reqwest::Client,
    form_link: &str,
) -> SheetsResult<TabularGrid> {
    let sheet_id = extract_sheet_id(form_link)?;
    let url = gviz_query_url(sheet_id);
    debug!("Fetching form results from {url}");

    let raw = http.get(&url).send().await?.text().await?;
    parse_gviz_response(&raw)
}
