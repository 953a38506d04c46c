//! Results screen: fetch a published form's sheet, render, export.

use crate::ScreenResult;

use fp_core::{FORM_LINK_SLOTS, Identity, TabularGrid};
use fp_sheets::{SheetsResult, export_csv, export_pdf, fetch_form_results};

use std::path::{Path, PathBuf};

/// State of the results screen for one logged-in identity.
#[derive(Debug)]
pub struct ResultsScreen {
    email: String,
    form_links: [Option<String>; FORM_LINK_SLOTS],
    grid: TabularGrid,
    error: Option<String>,
}

impl ResultsScreen {
    pub fn for_identity(identity: &Identity) -> Self {
        Self {
            email: identity.email.clone(),
            form_links: identity.form_links.clone(),
            grid: TabularGrid::default(),
            error: None,
        }
    }

    /// Assigned forms with their 1-based slot numbers.
    pub fn available_forms(&self) -> Vec<(usize, &str)> {
        self.form_links
            .iter()
            .enumerate()
            .filter_map(|(i, link)| match link.as_deref() {
                Some(url) if !url.is_empty() => Some((i + 1, url)),
                _ => None,
            })
            .collect()
    }

    pub fn grid(&self) -> &TabularGrid {
        &self.grid
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Fetch the sheet behind form slot `slot` into the grid.
    ///
    /// Any failure becomes the screen's inline error message. Data from a
    /// previous successful fetch is kept on failure, as the portal always
    /// has.
    pub async fn select_form(&mut self, http: &reqwest::Client, slot: usize) {
        let link = match self.link(slot) {
            Some(link) => link.to_string(),
            None => {
                self.error = Some(format!("No form assigned to slot {slot}"));
                return;
            }
        };

        let outcome = fetch_form_results(http, &link).await;
        self.apply_fetch(outcome);
    }

    pub(crate) fn apply_fetch(&mut self, outcome: SheetsResult<TabularGrid>) {
        match outcome {
            Ok(grid) => {
                self.grid = grid;
                self.error = None;
            }
            Err(e) => {
                self.error = Some(e.to_string());
            }
        }
    }

    fn link(&self, slot: usize) -> Option<&str> {
        if slot == 0 || slot > FORM_LINK_SLOTS {
            return None;
        }
        self.form_links[slot - 1]
            .as_deref()
            .filter(|l| !l.is_empty())
    }

    /// Write `resultados_{email}.csv` into `dir`; no-op on an empty grid.
    pub fn export_csv(&self, dir: &Path) -> ScreenResult<Option<PathBuf>> {
        Ok(export_csv(&self.grid, dir, &self.email)?)
    }

    /// Write `resultados_{email}.pdf` into `dir`; no-op on an empty grid.
    pub fn export_pdf(&self, dir: &Path) -> ScreenResult<Option<PathBuf>> {
        Ok(export_pdf(&self.grid, dir, &self.email)?)
    }
}
