// src/gui/pages/mod.rs
use eframe::egui;

use crate::config::{options::PageKind, state::AppState};

pub mod missing;
pub mod results;

/// A displayable dataset tab. Unlike a multi-source scraper, one import
/// fills every page at once, so the import action lives in the side panel
/// and pages only shape their data for the screen and the export.
pub trait Page: Send + Sync + 'static {
    fn label(&self) -> &'static str;
    fn kind(&self) -> PageKind;

    /// Fallback headers when nothing has been imported yet.
    fn default_headers(&self) -> Option<&'static [&'static str]> {
        None
    }

    /// Optional: per-page column widths (in px-ish)
    fn preferred_column_widths(&self) -> Option<&'static [f32]> { None }

    /// Draw page-specific controls above the table. Returns true when a
    /// toggle changed and the view needs a rebuild.
    fn draw_controls(&self, _ui: &mut egui::Ui, _state: &mut AppState) -> bool {
        false
    }

    /// Adapt headers/rows for on-screen display (e.g. hide columns).
    fn view_for_display(
        &self,
        _state: &AppState,
        headers: &Option<Vec<String>>,
        rows: &[Vec<String>],
    ) -> (Option<Vec<String>>, Vec<Vec<String>>) {
        (headers.clone(), rows.to_vec())
    }

    /// Transform headers/rows for export/copy.
    fn view_for_export(
        &self,
        _state: &AppState,
        headers: &Option<Vec<String>>,
        rows: &[Vec<String>],
    ) -> (Option<Vec<String>>, Vec<Vec<String>>) {
        // default: pass-through
        (headers.clone(), rows.to_vec())
    }
}
