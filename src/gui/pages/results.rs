// src/gui/pages/results.rs
use eframe::egui;

use crate::config::{options::PageKind, state::AppState};
use crate::specs::results::RESULT_HEADERS;

use super::Page;

pub struct ResultsPage;
pub static PAGE: ResultsPage = ResultsPage;

impl Page for ResultsPage {
    fn label(&self) -> &'static str { "Résultats" }
    fn kind(&self) -> PageKind { PageKind::Results }

    fn default_headers(&self) -> Option<&'static [&'static str]> {
        Some(&RESULT_HEADERS)
    }

    fn preferred_column_widths(&self) -> Option<&'static [f32]> {
        Some(&[60.0, 160.0, 180.0, 110.0])
    }

    fn draw_controls(&self, ui: &mut egui::Ui, state: &mut AppState) -> bool {
        ui.checkbox(
            &mut state.gui.results_show_nb,
            "Show competitor count")
            .changed()
    }

    fn view_for_display(
        &self,
        state: &AppState,
        headers: &Option<Vec<String>>,
        rows: &[Vec<String>],
    ) -> (Option<Vec<String>>, Vec<Vec<String>>) {
        if state.gui.results_show_nb {
            return (headers.clone(), rows.to_vec());
        }
        // hide the trailing "Nb compétiteurs" column
        let h = headers.as_ref().map(|h| drop_last(h));
        let r = rows.iter().map(|r| drop_last(r)).collect();
        (h, r)
    }

    fn view_for_export(
        &self,
        state: &AppState,
        headers: &Option<Vec<String>>,
        rows: &[Vec<String>],
    ) -> (Option<Vec<String>>, Vec<Vec<String>>) {
        // export mirrors the on-screen shape
        self.view_for_display(state, headers, rows)
    }
}

fn drop_last(row: &[String]) -> Vec<String> {
    let n = row.len().saturating_sub(1);
    row[..n].to_vec()
}
