// src/gui/pages/missing.rs
use crate::config::{options::PageKind, state::AppState};
use crate::roster::MISSING_HEADERS;

use super::Page;

pub struct MissingPage;
pub static PAGE: MissingPage = MissingPage;

const SEXE_COL: usize = 3;

impl Page for MissingPage {
    fn label(&self) -> &'static str { "Sans résultat" }
    fn kind(&self) -> PageKind { PageKind::Missing }

    fn default_headers(&self) -> Option<&'static [&'static str]> {
        Some(&MISSING_HEADERS)
    }

    fn preferred_column_widths(&self) -> Option<&'static [f32]> {
        Some(&[160.0, 180.0, 140.0, 80.0])
    }

    fn view_for_display(
        &self,
        _state: &AppState,
        headers: &Option<Vec<String>>,
        rows: &[Vec<String>],
    ) -> (Option<Vec<String>>, Vec<Vec<String>>) {
        // spell out the sexe code the way the operators read it
        let rows = rows
            .iter()
            .map(|r| {
                let mut r = r.to_vec();
                if let Some(cell) = r.get_mut(SEXE_COL) {
                    *cell = match cell.as_str() {
                        "F" => s!("Fille"),
                        "H" => s!("Garçon"),
                        other => s!(other),
                    };
                }
                r
            })
            .collect();
        (headers.clone(), rows)
    }
}
