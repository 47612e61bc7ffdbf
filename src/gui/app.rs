// src/gui/app.rs
use std::{
    collections::HashMap,
    error::Error,
    sync::{Arc, Mutex},
};

use eframe::egui;

use crate::{
    config::{
        options::{PageKind, PageSource},
        state::AppState,
    },
    store::{self, DataSet},
};

use super::{pages::Page, router};

pub fn run(options: eframe::NativeOptions) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "FFME Results Import",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(AppState::default())))),
    )?;
    Ok(())
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // import form UX (mapped into ImportOptions on Import)
    pub url_text: String,
    pub club_text: String,
    pub roster_text: String,

    // output text field UX (we map this <-> ExportOptions)
    pub out_path_text: String,
    pub out_path_dirty: bool,

    // last import context
    pub title: Option<String>,
    pub roster_count: usize,

    // in-memory display for CURRENT page
    pub headers: Option<Vec<String>>,
    pub rows: Vec<Vec<String>>,

    // status/progress
    pub status: Arc<Mutex<String>>,
    pub running: bool,

    // per-page canonical data
    pub raw_data: HashMap<PageKind, DataSet>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let mut status = s!("Idle");

        // initial form text from options
        let url_text = match &state.options.import.source {
            PageSource::Url(u) => u.clone(),
            PageSource::File(p) => p.to_string_lossy().into_owned(),
        };
        let club_text = state.options.import.club.clone();
        let roster_text = state
            .options
            .import
            .roster_path
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
            .unwrap_or_default();
        let out_path_text = state.options.export.out_path().to_string_lossy().into_owned();

        // canonical cache(s) from disk
        let mut raw_data: HashMap<PageKind, DataSet> = HashMap::new();
        for p in router::all_pages() {
            let k = p.kind();
            match store::load_dataset(&k) {
                Ok(ds) => {
                    if ds.rows.is_empty() {
                        logd!("Cache: {:?} is empty, skipping", k);
                        continue;
                    }
                    logf!(
                        "Cache: Loaded {:?} (rows={}, headers={})",
                        k,
                        ds.row_count(),
                        ds.header_count()
                    );
                    raw_data.insert(k, ds);
                    status = s!("Loaded local data");
                }
                Err(e) => {
                    logd!("Cache: Missing {:?} ({})", k, e);
                }
            }
        }

        let mut app = Self {
            state,
            url_text,
            club_text,
            roster_text,
            out_path_text,
            out_path_dirty: false,
            title: None,
            roster_count: 0,
            headers: None,
            rows: Vec::new(),
            status: Arc::new(Mutex::new(status)),
            running: false,
            raw_data,
        };
        app.rebuild_view();
        app
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) { self.state.gui.current_page_index = idx; }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::all_pages()[self.current_index()] }

    #[inline]
    pub fn current_page_kind(&self) -> PageKind { self.current_page().kind() }

    #[inline]
    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap() = msg.into();
    }

    /// Rebuild headers/rows for the current tab from the canonical data.
    pub fn rebuild_view(&mut self) {
        let page = self.current_page();
        let kind = page.kind();

        let (headers, rows) = match self.raw_data.get(&kind) {
            Some(ds) => page.view_for_display(&self.state, &ds.headers, &ds.rows),
            None => {
                let headers = page
                    .default_headers()
                    .map(|hs| hs.iter().map(|h| s!(*h)).collect());
                (headers, Vec::new())
            }
        };
        self.headers = headers;
        self.rows = rows;
    }

    /// Mirror the form text fields → options.import.
    pub fn sync_form_into_import(&mut self) {
        use std::path::PathBuf;
        let import = &mut self.state.options.import;
        import.source = PageSource::Url(self.url_text.trim().to_string());
        import.club = self.club_text.trim().to_string();
        let roster = self.roster_text.trim();
        import.roster_path = if roster.is_empty() {
            None
        } else {
            Some(PathBuf::from(roster))
        };
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        egui::SidePanel::left("import")
            .resizable(false)
            .default_width(260.0)
            .show(ctx, |ui| {
                super::components::import_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);

            ui.separator();

            super::components::export_bar::draw(ui, self);

            ui.separator();

            super::components::data_table::draw(ui, self);
        });
    }
}
