// src/gui/components/export_bar.rs

use eframe::egui;

use crate::{
    config::options::ExportFormat,
    csv, file,
    gui::app::App,
};

#[derive(Clone, Copy, PartialEq, Eq)]
enum UiFormat { Csv, Tsv }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    {
        let export = &mut app.state.options.export;

        // --- Format + Include headers ---
        let prev_fmt = match export.format {
            ExportFormat::Csv => UiFormat::Csv,
            ExportFormat::Tsv => UiFormat::Tsv,
        };
        let mut fmt = prev_fmt;

        ui.horizontal(|ui| {
            ui.label("Format:");
            ui.selectable_value(&mut fmt, UiFormat::Csv, "CSV");
            ui.selectable_value(&mut fmt, UiFormat::Tsv, "TSV");
        });

        if fmt != prev_fmt {
            export.format = match fmt {
                UiFormat::Csv => ExportFormat::Csv,
                UiFormat::Tsv => ExportFormat::Tsv,
            };
            logf!("UI: Export format → {:?}", export.format);
            if !app.out_path_dirty {
                app.out_path_text = export.out_path().to_string_lossy().into_owned();
            }
        }

        let before_headers = export.include_headers;
        ui.checkbox(&mut export.include_headers, "Include headers");
        if export.include_headers != before_headers {
            logf!("UI: Include_headers → {}", export.include_headers);
        }
    }

    // --- Page-specific controls ---
    {
        let page = app.current_page();
        if page.draw_controls(ui, &mut app.state) {
            app.rebuild_view();
        }
    }

    // --- Output field ---
    ui.horizontal(|ui| {
        ui.label("Output:");
        if ui
            .add(egui::TextEdit::singleline(&mut app.out_path_text)
                .font(egui::TextStyle::Monospace))
            .changed()
        {
            app.out_path_dirty = true;
            logd!("UI: out_path_text changed (dirty=true) → {}", app.out_path_text);
        }
    });

    // --- Actions (Copy / Export) ---
    let cur_kind = app.current_page_kind();
    ui.horizontal(|ui| {
        let get_raw = |app: &App| app.raw_data.get(&cur_kind).cloned();

        // Copy
        if ui.button("Copy").clicked() {
            if app.rows.is_empty() {
                app.status("Nothing to copy");
                logd!("Copy: Clicked, but there's nothing to copy");
            } else if let Some(raw_ds) = get_raw(app) {
                let page = app.current_page();
                let (h, r) = page.view_for_export(&app.state, &raw_ds.headers, &raw_ds.rows);
                logf!(
                    "Copy: page={:?}, rows={}, headers={}",
                    cur_kind,
                    r.len(),
                    h.as_ref().map(|x| x.len()).unwrap_or(0)
                );
                let export = &app.state.options.export;
                let txt = csv::to_export_string(&h, &r, export.include_headers, export.delim());
                ui.ctx().copy_text(txt);
                app.status("Copied to clipboard");
            } else {
                app.status("Nothing to copy (no cached data)");
            }
        }

        // Export
        if ui.button("Export").clicked() {
            if app.rows.is_empty() {
                app.status("Nothing to export");
                logd!("Export: Clicked, but there's nothing to export");
            } else {
                if app.out_path_dirty {
                    app.state.options.export.set_path(&app.out_path_text);
                    logf!(
                        "Export: Out path set → {}",
                        app.state.options.export.out_path().display()
                    );
                    app.out_path_dirty = false;
                }

                if let Some(raw_ds) = get_raw(app) {
                    let page = app.current_page();
                    let (h, r) = page.view_for_export(&app.state, &raw_ds.headers, &raw_ds.rows);

                    let export = &app.state.options.export;
                    logf!(
                        "Export: Begin page={:?}, rows={}, headers={}",
                        cur_kind,
                        r.len(),
                        h.as_ref().map(|hh| hh.len()).unwrap_or(0)
                    );

                    match file::write_export_single(export, &h, &r) {
                        Ok(path) => {
                            logf!("Export: OK → {}", path.display());
                            app.status(format!("Exported: {}", path.display()));
                        }
                        Err(e) => {
                            loge!("Export: Error: {}", e);
                            app.status(format!("Export error: {e}"));
                        }
                    }
                } else {
                    app.status("Nothing to export (no cached data)");
                }
            }
        }
    });
}
