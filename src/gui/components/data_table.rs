// src/gui/components/data_table.rs
//
// Draws the live table. Fills headers from page defaults if None.
// Purely a view; never mutates the canonical data.

use eframe::egui::{self, RichText, TextWrapMode};
use egui_extras::{Column, TableBuilder};

use crate::gui::app::App;

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    let page = app.current_page();

    // Prefer live headers; fall back to the page's known headers.
    let hdrs = app.headers.clone()
        .or_else(|| page.default_headers().map(|s| s.iter().map(|x| s!(*x)).collect()));
    app.headers = hdrs;

    let cols = app.headers.as_ref()
        .map(|h| h.len())
        .or_else(|| app.rows.first().map(|r| r.len()))
        .unwrap_or(0);
    if cols == 0 {
        ui.weak("Nothing imported yet.");
        return;
    }

    let widths: Vec<f32> = match page.preferred_column_widths() {
        Some(ws) => {
            let mut v: Vec<f32> = ws.to_vec();
            v.resize(cols, 80.0);
            v
        }
        None => vec![80.0; cols],
    };

    // Reserve space instead of overlaying content
    {
        let s = &mut ui.style_mut().spacing.scroll;
        s.floating = false;
        s.bar_width = 10.0;
        s.handle_min_length = 48.0;
        s.foreground_color = true;
        let visuals = &mut ui.style_mut().visuals;
        visuals.extreme_bg_color = visuals.panel_fill;
    }

    let avail_h = ui.available_height();
    egui::ScrollArea::horizontal()
        .id_salt("table_hscroll")
        .min_scrolled_height(avail_h)
        .max_height(avail_h)
        .show(ui, |ui| {
            let mut table = TableBuilder::new(ui)
                .striped(true)
                .vscroll(true)
                .cell_layout(egui::Layout::left_to_right(egui::Align::Center));
            for w in &widths {
                table = table.column(Column::initial(*w).resizable(true));
            }

            table
                .header(22.0, |mut header| {
                    if let Some(hs) = &app.headers {
                        for h in hs {
                            header.col(|ui| {
                                ui.label(RichText::new(h).strong());
                            });
                        }
                    }
                })
                .body(|body| {
                    body.rows(20.0, app.rows.len(), |mut row| {
                        let r = &app.rows[row.index()];
                        for cell in r {
                            row.col(|ui| {
                                ui.style_mut().wrap_mode = Some(TextWrapMode::Truncate);
                                ui.label(cell);
                            });
                        }
                    });
                });
        });
}
