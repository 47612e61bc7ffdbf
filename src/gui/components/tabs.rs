// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself. On switch, the
// table view is rebuilt from the canonical cache. When the output
// field still shows the previous tab's default DIR, the DIR migrates to
// the new tab's default while the file name is preserved.

use std::path::{Path, PathBuf};

use eframe::egui;

use crate::config::options::ExportOptions;
use crate::gui::{app::App, router};

fn norm(p: &Path) -> PathBuf { p.components().collect() }

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let pages = router::all_pages();
        let cur = app.current_index();

        for (idx, page) in pages.iter().enumerate() {
            let selected = idx == cur;

            if ui.selectable_label(selected, page.label()).clicked() && !selected {
                let prev = app.current_page_kind();
                app.set_current_index(idx);
                let new_kind = page.kind();
                logf!("UI: Tab switch {:?} → {:?}", prev, new_kind);

                app.rebuild_view();

                // ----- DIR migration logic -----
                let export = &mut app.state.options.export;
                let prev_default = ExportOptions::default_dir_for(prev);
                let new_default = ExportOptions::default_dir_for(new_kind);

                let text_path = Path::new(&app.out_path_text);
                let dir_in_text = text_path
                    .parent()
                    .map(|pp| pp.to_path_buf())
                    .unwrap_or_else(|| export.current_dir().to_path_buf());

                if norm(&dir_in_text) == norm(&prev_default) {
                    export.set_default_dir_for_page(new_kind);

                    let file_name = text_path
                        .file_name()
                        .map(|s| s.to_owned())
                        .unwrap_or_else(|| {
                            export.out_path().file_name().unwrap_or_default().to_owned()
                        });
                    app.out_path_text =
                        ExportOptions::join_dir_and_filename(&new_default, PathBuf::from(file_name))
                            .to_string_lossy()
                            .into_owned();

                    // User edits remain "dirty" until applied; don't touch the flag.
                }
            }
        }
    });
}
