// src/gui/components/import_panel.rs
//
// Left panel: import parameters and the Import action. One click fetches
// the page, fills both tabs and refreshes the local cache.

use eframe::egui;

use crate::{
    config::options::PageKind::{self, *},
    gui::{app::App, progress::GuiProgress},
    roster, runner,
    specs::results,
    store,
};

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Import FFME");
    ui.separator();

    ui.label("Results URL:");
    ui.add(
        egui::TextEdit::singleline(&mut app.url_text)
            .font(egui::TextStyle::Monospace)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(6.0);
    ui.label("Club (filter):");
    ui.add(
        egui::TextEdit::singleline(&mut app.club_text).desired_width(f32::INFINITY),
    );

    ui.add_space(6.0);
    ui.label("Roster CSV (optional):");
    ui.add(
        egui::TextEdit::singleline(&mut app.roster_text)
            .font(egui::TextStyle::Monospace)
            .desired_width(f32::INFINITY),
    );

    ui.add_space(10.0);

    let red = egui::Color32::from_rgb(220, 30, 30);
    let clicked = ui
        .add_enabled(
            !app.running,
            egui::Button::new(
                egui::RichText::new("IMPORT").color(egui::Color32::BLACK).strong(),
            )
            .fill(red),
        )
        .clicked();

    if clicked {
        import(app);
    }

    ui.add_space(10.0);
    ui.separator();

    if let Some(title) = &app.title {
        ui.label(egui::RichText::new(title).strong());
        ui.add_space(4.0);
    }

    if let Some(ds) = app.raw_data.get(&Results) {
        ui.label(format!("Results: {}", ds.row_count()));
    }
    if app.roster_count > 0 {
        ui.label(format!("Roster: {}", app.roster_count));
    }
    if let Some(ds) = app.raw_data.get(&Missing) {
        if ds.row_count() > 0 {
            ui.colored_label(
                egui::Color32::from_rgb(180, 120, 0),
                format!("⚠ {} competitor(s) without a result", ds.row_count()),
            );
        }
    }

    ui.with_layout(egui::Layout::bottom_up(egui::Align::LEFT), |ui| {
        let status = app.status.lock().unwrap().clone();
        ui.label(status);
    });
}

fn import(app: &mut App) {
    app.sync_form_into_import();
    app.running = true;

    logf!(
        "Import: Begin url=\"{}\" club=\"{}\"",
        app.url_text,
        app.club_text
    );

    let mut prog = GuiProgress::new(app.status.clone());

    // → This is where the import happens ←
    let outcome = runner::import(&app.state.options.import, Some(&mut prog));

    match outcome {
        Ok(out) => {
            logf!(
                "Import: OK results={} missing={} roster={}",
                out.results.len(),
                out.missing.len(),
                out.roster_count
            );

            app.title = out.title;
            app.roster_count = out.roster_count;

            let had_results = !out.results.is_empty();
            let datasets: [(PageKind, store::DataSet); 2] = [
                (Results, results::to_dataset(&out.results)),
                (Missing, roster::missing_dataset(&out.missing)),
            ];
            for (kind, ds) in datasets {
                match store::save_dataset(&kind, &ds) {
                    Ok(p) => logf!("Cache: Saved {:?} → {}", kind, p.display()),
                    Err(e) => loge!("Cache: Save failed {:?}: {}", kind, e),
                }
                app.raw_data.insert(kind, ds);
            }

            app.rebuild_view();

            if !had_results {
                app.status("No results matched this club");
            } else if out.roster_count > 0 {
                app.status(format!(
                    "Imported {} result(s), {} without a result",
                    app.raw_data[&Results].row_count(),
                    app.raw_data[&Missing].row_count(),
                ));
            } else {
                app.status(format!(
                    "Imported {} result(s)",
                    app.raw_data[&Results].row_count()
                ));
            }
        }
        Err(e) => {
            loge!("Import: Error: {}", e);
            app.status(format!("Error: {e}"));
        }
    }

    app.running = false;
}
