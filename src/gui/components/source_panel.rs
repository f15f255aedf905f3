// src/gui/components/source_panel.rs
//
// Left panel: input directory, actions, analysed sources, status line.

use eframe::egui::{ self, widgets::Spinner };

use crate::gui::{ actions, app::App, router };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.heading("Sources");

    ui.label("Review folder:");
    ui.add(
        egui::TextEdit::singleline(&mut app.state.gui.input_dir_text)
            .font(egui::TextStyle::Monospace)
            .desired_width(f32::INFINITY),
    );

    ui.horizontal(|ui| {
        if ui.add_enabled(!app.running, egui::Button::new("Analyze")).clicked() {
            actions::analyze(app, ui.ctx());
        }
        let can_export = !app.running && app.batch.is_some();
        if ui
            .add_enabled(can_export, egui::Button::new("Export"))
            .on_disabled_hover_text("Run an analysis first")
            .clicked()
        {
            actions::export(app);
        }
        if app.running {
            ui.add(Spinner::new());
        }
    });

    ui.separator();

    let labels: Vec<String> = match &app.batch {
        Some(b) => b.sources.iter().map(|s| s.source_label.clone()).collect(),
        None => app.ranking.rows().iter().map(|r| s!(r.source_label())).collect(),
    };

    egui::ScrollArea::vertical()
        .id_salt("sources_panel_scroll")
        .max_height(ui.available_height() - 48.0)
        .show(ui, |ui| {
            let w = ui.available_width();
            ui.set_min_width(w);
            for label in &labels {
                let is_sel = app.state.gui.selected_source.as_deref() == Some(label.as_str());
                if ui.selectable_label(is_sel, label).clicked() {
                    app.state.gui.selected_source = Some(label.clone());
                    if let Some(ix) = router::index_of("Reviews") {
                        app.set_current_index(ix);
                    }
                }
            }
            if let Some(b) = &app.batch {
                for s in &b.skipped {
                    ui.label(egui::RichText::new(format!("{} (skipped)", s.source_label)).weak())
                        .on_hover_text(s.reason.to_string());
                }
            }
        });

    ui.separator();
    ui.label(app.status_text());
}
