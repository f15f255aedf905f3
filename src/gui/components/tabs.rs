// src/gui/components/tabs.rs
//
// Renders the top tabs and performs the tab switch itself.

use eframe::egui;
use tracing::debug;

use crate::gui::{ app::App, router };

pub fn draw(ui: &mut egui::Ui, app: &mut App) {
    ui.horizontal_wrapped(|ui| {
        ui.spacing_mut().item_spacing.x = 8.0;

        let cur = app.current_index();
        for (idx, page) in router::all_pages().iter().enumerate() {
            let selected = idx == cur;
            let mut resp = ui.selectable_label(selected, page.title());
            if let Some(h) = page.hint() {
                resp = resp.on_hover_text(h);
            }
            if resp.clicked() && !selected {
                debug!("UI: Tab switch {} → {}", router::page_at(cur).title(), page.title());
                app.set_current_index(idx);
            }
        }
    });
}
