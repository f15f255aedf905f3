// src/gui/pages/rankings.rs
use eframe::egui::{ self, RichText };

use crate::gui::{ app::{ App, Shown }, components::ranking_table };
use crate::rank::RankingSummary;

use super::Page;

pub struct RankingsPage;
pub static PAGE: RankingsPage = RankingsPage;

impl Page for RankingsPage {
    fn title(&self) -> &'static str { "Rankings" }

    fn hint(&self) -> Option<&'static str> {
        Some("Sources ordered by share of positive reviews")
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let origin = match &app.shown {
            Shown::Analysis => s!("Live analysis"),
            Shown::Loaded(o) => o.describe(),
        };
        ui.label(RichText::new(origin).weak());

        if app.ranking.is_empty() {
            ui.add_space(12.0);
            ui.label("No sources to rank.");
            return;
        }

        summary(ui, app.ranking.summary());
        ui.separator();

        if let Some(clicked) = ranking_table::draw(ui, &app.ranking, app.state.gui.selected_source.as_deref()) {
            app.state.gui.selected_source = Some(clicked);
        }
    }
}

fn summary(ui: &mut egui::Ui, s: &RankingSummary) {
    egui::Grid::new("ranking_summary").num_columns(2).spacing([16.0, 4.0]).show(ui, |ui| {
        if let Some((label, pct)) = &s.top {
            ui.label("Top ranked");
            ui.label(format!("{label} ({pct:.1}% positive)"));
            ui.end_row();
        }
        if let Some((label, pct)) = &s.bottom {
            ui.label("Lowest ranked");
            ui.label(format!("{label} ({pct:.1}% positive)"));
            ui.end_row();
        }
        ui.label("Spread");
        ui.label(format!("{:.1} percentage points", s.spread));
        ui.end_row();
        ui.label("Average");
        ui.label(format!("{:.1}% ({} above)", s.mean_positive_percentage, s.above_mean));
        ui.end_row();
        if !s.more_negative.is_empty() {
            ui.label("More negative than positive");
            ui.label(s.more_negative.join(", "));
            ui.end_row();
        }
    });
}
