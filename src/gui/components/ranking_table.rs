// src/gui/components/ranking_table.rs
//
// Ranking table with an inline positive-share bar. Purely a view: returns the
// source the user clicked, if any.

use eframe::egui;
use egui_extras::{ Column, TableBuilder };

use crate::rank::Ranking;

const HEADERS: [&str; 8] = ["Rank", "Company", "Positive %", "Positive", "Negative", "Neutral", "Total", "Avg score"];

pub fn draw(ui: &mut egui::Ui, ranking: &Ranking, selected: Option<&str>) -> Option<String> {
    let mut clicked = None;

    TableBuilder::new(ui)
        .id_salt("ranking_table")
        .striped(true)
        .column(Column::exact(44.0))
        .column(Column::initial(180.0).resizable(true).clip(true))
        .column(Column::initial(180.0).at_least(120.0))
        .columns(Column::exact(64.0), 4)
        .column(Column::remainder())
        .header(24.0, |mut header| {
            for h in HEADERS {
                header.col(|ui| { ui.strong(h); });
            }
        })
        .body(|body| {
            body.rows(22.0, ranking.len(), |mut row| {
                let r = &ranking.rows()[row.index()];
                let a = r.aggregate();
                let cells = row![a.positive, a.negative, a.neutral, a.total];

                row.col(|ui| { ui.label(r.rank().to_string()); });
                row.col(|ui| {
                    let is_sel = selected == Some(a.source_label.as_str());
                    if ui.selectable_label(is_sel, &a.source_label).clicked() {
                        clicked = Some(a.source_label.clone());
                    }
                });
                row.col(|ui| {
                    let frac = (a.positive_percentage / 100.0).clamp(0.0, 1.0) as f32;
                    ui.add(egui::ProgressBar::new(frac).text(format!("{:.1}%", a.positive_percentage)));
                });
                for c in &cells {
                    row.col(|ui| {
                        ui.with_layout(egui::Layout::right_to_left(egui::Align::Center), |ui| ui.label(c));
                    });
                }
                row.col(|ui| { ui.label(format!("{:.3}", a.average_sentiment_score)); });
            });
        });

    clicked
}
