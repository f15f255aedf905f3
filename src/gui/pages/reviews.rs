// src/gui/pages/reviews.rs
use eframe::egui::{ self, RichText };
use egui_extras::{ Column, TableBuilder };

use crate::core::text::preview;
use crate::gui::app::App;
use crate::model::SentimentLabel;
use crate::pipeline::SourceAnalysis;
use crate::report::SourceDetail;

use super::Page;

pub struct ReviewsPage;
pub static PAGE: ReviewsPage = ReviewsPage;

impl Page for ReviewsPage {
    fn title(&self) -> &'static str { "Reviews" }

    fn hint(&self) -> Option<&'static str> {
        Some("Classified reviews of the selected source")
    }

    fn draw(&self, ui: &mut egui::Ui, app: &mut App) {
        let Some(batch) = &app.batch else {
            ui.label("Run an analysis to see individual reviews.");
            return;
        };
        let Some(src) = app.state.gui.selected_source.as_deref().and_then(|l| batch.source(l)) else {
            ui.label("Select a source on the left.");
            return;
        };

        header(ui, src, &src.detail());
        ui.separator();
        table(ui, src);
    }
}

fn header(ui: &mut egui::Ui, src: &SourceAnalysis, d: &SourceDetail) {
    ui.heading(&src.source_label);
    ui.label(RichText::new(format!("{} reviews, read as {}", src.records.len(), src.grammar)).weak());

    let rating = match d.average_rating {
        Some(avg) => format!("Average rating {avg:.2} / 5.0"),
        None => s!("No explicit ratings"),
    };
    ui.label(rating);

    let dist = d.rating_distribution
        .iter()
        .enumerate()
        .map(|(i, n)| format!("{}★ {}", i + 1, n))
        .collect::<Vec<_>>()
        .join("   ");
    ui.label(RichText::new(dist).monospace());

    if let Some(best) = d.most_positive.and_then(|r| src.records.get(r.index).map(|rec| (r.score, rec))) {
        ui.label(format!("Most positive ({:.3}): {}", best.0, preview(&best.1.text, 120)));
    }
    if let Some(worst) = d.most_negative.and_then(|r| src.records.get(r.index).map(|rec| (r.score, rec))) {
        ui.label(format!("Most negative ({:.3}): {}", worst.0, preview(&worst.1.text, 120)));
    }
    if !d.discrepancies.is_empty() {
        ui.label(format!("{} reviews where stars and sentiment disagree", d.discrepancies.len()));
    }

    ui.add_space(6.0);
    ui.horizontal_top(|ui| {
        menu_items(ui, d);
        ui.add_space(24.0);
        aspects(ui, "Praised", &d.positive_aspects);
        ui.add_space(24.0);
        aspects(ui, "Complaints", &d.negative_aspects);
    });
}

fn menu_items(ui: &mut egui::Ui, d: &SourceDetail) {
    ui.vertical(|ui| {
        ui.strong("Menu items");
        if d.item_mentions.is_empty() {
            ui.label(RichText::new("none mentioned").weak());
            return;
        }
        egui::Grid::new("menu_items").num_columns(4).striped(true).show(ui, |ui| {
            for h in ["Item", "+", "−", "Total"] {
                ui.label(RichText::new(h).weak());
            }
            ui.end_row();
            for m in &d.item_mentions {
                ui.label(m.item);
                ui.label(RichText::new(m.positive.to_string()).color(label_color(SentimentLabel::Positive)));
                ui.label(RichText::new(m.negative.to_string()).color(label_color(SentimentLabel::Negative)));
                ui.label(m.total().to_string());
                ui.end_row();
            }
        });
    });
}

fn aspects(ui: &mut egui::Ui, title: &str, found: &[&'static str]) {
    ui.vertical(|ui| {
        ui.strong(title);
        if found.is_empty() {
            ui.label(RichText::new("none").weak());
        }
        for a in found {
            ui.label(format!("• {a}"));
        }
    });
}

fn table(ui: &mut egui::Ui, src: &SourceAnalysis) {
    TableBuilder::new(ui)
        .id_salt(("reviews_table", &src.source_label))
        .striped(true)
        .column(Column::exact(40.0))
        .column(Column::exact(90.0))
        .column(Column::exact(60.0))
        .column(Column::remainder().clip(true))
        .header(22.0, |mut h| {
            h.col(|ui| { ui.strong("Stars"); });
            h.col(|ui| { ui.strong("Sentiment"); });
            h.col(|ui| { ui.strong("Score"); });
            h.col(|ui| { ui.strong("Review"); });
        })
        .body(|body| {
            body.rows(20.0, src.records.len(), |mut row| {
                let rec = &src.records[row.index()];
                row.col(|ui| {
                    ui.label(rec.rating.map(|r| r.to_string()).unwrap_or_else(|| s!("–")));
                });
                row.col(|ui| {
                    let label = rec.label().unwrap_or(SentimentLabel::Neutral);
                    ui.label(RichText::new(label.as_str()).color(label_color(label)));
                });
                row.col(|ui| {
                    ui.label(rec.sentiment().map(|s| format!("{:.3}", s.score)).unwrap_or_default());
                });
                row.col(|ui| {
                    ui.label(preview(&rec.text, 160)).on_hover_text(&rec.text);
                });
            });
        });
}

fn label_color(label: SentimentLabel) -> egui::Color32 {
    match label {
        SentimentLabel::Positive => egui::Color32::from_rgb(0x4C, 0xAF, 0x50),
        SentimentLabel::Negative => egui::Color32::from_rgb(0xDC, 0x61, 0x49),
        SentimentLabel::Neutral => egui::Color32::GRAY,
    }
}
