// src/gui/pages/mod.rs
use eframe::egui;

use super::app::App;

pub mod rankings;
pub mod reviews;

/// One tab of the central panel.
pub trait Page: Send + Sync + 'static {
    fn title(&self) -> &'static str;

    /// Optional hover text on the tab.
    fn hint(&self) -> Option<&'static str> { None }

    /// Draw the page body. Must return quickly; long work goes to `actions`.
    fn draw(&self, ui: &mut egui::Ui, app: &mut App);
}
