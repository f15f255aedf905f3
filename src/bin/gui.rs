// src/bin/gui.rs
#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]
use eframe::egui::ViewportBuilder;
use review_sentiment::{ config::{ options::AppOptions, state::AppState }, gui, log };

fn main() {
    if let Err(e) = log::init_file(&log::default_log_path()) {
        eprintln!("Logging disabled: {e}");
    }

    let options = match AppOptions::load(None) {
        Ok(o) => o,
        Err(e) => {
            eprintln!("Config error: {e}");
            std::process::exit(1);
        }
    };
    let state = AppState::new(options);

    let native = eframe::NativeOptions {
        viewport: ViewportBuilder::default()
            .with_inner_size([state.gui.window_w as f32, state.gui.window_h as f32]),
        ..Default::default()
    };

    if let Err(e) = gui::run(native, state) {
        eprintln!("GUI failed: {}", e);
        std::process::exit(1);
    }
}
