// src/gui/actions/analyze.rs
use std::{ path::PathBuf, sync::mpsc, thread };

use eframe::egui;
use tracing::{ error, info };

use crate::{
    classify::LexiconModel,
    gui::{ app::App, progress::GuiProgress },
    pipeline::run_batch,
};

/// Start a batch on a worker thread. The UI thread picks up the result in
/// `App::update`.
pub fn analyze(app: &mut App, ctx: &egui::Context) {
    if app.running {
        return;
    }

    let dir = app.state.gui.input_dir_text.trim();
    if dir.is_empty() {
        app.status("Enter a folder with review files");
        return;
    }
    app.state.options.analysis.input_dir = PathBuf::from(dir);
    let opts = app.state.options.analysis.clone();
    info!("Analyze: Begin dir={}", opts.input_dir.display());

    let (tx, rx) = mpsc::channel();
    let status = app.status.clone();
    let repaint = ctx.clone();

    let spawned = thread::Builder::new()
        .name(s!("analyze"))
        .spawn(move || {
            let model = LexiconModel::new().with_max_input_chars(opts.max_input_chars);
            let mut prog = GuiProgress::new(status);

            // → This is where the analysis happens ←
            let res = run_batch(&opts, &model, Some(&mut prog));

            let _ = tx.send(res);
            repaint.request_repaint();
        });

    match spawned {
        Ok(_) => {
            app.running = true;
            app.pending = Some(rx);
            app.status("Analyzing...");
        }
        Err(e) => {
            error!("Analyze: could not start worker: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
