// src/gui/actions/export.rs
use chrono::Local;
use tracing::{ error, info };

use crate::{ gui::app::App, pipeline::export_batch };

pub fn export(app: &mut App) {
    let Some(batch) = &app.batch else {
        app.status("Nothing to export");
        return;
    };

    let export = &app.state.options.export;
    match export_batch(batch, export, Local::now().date_naive()) {
        Ok(paths) => {
            info!("Export: {} files → {}", paths.len(), export.out_dir.display());
            app.status(format!("Exported {} files to {}", paths.len(), export.out_dir.display()));
        }
        Err(e) => {
            error!("Export: {}", e);
            app.status(format!("Error: {e}"));
        }
    }
}
