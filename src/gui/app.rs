// src/gui/app.rs
use std::{
    error::Error,
    sync::{ mpsc::{ Receiver, TryRecvError }, Arc, Mutex },
    time::Duration,
};

use eframe::egui;
use tracing::{ error, info };

use crate::{
    config::state::AppState,
    data::{ load_dashboard_ranking, DataOrigin },
    pipeline::BatchResult,
    rank::Ranking,
};

use super::{ pages::Page, router };

pub fn run(options: eframe::NativeOptions, state: AppState) -> Result<(), Box<dyn Error>> {
    eframe::run_native(
        "Review Sentiment",
        options,
        Box::new(|_cc| Ok(Box::new(App::new(state)))),
    )?;
    Ok(())
}

/// Where the ranking on screen came from.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Shown {
    Loaded(DataOrigin),
    Analysis,
}

pub struct App {
    // single source of truth (UI thread only)
    pub state: AppState,

    // what the Rankings tab shows
    pub ranking: Ranking,
    pub shown: Shown,

    // last finished analysis (Reviews tab + Export need it)
    pub batch: Option<BatchResult>,

    // status/progress (workers write here)
    pub status: Arc<Mutex<String>>,
    pub running: bool,
    pub pending: Option<Receiver<crate::Result<BatchResult>>>,
}

impl App {
    pub fn new(state: AppState) -> Self {
        let (ranking, origin) = load_dashboard_ranking(&state.options.dashboard);
        let status = origin.describe();
        info!("Init: {} sources on screen ({:?})", ranking.len(), origin);

        Self {
            state,
            ranking,
            shown: Shown::Loaded(origin),
            batch: None,
            status: Arc::new(Mutex::new(status)),
            running: false,
            pending: None,
        }
    }

    /* ---------- tiny helpers ---------- */

    #[inline]
    pub fn current_index(&self) -> usize { self.state.gui.current_page_index }

    #[inline]
    pub fn set_current_index(&mut self, idx: usize) {
        self.state.gui.current_page_index = idx.min(router::all_pages().len() - 1);
    }

    #[inline]
    pub fn current_page(&self) -> &'static dyn Page { router::page_at(self.current_index()) }

    pub fn status<T: Into<String>>(&self, msg: T) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = msg.into();
    }

    pub fn status_text(&self) -> String {
        self.status.lock().unwrap_or_else(|e| e.into_inner()).clone()
    }

    /// Pick up a finished background analysis, if any.
    fn poll_pending(&mut self) {
        let Some(rx) = &self.pending else { return };
        match rx.try_recv() {
            Ok(Ok(batch)) => {
                info!("Analyze: {} sources ranked, {} skipped", batch.sources.len(), batch.skipped.len());
                self.status(format!(
                    "Analyzed {} sources ({} skipped)",
                    batch.sources.len(),
                    batch.skipped.len()
                ));
                self.ranking = batch.ranking.clone();
                self.shown = Shown::Analysis;
                let keep = self.state.gui.selected_source.as_deref().is_some_and(|s| batch.source(s).is_some());
                if !keep {
                    self.state.gui.selected_source = batch.sources.first().map(|s| s.source_label.clone());
                }
                self.batch = Some(batch);
                self.finish_pending();
            }
            Ok(Err(e)) => {
                error!("Analyze: {}", e);
                self.status(format!("Error: {e}"));
                self.finish_pending();
            }
            Err(TryRecvError::Empty) => {}
            Err(TryRecvError::Disconnected) => {
                error!("Analyze: worker exited without a result");
                self.status("Error: analysis worker stopped");
                self.finish_pending();
            }
        }
    }

    fn finish_pending(&mut self) {
        self.pending = None;
        self.running = false;
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        self.poll_pending();
        if self.running {
            ctx.request_repaint_after(Duration::from_millis(100));
        }

        egui::SidePanel::left("sources")
            .resizable(false)
            .default_width(220.0)
            .show(ctx, |ui| {
                super::components::source_panel::draw(ui, self);
            });

        egui::CentralPanel::default().show(ctx, |ui| {
            super::components::tabs::draw(ui, self);
            ui.separator();
            let page = self.current_page();
            page.draw(ui, self);
        });
    }
}
