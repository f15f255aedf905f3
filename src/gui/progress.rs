// src/gui/progress.rs
use std::sync::{ Arc, Mutex };
use crate::progress::Progress;

pub struct GuiProgress {
    status: Arc<Mutex<String>>,
    done: usize,
    skipped: usize,
    total: usize,
}

impl GuiProgress {
    pub fn new(status: Arc<Mutex<String>>) -> Self {
        Self { status, done: 0, skipped: 0, total: 0 }
    }
    fn set_status(&self, msg: impl Into<String>) {
        *self.status.lock().unwrap_or_else(|e| e.into_inner()) = msg.into();
    }
}

impl Progress for GuiProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.set_status(format!("Found {total} review files"));
    }
    fn log(&mut self, msg: &str) {
        self.set_status(s!(msg));
    }
    fn item_done(&mut self, source: &str, records: usize) {
        self.done += 1;
        self.set_status(format!("{} → {} reviews ({}/{})", source, records, self.done + self.skipped, self.total));
    }
    fn item_skipped(&mut self, source: &str, reason: &str) {
        self.skipped += 1;
        self.set_status(format!("Skipped {}: {} ({}/{})", source, reason, self.done + self.skipped, self.total));
    }
    fn finish(&mut self) {
        if self.total == 0 {
            self.set_status(s!("Analysis complete"));
        } else {
            self.set_status(format!("Analysis complete ({} ok, {} skipped)", self.done, self.skipped));
        }
    }
}
