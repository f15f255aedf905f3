// src/progress.rs
/// Progress reporting for batch runs (analyze/export).
/// Frontends (GUI/CLI) implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the number of sources found.
    fn begin(&mut self, _total: usize) {}

    /// Free-form status line for human eyes.
    fn log(&mut self, _msg: &str) {}

    /// One source analysed; `records` is how many reviews it yielded.
    fn item_done(&mut self, _source: &str, _records: usize) {}

    /// One source dropped from the batch.
    fn item_skipped(&mut self, _source: &str, _reason: &str) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// A no-op progress sink.
pub struct NullProgress;
impl Progress for NullProgress {}
