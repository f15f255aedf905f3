// src/gui/actions/mod.rs
//
// Folder module facade: re-export public entrypoints.
// Submodules stay private; consumers only see actions::{analyze,export}.

mod analyze; // src/gui/actions/analyze.rs
mod export;  // src/gui/actions/export.rs

pub use analyze::analyze;
pub use export::export;
