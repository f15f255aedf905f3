// src/gui/mod.rs
pub mod app;
pub mod router;
pub mod pages;
pub mod components;
pub mod actions;
pub mod progress;

pub use app::run;
