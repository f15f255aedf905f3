// src/lib.rs

#[macro_use]
pub mod macros;

pub mod config;
pub mod core;
pub mod error;
pub mod log;
pub mod model;

pub mod segment;
pub mod classify;
pub mod aggregate;
pub mod rank;
pub mod report;

pub mod csv;
pub mod data;
pub mod file;
pub mod pipeline;
pub mod progress;

#[cfg(feature = "cli")]
pub mod cli;
pub mod gui;

pub use error::{Error, Result};
