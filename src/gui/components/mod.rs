// src/gui/components/mod.rs
pub mod ranking_table;
pub mod source_panel;
pub mod tabs;
