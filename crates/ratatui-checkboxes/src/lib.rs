//! Checkbox lists for ratatui.
//!
//! The selection rules live in [`ratatui_checkboxes_core`], re-exported here as [`core`]. This
//! crate adds a rendering layer: [`checkbox_list::CheckboxListView`] draws the items, keeps a
//! cursor, and turns keys and mouse presses into engine calls.
pub use ratatui_checkboxes_core as core;

pub mod theme;

pub mod render;

pub mod checkbox_list;

pub mod help;
