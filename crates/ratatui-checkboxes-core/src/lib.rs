//! `ratatui-checkboxes-core` tracks which items of a list are checked, which are disabled, and
//! how click, keyboard and shift-click gestures change that.
//!
//! The crate has no rendering and no event loop. You keep the item list, translate your
//! toolkit's events into [`input`] types, and pass them to [`checkboxes::Checkboxes`] along with
//! the item they target. Each call returns a [`selection::CheckboxAction`] telling you whether
//! the checked set changed.
//!
//! ## Design goals
//!
//! - Event-loop agnostic: every operation is a synchronous state transition.
//! - Total: unknown items, a missing anchor or an empty list never fail; they fall back to
//!   well-defined boundary behaviour.
//! - Toolkit-neutral: the optional `crossterm` feature adds an adapter in [`crossterm_input`];
//!   the `ratatui-checkboxes` crate provides a list widget built on this one.
//!
//! ## Getting started
//!
//! Useful entry points:
//! - [`checkboxes::Checkboxes`]: the selection engine.
//! - [`checkboxes::Checkboxes::handlers`]: per-item click/keyboard handlers.
//! - [`selection::CheckboxesOptions`]: construction and keyboard behaviour switches.
pub mod checkboxes;

#[cfg(feature = "crossterm")]
pub mod crossterm_input;

pub mod input;
pub mod keymap;
pub mod selection;
