//! Terminal input module (core-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`tui_blockfall_types::Intent`] values and
//! provides a bounded per-tick batch so the runner can drain all pending
//! input strictly before each update.

pub mod batch;
pub mod map;

pub use tui_blockfall_types as types;

pub use batch::IntentBatch;
pub use map::map_key_event;
