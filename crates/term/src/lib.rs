//! Terminal rendering module.
//!
//! A small, game-oriented rendering layer: game state is mapped into a
//! styled-character framebuffer, and the framebuffer is flushed to the
//! terminal with queued crossterm commands.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Keep the view pure (state in, framebuffer out) so it can be unit
//!   tested without a terminal
//! - Restore the terminal on every exit path

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_blockfall_core as core;
pub use tui_blockfall_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{GameView, Viewport};
pub use renderer::TerminalRenderer;
