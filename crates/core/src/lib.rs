//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the board/piece state machine: the bit-packed board,
//! collision detection, landing/merge, row-clear compaction, and game-over
//! detection. It has **zero dependencies** on UI or I/O, making it:
//!
//! - **Deterministic**: no randomness, no clocks - one `update()` is one step
//! - **Testable**: every transition is reachable from the public API
//! - **Fast**: O(1) bitwise overlap tests per sub-row, O(1) row-equality
//!   tests for completion
//!
//! # Module Structure
//!
//! - [`board`]: 12-wide bit-packed grid with a floor sentinel, row clearing,
//!   and the game-over limit check
//! - [`piece`]: the falling 4x4 bitmask piece with bounds-checked shifting
//! - [`game`]: [`GameState`] - composes board + piece and owns the per-tick
//!   update state machine
//!
//! # Example
//!
//! ```
//! use tui_blockfall_core::GameState;
//! use tui_blockfall_types::{Intent, Phase};
//!
//! let mut game = GameState::new();
//! assert_eq!(game.phase(), Phase::Spawning);
//!
//! // First update spawns the piece, later ones advance it.
//! game.update();
//! assert_eq!(game.phase(), Phase::Falling);
//! game.handle_intent(Intent::MoveRight);
//! game.update();
//! ```

pub mod board;
pub mod game;
pub mod piece;

pub use tui_blockfall_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use game::GameState;
pub use piece::Piece;
