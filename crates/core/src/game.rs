//! Game state module - composes board and piece
//!
//! [`GameState`] owns exactly one [`Board`] and one [`Piece`] plus the
//! game-over flag. Nothing mutates either except through its methods: the
//! tick driver calls [`update`](GameState::update), the input layer calls
//! [`handle_intent`](GameState::handle_intent), and the renderer reads.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{Intent, Phase};

/// Complete game state and the per-tick update state machine.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameState {
    board: Board,
    piece: Piece,
    game_over: bool,
    /// One horizontal move per tick: set by the first horizontal intent of
    /// a tick, cleared by `update`.
    shift_used: bool,
}

impl GameState {
    /// Create a game in its initial state: empty board, no active piece.
    pub fn new() -> Self {
        Self {
            board: Board::new(),
            piece: Piece::empty(),
            game_over: false,
            shift_used: false,
        }
    }

    /// Reinitialize unconditionally, valid from any state including game
    /// over.
    pub fn reset(&mut self) {
        *self = Self::new();
    }

    /// The persistent board, for rendering and inspection.
    pub fn board(&self) -> &Board {
        &self.board
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    /// The active piece, or `None` while no piece is falling.
    pub fn active(&self) -> Option<&Piece> {
        (!self.piece.is_empty()).then_some(&self.piece)
    }

    /// Whether the terminal game-over state has been reached.
    pub fn game_over(&self) -> bool {
        self.game_over
    }

    /// Current phase of the state machine.
    pub fn phase(&self) -> Phase {
        if self.game_over {
            Phase::GameOver
        } else if self.piece.is_empty() {
            Phase::Spawning
        } else {
            Phase::Falling
        }
    }

    /// Apply one input intent. Returns whether it changed the state.
    ///
    /// Horizontal moves are honored only while a piece is falling and at
    /// most once per tick; the first horizontal intent of a tick consumes
    /// the latch even when the shift itself is rejected, and later ones in
    /// the same batch are ignored. `Reset` is honored from any state.
    /// `Quit` belongs to the runner and is not a core transition.
    pub fn handle_intent(&mut self, intent: Intent) -> bool {
        match intent {
            Intent::MoveLeft | Intent::MoveRight => {
                if self.game_over || self.piece.is_empty() || self.shift_used {
                    return false;
                }
                self.shift_used = true;
                let dx = if intent == Intent::MoveLeft { -1 } else { 1 };
                self.piece.shift(dx, &self.board)
            }
            Intent::Reset => {
                self.reset();
                true
            }
            Intent::Quit => false,
        }
    }

    /// Advance the game by one step.
    ///
    /// - Game over: no-op until reset.
    /// - No active piece: spawn it and return - one action per tick.
    /// - Otherwise descend; on collision roll the descent back, merge the
    ///   piece into the board and destroy it, then either freeze on the
    ///   game-over limit or clear completed rows (the next tick spawns).
    pub fn update(&mut self) {
        self.shift_used = false;

        if self.game_over {
            return;
        }

        if self.piece.is_empty() {
            self.piece.spawn();
            return;
        }

        self.piece.descend();
        if !self.board.overlaps(&self.piece) {
            return;
        }

        self.piece.retreat();
        self.board.merge(&self.piece);
        self.piece.destroy();

        if self.board.is_over_limit() {
            // No row-clear, no spawn: the board freezes for postmortem
            // display.
            self.game_over = true;
            return;
        }

        self.board.clear_completed_rows();
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
