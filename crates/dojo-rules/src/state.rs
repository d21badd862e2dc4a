//! Game state and result types.

use dojo_core::{Color, Square};
use std::fmt;

/// Where a game stands between half-moves.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum GameState {
    /// Normal play; the side to move may move.
    InProgress,
    /// A pawn has reached its last row and waits for a promotion kind.
    AwaitingPromotion {
        /// Square of the pawn to promote.
        square: Square,
        /// Notation of the half-move so far, without promotion or check suffix.
        notation: String,
    },
    /// The side to move is in check and has no legal move.
    Checkmate,
    /// The side to move is not in check and has no legal move.
    Stalemate,
}

impl GameState {
    /// Returns true if the game has ended.
    #[inline]
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameState::Checkmate | GameState::Stalemate)
    }

    /// Returns true if moves may be submitted.
    #[inline]
    pub fn accepts_moves(&self) -> bool {
        matches!(self, GameState::InProgress)
    }
}

impl fmt::Display for GameState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameState::InProgress => write!(f, "in progress"),
            GameState::AwaitingPromotion { square, .. } => {
                write!(f, "awaiting promotion on {}", square)
            }
            GameState::Checkmate => write!(f, "checkmate"),
            GameState::Stalemate => write!(f, "stalemate"),
        }
    }
}

/// Result of a finished game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameResult {
    /// White delivered checkmate.
    WhiteWins,
    /// Black delivered checkmate.
    BlackWins,
    /// Stalemate.
    Draw,
}

impl GameResult {
    /// Returns the win for the given color.
    pub const fn win_for(color: Color) -> Self {
        match color {
            Color::White => GameResult::WhiteWins,
            Color::Black => GameResult::BlackWins,
        }
    }
}

impl fmt::Display for GameResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameResult::WhiteWins => write!(f, "1-0"),
            GameResult::BlackWins => write!(f, "0-1"),
            GameResult::Draw => write!(f, "1/2-1/2"),
        }
    }
}
