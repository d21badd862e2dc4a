//! Checkmate and stalemate detection.

use crate::movegen::{has_any_legal_move, is_king_in_check};
use crate::{GameState, Position};

/// Classifies a finalized position for its side to move.
///
/// Returns [`GameState::Checkmate`] or [`GameState::Stalemate`] when that
/// side has no legal move, else [`GameState::InProgress`].
pub fn status(position: &Position) -> GameState {
    if has_any_legal_move(position) {
        return GameState::InProgress;
    }
    if is_king_in_check(&position.board, position.side_to_move) {
        GameState::Checkmate
    } else {
        GameState::Stalemate
    }
}
