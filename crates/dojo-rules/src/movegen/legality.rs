//! Legality filter: simulate each candidate and discard self-check.

use super::attacks::{is_king_in_check, is_square_attacked};
use super::geometry::pseudo_legal_moves;
use super::MoveList;
use crate::{Board, CastlingRights};
use dojo_core::{Color, Move, MoveKind, Square};

/// Returns the legal moves of the `color` piece standing on `sq`.
///
/// An empty square or a piece of the other color yields an empty list. With
/// `enforce_castling_safety` set, castling is also refused while the king
/// is attacked or when it would pass through an attacked square.
pub fn legal_moves(
    board: &Board,
    sq: Square,
    castling: CastlingRights,
    en_passant: Option<Square>,
    color: Color,
    enforce_castling_safety: bool,
) -> MoveList {
    let Some(piece) = board.piece_at(sq).filter(|p| p.color == color) else {
        return MoveList::new();
    };

    let mut moves = pseudo_legal_moves(board, sq, piece, castling, en_passant);
    moves.retain(|m| {
        if enforce_castling_safety && m.kind().is_castling() && !castling_is_safe(board, *m, color) {
            return false;
        }
        !is_king_in_check(&board.after_move(*m), color)
    });
    moves
}

/// Checks the two castling conditions the general self-check rule misses.
fn castling_is_safe(board: &Board, m: Move, color: Color) -> bool {
    let them = color.opposite();
    if is_square_attacked(board, m.from(), them) {
        return false;
    }
    let step = match m.kind() {
        MoveKind::CastleKingside => 1,
        _ => -1,
    };
    let Some(pass) = m.from().offset(0, step) else {
        return false;
    };
    // Step the king alone onto the pass-through square and look again.
    let passing = board.after_move(Move::normal(m.from(), pass));
    !is_square_attacked(&passing, pass, them)
}
