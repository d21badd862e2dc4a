//! Move execution.
//!
//! [`apply_move`] turns a legal move into the next position. Positions are
//! never edited in place; each step returns a fresh value.

use crate::movegen::is_king_in_check;
use crate::notation::{notation_prefix, with_check, with_promotion};
use crate::{MoveError, Position};
use dojo_core::{Color, ColoredPiece, Move, MoveKind, Piece, Square};

/// Outcome of applying a move.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The half-move is finished and the other side is to move.
    Complete { position: Position, notation: String },
    /// A pawn reached its last row. `position` still has the mover to move
    /// and the pawn on `square`; `notation` lacks the promotion suffix.
    AwaitingPromotion {
        position: Position,
        square: Square,
        notation: String,
    },
}

/// Applies a legal move.
///
/// # Panics
///
/// Panics if the origin square is empty. Callers only pass moves taken from
/// the legal move list.
pub fn apply_move(position: &Position, m: Move) -> Transition {
    let us = position.side_to_move;
    let board = &position.board;
    let Some(mover) = board.piece_at(m.from()) else {
        panic!("apply_move: no piece on {}", m.from());
    };

    let notation = notation_prefix(board, m);
    let is_capture = board.piece_at(m.to()).is_some() || m.kind() == MoveKind::EnPassant;

    let mut next = position.clone();
    next.board = board.after_move(m);

    if mover.piece == Piece::King {
        next.castling.remove_color(us);
    }
    // A rook leaving its corner, or anything landing on one, ends that right.
    next.castling.remove_for_corner(m.from());
    next.castling.remove_for_corner(m.to());

    next.en_passant = match m.kind() {
        MoveKind::DoublePush => m.from().offset(us.forward(), 0),
        _ => None,
    };

    if mover.piece == Piece::Pawn || is_capture {
        next.halfmove_clock = 0;
    } else {
        next.halfmove_clock += 1;
    }

    if mover.piece == Piece::Pawn && m.to().row() == us.promotion_row() {
        return Transition::AwaitingPromotion {
            position: next,
            square: m.to(),
            notation,
        };
    }

    let (position, notation) = finalize(next, notation);
    Transition::Complete { position, notation }
}

/// Replaces the pawn on `square` with `kind` and finishes the half-move.
///
/// `position` and `prefix` come from [`Transition::AwaitingPromotion`].
pub fn resolve_promotion(
    position: &Position,
    square: Square,
    prefix: &str,
    kind: Piece,
) -> Result<(Position, String), MoveError> {
    if !kind.is_promotion_choice() {
        return Err(MoveError::InvalidPromotion(kind));
    }
    let us = position.side_to_move;
    if position.piece_at(square) != Some(ColoredPiece::new(Piece::Pawn, us))
        || square.row() != us.promotion_row()
    {
        return Err(MoveError::NoPendingPromotion);
    }

    let mut next = position.clone();
    next.board.put(square, ColoredPiece::new(kind, us));
    Ok(finalize(next, with_promotion(prefix, kind)))
}

/// Hands the move to the other side and adds the check marker.
fn finalize(mut position: Position, notation: String) -> (Position, String) {
    let us = position.side_to_move;
    if us == Color::Black {
        position.fullmove_number += 1;
    }
    position.side_to_move = us.opposite();
    let gives_check = is_king_in_check(&position.board, position.side_to_move);
    (position, with_check(notation, gives_check))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::movegen::generate_moves;

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    fn find(position: &Position, from: &str, to: &str) -> Move {
        generate_moves(position).find(sq(from), sq(to)).unwrap()
    }

    fn complete(t: Transition) -> (Position, String) {
        match t {
            Transition::Complete { position, notation } => (position, notation),
            other => panic!("expected a complete transition, got {:?}", other),
        }
    }

    #[test]
    fn double_push_sets_en_passant_target() {
        let pos = Position::startpos();
        let (next, notation) = complete(apply_move(&pos, find(&pos, "e2", "e4")));
        assert_eq!(notation, "e4");
        assert_eq!(next.side_to_move, Color::Black);
        assert_eq!(next.en_passant, Some(sq("e3")));
        assert_eq!(next.halfmove_clock, 0);
        assert_eq!(next.fullmove_number, 1);
        // the input is untouched
        assert_eq!(pos, Position::startpos());
    }

    #[test]
    fn target_lives_one_half_move() {
        let pos = Position::startpos();
        let (pos, _) = complete(apply_move(&pos, find(&pos, "e2", "e4")));
        let (pos, _) = complete(apply_move(&pos, find(&pos, "g8", "f6")));
        assert_eq!(pos.en_passant, None);
        assert_eq!(pos.halfmove_clock, 1);
        assert_eq!(pos.fullmove_number, 2);
    }

    #[test]
    fn en_passant_capture() {
        let pos = Position::from_fen("4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1").unwrap();
        let (pos, _) = complete(apply_move(&pos, find(&pos, "d7", "d5")));
        assert_eq!(pos.en_passant, Some(sq("d6")));
        let (pos, notation) = complete(apply_move(&pos, find(&pos, "e5", "d6")));
        assert_eq!(notation, "exd6 e.p.");
        assert_eq!(pos.piece_at(sq("d5")), None);
        assert_eq!(
            pos.piece_at(sq("d6")),
            Some(ColoredPiece::new(Piece::Pawn, Color::White))
        );
    }

    #[test]
    fn castling_moves_rook_and_clears_rights() {
        let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let (next, notation) = complete(apply_move(&pos, find(&pos, "e1", "g1")));
        assert_eq!(notation, "O-O");
        assert_eq!(
            next.piece_at(Square::F1),
            Some(ColoredPiece::new(Piece::Rook, Color::White))
        );
        assert_eq!(next.piece_at(Square::H1), None);
        assert!(!next.castling.can_castle_kingside(Color::White));
        assert!(!next.castling.can_castle_queenside(Color::White));
        assert!(next.castling.can_castle_kingside(Color::Black));
    }

    #[test]
    fn rook_move_and_capture_clear_matching_rights() {
        let pos = Position::from_fen("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1").unwrap();
        let (next, notation) = complete(apply_move(&pos, find(&pos, "a1", "a8")));
        assert_eq!(notation, "Rxa8+");
        assert!(!next.castling.can_castle_queenside(Color::White));
        assert!(next.castling.can_castle_kingside(Color::White));
        assert!(!next.castling.can_castle_queenside(Color::Black));
        assert!(next.castling.can_castle_kingside(Color::Black));
    }

    #[test]
    fn check_marker() {
        let pos = Position::from_fen("4k3/8/8/8/8/8/8/R3K3 w - - 0 1").unwrap();
        let (_, notation) = complete(apply_move(&pos, find(&pos, "a1", "a8")));
        assert_eq!(notation, "Ra8+");
    }

    #[test]
    fn promotion_pauses_then_resolves() {
        let pos = Position::from_fen("k7/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let Transition::AwaitingPromotion {
            position,
            square,
            notation,
        } = apply_move(&pos, find(&pos, "e7", "e8"))
        else {
            panic!("expected a promotion pause");
        };
        assert_eq!(square, sq("e8"));
        assert_eq!(notation, "e8");
        assert_eq!(position.side_to_move, Color::White);

        let (done, notation) = resolve_promotion(&position, square, &notation, Piece::Queen).unwrap();
        assert_eq!(notation, "e8=Q+");
        assert_eq!(done.side_to_move, Color::Black);
        assert_eq!(
            done.piece_at(square),
            Some(ColoredPiece::new(Piece::Queen, Color::White))
        );

        let (_, quiet) = resolve_promotion(&position, square, "e8", Piece::Knight).unwrap();
        assert_eq!(quiet, "e8=N");
    }

    #[test]
    fn promotion_kind_checked() {
        let pos = Position::from_fen("k7/4P3/8/8/8/8/8/4K3 w - - 0 1").unwrap();
        let Transition::AwaitingPromotion { position, square, .. } =
            apply_move(&pos, find(&pos, "e7", "e8"))
        else {
            panic!("expected a promotion pause");
        };
        assert_eq!(
            resolve_promotion(&position, square, "e8", Piece::King),
            Err(MoveError::InvalidPromotion(Piece::King))
        );
        assert_eq!(
            resolve_promotion(&position, square, "e8", Piece::Pawn),
            Err(MoveError::InvalidPromotion(Piece::Pawn))
        );
        assert_eq!(
            resolve_promotion(&position, sq("e7"), "e8", Piece::Queen),
            Err(MoveError::NoPendingPromotion)
        );
    }
}
