//! Pseudo-legal move geometry for each piece kind.
//!
//! Nothing here looks at king safety. Castling is offered whenever the right
//! is held and the squares between king and rook are empty; the legality
//! filter decides the rest.

use super::attacks::{DIAGONAL, KING_OFFSETS, KNIGHT_OFFSETS, ORTHOGONAL};
use super::MoveList;
use crate::{Board, CastlingRights};
use dojo_core::{ColoredPiece, Move, MoveKind, Piece, Square};

/// Generates the pseudo-legal moves of `piece` standing on `sq`.
pub fn pseudo_legal_moves(
    board: &Board,
    sq: Square,
    piece: ColoredPiece,
    castling: CastlingRights,
    en_passant: Option<Square>,
) -> MoveList {
    let mut moves = MoveList::new();
    match piece.piece {
        Piece::Pawn => pawn_moves(board, sq, piece, en_passant, &mut moves),
        Piece::Knight => step_moves(board, sq, piece, &KNIGHT_OFFSETS, &mut moves),
        Piece::Bishop => slide_moves(board, sq, piece, &DIAGONAL, &mut moves),
        Piece::Rook => slide_moves(board, sq, piece, &ORTHOGONAL, &mut moves),
        Piece::Queen => {
            slide_moves(board, sq, piece, &ORTHOGONAL, &mut moves);
            slide_moves(board, sq, piece, &DIAGONAL, &mut moves);
        }
        Piece::King => {
            step_moves(board, sq, piece, &KING_OFFSETS, &mut moves);
            castling_moves(board, sq, piece, castling, &mut moves);
        }
    }
    moves
}

fn pawn_moves(
    board: &Board,
    sq: Square,
    pawn: ColoredPiece,
    en_passant: Option<Square>,
    moves: &mut MoveList,
) {
    let forward = pawn.color.forward();

    if let Some(one) = sq.offset(forward, 0) {
        if board.is_empty(one) {
            moves.push(Move::normal(sq, one));

            if sq.row() == pawn.color.pawn_row() {
                if let Some(two) = one.offset(forward, 0) {
                    if board.is_empty(two) {
                        moves.push(Move::new(sq, two, MoveKind::DoublePush));
                    }
                }
            }
        }
    }

    for dc in [-1, 1] {
        let Some(target) = sq.offset(forward, dc) else {
            continue;
        };
        if ColoredPiece::is_opponent(Some(pawn), board.piece_at(target)) {
            moves.push(Move::normal(sq, target));
        } else if en_passant == Some(target)
            && board.is_empty(target)
            && board.piece_at(sq.with_col(target.col()))
                == Some(ColoredPiece::new(Piece::Pawn, pawn.color.opposite()))
        {
            moves.push(Move::new(sq, target, MoveKind::EnPassant));
        }
    }
}

fn step_moves(
    board: &Board,
    sq: Square,
    piece: ColoredPiece,
    offsets: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(dr, dc) in offsets {
        if let Some(target) = sq.offset(dr, dc) {
            if board.color_at(target) != Some(piece.color) {
                moves.push(Move::normal(sq, target));
            }
        }
    }
}

fn slide_moves(
    board: &Board,
    sq: Square,
    piece: ColoredPiece,
    dirs: &[(i8, i8)],
    moves: &mut MoveList,
) {
    for &(dr, dc) in dirs {
        let mut cur = sq;
        while let Some(target) = cur.offset(dr, dc) {
            match board.color_at(target) {
                None => moves.push(Move::normal(sq, target)),
                Some(color) => {
                    if color != piece.color {
                        moves.push(Move::normal(sq, target));
                    }
                    break;
                }
            }
            cur = target;
        }
    }
}

fn castling_moves(
    board: &Board,
    sq: Square,
    king: ColoredPiece,
    castling: CastlingRights,
    moves: &mut MoveList,
) {
    let us = king.color;
    // Rights imply the king is on its home square, but a hand-built board
    // may not honor that.
    if sq.row() != us.back_row() || sq.col() != 4 {
        return;
    }
    let rook = Some(ColoredPiece::new(Piece::Rook, us));

    if castling.can_castle_kingside(us)
        && board.piece_at(sq.with_col(7)) == rook
        && (5..=6).all(|col| board.is_empty(sq.with_col(col)))
    {
        moves.push(Move::new(sq, sq.with_col(6), MoveKind::CastleKingside));
    }

    if castling.can_castle_queenside(us)
        && board.piece_at(sq.with_col(0)) == rook
        && (1..=3).all(|col| board.is_empty(sq.with_col(col)))
    {
        moves.push(Move::new(sq, sq.with_col(2), MoveKind::CastleQueenside));
    }
}
