//! Move notation generation.
//!
//! The record format is a reduced algebraic notation: piece letter (none for
//! pawns), capture marker, destination. Examples: "e4", "Nf3", "exd5",
//! "Bxc6+", "exd6 e.p.", "O-O", "e8=Q". No disambiguation and no mate sign.
//! Notation is only written, never parsed.

use crate::Board;
use dojo_core::{Move, MoveKind, Piece};

/// Returns the notation of a move up to, but excluding, any promotion or
/// check suffix.
///
/// `board` is the board BEFORE the move.
pub fn notation_prefix(board: &Board, m: Move) -> String {
    match m.kind() {
        MoveKind::CastleKingside => return "O-O".to_string(),
        MoveKind::CastleQueenside => return "O-O-O".to_string(),
        _ => {}
    }

    let mut text = String::new();
    let piece = board.piece_at(m.from()).map(|p| p.piece);

    if let Some(p) = piece.filter(|&p| p != Piece::Pawn) {
        text.push(p.letter());
    }

    let is_capture = board.piece_at(m.to()).is_some() || m.kind() == MoveKind::EnPassant;
    if is_capture {
        if piece == Some(Piece::Pawn) {
            text.push(m.from().file_char());
        }
        text.push('x');
    }

    text.push_str(&m.to().to_algebraic());

    if m.kind() == MoveKind::EnPassant {
        text.push_str(" e.p.");
    }
    text
}

/// Appends the promotion marker ("=Q").
pub fn with_promotion(prefix: &str, kind: Piece) -> String {
    format!("{}={}", prefix, kind.letter())
}

/// Appends "+" when the move leaves the opponent in check.
pub fn with_check(mut notation: String, gives_check: bool) -> String {
    if gives_check {
        notation.push('+');
    }
    notation
}
