//! Attack detection by ray-casting outward from the target square.

use crate::Board;
use dojo_core::{Color, ColoredPiece, Piece, Square};

/// Knight jump offsets as (row delta, column delta).
pub(crate) const KNIGHT_OFFSETS: [(i8, i8); 8] = [
    (-2, -1),
    (-2, 1),
    (-1, -2),
    (-1, 2),
    (1, -2),
    (1, 2),
    (2, -1),
    (2, 1),
];

/// King step offsets.
pub(crate) const KING_OFFSETS: [(i8, i8); 8] = [
    (-1, -1),
    (-1, 0),
    (-1, 1),
    (0, -1),
    (0, 1),
    (1, -1),
    (1, 0),
    (1, 1),
];

/// Rook directions.
pub(crate) const ORTHOGONAL: [(i8, i8); 4] = [(-1, 0), (1, 0), (0, -1), (0, 1)];

/// Bishop directions.
pub(crate) const DIAGONAL: [(i8, i8); 4] = [(-1, -1), (-1, 1), (1, -1), (1, 1)];

/// Returns the first occupied square along a ray, with its occupant.
fn first_on_ray(board: &Board, from: Square, (dr, dc): (i8, i8)) -> Option<(Square, ColoredPiece)> {
    let mut cur = from;
    while let Some(next) = cur.offset(dr, dc) {
        if let Some(piece) = board.piece_at(next) {
            return Some((next, piece));
        }
        cur = next;
    }
    None
}

/// Returns true if any of the offsets from `sq` holds `target`.
fn any_at_offsets(board: &Board, sq: Square, offsets: &[(i8, i8)], target: ColoredPiece) -> bool {
    offsets
        .iter()
        .filter_map(|&(dr, dc)| sq.offset(dr, dc))
        .any(|s| board.piece_at(s) == Some(target))
}

/// Returns true if a ray in any of `dirs` first meets one of `by`'s `sliders`.
fn any_slider(board: &Board, sq: Square, dirs: &[(i8, i8)], by: Color, sliders: [Piece; 2]) -> bool {
    dirs.iter().any(|&dir| {
        matches!(
            first_on_ray(board, sq, dir),
            Some((_, p)) if p.color == by && sliders.contains(&p.piece)
        )
    })
}

/// Returns true if the given square is attacked by the given color.
///
/// Occupancy of `sq` itself does not matter; only the attackers are probed.
pub fn is_square_attacked(board: &Board, sq: Square, by: Color) -> bool {
    if any_at_offsets(board, sq, &KNIGHT_OFFSETS, ColoredPiece::new(Piece::Knight, by)) {
        return true;
    }

    if any_slider(board, sq, &ORTHOGONAL, by, [Piece::Rook, Piece::Queen]) {
        return true;
    }

    if any_slider(board, sq, &DIAGONAL, by, [Piece::Bishop, Piece::Queen]) {
        return true;
    }

    // An attacking pawn sits one step behind the target, from its own point of view.
    let pawn_squares = [(-by.forward(), -1), (-by.forward(), 1)];
    if any_at_offsets(board, sq, &pawn_squares, ColoredPiece::new(Piece::Pawn, by)) {
        return true;
    }

    any_at_offsets(board, sq, &KING_OFFSETS, ColoredPiece::new(Piece::King, by))
}

/// Returns true if the king of the given color is in check.
///
/// # Panics
///
/// Panics if the board has no king of that color. Every board the engine
/// produces has one, so a missing king is an internal fault.
pub fn is_king_in_check(board: &Board, color: Color) -> bool {
    let Some(king) = board.king_square(color) else {
        panic!("board has no {color} king");
    };
    is_square_attacked(board, king, color.opposite())
}
