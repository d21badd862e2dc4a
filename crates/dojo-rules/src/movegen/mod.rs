//! Move generation.
//!
//! Generation runs in two stages: [`pseudo_legal_moves`] produces the
//! geometric candidates of one piece, and [`legal_moves`] drops every
//! candidate that would leave the mover's king attacked by simulating it on
//! a copy of the board.

mod attacks;
mod geometry;
mod legality;
pub mod perft;

use crate::Position;
use dojo_core::{Move, Square};

pub use attacks::{is_king_in_check, is_square_attacked};
pub use geometry::pseudo_legal_moves;
pub use legality::legal_moves;

/// A fixed-capacity list of moves, stored inline.
#[derive(Clone)]
pub struct MoveList {
    moves: [Move; Self::MAX_MOVES],
    len: usize,
}

impl MoveList {
    /// Maximum number of legal moves in any chess position.
    pub const MAX_MOVES: usize = 256;

    /// Creates an empty move list.
    #[inline]
    pub const fn new() -> Self {
        MoveList {
            moves: [Move::NULL; Self::MAX_MOVES],
            len: 0,
        }
    }

    /// Adds a move to the list.
    #[inline]
    pub fn push(&mut self, m: Move) {
        debug_assert!(self.len < Self::MAX_MOVES);
        self.moves[self.len] = m;
        self.len += 1;
    }

    /// Appends every move of another list.
    pub fn extend_from(&mut self, other: &MoveList) {
        for m in other {
            self.push(*m);
        }
    }

    #[inline]
    pub const fn len(&self) -> usize {
        self.len
    }

    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns a slice of the moves.
    #[inline]
    pub fn as_slice(&self) -> &[Move] {
        &self.moves[..self.len]
    }

    /// Returns the move going from `from` to `to`, if listed.
    pub fn find(&self, from: Square, to: Square) -> Option<Move> {
        self.as_slice()
            .iter()
            .copied()
            .find(|m| m.from() == from && m.to() == to)
    }

    /// Returns true if some move lands on `to`.
    pub fn contains_target(&self, to: Square) -> bool {
        self.as_slice().iter().any(|m| m.to() == to)
    }

    /// Retains only moves for which the predicate returns true.
    pub fn retain<F>(&mut self, mut f: F)
    where
        F: FnMut(&Move) -> bool,
    {
        let mut write = 0;
        for read in 0..self.len {
            if f(&self.moves[read]) {
                self.moves[write] = self.moves[read];
                write += 1;
            }
        }
        self.len = write;
    }
}

impl Default for MoveList {
    fn default() -> Self {
        Self::new()
    }
}

impl PartialEq for MoveList {
    fn eq(&self, other: &Self) -> bool {
        self.as_slice() == other.as_slice()
    }
}

impl Eq for MoveList {}

impl std::ops::Index<usize> for MoveList {
    type Output = Move;

    #[inline]
    fn index(&self, index: usize) -> &Self::Output {
        debug_assert!(index < self.len);
        &self.moves[index]
    }
}

impl<'a> IntoIterator for &'a MoveList {
    type Item = &'a Move;
    type IntoIter = std::slice::Iter<'a, Move>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_slice().iter()
    }
}

impl std::fmt::Debug for MoveList {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.as_slice()).finish()
    }
}

/// Returns the legal moves of the piece on `sq` in the given position.
///
/// Empty unless that piece belongs to the side to move.
pub fn legal_moves_at(position: &Position, sq: Square) -> MoveList {
    legal_moves(
        &position.board,
        sq,
        position.castling,
        position.en_passant,
        position.side_to_move,
        true,
    )
}

/// Generates all legal moves for the side to move, piece by piece in
/// row-major board order.
pub fn generate_moves(position: &Position) -> MoveList {
    let mut moves = MoveList::new();
    let us = position.side_to_move;
    for (sq, _) in position.board.pieces().filter(|(_, p)| p.color == us) {
        moves.extend_from(&legal_moves_at(position, sq));
    }
    moves
}

/// Returns true as soon as one piece of the side to move has a legal move.
pub fn has_any_legal_move(position: &Position) -> bool {
    let us = position.side_to_move;
    position
        .board
        .pieces()
        .filter(|(_, p)| p.color == us)
        .any(|(sq, _)| !legal_moves_at(position, sq).is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;
    use dojo_core::{Color, MoveKind};

    fn sq(s: &str) -> Square {
        Square::from_algebraic(s).unwrap()
    }

    #[test]
    fn movelist_push_and_iterate() {
        let mut list = MoveList::new();
        assert!(list.is_empty());

        let m1 = Move::new(sq("e2"), sq("e4"), MoveKind::DoublePush);
        let m2 = Move::normal(sq("g1"), sq("f3"));

        list.push(m1);
        list.push(m2);

        assert_eq!(list.len(), 2);
        assert_eq!(list[0], m1);
        assert_eq!(list[1], m2);
        assert_eq!(list.find(sq("g1"), sq("f3")), Some(m2));
        assert_eq!(list.find(sq("g1"), sq("h3")), None);
        assert!(list.contains_target(sq("e4")));
    }

    #[test]
    fn movelist_retain() {
        let mut list = MoveList::new();
        list.push(Move::normal(sq("e2"), sq("e3")));
        list.push(Move::normal(sq("e2"), sq("e4")));
        list.push(Move::normal(sq("e3"), sq("e4")));

        list.retain(|m| m.from() == sq("e2"));
        assert_eq!(list.len(), 2);
    }

    #[test]
    fn generate_moves_startpos() {
        let position = Position::startpos();
        assert_eq!(generate_moves(&position).len(), 20);

        let mut black = Position::startpos();
        black.side_to_move = Color::Black;
        assert_eq!(generate_moves(&black).len(), 20);
    }

    #[test]
    fn generate_moves_row_major() {
        let position = Position::startpos();
        let moves = generate_moves(&position);
        // a2 pawn comes before the b1 knight, which comes before g1.
        assert_eq!(moves[0].from(), sq("a2"));
        assert_eq!(moves[moves.len() - 1].from(), sq("g1"));
    }

    #[test]
    fn legal_moves_at_other_side_is_empty() {
        let position = Position::startpos();
        assert!(legal_moves_at(&position, sq("e7")).is_empty());
        assert!(legal_moves_at(&position, sq("e4")).is_empty());
        assert_eq!(legal_moves_at(&position, sq("b1")).len(), 2);
    }

    #[test]
    fn no_moves_when_mated() {
        // Fool's mate.
        let position =
            Position::from_fen("rnb1kbnr/pppp1ppp/8/4p3/6Pq/5P2/PPPPP2P/RNBQKBNR w KQkq - 1 3")
                .unwrap();
        assert!(!has_any_legal_move(&position));
        assert!(generate_moves(&position).is_empty());
        assert!(is_king_in_check(&position.board, Color::White));
    }

    #[test]
    fn castling_through_check_is_filtered() {
        let position =
            Position::from_fen("r3k2r/pppp1ppp/8/8/8/8/PPPP1PP1/R3K2R w KQkq - 0 1").unwrap();
        assert!(generate_moves(&position)
            .as_slice()
            .iter()
            .any(|m| m.kind() == MoveKind::CastleKingside));

        let attacked =
            Position::from_fen("r3k2r/pppp1ppp/8/5r2/8/8/PPPP2P1/R3K2R w KQq - 0 1").unwrap();
        assert!(!generate_moves(&attacked)
            .as_slice()
            .iter()
            .any(|m| m.kind() == MoveKind::CastleKingside));
    }

    #[test]
    fn en_passant_generated() {
        let position =
            Position::from_fen("rnbqkbnr/pppp1ppp/8/4pP2/8/8/PPPPP1PP/RNBQKBNR w KQkq e6 0 1")
                .unwrap();
        assert!(generate_moves(&position)
            .as_slice()
            .iter()
            .any(|m| m.kind() == MoveKind::EnPassant));
    }
}
