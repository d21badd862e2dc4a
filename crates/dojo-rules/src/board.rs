//! The 8x8 board.
//!
//! A [`Board`] is a plain value: 64 optional pieces indexed by row and
//! column. Transitions never edit a board in place; they copy it and return
//! the copy (see [`Board::after_move`]).

use dojo_core::{format_grid, Color, ColoredPiece, Grid, Move, MoveKind, Piece, Square};
use std::fmt;

/// Back rank layout shared by both colors, a-file first.
const BACK_RANK: [Piece; 8] = [
    Piece::Rook,
    Piece::Knight,
    Piece::Bishop,
    Piece::Queen,
    Piece::King,
    Piece::Bishop,
    Piece::Knight,
    Piece::Rook,
];

/// Mapping from square to optional piece.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Board {
    squares: Grid,
}

impl Board {
    /// Creates a board with no pieces.
    pub const fn empty() -> Self {
        Board {
            squares: [[None; 8]; 8],
        }
    }

    /// Creates the standard starting arrangement.
    pub fn startpos() -> Self {
        let mut board = Board::empty();
        for color in Color::ALL {
            let back = color.back_row() as usize;
            let pawns = color.pawn_row() as usize;
            for (col, piece) in BACK_RANK.into_iter().enumerate() {
                board.squares[back][col] = Some(ColoredPiece::new(piece, color));
                board.squares[pawns][col] = Some(ColoredPiece::new(Piece::Pawn, color));
            }
        }
        board
    }

    /// Builds a board from a parsed FEN grid.
    ///
    /// Rows appear in FEN order (rank 8 first), which is also row order here.
    pub const fn from_grid(squares: Grid) -> Self {
        Board { squares }
    }

    /// Builds a board from a piece placement field.
    #[cfg(test)]
    pub(crate) fn from_placement(placement: &str) -> Self {
        Board::from_grid(dojo_core::parse_grid(placement).unwrap())
    }

    /// Returns the squares as a FEN grid.
    pub const fn grid(&self) -> &Grid {
        &self.squares
    }

    /// Returns the FEN piece placement field for this board.
    pub fn placement(&self) -> String {
        format_grid(&self.squares)
    }

    /// Returns the piece on the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.squares[sq.row() as usize][sq.col() as usize]
    }

    /// Returns the color of the piece on the given square, if any.
    #[inline]
    pub fn color_at(&self, sq: Square) -> Option<Color> {
        self.piece_at(sq).map(|p| p.color)
    }

    /// Returns true if nothing stands on the square.
    #[inline]
    pub fn is_empty(&self, sq: Square) -> bool {
        self.piece_at(sq).is_none()
    }

    /// Places a piece, replacing whatever was there.
    #[inline]
    pub fn put(&mut self, sq: Square, piece: ColoredPiece) {
        self.squares[sq.row() as usize][sq.col() as usize] = Some(piece);
    }

    /// Clears a square, returning its previous occupant.
    #[inline]
    pub fn remove(&mut self, sq: Square) -> Option<ColoredPiece> {
        self.squares[sq.row() as usize][sq.col() as usize].take()
    }

    /// Iterates over occupied squares in row-major order (a8 first).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        Square::all().filter_map(move |sq| self.piece_at(sq).map(|p| (sq, p)))
    }

    /// Returns the square of the king of the given color.
    pub fn king_square(&self, color: Color) -> Option<Square> {
        let king = ColoredPiece::new(Piece::King, color);
        self.pieces()
            .find_map(|(sq, p)| (p == king).then_some(sq))
    }

    /// Returns the board after relocating the pieces a move touches.
    ///
    /// Handles the en passant victim and the castling rook. Rights, clocks
    /// and promotion are the executor's business; a pawn reaching its last
    /// rank stays a pawn here.
    pub fn after_move(&self, m: Move) -> Board {
        let mut next = *self;
        let Some(piece) = next.remove(m.from()) else {
            return next;
        };
        next.put(m.to(), piece);

        match m.kind() {
            MoveKind::EnPassant => {
                next.remove(m.from().with_col(m.to().col()));
            }
            MoveKind::CastleKingside => next.shift(m.from().with_col(7), m.from().with_col(5)),
            MoveKind::CastleQueenside => next.shift(m.from().with_col(0), m.from().with_col(3)),
            MoveKind::Normal | MoveKind::DoublePush => {}
        }
        next
    }

    fn shift(&mut self, from: Square, to: Square) {
        if let Some(piece) = self.remove(from) {
            self.put(to, piece);
        }
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::startpos()
    }
}

impl fmt::Debug for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Board({})", self.placement())
    }
}

impl fmt::Display for Board {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (row, cells) in self.squares.iter().enumerate() {
            write!(f, "{} ", 8 - row)?;
            for cell in cells {
                let c = cell.map_or('.', |p| p.to_fen_char());
                write!(f, " {}", c)?;
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
