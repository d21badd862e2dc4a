//! Chess position representation.

use dojo_core::{CastlingField, Color, ColoredPiece, Fen, FenError, Piece, Square};

use crate::movegen::is_king_in_check;
use crate::Board;

/// Castling availability for one color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct SideRights {
    pub kingside: bool,
    pub queenside: bool,
}

impl SideRights {
    pub const BOTH: SideRights = SideRights {
        kingside: true,
        queenside: true,
    };
    pub const NONE: SideRights = SideRights {
        kingside: false,
        queenside: false,
    };
}

/// Castling rights for both colors.
///
/// A right only ever goes from true to false during a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingRights([SideRights; 2]);

impl CastlingRights {
    pub const NONE: CastlingRights = CastlingRights([SideRights::NONE; 2]);
    pub const ALL: CastlingRights = CastlingRights([SideRights::BOTH; 2]);

    /// Returns the rights of one color.
    #[inline]
    pub const fn side(self, color: Color) -> SideRights {
        self.0[color.index()]
    }

    /// Returns true if the given side can castle kingside.
    #[inline]
    pub const fn can_castle_kingside(self, color: Color) -> bool {
        self.0[color.index()].kingside
    }

    /// Returns true if the given side can castle queenside.
    #[inline]
    pub const fn can_castle_queenside(self, color: Color) -> bool {
        self.0[color.index()].queenside
    }

    /// Returns true if no right is left for either color.
    pub fn is_empty(self) -> bool {
        self == Self::NONE
    }

    /// Removes castling rights for a color.
    #[inline]
    pub fn remove_color(&mut self, color: Color) {
        self.0[color.index()] = SideRights::NONE;
    }

    /// Removes kingside castling for a color.
    #[inline]
    pub fn remove_kingside(&mut self, color: Color) {
        self.0[color.index()].kingside = false;
    }

    /// Removes queenside castling for a color.
    #[inline]
    pub fn remove_queenside(&mut self, color: Color) {
        self.0[color.index()].queenside = false;
    }

    /// Removes the right tied to a rook's original corner, if `sq` is one.
    pub fn remove_for_corner(&mut self, sq: Square) {
        match sq {
            Square::H1 => self.remove_kingside(Color::White),
            Square::A1 => self.remove_queenside(Color::White),
            Square::H8 => self.remove_kingside(Color::Black),
            Square::A8 => self.remove_queenside(Color::Black),
            _ => {}
        }
    }
}

impl From<CastlingField> for CastlingRights {
    fn from(field: CastlingField) -> Self {
        let mut rights = CastlingRights::NONE;
        for color in Color::ALL {
            rights.0[color.index()] = SideRights {
                kingside: field.kingside[color.index()],
                queenside: field.queenside[color.index()],
            };
        }
        rights
    }
}

impl From<CastlingRights> for CastlingField {
    fn from(rights: CastlingRights) -> Self {
        CastlingField {
            kingside: rights.0.map(|side| side.kingside),
            queenside: rights.0.map(|side| side.queenside),
        }
    }
}

/// Complete chess position state.
///
/// Positions are values: every transition produces a new one.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Position {
    /// Piece placement.
    pub board: Board,

    /// The side to move.
    pub side_to_move: Color,

    /// Castling rights.
    pub castling: CastlingRights,

    /// En passant target square (if any).
    pub en_passant: Option<Square>,

    /// Half-moves since the last capture or pawn move.
    pub halfmove_clock: u32,

    /// Fullmove number (starts at 1, increments after Black's move).
    pub fullmove_number: u32,
}

impl Position {
    /// Creates the standard starting position.
    pub fn startpos() -> Self {
        Position {
            board: Board::startpos(),
            side_to_move: Color::White,
            castling: CastlingRights::ALL,
            en_passant: None,
            halfmove_clock: 0,
            fullmove_number: 1,
        }
    }

    /// Creates a position from a FEN string.
    ///
    /// Castling flags whose king or rook is not on its original square are
    /// dropped, so the rights stay consistent with the board. A position in
    /// which the side that just moved is still in check is rejected.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        let parsed: Fen = fen.parse()?;
        let board = Board::from_grid(parsed.grid);
        let waiting = parsed.side_to_move.opposite();
        if is_king_in_check(&board, waiting) {
            return Err(FenError::OpponentInCheck(waiting));
        }

        let mut castling = CastlingRights::from(parsed.castling);
        for (home, color) in [(Square::E1, Color::White), (Square::E8, Color::Black)] {
            if board.piece_at(home) != Some(ColoredPiece::new(Piece::King, color)) {
                castling.remove_color(color);
            }
        }
        let rook_corners = [
            (Square::H1, Color::White),
            (Square::A1, Color::White),
            (Square::H8, Color::Black),
            (Square::A8, Color::Black),
        ];
        for (corner, color) in rook_corners {
            if board.piece_at(corner) != Some(ColoredPiece::new(Piece::Rook, color)) {
                castling.remove_for_corner(corner);
            }
        }

        Ok(Position {
            board,
            side_to_move: parsed.side_to_move,
            castling,
            en_passant: parsed.en_passant,
            halfmove_clock: parsed.halfmove_clock,
            fullmove_number: parsed.fullmove_number,
        })
    }

    /// Converts the position to a FEN string.
    pub fn to_fen(&self) -> String {
        Fen {
            grid: *self.board.grid(),
            side_to_move: self.side_to_move,
            castling: self.castling.into(),
            en_passant: self.en_passant,
            halfmove_clock: self.halfmove_clock,
            fullmove_number: self.fullmove_number,
        }
        .to_string()
    }

    /// Returns the piece at the given square, if any.
    #[inline]
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.board.piece_at(sq)
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::startpos()
    }
}
