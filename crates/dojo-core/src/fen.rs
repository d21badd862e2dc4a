//! FEN (Forsyth-Edwards Notation) records.
//!
//! [`Fen`] is the typed form of the six FEN fields. Parsing checks the shape
//! of every field, that each color has exactly one king and that an en
//! passant target sits behind a pawn that could just have made a double
//! step. It does not check whether the position could arise in a real game.

use crate::{Color, ColoredPiece, Piece, Square};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Piece placement indexed as `[row][col]`, row 0 being rank 8.
pub type Grid = [[Option<ColoredPiece>; 8]; 8];

/// Errors that can occur when parsing FEN strings.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum FenError {
    #[error("invalid FEN: expected 6 fields, got {0}")]
    InvalidPartCount(usize),

    #[error("invalid piece placement: {0}")]
    InvalidPiecePlacement(String),

    #[error("expected exactly one {color} king, found {count}")]
    InvalidKingCount { color: Color, count: usize },

    #[error("invalid side to move '{0}' (expected 'w' or 'b')")]
    InvalidActiveColor(String),

    #[error("invalid castling field '{0}'")]
    InvalidCastlingRights(String),

    #[error("invalid en passant square '{0}'")]
    InvalidEnPassantSquare(String),

    #[error("{0} is in check but it is not {0}'s turn")]
    OpponentInCheck(Color),

    #[error("invalid halfmove clock '{0}'")]
    InvalidHalfmoveClock(String),

    #[error("invalid fullmove number '{0}'")]
    InvalidFullmoveNumber(String),
}

/// The castling field, as flags indexed by [`Color::index`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct CastlingField {
    pub kingside: [bool; 2],
    pub queenside: [bool; 2],
}

impl CastlingField {
    /// "KQkq".
    pub const ALL: CastlingField = CastlingField {
        kingside: [true; 2],
        queenside: [true; 2],
    };

    /// Returns true for "-".
    pub fn is_empty(self) -> bool {
        self == Self::default()
    }
}

impl FromStr for CastlingField {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut field = CastlingField::default();
        if s == "-" {
            return Ok(field);
        }
        for c in s.chars() {
            let flag = match c {
                'K' => &mut field.kingside[Color::White.index()],
                'Q' => &mut field.queenside[Color::White.index()],
                'k' => &mut field.kingside[Color::Black.index()],
                'q' => &mut field.queenside[Color::Black.index()],
                _ => return Err(FenError::InvalidCastlingRights(s.to_string())),
            };
            if *flag {
                return Err(FenError::InvalidCastlingRights(s.to_string()));
            }
            *flag = true;
        }
        Ok(field)
    }
}

impl fmt::Display for CastlingField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_empty() {
            return f.write_str("-");
        }
        for (color, king, queen) in [(Color::White, 'K', 'Q'), (Color::Black, 'k', 'q')] {
            if self.kingside[color.index()] {
                write!(f, "{}", king)?;
            }
            if self.queenside[color.index()] {
                write!(f, "{}", queen)?;
            }
        }
        Ok(())
    }
}

/// A parsed FEN record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fen {
    pub grid: Grid,
    pub side_to_move: Color,
    pub castling: CastlingField,
    pub en_passant: Option<Square>,
    pub halfmove_clock: u32,
    pub fullmove_number: u32,
}

impl Fen {
    /// The standard starting position.
    pub const STARTPOS: &'static str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";
}

impl FromStr for Fen {
    type Err = FenError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let [placement, active, castling, en_passant, halfmove, fullmove] = fields[..] else {
            return Err(FenError::InvalidPartCount(fields.len()));
        };

        let grid = parse_grid(placement)?;
        for color in Color::ALL {
            let count = grid
                .iter()
                .flatten()
                .flatten()
                .filter(|p| p.color == color && p.piece == Piece::King)
                .count();
            if count != 1 {
                return Err(FenError::InvalidKingCount { color, count });
            }
        }

        let side_to_move = active
            .chars()
            .next()
            .filter(|_| active.len() == 1)
            .and_then(Color::from_fen_char)
            .ok_or_else(|| FenError::InvalidActiveColor(active.to_string()))?;

        Ok(Fen {
            grid,
            side_to_move,
            castling: castling.parse()?,
            en_passant: parse_en_passant(en_passant, &grid, side_to_move)?,
            halfmove_clock: halfmove
                .parse()
                .map_err(|_| FenError::InvalidHalfmoveClock(halfmove.to_string()))?,
            fullmove_number: fullmove
                .parse()
                .map_err(|_| FenError::InvalidFullmoveNumber(fullmove.to_string()))?,
        })
    }
}

impl fmt::Display for Fen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let en_passant = self
            .en_passant
            .map_or_else(|| "-".to_string(), Square::to_algebraic);
        write!(
            f,
            "{} {} {} {} {} {}",
            format_grid(&self.grid),
            self.side_to_move.fen_char(),
            self.castling,
            en_passant,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

/// Parses the piece placement field, rank 8 first.
pub fn parse_grid(field: &str) -> Result<Grid, FenError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::InvalidPiecePlacement(format!(
            "expected 8 ranks, got {}",
            ranks.len()
        )));
    }

    let mut grid: Grid = [[None; 8]; 8];
    for (row, rank) in ranks.iter().enumerate() {
        let rank_number = 8 - row;
        let mut col = 0usize;
        for c in rank.chars() {
            match c.to_digit(10) {
                Some(skip @ 1..=8) => col += skip as usize,
                _ => {
                    let piece = ColoredPiece::from_fen_char(c).ok_or_else(|| {
                        FenError::InvalidPiecePlacement(format!(
                            "unexpected '{}' on rank {}",
                            c, rank_number
                        ))
                    })?;
                    if col < 8 {
                        grid[row][col] = Some(piece);
                    }
                    col += 1;
                }
            }
            if col > 8 {
                break;
            }
        }
        if col != 8 {
            return Err(FenError::InvalidPiecePlacement(format!(
                "rank {} covers {} squares",
                rank_number, col
            )));
        }
    }
    Ok(grid)
}

/// Writes a grid back out as a piece placement field.
pub fn format_grid(grid: &Grid) -> String {
    let mut field = String::new();
    for (row, cells) in grid.iter().enumerate() {
        if row > 0 {
            field.push('/');
        }
        let mut gap = 0u8;
        for cell in cells {
            match cell {
                Some(piece) => {
                    if gap > 0 {
                        field.push(char::from(b'0' + gap));
                        gap = 0;
                    }
                    field.push(piece.to_fen_char());
                }
                None => gap += 1,
            }
        }
        if gap > 0 {
            field.push(char::from(b'0' + gap));
        }
    }
    field
}

/// An en passant target sits on the third rank of the side that just moved,
/// empty, with that side's pawn directly beyond it.
fn parse_en_passant(
    field: &str,
    grid: &Grid,
    side_to_move: Color,
) -> Result<Option<Square>, FenError> {
    if field == "-" {
        return Ok(None);
    }
    let invalid = || FenError::InvalidEnPassantSquare(field.to_string());
    let target = Square::from_algebraic(field).map_err(|_| invalid())?;

    let pusher = side_to_move.opposite();
    if target.row() as i8 != pusher.pawn_row() as i8 + pusher.forward() {
        return Err(invalid());
    }
    let at = |sq: Square| grid[sq.row() as usize][sq.col() as usize];
    let victim = target.offset(pusher.forward(), 0).ok_or_else(invalid)?;
    if at(target).is_some() || at(victim) != Some(ColoredPiece::new(Piece::Pawn, pusher)) {
        return Err(invalid());
    }
    Ok(Some(target))
}
