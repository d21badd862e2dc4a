//! Core types for chess.
//!
//! This crate provides the value types shared by the rules engine and its callers:
//! - [`Piece`], [`Color`] and [`ColoredPiece`] for piece identity
//! - [`Square`] for board coordinates (row 0 is rank 8, column 0 is file a)
//! - [`Move`] and [`MoveKind`] for generated candidate moves
//! - [`MoveInput`] for coordinate move text typed by a user ("e2e4", "e7e8q")
//! - [`Fen`] for reading and writing FEN records

mod color;
mod fen;
mod mov;
mod piece;
mod square;

pub use color::Color;
pub use fen::{format_grid, parse_grid, CastlingField, Fen, FenError, Grid};
pub use mov::{Move, MoveInput, MoveKind, MoveParseError};
pub use piece::{ColoredPiece, Piece};
pub use square::{Square, SquareError};
