//! Chess rules engine.
//!
//! This crate provides:
//! - A mailbox [`Board`] and full [`Position`] with FEN support
//! - Legal move generation with self-check filtering and castling safety
//! - Move execution covering en passant, castling and promotion
//! - The [`Game`] state machine with checkmate and stalemate detection
//! - Move notation for the game record, and perft for validation
//!
//! # Example
//!
//! ```
//! use dojo_rules::{Game, GameState};
//!
//! let game = Game::new()
//!     .try_move_uci("f2f3").unwrap()
//!     .try_move_uci("e7e5").unwrap()
//!     .try_move_uci("g2g4").unwrap()
//!     .try_move_uci("d8h4").unwrap();
//!
//! assert_eq!(game.state(), &GameState::Checkmate);
//! assert_eq!(game.notation(), Some("Qh4+"));
//! ```

mod board;
mod error;
pub mod execute;
mod game;
pub mod movegen;
pub mod notation;
mod position;
mod record;
mod state;
mod terminal;

pub use board::Board;
pub use error::MoveError;
pub use execute::{apply_move, resolve_promotion, Transition};
pub use game::Game;
pub use movegen::perft::{perft, perft_divide};
pub use movegen::{
    generate_moves, has_any_legal_move, is_king_in_check, is_square_attacked, legal_moves,
    legal_moves_at, pseudo_legal_moves, MoveList,
};
pub use position::{CastlingRights, Position, SideRights};
pub use record::GameRecord;
pub use state::{GameResult, GameState};
pub use terminal::status;

pub use dojo_core::{Color, ColoredPiece, FenError, Move, MoveInput, MoveKind, Piece, Square};
