//! The game state machine.
//!
//! A [`Game`] is one immutable snapshot: position, state and the notation of
//! the half-move that produced it. Every accepted action returns a new
//! snapshot; a rejected one returns an error and leaves the caller holding
//! the old snapshot.
//!
//! ```text
//! InProgress ──move──▶ InProgress | Checkmate | Stalemate
//!      │
//!      └──pawn to last row──▶ AwaitingPromotion ──promote──▶ InProgress | Checkmate | Stalemate
//! ```

use crate::execute::{apply_move, resolve_promotion, Transition};
use crate::movegen::{generate_moves, is_king_in_check, legal_moves_at};
use crate::{terminal, Board, GameResult, GameState, MoveError, MoveList, Position};
use dojo_core::{Color, ColoredPiece, FenError, MoveInput, Piece, Square};

/// One snapshot of a chess game.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Game {
    position: Position,
    state: GameState,
    notation: Option<String>,
}

impl Default for Game {
    fn default() -> Self {
        Self::new()
    }
}

impl Game {
    /// Creates a new game with the standard starting position.
    pub fn new() -> Self {
        Game {
            position: Position::startpos(),
            state: GameState::InProgress,
            notation: None,
        }
    }

    /// Creates a game from a custom starting position.
    ///
    /// The position is classified right away, so a mated or stalemated setup
    /// starts out terminal.
    pub fn from_position(position: Position) -> Self {
        let state = terminal::status(&position);
        Game {
            position,
            state,
            notation: None,
        }
    }

    /// Creates a game from a FEN string.
    pub fn from_fen(fen: &str) -> Result<Self, FenError> {
        Ok(Self::from_position(Position::from_fen(fen)?))
    }

    /// Returns the FEN string of the current position.
    pub fn to_fen(&self) -> String {
        self.position.to_fen()
    }

    /// Returns a reference to the current position.
    pub fn position(&self) -> &Position {
        &self.position
    }

    /// Returns the board.
    pub fn board(&self) -> &Board {
        &self.position.board
    }

    /// Returns the current state.
    pub fn state(&self) -> &GameState {
        &self.state
    }

    /// Returns the side to move. While a promotion is pending this is still
    /// the side that moved the pawn.
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move
    }

    /// Returns the piece on `sq`, if any.
    pub fn piece_at(&self, sq: Square) -> Option<ColoredPiece> {
        self.position.piece_at(sq)
    }

    /// Iterates over every occupied square in row-major order (a8 first).
    pub fn pieces(&self) -> impl Iterator<Item = (Square, ColoredPiece)> + '_ {
        self.position.board.pieces()
    }

    /// Returns true if the side to move is in check.
    pub fn is_check(&self) -> bool {
        is_king_in_check(&self.position.board, self.position.side_to_move)
    }

    /// Returns the notation of the half-move that produced this snapshot.
    ///
    /// `None` for a freshly created game and while a promotion is pending.
    pub fn notation(&self) -> Option<&str> {
        self.notation.as_deref()
    }

    /// Returns true if the game has ended.
    pub fn is_terminal(&self) -> bool {
        self.state.is_terminal()
    }

    /// Returns the result once the game has ended.
    pub fn winner(&self) -> Option<GameResult> {
        match self.state {
            GameState::Checkmate => Some(GameResult::win_for(self.side_to_move().opposite())),
            GameState::Stalemate => Some(GameResult::Draw),
            _ => None,
        }
    }

    /// Returns the legal moves of the piece on `sq`.
    ///
    /// Empty unless the game accepts moves and the piece belongs to the side
    /// to move.
    pub fn legal_moves_from(&self, sq: Square) -> MoveList {
        if !self.state.accepts_moves() {
            return MoveList::new();
        }
        legal_moves_at(&self.position, sq)
    }

    /// Returns every legal move of the side to move.
    pub fn legal_moves(&self) -> MoveList {
        if !self.state.accepts_moves() {
            return MoveList::new();
        }
        generate_moves(&self.position)
    }

    /// Attempts a move.
    ///
    /// A pawn reaching its last row with `promotion` set is promoted at
    /// once; with `None` the returned game is in
    /// [`GameState::AwaitingPromotion`] until [`Game::promote`] is called.
    pub fn try_move(
        &self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<Game, MoveError> {
        let us = self.position.side_to_move;

        if !self.state.accepts_moves() {
            return self.reject(MoveError::StateNotAccepting(self.state.clone()));
        }
        let mover = match self.position.piece_at(from) {
            None => return self.reject(MoveError::IllegalMove { from, to }),
            Some(p) if p.color != us => return self.reject(MoveError::WrongTurn { to_move: us }),
            Some(p) => p,
        };
        let Some(m) = legal_moves_at(&self.position, from).find(from, to) else {
            return self.reject(MoveError::IllegalMove { from, to });
        };

        let promotes = mover.piece == Piece::Pawn && to.row() == us.promotion_row();
        match promotion {
            Some(kind) if !kind.is_promotion_choice() => {
                return self.reject(MoveError::InvalidPromotion(kind));
            }
            Some(kind) if !promotes => return self.reject(MoveError::UnexpectedPromotion(kind)),
            _ => {}
        }

        match apply_move(&self.position, m) {
            Transition::Complete { position, notation } => Ok(Self::finish(position, notation)),
            Transition::AwaitingPromotion {
                position,
                square,
                notation,
            } => match promotion {
                Some(kind) => {
                    let (position, notation) =
                        resolve_promotion(&position, square, &notation, kind)?;
                    Ok(Self::finish(position, notation))
                }
                None => {
                    tracing::debug!("{} pawn on {} awaiting promotion", us, square);
                    Ok(Game {
                        position,
                        state: GameState::AwaitingPromotion { square, notation },
                        notation: None,
                    })
                }
            },
        }
    }

    /// Attempts a move given as coordinate text ("e2e4", "e7e8q").
    pub fn try_move_uci(&self, text: &str) -> Result<Game, MoveError> {
        let input: MoveInput = match text.parse() {
            Ok(input) => input,
            Err(e) => return self.reject(MoveError::from(e)),
        };
        self.try_move(input.from, input.to, input.promotion)
    }

    /// Completes a pending promotion with the chosen piece kind.
    pub fn promote(&self, kind: Piece) -> Result<Game, MoveError> {
        let GameState::AwaitingPromotion { square, notation } = &self.state else {
            return self.reject(MoveError::NoPendingPromotion);
        };
        match resolve_promotion(&self.position, *square, notation, kind) {
            Ok((position, notation)) => Ok(Self::finish(position, notation)),
            Err(e) => self.reject(e),
        }
    }

    /// Builds the snapshot after a finalized half-move.
    fn finish(position: Position, notation: String) -> Game {
        let state = terminal::status(&position);
        match state {
            GameState::Checkmate => {
                tracing::info!(
                    "Checkmate after {}: {} wins",
                    notation,
                    position.side_to_move.opposite()
                );
            }
            GameState::Stalemate => tracing::info!("Stalemate after {}", notation),
            _ => {}
        }
        Game {
            position,
            state,
            notation: Some(notation),
        }
    }

    fn reject(&self, err: MoveError) -> Result<Game, MoveError> {
        tracing::debug!("Rejected in state '{}': {}", self.state, err);
        Err(err)
    }
}
