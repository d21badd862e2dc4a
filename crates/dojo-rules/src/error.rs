//! Errors returned when a move or promotion is rejected.

use crate::GameState;
use dojo_core::{Color, MoveParseError, Piece, Square, SquareError};
use thiserror::Error;

/// Reasons a submitted move or promotion is refused.
///
/// A rejection never changes the game: the caller keeps the snapshot it had.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum MoveError {
    #[error(transparent)]
    InvalidSquare(#[from] SquareError),

    #[error("invalid move input: {0}")]
    InvalidInput(MoveParseError),

    #[error("illegal move: {from}{to}")]
    IllegalMove { from: Square, to: Square },

    #[error("not your turn: {to_move} to move")]
    WrongTurn { to_move: Color },

    #[error("no moves accepted while the game is {0}")]
    StateNotAccepting(GameState),

    #[error("no promotion is pending")]
    NoPendingPromotion,

    #[error("cannot promote to {0}")]
    InvalidPromotion(Piece),

    #[error("{0} promotion given for a move that does not promote")]
    UnexpectedPromotion(Piece),
}

impl From<MoveParseError> for MoveError {
    fn from(e: MoveParseError) -> Self {
        match e {
            MoveParseError::InvalidSquare(e) => MoveError::InvalidSquare(e),
            other => MoveError::InvalidInput(other),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_errors_split_by_cause() {
        let bad_square = MoveParseError::InvalidSquare(SquareError::InvalidNotation("z9".into()));
        assert!(matches!(
            MoveError::from(bad_square),
            MoveError::InvalidSquare(_)
        ));
        let bad_length = MoveParseError::InvalidLength("e2".into());
        assert!(matches!(
            MoveError::from(bad_length),
            MoveError::InvalidInput(_)
        ));
    }

    #[test]
    fn messages() {
        let e = MoveError::IllegalMove {
            from: Square::E1,
            to: Square::E8,
        };
        assert_eq!(e.to_string(), "illegal move: e1e8");
        let e = MoveError::WrongTurn {
            to_move: Color::Black,
        };
        assert_eq!(e.to_string(), "not your turn: Black to move");
        let e = MoveError::StateNotAccepting(GameState::Checkmate);
        assert_eq!(e.to_string(), "no moves accepted while the game is checkmate");
        assert_eq!(
            MoveError::InvalidPromotion(Piece::King).to_string(),
            "cannot promote to King"
        );
    }
}
