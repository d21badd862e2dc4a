//! Append-only game record.

use crate::{Game, MoveError};
use dojo_core::{Piece, Square};

/// Keeps every snapshot of a game and the notation of each completed
/// half-move.
///
/// Rejected actions leave the record untouched. Entries are only appended;
/// a promotion pause adds a snapshot but no notation until it is resolved.
#[derive(Debug, Clone)]
pub struct GameRecord {
    snapshots: Vec<Game>,
    notations: Vec<String>,
}

impl GameRecord {
    /// Starts a record from the standard starting position.
    pub fn new() -> Self {
        Self::from_game(Game::new())
    }

    /// Starts a record from an existing snapshot.
    pub fn from_game(game: Game) -> Self {
        GameRecord {
            snapshots: vec![game],
            notations: Vec::new(),
        }
    }

    /// Returns the latest snapshot.
    pub fn current(&self) -> &Game {
        // `from_game` seeds one snapshot and nothing ever removes one.
        &self.snapshots[self.snapshots.len() - 1]
    }

    /// Returns the notation of every completed half-move, in order.
    pub fn notations(&self) -> &[String] {
        &self.notations
    }

    /// Returns every snapshot, starting with the initial one.
    pub fn snapshots(&self) -> &[Game] {
        &self.snapshots
    }

    /// Plays a move on the current snapshot.
    pub fn play(
        &mut self,
        from: Square,
        to: Square,
        promotion: Option<Piece>,
    ) -> Result<&Game, MoveError> {
        let next = self.current().try_move(from, to, promotion)?;
        Ok(self.push(next))
    }

    /// Plays a move given as coordinate text.
    pub fn play_uci(&mut self, text: &str) -> Result<&Game, MoveError> {
        let next = self.current().try_move_uci(text)?;
        Ok(self.push(next))
    }

    /// Resolves a pending promotion.
    pub fn promote(&mut self, kind: Piece) -> Result<&Game, MoveError> {
        let next = self.current().promote(kind)?;
        Ok(self.push(next))
    }

    fn push(&mut self, game: Game) -> &Game {
        if let Some(notation) = game.notation() {
            self.notations.push(notation.to_string());
        }
        self.snapshots.push(game);
        self.current()
    }
}

impl Default for GameRecord {
    fn default() -> Self {
        Self::new()
    }
}
