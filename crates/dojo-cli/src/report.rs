//! Replay output, as text or JSON.

use dojo_core::Color;
use dojo_rules::GameRecord;
use serde::Serialize;

/// A move the engine refused, which ends the replay.
#[derive(Debug, Serialize)]
pub struct Rejection {
    /// 1-based position of the move in the input list.
    pub index: usize,
    /// The move text as given.
    pub input: String,
    /// Why it was refused.
    pub reason: String,
}

/// Summary of a replay.
#[derive(Debug, Serialize)]
pub struct Report {
    start_fen: String,
    moves: Vec<String>,
    final_fen: String,
    state: String,
    side_to_move: String,
    check: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    result: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    rejected: Option<Rejection>,
    #[serde(skip)]
    board: String,
    #[serde(skip)]
    move_list: String,
}

impl Report {
    pub fn new(record: &GameRecord, rejected: Option<Rejection>) -> Self {
        let start = &record.snapshots()[0];
        let current = record.current();
        Report {
            start_fen: start.to_fen(),
            moves: record.notations().to_vec(),
            final_fen: current.to_fen(),
            state: current.state().to_string(),
            side_to_move: current.side_to_move().to_string(),
            check: current.is_check(),
            result: current.winner().map(|r| r.to_string()),
            rejected,
            board: current.board().to_string(),
            move_list: numbered_moves(
                start.position().fullmove_number,
                start.side_to_move(),
                record.notations(),
            ),
        }
    }

    /// Renders the human-readable form.
    pub fn to_text(&self) -> String {
        let mut out = format!("{}\n\n", self.board);
        if !self.move_list.is_empty() {
            out.push_str(&self.move_list);
            out.push('\n');
        }
        out.push_str(&format!("FEN:   {}\n", self.final_fen));
        out.push_str(&format!(
            "State: {} ({} to move)\n",
            self.state, self.side_to_move
        ));
        if let Some(result) = &self.result {
            out.push_str(&format!("Result: {}\n", result));
        }
        if let Some(r) = &self.rejected {
            out.push_str(&format!(
                "Rejected move {} '{}': {}\n",
                r.index, r.input, r.reason
            ));
        }
        out
    }

    /// Returns the refused move, if the replay stopped early.
    pub fn rejection(&self) -> Option<&Rejection> {
        self.rejected.as_ref()
    }

    pub fn to_json(&self) -> serde_json::Result<String> {
        serde_json::to_string_pretty(self)
    }
}

/// Formats notations as a numbered move list ("1. e4 e5 2. Nf3").
fn numbered_moves(mut number: u32, mut side: Color, notations: &[String]) -> String {
    let mut out = String::new();
    for (i, notation) in notations.iter().enumerate() {
        if i > 0 {
            out.push(' ');
        }
        match side {
            Color::White => out.push_str(&format!("{}. ", number)),
            Color::Black => {
                if i == 0 {
                    out.push_str(&format!("{}... ", number));
                }
                number += 1;
            }
        }
        out.push_str(notation);
        side = side.opposite();
    }
    out
}
