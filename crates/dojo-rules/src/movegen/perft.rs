//! Leaf-node counting over the legal move tree.
//!
//! Published node counts for well-known positions pin down the generator,
//! the legality filter and move execution together. A move that promotes
//! counts once for each of the four promotion kinds.

use super::generate_moves;
use crate::execute::{apply_move, resolve_promotion, Transition};
use crate::Position;
use dojo_core::{Move, Piece};

/// Returns every position reachable by one legal move, with the move text.
fn successors(position: &Position, m: Move) -> Vec<(String, Position)> {
    match apply_move(position, m) {
        Transition::Complete { position, .. } => vec![(m.to_uci(), position)],
        Transition::AwaitingPromotion {
            position,
            square,
            notation,
        } => Piece::PROMOTIONS
            .iter()
            .filter_map(|&kind| {
                resolve_promotion(&position, square, &notation, kind)
                    .ok()
                    .map(|(next, _)| {
                        let uci = format!("{}{}", m.to_uci(), kind.letter().to_ascii_lowercase());
                        (uci, next)
                    })
            })
            .collect(),
    }
}

/// Counts the number of leaf nodes at the given depth.
pub fn perft(position: &Position, depth: u32) -> u64 {
    if depth == 0 {
        return 1;
    }

    let moves = generate_moves(position);
    let mut nodes = 0u64;
    for m in &moves {
        for (_, next) in successors(position, *m) {
            nodes += if depth == 1 { 1 } else { perft(&next, depth - 1) };
        }
    }
    nodes
}

/// Splits the perft count by root move, keyed by coordinate text and sorted.
pub fn perft_divide(position: &Position, depth: u32) -> Vec<(String, u64)> {
    let moves = generate_moves(position);
    let mut results = Vec::with_capacity(moves.len());

    for m in &moves {
        for (uci, next) in successors(position, *m) {
            let nodes = if depth > 1 {
                perft(&next, depth - 1)
            } else {
                1
            };
            results.push((uci, nodes));
        }
    }

    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}
