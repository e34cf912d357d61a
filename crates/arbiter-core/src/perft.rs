//! Perft (performance test) for move generation correctness verification.
//!
//! Every promotion counts once per piece it can become, so node counts match
//! the published tables.

use crate::chess_move::{Move, PromotionPiece};
use crate::geometry::Geometry;
use crate::position::Position;

/// Count the number of leaf nodes at the given depth.
///
/// Depth 0 returns 1 (the current position). Depth 1 returns the number
/// of legal moves without playing them. The position is left unchanged.
pub fn perft(position: &mut Position, geo: &Geometry, depth: usize) -> u64 {
    if depth == 0 {
        return 1;
    }

    let us = position.side_to_move();
    let moves = position.generate_all_moves(geo, us);

    if depth == 1 {
        return moves.iter().map(|&mv| choices(mv).len() as u64).sum();
    }

    let mut nodes = 0u64;
    for mv in moves {
        for &promo in choices(mv) {
            position.apply(mv, |_| promo);
            nodes += perft(position, geo, depth - 1);
            position.undo();
        }
    }
    nodes
}

/// Run perft with per-move breakdown (useful for debugging).
///
/// Returns a vector of `(move, node_count)` pairs sorted alphabetically,
/// with one entry per promotion piece.
pub fn divide(position: &mut Position, geo: &Geometry, depth: usize) -> Vec<(String, u64)> {
    let us = position.side_to_move();
    let moves = position.generate_all_moves(geo, us);
    let mut results = Vec::new();
    for mv in moves {
        for &promo in choices(mv) {
            position.apply(mv, |_| promo);
            let count = if depth <= 1 {
                1
            } else {
                perft(position, geo, depth - 1)
            };
            let played = position.undo();
            results.push((played.to_string(), count));
        }
    }
    results.sort_by(|a, b| a.0.cmp(&b.0));
    results
}

/// The promotion choices to branch on: all four for a promotion, otherwise
/// a single placeholder the resolver never sees.
fn choices(mv: Move) -> &'static [PromotionPiece] {
    if mv.is_promotion() {
        &PromotionPiece::ALL
    } else {
        &[PromotionPiece::Queen]
    }
}
