//! Legality filter and the public move generation entry points.

use crate::chess_move::{Move, PromotionPiece};
use crate::color::Color;
use crate::geometry::Geometry;
use crate::position::Position;
use crate::square::Square;

impl Position {
    /// Generate every legal move for the piece on `sq`.
    ///
    /// Returns an empty list when `sq` is empty, holds a piece of the side not
    /// to move, or the piece has no legal moves.
    pub fn generate_moves(&mut self, geo: &Geometry, sq: Square) -> Vec<Move> {
        match self.piece_on(sq) {
            Some(piece) if piece.is_color(self.side_to_move()) => {
                let candidates = self.pseudo_legal_moves(geo, sq);
                self.filter_legal(geo, candidates)
            }
            _ => Vec::new(),
        }
    }

    /// Generate every legal move for `color`, piece by piece in square order.
    ///
    /// Unlike [`Position::generate_moves`] this does not require `color` to be
    /// the side to move.
    pub fn generate_all_moves(&mut self, geo: &Geometry, color: Color) -> Vec<Move> {
        // Collected up front: the filter mutates the occupied sets while it runs.
        let squares: Vec<Square> = self.occupied(color).iter().copied().collect();
        let mut moves = Vec::new();
        for sq in squares {
            let candidates = self.pseudo_legal_moves(geo, sq);
            moves.extend(self.filter_legal(geo, candidates));
        }
        moves
    }

    /// Keep only the candidates that do not leave the mover's king attacked.
    ///
    /// Each candidate is committed, tested and reverted, so the position is
    /// unchanged on return. Promotions are tried as queens.
    pub(crate) fn filter_legal(&mut self, geo: &Geometry, candidates: Vec<Move>) -> Vec<Move> {
        candidates
            .into_iter()
            .filter(|&mv| {
                let Some(mover) = self.piece_on(mv.source()) else {
                    return false;
                };
                let us = mover.color();
                self.commit(mv, Some(PromotionPiece::Queen));
                let safe = !self.in_check(geo, us);
                self.revert();
                safe
            })
            .collect()
    }
}
