//! Move execution via make/undo on a mutable [`Position`].
//!
//! [`Position::commit`] and [`Position::revert`] are the only code that changes
//! a position after it is built. Every commit pushes a history entry holding the
//! side to move and moved flags it replaced, so revert restores the position
//! exactly.

use tracing::trace;

use crate::castling::CastleSide;
use crate::chess_move::{Move, MoveKind, PromotionPiece};
use crate::piece_kind::PieceKind;
use crate::position::{HistoryEntry, Position};

impl Position {
    /// Play `mv` for good, asking `resolve` which piece a promoting pawn becomes.
    ///
    /// `resolve` is only called for promotion moves. The move should come from
    /// [`Position::generate_moves`] or [`Position::generate_all_moves`].
    ///
    /// # Panics
    ///
    /// Panics if the move's source square is empty.
    pub fn apply<F>(&mut self, mv: Move, resolve: F)
    where
        F: FnOnce(&Move) -> PromotionPiece,
    {
        let promotion = mv.is_promotion().then(|| resolve(&mv));
        self.commit(mv, promotion);
    }

    /// Take back the most recently applied move and return it as it was played.
    ///
    /// # Panics
    ///
    /// Panics if no move has been applied.
    pub fn undo(&mut self) -> Move {
        self.revert()
    }

    /// Apply `mv`, recording everything [`Position::revert`] needs.
    pub(crate) fn commit(&mut self, mv: Move, promotion: Option<PromotionPiece>) {
        let src = mv.source();
        let dst = mv.dest();
        let moving = self
            .lift(src)
            .unwrap_or_else(|| panic!("commit {mv}: no piece on {src}"));
        let us = moving.color();

        let side_before = self.side_to_move();
        let castling_before = self.castling();

        let captured = if mv.is_castle() {
            None
        } else {
            self.lift(mv.captured_square())
        };

        let landed = match promotion {
            Some(promo) if mv.is_promotion() => moving.with_kind(promo.to_piece_kind()),
            _ => moving,
        };
        self.place(dst, landed);

        match moving.kind() {
            PieceKind::King => self.castling_mut().mark_king_moved(us),
            PieceKind::Rook => {
                if let Some(side) = CastleSide::from_rook_home(src, us) {
                    self.castling_mut().mark_rook_moved(us, side);
                }
            }
            _ => {}
        }

        if let Some(victim) = captured
            && victim.is(PieceKind::Rook)
            && let Some(side) = CastleSide::from_rook_home(mv.captured_square(), victim.color())
        {
            self.castling_mut().mark_rook_moved(victim.color(), side);
        }

        if let MoveKind::Castle(side) = mv.kind() {
            let rook = self
                .lift(side.rook_home(us))
                .unwrap_or_else(|| panic!("castle {mv}: no rook on {}", side.rook_home(us)));
            self.place(side.rook_dest(us), rook);
            self.castling_mut().mark_rook_moved(us, side);
        }

        self.set_side_to_move(!us);

        let played = mv.with_captured(captured).with_promotion(promotion.filter(|_| mv.is_promotion()));
        trace!(mv = %played, ply = self.ply() + 1, "commit");
        self.push_history(HistoryEntry {
            mv: played,
            side_to_move: side_before,
            castling: castling_before,
        });
    }

    /// Undo the most recent commit and return the move as it was recorded.
    pub(crate) fn revert(&mut self) -> Move {
        let HistoryEntry {
            mv,
            side_to_move,
            castling,
        } = self
            .pop_history()
            .expect("revert called with empty move history");

        let landed = self
            .lift(mv.dest())
            .unwrap_or_else(|| panic!("revert {mv}: no piece on {}", mv.dest()));
        let original = if mv.is_promotion() {
            landed.with_kind(PieceKind::Pawn)
        } else {
            landed
        };
        self.place(mv.source(), original);

        if let Some(captured) = mv.captured() {
            self.place(mv.captured_square(), captured);
        }

        if let MoveKind::Castle(side) = mv.kind() {
            let us = original.color();
            let rook = self
                .lift(side.rook_dest(us))
                .unwrap_or_else(|| panic!("revert {mv}: no rook on {}", side.rook_dest(us)));
            self.place(side.rook_home(us), rook);
        }

        self.set_side_to_move(side_to_move);
        self.set_castling(castling);
        trace!(mv = %mv, ply = self.ply(), "revert");
        mv
    }
}
