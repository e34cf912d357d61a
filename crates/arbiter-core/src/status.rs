//! Game end-state detection.

use std::fmt;

use crate::color::Color;
use crate::geometry::Geometry;
use crate::position::Position;
use crate::square::Square;

/// Where a game stands for the side to move.
///
/// [`GameStatus::Repetition`] and [`GameStatus::FiftyMove`] are part of the
/// enumeration for callers that track those rules themselves;
/// [`Position::status`] never produces them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameStatus {
    /// The side to move has at least one legal move.
    Ongoing,
    /// The side to move is in check with no legal move.
    Checkmate { winner: Color },
    /// The side to move is not in check and has no legal move.
    Stalemate,
    Repetition,
    FiftyMove,
}

impl GameStatus {
    /// Return `true` for every status except [`GameStatus::Ongoing`].
    #[inline]
    pub const fn is_over(self) -> bool {
        !matches!(self, GameStatus::Ongoing)
    }
}

impl fmt::Display for GameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameStatus::Ongoing => write!(f, "ongoing"),
            GameStatus::Checkmate { winner } => write!(f, "{} wins by checkmate", winner.name()),
            GameStatus::Stalemate => write!(f, "draw by stalemate"),
            GameStatus::Repetition => write!(f, "draw by threefold repetition"),
            GameStatus::FiftyMove => write!(f, "draw by fifty-move rule"),
        }
    }
}

impl Position {
    /// Classify the position for the side to move.
    pub fn status(&mut self, geo: &Geometry) -> GameStatus {
        let us = self.side_to_move();
        if self.has_legal_move(geo, us) {
            GameStatus::Ongoing
        } else if self.in_check(geo, us) {
            GameStatus::Checkmate { winner: !us }
        } else {
            GameStatus::Stalemate
        }
    }

    /// Stops at the first piece with a legal move.
    fn has_legal_move(&mut self, geo: &Geometry, color: Color) -> bool {
        let squares: Vec<Square> = self.occupied(color).iter().copied().collect();
        squares.into_iter().any(|sq| {
            let candidates = self.pseudo_legal_moves(geo, sq);
            !self.filter_legal(geo, candidates).is_empty()
        })
    }
}
