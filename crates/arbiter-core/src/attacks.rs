//! Attack detection against the current board occupancy.

use crate::color::Color;
use crate::geometry::{Direction, Geometry};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

impl Position {
    /// Return `true` if `sq` is attacked by any piece of `by_color`.
    ///
    /// Works outward from `sq`: king adjacency via the distance table, knight
    /// jumps, the two pawn squares diagonally behind `sq` from the defender's
    /// point of view, then the first occupant of each ray. En passant is not
    /// considered.
    pub fn is_attacked(&self, geo: &Geometry, sq: Square, by_color: Color) -> bool {
        if geo.distance(self.king_square(by_color), sq) == 1 {
            return true;
        }

        let knight = Piece::new(PieceKind::Knight, by_color);
        if geo
            .knight_targets(sq)
            .any(|from| self.piece_on(from) == Some(knight))
        {
            return true;
        }

        // An attacking pawn sits one step toward its own back rank, diagonally.
        let pawn = Piece::new(PieceKind::Pawn, by_color);
        let pawn_dirs = match by_color {
            Color::White => [Direction::SouthWest, Direction::SouthEast],
            Color::Black => [Direction::NorthWest, Direction::NorthEast],
        };
        if pawn_dirs
            .into_iter()
            .filter_map(|dir| geo.neighbor(sq, dir))
            .any(|from| self.piece_on(from) == Some(pawn))
        {
            return true;
        }

        Direction::ALL.into_iter().any(|dir| {
            let Some(blocker) = geo.ray(sq, dir).find_map(|s| self.piece_on(s)) else {
                return false;
            };
            blocker.is_color(by_color)
                && if dir.is_diagonal() {
                    blocker.kind().slides_diagonally()
                } else {
                    blocker.kind().slides_orthogonally()
                }
        })
    }

    /// Return `true` if `color`'s king is attacked by the other color.
    pub fn in_check(&self, geo: &Geometry, color: Color) -> bool {
        self.is_attacked(geo, self.king_square(color), !color)
    }
}
