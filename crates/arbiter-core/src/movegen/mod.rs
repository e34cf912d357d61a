//! Move generation.
//!
//! Per-piece generators in the submodules produce pseudo-legal candidates;
//! [`legal`] filters them by playing each one and testing king safety.

mod king;
mod knights;
mod legal;
mod pawns;
mod sliders;

use crate::chess_move::Move;
use crate::geometry::Geometry;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

use self::king::gen_king;
use self::knights::gen_knight;
use self::pawns::gen_pawn;
use self::sliders::gen_slider;

impl Position {
    /// Generate pseudo-legal moves for whatever piece stands on `sq`.
    ///
    /// Ignores whose turn it is and whether the mover's king ends up attacked.
    /// Castling candidates are the exception: they are only produced when the
    /// king's path is not attacked. Returns an empty list for an empty square.
    pub fn pseudo_legal_moves(&self, geo: &Geometry, sq: Square) -> Vec<Move> {
        let mut list = Vec::new();
        let Some(piece) = self.piece_on(sq) else {
            return list;
        };
        match piece.kind() {
            PieceKind::Pawn => gen_pawn(self, geo, sq, piece.color(), &mut list),
            PieceKind::Knight => gen_knight(self, geo, sq, piece.color(), &mut list),
            PieceKind::Bishop | PieceKind::Rook | PieceKind::Queen => {
                gen_slider(self, geo, sq, piece, &mut list)
            }
            PieceKind::King => gen_king(self, geo, sq, piece.color(), &mut list),
        }
        list
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::Geometry;
    use crate::position::Position;
    use crate::square::Square;

    #[test]
    fn empty_square_yields_nothing() {
        let geo = Geometry::build();
        assert!(Position::starting().pseudo_legal_moves(&geo, Square::E4).is_empty());
    }

    #[test]
    fn pseudo_legal_ignores_pins() {
        let geo = Geometry::build();
        // Knight e2 is pinned by the rook on e8 but still has pseudo-legal jumps.
        let position: Position = "4r2k/8/8/8/8/8/4N3/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(position.pseudo_legal_moves(&geo, Square::E2).len(), 6);
    }

    #[test]
    fn ignores_side_to_move() {
        let geo = Geometry::build();
        let position = Position::starting();
        assert_eq!(position.pseudo_legal_moves(&geo, Square::G8).len(), 2);
    }
}
