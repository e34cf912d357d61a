//! Knight move generation.

use crate::chess_move::Move;
use crate::color::Color;
use crate::geometry::Geometry;
use crate::position::Position;
use crate::square::Square;

/// Generate pseudo-legal moves for a `us` knight on `sq`.
pub(super) fn gen_knight(
    position: &Position,
    geo: &Geometry,
    sq: Square,
    us: Color,
    list: &mut Vec<Move>,
) {
    for dst in geo.knight_targets(sq) {
        match position.piece_on(dst) {
            Some(other) if other.is_color(us) => {}
            target => list.push(Move::new(sq, dst, target)),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::geometry::Geometry;
    use crate::position::Position;
    use crate::square::Square;

    #[test]
    fn starting_knight_has_two_moves() {
        let geo = Geometry::build();
        let position = Position::starting();
        let moves = position.pseudo_legal_moves(&geo, Square::B1);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| !mv.is_capture()));
    }

    #[test]
    fn corner_knight_captures_enemy() {
        let geo = Geometry::build();
        let position: Position = "4k3/8/8/8/8/1p6/2P5/N3K3 w - - 0 1".parse().unwrap();
        let moves = position.pseudo_legal_moves(&geo, Square::A1);
        // c2 holds a white pawn, b3 a black one.
        assert_eq!(moves.len(), 1);
        assert_eq!(moves[0].dest(), Square::B3);
        assert!(moves[0].is_capture());
    }
}
