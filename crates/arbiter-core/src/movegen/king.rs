//! King move and castling generation.

use crate::castling::CastleSide;
use crate::chess_move::Move;
use crate::color::Color;
use crate::geometry::Geometry;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Generate pseudo-legal king moves for `us`, then castling kingside and
/// queenside.
///
/// Castling candidates are checked fully here, including the attack test on
/// every transit square, since the legality filter only looks at the king's
/// final square.
pub(super) fn gen_king(
    position: &Position,
    geo: &Geometry,
    sq: Square,
    us: Color,
    list: &mut Vec<Move>,
) {
    for dst in geo.king_targets(sq) {
        match position.piece_on(dst) {
            Some(other) if other.is_color(us) => {}
            target => list.push(Move::new(sq, dst, target)),
        }
    }

    let rook = Piece::new(PieceKind::Rook, us);
    for side in CastleSide::ALL {
        if sq != CastleSide::king_home(us)
            || !position.castling().has(us, side)
            || position.piece_on(side.rook_home(us)) != Some(rook)
        {
            continue;
        }
        if side.between(us).any(|s| position.is_occupied(s)) {
            continue;
        }
        // Transit starts on the king's own square, so castling out of check fails here.
        if side.transit(us).any(|s| position.is_attacked(geo, s, !us)) {
            continue;
        }
        list.push(Move::new_castle(sq, side.king_dest(us), side));
    }
}

#[cfg(test)]
mod tests {
    use crate::castling::CastleSide;
    use crate::geometry::Geometry;
    use crate::position::Position;
    use crate::square::Square;

    fn castles(fen: &str, sq: Square) -> Vec<CastleSide> {
        let geo = Geometry::build();
        let position: Position = fen.parse().unwrap();
        position
            .pseudo_legal_moves(&geo, sq)
            .iter()
            .filter_map(|mv| mv.castle())
            .collect()
    }

    #[test]
    fn both_sides_when_clear() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w KQkq - 0 1", Square::E1),
            [CastleSide::KingSide, CastleSide::QueenSide]
        );
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R b KQkq - 0 1", Square::E8),
            [CastleSide::KingSide, CastleSide::QueenSide]
        );
    }

    #[test]
    fn flags_gate_castling() {
        assert_eq!(
            castles("r3k2r/8/8/8/8/8/8/R3K2R w Q - 0 1", Square::E1),
            [CastleSide::QueenSide]
        );
        assert!(castles("r3k2r/8/8/8/8/8/8/R3K2R w kq - 0 1", Square::E1).is_empty());
    }

    #[test]
    fn b_file_must_be_empty_but_may_be_attacked() {
        // Knight on b1 blocks queenside.
        assert_eq!(
            castles("4k3/8/8/8/8/8/8/RN2K2R w KQ - 0 1", Square::E1),
            [CastleSide::KingSide]
        );
        // Rook on b8 only attacks b1, which the king never crosses.
        assert_eq!(
            castles("1r2k3/8/8/8/8/8/8/R3K2R w KQ - 0 1", Square::E1),
            [CastleSide::KingSide, CastleSide::QueenSide]
        );
    }

    #[test]
    fn attacked_transit_or_destination_forbids() {
        // Rook on f8 covers f1.
        assert_eq!(
            castles("4kr2/8/8/8/8/8/8/R3K2R w KQ - 0 1", Square::E1),
            [CastleSide::QueenSide]
        );
        // Rook on c8 covers the queenside destination.
        assert_eq!(
            castles("2r1k3/8/8/8/8/8/8/R3K2R w KQ - 0 1", Square::E1),
            [CastleSide::KingSide]
        );
    }

    #[test]
    fn no_castling_out_of_check() {
        assert!(castles("4r1k1/8/8/8/8/8/8/R3K2R w KQ - 0 1", Square::E1).is_empty());
    }

    #[test]
    fn king_steps_avoid_own_pieces() {
        let geo = Geometry::build();
        let position = Position::starting();
        assert!(position.pseudo_legal_moves(&geo, Square::E1).is_empty());
    }
}
