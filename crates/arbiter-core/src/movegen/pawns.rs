//! Pawn move generation: pushes, captures and en passant.

use crate::chess_move::Move;
use crate::color::Color;
use crate::geometry::{Direction, Geometry};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Generate pseudo-legal moves for a `us` pawn on `sq`.
///
/// Order: single push, double push, west capture, east capture. A capture
/// square that is empty may still yield an en passant capture.
pub(super) fn gen_pawn(
    position: &Position,
    geo: &Geometry,
    sq: Square,
    us: Color,
    list: &mut Vec<Move>,
) {
    let (push, west, east) = match us {
        Color::White => (Direction::North, Direction::NorthWest, Direction::NorthEast),
        Color::Black => (Direction::South, Direction::SouthWest, Direction::SouthEast),
    };

    if let Some(one) = geo.neighbor(sq, push)
        && !position.is_occupied(one)
    {
        push_move(list, sq, one, None, us);
        if sq.rank() == us.pawn_rank()
            && let Some(two) = geo.neighbor(one, push)
            && !position.is_occupied(two)
        {
            push_move(list, sq, two, None, us);
        }
    }

    for dir in [west, east] {
        let Some(dst) = geo.neighbor(sq, dir) else {
            continue;
        };
        match position.piece_on(dst) {
            Some(target) if !target.is_color(us) => push_move(list, sq, dst, Some(target), us),
            Some(_) => {}
            None => {
                if let Some(victim) = en_passant_victim(position, sq, dst, us) {
                    list.push(Move::new_en_passant(sq, dst, victim));
                }
            }
        }
    }
}

/// Push a pawn move, flagged for promotion when it reaches the last rank.
fn push_move(list: &mut Vec<Move>, src: Square, dst: Square, captured: Option<Piece>, us: Color) {
    if dst.rank() == us.promotion_rank() {
        list.push(Move::new_promotion(src, dst, captured));
    } else {
        list.push(Move::new(src, dst, captured));
    }
}

/// The enemy pawn a `us` pawn on `src` would take by moving diagonally to
/// the empty square `dst`, if the previous move made that capture possible.
fn en_passant_victim(position: &Position, src: Square, dst: Square, us: Color) -> Option<Piece> {
    if position.en_passant_target() != Some(dst) {
        return None;
    }
    let beside = Square::new(src.rank(), dst.file())?;
    let (_, pushed_to) = position.previous_double_push()?;
    let pawn = Piece::new(PieceKind::Pawn, !us);
    (pushed_to == beside && position.piece_on(beside) == Some(pawn)).then_some(pawn)
}

#[cfg(test)]
mod tests {
    use crate::chess_move::Move;
    use crate::geometry::Geometry;
    use crate::piece::Piece;
    use crate::position::Position;
    use crate::square::Square;

    fn dests(moves: &[Move]) -> Vec<Square> {
        moves.iter().map(|mv| mv.dest()).collect()
    }

    #[test]
    fn starting_pawn_single_and_double() {
        let geo = Geometry::build();
        let position = Position::starting();
        assert_eq!(
            dests(&position.pseudo_legal_moves(&geo, Square::E2)),
            [Square::E3, Square::E4]
        );
        assert_eq!(
            dests(&position.pseudo_legal_moves(&geo, Square::D7)),
            [Square::D6, Square::D5]
        );
    }

    #[test]
    fn blocked_pawn_has_no_push() {
        let geo = Geometry::build();
        let position: Position = "4k3/8/8/8/8/4n3/4P3/4K3 w - - 0 1".parse().unwrap();
        assert!(position.pseudo_legal_moves(&geo, Square::E2).is_empty());

        // Blocked two ahead still allows the single push.
        let position: Position = "4k3/8/8/8/4n3/8/4P3/4K3 w - - 0 1".parse().unwrap();
        assert_eq!(dests(&position.pseudo_legal_moves(&geo, Square::E2)), [Square::E3]);
    }

    #[test]
    fn captures_west_then_east() {
        let geo = Geometry::build();
        let position: Position = "4k3/8/8/8/3p1p2/4P3/8/4K3 w - - 0 1".parse().unwrap();
        let moves = position.pseudo_legal_moves(&geo, Square::E3);
        assert_eq!(dests(&moves), [Square::E4, Square::D4, Square::F4]);
        assert_eq!(moves[1].captured(), Some(Piece::BLACK_PAWN));
    }

    #[test]
    fn edge_pawn_does_not_capture_across_board() {
        let geo = Geometry::build();
        let position: Position = "4k3/8/8/8/8/p6p/P7/4K3 w - - 0 1".parse().unwrap();
        assert!(position.pseudo_legal_moves(&geo, Square::A2).is_empty());
    }

    #[test]
    fn promotion_is_flagged_not_resolved() {
        let geo = Geometry::build();
        let position: Position = "1r2k3/P7/8/8/8/8/8/4K3 w - - 0 1".parse().unwrap();
        let moves = position.pseudo_legal_moves(&geo, Square::A7);
        assert_eq!(moves.len(), 2);
        assert!(moves.iter().all(|mv| mv.is_promotion()));
        assert!(moves.iter().all(|mv| mv.promotion().is_none()));
    }

    #[test]
    fn en_passant_only_right_after_double_push() {
        let geo = Geometry::build();
        let mut position: Position = "4k3/3p4/8/4P3/8/8/8/4K3 b - - 0 1".parse().unwrap();
        position.apply(Move::new(Square::D7, Square::D5, None), |_| unreachable!());

        let moves = position.pseudo_legal_moves(&geo, Square::E5);
        let ep: Vec<_> = moves.iter().filter(|mv| mv.is_en_passant()).collect();
        assert_eq!(ep.len(), 1);
        assert_eq!(ep[0].dest(), Square::D6);
        assert_eq!(ep[0].captured_square(), Square::D5);
        assert_ne!(ep[0].captured_square(), ep[0].dest());

        // A tempo later the chance is gone.
        position.apply(Move::new(Square::E1, Square::F1, None), |_| unreachable!());
        position.apply(Move::new(Square::E8, Square::F8, None), |_| unreachable!());
        let moves = position.pseudo_legal_moves(&geo, Square::E5);
        assert!(moves.iter().all(|mv| !mv.is_en_passant()));
    }

    #[test]
    fn single_steps_do_not_enable_en_passant() {
        let geo = Geometry::build();
        let mut position: Position = "4k3/8/3p4/4P3/8/8/8/4K3 b - - 0 1".parse().unwrap();
        position.apply(Move::new(Square::D6, Square::D5, None), |_| unreachable!());
        let moves = position.pseudo_legal_moves(&geo, Square::E5);
        assert!(moves.iter().all(|mv| !mv.is_en_passant()));
    }
}
