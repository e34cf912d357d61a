//! Bishop, rook and queen move generation.

use crate::chess_move::Move;
use crate::geometry::{Direction, Geometry};
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// Generate pseudo-legal moves for the slider `piece` standing on `sq`.
///
/// Rays are walked in [`Direction`] order, each from near to far, ending at
/// the first occupied square (included only if it holds an enemy piece).
pub(super) fn gen_slider(
    position: &Position,
    geo: &Geometry,
    sq: Square,
    piece: Piece,
    list: &mut Vec<Move>,
) {
    let directions: &[Direction] = match piece.kind() {
        PieceKind::Bishop => &Direction::DIAGONAL,
        PieceKind::Rook => &Direction::ORTHOGONAL,
        _ => &Direction::ALL,
    };

    for &dir in directions {
        for dst in geo.ray(sq, dir) {
            match position.piece_on(dst) {
                None => list.push(Move::new(sq, dst, None)),
                Some(other) => {
                    if !other.is_color(piece.color()) {
                        list.push(Move::new(sq, dst, Some(other)));
                    }
                    break;
                }
            }
        }
    }
}
