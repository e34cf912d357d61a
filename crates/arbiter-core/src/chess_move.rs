//! Chess move representation.

use std::fmt;

use crate::castling::CastleSide;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// The category of a chess move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MoveKind {
    /// A quiet move or an ordinary capture (including pawn double pushes).
    Normal,
    /// A pawn move reaching the far rank, with or without a capture.
    Promotion,
    /// A pawn capture that removes a pawn not standing on the destination.
    EnPassant,
    /// King half of a castling move; the rook follows when the move is applied.
    Castle(CastleSide),
}

/// The piece a pawn promotes to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum PromotionPiece {
    Knight = 0,
    Bishop = 1,
    Rook = 2,
    Queen = 3,
}

impl PromotionPiece {
    /// All promotion pieces in index order.
    pub const ALL: [PromotionPiece; 4] = [
        PromotionPiece::Knight,
        PromotionPiece::Bishop,
        PromotionPiece::Rook,
        PromotionPiece::Queen,
    ];

    /// Convert to the corresponding [`PieceKind`].
    pub const fn to_piece_kind(self) -> PieceKind {
        match self {
            PromotionPiece::Knight => PieceKind::Knight,
            PromotionPiece::Bishop => PieceKind::Bishop,
            PromotionPiece::Rook => PieceKind::Rook,
            PromotionPiece::Queen => PieceKind::Queen,
        }
    }

    /// Lowercase letter of the promoted piece.
    pub const fn letter(self) -> char {
        self.to_piece_kind().fen_char()
    }
}

/// A move from one square to another, with the metadata needed to apply and
/// revert it.
///
/// Generated moves carry the captured piece (if any) and, for promotions, only
/// the promotion flag: [`Move::promotion`] stays `None` until the move is
/// applied and the promotion choice is resolved.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Move {
    source: Square,
    dest: Square,
    kind: MoveKind,
    captured: Option<Piece>,
    promotion: Option<PromotionPiece>,
}

impl Move {
    /// Create a normal (quiet or capture) move.
    pub const fn new(source: Square, dest: Square, captured: Option<Piece>) -> Move {
        Move {
            source,
            dest,
            kind: MoveKind::Normal,
            captured,
            promotion: None,
        }
    }

    /// Create a promotion-flagged pawn move.
    pub const fn new_promotion(source: Square, dest: Square, captured: Option<Piece>) -> Move {
        Move {
            source,
            dest,
            kind: MoveKind::Promotion,
            captured,
            promotion: None,
        }
    }

    /// Create an en passant capture of `captured`, which stands beside `source`.
    pub const fn new_en_passant(source: Square, dest: Square, captured: Piece) -> Move {
        Move {
            source,
            dest,
            kind: MoveKind::EnPassant,
            captured: Some(captured),
            promotion: None,
        }
    }

    /// Create a castling move from the king's source and destination squares.
    pub const fn new_castle(king_src: Square, king_dst: Square, side: CastleSide) -> Move {
        Move {
            source: king_src,
            dest: king_dst,
            kind: MoveKind::Castle(side),
            captured: None,
            promotion: None,
        }
    }

    /// Extract the source square.
    #[inline]
    pub const fn source(self) -> Square {
        self.source
    }

    /// Extract the destination square.
    #[inline]
    pub const fn dest(self) -> Square {
        self.dest
    }

    /// Extract the move kind.
    #[inline]
    pub const fn kind(self) -> MoveKind {
        self.kind
    }

    /// The piece this move captures, if any.
    #[inline]
    pub const fn captured(self) -> Option<Piece> {
        self.captured
    }

    /// The resolved promotion piece. `None` until the move has been applied.
    #[inline]
    pub const fn promotion(self) -> Option<PromotionPiece> {
        self.promotion
    }

    /// Square the captured piece stands on.
    ///
    /// Equal to the destination except for en passant, where the captured pawn
    /// sits on the source rank and the destination file.
    pub const fn captured_square(self) -> Square {
        match self.kind {
            MoveKind::EnPassant => {
                Square::from_index_unchecked(self.source.rank() * 8 + self.dest.file())
            }
            _ => self.dest,
        }
    }

    /// Castle side, or `None` for non-castling moves.
    pub const fn castle(self) -> Option<CastleSide> {
        match self.kind {
            MoveKind::Castle(side) => Some(side),
            _ => None,
        }
    }

    /// Return `true` if this move captures a piece.
    pub const fn is_capture(self) -> bool {
        self.captured.is_some()
    }

    /// Return `true` if this is a promotion.
    pub const fn is_promotion(self) -> bool {
        matches!(self.kind, MoveKind::Promotion)
    }

    /// Return `true` if this is an en passant capture.
    pub const fn is_en_passant(self) -> bool {
        matches!(self.kind, MoveKind::EnPassant)
    }

    /// Return `true` if this is a castling move.
    pub const fn is_castle(self) -> bool {
        matches!(self.kind, MoveKind::Castle(_))
    }

    /// Copy of this move with the captured piece replaced.
    pub(crate) const fn with_captured(self, captured: Option<Piece>) -> Move {
        Move { captured, ..self }
    }

    /// Copy of this move with the promotion choice recorded.
    pub(crate) const fn with_promotion(self, promotion: Option<PromotionPiece>) -> Move {
        Move { promotion, ..self }
    }
}

impl fmt::Display for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.source, self.dest)?;
        if let Some(promo) = self.promotion {
            write!(f, "{}", promo.letter())?;
        }
        Ok(())
    }
}

impl fmt::Debug for Move {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Move({} kind={:?}", self, self.kind)?;
        if let Some(captured) = self.captured {
            write!(f, " captures={captured:?}")?;
        }
        write!(f, ")")
    }
}

#[cfg(test)]
mod tests {
    use super::{Move, MoveKind, PromotionPiece};
    use crate::castling::CastleSide;
    use crate::piece::Piece;
    use crate::piece_kind::PieceKind;
    use crate::square::Square;

    #[test]
    fn normal_move_accessors() {
        let mv = Move::new(Square::E2, Square::E4, None);
        assert_eq!(mv.source(), Square::E2);
        assert_eq!(mv.dest(), Square::E4);
        assert_eq!(mv.kind(), MoveKind::Normal);
        assert!(!mv.is_capture());
        assert!(!mv.is_promotion());
        assert!(!mv.is_en_passant());
        assert_eq!(mv.castle(), None);
        assert_eq!(mv.captured_square(), Square::E4);
    }

    #[test]
    fn en_passant_captured_square_differs_from_dest() {
        let mv = Move::new_en_passant(Square::E5, Square::D6, Piece::BLACK_PAWN);
        assert!(mv.is_en_passant());
        assert!(mv.is_capture());
        assert_eq!(mv.captured_square(), Square::D5);
        assert_ne!(mv.captured_square(), mv.dest());

        let black = Move::new_en_passant(Square::D4, Square::E3, Piece::WHITE_PAWN);
        assert_eq!(black.captured_square(), Square::E4);
    }

    #[test]
    fn castle_carries_side() {
        let mv = Move::new_castle(Square::E8, Square::C8, CastleSide::QueenSide);
        assert!(mv.is_castle());
        assert_eq!(mv.castle(), Some(CastleSide::QueenSide));
        assert!(!mv.is_capture());
    }

    #[test]
    fn promotion_resolved_later() {
        let mv = Move::new_promotion(Square::E7, Square::D8, Some(Piece::BLACK_ROOK));
        assert!(mv.is_promotion());
        assert_eq!(mv.promotion(), None);
        assert_eq!(format!("{mv}"), "e7d8");

        let resolved = mv.with_promotion(Some(PromotionPiece::Knight));
        assert_eq!(resolved.promotion(), Some(PromotionPiece::Knight));
        assert_eq!(format!("{resolved}"), "e7d8n");
    }

    #[test]
    fn promotion_piece_to_piece_kind() {
        assert_eq!(PromotionPiece::Knight.to_piece_kind(), PieceKind::Knight);
        assert_eq!(PromotionPiece::Bishop.to_piece_kind(), PieceKind::Bishop);
        assert_eq!(PromotionPiece::Rook.to_piece_kind(), PieceKind::Rook);
        assert_eq!(PromotionPiece::Queen.to_piece_kind(), PieceKind::Queen);
    }

    #[test]
    fn debug_contains_kind_and_capture() {
        let mv = Move::new(Square::D4, Square::E5, Some(Piece::BLACK_PAWN));
        let debug_str = format!("{:?}", mv);
        assert!(debug_str.contains("d4e5"), "debug should contain squares: {debug_str}");
        assert!(debug_str.contains("Normal"), "debug should contain kind: {debug_str}");
        assert!(debug_str.contains("BP"), "debug should contain capture: {debug_str}");
    }
}
