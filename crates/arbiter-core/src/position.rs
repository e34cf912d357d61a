//! Position state: piece placement, side to move, king cache, castling flags,
//! move history and per-color occupied-square sets.

use std::collections::BTreeSet;
use std::fmt;

use crate::castling::{CastleSide, Castling};
use crate::chess_move::Move;
use crate::color::Color;
use crate::error::BoardError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::square::Square;

/// One committed move plus the state it overwrote.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct HistoryEntry {
    /// The move as applied, with capture and promotion choice filled in.
    pub(crate) mv: Move,
    /// Side to move before the move was applied.
    pub(crate) side_to_move: Color,
    /// Moved flags before the move was applied.
    pub(crate) castling: Castling,
}

/// Complete game state for one game.
///
/// The board, king cache and occupied-square sets always agree with each
/// other. Only the move applier in `make_move` mutates a position once it has
/// been constructed.
#[derive(Clone, PartialEq, Eq)]
pub struct Position {
    /// Piece on each square, indexed by [`Square::index`].
    board: [Option<Piece>; Square::COUNT],
    /// Which side moves next.
    side_to_move: Color,
    /// King square per color, indexed by [`Color::index`].
    king_squares: [Square; Color::COUNT],
    /// King and rook moved flags.
    castling: Castling,
    /// Committed moves, oldest first.
    history: Vec<HistoryEntry>,
    /// Squares holding each color's pieces.
    occupied: [BTreeSet<Square>; Color::COUNT],
    /// Source and destination of a double push made before the position was
    /// loaded. Only consulted while `history` is empty.
    prior_double_push: Option<(Square, Square)>,
}

impl Position {
    /// Return the standard starting position.
    pub fn starting() -> Position {
        const BACK_RANK: [PieceKind; 8] = [
            PieceKind::Rook,
            PieceKind::Knight,
            PieceKind::Bishop,
            PieceKind::Queen,
            PieceKind::King,
            PieceKind::Bishop,
            PieceKind::Knight,
            PieceKind::Rook,
        ];

        let mut board = [None; Square::COUNT];
        for color in Color::ALL {
            for (file, kind) in BACK_RANK.into_iter().enumerate() {
                let back = color.back_rank() as usize * 8 + file;
                let pawns = color.pawn_rank() as usize * 8 + file;
                board[back] = Some(Piece::new(kind, color));
                board[pawns] = Some(Piece::new(PieceKind::Pawn, color));
            }
        }

        match Position::from_placement(board, Color::White, Castling::UNMOVED) {
            Ok(position) => position,
            Err(err) => unreachable!("standard layout is valid: {err}"),
        }
    }

    /// Build a position from a full board, the side to move and initial moved
    /// flags.
    ///
    /// Castling flags are tightened to match the board: a king off its home
    /// square, or a missing rook, closes the corresponding castling option.
    ///
    /// # Errors
    ///
    /// Returns [`BoardError`] if a color does not have exactly one king, or a
    /// pawn stands on the first or last rank.
    pub fn from_placement(
        board: [Option<Piece>; Square::COUNT],
        side_to_move: Color,
        mut castling: Castling,
    ) -> Result<Position, BoardError> {
        let mut occupied = [BTreeSet::new(), BTreeSet::new()];
        let mut kings: [Vec<Square>; Color::COUNT] = [Vec::new(), Vec::new()];

        for sq in Square::all() {
            let Some(piece) = board[sq.index()] else {
                continue;
            };
            occupied[piece.color().index()].insert(sq);
            match piece.kind() {
                PieceKind::King => kings[piece.color().index()].push(sq),
                PieceKind::Pawn if sq.rank() == 0 || sq.rank() == 7 => {
                    return Err(BoardError::PawnsOnBackRank { square: sq });
                }
                _ => {}
            }
        }

        for color in Color::ALL {
            let found = &kings[color.index()];
            if found.len() != 1 {
                return Err(BoardError::InvalidKingCount {
                    color: color.name(),
                    count: found.len(),
                });
            }
            if found[0] != CastleSide::king_home(color) {
                castling.mark_king_moved(color);
            }
            for side in CastleSide::ALL {
                let rook = Piece::new(PieceKind::Rook, color);
                if board[side.rook_home(color).index()] != Some(rook) {
                    castling.mark_rook_moved(color, side);
                }
            }
        }

        Ok(Position {
            board,
            side_to_move,
            king_squares: [kings[0][0], kings[1][0]],
            castling,
            history: Vec::new(),
            occupied,
            prior_double_push: None,
        })
    }

    /// Return the piece on the given square, if any.
    #[inline]
    pub fn piece_on(&self, sq: Square) -> Option<Piece> {
        self.board[sq.index()]
    }

    /// Return `true` if the given square holds any piece.
    #[inline]
    pub fn is_occupied(&self, sq: Square) -> bool {
        self.board[sq.index()].is_some()
    }

    /// Return the side to move.
    #[inline]
    pub fn side_to_move(&self) -> Color {
        self.side_to_move
    }

    /// Return the square of the king for the given side.
    #[inline]
    pub fn king_square(&self, color: Color) -> Square {
        self.king_squares[color.index()]
    }

    /// Return the current moved flags.
    #[inline]
    pub fn castling(&self) -> Castling {
        self.castling
    }

    /// Return the squares occupied by `color`, in square order.
    #[inline]
    pub fn occupied(&self, color: Color) -> &BTreeSet<Square> {
        &self.occupied[color.index()]
    }

    /// Return the most recently committed move.
    pub fn last_move(&self) -> Option<&Move> {
        self.history.last().map(|entry| &entry.mv)
    }

    /// Iterate over committed moves, oldest first.
    pub fn history(&self) -> impl DoubleEndedIterator<Item = &Move> + '_ {
        self.history.iter().map(|entry| &entry.mv)
    }

    /// Number of moves committed since the position was loaded.
    #[inline]
    pub fn ply(&self) -> usize {
        self.history.len()
    }

    /// Square a pawn may capture onto en passant right now, if the previous
    /// move was a pawn double push.
    pub fn en_passant_target(&self) -> Option<Square> {
        let (src, dst) = self.previous_double_push()?;
        Square::from_index(((src.index() + dst.index()) / 2) as u8)
    }

    /// Source and destination of the pawn double push that was the previous
    /// move, if it was one.
    ///
    /// Before any move is committed this is the push a loaded position
    /// declared through its en passant field.
    pub(crate) fn previous_double_push(&self) -> Option<(Square, Square)> {
        let Some(last) = self.last_move() else {
            return self.prior_double_push;
        };
        let pushed = self.piece_on(last.dest())?;
        (pushed.is(PieceKind::Pawn) && last.source().index().abs_diff(last.dest().index()) == 16)
            .then_some((last.source(), last.dest()))
    }

    /// Record a double push made before this position, enabling en passant on
    /// the first move.
    pub(crate) fn set_prior_double_push(&mut self, src: Square, dst: Square) {
        debug_assert!(self.history.is_empty());
        self.prior_double_push = Some((src, dst));
    }

    /// Remove and return the piece on `sq`, keeping the occupied sets in step.
    pub(crate) fn lift(&mut self, sq: Square) -> Option<Piece> {
        let piece = self.board[sq.index()].take()?;
        self.occupied[piece.color().index()].remove(&sq);
        Some(piece)
    }

    /// Put `piece` on the empty square `sq`, keeping the occupied sets and king
    /// cache in step.
    pub(crate) fn place(&mut self, sq: Square, piece: Piece) {
        debug_assert!(self.board[sq.index()].is_none(), "placing onto occupied {sq}");
        self.board[sq.index()] = Some(piece);
        self.occupied[piece.color().index()].insert(sq);
        if piece.is(PieceKind::King) {
            self.king_squares[piece.color().index()] = sq;
        }
    }

    #[inline]
    pub(crate) fn set_side_to_move(&mut self, color: Color) {
        self.side_to_move = color;
    }

    #[inline]
    pub(crate) fn castling_mut(&mut self) -> &mut Castling {
        &mut self.castling
    }

    #[inline]
    pub(crate) fn set_castling(&mut self, castling: Castling) {
        self.castling = castling;
    }

    #[inline]
    pub(crate) fn push_history(&mut self, entry: HistoryEntry) {
        self.history.push(entry);
    }

    #[inline]
    pub(crate) fn pop_history(&mut self) -> Option<HistoryEntry> {
        self.history.pop()
    }

    /// Return a pretty-printable wrapper for this position.
    pub fn pretty(&self) -> PrettyBoard<'_> {
        PrettyBoard(self)
    }
}

impl Default for Position {
    fn default() -> Self {
        Position::starting()
    }
}

impl fmt::Debug for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Position(\"{}\", ply={})", self, self.ply())
    }
}

/// Wrapper for pretty-printing a position as an 8x8 grid.
pub struct PrettyBoard<'a>(&'a Position);

impl fmt::Display for PrettyBoard<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let position = self.0;
        for rank in (0u8..8).rev() {
            write!(f, "{}  ", rank + 1)?;
            for file in 0u8..8 {
                let sq = Square::from_index_unchecked(rank * 8 + file);
                let c = position.piece_on(sq).map_or('.', Piece::fen_char);
                if file < 7 {
                    write!(f, "{c} ")?;
                } else {
                    write!(f, "{c}")?;
                }
            }
            writeln!(f)?;
        }
        write!(f, "   a b c d e f g h")
    }
}
