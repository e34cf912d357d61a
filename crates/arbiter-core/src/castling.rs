//! Castling geometry and the per-color "has moved" flags that gate it.

use std::fmt;

use crate::color::Color;
use crate::error::FenError;
use crate::square::Square;

/// Which side of the board to castle toward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CastleSide {
    KingSide,
    QueenSide,
}

impl CastleSide {
    /// Both sides, in generation order.
    pub const ALL: [CastleSide; 2] = [CastleSide::KingSide, CastleSide::QueenSide];

    /// Return the index (0 for kingside, 1 for queenside).
    #[inline]
    pub const fn index(self) -> usize {
        match self {
            CastleSide::KingSide => 0,
            CastleSide::QueenSide => 1,
        }
    }

    /// Square the king starts on for `color`.
    pub const fn king_home(color: Color) -> Square {
        back_rank_square(color, 4)
    }

    /// Square the castling rook starts on.
    pub const fn rook_home(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => back_rank_square(color, 7),
            CastleSide::QueenSide => back_rank_square(color, 0),
        }
    }

    /// Square the king lands on.
    pub const fn king_dest(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => back_rank_square(color, 6),
            CastleSide::QueenSide => back_rank_square(color, 2),
        }
    }

    /// Square the rook lands on.
    pub const fn rook_dest(self, color: Color) -> Square {
        match self {
            CastleSide::KingSide => back_rank_square(color, 5),
            CastleSide::QueenSide => back_rank_square(color, 3),
        }
    }

    /// Files strictly between the king and the rook; all must be empty.
    const fn between_files(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[5, 6],
            CastleSide::QueenSide => &[1, 2, 3],
        }
    }

    /// Files the king stands on or passes through, starting with its own square
    /// and ending with its destination; none may be attacked.
    const fn transit_files(self) -> &'static [u8] {
        match self {
            CastleSide::KingSide => &[4, 5, 6],
            CastleSide::QueenSide => &[4, 3, 2],
        }
    }

    /// Squares strictly between king and rook.
    pub fn between(self, color: Color) -> impl Iterator<Item = Square> {
        self.between_files()
            .iter()
            .map(move |&file| back_rank_square(color, file))
    }

    /// Squares the king must not be attacked on: its home square, every square
    /// it crosses, and its destination.
    pub fn transit(self, color: Color) -> impl Iterator<Item = Square> {
        self.transit_files()
            .iter()
            .map(move |&file| back_rank_square(color, file))
    }

    /// Identify a castling rook home square.
    pub fn from_rook_home(sq: Square, color: Color) -> Option<CastleSide> {
        CastleSide::ALL
            .into_iter()
            .find(|side| side.rook_home(color) == sq)
    }
}

const fn back_rank_square(color: Color, file: u8) -> Square {
    Square::from_index_unchecked(color.back_rank() * 8 + file)
}

/// Per-color "king has moved" and per-color-per-side "rook has moved" flags.
///
/// A side may castle only while both its king and the relevant rook are
/// unmoved. Flags only ever go from unmoved to moved during play; undo restores
/// them from the snapshot stored in the move history.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct Castling {
    king_moved: [bool; Color::COUNT],
    rook_moved: [[bool; 2]; Color::COUNT],
}

impl Castling {
    /// Nothing has moved: every castling option is still open.
    pub const UNMOVED: Castling = Castling {
        king_moved: [false; Color::COUNT],
        rook_moved: [[false; 2]; Color::COUNT],
    };

    /// Everything has moved: no castling is possible for either color.
    pub const NONE: Castling = Castling {
        king_moved: [true; Color::COUNT],
        rook_moved: [[true; 2]; Color::COUNT],
    };

    /// Return `true` if `color`'s king has left its home square.
    #[inline]
    pub const fn king_moved(self, color: Color) -> bool {
        self.king_moved[color.index()]
    }

    /// Return `true` if `color`'s `side` rook has moved or been captured.
    #[inline]
    pub const fn rook_moved(self, color: Color, side: CastleSide) -> bool {
        self.rook_moved[color.index()][side.index()]
    }

    /// Return `true` if neither the king nor the `side` rook of `color` has moved.
    #[inline]
    pub const fn has(self, color: Color, side: CastleSide) -> bool {
        !self.king_moved(color) && !self.rook_moved(color, side)
    }

    #[inline]
    pub(crate) fn mark_king_moved(&mut self, color: Color) {
        self.king_moved[color.index()] = true;
    }

    #[inline]
    pub(crate) fn mark_rook_moved(&mut self, color: Color, side: CastleSide) {
        self.rook_moved[color.index()][side.index()] = true;
    }

    /// Parse the FEN castling field (e.g. "KQkq", "Kq", "-").
    ///
    /// A missing letter marks that rook as moved; a color with no letters at all
    /// also has its king marked as moved.
    pub fn from_fen(s: &str) -> Result<Castling, FenError> {
        let mut castling = Castling::NONE;
        if s == "-" {
            return Ok(castling);
        }

        for c in s.chars() {
            let (color, side) = match c {
                'K' => (Color::White, CastleSide::KingSide),
                'Q' => (Color::White, CastleSide::QueenSide),
                'k' => (Color::Black, CastleSide::KingSide),
                'q' => (Color::Black, CastleSide::QueenSide),
                _ => return Err(FenError::InvalidCastlingChar { character: c }),
            };
            castling.king_moved[color.index()] = false;
            castling.rook_moved[color.index()][side.index()] = false;
        }
        Ok(castling)
    }

    /// Serialize to the FEN castling field.
    pub fn to_fen(self) -> String {
        let mut s = String::with_capacity(4);
        for (color, side, c) in [
            (Color::White, CastleSide::KingSide, 'K'),
            (Color::White, CastleSide::QueenSide, 'Q'),
            (Color::Black, CastleSide::KingSide, 'k'),
            (Color::Black, CastleSide::QueenSide, 'q'),
        ] {
            if self.has(color, side) {
                s.push(c);
            }
        }
        if s.is_empty() {
            s.push('-');
        }
        s
    }
}

impl fmt::Display for Castling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.to_fen())
    }
}

impl fmt::Debug for Castling {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Castling")
            .field("king_moved", &self.king_moved)
            .field("rook_moved", &self.rook_moved)
            .finish()
    }
}
