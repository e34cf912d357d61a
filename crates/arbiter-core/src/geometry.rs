//! Precomputed per-square movement geometry.
//!
//! [`Geometry`] is built once with [`Geometry::build`] and then only read. It
//! holds no game state, so one instance can serve any number of positions.

use crate::square::Square;

/// One of the eight ray directions, in generation order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Direction {
    /// Increasing rank.
    North = 0,
    South = 1,
    /// Decreasing file.
    West = 2,
    East = 3,
    NorthWest = 4,
    SouthEast = 5,
    NorthEast = 6,
    SouthWest = 7,
}

impl Direction {
    /// All eight directions: the four orthogonals, then the four diagonals.
    pub const ALL: [Direction; 8] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::NorthEast,
        Direction::SouthWest,
    ];

    /// Rank and file directions.
    pub const ORTHOGONAL: [Direction; 4] = [
        Direction::North,
        Direction::South,
        Direction::West,
        Direction::East,
    ];

    /// Diagonal directions.
    pub const DIAGONAL: [Direction; 4] = [
        Direction::NorthWest,
        Direction::SouthEast,
        Direction::NorthEast,
        Direction::SouthWest,
    ];

    /// Return the index in [`Direction::ALL`].
    #[inline]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Square-index step for one move in this direction.
    #[inline]
    pub const fn offset(self) -> i8 {
        match self {
            Direction::North => 8,
            Direction::South => -8,
            Direction::West => -1,
            Direction::East => 1,
            Direction::NorthWest => 7,
            Direction::SouthEast => -7,
            Direction::NorthEast => 9,
            Direction::SouthWest => -9,
        }
    }

    /// Return `true` for the four diagonal directions.
    #[inline]
    pub const fn is_diagonal(self) -> bool {
        self.index() >= 4
    }
}

/// Index offsets of the eight knight jumps. Offsets that wrap around the
/// left or right edge are discarded by the Chebyshev check in [`Geometry::build`].
const KNIGHT_OFFSETS: [i8; 8] = [17, 15, 10, 6, -6, -10, -15, -17];

/// Immutable movement tables for all 64 squares.
#[derive(Clone, PartialEq, Eq)]
pub struct Geometry {
    /// Steps to the board edge, indexed by square then [`Direction::index`].
    edge: [[u8; 8]; Square::COUNT],
    /// Knight destinations; `None` where the jump would leave the board.
    knight: [[Option<Square>; 8]; Square::COUNT],
    /// King destinations in [`Direction::ALL`] order; `None` off the board.
    king: [[Option<Square>; 8]; Square::COUNT],
    /// Chebyshev (king-step) distance between every pair of squares.
    distance: [[u8; Square::COUNT]; Square::COUNT],
}

impl Geometry {
    /// Compute every table from square coordinates alone.
    pub fn build() -> Geometry {
        let mut geometry = Geometry {
            edge: [[0; 8]; Square::COUNT],
            knight: [[None; 8]; Square::COUNT],
            king: [[None; 8]; Square::COUNT],
            distance: [[0; Square::COUNT]; Square::COUNT],
        };

        for a in Square::all() {
            for b in Square::all() {
                let dr = a.rank().abs_diff(b.rank());
                let df = a.file().abs_diff(b.file());
                geometry.distance[a.index()][b.index()] = dr.max(df);
            }
        }

        for sq in Square::all() {
            let north = 7 - sq.rank();
            let south = sq.rank();
            let west = sq.file();
            let east = 7 - sq.file();
            geometry.edge[sq.index()] = [
                north,
                south,
                west,
                east,
                north.min(west),
                south.min(east),
                north.min(east),
                south.min(west),
            ];

            for (slot, offset) in KNIGHT_OFFSETS.into_iter().enumerate() {
                geometry.knight[sq.index()][slot] = geometry.step(sq, offset, 2);
            }
            for dir in Direction::ALL {
                geometry.king[sq.index()][dir.index()] = geometry.step(sq, dir.offset(), 1);
            }
        }

        geometry
    }

    /// Destination of `offset` from `sq` if it is on the board and exactly
    /// `expected` king-steps away; wraparound across a side edge fails the
    /// distance test.
    fn step(&self, sq: Square, offset: i8, expected: u8) -> Option<Square> {
        let target = sq.index() as i16 + offset as i16;
        let target = Square::from_index(u8::try_from(target).ok()?)?;
        (self.distance(sq, target) == expected).then_some(target)
    }

    /// Number of squares between `sq` and the board edge in `dir`.
    #[inline]
    pub fn edge_distance(&self, sq: Square, dir: Direction) -> u8 {
        self.edge[sq.index()][dir.index()]
    }

    /// Squares along `dir` from `sq`, nearest first, stopping at the edge.
    pub fn ray(&self, sq: Square, dir: Direction) -> impl Iterator<Item = Square> {
        let offset = dir.offset();
        (1..=self.edge_distance(sq, dir) as i8).map(move |n| sq.offset(offset * n))
    }

    /// The square one step from `sq` in `dir`, if it is on the board.
    #[inline]
    pub fn neighbor(&self, sq: Square, dir: Direction) -> Option<Square> {
        self.king[sq.index()][dir.index()]
    }

    /// Knight destinations from `sq`, in fixed jump order.
    pub fn knight_targets(&self, sq: Square) -> impl Iterator<Item = Square> + '_ {
        self.knight[sq.index()].iter().flatten().copied()
    }

    /// King destinations from `sq`, in [`Direction::ALL`] order.
    pub fn king_targets(&self, sq: Square) -> impl Iterator<Item = Square> + '_ {
        self.king[sq.index()].iter().flatten().copied()
    }

    /// Chebyshev distance: the number of king steps from `a` to `b`.
    #[inline]
    pub fn distance(&self, a: Square, b: Square) -> u8 {
        self.distance[a.index()][b.index()]
    }
}

impl std::fmt::Debug for Geometry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("Geometry { .. }")
    }
}
