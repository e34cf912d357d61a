//! FEN loading and serialization for [`Position`].
//!
//! Only the first four FEN fields carry information this crate tracks. The
//! move counters are accepted and checked for being numbers, then dropped.
//! An en passant square is stored as the double push that preceded the
//! position; it never enters the move history.

use std::fmt;
use std::str::FromStr;

use tracing::debug;

use crate::castling::Castling;
use crate::color::Color;
use crate::error::FenError;
use crate::piece::Piece;
use crate::piece_kind::PieceKind;
use crate::position::Position;
use crate::square::Square;

/// The FEN string for the standard starting position.
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

impl FromStr for Position {
    type Err = FenError;

    fn from_str(fen: &str) -> Result<Position, FenError> {
        let fields: Vec<&str> = fen.split_whitespace().collect();
        if !(4..=6).contains(&fields.len()) {
            return Err(FenError::WrongFieldCount {
                found: fields.len(),
            });
        }

        let board = parse_placement(fields[0])?;

        let side_to_move = match fields[1] {
            "w" => Color::White,
            "b" => Color::Black,
            other => {
                return Err(FenError::InvalidColor {
                    found: other.to_string(),
                });
            }
        };

        let castling = Castling::from_fen(fields[2])?;

        for (field, value) in ["halfmove clock", "fullmove number"]
            .into_iter()
            .zip(fields.iter().skip(4))
        {
            value
                .parse::<u16>()
                .map_err(|_| FenError::InvalidMoveCounter {
                    field,
                    found: value.to_string(),
                })?;
        }

        let mut position = Position::from_placement(board, side_to_move, castling)?;

        if fields[3] != "-" {
            let (src, dst) = en_passant_push(&position, fields[3]).ok_or_else(|| {
                FenError::InvalidEnPassant {
                    found: fields[3].to_string(),
                }
            })?;
            position.set_prior_double_push(src, dst);
        }

        debug!(fen, side = %side_to_move, castling = %position.castling(), "position loaded");
        Ok(position)
    }
}

fn parse_placement(placement: &str) -> Result<[Option<Piece>; Square::COUNT], FenError> {
    let ranks: Vec<&str> = placement.split('/').collect();
    if ranks.len() != 8 {
        return Err(FenError::WrongRankCount { found: ranks.len() });
    }

    let mut board = [None; Square::COUNT];
    for (rank_index, rank_str) in ranks.iter().enumerate() {
        // FEN ranks go from 8 to 1 (top to bottom)
        let rank = 7 - rank_index as u8;
        let mut file: u8 = 0;

        for c in rank_str.chars() {
            if let Some(digit) = c.to_digit(10) {
                if !(1..=8).contains(&digit) {
                    return Err(FenError::InvalidPieceChar { character: c });
                }
                file += digit as u8;
            } else {
                let piece =
                    Piece::from_fen_char(c).ok_or(FenError::InvalidPieceChar { character: c })?;
                let Some(sq) = Square::new(rank, file) else {
                    return Err(FenError::BadRankLength {
                        rank_index,
                        length: file as usize + 1,
                    });
                };
                board[sq.index()] = Some(piece);
                file += 1;
            }
        }

        if file != 8 {
            return Err(FenError::BadRankLength {
                rank_index,
                length: file as usize,
            });
        }
    }
    Ok(board)
}

/// Reconstruct the double push implied by an en passant target square.
///
/// Returns `None` unless an enemy pawn stands just past the target with both
/// the target and the pawn's origin square empty.
fn en_passant_push(position: &Position, field: &str) -> Option<(Square, Square)> {
    let target = Square::from_algebraic(field)?;
    let us = position.side_to_move();
    let them = !us;
    if target.rank() != expected_target_rank(them) {
        return None;
    }
    let pawn_sq = target.offset(them.forward());
    let origin = target.offset(-them.forward());
    let pawn = Piece::new(PieceKind::Pawn, them);
    if position.piece_on(pawn_sq) != Some(pawn)
        || position.is_occupied(target)
        || position.is_occupied(origin)
    {
        return None;
    }
    Some((origin, pawn_sq))
}

/// Rank of the square a `color` pawn skips over on a double push.
const fn expected_target_rank(color: Color) -> u8 {
    match color {
        Color::White => 2,
        Color::Black => 5,
    }
}

impl fmt::Display for Position {
    /// Writes the first four FEN fields: placement, side, castling, en passant.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for rank in (0u8..8).rev() {
            let mut empty_count = 0u8;

            for file in 0u8..8 {
                let sq = Square::from_index_unchecked(rank * 8 + file);
                match self.piece_on(sq) {
                    Some(piece) => {
                        if empty_count > 0 {
                            write!(f, "{empty_count}")?;
                            empty_count = 0;
                        }
                        write!(f, "{piece}")?;
                    }
                    None => empty_count += 1,
                }
            }

            if empty_count > 0 {
                write!(f, "{empty_count}")?;
            }
            if rank > 0 {
                write!(f, "/")?;
            }
        }

        write!(f, " {} {}", self.side_to_move(), self.castling())?;

        match self.en_passant_target() {
            Some(sq) => write!(f, " {sq}"),
            None => write!(f, " -"),
        }
    }
}
