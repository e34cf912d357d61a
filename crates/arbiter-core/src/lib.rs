//! Chess rules: board state, legal move generation, and make/undo.
//!
//! Build a [`Geometry`] once and pass it to every query. A [`Position`] is
//! changed only by [`Position::apply`] and [`Position::undo`].

mod attacks;
mod castling;
mod chess_move;
mod color;
mod error;
mod fen;
mod geometry;
mod make_move;
mod movegen;
mod perft;
mod piece;
mod piece_kind;
mod position;
mod square;
mod status;

pub use castling::{CastleSide, Castling};
pub use chess_move::{Move, MoveKind, PromotionPiece};
pub use color::Color;
pub use error::{BoardError, FenError};
pub use fen::STARTING_FEN;
pub use geometry::{Direction, Geometry};
pub use perft::{divide, perft};
pub use piece::Piece;
pub use piece_kind::PieceKind;
pub use position::{Position, PrettyBoard};
pub use square::Square;
pub use status::GameStatus;
