//! Core chess types.
//!
//! This module contains the fundamental value types of the rules engine:
//! - `Piece`, `PieceKind` and `Color`
//! - `Square` - a checked board coordinate
//! - `Bitboard` - 64-bit square set used by the board representation
//! - `Move` and `MoveList`
//! - `CastlingRights` and `CastlingSide`

mod bitboard;
mod castling;
mod moves;
mod piece;
mod square;

pub use bitboard::{Bitboard, BitboardIter};
pub use castling::{CastlingRights, CastlingSide};
pub use moves::{Move, MoveList};
pub use piece::{Color, Piece, PieceKind};
pub use square::Square;

pub(crate) use castling::{castle_char, king_home, rook_home};
