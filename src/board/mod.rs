//! Chess board representation and rules.
//!
//! Uses bitboards for move generation and attack detection. Supports the
//! full rules including castling, en passant and promotion, plus FEN input
//! and output and game status classification.
//!
//! # Example
//! ```
//! use chess_rules::board::{Move, Position};
//!
//! let position = Position::starting();
//! println!("Starting position has {} legal moves", position.legal_moves().len());
//!
//! let after = position.apply("e2e4".parse::<Move>().unwrap()).unwrap();
//! assert_eq!(
//!     after.to_fen(),
//!     "rnbqkbnr/pppppppp/8/8/4P3/8/PPPP1PPP/RNBQKBNR b KQkq e3 0 1"
//! );
//! ```

mod apply;
pub(crate) mod attack_tables;
mod attacks;
mod builder;
mod error;
mod fen;
mod glyphs;
mod movegen;
mod san;
mod state;
mod status;
mod types;

#[cfg(test)]
mod tests;

pub use builder::PositionBuilder;
pub use error::{IllegalMoveError, IllegalMoveReason, MoveParseError, ParseError, SquareError};
pub use fen::{validate_fen, STARTING_FEN};
pub use glyphs::PIECE_GLYPHS;
pub use movegen::{perft, perft_divide};
pub use state::{Board, Position};
pub use status::{evaluate, DrawReason, GameStatus, Outcome};
pub use types::{
    Bitboard, BitboardIter, CastlingRights, CastlingSide, Color, Move, MoveList, Piece, PieceKind,
    Square,
};

pub(crate) use types::{castle_char, king_home, rook_home};
