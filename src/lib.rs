//! Chess rules engine.
//!
//! Owns board state, enumerates legal moves, applies moves, reads and
//! writes FEN and classifies the game outcome. A [`GameSession`] adds a
//! navigable move history on top of the immutable [`Position`] values.
//!
//! ```
//! use chess_rules::GameSession;
//!
//! let mut game = GameSession::new();
//! for mv in ["f2f3", "e7e5", "g2g4", "d8h4"] {
//!     game.apply_move(mv.parse().unwrap()).unwrap();
//! }
//! assert!(game.status().checkmate());
//! ```

#[cfg(feature = "logging")]
macro_rules! log_debug {
    ($($arg:tt)*) => { log::debug!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_debug {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

#[cfg(feature = "logging")]
macro_rules! log_warn {
    ($($arg:tt)*) => { log::warn!($($arg)*) };
}

#[cfg(not(feature = "logging"))]
macro_rules! log_warn {
    ($($arg:tt)*) => {{ let _ = format_args!($($arg)*); }};
}

pub mod board;
pub mod config;
pub mod game;
pub mod zobrist;

pub use board::{
    perft, validate_fen, Board, Color, DrawReason, GameStatus, IllegalMoveError,
    IllegalMoveReason, Move, ParseError, Piece, PieceKind, Position, Square, PIECE_GLYPHS,
    STARTING_FEN,
};
pub use config::{DrawRules, SessionConfig};
pub use game::{GameSession, MoveListEntry, MoveRecord};
