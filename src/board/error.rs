//! Error types for chess board operations.

use std::fmt;

use super::{Color, Move, Square};

/// Error type for position text (FEN) that is malformed or describes an
/// impossible position.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// The text does not have exactly six whitespace-separated fields
    WrongFieldCount { found: usize },
    /// The placement field does not have exactly eight ranks
    WrongRankCount { found: usize },
    /// A rank does not describe exactly eight squares (rank is 1-8)
    InvalidRankLength { rank: u8, squares: usize },
    /// Unknown piece letter or digit outside 1-8 in the placement field
    InvalidPiece { char: char },
    /// Invalid side to move (must be 'w' or 'b')
    InvalidSideToMove { found: String },
    /// Castling field is not `-` or a duplicate-free subset of `KQkq`
    InvalidCastling { found: String },
    /// En passant field is not `-` or a square
    InvalidEnPassant { found: String },
    /// Halfmove clock is not a non-negative integer
    InvalidHalfmoveClock { found: String },
    /// Fullmove number is not a positive integer
    InvalidFullmoveNumber { found: String },
    /// A side does not have exactly one king
    KingCount { color: Color, count: u32 },
    /// A pawn stands on the first or last rank
    PawnOnBackRank { square: Square },
    /// The side that just moved is in check
    OpponentInCheck { color: Color },
    /// A castling right is set but its king or rook is not at home
    CastlingPiecesMissing { right: char },
    /// En passant target cannot follow a double pawn push
    ImpossibleEnPassant { square: Square },
}

impl fmt::Display for ParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ParseError::WrongFieldCount { found } => {
                write!(f, "FEN must have 6 fields, found {found}")
            }
            ParseError::WrongRankCount { found } => {
                write!(f, "Piece placement must have 8 ranks, found {found}")
            }
            ParseError::InvalidRankLength { rank, squares } => {
                write!(f, "Rank {rank} describes {squares} squares, expected 8")
            }
            ParseError::InvalidPiece { char } => {
                write!(f, "Invalid piece character '{char}' in FEN")
            }
            ParseError::InvalidSideToMove { found } => {
                write!(f, "Invalid side to move '{found}', expected 'w' or 'b'")
            }
            ParseError::InvalidCastling { found } => {
                write!(f, "Invalid castling rights '{found}'")
            }
            ParseError::InvalidEnPassant { found } => {
                write!(f, "Invalid en passant square '{found}'")
            }
            ParseError::InvalidHalfmoveClock { found } => {
                write!(f, "Invalid halfmove clock '{found}'")
            }
            ParseError::InvalidFullmoveNumber { found } => {
                write!(f, "Invalid fullmove number '{found}', expected an integer >= 1")
            }
            ParseError::KingCount { color, count } => {
                write!(f, "{color} must have exactly one king, found {count}")
            }
            ParseError::PawnOnBackRank { square } => {
                write!(f, "Pawn on back rank square {square}")
            }
            ParseError::OpponentInCheck { color } => {
                write!(f, "{color} is in check but it is not {color}'s turn")
            }
            ParseError::CastlingPiecesMissing { right } => {
                write!(f, "Castling right '{right}' without king and rook on home squares")
            }
            ParseError::ImpossibleEnPassant { square } => {
                write!(f, "En passant square {square} does not follow a double pawn push")
            }
        }
    }
}

impl std::error::Error for ParseError {}

/// Why a requested move was refused.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IllegalMoveReason {
    /// No piece stands on the source square
    EmptySquare,
    /// The piece on the source square belongs to the side not to move
    NotYourPiece,
    /// A pawn reaching the last rank needs a promotion piece
    PromotionRequired,
    /// A promotion piece was given where none is allowed, or to pawn/king
    InvalidPromotion,
    /// The game has already ended
    GameOver,
    /// Not among the legal moves (geometry, blocked path, own king left in check)
    NotLegal,
}

/// Error returned when a move is not in the legal set of the position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IllegalMoveError {
    pub mv: Move,
    pub reason: IllegalMoveReason,
}

impl IllegalMoveError {
    #[must_use]
    pub const fn new(mv: Move, reason: IllegalMoveReason) -> Self {
        IllegalMoveError { mv, reason }
    }
}

impl fmt::Display for IllegalMoveError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mv = self.mv;
        match self.reason {
            IllegalMoveReason::EmptySquare => {
                write!(f, "Illegal move '{mv}': no piece on {}", mv.from())
            }
            IllegalMoveReason::NotYourPiece => {
                write!(f, "Illegal move '{mv}': piece on {} is not yours", mv.from())
            }
            IllegalMoveReason::PromotionRequired => {
                write!(f, "Illegal move '{mv}': a promotion piece is required")
            }
            IllegalMoveReason::InvalidPromotion => {
                write!(f, "Illegal move '{mv}': invalid promotion")
            }
            IllegalMoveReason::GameOver => write!(f, "Illegal move '{mv}': the game is over"),
            IllegalMoveReason::NotLegal => write!(f, "Illegal move '{mv}'"),
        }
    }
}

impl std::error::Error for IllegalMoveError {}

/// Error type for move text parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveParseError {
    /// Move string has invalid length (must be 4-5 characters)
    InvalidLength { len: usize },
    /// Invalid square notation in move
    InvalidSquare { notation: String },
    /// Invalid promotion piece
    InvalidPromotion { char: char },
}

impl fmt::Display for MoveParseError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MoveParseError::InvalidLength { len } => {
                write!(f, "Move must be 4-5 characters, found {len}")
            }
            MoveParseError::InvalidSquare { notation } => {
                write!(f, "Invalid square notation in '{notation}'")
            }
            MoveParseError::InvalidPromotion { char } => {
                write!(f, "Invalid promotion piece '{char}'")
            }
        }
    }
}

impl std::error::Error for MoveParseError {}

/// Error type for square parsing failures
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SquareError {
    /// Rank out of bounds (must be 0-7)
    RankOutOfBounds { rank: u8 },
    /// File out of bounds (must be 0-7)
    FileOutOfBounds { file: u8 },
    /// Invalid algebraic notation
    InvalidNotation { notation: String },
}

impl fmt::Display for SquareError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SquareError::RankOutOfBounds { rank } => {
                write!(f, "Rank {rank} out of bounds (must be 0-7)")
            }
            SquareError::FileOutOfBounds { file } => {
                write!(f, "File {file} out of bounds (must be 0-7)")
            }
            SquareError::InvalidNotation { notation } => {
                write!(f, "Invalid square notation '{notation}'")
            }
        }
    }
}

impl std::error::Error for SquareError {}
