//! Zobrist hashing for chess positions.
//!
//! Keys identify positions for repetition detection: two positions share a
//! key when they have the same placement, side to move, castling rights and
//! en passant capture possibility.

use once_cell::sync::Lazy;
use rand::prelude::*;

use crate::board::attack_tables::pawn_attacks;
use crate::board::{CastlingSide, Color, PieceKind, Position};

pub(crate) struct ZobristKeys {
    // piece_keys[kind][color][square]
    pub(crate) piece_keys: [[[u64; 64]; 2]; 6],
    pub(crate) black_to_move_key: u64,
    // castling_keys[color][side]: 0=kingside, 1=queenside
    pub(crate) castling_keys: [[u64; 2]; 2],
    // Only the file of the en passant target matters
    pub(crate) en_passant_keys: [u64; 8],
}

impl ZobristKeys {
    fn new() -> Self {
        let mut rng = StdRng::seed_from_u64(1234567890_u64);
        let mut piece_keys = [[[0; 64]; 2]; 6];
        let mut castling_keys = [[0; 2]; 2];
        let mut en_passant_keys = [0; 8];

        for kind in &mut piece_keys {
            for color in kind.iter_mut() {
                for key in color.iter_mut() {
                    *key = rng.gen();
                }
            }
        }

        let black_to_move_key = rng.gen();

        for color in &mut castling_keys {
            for key in color.iter_mut() {
                *key = rng.gen();
            }
        }

        for key in &mut en_passant_keys {
            *key = rng.gen();
        }

        ZobristKeys {
            piece_keys,
            black_to_move_key,
            castling_keys,
            en_passant_keys,
        }
    }
}

pub(crate) static ZOBRIST: Lazy<ZobristKeys> = Lazy::new(ZobristKeys::new);

impl Position {
    /// 64-bit key of the position for repetition counting.
    ///
    /// The move counters are not part of the key. The en passant file is
    /// hashed only when a pawn of the side to move could capture there.
    #[must_use]
    pub fn zobrist_hash(&self) -> u64 {
        let keys = &*ZOBRIST;
        let mut hash = 0u64;

        for (sq, piece) in self.board.iter() {
            hash ^= keys.piece_keys[piece.kind.index()][piece.color.index()][sq.index()];
        }

        if self.side_to_move == Color::Black {
            hash ^= keys.black_to_move_key;
        }

        for (color, side) in self.castling.iter() {
            let side_idx = match side {
                CastlingSide::KingSide => 0,
                CastlingSide::QueenSide => 1,
            };
            hash ^= keys.castling_keys[color.index()][side_idx];
        }

        if let Some(ep) = self.en_passant {
            let capturers = pawn_attacks(self.side_to_move.opponent(), ep)
                & self.board.pieces(self.side_to_move, PieceKind::Pawn);
            if !capturers.is_empty() {
                hash ^= keys.en_passant_keys[usize::from(ep.file())];
            }
        }

        hash
    }
}
