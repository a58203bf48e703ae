use std::fmt;
use std::str::FromStr;

use super::error::ParseError;
use super::{
    castle_char, Bitboard, Board, CastlingRights, CastlingSide, Color, Piece, PieceKind, Position,
    Square,
};

/// FEN of the standard starting position
pub const STARTING_FEN: &str = "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1";

const BACK_RANKS: Bitboard = Bitboard(0xFF00_0000_0000_00FF);

/// Check that `fen` describes a legal position, without keeping the result.
///
/// Runs exactly the checks of [`Position::from_fen`].
pub fn validate_fen(fen: &str) -> Result<(), ParseError> {
    Position::from_fen(fen).map(|_| ())
}

impl Position {
    /// Parse a position from FEN notation.
    ///
    /// The text must have six whitespace-separated fields and describe a
    /// reachable-looking position: one king per side, no pawns on the back
    /// ranks, the side not to move not in check, castling rights backed by
    /// pieces on their home squares and an en passant target that follows a
    /// double pawn push.
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let parts: Vec<&str> = fen.split_whitespace().collect();
        if parts.len() != 6 {
            return Err(ParseError::WrongFieldCount { found: parts.len() });
        }

        let position = Position {
            board: parse_placement(parts[0])?,
            side_to_move: parse_side(parts[1])?,
            castling: parse_castling(parts[2])?,
            en_passant: parse_en_passant(parts[3])?,
            halfmove_clock: parse_counter(parts[4])
                .ok_or_else(|| ParseError::InvalidHalfmoveClock {
                    found: parts[4].to_string(),
                })?,
            fullmove_number: parse_counter(parts[5]).filter(|&n| n >= 1).ok_or_else(|| {
                ParseError::InvalidFullmoveNumber {
                    found: parts[5].to_string(),
                }
            })?,
        };

        validate_position(&position)?;
        Ok(position)
    }

    /// Serialize to canonical FEN: merged empty runs, castling in `KQkq`
    /// order, single spaces.
    #[must_use]
    pub fn to_fen(&self) -> String {
        let mut rows: Vec<String> = Vec::with_capacity(8);
        for rank in (0..8u8).rev() {
            let mut row = String::new();
            let mut empty = 0;
            for file in 0..8u8 {
                match Square::new(rank, file).and_then(|sq| self.board.piece_at(sq)) {
                    Some(piece) => {
                        if empty > 0 {
                            row.push_str(&empty.to_string());
                            empty = 0;
                        }
                        row.push(piece.to_fen_char());
                    }
                    None => empty += 1,
                }
            }
            if empty > 0 {
                row.push_str(&empty.to_string());
            }
            rows.push(row);
        }

        let mut castling: String = self
            .castling
            .iter()
            .map(|(color, side)| castle_char(color, side))
            .collect();
        if castling.is_empty() {
            castling.push('-');
        }
        let ep = self
            .en_passant
            .map_or_else(|| "-".to_string(), |sq| sq.to_string());

        format!(
            "{} {} {} {} {} {}",
            rows.join("/"),
            self.side_to_move.to_fen_char(),
            castling,
            ep,
            self.halfmove_clock,
            self.fullmove_number
        )
    }
}

fn parse_placement(field: &str) -> Result<Board, ParseError> {
    let ranks: Vec<&str> = field.split('/').collect();
    if ranks.len() != 8 {
        return Err(ParseError::WrongRankCount { found: ranks.len() });
    }

    let mut board = Board::empty();
    for (rank, rank_str) in (0..8u8).rev().zip(ranks) {
        let mut file = 0usize;
        for c in rank_str.chars() {
            if let Some(run) = c.to_digit(10) {
                if !(1..=8).contains(&run) {
                    return Err(ParseError::InvalidPiece { char: c });
                }
                file += run as usize;
                continue;
            }
            let piece = Piece::from_fen_char(c).ok_or(ParseError::InvalidPiece { char: c })?;
            // Overflowing pieces are dropped here and reported by the length check
            if let Some(sq) = u8::try_from(file).ok().and_then(|f| Square::new(rank, f)) {
                board.set_piece(sq, piece);
            }
            file += 1;
        }
        if file != 8 {
            return Err(ParseError::InvalidRankLength {
                rank: rank + 1,
                squares: file,
            });
        }
    }
    Ok(board)
}

fn parse_side(field: &str) -> Result<Color, ParseError> {
    match field {
        "w" => Ok(Color::White),
        "b" => Ok(Color::Black),
        other => Err(ParseError::InvalidSideToMove {
            found: other.to_string(),
        }),
    }
}

fn parse_castling(field: &str) -> Result<CastlingRights, ParseError> {
    let mut rights = CastlingRights::none();
    if field == "-" {
        return Ok(rights);
    }
    let invalid = || ParseError::InvalidCastling {
        found: field.to_string(),
    };
    for c in field.chars() {
        let (color, side) = match c {
            'K' => (Color::White, CastlingSide::KingSide),
            'Q' => (Color::White, CastlingSide::QueenSide),
            'k' => (Color::Black, CastlingSide::KingSide),
            'q' => (Color::Black, CastlingSide::QueenSide),
            _ => return Err(invalid()),
        };
        if rights.has(color, side) {
            return Err(invalid());
        }
        rights.set(color, side);
    }
    Ok(rights)
}

fn parse_en_passant(field: &str) -> Result<Option<Square>, ParseError> {
    if field == "-" {
        return Ok(None);
    }
    field
        .parse::<Square>()
        .map(Some)
        .map_err(|_| ParseError::InvalidEnPassant {
            found: field.to_string(),
        })
}

/// Plain decimal digits only; signs and blanks are rejected
fn parse_counter(field: &str) -> Option<u32> {
    if field.is_empty() || !field.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    field.parse().ok()
}

/// Semantic checks shared by the FEN parser and the position builder
pub(crate) fn validate_position(pos: &Position) -> Result<(), ParseError> {
    let board = &pos.board;

    for color in Color::BOTH {
        let count = board.pieces(color, PieceKind::King).popcount();
        if count != 1 {
            return Err(ParseError::KingCount { color, count });
        }
    }

    let pawns =
        board.pieces(Color::White, PieceKind::Pawn) | board.pieces(Color::Black, PieceKind::Pawn);
    if let Some(square) = (pawns & BACK_RANKS).first() {
        return Err(ParseError::PawnOnBackRank { square });
    }

    let waiting = pos.side_to_move.opponent();
    if pos.is_in_check(waiting) {
        return Err(ParseError::OpponentInCheck { color: waiting });
    }

    for (color, side) in pos.castling.iter() {
        if !pos.castling_pieces_home(color, side) {
            return Err(ParseError::CastlingPiecesMissing {
                right: castle_char(color, side),
            });
        }
    }

    if let Some(ep) = pos.en_passant {
        if !en_passant_plausible(pos, ep) {
            return Err(ParseError::ImpossibleEnPassant { square: ep });
        }
    }

    Ok(())
}

/// The target must be the square a pawn of the side not to move just skipped
fn en_passant_plausible(pos: &Position, ep: Square) -> bool {
    let mover = pos.side_to_move;
    let expected_rank = if mover == Color::White { 5 } else { 2 };
    if ep.rank() != expected_rank || !pos.board.is_empty(ep) {
        return false;
    }
    let dir = mover.pawn_direction();
    let origin_empty = ep.offset(dir, 0).is_some_and(|sq| pos.board.is_empty(sq));
    let pushed_pawn = ep
        .offset(-dir, 0)
        .and_then(|sq| pos.board.piece_at(sq))
        == Some(Piece::new(mover.opponent(), PieceKind::Pawn));
    origin_empty && pushed_pawn
}

impl FromStr for Position {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Position::from_fen(s)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_fen())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const KIWIPETE: &str = "r3k2r/p1ppqpb1/bn2pnp1/3PN3/1p2P3/2N2Q1p/PPPBBPPP/R3K2R w KQkq - 0 1";

    fn sq(s: &str) -> Square {
        s.parse().unwrap()
    }

    #[test]
    fn starting_fen_round_trip() {
        let pos = Position::from_fen(STARTING_FEN).unwrap();
        assert_eq!(pos, Position::starting());
        assert_eq!(pos.to_fen(), STARTING_FEN);
        assert_eq!(pos.to_string(), STARTING_FEN);
    }

    #[test]
    fn kiwipete_round_trip() {
        let pos: Position = KIWIPETE.parse().unwrap();
        assert_eq!(pos.to_fen(), KIWIPETE);
        assert_eq!(
            pos.piece_at(sq("e2")),
            Some(Piece::new(Color::White, PieceKind::Bishop))
        );
        assert!(pos.castling_rights().has(Color::Black, CastlingSide::QueenSide));
    }

    #[test]
    fn serialization_is_canonical() {
        let messy = "  rnbqkbnr/pppppppp/44/8/8/8/PPPPPPPP/RNBQKBNR   w qkQK -  0 1 ";
        let pos = Position::from_fen(messy).unwrap();
        assert_eq!(pos.to_fen(), STARTING_FEN);

        let split_runs = "4k3/8/8/8/8/8/8/1111K3 w - - 0 1";
        assert_eq!(
            Position::from_fen(split_runs).unwrap().to_fen(),
            "4k3/8/8/8/8/8/8/4K3 w - - 0 1"
        );
    }

    #[test]
    fn en_passant_and_counters_survive() {
        let fen = "rnbqkbnr/ppp1pppp/8/3pP3/8/8/PPPP1PPP/RNBQKBNR w KQkq d6 0 3";
        let pos = Position::from_fen(fen).unwrap();
        assert_eq!(pos.en_passant_target(), Some(sq("d6")));
        assert_eq!(pos.halfmove_clock(), 0);
        assert_eq!(pos.fullmove_number(), 3);
        assert_eq!(pos.to_fen(), fen);
    }

    #[test]
    fn rejects_wrong_field_count() {
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/8 w - -"),
            Err(ParseError::WrongFieldCount { found: 4 })
        );
        assert_eq!(
            Position::from_fen(&format!("{STARTING_FEN} extra")),
            Err(ParseError::WrongFieldCount { found: 7 })
        );
        assert_eq!(Position::from_fen(""), Err(ParseError::WrongFieldCount { found: 0 }));
    }

    #[test]
    fn rejects_bad_placement() {
        assert_eq!(
            Position::from_fen("rnbqkbnr/pppppppp/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(ParseError::WrongRankCount { found: 7 })
        );
        assert_eq!(
            Position::from_fen("rnbqkbnr/pppppppp/9/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(ParseError::InvalidPiece { char: '9' })
        );
        assert_eq!(
            Position::from_fen("rnbqkbnr/pppppppp/08/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(ParseError::InvalidPiece { char: '0' })
        );
        assert_eq!(
            Position::from_fen("rnbqkbnr/ppppxppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(ParseError::InvalidPiece { char: 'x' })
        );
        assert_eq!(
            Position::from_fen("rnbqkbnr/ppppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(ParseError::InvalidRankLength { rank: 7, squares: 9 })
        );
        assert_eq!(
            Position::from_fen("rnbqkbnr/pppppppp/7/8/8/8/PPPPPPPP/RNBQKBNR w KQkq - 0 1"),
            Err(ParseError::InvalidRankLength { rank: 6, squares: 7 })
        );
    }

    #[test]
    fn rejects_bad_fields() {
        let with = |side: &str, castling: &str, ep: &str, half: &str, full: &str| {
            Position::from_fen(&format!(
                "rnbqkbnr/pppppppp/8/8/8/8/PPPPPPPP/RNBQKBNR {side} {castling} {ep} {half} {full}"
            ))
        };
        assert!(matches!(
            with("x", "KQkq", "-", "0", "1"),
            Err(ParseError::InvalidSideToMove { .. })
        ));
        for castling in ["KQkqK", "KX", "-K", "K-"] {
            assert!(
                matches!(
                    with("w", castling, "-", "0", "1"),
                    Err(ParseError::InvalidCastling { .. })
                ),
                "{castling}"
            );
        }
        assert!(matches!(
            with("w", "KQkq", "e9", "0", "1"),
            Err(ParseError::InvalidEnPassant { .. })
        ));
        assert!(matches!(
            with("w", "KQkq", "-", "-1", "1"),
            Err(ParseError::InvalidHalfmoveClock { .. })
        ));
        assert!(matches!(
            with("w", "KQkq", "-", "+3", "1"),
            Err(ParseError::InvalidHalfmoveClock { .. })
        ));
        assert!(matches!(
            with("w", "KQkq", "-", "0", "0"),
            Err(ParseError::InvalidFullmoveNumber { .. })
        ));
        assert!(matches!(
            with("w", "KQkq", "-", "0", "one"),
            Err(ParseError::InvalidFullmoveNumber { .. })
        ));
    }

    #[test]
    fn rejects_impossible_positions() {
        assert_eq!(
            Position::from_fen("8/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ParseError::KingCount {
                color: Color::Black,
                count: 0
            })
        );
        assert_eq!(
            Position::from_fen("4k3/8/8/8/8/8/8/3KK3 w - - 0 1"),
            Err(ParseError::KingCount {
                color: Color::White,
                count: 2
            })
        );
        assert_eq!(
            Position::from_fen("4k2P/8/8/8/8/8/8/4K3 w - - 0 1"),
            Err(ParseError::PawnOnBackRank { square: sq("h8") })
        );
        assert!(Position::from_fen("4k3/8/8/8/8/8/8/4KR2 w - - 0 1").is_ok());
        assert_eq!(
            Position::from_fen("4k3/8/8/8/8/8/8/4R1K1 w - - 0 1"),
            Err(ParseError::OpponentInCheck {
                color: Color::Black
            })
        );
        assert_eq!(
            Position::from_fen("4k3/8/8/8/8/8/8/4K3 w K - 0 1"),
            Err(ParseError::CastlingPiecesMissing { right: 'K' })
        );
    }

    #[test]
    fn rejects_impossible_en_passant() {
        // Wrong rank for the side to move
        assert_eq!(
            Position::from_fen("4k3/8/8/3pP3/8/8/8/4K3 w - d3 0 1"),
            Err(ParseError::ImpossibleEnPassant { square: sq("d3") })
        );
        // No pawn in front of the target
        assert_eq!(
            Position::from_fen("4k3/8/8/4P3/8/8/8/4K3 w - d6 0 1"),
            Err(ParseError::ImpossibleEnPassant { square: sq("d6") })
        );
        // Origin square occupied
        assert_eq!(
            Position::from_fen("4k3/3n4/8/3pP3/8/8/8/4K3 w - d6 0 1"),
            Err(ParseError::ImpossibleEnPassant { square: sq("d6") })
        );
        assert!(Position::from_fen("4k3/8/8/8/3Pp3/8/8/4K3 b - d3 0 1").is_ok());
    }

    #[test]
    fn validate_fen_matches_parser() {
        assert_eq!(validate_fen(STARTING_FEN), Ok(()));
        assert_eq!(validate_fen(KIWIPETE), Ok(()));
        assert_eq!(
            validate_fen("not a fen"),
            Err(ParseError::WrongFieldCount { found: 3 })
        );
        let err = validate_fen("8/8/8/8/8/8/8/8 w - - 0 1").unwrap_err();
        assert!(!err.to_string().is_empty());
    }
}
