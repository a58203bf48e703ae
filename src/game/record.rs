use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::{Color, Move};

/// One applied move of a game.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveRecord {
    mv: Move,
    san: String,
    color: Color,
    move_number: u32,
}

impl MoveRecord {
    pub(crate) fn new(mv: Move, san: String, color: Color, move_number: u32) -> Self {
        MoveRecord {
            mv,
            san,
            color,
            move_number,
        }
    }

    /// The move, with its capture/castle/en passant flags
    #[inline]
    #[must_use]
    pub fn mv(&self) -> Move {
        self.mv
    }

    /// Standard algebraic text, e.g. `Nf3` or `exd6`
    #[inline]
    #[must_use]
    pub fn san(&self) -> &str {
        &self.san
    }

    /// The side that played the move
    #[inline]
    #[must_use]
    pub fn color(&self) -> Color {
        self.color
    }

    /// Fullmove number the move was played in
    #[inline]
    #[must_use]
    pub fn move_number(&self) -> u32 {
        self.move_number
    }
}

/// A numbered row of the move list: white's move and black's reply.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct MoveListEntry {
    pub number: u32,
    pub white: Option<String>,
    pub black: Option<String>,
}

impl fmt::Display for MoveListEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.white, &self.black) {
            (Some(white), Some(black)) => write!(f, "{}. {white} {black}", self.number),
            (Some(white), None) => write!(f, "{}. {white}", self.number),
            (None, Some(black)) => write!(f, "{}... {black}", self.number),
            (None, None) => write!(f, "{}.", self.number),
        }
    }
}

/// Group records into numbered rows.
///
/// A game starting with black to move gets a first row without a white move.
pub(crate) fn group_moves(records: &[MoveRecord]) -> Vec<MoveListEntry> {
    let mut rows: Vec<MoveListEntry> = Vec::new();
    for record in records {
        let san = Some(record.san.clone());
        match (record.color, rows.last_mut()) {
            (Color::Black, Some(row)) if row.number == record.move_number && row.black.is_none() => {
                row.black = san;
            }
            (Color::White, _) => rows.push(MoveListEntry {
                number: record.move_number,
                white: san,
                black: None,
            }),
            (Color::Black, _) => rows.push(MoveListEntry {
                number: record.move_number,
                white: None,
                black: san,
            }),
        }
    }
    rows
}
