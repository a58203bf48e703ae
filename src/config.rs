//! Game session configuration.
//!
//! Draw rules and the promotion policy can be set in code or by name, the
//! way an engine front-end forwards `setoption` commands.

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::board::PieceKind;

/// Which automatic draw rules a session applies.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DrawRules {
    /// Halfmove clock value that ends the game, `None` to disable
    pub fifty_move_plies: Option<u32>,
    /// Occurrences of one position that end the game, `None` to disable
    pub repetition_threshold: Option<u32>,
    /// Draw as soon as neither side can possibly mate
    pub insufficient_material: bool,
}

impl DrawRules {
    /// Only checkmate and stalemate end the game
    #[must_use]
    pub const fn none() -> Self {
        DrawRules {
            fifty_move_plies: None,
            repetition_threshold: None,
            insufficient_material: false,
        }
    }
}

impl Default for DrawRules {
    fn default() -> Self {
        DrawRules {
            fifty_move_plies: Some(100),
            repetition_threshold: Some(3),
            insufficient_material: true,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SessionConfig {
    pub draw_rules: DrawRules,
    /// Piece substituted when a promoting move names none; `None` rejects
    /// such moves
    pub auto_promotion: Option<PieceKind>,
}

impl SessionConfig {
    /// Set an option by name.
    ///
    /// Names are case-insensitive: `fifty move plies`, `repetition threshold`
    /// (`off` disables either), `insufficient material` (`true`/`false`) and
    /// `auto promotion` (`q`, `r`, `b`, `n` or `off`). Returns false and
    /// leaves the config unchanged for unknown names or unusable values.
    pub fn apply_option(&mut self, name: &str, value: Option<&str>) -> bool {
        let normalized = name.trim().to_ascii_lowercase();
        let value = value.map(|v| v.trim().to_ascii_lowercase());
        let value = value.as_deref();
        match normalized.as_str() {
            "fifty move plies" | "fiftymoveplies" => match parse_limit(value, 1) {
                Some(limit) => {
                    self.draw_rules.fifty_move_plies = limit;
                    true
                }
                None => false,
            },
            "repetition threshold" | "repetitionthreshold" => match parse_limit(value, 2) {
                Some(limit) => {
                    self.draw_rules.repetition_threshold = limit;
                    true
                }
                None => false,
            },
            "insufficient material" | "insufficientmaterial" => match value {
                Some("true" | "on") => {
                    self.draw_rules.insufficient_material = true;
                    true
                }
                Some("false" | "off") => {
                    self.draw_rules.insufficient_material = false;
                    true
                }
                _ => false,
            },
            "auto promotion" | "autopromotion" => match value {
                Some("off" | "none") => {
                    self.auto_promotion = None;
                    true
                }
                Some(v) => {
                    let mut chars = v.chars();
                    match (chars.next().and_then(PieceKind::from_char), chars.next()) {
                        (Some(kind), None) if kind.is_promotion_target() => {
                            self.auto_promotion = Some(kind);
                            true
                        }
                        _ => false,
                    }
                }
                None => false,
            },
            _ => false,
        }
    }
}

/// `off`/`none` disable the rule; numbers below `min` are rejected
fn parse_limit(value: Option<&str>, min: u32) -> Option<Option<u32>> {
    match value? {
        "off" | "none" => Some(None),
        v => v.parse::<u32>().ok().filter(|&n| n >= min).map(Some),
    }
}
