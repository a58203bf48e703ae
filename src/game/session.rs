use crate::board::{
    evaluate, Board, Color, GameStatus, IllegalMoveError, IllegalMoveReason, Move, MoveList,
    ParseError, Position, Square,
};
use crate::config::SessionConfig;

use super::record::{group_moves, MoveListEntry, MoveRecord};
use super::repetition::RepetitionTable;

/// A game in progress: the live position plus a navigable move line.
///
/// The line holds every move played; the first `ply()` of them form the
/// log and the rest are waiting to be redone. Moving back and forth along
/// the line replays it from the initial position.
#[derive(Clone, Debug)]
pub struct GameSession {
    config: SessionConfig,
    initial: Position,
    position: Position,
    line: Vec<MoveRecord>,
    cursor: usize,
    repetitions: RepetitionTable,
    status: GameStatus,
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new()
    }
}

impl GameSession {
    /// A new game from the standard starting position
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(SessionConfig::default())
    }

    #[must_use]
    pub fn with_config(config: SessionConfig) -> Self {
        Self::from_position(Position::starting(), config)
    }

    /// A new game from FEN text, with the default configuration
    pub fn from_fen(fen: &str) -> Result<Self, ParseError> {
        let position = Position::from_fen(fen)?;
        Ok(Self::from_position(position, SessionConfig::default()))
    }

    /// A new game from any position
    #[must_use]
    pub fn from_position(position: Position, config: SessionConfig) -> Self {
        let mut repetitions = RepetitionTable::new();
        let seen = repetitions.increment(position.zobrist_hash());
        GameSession {
            config,
            initial: position,
            position,
            line: Vec::new(),
            cursor: 0,
            repetitions,
            status: evaluate(&position, &config.draw_rules, seen),
        }
    }

    /// Play a move request.
    ///
    /// Discards any moves waiting to be redone. Fails without changing
    /// anything when the game is over or the move is not legal.
    pub fn apply_move(&mut self, request: Move) -> Result<&MoveRecord, IllegalMoveError> {
        if self.status.is_terminal() {
            return Err(IllegalMoveError::new(request, IllegalMoveReason::GameOver));
        }

        let mv = self.resolve(request)?;
        let mover = self.position.side_to_move();
        let record = MoveRecord::new(
            mv,
            self.position.san(mv),
            mover,
            self.position.fullmove_number(),
        );
        let next = self.position.play_unchecked(mv);

        self.line.truncate(self.cursor);
        self.line.push(record);
        self.cursor = self.line.len();
        self.enter(next);

        log_debug!(
            "[SESSION] {mover} played {} ({}), status: {}",
            mv,
            self.line[self.cursor - 1].san(),
            self.status
        );
        Ok(&self.line[self.cursor - 1])
    }

    fn resolve(&self, request: Move) -> Result<Move, IllegalMoveError> {
        match (self.position.resolve(request), self.config.auto_promotion) {
            (Err(err), Some(kind)) if err.reason == IllegalMoveReason::PromotionRequired => self
                .position
                .resolve(Move::with_promotion(request.from(), request.to(), kind))
                .map_err(|_| err),
            (result, _) => result,
        }
    }

    /// Move the live position to `plies` moves into the line.
    ///
    /// `plies` counts applied moves, so it is one more than the index of
    /// the last move kept: 0 is the initial position (index -1) and `n` is
    /// the position after move index `n - 1`. Returns false and changes
    /// nothing when the line is shorter than `plies`.
    pub fn rewind_to(&mut self, plies: usize) -> bool {
        if plies > self.line.len() {
            return false;
        }

        self.repetitions.clear();
        self.position = self.initial;
        self.repetitions.increment(self.initial.zobrist_hash());
        for record in &self.line[..plies] {
            let next = self.position.play_unchecked(record.mv());
            self.repetitions.increment(next.zobrist_hash());
            self.position = next;
        }
        self.cursor = plies;
        self.refresh_status();

        log_debug!("[SESSION] rewound to ply {plies} of {}", self.line.len());
        true
    }

    /// Step back one move
    pub fn undo(&mut self) -> bool {
        self.can_undo() && self.rewind_to(self.cursor - 1)
    }

    /// Replay the next undone move
    pub fn redo(&mut self) -> bool {
        self.can_redo() && self.rewind_to(self.cursor + 1)
    }

    /// Start a new game from the standard position, keeping the configuration
    pub fn reset(&mut self) {
        *self = Self::with_config(self.config);
        log_debug!("[SESSION] reset to the starting position");
    }

    /// Replace the game with one starting from `fen`.
    ///
    /// On error the session is left as it was.
    pub fn import_fen(&mut self, fen: &str) -> Result<(), ParseError> {
        match Position::from_fen(fen) {
            Ok(position) => {
                *self = Self::from_position(position, self.config);
                log_debug!("[SESSION] imported {fen}");
                Ok(())
            }
            Err(err) => {
                log_warn!("[SESSION] rejected FEN '{fen}': {err}");
                Err(err)
            }
        }
    }

    /// Change the configuration; the current status is re-evaluated
    pub fn set_config(&mut self, config: SessionConfig) {
        self.config = config;
        self.refresh_status();
    }

    fn enter(&mut self, next: Position) {
        self.position = next;
        self.repetitions.increment(next.zobrist_hash());
        self.refresh_status();
    }

    fn refresh_status(&mut self) {
        let seen = self.repetitions.get(self.position.zobrist_hash());
        self.status = evaluate(&self.position, &self.config.draw_rules, seen);
    }

    #[inline]
    #[must_use]
    pub fn board(&self) -> &Board {
        self.position.board()
    }

    #[inline]
    #[must_use]
    pub fn position(&self) -> &Position {
        &self.position
    }

    #[inline]
    #[must_use]
    pub fn side_to_move(&self) -> Color {
        self.position.side_to_move()
    }

    /// FEN of the live position
    #[must_use]
    pub fn fen(&self) -> String {
        self.position.to_fen()
    }

    /// FEN the game started from
    #[must_use]
    pub fn initial_fen(&self) -> String {
        self.initial.to_fen()
    }

    /// Legal moves from `square`; none once the game is over
    #[must_use]
    pub fn legal_moves_from(&self, square: Square) -> MoveList {
        if self.status.is_terminal() {
            return MoveList::new();
        }
        self.position.moves_from(square)
    }

    #[inline]
    #[must_use]
    pub fn status(&self) -> GameStatus {
        self.status
    }

    /// Moves played to reach the live position
    #[must_use]
    pub fn moves(&self) -> &[MoveRecord] {
        &self.line[..self.cursor]
    }

    /// Undone moves, next one first
    #[must_use]
    pub fn redo_moves(&self) -> &[MoveRecord] {
        &self.line[self.cursor..]
    }

    /// Number of moves played to reach the live position
    #[inline]
    #[must_use]
    pub fn ply(&self) -> usize {
        self.cursor
    }

    #[inline]
    #[must_use]
    pub fn can_undo(&self) -> bool {
        self.cursor > 0
    }

    #[inline]
    #[must_use]
    pub fn can_redo(&self) -> bool {
        self.cursor < self.line.len()
    }

    /// The log as numbered white/black rows
    #[must_use]
    pub fn move_list(&self) -> Vec<MoveListEntry> {
        group_moves(self.moves())
    }

    #[inline]
    #[must_use]
    pub fn config(&self) -> &SessionConfig {
        &self.config
    }
}
