//! Game state module - the session state machine
//!
//! Ties together board, active piece, randomizer and scoring. The state is
//! advanced only by discrete operations (start, move, rotate, tick); there is
//! no notion of real time here. Whoever hosts the game decides when to call
//! [`GameState::tick`], at the period reported by
//! [`GameState::gravity_interval_ms`].

use crate::board::Board;
use crate::collision::check_collision;
use crate::piece::{try_rotate, ActivePiece};
use crate::rng::PieceRandomizer;
use crate::scoring::{calculate_level, calculate_line_score, gravity_interval_ms};
use crate::snapshot::{ActiveSnapshot, GameSnapshot};
use crate::types::*;

/// What a gravity tick (or soft drop) did
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Not playing; nothing happened.
    Ignored,
    /// Piece moved down one row.
    Fell,
    /// Piece locked and the next one spawned.
    Locked,
    /// The session ended (blocked at the top, or the next spawn collided).
    GameOver,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    board: Board,
    active: Option<ActivePiece>,
    randomizer: PieceRandomizer,
    phase: GamePhase,
    /// Monotonic session id (increments on every start).
    session_id: u32,
    /// Last lock event (consumed by observers).
    last_event: Option<LockEvent>,
    score: u32,
    rows_cleared: u32,
    level: u32,
}

impl GameState {
    /// Create an idle game with the given RNG seed
    pub fn new(seed: u64) -> Self {
        Self {
            board: Board::new(),
            active: None,
            randomizer: PieceRandomizer::new(seed),
            phase: GamePhase::NotStarted,
            session_id: 0,
            last_event: None,
            score: 0,
            rows_cleared: 0,
            level: 0,
        }
    }

    /// Reset everything and begin a new session.
    ///
    /// Valid from any phase. If the first piece cannot be placed the session
    /// ends immediately.
    pub fn start(&mut self) {
        self.board.clear();
        self.active = None;
        self.last_event = None;
        self.score = 0;
        self.rows_cleared = 0;
        self.level = 0;
        self.session_id = self.session_id.wrapping_add(1);
        self.phase = GamePhase::Playing;
        self.spawn_piece();
    }

    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }

    pub fn session_id(&self) -> u32 {
        self.session_id
    }

    pub fn seed(&self) -> u64 {
        self.randomizer.seed()
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn rows_cleared(&self) -> u32 {
        self.rows_cleared
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    /// Gravity period for the current level, in milliseconds
    pub fn gravity_interval_ms(&self) -> u32 {
        gravity_interval_ms(self.level)
    }

    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            board: self.board.clone(),
            active: self.active.map(ActiveSnapshot::from),
            score: self.score,
            rows_cleared: self.rows_cleared,
            level: self.level,
            phase: self.phase,
            is_playing: self.is_playing(),
            is_game_over: self.is_game_over(),
            session_id: self.session_id,
            gravity_ms: self.gravity_interval_ms(),
        }
    }

    /// Take and clear the last lock event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Spawn a random piece; ends the session if the spawn cell is blocked
    fn spawn_piece(&mut self) -> bool {
        let kind = self.randomizer.next_kind();
        let piece = ActivePiece::spawn(kind, self.board.width());

        if check_collision(&piece, &self.board, 0, 0) {
            self.active = None;
            self.phase = GamePhase::GameOver;
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Check if the active piece could move by (dx, dy)
    pub fn can_move(&self, dx: i16, dy: i16) -> bool {
        match self.active {
            Some(ref piece) if self.is_playing() => !check_collision(piece, &self.board, dx, dy),
            _ => false,
        }
    }

    /// Shift the active piece horizontally; no-op when blocked
    fn try_shift(&mut self, dx: i16) -> bool {
        if !self.can_move(dx, 0) {
            return false;
        }
        if let Some(piece) = self.active.as_mut() {
            piece.x += dx;
        }
        true
    }

    pub fn move_left(&mut self) -> bool {
        self.try_shift(-1)
    }

    pub fn move_right(&mut self) -> bool {
        self.try_shift(1)
    }

    /// Rotate clockwise with the ±1 column wall kick
    pub fn rotate(&mut self) -> bool {
        if !self.is_playing() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match try_rotate(&active, &self.board) {
            Some(rotated) => {
                self.active = Some(rotated);
                true
            }
            None => false,
        }
    }

    /// Gravity step: fall one row, or lock the piece if it is resting.
    pub fn tick(&mut self) -> TickOutcome {
        if !self.is_playing() {
            return TickOutcome::Ignored;
        }
        let Some(mut piece) = self.active else {
            return TickOutcome::Ignored;
        };

        if !check_collision(&piece, &self.board, 0, 1) {
            piece.y += 1;
            piece.collided = false;
            self.active = Some(piece);
            return TickOutcome::Fell;
        }

        // Blocked before leaving the top row: the stack has overflowed.
        if piece.y < 1 {
            self.phase = GamePhase::GameOver;
            return TickOutcome::GameOver;
        }

        piece.collided = true;
        self.active = Some(piece);
        self.lock_piece();

        if self.is_game_over() {
            TickOutcome::GameOver
        } else {
            TickOutcome::Locked
        }
    }

    /// One row down on request; identical to a gravity tick
    pub fn soft_drop(&mut self) -> TickOutcome {
        self.tick()
    }

    /// Lock the active piece onto the board, clear rows, score, respawn
    fn lock_piece(&mut self) {
        let Some(piece) = self.active.take() else {
            return;
        };

        self.board.merge(&piece);
        let lines_cleared = self.board.sweep_cleared_rows();

        // Points use the level the clear happened at.
        let line_clear_score = calculate_line_score(lines_cleared, self.level);
        let previous_level = self.level;

        self.score = self.score.saturating_add(line_clear_score);
        self.rows_cleared = self.rows_cleared.saturating_add(lines_cleared);
        self.level = calculate_level(self.rows_cleared);

        self.last_event = Some(LockEvent {
            kind: piece.kind,
            lines_cleared,
            line_clear_score,
            score: self.score,
            rows_cleared: self.rows_cleared,
            level: self.level,
            level_up: self.level > previous_level,
        });

        self.spawn_piece();
    }

    /// Apply a presentation intent. Returns whether anything changed.
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::MoveLeft => self.move_left(),
            GameAction::MoveRight => self.move_right(),
            GameAction::SoftDrop => self.soft_drop() != TickOutcome::Ignored,
            GameAction::Rotate => self.rotate(),
            GameAction::Start => {
                self.start();
                true
            }
        }
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(1)
    }
}
