//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are plain data with no game logic, making them usable in any
//! context (core engine, terminal rendering, JSON snapshots).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//! - **Spawn position**: (`BOARD_WIDTH / 2 - 1`, 0) = (4, 0)
//!
//! # Gravity
//!
//! The gravity period shrinks with level:
//!
//! | Level | Interval |
//! |-------|----------|
//! | 0 | 1200ms |
//! | 1 | 700ms |
//! | 2 | 533ms |
//! | 4 | 400ms |
//! | 9 | 300ms |
//! | ∞ | 200ms floor |
//!
//! # Examples
//!
//! ```
//! use colorfall_types::{GamePhase, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.as_str(), "T");
//! assert_eq!(GamePhase::default(), GamePhase::NotStarted);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

use serde::Serialize;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame period for input polling and rendering (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Numerator of the gravity formula: `GRAVITY_BASE_MS / (level + 1) + GRAVITY_FLOOR_MS`
pub const GRAVITY_BASE_MS: u32 = 1000;

/// Constant term of the gravity formula; the period never drops below this
pub const GRAVITY_FLOOR_MS: u32 = 200;

/// Rows that must be cleared to advance one level
pub const ROWS_PER_LEVEL: u32 = 10;

/// Line clear scoring table (Classic Nintendo scoring)
///
/// Base points for clearing N lines at level 0:
/// - 0 lines: 0 points
/// - 1 line: 40 points
/// - 2 lines: 100 points
/// - 3 lines: 300 points
/// - 4 lines: 1200 points
///
/// Points are multiplied by (level + 1).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// The seven tetromino piece kinds
///
/// - **I**: Cyan, straight bar
/// - **O**: Yellow, 2x2 square
/// - **T**: Purple, T-shaped
/// - **L**: Orange, L-shaped
/// - **J**: Blue, J-shaped (mirror of L)
/// - **S**: Green, S-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PieceKind {
    I,
    O,
    T,
    L,
    J,
    S,
    Z,
}

impl PieceKind {
    /// Every spawnable kind, in catalog order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::L,
        PieceKind::J,
        PieceKind::S,
        PieceKind::Z,
    ];

    /// Uppercase letter shown next to PIECE in the side panel
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::L => "L",
            PieceKind::J => "J",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
        }
    }
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(PieceKind)`: locked cell, remembered only for its color
pub type Cell = Option<PieceKind>;

/// Intents the presentation layer forwards to the engine
///
/// Gravity ticks are not an action: the timer collaborator calls
/// `tick` directly.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    /// Move piece one cell left
    MoveLeft,
    /// Move piece one cell right
    MoveRight,
    /// Drop piece one cell down (same effect as a gravity tick)
    SoftDrop,
    /// Rotate piece 90° clockwise with a ±1 column wall kick
    Rotate,
    /// Reset and begin a new session
    Start,
}

/// Lifecycle of a game session
///
/// `NotStarted --start--> Playing --overflow--> GameOver --start--> Playing`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum GamePhase {
    #[default]
    NotStarted,
    Playing,
    GameOver,
}

/// Core-side event emitted after a piece locks.
///
/// Consumed by observers such as the JSONL event log.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct LockEvent {
    pub kind: PieceKind,
    pub lines_cleared: u32,
    /// Points awarded for this clear (0 when nothing cleared).
    pub line_clear_score: u32,
    /// Totals after the lock.
    pub score: u32,
    pub rows_cleared: u32,
    pub level: u32,
    pub level_up: bool,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn piece_letters_follow_catalog_order() {
        let letters: Vec<&str> = PieceKind::ALL.iter().map(|k| k.as_str()).collect();
        assert_eq!(letters, ["I", "O", "T", "L", "J", "S", "Z"]);
    }

    #[test]
    fn phase_defaults_to_not_started() {
        assert_eq!(GamePhase::default(), GamePhase::NotStarted);
    }

    #[test]
    fn gravity_constants_match_formula_endpoints() {
        assert_eq!(GRAVITY_BASE_MS + GRAVITY_FLOOR_MS, 1200);
        assert_eq!(LINE_SCORES[4], 1200);
        assert_eq!(ROWS_PER_LEVEL, 10);
    }
}
