//! Read-only, serializable view of a session for renderers and logs.

use serde::Serialize;

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::pieces::Mask;
use crate::scoring::gravity_interval_ms;
use crate::types::{Cell, GamePhase, PieceKind};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub mask: Mask,
    pub x: i16,
    pub y: i16,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            kind: value.kind,
            mask: value.mask,
            x: value.x,
            y: value.y,
        }
    }
}

impl ActiveSnapshot {
    /// Whether the piece covers board cell (x, y)
    pub fn covers(&self, x: i16, y: i16) -> bool {
        let (mx, my) = (x - self.x, y - self.y);
        mx >= 0 && my >= 0 && self.mask.is_filled(mx as usize, my as usize)
    }
}

/// Read-only view handed to the presentation layer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Option<ActiveSnapshot>,
    pub score: u32,
    pub rows_cleared: u32,
    pub level: u32,
    pub phase: GamePhase,
    pub is_playing: bool,
    pub is_game_over: bool,
    pub session_id: u32,
    /// Gravity period the timer should currently run at.
    pub gravity_ms: u32,
}

impl GameSnapshot {
    /// What a renderer should draw at (x, y): the active piece on top of the
    /// locked board.
    pub fn cell_at(&self, x: i16, y: i16) -> Cell {
        if let Some(active) = self.active {
            if active.covers(x, y) {
                return Some(active.kind);
            }
        }
        self.board.get(x, y).flatten()
    }

    pub fn is_playing(&self) -> bool {
        self.phase == GamePhase::Playing
    }

    pub fn is_game_over(&self) -> bool {
        self.phase == GamePhase::GameOver
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: Board::new(),
            active: None,
            score: 0,
            rows_cleared: 0,
            level: 0,
            phase: GamePhase::NotStarted,
            is_playing: false,
            is_game_over: false,
            session_id: 0,
            gravity_ms: gravity_interval_ms(0),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_idle() {
        let snap = GameSnapshot::default();
        assert!(!snap.is_playing());
        assert!(!snap.is_game_over());
        assert_eq!(snap.phase, GamePhase::NotStarted);
        assert_eq!(snap.gravity_ms, 1200);
    }

    #[test]
    fn test_cell_at_overlays_active_piece() {
        let mut snap = GameSnapshot::default();
        snap.board.set(0, 19, Some(PieceKind::Z));
        snap.active = Some(ActivePiece::new(PieceKind::O, 4, 0).into());

        assert_eq!(snap.cell_at(4, 0), Some(PieceKind::O));
        assert_eq!(snap.cell_at(5, 1), Some(PieceKind::O));
        assert_eq!(snap.cell_at(6, 0), None);
        assert_eq!(snap.cell_at(0, 19), Some(PieceKind::Z));
        assert_eq!(snap.cell_at(-1, 0), None);
    }

    #[test]
    fn test_serializes_to_json() {
        let mut snap = GameSnapshot::default();
        snap.active = Some(ActivePiece::new(PieceKind::T, 4, 0).into());
        let v = serde_json::to_value(&snap).unwrap();
        assert_eq!(v["phase"], "not_started");
        assert_eq!(v["active"]["kind"], "T");
        assert_eq!(v["active"]["mask"][1], serde_json::json!([1, 1, 1]));
        assert_eq!(v["board"]["rows"].as_array().unwrap().len(), 20);
    }
}
