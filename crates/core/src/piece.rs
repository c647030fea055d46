//! Active piece - the falling tetromino the player controls

use serde::Serialize;

use crate::board::Board;
use crate::collision::check_collision;
use crate::pieces::{spawn_mask, Mask, MinoOffsets};
use crate::types::PieceKind;

/// Horizontal offsets tried, in order, when rotating.
///
/// Only ±1 column is attempted; the piece is never nudged vertically.
pub const ROTATION_KICKS: [i16; 3] = [0, 1, -1];

/// Spawn column for a board of the given width: `floor(width / 2) - 1`.
pub fn spawn_x(board_width: u8) -> i16 {
    (board_width / 2) as i16 - 1
}

/// The falling piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct ActivePiece {
    pub kind: PieceKind,
    /// Current rotation state.
    pub mask: Mask,
    /// Board position of the mask's top-left corner.
    pub x: i16,
    pub y: i16,
    /// Set when a downward step was blocked; triggers lock-in.
    pub collided: bool,
}

impl ActivePiece {
    /// A piece of `kind` at its rotation-0 mask and the given position
    pub fn new(kind: PieceKind, x: i16, y: i16) -> Self {
        Self {
            kind,
            mask: spawn_mask(kind),
            x,
            y,
            collided: false,
        }
    }

    /// A freshly spawned piece: centered horizontally, top row
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        Self::new(kind, spawn_x(board_width), 0)
    }

    /// Absolute board coordinates of the filled cells
    pub fn cells(&self) -> MinoOffsets {
        self.mask
            .filled_cells()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    /// Same piece moved by (dx, dy)
    pub fn translated(&self, dx: i16, dy: i16) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Same piece with its mask turned clockwise, position unchanged
    pub fn rotated(&self) -> Self {
        Self {
            mask: self.mask.rotate_cw(),
            ..*self
        }
    }
}

/// Rotate clockwise with the simple wall kick.
///
/// Tries the rotated mask in place, then shifted one column right, then one
/// column left. Returns the first legal placement, or `None` when all three
/// collide (the rotation is discarded).
pub fn try_rotate(piece: &ActivePiece, board: &Board) -> Option<ActivePiece> {
    let rotated = piece.rotated();
    ROTATION_KICKS
        .iter()
        .find(|&&kick| !check_collision(&rotated, board, kick, 0))
        .map(|&kick| rotated.translated(kick, 0))
}
