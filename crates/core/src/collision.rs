//! Collision checker
//!
//! A placement is illegal when any filled mask cell lands outside the grid
//! (left, right, below the bottom, or above the top) or on a locked cell.

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::pieces::Mask;

/// Would `piece` collide if moved by (dx, dy)?
pub fn check_collision(piece: &ActivePiece, board: &Board, dx: i16, dy: i16) -> bool {
    mask_collides(&piece.mask, piece.x + dx, piece.y + dy, board)
}

/// Would `mask` collide with its top-left corner at (x, y)?
pub fn mask_collides(mask: &Mask, x: i16, y: i16, board: &Board) -> bool {
    mask.filled_cells()
        .iter()
        .any(|&(mx, my)| !board.is_valid(x + mx, y + my))
}
