//! Scoring module - classic line-clear points, level and gravity
//!
//! - Clearing 1/2/3/4 rows scores 40/100/300/1200 × (level + 1).
//! - Level is `rows / 10`.
//! - Gravity period is `1000 / (level + 1) + 200` milliseconds.

use crate::types::{GRAVITY_BASE_MS, GRAVITY_FLOOR_MS, LINE_SCORES, ROWS_PER_LEVEL};

/// Points for clearing `lines` rows at `level` (0-based).
///
/// Zero rows score nothing. A tetromino spans at most four rows, so counts
/// above four never come from play and also score nothing.
pub fn calculate_line_score(lines: u32, level: u32) -> u32 {
    match LINE_SCORES.get(lines as usize) {
        Some(&base) => base.saturating_mul(level.saturating_add(1)),
        None => 0,
    }
}

/// Level reached after clearing `total_rows` rows in a session
pub fn calculate_level(total_rows: u32) -> u32 {
    total_rows / ROWS_PER_LEVEL
}

/// Gravity tick period for a level, in milliseconds
pub fn gravity_interval_ms(level: u32) -> u32 {
    GRAVITY_BASE_MS / level.saturating_add(1) + GRAVITY_FLOOR_MS
}
