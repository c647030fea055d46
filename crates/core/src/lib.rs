//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the game rules and session state. It has no
//! dependency on terminals, clocks, or I/O:
//!
//! - **Deterministic**: the same seed produces the same sequence of pieces
//! - **Discrete**: state changes only through `start`, moves, `rotate` and `tick`
//! - **Portable**: any host (terminal, headless test, benchmark) can drive it
//!
//! # Module Structure
//!
//! - [`board`]: fixed-size grid of locked cells and row sweeping
//! - [`pieces`]: tetromino masks, colors and clockwise rotation
//! - [`piece`]: the falling piece and the ±1 column rotation kick
//! - [`collision`]: placement legality against walls, floor and locked cells
//! - [`rng`]: seeded uniform piece selection
//! - [`scoring`]: line-clear points, level and gravity period
//! - [`game_state`]: the session state machine
//! - [`snapshot`]: serializable read-only view for renderers
//!
//! # Rules
//!
//! - Pieces spawn at column `width / 2 - 1`, row 0, in rotation 0.
//! - Each gravity tick moves the piece down one row. A piece that cannot move
//!   down locks; if it is still on row 0 the game is over instead.
//! - Full rows are removed and everything above drops down.
//! - Clearing 1/2/3/4 rows scores 40/100/300/1200 × (level + 1).
//! - Level is `rows / 10`; gravity period is `1000 / (level + 1) + 200` ms.
//!
//! # Example
//!
//! ```
//! use colorfall_core::GameState;
//! use colorfall_types::GameAction;
//!
//! let mut game = GameState::new(12345);
//! assert!(!game.apply_action(GameAction::MoveLeft)); // not started yet
//!
//! game.start();
//! assert!(game.is_playing());
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::Rotate);
//! game.tick();
//!
//! assert_eq!(game.score(), 0);
//! assert_eq!(game.gravity_interval_ms(), 1200);
//! ```

pub mod board;
pub mod collision;
pub mod game_state;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod snapshot;

pub use colorfall_types as types;

pub use board::Board;
pub use collision::check_collision;
pub use game_state::{GameState, TickOutcome};
pub use piece::{try_rotate, ActivePiece};
pub use pieces::{definition, definition_for_cell, Mask, PieceColor, TetrominoDef};
pub use rng::PieceRandomizer;
pub use scoring::{calculate_level, calculate_line_score, gravity_interval_ms};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
