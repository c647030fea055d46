//! Terminal renderer for the game.
//!
//! Rendering is split in two: [`GameView`] draws a
//! [`GameSnapshot`](crate::core::GameSnapshot) into a plain [`FrameBuffer`]
//! (pure, unit-testable), and [`TerminalRenderer`] flushes framebuffers to
//! the terminal with `crossterm`, sending only the cells that changed.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use colorfall_core as core;
pub use colorfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, BoardFrame, GameView, Viewport};
pub use renderer::{changed_runs, encode_diff_into, encode_full_into, Run, TerminalRenderer};
