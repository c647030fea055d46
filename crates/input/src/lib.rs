//! Terminal input: maps `crossterm` key events to
//! [`crate::types::GameAction`] and recognizes quit keys.

pub mod map;

pub use colorfall_types as types;

pub use map::{handle_key_event, should_quit};
