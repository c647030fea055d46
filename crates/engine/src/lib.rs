//! Hosting layer: real-time gravity, configuration and session logging
//! around the pure [`colorfall_core::GameState`].

pub mod config;
pub mod driver;
pub mod event_log;
pub mod timer;

pub use colorfall_core as core;
pub use colorfall_types as types;

pub use config::AppConfig;
pub use driver::GameDriver;
pub use event_log::{EventLog, LogRecord};
pub use timer::{GravityTimer, TickTicket};
