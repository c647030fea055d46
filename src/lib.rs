//! ColorFall (workspace facade crate).
//!
//! Re-exports the workspace crates as `colorfall::{core,engine,input,term,types}`
//! so the binary, integration tests and benches share one import path.

pub use colorfall_core as core;
pub use colorfall_engine as engine;
pub use colorfall_input as input;
pub use colorfall_term as term;
pub use colorfall_types as types;
