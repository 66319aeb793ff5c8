//! TUI Pentris (workspace facade crate).
//!
//! Re-exports the workspace crates as `tui_pentris::{core,engine,input,term,types}`.

pub use tui_pentris_core as core;
pub use tui_pentris_engine as engine;
pub use tui_pentris_input as input;
pub use tui_pentris_term as term;
pub use tui_pentris_types as types;
