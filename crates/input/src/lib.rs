//! Terminal input
//!
//! Maps `crossterm` key events to [`crate::types::GameInput`]. The same
//! symbols drive play and both menus; what they mean is decided by the
//! session from the round status.

pub mod map;

pub use tui_pentris_types as types;

pub use map::{handle_key_event, should_quit};
