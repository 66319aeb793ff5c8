//! Terminal renderer for the pentomino round.
//!
//! A small game-oriented rendering layer: the view paints a
//! [`RoundSnapshot`](crate::core::RoundSnapshot) into a framebuffer and the
//! renderer flushes only the changed glyphs to the terminal.
//!
//! Field cells are 2 terminal columns wide so they look roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_pentris_core as core;
pub use tui_pentris_types as types;

pub use fb::{CellStyle, FrameBuffer, Glyph, Rgb};
pub use game_view::{GameView, MenuOverlay, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
