//! Event loop and ambient services around the core
//!
//! The core never sees a clock or a key. This crate turns both into one
//! ordered stream of [`Event`]s and applies them to a [`Session`] one at a
//! time:
//!
//! - [`timer`]: fall timer posting epoch-tagged ticks ([`TickTimer`]) and a
//!   hand-driven stand-in ([`ManualTicks`])
//! - [`session`]: round + pause/game-over menus + timer control
//! - [`runtime`]: tokio runtime and event channel ([`EventLoop`])
//! - [`config`]: settings from `PENTRIS_*` environment variables
//! - [`journal`]: JSONL game journal written off the game thread

pub mod config;
pub mod error;
pub mod event;
pub mod journal;
pub mod runtime;
pub mod session;
pub mod timer;

pub use tui_pentris_core as core;
pub use tui_pentris_types as types;

pub use config::GameConfig;
pub use error::{EngineError, Result};
pub use event::Event;
pub use journal::{Journal, Record};
pub use runtime::{EventLoop, EventSender};
pub use session::{Flow, Session};
pub use timer::{ManualTicks, TickControl, TickTimer};
