//! Core game logic - pure, deterministic, and testable
//!
//! Rules, state and simulation of a falling-block round with fifteen
//! pentomino-style kinds on a 22x11 field. No terminal, timer or I/O code
//! lives here; the caller feeds ticks and inputs one at a time and reads
//! snapshots back.
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size cell matrix with row-completion scan and row removal
//! - [`shapes`]: static (kind, rotation) -> offsets table
//! - [`piece`]: stamp/erase, bounding rows, feasibility, move and rotate
//! - [`kick`]: rotation correction by shifting up to two columns
//! - [`ghost`]: drop-position preview synchronizer
//! - [`scoring`]: cascade score, level progression, fall interval
//! - [`rng`]: uniform next-piece generation
//! - [`round`]: the round state machine (tick, clear cascade, spawn, pause)
//! - [`snapshot`]: render-ready copy of a round
//!
//! # Example
//!
//! ```
//! use tui_pentris_core::{Round, RoundConfig, TickOutcome};
//! use tui_pentris_types::{GameInput, RoundStatus};
//!
//! let mut round = Round::new(RoundConfig { ghost_enabled: true, seed: 7 });
//! round.apply_input(GameInput::Left);
//! round.apply_input(GameInput::Space);
//!
//! // The dropped piece settles on the next tick and a new one comes in.
//! assert!(matches!(round.tick(), TickOutcome::Landed(_)));
//! assert_eq!(round.status(), RoundStatus::Running);
//! assert_eq!(round.pieces_spawned(), 2);
//! ```

pub mod ghost;
pub mod grid;
pub mod kick;
pub mod piece;
pub mod rng;
pub mod round;
pub mod scoring;
pub mod shapes;
pub mod snapshot;

pub use tui_pentris_types as types;

// Re-export commonly used types for convenience
pub use ghost::{landing_row, sync_ghost};
pub use grid::Grid;
pub use kick::{resolve_rotation, rotate_with_kick, Kick};
pub use piece::{Piece, PieceCells};
pub use rng::SimpleRng;
pub use round::{CascadeReport, Round, RoundConfig, TickOutcome};
pub use scoring::{cascade_score, fall_interval_ms, level_after};
pub use shapes::{get_shape, Shape};
pub use snapshot::{PieceSnapshot, RoundSnapshot};
