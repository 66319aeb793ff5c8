//! Round module - the state machine of one round
//!
//! A [`Round`] exclusively owns the field, the next-piece preview, the
//! active piece, the optional ghost and the next piece. All mutation goes
//! through [`Round::tick`] and [`Round::apply_input`], which the caller must
//! serialize (one event at a time).
//!
//! | Status | Event | Result |
//! |--------|-------|--------|
//! | Running | tick, piece can fall | piece moves down one row |
//! | Running | tick, piece blocked, top above field | GameOver |
//! | Running | tick, piece blocked | clear cascade, next piece spawned |
//! | Running | Menu input | Menu |
//! | Menu | [`Round::resume`] | Running |
//! | Menu / GameOver | [`Round::restart`] | Running, fresh round |
//!
//! The fall timer itself lives outside the core; [`Round::fall_interval_ms`]
//! reports the period it should run at.

use crate::ghost::sync_ghost;
use crate::grid::Grid;
use crate::kick::rotate_with_kick;
use crate::piece::Piece;
use crate::rng::SimpleRng;
use crate::scoring::{cascade_score, fall_interval_ms, level_after};
use crate::snapshot::RoundSnapshot;
use crate::types::{
    Direction, GameInput, PieceKind, Rotation, RoundStatus, FIELD_COLS, FIELD_ROWS,
    PREVIEW_ANCHOR, SPAWN_COL, SPAWN_ROW,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundConfig {
    /// Show the drop-position preview; disabling it doubles the score
    pub ghost_enabled: bool,
    pub seed: u32,
}

impl Default for RoundConfig {
    fn default() -> Self {
        Self {
            ghost_enabled: true,
            seed: 1,
        }
    }
}

/// Result of one clear cascade
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CascadeReport {
    pub rows_cleared: u32,
    pub score_delta: u32,
    pub level_before: u32,
    pub level_after: u32,
}

impl CascadeReport {
    pub fn leveled_up(&self) -> bool {
        self.level_after > self.level_before
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Round is not running
    Ignored,
    /// Active piece moved down one row
    Fell,
    /// Active piece settled; the next one is already spawned
    Landed(CascadeReport),
    /// Active piece settled before it fully entered the field
    GameOver,
}

#[derive(Debug, Clone)]
pub struct Round {
    config: RoundConfig,
    rng: SimpleRng,
    field: Grid,
    preview: Grid,
    active: Piece,
    ghost: Option<Piece>,
    next: Piece,
    status: RoundStatus,
    level: u32,
    score: u32,
    cleared_rows: u32,
    pieces_spawned: u32,
}

impl Round {
    /// Start a round on an empty field
    pub fn new(config: RoundConfig) -> Self {
        let mut rng = SimpleRng::new(config.seed);
        let first = rng.next_piece();
        Self::build(config, rng, Grid::field(), first)
    }

    /// Start a round on a prepared field with a chosen first piece.
    ///
    /// # Panics
    ///
    /// Panics if `field` is not 22x11.
    pub fn with_field(config: RoundConfig, field: Grid, first: (PieceKind, Rotation)) -> Self {
        assert!(
            field.rows() == FIELD_ROWS && field.cols() == FIELD_COLS,
            "field must be {}x{}, got {}x{}",
            FIELD_ROWS,
            FIELD_COLS,
            field.rows(),
            field.cols()
        );
        Self::build(config, SimpleRng::new(config.seed), field, first)
    }

    fn build(config: RoundConfig, rng: SimpleRng, field: Grid, first: (PieceKind, Rotation)) -> Self {
        let (kind, rotation) = first;
        let (preview_row, preview_col) = PREVIEW_ANCHOR;
        let mut round = Self {
            config,
            rng,
            field,
            preview: Grid::preview(),
            active: Piece::new(kind, rotation, SPAWN_ROW, SPAWN_COL),
            ghost: config
                .ghost_enabled
                .then(|| Piece::ghost(kind, rotation, SPAWN_ROW, SPAWN_COL)),
            next: Piece::new(kind, rotation, preview_row, preview_col),
            status: RoundStatus::Running,
            level: 1,
            score: 0,
            cleared_rows: 0,
            pieces_spawned: 0,
        };
        round.show_next();
        round.spawn();
        round
    }

    /// Full reset: empty field, level 1, zero score, new piece
    pub fn restart(&mut self) {
        self.field.clear();
        self.level = 1;
        self.score = 0;
        self.cleared_rows = 0;
        self.pieces_spawned = 0;
        self.status = RoundStatus::Running;
        let (kind, rotation) = self.rng.next_piece();
        self.set_next(kind, rotation);
        self.spawn();
    }

    /// Advance the fall by one step
    pub fn tick(&mut self) -> TickOutcome {
        if self.status != RoundStatus::Running {
            return TickOutcome::Ignored;
        }

        if self.active.can_move(&self.field, Direction::Down) {
            self.active.move_by(&mut self.field, Direction::Down);
            self.sync_ghost();
            return TickOutcome::Fell;
        }

        if self.active.bounding_row_low() < 0 {
            self.status = RoundStatus::GameOver;
            return TickOutcome::GameOver;
        }

        let report = self.clear_cascade();
        self.spawn();
        TickOutcome::Landed(report)
    }

    /// Apply an input of the running map. Returns whether anything changed.
    pub fn apply_input(&mut self, input: GameInput) -> bool {
        if self.status != RoundStatus::Running {
            return false;
        }

        let changed = match input {
            GameInput::Up => self.rotate(),
            GameInput::Down => self.shift(Direction::Down),
            GameInput::Left => self.shift(Direction::Left),
            GameInput::Right => self.shift(Direction::Right),
            // Falls to rest; settling is left to the next tick.
            GameInput::Space => self.active.drop_to_floor(&mut self.field) > 0,
            GameInput::Menu => return self.pause(),
            GameInput::Enter => false,
        };
        if changed {
            self.sync_ghost();
        }
        changed
    }

    /// Running -> Menu
    pub fn pause(&mut self) -> bool {
        if self.status != RoundStatus::Running {
            return false;
        }
        self.status = RoundStatus::Menu;
        true
    }

    /// Menu -> Running
    pub fn resume(&mut self) -> bool {
        if self.status != RoundStatus::Menu {
            return false;
        }
        self.status = RoundStatus::Running;
        true
    }

    /// Replace the upcoming piece
    pub fn force_next(&mut self, kind: PieceKind, rotation: Rotation) {
        self.set_next(kind, rotation);
    }

    fn rotate(&mut self) -> bool {
        if self.active.can_rotate(&self.field) {
            self.active.rotate(&mut self.field);
            return true;
        }
        rotate_with_kick(&mut self.active, &mut self.field).is_some()
    }

    fn shift(&mut self, direction: Direction) -> bool {
        if !self.active.can_move(&self.field, direction) {
            return false;
        }
        self.active.move_by(&mut self.field, direction);
        true
    }

    fn sync_ghost(&mut self) {
        if let Some(ghost) = self.ghost.as_mut() {
            sync_ghost(ghost, &mut self.active, &mut self.field);
        }
    }

    /// Clear every completed row in the band of the settled piece.
    ///
    /// The band is read from the piece again after each removal; the piece
    /// itself is not moved by the shift, so the band stays the rows it
    /// landed on.
    fn clear_cascade(&mut self) -> CascadeReport {
        let level_before = self.level;
        let mut rows_cleared = 0;

        while let Some(row) = self.field.find_completed_row(
            self.active.bounding_row_low(),
            self.active.bounding_row_high(),
        ) {
            self.field.clear_row(row);
            self.cleared_rows += 1;
            self.level = level_after(self.cleared_rows, self.level);
            rows_cleared += 1;
        }

        let score_delta = cascade_score(rows_cleared, self.config.ghost_enabled);
        self.score = self.score.saturating_add(score_delta);

        CascadeReport {
            rows_cleared,
            score_delta,
            level_before,
            level_after: self.level,
        }
    }

    /// Bring the next piece in at the spawn anchor and let it fall until its
    /// lowest cell reaches row 0 or it is blocked, then draw a new next piece.
    ///
    /// The previous active and ghost pieces are re-initialized, not erased:
    /// the settled piece already covers its ghost.
    fn spawn(&mut self) {
        let (kind, rotation) = (self.next.kind, self.next.rotation);

        if let Some(ghost) = self.ghost.as_mut() {
            ghost.reset(kind, rotation, SPAWN_ROW, SPAWN_COL);
        }
        self.active.reset(kind, rotation, SPAWN_ROW, SPAWN_COL);
        self.active.stamp(&mut self.field);
        while self.active.bounding_row_high() < 0
            && self.active.can_move(&self.field, Direction::Down)
        {
            self.active.move_by(&mut self.field, Direction::Down);
        }
        self.sync_ghost();

        let (kind, rotation) = self.rng.next_piece();
        self.set_next(kind, rotation);
        self.pieces_spawned += 1;
    }

    fn set_next(&mut self, kind: PieceKind, rotation: Rotation) {
        let (row, col) = PREVIEW_ANCHOR;
        self.next.reset(kind, rotation, row, col);
        self.show_next();
    }

    fn show_next(&mut self) {
        self.preview.clear();
        self.next.stamp(&mut self.preview);
    }

    /// Fall period for the current level
    pub fn fall_interval_ms(&self) -> u32 {
        fall_interval_ms(self.level)
    }

    pub fn config(&self) -> RoundConfig {
        self.config
    }

    pub fn field(&self) -> &Grid {
        &self.field
    }

    pub fn preview(&self) -> &Grid {
        &self.preview
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn ghost(&self) -> Option<&Piece> {
        self.ghost.as_ref()
    }

    pub fn next(&self) -> &Piece {
        &self.next
    }

    pub fn status(&self) -> RoundStatus {
        self.status
    }

    pub fn ghost_enabled(&self) -> bool {
        self.config.ghost_enabled
    }

    pub fn level(&self) -> u32 {
        self.level
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn cleared_rows(&self) -> u32 {
        self.cleared_rows
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Refresh `out` in place
    pub fn snapshot_into(&self, out: &mut RoundSnapshot) {
        out.field.clone_from(&self.field);
        out.preview.clone_from(&self.preview);
        out.active = self.active.into();
        out.next = self.next.into();
        out.status = self.status;
        out.ghost_enabled = self.config.ghost_enabled;
        out.level = self.level;
        out.score = self.score;
        out.cleared_rows = self.cleared_rows;
        out.pieces_spawned = self.pieces_spawned;
    }

    pub fn snapshot(&self) -> RoundSnapshot {
        let mut out = RoundSnapshot::default();
        self.snapshot_into(&mut out);
        out
    }
}
