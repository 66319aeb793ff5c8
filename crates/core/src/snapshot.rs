use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::{PieceKind, Rotation, RoundStatus};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct PieceSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i16,
    pub col: i16,
}

impl From<Piece> for PieceSnapshot {
    fn from(value: Piece) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            row: value.row,
            col: value.col,
        }
    }
}

/// Everything a renderer needs to redraw a round.
///
/// Keep one around and refresh it with
/// [`Round::snapshot_into`](crate::round::Round::snapshot_into); the grids are
/// copied with `clone_from`, so their buffers are reused.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoundSnapshot {
    pub field: Grid,
    pub preview: Grid,
    pub active: PieceSnapshot,
    pub next: PieceSnapshot,
    pub status: RoundStatus,
    pub ghost_enabled: bool,
    pub level: u32,
    pub score: u32,
    pub cleared_rows: u32,
    pub pieces_spawned: u32,
}

impl RoundSnapshot {
    /// Field tag matrix, top row first
    pub fn field_tags(&self) -> Vec<Vec<u8>> {
        self.field.tag_rows()
    }

    /// Preview tag matrix, top row first
    pub fn preview_tags(&self) -> Vec<Vec<u8>> {
        self.preview.tag_rows()
    }
}

impl Default for RoundSnapshot {
    fn default() -> Self {
        let origin = PieceSnapshot {
            kind: PieceKind::I,
            rotation: Rotation::North,
            row: 0,
            col: 0,
        };
        Self {
            field: Grid::field(),
            preview: Grid::preview(),
            active: origin,
            next: origin,
            status: RoundStatus::Running,
            ghost_enabled: true,
            level: 1,
            score: 0,
            cleared_rows: 0,
            pieces_spawned: 0,
        }
    }
}
