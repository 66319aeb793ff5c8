//! Ghost module - keeps the drop-position preview in step with the active piece
//!
//! The ghost is an ordinary [`Piece`] stamped with [`Cell::Ghost`](crate::types::Cell::Ghost).
//! After every change of the active piece it is moved onto the active
//! piece, dropped to rest, and then the active piece is stamped again so it
//! wins every cell the two share.

use crate::grid::Grid;
use crate::piece::Piece;

/// Re-project `ghost` below `active`.
///
/// Order matters: the ghost is erased before it adopts the new anchor, it
/// falls to rest, and the active piece is re-stamped last.
pub fn sync_ghost(ghost: &mut Piece, active: &mut Piece, grid: &mut Grid) {
    debug_assert!(ghost.is_ghost() && !active.is_ghost());
    ghost.update(grid, active.rotation, active.row, active.col);
    ghost.drop_to_floor(grid);
    active.restamp(grid);
}

/// Anchor row the active piece would come to rest at if dropped now.
///
/// Pure: evaluates feasibility only, so it can be used to check a stored
/// ghost against a projection computed from scratch.
pub fn landing_row(active: &Piece, grid: &Grid) -> i16 {
    // Probe from the stamped position so the piece never collides with itself.
    let mut row = active.row;
    while active.fits_at(grid, active.rotation, row + 1, active.col) {
        row += 1;
    }
    row
}
