//! Kick module - rotation correction by lateral shifts
//!
//! When a piece cannot turn where it is, it may still turn after sliding one
//! or two columns sideways. Candidates are tried in a fixed order:
//!
//! | Order | Shift | Requires |
//! |-------|-------|----------|
//! | 1 | 0 | turn fits in place |
//! | 2 | -1 | one step left, then turn |
//! | 3 | -2 | two single steps left, then turn |
//! | 4 | +1 | one step right, then turn |
//! | 5 | +2 | two single steps right, then turn |
//!
//! Every candidate is evaluated against the unchanged grid before anything
//! is written; only the winner is committed, with a single `update`.

use crate::grid::Grid;
use crate::piece::Piece;
use crate::types::Rotation;

/// Column shifts probed in each direction, nearest first
const SHIFTS: [i16; 2] = [1, 2];

/// A feasible rotation: the new rotation and the column shift it needs
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Kick {
    pub rotation: Rotation,
    pub shift: i16,
}

/// Pick the first feasible candidate, or None when the piece cannot turn at
/// all. Pure: the grid and the piece are left untouched.
pub fn resolve_rotation(piece: &Piece, grid: &Grid) -> Option<Kick> {
    let rotation = piece.rotation.rotate_cw();
    if piece.can_rotate(grid) {
        return Some(Kick { rotation, shift: 0 });
    }

    for sign in [-1, 1] {
        for &steps in SHIFTS.iter() {
            let shift = sign * steps;
            // Every intermediate column must be reachable by plain translation.
            let reachable = (1..=steps)
                .all(|s| piece.fits_at(grid, piece.rotation, piece.row, piece.col + sign * s));
            if !reachable {
                break;
            }
            if piece.fits_at(grid, rotation, piece.row, piece.col + shift) {
                return Some(Kick { rotation, shift });
            }
        }
    }

    None
}

/// Rotate with kicks. Returns the applied kick, or None if the piece stays
/// as it was.
pub fn rotate_with_kick(piece: &mut Piece, grid: &mut Grid) -> Option<Kick> {
    let kick = resolve_rotation(piece, grid)?;
    let (row, col) = (piece.row, piece.col + kick.shift);
    assert!(
        piece.fits_at(grid, kick.rotation, row, col),
        "kick resolved to a blocked position"
    );
    piece.update(grid, kick.rotation, row, col);
    Some(kick)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Cell, PieceKind, FIELD_COLS};

    fn stamped(kind: PieceKind, rotation: Rotation, row: i16, col: i16, grid: &mut Grid) -> Piece {
        let piece = Piece::new(kind, rotation, row, col);
        piece.stamp(grid);
        piece
    }

    #[test]
    fn rotates_in_place_when_free() {
        let mut grid = Grid::field();
        let piece = stamped(PieceKind::T, Rotation::North, 10, 5, &mut grid);
        assert_eq!(
            resolve_rotation(&piece, &grid),
            Some(Kick {
                rotation: Rotation::East,
                shift: 0
            })
        );
    }

    #[test]
    fn kicks_two_left_off_the_right_wall() {
        // Vertical I against the right wall needs cols 8..=12 after turning.
        let mut grid = Grid::field();
        let last = FIELD_COLS as i16 - 1;
        let mut piece = stamped(PieceKind::I, Rotation::North, 10, last, &mut grid);

        let kick = rotate_with_kick(&mut piece, &mut grid).unwrap();
        assert_eq!(kick.shift, -2);
        assert_eq!(piece.rotation, Rotation::East);
        assert_eq!(piece.col, last - 2);
        assert_eq!(grid.occupied(), 5);
    }

    #[test]
    fn kicks_right_off_the_left_wall() {
        let mut grid = Grid::field();
        let mut piece = stamped(PieceKind::I, Rotation::North, 10, 1, &mut grid);

        let kick = rotate_with_kick(&mut piece, &mut grid).unwrap();
        assert_eq!(kick.shift, 1);
        assert_eq!(piece.col, 2);
    }

    #[test]
    fn prefers_left_when_both_sides_work() {
        let mut grid = Grid::field();
        // I turning East at (10, 5) needs cols 3..=7 of row 10; both sides blocked.
        grid.set(10, 3, Cell::Block(PieceKind::U));
        grid.set(10, 7, Cell::Block(PieceKind::U));
        let piece = stamped(PieceKind::I, Rotation::North, 10, 5, &mut grid);
        assert_eq!(resolve_rotation(&piece, &grid), None);

        let mut grid = Grid::field();
        grid.set(10, 7, Cell::Block(PieceKind::U));
        let piece = stamped(PieceKind::I, Rotation::North, 10, 5, &mut grid);
        assert_eq!(resolve_rotation(&piece, &grid).map(|k| k.shift), Some(-1));
    }

    #[test]
    fn two_step_shift_needs_the_intermediate_column() {
        let mut grid = Grid::field();
        // Wall of blocks directly left of a vertical I: no left kick possible.
        for row in 8..=12 {
            grid.set(row, 4, Cell::Block(PieceKind::N));
        }
        grid.set(10, 8, Cell::Block(PieceKind::N));
        let piece = stamped(PieceKind::I, Rotation::North, 10, 5, &mut grid);
        // Right: +1 turns into col 4, +2 turns into col 8.
        assert_eq!(
            resolve_rotation(&piece, &grid),
            None,
            "col 8 and the left wall block every candidate"
        );
    }

    #[test]
    fn blocked_rotation_leaves_piece_untouched() {
        let mut grid = Grid::field();
        for row in 0..grid.rows() as i16 {
            grid.set(row, 4, Cell::Block(PieceKind::N));
            grid.set(row, 6, Cell::Block(PieceKind::N));
        }
        let mut piece = stamped(PieceKind::I, Rotation::North, 10, 5, &mut grid);
        let before_grid = grid.clone();
        let before_piece = piece;

        assert_eq!(rotate_with_kick(&mut piece, &mut grid), None);
        assert_eq!(piece, before_piece);
        assert_eq!(grid, before_grid);
    }
}
