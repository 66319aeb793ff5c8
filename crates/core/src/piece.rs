//! Piece module - a shape placed on a grid
//!
//! A piece is an anchor, a rotation and a kind. Its occupied cells are the
//! anchor plus the shape offsets for (kind, rotation). The piece writes itself
//! into a [`Grid`] only through [`Piece::stamp`] / [`Piece::erase`], and
//! [`Piece::update`] is the single mutator that moves it (erase at the old
//! place, adopt the new rotation/anchor, stamp at the new place).
//!
//! Rows above the field (negative) are legal while a piece is still entering;
//! such cells are skipped when stamping and never collide.

use arrayvec::ArrayVec;

use crate::grid::Grid;
use crate::shapes::get_shape;
use crate::types::{Cell, Direction, PieceKind, Rotation, PIECE_WINDOW};

/// Absolute (row, col) cells of a piece
pub type PieceCells = ArrayVec<(i16, i16), PIECE_WINDOW>;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub row: i16,
    pub col: i16,
    /// Stamped as [`Cell::Ghost`] instead of its kind
    ghost: bool,
}

impl Piece {
    /// A solid piece, stamped with its kind
    pub fn new(kind: PieceKind, rotation: Rotation, row: i16, col: i16) -> Self {
        Self {
            kind,
            rotation,
            row,
            col,
            ghost: false,
        }
    }

    /// A drop-position preview, stamped as ghost cells
    pub fn ghost(kind: PieceKind, rotation: Rotation, row: i16, col: i16) -> Self {
        Self {
            ghost: true,
            ..Self::new(kind, rotation, row, col)
        }
    }

    /// Re-initialize in place without touching any grid.
    ///
    /// Used on every spawn: the previous position is assumed to be already
    /// overwritten (a landed piece covers its own ghost).
    pub fn reset(&mut self, kind: PieceKind, rotation: Rotation, row: i16, col: i16) {
        self.kind = kind;
        self.rotation = rotation;
        self.row = row;
        self.col = col;
    }

    pub fn is_ghost(&self) -> bool {
        self.ghost
    }

    /// Grid value written by [`Piece::stamp`]
    pub fn tag(&self) -> Cell {
        if self.ghost {
            Cell::Ghost
        } else {
            Cell::Block(self.kind)
        }
    }

    /// Occupied cells at the current rotation and anchor
    pub fn cells(&self) -> PieceCells {
        self.cells_at(self.rotation, self.row, self.col)
    }

    /// Cells this piece would occupy at another rotation and anchor
    pub fn cells_at(&self, rotation: Rotation, row: i16, col: i16) -> PieceCells {
        get_shape(self.kind, rotation)
            .offsets()
            .iter()
            .map(|&(dr, dc)| (row + dr as i16, col + dc as i16))
            .collect()
    }

    /// Write the tag into every occupied on-grid cell
    pub fn stamp(&self, grid: &mut Grid) {
        let tag = self.tag();
        for (row, col) in self.cells() {
            if row >= 0 {
                debug_assert!(grid.contains_col(col), "stamp outside the side walls");
                grid.set(row, col, tag);
            }
        }
    }

    /// Write `Empty` into every occupied on-grid cell.
    ///
    /// Must run before the rotation/anchor change, otherwise the old cells are
    /// left behind.
    pub fn erase(&self, grid: &mut Grid) {
        for (row, col) in self.cells() {
            grid.set(row, col, Cell::Empty);
        }
    }

    /// Erase, adopt the new rotation and anchor, stamp again
    pub fn update(&mut self, grid: &mut Grid, rotation: Rotation, row: i16, col: i16) {
        self.erase(grid);
        self.rotation = rotation;
        self.row = row;
        self.col = col;
        self.stamp(grid);
    }

    /// Erase and stamp at the unchanged position, so this piece wins any cell
    /// it shares with another stamp
    pub fn restamp(&mut self, grid: &mut Grid) {
        let (rotation, row, col) = (self.rotation, self.row, self.col);
        self.update(grid, rotation, row, col);
    }

    /// Largest occupied row (the lowest cell on screen)
    pub fn bounding_row_high(&self) -> i16 {
        self.cells().iter().map(|&(r, _)| r).max().unwrap_or(self.row)
    }

    /// Smallest occupied row (the highest cell on screen)
    pub fn bounding_row_low(&self) -> i16 {
        self.cells().iter().map(|&(r, _)| r).min().unwrap_or(self.row)
    }

    /// Whether the piece could sit at (rotation, row, col).
    ///
    /// A target cell blocks when it is outside the columns, below the last
    /// row, or holds a block that is not one of this piece's current cells.
    /// Ghost cells and rows above the field never block.
    pub fn fits_at(&self, grid: &Grid, rotation: Rotation, row: i16, col: i16) -> bool {
        let own = self.cells();
        self.cells_at(rotation, row, col)
            .iter()
            .all(|&(r, c)| cell_is_free(grid, &own, r, c))
    }

    /// Feasibility of a one-step translation; no side effect
    pub fn can_move(&self, grid: &Grid, direction: Direction) -> bool {
        let (dr, dc) = direction.delta();
        self.fits_at(grid, self.rotation, self.row + dr, self.col + dc)
    }

    /// Feasibility of a clockwise quarter turn at the same anchor
    pub fn can_rotate(&self, grid: &Grid) -> bool {
        self.fits_at(grid, self.rotation.rotate_cw(), self.row, self.col)
    }

    /// Translate one step.
    ///
    /// # Panics
    ///
    /// Panics if [`Piece::can_move`] is false for `direction`.
    pub fn move_by(&mut self, grid: &mut Grid, direction: Direction) {
        assert!(
            self.can_move(grid, direction),
            "illegal move {:?} for {:?}",
            direction,
            self
        );
        let (dr, dc) = direction.delta();
        let rotation = self.rotation;
        self.update(grid, rotation, self.row + dr, self.col + dc);
    }

    /// Rotate one quarter turn clockwise at the same anchor.
    ///
    /// # Panics
    ///
    /// Panics if [`Piece::can_rotate`] is false.
    pub fn rotate(&mut self, grid: &mut Grid) {
        assert!(self.can_rotate(grid), "illegal rotation for {:?}", self);
        let (row, col) = (self.row, self.col);
        self.update(grid, self.rotation.rotate_cw(), row, col);
    }

    /// Move down until blocked; returns the number of rows fallen
    pub fn drop_to_floor(&mut self, grid: &mut Grid) -> u16 {
        let mut fallen = 0;
        while self.can_move(grid, Direction::Down) {
            self.move_by(grid, Direction::Down);
            fallen += 1;
        }
        fallen
    }
}

fn cell_is_free(grid: &Grid, own: &[(i16, i16)], row: i16, col: i16) -> bool {
    if !grid.contains_col(col) || row >= grid.rows() as i16 {
        return false;
    }
    if row < 0 {
        return true;
    }
    match grid.get(row, col) {
        Some(Cell::Block(_)) => own.contains(&(row, col)),
        Some(_) => true,
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{FIELD_ROWS, SPAWN_COL, SPAWN_ROW};

    #[test]
    fn test_stamp_skips_rows_above_field() {
        let mut grid = Grid::field();
        let piece = Piece::new(PieceKind::I, Rotation::North, -1, 4);
        piece.stamp(&mut grid);
        // I spans rows -3..=1; only rows 0 and 1 land on the grid.
        assert_eq!(grid.occupied(), 2);
        assert_eq!(grid.get(0, 4), Some(Cell::Block(PieceKind::I)));
        assert_eq!(grid.get(1, 4), Some(Cell::Block(PieceKind::I)));
    }

    #[test]
    fn test_erase_after_stamp_restores_grid() {
        let mut grid = Grid::field();
        grid.set(21, 0, Cell::Block(PieceKind::U));
        let before = grid.clone();

        let piece = Piece::new(PieceKind::W, Rotation::South, 10, 5);
        piece.stamp(&mut grid);
        assert_ne!(grid, before);
        piece.erase(&mut grid);
        assert_eq!(grid, before);
    }

    #[test]
    fn test_bounding_rows() {
        let piece = Piece::new(PieceKind::L, Rotation::North, 5, 5);
        assert_eq!(piece.bounding_row_low(), 3);
        assert_eq!(piece.bounding_row_high(), 6);

        let flat = Piece::new(PieceKind::I, Rotation::East, 5, 5);
        assert_eq!(flat.bounding_row_low(), 5);
        assert_eq!(flat.bounding_row_high(), 5);
    }

    #[test]
    fn test_own_cells_do_not_block() {
        let mut grid = Grid::field();
        let piece = Piece::new(PieceKind::I, Rotation::North, 10, 5);
        piece.stamp(&mut grid);
        assert!(piece.can_move(&grid, Direction::Down));
        assert!(piece.can_move(&grid, Direction::Left));
        assert!(piece.can_rotate(&grid));
    }

    #[test]
    fn test_ghost_cells_do_not_block() {
        let mut grid = Grid::field();
        let ghost = Piece::ghost(PieceKind::U, Rotation::North, 20, 5);
        ghost.stamp(&mut grid);
        let piece = Piece::new(PieceKind::U, Rotation::North, 18, 5);
        assert!(piece.can_move(&grid, Direction::Down));
    }

    #[test]
    fn test_walls_and_floor_block() {
        let grid = Grid::field();
        let left = Piece::new(PieceKind::I, Rotation::North, 5, 0);
        assert!(!left.can_move(&grid, Direction::Left));
        let right = Piece::new(PieceKind::I, Rotation::North, 5, 10);
        assert!(!right.can_move(&grid, Direction::Right));
        let bottom = Piece::new(PieceKind::I, Rotation::North, FIELD_ROWS as i16 - 3, 5);
        assert!(!bottom.can_move(&grid, Direction::Down));
        // Horizontal I at the wall cannot turn into the wall.
        let wall = Piece::new(PieceKind::I, Rotation::North, 5, 0);
        assert!(!wall.can_rotate(&grid));
    }

    #[test]
    fn test_settled_blocks_collide() {
        let mut grid = Grid::field();
        grid.set(12, 5, Cell::Block(PieceKind::T));
        let piece = Piece::new(PieceKind::I, Rotation::North, 9, 5);
        assert!(!piece.can_move(&grid, Direction::Down));
    }

    #[test]
    fn test_spawn_position_is_fully_above_field() {
        let grid = Grid::field();
        for kind in PieceKind::ALL {
            for rotation in Rotation::ALL {
                let piece = Piece::new(kind, rotation, SPAWN_ROW, SPAWN_COL);
                assert!(piece.bounding_row_high() < 0);
                assert!(piece.fits_at(&grid, rotation, SPAWN_ROW, SPAWN_COL));
            }
        }
    }

    #[test]
    fn test_move_and_rotate_leave_no_trail() {
        let mut grid = Grid::field();
        let mut piece = Piece::new(PieceKind::F, Rotation::North, 8, 5);
        piece.stamp(&mut grid);

        piece.move_by(&mut grid, Direction::Left);
        piece.move_by(&mut grid, Direction::Down);
        piece.rotate(&mut grid);

        assert_eq!(grid.occupied(), 5);
        for (r, c) in piece.cells() {
            assert_eq!(grid.get(r, c), Some(Cell::Block(PieceKind::F)));
        }
    }

    #[test]
    #[should_panic(expected = "illegal move")]
    fn test_move_without_room_panics() {
        let mut grid = Grid::field();
        let mut piece = Piece::new(PieceKind::I, Rotation::North, 5, 0);
        piece.move_by(&mut grid, Direction::Left);
    }

    #[test]
    fn test_drop_to_floor() {
        let mut grid = Grid::field();
        let mut piece = Piece::new(PieceKind::IShort, Rotation::North, 0, 3);
        let fallen = piece.drop_to_floor(&mut grid);
        assert_eq!(piece.bounding_row_high(), FIELD_ROWS as i16 - 1);
        assert_eq!(fallen, 19);
    }
}
