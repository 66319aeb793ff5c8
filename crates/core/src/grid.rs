//! Grid module - a fixed rows x cols matrix of cells
//!
//! The same type backs the 22x11 main field and the 5x5 next-piece preview.
//! Cells are stored row-major in one flat buffer that is allocated once when
//! the grid is created and never resized.
//! Coordinates are (row, col): row 0 is the top, col 0 the left edge. Signed
//! coordinates are accepted everywhere so callers can pass cells of a piece
//! that is still above the field; those simply read as out of bounds.

use crate::types::{Cell, FIELD_COLS, FIELD_ROWS, PIECE_WINDOW};

#[derive(Debug, PartialEq, Eq)]
pub struct Grid {
    rows: usize,
    cols: usize,
    /// Row-major cells (row * cols + col)
    cells: Vec<Cell>,
}

impl Clone for Grid {
    fn clone(&self) -> Self {
        Self {
            rows: self.rows,
            cols: self.cols,
            cells: self.cells.clone(),
        }
    }

    /// Reuses the existing buffer when the sizes match
    fn clone_from(&mut self, source: &Self) {
        self.rows = source.rows;
        self.cols = source.cols;
        self.cells.clone_from(&source.cells);
    }
}

impl Grid {
    /// Create an empty grid
    pub fn new(rows: usize, cols: usize) -> Self {
        Self {
            rows,
            cols,
            cells: vec![Cell::Empty; rows * cols],
        }
    }

    /// Empty main field (22 x 11)
    pub fn field() -> Self {
        Self::new(FIELD_ROWS, FIELD_COLS)
    }

    /// Empty next-piece preview (5 x 5)
    pub fn preview() -> Self {
        Self::new(PIECE_WINDOW, PIECE_WINDOW)
    }

    pub fn rows(&self) -> usize {
        self.rows
    }

    pub fn cols(&self) -> usize {
        self.cols
    }

    #[inline(always)]
    fn index(&self, row: i16, col: i16) -> Option<usize> {
        if row < 0 || col < 0 || row as usize >= self.rows || col as usize >= self.cols {
            return None;
        }
        Some(row as usize * self.cols + col as usize)
    }

    /// Whether `col` lies between the side walls
    pub fn contains_col(&self, col: i16) -> bool {
        col >= 0 && (col as usize) < self.cols
    }

    /// Get cell at (row, col); None if out of bounds
    pub fn get(&self, row: i16, col: i16) -> Option<Cell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    /// Set cell at (row, col); returns false if out of bounds
    pub fn set(&mut self, row: i16, col: i16, cell: Cell) -> bool {
        match self.index(row, col) {
            Some(i) => {
                self.cells[i] = cell;
                true
            }
            None => false,
        }
    }

    /// One row as a slice
    pub fn row(&self, row: usize) -> &[Cell] {
        let start = row * self.cols;
        &self.cells[start..start + self.cols]
    }

    /// All cells, row-major
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom
    pub fn iter_rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks(self.cols)
    }

    /// The integer tag matrix (see [`Cell::tag`]), top row first
    pub fn tag_rows(&self) -> Vec<Vec<u8>> {
        self.iter_rows()
            .map(|row| row.iter().map(Cell::tag).collect())
            .collect()
    }

    /// Set every cell to `Empty`
    pub fn clear(&mut self) {
        self.cells.fill(Cell::Empty);
    }

    /// A row is complete when it has no `Empty` cell
    pub fn is_row_complete(&self, row: usize) -> bool {
        row < self.rows && self.row(row).iter().all(|c| !c.is_empty())
    }

    /// Find a completed row inside the inclusive band `[from, to]`.
    ///
    /// Rows are scanned from `to` up to `from`, so the lowest completed row of
    /// the band is reported first. Parts of the band outside the grid are
    /// ignored.
    pub fn find_completed_row(&self, from: i16, to: i16) -> Option<usize> {
        let from = from.max(0);
        let to = to.min(self.rows as i16 - 1);
        if from > to {
            return None;
        }
        (from as usize..=to as usize)
            .rev()
            .find(|&row| self.is_row_complete(row))
    }

    /// Remove `row`: every row above it shifts down by one and row 0 becomes
    /// empty.
    pub fn clear_row(&mut self, row: usize) {
        if row >= self.rows {
            return;
        }
        let width = self.cols;
        let end = (row + 1) * width;
        // Shift rows [0, row) down by one row; copy_within handles the overlap.
        self.cells.copy_within(0..end - width, width);
        self.cells[..width].fill(Cell::Empty);
    }

    /// Number of non-empty cells
    pub fn occupied(&self) -> usize {
        self.cells.iter().filter(|c| !c.is_empty()).count()
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::field()
    }
}
