//! Grid tests

use tui_pentris::core::Grid;
use tui_pentris::types::{Cell, PieceKind, FIELD_COLS, FIELD_ROWS, PIECE_WINDOW};

fn fill_row(grid: &mut Grid, row: i16, kind: PieceKind) {
    for col in 0..grid.cols() as i16 {
        grid.set(row, col, Cell::Block(kind));
    }
}

#[test]
fn test_field_and_preview_dimensions() {
    let field = Grid::field();
    assert_eq!((field.rows(), field.cols()), (FIELD_ROWS, FIELD_COLS));
    assert!(field.cells().iter().all(|c| c.is_empty()));

    let preview = Grid::preview();
    assert_eq!((preview.rows(), preview.cols()), (PIECE_WINDOW, PIECE_WINDOW));
}

#[test]
fn test_out_of_range_access() {
    let mut grid = Grid::field();
    assert_eq!(grid.get(-1, 0), None);
    assert_eq!(grid.get(0, -1), None);
    assert_eq!(grid.get(FIELD_ROWS as i16, 0), None);
    assert_eq!(grid.get(0, FIELD_COLS as i16), None);

    assert!(!grid.set(-3, 4, Cell::Ghost));
    assert!(!grid.set(0, 11, Cell::Ghost));
    assert_eq!(grid.occupied(), 0);
}

#[test]
fn test_tags_match_cells() {
    let mut grid = Grid::new(2, 3);
    grid.set(0, 0, Cell::Block(PieceKind::F));
    grid.set(1, 2, Cell::Ghost);
    grid.set(1, 1, Cell::Block(PieceKind::IShort));
    assert_eq!(grid.tag_rows(), vec![vec![1, 0, 0], vec![0, 15, 16]]);
}

#[test]
fn test_ghost_cells_count_toward_a_complete_row() {
    let mut grid = Grid::field();
    fill_row(&mut grid, 21, PieceKind::T);
    grid.set(21, 4, Cell::Ghost);
    assert!(grid.is_row_complete(21));

    grid.set(21, 4, Cell::Empty);
    assert!(!grid.is_row_complete(21));
}

#[test]
fn test_find_completed_row_prefers_the_lowest() {
    let mut grid = Grid::field();
    fill_row(&mut grid, 15, PieceKind::L);
    fill_row(&mut grid, 18, PieceKind::L);

    assert_eq!(grid.find_completed_row(10, 21), Some(18));
    assert_eq!(grid.find_completed_row(10, 17), Some(15));
    assert_eq!(grid.find_completed_row(19, 21), None);
    // Out-of-range bounds are clamped.
    assert_eq!(grid.find_completed_row(-5, 40), Some(18));
}

#[test]
fn test_clear_row_shifts_everything_above() {
    let mut grid = Grid::field();
    grid.set(0, 3, Cell::Block(PieceKind::P));
    grid.set(19, 7, Cell::Block(PieceKind::Y));
    fill_row(&mut grid, 20, PieceKind::N);
    grid.set(21, 0, Cell::Block(PieceKind::U));

    grid.clear_row(20);

    assert_eq!(grid.get(0, 3), Some(Cell::Empty));
    assert_eq!(grid.get(1, 3), Some(Cell::Block(PieceKind::P)));
    assert_eq!(grid.get(20, 7), Some(Cell::Block(PieceKind::Y)));
    // Rows below the cleared one are untouched.
    assert_eq!(grid.get(21, 0), Some(Cell::Block(PieceKind::U)));
    assert_eq!(grid.occupied(), 3);
}

#[test]
fn test_bottom_up_cascade_over_non_adjacent_rows() {
    let mut grid = Grid::field();
    for row in [17, 19, 21] {
        fill_row(&mut grid, row, PieceKind::L);
    }
    grid.set(5, 7, Cell::Block(PieceKind::F));
    grid.set(18, 2, Cell::Block(PieceKind::P));
    grid.set(20, 4, Cell::Block(PieceKind::Y));

    let mut cleared = Vec::new();
    while let Some(row) = grid.find_completed_row(17, 21) {
        grid.clear_row(row);
        cleared.push(row);
    }

    // Each removal pulls the next full row down into the band.
    assert_eq!(cleared, vec![21, 20, 19]);
    assert_eq!(grid.get(8, 7), Some(Cell::Block(PieceKind::F)));
    assert_eq!(grid.get(20, 2), Some(Cell::Block(PieceKind::P)));
    assert_eq!(grid.get(21, 4), Some(Cell::Block(PieceKind::Y)));
    assert_eq!(grid.occupied(), 3);
    for row in 0..=2 {
        assert!(grid.row(row).iter().all(|c| c.is_empty()));
    }
}

#[test]
fn test_clearing_the_top_row_empties_it() {
    let mut grid = Grid::field();
    fill_row(&mut grid, 0, PieceKind::W);
    grid.clear_row(0);
    assert!(grid.row(0).iter().all(|c| c.is_empty()));
}
