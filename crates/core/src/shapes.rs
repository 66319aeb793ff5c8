//! Shapes module - static geometry table for every (kind, rotation)
//!
//! Each kind has one base shape (its North orientation), written as
//! `(d_row, d_col)` offsets around the anchor inside a 5x5 window
//! (`-2..=2` on both axes). The other three orientations are derived at
//! compile time by successive clockwise quarter turns about the anchor, so
//! rotating a piece never mutates data: it only selects a different entry.
//! Kinds with fewer distinct orientations still get four entries.

use crate::types::{PieceKind, Rotation, PIECE_WINDOW};

/// Offset of a single cell relative to the piece anchor: (d_row, d_col)
pub type Offset = (i8, i8);

/// Up to five cell offsets
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Shape {
    offsets: [Offset; PIECE_WINDOW],
    len: u8,
}

impl Shape {
    const EMPTY: Shape = Shape {
        offsets: [(0, 0); PIECE_WINDOW],
        len: 0,
    };

    const fn new(cells: &[Offset]) -> Self {
        let mut offsets = [(0, 0); PIECE_WINDOW];
        let mut i = 0;
        while i < cells.len() {
            offsets[i] = cells[i];
            i += 1;
        }
        Self {
            offsets,
            len: cells.len() as u8,
        }
    }

    /// Quarter turn clockwise about the anchor: (r, c) -> (c, -r)
    const fn rotated_cw(self) -> Self {
        let mut out = self;
        let mut i = 0;
        while i < self.len as usize {
            let (r, c) = self.offsets[i];
            out.offsets[i] = (c, -r);
            i += 1;
        }
        out
    }

    pub fn offsets(&self) -> &[Offset] {
        &self.offsets[..self.len as usize]
    }

    pub fn len(&self) -> usize {
        self.len as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }
}

/// North orientation of each kind, in `PieceKind::ALL` order
const BASE_SHAPES: [Shape; PieceKind::COUNT] = [
    // F      .##
    //        ##.
    //        .#.
    Shape::new(&[(-1, 0), (-1, 1), (0, -1), (0, 0), (1, 0)]),
    // F'     ##.
    //        .##
    //        .#.
    Shape::new(&[(-1, -1), (-1, 0), (0, 0), (0, 1), (1, 0)]),
    // I      five tall
    Shape::new(&[(-2, 0), (-1, 0), (0, 0), (1, 0), (2, 0)]),
    // L      four tall, foot to the right
    Shape::new(&[(-2, 0), (-1, 0), (0, 0), (1, 0), (1, 1)]),
    // L'     four tall, foot to the left
    Shape::new(&[(-2, 0), (-1, 0), (0, 0), (1, 0), (1, -1)]),
    // N      .#
    //        .#
    //        ##
    //        #.
    Shape::new(&[(-2, 0), (-1, 0), (0, 0), (0, -1), (1, -1)]),
    // N'
    Shape::new(&[(-2, 0), (-1, 0), (0, 0), (0, 1), (1, 1)]),
    // P      ##
    //        ##
    //        #.
    Shape::new(&[(-1, 0), (-1, 1), (0, 0), (0, 1), (1, 0)]),
    // P'
    Shape::new(&[(-1, -1), (-1, 0), (0, -1), (0, 0), (1, 0)]),
    // T      ###
    //        .#.
    //        .#.
    Shape::new(&[(-1, -1), (-1, 0), (-1, 1), (0, 0), (1, 0)]),
    // U      #.#
    //        ###
    Shape::new(&[(-1, -1), (-1, 1), (0, -1), (0, 0), (0, 1)]),
    // W      #..
    //        ##.
    //        .##
    Shape::new(&[(-1, -1), (0, -1), (0, 0), (1, 0), (1, 1)]),
    // Y      .#
    //        ##
    //        .#
    //        .#
    Shape::new(&[(-2, 0), (-1, -1), (-1, 0), (0, 0), (1, 0)]),
    // Y'
    Shape::new(&[(-2, 0), (-1, 0), (-1, 1), (0, 0), (1, 0)]),
    // I4     four tall
    Shape::new(&[(-1, 0), (0, 0), (1, 0), (2, 0)]),
];

const fn build_table() -> [[Shape; 4]; PieceKind::COUNT] {
    let mut table = [[Shape::EMPTY; 4]; PieceKind::COUNT];
    let mut k = 0;
    while k < PieceKind::COUNT {
        let mut shape = BASE_SHAPES[k];
        let mut r = 0;
        while r < 4 {
            table[k][r] = shape;
            shape = shape.rotated_cw();
            r += 1;
        }
        k += 1;
    }
    table
}

static SHAPES: [[Shape; 4]; PieceKind::COUNT] = build_table();

/// Get the cell offsets for a kind in a given rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> &'static Shape {
    &SHAPES[kind.index()][rotation.index()]
}
