//! Pieces module - tetromino shapes as boolean matrices
//!
//! Each piece is a small matrix of filled cells. Rotation is a matrix
//! transform (transpose, then reverse each row), so pieces turn about their
//! bounding box instead of following a rotation table.

use arrayvec::ArrayVec;

use crate::types::PieceKind;

/// Largest bounding box edge of any tetromino
const MAX_EDGE: usize = 4;

/// Filled-cell matrix of a piece, up to 4x4
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    rows: u8,
    cols: u8,
    bits: [[bool; MAX_EDGE]; MAX_EDGE],
}

impl Shape {
    /// Build a shape from row strings where `#` marks a filled cell
    fn from_rows(rows: &[&str]) -> Self {
        let mut bits = [[false; MAX_EDGE]; MAX_EDGE];
        let mut cols = 0;
        for (r, row) in rows.iter().enumerate() {
            for (c, ch) in row.chars().enumerate() {
                bits[r][c] = ch == '#';
            }
            cols = cols.max(row.len());
        }
        Self {
            rows: rows.len() as u8,
            cols: cols as u8,
            bits,
        }
    }

    /// Spawn orientation of a piece kind
    pub fn of(kind: PieceKind) -> Self {
        match kind {
            PieceKind::I => Self::from_rows(&["####"]),
            PieceKind::L => Self::from_rows(&["..#", "###"]),
            PieceKind::J => Self::from_rows(&["#..", "###"]),
            PieceKind::S => Self::from_rows(&[".##", "##."]),
            PieceKind::Z => Self::from_rows(&["##.", ".##"]),
            PieceKind::O => Self::from_rows(&["##", "##"]),
            PieceKind::T => Self::from_rows(&[".#.", "###"]),
        }
    }

    pub fn rows(&self) -> u8 {
        self.rows
    }

    pub fn cols(&self) -> u8 {
        self.cols
    }

    pub fn is_filled(&self, row: u8, col: u8) -> bool {
        row < self.rows && col < self.cols && self.bits[row as usize][col as usize]
    }

    /// Rotate 90° clockwise: new[r][c] = old[rows - 1 - c][r]
    pub fn rotated_cw(&self) -> Self {
        let mut bits = [[false; MAX_EDGE]; MAX_EDGE];
        for r in 0..self.cols as usize {
            for c in 0..self.rows as usize {
                bits[r][c] = self.bits[self.rows as usize - 1 - c][r];
            }
        }
        Self {
            rows: self.cols,
            cols: self.rows,
            bits,
        }
    }

    /// Offsets (dx, dy) of the filled cells, row-major
    pub fn offsets(&self) -> ArrayVec<(i8, i8), 4> {
        let mut out = ArrayVec::new();
        for r in 0..self.rows {
            for c in 0..self.cols {
                if self.is_filled(r, c) {
                    // Every tetromino has exactly four cells.
                    let _ = out.try_push((c as i8, r as i8));
                }
            }
        }
        out
    }
}

/// The falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub kind: PieceKind,
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a piece at its spawn position: centered horizontally on row 0
    pub fn spawn(kind: PieceKind, board_width: u8) -> Self {
        let shape = Shape::of(kind);
        Self {
            kind,
            shape,
            x: (board_width / 2) as i8 - (shape.cols() / 2) as i8,
            y: 0,
        }
    }

    /// Absolute board coordinates of the piece's cells
    pub fn cells(&self) -> ArrayVec<(i8, i8), 4> {
        self.shape
            .offsets()
            .into_iter()
            .map(|(dx, dy)| (self.x + dx, self.y + dy))
            .collect()
    }

    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}
