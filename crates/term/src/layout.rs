//! Screen geometry: where a game grid sits and which cell a mouse event hits.

use crate::fb::{CellStyle, FrameBuffer};
use crate::types::GridPos;

/// Terminal viewport dimensions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
    pub height: u16,
}

impl Viewport {
    pub fn new(width: u16, height: u16) -> Self {
        Self { width, height }
    }
}

/// Columns reserved right of the frame for the side panel
pub const PANEL_WIDTH: u16 = 18;

/// Gap between the frame and the side panel
const PANEL_GAP: u16 = 2;

/// A bordered grid of `cols x rows` cells, each `cell_w x cell_h` characters.
///
/// `x`/`y` is the top-left corner of the border; cell (0, 0) starts one
/// character inside it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    pub x: u16,
    pub y: u16,
    pub cols: u16,
    pub rows: u16,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl GridLayout {
    /// Center the frame plus side panel in the viewport.
    ///
    /// One row above the frame is kept for the title and one below for help.
    pub fn centered(viewport: Viewport, cols: u16, rows: u16, cell_w: u16, cell_h: u16) -> Self {
        let frame_w = cols * cell_w + 2;
        let frame_h = rows * cell_h + 2;
        let total_w = frame_w + PANEL_GAP + PANEL_WIDTH;
        let x = if total_w <= viewport.width {
            (viewport.width - total_w) / 2
        } else {
            viewport.width.saturating_sub(frame_w) / 2
        };
        let y = (viewport.height.saturating_sub(frame_h) / 2).max(1);
        Self {
            x,
            y,
            cols,
            rows,
            cell_w,
            cell_h,
        }
    }

    pub fn frame_w(&self) -> u16 {
        self.cols * self.cell_w + 2
    }

    pub fn frame_h(&self) -> u16 {
        self.rows * self.cell_h + 2
    }

    /// First column of the side panel
    pub fn panel_x(&self) -> u16 {
        self.x + self.frame_w() + PANEL_GAP
    }

    /// Top-left character of a cell
    pub fn cell_origin(&self, (row, col): GridPos) -> (u16, u16) {
        (
            self.x + 1 + col as u16 * self.cell_w,
            self.y + 1 + row as u16 * self.cell_h,
        )
    }

    /// Cell under a screen position, if any
    pub fn hit_test(&self, (sx, sy): (u16, u16)) -> Option<GridPos> {
        let left = self.x + 1;
        let top = self.y + 1;
        if sx < left || sy < top || self.cell_w == 0 || self.cell_h == 0 {
            return None;
        }
        let col = (sx - left) / self.cell_w;
        let row = (sy - top) / self.cell_h;
        if col >= self.cols || row >= self.rows {
            return None;
        }
        Some((row as u8, col as u8))
    }

    pub fn fill_cell(&self, fb: &mut FrameBuffer, pos: GridPos, ch: char, style: CellStyle) {
        let (px, py) = self.cell_origin(pos);
        fb.fill_rect(px, py, self.cell_w, self.cell_h, ch, style);
    }

    /// Text centered on the middle row of a cell
    pub fn label_cell(&self, fb: &mut FrameBuffer, pos: GridPos, text: &str, style: CellStyle) {
        let (px, py) = self.cell_origin(pos);
        fb.put_str_centered(px, py + self.cell_h / 2, self.cell_w, text, style);
    }

    /// Number centered on the middle row of a cell
    pub fn number_cell(&self, fb: &mut FrameBuffer, pos: GridPos, value: u32, style: CellStyle) {
        let (px, py) = self.cell_origin(pos);
        let w = FrameBuffer::u32_width(value);
        fb.put_u32(px + self.cell_w.saturating_sub(w) / 2, py + self.cell_h / 2, value, style);
    }

    pub fn draw_frame(&self, fb: &mut FrameBuffer, style: CellStyle) {
        fb.draw_box(self.x, self.y, self.frame_w(), self.frame_h(), style);
    }
}
