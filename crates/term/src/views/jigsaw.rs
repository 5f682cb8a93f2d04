use std::borrow::Cow;

use super::{GridSpec, Panel, View};
use crate::core::{Jigsaw, PuzzleMode, RandomSource};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::GridLayout;
use crate::palette::{ACCENT, BOARD_BG, CURSOR_BG, SUCCESS, TEXT_BRIGHT};
use crate::types::{GameStatus, GridPos};

/// Color of a piece of the picture, by its solved position.
///
/// Neighbouring pieces get neighbouring shades so the picture reads as a
/// gradient once assembled.
fn picture_color((row, col): GridPos, size: u8) -> Rgb {
    let span = size.saturating_sub(1).max(1) as u32;
    let r = 60 + col as u32 * 140 / span;
    let g = 50 + row as u32 * 120 / span;
    Rgb::new(r as u8, g as u8, 150)
}

impl<R: RandomSource> View for Jigsaw<R> {
    fn grid_spec(&self) -> GridSpec {
        let n = self.size() as u16;
        GridSpec::new(n, n, 6, 3)
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &GridLayout) {
        let cursor = self.cursor().pos();
        let pending = self.pending();
        let solved = self.status() == GameStatus::Won;
        let tiles = self.tiles();

        for row in 0..self.size() {
            for col in 0..self.size() {
                let pos = (row, col);
                let Some(id) = self.tile_at(pos) else {
                    let bg = if pos == cursor { CURSOR_BG } else { BOARD_BG };
                    layout.fill_cell(fb, pos, ' ', CellStyle::new(BOARD_BG, bg));
                    continue;
                };
                let tile = tiles[id];
                let bg = if pending == Some(pos) {
                    ACCENT
                } else if pos == cursor && !solved {
                    CURSOR_BG
                } else {
                    picture_color(tile.correct, self.size())
                };
                let fg = if tile.in_place() { SUCCESS } else { TEXT_BRIGHT };

                layout.fill_cell(fb, pos, ' ', CellStyle::new(fg, bg));
                layout.number_cell(fb, pos, id as u32 + 1, CellStyle::new(fg, bg).bold());
            }
        }
    }

    fn draw_panel(&self, panel: &mut Panel<'_>) {
        panel.number("MOVES", self.moves());
        panel.clock("TIME", self.seconds());
        panel.size("SIZE", self.size());
        let mode = match self.mode() {
            PuzzleMode::Sliding => "Sliding",
            PuzzleMode::Swap => "Swap",
        };
        panel.text("MODE", mode);
    }

    fn overlay(&self) -> Option<Cow<'static, str>> {
        (self.status() == GameStatus::Won).then(|| "SOLVED!".into())
    }

    fn help(&self) -> &'static str {
        match self.mode() {
            PuzzleMode::Sliding => "click a tile next to the gap  enter slide  [ ] size  r shuffle",
            PuzzleMode::Swap => "click two tiles or drag one onto another  [ ] size  r shuffle",
        }
    }
}
