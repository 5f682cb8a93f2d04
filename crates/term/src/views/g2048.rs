use std::borrow::Cow;

use super::{GridSpec, Panel, View};
use crate::core::{RandomSource, Twenty48};
use crate::fb::{CellStyle, FrameBuffer};
use crate::layout::GridLayout;
use crate::palette::{tile_colors, EMPTY_TILE, G2048_BG};
use crate::types::G2048_SIZE;

const CELL_W: u16 = 8;
const CELL_H: u16 = 3;

impl<R: RandomSource> View for Twenty48<R> {
    fn grid_spec(&self) -> GridSpec {
        GridSpec::new(G2048_SIZE as u16, G2048_SIZE as u16, CELL_W, CELL_H)
    }

    /// Tiles are inset one column on each side so neighbours stay apart
    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &GridLayout) {
        let gap = CellStyle::new(G2048_BG, G2048_BG);
        for (r, row) in self.grid().iter().enumerate() {
            for (c, tile) in row.iter().enumerate() {
                let pos = (r as u8, c as u8);
                layout.fill_cell(fb, pos, ' ', gap);

                let (px, py) = layout.cell_origin(pos);
                let Some(tile) = tile else {
                    let empty = CellStyle::new(EMPTY_TILE, EMPTY_TILE);
                    fb.fill_rect(px + 1, py, CELL_W - 2, CELL_H, ' ', empty);
                    continue;
                };
                let (bg, fg) = tile_colors(tile.value);
                let mut style = CellStyle::new(fg, bg);
                if tile.merged {
                    style = style.bold();
                }
                fb.fill_rect(px + 1, py, CELL_W - 2, CELL_H, ' ', CellStyle::new(fg, bg));
                layout.number_cell(fb, pos, tile.value, style);
            }
        }
    }

    fn draw_panel(&self, panel: &mut Panel<'_>) {
        panel.number("SCORE", self.score());
        panel.number("MOVES", self.moves());
        panel.number("TILE", self.highest_tile());
    }

    fn overlay(&self) -> Option<Cow<'static, str>> {
        self.status().is_finished().then(|| "GAME OVER".into())
    }

    fn help(&self) -> &'static str {
        "arrows or mouse swipe slide  r restart  esc menu"
    }
}
