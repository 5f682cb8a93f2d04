use std::borrow::Cow;

use super::{GridSpec, Panel, View};
use crate::core::tetris::Shape;
use crate::core::{RandomSource, Ruleset, Tetris};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::GridLayout;
use crate::palette::{self, piece_color, BOARD_BG, GRID_DOT};
use crate::types::PieceKind;

fn block(kind: PieceKind) -> CellStyle {
    CellStyle::new(piece_color(kind), BOARD_BG).bold()
}

impl<R: RandomSource> View for Tetris<R> {
    fn grid_spec(&self) -> GridSpec {
        // 2x1 helps compensate for typical terminal glyph aspect ratio.
        GridSpec::new(self.board().width() as u16, self.board().height() as u16, 2, 1)
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &GridLayout) {
        let board = self.board();
        let empty = CellStyle::new(GRID_DOT, BOARD_BG).dim();
        for y in 0..board.height() {
            for x in 0..board.width() {
                match board.get(x as i8, y as i8).flatten() {
                    Some(kind) => layout.fill_cell(fb, (y, x), '█', block(kind)),
                    None => layout.fill_cell(fb, (y, x), '·', empty),
                }
            }
        }

        let Some(active) = self.active() else {
            return;
        };
        let in_bounds =
            |x: i8, y: i8| x >= 0 && y >= 0 && (x as u8) < board.width() && (y as u8) < board.height();

        if let Some(ghost_y) = self.ghost_y() {
            let ghost = CellStyle::new(Rgb::new(140, 140, 140), BOARD_BG).dim();
            for (x, y) in active.shifted(0, ghost_y - active.y).cells() {
                if in_bounds(x, y) && !board.is_occupied(x, y) {
                    layout.fill_cell(fb, (y as u8, x as u8), '░', ghost);
                }
            }
        }

        for (x, y) in active.cells() {
            if in_bounds(x, y) {
                layout.fill_cell(fb, (y as u8, x as u8), '█', block(active.kind));
            }
        }
    }

    fn draw_panel(&self, panel: &mut Panel<'_>) {
        panel.number("SCORE", self.score());
        if self.ruleset() == Ruleset::Marathon {
            panel.number("LEVEL", self.level());
        }
        panel.number("LINES", self.lines());

        let next = self.next_piece();
        let shape = Shape::of(next);
        if let Some((fb, x, y)) = panel.next_row() {
            fb.put_str(x, y, "NEXT", palette::label());
        }
        for row in 0..shape.rows() {
            let Some((fb, x, y)) = panel.next_row() else {
                return;
            };
            for col in 0..shape.cols() {
                if shape.is_filled(row, col) {
                    let style = CellStyle::new(piece_color(next), palette::SCREEN_BG);
                    fb.put_str(x + col as u16 * 2, y, "██", style);
                }
            }
        }
        panel.gap();
    }

    fn overlay(&self) -> Option<Cow<'static, str>> {
        if self.game_over() {
            Some("GAME OVER".into())
        } else if self.paused() {
            Some("PAUSED".into())
        } else {
            None
        }
    }

    fn help(&self) -> &'static str {
        match self.ruleset() {
            Ruleset::Classic => "←→ move  ↑ rotate  ↓ drop  p pause  r restart  esc menu",
            Ruleset::Marathon => {
                "←→ move  ↑ rotate  ↓ drop  space hard drop  p pause  r restart  esc menu"
            }
        }
    }
}
