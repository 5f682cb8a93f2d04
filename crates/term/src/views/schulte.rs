use std::borrow::Cow;

use super::{GridSpec, Panel, View};
use crate::core::{RandomSource, Schulte};
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::GridLayout;
use crate::palette::{BOARD_BG, CURSOR_BG, ERROR_BG, SCHULTE_PALETTE};
use crate::types::GameStatus;

const FOUND_BG: Rgb = Rgb::new(25, 70, 40);

impl<R: RandomSource> View for Schulte<R> {
    fn grid_spec(&self) -> GridSpec {
        let n = self.size() as u16;
        GridSpec::new(n, n, 5, 2)
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &GridLayout) {
        let cursor = self.cursor().pos();
        let error = self.error_cell();
        for row in 0..self.size() {
            for col in 0..self.size() {
                let pos = (row, col);
                let Some(cell) = self.cell(pos) else {
                    continue;
                };
                let bg = if error == Some(pos) {
                    ERROR_BG
                } else if pos == cursor {
                    CURSOR_BG
                } else if cell.found && self.highlight() {
                    FOUND_BG
                } else {
                    BOARD_BG
                };
                let fg = SCHULTE_PALETTE[cell.color as usize % SCHULTE_PALETTE.len()];
                layout.fill_cell(fb, pos, ' ', CellStyle::new(fg, bg));
                layout.number_cell(fb, pos, cell.number as u32, CellStyle::new(fg, bg).bold());
            }
        }
    }

    fn draw_panel(&self, panel: &mut Panel<'_>) {
        if self.finished() {
            panel.text("NEXT", "-");
        } else {
            panel.number("NEXT", self.current() as u32);
        }
        panel.seconds("TIME", self.elapsed_ms());
        panel.size("SIZE", self.size());
        panel.text("HIGHLIGHT", if self.highlight() { "On" } else { "Off" });
    }

    fn overlay(&self) -> Option<Cow<'static, str>> {
        (self.status() == GameStatus::Won).then(|| "ALL FOUND!".into())
    }

    fn help(&self) -> &'static str {
        "click numbers in order  enter pick  t highlight  [ ] size  r new table"
    }
}

#[cfg(test)]
mod tests {
    use super::super::test_util::screen_text;
    use super::*;
    use crate::core::Sequence;
    use crate::layout::Viewport;

    fn render(game: &Schulte<Sequence>) -> (FrameBuffer, GridLayout) {
        let spec = game.grid_spec();
        let layout = GridLayout::centered(Viewport::new(80, 30), spec.cols, spec.rows, 5, 2);
        let mut fb = FrameBuffer::new(80, 30);
        game.draw_grid(&mut fb, &layout);
        (fb, layout)
    }

    #[test]
    fn every_number_is_drawn_in_its_color() {
        let game = Schulte::with_rng(3, Sequence::new(vec![4, 1, 3]));
        let (fb, layout) = render(&game);
        let text = screen_text(&fb);
        for n in 1..=9u16 {
            assert!(text.contains(&n.to_string()));
            let pos = game.position_of(n).unwrap();
            let (px, py) = layout.cell_origin(pos);
            let digit = fb.get(px + 2, py + 1).unwrap();
            assert_eq!(digit.ch, char::from(b'0' + n as u8));
            let color = game.cell(pos).unwrap().color as usize;
            assert_eq!(digit.style.fg, SCHULTE_PALETTE[color]);
        }
    }

    #[test]
    fn wrong_pick_flashes_red() {
        let mut game = Schulte::with_rng(3, Sequence::new(vec![4, 1, 3]));
        game.select(game.position_of(1).unwrap());
        let wrong = game.position_of(5).unwrap();
        assert!(game.select(wrong));
        let (fb, layout) = render(&game);
        let (px, py) = layout.cell_origin(wrong);
        assert_eq!(fb.get(px, py).unwrap().style.bg, ERROR_BG);
    }

    #[test]
    fn panel_shows_two_decimal_timer() {
        let mut game = Schulte::with_rng(3, Sequence::new(vec![4, 1, 3]));
        game.select(game.position_of(1).unwrap());
        game.tick(1234);
        let mut fb = FrameBuffer::new(20, 20);
        let mut panel = Panel::new(&mut fb, 0, 0);
        game.draw_panel(&mut panel);
        let text = screen_text(&fb);
        assert!(text.contains("1.23"));
        assert!(text.contains("Off"));
    }
}
