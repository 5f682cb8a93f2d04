use std::borrow::Cow;

use super::{GridSpec, Panel, View};
use crate::core::ChainReaction;
use crate::fb::{CellStyle, FrameBuffer, Rgb};
use crate::layout::GridLayout;
use crate::palette::{self, player_color, BOARD_BG, CURSOR_BG, GRID_DOT};

fn darken(c: Rgb) -> Rgb {
    Rgb::new(c.r / 3, c.g / 3, c.b / 3)
}

impl View for ChainReaction {
    fn grid_spec(&self) -> GridSpec {
        let n = self.size() as u16;
        GridSpec::new(n, n, 4, 2)
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &GridLayout) {
        let cursor = self.cursor().pos();
        for row in 0..self.size() {
            for col in 0..self.size() {
                let Some(cell) = self.cell(row, col) else {
                    continue;
                };
                let pos = (row, col);
                let bg = if pos == cursor { CURSOR_BG } else { BOARD_BG };
                layout.fill_cell(fb, pos, ' ', CellStyle::new(GRID_DOT, bg));

                let (fg, text) = match (cell.owner, cell.orbs) {
                    (None, _) | (_, 0) => (GRID_DOT, "·"),
                    (Some(p), 1) => (player_color(p), "●"),
                    (Some(p), 2) => (player_color(p), "●●"),
                    (Some(p), _) => (player_color(p), "●●●"),
                };
                let mut style = CellStyle::new(fg, bg);
                if cell.orbs + 1 >= cell.capacity {
                    style = style.bold();
                }
                layout.label_cell(fb, pos, text, style);
            }
        }

        // orbs still travelling: mark their destination
        for transfer in self.transfers_in_flight() {
            let (px, py) = layout.cell_origin(transfer.to);
            let color = player_color(transfer.player);
            fb.put_char(px, py, '◦', CellStyle::new(color, darken(color)));
        }
    }

    fn draw_panel(&self, panel: &mut Panel<'_>) {
        let turn = player_color(self.current_player());
        let name = format!("P{}", self.current_player());
        panel.text_styled("TURN", &name, CellStyle::new(turn, palette::SCREEN_BG).bold());

        if let Some((fb, x, y)) = panel.next_row() {
            fb.put_str(x, y, "ORBS", palette::label());
        }
        for player in 1..=self.players() {
            let Some((fb, x, y)) = panel.next_row() else {
                return;
            };
            let orbs = self.score_of(player);
            let mut style = CellStyle::new(player_color(player), palette::SCREEN_BG);
            if orbs == 0 && self.total_orbs() >= self.players() as u32 {
                style = style.dim();
            }
            fb.put_char(x, y, 'P', style);
            fb.put_u32(x + 1, y, player as u32, style);
            fb.put_u32(x + 4, y, orbs, style);
        }
        panel.gap();
    }

    fn overlay(&self) -> Option<Cow<'static, str>> {
        self.winner()
            .map(|player| format!("PLAYER {player} WINS").into())
    }

    fn help(&self) -> &'static str {
        "arrows move  enter or click place  r restart  esc menu"
    }
}
