use std::borrow::Cow;

use super::{GridSpec, Panel, View};
use crate::core::{RandomSource, Snake};
use crate::fb::{CellStyle, FrameBuffer};
use crate::layout::GridLayout;
use crate::palette::{SNAKE_BG, SNAKE_BODY, SNAKE_BONUS, SNAKE_FOOD, SNAKE_HEAD};
use crate::types::{GameStatus, SNAKE_GRID};

/// Bonus food blinks during its last second
const BLINK_FROM_MS: u32 = 1000;

fn to_grid((x, y): (i16, i16)) -> Option<(u8, u8)> {
    let inside = (0..SNAKE_GRID).contains(&x) && (0..SNAKE_GRID).contains(&y);
    inside.then_some((y as u8, x as u8))
}

impl<R: RandomSource> View for Snake<R> {
    fn grid_spec(&self) -> GridSpec {
        GridSpec::new(SNAKE_GRID as u16, SNAKE_GRID as u16, 2, 1)
    }

    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &GridLayout) {
        let empty = CellStyle::new(SNAKE_BG, SNAKE_BG);
        for row in 0..SNAKE_GRID as u8 {
            for col in 0..SNAKE_GRID as u8 {
                layout.fill_cell(fb, (row, col), ' ', empty);
            }
        }

        if let Some(pos) = self.food().and_then(to_grid) {
            layout.fill_cell(fb, pos, '█', CellStyle::new(SNAKE_FOOD, SNAKE_BG));
        }
        if let Some(bonus) = self.bonus() {
            let blink_off = bonus.remaining_ms < BLINK_FROM_MS && (bonus.remaining_ms / 125) % 2 == 1;
            if let Some(pos) = to_grid(bonus.pos).filter(|_| !blink_off) {
                layout.fill_cell(fb, pos, '█', CellStyle::new(SNAKE_BONUS, SNAKE_BG));
            }
        }

        let head = self.head();
        for &segment in self.body() {
            let Some(pos) = to_grid(segment) else {
                continue;
            };
            let color = if segment == head { SNAKE_HEAD } else { SNAKE_BODY };
            layout.fill_cell(fb, pos, '█', CellStyle::new(color, SNAKE_BG));
        }
    }

    fn draw_panel(&self, panel: &mut Panel<'_>) {
        panel.number("SCORE", self.score());
        panel.number("LENGTH", self.len() as u32);
        panel.number("SPEED", self.speed());
        if let Some(bonus) = self.bonus() {
            let style = CellStyle::new(SNAKE_BONUS, crate::palette::SCREEN_BG).bold();
            panel.number_styled("BONUS", bonus.remaining_ms.div_ceil(1000), style);
        }
    }

    fn overlay(&self) -> Option<Cow<'static, str>> {
        match self.status() {
            GameStatus::Ready => Some("PRESS ENTER".into()),
            GameStatus::Paused => Some("PAUSED".into()),
            GameStatus::GameOver => Some("GAME OVER".into()),
            GameStatus::Won => Some("YOU WIN".into()),
            GameStatus::Playing => None,
        }
    }

    fn help(&self) -> &'static str {
        "arrows steer  space pause  + - speed  r restart  esc menu"
    }
}
