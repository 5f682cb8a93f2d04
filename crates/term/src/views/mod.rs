//! GameView: draws any running game into a terminal framebuffer.
//!
//! Each game type implements [`View`]; [`GameView`] adds what every screen
//! shares (title, frame, side panel, overlay, help line) and hands back the
//! [`GridLayout`] it used so the host can hit-test mouse events.
//!
//! This module is pure (no I/O). It can be unit-tested.

mod chain;
mod g2048;
mod jigsaw;
mod schulte;
mod snake;
mod tetris;

use std::borrow::Cow;

use crate::core::{ActiveGame, Game};
use crate::fb::{CellStyle, FrameBuffer};
use crate::layout::{GridLayout, Viewport, PANEL_WIDTH};
use crate::palette;

/// Grid dimensions and the size of one cell in characters
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridSpec {
    pub cols: u16,
    pub rows: u16,
    pub cell_w: u16,
    pub cell_h: u16,
}

impl GridSpec {
    pub const fn new(cols: u16, rows: u16, cell_w: u16, cell_h: u16) -> Self {
        Self {
            cols,
            rows,
            cell_w,
            cell_h,
        }
    }
}

/// Drawing hooks of one game type
pub trait View {
    fn grid_spec(&self) -> GridSpec;

    /// Paint every cell inside the frame
    fn draw_grid(&self, fb: &mut FrameBuffer, layout: &GridLayout);

    /// Stats shown right of the frame
    fn draw_panel(&self, panel: &mut Panel<'_>);

    /// Message drawn across the middle of the frame
    fn overlay(&self) -> Option<Cow<'static, str>>;

    /// Key reference shown under the frame
    fn help(&self) -> &'static str;
}

/// Per-screen data that does not live in the game itself
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Hud {
    /// Stored best score, for games that keep one
    pub best: Option<u32>,
}

/// Label/value column right of the game frame.
///
/// Rows past the bottom of the screen are dropped.
pub struct Panel<'a> {
    fb: &'a mut FrameBuffer,
    x: u16,
    y: u16,
    bottom: u16,
}

impl<'a> Panel<'a> {
    pub fn new(fb: &'a mut FrameBuffer, x: u16, y: u16) -> Self {
        let bottom = fb.height();
        Self { fb, x, y, bottom }
    }

    /// Current row, advancing past it
    pub fn next_row(&mut self) -> Option<(&mut FrameBuffer, u16, u16)> {
        if self.y >= self.bottom {
            return None;
        }
        let y = self.y;
        self.y += 1;
        Some((&mut *self.fb, self.x, y))
    }

    pub fn gap(&mut self) {
        self.y = self.y.saturating_add(1);
    }

    fn label(&mut self, label: &str) {
        if let Some((fb, x, y)) = self.next_row() {
            fb.put_str(x, y, label, palette::label());
        }
    }

    pub fn number(&mut self, label: &str, value: u32) {
        self.number_styled(label, value, palette::value());
    }

    pub fn number_styled(&mut self, label: &str, value: u32, style: CellStyle) {
        self.label(label);
        if let Some((fb, x, y)) = self.next_row() {
            fb.put_u32(x, y, value, style);
        }
        self.gap();
    }

    pub fn text(&mut self, label: &str, value: &str) {
        self.text_styled(label, value, palette::value());
    }

    pub fn text_styled(&mut self, label: &str, value: &str, style: CellStyle) {
        self.label(label);
        if let Some((fb, x, y)) = self.next_row() {
            fb.put_str(x, y, value, style);
        }
        self.gap();
    }

    /// `mm:ss`
    pub fn clock(&mut self, label: &str, seconds: u32) {
        self.label(label);
        if let Some((fb, x, y)) = self.next_row() {
            put_two_digits(fb, x, y, seconds / 60);
            fb.put_char(x + 2, y, ':', palette::value());
            put_two_digits(fb, x + 3, y, seconds % 60);
        }
        self.gap();
    }

    /// Seconds with two decimals, e.g. `12.34`
    pub fn seconds(&mut self, label: &str, ms: u32) {
        self.label(label);
        if let Some((fb, x, y)) = self.next_row() {
            let next = fb.put_u32(x, y, ms / 1000, palette::value());
            fb.put_char(next, y, '.', palette::value());
            put_two_digits(fb, next + 1, y, (ms % 1000) / 10);
        }
        self.gap();
    }

    /// `N x N`
    pub fn size(&mut self, label: &str, size: u8) {
        self.label(label);
        if let Some((fb, x, y)) = self.next_row() {
            let next = fb.put_u32(x, y, size as u32, palette::value());
            fb.put_char(next, y, 'x', palette::value());
            fb.put_u32(next + 1, y, size as u32, palette::value());
        }
        self.gap();
    }
}

fn put_two_digits(fb: &mut FrameBuffer, x: u16, y: u16, value: u32) {
    let value = value.min(99);
    fb.put_char(x, y, char::from(b'0' + (value / 10) as u8), palette::value());
    fb.put_char(x + 1, y, char::from(b'0' + (value % 10) as u8), palette::value());
}

/// The drawing hooks of whichever game is running
pub fn view_of(game: &ActiveGame) -> &dyn View {
    match game {
        ActiveGame::Tetris(g) => g,
        ActiveGame::Twenty48(g) => g,
        ActiveGame::Chain(g) => g,
        ActiveGame::Jigsaw(g) => g,
        ActiveGame::Schulte(g) => g,
        ActiveGame::Snake(g) => g,
    }
}

/// Screen-level renderer for a running game.
#[derive(Debug, Clone, Copy, Default)]
pub struct GameView;

impl GameView {
    /// Render into an existing framebuffer; returns where the grid landed.
    ///
    /// Callers reuse one framebuffer across frames and only resize when the
    /// terminal size changes.
    pub fn render_into(
        &self,
        game: &ActiveGame,
        hud: &Hud,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) -> GridLayout {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let view = view_of(game);
        let spec = view.grid_spec();
        let layout = GridLayout::centered(viewport, spec.cols, spec.rows, spec.cell_w, spec.cell_h);

        let title = CellStyle::new(palette::ACCENT, palette::SCREEN_BG).bold();
        fb.put_str(layout.x, layout.y - 1, game.kind().title(), title);

        layout.draw_frame(fb, palette::border());
        view.draw_grid(fb, &layout);

        let panel_x = layout.panel_x();
        if panel_x + PANEL_WIDTH <= viewport.width {
            let mut panel = Panel::new(fb, panel_x, layout.y);
            view.draw_panel(&mut panel);
            if let Some(best) = hud.best {
                match game.score() {
                    Some(score) if score > best => {
                        let style = CellStyle::new(palette::ACCENT, palette::SCREEN_BG).bold();
                        panel.number_styled("NEW BEST", score, style);
                    }
                    _ => panel.number("BEST", best),
                }
            }
        }

        if let Some(text) = view.overlay() {
            let style = CellStyle::new(palette::TEXT_BRIGHT, palette::SCREEN_BG).bold();
            let padded = format!(" {text} ");
            let mid_y = layout.y + layout.frame_h() / 2;
            fb.put_str_centered(layout.x, mid_y, layout.frame_w(), &padded, style);
        }

        let help_y = layout.y + layout.frame_h();
        fb.put_str(layout.x, help_y, view.help(), palette::muted());

        layout
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, game: &ActiveGame, hud: &Hud, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(game, hud, viewport, &mut fb);
        fb
    }
}


#[cfg(test)]
mod tests {
    use super::test_util::screen_text;
    use super::*;
    use crate::core::GameOptions;
    use crate::types::{GameAction, GameKind};

    fn options() -> GameOptions {
        GameOptions {
            seed: 7,
            ..GameOptions::default()
        }
    }

    #[test]
    fn every_game_renders_title_and_help() {
        for kind in GameKind::ALL {
            let game = ActiveGame::new(kind, &options());
            let fb = GameView.render(&game, &Hud::default(), Viewport::new(120, 40));
            let text = screen_text(&fb);
            assert!(text.contains(kind.title()), "{kind:?} title");
            assert!(text.contains(view_of(&game).help()), "{kind:?} help");
        }
    }

    #[test]
    fn grid_fits_inside_a_regular_terminal() {
        for kind in GameKind::ALL {
            let game = ActiveGame::new(kind, &options());
            let spec = view_of(&game).grid_spec();
            let w = spec.cols * spec.cell_w + 2 + 2 + PANEL_WIDTH;
            let h = spec.rows * spec.cell_h + 4;
            assert!(w <= 100 && h <= 40, "{kind:?} needs {w}x{h}");
        }
    }

    #[test]
    fn best_score_is_shown_and_beaten() {
        let game = ActiveGame::new(GameKind::SnakeClassic, &options());
        let hud = Hud { best: Some(12) };
        let text = screen_text(&GameView.render(&game, &hud, Viewport::new(100, 30)));
        assert!(text.contains("BEST"));
        assert!(text.contains("12"));

        let mut game = ActiveGame::new(GameKind::TetrisMarathon, &options());
        game.apply_action(GameAction::HardDrop);
        let hud = Hud { best: Some(1) };
        let text = screen_text(&GameView.render(&game, &hud, Viewport::new(100, 30)));
        assert!(text.contains("NEW BEST"));
    }

    #[test]
    fn tiny_viewport_does_not_panic() {
        for kind in GameKind::ALL {
            let game = ActiveGame::new(kind, &options());
            let mut fb = FrameBuffer::new(1, 1);
            GameView.render_into(&game, &Hud::default(), Viewport::new(5, 3), &mut fb);
            assert_eq!(fb.width(), 5);
        }
    }

    #[test]
    fn panel_formats_clock_and_seconds() {
        let mut fb = FrameBuffer::new(20, 10);
        let mut panel = Panel::new(&mut fb, 0, 0);
        panel.clock("TIME", 125);
        panel.seconds("SECS", 4071);
        let text = screen_text(&fb);
        assert!(text.contains("02:05"));
        assert!(text.contains("4.07"));
    }
}
