//! PortalView: the catalog browser screen.

use crate::fb::{CellStyle, FrameBuffer};
use crate::layout::Viewport;
use crate::palette::{self, ACCENT, CURSOR_BG, MUTED, SCREEN_BG, TEXT_BRIGHT};
use crate::portal::{GameRecord, HighScores, PortalMenu};

/// Rows taken by one game entry, including the spacer
const CARD_H: u16 = 3;
/// Rows above the list: title, blank, search/filter line, blank
const HEADER_H: u16 = 4;
const MAX_LIST_W: u16 = 72;

const HELP: &str = "type to search  ↑↓ select  enter play  tab category  ^F featured  ^U clear  esc quit";

#[derive(Debug, Clone, Copy, Default)]
pub struct PortalView;

impl PortalView {
    pub fn render_into(
        &self,
        menu: &PortalMenu,
        scores: &HighScores,
        viewport: Viewport,
        fb: &mut FrameBuffer,
    ) {
        fb.resize(viewport.width, viewport.height);
        fb.clear(CellStyle::default().into_cell(' '));

        let list_w = viewport.width.saturating_sub(4).min(MAX_LIST_W);
        let x = viewport.width.saturating_sub(list_w) / 2;

        let title = CellStyle::new(ACCENT, SCREEN_BG).bold();
        fb.put_str_centered(0, 0, viewport.width, "M I N I G A M E S", title);

        self.draw_filters(menu, fb, x, 2, list_w);

        let visible = menu.visible();
        let list_top = HEADER_H;
        let list_h = viewport.height.saturating_sub(list_top + 1);
        if visible.is_empty() {
            fb.put_str_centered(x, list_top + 1, list_w, "No games match", palette::muted());
        } else {
            let per_page = (list_h / CARD_H).max(1) as usize;
            let first = menu.selected_index().saturating_sub(per_page - 1);
            for (slot, (index, record)) in visible
                .iter()
                .enumerate()
                .skip(first)
                .take(per_page)
                .enumerate()
            {
                let y = list_top + slot as u16 * CARD_H;
                let selected = index == menu.selected_index();
                self.draw_card(record, scores, selected, fb, x, y, list_w);
            }
        }

        let help_y = viewport.height.saturating_sub(1);
        fb.put_str_centered(0, help_y, viewport.width, HELP, palette::muted());
    }

    /// Convenience helper that allocates a new framebuffer.
    pub fn render(&self, menu: &PortalMenu, scores: &HighScores, viewport: Viewport) -> FrameBuffer {
        let mut fb = FrameBuffer::new(viewport.width, viewport.height);
        self.render_into(menu, scores, viewport, &mut fb);
        fb
    }

    fn draw_filters(&self, menu: &PortalMenu, fb: &mut FrameBuffer, x: u16, y: u16, w: u16) {
        let mut cx = fb.put_str(x, y, "Search: ", palette::label());
        cx = fb.put_str(cx, y, menu.query(), CellStyle::new(TEXT_BRIGHT, SCREEN_BG));
        fb.put_char(cx, y, '▏', CellStyle::new(ACCENT, SCREEN_BG));

        let category = menu.category_label();
        let featured = if menu.featured_only() { "  ★ only" } else { "" };
        let right_w = 10 + category.chars().count() as u16 + featured.chars().count() as u16;
        let rx = (x + w).saturating_sub(right_w);
        let mut rx = fb.put_str(rx, y, "Category: ", palette::label());
        rx = fb.put_str(rx, y, category, palette::value());
        fb.put_str(rx, y, featured, CellStyle::new(ACCENT, SCREEN_BG));
    }

    #[allow(clippy::too_many_arguments)]
    fn draw_card(
        &self,
        record: &GameRecord,
        scores: &HighScores,
        selected: bool,
        fb: &mut FrameBuffer,
        x: u16,
        y: u16,
        w: u16,
    ) {
        let bg = if selected { CURSOR_BG } else { SCREEN_BG };
        fb.fill_rect(x, y, w, 2, ' ', CellStyle::new(TEXT_BRIGHT, bg));

        let marker = if selected { "▶ " } else { "  " };
        let mut cx = fb.put_str(x, y, marker, CellStyle::new(ACCENT, bg));
        cx = fb.put_str(cx, y, &record.title, CellStyle::new(TEXT_BRIGHT, bg).bold());
        if record.is_featured() {
            cx = fb.put_str(cx, y, " ★", CellStyle::new(ACCENT, bg));
        }
        fb.put_str(cx + 2, y, &record.category, CellStyle::new(MUTED, bg));

        let best = record
            .game_kind()
            .ok()
            .and_then(|kind| kind.highscore_key())
            .map(|key| scores.get(key))
            .filter(|&best| best > 0);
        if let Some(best) = best {
            let label_x = (x + w).saturating_sub(6 + FrameBuffer::u32_width(best));
            let next = fb.put_str(label_x, y, "best ", CellStyle::new(MUTED, bg));
            fb.put_u32(next, y, best, CellStyle::new(ACCENT, bg));
        }

        let desc_w = w.saturating_sub(4) as usize;
        let desc: String = record.description.chars().take(desc_w).collect();
        fb.put_str(x + 2, y + 1, &desc, CellStyle::new(palette::TEXT, bg).dim());
    }
}
