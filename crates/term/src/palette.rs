//! Colors shared by the views.

use crate::fb::{CellStyle, Rgb};
use crate::types::PieceKind;

pub const SCREEN_BG: Rgb = Rgb::new(0, 0, 0);
pub const BOARD_BG: Rgb = Rgb::new(30, 30, 40);
pub const GRID_DOT: Rgb = Rgb::new(90, 90, 100);
pub const BORDER: Rgb = Rgb::new(200, 200, 200);
pub const TEXT: Rgb = Rgb::new(200, 200, 200);
pub const TEXT_BRIGHT: Rgb = Rgb::new(255, 255, 255);
pub const MUTED: Rgb = Rgb::new(120, 120, 130);
pub const ACCENT: Rgb = Rgb::new(250, 200, 80);
pub const CURSOR_BG: Rgb = Rgb::new(70, 70, 95);
pub const ERROR_BG: Rgb = Rgb::new(150, 30, 30);
pub const SUCCESS: Rgb = Rgb::new(80, 200, 120);

pub const fn piece_color(kind: PieceKind) -> Rgb {
    match kind {
        PieceKind::I => Rgb::new(80, 220, 220),
        PieceKind::O => Rgb::new(240, 220, 80),
        PieceKind::T => Rgb::new(200, 120, 220),
        PieceKind::S => Rgb::new(100, 220, 120),
        PieceKind::Z => Rgb::new(220, 80, 80),
        PieceKind::J => Rgb::new(80, 120, 220),
        PieceKind::L => Rgb::new(255, 165, 0),
    }
}

/// Tile background and digit color for a 2048 value
pub fn tile_colors(value: u32) -> (Rgb, Rgb) {
    let dark = Rgb::new(119, 110, 101);
    let light = Rgb::new(249, 246, 242);
    match value {
        2 => (Rgb::new(238, 228, 218), dark),
        4 => (Rgb::new(237, 224, 200), dark),
        8 => (Rgb::new(242, 177, 121), light),
        16 => (Rgb::new(245, 149, 99), light),
        32 => (Rgb::new(246, 124, 95), light),
        64 => (Rgb::new(246, 94, 59), light),
        128 => (Rgb::new(237, 207, 114), light),
        256 => (Rgb::new(237, 204, 97), light),
        512 => (Rgb::new(237, 200, 80), light),
        1024 => (Rgb::new(237, 197, 63), light),
        2048 => (Rgb::new(237, 194, 46), light),
        _ => (Rgb::new(60, 58, 50), light),
    }
}

pub const EMPTY_TILE: Rgb = Rgb::new(205, 193, 180);
pub const G2048_BG: Rgb = Rgb::new(187, 173, 160);

/// Chain Reaction players 1..=6
pub const PLAYER_COLORS: [Rgb; 6] = [
    Rgb::new(239, 68, 68),
    Rgb::new(59, 130, 246),
    Rgb::new(34, 197, 94),
    Rgb::new(234, 179, 8),
    Rgb::new(168, 85, 247),
    Rgb::new(236, 72, 153),
];

pub fn player_color(player: u8) -> Rgb {
    let i = (player.max(1) - 1) as usize % PLAYER_COLORS.len();
    PLAYER_COLORS[i]
}

/// Schulte digit colors, indexed by `SchulteCell::color`
pub const SCHULTE_PALETTE: [Rgb; 6] = [
    Rgb::new(0xE5, 0x39, 0x35),
    Rgb::new(0x1E, 0x88, 0xE5),
    Rgb::new(0x43, 0xA0, 0x47),
    Rgb::new(0xFD, 0xD8, 0x35),
    Rgb::new(0x8E, 0x24, 0xAA),
    Rgb::new(0x39, 0x49, 0xAB),
];

pub const SNAKE_BG: Rgb = Rgb::new(0x11, 0x18, 0x27);
pub const SNAKE_BODY: Rgb = Rgb::new(0x38, 0xE0, 0x7B);
pub const SNAKE_HEAD: Rgb = Rgb::new(0x5C, 0xE6, 0x8F);
pub const SNAKE_FOOD: Rgb = Rgb::new(0xEF, 0x44, 0x44);
pub const SNAKE_BONUS: Rgb = Rgb::new(251, 191, 36);

pub const fn label() -> CellStyle {
    CellStyle::new(Rgb::new(220, 220, 220), SCREEN_BG).bold()
}

pub const fn value() -> CellStyle {
    CellStyle::new(TEXT, SCREEN_BG)
}

pub const fn muted() -> CellStyle {
    CellStyle::new(MUTED, SCREEN_BG)
}

pub const fn border() -> CellStyle {
    CellStyle::new(BORDER, SCREEN_BG)
}
