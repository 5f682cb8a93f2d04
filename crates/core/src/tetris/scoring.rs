//! Scoring module - line clear points and gravity for both rulesets

use crate::types::{
    CLASSIC_LINE_POINTS, DROP_INTERVALS, DROP_INTERVAL_FLOOR_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Classic scoring: lines squared times ten
///
/// One line = 10, two = 40, three = 90, four = 160.
pub fn classic_line_score(lines: u32) -> u32 {
    lines * lines * CLASSIC_LINE_POINTS
}

/// Marathon scoring: Nintendo table scaled by (level + 1)
pub fn marathon_line_score(lines: u32, level: u32) -> u32 {
    let idx = (lines as usize).min(LINE_SCORES.len() - 1);
    LINE_SCORES[idx] * (level + 1)
}

/// Points for cells dropped manually
pub fn drop_score(cells: u32, is_hard_drop: bool) -> u32 {
    if is_hard_drop {
        cells * 2
    } else {
        cells
    }
}

/// Level reached after clearing `total_lines`
pub fn level_for_lines(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL
}

/// Gravity interval for a Marathon level
pub fn drop_interval_ms(level: u32) -> u32 {
    DROP_INTERVALS
        .get(level as usize)
        .copied()
        .unwrap_or(DROP_INTERVAL_FLOOR_MS)
}
