//! Schulte table: find the numbers 1..=N² in order as fast as possible

use tracing::info;

use crate::rng::{RandomSource, SimpleRng};
use crate::types::{
    Cursor, GameAction, GameStatus, GridPos, SCHULTE_COLORS, SCHULTE_DEFAULT_SIZE,
    SCHULTE_ERROR_FLASH_MS, SCHULTE_MAX_SIZE, SCHULTE_MIN_SIZE,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SchulteCell {
    pub number: u16,
    /// Index into the display palette
    pub color: u8,
    pub found: bool,
}

#[derive(Debug, Clone)]
pub struct Schulte<R: RandomSource = SimpleRng> {
    size: u8,
    cells: Vec<SchulteCell>,
    /// Next number to find
    current: u16,
    started: bool,
    elapsed_ms: u32,
    /// Cell showing a wrong pick, with the time left on the flash
    error: Option<(GridPos, u32)>,
    highlight: bool,
    cursor: Cursor,
    rng: R,
}

impl Schulte<SimpleRng> {
    pub fn new(size: u8, seed: u32) -> Self {
        Self::with_rng(size, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Schulte<R> {
    pub fn with_rng(size: u8, rng: R) -> Self {
        let size = size.clamp(SCHULTE_MIN_SIZE, SCHULTE_MAX_SIZE);
        let mut table = Self {
            size,
            cells: Vec::new(),
            current: 1,
            started: false,
            elapsed_ms: 0,
            error: None,
            highlight: false,
            cursor: Cursor::new(size, size),
            rng,
        };
        table.restart();
        table
    }

    /// New shuffled grid; the highlight setting is kept
    pub fn restart(&mut self) {
        let total = self.size as u16 * self.size as u16;
        let mut numbers: Vec<u16> = (1..=total).collect();
        self.rng.shuffle(&mut numbers);
        self.cells = numbers
            .into_iter()
            .map(|number| SchulteCell {
                number,
                color: self.rng.next_range(SCHULTE_COLORS as u32) as u8,
                found: false,
            })
            .collect();
        self.current = 1;
        self.started = false;
        self.elapsed_ms = 0;
        self.error = None;
        self.cursor = Cursor::new(self.size, self.size);
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn cell(&self, (row, col): GridPos) -> Option<SchulteCell> {
        if row >= self.size || col >= self.size {
            return None;
        }
        self.cells
            .get(row as usize * self.size as usize + col as usize)
            .copied()
    }

    pub fn position_of(&self, number: u16) -> Option<GridPos> {
        let idx = self.cells.iter().position(|c| c.number == number)?;
        let n = self.size as usize;
        Some(((idx / n) as u8, (idx % n) as u8))
    }

    pub fn current(&self) -> u16 {
        self.current
    }

    pub fn total(&self) -> u16 {
        self.size as u16 * self.size as u16
    }

    pub fn started(&self) -> bool {
        self.started
    }

    pub fn finished(&self) -> bool {
        self.current > self.total()
    }

    pub fn elapsed_ms(&self) -> u32 {
        self.elapsed_ms
    }

    pub fn error_cell(&self) -> Option<GridPos> {
        self.error.map(|(pos, _)| pos)
    }

    pub fn highlight(&self) -> bool {
        self.highlight
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn status(&self) -> GameStatus {
        if self.finished() {
            GameStatus::Won
        } else if self.started {
            GameStatus::Playing
        } else {
            GameStatus::Ready
        }
    }

    /// Pick a cell
    ///
    /// Nothing counts until 1 is picked. Afterwards the expected number is
    /// marked found; anything else flashes an error on that cell. False only
    /// when the pick was ignored.
    pub fn select(&mut self, pos: GridPos) -> bool {
        if self.finished() {
            return false;
        }
        let Some(cell) = self.cell(pos) else {
            return false;
        };
        if !self.started {
            if cell.number != 1 {
                return false;
            }
            self.started = true;
        }

        if cell.number == self.current {
            let idx = pos.0 as usize * self.size as usize + pos.1 as usize;
            self.cells[idx].found = true;
            self.current += 1;
            if self.finished() {
                info!(size = self.size, elapsed_ms = self.elapsed_ms, "schulte table completed");
            }
            true
        } else {
            self.error = Some((pos, SCHULTE_ERROR_FLASH_MS));
            true
        }
    }

    pub fn set_size(&mut self, size: u8) -> bool {
        let size = size.clamp(SCHULTE_MIN_SIZE, SCHULTE_MAX_SIZE);
        if size == self.size {
            return false;
        }
        self.size = size;
        self.restart();
        true
    }

    pub fn toggle_highlight(&mut self) {
        self.highlight = !self.highlight;
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.started && !self.finished() {
            self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
        }
        if let Some((pos, left)) = self.error {
            self.error = left
                .checked_sub(elapsed_ms)
                .filter(|&l| l > 0)
                .map(|l| (pos, l));
        }
    }

    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Cursor(dir) | GameAction::Move(dir) => {
                self.cursor.step(dir);
                true
            }
            GameAction::Activate => self.select(self.cursor.pos()),
            GameAction::Select(pos) => {
                self.cursor.set(pos);
                self.select(pos)
            }
            GameAction::SizeUp => self.set_size(self.size.saturating_add(1)),
            GameAction::SizeDown => self.set_size(self.size.saturating_sub(1)),
            GameAction::ToggleHighlight => {
                self.toggle_highlight();
                true
            }
            GameAction::Restart => {
                self.restart();
                true
            }
            _ => false,
        }
    }
}

impl Default for Schulte<SimpleRng> {
    fn default() -> Self {
        Self::new(SCHULTE_DEFAULT_SIZE, 1)
    }
}
