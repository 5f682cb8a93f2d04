//! Jigsaw puzzle: an N x N image cut into tiles
//!
//! Two ways to play:
//! - [`PuzzleMode::Sliding`]: the last tile is missing and tiles next to the
//!   gap slide into it.
//! - [`PuzzleMode::Swap`]: every tile is present and any two slots can be
//!   exchanged (drag and drop, or select source then destination).

use tracing::info;

use crate::rng::{RandomSource, SimpleRng};
use crate::types::{
    Cursor, Direction, GameAction, GameStatus, GridPos, JIGSAW_DEFAULT_SIZE, JIGSAW_MAX_SIZE,
    JIGSAW_MIN_SIZE, JIGSAW_SCRAMBLE_FACTOR,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleMode {
    Sliding,
    Swap,
}

/// One piece of the picture
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub correct: GridPos,
    pub current: GridPos,
}

impl Tile {
    pub fn in_place(&self) -> bool {
        self.correct == self.current
    }
}

#[derive(Debug, Clone)]
pub struct Jigsaw<R: RandomSource = SimpleRng> {
    mode: PuzzleMode,
    size: u8,
    /// Indexed by tile id (`row * size + col` of the solved picture)
    tiles: Vec<Tile>,
    moves: u32,
    elapsed_ms: u32,
    solved: bool,
    /// Source slot picked in swap mode, waiting for a destination
    pending: Option<GridPos>,
    cursor: Cursor,
    rng: R,
}

impl Jigsaw<SimpleRng> {
    pub fn new(mode: PuzzleMode, size: u8, seed: u32) -> Self {
        Self::with_rng(mode, size, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Jigsaw<R> {
    pub fn with_rng(mode: PuzzleMode, size: u8, rng: R) -> Self {
        let size = size.clamp(JIGSAW_MIN_SIZE, JIGSAW_MAX_SIZE);
        let mut puzzle = Self {
            mode,
            size,
            tiles: Vec::new(),
            moves: 0,
            elapsed_ms: 0,
            solved: false,
            pending: None,
            cursor: Cursor::new(size, size),
            rng,
        };
        puzzle.restart();
        puzzle
    }

    /// Lay out the solved picture, then scramble it
    pub fn restart(&mut self) {
        self.tiles = (0..self.size)
            .flat_map(|r| (0..self.size).map(move |c| (r, c)))
            .map(|pos| Tile {
                correct: pos,
                current: pos,
            })
            .collect();
        self.moves = 0;
        self.elapsed_ms = 0;
        self.solved = false;
        self.pending = None;
        self.cursor = Cursor::new(self.size, self.size);

        loop {
            match self.mode {
                PuzzleMode::Sliding => self.scramble_sliding(),
                PuzzleMode::Swap => self.scramble_swap(),
            }
            if !self.is_solved() {
                break;
            }
        }
        info!(mode = ?self.mode, size = self.size, "jigsaw scrambled");
    }

    /// Random walk of the gap, so the result is always solvable
    fn scramble_sliding(&mut self) {
        let steps = self.size as u32 * self.size as u32 * JIGSAW_SCRAMBLE_FACTOR;
        for _ in 0..steps {
            let Some(gap) = self.blank_pos() else {
                return;
            };
            let neighbours: Vec<GridPos> = self.neighbours(gap).collect();
            let pick = neighbours[self.rng.pick(neighbours.len())];
            self.exchange(gap, pick);
        }
    }

    fn scramble_swap(&mut self) {
        let mut slots: Vec<GridPos> = self.tiles.iter().map(|t| t.current).collect();
        self.rng.shuffle(&mut slots);
        for (tile, slot) in self.tiles.iter_mut().zip(slots) {
            tile.current = slot;
        }
    }

    pub fn mode(&self) -> PuzzleMode {
        self.mode
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Whole seconds since the puzzle was scrambled
    pub fn seconds(&self) -> u32 {
        self.elapsed_ms / 1000
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn pending(&self) -> Option<GridPos> {
        self.pending
    }

    pub fn tiles(&self) -> &[Tile] {
        &self.tiles
    }

    pub fn status(&self) -> GameStatus {
        if self.solved {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    /// Id of the missing tile in sliding mode
    fn blank_id(&self) -> Option<usize> {
        match self.mode {
            PuzzleMode::Sliding => Some(self.tiles.len() - 1),
            PuzzleMode::Swap => None,
        }
    }

    pub fn blank_pos(&self) -> Option<GridPos> {
        self.blank_id().map(|id| self.tiles[id].current)
    }

    /// Tile id shown in a slot (`None` for the gap)
    pub fn tile_at(&self, pos: GridPos) -> Option<usize> {
        let id = self.tiles.iter().position(|t| t.current == pos)?;
        if Some(id) == self.blank_id() {
            None
        } else {
            Some(id)
        }
    }

    pub fn is_solved(&self) -> bool {
        self.tiles.iter().all(Tile::in_place)
    }

    fn neighbours(&self, (row, col): GridPos) -> impl Iterator<Item = GridPos> + '_ {
        Direction::ALL.into_iter().filter_map(move |d| {
            let (dx, dy) = d.delta();
            let r = row as i16 + dy as i16;
            let c = col as i16 + dx as i16;
            let n = self.size as i16;
            (r >= 0 && c >= 0 && r < n && c < n).then_some((r as u8, c as u8))
        })
    }

    fn exchange(&mut self, a: GridPos, b: GridPos) {
        for tile in &mut self.tiles {
            if tile.current == a {
                tile.current = b;
            } else if tile.current == b {
                tile.current = a;
            }
        }
    }

    fn after_move(&mut self) {
        self.moves += 1;
        if self.is_solved() {
            self.solved = true;
            self.pending = None;
            info!(moves = self.moves, seconds = self.seconds(), "jigsaw solved");
        }
    }

    /// Click on a slot
    ///
    /// Sliding mode moves the tile into the gap when they are adjacent.
    /// Swap mode picks a source slot, then swaps it with the next slot picked;
    /// picking the source again drops the selection.
    pub fn select(&mut self, pos: GridPos) -> bool {
        if self.solved || pos.0 >= self.size || pos.1 >= self.size {
            return false;
        }
        match self.mode {
            PuzzleMode::Sliding => {
                let Some(gap) = self.blank_pos() else {
                    return false;
                };
                let adjacent = self.neighbours(gap).any(|p| p == pos);
                if !adjacent {
                    return false;
                }
                self.exchange(gap, pos);
                self.after_move();
                true
            }
            PuzzleMode::Swap => match self.pending.take() {
                None => {
                    self.pending = Some(pos);
                    true
                }
                Some(from) if from == pos => true,
                Some(from) => self.swap(from, pos),
            },
        }
    }

    /// Drop the tile in slot `a` onto slot `b` (swap mode)
    pub fn swap(&mut self, a: GridPos, b: GridPos) -> bool {
        if self.solved || self.mode != PuzzleMode::Swap || a == b {
            return false;
        }
        if a.0 >= self.size || a.1 >= self.size || b.0 >= self.size || b.1 >= self.size {
            return false;
        }
        self.exchange(a, b);
        self.after_move();
        true
    }

    /// Change the grid size and start over
    pub fn set_size(&mut self, size: u8) -> bool {
        let size = size.clamp(JIGSAW_MIN_SIZE, JIGSAW_MAX_SIZE);
        if size == self.size {
            return false;
        }
        self.size = size;
        self.restart();
        true
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.solved {
            self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
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
            GameAction::Drag { from, to } => match self.mode {
                PuzzleMode::Swap => {
                    self.pending = None;
                    self.swap(from, to)
                }
                PuzzleMode::Sliding => self.select(from),
            },
            GameAction::SizeUp => self.set_size(self.size.saturating_add(1)),
            GameAction::SizeDown => self.set_size(self.size.saturating_sub(1)),
            GameAction::Restart => {
                self.restart();
                true
            }
            _ => false,
        }
    }
}

impl Default for Jigsaw<SimpleRng> {
    fn default() -> Self {
        Self::new(PuzzleMode::Sliding, JIGSAW_DEFAULT_SIZE, 1)
    }
}
