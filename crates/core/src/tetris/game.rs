//! Game state module - the Tetris piece/board state machine
//!
//! Spawning → Falling → Locking → LineClearing → Spawning, or GameOver when a
//! freshly spawned piece collides. Every move and rotation is checked against
//! the board before it is committed; a colliding move is simply reverted.

use tracing::{debug, info};

use crate::rng::{PieceBag, RandomSource, SimpleRng};
use crate::tetris::scoring::{
    classic_line_score, drop_interval_ms, drop_score, level_for_lines, marathon_line_score,
};
use crate::tetris::{ActivePiece, Board};
use crate::types::{Direction, GameAction, GameStatus, PieceKind, CLASSIC_DROP_MS};

/// Which rules a Tetris game follows
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Ruleset {
    /// Uniform random pieces, fixed gravity, lines² × 10 scoring
    Classic,
    /// 7-bag pieces, level-based gravity, Nintendo scoring, hard drop
    Marathon,
}

/// Result of one gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DropOutcome {
    /// The piece moved down one row
    Moved,
    /// The piece locked, `lines` rows were cleared and the next piece spawned
    Locked { lines: u32 },
    /// The piece locked and the next piece could not spawn
    GameOver,
    /// The game is paused or over
    Ignored,
}

#[derive(Debug, Clone)]
enum Randomizer<R: RandomSource> {
    Uniform(R),
    Bag(PieceBag<R>),
}

impl<R: RandomSource> Randomizer<R> {
    fn draw(&mut self) -> PieceKind {
        match self {
            Randomizer::Uniform(rng) => PieceKind::ALL[rng.pick(PieceKind::ALL.len())],
            Randomizer::Bag(bag) => bag.draw(),
        }
    }
}

/// Complete Tetris state
#[derive(Debug, Clone)]
pub struct Tetris<R: RandomSource = SimpleRng> {
    ruleset: Ruleset,
    board: Board,
    active: Option<ActivePiece>,
    next: PieceKind,
    randomizer: Randomizer<R>,
    score: u32,
    lines: u32,
    /// Rows cleared by the most recent lock
    last_cleared: u32,
    drop_counter_ms: u32,
    paused: bool,
    game_over: bool,
}

impl Tetris<SimpleRng> {
    /// Create and start a game with the given RNG seed
    pub fn new(ruleset: Ruleset, seed: u32) -> Self {
        Self::with_rng(ruleset, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Tetris<R> {
    /// Create and start a game drawing pieces from `rng`
    pub fn with_rng(ruleset: Ruleset, rng: R) -> Self {
        let mut randomizer = match ruleset {
            Ruleset::Classic => Randomizer::Uniform(rng),
            Ruleset::Marathon => Randomizer::Bag(PieceBag::with_rng(rng)),
        };
        let next = randomizer.draw();
        let mut game = Self {
            ruleset,
            board: Board::new(),
            active: None,
            next,
            randomizer,
            score: 0,
            lines: 0,
            last_cleared: 0,
            drop_counter_ms: 0,
            paused: false,
            game_over: false,
        };
        game.spawn_next();
        game
    }

    /// Start over with an empty board; the piece sequence continues
    pub fn restart(&mut self) {
        self.board.clear();
        self.active = None;
        self.score = 0;
        self.lines = 0;
        self.last_cleared = 0;
        self.drop_counter_ms = 0;
        self.paused = false;
        self.game_over = false;
        self.next = self.randomizer.draw();
        self.spawn_next();
        info!(ruleset = ?self.ruleset, "tetris restarted");
    }

    pub fn ruleset(&self) -> Ruleset {
        self.ruleset
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<ActivePiece> {
        self.active
    }

    pub fn next_piece(&self) -> PieceKind {
        self.next
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn lines(&self) -> u32 {
        self.lines
    }

    pub fn last_cleared(&self) -> u32 {
        self.last_cleared
    }

    pub fn level(&self) -> u32 {
        match self.ruleset {
            Ruleset::Classic => 0,
            Ruleset::Marathon => level_for_lines(self.lines),
        }
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else if self.paused {
            GameStatus::Paused
        } else {
            GameStatus::Playing
        }
    }

    fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }

    /// Current gravity interval
    pub fn drop_interval_ms(&self) -> u32 {
        match self.ruleset {
            Ruleset::Classic => CLASSIC_DROP_MS,
            Ruleset::Marathon => drop_interval_ms(self.level()),
        }
    }

    /// Collision check: every cell inside the board and on an empty cell
    pub fn fits(&self, piece: &ActivePiece) -> bool {
        piece.cells().iter().all(|&(x, y)| self.board.is_valid(x, y))
    }

    /// Row the active piece would land on if dropped now
    pub fn ghost_y(&self) -> Option<i8> {
        let mut ghost = self.active?;
        while self.fits(&ghost.shifted(0, 1)) {
            ghost = ghost.shifted(0, 1);
        }
        Some(ghost.y)
    }

    /// Promote the next piece to active and draw a new next piece
    ///
    /// Returns false (and ends the game) if the new piece collides at spawn.
    fn spawn_next(&mut self) -> bool {
        let piece = ActivePiece::spawn(self.next, self.board.width());
        self.next = self.randomizer.draw();

        if !self.fits(&piece) {
            self.active = None;
            self.game_over = true;
            info!(score = self.score, lines = self.lines, "tetris game over");
            return false;
        }

        self.active = Some(piece);
        true
    }

    /// Translate the active piece; reverts (returns false) on collision
    pub fn try_move(&mut self, dx: i8, dy: i8) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(dx, dy);
        if self.fits(&moved) {
            self.active = Some(moved);
            return true;
        }
        false
    }

    /// Rotate clockwise. A blocked rotation is kicked sideways by +1, -1, +2,
    /// -2, ... and gives up once the next kick step exceeds the rotated
    /// shape's width, so narrow shapes only ever try +1.
    pub fn rotate(&mut self) -> bool {
        if !self.playable() {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let rotated = ActivePiece {
            shape: active.shape.rotated_cw(),
            ..active
        };
        let width = rotated.shape.cols() as i8;

        let mut dx = 0;
        let mut step: i8 = 1;
        loop {
            let kicked = rotated.shifted(dx, 0);
            if self.fits(&kicked) {
                self.active = Some(kicked);
                return true;
            }
            dx += step;
            step = -(step + step.signum());
            if step > width {
                return false;
            }
        }
    }

    /// One gravity step: move down, or lock + clear + spawn
    pub fn drop_tick(&mut self) -> DropOutcome {
        if !self.playable() || self.active.is_none() {
            return DropOutcome::Ignored;
        }
        if self.try_move(0, 1) {
            return DropOutcome::Moved;
        }
        self.lock_active()
    }

    /// Manual soft drop: an immediate gravity step that restarts the gravity timer
    pub fn soft_drop(&mut self) -> DropOutcome {
        let outcome = self.drop_tick();
        if outcome != DropOutcome::Ignored {
            self.drop_counter_ms = 0;
        }
        if outcome == DropOutcome::Moved && self.ruleset == Ruleset::Marathon {
            self.score += drop_score(1, false);
        }
        outcome
    }

    /// Drop the piece to the floor and lock it (Marathon only)
    pub fn hard_drop(&mut self) -> DropOutcome {
        if self.ruleset != Ruleset::Marathon || !self.playable() {
            return DropOutcome::Ignored;
        }
        let mut cells = 0;
        while self.try_move(0, 1) {
            cells += 1;
        }
        self.score += drop_score(cells, true);
        self.drop_counter_ms = 0;
        self.lock_active()
    }

    fn lock_active(&mut self) -> DropOutcome {
        let Some(active) = self.active.take() else {
            return DropOutcome::Ignored;
        };

        // The piece was validated on every move, so locking cannot fail here.
        self.board.lock_cells(&active.cells(), active.kind);

        let level = self.level();
        let cleared = self.board.clear_full_rows().len() as u32;
        if cleared > 0 {
            self.score += match self.ruleset {
                Ruleset::Classic => classic_line_score(cleared),
                Ruleset::Marathon => marathon_line_score(cleared, level),
            };
            self.lines += cleared;
            debug!(cleared, lines = self.lines, score = self.score, "lines cleared");
        }
        self.last_cleared = cleared;

        if self.spawn_next() {
            DropOutcome::Locked { lines: cleared }
        } else {
            DropOutcome::GameOver
        }
    }

    pub fn toggle_pause(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        self.paused = !self.paused;
        true
    }

    /// Advance gravity by `elapsed_ms`
    pub fn tick(&mut self, elapsed_ms: u32) {
        if !self.playable() {
            return;
        }
        self.drop_counter_ms += elapsed_ms;
        if self.drop_counter_ms > self.drop_interval_ms() {
            self.drop_tick();
            self.drop_counter_ms = 0;
        }
    }

    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Restart => {
                self.restart();
                true
            }
            GameAction::Pause => self.toggle_pause(),
            GameAction::Move(Direction::Left) => self.try_move(-1, 0),
            GameAction::Move(Direction::Right) => self.try_move(1, 0),
            GameAction::Move(Direction::Down) | GameAction::SoftDrop => {
                self.soft_drop() != DropOutcome::Ignored
            }
            GameAction::Move(Direction::Up) | GameAction::Rotate => self.rotate(),
            GameAction::HardDrop => self.hard_drop() != DropOutcome::Ignored,
            _ => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn board_mut(&mut self) -> &mut Board {
        &mut self.board
    }

    #[cfg(test)]
    pub(crate) fn set_active(&mut self, piece: Option<ActivePiece>) {
        self.active = piece;
    }
}
