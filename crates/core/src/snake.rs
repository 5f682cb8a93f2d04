//! Snake on a 20x20 grid
//!
//! The snake starts as one segment in the middle and waits for the first
//! direction. Each step moves the head one cell; food grows the snake by one
//! and every fifth food spawns a short-lived bonus worth more points.
//! [`SnakeMode::Classic`] dies at the walls, [`SnakeMode::Wrap`] re-enters on
//! the opposite edge.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::rng::{RandomSource, SimpleRng};
use crate::types::{
    Direction, GameAction, GameStatus, BONUS_FOOD_EVERY, BONUS_FOOD_MS, BONUS_FOOD_POINTS,
    SNAKE_DEFAULT_SPEED, SNAKE_GRID, SNAKE_MAX_SPEED, SNAKE_MIN_SPEED,
};

/// Grid coordinate as (x, y)
pub type Point = (i16, i16);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SnakeMode {
    Classic,
    Wrap,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BonusFood {
    pub pos: Point,
    pub remaining_ms: u32,
}

#[derive(Debug, Clone)]
pub struct Snake<R: RandomSource = SimpleRng> {
    mode: SnakeMode,
    /// Head at the back
    body: VecDeque<Point>,
    direction: Option<Direction>,
    /// Direction of the last step actually taken
    last_moved: Option<Direction>,
    growth: u32,
    food: Option<Point>,
    bonus: Option<BonusFood>,
    score: u32,
    status: GameStatus,
    /// Steps per second
    speed: u32,
    step_acc_ms: u32,
    rng: R,
}

impl Snake<SimpleRng> {
    pub fn new(mode: SnakeMode, seed: u32) -> Self {
        Self::with_rng(mode, SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Snake<R> {
    pub fn with_rng(mode: SnakeMode, rng: R) -> Self {
        let mut snake = Self {
            mode,
            body: VecDeque::new(),
            direction: None,
            last_moved: None,
            growth: 0,
            food: None,
            bonus: None,
            score: 0,
            status: GameStatus::Ready,
            speed: SNAKE_DEFAULT_SPEED,
            step_acc_ms: 0,
            rng,
        };
        snake.restart();
        snake
    }

    /// Back to a single segment in the middle; speed is kept
    pub fn restart(&mut self) {
        self.body.clear();
        self.body.push_back((SNAKE_GRID / 2, SNAKE_GRID / 2));
        self.direction = None;
        self.last_moved = None;
        self.growth = 0;
        self.bonus = None;
        self.score = 0;
        self.status = GameStatus::Ready;
        self.step_acc_ms = 0;
        self.food = None;
        self.food = self.free_cell(None);
    }

    pub fn mode(&self) -> SnakeMode {
        self.mode
    }

    pub fn body(&self) -> &VecDeque<Point> {
        &self.body
    }

    pub fn head(&self) -> Point {
        self.body.back().copied().unwrap_or((0, 0))
    }

    pub fn len(&self) -> usize {
        self.body.len()
    }

    pub fn is_empty(&self) -> bool {
        self.body.is_empty()
    }

    pub fn direction(&self) -> Option<Direction> {
        self.direction
    }

    pub fn food(&self) -> Option<Point> {
        self.food
    }

    pub fn bonus(&self) -> Option<BonusFood> {
        self.bonus
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn speed(&self) -> u32 {
        self.speed
    }

    pub fn status(&self) -> GameStatus {
        self.status
    }

    pub fn step_interval_ms(&self) -> u32 {
        1000 / self.speed
    }

    /// Uniformly random cell not covered by the snake, the food or `also_skip`
    fn free_cell(&mut self, also_skip: Option<Point>) -> Option<Point> {
        let free: Vec<Point> = (0..SNAKE_GRID)
            .flat_map(|y| (0..SNAKE_GRID).map(move |x| (x, y)))
            .filter(|p| !self.body.contains(p) && Some(*p) != self.food && Some(*p) != also_skip)
            .collect();
        if free.is_empty() {
            return None;
        }
        Some(free[self.rng.pick(free.len())])
    }

    pub fn start(&mut self) -> bool {
        if self.status != GameStatus::Ready {
            return false;
        }
        self.status = GameStatus::Playing;
        info!(mode = ?self.mode, speed = self.speed, "snake started");
        true
    }

    /// Steer; reversing onto the body is ignored
    pub fn set_direction(&mut self, dir: Direction) -> bool {
        match self.status {
            GameStatus::Ready => {
                self.start();
            }
            GameStatus::Playing => {}
            _ => return false,
        }
        if self.body.len() > 1 && self.last_moved == Some(dir.opposite()) {
            return false;
        }
        self.direction = Some(dir);
        true
    }

    pub fn set_speed(&mut self, speed: u32) -> bool {
        let speed = speed.clamp(SNAKE_MIN_SPEED, SNAKE_MAX_SPEED);
        if speed == self.speed {
            return false;
        }
        self.speed = speed;
        true
    }

    pub fn toggle_pause(&mut self) -> bool {
        self.status = match self.status {
            GameStatus::Playing => GameStatus::Paused,
            GameStatus::Paused => GameStatus::Playing,
            _ => return false,
        };
        true
    }

    /// Move one cell; returns false if the snake is not moving
    pub fn step(&mut self) -> bool {
        if self.status != GameStatus::Playing {
            return false;
        }
        let Some(dir) = self.direction else {
            return false;
        };

        let (hx, hy) = self.head();
        let (dx, dy) = dir.delta();
        let mut next = (hx + dx as i16, hy + dy as i16);
        let outside = next.0 < 0 || next.1 < 0 || next.0 >= SNAKE_GRID || next.1 >= SNAKE_GRID;
        if outside {
            match self.mode {
                SnakeMode::Classic => {
                    self.die();
                    return true;
                }
                SnakeMode::Wrap => {
                    next = (next.0.rem_euclid(SNAKE_GRID), next.1.rem_euclid(SNAKE_GRID));
                }
            }
        }

        if self.growth > 0 {
            self.growth -= 1;
        } else {
            self.body.pop_front();
        }
        if self.body.contains(&next) {
            self.body.push_back(next);
            self.die();
            return true;
        }
        self.body.push_back(next);
        self.last_moved = Some(dir);

        if self.food == Some(next) {
            self.score += 1;
            self.growth += 1;
            self.food = None;
            self.food = self.free_cell(self.bonus.map(|b| b.pos));
            if self.food.is_none() {
                self.status = GameStatus::Won;
                info!(score = self.score, "snake filled the board");
                return true;
            }
            if self.score % BONUS_FOOD_EVERY == 0 {
                self.bonus = self.free_cell(None).map(|pos| BonusFood {
                    pos,
                    remaining_ms: BONUS_FOOD_MS,
                });
                debug!(score = self.score, "bonus food spawned");
            }
        }
        if self.bonus.is_some_and(|b| b.pos == next) {
            self.score += BONUS_FOOD_POINTS;
            self.growth += 1;
            self.bonus = None;
        }
        true
    }

    fn die(&mut self) {
        self.status = GameStatus::GameOver;
        info!(mode = ?self.mode, score = self.score, length = self.body.len(), "snake died");
    }

    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.status != GameStatus::Playing {
            return;
        }
        if let Some(bonus) = &mut self.bonus {
            bonus.remaining_ms = bonus.remaining_ms.saturating_sub(elapsed_ms);
            if bonus.remaining_ms == 0 {
                self.bonus = None;
            }
        }

        self.step_acc_ms += elapsed_ms;
        let interval = self.step_interval_ms();
        while self.step_acc_ms >= interval && self.status == GameStatus::Playing {
            self.step_acc_ms -= interval;
            self.step();
        }
    }

    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(dir) => self.set_direction(dir),
            GameAction::Activate => self.start(),
            GameAction::SpeedUp => self.set_speed(self.speed + 1),
            GameAction::SpeedDown => self.set_speed(self.speed.saturating_sub(1)),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => {
                self.restart();
                self.start()
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub(crate) fn set_food(&mut self, pos: Point) {
        self.food = Some(pos);
    }

    #[cfg(test)]
    pub(crate) fn set_body(&mut self, body: &[Point]) {
        self.body = body.iter().copied().collect();
    }
}

impl Default for Snake<SimpleRng> {
    fn default() -> Self {
        Self::new(SnakeMode::Classic, 1)
    }
}
