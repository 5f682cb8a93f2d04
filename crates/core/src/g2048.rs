//! 2048: slide and merge numbered tiles on a 4x4 grid
//!
//! A slide compacts every line toward the destination edge and merges equal
//! neighbours once per move (the pair nearest the edge first). If anything
//! moved, the merged values are added to the score and a new tile (2, or 4
//! one time in ten) spawns on a random empty cell.

use tracing::info;

use crate::rng::{RandomSource, SimpleRng};
use crate::types::{Direction, GameAction, GameStatus, G2048_SIZE, G2048_TWO_IN_TEN};

const N: usize = G2048_SIZE;

/// A numbered tile
///
/// `id` is stable while the tile slides, so a renderer can follow it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tile {
    pub id: u32,
    pub value: u32,
    /// Produced by a merge during the last move
    pub merged: bool,
    /// Spawned after the last move
    pub fresh: bool,
}

pub type Grid = [[Option<Tile>; N]; N];

#[derive(Debug, Clone)]
pub struct Twenty48<R: RandomSource = SimpleRng> {
    grid: Grid,
    score: u32,
    moves: u32,
    next_id: u32,
    game_over: bool,
    rng: R,
}

impl Twenty48<SimpleRng> {
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> Twenty48<R> {
    /// New game with two random tiles
    pub fn with_rng(rng: R) -> Self {
        let mut game = Self {
            grid: [[None; N]; N],
            score: 0,
            moves: 0,
            next_id: 0,
            game_over: false,
            rng,
        };
        game.restart();
        game
    }

    /// Start from a fixed layout (`0` = empty), e.g. to set up a puzzle
    pub fn from_values(values: [[u32; N]; N], rng: R) -> Self {
        let mut game = Self {
            grid: [[None; N]; N],
            score: 0,
            moves: 0,
            next_id: 0,
            game_over: false,
            rng,
        };
        for (r, row) in values.iter().enumerate() {
            for (c, &value) in row.iter().enumerate() {
                if value != 0 {
                    game.grid[r][c] = Some(game.make_tile(value));
                }
            }
        }
        game.game_over = !game.can_move();
        game
    }

    pub fn restart(&mut self) {
        self.grid = [[None; N]; N];
        self.score = 0;
        self.moves = 0;
        self.next_id = 0;
        self.game_over = false;
        self.add_random_tile();
        self.add_random_tile();
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Tile value, 0 for an empty or off-board cell
    pub fn value_at(&self, row: usize, col: usize) -> u32 {
        self.grid
            .get(row)
            .and_then(|cells| cells.get(col))
            .copied()
            .flatten()
            .map_or(0, |t| t.value)
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn moves(&self) -> u32 {
        self.moves
    }

    pub fn highest_tile(&self) -> u32 {
        self.grid
            .iter()
            .flatten()
            .flatten()
            .map(|t| t.value)
            .max()
            .unwrap_or(0)
    }

    pub fn status(&self) -> GameStatus {
        if self.game_over {
            GameStatus::GameOver
        } else {
            GameStatus::Playing
        }
    }

    fn make_tile(&mut self, value: u32) -> Tile {
        self.next_id += 1;
        Tile {
            id: self.next_id,
            value,
            merged: false,
            fresh: false,
        }
    }

    fn empty_cells(&self) -> Vec<(usize, usize)> {
        let mut out = Vec::with_capacity(N * N);
        for r in 0..N {
            for c in 0..N {
                if self.grid[r][c].is_none() {
                    out.push((r, c));
                }
            }
        }
        out
    }

    /// Spawn a 2 (90%) or 4 (10%) on a random empty cell
    fn add_random_tile(&mut self) -> bool {
        let empty = self.empty_cells();
        if empty.is_empty() {
            return false;
        }
        let (r, c) = empty[self.rng.pick(empty.len())];
        let value = if self.rng.chance(G2048_TWO_IN_TEN, 10) {
            2
        } else {
            4
        };
        let mut tile = self.make_tile(value);
        tile.fresh = true;
        self.grid[r][c] = Some(tile);
        true
    }

    /// Any empty cell, or any horizontally/vertically equal neighbours
    pub fn can_move(&self) -> bool {
        for r in 0..N {
            for c in 0..N {
                let Some(tile) = self.grid[r][c] else {
                    return true;
                };
                if c + 1 < N && self.grid[r][c + 1].map(|t| t.value) == Some(tile.value) {
                    return true;
                }
                if r + 1 < N && self.grid[r + 1][c].map(|t| t.value) == Some(tile.value) {
                    return true;
                }
            }
        }
        false
    }

    /// Slide all tiles toward `dir`
    ///
    /// Returns false (and changes nothing) if no tile could move or merge.
    pub fn slide(&mut self, dir: Direction) -> bool {
        if self.game_over {
            return false;
        }

        let forward = matches!(dir, Direction::Right | Direction::Down);
        let mut next = self.grid;
        let mut gained = 0;

        for i in 0..N {
            let mut line = [None; N];
            for (j, slot) in line.iter_mut().enumerate() {
                *slot = if dir.is_vertical() {
                    self.grid[j][i]
                } else {
                    self.grid[i][j]
                };
            }

            let (merged_line, line_score) = merge_line(line, forward);
            gained += line_score;

            for (j, tile) in merged_line.into_iter().enumerate() {
                if dir.is_vertical() {
                    next[j][i] = tile;
                } else {
                    next[i][j] = tile;
                }
            }
        }

        let changed = (0..N).any(|r| {
            (0..N).any(|c| {
                let key = |t: Option<Tile>| t.map(|t| (t.id, t.value));
                key(self.grid[r][c]) != key(next[r][c])
            })
        });
        if !changed {
            return false;
        }

        for tile in next.iter_mut().flatten().flatten() {
            tile.fresh = false;
        }
        self.grid = next;
        self.score += gained;
        self.moves += 1;
        self.add_random_tile();

        if !self.can_move() {
            self.game_over = true;
            info!(score = self.score, highest = self.highest_tile(), "2048 game over");
        }
        true
    }

    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Move(dir) => self.slide(dir),
            GameAction::Restart => {
                self.restart();
                true
            }
            _ => false,
        }
    }
}

/// Compact and merge one line toward index 0 (or toward the end when `forward`)
fn merge_line(mut line: [Option<Tile>; N], forward: bool) -> ([Option<Tile>; N], u32) {
    if forward {
        line.reverse();
    }

    let tiles: Vec<Tile> = line.iter().flatten().copied().collect();
    let mut out = [None; N];
    let mut out_len = 0;
    let mut score = 0;
    let mut i = 0;

    while i < tiles.len() {
        let mut tile = tiles[i];
        tile.merged = false;
        if i + 1 < tiles.len() && tiles[i + 1].value == tile.value {
            tile.value *= 2;
            tile.merged = true;
            score += tile.value;
            i += 2;
        } else {
            i += 1;
        }
        out[out_len] = Some(tile);
        out_len += 1;
    }

    if forward {
        out.reverse();
    }
    (out, score)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::Sequence;

    fn values<R: RandomSource>(game: &Twenty48<R>) -> [[u32; N]; N] {
        let mut out = [[0; N]; N];
        for (r, row) in out.iter_mut().enumerate() {
            for (c, v) in row.iter_mut().enumerate() {
                *v = game.value_at(r, c);
            }
        }
        out
    }

    #[test]
    fn new_game_has_two_tiles() {
        let game = Twenty48::new(42);
        let count = game.grid().iter().flatten().flatten().count();
        assert_eq!(count, 2);
        assert!(game
            .grid()
            .iter()
            .flatten()
            .flatten()
            .all(|t| t.value == 2 || t.value == 4));
    }

    #[test]
    fn off_board_reads_as_empty() {
        let game = Twenty48::new(42);
        assert_eq!(game.value_at(N, 0), 0);
        assert_eq!(game.value_at(0, N), 0);
        assert_eq!(game.value_at(usize::MAX, usize::MAX), 0);
    }

    #[test]
    fn merges_leading_pair_only_once() {
        // Spawn picks the first empty cell, value roll 0 -> a 2.
        let mut game = Twenty48::from_values(
            [[2, 2, 2, 2], [4, 4, 8, 0], [2, 0, 2, 0], [0, 0, 0, 0]],
            Sequence::new(vec![0]),
        );
        assert!(game.slide(Direction::Left));
        // The new 2 lands on the first empty cell, (0, 2).
        assert_eq!(
            values(&game),
            [[4, 4, 2, 0], [8, 8, 0, 0], [4, 0, 0, 0], [0, 0, 0, 0]]
        );
        assert_eq!(game.score(), 4 + 4 + 8 + 4);
    }

    #[test]
    fn slide_right_merges_nearest_the_edge() {
        let mut game = Twenty48::from_values(
            [[2, 2, 2, 0], [0; 4], [0; 4], [0; 4]],
            Sequence::new(vec![0]),
        );
        assert!(game.slide(Direction::Right));
        assert_eq!(game.value_at(0, 3), 4);
        assert_eq!(game.value_at(0, 2), 2);
        assert_eq!(game.score(), 4);
    }

    #[test]
    fn slide_up_moves_columns() {
        let mut game = Twenty48::from_values(
            [[0; 4], [0; 4], [2, 0, 0, 0], [2, 0, 0, 8]],
            Sequence::new(vec![5]),
        );
        assert!(game.slide(Direction::Up));
        assert_eq!(game.value_at(0, 0), 4);
        assert_eq!(game.value_at(0, 3), 8);
        assert_eq!(game.score(), 4);
    }

    #[test]
    fn unchanged_board_does_not_score_or_spawn() {
        let mut game = Twenty48::from_values(
            [[2, 4, 0, 0], [0; 4], [0; 4], [0; 4]],
            Sequence::new(vec![0]),
        );
        assert!(!game.slide(Direction::Left));
        assert_eq!(game.moves(), 0);
        assert_eq!(game.grid().iter().flatten().flatten().count(), 2);
    }

    #[test]
    fn spawn_value_roll_can_give_four() {
        // First pick -> cell index 0, roll 9 of 10 -> a 4.
        let mut game = Twenty48::from_values(
            [[0, 0, 0, 2], [0; 4], [0; 4], [0; 4]],
            Sequence::new(vec![0, 9]),
        );
        assert!(game.slide(Direction::Left));
        assert_eq!(game.value_at(0, 0), 2);
        assert_eq!(game.value_at(0, 1), 4);
        assert!(game.grid()[0][1].unwrap().fresh);
    }

    #[test]
    fn full_board_without_pairs_is_game_over() {
        let game = Twenty48::from_values(
            [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [4, 2, 4, 2]],
            Sequence::new(vec![0]),
        );
        assert!(!game.can_move());
        assert_eq!(game.status(), GameStatus::GameOver);
    }

    #[test]
    fn last_move_can_end_the_game() {
        // After sliding left the last cell fills with a 2 and nothing can merge.
        let mut game = Twenty48::from_values(
            [[2, 4, 2, 4], [4, 2, 4, 2], [2, 4, 2, 4], [0, 4, 2, 8]],
            Sequence::new(vec![0, 0]),
        );
        assert!(game.slide(Direction::Left));
        assert_eq!(values(&game)[3], [4, 2, 8, 2]);
        assert_eq!(game.status(), GameStatus::GameOver);
        assert!(!game.apply_action(GameAction::Move(Direction::Right)));
    }
}
