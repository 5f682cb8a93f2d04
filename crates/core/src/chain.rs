//! Chain Reaction: players take turns adding orbs to cells they own or to
//! empty cells. A cell holding as many orbs as it has neighbours explodes,
//! sending one orb to each neighbour and capturing it; captured cells that
//! reach capacity explode in the next wave.
//!
//! The reaction is resolved in one call. Each orb transfer is recorded with
//! the wave it happened in, so a view can replay the cascade; input is
//! ignored until that replay has finished.

use std::collections::VecDeque;

use tracing::{debug, info};

use crate::types::{
    Cursor, Direction, GameAction, GameStatus, GridPos, CHAIN_GRID, CHAIN_MAX_PLAYERS,
    CHAIN_MIN_PLAYERS, CHAIN_WAVE_MS,
};

/// 1-based player number
pub type PlayerId = u8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChainCell {
    pub owner: Option<PlayerId>,
    pub orbs: u8,
    /// Orbs at which the cell explodes: 2 in corners, 3 on edges, 4 inside
    pub capacity: u8,
}

/// One orb travelling from an exploding cell to a neighbour
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OrbTransfer {
    pub from: GridPos,
    pub to: GridPos,
    pub player: PlayerId,
    /// 0 for the first explosion, +1 per cascade level
    pub wave: u32,
}

impl OrbTransfer {
    pub fn delay_ms(&self) -> u32 {
        self.wave * CHAIN_WAVE_MS
    }
}

/// Outcome of the last placement
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Reaction {
    pub transfers: Vec<OrbTransfer>,
    pub waves: u32,
}

impl Reaction {
    pub fn duration_ms(&self) -> u32 {
        self.waves * CHAIN_WAVE_MS
    }
}

#[derive(Debug, Clone)]
pub struct ChainReaction {
    size: u8,
    players: u8,
    cells: Vec<ChainCell>,
    /// Orbs owned per player, index = id - 1
    scores: Vec<u32>,
    current: PlayerId,
    winner: Option<PlayerId>,
    reaction: Reaction,
    /// Time spent replaying the current reaction
    reaction_elapsed_ms: u32,
    cursor: Cursor,
}

/// Upper bound on explosions per move; a saturated board never settles.
const MAX_EXPLOSIONS_PER_CELL: usize = 64;

impl ChainReaction {
    pub fn new(size: u8, players: u8) -> Self {
        let size = size.max(2);
        let players = players.clamp(CHAIN_MIN_PLAYERS, CHAIN_MAX_PLAYERS);
        let mut game = Self {
            size,
            players,
            cells: Vec::new(),
            scores: Vec::new(),
            current: 1,
            winner: None,
            reaction: Reaction::default(),
            reaction_elapsed_ms: 0,
            cursor: Cursor::new(size, size),
        };
        game.restart();
        game
    }

    pub fn restart(&mut self) {
        let n = self.size;
        self.cells = (0..n)
            .flat_map(|r| (0..n).map(move |c| (r, c)))
            .map(|(r, c)| {
                let edge_r = r == 0 || r == n - 1;
                let edge_c = c == 0 || c == n - 1;
                let capacity = match (edge_r, edge_c) {
                    (true, true) => 2,
                    (true, false) | (false, true) => 3,
                    (false, false) => 4,
                };
                ChainCell {
                    owner: None,
                    orbs: 0,
                    capacity,
                }
            })
            .collect();
        self.scores = vec![0; self.players as usize];
        self.current = 1;
        self.winner = None;
        self.reaction = Reaction::default();
        self.reaction_elapsed_ms = 0;
        info!(size = self.size, players = self.players, "chain reaction started");
    }

    pub fn size(&self) -> u8 {
        self.size
    }

    pub fn players(&self) -> u8 {
        self.players
    }

    pub fn current_player(&self) -> PlayerId {
        self.current
    }

    pub fn winner(&self) -> Option<PlayerId> {
        self.winner
    }

    pub fn score_of(&self, player: PlayerId) -> u32 {
        self.scores
            .get(player.wrapping_sub(1) as usize)
            .copied()
            .unwrap_or(0)
    }

    pub fn total_orbs(&self) -> u32 {
        self.scores.iter().sum()
    }

    pub fn cell(&self, row: u8, col: u8) -> Option<ChainCell> {
        self.index(row, col).map(|i| self.cells[i])
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn reaction(&self) -> &Reaction {
        &self.reaction
    }

    /// Transfers in flight at the current replay time
    pub fn transfers_in_flight(&self) -> impl Iterator<Item = &OrbTransfer> {
        let t = self.reaction_elapsed_ms;
        self.reaction
            .transfers
            .iter()
            .filter(move |tr| tr.delay_ms() <= t && t < tr.delay_ms() + CHAIN_WAVE_MS)
    }

    pub fn is_animating(&self) -> bool {
        self.reaction_elapsed_ms < self.reaction.duration_ms()
    }

    pub fn status(&self) -> GameStatus {
        if self.winner.is_some() {
            GameStatus::Won
        } else {
            GameStatus::Playing
        }
    }

    fn index(&self, row: u8, col: u8) -> Option<usize> {
        if row >= self.size || col >= self.size {
            return None;
        }
        Some(row as usize * self.size as usize + col as usize)
    }

    fn neighbours(&self, (row, col): GridPos) -> impl Iterator<Item = GridPos> + '_ {
        Direction::ALL.into_iter().filter_map(move |d| {
            let (dx, dy) = d.delta();
            let r = row as i16 + dy as i16;
            let c = col as i16 + dx as i16;
            if r < 0 || c < 0 || r >= self.size as i16 || c >= self.size as i16 {
                None
            } else {
                Some((r as u8, c as u8))
            }
        })
    }

    /// Add an orb for the current player
    ///
    /// Rejected without any change while a reaction replays, after the game
    /// is won, or when the cell belongs to another player.
    pub fn place(&mut self, row: u8, col: u8) -> bool {
        if self.is_animating() || self.winner.is_some() {
            return false;
        }
        let Some(idx) = self.index(row, col) else {
            return false;
        };
        let player = self.current;
        if let Some(owner) = self.cells[idx].owner {
            if owner != player {
                return false;
            }
        }

        self.cells[idx].owner = Some(player);
        self.cells[idx].orbs += 1;
        self.scores[player as usize - 1] += 1;

        self.reaction = Reaction::default();
        self.reaction_elapsed_ms = 0;
        if self.cells[idx].orbs >= self.cells[idx].capacity {
            self.explode_from((row, col), player);
            self.recount_scores();
        }

        self.finish_turn();
        true
    }

    /// Breadth-first flood propagation from an overfull cell
    ///
    /// A cell is emptied when it is queued and spreads when it is dequeued,
    /// one wave after the explosion that filled it.
    fn explode_from(&mut self, start: GridPos, player: PlayerId) {
        let mut queue: VecDeque<(GridPos, u32)> = VecDeque::new();
        let start_idx = self.cell_index(start);
        self.cells[start_idx].orbs = 0;
        queue.push_back((start, 0));

        let limit = self.cells.len() * MAX_EXPLOSIONS_PER_CELL;
        let mut explosions = 0;
        let mut max_wave = 0;

        while let Some((pos, wave)) = queue.pop_front() {
            explosions += 1;
            max_wave = max_wave.max(wave);

            let targets: Vec<GridPos> = self.neighbours(pos).collect();
            for to in targets {
                self.reaction.transfers.push(OrbTransfer {
                    from: pos,
                    to,
                    player,
                    wave,
                });

                let idx = self.cell_index(to);
                let cell = &mut self.cells[idx];
                cell.owner = Some(player);
                cell.orbs += 1;
                if cell.orbs >= cell.capacity {
                    cell.orbs = 0;
                    queue.push_back((to, wave + 1));
                }
            }

            // Nothing left to capture: the outcome is decided.
            if !self.opponent_has_orbs(player) || explosions >= limit {
                break;
            }
        }

        // Cells still waiting to explode keep their orbs.
        for (pos, _) in queue {
            let idx = self.cell_index(pos);
            self.cells[idx].orbs += self.cells[idx].capacity;
        }

        self.reaction.waves = max_wave + 1;
        debug!(
            player,
            explosions,
            waves = self.reaction.waves,
            "chain reaction resolved"
        );
    }

    fn cell_index(&self, (row, col): GridPos) -> usize {
        row as usize * self.size as usize + col as usize
    }

    fn opponent_has_orbs(&self, player: PlayerId) -> bool {
        self.cells
            .iter()
            .any(|c| c.orbs > 0 && c.owner.is_some_and(|o| o != player))
    }

    fn recount_scores(&mut self) {
        self.scores.iter_mut().for_each(|s| *s = 0);
        for cell in &self.cells {
            if let Some(owner) = cell.owner {
                self.scores[owner as usize - 1] += cell.orbs as u32;
            }
        }
    }

    fn finish_turn(&mut self) {
        let total = self.total_orbs();
        let players = self.players as u32;

        if total > players {
            let mut alive = (1..=self.players).filter(|&p| self.score_of(p) > 0);
            if let (Some(only), None) = (alive.next(), alive.next()) {
                self.winner = Some(only);
                info!(winner = only, "chain reaction won");
                return;
            }
        }

        // Next player who still owns orbs; everyone plays during the opening round.
        for _ in 0..self.players {
            self.current = self.current % self.players + 1;
            if self.score_of(self.current) > 0 || total < players {
                break;
            }
        }
    }

    /// Advance the reaction replay
    pub fn tick(&mut self, elapsed_ms: u32) {
        if self.is_animating() {
            self.reaction_elapsed_ms = self
                .reaction_elapsed_ms
                .saturating_add(elapsed_ms)
                .min(self.reaction.duration_ms());
        }
    }

    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Cursor(dir) | GameAction::Move(dir) => {
                self.cursor.step(dir);
                true
            }
            GameAction::Activate => {
                let (r, c) = self.cursor.pos();
                self.place(r, c)
            }
            GameAction::Select((r, c)) => {
                self.cursor.set((r, c));
                self.place(r, c)
            }
            GameAction::Restart => {
                self.restart();
                true
            }
            _ => false,
        }
    }
}

impl Default for ChainReaction {
    fn default() -> Self {
        Self::new(CHAIN_GRID, CHAIN_MIN_PLAYERS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn capacities_follow_neighbour_count() {
        let game = ChainReaction::new(10, 2);
        assert_eq!(game.cell(0, 0).unwrap().capacity, 2);
        assert_eq!(game.cell(9, 9).unwrap().capacity, 2);
        assert_eq!(game.cell(0, 5).unwrap().capacity, 3);
        assert_eq!(game.cell(5, 0).unwrap().capacity, 3);
        assert_eq!(game.cell(5, 5).unwrap().capacity, 4);
    }

    #[test]
    fn turns_alternate_and_foreign_cells_are_rejected() {
        let mut game = ChainReaction::new(10, 2);
        assert!(game.place(5, 5));
        assert_eq!(game.current_player(), 2);
        assert!(!game.place(5, 5));
        assert_eq!(game.cell(5, 5).unwrap().orbs, 1);
        assert!(game.place(3, 3));
        assert_eq!(game.current_player(), 1);
    }

    #[test]
    fn corner_explosion_captures_neighbours() {
        let mut game = ChainReaction::new(10, 2);
        game.place(0, 0); // p1
        game.place(1, 1); // p2
        game.place(0, 0); // p1, explodes: (0,1) and (1,0)

        let corner = game.cell(0, 0).unwrap();
        assert_eq!(corner.orbs, 0);
        assert_eq!(game.cell(0, 1).unwrap().owner, Some(1));
        assert_eq!(game.cell(1, 0).unwrap().owner, Some(1));
        assert_eq!(game.reaction().transfers.len(), 2);
        assert_eq!(game.reaction().waves, 1);
        assert!(game.is_animating());
        assert_eq!(game.score_of(1), 2);
        assert_eq!(game.score_of(2), 1);
    }

    #[test]
    fn input_is_ignored_while_reaction_replays() {
        let mut game = ChainReaction::new(10, 2);
        game.place(0, 0);
        game.place(9, 9);
        game.place(0, 0);
        // Player 2's turn, but the cascade is still animating.
        assert!(!game.place(9, 9));
        game.tick(CHAIN_WAVE_MS);
        assert!(!game.is_animating());
        assert!(game.place(9, 9));
    }

    #[test]
    fn cascade_spans_multiple_waves() {
        let mut game = ChainReaction::new(10, 2);
        // p1 loads (0,0) and (0,1); p2 plays far away.
        game.place(0, 1);
        game.place(9, 9);
        game.place(0, 1);
        game.place(9, 8);
        game.place(0, 0);
        game.place(8, 9);
        // (0,0) explodes into (0,1) which reaches 3 and explodes too.
        game.place(0, 0);
        assert!(game.reaction().waves >= 2);
        let first_wave = game
            .reaction()
            .transfers
            .iter()
            .filter(|t| t.wave == 0)
            .count();
        assert_eq!(first_wave, 2);
    }

    #[test]
    fn capturing_every_orb_wins() {
        let mut game = ChainReaction::new(3, 2);
        game.place(0, 0); // p1
        game.place(0, 1); // p2 (edge, capacity 3)
        game.place(0, 0); // p1 explodes, captures (0,1) and (1,0)

        assert_eq!(game.score_of(2), 0);
        assert_eq!(game.winner(), Some(1));
        assert_eq!(game.status(), GameStatus::Won);
        game.tick(10_000);
        assert!(!game.place(2, 2));
    }

    #[test]
    fn explosions_conserve_orbs() {
        let mut game = ChainReaction::new(2, 2);
        game.place(0, 0);
        game.place(1, 1);
        game.place(0, 0);
        assert_eq!(game.total_orbs(), 3);
        assert_eq!(game.cell(0, 0).unwrap().orbs, 0);
        assert_eq!(game.cell(0, 1).unwrap().owner, Some(1));
    }

    #[test]
    fn saturated_board_stops_once_decided() {
        let mut game = ChainReaction::new(2, 4);
        // Every cell is a corner holding one orb of a different player.
        for (r, c) in [(0, 0), (1, 1), (0, 1), (1, 0)] {
            assert!(game.place(r, c));
        }
        assert_eq!(game.current_player(), 1);

        assert!(game.place(0, 0));
        assert_eq!(game.winner(), Some(1));
        assert_eq!(game.total_orbs(), 5);
        // (0,1) and (1,1) were still queued and keep a full load.
        let orbs: Vec<u8> = game.cells.iter().map(|c| c.orbs).collect();
        assert_eq!(orbs, [1, 2, 0, 2]);
        assert!(game.cells.iter().all(|c| c.owner == Some(1)));
        assert_eq!(game.reaction().transfers.len(), 4);
        assert_eq!(game.reaction().waves, 2);
    }

    #[test]
    fn cursor_activation_places_orb() {
        let mut game = ChainReaction::new(10, 2);
        game.apply_action(GameAction::Cursor(Direction::Down));
        game.apply_action(GameAction::Cursor(Direction::Right));
        assert!(game.apply_action(GameAction::Activate));
        assert_eq!(game.cell(1, 1).unwrap().owner, Some(1));
    }
}
