//! RNG module - seedable randomness for every game
//!
//! All random choices (piece selection, tile spawns, shuffles, food placement)
//! go through [`RandomSource`], so a game built with the same seed replays
//! identically and tests can script exact outcomes with [`Sequence`].
//!
//! Also implements the "7-bag" randomizer used by Marathon Tetris: each bag
//! contains one of each piece, shuffled, drawn until empty, then refilled.

use crate::types::PieceKind;

/// Source of uniformly distributed `u32` values
pub trait RandomSource {
    /// Generate next random u32
    fn next_u32(&mut self) -> u32;

    /// Generate random value in range [0, max)
    ///
    /// Returns 0 when `max` is 0.
    fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        self.next_u32() % max
    }

    /// Random index into a collection of `len` elements
    fn pick(&mut self, len: usize) -> usize {
        self.next_range(len as u32) as usize
    }

    /// True with probability `numerator / denominator`
    fn chance(&mut self, numerator: u32, denominator: u32) -> bool {
        self.next_range(denominator) < numerator
    }

    /// Shuffle a slice using Fisher-Yates
    fn shuffle<T>(&mut self, slice: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// Simple LCG (Linear Congruential Generator) RNG
/// Uses constants from Numerical Recipes
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Current internal state (usable as a seed to replay from here)
    pub fn state(&self) -> u32 {
        self.state
    }
}

impl RandomSource for SimpleRng {
    fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod m
        // Using Numerical Recipes constants: a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        // The low bits of a power-of-two LCG have short periods; use the high half.
        self.state >> 16
    }
}

impl Default for SimpleRng {
    fn default() -> Self {
        Self::new(1)
    }
}

/// Replays a fixed list of values, cycling when exhausted
///
/// Lets tests decide exactly which cell, piece or tile a game picks.
#[derive(Debug, Clone)]
pub struct Sequence {
    values: Vec<u32>,
    index: usize,
}

impl Sequence {
    pub fn new(values: impl Into<Vec<u32>>) -> Self {
        let mut values = values.into();
        if values.is_empty() {
            values.push(0);
        }
        Self { values, index: 0 }
    }
}

impl RandomSource for Sequence {
    fn next_u32(&mut self) -> u32 {
        let v = self.values[self.index % self.values.len()];
        self.index += 1;
        v
    }
}

/// 7-bag piece generator
#[derive(Debug, Clone)]
pub struct PieceBag<R: RandomSource = SimpleRng> {
    /// Current bag of pieces
    bag: [PieceKind; 7],
    /// Index into current bag
    bag_index: usize,
    /// RNG for shuffling
    rng: R,
}

impl PieceBag<SimpleRng> {
    /// Create a new bag with the given seed
    pub fn new(seed: u32) -> Self {
        Self::with_rng(SimpleRng::new(seed))
    }
}

impl<R: RandomSource> PieceBag<R> {
    pub fn with_rng(rng: R) -> Self {
        let mut queue = Self {
            bag: PieceKind::ALL,
            bag_index: 0,
            rng,
        };
        queue.refill_bag();
        queue
    }

    /// Generate a new shuffled bag
    fn refill_bag(&mut self) {
        self.bag = PieceKind::ALL;
        self.rng.shuffle(&mut self.bag);
        self.bag_index = 0;
    }

    /// Draw the next piece from the queue
    pub fn draw(&mut self) -> PieceKind {
        if self.bag_index >= 7 {
            self.refill_bag();
        }

        let piece = self.bag[self.bag_index];
        self.bag_index += 1;
        piece
    }

    /// Pieces left in the current bag
    pub fn remaining(&self) -> &[PieceKind] {
        &self.bag[self.bag_index..]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        // Same seed should produce same sequence
        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn test_rng_different_seeds() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(54321);

        let a: Vec<u32> = (0..8).map(|_| rng1.next_u32()).collect();
        let b: Vec<u32> = (0..8).map(|_| rng2.next_u32()).collect();
        assert_ne!(a, b);
    }

    #[test]
    fn test_next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(7);
        for max in 1..50 {
            assert!(rng.next_range(max) < max);
        }
        assert_eq!(rng.next_range(0), 0);
    }

    #[test]
    fn test_sequence_cycles() {
        let mut seq = Sequence::new(vec![3, 1]);
        assert_eq!(seq.next_u32(), 3);
        assert_eq!(seq.next_u32(), 1);
        assert_eq!(seq.next_u32(), 3);
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = SimpleRng::new(99);
        let mut v: Vec<u32> = (0..25).collect();
        rng.shuffle(&mut v);
        let mut sorted = v.clone();
        sorted.sort();
        assert_eq!(sorted, (0..25).collect::<Vec<_>>());
    }

    #[test]
    fn test_piece_bag_draws_all_seven() {
        let mut queue = PieceBag::new(1);

        let mut drawn = Vec::new();
        for _ in 0..7 {
            drawn.push(queue.draw());
        }

        for kind in PieceKind::ALL {
            assert!(drawn.contains(&kind), "Missing piece: {:?}", kind);
        }
        assert!(queue.remaining().is_empty());
    }

    #[test]
    fn test_piece_bag_auto_refill() {
        let mut queue = PieceBag::new(1);
        for _ in 0..7 {
            queue.draw();
        }
        let _eighth = queue.draw();
        assert_eq!(queue.remaining().len(), 6);
    }
}
