//! RNG module - 7-bag piece dispenser
//!
//! Each bag holds one of each kind. The bag is shuffled when (re)filled and
//! then drained front to back through a cursor, which is equivalent to picking
//! uniformly among the kinds still in the bag on every draw. As soon as the
//! last kind is drawn the bag is refilled, so there is always a next piece.
//!
//! Also provides a simple LCG so a seed reproduces the whole piece sequence.

use log::trace;

use crate::types::{PieceKind, KIND_COUNT};

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

    /// Generate next random u32
    pub fn next_u32(&mut self) -> u32 {
        // a=1664525, c=1013904223, m=2^32
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max)
    ///
    /// Uses the high bits; the low bits of a power-of-two LCG cycle quickly.
    pub fn next_range(&mut self, max: u32) -> u32 {
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }

    /// Shuffle a slice using Fisher-Yates
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }

    pub fn state(&self) -> u32 {
        self.state
    }
}

/// 7-bag piece dispenser
#[derive(Debug, Clone)]
pub struct Bag {
    /// Shuffled kinds of the current bag
    order: [PieceKind; KIND_COUNT],
    /// Index of the next kind to hand out
    cursor: usize,
    rng: SimpleRng,
    refills: u64,
}

impl Bag {
    /// Create a full, shuffled bag with the given seed
    pub fn new(seed: u32) -> Self {
        let mut bag = Self {
            order: PieceKind::ALL,
            cursor: 0,
            rng: SimpleRng::new(seed),
            refills: 0,
        };
        bag.refill();
        bag
    }

    fn refill(&mut self) {
        self.order = PieceKind::ALL;
        self.rng.shuffle(&mut self.order);
        self.cursor = 0;
        self.refills += 1;
        trace!("bag refill #{}: {:?}", self.refills, self.order);
    }

    /// Take the next kind out of the bag, refilling it if that emptied it.
    pub fn draw(&mut self) -> PieceKind {
        let kind = self.order[self.cursor];
        self.cursor += 1;
        if self.cursor == KIND_COUNT {
            self.refill();
        }
        kind
    }

    /// The kind the next [`draw`](Self::draw) returns.
    pub fn peek(&self) -> PieceKind {
        self.order[self.cursor]
    }

    /// Kinds still in the current bag, in the order they will be drawn.
    pub fn remaining(&self) -> &[PieceKind] {
        &self.order[self.cursor..]
    }

    /// How many times the bag has been filled, including the initial fill.
    pub fn refills(&self) -> u64 {
        self.refills
    }
}

impl Default for Bag {
    fn default() -> Self {
        Self::new(1)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rng_deterministic() {
        let mut rng1 = SimpleRng::new(12345);
        let mut rng2 = SimpleRng::new(12345);

        for _ in 0..100 {
            assert_eq!(rng1.next_u32(), rng2.next_u32());
        }
    }

    #[test]
    fn rng_zero_seed_is_remapped() {
        assert_eq!(SimpleRng::new(0).state(), 1);
    }

    #[test]
    fn next_range_stays_in_bounds() {
        let mut rng = SimpleRng::new(99);
        for max in 1..20 {
            for _ in 0..50 {
                assert!(rng.next_range(max) < max);
            }
        }
    }

    #[test]
    fn shuffle_is_a_permutation() {
        let mut rng = SimpleRng::new(7);
        let mut items = [0, 1, 2, 3, 4, 5, 6, 7, 8, 9];
        rng.shuffle(&mut items);
        let mut sorted = items;
        sorted.sort_unstable();
        assert_eq!(sorted, [0, 1, 2, 3, 4, 5, 6, 7, 8, 9]);
    }

    #[test]
    fn fresh_bag_is_full() {
        let bag = Bag::new(1);
        assert_eq!(bag.remaining().len(), KIND_COUNT);
        assert_eq!(bag.refills(), 1);
    }

    #[test]
    fn draws_all_seven() {
        let mut bag = Bag::new(1);
        let mut drawn: Vec<PieceKind> = (0..7).map(|_| bag.draw()).collect();
        drawn.sort_by_key(|k| PieceKind::ALL.iter().position(|a| a == k));
        assert_eq!(drawn, PieceKind::ALL.to_vec());
    }

    #[test]
    fn refills_right_after_emptying() {
        let mut bag = Bag::new(3);
        for _ in 0..6 {
            bag.draw();
        }
        assert_eq!(bag.remaining().len(), 1);
        bag.draw();
        assert_eq!(bag.remaining().len(), KIND_COUNT);
        assert_eq!(bag.refills(), 2);
    }

    #[test]
    fn peek_matches_draw() {
        let mut bag = Bag::new(1);
        for _ in 0..20 {
            let peeked = bag.peek();
            assert_eq!(peeked, bag.draw());
        }
    }
}
