//! Bag tests - every kind once per cycle

use std::collections::HashSet;

use cli_tetris::core::types::{PieceKind, KIND_COUNT};
use cli_tetris::core::Bag;
use proptest::prelude::*;

#[test]
fn test_first_cycle_has_every_kind() {
    let mut bag = Bag::new(12345);
    let drawn: HashSet<PieceKind> = (0..KIND_COUNT).map(|_| bag.draw()).collect();
    assert_eq!(drawn.len(), KIND_COUNT);
}

#[test]
fn test_peek_matches_next_draw() {
    let mut bag = Bag::new(9);
    for _ in 0..30 {
        let next = bag.peek();
        assert_eq!(bag.draw(), next);
    }
}

#[test]
fn test_same_seed_same_sequence() {
    let mut a = Bag::new(77);
    let mut b = Bag::new(77);
    for _ in 0..50 {
        assert_eq!(a.draw(), b.draw());
    }
}

proptest! {
    #[test]
    fn every_window_of_seven_is_a_permutation(seed in any::<u32>(), cycles in 1usize..6) {
        let mut bag = Bag::new(seed);
        for _ in 0..cycles {
            let window: HashSet<PieceKind> = (0..KIND_COUNT).map(|_| bag.draw()).collect();
            prop_assert_eq!(window.len(), KIND_COUNT);
        }
    }
}
