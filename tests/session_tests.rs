//! Integration tests - whole sessions through the public API

use cli_tetris::core::types::Commands;
use cli_tetris::core::{GameConfig, Session};

fn drop_until_over(session: &mut Session, limit: usize) -> usize {
    for step in 0..limit {
        if session.step(false, Commands::hard_drop()).unwrap().game_over {
            return step + 1;
        }
    }
    panic!("no top-out within {} drops", limit);
}

#[test]
fn test_stacking_in_the_middle_tops_out() {
    let mut session = Session::new(GameConfig::with_seed(2024));
    let drops = drop_until_over(&mut session, 200);

    assert!(session.is_over());
    assert!(session.grid().topped_out());
    assert_eq!(session.pieces_spawned() as usize, drops);
}

#[test]
fn test_over_session_ignores_input() {
    let mut session = Session::new(GameConfig::with_seed(8));
    drop_until_over(&mut session, 200);

    let grid_before = session.grid().clone();
    let score_before = session.score();
    let active_before = session.active().clone();
    for _ in 0..5 {
        let outcome = session.step(true, Commands::shift(-1)).unwrap();
        assert!(outcome.game_over);
        assert!(!outcome.locked);
    }
    assert_eq!(session.grid(), &grid_before);
    assert_eq!(session.score(), score_before);
    assert_eq!(session.active(), &active_before);
}

#[test]
fn test_score_never_decreases() {
    let mut session = Session::new(GameConfig::with_seed(31));
    let mut last = 0;
    let mut dx: i32 = -4;
    for _ in 0..500 {
        if session.is_over() {
            break;
        }
        // Spread pieces across the width so some rows fill.
        for _ in 0..dx.abs() {
            session
                .step(false, Commands::shift(dx.signum()))
                .unwrap();
        }
        let outcome = session.step(false, Commands::hard_drop()).unwrap();
        assert!(session.score() >= last);
        assert_eq!(session.score() - last, outcome.award);
        last = session.score();
        dx = if dx >= 4 { -4 } else { dx + 2 };
    }
}

#[test]
fn test_gravity_only_eventually_locks() {
    let mut session = Session::new(GameConfig::with_seed(5));
    let mut locked_after = None;
    for tick in 0..40 {
        if session.step(true, Commands::NONE).unwrap().locked {
            locked_after = Some(tick);
            break;
        }
    }
    // A fresh piece falls at most the grid height before landing.
    let ticks = locked_after.expect("piece should lock");
    assert!(ticks <= 20);
    assert_eq!(session.pieces_spawned(), 2);
}

#[test]
fn test_custom_grid_size() {
    let config = GameConfig {
        width: 6,
        height: 8,
        ..GameConfig::with_seed(4)
    };
    let session = Session::new(config);
    assert_eq!(session.grid().width(), 6);
    assert_eq!(session.grid().height(), 8);
    assert_eq!(session.active().cells().anchor().x, 3);
}
