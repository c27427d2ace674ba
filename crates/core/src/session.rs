//! Session module - one game from the first spawn to top-out
//!
//! Owns the grid, the score, the bag and the active piece, and replaces a
//! landed piece with the next one from the bag until the grid tops out.

use log::info;

use crate::config::GameConfig;
use crate::error::CoreError;
use crate::grid::Grid;
use crate::piece::Piece;
use crate::rng::Bag;
use crate::scoring::Score;
use crate::types::{Commands, PieceKind};

/// Result of one [`Session::step`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StepOutcome {
    /// The active piece locked during this step.
    pub locked: bool,
    pub lines_cleared: usize,
    pub award: u32,
    /// The session is over (either just now or already before this step).
    pub game_over: bool,
}

#[derive(Debug, Clone)]
pub struct Session {
    grid: Grid,
    score: Score,
    bag: Bag,
    active: Piece,
    pieces_spawned: u32,
    over: bool,
}

impl Session {
    /// Build an empty grid and spawn the first piece.
    pub fn new(config: GameConfig) -> Self {
        let grid = Grid::new(config.width, config.height);
        let mut bag = Bag::new(config.seed);
        let active = Piece::spawn(bag.draw(), grid.width());
        info!(
            "session start: {}x{} grid, seed {}",
            grid.width(),
            grid.height(),
            config.seed
        );
        Self {
            grid,
            score: Score::new(),
            bag,
            active,
            pieces_spawned: 1,
            over: false,
        }
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    pub fn active(&self) -> &Piece {
        &self.active
    }

    pub fn score(&self) -> u32 {
        self.score.value()
    }

    pub fn is_over(&self) -> bool {
        self.over
    }

    /// The kind that spawns after the active piece lands.
    pub fn next_kind(&self) -> PieceKind {
        self.bag.peek()
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Advance one frame.
    pub fn step(&mut self, gravity_due: bool, commands: Commands) -> Result<StepOutcome, CoreError> {
        if self.over {
            return Ok(StepOutcome {
                game_over: true,
                ..StepOutcome::default()
            });
        }

        let mut outcome = StepOutcome::default();
        let report = self
            .active
            .process(&mut self.grid, &mut self.score, gravity_due, commands)?;

        if let Some(report) = report {
            outcome.locked = true;
            outcome.lines_cleared = report.lines_cleared();
            outcome.award = report.award;
        }

        if self.active.is_landed() {
            if self.grid.topped_out() {
                info!(
                    "game over after {} pieces, score {}",
                    self.pieces_spawned,
                    self.score.value()
                );
                self.over = true;
            } else {
                self.active = Piece::spawn(self.bag.draw(), self.grid.width());
                self.pieces_spawned = self.pieces_spawned.wrapping_add(1);
            }
        }

        outcome.game_over = self.over;
        Ok(outcome)
    }
}
