//! Piece module - the falling tetromino
//!
//! A piece is a [`PointSet`] at absolute grid positions plus a two-state
//! lifecycle: `Falling` until gravity finds it blocked, then `Landed` for good.
//! The piece only reads the grid for collision checks; its single write is the
//! [`Grid::lock`] call made when it lands.
//!
//! Command order inside one [`Piece::process`] call is fixed:
//! horizontal move, rotate, hard drop (ends the tick), gravity.

use crate::error::CoreError;
use crate::grid::{Grid, LockReport};
use crate::scoring::Score;
use crate::transform::PointSet;
use crate::types::{Commands, PieceKind, Point};

/// Lifecycle of a piece.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceState {
    Falling,
    Landed,
}

/// Spawn layout of a kind: anchor row and the other cells relative to the anchor.
///
/// The anchor column is always the middle of the grid.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SpawnLayout {
    pub anchor_y: i32,
    pub offsets: [(i32, i32); 3],
}

/// Spawn layout for a piece kind.
pub fn spawn_layout(kind: PieceKind) -> SpawnLayout {
    let (anchor_y, offsets) = match kind {
        PieceKind::I => (2, [(0, -2), (0, -1), (0, 1)]),
        PieceKind::J => (0, [(-1, 0), (1, 0), (1, 1)]),
        PieceKind::L => (1, [(-1, 0), (1, 0), (1, -1)]),
        PieceKind::O => (0, [(1, 0), (0, 1), (1, 1)]),
        PieceKind::S => (0, [(-1, 1), (0, 1), (1, 0)]),
        PieceKind::Z => (0, [(-1, 0), (0, 1), (1, 1)]),
        PieceKind::T => (1, [(-1, 0), (0, -1), (1, 0)]),
    };
    SpawnLayout { anchor_y, offsets }
}

/// The active falling piece.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    cells: PointSet,
    state: PieceState,
}

impl Piece {
    /// Create a piece at its spawn position on a grid `grid_width` wide.
    pub fn spawn(kind: PieceKind, grid_width: i32) -> Self {
        let layout = spawn_layout(kind);
        let anchor = Point::new(grid_width / 2, layout.anchor_y);
        Self::with_cells(kind, PointSet::from_offsets(anchor, &layout.offsets))
    }

    /// Create a falling piece with explicit cells.
    pub fn with_cells(kind: PieceKind, cells: PointSet) -> Self {
        Self {
            kind,
            cells,
            state: PieceState::Falling,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn cells(&self) -> &PointSet {
        &self.cells
    }

    pub fn state(&self) -> PieceState {
        self.state
    }

    pub fn is_landed(&self) -> bool {
        self.state == PieceState::Landed
    }

    /// Whether `cells` could be occupied by this piece on `grid`.
    fn fits(grid: &Grid, cells: &PointSet) -> bool {
        cells.iter().all(|p| {
            p.x >= 0 && p.x < grid.width() && p.y < grid.height() && !grid.is_occupied(p.x, p.y)
        })
    }

    /// Run one frame of commands and gravity.
    ///
    /// Returns the lock report if the piece landed during this call.
    pub fn process(
        &mut self,
        grid: &mut Grid,
        score: &mut Score,
        gravity_due: bool,
        commands: Commands,
    ) -> Result<Option<LockReport>, CoreError> {
        if self.is_landed() {
            return Ok(None);
        }

        if commands.dx != 0 {
            self.try_shift(grid, commands.dx);
        }

        if commands.rotate {
            self.try_rotate(grid);
        }

        if commands.drop {
            return self.hard_drop(grid, score);
        }

        if gravity_due {
            return self.gravity_step(grid, score);
        }

        Ok(None)
    }

    /// Shift sideways by `dx` columns if every cell fits; otherwise stay put.
    pub fn try_shift(&mut self, grid: &Grid, dx: i32) -> bool {
        if self.is_landed() {
            return false;
        }
        let moved = self.cells.translated(dx, 0);
        if !Self::fits(grid, &moved) {
            return false;
        }
        self.cells = moved;
        true
    }

    /// Rotate a quarter turn about the anchor if the result fits.
    ///
    /// Kinds that are not rotatable never change.
    pub fn try_rotate(&mut self, grid: &Grid) -> bool {
        if self.is_landed() || !self.kind.rotatable() {
            return false;
        }
        let rotated = self.cells.rotated();
        if !Self::fits(grid, &rotated) {
            return false;
        }
        self.cells = rotated;
        true
    }

    /// Apply gravity until the piece lands.
    pub fn hard_drop(
        &mut self,
        grid: &mut Grid,
        score: &mut Score,
    ) -> Result<Option<LockReport>, CoreError> {
        while !self.is_landed() {
            if let Some(report) = self.gravity_step(grid, score)? {
                return Ok(Some(report));
            }
        }
        Ok(None)
    }

    /// Move down one row, or land and lock if any cell is blocked below.
    pub fn gravity_step(
        &mut self,
        grid: &mut Grid,
        score: &mut Score,
    ) -> Result<Option<LockReport>, CoreError> {
        if self.is_landed() {
            return Ok(None);
        }

        let blocked = self
            .cells
            .iter()
            .any(|p| p.y + 1 >= grid.height() || grid.is_occupied(p.x, p.y + 1));

        if blocked {
            self.state = PieceState::Landed;
            let report = grid.lock(&self.cells.points(), self.kind, score)?;
            return Ok(Some(report));
        }

        self.cells = self.cells.translated(0, 1);
        Ok(None)
    }
}
