//! Grid module - the settled playfield
//!
//! A fixed `width x height` matrix of cells stored as a flat row-major array.
//! Coordinates: (x, y) where x ranges 0..width (left to right) and y ranges
//! 0..height (top to bottom).
//!
//! Cells only ever become occupied through [`Grid::lock`], which also clears
//! completed rows and feeds the cleared count to the score. Nothing else writes
//! to the grid.

use log::{debug, info};

use crate::error::CoreError;
use crate::scoring::Score;
use crate::types::{Cell, PieceKind, Point};

/// What a single [`Grid::lock`] did.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct LockReport {
    /// Indices of the removed rows, ascending, as they were before compaction.
    pub cleared_rows: Vec<usize>,
    /// Points added to the score for this lock.
    pub award: u32,
    /// Whether the grid is topped out after this lock.
    pub topped_out: bool,
}

impl LockReport {
    pub fn lines_cleared(&self) -> usize {
        self.cleared_rows.len()
    }
}

/// The playfield.
#[derive(Debug, Clone, PartialEq)]
pub struct Grid {
    width: i32,
    height: i32,
    /// Flat array of cells, row-major order (y * width + x)
    cells: Vec<Cell>,
    topped_out: bool,
}

impl Grid {
    /// Create an empty grid.
    ///
    /// # Panics
    ///
    /// If either dimension is not positive.
    pub fn new(width: i32, height: i32) -> Self {
        assert!(width > 0 && height > 0, "grid dimensions must be positive");
        Self {
            width,
            height,
            cells: vec![None; width as usize * height as usize],
            topped_out: false,
        }
    }

    #[inline(always)]
    fn index(&self, x: i32, y: i32) -> Option<usize> {
        if x < 0 || x >= self.width || y < 0 || y >= self.height {
            return None;
        }
        Some((y as usize) * (self.width as usize) + (x as usize))
    }

    pub fn width(&self) -> i32 {
        self.width
    }

    pub fn height(&self) -> i32 {
        self.height
    }

    /// Terminal flag: set once a lock leaves the top row occupied, never cleared.
    pub fn topped_out(&self) -> bool {
        self.topped_out
    }

    /// Get cell at position (x, y); `None` if out of bounds.
    pub fn get(&self, x: i32, y: i32) -> Option<Cell> {
        self.index(x, y).map(|idx| self.cells[idx])
    }

    /// Whether a settled cell sits at (x, y).
    ///
    /// Anything above the top row is never occupied, so pieces can hang over
    /// the grid while they spawn or rotate. Other out-of-range coordinates
    /// also report `false`; callers bounds-check x and the bottom edge
    /// themselves.
    pub fn is_occupied(&self, x: i32, y: i32) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Topmost occupied row in `column`, or the grid height for an empty
    /// (or nonexistent) column.
    pub fn floor(&self, column: i32) -> i32 {
        (0..self.height)
            .find(|&y| self.is_occupied(column, y))
            .unwrap_or(self.height)
    }

    /// One row of cells.
    pub fn row(&self, y: usize) -> &[Cell] {
        let w = self.width as usize;
        &self.cells[y * w..(y + 1) * w]
    }

    /// Rows from top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> + '_ {
        self.cells.chunks(self.width as usize)
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    fn occupied_in_row(&self, y: usize) -> usize {
        self.row(y).iter().filter(|cell| cell.is_some()).count()
    }

    /// Settle `points` into the grid with display tag `kind`, clear every
    /// completed row among the rows they touch, update the top-out flag, and
    /// award the score for the rows removed.
    ///
    /// All completed rows are identified first and removed together, so row
    /// indices never shift mid-scan. Points above the top row have nowhere to
    /// go and are dropped.
    pub fn lock(
        &mut self,
        points: &[Point],
        kind: PieceKind,
        score: &mut Score,
    ) -> Result<LockReport, CoreError> {
        let mut rows_to_scan: Vec<usize> = Vec::with_capacity(points.len());
        for p in points {
            match self.index(p.x, p.y) {
                Some(idx) => {
                    self.cells[idx] = Some(kind);
                    rows_to_scan.push(p.y as usize);
                }
                None => debug!("lock: dropping {:?} outside the grid", p),
            }
        }
        rows_to_scan.sort_unstable();
        rows_to_scan.dedup();

        let width = self.width as usize;
        let cleared_rows: Vec<usize> = rows_to_scan
            .into_iter()
            .filter(|&y| self.occupied_in_row(y) >= width)
            .collect();

        if !cleared_rows.is_empty() {
            self.compact(&cleared_rows);
        }

        if self.row(0).iter().any(|cell| cell.is_some()) && !self.topped_out {
            info!("grid topped out");
            self.topped_out = true;
        }

        let award = score.award(cleared_rows.len())?;
        debug!(
            "locked {:?} piece, cleared rows {:?}, award {}",
            kind, cleared_rows, award
        );

        Ok(LockReport {
            cleared_rows,
            award,
            topped_out: self.topped_out,
        })
    }

    /// Remove `rows` (ascending) in one pass and refill the top with empty rows.
    fn compact(&mut self, rows: &[usize]) {
        let width = self.width as usize;
        let mut write_y = self.height as usize;

        for read_y in (0..self.height as usize).rev() {
            if rows.binary_search(&read_y).is_ok() {
                continue;
            }
            write_y -= 1;
            if write_y != read_y {
                let src = read_y * width;
                self.cells.copy_within(src..src + width, write_y * width);
            }
        }

        self.cells[..write_y * width].fill(None);
    }
}

impl Default for Grid {
    fn default() -> Self {
        Self::new(crate::types::GRID_WIDTH, crate::types::GRID_HEIGHT)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_points(y: i32, xs: impl IntoIterator<Item = i32>) -> Vec<Point> {
        xs.into_iter().map(|x| Point::new(x, y)).collect()
    }

    #[test]
    fn index_calculation() {
        let grid = Grid::new(10, 20);
        assert_eq!(grid.index(0, 0), Some(0));
        assert_eq!(grid.index(9, 0), Some(9));
        assert_eq!(grid.index(0, 1), Some(10));
        assert_eq!(grid.index(9, 19), Some(199));
        assert_eq!(grid.index(-1, 0), None);
        assert_eq!(grid.index(10, 0), None);
        assert_eq!(grid.index(0, 20), None);
        assert_eq!(grid.index(0, -1), None);
    }

    #[test]
    fn negative_rows_are_never_occupied() {
        let mut grid = Grid::new(4, 4);
        let mut score = Score::new();
        grid.lock(&row_points(0, [0]), PieceKind::T, &mut score)
            .unwrap();
        assert!(grid.is_occupied(0, 0));
        assert!(!grid.is_occupied(0, -1));
        assert!(!grid.is_occupied(0, -4));
    }

    #[test]
    fn compaction_keeps_unmarked_rows_in_order() {
        let mut grid = Grid::new(3, 5);
        let mut score = Score::new();
        // Row 1 partial, row 2 full, row 3 partial, row 4 full.
        grid.lock(&row_points(1, [0]), PieceKind::I, &mut score).unwrap();
        grid.lock(&row_points(3, [2]), PieceKind::J, &mut score).unwrap();
        let mut full = row_points(2, 0..3);
        full.extend(row_points(4, 0..3));
        let report = grid.lock(&full, PieceKind::L, &mut score).unwrap();

        assert_eq!(report.cleared_rows, vec![2, 4]);
        assert_eq!(report.award, 300);
        assert_eq!(grid.row(0), &[None, None, None]);
        assert_eq!(grid.row(1), &[None, None, None]);
        assert_eq!(grid.row(2), &[None, None, None]);
        assert_eq!(grid.row(3), &[Some(PieceKind::I), None, None]);
        assert_eq!(grid.row(4), &[None, None, Some(PieceKind::J)]);
    }

    #[test]
    fn lock_drops_points_above_the_grid() {
        let mut grid = Grid::new(4, 4);
        let mut score = Score::new();
        let report = grid
            .lock(
                &[Point::new(1, -1), Point::new(1, 3)],
                PieceKind::Z,
                &mut score,
            )
            .unwrap();
        assert!(report.cleared_rows.is_empty());
        assert_eq!(grid.cells().iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn floor_of_missing_column_is_height() {
        let grid = Grid::new(4, 6);
        assert_eq!(grid.floor(-1), 6);
        assert_eq!(grid.floor(4), 6);
    }
}
