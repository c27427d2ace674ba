//! Scoring module - fixed awards per lock
//!
//! Rows cleared by one lock map to a flat award: 0, 100, 300, 500, 800. There
//! are no levels, combos or drop bonuses.

use crate::error::CoreError;
use crate::types::LINE_AWARDS;

/// Points for clearing `lines` rows with one lock.
///
/// Any count above four cannot come from a single tetromino and is rejected
/// as a caller error.
pub fn line_award(lines: usize) -> Result<u32, CoreError> {
    LINE_AWARDS
        .get(lines)
        .copied()
        .ok_or(CoreError::InvalidLineCount(lines))
}

/// Running score. Only ever grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Score {
    value: u32,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    /// Add the award for `lines` cleared rows and return it.
    ///
    /// On error the score is left untouched.
    pub fn award(&mut self, lines: usize) -> Result<u32, CoreError> {
        let points = line_award(lines)?;
        self.value = self.value.saturating_add(points);
        Ok(points)
    }
}
