//! Error type for contract violations inside the core.
//!
//! Normal play never produces an error: blocked moves and rotations are simply
//! rejected. The only failure is a caller asking for a line award the scoring
//! table does not define.

/// Errors raised by the simulation core.
#[derive(Debug, thiserror::Error, PartialEq, Eq, Clone, Copy)]
pub enum CoreError {
    #[error("0 to 4 cleared lines are the only accepted values, got {0}")]
    InvalidLineCount(usize),
}
