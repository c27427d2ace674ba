//! Core simulation - pure, deterministic, and testable
//!
//! This crate holds every rule of the game and nothing else: no terminal, no
//! keyboard, no sleeping. A frontend feeds it one [`Commands`](types::Commands)
//! value and a "gravity due" flag per frame, and reads back the grid, the active
//! piece and the score to draw.
//!
//! # Module Structure
//!
//! - [`transform`]: point translation, 90° rotation about an anchor, scaling, and
//!   the anchor-first [`PointSet`]
//! - [`grid`]: the settled playfield; locking, row clearing, top-out detection
//! - [`piece`]: the falling piece state machine (move, rotate, drop, gravity)
//! - [`rng`]: seeded LCG and the 7-bag dispenser
//! - [`scoring`]: line-clear awards
//! - [`clock`]: wall-clock gravity interval check
//! - [`session`]: one game from first spawn to top-out
//! - [`config`]: tunables with environment overrides
//!
//! # Game Rules
//!
//! - **7-Bag Randomizer**: every run of seven draws from a refill contains each kind once
//! - **Fixed rotation**: 90° about the piece anchor, no wall kicks; the O piece never rotates
//! - **Instant lock**: a piece locks the moment gravity finds any cell blocked
//! - **Scoring**: 100 / 300 / 500 / 800 for one to four rows
//!
//! # Example
//!
//! ```
//! use cli_tetris_core::{GameConfig, Session};
//! use cli_tetris_types::Commands;
//!
//! let mut session = Session::new(GameConfig::with_seed(12345));
//!
//! session.step(false, Commands::shift(1)).unwrap();
//! session.step(false, Commands::rotate()).unwrap();
//! let outcome = session.step(false, Commands::hard_drop()).unwrap();
//!
//! assert!(outcome.locked);
//! assert_eq!(session.score(), 0);
//! ```

pub mod clock;
pub mod config;
pub mod error;
pub mod grid;
pub mod piece;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod transform;

pub use cli_tetris_types as types;

// Re-export commonly used types for convenience
pub use clock::GravityClock;
pub use config::GameConfig;
pub use error::CoreError;
pub use grid::{Grid, LockReport};
pub use piece::{Piece, PieceState};
pub use rng::{Bag, SimpleRng};
pub use scoring::{line_award, Score};
pub use session::{Session, StepOutcome};
pub use transform::PointSet;
