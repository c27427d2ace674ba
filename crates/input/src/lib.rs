//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events onto the four game keys and edge-detects them:
//! one physical key-down yields one command, however long the key is held.
//! Terminals that never report key releases are covered by a release timeout.

pub mod latch;
pub mod map;

pub use cli_tetris_types as types;

pub use latch::KeyLatch;
pub use map::{map_key, should_quit, GameKey};
