//! CLI Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `cli_tetris::{core,input,term,types}` so
//! the binary, integration tests and benches share one import path.

pub use cli_tetris_core as core;
pub use cli_tetris_input as input;
pub use cli_tetris_term as term;
pub use cli_tetris_types as types;
