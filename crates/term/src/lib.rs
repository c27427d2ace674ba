//! Terminal rendering for the game.
//!
//! The core hands over raw data only: grid cells tagged with their piece kind,
//! the active piece's cells, and the score. This crate turns that into
//! colored terminal cells and writes them out.
//!
//! - [`fb`]: back buffer of styled character cells
//! - [`palette`]: piece colors and the gray shift applied to settled cells
//! - [`view`]: lays out the playfield, score and game-over banner (2x1 cells)
//! - [`renderer`]: double-buffered crossterm output, sending only changed runs

pub mod fb;
pub mod palette;
pub mod renderer;
pub mod view;

pub use cli_tetris_core as core;
pub use cli_tetris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use view::PlayfieldView;
