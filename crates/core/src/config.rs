//! Game configuration with environment overrides.

use std::time::{Duration, SystemTime, UNIX_EPOCH};

use log::warn;

use crate::types::{FRAME_SLEEP_MS, GRAVITY_INTERVAL_MS, GRID_HEIGHT, GRID_WIDTH};

/// Smallest grid side that still fits every spawn shape.
pub const MIN_GRID_SIDE: i32 = 4;

/// Largest grid side accepted from the environment.
pub const MAX_GRID_SIDE: i32 = 256;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameConfig {
    pub width: i32,
    pub height: i32,
    pub gravity_interval: Duration,
    pub frame_sleep: Duration,
    /// Seed for the bag shuffle.
    pub seed: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: GRID_WIDTH,
            height: GRID_HEIGHT,
            gravity_interval: Duration::from_millis(GRAVITY_INTERVAL_MS),
            frame_sleep: Duration::from_millis(FRAME_SLEEP_MS),
            seed: 1,
        }
    }
}

impl GameConfig {
    /// Defaults with a fixed seed.
    pub fn with_seed(seed: u32) -> Self {
        Self {
            seed,
            ..Self::default()
        }
    }

    /// Create from environment variables
    ///
    /// `TETRIS_SEED`, `TETRIS_GRAVITY_MS`, `TETRIS_FRAME_MS`, `TETRIS_WIDTH`,
    /// `TETRIS_HEIGHT`. Without `TETRIS_SEED` the seed comes from the clock.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Same as [`from_env`](Self::from_env) with a custom variable source.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();

        let width = clamp_side("TETRIS_WIDTH", parse_var(&lookup, "TETRIS_WIDTH", defaults.width));
        let height = clamp_side(
            "TETRIS_HEIGHT",
            parse_var(&lookup, "TETRIS_HEIGHT", defaults.height),
        );
        let gravity_ms = parse_var(&lookup, "TETRIS_GRAVITY_MS", GRAVITY_INTERVAL_MS);
        let frame_ms = parse_var(&lookup, "TETRIS_FRAME_MS", FRAME_SLEEP_MS);
        let seed = parse_var(&lookup, "TETRIS_SEED", clock_seed());

        Self {
            width,
            height,
            gravity_interval: Duration::from_millis(gravity_ms),
            frame_sleep: Duration::from_millis(frame_ms),
            seed,
        }
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &str,
    default: T,
) -> T {
    match lookup(key) {
        None => default,
        Some(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                warn!("ignoring {}={:?}: not a valid value", key, raw);
                default
            }
        },
    }
}

fn clamp_side(key: &str, value: i32) -> i32 {
    let clamped = value.clamp(MIN_GRID_SIDE, MAX_GRID_SIDE);
    if clamped != value {
        warn!("{}={} out of range, using {}", key, value, clamped);
    }
    clamped
}

fn clock_seed() -> u32 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.subsec_nanos() ^ d.as_secs() as u32)
        .unwrap_or(1)
}
