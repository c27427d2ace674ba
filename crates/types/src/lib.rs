//! Shared types and constants for the falling-block game.
//!
//! Everything here is plain data with no dependencies, so the simulation core,
//! the input layer and the terminal renderer can all agree on the same
//! vocabulary.
//!
//! # Coordinates
//!
//! Grid cells are addressed as `(x, y)` with `x` growing to the right and `y`
//! growing **downward**. Row 0 is the top of the playfield. Pieces may spawn or
//! rotate with some cells at negative `y` (above the visible grid).
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GRAVITY_INTERVAL_MS` | 500 | Time between gravity steps |
//! | `FRAME_SLEEP_MS` | 0 | Extra sleep at the end of every frame |
//!
//! # Examples
//!
//! ```
//! use cli_tetris_types::{PieceKind, Point, GRID_WIDTH, GRID_HEIGHT};
//!
//! let p = Point::new(3, 4).offset(1, -1);
//! assert_eq!(p, Point::new(4, 3));
//!
//! assert_eq!(PieceKind::from_str("o"), Some(PieceKind::O));
//! assert!(!PieceKind::O.rotatable());
//!
//! assert_eq!(GRID_WIDTH, 10);
//! assert_eq!(GRID_HEIGHT, 20);
//! ```

/// Playfield width in cells (10 columns)
pub const GRID_WIDTH: i32 = 10;

/// Playfield height in cells (20 rows)
pub const GRID_HEIGHT: i32 = 20;

/// Gravity interval in milliseconds (one row every half second)
pub const GRAVITY_INTERVAL_MS: u64 = 500;

/// Sleep at the end of each frame in milliseconds.
pub const FRAME_SLEEP_MS: u64 = 0;

/// Number of distinct piece kinds in one bag.
pub const KIND_COUNT: usize = 7;

/// Points awarded for clearing 0, 1, 2, 3 or 4 rows with a single lock.
pub const LINE_AWARDS: [u32; 5] = [0, 100, 300, 500, 800];

/// Minimum terminal size (columns, rows) the game will start in.
pub const MIN_TERMINAL_SIZE: (u16, u16) = (80, 24);

/// A grid-cell coordinate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Returns this point shifted by `(dx, dy)`.
    pub const fn offset(self, dx: i32, dy: i32) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }
}

impl From<(i32, i32)> for Point {
    fn from((x, y): (i32, i32)) -> Self {
        Self { x, y }
    }
}

/// The seven tetromino kinds.
///
/// The kind doubles as the display tag of a settled cell; renderers map it to a
/// color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    Z,
    T,
}

impl PieceKind {
    /// All kinds, in the order a fresh bag lists them before shuffling.
    pub const ALL: [PieceKind; KIND_COUNT] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::T,
    ];

    /// Whether rotate commands have any effect on this kind.
    ///
    /// The square is the only kind that ignores them.
    pub const fn rotatable(self) -> bool {
        !matches!(self, PieceKind::O)
    }

    /// Parse piece kind from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "i" => Some(PieceKind::I),
            "j" => Some(PieceKind::J),
            "l" => Some(PieceKind::L),
            "o" => Some(PieceKind::O),
            "s" => Some(PieceKind::S),
            "z" => Some(PieceKind::Z),
            "t" => Some(PieceKind::T),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::J => "j",
            PieceKind::L => "l",
            PieceKind::O => "o",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::T => "t",
        }
    }
}

/// A settled cell: `None` when empty, otherwise the kind that locked there.
pub type Cell = Option<PieceKind>;

/// Player commands for a single tick, already edge-detected by the input layer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Commands {
    /// Horizontal shift request: -1, 0 or +1.
    pub dx: i32,
    pub rotate: bool,
    pub drop: bool,
}

impl Commands {
    pub const NONE: Commands = Commands {
        dx: 0,
        rotate: false,
        drop: false,
    };

    pub fn shift(dx: i32) -> Self {
        Self {
            dx: dx.signum(),
            ..Self::NONE
        }
    }

    pub fn rotate() -> Self {
        Self {
            rotate: true,
            ..Self::NONE
        }
    }

    pub fn hard_drop() -> Self {
        Self {
            drop: true,
            ..Self::NONE
        }
    }

    pub fn is_empty(&self) -> bool {
        *self == Self::NONE
    }
}
