//! Shared types and constants for blockfall.
//!
//! Everything here is plain data with no dependencies, so it can be used by the
//! simulation core, the input adapter and the terminal renderer alike.
//!
//! # Board dimensions
//!
//! - **Width**: always 10 columns (indexed 0-9)
//! - **Height**: 20 rows by default, configurable between 4 and 40
//! - **Spawn origin**: (0, 0); shapes are defined relative to it
//!
//! # Timing
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `FRAME_MS` | 16 | Frame length used by the runner (~60 FPS) |
//! | `BASE_FALL_MS` | 1000 | Fall interval at speed 1 |
//! | `MAX_SPEED` | 5 | Speeds above this fall no faster |
//!
//! # Examples
//!
//! ```
//! use blockfall_types::{PieceColor, PieceKind, RotationPolicy, BOARD_WIDTH};
//!
//! let kind = PieceKind::ALL[2];
//! assert_eq!(kind, PieceKind::T);
//! assert_eq!(kind.index(), 2);
//! assert_eq!(kind.cell_value(), 3);
//! assert_eq!(kind.color(), PieceColor::Orange);
//!
//! assert_eq!(RotationPolicy::default().as_str(), "anchored");
//! assert_eq!(BOARD_WIDTH, 10);
//! ```

/// Board width in cells. Not configurable.
pub const BOARD_WIDTH: u8 = 10;

/// Default board height in cells.
pub const DEFAULT_BOARD_ROWS: u8 = 20;

/// Smallest accepted board height.
pub const MIN_BOARD_ROWS: u8 = 4;

/// Largest accepted board height.
pub const MAX_BOARD_ROWS: u8 = 40;

/// Frame length in milliseconds (16ms ≈ 60 FPS).
pub const FRAME_MS: u32 = 16;

/// Fall interval at speed 1 (one row per second).
pub const BASE_FALL_MS: u32 = 1000;

/// Initial speed of a new game.
pub const DEFAULT_SPEED: u32 = 1;

/// Fall speed cap: the interval never drops below `BASE_FALL_MS / MAX_SPEED`.
pub const MAX_SPEED: u32 = 5;

/// Points awarded per cleared line.
pub const POINTS_PER_LINE: u32 = 100;

/// Board position a freshly spawned piece's shape offsets are relative to.
pub const SPAWN_ORIGIN: Point = (0, 0);

/// Offsets tried in order by [`RotationPolicy::WallKick`]:
/// no shift, left, right, up, down.
pub const WALL_KICKS: [Point; 5] = [(0, 0), (-1, 0), (1, 0), (0, -1), (0, 1)];

/// An (x, y) board coordinate or offset. `x` grows to the right, `y` grows downward.
pub type Point = (i32, i32);

/// The seven piece kinds, in shape-table order.
///
/// The order matters: a kind's position is its index into the shape table and,
/// offset by one, into the color palette and the board cell values.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    L,
    J,
}

impl PieceKind {
    /// All kinds in shape-table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::O,
        PieceKind::T,
        PieceKind::S,
        PieceKind::Z,
        PieceKind::L,
        PieceKind::J,
    ];

    /// Position in the shape table (0..=6).
    pub fn index(self) -> usize {
        match self {
            PieceKind::I => 0,
            PieceKind::O => 1,
            PieceKind::T => 2,
            PieceKind::S => 3,
            PieceKind::Z => 4,
            PieceKind::L => 5,
            PieceKind::J => 6,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Value written into board cells when a piece of this kind locks (1..=7).
    pub fn cell_value(self) -> u8 {
        self.index() as u8 + 1
    }

    /// Inverse of [`PieceKind::cell_value`]. Returns `None` for empty (0) or out-of-range cells.
    pub fn from_cell(value: u8) -> Option<Self> {
        match value {
            0 => None,
            v => Self::from_index(v as usize - 1),
        }
    }

    /// Palette color for this kind.
    pub fn color(self) -> PieceColor {
        PALETTE[self.index() + 1]
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "i",
            PieceKind::O => "o",
            PieceKind::T => "t",
            PieceKind::S => "s",
            PieceKind::Z => "z",
            PieceKind::L => "l",
            PieceKind::J => "j",
        }
    }
}

/// Color tokens. Renderers decide what each one looks like.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceColor {
    Black,
    Cyan,
    Blue,
    Orange,
    Yellow,
    Green,
    Purple,
    Red,
    White,
}

/// Palette indexed by board cell value; 0 is the empty-cell color.
pub const PALETTE: [PieceColor; 9] = [
    PieceColor::Black,
    PieceColor::Cyan,
    PieceColor::Blue,
    PieceColor::Orange,
    PieceColor::Yellow,
    PieceColor::Green,
    PieceColor::Purple,
    PieceColor::Red,
    PieceColor::White,
];

/// Player intents. Input adapters translate raw events into these; the core
/// never sees key codes or pointer positions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Intent {
    /// Shift the piece one column left
    MoveLeft,
    /// Shift the piece one column right
    MoveRight,
    /// Rotate the piece 90° around its top-left corner
    Rotate,
    /// Move the piece one row down unless it is already resting
    SoftDrop,
}

/// How a rotation that does not fit in place is handled.
///
/// Exactly one policy is active for a game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum RotationPolicy {
    /// Single attempt anchored at the pivot; rejected rotations are no-ops.
    #[default]
    PivotAnchored,
    /// Anchored attempt followed by the [`WALL_KICKS`] offsets.
    WallKick,
}

impl RotationPolicy {
    pub fn as_str(&self) -> &'static str {
        match self {
            RotationPolicy::PivotAnchored => "anchored",
            RotationPolicy::WallKick => "wall-kick",
        }
    }
}

/// Session lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Phase {
    /// Before the first start
    #[default]
    Idle,
    Playing,
    /// Terminal until the next start
    GameOver,
}

/// Something that happened during a tick. Used by observers (logging, sound, tests).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    /// The active piece moved down one row on the fall timer
    Fell,
    /// The active piece was written into the board
    Locked { kind: PieceKind, above_board: bool },
    /// Full rows were removed
    LinesCleared { lines: u32, points: u32 },
    /// The session ended
    GameOver,
}
