//! Core types shared across the crate.
//! Pure data with no external dependencies.

/// Board dimensions.
pub const BOARD_WIDTH: u8 = 10;
pub const BOARD_HEIGHT: u8 = 20;

/// Gravity timing (milliseconds).
pub const BASE_DROP_MS: u32 = 1000;
pub const DROP_INTERVAL_STEP_MS: u32 = 100;
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Held-key repeat interval for move/soft-drop intents (milliseconds).
pub const MOVE_REPEAT_MS: u32 = 100;

/// Terminals without key-release events need a timeout so a single tap
/// does not latch into a sustained "held" intent.
pub const KEY_RELEASE_TIMEOUT_MS: u32 = 150;

/// Line clear scoring, indexed by lines cleared (1..=4).
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Score needed per level step; level = score / step + 1.
pub const LEVEL_SCORE_STEP: u32 = 1000;

/// The seven piece kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    O,
    T,
    S,
    Z,
    J,
    L,
}

/// All kinds, in spawn-draw order.
pub const ALL_KINDS: [PieceKind; 7] = [
    PieceKind::I,
    PieceKind::O,
    PieceKind::T,
    PieceKind::S,
    PieceKind::Z,
    PieceKind::J,
    PieceKind::L,
];

impl PieceKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            PieceKind::I => "I",
            PieceKind::O => "O",
            PieceKind::T => "T",
            PieceKind::S => "S",
            PieceKind::Z => "Z",
            PieceKind::J => "J",
            PieceKind::L => "L",
        }
    }
}

/// Cell on the board or in a shape grid (None = empty).
pub type Cell = Option<PieceKind>;

/// Logical keys delivered by the input collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogicalKey {
    Left,
    Right,
    SoftDrop,
    RotateCw,
    RotateCcw,
}

/// Touch gestures, mapped to the same commands as keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SwipeDirection {
    Left,
    Right,
    Down,
}

/// What happens when a rotation collides.
///
/// `WallKick` is the default: an alternating horizontal offset search
/// (+1, -2, +3, ...) bounded by the shape grid's side. `StrictRevert`
/// undoes the rotation on any collision, with no search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RotationPolicy {
    #[default]
    WallKick,
    StrictRevert,
}
