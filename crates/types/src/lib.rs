//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, terminal rendering, input mapping).
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 at the top)
//!
//! Rows above the field are negative. They are always free.
//!
//! # Timing Constants
//!
//! All game timers are wall-clock seconds (`f64`) read from a monotonic clock.
//! There is no fixed integer tick inside the engine; the runner only uses
//! [`FRAME_MS`] to pace the frame pump.
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `INITIAL_SHIFT_DELAY_S` | 0.2 | Delay between the first and second auto-shift step |
//! | `SHIFT_REPEAT_DELAY_S` | 0.05 | Delay between later auto-shift steps |
//! | `SOFT_DROP_DELAY_S` | 0.02 | Gravity delay while soft drop is held |
//! | `GRAVITY_DELAYS_S` | 0.5 .. 0.2 | Gravity delay indexed by level |
//!
//! # Examples
//!
//! ```
//! use microtris_types::{GameAction, InputFrame, Rotation, BOARD_HEIGHT, BOARD_WIDTH};
//!
//! assert_eq!(Rotation::North.rotate(true), Rotation::East);
//! assert_eq!(Rotation::North.rotate(false), Rotation::West);
//! let frame = InputFrame::new().with(GameAction::MoveLeft);
//! assert_eq!(frame.horizontal_direction(), -1);
//!
//! assert_eq!(BOARD_WIDTH, 10);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame pump interval in milliseconds (16ms ≈ 60 FPS)
pub const FRAME_MS: u64 = 16;

/// Delay before horizontal auto-repeat starts, in seconds.
pub const INITIAL_SHIFT_DELAY_S: f64 = 0.2;

/// Delay between horizontal auto-repeat steps, in seconds.
pub const SHIFT_REPEAT_DELAY_S: f64 = 0.05;

/// Gravity delay while soft drop is held, in seconds.
pub const SOFT_DROP_DELAY_S: f64 = 0.02;

/// Number of entries in the gravity table.
pub const GRAVITY_LEVELS: usize = 5;

/// Gravity delay by level (seconds per row).
///
/// Levels past the end of the table use the last entry.
pub const GRAVITY_DELAYS_S: [f64; GRAVITY_LEVELS] = [0.5, 0.45, 0.4, 0.3, 0.2];

/// A cell on the game board.
///
/// `0` is empty, any other value is the packed [`Color`] of the block
/// occupying it.
pub type Cell = u32;

/// The empty cell value.
pub const EMPTY_CELL: Cell = 0;

/// Packed `0xRRGGBBAA` color.
///
/// Colors built with [`Color::rgb`] are fully opaque, so their packed value is
/// never zero and cannot be confused with [`EMPTY_CELL`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(u32);

impl Color {
    /// Opaque color from RGB components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(((r as u32) << 24) | ((g as u32) << 16) | ((b as u32) << 8) | 0xFF)
    }

    /// Decode a board cell. Returns `None` for an empty cell.
    pub const fn from_cell(cell: Cell) -> Option<Self> {
        if cell == EMPTY_CELL {
            None
        } else {
            Some(Self(cell))
        }
    }

    /// Packed value, suitable for storing in a [`Cell`].
    pub const fn packed(self) -> Cell {
        self.0
    }

    pub const fn r(self) -> u8 {
        (self.0 >> 24) as u8
    }

    pub const fn g(self) -> u8 {
        (self.0 >> 16) as u8
    }

    pub const fn b(self) -> u8 {
        (self.0 >> 8) as u8
    }
}

/// The seven tetromino piece kinds
///
/// Each piece has a distinct shape and color:
/// - **I**: Cyan, horizontal bar
/// - **J**: Blue, J-shaped
/// - **L**: Orange, L-shaped (mirror of J)
/// - **O**: Yellow, 2x2 square
/// - **S**: Green, S-shaped
/// - **T**: Purple, T-shaped
/// - **Z**: Red, Z-shaped (mirror of S)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, in table order.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Fixed display color of this kind.
    pub const fn color(self) -> Color {
        match self {
            PieceKind::I => Color::rgb(80, 220, 220),
            PieceKind::J => Color::rgb(80, 120, 220),
            PieceKind::L => Color::rgb(255, 165, 0),
            PieceKind::O => Color::rgb(240, 220, 80),
            PieceKind::S => Color::rgb(100, 220, 120),
            PieceKind::T => Color::rgb(200, 120, 220),
            PieceKind::Z => Color::rgb(220, 80, 80),
        }
    }
}

/// Rotation states
///
/// - **North**: Spawn orientation (state 0)
/// - **East**: Rotated 90° clockwise (state 1)
/// - **South**: Rotated 180° (state 2)
/// - **West**: Rotated 90° counter-clockwise (state 3)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    North,
    East,
    South,
    West,
}

impl Rotation {
    pub const ALL: [Rotation; 4] = [
        Rotation::North,
        Rotation::East,
        Rotation::South,
        Rotation::West,
    ];

    /// Numeric state in `0..4`.
    pub const fn index(self) -> usize {
        match self {
            Rotation::North => 0,
            Rotation::East => 1,
            Rotation::South => 2,
            Rotation::West => 3,
        }
    }

    /// State from a number, taken modulo 4.
    pub const fn from_index(index: usize) -> Self {
        Self::ALL[index % 4]
    }

    /// Next state: `(state + 1 + 2 * (1 - clockwise)) mod 4`.
    ///
    /// # Examples
    ///
    /// ```
    /// use microtris_types::Rotation;
    ///
    /// assert_eq!(Rotation::West.rotate(true), Rotation::North);
    /// assert_eq!(Rotation::East.rotate(false), Rotation::North);
    /// ```
    pub const fn rotate(self, clockwise: bool) -> Self {
        let step = if clockwise { 1 } else { 3 };
        Self::from_index(self.index() + step)
    }
}

/// Logical actions read from the keyboard each frame.
///
/// Physical key bindings live in the input crate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GameAction {
    /// Shift the piece left (auto-repeats while held)
    MoveLeft,
    /// Shift the piece right (auto-repeats while held)
    MoveRight,
    /// Faster gravity while held
    SoftDrop,
    /// Rotate 90° clockwise, once per press
    RotateCw,
    /// Rotate 90° counter-clockwise, once per press
    RotateCcw,
    /// Start a new session when none is running
    Start,
    /// Leave the game
    Quit,
}

impl GameAction {
    pub const COUNT: usize = 7;

    pub const ALL: [GameAction; GameAction::COUNT] = [
        GameAction::MoveLeft,
        GameAction::MoveRight,
        GameAction::SoftDrop,
        GameAction::RotateCw,
        GameAction::RotateCcw,
        GameAction::Start,
        GameAction::Quit,
    ];

    /// Stable slot in [`GameAction::ALL`].
    pub const fn index(self) -> usize {
        match self {
            GameAction::MoveLeft => 0,
            GameAction::MoveRight => 1,
            GameAction::SoftDrop => 2,
            GameAction::RotateCw => 3,
            GameAction::RotateCcw => 4,
            GameAction::Start => 5,
            GameAction::Quit => 6,
        }
    }
}

/// Per-frame keyboard snapshot: which logical actions are held right now.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Hash)]
pub struct InputFrame {
    held: [bool; GameAction::COUNT],
}

impl InputFrame {
    /// Nothing held.
    pub const fn new() -> Self {
        Self {
            held: [false; GameAction::COUNT],
        }
    }

    /// Builder helper, mostly for tests and scripted input.
    ///
    /// ```
    /// use microtris_types::{GameAction, InputFrame};
    ///
    /// let frame = InputFrame::new().with(GameAction::MoveLeft);
    /// assert!(frame.is_held(GameAction::MoveLeft));
    /// assert_eq!(frame.horizontal_direction(), -1);
    /// ```
    pub fn with(mut self, action: GameAction) -> Self {
        self.held[action.index()] = true;
        self
    }

    pub fn set(&mut self, action: GameAction, held: bool) {
        self.held[action.index()] = held;
    }

    pub const fn is_held(&self, action: GameAction) -> bool {
        self.held[action.index()]
    }

    /// -1 for left, +1 for right, 0 for neither or both.
    pub const fn horizontal_direction(&self) -> i8 {
        let left = self.is_held(GameAction::MoveLeft);
        let right = self.is_held(GameAction::MoveRight);
        match (left, right) {
            (true, false) => -1,
            (false, true) => 1,
            _ => 0,
        }
    }

    pub const fn any_rotation_held(&self) -> bool {
        self.is_held(GameAction::RotateCw) || self.is_held(GameAction::RotateCcw)
    }
}

/// Runtime timing parameters.
///
/// Defaults come from the constants above; the runner can override them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TimingConfig {
    pub initial_shift_delay: f64,
    pub shift_repeat_delay: f64,
    pub soft_drop_delay: f64,
    pub gravity_delays: [f64; GRAVITY_LEVELS],
}

impl TimingConfig {
    /// Gravity delay for `level`, clamped to the last table entry.
    pub fn gravity_delay(&self, level: u32) -> f64 {
        let idx = (level as usize).min(GRAVITY_LEVELS - 1);
        self.gravity_delays[idx]
    }
}

impl Default for TimingConfig {
    fn default() -> Self {
        Self {
            initial_shift_delay: INITIAL_SHIFT_DELAY_S,
            shift_repeat_delay: SHIFT_REPEAT_DELAY_S,
            soft_drop_delay: SOFT_DROP_DELAY_S,
            gravity_delays: GRAVITY_DELAYS_S,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn timing_defaults() {
        assert_eq!(INITIAL_SHIFT_DELAY_S, 0.2);
        assert_eq!(SHIFT_REPEAT_DELAY_S, 0.05);
        assert_eq!(SOFT_DROP_DELAY_S, 0.02);
        assert_eq!(GRAVITY_DELAYS_S, [0.5, 0.45, 0.4, 0.3, 0.2]);
        assert!(SHIFT_REPEAT_DELAY_S < INITIAL_SHIFT_DELAY_S);
    }

    #[test]
    fn gravity_delay_clamps_past_table_end() {
        let cfg = TimingConfig::default();
        assert_eq!(cfg.gravity_delay(0), 0.5);
        assert_eq!(cfg.gravity_delay(3), 0.3);
        assert_eq!(cfg.gravity_delay(4), 0.2);
        assert_eq!(cfg.gravity_delay(99), 0.2);
    }

    #[test]
    fn rotation_formula_matches_table() {
        for r in Rotation::ALL {
            assert_eq!(r.rotate(true).index(), (r.index() + 1) % 4);
            assert_eq!(r.rotate(false).index(), (r.index() + 3) % 4);
            assert_eq!(r.rotate(true).rotate(false), r);
        }
    }

    #[test]
    fn piece_colors_are_nonzero_and_distinct() {
        for (i, a) in PieceKind::ALL.iter().enumerate() {
            assert_ne!(a.color().packed(), EMPTY_CELL);
            for b in &PieceKind::ALL[i + 1..] {
                assert_ne!(a.color(), b.color());
            }
        }
    }

    #[test]
    fn color_roundtrips_through_cell() {
        let c = Color::rgb(1, 2, 3);
        assert_eq!(Color::from_cell(c.packed()), Some(c));
        assert_eq!((c.r(), c.g(), c.b()), (1, 2, 3));
        assert_eq!(Color::from_cell(EMPTY_CELL), None);
    }

    #[test]
    fn both_directions_cancel() {
        let frame = InputFrame::new()
            .with(GameAction::MoveLeft)
            .with(GameAction::MoveRight);
        assert_eq!(frame.horizontal_direction(), 0);
        assert_eq!(InputFrame::new().horizontal_direction(), 0);
        assert_eq!(
            InputFrame::new().with(GameAction::MoveRight).horizontal_direction(),
            1
        );
    }

    #[test]
    fn action_index_matches_all_order() {
        for (i, a) in GameAction::ALL.iter().enumerate() {
            assert_eq!(a.index(), i);
        }
    }
}
