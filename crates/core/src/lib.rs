//! Core game logic - pure, deterministic, and testable
//!
//! Everything that decides what happens on the playfield lives here. The crate
//! has no I/O: the caller supplies a keyboard snapshot and the clock each
//! frame, and reads the result back through accessors or a [`GameSnapshot`].
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of packed colors, row compaction after clears
//! - [`pieces`]: hand-authored layouts for every (kind, rotation) and spawn points
//! - [`tetromino`]: the falling piece and the placement validity check
//! - [`controller`]: rotation debounce, delayed auto shift and gravity timing
//! - [`game_state`]: lock, clear, spawn and game-over driver
//! - [`rng`]: uniform piece selection behind the [`PieceSource`] seam
//! - [`snapshot`]: renderer-facing copy of a session
//!
//! # Rules
//!
//! - Rotation swaps to the next hand-authored layout; a blocked rotation is
//!   simply refused (no wall kicks).
//! - One rotation per key press.
//! - Horizontal movement steps at once, again after 0.2 s, then every 0.05 s.
//! - Gravity waits 0.5 s per row at level 0 (down to 0.2 s), 0.02 s with soft drop.
//! - A piece locks the first time gravity cannot move it.
//!
//! # Example
//!
//! ```
//! use microtris_core::GameState;
//! use microtris_types::{GameAction, InputFrame};
//!
//! let mut game = GameState::new(12345);
//! game.update(&InputFrame::new().with(GameAction::Start), 0.0);
//! assert!(game.started());
//!
//! let y = game.active().unwrap().y;
//! game.update(&InputFrame::new(), 0.6);
//! assert_eq!(game.active().unwrap().y, y + 1);
//! ```

pub mod board;
pub mod controller;
pub mod game_state;
pub mod pieces;
pub mod rng;
pub mod snapshot;
pub mod tetromino;

pub use microtris_types as types;

// Re-export commonly used types for convenience
pub use board::Board;
pub use controller::{GravityStep, InputController};
pub use game_state::{FrameEvents, GameEvent, GameState};
pub use pieces::{get_shape, spawn_position};
pub use rng::{PieceSource, SimpleRng};
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use tetromino::{is_valid, Tetromino};
