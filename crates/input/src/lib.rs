//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and keeps the
//! per-frame "held keys" snapshot the engine consumes, including terminals
//! that never report key releases.

pub mod handler;
pub mod map;

pub use microtris_types as types;

pub use handler::{KeyboardState, DEFAULT_KEY_RELEASE_TIMEOUT_MS};
pub use map::{map_key, should_quit};
