//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: the view paints a snapshot into a
//! plain framebuffer, and the renderer flushes only the cells that changed.
//! Each board cell is two columns wide to keep blocks roughly square.

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use microtris_core as core;
pub use microtris_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_diff_into, encode_full_into, TerminalGuard, TerminalRenderer};
