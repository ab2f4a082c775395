//! Read-only copies of the session for renderers.

use crate::tetromino::Tetromino;
use crate::types::{Cell, Color, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH, EMPTY_CELL};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub color: Color,
    /// Absolute board coordinates; rows may be negative.
    pub cells: [(i8, i8); 4],
}

impl From<Tetromino> for ActiveSnapshot {
    fn from(value: Tetromino) -> Self {
        Self {
            kind: value.kind,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            color: value.color(),
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub board: [[Cell; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
    pub active: Option<ActiveSnapshot>,
    pub ghost_y: Option<i8>,
    pub started: bool,
    pub game_over: bool,
    pub level: u32,
    pub lines: u32,
    pub pieces: u32,
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            board: [[EMPTY_CELL; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            active: None,
            ghost_y: None,
            started: false,
            game_over: false,
            level: 0,
            lines: 0,
            pieces: 0,
        }
    }
}
