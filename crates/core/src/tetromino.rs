//! The active falling piece and the placement validity check.

use crate::board::Board;
use crate::pieces::{get_shape, spawn_position, PieceShape};
use crate::types::{Color, PieceKind, Rotation, BOARD_HEIGHT, BOARD_WIDTH};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tetromino {
    pub kind: PieceKind,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    /// Clock time (seconds) of the last successful gravity step or spawn.
    pub last_move_time: f64,
}

impl Tetromino {
    /// Create a new tetromino at its spawn position
    pub fn spawn(kind: PieceKind, now: f64) -> Self {
        let (x, y) = spawn_position(kind);
        Self {
            kind,
            rotation: Rotation::North,
            x,
            y,
            last_move_time: now,
        }
    }

    pub fn color(&self) -> Color {
        self.kind.color()
    }

    /// Get the shape (mino offsets) for current rotation
    pub fn shape(&self) -> PieceShape {
        get_shape(self.kind, self.rotation)
    }

    /// Absolute board coordinates of the four minos.
    pub fn cells(&self) -> [(i8, i8); 4] {
        self.shape().map(|(dx, dy)| (self.x + dx, self.y + dy))
    }

    /// Copy shifted by (dx, dy).
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    /// Copy in the next rotation state.
    pub fn rotated(&self, clockwise: bool) -> Self {
        Self {
            rotation: self.rotation.rotate(clockwise),
            ..*self
        }
    }

    /// Check if all minos are at valid positions on the board
    pub fn is_valid(&self, board: &Board) -> bool {
        is_valid(self, board)
    }
}

/// Whether `piece` may occupy its current placement.
///
/// A mino fails when its column is off the board, when it is below the last
/// row, or when it overlaps a locked block. Minos above the field always pass.
pub fn is_valid(piece: &Tetromino, board: &Board) -> bool {
    piece.cells().iter().all(|&(x, y)| {
        if x < 0 || x >= BOARD_WIDTH as i8 || y >= BOARD_HEIGHT as i8 {
            return false;
        }
        !board.is_occupied(x, y)
    })
}
