//! Pieces module - Tetromino offset table and spawn positions
//!
//! Each `(kind, rotation)` pair maps to a hand-authored layout of four cells
//! inside a 4x4 box. Rotating a piece swaps layouts; no coordinates are
//! transformed and there are no wall kicks.

use crate::types::{PieceKind, Rotation};

/// Offset of a single mino relative to piece origin
pub type MinoOffset = (i8, i8);

/// Shape of a piece - 4 mino offsets from piece origin
pub type PieceShape = [MinoOffset; 4];

/// Side of the bounding box every layout fits in.
pub const SHAPE_BOX: i8 = 4;

/// Get the shape (mino offsets) for a piece kind and rotation
pub fn get_shape(kind: PieceKind, rotation: Rotation) -> PieceShape {
    match kind {
        PieceKind::I => I_SHAPES[rotation.index()],
        PieceKind::J => J_SHAPES[rotation.index()],
        PieceKind::L => L_SHAPES[rotation.index()],
        PieceKind::O => O_SHAPE,
        PieceKind::S => S_SHAPES[rotation.index()],
        PieceKind::T => T_SHAPES[rotation.index()],
        PieceKind::Z => Z_SHAPES[rotation.index()],
    }
}

// Tables are indexed North, East, South, West.

const I_SHAPES: [PieceShape; 4] = [
    [(0, 1), (1, 1), (2, 1), (3, 1)],
    [(2, 0), (2, 1), (2, 2), (2, 3)],
    [(0, 2), (1, 2), (2, 2), (3, 2)],
    [(1, 0), (1, 1), (1, 2), (1, 3)],
];

/// Square: the same in every state.
const O_SHAPE: PieceShape = [(0, 0), (1, 0), (0, 1), (1, 1)];

const J_SHAPES: [PieceShape; 4] = [
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (2, 0), (1, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (2, 2)],
    [(1, 0), (1, 1), (0, 2), (1, 2)],
];

const L_SHAPES: [PieceShape; 4] = [
    [(2, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (1, 2), (2, 2)],
    [(0, 1), (1, 1), (2, 1), (0, 2)],
    [(0, 0), (1, 0), (1, 1), (1, 2)],
];

const S_SHAPES: [PieceShape; 4] = [
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    [(1, 0), (1, 1), (2, 1), (2, 2)],
    [(1, 1), (2, 1), (0, 2), (1, 2)],
    [(0, 0), (0, 1), (1, 1), (1, 2)],
];

const T_SHAPES: [PieceShape; 4] = [
    [(1, 0), (0, 1), (1, 1), (2, 1)],
    [(1, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (2, 1), (1, 2)],
    [(1, 0), (0, 1), (1, 1), (1, 2)],
];

const Z_SHAPES: [PieceShape; 4] = [
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    [(2, 0), (1, 1), (2, 1), (1, 2)],
    [(0, 1), (1, 1), (1, 2), (2, 2)],
    [(1, 0), (0, 1), (1, 1), (0, 2)],
];

/// Default spawn position (x, y) for the 3-wide pieces
pub const SPAWN_POSITION: (i8, i8) = (3, 0);

/// Spawn position (x, y) for a piece kind.
///
/// The I bar sits on row 1 of its box, so it spawns one row higher to land
/// on the top row. The square is two wide and spawns one column further right
/// to stay centered.
pub fn spawn_position(kind: PieceKind) -> (i8, i8) {
    let (x, y) = SPAWN_POSITION;
    match kind {
        PieceKind::I => (x, y - 1),
        PieceKind::O => (x + 1, y),
        _ => (x, y),
    }
}
