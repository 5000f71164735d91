//! Shape table - the seven piece shapes as relative block offsets
//!
//! Offsets are (x, y) with the origin at the spawn point, so a freshly spawned
//! piece's blocks are the offsets themselves shifted by [`SPAWN_ORIGIN`].
//! Table order is [`PieceKind::ALL`] order; a shape's index also selects its
//! palette color and board cell value.
//!
//! [`SPAWN_ORIGIN`]: crate::types::SPAWN_ORIGIN

use crate::types::{PieceKind, Point};

/// Four block offsets relative to the spawn origin
pub type Shape = [Point; 4];

static SHAPES: [Shape; 7] = [
    // I
    [(0, 0), (1, 0), (2, 0), (3, 0)],
    // O
    [(0, 0), (1, 0), (0, 1), (1, 1)],
    // T
    [(0, 0), (1, 0), (2, 0), (1, 1)],
    // S
    [(1, 0), (2, 0), (0, 1), (1, 1)],
    // Z
    [(0, 0), (1, 0), (1, 1), (2, 1)],
    // L
    [(0, 0), (0, 1), (1, 1), (2, 1)],
    // J
    [(2, 0), (0, 1), (1, 1), (2, 1)],
];

/// All seven shapes in table order.
pub fn shapes_catalog() -> &'static [Shape; 7] {
    &SHAPES
}

/// Shape for a piece kind.
pub fn shape(kind: PieceKind) -> &'static Shape {
    &SHAPES[kind.index()]
}
