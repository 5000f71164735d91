//! Piece module - the falling block group
//!
//! A piece carries its four board-absolute block positions directly rather than
//! an origin plus rotation state. Rotation is a 90° transform around the
//! bounding top-left corner (the pivot), re-anchored so the pivot does not drift.

use crate::board::Board;
use crate::shapes::shape;
use crate::types::{PieceColor, PieceKind, Point, RotationPolicy, SPAWN_ORIGIN, WALL_KICKS};

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Piece {
    kind: PieceKind,
    color: PieceColor,
    blocks: [Point; 4],
}

impl Piece {
    /// Create a piece at the spawn origin from its kind's shape and color
    pub fn spawn(kind: PieceKind) -> Self {
        let (ox, oy) = SPAWN_ORIGIN;
        let offsets = *shape(kind);
        Self {
            kind,
            color: kind.color(),
            blocks: offsets.map(|(x, y)| (x + ox, y + oy)),
        }
    }

    /// Create a piece with explicit block positions
    pub fn from_blocks(kind: PieceKind, blocks: [Point; 4]) -> Self {
        Self {
            kind,
            color: kind.color(),
            blocks,
        }
    }

    pub fn kind(&self) -> PieceKind {
        self.kind
    }

    pub fn color(&self) -> PieceColor {
        self.color
    }

    pub fn blocks(&self) -> &[Point; 4] {
        &self.blocks
    }

    /// Shift every block by (dx, dy). No bounds or collision checks.
    pub fn translate(&mut self, dx: i32, dy: i32) {
        for block in &mut self.blocks {
            block.0 += dx;
            block.1 += dy;
        }
    }

    /// Copy shifted by (dx, dy)
    pub fn translated(&self, dx: i32, dy: i32) -> Self {
        let mut moved = *self;
        moved.translate(dx, dy);
        moved
    }

    /// Component-wise minimum over all blocks (bounding top-left corner)
    pub fn pivot(&self) -> Point {
        top_left(&self.blocks)
    }

    /// Blocks rotated 90° around the pivot and moved back so their new
    /// bounding top-left equals the old pivot.
    pub fn anchored_rotation(&self) -> [Point; 4] {
        let (px, py) = self.pivot();
        let rotated = self.blocks.map(|(x, y)| (px - (y - py), py + (x - px)));
        let (nx, ny) = top_left(&rotated);
        let (ox, oy) = (px - nx, py - ny);
        rotated.map(|(x, y)| (x + ox, y + oy))
    }

    /// Every block is at a position the board accepts
    pub fn fits(&self, board: &Board) -> bool {
        blocks_fit(&self.blocks, board)
    }

    /// Rotate in place if the anchored rotation fits the board.
    ///
    /// Returns whether the rotation was applied; a rejected rotation leaves
    /// the piece untouched.
    pub fn rotate(&mut self, board: &Board) -> bool {
        let candidate = self.anchored_rotation();
        if !blocks_fit(&candidate, board) {
            return false;
        }
        self.blocks = candidate;
        true
    }

    /// Rotate in place, trying each of [`WALL_KICKS`] in order until one fits.
    pub fn rotate_with_kicks(&mut self, board: &Board) -> bool {
        let candidate = self.anchored_rotation();
        for &(dx, dy) in WALL_KICKS.iter() {
            let kicked = candidate.map(|(x, y)| (x + dx, y + dy));
            if blocks_fit(&kicked, board) {
                self.blocks = kicked;
                return true;
            }
        }
        false
    }

    /// Rotate following the given policy
    pub fn rotate_with(&mut self, policy: RotationPolicy, board: &Board) -> bool {
        match policy {
            RotationPolicy::PivotAnchored => self.rotate(board),
            RotationPolicy::WallKick => self.rotate_with_kicks(board),
        }
    }
}

fn top_left(blocks: &[Point; 4]) -> Point {
    blocks
        .iter()
        .fold((i32::MAX, i32::MAX), |(mx, my), &(x, y)| (mx.min(x), my.min(y)))
}

fn blocks_fit(blocks: &[Point; 4], board: &Board) -> bool {
    blocks.iter().all(|&(x, y)| board.is_open(x, y))
}
