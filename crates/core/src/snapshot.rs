//! Read-only copy of the game state for observers and tests.

use crate::board::Board;
use crate::piece::Piece;
use crate::types::{Phase, RotationPolicy};

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSnapshot {
    pub board: Board,
    pub active: Option<Piece>,
    pub next: Option<Piece>,
    pub phase: Phase,
    pub score: u32,
    pub lines: u32,
    pub pieces_locked: u32,
    pub speed: u32,
    pub fall_timer_ms: u32,
    pub rotation_policy: RotationPolicy,
    pub seed: u32,
}

impl GameSnapshot {
    pub fn playable(&self) -> bool {
        self.phase == Phase::Playing
    }
}
