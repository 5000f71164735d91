//! Drag gestures.
//!
//! A single-pointer drag is classified by its dominant axis: horizontal drags
//! move the piece toward the drag, downward drags soft-drop, upward drags do
//! nothing. Each press yields at most one intent; the start point is forgotten
//! as soon as a move is classified or the pointer is released.

use crossterm::event::{MouseButton, MouseEvent, MouseEventKind};

use crate::types::Intent;

/// Map a drag delta to an intent
pub fn classify_drag(dx: i32, dy: i32) -> Option<Intent> {
    if dx.abs() > dy.abs() {
        if dx > 0 {
            Some(Intent::MoveRight)
        } else {
            Some(Intent::MoveLeft)
        }
    } else if dy > 0 {
        Some(Intent::SoftDrop)
    } else {
        None
    }
}

/// Tracks the start point of the current drag
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DragGesture {
    start: Option<(i32, i32)>,
}

impl DragGesture {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.start.is_some()
    }

    pub fn press(&mut self, x: i32, y: i32) {
        self.start = Some((x, y));
    }

    /// Pointer moved while pressed. Classifies against the press point once.
    pub fn drag(&mut self, x: i32, y: i32) -> Option<Intent> {
        let (sx, sy) = self.start.take()?;
        classify_drag(x - sx, y - sy)
    }

    pub fn release(&mut self) {
        self.start = None;
    }

    /// Feed a terminal mouse event (left button only)
    pub fn handle_mouse(&mut self, event: MouseEvent) -> Option<Intent> {
        let (x, y) = (event.column as i32, event.row as i32);
        match event.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                self.press(x, y);
                None
            }
            MouseEventKind::Drag(MouseButton::Left) => self.drag(x, y),
            MouseEventKind::Up(MouseButton::Left) => {
                self.release();
                None
            }
            _ => None,
        }
    }
}
