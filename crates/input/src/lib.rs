//! Terminal input adapter.
//!
//! Turns `crossterm` key and mouse events into the game's closed set of
//! [`Intent`]s plus the session commands the runner needs (play, quit). The core
//! never sees raw events.

pub mod gesture;
pub mod map;

pub use blockfall_types as types;

pub use gesture::{classify_drag, DragGesture};
pub use map::{map_key, should_quit};

use crate::types::Intent;

/// What a single input event asks for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// A gameplay intent, forwarded to the controller
    Intent(Intent),
    /// Start or restart a session
    Play,
    Quit,
}
