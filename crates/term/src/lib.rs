//! Terminal rendering for blockfall.
//!
//! A [`Scene`] implements the core `Renderer` contract by drawing into a
//! [`FrameBuffer`]; a [`TerminalRenderer`] flushes that buffer to the terminal,
//! writing only what changed since the previous frame. Drawing never touches
//! the terminal, so scenes can be tested directly.

pub mod fb;
pub mod renderer;
pub mod scene;

pub use blockfall_core as core;
pub use blockfall_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rect, Rgb};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
pub use scene::{rgb_for, Scene, Viewport};
