//! Core simulation - pure, deterministic, and testable
//!
//! Everything that decides how the game plays lives here: the shape table, the
//! falling piece and its rotation, the board with lock and line-clear rules, and
//! the controller that sequences them frame by frame. Nothing in this crate
//! touches a terminal, a clock or an input device; time arrives as elapsed
//! milliseconds and input as [`types::Intent`] values.
//!
//! # Module Structure
//!
//! - [`shapes`]: the seven shapes as relative block offsets
//! - [`piece`]: translation and pivot-anchored rotation (optionally with wall kicks)
//! - [`board`]: the grid, lock detection, locking and line clearing
//! - [`game_state`]: the controller (spawn, fall timer, lock, score, game over)
//! - [`render`]: the drawing contract the controller renders through
//! - [`rng`]: seeded uniform piece selection
//! - [`config`]: per-session settings and their validation
//! - [`snapshot`]: a read-only copy of the state
//!
//! # Example
//!
//! ```
//! use blockfall_core::GameState;
//! use blockfall_types::{Intent, Phase};
//!
//! let mut game = GameState::new(12345);
//! assert_eq!(game.phase(), Phase::Idle);
//!
//! game.start();
//! game.apply_intent(Intent::MoveRight);
//! game.apply_intent(Intent::Rotate);
//!
//! // One second at speed 1 moves the piece down one row.
//! let before = *game.active().unwrap();
//! game.tick(1000);
//! assert_ne!(game.active().unwrap(), &before);
//! ```

pub mod board;
pub mod config;
pub mod game_state;
pub mod piece;
pub mod render;
pub mod rng;
pub mod shapes;
pub mod snapshot;

pub use blockfall_types as types;

pub use board::{Board, LockOutcome};
pub use config::{ConfigError, GameConfig};
pub use game_state::{GameState, TickEvents};
pub use piece::Piece;
pub use render::{FrameControl, Layout, Renderer};
pub use rng::{PieceGenerator, SimpleRng};
pub use shapes::{shape, shapes_catalog, Shape};
pub use snapshot::GameSnapshot;
