//! Blockfall (workspace facade crate).
//!
//! Re-exports the workspace crates under one roof so the runner binary, the
//! integration tests and the benches share a single import path:
//! `blockfall::{core, input, term, types}`. The command line lives in [`cli`].

pub mod cli;

pub use blockfall_core as core;
pub use blockfall_input as input;
pub use blockfall_term as term;
pub use blockfall_types as types;
