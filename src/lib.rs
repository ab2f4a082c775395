//! Microtris (workspace facade crate).
//!
//! Re-exports the workspace crates under one name so the binary, the
//! integration tests and the benches share a single import path:
//! `microtris::{core, input, term, types}`.

pub mod config;

pub use microtris_core as core;
pub use microtris_input as input;
pub use microtris_term as term;
pub use microtris_types as types;
