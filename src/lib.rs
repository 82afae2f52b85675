//! Memory Match (workspace facade crate).
//!
//! Re-exports the workspace crates as `memory_match::{core,input,term,types}`
//! and holds the pieces shared by the binary and the integration tests:
//! command-line configuration and the action controller.

pub mod config;
pub mod controller;

pub use memory_match_core as core;
pub use memory_match_input as input;
pub use memory_match_term as term;
pub use memory_match_types as types;
