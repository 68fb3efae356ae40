//! TUI Snake (workspace facade crate).
//!
//! This package exposes a single `tui_snake::{core,input,term,types}` public API
//! while the implementation lives in dedicated crates under `crates/`.

pub use tui_snake_core as core;
pub use tui_snake_input as input;
pub use tui_snake_term as term;
pub use tui_snake_types as types;
