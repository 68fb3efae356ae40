//! Terminal input module (engine-facing).
//!
//! This module is intentionally independent of any UI framework. It maps
//! `crossterm` key events into [`crate::types::Signal`]s, so the game state
//! never sees raw key codes and any other input source can feed it the same
//! signals.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
