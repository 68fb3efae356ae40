//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout toolkits and instead renders into a simple
//! framebuffer that is flushed to the terminal as a diff.
//!
//! Goals:
//! - Keep `core` deterministic and testable
//! - Render from a read-only `GameSnapshot`, never from live state
//! - Allow precise control over aspect ratio (2 chars wide per grid cell)

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use fb::{Cell, CellStyle, FrameBuffer, Rgb};
pub use game_view::{AnchorY, GameView, Viewport, BODY_STYLE, FOOD_STYLE, HEAD_STYLE};
pub use renderer::{encode_diff_into, encode_full_into, TerminalRenderer};
