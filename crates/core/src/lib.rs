//! Core game logic module - pure, deterministic, and testable
//!
//! This module contains the game rules and state management. It has **no
//! dependencies** on terminals, input devices or rendering, making it:
//!
//! - **Deterministic**: Same seed produces identical food placement
//! - **Testable**: Every rule is exercised by unit tests
//! - **Portable**: Can run in any host loop (terminal, GUI, headless)
//!
//! # Module Structure
//!
//! - [`game_state`]: The snake state machine (tick, turn, pause, reset)
//! - [`food`]: Seeded food placement, uniform over free cells
//! - [`snapshot`]: Read-only per-frame view for renderers
//! - [`config`]: Grid size, scoring and speed settings
//!
//! # Game Rules
//!
//! - The snake starts as a single cell in the middle of the grid, heading right
//! - Each tick moves the head one cell; the tail follows unless food was eaten
//! - Turning straight back is ignored
//! - Leaving the grid or running into the body ends the game
//! - Each food is worth 10 points and shortens the tick interval by 1ms,
//!   down to a 40ms floor
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{GameConfig, GameState, TickOutcome};
//! use tui_snake_types::{Direction, Signal};
//!
//! let mut game = GameState::new(GameConfig::with_grid(10, 10), 12345);
//! game.apply_signal(Signal::Turn(Direction::Down));
//!
//! assert_ne!(game.tick(), TickOutcome::Idle);
//! assert_eq!(game.direction(), Direction::Down);
//! ```
//!
//! # Timing
//!
//! The state owns its tick interval but never reads a clock. The host calls
//! [`GameState::tick`](game_state::GameState::tick) whenever
//! [`GameState::tick_interval`](game_state::GameState::tick_interval) has elapsed.

pub mod config;
pub mod food;
pub mod game_state;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use food::FoodPlacer;
pub use game_state::{Collision, GameState, TickOutcome};
pub use snapshot::GameSnapshot;
