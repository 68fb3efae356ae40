//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the application.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core logic, input mapping, terminal rendering).
//!
//! # Grid
//!
//! The playfield is a `width x height` grid of cells. Coordinates are signed so
//! that a head which has just left the grid (for example `(-1, 5)`) can still
//! be represented and rejected by the bounds check.
//!
//! # Game Constants
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_GRID_WIDTH` | 30 | Columns in the default grid |
//! | `DEFAULT_GRID_HEIGHT` | 30 | Rows in the default grid |
//! | `FOOD_REWARD` | 10 | Score added per food eaten |
//! | `INITIAL_TICK_MS` | 100 | Tick interval at game start |
//! | `MIN_TICK_MS` | 40 | Floor for the tick interval |
//! | `SPEED_UP_STEP_MS` | 1 | Interval decrease per food eaten |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Position};
//!
//! let head = Position::new(5, 5);
//! assert_eq!(head.step(Direction::Right), Position::new(6, 5));
//!
//! assert!(Direction::Left.is_opposite(Direction::Right));
//! ```

/// Default grid width in cells (30 columns)
pub const DEFAULT_GRID_WIDTH: u16 = 30;

/// Default grid height in cells (30 rows)
pub const DEFAULT_GRID_HEIGHT: u16 = 30;

/// Score awarded for each food eaten
pub const FOOD_REWARD: u32 = 10;

/// Tick interval at the start of every game (100ms)
pub const INITIAL_TICK_MS: u32 = 100;

/// The tick interval never drops below this floor (40ms)
pub const MIN_TICK_MS: u32 = 40;

/// How much the tick interval shrinks per food eaten (1ms)
pub const SPEED_UP_STEP_MS: u32 = 1;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classic_timing_defaults() {
        assert_eq!(FOOD_REWARD, 10);
        assert_eq!(INITIAL_TICK_MS, 100);
        assert_eq!(MIN_TICK_MS, 40);
        assert_eq!(SPEED_UP_STEP_MS, 1);
        assert!(MIN_TICK_MS <= INITIAL_TICK_MS);
    }

    #[test]
    fn opposite_is_symmetric() {
        for dir in Direction::ALL {
            assert_eq!(dir.opposite().opposite(), dir);
            assert!(dir.is_opposite(dir.opposite()));
            assert!(!dir.is_opposite(dir));
        }
    }

    #[test]
    fn opposite_deltas_cancel() {
        for dir in Direction::ALL {
            let (dx, dy) = dir.delta();
            let (ox, oy) = dir.opposite().delta();
            assert_eq!((dx + ox, dy + oy), (0, 0));
        }
    }

    #[test]
    fn step_moves_one_cell() {
        let p = Position::new(3, 3);
        assert_eq!(p.step(Direction::Up), Position::new(3, 2));
        assert_eq!(p.step(Direction::Down), Position::new(3, 4));
        assert_eq!(p.step(Direction::Left), Position::new(2, 3));
        assert_eq!(p.step(Direction::Right), Position::new(4, 3));
    }

    #[test]
    fn in_bounds_is_half_open() {
        assert!(Position::new(0, 0).in_bounds(10, 10));
        assert!(Position::new(9, 9).in_bounds(10, 10));
        assert!(!Position::new(10, 0).in_bounds(10, 10));
        assert!(!Position::new(0, 10).in_bounds(10, 10));
        assert!(!Position::new(-1, 5).in_bounds(10, 10));
        assert!(!Position::new(5, -1).in_bounds(10, 10));
    }
}

/// A cell coordinate on the grid.
///
/// `x` grows to the right, `y` grows downward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Position {
    pub x: i32,
    pub y: i32,
}

impl Position {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// The neighbouring cell one step in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dx, dy) = dir.delta();
        Self {
            x: self.x + dx,
            y: self.y + dy,
        }
    }

    /// True when the position lies within `[0, width) x [0, height)`.
    pub fn in_bounds(self, width: u16, height: u16) -> bool {
        self.x >= 0 && self.y >= 0 && self.x < i32::from(width) && self.y < i32::from(height)
    }
}

/// Movement direction of the snake
///
/// Each direction is a unit delta on the grid:
/// - **Up**: (0, -1)
/// - **Down**: (0, 1)
/// - **Left**: (-1, 0)
/// - **Right**: (1, 0)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    pub const ALL: [Direction; 4] = [
        Direction::Up,
        Direction::Down,
        Direction::Left,
        Direction::Right,
    ];

    /// Unit delta `(dx, dy)` for this direction
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::Up => (0, -1),
            Direction::Down => (0, 1),
            Direction::Left => (-1, 0),
            Direction::Right => (1, 0),
        }
    }

    /// The 180° reverse of this direction
    pub fn opposite(self) -> Self {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    pub fn is_opposite(self, other: Direction) -> bool {
        self.opposite() == other
    }
}

/// Input signals that drive the game state
///
/// These are produced by the key mapper and are independent of the input
/// device. Anything that cannot be mapped to a signal is dropped before it
/// reaches the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Signal {
    /// Queue a new heading for the next tick
    Turn(Direction),
    /// Toggle pause state
    Pause,
    /// Start over (only honoured once the game is over)
    Restart,
}
