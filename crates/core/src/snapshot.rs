use crate::types::{Direction, Position, DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, INITIAL_TICK_MS};

/// Read-only view of the game handed to renderers each frame.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameSnapshot {
    pub grid_width: u16,
    pub grid_height: u16,
    /// Snake body, head first.
    pub snake: Vec<Position>,
    pub food: Option<Position>,
    pub direction: Direction,
    pub score: u32,
    pub paused: bool,
    pub game_over: bool,
    pub tick_interval_ms: u32,
    pub episode_id: u32,
    pub steps: u32,
}

impl GameSnapshot {
    /// Reset to an empty default-grid snapshot, keeping the snake allocation.
    pub fn clear(&mut self) {
        self.grid_width = DEFAULT_GRID_WIDTH;
        self.grid_height = DEFAULT_GRID_HEIGHT;
        self.snake.clear();
        self.food = None;
        self.direction = Direction::Right;
        self.score = 0;
        self.paused = false;
        self.game_over = false;
        self.tick_interval_ms = INITIAL_TICK_MS;
        self.episode_id = 0;
        self.steps = 0;
    }

    pub fn head(&self) -> Option<Position> {
        self.snake.first().copied()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn playable(&self) -> bool {
        !self.game_over && !self.paused
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            grid_width: 0,
            grid_height: 0,
            snake: Vec::new(),
            food: None,
            direction: Direction::Right,
            score: 0,
            paused: false,
            game_over: false,
            tick_interval_ms: 0,
            episode_id: 0,
            steps: 0,
        };
        s.clear();
        s
    }
}
