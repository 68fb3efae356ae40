//! Game state module - the snake state machine
//!
//! `GameState` owns everything that changes while playing: the snake body,
//! its heading, the queued heading for the next tick, the food, the score,
//! the pause/game-over flags and the current tick interval.
//!
//! The host drives it by calling [`GameState::tick`] once per
//! [`GameState::tick_interval_ms`] and by feeding it [`Signal`]s through
//! [`GameState::apply_signal`]. Nothing here blocks, sleeps or does I/O.

use std::collections::VecDeque;
use std::time::Duration;

use tracing::{debug, info, trace};

use crate::config::GameConfig;
use crate::food::FoodPlacer;
use crate::snapshot::GameSnapshot;
use crate::types::{Direction, Position, Signal};

/// What ended the game on a losing tick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Collision {
    /// The head left the grid.
    Wall,
    /// The head ran into the snake's own body.
    SelfHit,
}

/// Result of a single [`GameState::tick`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TickOutcome {
    /// Paused or already over; nothing changed.
    Idle,
    /// Moved one cell without growing.
    Moved,
    /// Ate the food and grew by one.
    Ate,
    /// Ate the last food; the snake now fills the grid and the game is over.
    Cleared,
    /// Hit something; the game is over.
    Collided(Collision),
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    config: GameConfig,
    /// Body segments, head first.
    snake: VecDeque<Position>,
    /// Row-major occupancy grid mirroring `snake`.
    occupied: Vec<bool>,
    direction: Direction,
    /// Heading adopted at the start of the next tick.
    next_direction: Direction,
    food: Option<Position>,
    food_placer: FoodPlacer,
    score: u32,
    tick_interval_ms: u32,
    /// Monotonic episode id (increments on reset).
    episode_id: u32,
    /// Cells moved in the current episode.
    steps: u32,
    paused: bool,
    game_over: bool,
}

impl GameState {
    /// Create a new game: a one-cell snake in the middle of the grid heading
    /// right, and one randomly placed food.
    pub fn new(config: GameConfig, seed: u64) -> Self {
        let mut state = Self::empty(config, seed);
        state.spawn();
        state
    }

    /// Create a game from an explicit layout.
    ///
    /// `body` is head first. The caller guarantees that every segment is on
    /// the grid, that segments are distinct and adjacent, and that `food` is
    /// free.
    pub fn with_layout(
        config: GameConfig,
        seed: u64,
        body: &[Position],
        direction: Direction,
        food: Position,
    ) -> Self {
        let mut state = Self::empty(config, seed);
        for &p in body {
            debug_assert!(p.in_bounds(state.config.grid_width, state.config.grid_height));
            state.push_back(p);
        }
        state.direction = direction;
        state.next_direction = direction;
        state.food = Some(food);
        state
    }

    fn empty(config: GameConfig, seed: u64) -> Self {
        let cells = config.cell_count();
        let tick_interval_ms = config.initial_tick_ms;
        Self {
            config,
            snake: VecDeque::with_capacity(cells),
            occupied: vec![false; cells],
            direction: Direction::Right,
            next_direction: Direction::Right,
            food: None,
            food_placer: FoodPlacer::new(seed),
            score: 0,
            tick_interval_ms,
            episode_id: 0,
            steps: 0,
            paused: false,
            game_over: false,
        }
    }

    fn spawn(&mut self) {
        let center = Position::new(
            i32::from(self.config.grid_width / 2),
            i32::from(self.config.grid_height / 2),
        );
        self.push_back(center);
        self.food = self.place_food();
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn grid_width(&self) -> u16 {
        self.config.grid_width
    }

    pub fn grid_height(&self) -> u16 {
        self.config.grid_height
    }

    /// Snake body, head first.
    pub fn snake(&self) -> &VecDeque<Position> {
        &self.snake
    }

    pub fn head(&self) -> Position {
        self.snake.front().copied().unwrap_or_default()
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    pub fn next_direction(&self) -> Direction {
        self.next_direction
    }

    pub fn food(&self) -> Option<Position> {
        self.food
    }

    pub fn score(&self) -> u32 {
        self.score
    }

    pub fn paused(&self) -> bool {
        self.paused
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn tick_interval_ms(&self) -> u32 {
        self.tick_interval_ms
    }

    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(u64::from(self.tick_interval_ms))
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn steps(&self) -> u32 {
        self.steps
    }

    pub fn seed(&self) -> u64 {
        self.food_placer.seed()
    }

    /// True when `p` is covered by a snake segment.
    pub fn is_occupied(&self, p: Position) -> bool {
        self.index(p).map_or(false, |i| self.occupied[i])
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.grid_width = self.config.grid_width;
        out.grid_height = self.config.grid_height;
        out.snake.clear();
        out.snake.extend(self.snake.iter().copied());
        out.food = self.food;
        out.direction = self.direction;
        out.score = self.score;
        out.paused = self.paused;
        out.game_over = self.game_over;
        out.tick_interval_ms = self.tick_interval_ms;
        out.episode_id = self.episode_id;
        out.steps = self.steps;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }

    /// Advance the game by one cell.
    pub fn tick(&mut self) -> TickOutcome {
        if self.game_over || self.paused {
            return TickOutcome::Idle;
        }

        self.direction = self.next_direction;
        let new_head = self.head().step(self.direction);

        if !new_head.in_bounds(self.config.grid_width, self.config.grid_height) {
            return self.end(Collision::Wall);
        }
        // The tail still counts: it has not moved out of the way yet.
        if self.is_occupied(new_head) {
            return self.end(Collision::SelfHit);
        }

        self.push_front(new_head);
        self.steps = self.steps.wrapping_add(1);

        if self.food != Some(new_head) {
            self.pop_back();
            trace!(x = new_head.x, y = new_head.y, "moved");
            return TickOutcome::Moved;
        }

        self.score = self.score.saturating_add(self.config.food_reward);
        self.speed_up();
        self.food = self.place_food();

        if self.food.is_none() {
            self.game_over = true;
            info!(
                score = self.score,
                length = self.snake.len(),
                episode = self.episode_id,
                "grid cleared"
            );
            return TickOutcome::Cleared;
        }

        debug!(
            score = self.score,
            length = self.snake.len(),
            tick_ms = self.tick_interval_ms,
            "food eaten"
        );
        TickOutcome::Ate
    }

    /// Queue a heading for the next tick.
    ///
    /// Requests that reverse the current heading are ignored. Returns whether
    /// the request was accepted.
    pub fn set_direction(&mut self, requested: Direction) -> bool {
        if requested.is_opposite(self.direction) {
            return false;
        }
        self.next_direction = requested;
        true
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        debug!(paused = self.paused, "pause toggled");
    }

    /// Start a fresh episode with the initial snake, score and speed.
    ///
    /// Food placement continues from the same RNG, so a restarted game does
    /// not replay the previous one.
    pub fn reset(&mut self) {
        self.snake.clear();
        self.occupied.fill(false);
        self.direction = Direction::Right;
        self.next_direction = Direction::Right;
        self.food = None;
        self.score = 0;
        self.tick_interval_ms = self.config.initial_tick_ms;
        self.episode_id = self.episode_id.wrapping_add(1);
        self.steps = 0;
        self.paused = false;
        self.game_over = false;
        self.spawn();
        info!(episode = self.episode_id, "game reset");
    }

    /// Apply an input signal. Returns whether it changed anything.
    ///
    /// `Restart` is only honoured once the game is over.
    pub fn apply_signal(&mut self, signal: Signal) -> bool {
        match signal {
            Signal::Turn(dir) => self.set_direction(dir),
            Signal::Pause => {
                self.toggle_pause();
                true
            }
            Signal::Restart => {
                if !self.game_over {
                    return false;
                }
                self.reset();
                true
            }
        }
    }

    fn end(&mut self, cause: Collision) -> TickOutcome {
        self.game_over = true;
        info!(
            ?cause,
            score = self.score,
            length = self.snake.len(),
            steps = self.steps,
            episode = self.episode_id,
            "game over"
        );
        TickOutcome::Collided(cause)
    }

    fn speed_up(&mut self) {
        if !self.config.speed_up || self.tick_interval_ms <= self.config.min_tick_ms {
            return;
        }
        self.tick_interval_ms = self
            .tick_interval_ms
            .saturating_sub(self.config.speed_up_step_ms)
            .max(self.config.min_tick_ms);
    }

    fn place_food(&mut self) -> Option<Position> {
        let (w, h) = (self.config.grid_width, self.config.grid_height);
        let occupied = &self.occupied;
        self.food_placer.place(w, h, |p| {
            occupied[(p.y as usize) * usize::from(w) + p.x as usize]
        })
    }

    #[inline]
    fn index(&self, p: Position) -> Option<usize> {
        if !p.in_bounds(self.config.grid_width, self.config.grid_height) {
            return None;
        }
        Some((p.y as usize) * usize::from(self.config.grid_width) + (p.x as usize))
    }

    fn push_front(&mut self, p: Position) {
        if let Some(i) = self.index(p) {
            self.occupied[i] = true;
        }
        self.snake.push_front(p);
    }

    fn push_back(&mut self, p: Position) {
        if let Some(i) = self.index(p) {
            self.occupied[i] = true;
        }
        self.snake.push_back(p);
    }

    fn pop_back(&mut self) {
        if let Some(tail) = self.snake.pop_back() {
            if let Some(i) = self.index(tail) {
                self.occupied[i] = false;
            }
        }
    }
}
