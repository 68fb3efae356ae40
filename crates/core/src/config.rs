//! Game configuration.
//!
//! Defaults match the classic game: a 30x30 grid, 10 points per food and a
//! 100ms tick that speeds up by 1ms per food down to 40ms.
//!
//! Configuration is read from an optional JSON file named by `SNAKE_CONFIG`,
//! then individual environment variables override single fields:
//!
//! - `SNAKE_CONFIG`: path to a JSON config file (missing fields use defaults)
//! - `SNAKE_GRID_WIDTH` / `SNAKE_GRID_HEIGHT`: grid size in cells
//! - `SNAKE_SEED`: RNG seed for food placement
//! - `SNAKE_SPEED_UP`: "1"/"true" or "0"/"false"; "0" keeps the tick interval fixed

use std::env;
use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};

use crate::types::{
    DEFAULT_GRID_HEIGHT, DEFAULT_GRID_WIDTH, FOOD_REWARD, INITIAL_TICK_MS, MIN_TICK_MS,
    SPEED_UP_STEP_MS,
};

/// Largest accepted grid side.
pub const MAX_GRID_SIDE: u16 = 1000;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub grid_width: u16,
    pub grid_height: u16,
    pub food_reward: u32,
    pub initial_tick_ms: u32,
    pub min_tick_ms: u32,
    pub speed_up_step_ms: u32,
    /// Shrink the tick interval on every food eaten.
    pub speed_up: bool,
    /// Food placement seed; `None` lets the host pick one.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            grid_width: DEFAULT_GRID_WIDTH,
            grid_height: DEFAULT_GRID_HEIGHT,
            food_reward: FOOD_REWARD,
            initial_tick_ms: INITIAL_TICK_MS,
            min_tick_ms: MIN_TICK_MS,
            speed_up_step_ms: SPEED_UP_STEP_MS,
            speed_up: true,
            seed: None,
        }
    }
}

impl GameConfig {
    /// Default config with a custom grid size.
    pub fn with_grid(width: u16, height: u16) -> Self {
        Self {
            grid_width: width,
            grid_height: height,
            ..Default::default()
        }
    }

    /// Load configuration from `SNAKE_CONFIG` and the `SNAKE_*` overrides.
    pub fn from_env() -> Result<Self> {
        let mut config = match env::var_os("SNAKE_CONFIG") {
            Some(path) => Self::from_file(Path::new(&path))?,
            None => Self::default(),
        };
        config.apply_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        Self::from_json(&text).with_context(|| format!("invalid config file {}", path.display()))
    }

    pub fn from_json(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Apply per-field overrides, looking each variable up through `lookup`.
    pub fn apply_overrides(&mut self, lookup: impl Fn(&str) -> Option<String>) -> Result<()> {
        if let Some(v) = lookup("SNAKE_GRID_WIDTH") {
            self.grid_width = parse_var("SNAKE_GRID_WIDTH", &v)?;
        }
        if let Some(v) = lookup("SNAKE_GRID_HEIGHT") {
            self.grid_height = parse_var("SNAKE_GRID_HEIGHT", &v)?;
        }
        if let Some(v) = lookup("SNAKE_SEED") {
            self.seed = Some(parse_var("SNAKE_SEED", &v)?);
        }
        if let Some(v) = lookup("SNAKE_SPEED_UP") {
            self.speed_up = parse_flag("SNAKE_SPEED_UP", &v)?;
        }
        Ok(())
    }

    pub fn validate(&self) -> Result<()> {
        for (name, side) in [("grid_width", self.grid_width), ("grid_height", self.grid_height)] {
            if !(2..=MAX_GRID_SIDE).contains(&side) {
                bail!("{name} must be within 2..={MAX_GRID_SIDE}, got {side}");
            }
        }
        if self.min_tick_ms == 0 {
            bail!("min_tick_ms must be positive");
        }
        if self.min_tick_ms > self.initial_tick_ms {
            bail!(
                "min_tick_ms ({}) must not exceed initial_tick_ms ({})",
                self.min_tick_ms,
                self.initial_tick_ms
            );
        }
        Ok(())
    }

    /// Total number of cells on the grid.
    pub fn cell_count(&self) -> usize {
        usize::from(self.grid_width) * usize::from(self.grid_height)
    }
}

fn parse_var<T>(name: &str, value: &str) -> Result<T>
where
    T: std::str::FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    value
        .trim()
        .parse()
        .with_context(|| format!("{name}={value:?} is not a valid number"))
}

fn parse_flag(name: &str, value: &str) -> Result<bool> {
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" => Ok(true),
        "0" | "false" => Ok(false),
        _ => bail!("{name}={value:?} is not a valid flag (expected 0, 1, true or false)"),
    }
}
