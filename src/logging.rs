//! File logging for the terminal binary.
//!
//! stdout belongs to the game screen, so events are only recorded when
//! `SNAKE_LOG_PATH` names a file. `SNAKE_LOG` takes an `EnvFilter` directive
//! (default `info`), e.g. `SNAKE_LOG=tui_snake_core=debug`.

use std::env;
use std::fs::OpenOptions;
use std::sync::Mutex;

use anyhow::{anyhow, Context, Result};
use tracing_subscriber::EnvFilter;

pub fn init() -> Result<()> {
    let Some(path) = env::var_os("SNAKE_LOG_PATH") else {
        return Ok(());
    };

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(&path)
        .with_context(|| format!("failed to open log file {}", path.to_string_lossy()))?;

    let filter = EnvFilter::try_from_env("SNAKE_LOG").unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(Mutex::new(file))
        .with_ansi(false)
        .with_target(true)
        .try_init()
        .map_err(|err| anyhow!("failed to install log subscriber: {err}"))
}
