//! Demo configuration and logging setup.

use std::env;
use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result};
use env_logger::{Builder, Env, Target};

use tile_sight::core::config::env_f32;
use tile_sight::core::VisibilityConfig;
use tile_sight::types::DEFAULT_SIGHT_RANGE;

/// Demo runner configuration
#[derive(Debug, Clone)]
pub struct DemoConfig {
    /// Initial sight range in world units.
    pub sight_range: f32,
    /// Room file to load instead of the built-in room.
    pub room_path: Option<PathBuf>,
    pub visibility: VisibilityConfig,
}

impl DemoConfig {
    /// Create from environment variables
    ///
    /// - `TILE_SIGHT_RANGE`
    /// - `TILE_SIGHT_ROOM`
    /// - plus everything [`VisibilityConfig::from_env`] reads
    pub fn from_env() -> Self {
        Self {
            sight_range: env_f32("TILE_SIGHT_RANGE", DEFAULT_SIGHT_RANGE),
            room_path: env_path("TILE_SIGHT_ROOM"),
            visibility: VisibilityConfig::from_env(),
        }
    }
}

fn env_path(key: &str) -> Option<PathBuf> {
    env::var(key)
        .ok()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .map(PathBuf::from)
}

/// `TILE_SIGHT_LOG_PATH`. Logging is off when unset, since the terminal is
/// in raw mode.
pub fn log_path_from_env() -> Option<PathBuf> {
    env_path("TILE_SIGHT_LOG_PATH")
}

/// Install `env_logger` writing to `log_path`. `RUST_LOG` overrides the
/// default `debug` filter.
pub fn init_logging(log_path: Option<&PathBuf>) -> Result<()> {
    let Some(path) = log_path else {
        return Ok(());
    };
    let file = File::create(path)
        .with_context(|| format!("failed to open log file {}", path.display()))?;
    Builder::from_env(Env::default().default_filter_or("debug"))
        .target(Target::Pipe(Box::new(file)))
        .try_init()
        .context("failed to install logger")?;
    Ok(())
}
