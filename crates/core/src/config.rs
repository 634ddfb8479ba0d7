//! Game configuration.
//!
//! All tunables (board size, cadence, spawn interval, seed) live in one
//! [`GameConfig`] handed to the controller at construction.
//!
//! # Environment Variables
//!
//! - `SNAKE_CONFIG`: path to a JSON file with any subset of the fields below
//! - `SNAKE_WIDTH`, `SNAKE_HEIGHT`: board size including the wall ring
//! - `SNAKE_TICK_MS`: frame period in milliseconds
//! - `SNAKE_MOVE_INTERVAL`: ticks per snake step
//! - `SNAKE_FOOD_INTERVAL`: ticks between extra food spawns
//! - `SNAKE_SEED`: RNG seed
//! - `SNAKE_STARTUP_REDRAW_MS`: delay of the one-time forced redraw
//!
//! Environment values override the file, which overrides the defaults.

use std::env;
use std::fs;

use log::warn;
use serde::{Deserialize, Serialize};

use crate::error::ConfigError;
use crate::types::{
    DEFAULT_BOARD_HEIGHT, DEFAULT_BOARD_WIDTH, DEFAULT_FOOD_SPAWN_INTERVAL,
    DEFAULT_MOVE_INTERVAL, DEFAULT_STARTUP_REDRAW_MS, DEFAULT_TICK_MS, MIN_BOARD_EDGE,
};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Board width in cells, wall ring included
    pub width: u16,
    /// Board height in cells, wall ring included
    pub height: u16,
    pub tick_ms: u32,
    /// The snake moves on ticks where `tick % move_interval == 0`
    pub move_interval: u32,
    /// Extra food spawns on ticks where `tick % food_spawn_interval == 0`
    pub food_spawn_interval: u32,
    pub seed: u32,
    pub startup_redraw_ms: u32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_BOARD_WIDTH,
            height: DEFAULT_BOARD_HEIGHT,
            tick_ms: DEFAULT_TICK_MS,
            move_interval: DEFAULT_MOVE_INTERVAL,
            food_spawn_interval: DEFAULT_FOOD_SPAWN_INTERVAL,
            seed: 1,
            startup_redraw_ms: DEFAULT_STARTUP_REDRAW_MS,
        }
    }
}

impl GameConfig {
    /// Configuration with a custom board size
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            width,
            height,
            ..Default::default()
        }
    }

    pub fn with_seed(mut self, seed: u32) -> Self {
        self.seed = seed;
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: &str) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_string(),
            source,
        })?;
        Self::from_json_str(&text)
    }

    /// Build from `SNAKE_CONFIG` (if set) and `SNAKE_*` overrides, then validate.
    pub fn from_env() -> Result<Self, ConfigError> {
        let base = match env::var("SNAKE_CONFIG") {
            Ok(path) if !path.trim().is_empty() => Self::from_json_file(path.trim())?,
            _ => Self::default(),
        };
        let config = base.with_overrides(|key| env::var(key).ok())?;
        config.validate()?;
        Ok(config)
    }

    /// Apply `SNAKE_*` overrides from an arbitrary lookup.
    ///
    /// Split out from [`GameConfig::from_env`] so the parsing is testable without
    /// touching the process environment.
    pub fn with_overrides(
        mut self,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ConfigError> {
        if let Some(v) = parse_var(&lookup, "SNAKE_WIDTH")? {
            self.width = v;
        }
        if let Some(v) = parse_var(&lookup, "SNAKE_HEIGHT")? {
            self.height = v;
        }
        if let Some(v) = parse_var(&lookup, "SNAKE_TICK_MS")? {
            self.tick_ms = v;
        }
        if let Some(v) = parse_var(&lookup, "SNAKE_MOVE_INTERVAL")? {
            self.move_interval = v;
        }
        if let Some(v) = parse_var(&lookup, "SNAKE_FOOD_INTERVAL")? {
            self.food_spawn_interval = v;
        }
        if let Some(v) = parse_var(&lookup, "SNAKE_SEED")? {
            self.seed = v;
        }
        if let Some(v) = parse_var(&lookup, "SNAKE_STARTUP_REDRAW_MS")? {
            self.startup_redraw_ms = v;
        }
        Ok(self)
    }

    /// Copy with the board raised to the minimum size and zero intervals
    /// raised to one, so any config can start a game.
    pub fn clamped(&self) -> Self {
        let mut out = self.clone();
        out.width = out.width.max(MIN_BOARD_EDGE);
        out.height = out.height.max(MIN_BOARD_EDGE);
        out.tick_ms = out.tick_ms.max(1);
        out.move_interval = out.move_interval.max(1);
        out.food_spawn_interval = out.food_spawn_interval.max(1);
        if out != *self {
            warn!("config {self:?} clamped to {out:?}");
        }
        out
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.width < MIN_BOARD_EDGE || self.height < MIN_BOARD_EDGE {
            return Err(ConfigError::BoardTooSmall {
                width: self.width,
                height: self.height,
                min: MIN_BOARD_EDGE,
            });
        }
        if self.tick_ms == 0 {
            return Err(ConfigError::ZeroInterval("tick_ms"));
        }
        if self.move_interval == 0 {
            return Err(ConfigError::ZeroInterval("move_interval"));
        }
        if self.food_spawn_interval == 0 {
            return Err(ConfigError::ZeroInterval("food_spawn_interval"));
        }
        Ok(())
    }
}

fn parse_var<T: std::str::FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    key: &'static str,
) -> Result<Option<T>, ConfigError> {
    let Some(raw) = lookup(key) else {
        return Ok(None);
    };
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Ok(None);
    }
    match trimmed.parse() {
        Ok(v) => Ok(Some(v)),
        Err(_) => {
            warn!("rejecting {key}={raw:?}");
            Err(ConfigError::InvalidEnv { key, value: raw })
        }
    }
}
