//! Error types for the core crate.
//!
//! Collisions and unreachable food are ordinary game outcomes and never show up
//! here. These errors describe caller defects: bad coordinates, malformed scenario
//! layouts, invalid configuration.

use crate::types::Position;

/// A cell lookup outside the grid.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("position ({}, {}) is outside the {width}x{height} grid", .position.row, .position.col)]
pub struct BoundsError {
    pub position: Position,
    pub width: u16,
    pub height: u16,
}

/// A named scenario or text layout that cannot be turned into a game.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum ScenarioError {
    #[error("layout is empty")]
    EmptyLayout,
    #[error("row {row} has {found} cells, expected {expected}")]
    RaggedRow {
        row: usize,
        expected: usize,
        found: usize,
    },
    #[error("layout is {width}x{height}, larger than a grid can hold")]
    TooLarge { width: usize, height: usize },
    #[error("unknown cell character {ch:?} at row {row}, col {col}")]
    UnknownCell { ch: char, row: usize, col: usize },
    #[error("snake cells must be placed explicitly, found {ch:?} at row {row}, col {col}")]
    SnakeInLayout { ch: char, row: usize, col: usize },
    #[error("layout has {0} teleport cells, expected 0 or 2")]
    LoneTeleport(usize),
    #[error("snake must have at least one segment")]
    EmptySnake,
    #[error("snake segment ({}, {}) is not on an open cell", .0.row, .0.col)]
    SnakeBlocked(Position),
    #[error("snake cells ({}, {}) and ({}, {}) are not adjacent", .0.row, .0.col, .1.row, .1.col)]
    SnakeNotContiguous(Position, Position),
    #[error("snake segment ({}, {}) appears twice", .0.row, .0.col)]
    SnakeRepeats(Position),
    #[error(transparent)]
    Bounds(#[from] BoundsError),
}

/// Configuration that cannot drive a game.
#[derive(thiserror::Error, Debug)]
pub enum ConfigError {
    #[error("board must be at least {min}x{min}, got {width}x{height}")]
    BoardTooSmall { width: u16, height: u16, min: u16 },
    #[error("{0} must be greater than zero")]
    ZeroInterval(&'static str),
    #[error("invalid value {value:?} for {key}")]
    InvalidEnv { key: &'static str, value: String },
    #[error("failed to read config file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),
}
