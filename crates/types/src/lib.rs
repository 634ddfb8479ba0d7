//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (core rules, autopilot, terminal rendering, input mapping).
//!
//! # Coordinates
//!
//! Positions are `(row, col)` pairs with row 0 at the top of the board. Both
//! components are signed so that "one step past the edge" is representable; such a
//! position is simply out of bounds and behaves as a wall.
//!
//! # Timing Defaults
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `DEFAULT_TICK_MS` | 50 | Fixed frame period driving `Controller::tick` |
//! | `DEFAULT_MOVE_INTERVAL` | 2 | The snake advances once every N ticks |
//! | `DEFAULT_FOOD_SPAWN_INTERVAL` | 60 | Extra food spawns every N ticks |
//! | `DEFAULT_STARTUP_REDRAW_MS` | 200 | One-time forced redraw after start |
//!
//! # Examples
//!
//! ```
//! use tui_snake_types::{Direction, Position};
//!
//! let head = Position::new(2, 2);
//! assert_eq!(head.step(Direction::East), Position::new(2, 3));
//! assert_eq!(Direction::East.opposite(), Direction::West);
//! assert!(Direction::North.is_reverse_of(Direction::South));
//! ```

/// Default board width in cells (including the outer wall ring).
pub const DEFAULT_BOARD_WIDTH: u16 = 40;

/// Default board height in cells (including the outer wall ring).
pub const DEFAULT_BOARD_HEIGHT: u16 = 20;

/// Smallest board edge accepted by configuration validation.
pub const MIN_BOARD_EDGE: u16 = 5;

/// Fixed frame period in milliseconds.
pub const DEFAULT_TICK_MS: u32 = 50;

/// The snake advances once every `DEFAULT_MOVE_INTERVAL` ticks.
pub const DEFAULT_MOVE_INTERVAL: u32 = 2;

/// Additional food is spawned every `DEFAULT_FOOD_SPAWN_INTERVAL` ticks.
pub const DEFAULT_FOOD_SPAWN_INTERVAL: u32 = 60;

/// Delay before the one-time forced redraw after a game starts.
pub const DEFAULT_STARTUP_REDRAW_MS: u32 = 200;

/// A cell coordinate on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Position {
    pub row: i32,
    pub col: i32,
}

impl Position {
    pub const fn new(row: i32, col: i32) -> Self {
        Self { row, col }
    }

    /// The position one step away in `dir`.
    pub fn step(self, dir: Direction) -> Self {
        let (dr, dc) = dir.delta();
        Self {
            row: self.row + dr,
            col: self.col + dc,
        }
    }

    /// True if `other` is one orthogonal step away.
    pub fn is_adjacent(self, other: Position) -> bool {
        (self.row - other.row).abs() + (self.col - other.col).abs() == 1
    }

    /// Direction of the single step from `self` to `other`, if they are adjacent.
    pub fn direction_to(self, other: Position) -> Option<Direction> {
        Direction::ALL
            .into_iter()
            .find(|&dir| self.step(dir) == other)
    }
}

impl From<(i32, i32)> for Position {
    fn from((row, col): (i32, i32)) -> Self {
        Self { row, col }
    }
}

/// Heading of the snake.
///
/// `Direction::ALL` is also the neighbor enumeration order used by the grid and
/// therefore the tie-break order of the autopilot search.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    North,
    East,
    South,
    West,
}

impl Direction {
    /// Clockwise order starting at North.
    pub const ALL: [Direction; 4] = [
        Direction::North,
        Direction::East,
        Direction::South,
        Direction::West,
    ];

    /// `(d_row, d_col)` for one step.
    pub fn delta(self) -> (i32, i32) {
        match self {
            Direction::North => (-1, 0),
            Direction::East => (0, 1),
            Direction::South => (1, 0),
            Direction::West => (0, -1),
        }
    }

    pub fn opposite(self) -> Self {
        match self {
            Direction::North => Direction::South,
            Direction::East => Direction::West,
            Direction::South => Direction::North,
            Direction::West => Direction::East,
        }
    }

    pub fn is_reverse_of(self, other: Direction) -> bool {
        self.opposite() == other
    }

    /// Parse from string
    ///
    /// Accepts full names or single letters (case-insensitive):
    /// "north" | "n", "east" | "e", "south" | "s", "west" | "w"
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "north" | "n" => Some(Direction::North),
            "east" | "e" => Some(Direction::East),
            "south" | "s" => Some(Direction::South),
            "west" | "w" => Some(Direction::West),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Direction::North => "north",
            Direction::East => "east",
            Direction::South => "south",
            Direction::West => "west",
        }
    }
}

/// What occupies a board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CellKind {
    Wall,
    Open,
    Head,
    Body,
    Food,
    Teleport,
}

impl CellKind {
    /// Cells the autopilot search may walk through.
    pub fn is_traversable(self) -> bool {
        matches!(self, CellKind::Open | CellKind::Food | CellKind::Teleport)
    }

    /// Moving the head into this cell ends the game.
    pub fn is_deadly(self) -> bool {
        matches!(self, CellKind::Wall | CellKind::Body | CellKind::Head)
    }

    /// Character used by the stable textual grid form.
    pub fn as_char(self) -> char {
        match self {
            CellKind::Wall => '#',
            CellKind::Open => '.',
            CellKind::Head => 'H',
            CellKind::Body => 'B',
            CellKind::Food => 'F',
            CellKind::Teleport => 'T',
        }
    }

    pub fn from_char(ch: char) -> Option<Self> {
        match ch {
            '#' => Some(CellKind::Wall),
            '.' => Some(CellKind::Open),
            'H' => Some(CellKind::Head),
            'B' => Some(CellKind::Body),
            'F' => Some(CellKind::Food),
            'T' => Some(CellKind::Teleport),
            _ => None,
        }
    }
}

/// Who supplies the next cell each move.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameMode {
    #[default]
    Manual,
    Autopilot,
}

impl GameMode {
    pub fn toggled(self) -> Self {
        match self {
            GameMode::Manual => GameMode::Autopilot,
            GameMode::Autopilot => GameMode::Manual,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameMode::Manual => "manual",
            GameMode::Autopilot => "autopilot",
        }
    }
}

/// Abstract player commands, independent of any input device.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Head north
    Up,
    /// Head south
    Down,
    /// Head west
    Left,
    /// Head east
    Right,
    /// Reverse the whole body (old tail becomes the head)
    Reverse,
    /// Switch between manual control and the autopilot
    ToggleAutopilot,
    /// Ask the audio collaborator for the ambient cue; no state change
    PlayAmbientSound,
    /// Discard the current game and start a fresh one
    Restart,
}

impl Command {
    /// Heading requested by a movement command.
    pub fn heading(self) -> Option<Direction> {
        match self {
            Command::Up => Some(Direction::North),
            Command::Down => Some(Direction::South),
            Command::Left => Some(Direction::West),
            Command::Right => Some(Direction::East),
            _ => None,
        }
    }

    /// Parse command from string (case-insensitive).
    ///
    /// ```
    /// use tui_snake_types::Command;
    ///
    /// assert_eq!(Command::from_str("toggleAutopilot"), Some(Command::ToggleAutopilot));
    /// assert_eq!(Command::from_str("bogus"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "up" => Some(Command::Up),
            "down" => Some(Command::Down),
            "left" => Some(Command::Left),
            "right" => Some(Command::Right),
            "reverse" => Some(Command::Reverse),
            "toggleautopilot" => Some(Command::ToggleAutopilot),
            "playambientsound" => Some(Command::PlayAmbientSound),
            "restart" => Some(Command::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Up => "up",
            Command::Down => "down",
            Command::Left => "left",
            Command::Right => "right",
            Command::Reverse => "reverse",
            Command::ToggleAutopilot => "toggleAutopilot",
            Command::PlayAmbientSound => "playAmbientSound",
            Command::Restart => "restart",
        }
    }
}

/// Discrete, fire-and-forget notifications for collaborators.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GameEvent {
    GameStarted,
    FoodEaten,
    Teleported,
    Collision,
    /// Produced by [`Command::PlayAmbientSound`].
    AmbientCue,
}
