use crate::types::{CellKind, Direction, GameMode, Position};

/// Read-only copy of a [`GameState`](crate::GameState) for renderers.
///
/// Reuse one instance with `GameState::snapshot_into` to avoid reallocating the
/// cell buffer every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    pub width: u16,
    pub height: u16,
    /// Row-major cell kinds
    pub cells: Vec<CellKind>,
    /// Head first
    pub snake: Vec<Position>,
    pub food: Vec<Position>,
    pub teleports: Option<[Position; 2]>,
    pub heading: Direction,
    pub mode: GameMode,
    pub game_over: bool,
    pub tick: u32,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.width = 0;
        self.height = 0;
        self.cells.clear();
        self.snake.clear();
        self.food.clear();
        self.teleports = None;
        self.heading = Direction::East;
        self.mode = GameMode::Manual;
        self.game_over = false;
        self.tick = 0;
    }

    /// Kind at `(row, col)`, `None` when out of bounds.
    pub fn kind_at(&self, row: u16, col: u16) -> Option<CellKind> {
        if row >= self.height || col >= self.width {
            return None;
        }
        self.cells
            .get(usize::from(row) * usize::from(self.width) + usize::from(col))
            .copied()
    }

    pub fn length(&self) -> usize {
        self.snake.len()
    }

    pub fn playable(&self) -> bool {
        !self.game_over
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        Self {
            width: 0,
            height: 0,
            cells: Vec::new(),
            snake: Vec::new(),
            food: Vec::new(),
            teleports: None,
            heading: Direction::East,
            mode: GameMode::Manual,
            game_over: false,
            tick: 0,
        }
    }
}
