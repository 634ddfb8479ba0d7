//! Game state module - manages the complete game state
//!
//! This module ties together the grid, the snake, food, the teleport pair and the
//! RNG. It implements every movement and spawning rule; the controller only
//! decides *which* cell to move into and *when* spawning runs.
//!
//! Once a collision sets `game_over` the state is frozen: every mutator becomes a
//! no-op. A restart builds a fresh `GameState` instead of resetting this one.

use std::collections::{HashSet, VecDeque};

use log::{debug, info};

use crate::config::GameConfig;
use crate::error::ScenarioError;
use crate::grid::Grid;
use crate::rng::SimpleRng;
use crate::snapshot::GameSnapshot;
use crate::types::{CellKind, Direction, GameEvent, GameMode, Position};

/// What a call to [`GameState::apply_move`] did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveOutcome {
    /// Plain step into an open cell
    Moved,
    /// Ate food; length grew by one
    Grew,
    /// Entered a teleport and exited at its partner
    Teleported { exit: Position },
    /// Hit a wall, the board edge or the body; the game is now over
    Collided,
    /// The game was already over; nothing changed
    Frozen,
}

/// Complete game state
#[derive(Debug, Clone)]
pub struct GameState {
    grid: Grid,
    /// Head first
    snake: VecDeque<Position>,
    food: Vec<Position>,
    teleports: Option<[Position; 2]>,
    heading: Direction,
    mode: GameMode,
    game_over: bool,
    tick: u32,
    food_spawn_interval: u32,
    rng: SimpleRng,
    /// Events produced since the last `take_events` (consumed by the controller).
    events: Vec<GameEvent>,
}

impl GameState {
    /// Create a new game: walled board, two-segment snake on the middle row
    /// heading east. Boards below the minimum size are enlarged to it.
    pub fn new(config: &GameConfig) -> Self {
        let config = config.clamped();
        let grid = Grid::with_border(config.width, config.height);
        let row = i32::from(config.height) / 2;
        let snake = [Position::new(row, 2), Position::new(row, 1)];
        let mut state = Self::empty(grid, Direction::East, config.seed, config.food_spawn_interval);
        for pos in snake {
            state.snake.push_back(pos);
            state.mark(pos, CellKind::Body);
        }
        state.mark(snake[0], CellKind::Head);
        info!(
            "new game {}x{} seed={}",
            config.width, config.height, config.seed
        );
        state
    }

    fn empty(grid: Grid, heading: Direction, seed: u32, food_spawn_interval: u32) -> Self {
        Self {
            grid,
            snake: VecDeque::new(),
            food: Vec::new(),
            teleports: None,
            heading,
            mode: GameMode::Manual,
            game_over: false,
            tick: 0,
            food_spawn_interval: food_spawn_interval.max(1),
            rng: SimpleRng::new(seed),
            events: Vec::new(),
        }
    }

    /// Build a state from an explicit layout and snake (head first).
    ///
    /// The grid may already contain walls, food and a teleport pair; the snake
    /// must sit on open cells, be contiguous and never repeat a cell.
    pub fn from_parts(
        grid: Grid,
        snake: &[Position],
        heading: Direction,
        seed: u32,
        food_spawn_interval: u32,
    ) -> Result<Self, ScenarioError> {
        if snake.is_empty() {
            return Err(ScenarioError::EmptySnake);
        }

        let teleports = grid.positions_of(CellKind::Teleport);
        let pair = match teleports.as_slice() {
            [] => None,
            [a, b] => Some([*a, *b]),
            other => return Err(ScenarioError::LoneTeleport(other.len())),
        };

        let mut seen = HashSet::with_capacity(snake.len());
        for (i, &pos) in snake.iter().enumerate() {
            let kind = grid.cell_at(pos)?.kind;
            if kind != CellKind::Open {
                return Err(ScenarioError::SnakeBlocked(pos));
            }
            if !seen.insert(pos) {
                return Err(ScenarioError::SnakeRepeats(pos));
            }
            if i > 0 && !snake[i - 1].is_adjacent(pos) {
                return Err(ScenarioError::SnakeNotContiguous(snake[i - 1], pos));
            }
        }

        let mut state = Self::empty(grid, heading, seed, food_spawn_interval);
        state.food = state.grid.positions_of(CellKind::Food);
        state.teleports = pair;
        for &pos in snake {
            state.snake.push_back(pos);
            state.mark(pos, CellKind::Body);
        }
        state.mark(snake[0], CellKind::Head);
        Ok(state)
    }

    // Every position handed to `mark` comes from the grid itself.
    fn mark(&mut self, pos: Position, kind: CellKind) {
        let placed = self.grid.set_kind(pos, kind);
        debug_assert!(placed.is_ok(), "{placed:?}");
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Snake positions, head first
    pub fn snake(&self) -> &VecDeque<Position> {
        &self.snake
    }

    pub fn head(&self) -> Position {
        self.snake[0]
    }

    pub fn len(&self) -> usize {
        self.snake.len()
    }

    /// Always false: a snake has at least one segment.
    pub fn is_empty(&self) -> bool {
        self.snake.is_empty()
    }

    pub fn food(&self) -> &[Position] {
        &self.food
    }

    pub fn teleports(&self) -> Option<[Position; 2]> {
        self.teleports
    }

    pub fn heading(&self) -> Direction {
        self.heading
    }

    pub fn mode(&self) -> GameMode {
        self.mode
    }

    pub fn game_over(&self) -> bool {
        self.game_over
    }

    pub fn tick(&self) -> u32 {
        self.tick
    }

    pub fn food_spawn_interval(&self) -> u32 {
        self.food_spawn_interval
    }

    /// Kind of the cell at `pos`; off-board positions read as wall.
    pub fn kind_at(&self, pos: Position) -> CellKind {
        self.grid.kind_at(pos).unwrap_or(CellKind::Wall)
    }

    /// The other end of the teleport pair, if `pos` is one of its cells.
    pub fn partner_of(&self, pos: Position) -> Option<Position> {
        let [a, b] = self.teleports?;
        if pos == a {
            Some(b)
        } else if pos == b {
            Some(a)
        } else {
            None
        }
    }

    /// The cell one step from the head in the current heading (manual mode).
    pub fn next_cell_for_heading(&self) -> Position {
        self.head().step(self.heading)
    }

    /// Advance the snake into `next`.
    ///
    /// `next` is normally adjacent to the head (manual step or autopilot choice).
    /// Off-board positions count as wall.
    pub fn apply_move(&mut self, next: Position) -> MoveOutcome {
        if self.game_over {
            return MoveOutcome::Frozen;
        }

        match self.kind_at(next) {
            CellKind::Wall | CellKind::Body | CellKind::Head => {
                self.game_over = true;
                self.events.push(GameEvent::Collision);
                info!(
                    "collision at ({}, {}) after {} ticks, length {}",
                    next.row,
                    next.col,
                    self.tick,
                    self.len()
                );
                MoveOutcome::Collided
            }
            CellKind::Food => {
                self.food.retain(|&p| p != next);
                self.push_head(next);
                self.events.push(GameEvent::FoodEaten);
                debug!("ate food, length {}", self.len());
                MoveOutcome::Grew
            }
            CellKind::Teleport => match self.partner_of(next) {
                Some(exit) => {
                    // The jump consumes the pair; the entered cell reopens and the
                    // exit becomes the new head.
                    self.teleports = None;
                    self.mark(next, CellKind::Open);
                    self.pop_tail();
                    self.push_head(exit);
                    self.events.push(GameEvent::Teleported);
                    debug!(
                        "teleported ({}, {}) -> ({}, {})",
                        next.row, next.col, exit.row, exit.col
                    );
                    MoveOutcome::Teleported { exit }
                }
                None => {
                    self.step_into(next);
                    MoveOutcome::Moved
                }
            },
            CellKind::Open => {
                self.step_into(next);
                MoveOutcome::Moved
            }
        }
    }

    fn step_into(&mut self, next: Position) {
        self.push_head(next);
        self.pop_tail();
    }

    fn push_head(&mut self, pos: Position) {
        if let Some(&old) = self.snake.front() {
            self.mark(old, CellKind::Body);
        }
        self.mark(pos, CellKind::Head);
        self.snake.push_front(pos);
    }

    fn pop_tail(&mut self) {
        if let Some(tail) = self.snake.pop_back() {
            self.mark(tail, CellKind::Open);
        }
    }

    /// Change heading. The exact reverse is rejected while the snake is longer
    /// than one segment; use [`GameState::reverse`] to turn around.
    ///
    /// Several turns may be queued between two moves, so a heading that points
    /// straight back into the neck is rejected as well.
    pub fn set_heading(&mut self, dir: Direction) -> bool {
        if self.game_over {
            return false;
        }
        if self.len() > 1 {
            let into_neck = self.is_neck(self.head().step(dir));
            if into_neck || dir.is_reverse_of(self.heading) {
                return false;
            }
        }
        self.heading = dir;
        true
    }

    fn is_neck(&self, pos: Position) -> bool {
        self.snake.get(1) == Some(&pos)
    }

    /// Reverse the body in place (old tail becomes the head) and flip the heading.
    pub fn reverse(&mut self) -> bool {
        if self.game_over {
            return false;
        }
        let old_head = self.head();
        self.mark(old_head, CellKind::Body);
        self.snake.make_contiguous().reverse();
        let new_head = self.head();
        self.mark(new_head, CellKind::Head);
        self.heading = self.heading.opposite();
        true
    }

    pub fn set_mode(&mut self, mode: GameMode) {
        if self.game_over || self.mode == mode {
            return;
        }
        self.mode = mode;
        info!("mode -> {}", mode.as_str());
    }

    pub fn toggle_mode(&mut self) -> GameMode {
        self.set_mode(self.mode.toggled());
        self.mode
    }

    /// Spawn food when none exists, and additionally every
    /// `food_spawn_interval` ticks. Returns the new food cell, if any.
    pub fn maybe_spawn_food(&mut self) -> Option<Position> {
        if self.game_over {
            return None;
        }
        if self.food.is_empty() || self.tick % self.food_spawn_interval == 0 {
            return self.spawn_food();
        }
        None
    }

    /// Turn a uniformly chosen open cell into food.
    pub fn spawn_food(&mut self) -> Option<Position> {
        let open = self.grid.positions_of(CellKind::Open);
        let Some(pos) = self.rng.choose(&open) else {
            debug!("no open cell for food");
            return None;
        };
        self.mark(pos, CellKind::Food);
        self.food.push(pos);
        debug!("food at ({}, {})", pos.row, pos.col);
        Some(pos)
    }

    /// Create a teleport pair on two distinct open cells if none exists.
    pub fn maybe_spawn_teleport_pair(&mut self) -> Option<[Position; 2]> {
        if self.game_over || self.teleports.is_some() {
            return None;
        }
        let open = self.grid.positions_of(CellKind::Open);
        let Some((a, b)) = self.rng.choose_pair(&open) else {
            debug!("fewer than two open cells, no teleport pair");
            return None;
        };
        self.mark(a, CellKind::Teleport);
        self.mark(b, CellKind::Teleport);
        self.teleports = Some([a, b]);
        debug!(
            "teleports at ({}, {}) and ({}, {})",
            a.row, a.col, b.row, b.col
        );
        self.teleports
    }

    /// Advance the tick counter (frozen after game over).
    pub fn advance_tick(&mut self) {
        if !self.game_over {
            self.tick = self.tick.wrapping_add(1);
        }
    }

    /// Take events produced since the last call.
    pub fn take_events(&mut self) -> Vec<GameEvent> {
        std::mem::take(&mut self.events)
    }

    /// Stable text form of the board, see [`Grid`].
    pub fn to_text(&self) -> String {
        self.grid.to_text()
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        out.width = self.grid.width();
        out.height = self.grid.height();
        self.grid.write_kinds(&mut out.cells);
        out.snake.clear();
        out.snake.extend(self.snake.iter().copied());
        out.food.clear();
        out.food.extend_from_slice(&self.food);
        out.teleports = self.teleports;
        out.heading = self.heading;
        out.mode = self.mode;
        out.game_over = self.game_over;
        out.tick = self.tick;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(&GameConfig::default())
    }
}
