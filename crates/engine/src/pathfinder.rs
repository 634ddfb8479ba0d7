//! Autopilot search - shortest path from the head to the nearest food.
//!
//! Breadth-first search over traversable cells (open, food, teleport). The first
//! food discovered is the nearest one; walking its parent chain back to the head
//! yields the single next move.
//!
//! Visitation state lives in an arena parallel to the grid and is stamped with a
//! per-search generation, so a cell counts as visited only if its stamp matches
//! the current run. Nothing from an earlier search can leak into a later one and
//! no reset pass is needed.
//!
//! Ties between equally near foods go to whichever is discovered first, with
//! neighbors enumerated North, East, South, West.

use std::collections::VecDeque;

use arrayvec::ArrayVec;
use log::debug;

use crate::core::{GameState, SimpleRng};
use crate::types::{CellKind, Direction, Position};

/// Result of one search.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SearchOutcome {
    /// `next` is the first step toward `food`, `distance` moves away.
    Found {
        next: Position,
        food: Position,
        distance: usize,
    },
    /// No food is reachable from the head.
    Unreachable,
}

#[derive(Debug, Clone, Copy, Default)]
struct Mark {
    generation: u32,
    parent: Option<usize>,
}

/// Reusable BFS state.
#[derive(Debug, Clone)]
pub struct PathFinder {
    marks: Vec<Mark>,
    generation: u32,
    queue: VecDeque<usize>,
    rng: SimpleRng,
}

impl PathFinder {
    /// `seed` drives the random fallback move only.
    pub fn new(seed: u32) -> Self {
        Self {
            marks: Vec::new(),
            generation: 0,
            queue: VecDeque::new(),
            rng: SimpleRng::new(seed),
        }
    }

    /// Start a new search generation sized for `cells` cells.
    fn begin(&mut self, cells: usize) -> u32 {
        if self.marks.len() != cells {
            self.marks.clear();
            self.marks.resize(cells, Mark::default());
            self.generation = 0;
        }
        self.generation = self.generation.wrapping_add(1);
        if self.generation == 0 {
            // Stamps wrapped around; old marks could collide with new ones.
            self.marks.fill(Mark::default());
            self.generation = 1;
        }
        self.queue.clear();
        self.generation
    }

    /// Search without touching the game state.
    pub fn search(&mut self, state: &GameState) -> SearchOutcome {
        let grid = state.grid();
        let generation = self.begin(grid.len());

        let Some(root) = grid.index(state.head()) else {
            return SearchOutcome::Unreachable;
        };
        self.marks[root] = Mark {
            generation,
            parent: None,
        };
        self.queue.push_back(root);

        while let Some(current) = self.queue.pop_front() {
            let here = grid.position(current);
            // Entering a teleport exits at its partner, so expand from there.
            let from = match grid.cells()[current].kind {
                CellKind::Teleport => state.partner_of(here).unwrap_or(here),
                _ => here,
            };

            for next in grid.neighbors(from) {
                let Some(i) = grid.index(next) else {
                    continue;
                };
                if self.marks[i].generation == generation {
                    continue;
                }
                let kind = grid.cells()[i].kind;
                if !kind.is_traversable() {
                    continue;
                }
                self.marks[i] = Mark {
                    generation,
                    parent: Some(current),
                };
                if kind == CellKind::Food {
                    return self.first_step(i, root, state);
                }
                self.queue.push_back(i);
            }
        }

        SearchOutcome::Unreachable
    }

    /// Follow parents from `food` back to the cell whose parent is the head.
    fn first_step(&self, food: usize, root: usize, state: &GameState) -> SearchOutcome {
        let grid = state.grid();
        let mut cell = food;
        let mut distance = 1;
        // A parent chain never revisits a cell, so it is at most `len` long.
        for _ in 0..self.marks.len() {
            match self.marks[cell].parent {
                Some(parent) if parent == root => {
                    return SearchOutcome::Found {
                        next: grid.position(cell),
                        food: grid.position(food),
                        distance,
                    };
                }
                Some(parent) => {
                    cell = parent;
                    distance += 1;
                }
                None => break,
            }
        }
        SearchOutcome::Unreachable
    }

    /// The autopilot's move: first step toward the nearest food, otherwise a
    /// random traversable neighbor of the head, otherwise straight ahead.
    pub fn next_cell(&mut self, state: &GameState) -> Position {
        match self.search(state) {
            SearchOutcome::Found { next, .. } => next,
            SearchOutcome::Unreachable => self.fallback(state),
        }
    }

    fn fallback(&mut self, state: &GameState) -> Position {
        let head = state.head();
        let options: ArrayVec<Position, 4> = state
            .grid()
            .neighbors(head)
            .into_iter()
            .filter(|&p| state.kind_at(p).is_traversable())
            .collect();
        match self.rng.choose(&options) {
            Some(pos) => {
                debug!("no reachable food, wandering to ({}, {})", pos.row, pos.col);
                pos
            }
            None => {
                debug!("head is boxed in");
                state.next_cell_for_heading()
            }
        }
    }

    /// Parent pointers of the last search, one char per cell.
    ///
    /// `o` marks the head, arrows point from a visited cell to its parent, `*`
    /// marks a cell reached through a teleport. Unvisited cells show their grid
    /// character.
    pub fn parents_to_text(&self, state: &GameState) -> String {
        let grid = state.grid();
        let mut out = String::with_capacity(grid.len() + usize::from(grid.height()));
        for (i, cell) in grid.cells().iter().enumerate() {
            if i > 0 && i % usize::from(grid.width()) == 0 {
                out.push('\n');
            }
            let mark = self.marks.get(i).copied().unwrap_or_default();
            let ch = if self.generation == 0 || mark.generation != self.generation {
                cell.kind.as_char()
            } else {
                match mark.parent {
                    None => 'o',
                    Some(parent) => match cell.position.direction_to(grid.position(parent)) {
                        Some(Direction::North) => '^',
                        Some(Direction::East) => '>',
                        Some(Direction::South) => 'v',
                        Some(Direction::West) => '<',
                        None => '*',
                    },
                }
            };
            out.push(ch);
        }
        out
    }
}

impl Default for PathFinder {
    fn default() -> Self {
        Self::new(1)
    }
}
