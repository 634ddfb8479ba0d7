//! Grid module - the fixed-size board
//!
//! The grid is a `width x height` array of cells stored row-major in a flat `Vec`
//! (`row * width + col`). Cells never move or change in number; only their kind
//! changes as the snake, food and teleports come and go.
//!
//! Stable text form, one char per cell and one line per row:
//!
//! ```text
//! #####
//! #.F.#
//! #HB.#
//! #####
//! ```

use std::fmt;

use arrayvec::ArrayVec;

use crate::error::{BoundsError, ScenarioError};
use crate::types::{CellKind, Direction, Position};

/// A single board cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Cell {
    pub position: Position,
    pub kind: CellKind,
}

/// The game board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    width: u16,
    height: u16,
    cells: Vec<Cell>,
}

impl Grid {
    /// Create an all-open grid
    pub fn new(width: u16, height: u16) -> Self {
        let mut cells = Vec::with_capacity(usize::from(width) * usize::from(height));
        for row in 0..i32::from(height) {
            for col in 0..i32::from(width) {
                cells.push(Cell {
                    position: Position::new(row, col),
                    kind: CellKind::Open,
                });
            }
        }
        Self {
            width,
            height,
            cells,
        }
    }

    /// Create a grid whose outer ring is wall
    pub fn with_border(width: u16, height: u16) -> Self {
        let mut grid = Self::new(width, height);
        let (w, h) = (i32::from(width), i32::from(height));
        for cell in &mut grid.cells {
            let Position { row, col } = cell.position;
            if row == 0 || col == 0 || row == h - 1 || col == w - 1 {
                cell.kind = CellKind::Wall;
            }
        }
        grid
    }

    /// Parse the text form. Snake cells (`H`, `B`) are rejected because segment
    /// order cannot be recovered from text.
    pub fn parse(text: &str) -> Result<Self, ScenarioError> {
        let rows: Vec<&str> = text
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .collect();
        let Some(first) = rows.first() else {
            return Err(ScenarioError::EmptyLayout);
        };
        let width = first.chars().count();
        if width == 0 {
            return Err(ScenarioError::EmptyLayout);
        }

        let too_large = || ScenarioError::TooLarge {
            width,
            height: rows.len(),
        };
        let w = u16::try_from(width).map_err(|_| too_large())?;
        let h = u16::try_from(rows.len()).map_err(|_| too_large())?;
        let mut grid = Self::new(w, h);
        for (r, line) in rows.iter().enumerate() {
            let found = line.chars().count();
            if found != width {
                return Err(ScenarioError::RaggedRow {
                    row: r,
                    expected: width,
                    found,
                });
            }
            for (c, ch) in line.chars().enumerate() {
                let kind = CellKind::from_char(ch).ok_or(ScenarioError::UnknownCell {
                    ch,
                    row: r,
                    col: c,
                })?;
                if matches!(kind, CellKind::Head | CellKind::Body) {
                    return Err(ScenarioError::SnakeInLayout { ch, row: r, col: c });
                }
                grid.cells[r * width + c].kind = kind;
            }
        }
        Ok(grid)
    }

    pub fn width(&self) -> u16 {
        self.width
    }

    pub fn height(&self) -> u16 {
        self.height
    }

    /// Total number of cells
    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn contains(&self, pos: Position) -> bool {
        pos.row >= 0
            && pos.col >= 0
            && pos.row < i32::from(self.height)
            && pos.col < i32::from(self.width)
    }

    /// Flat index of `pos`, `None` when out of bounds
    #[inline(always)]
    pub fn index(&self, pos: Position) -> Option<usize> {
        if !self.contains(pos) {
            return None;
        }
        Some(pos.row as usize * usize::from(self.width) + pos.col as usize)
    }

    /// Position of a flat index. Panics if `index >= len()`.
    pub fn position(&self, index: usize) -> Position {
        self.cells[index].position
    }

    fn bounds_error(&self, position: Position) -> BoundsError {
        BoundsError {
            position,
            width: self.width,
            height: self.height,
        }
    }

    pub fn cell_at(&self, pos: Position) -> Result<&Cell, BoundsError> {
        self.index(pos)
            .map(|i| &self.cells[i])
            .ok_or_else(|| self.bounds_error(pos))
    }

    /// Kind at `pos`, `None` when out of bounds
    pub fn kind_at(&self, pos: Position) -> Option<CellKind> {
        self.index(pos).map(|i| self.cells[i].kind)
    }

    pub fn set_kind(&mut self, pos: Position, kind: CellKind) -> Result<(), BoundsError> {
        let i = self.index(pos).ok_or_else(|| self.bounds_error(pos))?;
        self.cells[i].kind = kind;
        Ok(())
    }

    /// In-bounds orthogonal neighbors in North, East, South, West order.
    ///
    /// The board edge acts as an implicit wall: off-board positions are omitted.
    pub fn neighbors(&self, pos: Position) -> ArrayVec<Position, 4> {
        let mut out = ArrayVec::new();
        for dir in Direction::ALL {
            let next = pos.step(dir);
            if self.contains(next) {
                out.push(next);
            }
        }
        out
    }

    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    pub fn count(&self, kind: CellKind) -> usize {
        self.cells.iter().filter(|c| c.kind == kind).count()
    }

    /// All positions of `kind`, in row-major order
    pub fn positions_of(&self, kind: CellKind) -> Vec<Position> {
        self.cells
            .iter()
            .filter(|c| c.kind == kind)
            .map(|c| c.position)
            .collect()
    }

    /// Write cell kinds row-major into `out`, reusing its allocation.
    pub fn write_kinds(&self, out: &mut Vec<CellKind>) {
        out.clear();
        out.extend(self.cells.iter().map(|c| c.kind));
    }

    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for Grid {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, row) in self.cells.chunks(usize::from(self.width)).enumerate() {
            if i > 0 {
                f.write_str("\n")?;
            }
            for cell in row {
                write!(f, "{}", cell.kind.as_char())?;
            }
        }
        Ok(())
    }
}
