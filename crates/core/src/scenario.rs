//! Named deterministic fixtures.
//!
//! Each scenario is a text layout plus an explicit snake (head first) and
//! heading. Building one involves no randomness, so tests and benches can assert
//! exact boards and exact autopilot choices.

use crate::error::ScenarioError;
use crate::game_state::GameState;
use crate::grid::Grid;
use crate::types::{Direction, Position};

/// Seed given to scenario states; only matters once spawning runs.
pub const SCENARIO_SEED: u32 = 1;

/// Spawn interval given to scenario states.
pub const SCENARIO_FOOD_SPAWN_INTERVAL: u32 = 1_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Scenario {
    /// 5x5 open board, head at (2,2) heading east, food at (2,4)
    OpenFoodEast,
    /// 5x5 open board, snake (0,0),(0,1),(0,2) heading east
    ReverseRow,
    /// Head boxed in on the left, food behind a full wall column
    WalledOff,
    /// A teleport next to the head exits right beside the food
    TeleportShortcut,
    /// Two foods at equal distance east and south of the head
    TieBreak,
    /// Wall directly ahead of the head
    WallAhead,
    /// Heading into the snake's own tail
    SelfCollision,
}

struct Layout {
    rows: &'static [&'static str],
    snake: &'static [(i32, i32)],
    heading: Direction,
}

impl Scenario {
    pub const ALL: [Scenario; 7] = [
        Scenario::OpenFoodEast,
        Scenario::ReverseRow,
        Scenario::WalledOff,
        Scenario::TeleportShortcut,
        Scenario::TieBreak,
        Scenario::WallAhead,
        Scenario::SelfCollision,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::OpenFoodEast => "open_food_east",
            Scenario::ReverseRow => "reverse_row",
            Scenario::WalledOff => "walled_off",
            Scenario::TeleportShortcut => "teleport_shortcut",
            Scenario::TieBreak => "tie_break",
            Scenario::WallAhead => "wall_ahead",
            Scenario::SelfCollision => "self_collision",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|sc| sc.as_str() == s)
    }

    fn layout(self) -> Layout {
        match self {
            Scenario::OpenFoodEast => Layout {
                rows: &[".....", ".....", "....F", ".....", "....."],
                snake: &[(2, 2)],
                heading: Direction::East,
            },
            Scenario::ReverseRow => Layout {
                rows: &[".....", ".....", ".....", ".....", "....."],
                snake: &[(0, 0), (0, 1), (0, 2)],
                heading: Direction::East,
            },
            Scenario::WalledOff => Layout {
                rows: &[
                    "#######", //
                    "#..#..#", //
                    "#..#.F#", //
                    "#..#..#", //
                    "#######",
                ],
                snake: &[(2, 2), (2, 1)],
                heading: Direction::East,
            },
            Scenario::TeleportShortcut => Layout {
                rows: &[
                    "##########", //
                    "#........#", //
                    "#.T....TF#", //
                    "#........#", //
                    "##########",
                ],
                snake: &[(2, 1)],
                heading: Direction::East,
            },
            Scenario::TieBreak => Layout {
                rows: &[".....", ".....", "....F", ".....", "..F.."],
                snake: &[(2, 2)],
                heading: Direction::North,
            },
            Scenario::WallAhead => Layout {
                rows: &["#####", "#...#", "#####"],
                snake: &[(1, 3), (1, 2)],
                heading: Direction::East,
            },
            Scenario::SelfCollision => Layout {
                rows: &["....", "....", "....", "...."],
                snake: &[(1, 1), (1, 2), (2, 2), (2, 1)],
                heading: Direction::South,
            },
        }
    }

    /// Build the game state for this scenario.
    pub fn build(self) -> Result<GameState, ScenarioError> {
        let layout = self.layout();
        let grid = Grid::parse(&layout.rows.join("\n"))?;
        let snake: Vec<Position> = layout.snake.iter().map(|&p| Position::from(p)).collect();
        GameState::from_parts(
            grid,
            &snake,
            layout.heading,
            SCENARIO_SEED,
            SCENARIO_FOOD_SPAWN_INTERVAL,
        )
    }
}
