//! Game invariants - sanity checks that detect bugs.
//!
//! None of these should ever trigger for a state reached through the public
//! API. Tests and property tests call [`check_invariants`] after every step.

use std::collections::HashSet;
use std::fmt;

use crate::game_state::GameState;
use crate::types::CellKind;

/// Invariant violation error.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InvariantViolation {
    pub message: String,
}

impl fmt::Display for InvariantViolation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Invariant violation: {}", self.message)
    }
}

impl std::error::Error for InvariantViolation {}

/// Check all game invariants.
///
/// Returns every violation found, or an empty list if the state is consistent.
#[must_use]
pub fn check_invariants(state: &GameState) -> Vec<InvariantViolation> {
    let mut violations = Vec::new();
    let mut fail = |message: String| violations.push(InvariantViolation { message });
    let grid = state.grid();

    if state.is_empty() {
        fail("snake has no segments".to_string());
        return violations;
    }

    // Snake cells carry Head/Body and never repeat.
    let mut seen = HashSet::new();
    for (i, &pos) in state.snake().iter().enumerate() {
        if !seen.insert(pos) {
            fail(format!("snake repeats {pos:?}"));
        }
        let expected = if i == 0 { CellKind::Head } else { CellKind::Body };
        match grid.kind_at(pos) {
            Some(kind) if kind == expected => {}
            other => fail(format!(
                "snake segment {i} at {pos:?} is {other:?}, expected {expected:?}"
            )),
        }
    }
    let heads = grid.count(CellKind::Head);
    if heads != 1 {
        fail(format!("{heads} head cells on the grid"));
    }
    let bodies = grid.count(CellKind::Body);
    if bodies != state.len() - 1 {
        fail(format!(
            "{bodies} body cells for a snake of length {}",
            state.len()
        ));
    }

    // Food set mirrors Food cells.
    let mut food: Vec<_> = state.food().to_vec();
    food.sort();
    let mut food_cells = grid.positions_of(CellKind::Food);
    food_cells.sort();
    if food != food_cells {
        fail(format!("food set {food:?} != food cells {food_cells:?}"));
    }

    // Teleports come in pairs.
    let teleport_cells = grid.positions_of(CellKind::Teleport);
    match (state.teleports(), teleport_cells.as_slice()) {
        (None, []) => {}
        (Some([a, b]), cells)
            if cells.len() == 2 && a != b && cells.contains(&a) && cells.contains(&b) => {}
        (pair, cells) => fail(format!("teleport pair {pair:?} vs cells {cells:?}")),
    }

    violations
}
