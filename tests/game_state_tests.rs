//! Game state tests - movement rules, spawning and the frozen game-over state

use tui_snake::core::{
    check_invariants, GameConfig, GameState, Grid, MoveOutcome, Scenario, ScenarioError,
};
use tui_snake::types::{CellKind, Direction, GameEvent, GameMode, Position};

fn assert_consistent(state: &GameState) {
    let violations = check_invariants(state);
    assert!(violations.is_empty(), "{violations:?}");
}

#[test]
fn test_new_game_layout() {
    let state = GameState::new(&GameConfig::new(10, 8));
    assert_eq!(state.grid().width(), 10);
    assert_eq!(state.grid().height(), 8);
    assert_eq!(
        state.snake().iter().copied().collect::<Vec<_>>(),
        vec![Position::new(4, 2), Position::new(4, 1)]
    );
    assert_eq!(state.heading(), Direction::East);
    assert_eq!(state.mode(), GameMode::Manual);
    assert!(!state.game_over());
    assert_eq!(state.tick(), 0);
    assert!(state.food().is_empty());
    assert!(state.teleports().is_none());
    // Wall ring around the board.
    assert_eq!(state.kind_at(Position::new(0, 0)), CellKind::Wall);
    assert_eq!(state.kind_at(Position::new(7, 9)), CellKind::Wall);
    assert_consistent(&state);
}

#[test]
fn test_plain_move_conserves_length() {
    let mut state = Scenario::ReverseRow.build().unwrap();
    state.set_heading(Direction::South);
    let before = state.len();
    let tail = *state.snake().back().unwrap();

    assert_eq!(state.apply_move(Position::new(1, 0)), MoveOutcome::Moved);
    assert_eq!(state.len(), before);
    assert_eq!(state.head(), Position::new(1, 0));
    assert_eq!(state.kind_at(tail), CellKind::Open);
    assert_eq!(state.kind_at(Position::new(0, 0)), CellKind::Body);
    assert!(state.take_events().is_empty());
    assert_consistent(&state);
}

#[test]
fn test_eating_food_grows_by_one() {
    let mut state = Scenario::OpenFoodEast.build().unwrap();
    assert_eq!(state.food(), &[Position::new(2, 4)]);

    assert_eq!(state.apply_move(Position::new(2, 3)), MoveOutcome::Moved);
    assert_eq!(state.len(), 1);
    assert_eq!(state.apply_move(Position::new(2, 4)), MoveOutcome::Grew);
    assert_eq!(state.len(), 2);
    assert_eq!(state.head(), Position::new(2, 4));
    // The previous head stays as body since nothing was popped.
    assert_eq!(state.kind_at(Position::new(2, 3)), CellKind::Body);
    assert!(state.food().is_empty());
    assert_eq!(state.take_events(), vec![GameEvent::FoodEaten]);
    assert_consistent(&state);
}

#[test]
fn test_teleport_moves_head_to_partner() {
    let mut state = Scenario::TeleportShortcut.build().unwrap();
    assert_eq!(
        state.teleports(),
        Some([Position::new(2, 2), Position::new(2, 7)])
    );

    assert_eq!(
        state.apply_move(Position::new(2, 2)),
        MoveOutcome::Teleported {
            exit: Position::new(2, 7)
        }
    );
    assert_eq!(state.head(), Position::new(2, 7));
    assert_eq!(state.len(), 1);
    // The pair is consumed: entry reopens, exit holds the head.
    assert!(state.teleports().is_none());
    assert_eq!(state.kind_at(Position::new(2, 2)), CellKind::Open);
    assert_eq!(state.grid().count(CellKind::Teleport), 0);
    assert_eq!(state.take_events(), vec![GameEvent::Teleported]);
    assert_consistent(&state);
}

#[test]
fn test_teleport_conserves_length_of_long_snake() {
    let grid = Grid::parse("......\n.T..T.\n......").unwrap();
    let snake = [Position::new(1, 0), Position::new(0, 0)];
    let mut state = GameState::from_parts(grid, &snake, Direction::East, 3, 100).unwrap();

    let outcome = state.apply_move(Position::new(1, 1));
    assert_eq!(
        outcome,
        MoveOutcome::Teleported {
            exit: Position::new(1, 4)
        }
    );
    assert_eq!(state.len(), 2);
    assert_eq!(
        state.snake().iter().copied().collect::<Vec<_>>(),
        vec![Position::new(1, 4), Position::new(1, 0)]
    );
    assert_eq!(state.kind_at(Position::new(0, 0)), CellKind::Open);
    assert_consistent(&state);

    // The snake keeps going from the exit.
    assert_eq!(state.apply_move(Position::new(1, 5)), MoveOutcome::Moved);
    assert_eq!(state.kind_at(Position::new(1, 0)), CellKind::Open);
    assert_consistent(&state);
}

#[test]
fn test_collision_is_terminal_and_idempotent() {
    let mut state = Scenario::WallAhead.build().unwrap();
    let next = state.next_cell_for_heading();
    assert_eq!(next, Position::new(1, 4));

    assert_eq!(state.apply_move(next), MoveOutcome::Collided);
    assert!(state.game_over());
    assert_eq!(state.take_events(), vec![GameEvent::Collision]);

    let text = state.to_text();
    let snake: Vec<_> = state.snake().iter().copied().collect();
    let tick = state.tick();

    assert_eq!(state.apply_move(Position::new(1, 1)), MoveOutcome::Frozen);
    assert!(!state.set_heading(Direction::North));
    assert!(!state.reverse());
    state.set_mode(GameMode::Autopilot);
    state.advance_tick();
    assert_eq!(state.maybe_spawn_food(), None);
    assert_eq!(state.maybe_spawn_teleport_pair(), None);

    assert_eq!(state.to_text(), text);
    assert_eq!(state.snake().iter().copied().collect::<Vec<_>>(), snake);
    assert_eq!(state.tick(), tick);
    assert_eq!(state.mode(), GameMode::Manual);
    assert!(state.take_events().is_empty());
}

#[test]
fn test_moving_into_own_body_collides() {
    let mut state = Scenario::SelfCollision.build().unwrap();
    let next = state.next_cell_for_heading();
    assert_eq!(state.kind_at(next), CellKind::Body);
    assert_eq!(state.apply_move(next), MoveOutcome::Collided);
    assert!(state.game_over());
}

#[test]
fn test_off_board_move_collides() {
    let mut state = Scenario::ReverseRow.build().unwrap();
    state.reverse();
    assert_eq!(state.head(), Position::new(0, 2));
    // Reverse left the snake heading west from (0, 2); go north instead.
    assert!(state.set_heading(Direction::North));
    let next = state.next_cell_for_heading();
    assert_eq!(next, Position::new(-1, 2));
    assert_eq!(state.apply_move(next), MoveOutcome::Collided);
}

#[test]
fn test_reverse_example() {
    let mut state = Scenario::ReverseRow.build().unwrap();
    assert!(state.reverse());
    assert_eq!(
        state.snake().iter().copied().collect::<Vec<_>>(),
        vec![Position::new(0, 2), Position::new(0, 1), Position::new(0, 0)]
    );
    assert_eq!(state.heading(), Direction::West);
    assert_eq!(state.kind_at(Position::new(0, 2)), CellKind::Head);
    assert_eq!(state.kind_at(Position::new(0, 0)), CellKind::Body);
    assert_consistent(&state);
}

#[test]
fn test_direct_reverse_heading_is_rejected() {
    let mut state = Scenario::ReverseRow.build().unwrap();
    assert!(!state.set_heading(Direction::West));
    assert_eq!(state.heading(), Direction::East);
    assert!(state.set_heading(Direction::South));

    // A single segment can turn around freely.
    let mut single = Scenario::OpenFoodEast.build().unwrap();
    assert!(single.set_heading(Direction::West));
}

#[test]
fn test_food_spawns_when_missing_and_on_interval() {
    let mut config = GameConfig::new(12, 10);
    config.food_spawn_interval = 5;
    let mut state = GameState::new(&config);

    // Tick 0: no food yet, so one spawns.
    let first = state.maybe_spawn_food().unwrap();
    assert_eq!(state.kind_at(first), CellKind::Food);
    state.advance_tick();

    for _ in 1..5 {
        assert_eq!(state.maybe_spawn_food(), None);
        state.advance_tick();
    }
    // Tick 5 is an interval boundary.
    assert!(state.maybe_spawn_food().is_some());
    assert_eq!(state.food().len(), 2);
    assert_consistent(&state);
}

#[test]
fn test_spawning_is_deterministic_per_seed() {
    let config = GameConfig::new(20, 12).with_seed(77);
    let mut a = GameState::new(&config);
    let mut b = GameState::new(&config);
    for _ in 0..10 {
        assert_eq!(a.spawn_food(), b.spawn_food());
    }
    assert_eq!(a.maybe_spawn_teleport_pair(), b.maybe_spawn_teleport_pair());
    assert_eq!(a.to_text(), b.to_text());
}

#[test]
fn test_teleport_pair_needs_two_open_cells() {
    let grid = Grid::parse("###\n#.#\n###").unwrap();
    let mut state =
        GameState::from_parts(grid, &[Position::new(1, 1)], Direction::East, 1, 10).unwrap();
    assert_eq!(state.maybe_spawn_teleport_pair(), None);
    assert_eq!(state.spawn_food(), None);
    assert_consistent(&state);
}

#[test]
fn test_from_parts_validation() {
    let grid = || Grid::parse(".....\n.#...\n.....").unwrap();

    assert_eq!(
        GameState::from_parts(grid(), &[], Direction::East, 1, 10).unwrap_err(),
        ScenarioError::EmptySnake
    );
    assert_eq!(
        GameState::from_parts(grid(), &[Position::new(1, 1)], Direction::East, 1, 10)
            .unwrap_err(),
        ScenarioError::SnakeBlocked(Position::new(1, 1))
    );
    assert_eq!(
        GameState::from_parts(
            grid(),
            &[Position::new(0, 0), Position::new(0, 2)],
            Direction::East,
            1,
            10
        )
        .unwrap_err(),
        ScenarioError::SnakeNotContiguous(Position::new(0, 0), Position::new(0, 2))
    );
    assert!(matches!(
        GameState::from_parts(grid(), &[Position::new(5, 5)], Direction::East, 1, 10),
        Err(ScenarioError::Bounds(_))
    ));

    let lone = Grid::parse("T....").unwrap();
    assert_eq!(
        GameState::from_parts(lone, &[Position::new(0, 2)], Direction::East, 1, 10).unwrap_err(),
        ScenarioError::LoneTeleport(1)
    );
}

#[test]
fn test_snapshot_mirrors_state() {
    let mut state = Scenario::TeleportShortcut.build().unwrap();
    state.toggle_mode();
    let snap = state.snapshot();

    assert_eq!(snap.width, 10);
    assert_eq!(snap.height, 5);
    assert_eq!(snap.cells.len(), 50);
    assert_eq!(snap.kind_at(2, 1), Some(CellKind::Head));
    assert_eq!(snap.kind_at(2, 8), Some(CellKind::Food));
    assert_eq!(snap.kind_at(5, 0), None);
    assert_eq!(snap.snake, vec![Position::new(2, 1)]);
    assert_eq!(snap.teleports, state.teleports());
    assert_eq!(snap.mode, GameMode::Autopilot);
    assert!(snap.playable());
}

#[test]
fn test_every_scenario_text_round_trips_through_parse() {
    for scenario in Scenario::ALL {
        let state = scenario.build().unwrap();
        assert_consistent(&state);
        let text = state.to_text();
        assert_eq!(text.lines().count(), usize::from(state.grid().height()));
        assert_eq!(Scenario::from_str(scenario.as_str()), Some(scenario));
    }
}
