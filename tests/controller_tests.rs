//! Controller tests - tick sequencing, commands and collaborator wiring

use std::cell::RefCell;
use std::rc::Rc;

use crossterm::event::{KeyCode, KeyEvent};

use tui_snake::core::{check_invariants, GameConfig, GameSnapshot, Scenario};
use tui_snake::engine::{AudioSink, Controller, NullRender, RenderSink};
use tui_snake::input::handle_key_event;
use tui_snake::types::{Command, Direction, GameEvent, GameMode, Position};

#[derive(Default)]
struct Frames(Vec<GameSnapshot>);

impl RenderSink for Frames {
    fn present(&mut self, snapshot: &GameSnapshot) {
        self.0.push(snapshot.clone());
    }
}

#[derive(Default)]
struct Sounds(Vec<GameEvent>);

impl AudioSink for Sounds {
    fn play(&mut self, event: GameEvent) {
        self.0.push(event);
    }
}

fn every_tick() -> GameConfig {
    let mut config = GameConfig::new(12, 10);
    config.move_interval = 1;
    config
}

#[test]
fn test_autopilot_eats_food_on_open_board() {
    let state = Scenario::OpenFoodEast.build().unwrap();
    let mut c = Controller::with_state(every_tick(), state, Box::new(NullRender), None);
    assert!(c.handle(Command::ToggleAutopilot));
    assert_eq!(c.state().mode(), GameMode::Autopilot);

    assert!(c.tick().is_empty());
    assert_eq!(c.state().head(), Position::new(2, 3));

    let events = c.tick();
    assert!(events.contains(&GameEvent::FoodEaten), "{events:?}");
    assert_eq!(c.state().len(), 2);
    assert!(check_invariants(c.state()).is_empty());
}

#[test]
fn test_every_tick_presents_one_frame() {
    let frames = Rc::new(RefCell::new(Frames::default()));
    // One move on tick 0 only, so the game cannot end inside the loop.
    let mut config = every_tick();
    config.move_interval = 1_000;
    let mut c = Controller::new(config, Box::new(Rc::clone(&frames)), None);
    c.start();
    for _ in 0..5 {
        c.tick();
    }
    let frames = frames.borrow();
    assert_eq!(frames.0.len(), 6);
    // Frames are taken before the tick counter advances.
    let ticks: Vec<u32> = frames.0.iter().map(|f| f.tick).collect();
    assert_eq!(ticks, vec![0, 0, 1, 2, 3, 4]);
}

#[test]
fn test_events_are_forwarded_to_audio() {
    let sounds = Rc::new(RefCell::new(Sounds::default()));
    let state = Scenario::WallAhead.build().unwrap();
    let mut c = Controller::with_state(
        every_tick(),
        state,
        Box::new(NullRender),
        Some(Box::new(Rc::clone(&sounds))),
    );
    c.start();
    assert_eq!(c.tick(), vec![GameEvent::Collision]);
    assert_eq!(
        sounds.borrow().0,
        vec![GameEvent::GameStarted, GameEvent::Collision]
    );
}

#[test]
fn test_ticks_after_game_over_change_nothing() {
    let state = Scenario::WallAhead.build().unwrap();
    let mut c = Controller::with_state(every_tick(), state, Box::new(NullRender), None);
    c.tick();
    assert!(c.state().game_over());

    let text = c.state().to_text();
    let tick = c.state().tick();
    for _ in 0..10 {
        assert!(c.tick().is_empty());
    }
    assert!(!c.handle(Command::Up));
    assert!(!c.handle(Command::Reverse));
    assert!(!c.handle(Command::ToggleAutopilot));
    assert_eq!(c.state().to_text(), text);
    assert_eq!(c.state().tick(), tick);
}

#[test]
fn test_heading_commands_follow_reverse_rule() {
    let state = Scenario::ReverseRow.build().unwrap();
    let mut c = Controller::with_state(every_tick(), state, Box::new(NullRender), None);
    assert!(!c.handle(Command::Left));
    assert!(c.handle(Command::Down));
    assert_eq!(c.state().heading(), Direction::South);

    assert!(c.handle(Command::Reverse));
    assert_eq!(c.state().head(), Position::new(0, 2));
    assert_eq!(c.state().heading(), Direction::North);
}

#[test]
fn test_queued_turns_cannot_steer_into_the_neck() {
    let mut config = GameConfig::new(10, 10);
    config.move_interval = 2;
    let mut c = Controller::new(config, Box::new(NullRender), None);
    c.tick();
    assert_eq!(c.state().head(), Position::new(5, 3));
    assert_eq!(c.state().heading(), Direction::East);

    // Two turns before the next move: the second one would point at the neck.
    assert!(c.handle(Command::Up));
    assert!(!c.handle(Command::Left));
    assert_eq!(c.state().heading(), Direction::North);

    c.tick();
    c.tick();
    assert!(!c.state().game_over());
    assert_ne!(c.state().head(), Position::new(5, 2));
}

#[test]
fn test_undersized_board_is_enlarged_to_the_minimum() {
    let mut c = Controller::new(GameConfig::new(2, 2), Box::new(NullRender), None);
    assert_eq!((c.config().width, c.config().height), (5, 5));
    assert_eq!(c.state().grid().width(), 5);
    assert!(check_invariants(c.state()).is_empty());

    c.start();
    c.tick();
    assert!(check_invariants(c.state()).is_empty());
}

#[test]
fn test_restart_is_deterministic() {
    let mut a = Controller::new(every_tick().with_seed(5), Box::new(NullRender), None);
    let mut b = Controller::new(every_tick().with_seed(5), Box::new(NullRender), None);
    for _ in 0..7 {
        a.tick();
    }
    a.restart();
    b.restart();
    assert_eq!(a.episode(), 1);
    assert_eq!(a.state().to_text(), b.state().to_text());
    for _ in 0..5 {
        assert_eq!(a.tick(), b.tick());
    }
    assert_eq!(a.state().to_text(), b.state().to_text());
}

#[test]
fn test_keys_drive_the_controller() {
    let mut c = Controller::new(every_tick(), Box::new(NullRender), None);
    for code in [KeyCode::Char('a'), KeyCode::Char('i'), KeyCode::Char('x')] {
        if let Some(command) = handle_key_event(KeyEvent::from(code)) {
            c.handle(command);
        }
    }
    assert_eq!(c.state().mode(), GameMode::Autopilot);
    assert_eq!(c.state().heading(), Direction::North);
}

#[test]
fn test_long_autopilot_run_stays_consistent() {
    let mut c = Controller::new(every_tick().with_seed(42), Box::new(NullRender), None);
    c.handle(Command::ToggleAutopilot);
    let mut eaten = 0;
    for _ in 0..500 {
        let events = c.tick();
        eaten += events.iter().filter(|e| **e == GameEvent::FoodEaten).count();
        let violations = check_invariants(c.state());
        assert!(violations.is_empty(), "{violations:?}");
        if c.state().game_over() {
            break;
        }
    }
    assert!(eaten > 0);
}
