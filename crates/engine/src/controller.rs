//! Controller - fixed-cadence tick orchestration.
//!
//! The controller owns the one [`GameState`] of a session and the autopilot's
//! [`PathFinder`], and talks to the outside world only through the injected
//! [`RenderSink`] and optional [`AudioSink`].
//!
//! One call to [`Controller::tick`] per frame:
//!
//! 1. on move ticks (`tick % move_interval == 0`), pick the next cell (heading or
//!    autopilot) and apply it
//! 2. maybe spawn food
//! 3. maybe spawn a teleport pair
//! 4. present a snapshot and forward the tick's events
//! 5. advance the tick counter

use std::cell::RefCell;
use std::rc::Rc;

use log::info;

use crate::core::{GameConfig, GameSnapshot, GameState};
use crate::pathfinder::PathFinder;
use crate::types::{Command, GameEvent, GameMode, Position};

/// Consumer of a read-only snapshot once per tick.
pub trait RenderSink {
    fn present(&mut self, snapshot: &GameSnapshot);
}

/// Consumer of fire-and-forget game events.
pub trait AudioSink {
    fn play(&mut self, event: GameEvent);
}

/// Shared sinks, so the game loop can keep a handle to its terminal sink.
impl<R: RenderSink + ?Sized> RenderSink for Rc<RefCell<R>> {
    fn present(&mut self, snapshot: &GameSnapshot) {
        self.borrow_mut().present(snapshot);
    }
}

impl<A: AudioSink + ?Sized> AudioSink for Rc<RefCell<A>> {
    fn play(&mut self, event: GameEvent) {
        self.borrow_mut().play(event);
    }
}

/// Render sink that draws nothing (headless runs, benches).
#[derive(Debug, Clone, Copy, Default)]
pub struct NullRender;

impl RenderSink for NullRender {
    fn present(&mut self, _snapshot: &GameSnapshot) {}
}

pub struct Controller {
    config: GameConfig,
    state: GameState,
    pathfinder: PathFinder,
    render: Box<dyn RenderSink>,
    audio: Option<Box<dyn AudioSink>>,
    /// Reused across frames
    snapshot: GameSnapshot,
    /// Incremented on every restart; mixed into the next game's seed.
    episode: u32,
}

impl Controller {
    pub fn new(
        config: GameConfig,
        render: Box<dyn RenderSink>,
        audio: Option<Box<dyn AudioSink>>,
    ) -> Self {
        let config = config.clamped();
        let state = GameState::new(&config);
        Self::with_state(config, state, render, audio)
    }

    /// Drive an existing state, e.g. a named scenario.
    pub fn with_state(
        config: GameConfig,
        state: GameState,
        render: Box<dyn RenderSink>,
        audio: Option<Box<dyn AudioSink>>,
    ) -> Self {
        let pathfinder = PathFinder::new(config.seed.rotate_left(16));
        Self {
            config,
            state,
            pathfinder,
            render,
            audio,
            snapshot: GameSnapshot::default(),
            episode: 0,
        }
    }

    /// Announce the game and draw the first frame.
    pub fn start(&mut self) {
        info!("game started (episode {})", self.episode);
        self.notify(GameEvent::GameStarted);
        self.present();
    }

    pub fn state(&self) -> &GameState {
        &self.state
    }

    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    pub fn episode(&self) -> u32 {
        self.episode
    }

    /// Run one frame. Returns the events produced by it.
    pub fn tick(&mut self) -> Vec<GameEvent> {
        let move_interval = self.config.move_interval.max(1);
        if !self.state.game_over() && self.state.tick() % move_interval == 0 {
            let next = self.choose_next_cell();
            self.state.apply_move(next);
        }

        self.state.maybe_spawn_food();
        self.state.maybe_spawn_teleport_pair();

        let events = self.state.take_events();
        self.present();
        for &event in &events {
            self.notify(event);
        }

        self.state.advance_tick();
        events
    }

    fn choose_next_cell(&mut self) -> Position {
        match self.state.mode() {
            GameMode::Manual => self.state.next_cell_for_heading(),
            GameMode::Autopilot => self.pathfinder.next_cell(&self.state),
        }
    }

    /// The cell the autopilot would move into now. The game state is untouched.
    pub fn preview_next_cell(&mut self) -> Position {
        self.pathfinder.next_cell(&self.state)
    }

    pub fn pathfinder(&self) -> &PathFinder {
        &self.pathfinder
    }

    /// Apply a player command. Returns false if the command was rejected.
    pub fn handle(&mut self, command: Command) -> bool {
        if let Some(dir) = command.heading() {
            return self.state.set_heading(dir);
        }
        match command {
            Command::Reverse => self.state.reverse(),
            Command::ToggleAutopilot => {
                let before = self.state.mode();
                before != self.state.toggle_mode()
            }
            Command::PlayAmbientSound => {
                self.notify(GameEvent::AmbientCue);
                true
            }
            Command::Restart => {
                self.restart();
                true
            }
            Command::Up | Command::Down | Command::Left | Command::Right => false,
        }
    }

    /// Discard the current game and start a fresh one.
    pub fn restart(&mut self) {
        self.episode = self.episode.wrapping_add(1);
        let config = self
            .config
            .clone()
            .with_seed(self.config.seed.wrapping_add(self.episode));
        self.state = GameState::new(&config);
        self.start();
    }

    fn present(&mut self) {
        self.state.snapshot_into(&mut self.snapshot);
        self.render.present(&self.snapshot);
    }

    fn notify(&mut self, event: GameEvent) {
        if let Some(audio) = self.audio.as_mut() {
            audio.play(event);
        }
    }
}
