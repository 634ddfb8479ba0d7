//! Terminal snake runner (default binary).
//!
//! Reads `GameConfig` from the environment, logs to a file (the terminal belongs
//! to the framebuffer renderer) and drives the controller at the configured tick
//! period with crossterm input.

use std::cell::RefCell;
use std::env;
use std::fs::File;
use std::rc::Rc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::event::{self, Event, KeyEventKind};
use log::{debug, info, warn};
use simplelog::{Config, LevelFilter, WriteLogger};

use tui_snake::core::GameConfig;
use tui_snake::engine::Controller;
use tui_snake::input::{handle_key_event, should_quit};
use tui_snake::term::{TermRender, TerminalBell, TerminalRenderer};

const DEFAULT_LOG_PATH: &str = "tui-snake.log";

fn main() -> Result<()> {
    init_logging();

    let config = GameConfig::from_env().context("invalid snake configuration")?;
    info!("starting with {config:?}");

    let mut term = TerminalRenderer::new();
    term.enter()?;

    let render = Rc::new(RefCell::new(TermRender::new(
        term,
        Duration::from_millis(u64::from(config.startup_redraw_ms)),
    )));
    let result = run(config, &render);

    // Always try to restore terminal state.
    let _ = render.borrow_mut().exit();
    if let Err(e) = &result {
        warn!("exiting with error: {e:#}");
    }
    result
}

fn init_logging() {
    let path = env::var("SNAKE_LOG_PATH").unwrap_or_else(|_| DEFAULT_LOG_PATH.to_string());
    let level = env::var("SNAKE_LOG_LEVEL")
        .ok()
        .and_then(|v| v.parse::<LevelFilter>().ok())
        .unwrap_or(LevelFilter::Info);

    // Without a log file the game still runs, just silently.
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(level, Config::default(), file);
    }
}

fn run(config: GameConfig, render: &Rc<RefCell<TermRender>>) -> Result<()> {
    let tick_duration = Duration::from_millis(u64::from(config.tick_ms.max(1)));
    let mut controller = Controller::new(
        config,
        Box::new(Rc::clone(render)),
        Some(Box::new(TerminalBell::new())),
    );
    controller.start();

    let mut last_tick = Instant::now();
    loop {
        if let Some(e) = render.borrow_mut().take_error() {
            return Err(e);
        }

        // Input with timeout until next tick.
        let timeout = tick_duration
            .checked_sub(last_tick.elapsed())
            .unwrap_or(Duration::ZERO);

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => {
                    if should_quit(key) {
                        info!("quit after {} ticks", controller.state().tick());
                        return Ok(());
                    }
                    if let Some(command) = handle_key_event(key) {
                        if !controller.handle(command) {
                            debug!("command {} rejected", command.as_str());
                        }
                    }
                }
                Event::Resize(_, _) => render.borrow_mut().invalidate(),
                _ => {}
            }
        }

        if last_tick.elapsed() >= tick_duration {
            last_tick = Instant::now();
            controller.tick();
        }
    }
}
