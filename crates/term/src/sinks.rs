//! Terminal implementations of the controller's render and audio collaborators.

use std::time::{Duration, Instant};

use crossterm::terminal;
use log::warn;

use crate::core::GameSnapshot;
use crate::engine::{AudioSink, RenderSink};
use crate::fb::FrameBuffer;
use crate::game_view::{GameView, Viewport};
use crate::renderer::TerminalRenderer;
use crate::types::GameEvent;

/// One forced full redraw, a fixed delay after start.
///
/// Checked from `present`, so it never blocks a tick.
#[derive(Debug, Clone, Copy)]
pub struct StartupRedraw {
    due: Option<Instant>,
}

impl StartupRedraw {
    pub fn new(start: Instant, delay: Duration) -> Self {
        Self {
            due: Some(start + delay),
        }
    }

    /// True exactly once, on the first call at or after the due time.
    pub fn poll(&mut self, now: Instant) -> bool {
        match self.due {
            Some(due) if now >= due => {
                self.due = None;
                true
            }
            _ => false,
        }
    }

    pub fn pending(&self) -> bool {
        self.due.is_some()
    }
}

/// Draws every snapshot to the terminal through a reused framebuffer.
///
/// `present` cannot fail, so the first I/O error is kept for the game loop to
/// pick up with [`TermRender::take_error`].
pub struct TermRender {
    renderer: TerminalRenderer,
    view: GameView,
    fb: FrameBuffer,
    startup: StartupRedraw,
    error: Option<anyhow::Error>,
}

impl TermRender {
    pub fn new(renderer: TerminalRenderer, startup_redraw: Duration) -> Self {
        Self {
            renderer,
            view: GameView::default(),
            fb: FrameBuffer::new(0, 0),
            startup: StartupRedraw::new(Instant::now(), startup_redraw),
            error: None,
        }
    }

    /// Force a full redraw on the next frame (terminal resize).
    pub fn invalidate(&mut self) {
        self.renderer.invalidate();
    }

    pub fn take_error(&mut self) -> Option<anyhow::Error> {
        self.error.take()
    }

    /// Give the terminal back, whatever state the game is in.
    pub fn exit(&mut self) -> anyhow::Result<()> {
        self.renderer.exit()
    }

    fn draw(&mut self, snapshot: &GameSnapshot) -> anyhow::Result<()> {
        if self.startup.poll(Instant::now()) {
            self.renderer.invalidate();
        }
        let (w, h) = terminal::size()?;
        self.view
            .render_into(snapshot, Viewport::new(w, h), &mut self.fb);
        self.renderer.draw_swap(&mut self.fb)
    }
}

impl RenderSink for TermRender {
    fn present(&mut self, snapshot: &GameSnapshot) {
        if let Err(e) = self.draw(snapshot) {
            warn!("render failed: {e:#}");
            if self.error.is_none() {
                self.error = Some(e);
            }
        }
    }
}

/// Rings the terminal bell for every game event.
#[derive(Default)]
pub struct TerminalBell {
    renderer: TerminalRenderer,
}

impl TerminalBell {
    pub fn new() -> Self {
        Self::default()
    }
}

impl AudioSink for TerminalBell {
    fn play(&mut self, event: GameEvent) {
        if let Err(e) = self.renderer.bell() {
            warn!("bell for {event:?} failed: {e:#}");
        }
    }
}
