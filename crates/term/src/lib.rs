//! Terminal "game renderer" module.
//!
//! This is a small, game-oriented rendering layer for terminal gameplay.
//! It avoids widget/layout libraries and instead renders into a simple
//! framebuffer that is diffed and flushed to a crossterm backend.
//!
//! The [`sinks`] module plugs it into the engine's controller as the render and
//! audio collaborators.

pub mod fb;
pub mod game_view;
pub mod renderer;
pub mod sinks;

pub use tui_snake_core as core;
pub use tui_snake_engine as engine;
pub use tui_snake_types as types;

pub use fb::{FrameBuffer, Glyph, Ink};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{encode_frame, TerminalRenderer};
pub use sinks::{StartupRedraw, TermRender, TerminalBell};
