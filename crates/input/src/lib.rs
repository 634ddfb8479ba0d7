//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into abstract [`crate::types::Command`]s. The game
//! core only ever sees commands, never raw keys.

pub mod map;

pub use tui_snake_types as types;

pub use map::{handle_key_event, should_quit};
