//! Core game logic module - pure, deterministic, and testable
//!
//! This crate contains all the game rules and state management. It has **no
//! dependencies** on UI, terminal or input handling, making it:
//!
//! - **Deterministic**: same seed, same spawns (and named scenarios use no randomness at all)
//! - **Testable**: every rule is reachable through [`GameState`] methods
//! - **Portable**: runs headless, in a terminal, or under a property-test harness
//!
//! # Module Structure
//!
//! - [`grid`]: fixed-size board with bounds-checked lookup and neighbor enumeration
//! - [`game_state`]: snake movement, growth, collision, spawning, teleport pairs
//! - [`scenario`]: named fixtures for tests and benches
//! - [`snapshot`]: read-only copy for renderers
//! - [`config`]: tunables (board size, cadence, spawn interval, seed)
//! - [`rng`]: small seeded LCG
//! - [`invariants`]: consistency checks used by tests
//!
//! # Game Rules
//!
//! - Moving into food grows the snake by one and removes that food.
//! - Moving into a teleport places the head on the partner teleport; the pair is
//!   consumed and a new one spawns on the next spawn step.
//! - Moving into a wall, the board edge or the body ends the game; the state is
//!   then frozen.
//! - A heading exactly opposite to the current one is ignored; `reverse` turns
//!   the whole snake around instead.
//!
//! # Example
//!
//! ```
//! use tui_snake_core::{MoveOutcome, Scenario};
//! use tui_snake_types::Position;
//!
//! let mut game = Scenario::OpenFoodEast.build().unwrap();
//! assert_eq!(game.apply_move(Position::new(2, 3)), MoveOutcome::Moved);
//! assert_eq!(game.apply_move(Position::new(2, 4)), MoveOutcome::Grew);
//! assert_eq!(game.len(), 2);
//! ```

pub mod config;
pub mod error;
pub mod game_state;
pub mod grid;
pub mod invariants;
pub mod rng;
pub mod scenario;
pub mod snapshot;

pub use tui_snake_types as types;

// Re-export commonly used types for convenience
pub use config::GameConfig;
pub use error::{BoundsError, ConfigError, ScenarioError};
pub use game_state::{GameState, MoveOutcome};
pub use grid::{Cell, Grid};
pub use invariants::{check_invariants, InvariantViolation};
pub use rng::SimpleRng;
pub use scenario::Scenario;
pub use snapshot::GameSnapshot;
