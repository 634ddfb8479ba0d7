//! Engine - the autopilot and the tick controller.
//!
//! [`PathFinder`] answers "where should the head go next" with a breadth-first
//! search toward the nearest food, following teleport shortcuts. [`Controller`]
//! runs the per-frame sequence (move, spawn, present, notify) on top of the core
//! rules and the injected render/audio collaborators.

pub mod controller;
pub mod pathfinder;

pub use tui_snake_core as core;
pub use tui_snake_types as types;

pub use controller::{AudioSink, Controller, NullRender, RenderSink};
pub use pathfinder::{PathFinder, SearchOutcome};
