//! Core game logic module for the 3D snake
//!
//! This module contains all the game logic without any I/O or rendering dependencies.
//! The host drives it through [`GameEngine::tick`] and [`GameEngine::on_key`].

pub mod action;
pub mod config;
pub mod control;
pub mod engine;
pub mod food;
pub mod grid;
pub mod state;

// Re-export commonly used types
pub use action::{Direction, Key};
pub use config::GameConfig;
pub use control::KeyOutcome;
pub use engine::{GameEngine, TickOutcome};
pub use food::FoodSpawner;
pub use grid::{Cell, Grid};
pub use state::{CollisionType, GameState, Phase, Snake};
