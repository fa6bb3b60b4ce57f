//! 3D Snake - snake on a cubic grid, shown as three plane projections
//!
//! This library provides:
//! - Core game logic: grid, snake, food, tick engine and key mapping (game module)
//! - Terminal key binding (input module)
//! - Plane projection and TUI rendering (render module)
//! - Session metrics (metrics module)
//! - The interactive host loop and its tick driver (modes module)

pub mod game;
pub mod input;
pub mod metrics;
pub mod modes;
pub mod render;
