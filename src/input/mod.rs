//! Terminal key binding

pub mod handler;

pub use handler::{InputHandler, KeyAction};
