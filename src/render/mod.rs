//! Terminal presentation: three plane projections and the static screens

pub mod projection;
pub mod renderer;

pub use projection::{Glyph, Plane, PlaneView, project};
pub use renderer::Renderer;
