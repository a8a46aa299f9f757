//! Puzzle simulation state manager, shared by every frontend.

mod render_data;
mod simulation;

pub use cubepuzzle::geometry;
pub use render_data::FaceletRenderData;
pub use simulation::PuzzleSimulation;

/// Frame rate assumed for the first frame of an animation, when there is no
/// previous frame to measure from.
pub const ASSUMED_FPS: f32 = 120.0;
