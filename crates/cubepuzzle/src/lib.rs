//! Facelet state machine and move dispatch for a 3x3x3 twisty puzzle.
//!
//! A [`Puzzle`] owns 54 [`Facelet`]s. Each [`Move`] selects an outer layer of
//! facelets by position and starts a quarter-turn animation on each of them.
//! When a facelet's animation completes, its symbolic position is permuted
//! and the rotation is baked into its placement.

#[macro_use]
extern crate strum;

pub use cubemath;

pub mod animation;
mod color;
mod command;
mod facelet;
pub mod geometry;
mod moves;
mod puzzle;
mod rgb;


pub use animation::{InterpolateFn, TwistAnimation};
pub use color::{ColorPalette, FaceColor};
pub use command::{Command, ParseCommandError, parse_sequence};
pub use facelet::{ActiveRotation, Facelet, PIECE_SCALE, initial_placement};
pub use moves::{LayerPredicate, Move, MoveDef, Rotation};
pub use puzzle::{DEFAULT_SCRAMBLE_LENGTH, FaceletState, Puzzle, PuzzleParams};
pub use rgb::Rgb;
