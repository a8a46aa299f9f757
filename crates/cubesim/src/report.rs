use cubepuzzle::{Command, FaceletState, Move};
use cubeview::PuzzleSimulation;
use serde::Serialize;

/// Summary of a simulation, printed as JSON.
#[derive(Serialize, Debug, Clone, PartialEq)]
pub(crate) struct Report {
    /// Seed of the scramble RNG.
    pub seed: u64,
    /// Commands executed, in order.
    pub commands: Vec<Command>,
    /// Moves of the most recent scramble.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub scramble: Option<Vec<Move>>,
    /// Number of frames simulated.
    pub frames: usize,
    /// Whether an animation was still in progress at the end.
    pub animating: bool,
    pub solved: bool,
    pub facelets: Vec<FaceletState>,
}

impl Report {
    pub fn new(sim: &PuzzleSimulation, frames: usize) -> Self {
        let puzzle = sim.puzzle();
        Self {
            seed: puzzle.seed(),
            commands: sim.history().to_vec(),
            scramble: sim.scramble().map(|moves| moves.to_vec()),
            frames,
            animating: puzzle.is_animating(),
            solved: puzzle.is_solved(),
            facelets: puzzle.snapshot(),
        }
    }
}
