use itertools::Itertools;
use rand::seq::IndexedRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha12Rng;
use serde::Serialize;
use strum::VariantArray;

use cubemath::{FACELET_COUNT, PositionId, RotationAxis};

use crate::animation::TwistAnimation;
use crate::color::FaceColor;
use crate::command::Command;
use crate::facelet::{ActiveRotation, Facelet};
use crate::moves::{Move, MoveDef, Rotation};

/// Default number of moves in a scramble.
pub const DEFAULT_SCRAMBLE_LENGTH: usize = 20;

/// Parameters used to construct a [`Puzzle`].
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct PuzzleParams {
    /// Side length of the whole cube in world units.
    pub side_length: f32,
    /// Timing of twist animations.
    pub animation: TwistAnimation,
    /// Number of moves in a scramble.
    pub scramble_length: usize,
    /// Seed for the scramble RNG, or `None` to pick one at random.
    pub seed: Option<u64>,
}
impl Default for PuzzleParams {
    fn default() -> Self {
        Self {
            side_length: 1.0,
            animation: TwistAnimation::default(),
            scramble_length: DEFAULT_SCRAMBLE_LENGTH,
            seed: None,
        }
    }
}

/// 3x3x3 puzzle made of 54 independently animated facelets.
#[derive(Debug, Clone)]
pub struct Puzzle {
    facelets: Vec<Facelet>,
    params: PuzzleParams,
    /// Seed that `rng` was constructed from.
    seed: u64,
    /// Random number generator, used only for scrambling.
    rng: ChaCha12Rng,
}

impl Default for Puzzle {
    fn default() -> Self {
        Self::new(PuzzleParams::default())
    }
}

impl Puzzle {
    /// Constructs a solved puzzle.
    pub fn new(params: PuzzleParams) -> Self {
        let seed = params.seed.unwrap_or_else(|| rand::rng().random());
        Self {
            facelets: solved_facelets(&params),
            params,
            seed,
            rng: ChaCha12Rng::seed_from_u64(seed),
        }
    }
    /// Constructs a solved puzzle with default parameters and a fixed
    /// scramble seed.
    pub fn with_seed(seed: u64) -> Self {
        Self::new(PuzzleParams {
            seed: Some(seed),
            ..Default::default()
        })
    }

    /// Returns all facelets, in generation order.
    pub fn facelets(&self) -> &[Facelet] {
        &self.facelets
    }
    /// Returns the seed of the scramble RNG.
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Sets the timing for twists that begin after this call.
    pub fn set_animation(&mut self, animation: TwistAnimation) {
        self.params.animation = animation;
        for facelet in &mut self.facelets {
            facelet.set_animation(animation);
        }
    }

    /// Executes a command.
    pub fn execute(&mut self, command: Command) {
        match command {
            Command::Move(m) => {
                self.do_move(m);
            }
            Command::Rotate(r) => self.rotate(r),
            Command::Scramble => {
                self.scramble();
            }
            Command::Reset => self.reset(),
        }
    }

    /// Begins a move and returns the number of facelets it affects.
    ///
    /// Facelets are selected by the position they will have once their
    /// current rotation completes, so a move issued during an animation
    /// affects the same facelets as it would after the animation.
    pub fn do_move(&mut self, m: Move) -> usize {
        let MoveDef { layer, axis } = m.def();
        let mut count = 0;
        for facelet in &mut self.facelets {
            if layer.contains(facelet.settled_position()) {
                facelet.begin_rotation(axis);
                count += 1;
            }
        }
        log::trace!("move {m} rotates {count} facelets about {axis}");
        count
    }
    /// Begins the move with the given name. Unknown names are ignored.
    /// Returns whether the name was recognized.
    pub fn do_move_by_name(&mut self, name: &str) -> bool {
        match name.parse() {
            Ok(m) => {
                self.do_move(m);
                true
            }
            Err(_) => {
                log::debug!("ignoring unknown move {name:?}");
                false
            }
        }
    }

    /// Begins a rotation of the whole puzzle.
    pub fn rotate(&mut self, rotation: Rotation) {
        self.rotate_about(rotation.axis());
    }
    /// Begins a quarter turn of every facelet about `axis`.
    pub fn rotate_about(&mut self, axis: RotationAxis) {
        for facelet in &mut self.facelets {
            facelet.begin_rotation(axis);
        }
    }

    /// Applies random moves, each chosen uniformly from all 12 moves, and
    /// returns them.
    ///
    /// No attempt is made to avoid moves that cancel each other.
    pub fn scramble(&mut self) -> Vec<Move> {
        let moves = (0..self.params.scramble_length)
            .filter_map(|_| Move::VARIANTS.choose(&mut self.rng).copied())
            .collect_vec();
        for &m in &moves {
            self.do_move(m);
        }
        log::info!("scrambled: {}", moves.iter().join(" "));
        moves
    }

    /// Returns every facelet to its solved position immediately. The
    /// scramble RNG is not reset.
    pub fn reset(&mut self) {
        self.facelets = solved_facelets(&self.params);
    }

    /// Advances all animations by `dt`.
    pub fn per_frame(&mut self, dt: f32) {
        for facelet in &mut self.facelets {
            facelet.per_frame(dt);
        }
    }
    /// Completes every animation immediately.
    pub fn catch_up(&mut self) {
        for facelet in &mut self.facelets {
            facelet.finish_rotation();
        }
    }
    /// Returns whether any facelet is rotating.
    pub fn is_animating(&self) -> bool {
        self.facelets.iter().any(|f| f.is_rotating())
    }

    /// Returns whether every face shows a single color, once all animations
    /// have completed.
    pub fn is_solved(&self) -> bool {
        RotationAxis::ALL.into_iter().all(|face| {
            self.facelets
                .iter()
                .filter(|f| f.settled_position().face() == Some(face))
                .map(|f| f.color())
                .all_equal()
        })
    }

    /// Returns the serializable state of every facelet.
    pub fn snapshot(&self) -> Vec<FaceletState> {
        self.facelets
            .iter()
            .map(|f| FaceletState {
                position: f.position(),
                settled_position: f.settled_position(),
                color: f.color(),
                rotation: f.active_rotation().copied(),
            })
            .collect()
    }
}

/// Serializable state of one facelet.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct FaceletState {
    /// Current symbolic position.
    pub position: PositionId,
    /// Position once the rotation in progress completes.
    pub settled_position: PositionId,
    /// Color.
    pub color: FaceColor,
    /// Rotation in progress.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rotation: Option<ActiveRotation>,
}

fn solved_facelets(params: &PuzzleParams) -> Vec<Facelet> {
    let facelets = PositionId::all()
        .map(|pos| Facelet::new(pos, params.side_length, params.animation))
        .collect_vec();
    debug_assert_eq!(FACELET_COUNT, facelets.len());
    facelets
}
