use cubeprefs::{AnimationPreferences, Preferences};
use cubepuzzle::{Command, Move, Puzzle};
use web_time::{Duration, Instant};

use crate::{ASSUMED_FPS, FaceletRenderData};

/// Puzzle simulation, managing input, animation timing, and render data.
#[derive(Debug)]
pub struct PuzzleSimulation {
    /// Puzzle state, including animations in progress.
    puzzle: Puzzle,
    /// Preferences the simulation was created with.
    prefs: Preferences,

    /// Every command executed, in order.
    history: Vec<Command>,
    /// Moves of the most recent scramble, or `None` if the puzzle has not been
    /// scrambled since it was last reset.
    scramble: Option<Vec<Move>>,

    /// Time of last frame, or `None` if we are not in the middle of an
    /// animation.
    last_frame_time: Option<Instant>,
}
impl PuzzleSimulation {
    /// Constructs a new simulation with a solved puzzle.
    pub fn new(prefs: &Preferences) -> Self {
        let puzzle = Puzzle::new(prefs.puzzle_params());
        log::debug!("new puzzle with scramble seed {}", puzzle.seed());
        Self {
            puzzle,
            prefs: prefs.clone(),

            history: vec![],
            scramble: None,

            last_frame_time: None,
        }
    }

    /// Returns the puzzle.
    pub fn puzzle(&self) -> &Puzzle {
        &self.puzzle
    }
    /// Returns the preferences in use.
    pub fn prefs(&self) -> &Preferences {
        &self.prefs
    }
    /// Returns every command executed so far.
    pub fn history(&self) -> &[Command] {
        &self.history
    }
    /// Returns the moves of the most recent scramble.
    pub fn scramble(&self) -> Option<&[Move]> {
        self.scramble.as_deref()
    }
    /// Returns whether the puzzle is solved, once all animations complete.
    pub fn is_solved(&self) -> bool {
        self.puzzle.is_solved()
    }
    /// Returns whether an animation is in progress.
    pub fn is_animating(&self) -> bool {
        self.puzzle.is_animating()
    }

    /// Executes a command on the puzzle.
    pub fn execute(&mut self, command: Command) {
        log::debug!("executing {command}");
        match command {
            Command::Scramble => self.scramble = Some(self.puzzle.scramble()),
            Command::Reset => {
                self.scramble = None;
                self.puzzle.reset();
            }
            Command::Move(_) | Command::Rotate(_) => self.puzzle.execute(command),
        }
        self.history.push(command);
    }

    /// Handles a key press, executing its bound command if there is one.
    /// Returns whether the key is bound.
    pub fn key_pressed(&mut self, key: &str) -> bool {
        match self.prefs.command_for_key(key) {
            Some(command) => {
                self.execute(command);
                true
            }
            None => {
                log::trace!("no command bound to key {key:?}");
                false
            }
        }
    }

    /// Changes the twist animation for twists that begin after this call.
    pub fn set_animation_prefs(&mut self, animation: AnimationPreferences) {
        self.prefs.animation = animation;
        self.puzzle.set_animation(animation.twist_animation());
    }

    /// Advances animations by `delta`. Returns whether another frame is
    /// needed.
    pub fn advance(&mut self, delta: Duration) -> bool {
        self.puzzle.per_frame(delta.as_secs_f32());
        self.puzzle.is_animating()
    }

    /// Advances animations by the time since the last frame. Returns whether
    /// another frame is needed.
    pub fn step(&mut self) -> bool {
        let now = Instant::now();
        let delta = match self.last_frame_time {
            Some(then) => now - then,
            None => Duration::from_secs_f32(1.0 / ASSUMED_FPS),
        };

        let needs_redraw = self.advance(delta);

        if needs_redraw {
            self.last_frame_time = Some(now);
        } else {
            self.last_frame_time = None;
        }

        needs_redraw
    }

    /// Completes all animations immediately.
    pub fn catch_up(&mut self) {
        self.puzzle.catch_up();
        self.last_frame_time = None;
    }

    /// Returns the data needed to draw every facelet in its current
    /// orientation.
    pub fn render_data(&self) -> Vec<FaceletRenderData> {
        self.puzzle
            .facelets()
            .iter()
            .map(|f| FaceletRenderData::new(f, &self.prefs.colors))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use cubepuzzle::cubemath::{FACELET_COUNT, matrix_approx_eq};
    use cubepuzzle::{FaceColor, InterpolateFn, Rgb, Rotation, initial_placement};
    use pretty_assertions::assert_eq;

    use super::*;

    fn seeded_prefs(seed: u64) -> Preferences {
        let mut prefs = Preferences::default();
        prefs.scramble.seed = Some(seed);
        prefs
    }

    #[test]
    fn test_key_pressed() {
        let mut sim = PuzzleSimulation::new(&seeded_prefs(0));

        assert!(!sim.key_pressed("Z"));
        assert!(!sim.is_animating());
        assert_eq!(Vec::<Command>::new(), sim.history());

        assert!(sim.key_pressed("J"));
        assert_eq!(&[Command::Move(Move::U)], sim.history());
        let rotating = sim.puzzle().facelets().iter().filter(|f| f.is_rotating());
        assert_eq!(21, rotating.count());

        assert!(sim.key_pressed("semicolon"));
        assert_eq!(Some(&Command::Rotate(Rotation::Y)), sim.history().last());
        assert!(sim.puzzle().facelets().iter().all(|f| f.is_rotating()));
    }

    #[test]
    fn test_advance() {
        let mut sim = PuzzleSimulation::new(&seeded_prefs(0));
        assert!(!sim.advance(Duration::from_millis(10)));

        sim.execute(Command::Move(Move::R));
        assert!(sim.advance(Duration::from_millis(100)));
        assert!(!sim.advance(Duration::from_millis(100)));
        assert!(!sim.is_solved());

        sim.execute(Command::Move(Move::RPrime));
        assert!(!sim.advance(Duration::from_secs(1)));
        assert!(sim.is_solved());
    }

    #[test]
    fn test_step() {
        let mut sim = PuzzleSimulation::new(&seeded_prefs(0));
        assert!(!sim.step());

        sim.set_animation_prefs(AnimationPreferences {
            twist_duration: 60.0,
            twist_interpolation: InterpolateFn::Lerp,
        });
        sim.execute(Command::Move(Move::F));
        assert!(sim.step());
        assert!(sim.step());
        sim.catch_up();
        assert!(!sim.step());
    }

    #[test]
    fn test_scramble_and_reset() {
        let mut a = PuzzleSimulation::new(&seeded_prefs(5));
        let mut b = PuzzleSimulation::new(&seeded_prefs(5));
        assert_eq!(None, a.scramble());

        assert!(a.key_pressed("Space"));
        b.execute(Command::Scramble);
        assert_eq!(20, a.scramble().map_or(0, |s| s.len()));
        assert_eq!(a.scramble(), b.scramble());

        a.execute(Command::Reset);
        assert_eq!(None, a.scramble());
        assert!(a.is_solved());
        assert!(!a.is_animating());
        assert_eq!(&[Command::Scramble, Command::Reset], a.history());
    }

    #[test]
    fn test_render_data() {
        let mut prefs = seeded_prefs(0);
        prefs.colors.green = Rgb::new(0, 128, 0);
        let mut sim = PuzzleSimulation::new(&prefs);

        let render_data = sim.render_data();
        assert_eq!(FACELET_COUNT, render_data.len());
        for (facelet, data) in std::iter::zip(sim.puzzle().facelets(), &render_data) {
            let expected = initial_placement(facelet.position(), 1.0);
            assert!(matrix_approx_eq(&expected, &data.transform));
            let expected_color = match facelet.color() {
                FaceColor::Green => [0.0, 128.0 / 255.0, 0.0],
                color => prefs.colors.get(color).to_f32_array(),
            };
            assert_eq!(expected_color, data.color);
        }

        // Mid-animation, only rotating facelets are away from their placements.
        sim.execute(Command::Move(Move::U));
        sim.advance(Duration::from_millis(50));
        for (facelet, data) in std::iter::zip(sim.puzzle().facelets(), sim.render_data()) {
            let at_rest = matrix_approx_eq(&facelet.placement(), &data.transform);
            assert_eq!(facelet.is_rotating(), !at_rest, "{}", facelet.position());
        }
    }
}
