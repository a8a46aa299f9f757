//! User preferences.
//!
//! Preferences are layered: the defaults embedded from `default.yaml` are
//! loaded first, then an optional user file is merged over them. Lists
//! (such as `keybinds`) in the user file replace the default list entirely.

#![allow(missing_docs)] // field names are self-explanatory

#[macro_use]
extern crate lazy_static;

use std::path::Path;

use cubepuzzle::{ColorPalette, Command, PuzzleParams, TwistAnimation};
use serde::{Deserialize, Serialize};

mod animation;
mod keybinds;
mod persist;

pub use animation::*;
pub use keybinds::Keybind;

const PREFS_FILE_FORMAT: config::FileFormat = config::FileFormat::Yaml;
const DEFAULT_PREFS_STR: &str = include_str!("default.yaml");

lazy_static! {
    pub static ref DEFAULT_PREFS: Preferences =
        serde_norway::from_str(DEFAULT_PREFS_STR).expect("error loading default preferences");
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Preferences {
    #[serde(default)]
    pub animation: AnimationPreferences,
    #[serde(default)]
    pub scramble: ScramblePreferences,
    #[serde(default)]
    pub cube: CubePreferences,
    #[serde(default)]
    pub colors: ColorPalette,
    #[serde(default)]
    pub keybinds: Vec<Keybind>,
}
impl Default for Preferences {
    fn default() -> Self {
        DEFAULT_PREFS.clone()
    }
}
impl Preferences {
    /// Loads the default preferences merged with `user_file`, if any. If
    /// loading fails, the error is logged and the default preferences are
    /// returned.
    pub fn load(user_file: Option<&Path>) -> Self {
        lazy_static::initialize(&DEFAULT_PREFS);

        let mut config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_PREFS_STR, PREFS_FILE_FORMAT));

        if let Some(path) = user_file {
            log::debug!("loading user preferences from {}", path.display());
            config = config.add_source(persist::user_config_source(path));
        }

        config
            .build()
            .and_then(|c| c.try_deserialize::<Self>())
            .map(Self::sanitized)
            .unwrap_or_else(|e| {
                log::warn!("Error loading preferences: {e}");
                Self::default()
            })
    }

    /// Writes the preferences to `path` as YAML.
    pub fn save(&self, path: &Path) -> eyre::Result<()> {
        persist::save(path, self)
    }

    /// Replaces values that cannot be used with their defaults.
    fn sanitized(mut self) -> Self {
        let duration = self.animation.twist_duration;
        if !(duration.is_finite() && duration >= 0.0) {
            log::warn!("Invalid twist duration {duration}; using default");
            self.animation.twist_duration = DEFAULT_PREFS.animation.twist_duration;
        }
        let side_length = self.cube.side_length;
        if !(side_length.is_finite() && side_length > 0.0) {
            log::warn!("Invalid side length {side_length}; using default");
            self.cube.side_length = DEFAULT_PREFS.cube.side_length;
        }
        self
    }

    /// Returns the command bound to `key`, if any. If multiple bindings match,
    /// the first one wins.
    pub fn command_for_key(&self, key: &str) -> Option<Command> {
        self.keybinds
            .iter()
            .find(|bind| bind.matches(key))
            .map(|bind| bind.command)
    }

    pub fn twist_animation(&self) -> TwistAnimation {
        self.animation.twist_animation()
    }

    /// Returns the parameters for constructing a new puzzle.
    pub fn puzzle_params(&self) -> PuzzleParams {
        PuzzleParams {
            side_length: self.cube.side_length,
            animation: self.twist_animation(),
            scramble_length: self.scramble.length,
            seed: self.scramble.seed,
        }
    }
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use cubepuzzle::{FaceColor, InterpolateFn, Move, Rgb, Rotation};
    use pretty_assertions::assert_eq;

    use super::*;

    fn write_user_file(dir: &tempfile::TempDir, contents: &str) -> std::path::PathBuf {
        let path = dir.path().join("prefs.yaml");
        let mut file = std::fs::File::create(&path).unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        path
    }

    #[test]
    fn test_default_prefs() {
        let prefs = &*DEFAULT_PREFS;
        assert_eq!(0.15, prefs.animation.twist_duration);
        assert_eq!(InterpolateFn::EaseIn, prefs.animation.twist_interpolation);
        assert_eq!(20, prefs.scramble.length);
        assert_eq!(None, prefs.scramble.seed);
        assert_eq!(1.0, prefs.cube.side_length);
        assert_eq!(ColorPalette::default(), prefs.colors);
        assert_eq!(Rgb::new(255, 128, 0), prefs.colors.get(FaceColor::Orange));
        assert_eq!(21, prefs.keybinds.len());
    }

    #[test]
    fn test_default_keybinds() {
        let prefs = Preferences::default();
        let expected = [
            ("J", Command::Move(Move::U)),
            ("f", Command::Move(Move::UPrime)),
            ("S", Command::Move(Move::D)),
            ("L", Command::Move(Move::DPrime)),
            ("I", Command::Move(Move::R)),
            ("K", Command::Move(Move::RPrime)),
            ("E", Command::Move(Move::L)),
            ("D", Command::Move(Move::LPrime)),
            ("H", Command::Move(Move::F)),
            ("G", Command::Move(Move::FPrime)),
            ("W", Command::Move(Move::B)),
            ("O", Command::Move(Move::BPrime)),
            ("space", Command::Scramble),
            ("T", Command::Rotate(Rotation::X)),
            ("Y", Command::Rotate(Rotation::X)),
            ("V", Command::Rotate(Rotation::XPrime)),
            ("B", Command::Rotate(Rotation::XPrime)),
            ("Semicolon", Command::Rotate(Rotation::Y)),
            ("A", Command::Rotate(Rotation::YPrime)),
            ("P", Command::Rotate(Rotation::Z)),
            ("Q", Command::Rotate(Rotation::ZPrime)),
        ];
        for (key, command) in expected {
            assert_eq!(Some(command), prefs.command_for_key(key), "{key}");
        }
        assert_eq!(None, prefs.command_for_key("Z"));
        assert_eq!(None, prefs.command_for_key(""));
    }

    #[test]
    fn test_load_without_user_file() {
        assert_eq!(*DEFAULT_PREFS, Preferences::load(None));
    }

    #[test]
    fn test_load_partial_user_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_user_file(
            &dir,
            "animation:\n  twist_duration: 0.5\ncolors:\n  red: '#800000'\n",
        );
        let prefs = Preferences::load(Some(&path));

        assert_eq!(0.5, prefs.animation.twist_duration);
        assert_eq!(InterpolateFn::EaseIn, prefs.animation.twist_interpolation);
        assert_eq!(Rgb::new(128, 0, 0), prefs.colors.red);
        assert_eq!(DEFAULT_PREFS.colors.blue, prefs.colors.blue);
        assert_eq!(DEFAULT_PREFS.keybinds, prefs.keybinds);
        assert_eq!(DEFAULT_PREFS.scramble, prefs.scramble);
    }

    #[test]
    fn test_load_user_keybinds() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_user_file(
            &dir,
            "scramble:\n  seed: 7\nkeybinds:\n  - { key: Enter, command: reset }\n",
        );
        let prefs = Preferences::load(Some(&path));

        assert_eq!(Some(7), prefs.scramble.seed);
        assert_eq!(Some(7), prefs.puzzle_params().seed);
        assert_eq!(vec![Keybind::new("Enter", Command::Reset)], prefs.keybinds);
        assert_eq!(Some(Command::Reset), prefs.command_for_key("enter"));
        assert_eq!(None, prefs.command_for_key("J"));
    }

    #[test]
    fn test_load_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();

        let missing = dir.path().join("missing.yaml");
        assert_eq!(*DEFAULT_PREFS, Preferences::load(Some(&missing)));

        let path = write_user_file(&dir, "keybinds:\n  - { key: J, command: M2 }\n");
        assert_eq!(*DEFAULT_PREFS, Preferences::load(Some(&path)));
    }

    #[test]
    fn test_load_sanitizes_values() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_user_file(
            &dir,
            "animation:\n  twist_duration: -1.0\ncube:\n  side_length: 0.0\n",
        );
        let prefs = Preferences::load(Some(&path));
        assert_eq!(DEFAULT_PREFS.animation, prefs.animation);
        assert_eq!(DEFAULT_PREFS.cube, prefs.cube);
    }

    #[test]
    fn test_save_and_reload() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("prefs.yaml");

        let mut prefs = Preferences::default();
        prefs.animation.twist_interpolation = InterpolateFn::Cosine;
        prefs.scramble.seed = Some(12345);
        prefs.keybinds.push(Keybind::new("Backspace", Command::Reset));
        prefs.save(&path).unwrap();

        assert_eq!(prefs, Preferences::load(Some(&path)));
    }
}
