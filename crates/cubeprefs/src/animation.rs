use cubepuzzle::animation::DEFAULT_TWIST_DURATION;
use cubepuzzle::{DEFAULT_SCRAMBLE_LENGTH, InterpolateFn, TwistAnimation};
use serde::{Deserialize, Serialize};

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct AnimationPreferences {
    /// Duration of one quarter turn, in seconds.
    pub twist_duration: f32,
    pub twist_interpolation: InterpolateFn,
}
impl Default for AnimationPreferences {
    fn default() -> Self {
        Self {
            twist_duration: DEFAULT_TWIST_DURATION,
            twist_interpolation: InterpolateFn::default(),
        }
    }
}
impl AnimationPreferences {
    pub fn twist_animation(&self) -> TwistAnimation {
        TwistAnimation {
            duration: self.twist_duration,
            interpolation: self.twist_interpolation,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ScramblePreferences {
    /// Number of random moves in a scramble.
    pub length: usize,
    /// Fixed seed for the scramble RNG. If `None`, a random seed is chosen
    /// each time a puzzle is created.
    pub seed: Option<u64>,
}
impl Default for ScramblePreferences {
    fn default() -> Self {
        Self {
            length: DEFAULT_SCRAMBLE_LENGTH,
            seed: None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq)]
#[serde(default)]
pub struct CubePreferences {
    /// Side length of the whole cube in world units.
    pub side_length: f32,
}
impl Default for CubePreferences {
    fn default() -> Self {
        Self { side_length: 1.0 }
    }
}
