use cubemath::{Axis, PositionId, RotationAxis, Sign};
use serde::{Deserialize, Serialize};

use crate::Rgb;

/// Color of a facelet, named after the face it starts on.
///
/// Facelets own their color tag by value. The actual RGB value comes from a
/// [`ColorPalette`] when rendering.
#[derive(
    Serialize,
    Deserialize,
    Debug,
    Copy,
    Clone,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Display,
    EnumString,
    VariantArray,
)]
#[serde(rename_all = "snake_case")]
#[strum(serialize_all = "snake_case")]
pub enum FaceColor {
    /// `-x` face
    Orange,
    /// `+x` face
    Red,
    /// `-y` face
    White,
    /// `+y` face
    Yellow,
    /// `-z` face
    Green,
    /// `+z` face
    Blue,
}

impl FaceColor {
    /// Returns the color of the face pointing along `face`.
    pub fn of_face(face: RotationAxis) -> Self {
        match (face.axis, face.sign) {
            (Axis::X, Sign::Neg) => FaceColor::Orange,
            (Axis::X, Sign::Pos) => FaceColor::Red,
            (Axis::Y, Sign::Neg) => FaceColor::White,
            (Axis::Y, Sign::Pos) => FaceColor::Yellow,
            (Axis::Z, Sign::Neg) => FaceColor::Green,
            (Axis::Z, Sign::Pos) => FaceColor::Blue,
        }
    }

    /// Returns the color of a facelet that starts at `pos`, or `None` if
    /// `pos` does not lie on any face.
    pub fn of_position(pos: PositionId) -> Option<Self> {
        pos.face().map(Self::of_face)
    }
}

/// RGB value for each [`FaceColor`].
#[allow(missing_docs)]
#[derive(Serialize, Deserialize, Debug, Copy, Clone, PartialEq, Eq)]
#[serde(default)]
pub struct ColorPalette {
    pub orange: Rgb,
    pub red: Rgb,
    pub white: Rgb,
    pub yellow: Rgb,
    pub green: Rgb,
    pub blue: Rgb,
}
impl Default for ColorPalette {
    fn default() -> Self {
        Self {
            orange: Rgb::new(255, 128, 0),
            red: Rgb::new(255, 0, 0),
            white: Rgb::new(255, 255, 255),
            yellow: Rgb::new(255, 255, 0),
            green: Rgb::new(0, 255, 0),
            blue: Rgb::new(0, 0, 255),
        }
    }
}
impl ColorPalette {
    /// Returns the RGB value for a color.
    pub fn get(&self, color: FaceColor) -> Rgb {
        match color {
            FaceColor::Orange => self.orange,
            FaceColor::Red => self.red,
            FaceColor::White => self.white,
            FaceColor::Yellow => self.yellow,
            FaceColor::Green => self.green,
            FaceColor::Blue => self.blue,
        }
    }
}

#[cfg(test)]
mod tests {
    use strum::VariantArray;

    use super::*;

    #[test]
    fn test_face_colors() {
        assert_eq!(
            Some(FaceColor::Orange),
            FaceColor::of_position(PositionId::new(-2, 1, 0)),
        );
        assert_eq!(
            Some(FaceColor::Yellow),
            FaceColor::of_position(PositionId::new(-1, 2, 1)),
        );
        assert_eq!(
            Some(FaceColor::Blue),
            FaceColor::of_position(PositionId::new(0, 0, 2)),
        );
        assert_eq!(None, FaceColor::of_position(PositionId::new(1, 1, 1)));
    }

    #[test]
    fn test_each_color_has_nine_facelets() {
        for &color in FaceColor::VARIANTS {
            let count = PositionId::all()
                .filter(|&p| FaceColor::of_position(p) == Some(color))
                .count();
            assert_eq!(9, count, "{color}");
        }
    }
}
