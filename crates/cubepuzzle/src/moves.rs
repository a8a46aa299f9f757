//! Move table.

use cubemath::{Axis, POS_ID, PositionId, RotationAxis, Sign};
use serde::{Deserialize, Serialize};

/// Layer selected by a move: every facelet whose coordinate along `axis`,
/// multiplied by `sign`, is at least [`POS_ID`].
///
/// This is purely positional. The `U` layer (`y >= 1`) includes the nine
/// facelets facing up as well as the twelve side facelets in the top row.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct LayerPredicate {
    /// Axis of the coordinate to compare.
    pub axis: Axis,
    /// Which end of the axis the layer is on.
    pub sign: Sign,
}
impl LayerPredicate {
    /// Constructs a layer predicate.
    pub const fn new(axis: Axis, sign: Sign) -> Self {
        Self { axis, sign }
    }
    /// Returns whether `pos` is in the layer.
    pub fn contains(self, pos: PositionId) -> bool {
        pos[self.axis] * self.sign.int() >= POS_ID
    }
}

/// Layer and rotation axis of a move.
#[derive(Serialize, Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct MoveDef {
    /// Facelets affected by the move.
    pub layer: LayerPredicate,
    /// Axis of the quarter turn applied to those facelets.
    pub axis: RotationAxis,
}

macro_rules! move_def {
    ($axis:ident $sign:ident => $rot:ident) => {
        MoveDef {
            layer: LayerPredicate::new(Axis::$axis, Sign::$sign),
            axis: RotationAxis::$rot,
        }
    };
}

/// Definition of each move, indexed by [`Move`].
///
/// The right face is on `-x`, the front face on `-z`. `R` and `L` turn in the
/// same direction about `+x`.
const MOVE_TABLE: [MoveDef; 12] = [
    move_def!(Y Pos => NEG_Y), // U
    move_def!(Y Pos => POS_Y), // U'
    move_def!(Y Neg => POS_Y), // D
    move_def!(Y Neg => NEG_Y), // D'
    move_def!(X Neg => POS_X), // R
    move_def!(X Neg => NEG_X), // R'
    move_def!(X Pos => POS_X), // L
    move_def!(X Pos => NEG_X), // L'
    move_def!(Z Neg => POS_Z), // F
    move_def!(Z Neg => NEG_Z), // F'
    move_def!(Z Pos => NEG_Z), // B
    move_def!(Z Pos => POS_Z), // B'
];

/// Quarter turn of one outer layer.
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
#[allow(missing_docs)]
pub enum Move {
    #[serde(rename = "U")]
    #[strum(serialize = "U")]
    U,
    #[serde(rename = "U'")]
    #[strum(serialize = "U'")]
    UPrime,
    #[serde(rename = "D")]
    #[strum(serialize = "D")]
    D,
    #[serde(rename = "D'")]
    #[strum(serialize = "D'")]
    DPrime,
    #[serde(rename = "R")]
    #[strum(serialize = "R")]
    R,
    #[serde(rename = "R'")]
    #[strum(serialize = "R'")]
    RPrime,
    #[serde(rename = "L")]
    #[strum(serialize = "L")]
    L,
    #[serde(rename = "L'")]
    #[strum(serialize = "L'")]
    LPrime,
    #[serde(rename = "F")]
    #[strum(serialize = "F")]
    F,
    #[serde(rename = "F'")]
    #[strum(serialize = "F'")]
    FPrime,
    #[serde(rename = "B")]
    #[strum(serialize = "B")]
    B,
    #[serde(rename = "B'")]
    #[strum(serialize = "B'")]
    BPrime,
}
impl Move {
    /// Returns the layer and axis of the move.
    pub fn def(self) -> MoveDef {
        MOVE_TABLE[self as usize]
    }
    /// Returns the inverse move.
    #[must_use]
    pub fn rev(self) -> Self {
        use strum::VariantArray;

        // Each move is adjacent to its inverse in the table.
        Self::VARIANTS[self as usize ^ 1]
    }
}

/// Quarter turn of the whole puzzle.
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
#[allow(missing_docs)]
pub enum Rotation {
    #[serde(rename = "x")]
    #[strum(serialize = "x")]
    X,
    #[serde(rename = "x'")]
    #[strum(serialize = "x'")]
    XPrime,
    #[serde(rename = "y")]
    #[strum(serialize = "y")]
    Y,
    #[serde(rename = "y'")]
    #[strum(serialize = "y'")]
    YPrime,
    #[serde(rename = "z")]
    #[strum(serialize = "z")]
    Z,
    #[serde(rename = "z'")]
    #[strum(serialize = "z'")]
    ZPrime,
}
impl Rotation {
    /// Returns the axis of the rotation. `x` follows `R`, `y` follows `U`,
    /// and `z` follows `F`.
    pub fn axis(self) -> RotationAxis {
        match self {
            Rotation::X => RotationAxis::POS_X,
            Rotation::XPrime => RotationAxis::NEG_X,
            Rotation::Y => RotationAxis::NEG_Y,
            Rotation::YPrime => RotationAxis::POS_Y,
            Rotation::Z => RotationAxis::POS_Z,
            Rotation::ZPrime => RotationAxis::NEG_Z,
        }
    }
}
