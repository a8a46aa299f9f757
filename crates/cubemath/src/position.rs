use std::fmt;
use std::ops::Index;

use cgmath::Vector3;

use crate::{Axis, FACE_ID, POS_ID, RotationAxis, Sign};

/// Symbolic position of a facelet.
///
/// Exactly one component has magnitude [`FACE_ID`] and names the face that
/// the facelet points out of. The other two components are in
/// `{-POS_ID, 0, POS_ID}` and name the row and column on that face.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct PositionId([i32; 3]);

impl fmt::Display for PositionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [x, y, z] = self.0;
        write!(f, "({x}, {y}, {z})")
    }
}

impl Index<Axis> for PositionId {
    type Output = i32;

    fn index(&self, axis: Axis) -> &i32 {
        &self.0[axis.int()]
    }
}

impl From<[i32; 3]> for PositionId {
    fn from(value: [i32; 3]) -> Self {
        Self(value)
    }
}

impl PositionId {
    /// Constructs a position from its components. The result is not checked;
    /// see [`PositionId::is_valid()`].
    pub const fn new(x: i32, y: i32, z: i32) -> Self {
        Self([x, y, z])
    }

    /// Returns the X component.
    pub fn x(self) -> i32 {
        self.0[0]
    }
    /// Returns the Y component.
    pub fn y(self) -> i32 {
        self.0[1]
    }
    /// Returns the Z component.
    pub fn z(self) -> i32 {
        self.0[2]
    }
    /// Returns the components as an array.
    pub fn to_array(self) -> [i32; 3] {
        self.0
    }

    /// Returns the axis whose component has magnitude [`FACE_ID`], or `None`
    /// if there is no such axis.
    pub fn face_axis(self) -> Option<Axis> {
        Axis::iter().find(|&axis| self[axis].abs() == FACE_ID)
    }
    /// Returns the face axis and the direction the facelet points along it.
    pub fn face(self) -> Option<RotationAxis> {
        let axis = self.face_axis()?;
        Some(RotationAxis::new(axis, Sign::of(self[axis])?))
    }

    /// Returns whether this is one of the 54 valid facelet positions.
    pub fn is_valid(self) -> bool {
        let face_count = self.0.iter().filter(|c| c.abs() == FACE_ID).count();
        let cell_count = self.0.iter().filter(|c| c.abs() <= POS_ID).count();
        face_count == 1 && cell_count == 2
    }

    /// Returns the position after a quarter turn about `rot`.
    ///
    /// About `x`: `(x, -z, y)` for `+x` and `(x, z, -y)` for `-x`. About `y`:
    /// `(z, y, -x)` / `(-z, y, x)`. About `z`: `(-y, x, z)` / `(y, -x, z)`.
    #[must_use]
    pub fn rotated(self, rot: RotationAxis) -> Self {
        Self(rot.quarter_turn(self.0))
    }

    /// Returns the component-wise sign as a float vector (`-1`, `0`, or `1`
    /// per axis).
    pub fn signum(self) -> Vector3<f32> {
        Vector3::from(self.0.map(|c| c.signum() as f32))
    }

    /// Returns all 54 valid positions, in facelet generation order.
    ///
    /// For each face sign (negative first) and each row/column pair, this
    /// yields the X-facing, Y-facing, and Z-facing facelet in that order.
    pub fn all() -> impl Iterator<Item = Self> {
        let cells = [-POS_ID, 0, POS_ID];
        Sign::ALL.into_iter().flat_map(move |sign| {
            let f = FACE_ID * sign.int();
            cells.into_iter().flat_map(move |a| {
                cells
                    .into_iter()
                    .flat_map(move |b| [Self([f, a, b]), Self([a, f, b]), Self([a, b, f])])
            })
        })
    }
}
