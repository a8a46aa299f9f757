use std::fmt;
use std::ops::Neg;

use cgmath::{Deg, Matrix3, Matrix4, Vector3};

use crate::{Axis, Sign};

/// One of the six canonical unit vectors, used as the axis of a quarter
/// turn.
///
/// The sign selects the turn direction: a rotation about `+x` and a rotation
/// about `-x` are inverses of each other. Rotations are right-handed.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct RotationAxis {
    /// Principal axis.
    pub axis: Axis,
    /// Direction along the axis.
    pub sign: Sign,
}

impl fmt::Display for RotationAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.sign, self.axis)
    }
}

impl Neg for RotationAxis {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.rev()
    }
}

impl RotationAxis {
    /// `+x`
    pub const POS_X: Self = Self::new(Axis::X, Sign::Pos);
    /// `-x`
    pub const NEG_X: Self = Self::new(Axis::X, Sign::Neg);
    /// `+y`
    pub const POS_Y: Self = Self::new(Axis::Y, Sign::Pos);
    /// `-y`
    pub const NEG_Y: Self = Self::new(Axis::Y, Sign::Neg);
    /// `+z`
    pub const POS_Z: Self = Self::new(Axis::Z, Sign::Pos);
    /// `-z`
    pub const NEG_Z: Self = Self::new(Axis::Z, Sign::Neg);

    /// All six rotation axes.
    pub const ALL: [Self; 6] = [
        Self::POS_X,
        Self::NEG_X,
        Self::POS_Y,
        Self::NEG_Y,
        Self::POS_Z,
        Self::NEG_Z,
    ];

    /// Constructs a rotation axis.
    pub const fn new(axis: Axis, sign: Sign) -> Self {
        Self { axis, sign }
    }

    /// Returns the rotation axis in the opposite direction.
    #[must_use]
    pub fn rev(self) -> Self {
        Self {
            axis: self.axis,
            sign: -self.sign,
        }
    }

    /// Returns the unit vector for this axis.
    pub fn vector(self) -> Vector3<f32> {
        self.axis.unit_vector() * self.sign.float()
    }

    /// Applies a quarter turn about this axis to a coordinate triple.
    ///
    /// For `+x` this maps `(x, y, z)` to `(x, -z, y)`; for `-x` to
    /// `(x, z, -y)`. The `y` and `z` axes follow the same right-handed
    /// convention.
    pub fn quarter_turn<T: Copy + Neg<Output = T>>(self, [x, y, z]: [T; 3]) -> [T; 3] {
        match (self.axis, self.sign) {
            (Axis::X, Sign::Pos) => [x, -z, y],
            (Axis::X, Sign::Neg) => [x, z, -y],
            (Axis::Y, Sign::Pos) => [z, y, -x],
            (Axis::Y, Sign::Neg) => [-z, y, x],
            (Axis::Z, Sign::Pos) => [-y, x, z],
            (Axis::Z, Sign::Neg) => [y, -x, z],
        }
    }

    /// Returns the exact matrix of a quarter turn about this axis.
    ///
    /// Every entry is `-1`, `0`, or `1`, so baking many quarter turns into a
    /// transform does not accumulate rounding error.
    pub fn quarter_turn_matrix(self) -> Matrix4<f32> {
        let [c0, c1, c2] = Axis::ALL.map(|ax| {
            let v: [f32; 3] = ax.unit_vector().into();
            Vector3::from(self.quarter_turn(v))
        });
        Matrix3::from_cols(c0, c1, c2).into()
    }

    /// Returns the matrix of a partial rotation about this axis.
    pub fn partial_matrix(self, angle: Deg<f32>) -> Matrix4<f32> {
        Matrix4::from_axis_angle(self.vector(), angle)
    }
}

#[cfg(test)]
mod tests {
    use cgmath::SquareMatrix;

    use super::*;

    #[test]
    fn test_quarter_turn_matrix_matches_axis_angle() {
        for rot in RotationAxis::ALL {
            crate::assert_matrix_approx_eq!(
                rot.quarter_turn_matrix(),
                rot.partial_matrix(Deg(90.0)),
            );
        }
    }

    #[test]
    fn test_quarter_turn_matrix_inverse() {
        for rot in RotationAxis::ALL {
            assert_eq!(
                Matrix4::identity(),
                rot.quarter_turn_matrix() * rot.rev().quarter_turn_matrix(),
            );
        }
    }

    #[test]
    fn test_quarter_turn_order_4() {
        let v = [1, 2, 3];
        for rot in RotationAxis::ALL {
            let mut w = v;
            for _ in 0..4 {
                w = rot.quarter_turn(w);
            }
            assert_eq!(v, w, "{rot}");
        }
    }
}
