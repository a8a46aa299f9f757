//! Axis, sign, and position primitives for a 3x3x3 facelet cube.
//!
//! A facelet is addressed by a [`PositionId`]: an integer vector with one
//! component of magnitude [`FACE_ID`] (the outward face) and two components
//! in `{-POS_ID, 0, POS_ID}` (the cell on that face).

pub use cgmath;

mod axis;
mod position;
mod rotation;
mod sign;

pub use axis::Axis;
pub use position::PositionId;
pub use rotation::RotationAxis;
pub use sign::Sign;

/// Magnitude of a row/column component of a [`PositionId`].
pub const POS_ID: i32 = 1;
/// Magnitude of the face component of a [`PositionId`].
pub const FACE_ID: i32 = 2;

/// Number of facelets on a 3x3x3 cube.
pub const FACELET_COUNT: usize = 54;

/// Small floating-point value used for comparisons.
pub const EPSILON: f32 = 0.0001;

/// Returns whether every entry of two matrices differs by at most
/// [`EPSILON`].
pub fn matrix_approx_eq(a: &cgmath::Matrix4<f32>, b: &cgmath::Matrix4<f32>) -> bool {
    let a: &[[f32; 4]; 4] = a.as_ref();
    let b: &[[f32; 4]; 4] = b.as_ref();
    std::iter::zip(a.iter().flatten(), b.iter().flatten()).all(|(x, y)| (x - y).abs() <= EPSILON)
}

/// Asserts that two matrices are approximately equal.
#[macro_export]
macro_rules! assert_matrix_approx_eq {
    ($a:expr, $b:expr $(,)?) => {{
        let (a, b) = (&$a, &$b);
        assert!(
            $crate::matrix_approx_eq(a, b),
            "matrices differ\n  left: {a:?}\n right: {b:?}",
        );
    }};
}
