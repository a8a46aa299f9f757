//! Static geometry shared by every facelet.
//!
//! Each facelet is the same unit square, positioned by its transform.

use crate::Rgb;

/// Corners of the unit square, counterclockwise, in the XY plane.
pub const FACELET_VERTICES: [[f32; 3]; 4] = [
    [-0.5, -0.5, 0.0],
    [0.5, -0.5, 0.0],
    [0.5, 0.5, 0.0],
    [-0.5, 0.5, 0.0],
];

/// Indices of vertices used to render the surface of a facelet as
/// triangles.
pub const FACELET_FILL_INDICES: [u32; 6] = [0, 1, 2, 2, 3, 0];

/// Indices of vertices used to render the outline of a facelet as lines.
pub const FACELET_OUTLINE_INDICES: [u32; 8] = [0, 1, 1, 2, 2, 3, 3, 0];

/// Width of the facelet outline, in pixels.
pub const OUTLINE_WIDTH: f32 = 2.0;

/// Color of the facelet outline.
pub const OUTLINE_COLOR: Rgb = Rgb::BLACK;
