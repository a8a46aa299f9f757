use cgmath::Matrix4;
use cubepuzzle::{ColorPalette, Facelet};

/// Data needed to draw one facelet.
///
/// The transform places the unit square from [`cubepuzzle::geometry`] in
/// world space.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct FaceletRenderData {
    /// Current orientation, including any rotation in progress.
    pub transform: Matrix4<f32>,
    /// Fill color as sRGB components in the range 0.0 to 1.0.
    pub color: [f32; 3],
}
impl FaceletRenderData {
    pub(crate) fn new(facelet: &Facelet, palette: &ColorPalette) -> Self {
        Self {
            transform: facelet.current_orientation(),
            color: palette.get(facelet.color()).to_f32_array(),
        }
    }
}
