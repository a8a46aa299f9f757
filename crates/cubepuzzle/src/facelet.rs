//! A single facelet and its rotation animation.

use cgmath::{Deg, Matrix4, Vector3};
use cubemath::{Axis, PositionId, RotationAxis};
use serde::Serialize;

use crate::animation::{InterpolateFn, TWIST_ANGLE, TwistAnimation};
use crate::color::FaceColor;

/// Fraction of a cell occupied by its facelet; the rest is the gap between
/// facelets.
pub const PIECE_SCALE: f32 = 0.85;

/// One sticker of the cube.
///
/// The position changes whenever a rotation that the facelet takes part in
/// completes. The color never changes.
#[derive(Debug, Clone, PartialEq)]
pub struct Facelet {
    /// Symbolic position, as of the last completed rotation.
    position: PositionId,
    /// Color, assigned from the initial position.
    color: FaceColor,
    /// Placement of the unit square in world space, including every
    /// completed rotation.
    placement: Matrix4<f32>,
    /// Timing used for rotations started from now on.
    animation: TwistAnimation,
    /// Rotation in progress, if any.
    rotation: Option<ActiveRotation>,
}

/// Rotation animation in progress on a facelet.
#[derive(Serialize, Debug, Copy, Clone, PartialEq)]
pub struct ActiveRotation {
    /// Axis of the quarter turn.
    pub axis: RotationAxis,
    /// Time elapsed since the rotation began.
    pub elapsed: f32,
    /// Total duration of the rotation.
    pub duration: f32,
    /// Easing curve.
    #[serde(skip)]
    pub interpolation: InterpolateFn,
}
impl ActiveRotation {
    /// Returns the fraction of the duration that has elapsed, in the range
    /// 0.0 to 1.0.
    pub fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            return 1.0;
        }
        (self.elapsed / self.duration).clamp(0.0, 1.0)
    }
    /// Returns the eased angle to display.
    pub fn angle(&self) -> Deg<f32> {
        Deg(TWIST_ANGLE * self.interpolation.interpolate(self.progress()))
    }
    /// Returns the partial rotation to display.
    pub fn matrix(&self) -> Matrix4<f32> {
        self.axis.partial_matrix(self.angle())
    }
}

impl Facelet {
    /// Constructs a facelet at `position` on a cube with the given side
    /// length.
    pub fn new(position: PositionId, side_length: f32, animation: TwistAnimation) -> Self {
        if !position.is_valid() {
            log::error!("Invalid initial facelet position {position}");
        }
        Self {
            position,
            color: FaceColor::of_position(position).unwrap_or(FaceColor::Blue),
            placement: initial_placement(position, side_length),
            animation,
            rotation: None,
        }
    }

    /// Returns the current symbolic position.
    ///
    /// While a rotation is in progress this is the position from before the
    /// rotation; see [`Facelet::settled_position()`].
    pub fn position(&self) -> PositionId {
        self.position
    }
    /// Returns the position that the facelet will have once its rotation in
    /// progress (if any) completes.
    pub fn settled_position(&self) -> PositionId {
        match self.rotation {
            Some(rot) => self.position.rotated(rot.axis),
            None => self.position,
        }
    }
    /// Returns the color of the facelet.
    pub fn color(&self) -> FaceColor {
        self.color
    }
    /// Returns the placement including all completed rotations.
    pub fn placement(&self) -> Matrix4<f32> {
        self.placement
    }
    /// Returns the rotation in progress, if any.
    pub fn active_rotation(&self) -> Option<&ActiveRotation> {
        self.rotation.as_ref()
    }
    /// Returns whether a rotation is in progress.
    pub fn is_rotating(&self) -> bool {
        self.rotation.is_some()
    }

    /// Sets the timing for rotations that begin after this call.
    pub fn set_animation(&mut self, animation: TwistAnimation) {
        self.animation = animation;
    }

    /// Begins a quarter turn about `axis`.
    ///
    /// If a rotation is already in progress, it is completed immediately
    /// first.
    pub fn begin_rotation(&mut self, axis: RotationAxis) {
        self.finish_rotation();
        self.rotation = Some(ActiveRotation {
            axis,
            elapsed: 0.0,
            duration: self.animation.duration,
            interpolation: self.animation.interpolation,
        });
    }

    /// Completes the rotation in progress, if any, without waiting for its
    /// animation.
    pub fn finish_rotation(&mut self) {
        if let Some(rot) = self.rotation.take() {
            self.placement = rot.axis.quarter_turn_matrix() * self.placement;
            self.position = self.position.rotated(rot.axis);
        }
    }

    /// Advances the rotation in progress by `dt`.
    pub fn per_frame(&mut self, dt: f32) {
        if let Some(rot) = &mut self.rotation {
            rot.elapsed += dt.max(0.0);
            if rot.elapsed >= rot.duration {
                self.finish_rotation();
            }
        }
    }

    /// Returns the transform to draw the facelet with, including the partial
    /// rotation in progress.
    pub fn current_orientation(&self) -> Matrix4<f32> {
        match &self.rotation {
            Some(rot) => rot.matrix() * self.placement,
            None => self.placement,
        }
    }
}

/// Returns the transform that places a unit square at `position` on a cube
/// with the given side length.
pub fn initial_placement(position: PositionId, side_length: f32) -> Matrix4<f32> {
    let face_unit = side_length / 3.0;

    // Turn the square (which lies in the XY plane) to face outward.
    let (rotation_axis, angle) = match position.face_axis() {
        Some(Axis::X) => (Axis::Y, 90.0),
        Some(Axis::Y) => (Axis::X, 90.0),
        Some(Axis::Z) => (Axis::Z, 0.0),
        None => (Axis::Z, 90.0),
    };

    // Push the square out from the center of its piece.
    let mut world_pos: Vector3<f32> = position.signum() * face_unit;
    if let Some(face) = position.face() {
        world_pos += face.vector() * (face_unit / 2.0);
    }

    Matrix4::from_translation(world_pos)
        * Matrix4::from_axis_angle(rotation_axis.unit_vector(), Deg(angle))
        * Matrix4::from_scale(face_unit * PIECE_SCALE)
}

#[cfg(test)]
mod tests {
    use cgmath::{Transform, point3};
    use cubemath::assert_matrix_approx_eq;

    use super::*;

    fn facelet(x: i32, y: i32, z: i32) -> Facelet {
        Facelet::new(PositionId::new(x, y, z), 1.0, TwistAnimation::default())
    }

    fn translation(m: Matrix4<f32>) -> cgmath::Point3<f32> {
        m.transform_point(point3(0.0, 0.0, 0.0))
    }

    #[test]
    fn test_initial_placement() {
        let f = facelet(0, 0, 2);
        assert_eq!(FaceColor::Blue, f.color());
        let expected = Matrix4::from_translation(Vector3::new(0.0, 0.0, 0.5))
            * Matrix4::from_scale(0.85 / 3.0);
        assert_matrix_approx_eq!(expected, f.placement());

        let f = facelet(-2, 1, 0);
        let p = translation(f.placement());
        assert!((p.x + 0.5).abs() < 1e-6);
        assert!((p.y - 1.0 / 3.0).abs() < 1e-6);
        assert!(p.z.abs() < 1e-6);
    }

    #[test]
    fn test_invalid_initial_position() {
        let mut f = facelet(1, 1, 1);
        assert_eq!(FaceColor::Blue, f.color());
        let expected = Matrix4::from_translation(Vector3::new(1.0, 1.0, 1.0) / 3.0)
            * Matrix4::from_axis_angle(Vector3::unit_z(), Deg(90.0))
            * Matrix4::from_scale(0.85 / 3.0);
        assert_matrix_approx_eq!(expected, f.placement());

        f.begin_rotation(RotationAxis::NEG_Y);
        assert!(f.is_rotating());
        f.per_frame(1.0);
        assert!(!f.is_rotating());
        assert_eq!(PositionId::new(-1, 1, 1), f.position());
        assert_eq!(FaceColor::Blue, f.color());
    }

    #[test]
    fn test_idle_until_rotation() {
        let mut f = facelet(2, 1, -1);
        let before = f.current_orientation();
        f.per_frame(1.0);
        assert!(!f.is_rotating());
        assert_eq!(before, f.current_orientation());
        assert_eq!(PositionId::new(2, 1, -1), f.position());
    }

    #[test]
    fn test_rotation_commits_on_completion() {
        let mut f = facelet(2, 1, -1);
        f.begin_rotation(RotationAxis::NEG_Y);
        assert!(f.is_rotating());
        assert_eq!(PositionId::new(2, 1, -1), f.position());
        assert_eq!(PositionId::new(1, 1, 2), f.settled_position());

        f.per_frame(0.1);
        assert!(f.is_rotating());
        assert_eq!(PositionId::new(2, 1, -1), f.position());

        f.per_frame(0.06);
        assert!(!f.is_rotating());
        assert_eq!(PositionId::new(1, 1, 2), f.position());
        assert_eq!(f.placement(), f.current_orientation());

        // Further frames do not bake the rotation again.
        let baked = f.placement();
        f.per_frame(0.3);
        assert_eq!(baked, f.placement());
        assert_eq!(PositionId::new(1, 1, 2), f.position());
    }

    #[test]
    fn test_partial_orientation() {
        let mut f = facelet(0, 2, 0);
        let start = f.placement();
        f.begin_rotation(RotationAxis::POS_X);
        f.per_frame(0.075);

        let rot = f.active_rotation().unwrap();
        assert!((rot.progress() - 0.5).abs() < 1e-6);
        assert!((rot.angle().0 - 45.0).abs() < 1e-4);
        assert_matrix_approx_eq!(
            RotationAxis::POS_X.partial_matrix(Deg(45.0)) * start,
            f.current_orientation(),
        );
        // Querying has no side effects.
        assert_eq!(f.current_orientation(), f.current_orientation());
        assert!(f.is_rotating());
    }

    #[test]
    fn test_large_time_step() {
        let mut f = facelet(1, -1, 2);
        f.begin_rotation(RotationAxis::POS_Z);
        f.per_frame(100.0);
        assert!(!f.is_rotating());
        assert_eq!(PositionId::new(1, 1, 2), f.position());
    }

    #[test]
    fn test_interruption_commits_first() {
        let mut f = facelet(2, 1, -1);
        let start = f.placement();
        f.begin_rotation(RotationAxis::NEG_Y);
        f.per_frame(0.05);
        f.begin_rotation(RotationAxis::POS_X);

        // The first rotation is fully committed before the second begins.
        let after_first = PositionId::new(2, 1, -1).rotated(RotationAxis::NEG_Y);
        assert_eq!(after_first, f.position());
        assert_eq!(RotationAxis::NEG_Y.quarter_turn_matrix() * start, f.placement());
        let rot = f.active_rotation().unwrap();
        assert_eq!(RotationAxis::POS_X, rot.axis);
        assert_eq!(0.0, rot.elapsed);

        f.per_frame(0.2);
        assert_eq!(after_first.rotated(RotationAxis::POS_X), f.position());
    }

    #[test]
    fn test_baked_placement_follows_position() {
        let mut f = facelet(2, 1, -1);
        for axis in [
            RotationAxis::NEG_Y,
            RotationAxis::POS_X,
            RotationAxis::POS_Z,
            RotationAxis::NEG_X,
        ] {
            f.begin_rotation(axis);
            f.per_frame(1.0);
            let expected = translation(initial_placement(f.position(), 1.0));
            let actual = translation(f.placement());
            assert!((expected.x - actual.x).abs() < 1e-5);
            assert!((expected.y - actual.y).abs() < 1e-5);
            assert!((expected.z - actual.z).abs() < 1e-5);
        }
    }

    #[test]
    fn test_custom_duration() {
        let animation = TwistAnimation {
            duration: 1.0,
            interpolation: InterpolateFn::Lerp,
        };
        let mut f = Facelet::new(PositionId::new(0, 0, -2), 1.0, animation);
        f.begin_rotation(RotationAxis::POS_Z);
        f.per_frame(0.25);
        assert!((f.active_rotation().unwrap().angle().0 - 22.5).abs() < 1e-4);
        f.per_frame(0.75);
        assert!(!f.is_rotating());
    }

    #[test]
    fn test_zero_duration_finishes_on_next_frame() {
        let animation = TwistAnimation {
            duration: 0.0,
            ..Default::default()
        };
        let mut f = Facelet::new(PositionId::new(0, 0, -2), 1.0, animation);
        f.begin_rotation(RotationAxis::POS_Z);
        f.per_frame(0.0);
        assert!(!f.is_rotating());
    }
}
