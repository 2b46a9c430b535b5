//! Camera orientation: yaw/pitch accumulation and the derived basis vectors.

use glam::{Mat4, Vec3};

/// Mouse sensitivity applied to raw deltas, in degrees per count.
pub const DEFAULT_SENSITIVITY: f32 = 0.075;

/// Pitch clamp, keeping the view off the poles.
pub const PITCH_LIMIT_DEGREES: f32 = 89.0;

/// Initial yaw so that yaw 0 along +x maps to an initial view down -z.
const INITIAL_YAW_DEGREES: f32 = -90.0;

/// Position plus yaw/pitch orientation with the derived front vector.
///
/// Angles are kept in degrees and the front vector is recomputed from them
/// on every mouse delta, in any movement mode.
#[derive(Clone, Debug)]
pub struct CameraPose {
    /// World-space eye position.
    pub position: Vec3,
    /// Heading in degrees around the world up axis.
    pub yaw: f32,
    /// Elevation in degrees, clamped to [`PITCH_LIMIT_DEGREES`].
    pub pitch: f32,
    /// Degrees of rotation per mouse count.
    pub sensitivity: f32,
    /// Flip the vertical look axis.
    pub invert_y: bool,
    front: Vec3,
}

impl CameraPose {
    /// A pose at `position` looking down -z.
    #[must_use]
    pub fn new(position: Vec3) -> Self {
        let mut pose = Self {
            position,
            yaw: INITIAL_YAW_DEGREES,
            pitch: 0.0,
            sensitivity: DEFAULT_SENSITIVITY,
            invert_y: false,
            front: Vec3::NEG_Z,
        };
        pose.recompute_front();
        pose
    }

    /// Apply a raw mouse delta. Positive `dy` (cursor moving down the
    /// screen) pitches the view down.
    pub fn apply_mouse_delta(&mut self, dx: f32, dy: f32) {
        let dy = if self.invert_y { -dy } else { dy };
        self.yaw += dx * self.sensitivity;
        self.pitch -= dy * self.sensitivity;
        self.pitch = self
            .pitch
            .clamp(-PITCH_LIMIT_DEGREES, PITCH_LIMIT_DEGREES);
        self.recompute_front();
    }

    fn recompute_front(&mut self) {
        let yaw = self.yaw.to_radians();
        let pitch = self.pitch.to_radians();
        self.front = Vec3::new(
            yaw.cos() * pitch.cos(),
            pitch.sin(),
            yaw.sin() * pitch.cos(),
        )
        .normalize();
    }

    /// Unit view direction.
    #[must_use]
    pub fn front(&self) -> Vec3 {
        self.front
    }

    /// Unit strafe direction on the horizontal plane.
    #[must_use]
    pub fn right(&self) -> Vec3 {
        self.front.cross(Vec3::Y).normalize()
    }

    /// Front projected onto the horizontal plane, used for walking.
    #[must_use]
    pub fn horizontal_front(&self) -> Vec3 {
        Vec3::new(self.front.x, 0.0, self.front.z).normalize_or_zero()
    }

    /// Right-handed view matrix for the current pose.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::look_at_rh(self.position, self.position + self.front, Vec3::Y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_pose_looks_down_negative_z() {
        let pose = CameraPose::new(Vec3::ZERO);
        let front = pose.front();
        assert!(front.x.abs() < 1e-6);
        assert!(front.y.abs() < 1e-6);
        assert!((front.z + 1.0).abs() < 1e-6, "front should be -z, got {front}");
    }

    #[test]
    fn test_mouse_x_turns_the_view() {
        let mut pose = CameraPose::new(Vec3::ZERO);
        // 90 degrees worth of counts to the right.
        pose.apply_mouse_delta(90.0 / DEFAULT_SENSITIVITY, 0.0);
        let front = pose.front();
        assert!((front.x - 1.0).abs() < 1e-4, "should face +x, got {front}");
    }

    #[test]
    fn test_mouse_y_down_pitches_down() {
        let mut pose = CameraPose::new(Vec3::ZERO);
        pose.apply_mouse_delta(0.0, 10.0);
        assert!(pose.pitch < 0.0);
        assert!(pose.front().y < 0.0);
    }

    #[test]
    fn test_pitch_clamps_under_repeated_large_deltas() {
        let mut pose = CameraPose::new(Vec3::ZERO);
        for _ in 0..100 {
            pose.apply_mouse_delta(0.0, -10_000.0);
        }
        assert_eq!(pose.pitch, PITCH_LIMIT_DEGREES);
        // The front vector stays finite and unit length at the clamp.
        assert!((pose.front().length() - 1.0).abs() < 1e-5);

        for _ in 0..100 {
            pose.apply_mouse_delta(0.0, 10_000.0);
        }
        assert_eq!(pose.pitch, -PITCH_LIMIT_DEGREES);
    }

    #[test]
    fn test_invert_y_flips_pitch() {
        let mut pose = CameraPose::new(Vec3::ZERO);
        pose.invert_y = true;
        pose.apply_mouse_delta(0.0, 10.0);
        assert!(pose.pitch > 0.0);
    }

    #[test]
    fn test_right_is_horizontal_and_orthogonal() {
        let mut pose = CameraPose::new(Vec3::ZERO);
        pose.apply_mouse_delta(333.0, -77.0);
        let right = pose.right();
        assert!(right.y.abs() < 1e-6, "strafe must stay horizontal");
        assert!(pose.front().dot(right).abs() < 1e-5);
    }

    #[test]
    fn test_horizontal_front_drops_pitch() {
        let mut pose = CameraPose::new(Vec3::ZERO);
        pose.apply_mouse_delta(0.0, -400.0);
        let flat = pose.horizontal_front();
        assert!(flat.y.abs() < 1e-6);
        assert!((flat.length() - 1.0).abs() < 1e-5);
    }
}
