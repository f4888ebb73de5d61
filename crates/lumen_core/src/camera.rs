use lumen_math::{Mat3, Mat4, Vec3};

/// Pinhole camera: a position, an orthonormal basis and a field of view.
///
/// The basis is left-handed: `right = up x forward`, with +Z forward,
/// +Y up and +X right by default.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Camera {
    pub origin: Vec3,
    pub forward: Vec3,
    pub up: Vec3,
    pub right: Vec3,
    /// Field of view in degrees
    pub fov_angle: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self::new(Vec3::ZERO, 45.0)
    }
}

impl Camera {
    /// Create a camera looking down +Z.
    pub fn new(origin: Vec3, fov_angle: f32) -> Self {
        Self {
            origin,
            forward: Vec3::Z,
            up: Vec3::Y,
            right: Vec3::X,
            fov_angle,
        }
    }

    /// Orient the camera from pitch (about X) and yaw (about Y) in radians,
    /// recomputing the whole basis.
    pub fn set_rotation(&mut self, pitch: f32, yaw: f32) {
        let rotation = Mat3::from_rotation_y(yaw) * Mat3::from_rotation_x(pitch);
        self.forward = (rotation * Vec3::Z).normalize();
        self.right = Vec3::Y.cross(self.forward).normalize();
        self.up = self.forward.cross(self.right);
    }

    /// Builder form of [`Camera::set_rotation`].
    pub fn with_rotation(mut self, pitch: f32, yaw: f32) -> Self {
        self.set_rotation(pitch, yaw);
        self
    }

    /// Half-angle tangent of the field of view, the image-plane scale at
    /// unit distance.
    pub fn fov_scale(&self) -> f32 {
        (self.fov_angle.to_radians() / 2.0).tan()
    }

    /// Camera-to-world matrix with columns right, up, forward, origin.
    pub fn camera_to_world(&self) -> Mat4 {
        Mat4::from_cols(
            self.right.extend(0.0),
            self.up.extend(0.0),
            self.forward.extend(0.0),
            self.origin.extend(1.0),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::f32::consts::FRAC_PI_2;

    #[test]
    fn test_camera_creation() {
        let camera = Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0);

        assert_eq!(camera.forward, Vec3::Z);
        assert_eq!(camera.up, Vec3::Y);
        assert_eq!(camera.right, Vec3::X);
    }

    #[test]
    fn test_fov_scale() {
        let camera = Camera::new(Vec3::ZERO, 90.0);
        assert!((camera.fov_scale() - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_rotation_keeps_basis_orthonormal() {
        let camera = Camera::default().with_rotation(0.3, -1.2);

        assert!((camera.forward.length() - 1.0).abs() < 1e-5);
        assert!((camera.right.length() - 1.0).abs() < 1e-5);
        assert!((camera.up.length() - 1.0).abs() < 1e-5);
        assert!(camera.forward.dot(camera.right).abs() < 1e-5);
        assert!(camera.forward.dot(camera.up).abs() < 1e-5);
        assert!(camera.right.dot(camera.up).abs() < 1e-5);
    }

    #[test]
    fn test_yaw_turns_right() {
        let camera = Camera::default().with_rotation(0.0, FRAC_PI_2);

        assert!((camera.forward - Vec3::X).length() < 1e-5);
        assert!((camera.right + Vec3::Z).length() < 1e-5);
        assert!((camera.up - Vec3::Y).length() < 1e-5);
    }

    #[test]
    fn test_camera_to_world() {
        let camera = Camera::new(Vec3::new(1.0, 2.0, 3.0), 60.0);
        let m = camera.camera_to_world();

        assert_eq!(m.transform_point3(Vec3::ZERO), camera.origin);
        assert_eq!(m.transform_vector3(Vec3::Z), camera.forward);
    }
}
