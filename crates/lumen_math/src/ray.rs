use crate::{Interval, Vec3};

/// Smallest accepted parametric distance for a ray. Keeps secondary rays
/// from re-hitting the surface they start on.
pub const RAY_EPSILON: f32 = 0.0001;

/// A ray in 3D space with origin, direction, and a valid parametric range.
///
/// The direction is expected to be unit length, but that is not enforced;
/// callers are responsible for normalizing it. Only intersections with
/// `t` between `min` and `max` are considered valid.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    pub origin: Vec3,
    pub direction: Vec3,
    pub min: f32,
    pub max: f32,
}

impl Ray {
    /// Create a new ray with the default bounds `[RAY_EPSILON, f32::MAX]`.
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction,
            min: RAY_EPSILON,
            max: f32::MAX,
        }
    }

    /// Create a ray with explicit bounds.
    ///
    /// Used for shadow rays, where `max` is the distance to the light. A ray
    /// with `max <= min` is valid and never hits anything.
    pub fn with_bounds(origin: Vec3, direction: Vec3, min: f32, max: f32) -> Self {
        Self {
            origin,
            direction,
            min,
            max,
        }
    }

    /// The valid parametric range as an interval.
    #[inline]
    pub fn interval(&self) -> Interval {
        Interval::new(self.min, self.max)
    }

    /// Get the point along the ray at parameter t.
    ///
    /// Returns: origin + t * direction
    #[inline]
    pub fn at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }
}

impl Default for Ray {
    fn default() -> Self {
        Self::new(Vec3::ZERO, Vec3::Z)
    }
}
