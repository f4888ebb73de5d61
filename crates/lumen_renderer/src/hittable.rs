//! Hittable trait for ray-object intersection.

use lumen_core::HitRecord;
use lumen_math::Ray;

/// Trait for geometry that can be hit by rays.
///
/// Both queries only accept hits with `t` inside the ray's own
/// `[min, max]` range.
pub trait Hittable: Send + Sync {
    /// Closest-hit query.
    ///
    /// Returns true if hit, and overwrites the hit record. On a miss the
    /// record is left untouched.
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool;

    /// Any-hit (occlusion) query. No record is produced, so an
    /// implementation may stop at the first accepted intersection.
    fn hit_any(&self, ray: &Ray) -> bool;
}
