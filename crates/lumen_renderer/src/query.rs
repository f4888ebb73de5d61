//! Scene-level ray queries.
//!
//! Each geometry kind lives in its own homogeneous collection on the
//! [`Scene`]; the queries walk them in a fixed order (planes, spheres,
//! triangles, meshes) so that equal-distance hits always resolve the same
//! way.

use crate::Hittable;
use lumen_core::{HitRecord, Scene};
use lumen_math::Ray;

/// Extension trait adding intersection queries to [`Scene`].
pub trait SceneQuery {
    /// Nearest hit along the ray, or a record with `did_hit == false`.
    fn closest_hit(&self, ray: &Ray) -> HitRecord;

    /// True if anything lies within the ray's range. Used for shadows.
    fn any_hit(&self, ray: &Ray) -> bool;
}

/// Fold a collection into `closest`, replacing it only on a strictly
/// nearer hit.
fn fold_closest<H: Hittable>(objects: &[H], ray: &Ray, closest: &mut HitRecord) {
    let mut candidate = HitRecord::default();
    for object in objects {
        if object.hit(ray, &mut candidate) && candidate.is_closer_than(closest) {
            *closest = candidate;
        }
    }
}

impl SceneQuery for Scene {
    fn closest_hit(&self, ray: &Ray) -> HitRecord {
        let mut closest = HitRecord::default();

        fold_closest(self.planes(), ray, &mut closest);
        fold_closest(self.spheres(), ray, &mut closest);
        fold_closest(self.triangles(), ray, &mut closest);
        fold_closest(self.meshes(), ray, &mut closest);

        closest
    }

    fn any_hit(&self, ray: &Ray) -> bool {
        self.planes().iter().any(|p| p.hit_any(ray))
            || self.spheres().iter().any(|s| s.hit_any(ray))
            || self.triangles().iter().any(|t| t.hit_any(ray))
            || self.meshes().iter().any(|m| m.hit_any(ray))
    }
}
