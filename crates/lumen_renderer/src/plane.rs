//! Ray-plane intersection.

use crate::Hittable;
use lumen_core::{HitRecord, Plane};
use lumen_math::Ray;

/// Planes are one-sided: only rays travelling against the normal can hit.
fn front_facing_t(plane: &Plane, ray: &Ray) -> Option<f32> {
    let denom = ray.direction.dot(plane.normal);
    if denom >= 0.0 {
        return None;
    }

    let t = (plane.origin - ray.origin).dot(plane.normal) / denom;
    ray.interval().contains(t).then_some(t)
}

impl Hittable for Plane {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        let Some(t) = front_facing_t(self, ray) else {
            return false;
        };

        *rec = HitRecord::new(ray.at(t), self.normal, self.material_index, t);
        true
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        front_facing_t(self, ray).is_some()
    }
}
