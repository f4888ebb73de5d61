//! Ray-triangle intersection.
//!
//! Uses the Möller-Trumbore algorithm. The sign of the determinant gives
//! the facing used by the cull modes: positive means the ray sees the
//! counter-clockwise (front) side.

use crate::Hittable;
use lumen_core::{CullMode, HitRecord, Triangle};
use lumen_math::Ray;

/// Möller-Trumbore test returning `t` for an accepted hit.
///
/// `cull_mode` is passed separately so occlusion queries can test both
/// windings regardless of the triangle's own policy.
pub(crate) fn intersect(tri: &Triangle, ray: &Ray, cull_mode: CullMode) -> Option<f32> {
    let edge1 = tri.v1 - tri.v0;
    let edge2 = tri.v2 - tri.v0;

    let h = ray.direction.cross(edge2);
    let a = edge1.dot(h);

    // Ray is parallel to triangle
    if a.abs() <= f32::EPSILON {
        return None;
    }

    match cull_mode {
        CullMode::BackFaceCulling if a < 0.0 => return None,
        CullMode::FrontFaceCulling if a > 0.0 => return None,
        _ => {}
    }

    let f = 1.0 / a;
    let s = ray.origin - tri.v0;
    let u = f * s.dot(h);

    // Check if intersection is outside triangle (u parameter)
    if !(0.0..=1.0).contains(&u) {
        return None;
    }

    let q = s.cross(edge1);
    let v = f * ray.direction.dot(q);

    // Check if intersection is outside triangle (v parameter)
    if v < 0.0 || u + v > 1.0 {
        return None;
    }

    let t = f * edge2.dot(q);
    ray.interval().surrounds(t).then_some(t)
}

impl Hittable for Triangle {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        let Some(t) = intersect(self, ray, self.cull_mode) else {
            return false;
        };

        *rec = HitRecord::new(ray.at(t), self.normal, self.material_index, t);
        true
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        intersect(self, ray, CullMode::NoCulling).is_some()
    }
}
