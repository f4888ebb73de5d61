//! Ray-sphere intersection.

use crate::Hittable;
use lumen_core::{HitRecord, Sphere};
use lumen_math::Ray;

/// Smallest root of the sphere quadratic within the ray's range.
///
/// A tangent ray (zero discriminant) counts as a miss. If the nearer root
/// falls outside the range the farther one is tried, which is what lets a
/// ray starting inside the sphere hit its far side.
fn nearest_root(sphere: &Sphere, ray: &Ray) -> Option<f32> {
    let oc = ray.origin - sphere.origin;
    let a = ray.direction.dot(ray.direction);
    let b = 2.0 * ray.direction.dot(oc);
    let c = oc.dot(oc) - sphere.radius * sphere.radius;

    let discriminant = b * b - 4.0 * a * c;
    if discriminant <= 0.0 {
        return None;
    }

    let sqrtd = discriminant.sqrt();
    let range = ray.interval();

    let near = (-b - sqrtd) / (2.0 * a);
    if range.contains(near) {
        return Some(near);
    }

    let far = (-b + sqrtd) / (2.0 * a);
    range.contains(far).then_some(far)
}

impl Hittable for Sphere {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        let Some(t) = nearest_root(self, ray) else {
            return false;
        };

        let point = ray.at(t);
        let normal = ((point - self.origin) / self.radius).normalize();
        *rec = HitRecord::new(point, normal, self.material_index, t);
        true
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        nearest_root(self, ray).is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::Vec3;

    fn unit_sphere_at(z: f32) -> Sphere {
        Sphere::new(Vec3::new(0.0, 0.0, z), 1.0, 3)
    }

    #[test]
    fn test_sphere_hit() {
        let sphere = unit_sphere_at(5.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let mut rec = HitRecord::default();

        assert!(sphere.hit(&ray, &mut rec));
        assert!(rec.did_hit);
        assert!((rec.t - 4.0).abs() < 1e-5);
        assert!((rec.point - Vec3::new(0.0, 0.0, 4.0)).length() < 1e-5);
        assert!((rec.normal - Vec3::NEG_Z).length() < 1e-5);
        assert_eq!(rec.material_index, 3);
    }

    #[test]
    fn test_sphere_miss() {
        let sphere = unit_sphere_at(5.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Y);
        let mut rec = HitRecord::default();

        assert!(!sphere.hit(&ray, &mut rec));
        assert!(!rec.did_hit);
        assert!(!sphere.hit_any(&ray));
    }

    #[test]
    fn test_sphere_behind_ray() {
        let sphere = unit_sphere_at(-5.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::Z);
        let mut rec = HitRecord::default();

        assert!(!sphere.hit(&ray, &mut rec));
    }

    #[test]
    fn test_sphere_tangent_is_miss() {
        let sphere = unit_sphere_at(5.0);
        let ray = Ray::new(Vec3::new(1.0, 0.0, 0.0), Vec3::Z);
        let mut rec = HitRecord::default();

        assert!(!sphere.hit(&ray, &mut rec));
    }

    #[test]
    fn test_sphere_from_inside_hits_far_side() {
        let sphere = unit_sphere_at(0.0);
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let mut rec = HitRecord::default();

        assert!(sphere.hit(&ray, &mut rec));
        assert!((rec.t - 1.0).abs() < 1e-5);
        assert!((rec.normal - Vec3::X).length() < 1e-5);
    }

    #[test]
    fn test_sphere_respects_ray_max() {
        let sphere = unit_sphere_at(5.0);
        let short = Ray::with_bounds(Vec3::ZERO, Vec3::Z, 0.0001, 3.5);
        let exact = Ray::with_bounds(Vec3::ZERO, Vec3::Z, 0.0001, 4.0);

        assert!(!sphere.hit_any(&short));
        // The range is inclusive on both ends
        assert!(sphere.hit_any(&exact));
    }

    #[test]
    fn test_hit_any_agrees_with_hit() {
        let sphere = unit_sphere_at(5.0);
        let directions = [
            Vec3::Z,
            Vec3::new(0.1, 0.1, 1.0).normalize(),
            Vec3::new(0.5, 0.0, 1.0).normalize(),
            Vec3::X,
            Vec3::NEG_Z,
        ];

        for dir in directions {
            let ray = Ray::new(Vec3::ZERO, dir);
            let mut rec = HitRecord::default();
            assert_eq!(sphere.hit(&ray, &mut rec), sphere.hit_any(&ray), "dir {dir:?}");
        }
    }
}
