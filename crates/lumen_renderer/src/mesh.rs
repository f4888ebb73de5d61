//! Ray-mesh intersection against the cached world-space triangles.
//!
//! The mesh's world bounding box is slab-tested first. Meshes are only
//! ever read through their world cache, so an edit to a mesh transform is
//! invisible here until `update_transforms` has been called.

use crate::triangle::intersect;
use crate::Hittable;
use lumen_core::{CullMode, HitRecord, TriangleMesh};
use lumen_math::Ray;

impl Hittable for TriangleMesh {
    fn hit(&self, ray: &Ray, rec: &mut HitRecord) -> bool {
        if !self.world_bounds().hit(ray) {
            return false;
        }

        let mut closest = HitRecord::default();
        for tri in self.world_triangles() {
            if let Some(t) = intersect(&tri, ray, self.cull_mode) {
                if t < closest.t {
                    closest = HitRecord::new(ray.at(t), tri.normal, self.material_index, t);
                }
            }
        }

        if closest.did_hit {
            *rec = closest;
        }
        closest.did_hit
    }

    fn hit_any(&self, ray: &Ray) -> bool {
        self.world_bounds().hit(ray)
            && self
                .world_triangles()
                .any(|tri| intersect(&tri, ray, CullMode::NoCulling).is_some())
    }
}
