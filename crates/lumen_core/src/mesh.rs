//! Triangle mesh geometry with an explicitly refreshed world-space cache.
//!
//! A mesh keeps its source data in object space (positions, per-triangle
//! normals, indices) next to a model transform. Ray queries only ever read
//! the cached world-space copies, which are rebuilt by
//! [`TriangleMesh::update_transforms`]. Editing the transform does not touch
//! the cache; until the next update, queries see the previous state.

use crate::error::SceneError;
use crate::hit::MaterialIndex;
use crate::primitive::{face_normal, CullMode, Triangle};
use lumen_math::{Aabb, Mat4, Mat4Ext, Quat, Vec3};

/// Transform components that can be composed into a matrix.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transform {
    /// Translation
    pub translation: Vec3,

    /// Rotation (as quaternion)
    pub rotation: Quat,

    /// Scale
    pub scale: Vec3,
}

impl Default for Transform {
    fn default() -> Self {
        Self {
            translation: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            scale: Vec3::ONE,
        }
    }
}

impl Transform {
    /// Convert to a 4x4 transformation matrix.
    ///
    /// Order: Scale -> Rotate -> Translate (SRT)
    pub fn to_matrix(&self) -> Mat4 {
        Mat4::from_scale_rotation_translation(self.scale, self.rotation, self.translation)
    }
}

/// A triangle mesh sharing one material and cull mode.
#[derive(Clone, Debug)]
pub struct TriangleMesh {
    /// Object-space vertex positions
    pub positions: Vec<Vec3>,

    /// Object-space face normals, one per triangle
    pub normals: Vec<Vec3>,

    /// Triangle indices (every 3 indices form a triangle)
    pub indices: Vec<u32>,

    pub material_index: MaterialIndex,
    pub cull_mode: CullMode,

    transform: Transform,

    /// Object-space bounds, refreshed by `update_aabb`
    bounds: Aabb,

    // World-space cache, refreshed by `update_transforms`
    transformed_positions: Vec<Vec3>,
    transformed_normals: Vec<Vec3>,
    transformed_bounds: Aabb,
}

impl TriangleMesh {
    /// Create an empty mesh.
    pub fn new(cull_mode: CullMode, material_index: MaterialIndex) -> Self {
        Self {
            positions: Vec::new(),
            normals: Vec::new(),
            indices: Vec::new(),
            material_index,
            cull_mode,
            transform: Transform::default(),
            bounds: Aabb::EMPTY,
            transformed_positions: Vec::new(),
            transformed_normals: Vec::new(),
            transformed_bounds: Aabb::EMPTY,
        }
    }

    /// Create a mesh from vertex positions and a triangle index buffer.
    ///
    /// Face normals and bounds are computed and the world cache is built
    /// with the identity transform, so the mesh is immediately queryable.
    /// A trailing partial triangle in `indices` is dropped, as is any
    /// triangle that references a vertex past the end of `positions`.
    pub fn from_buffers(
        positions: Vec<Vec3>,
        mut indices: Vec<u32>,
        cull_mode: CullMode,
        material_index: MaterialIndex,
    ) -> Self {
        let remainder = indices.len() % 3;
        if remainder != 0 {
            log::warn!(
                "Index buffer length {} is not a multiple of 3, dropping {} trailing indices",
                indices.len(),
                remainder
            );
            indices.truncate(indices.len() - remainder);
        }

        let vertex_count = positions.len();
        let triangles = indices.len() / 3;
        let indices: Vec<u32> = indices
            .chunks_exact(3)
            .filter(|face| face.iter().all(|&i| (i as usize) < vertex_count))
            .flatten()
            .copied()
            .collect();
        let dropped = triangles - indices.len() / 3;
        if dropped > 0 {
            log::warn!(
                "Dropping {} triangles with indices past {} vertices",
                dropped,
                vertex_count
            );
        }

        let mut mesh = Self {
            positions,
            indices,
            ..Self::new(cull_mode, material_index)
        };
        mesh.calculate_normals();
        mesh.update_aabb();
        mesh.update_transforms();
        mesh
    }

    /// Append a triangle's vertices, indices and normal.
    ///
    /// The triangle's own material and cull mode are ignored in favor of the
    /// mesh's. Call `update_aabb` and `update_transforms` afterwards.
    pub fn append_triangle(&mut self, triangle: &Triangle) {
        let start = self.positions.len() as u32;

        self.positions
            .extend_from_slice(&[triangle.v0, triangle.v1, triangle.v2]);
        self.indices
            .extend_from_slice(&[start, start + 1, start + 2]);
        self.normals.push(triangle.normal);
    }

    /// Recompute one face normal per triangle from the winding.
    ///
    /// Triangles with an out-of-range index get a zero normal; `validate`
    /// reports the bad index.
    pub fn calculate_normals(&mut self) {
        let positions = &self.positions;
        self.normals = self
            .indices
            .chunks_exact(3)
            .map(|face| {
                match (
                    positions.get(face[0] as usize),
                    positions.get(face[1] as usize),
                    positions.get(face[2] as usize),
                ) {
                    (Some(&a), Some(&b), Some(&c)) => face_normal(a, b, c),
                    _ => Vec3::ZERO,
                }
            })
            .collect();
    }

    /// Recompute the object-space bounding box from the positions.
    pub fn update_aabb(&mut self) {
        self.bounds = Aabb::from_point_cloud(&self.positions);
    }

    /// Set the translation component. Takes effect after `update_transforms`.
    pub fn translate(&mut self, translation: Vec3) {
        self.transform.translation = translation;
    }

    /// Set the rotation to `yaw` radians about +Y. Takes effect after
    /// `update_transforms`.
    pub fn rotate_y(&mut self, yaw: f32) {
        self.transform.rotation = Quat::from_rotation_y(yaw);
    }

    /// Set the scale component. Takes effect after `update_transforms`.
    pub fn scale(&mut self, scale: Vec3) {
        self.transform.scale = scale;
    }

    /// Replace the whole transform. Takes effect after `update_transforms`.
    pub fn set_transform(&mut self, transform: Transform) {
        self.transform = transform;
    }

    /// The pending model transform (may be newer than the world cache).
    pub fn transform(&self) -> Transform {
        self.transform
    }

    /// Rebuild the world-space positions, normals and bounding box from the
    /// current transform.
    pub fn update_transforms(&mut self) {
        let model = self.transform.to_matrix();
        let normal_matrix = model.normal_matrix();

        self.transformed_positions.clear();
        self.transformed_positions
            .extend(self.positions.iter().map(|&p| model.transform_point3(p)));

        self.transformed_normals.clear();
        self.transformed_normals
            .extend(self.normals.iter().map(|&n| (normal_matrix * n).normalize_or_zero()));

        self.transformed_bounds = model.transform_aabb(&self.bounds);

        log::trace!(
            "Updated mesh transforms: {} vertices, {} triangles",
            self.transformed_positions.len(),
            self.triangle_count()
        );
    }

    /// Object-space bounds as of the last `update_aabb`.
    pub fn bounds(&self) -> Aabb {
        self.bounds
    }

    /// World-space bounds as of the last `update_transforms`.
    pub fn world_bounds(&self) -> Aabb {
        self.transformed_bounds
    }

    /// World-space positions as of the last `update_transforms`.
    pub fn transformed_positions(&self) -> &[Vec3] {
        &self.transformed_positions
    }

    /// World-space face normals as of the last `update_transforms`.
    pub fn transformed_normals(&self) -> &[Vec3] {
        &self.transformed_normals
    }

    /// Get the number of triangles in the mesh.
    pub fn triangle_count(&self) -> usize {
        self.indices.len() / 3
    }

    /// Get the number of vertices in the mesh.
    pub fn vertex_count(&self) -> usize {
        self.positions.len()
    }

    /// Iterate the cached world-space triangles, carrying the mesh's
    /// material and cull mode.
    pub fn world_triangles(&self) -> impl Iterator<Item = Triangle> + '_ {
        self.indices
            .chunks_exact(3)
            .zip(&self.transformed_normals)
            .map(move |(face, &normal)| Triangle {
                v0: self.transformed_positions[face[0] as usize],
                v1: self.transformed_positions[face[1] as usize],
                v2: self.transformed_positions[face[2] as usize],
                normal,
                material_index: self.material_index,
                cull_mode: self.cull_mode,
            })
    }

    /// Check the buffers are consistent: indices in range and one normal
    /// per triangle, both in the source and the world cache.
    pub fn validate(&self, mesh_id: usize) -> Result<(), SceneError> {
        let vertex_count = self.positions.len();
        if let Some(&index) = self
            .indices
            .iter()
            .find(|&&i| i as usize >= vertex_count)
        {
            return Err(SceneError::MeshIndexOutOfRange {
                mesh: mesh_id,
                index,
                vertex_count,
            });
        }

        let triangles = self.triangle_count();
        if self.normals.len() != triangles {
            return Err(SceneError::MeshNormalCount {
                mesh: mesh_id,
                normals: self.normals.len(),
                triangles,
            });
        }

        if self.transformed_positions.len() != vertex_count
            || self.transformed_normals.len() != triangles
        {
            return Err(SceneError::StaleMeshCache { mesh: mesh_id });
        }

        Ok(())
    }
}
