//! Analytic geometry primitives.
//!
//! These are plain data; the ray tests live in the renderer's
//! intersection module.

use crate::hit::MaterialIndex;
use lumen_math::Vec3;

/// Winding-based rejection policy for triangles.
///
/// The facing sign is taken from the Möller-Trumbore determinant, so
/// "back face" means the ray approaches against the triangle's winding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CullMode {
    #[default]
    NoCulling,
    BackFaceCulling,
    FrontFaceCulling,
}

/// A sphere primitive.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sphere {
    pub origin: Vec3,
    pub radius: f32,
    pub material_index: MaterialIndex,
}

impl Sphere {
    /// Create a new sphere.
    pub fn new(origin: Vec3, radius: f32, material_index: MaterialIndex) -> Self {
        Self {
            origin,
            radius: radius.max(0.0),
            material_index,
        }
    }
}

/// An infinite plane through `origin`. Only its front side (the side the
/// normal points to) is visible.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Plane {
    pub origin: Vec3,
    pub normal: Vec3,
    pub material_index: MaterialIndex,
}

impl Plane {
    /// Create a new plane. The normal is normalized.
    pub fn new(origin: Vec3, normal: Vec3, material_index: MaterialIndex) -> Self {
        Self {
            origin,
            normal: normal.normalize(),
            material_index,
        }
    }
}

/// A single triangle.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Triangle {
    /// Vertices
    pub v0: Vec3,
    pub v1: Vec3,
    pub v2: Vec3,
    /// Face normal (unit length)
    pub normal: Vec3,
    pub material_index: MaterialIndex,
    pub cull_mode: CullMode,
}

impl Triangle {
    /// Create a new triangle from three vertices.
    ///
    /// The normal follows the winding: `normalize((v1 - v0) x (v2 - v0))`.
    pub fn new(v0: Vec3, v1: Vec3, v2: Vec3) -> Self {
        Self {
            v0,
            v1,
            v2,
            normal: face_normal(v0, v1, v2),
            material_index: 0,
            cull_mode: CullMode::NoCulling,
        }
    }

    /// Create a triangle with a pre-computed normal.
    pub fn with_normal(v0: Vec3, v1: Vec3, v2: Vec3, normal: Vec3) -> Self {
        Self {
            normal: normal.normalize(),
            ..Self::new(v0, v1, v2)
        }
    }

    /// Builder method to set the material.
    pub fn with_material(mut self, material_index: MaterialIndex) -> Self {
        self.material_index = material_index;
        self
    }

    /// Builder method to set the cull mode.
    pub fn with_cull_mode(mut self, cull_mode: CullMode) -> Self {
        self.cull_mode = cull_mode;
        self
    }
}

/// Unit normal of the triangle `v0, v1, v2` following its winding.
///
/// Degenerate triangles yield a zero vector rather than NaN.
pub fn face_normal(v0: Vec3, v1: Vec3, v2: Vec3) -> Vec3 {
    (v1 - v0).cross(v2 - v0).normalize_or_zero()
}
