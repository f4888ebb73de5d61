//! Record of a ray-geometry intersection.

use lumen_math::Vec3;

/// Index into a scene's material table.
pub type MaterialIndex = u8;

/// Record of a ray-object intersection.
///
/// The default record is a miss at infinite distance, so any real hit
/// compares as closer when folding candidates with [`HitRecord::is_closer_than`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HitRecord {
    /// Whether anything was hit
    pub did_hit: bool,
    /// Point of intersection
    pub point: Vec3,
    /// Surface normal at intersection (unit length, outward per primitive)
    pub normal: Vec3,
    /// Material of the surface that was hit
    pub material_index: MaterialIndex,
    /// Parameter t where the intersection occurs
    pub t: f32,
}

impl Default for HitRecord {
    fn default() -> Self {
        Self {
            did_hit: false,
            point: Vec3::ZERO,
            normal: Vec3::ZERO,
            material_index: 0,
            t: f32::INFINITY,
        }
    }
}

impl HitRecord {
    /// A hit at parameter `t`.
    pub fn new(point: Vec3, normal: Vec3, material_index: MaterialIndex, t: f32) -> Self {
        Self {
            did_hit: true,
            point,
            normal,
            material_index,
            t,
        }
    }

    /// True if this record is strictly nearer than `other`.
    ///
    /// Equal distances keep the existing record, so ties go to whichever
    /// primitive was tested first.
    #[inline]
    pub fn is_closer_than(&self, other: &HitRecord) -> bool {
        self.did_hit && self.t < other.t
    }
}
