//! Scene container: geometry, lights, materials and the active camera.
//!
//! Geometry is stored as one homogeneous collection per shape so the
//! renderer can walk each kind without dynamic dispatch.

use crate::camera::Camera;
use crate::error::{SceneError, SceneResult};
use crate::hit::MaterialIndex;
use crate::light::Light;
use crate::material::{Material, SolidColor};
use crate::mesh::TriangleMesh;
use crate::primitive::{CullMode, Plane, Sphere, Triangle};
use lumen_math::color::colors;
use lumen_math::{Color, Vec3};

/// A complete scene.
///
/// A new scene holds one material: a red [`SolidColor`] at index 0, so
/// geometry added with material 0 always renders.
pub struct Scene {
    /// Scene name (for logs and output naming)
    pub name: String,

    pub camera: Camera,

    spheres: Vec<Sphere>,
    planes: Vec<Plane>,
    triangles: Vec<Triangle>,
    meshes: Vec<TriangleMesh>,
    lights: Vec<Light>,
    materials: Vec<Box<dyn Material>>,
}

impl Default for Scene {
    fn default() -> Self {
        Self::new("untitled")
    }
}

impl Scene {
    /// Create a scene containing only the default material.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            camera: Camera::default(),
            spheres: Vec::with_capacity(32),
            planes: Vec::with_capacity(32),
            triangles: Vec::new(),
            meshes: Vec::with_capacity(32),
            lights: Vec::with_capacity(32),
            materials: vec![Box::new(SolidColor::new(colors::RED))],
        }
    }

    /// Add a material to the scene and return its index.
    pub fn add_material(&mut self, material: impl Material + 'static) -> SceneResult<MaterialIndex> {
        let index = MaterialIndex::try_from(self.materials.len())
            .map_err(|_| SceneError::MaterialTableFull(self.materials.len()))?;
        self.materials.push(Box::new(material));
        Ok(index)
    }

    pub fn add_sphere(&mut self, origin: Vec3, radius: f32, material_index: MaterialIndex) -> &mut Sphere {
        let index = self.spheres.len();
        self.spheres.push(Sphere::new(origin, radius, material_index));
        &mut self.spheres[index]
    }

    pub fn add_plane(&mut self, origin: Vec3, normal: Vec3, material_index: MaterialIndex) -> &mut Plane {
        let index = self.planes.len();
        self.planes.push(Plane::new(origin, normal, material_index));
        &mut self.planes[index]
    }

    pub fn add_triangle(&mut self, triangle: Triangle) -> &mut Triangle {
        let index = self.triangles.len();
        self.triangles.push(triangle);
        &mut self.triangles[index]
    }

    /// Add an empty mesh and return its id for later access via
    /// [`Scene::mesh_mut`].
    pub fn add_triangle_mesh(&mut self, cull_mode: CullMode, material_index: MaterialIndex) -> usize {
        self.push_mesh(TriangleMesh::new(cull_mode, material_index))
    }

    /// Add a fully built mesh and return its id.
    pub fn push_mesh(&mut self, mesh: TriangleMesh) -> usize {
        self.meshes.push(mesh);
        self.meshes.len() - 1
    }

    pub fn add_point_light(&mut self, origin: Vec3, intensity: f32, color: Color) -> &mut Light {
        let index = self.lights.len();
        self.lights.push(Light::point(origin, intensity, color));
        &mut self.lights[index]
    }

    pub fn add_directional_light(&mut self, direction: Vec3, intensity: f32, color: Color) -> &mut Light {
        let index = self.lights.len();
        self.lights.push(Light::directional(direction, intensity, color));
        &mut self.lights[index]
    }

    pub fn spheres(&self) -> &[Sphere] {
        &self.spheres
    }

    pub fn planes(&self) -> &[Plane] {
        &self.planes
    }

    pub fn triangles(&self) -> &[Triangle] {
        &self.triangles
    }

    pub fn meshes(&self) -> &[TriangleMesh] {
        &self.meshes
    }

    /// Mutable access to a mesh, used by per-frame animation.
    pub fn mesh_mut(&mut self, id: usize) -> Option<&mut TriangleMesh> {
        self.meshes.get_mut(id)
    }

    /// Mutable access to all meshes.
    pub fn meshes_mut(&mut self) -> &mut [TriangleMesh] {
        &mut self.meshes
    }

    pub fn lights(&self) -> &[Light] {
        &self.lights
    }

    /// Get a material by index.
    ///
    /// # Panics
    ///
    /// Panics if the index is out of range. Geometry only stores indices
    /// that [`Scene::validate`] has checked.
    pub fn material(&self, index: MaterialIndex) -> &dyn Material {
        self.materials[index as usize].as_ref()
    }

    pub fn material_count(&self) -> usize {
        self.materials.len()
    }

    /// Total triangles across standalone triangles and meshes.
    pub fn triangle_count(&self) -> usize {
        self.triangles.len() + self.meshes.iter().map(TriangleMesh::triangle_count).sum::<usize>()
    }

    /// Check every material reference and mesh buffer.
    pub fn validate(&self) -> SceneResult<()> {
        let material_count = self.materials.len();
        let check = |kind: &'static str, primitive: usize, index: MaterialIndex| {
            if (index as usize) < material_count {
                Ok(())
            } else {
                Err(SceneError::InvalidMaterialIndex {
                    kind,
                    primitive,
                    index,
                    material_count,
                })
            }
        };

        for (i, plane) in self.planes.iter().enumerate() {
            check("plane", i, plane.material_index)?;
        }
        for (i, sphere) in self.spheres.iter().enumerate() {
            check("sphere", i, sphere.material_index)?;
        }
        for (i, triangle) in self.triangles.iter().enumerate() {
            check("triangle", i, triangle.material_index)?;
        }
        for (i, mesh) in self.meshes.iter().enumerate() {
            check("mesh", i, mesh.material_index)?;
            mesh.validate(i)?;
        }

        Ok(())
    }
}

impl std::fmt::Debug for Scene {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Scene")
            .field("name", &self.name)
            .field("planes", &self.planes.len())
            .field("spheres", &self.spheres.len())
            .field("triangles", &self.triangles.len())
            .field("meshes", &self.meshes.len())
            .field("lights", &self.lights.len())
            .field("materials", &self.materials.len())
            .finish()
    }
}
