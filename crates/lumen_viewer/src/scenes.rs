//! Demo scenes and their per-frame animation.

use anyhow::{bail, Context, Result};
use lumen_core::{Camera, CookTorrance, CullMode, Lambert, Scene, SolidColor, Triangle, TriangleMesh};
use lumen_math::color::colors;
use lumen_math::{Color, Vec3};
use std::f32::consts::TAU;
use std::path::Path;

/// A scene plus the meshes that spin over time.
pub struct DemoScene {
    pub scene: Scene,
    animated_meshes: Vec<usize>,
}

impl DemoScene {
    fn new(scene: Scene) -> Self {
        Self {
            scene,
            animated_meshes: Vec::new(),
        }
    }

    /// Advance the animation to `total_time` seconds.
    ///
    /// Animated meshes swing their yaw through a full turn and back, and
    /// their world-space cache is rebuilt so the next frame sees it.
    pub fn update(&mut self, total_time: f32) {
        let yaw = (total_time.cos() + 1.0) / 2.0 * TAU;

        for &id in &self.animated_meshes {
            if let Some(mesh) = self.scene.mesh_mut(id) {
                mesh.rotate_y(yaw);
                mesh.update_transforms();
            }
        }
    }

    pub fn animated_mesh_count(&self) -> usize {
        self.animated_meshes.len()
    }
}

/// Five-sided room shared by the reference and OBJ scenes, open towards
/// the camera.
fn add_room(scene: &mut Scene, material: u8) {
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, material); // back
    scene.add_plane(Vec3::new(0.0, 0.0, 0.0), Vec3::Y, material); // bottom
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, material); // top
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X, material); // right
    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, material); // left
}

/// Warm back light and two front lights.
fn add_three_point_lights(scene: &mut Scene) {
    scene.add_point_light(Vec3::new(0.0, 5.0, 5.0), 50.0, Color::new(1.0, 0.61, 0.45));
    scene.add_point_light(Vec3::new(-2.5, 5.0, -5.0), 70.0, Color::new(1.0, 0.8, 0.45));
    scene.add_point_light(Vec3::new(2.5, 2.5, -5.0), 50.0, Color::new(0.34, 0.47, 0.68));
}

/// Two rows of solid-colored spheres inside a box of planes.
pub fn spheres() -> Result<DemoScene> {
    let mut scene = Scene::new("Spheres");
    scene.camera = Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0);

    let red = 0;
    let blue = scene.add_material(SolidColor::new(colors::BLUE))?;
    let yellow = scene.add_material(SolidColor::new(colors::YELLOW))?;
    let green = scene.add_material(SolidColor::new(colors::GREEN))?;
    let magenta = scene.add_material(SolidColor::new(colors::MAGENTA))?;

    scene.add_plane(Vec3::new(-5.0, 0.0, 0.0), Vec3::X, green);
    scene.add_plane(Vec3::new(5.0, 0.0, 0.0), Vec3::NEG_X, green);
    scene.add_plane(Vec3::ZERO, Vec3::Y, yellow);
    scene.add_plane(Vec3::new(0.0, 10.0, 0.0), Vec3::NEG_Y, yellow);
    scene.add_plane(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z, magenta);

    for (row, y) in [1.0, 3.0].into_iter().enumerate() {
        for (col, x) in [-1.75, 0.0, 1.75].into_iter().enumerate() {
            let material = if (row + col) % 2 == 0 { red } else { blue };
            scene.add_sphere(Vec3::new(x, y, 0.0), 0.75, material);
        }
    }

    scene.add_point_light(Vec3::new(0.0, 5.0, -5.0), 30.0, colors::WHITE);

    Ok(DemoScene::new(scene))
}

/// Metal and plastic Cook-Torrance spheres at three roughness levels, and
/// one spinning triangle per cull mode.
pub fn reference() -> Result<DemoScene> {
    let mut scene = Scene::new("Reference");
    scene.camera = Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0);

    let metal = Color::new(0.972, 0.960, 0.915);
    let plastic = Color::splat(0.75);
    let roughness = [1.0, 0.6, 0.1];

    let gray_blue = scene.add_material(Lambert::new(Color::new(0.49, 0.57, 0.57), 1.0))?;
    let white = scene.add_material(Lambert::new(colors::WHITE, 1.0))?;

    add_room(&mut scene, gray_blue);

    for (y, albedo, metalness) in [(1.0, metal, 1.0), (3.0, plastic, 0.0)] {
        for (x, roughness) in [-1.75, 0.0, 1.75].into_iter().zip(roughness) {
            let material = scene.add_material(CookTorrance::new(albedo, metalness, roughness))?;
            scene.add_sphere(Vec3::new(x, y, 0.0), 0.75, material);
        }
    }

    let base = Triangle::new(
        Vec3::new(-0.75, 1.5, 0.0),
        Vec3::new(0.75, 0.0, 0.0),
        Vec3::new(-0.75, 0.0, 0.0),
    );

    let mut demo = DemoScene::new(scene);
    for (x, cull_mode) in [
        (-1.75, CullMode::BackFaceCulling),
        (0.0, CullMode::FrontFaceCulling),
        (1.75, CullMode::NoCulling),
    ] {
        let mut mesh = TriangleMesh::new(cull_mode, white);
        mesh.append_triangle(&base);
        mesh.translate(Vec3::new(x, 4.5, 0.0));
        mesh.calculate_normals();
        mesh.update_aabb();
        mesh.update_transforms();

        let id = demo.scene.push_mesh(mesh);
        demo.animated_meshes.push(id);
    }

    add_three_point_lights(&mut demo.scene);

    Ok(demo)
}

/// A mesh loaded from an OBJ file, scaled up and placed in the reference
/// room.
pub fn obj(path: &Path) -> Result<DemoScene> {
    let mut scene = Scene::new(
        path.file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "OBJ".to_string()),
    );
    scene.camera = Camera::new(Vec3::new(0.0, 3.0, -9.0), 45.0);

    let gray_blue = scene.add_material(Lambert::new(Color::new(0.49, 0.57, 0.57), 1.0))?;
    let white = scene.add_material(Lambert::new(colors::WHITE, 1.0))?;
    add_room(&mut scene, gray_blue);

    let mut mesh = load_obj(path, CullMode::BackFaceCulling, white)?;
    mesh.scale(Vec3::splat(2.0));
    mesh.update_transforms();

    let mut demo = DemoScene::new(scene);
    let id = demo.scene.push_mesh(mesh);
    demo.animated_meshes.push(id);

    add_three_point_lights(&mut demo.scene);

    Ok(demo)
}

/// Load every model in an OBJ file into one triangle mesh.
///
/// Faces are triangulated on load and face normals are computed from the
/// winding; normals stored in the file are not used.
pub fn load_obj(path: &Path, cull_mode: CullMode, material_index: u8) -> Result<TriangleMesh> {
    let (models, _materials) = tobj::load_obj(
        path,
        &tobj::LoadOptions {
            single_index: true,
            triangulate: true,
            ..Default::default()
        },
    )
    .with_context(|| format!("Failed to load OBJ file {}", path.display()))?;

    if models.is_empty() {
        bail!("No models found in OBJ file {}", path.display());
    }

    let mut positions = Vec::new();
    let mut indices = Vec::new();
    for model in &models {
        let offset = positions.len() as u32;
        positions.extend(model.mesh.positions.chunks_exact(3).map(Vec3::from_slice));
        indices.extend(model.mesh.indices.iter().map(|&i| i + offset));
    }

    log::info!(
        "Loaded {} ({} models, {} vertices, {} triangles)",
        path.display(),
        models.len(),
        positions.len(),
        indices.len() / 3
    );

    let mesh = TriangleMesh::from_buffers(positions, indices, cull_mode, material_index);
    if mesh.triangle_count() == 0 {
        bail!("No usable triangles in OBJ file {}", path.display());
    }

    Ok(mesh)
}
