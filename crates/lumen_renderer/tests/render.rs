//! End-to-end rendering tests.

use lumen_core::{Camera, CullMode, Lambert, Scene, TriangleMesh};
use lumen_math::color::colors;
use lumen_renderer::{render_frame, Color, LightingMode, Partition, Ray, RenderConfig, SceneQuery, Vec3};

const WIDTH: u32 = 64;
const HEIGHT: u32 = 64;

/// Sphere at (0,0,5) radius 1 and a point light between it and the
/// camera. The plane far behind faces away from the camera, so it never
/// shows up in primary rays.
fn sphere_scene() -> Scene {
    let mut scene = Scene::new("sphere");
    scene.camera = Camera::new(Vec3::ZERO, 90.0);

    let white = scene.add_material(Lambert::new(colors::WHITE, 1.0)).unwrap();
    scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, white);
    scene.add_plane(Vec3::new(0.0, 0.0, 50.0), Vec3::Z, white);
    scene.add_point_light(Vec3::new(0.0, 0.0, 2.0), 30.0, colors::WHITE);
    scene
}

fn index(x: u32, y: u32) -> usize {
    (y * WIDTH + x) as usize
}

#[test]
fn test_sphere_renders_centered_disc() {
    let scene = sphere_scene();
    let background = Color::new(0.1, 0.2, 0.3);
    let config = RenderConfig::default().with_background(background);
    let frame = render_frame(&scene, &config, WIDTH, HEIGHT).unwrap();

    // Center is lit, corners and edges show the background
    let center = frame.get(WIDTH / 2, HEIGHT / 2);
    assert!(center.x > 0.5, "center {center:?}");
    for (x, y) in [(0, 0), (WIDTH - 1, 0), (0, HEIGHT - 1), (WIDTH - 1, HEIGHT - 1), (WIDTH / 2, 0)] {
        assert_eq!(frame.get(x, y), background, "pixel ({x}, {y})");
    }

    // The covered region is symmetric about the vertical center line
    for y in 0..HEIGHT {
        for x in 0..WIDTH {
            let mirrored = frame.pixels[index(WIDTH - 1 - x, y)];
            let covered = frame.pixels[index(x, y)] != background;
            assert_eq!(covered, mirrored != background, "pixel ({x}, {y})");
        }
    }

    // Radius 1 at distance 5 with a 90 degree fov spans about a fifth of
    // the frame width
    let row = HEIGHT / 2;
    let covered_in_row = (0..WIDTH).filter(|&x| frame.get(x, row) != background).count();
    assert!((10..=16).contains(&covered_in_row), "covered pixels in center row: {covered_in_row}");
}

#[test]
fn test_rendering_is_deterministic() {
    let scene = sphere_scene();

    for partition in [Partition::Chunked, Partition::WorkStealing] {
        let config = RenderConfig::default().with_partition(partition).with_workers(5);
        let first = render_frame(&scene, &config, WIDTH, HEIGHT).unwrap();
        let second = render_frame(&scene, &config, WIDTH, HEIGHT).unwrap();
        assert_eq!(first.pixels, second.pixels, "{partition:?}");
    }
}

#[test]
fn test_pixels_never_exceed_one() {
    let mut scene = sphere_scene();
    scene.add_point_light(Vec3::new(0.0, 1.0, 2.0), 5000.0, Color::new(1.0, 0.6, 0.2));

    let frame = render_frame(&scene, &RenderConfig::default(), WIDTH, HEIGHT).unwrap();
    for color in &frame.pixels {
        assert!(color.max_element() <= 1.0 + 1e-6);
    }

    let center = frame.get(WIDTH / 2, HEIGHT / 2);
    assert!((center.max_element() - 1.0).abs() < 1e-6);
}

#[test]
fn test_shadow_toggle() {
    // A wall behind the sphere, facing the camera and the light
    let mut scene = sphere_scene();
    let white = scene.add_material(Lambert::new(colors::WHITE, 1.0)).unwrap();
    scene.add_plane(Vec3::new(0.0, 0.0, 20.0), Vec3::NEG_Z, white);

    let probe = Ray::new(Vec3::new(0.0, 0.0, 2.0), Vec3::Z);
    assert!(scene.any_hit(&probe));

    // This pixel sees the wall just outside the sphere's silhouette, well
    // inside its shadow
    let (x, y) = (WIDTH / 2 + 8, HEIGHT / 2);
    let with_shadows = render_frame(&scene, &RenderConfig::default(), WIDTH, HEIGHT).unwrap();
    let without = render_frame(&scene, &RenderConfig::default().with_shadows(false), WIDTH, HEIGHT).unwrap();

    assert_eq!(with_shadows.get(x, y), Color::ZERO);
    assert!(without.get(x, y).x > 0.0);

    // The sphere itself is lit either way
    assert_eq!(with_shadows.get(WIDTH / 2, y), without.get(WIDTH / 2, y));
}

#[test]
fn test_lighting_mode_terms() {
    let scene = sphere_scene();
    let (x, y) = (WIDTH / 2, HEIGHT / 2);

    let mut mode = LightingMode::default();
    let mut colors_seen = Vec::new();
    for _ in 0..4 {
        let config = RenderConfig::default().with_lighting_mode(mode);
        let frame = render_frame(&scene, &config, WIDTH, HEIGHT).unwrap();
        colors_seen.push(frame.get(x, y));
        mode = mode.next();
    }

    // Combined, observed area, radiance, BRDF. The center pixel is slightly
    // off axis, so the light is not quite head-on.
    let area = colors_seen[1];
    let brdf = colors_seen[3];
    assert!(area.x > 0.98 && area.x <= 1.0, "observed area {area:?}");
    assert_eq!(area.x, area.y);
    assert!((brdf - Color::splat(std::f32::consts::FRAC_1_PI)).length() < 1e-5);
}

#[test]
fn test_animated_mesh_follows_update_transforms() {
    let mut scene = Scene::new("mesh");
    scene.camera = Camera::new(Vec3::ZERO, 90.0);
    scene.add_point_light(Vec3::ZERO, 10.0, colors::WHITE);

    // Quad facing the camera, offset to the right
    let quad = TriangleMesh::from_buffers(
        vec![
            Vec3::new(1.0, -1.0, 4.0),
            Vec3::new(1.0, 1.0, 4.0),
            Vec3::new(3.0, -1.0, 4.0),
            Vec3::new(3.0, 1.0, 4.0),
        ],
        vec![0, 1, 2, 2, 1, 3],
        CullMode::BackFaceCulling,
        0,
    );
    let id = scene.push_mesh(quad);

    let config = RenderConfig::default().with_shadows(false);
    let left = (WIDTH / 4, HEIGHT / 2);
    let right = (3 * WIDTH / 4, HEIGHT / 2);

    let before = render_frame(&scene, &config, WIDTH, HEIGHT).unwrap();
    assert_eq!(before.get(left.0, left.1), Color::ZERO);
    assert_ne!(before.get(right.0, right.1), Color::ZERO);

    // Move it to the left; only visible once the cache is rebuilt
    let mesh = scene.mesh_mut(id).unwrap();
    mesh.translate(Vec3::new(-4.0, 0.0, 0.0));
    let stale = render_frame(&scene, &config, WIDTH, HEIGHT).unwrap();
    assert_eq!(stale, before);

    scene.mesh_mut(id).unwrap().update_transforms();
    let after = render_frame(&scene, &config, WIDTH, HEIGHT).unwrap();
    assert_ne!(after.get(left.0, left.1), Color::ZERO);
    assert_eq!(after.get(right.0, right.1), Color::ZERO);
}

#[test]
fn test_config_from_json() {
    let json = r#"{
        "lighting_mode": "observed_area",
        "shadows": false,
        "partition": "work_stealing",
        "workers": 4
    }"#;

    let config: RenderConfig = serde_json::from_str(json).unwrap();
    assert_eq!(config.lighting_mode, LightingMode::ObservedArea);
    assert!(!config.shadows);
    assert_eq!(config.partition, Partition::WorkStealing);
    assert_eq!(config.workers, Some(4));
    assert_eq!(config.background, Color::ZERO);

    let round_trip: RenderConfig =
        serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
    assert_eq!(round_trip, config);
}
