//! Simple ray tracer example.
//!
//! Renders one lit sphere in front of a backdrop plane and saves it in PPM
//! format.

use lumen_core::{Camera, Lambert, LambertPhong, Scene};
use lumen_math::color::colors;
use lumen_renderer::{render_frame, FrameBuffer, RenderConfig, Vec3};
use std::fs::File;
use std::io::{BufWriter, Write};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("Lumen Ray Tracer - Simple Example");
    println!("=================================");

    let scene = build_scene()?;
    let config = RenderConfig::default();
    let (width, height) = (640, 480);

    println!("Rendering {}x{} ({} mode)...", width, height, config.lighting_mode);

    let start = std::time::Instant::now();
    let frame = render_frame(&scene, &config, width, height)?;
    println!("Rendered in {:?}", start.elapsed());

    let filename = "output.ppm";
    save_ppm(&frame, filename)?;
    println!("Saved to {}", filename);

    Ok(())
}

fn build_scene() -> Result<Scene, lumen_core::SceneError> {
    let mut scene = Scene::new("simple");
    scene.camera = Camera::new(Vec3::ZERO, 90.0);

    let glossy = scene.add_material(LambertPhong::new(colors::CYAN, 1.0, 0.6, 40.0))?;
    let backdrop = scene.add_material(Lambert::new(colors::GRAY, 1.0))?;

    scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, glossy);
    scene.add_plane(Vec3::new(0.0, 0.0, 20.0), Vec3::NEG_Z, backdrop);
    scene.add_point_light(Vec3::new(0.0, 2.0, 0.0), 40.0, colors::WHITE);
    scene.add_point_light(Vec3::new(4.0, 4.0, 10.0), 120.0, colors::YELLOW);

    Ok(scene)
}

fn save_ppm(frame: &FrameBuffer, filename: &str) -> std::io::Result<()> {
    let file = File::create(filename)?;
    let mut writer = BufWriter::new(file);

    writeln!(writer, "P6")?;
    writeln!(writer, "{} {}", frame.width, frame.height)?;
    writeln!(writer, "255")?;
    writer.write_all(&frame.to_rgb8())?;

    Ok(())
}
