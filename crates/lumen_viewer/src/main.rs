mod cli;
mod scenes;

use anyhow::{bail, Context, Result};
use clap::Parser;
use cli::{Args, SceneKind};
use lumen_renderer::{render_into, FrameBuffer, RenderConfig};
use scenes::DemoScene;
use std::path::Path;
use std::time::Instant;

/// Application state
struct App {
    demo: DemoScene,
    config: RenderConfig,
    frame: FrameBuffer,
}

impl App {
    fn new(args: &Args) -> Result<Self> {
        let demo = match args.scene {
            SceneKind::Spheres => scenes::spheres()?,
            SceneKind::Reference => scenes::reference()?,
            SceneKind::Obj => {
                let Some(path) = &args.obj else {
                    bail!("--scene obj needs an --obj <path>");
                };
                scenes::obj(path)?
            }
        };

        let base = match &args.config {
            Some(path) => load_config(path)?,
            None => RenderConfig::default(),
        };
        let config = args.apply_overrides(base);

        log::info!(
            "Scene '{}': {:?}, {} animated meshes",
            demo.scene.name,
            demo.scene,
            demo.animated_mesh_count()
        );
        log::debug!("Render config: {:?}", config);

        Ok(Self {
            demo,
            config,
            frame: FrameBuffer::new(args.width, args.height),
        })
    }

    /// Advance the scene to `total_time` and render into the frame buffer.
    fn render(&mut self, total_time: f32) -> Result<()> {
        self.demo.update(total_time);
        render_into(&self.demo.scene, &self.config, &mut self.frame)
            .with_context(|| format!("Failed to render scene '{}'", self.demo.scene.name))
    }

    fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create {}", parent.display()))?;
        }

        image::save_buffer(
            path,
            &self.frame.to_rgb8(),
            self.frame.width,
            self.frame.height,
            image::ColorType::Rgb8,
        )
        .with_context(|| format!("Failed to write {}", path.display()))
    }
}

fn load_config(path: &Path) -> Result<RenderConfig> {
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read config {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Invalid config {}", path.display()))
}

fn main() -> Result<()> {
    let args = Args::parse();

    env_logger::Builder::from_default_env()
        .filter_level(args.log_level.into())
        .init();

    log::info!("Starting Lumen");

    if args.fps <= 0.0 {
        bail!("--fps must be positive, got {}", args.fps);
    }

    let mut app = App::new(&args)?;
    let start = Instant::now();

    for frame in 0..args.frames.max(1) {
        let total_time = frame as f32 / args.fps;
        app.render(total_time)?;

        let path = args.frame_path(frame);
        app.save(&path)?;
        log::info!("Saved frame {} to {}", frame, path.display());
    }

    log::info!("Finished {} frame(s) in {:.2?}", args.frames.max(1), start.elapsed());

    Ok(())
}
