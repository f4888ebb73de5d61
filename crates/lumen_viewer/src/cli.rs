use clap::{Parser, ValueEnum};
use log::LevelFilter;
use lumen_renderer::{LightingMode, Partition, RenderConfig};
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl From<LogLevel> for LevelFilter {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Error => LevelFilter::Error,
            LogLevel::Warn => LevelFilter::Warn,
            LogLevel::Info => LevelFilter::Info,
            LogLevel::Debug => LevelFilter::Debug,
            LogLevel::Trace => LevelFilter::Trace,
        }
    }
}

/// Built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum SceneKind {
    /// Solid-colored spheres in a box of planes
    Spheres,
    /// Cook-Torrance spheres and three triangles, one per cull mode
    Reference,
    /// A mesh loaded from `--obj`, in the reference room
    Obj,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum LightingArg {
    ObservedArea,
    Radiance,
    Brdf,
    Combined,
}

impl From<LightingArg> for LightingMode {
    fn from(arg: LightingArg) -> Self {
        match arg {
            LightingArg::ObservedArea => LightingMode::ObservedArea,
            LightingArg::Radiance => LightingMode::Radiance,
            LightingArg::Brdf => LightingMode::Brdf,
            LightingArg::Combined => LightingMode::Combined,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PartitionArg {
    Chunked,
    WorkStealing,
}

impl From<PartitionArg> for Partition {
    fn from(arg: PartitionArg) -> Self {
        match arg {
            PartitionArg::Chunked => Partition::Chunked,
            PartitionArg::WorkStealing => Partition::WorkStealing,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "lumen")]
#[command(about = "Render Lumen demo scenes to PNG")]
pub struct Args {
    /// Scene to render
    #[arg(long, value_enum, default_value = "reference")]
    pub scene: SceneKind,

    /// OBJ file for `--scene obj`
    #[arg(long)]
    pub obj: Option<PathBuf>,

    /// Image width in pixels
    #[arg(long, default_value = "640")]
    pub width: u32,

    /// Image height in pixels
    #[arg(long, default_value = "480")]
    pub height: u32,

    /// Number of frames to render. Meshes are animated between frames.
    #[arg(short, long, default_value = "1")]
    pub frames: u32,

    /// Animation frames per second of scene time
    #[arg(long, default_value = "24")]
    pub fps: f32,

    /// JSON render configuration; the flags below override it
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Lighting term to output
    #[arg(long, value_enum)]
    pub lighting: Option<LightingArg>,

    /// Disable shadow rays
    #[arg(long)]
    pub no_shadows: bool,

    /// Pixel partitioning strategy
    #[arg(long, value_enum)]
    pub partition: Option<PartitionArg>,

    /// Chunk count for the chunked partition
    #[arg(long)]
    pub workers: Option<usize>,

    /// Output file. Multi-frame renders insert the frame number before the
    /// extension.
    #[arg(short, long, default_value = "lumen.png")]
    pub output: PathBuf,

    /// Logging level
    #[arg(long, value_enum, default_value = "info")]
    pub log_level: LogLevel,
}

impl Args {
    /// Apply command-line overrides on top of a base configuration.
    pub fn apply_overrides(&self, mut config: RenderConfig) -> RenderConfig {
        if let Some(lighting) = self.lighting {
            config.lighting_mode = lighting.into();
        }
        if self.no_shadows {
            config.shadows = false;
        }
        if let Some(partition) = self.partition {
            config.partition = partition.into();
        }
        if let Some(workers) = self.workers {
            config.workers = Some(workers);
        }
        config
    }

    /// Output path for `frame`. Single-frame renders use `--output` as is.
    pub fn frame_path(&self, frame: u32) -> PathBuf {
        if self.frames <= 1 {
            return self.output.clone();
        }

        let stem = self
            .output
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_else(|| "lumen".to_string());
        let extension = self
            .output
            .extension()
            .map(|e| e.to_string_lossy().into_owned())
            .unwrap_or_else(|| "png".to_string());

        self.output
            .with_file_name(format!("{}_{:04}.{}", stem, frame, extension))
    }
}
