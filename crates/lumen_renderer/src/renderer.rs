//! Per-pixel ray tracing: configuration, primary rays and the output buffer.
//!
//! One primary ray through the center of each pixel, a closest-hit query,
//! direct lighting from every light and a final clamp that keeps hue.

use crate::dispatch::Partition;
use crate::query::SceneQuery;
use crate::shading::{shade, LightingMode};
use lumen_core::{Camera, Scene};
use lumen_math::{color_to_rgb8, max_to_one, Color, Ray, Vec3};
use serde::{Deserialize, Serialize};

/// Render configuration.
///
/// Passed explicitly to every frame so two renders with different settings
/// can run side by side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RenderConfig {
    /// Which lighting term ends up in the image
    pub lighting_mode: LightingMode,
    /// Cast shadow rays towards each light
    pub shadows: bool,
    /// Color for pixels whose ray hits nothing
    pub background: Color,
    /// How pixels are split across worker threads
    pub partition: Partition,
    /// Number of chunks for [`Partition::Chunked`]. `None` uses the size
    /// of the rayon thread pool.
    pub workers: Option<usize>,
}

impl Default for RenderConfig {
    fn default() -> Self {
        Self {
            lighting_mode: LightingMode::Combined,
            shadows: true,
            background: Color::ZERO,
            partition: Partition::Chunked,
            workers: None,
        }
    }
}

impl RenderConfig {
    pub fn with_lighting_mode(mut self, lighting_mode: LightingMode) -> Self {
        self.lighting_mode = lighting_mode;
        self
    }

    pub fn with_shadows(mut self, shadows: bool) -> Self {
        self.shadows = shadows;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn with_partition(mut self, partition: Partition) -> Self {
        self.partition = partition;
        self
    }

    pub fn with_workers(mut self, workers: usize) -> Self {
        self.workers = Some(workers);
        self
    }

    /// Advance to the next lighting mode.
    pub fn cycle_lighting_mode(&mut self) {
        self.lighting_mode = self.lighting_mode.next();
    }

    pub fn toggle_shadows(&mut self) {
        self.shadows = !self.shadows;
    }
}

/// Generates the primary ray for any pixel of a `width` x `height` frame.
///
/// The image plane sits at unit distance along the camera's forward axis
/// and spans `[-aspect * fov, aspect * fov]` horizontally and `[-fov, fov]`
/// vertically, where `fov` is the half-angle tangent.
#[derive(Debug, Clone, Copy)]
pub struct PrimaryRays {
    origin: Vec3,
    forward: Vec3,
    up: Vec3,
    right: Vec3,
    fov: f32,
    aspect_ratio: f32,
    width: u32,
    height: u32,
}

impl PrimaryRays {
    pub fn new(camera: &Camera, width: u32, height: u32) -> Self {
        Self {
            origin: camera.origin,
            forward: camera.forward,
            up: camera.up,
            right: camera.right,
            fov: camera.fov_scale(),
            aspect_ratio: width as f32 / height as f32,
            width,
            height,
        }
    }

    /// Ray through the center of the pixel at row-major `index`.
    pub fn ray(&self, index: usize) -> Ray {
        let px = (index % self.width as usize) as f32;
        let py = (index / self.width as usize) as f32;

        let rx = px + 0.5;
        let ry = py + 0.5;

        let cx = (2.0 * rx / self.width as f32 - 1.0) * self.aspect_ratio * self.fov;
        let cy = (1.0 - 2.0 * ry / self.height as f32) * self.fov;

        let direction = (cx * self.right + cy * self.up + self.forward).normalize();
        Ray::new(self.origin, direction)
    }
}

/// Everything needed to compute one pixel, shared read-only by all workers
/// during a frame.
pub struct PixelTracer<'a> {
    scene: &'a Scene,
    config: &'a RenderConfig,
    rays: PrimaryRays,
}

impl<'a> PixelTracer<'a> {
    pub fn new(scene: &'a Scene, config: &'a RenderConfig, width: u32, height: u32) -> Self {
        Self {
            scene,
            config,
            rays: PrimaryRays::new(&scene.camera, width, height),
        }
    }

    /// Final color of the pixel at row-major `index`, with no channel
    /// above 1.
    pub fn render_pixel(&self, index: usize) -> Color {
        let ray = self.rays.ray(index);
        let hit = self.scene.closest_hit(&ray);

        let color = if hit.did_hit {
            shade(self.scene, &hit, &ray, self.config)
        } else {
            self.config.background
        };

        max_to_one(color)
    }
}

/// Row-major frame of linear colors.
#[derive(Debug, Clone, PartialEq)]
pub struct FrameBuffer {
    pub width: u32,
    pub height: u32,
    pub pixels: Vec<Color>,
}

impl FrameBuffer {
    /// Create a new buffer filled with black.
    pub fn new(width: u32, height: u32) -> Self {
        Self {
            width,
            height,
            pixels: vec![Color::ZERO; width as usize * height as usize],
        }
    }

    /// Get the pixel at (x, y).
    pub fn get(&self, x: u32, y: u32) -> Color {
        self.pixels[y as usize * self.width as usize + x as usize]
    }

    /// Set the pixel at (x, y).
    pub fn set(&mut self, x: u32, y: u32, color: Color) {
        self.pixels[y as usize * self.width as usize + x as usize] = color;
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    /// Pack to 8-bit RGB, row-major, three bytes per pixel.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.pixels.len() * 3);
        for color in &self.pixels {
            bytes.extend_from_slice(&color_to_rgb8(*color));
        }
        bytes
    }
}
