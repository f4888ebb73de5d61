//! Lumen Renderer - CPU ray tracing
//!
//! A direct-lighting ray tracer: one primary ray per pixel, closest-hit
//! against the scene's spheres, planes, triangles and meshes, then shadow
//! rays and material evaluation for every light. Frames are split across
//! threads with rayon.

mod dispatch;
mod error;
mod hittable;
mod mesh;
mod plane;
mod query;
mod renderer;
mod shading;
mod sphere;
mod triangle;

pub use dispatch::{partition_pixels, render_frame, render_into, Partition};
pub use error::{RenderError, RenderResult};
pub use hittable::Hittable;
pub use query::SceneQuery;
pub use renderer::{FrameBuffer, PixelTracer, PrimaryRays, RenderConfig};
pub use shading::{shade, LightingMode};

/// Re-export common math types from lumen_math
pub use lumen_math::{Color, Ray, Vec3};
