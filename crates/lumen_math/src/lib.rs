// Re-export glam for convenience
pub use glam::*;

// Lumen math types
mod aabb;
pub mod color;
mod interval;
mod ray;
mod transform;

pub use aabb::Aabb;
pub use color::{color_to_rgb8, max_to_one, Color};
pub use interval::Interval;
pub use ray::{Ray, RAY_EPSILON};
pub use transform::Mat4Ext;
