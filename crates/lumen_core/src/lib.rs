//! Lumen Core - scene data model for the Lumen ray tracer.
//!
//! This crate provides:
//!
//! - **Geometry**: `Sphere`, `Plane`, `Triangle`, `TriangleMesh`
//! - **Lighting**: point and directional `Light`s
//! - **Materials**: the `Material` shading contract and built-in BRDFs
//! - **Scene**: the container the renderer queries, plus the `Camera`
//!
//! # Example
//!
//! ```
//! use lumen_core::{Lambert, Scene};
//! use lumen_math::{color::colors, Vec3};
//!
//! let mut scene = Scene::new("example");
//! let white = scene.add_material(Lambert::new(colors::WHITE, 1.0))?;
//! scene.add_sphere(Vec3::new(0.0, 0.0, 5.0), 1.0, white);
//! scene.add_point_light(Vec3::new(0.0, 0.0, 2.0), 10.0, colors::WHITE);
//! scene.validate()?;
//! # Ok::<(), lumen_core::SceneError>(())
//! ```

pub mod camera;
pub mod error;
pub mod hit;
pub mod light;
pub mod material;
pub mod mesh;
pub mod primitive;
pub mod scene;

// Re-export commonly used types
pub use camera::Camera;
pub use error::{SceneError, SceneResult};
pub use hit::{HitRecord, MaterialIndex};
pub use light::{Light, LightType};
pub use material::{CookTorrance, Lambert, LambertPhong, Material, SolidColor};
pub use mesh::{Transform, TriangleMesh};
pub use primitive::{CullMode, Plane, Sphere, Triangle};
pub use scene::Scene;
