//! Direct lighting at a surface hit.
//!
//! Every light is evaluated independently: a back-facing light is skipped,
//! an occluded light is skipped when shadows are on, and whatever is left
//! contributes the term selected by the [`LightingMode`].

use crate::query::SceneQuery;
use crate::RenderConfig;
use lumen_core::{HitRecord, Light, Material, Scene};
use lumen_math::{Color, Ray, Vec3, RAY_EPSILON};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Which lighting term to output. Useful for debugging a scene one
/// factor at a time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LightingMode {
    /// Cosine between the normal and the light direction, in grayscale
    ObservedArea,
    /// Incoming radiance, attenuated for point lights
    Radiance,
    /// Material response only
    Brdf,
    /// `radiance * brdf * observed_area`
    #[default]
    Combined,
}

impl LightingMode {
    /// Cycle through the modes in declaration order, wrapping around.
    pub fn next(self) -> Self {
        match self {
            LightingMode::ObservedArea => LightingMode::Radiance,
            LightingMode::Radiance => LightingMode::Brdf,
            LightingMode::Brdf => LightingMode::Combined,
            LightingMode::Combined => LightingMode::ObservedArea,
        }
    }
}

impl fmt::Display for LightingMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            LightingMode::ObservedArea => "observed area",
            LightingMode::Radiance => "radiance",
            LightingMode::Brdf => "BRDF",
            LightingMode::Combined => "combined",
        };
        f.write_str(name)
    }
}

/// Sum of all light contributions at `hit`, seen along `ray`.
///
/// The result is unclamped; channels can exceed 1.
pub fn shade(scene: &Scene, hit: &HitRecord, ray: &Ray, config: &RenderConfig) -> Color {
    let material = scene.material(hit.material_index);
    let view_dir = -ray.direction;

    scene
        .lights()
        .iter()
        .map(|light| light_contribution(scene, material, hit, view_dir, light, config))
        .fold(Color::ZERO, |acc, c| acc + c)
}

fn light_contribution(
    scene: &Scene,
    material: &dyn Material,
    hit: &HitRecord,
    view_dir: Vec3,
    light: &Light,
    config: &RenderConfig,
) -> Color {
    let (light_dir, distance) = light.direction_and_distance(hit.point);

    let observed_area = hit.normal.dot(light_dir);
    if observed_area < 0.0 {
        return Color::ZERO;
    }

    if config.shadows {
        let shadow_ray = Ray::with_bounds(hit.point, light_dir, RAY_EPSILON, distance);
        if scene.any_hit(&shadow_ray) {
            return Color::ZERO;
        }
    }

    match config.lighting_mode {
        LightingMode::ObservedArea => Color::splat(observed_area),
        LightingMode::Radiance => light.radiance(hit.point),
        LightingMode::Brdf => material.shade(hit, light_dir, view_dir),
        LightingMode::Combined => {
            light.radiance(hit.point) * material.shade(hit, light_dir, view_dir) * observed_area
        }
    }
}
