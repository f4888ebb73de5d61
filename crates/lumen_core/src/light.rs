//! Point and directional lights.

use lumen_math::{Color, Vec3};

/// The kind of light, carrying its placement.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LightType {
    /// Emits from a position and falls off with the inverse square distance.
    Point { origin: Vec3 },
    /// Parallel light travelling along `direction`, no falloff.
    Directional { direction: Vec3 },
}

/// A light source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Light {
    pub kind: LightType,
    pub intensity: f32,
    pub color: Color,
}

impl Light {
    /// Create a point light.
    pub fn point(origin: Vec3, intensity: f32, color: Color) -> Self {
        Self {
            kind: LightType::Point { origin },
            intensity,
            color,
        }
    }

    /// Create a directional light. The direction is normalized.
    pub fn directional(direction: Vec3, intensity: f32, color: Color) -> Self {
        Self {
            kind: LightType::Directional {
                direction: direction.normalize(),
            },
            intensity,
            color,
        }
    }

    /// Unit direction from `target` to the light and the distance to it.
    ///
    /// Directional lights are treated as infinitely far away and report a
    /// distance of `f32::MAX`.
    pub fn direction_and_distance(&self, target: Vec3) -> (Vec3, f32) {
        match self.kind {
            LightType::Point { origin } => {
                let to_light = origin - target;
                let distance = to_light.length();
                (to_light / distance, distance)
            }
            LightType::Directional { direction } => (-direction, f32::MAX),
        }
    }

    /// Radiance arriving at `target` (ignoring occlusion).
    pub fn radiance(&self, target: Vec3) -> Color {
        match self.kind {
            LightType::Point { origin } => {
                let distance_squared = (origin - target).length_squared();
                self.color * (self.intensity / distance_squared)
            }
            LightType::Directional { .. } => self.color * self.intensity,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_point_light_inverse_square() {
        let light = Light::point(Vec3::new(0.0, 2.0, 0.0), 8.0, Color::ONE);

        assert_eq!(light.radiance(Vec3::ZERO), Color::splat(2.0));
        assert_eq!(light.radiance(Vec3::new(0.0, -2.0, 0.0)), Color::splat(0.5));
    }

    #[test]
    fn test_point_light_direction() {
        let light = Light::point(Vec3::new(0.0, 3.0, 4.0), 1.0, Color::ONE);
        let (dir, dist) = light.direction_and_distance(Vec3::ZERO);

        assert!((dist - 5.0).abs() < 1e-6);
        assert!((dir - Vec3::new(0.0, 0.6, 0.8)).length() < 1e-6);
    }

    #[test]
    fn test_directional_light_no_falloff() {
        let light = Light::directional(Vec3::new(0.0, -2.0, 0.0), 3.0, Color::new(1.0, 0.5, 0.0));

        assert_eq!(light.radiance(Vec3::ZERO), Color::new(3.0, 1.5, 0.0));
        assert_eq!(light.radiance(Vec3::splat(1000.0)), Color::new(3.0, 1.5, 0.0));

        let (dir, dist) = light.direction_and_distance(Vec3::ZERO);
        assert_eq!(dir, Vec3::Y);
        assert_eq!(dist, f32::MAX);
    }
}
