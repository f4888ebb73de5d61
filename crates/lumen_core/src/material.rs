//! Material trait and the built-in reflectance models.

use crate::hit::HitRecord;
use lumen_math::{Color, Vec3};
use std::f32::consts::PI;

/// Trait for materials that describe how a surface reflects light.
pub trait Material: Send + Sync {
    /// Evaluate the BRDF at a hit.
    ///
    /// - `light_dir`: unit vector from the hit point towards the light
    /// - `view_dir`: unit vector from the hit point towards the viewer
    fn shade(&self, hit: &HitRecord, light_dir: Vec3, view_dir: Vec3) -> Color;
}

/// Flat color, independent of lighting geometry.
#[derive(Debug, Clone, Copy)]
pub struct SolidColor {
    color: Color,
}

impl SolidColor {
    pub fn new(color: Color) -> Self {
        Self { color }
    }
}

impl Material for SolidColor {
    fn shade(&self, _hit: &HitRecord, _light_dir: Vec3, _view_dir: Vec3) -> Color {
        self.color
    }
}

/// Lambertian (diffuse) material.
#[derive(Debug, Clone, Copy)]
pub struct Lambert {
    diffuse_color: Color,
    diffuse_reflectance: f32,
}

impl Lambert {
    /// Create a new Lambert material.
    ///
    /// - `diffuse_color`: albedo
    /// - `diffuse_reflectance`: kd, scales the albedo
    pub fn new(diffuse_color: Color, diffuse_reflectance: f32) -> Self {
        Self {
            diffuse_color,
            diffuse_reflectance,
        }
    }
}

impl Material for Lambert {
    fn shade(&self, _hit: &HitRecord, _light_dir: Vec3, _view_dir: Vec3) -> Color {
        brdf::lambert(self.diffuse_reflectance, self.diffuse_color)
    }
}

/// Lambert diffuse plus a Phong specular lobe.
#[derive(Debug, Clone, Copy)]
pub struct LambertPhong {
    diffuse_color: Color,
    diffuse_reflectance: f32,
    specular_reflectance: f32,
    phong_exponent: f32,
}

impl LambertPhong {
    pub fn new(
        diffuse_color: Color,
        diffuse_reflectance: f32,
        specular_reflectance: f32,
        phong_exponent: f32,
    ) -> Self {
        Self {
            diffuse_color,
            diffuse_reflectance,
            specular_reflectance,
            phong_exponent,
        }
    }
}

impl Material for LambertPhong {
    fn shade(&self, hit: &HitRecord, light_dir: Vec3, view_dir: Vec3) -> Color {
        brdf::lambert(self.diffuse_reflectance, self.diffuse_color)
            + brdf::phong(
                self.specular_reflectance,
                self.phong_exponent,
                light_dir,
                view_dir,
                hit.normal,
            )
    }
}

/// Microfacet material: GGX distribution, Schlick Fresnel and Smith
/// geometry term, with a Lambert base for dielectrics.
#[derive(Debug, Clone, Copy)]
pub struct CookTorrance {
    albedo: Color,
    metalness: f32,
    roughness: f32,
}

impl CookTorrance {
    /// Create a new Cook-Torrance material.
    ///
    /// - `albedo`: diffuse color for dielectrics, reflectance for metals
    /// - `metalness`: 0 = dielectric, anything else = metal
    /// - `roughness`: 0 = smooth/glossy, 1 = rough
    pub fn new(albedo: Color, metalness: f32, roughness: f32) -> Self {
        Self {
            albedo,
            metalness,
            roughness: roughness.clamp(0.0, 1.0),
        }
    }

    fn is_metal(&self) -> bool {
        self.metalness > 0.0
    }
}

impl Material for CookTorrance {
    fn shade(&self, hit: &HitRecord, light_dir: Vec3, view_dir: Vec3) -> Color {
        let n = hit.normal;
        let half_vector = (view_dir + light_dir).normalize_or_zero();
        let alpha = self.roughness * self.roughness;

        // Base reflectivity: dielectrics reflect ~4% at normal incidence
        let f0 = if self.is_metal() {
            self.albedo
        } else {
            Color::splat(0.04)
        };

        let fresnel = brdf::fresnel_schlick(half_vector, view_dir, f0);
        let distribution = brdf::normal_distribution_ggx(n, half_vector, alpha);
        let geometry = brdf::geometry_smith(n, view_dir, light_dir, alpha);

        let denominator = 4.0 * n.dot(view_dir).max(1e-4) * n.dot(light_dir).max(1e-4);
        let specular = fresnel * (distribution * geometry / denominator);

        let diffuse = if self.is_metal() {
            Color::ZERO
        } else {
            brdf::lambert_colored(Color::ONE - fresnel, self.albedo)
        };

        diffuse + specular
    }
}

/// Reflectance building blocks shared by the materials above.
pub mod brdf {
    use super::*;

    /// Lambert diffuse: `cd * kd / pi`.
    #[inline]
    pub fn lambert(kd: f32, cd: Color) -> Color {
        cd * kd / PI
    }

    /// Lambert diffuse with a per-channel reflectance.
    #[inline]
    pub fn lambert_colored(kd: Color, cd: Color) -> Color {
        cd * kd / PI
    }

    /// Phong specular: `ks * max(r . v, 0)^exp` where `r` is the light
    /// direction mirrored about the normal.
    #[inline]
    pub fn phong(ks: f32, exp: f32, light_dir: Vec3, view_dir: Vec3, normal: Vec3) -> Color {
        let reflected = reflect(-light_dir, normal);
        let cos_alpha = reflected.dot(view_dir).max(0.0);
        Color::splat(ks * cos_alpha.powf(exp))
    }

    /// Schlick's approximation of the Fresnel term.
    #[inline]
    pub fn fresnel_schlick(half_vector: Vec3, view_dir: Vec3, f0: Color) -> Color {
        let cos_theta = half_vector.dot(view_dir).clamp(0.0, 1.0);
        f0 + (Color::ONE - f0) * (1.0 - cos_theta).powi(5)
    }

    /// Trowbridge-Reitz GGX normal distribution.
    #[inline]
    pub fn normal_distribution_ggx(normal: Vec3, half_vector: Vec3, alpha: f32) -> f32 {
        let a2 = alpha * alpha;
        let n_dot_h = normal.dot(half_vector).max(0.0);
        let denom = n_dot_h * n_dot_h * (a2 - 1.0) + 1.0;
        a2 / (PI * denom * denom).max(f32::MIN_POSITIVE)
    }

    /// Schlick-GGX geometry term for one direction, direct lighting remap
    /// `k = (alpha + 1)^2 / 8`.
    #[inline]
    pub fn geometry_schlick_ggx(normal: Vec3, dir: Vec3, alpha: f32) -> f32 {
        let k = (alpha + 1.0) * (alpha + 1.0) / 8.0;
        let n_dot_d = normal.dot(dir).max(0.0);
        n_dot_d / (n_dot_d * (1.0 - k) + k)
    }

    /// Smith geometry term: shadowing times masking.
    #[inline]
    pub fn geometry_smith(normal: Vec3, view_dir: Vec3, light_dir: Vec3, alpha: f32) -> f32 {
        geometry_schlick_ggx(normal, view_dir, alpha) * geometry_schlick_ggx(normal, light_dir, alpha)
    }

    /// Reflect a vector about a normal.
    #[inline]
    pub fn reflect(v: Vec3, n: Vec3) -> Vec3 {
        v - 2.0 * v.dot(n) * n
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use lumen_math::color::colors;

    fn hit_facing_up() -> HitRecord {
        HitRecord::new(Vec3::ZERO, Vec3::Y, 0, 1.0)
    }

    #[test]
    fn test_solid_color() {
        let material = SolidColor::new(colors::RED);
        let color = material.shade(&hit_facing_up(), Vec3::Y, Vec3::X);
        assert_eq!(color, colors::RED);
    }

    #[test]
    fn test_lambert_is_view_independent() {
        let material = Lambert::new(colors::WHITE, 1.0);
        let a = material.shade(&hit_facing_up(), Vec3::Y, Vec3::Y);
        let b = material.shade(&hit_facing_up(), Vec3::X, Vec3::new(0.0, 0.5, 0.5).normalize());

        assert_eq!(a, b);
        assert!((a.x - 1.0 / PI).abs() < 1e-6);
    }

    #[test]
    fn test_phong_peaks_at_mirror_direction() {
        let material = LambertPhong::new(colors::BLACK, 0.0, 0.5, 60.0);
        let light = Vec3::new(1.0, 1.0, 0.0).normalize();
        let mirror = Vec3::new(-1.0, 1.0, 0.0).normalize();
        let off = Vec3::new(0.0, 1.0, 1.0).normalize();

        let peak = material.shade(&hit_facing_up(), light, mirror);
        let away = material.shade(&hit_facing_up(), light, off);

        assert!((peak.x - 0.5).abs() < 1e-4);
        assert!(away.x < 0.01);
    }

    #[test]
    fn test_cook_torrance_metal_has_no_diffuse() {
        // Light and view along the normal with roughness 1: F = f0, D = 1/pi,
        // G = 1 and the denominator is 4, so specular = f0 / (4 pi).
        let albedo = Color::splat(0.5);
        let metal = CookTorrance::new(albedo, 1.0, 1.0).shade(&hit_facing_up(), Vec3::Y, Vec3::Y);

        let expected = albedo / (4.0 * PI);
        assert!((metal - expected).length() < 1e-6, "metal = {metal:?}");
    }

    #[test]
    fn test_cook_torrance_dielectric_reflects_four_percent() {
        let albedo = Color::splat(0.5);
        let plastic = CookTorrance::new(albedo, 0.0, 1.0).shade(&hit_facing_up(), Vec3::Y, Vec3::Y);

        // specular 0.04 / (4 pi) plus diffuse (1 - 0.04) * albedo / pi
        let specular = Color::splat(0.04 / (4.0 * PI));
        let diffuse = Color::splat(0.96) * albedo / PI;
        assert!((plastic - (specular + diffuse)).length() < 1e-6, "plastic = {plastic:?}");
    }

    #[test]
    fn test_cook_torrance_smooth_highlight_is_sharper() {
        let smooth = CookTorrance::new(Color::splat(0.75), 0.0, 0.1);
        let rough = CookTorrance::new(Color::splat(0.75), 0.0, 1.0);
        let light = Vec3::new(1.0, 1.0, 0.0).normalize();
        let mirror = Vec3::new(-1.0, 1.0, 0.0).normalize();

        let smooth_peak = smooth.shade(&hit_facing_up(), light, mirror);
        let rough_peak = rough.shade(&hit_facing_up(), light, mirror);

        assert!(smooth_peak.x > rough_peak.x);
    }

    #[test]
    fn test_fresnel_at_normal_incidence() {
        let f0 = Color::splat(0.04);
        let f = brdf::fresnel_schlick(Vec3::Y, Vec3::Y, f0);
        assert!((f - f0).length() < 1e-6);
    }

    #[test]
    fn test_reflect() {
        let r = brdf::reflect(Vec3::new(1.0, -1.0, 0.0), Vec3::Y);
        assert_eq!(r, Vec3::new(1.0, 1.0, 0.0));
    }
}
