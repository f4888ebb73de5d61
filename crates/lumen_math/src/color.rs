//! Linear RGB color helpers.

use crate::{Interval, Vec3};

/// Color type alias (linear RGB, displayable range 0-1)
pub type Color = Vec3;

/// Named colors used by scenes and the default material.
pub mod colors {
    use super::Color;

    pub const RED: Color = Color::new(1.0, 0.0, 0.0);
    pub const GREEN: Color = Color::new(0.0, 1.0, 0.0);
    pub const BLUE: Color = Color::new(0.0, 0.0, 1.0);
    pub const YELLOW: Color = Color::new(1.0, 1.0, 0.0);
    pub const CYAN: Color = Color::new(0.0, 1.0, 1.0);
    pub const MAGENTA: Color = Color::new(1.0, 0.0, 1.0);
    pub const WHITE: Color = Color::new(1.0, 1.0, 1.0);
    pub const BLACK: Color = Color::new(0.0, 0.0, 0.0);
    pub const GRAY: Color = Color::new(0.5, 0.5, 0.5);
}

/// Rescale a color so its brightest channel is at most 1.0.
///
/// Dividing every channel by the maximum keeps the hue intact, unlike
/// clamping channels independently.
#[inline]
pub fn max_to_one(color: Color) -> Color {
    let max = color.max_element();
    if max > 1.0 {
        color / max
    } else {
        color
    }
}

/// Convert a single linear channel to 8 bits.
///
/// Values are clamped to [0, 1] and rounded to the nearest integer
/// (halves round away from zero).
#[inline]
pub fn channel_to_u8(value: f32) -> u8 {
    (Interval::UNIT.clamp(value) * 255.0).round() as u8
}

/// Convert a color to 8-bit RGB.
pub fn color_to_rgb8(color: Color) -> [u8; 3] {
    [
        channel_to_u8(color.x),
        channel_to_u8(color.y),
        channel_to_u8(color.z),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_max_to_one_preserves_ratios() {
        let color = Color::new(4.0, 2.0, 1.0);
        let clamped = max_to_one(color);

        assert_eq!(clamped.max_element(), 1.0);
        assert!((clamped.y / clamped.x - 0.5).abs() < 1e-6);
        assert!((clamped.z / clamped.x - 0.25).abs() < 1e-6);
    }

    #[test]
    fn test_max_to_one_leaves_displayable_colors() {
        let color = Color::new(0.2, 1.0, 0.7);
        assert_eq!(max_to_one(color), color);
    }

    #[test]
    fn test_channel_to_u8_rounding() {
        assert_eq!(channel_to_u8(0.0), 0);
        assert_eq!(channel_to_u8(1.0), 255);
        assert_eq!(channel_to_u8(0.5), 128);
        assert_eq!(channel_to_u8(-0.3), 0);
        assert_eq!(channel_to_u8(3.0), 255);
    }

    #[test]
    fn test_color_to_rgb8() {
        assert_eq!(color_to_rgb8(colors::MAGENTA), [255, 0, 255]);
    }
}
