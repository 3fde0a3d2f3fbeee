//! Draw colors and sizes carried alongside the bodies
//!
//! The physics core never reads any of this. It is configuration handed
//! through to whatever presentation layer draws the bodies, keyed by the same
//! index as the body it describes.

use crate::rng::RenderingRng;
use rand::Rng;
use serde::{Deserialize, Serialize};

/// 8-bit sRGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const YELLOW: Color = Color::rgb(255, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const CYAN: Color = Color::rgb(0, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Convert from hue (degrees), saturation and lightness (both 0..=1)
    pub fn hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let hue = hue.rem_euclid(360.0);
        let saturation = saturation.clamp(0.0, 1.0);
        let lightness = lightness.clamp(0.0, 1.0);

        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let sector = hue / 60.0;
        let x = chroma * (1.0 - (sector.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match sector as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = lightness - chroma / 2.0;

        let channel = |value: f32| ((value + m) * 255.0).round().clamp(0.0, 255.0) as u8;
        Self::rgb(channel(r), channel(g), channel(b))
    }
}

impl Default for Color {
    fn default() -> Self {
        Self::WHITE
    }
}

/// How a body should be drawn
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Appearance {
    pub color: Color,
    /// Radius of the drawn marker in screen units
    pub draw_size: f32,
}

impl Appearance {
    pub const fn new(color: Color, draw_size: f32) -> Self {
        Self { color, draw_size }
    }
}

impl Default for Appearance {
    fn default() -> Self {
        Self::new(Color::WHITE, 2.0)
    }
}

/// A saturated color with a random hue
pub fn random_rainbow_color(rng: &mut RenderingRng) -> Color {
    let hue = rng.random_range(0.0..360.0);
    let saturation = rng.random_range(0.8..=1.0);
    let lightness = rng.random_range(0.4..=0.6);

    Color::hsl(hue, saturation, lightness)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hsl_primaries() {
        assert_eq!(Color::hsl(0.0, 1.0, 0.5), Color::RED);
        assert_eq!(Color::hsl(120.0, 1.0, 0.5), Color::rgb(0, 255, 0));
        assert_eq!(Color::hsl(240.0, 1.0, 0.5), Color::BLUE);
        assert_eq!(Color::hsl(180.0, 1.0, 0.5), Color::CYAN);
        assert_eq!(Color::hsl(60.0, 1.0, 0.5), Color::YELLOW);
    }

    #[test]
    fn test_hsl_greys() {
        assert_eq!(Color::hsl(200.0, 0.0, 1.0), Color::WHITE);
        assert_eq!(Color::hsl(200.0, 0.0, 0.0), Color::rgb(0, 0, 0));
    }

    #[test]
    fn test_hue_wraps() {
        assert_eq!(Color::hsl(360.0, 1.0, 0.5), Color::hsl(0.0, 1.0, 0.5));
        assert_eq!(Color::hsl(-120.0, 1.0, 0.5), Color::hsl(240.0, 1.0, 0.5));
    }

    #[test]
    fn test_random_rainbow_color_is_seeded() {
        let mut rng1 = RenderingRng::from_seed(7);
        let mut rng2 = RenderingRng::from_seed(7);

        for _ in 0..20 {
            assert_eq!(random_rainbow_color(&mut rng1), random_rainbow_color(&mut rng2));
        }
    }

    #[test]
    fn test_random_rainbow_color_is_not_grey() {
        let mut rng = RenderingRng::from_seed(99);
        for _ in 0..100 {
            let color = random_rainbow_color(&mut rng);
            let max = color.r.max(color.g).max(color.b);
            let min = color.r.min(color.g).min(color.b);
            assert!(max - min > 100, "Expected a saturated color, got {color:?}");
        }
    }
}
