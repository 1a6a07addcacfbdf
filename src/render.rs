//! Color helpers for the rendering boundary.
//!
//! The core never draws; it hands the renderer pre-computed colors for
//! trajectory trails and pen strokes.

use serde::{Deserialize, Serialize};

/// An RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const GREEN: Self = Self::new(0, 255, 0);
    pub const BLUE: Self = Self::new(0, 0, 255);
    pub const RED: Self = Self::new(255, 0, 0);
    pub const CYAN: Self = Self::new(0, 255, 255);
    pub const MAGENTA: Self = Self::new(255, 0, 255);

    /// Create a new color.
    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Linear interpolation between two colors, `t` in [0, 1].
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let t = t.clamp(0.0, 1.0);
        let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
        Rgb::new(mix(self.r, other.r), mix(self.g, other.g), mix(self.b, other.b))
    }
}

/// Trail color for a trajectory segment at fade parameter `t`:
/// red at the oldest end, green at the newest.
pub fn trail_color(t: f32) -> Rgb {
    Rgb::RED.lerp(Rgb::GREEN, t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lerp_endpoints() {
        assert_eq!(Rgb::RED.lerp(Rgb::GREEN, 0.0), Rgb::RED);
        assert_eq!(Rgb::RED.lerp(Rgb::GREEN, 1.0), Rgb::GREEN);
    }

    #[test]
    fn trail_fades_red_to_green() {
        assert_eq!(trail_color(0.0), Rgb::new(255, 0, 0));
        assert_eq!(trail_color(1.0), Rgb::new(0, 255, 0));
        let mid = trail_color(0.5);
        assert_eq!(mid.r, 128);
        assert_eq!(mid.g, 128);
    }
}
