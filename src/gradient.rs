//! Time-rotated two-stop color gradient for the particle ring.
//!
//! Each frame the two gradient endpoints are recomputed from the shared
//! phase, then every particle picks its color between them by its distance
//! from the ring center.

use glam::Vec3;
use std::f32::consts::TAU;
use std::fmt;

/// An 8-bit RGB color.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Rgb {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Rgb {
    pub const WHITE: Rgb = Rgb::new(255, 255, 255);
    pub const BLACK: Rgb = Rgb::new(0, 0, 0);

    pub const fn new(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }

    /// Build a color from unclamped channel values, rounding to nearest.
    pub fn from_channels(channels: [f32; 3]) -> Self {
        let [r, g, b] = channels.map(to_channel);
        Self { r, g, b }
    }

    /// Linear interpolation, `t = 0` is `self`, `t = 1` is `other`.
    pub fn lerp(self, other: Rgb, t: f32) -> Rgb {
        let a = self.to_vec3();
        let b = other.to_vec3();
        let mixed = a.lerp(b, t) * 255.0;
        Rgb::from_channels(mixed.to_array())
    }

    /// Channels scaled to `0.0..=1.0`.
    pub fn to_vec3(self) -> Vec3 {
        Vec3::new(self.r as f32, self.g as f32, self.b as f32) / 255.0
    }

    /// Channels scaled to `0.0..=1.0` with the given alpha.
    pub fn to_rgba(self, alpha: f32) -> [f32; 4] {
        self.to_vec3().extend(alpha).to_array()
    }
}

impl fmt::Display for Rgb {
    /// CSS notation, e.g. `rgb(255,32,0)`.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgb({},{},{})", self.r, self.g, self.b)
    }
}

/// Round and clamp a channel into `0..=255`. NaN maps to 0.
fn to_channel(v: f32) -> u8 {
    if v.is_nan() {
        0
    } else {
        v.round().clamp(0.0, 255.0) as u8
    }
}

/// Two-stop gradient whose endpoints rotate with the animation phase.
///
/// For a phase `t`, `time = t * 2π * harmonic` and with `s = sin(time)`,
/// `c = cos(time)`:
///
/// ```text
/// start = [A·s + O, A·c + O, A·(1 - s) + O]
/// end   = [A·(1 - s) + O, A·c + O, A·s + O]
/// ```
///
/// `end` is `start` with red and blue swapped. Channels that leave
/// `0..=255` are clamped after interpolation.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorGradient {
    /// How many color cycles per phase cycle.
    pub harmonic: u32,
    /// Channel swing `A`.
    pub amplitude: f32,
    /// Channel center `O`.
    pub offset: f32,
}

impl Default for ColorGradient {
    fn default() -> Self {
        Self {
            harmonic: 2,
            amplitude: 64.0,
            offset: 191.0,
        }
    }
}

impl ColorGradient {
    /// Create a gradient cycling `harmonic` times per phase cycle.
    pub fn new(harmonic: u32) -> Self {
        Self {
            harmonic,
            ..Default::default()
        }
    }

    /// Unclamped endpoint channels for phase `t`.
    pub fn endpoints(&self, t: f32) -> ([f32; 3], [f32; 3]) {
        let time = t * TAU * self.harmonic as f32;
        let (s, c) = time.sin_cos();
        let (a, o) = (self.amplitude, self.offset);

        let start = [a * s + o, a * c + o, a * (1.0 - s) + o];
        let end = [start[2], start[1], start[0]];
        (start, end)
    }

    /// Color at distance `rate` (`0.0` = ring center) for phase `t`.
    pub fn sample(&self, rate: f32, t: f32) -> Rgb {
        let (start, end) = self.endpoints(t);
        Rgb::from_channels([
            (1.0 - rate) * start[0] + rate * end[0],
            (1.0 - rate) * start[1] + rate * end[1],
            (1.0 - rate) * start[2] + rate * end[2],
        ])
    }
}
