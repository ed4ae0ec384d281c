//! Particles as seen by the host renderer.

use crate::gradient::Rgb;
use glam::Vec2;

/// Side of a particle square in pixels at scale 1.
pub const PARTICLE_SIZE: f32 = 32.0;

/// Opacity of a freshly created particle.
pub const DEFAULT_OPACITY: f32 = 0.5;

/// How a particle gets its fill color.
///
/// Decided when the particle is created; the frame step only writes colors
/// to `Gradient` particles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tint {
    /// Colored by the ring gradient every frame.
    #[default]
    Gradient,
    /// Keeps the color it was created with.
    Fixed,
}

/// Visual state of one particle.
#[derive(Debug, Clone, PartialEq)]
pub struct Particle {
    /// Center position in screen pixels.
    pub position: Vec2,
    /// Spin in degrees, always in `[0, 360)`.
    pub angle: f32,
    /// Size multiplier.
    pub scale: f32,
    pub opacity: f32,
    pub color: Rgb,
    /// Hidden particles are kept in the pool but must not be drawn.
    pub visible: bool,
    pub tint: Tint,
}

impl Particle {
    /// A white, half-transparent particle at `position`.
    pub fn new(position: Vec2, tint: Tint) -> Self {
        Self {
            position,
            angle: 0.0,
            scale: 1.0,
            opacity: DEFAULT_OPACITY,
            color: Rgb::WHITE,
            visible: true,
            tint,
        }
    }

    /// Advance the spin by `degrees`, wrapping into `[0, 360)`.
    pub fn rotate(&mut self, degrees: f32) {
        let angle = (self.angle + degrees).rem_euclid(360.0);
        // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
        self.angle = if angle >= 360.0 { 0.0 } else { angle };
    }

    /// GPU-ready copy of this particle.
    pub fn instance(&self) -> ParticleInstance {
        ParticleInstance {
            position: self.position.to_array(),
            angle: self.angle.to_radians(),
            scale: self.scale,
            color: self.color.to_rgba(self.opacity),
        }
    }
}

/// Per-instance vertex data for hosts that draw particles with instancing.
///
/// Layout matches a WGSL struct of `vec2<f32>, f32, f32, vec4<f32>`.
#[repr(C)]
#[derive(Debug, Clone, Copy, PartialEq, Default, bytemuck::Pod, bytemuck::Zeroable)]
pub struct ParticleInstance {
    pub position: [f32; 2],
    /// Rotation in radians.
    pub angle: f32,
    pub scale: f32,
    /// RGBA in `0.0..=1.0`, alpha is the particle opacity.
    pub color: [f32; 4],
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    #[test]
    fn test_rotate_wraps() {
        let mut p = Particle::new(Vec2::ZERO, Tint::Gradient);
        for _ in 0..12 {
            p.rotate(30.0);
            assert!(p.angle < 360.0);
        }
        assert_eq!(p.angle, 0.0);
    }

    #[test]
    fn test_angle_wrap_random_steps() {
        let mut rng = StdRng::seed_from_u64(3);
        let mut p = Particle::new(Vec2::ZERO, Tint::Gradient);
        for _ in 0..10_000 {
            p.rotate(rng.gen_range(-720.0..720.0));
            assert!((0.0..360.0).contains(&p.angle), "angle {}", p.angle);
        }
    }

    #[test]
    fn test_instance_layout() {
        assert_eq!(std::mem::size_of::<ParticleInstance>(), 32);

        let mut p = Particle::new(Vec2::new(3.0, 4.0), Tint::Fixed);
        p.angle = 180.0;
        let inst = p.instance();
        assert_eq!(inst.position, [3.0, 4.0]);
        assert!((inst.angle - std::f32::consts::PI).abs() < 1e-6);
        assert_eq!(inst.color, [1.0, 1.0, 1.0, DEFAULT_OPACITY]);

        let bytes: &[u8] = bytemuck::cast_slice(std::slice::from_ref(&inst));
        assert_eq!(bytes.len(), 32);
    }
}
