//! Per-frame animation of the particle ring.
//!
//! Every frame computes one shared phase `t` from the frame age and the
//! speed, then places each active particle `i` of `N`:
//!
//! ```text
//! t = sin(age / (fps * (1000 / speed)))
//! r = cos(2π · t · i)
//! θ = i / N · 2π
//! x = sin θ · r · radius      y = cos θ · r · radius
//! ```
//!
//! offset by the viewport center. Particles also spin by `(60 / fps) * 30`
//! degrees per frame and take their color from [`ColorGradient`] by their
//! distance from the center.
//!
//! # Example
//!
//! ```
//! use ringtoy::{AnimationEngine, Viewport};
//!
//! let mut engine = AnimationEngine::new(Viewport::new(1280.0, 720.0), 64);
//! engine.set_active_count(8);
//! engine.step(0, 60.0);
//!
//! let center = engine.viewport().center();
//! let first = &engine.particles()[0];
//! assert_eq!(first.position.x, center.x);
//! assert_eq!(first.position.y, center.y + engine.radius());
//! ```

use crate::curves;
use crate::gradient::ColorGradient;
use crate::particle::{Particle, ParticleInstance, Tint, DEFAULT_OPACITY, PARTICLE_SIZE};
use crate::pool::ParticlePool;
use glam::Vec2;
use std::f32::consts::TAU;

/// Frame rate the spin step is calibrated for.
const REFERENCE_FPS: f32 = 60.0;
/// Spin per frame at the reference frame rate, in degrees.
const SPIN_PER_FRAME: f32 = 30.0;

/// Size of the drawing area in pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub width: f32,
    pub height: f32,
}

impl Viewport {
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    #[inline]
    pub fn center(&self) -> Vec2 {
        Vec2::new(self.width, self.height) / 2.0
    }
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(1280.0, 720.0)
    }
}

/// The shared oscillation phase for a frame.
///
/// Computed in `f64` so long sessions do not lose precision in the age.
pub fn phase(age: u64, fps: f32, speed: f32) -> f32 {
    let period = fps as f64 * (1000.0 / speed as f64);
    (age as f64 / period).sin() as f32
}

/// Live animation parameters plus the particle pool they drive.
///
/// Parameters are changed through setters (typically from slider events)
/// and read by [`step`](AnimationEngine::step). `radius` has no setter: it is
/// always derived from `scale`.
#[derive(Debug, Clone)]
pub struct AnimationEngine {
    viewport: Viewport,
    particle_size: f32,
    gradient: ColorGradient,
    pool: ParticlePool,
    speed: f32,
    scale: f32,
    radius: f32,
    opacity: f32,
    phase: f32,
}

impl AnimationEngine {
    /// Create an engine with a pool of `capacity` particles, none active.
    ///
    /// Starts at speed 1, scale 0.5 and opacity 0.5.
    pub fn new(viewport: Viewport, capacity: usize) -> Self {
        let mut engine = Self {
            viewport,
            particle_size: PARTICLE_SIZE,
            gradient: ColorGradient::default(),
            pool: ParticlePool::new(capacity, viewport.center()),
            speed: 1.0,
            scale: 0.5,
            radius: 0.0,
            opacity: DEFAULT_OPACITY,
            phase: 0.0,
        };
        engine.set_scale(engine.scale);
        engine
    }

    /// Use a different gradient.
    pub fn with_gradient(mut self, gradient: ColorGradient) -> Self {
        self.gradient = gradient;
        self
    }

    /// Set the particle size used to keep the ring inside the viewport.
    pub fn with_particle_size(mut self, size: f32) -> Self {
        self.particle_size = size;
        self.set_scale(self.scale);
        self
    }

    /// Replace the pool, e.g. one built with [`ParticlePool::with_tint`].
    ///
    /// The active count of the new pool is kept.
    pub fn with_pool(mut self, pool: ParticlePool) -> Self {
        self.pool = pool;
        self
    }

    // ========== Parameters ==========

    #[inline]
    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    #[inline]
    pub fn speed(&self) -> f32 {
        self.speed
    }

    /// Set the oscillation speed. Non-positive or non-finite speeds are ignored.
    pub fn set_speed(&mut self, speed: f32) {
        if !(speed.is_finite() && speed > 0.0) {
            tracing::warn!(speed, "ignoring non-positive speed");
            return;
        }
        self.speed = speed;
    }

    #[inline]
    pub fn scale(&self) -> f32 {
        self.scale
    }

    /// Set the particle scale; the ring radius follows through the radius curve.
    pub fn set_scale(&mut self, scale: f32) {
        self.scale = scale;
        self.radius = curves::radius(scale, self.max_radius());
    }

    /// Ring radius in pixels for the current scale.
    #[inline]
    pub fn radius(&self) -> f32 {
        self.radius
    }

    /// Side of a particle square at scale 1.
    #[inline]
    pub fn particle_size(&self) -> f32 {
        self.particle_size
    }

    /// Radius reached at scale 1.
    pub fn max_radius(&self) -> f32 {
        curves::max_radius(self.viewport.height, self.particle_size)
    }

    #[inline]
    pub fn opacity(&self) -> f32 {
        self.opacity
    }

    pub fn set_opacity(&mut self, opacity: f32) {
        self.opacity = opacity;
    }

    #[inline]
    pub fn gradient(&self) -> &ColorGradient {
        &self.gradient
    }

    /// Phase computed by the last [`step`](Self::step).
    #[inline]
    pub fn phase(&self) -> f32 {
        self.phase
    }

    // ========== Pool ==========

    #[inline]
    pub fn capacity(&self) -> usize {
        self.pool.capacity()
    }

    #[inline]
    pub fn active_count(&self) -> usize {
        self.pool.active_count()
    }

    /// Show `count` particles (clamped to capacity). Returns the applied count.
    pub fn set_active_count(&mut self, count: usize) -> usize {
        self.pool.set_active_count(count)
    }

    /// Every pooled particle; hidden ones have `visible == false`.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        self.pool.particles()
    }

    #[inline]
    pub fn pool(&self) -> &ParticlePool {
        &self.pool
    }

    /// Replace the contents of `out` with instance data for the active particles.
    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        self.pool.write_instances(out);
    }

    // ========== Frame ==========

    /// Advance the animation to frame `age` at `fps` frames per second.
    ///
    /// Only active particles are touched. A non-positive `fps` skips the frame.
    pub fn step(&mut self, age: u64, fps: f32) {
        if !(fps.is_finite() && fps > 0.0) {
            tracing::warn!(fps, "skipping frame with invalid fps");
            return;
        }

        let t = phase(age, fps, self.speed);
        self.phase = t;

        let center = self.viewport.center();
        let radius = self.radius;
        let spin = (REFERENCE_FPS / fps) * SPIN_PER_FRAME;
        let (scale, opacity) = (self.scale, self.opacity);
        let gradient = self.gradient;

        let particles = self.pool.active_mut();
        let n = particles.len() as f32;
        for (i, p) in particles.iter_mut().enumerate() {
            let i = i as f32;
            let r = (TAU * t * i).cos();
            let (sin, cos) = (i / n * TAU).sin_cos();
            let offset = Vec2::new(sin, cos) * r * radius;

            p.position = center + offset;
            p.rotate(spin);
            if p.tint == Tint::Gradient {
                let rate = offset.x.abs().max(offset.y.abs()) / center.y;
                p.color = gradient.sample(rate, t);
            }
            p.scale = scale;
            p.opacity = opacity;
        }
    }
}
