//! Fixed-size particle pool.
//!
//! The pool allocates every particle the toy can ever show up front.
//! Changing the active count only toggles visibility: indices below the
//! count are shown, the rest are hidden. Particles are never destroyed or
//! recreated, so a slider commit costs one pass over the pool and no
//! allocation.

use crate::particle::{Particle, ParticleInstance, Tint};
use glam::Vec2;

/// Pool of particles with a movable active/hidden boundary.
#[derive(Debug, Clone)]
pub struct ParticlePool {
    particles: Vec<Particle>,
    active: usize,
}

impl ParticlePool {
    /// Allocate `capacity` gradient-tinted particles at `origin`, all hidden.
    pub fn new(capacity: usize, origin: Vec2) -> Self {
        Self::with_tint(capacity, origin, |_| Tint::Gradient)
    }

    /// Allocate `capacity` particles, choosing each one's tint by index.
    pub fn with_tint(capacity: usize, origin: Vec2, tint: impl Fn(usize) -> Tint) -> Self {
        let particles = (0..capacity)
            .map(|i| Particle {
                visible: false,
                ..Particle::new(origin, tint(i))
            })
            .collect();
        Self { particles, active: 0 }
    }

    /// Total number of particles, shown or hidden.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.particles.len()
    }

    /// Number of shown particles.
    #[inline]
    pub fn active_count(&self) -> usize {
        self.active
    }

    /// Show the first `count` particles and hide the rest.
    ///
    /// `count` is clamped to the capacity. Returns the count actually applied.
    pub fn set_active_count(&mut self, count: usize) -> usize {
        let count = count.min(self.capacity());
        for (i, p) in self.particles.iter_mut().enumerate() {
            p.visible = i < count;
        }
        if count != self.active {
            tracing::debug!(from = self.active, to = count, "particle pool resized");
        }
        self.active = count;
        count
    }

    /// Every particle, hidden ones included.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// The shown particles.
    #[inline]
    pub fn active(&self) -> &[Particle] {
        &self.particles[..self.active]
    }

    /// The shown particles, mutably.
    #[inline]
    pub fn active_mut(&mut self) -> &mut [Particle] {
        &mut self.particles[..self.active]
    }

    /// Replace the contents of `out` with instance data for the shown particles.
    pub fn write_instances(&self, out: &mut Vec<ParticleInstance>) {
        out.clear();
        out.extend(self.active().iter().map(Particle::instance));
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_pool_is_hidden() {
        let pool = ParticlePool::new(16, Vec2::new(640.0, 360.0));
        assert_eq!(pool.capacity(), 16);
        assert_eq!(pool.active_count(), 0);
        assert!(pool.particles().iter().all(|p| !p.visible));
        assert!(pool.particles().iter().all(|p| p.position == Vec2::new(640.0, 360.0)));
    }

    #[test]
    fn test_show_hide_without_reallocation() {
        let mut pool = ParticlePool::new(16, Vec2::ZERO);
        let base = pool.particles().as_ptr();

        assert_eq!(pool.set_active_count(10), 10);
        assert_eq!(pool.particles().iter().filter(|p| p.visible).count(), 10);
        assert!(pool.particles()[..10].iter().all(|p| p.visible));

        assert_eq!(pool.set_active_count(3), 3);
        assert!(pool.particles()[..3].iter().all(|p| p.visible));
        assert!(pool.particles()[3..].iter().all(|p| !p.visible));
        assert_eq!(pool.active().len(), 3);

        assert_eq!(pool.particles().as_ptr(), base);
        assert_eq!(pool.capacity(), 16);
    }

    #[test]
    fn test_active_count_clamped() {
        let mut pool = ParticlePool::new(4, Vec2::ZERO);
        assert_eq!(pool.set_active_count(100), 4);
        assert_eq!(pool.active_count(), 4);
    }

    #[test]
    fn test_hidden_particles_keep_state() {
        let mut pool = ParticlePool::new(4, Vec2::ZERO);
        pool.set_active_count(4);
        pool.active_mut()[3].angle = 90.0;

        pool.set_active_count(2);
        pool.set_active_count(4);
        assert_eq!(pool.particles()[3].angle, 90.0);
    }

    #[test]
    fn test_tint_by_index() {
        let pool = ParticlePool::with_tint(4, Vec2::ZERO, |i| {
            if i % 2 == 0 {
                Tint::Gradient
            } else {
                Tint::Fixed
            }
        });
        let tints: Vec<Tint> = pool.particles().iter().map(|p| p.tint).collect();
        assert_eq!(tints, vec![Tint::Gradient, Tint::Fixed, Tint::Gradient, Tint::Fixed]);
    }

    #[test]
    fn test_write_instances() {
        let mut pool = ParticlePool::new(8, Vec2::ZERO);
        pool.set_active_count(5);
        let mut out = vec![ParticleInstance::default(); 20];
        pool.write_instances(&mut out);
        assert_eq!(out.len(), 5);
    }
}
