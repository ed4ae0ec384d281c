//! Scalar mapping curves.

/// Compression constant of [`radius`]. Larger values flatten the curve faster.
pub const RADIUS_CURVE_K: f32 = 100_000.0;

/// Map a ring scale to a pixel radius.
///
/// `max_radius * ln(k * scale + 1) / ln(k + 1)` with `k = 100000`: small
/// scales still give a clearly visible ring, large scales saturate near
/// `max_radius` (and pass it slightly above `scale = 1`).
///
/// Negative scales are treated as `0.0`.
///
/// ```
/// use ringtoy::curves::radius;
///
/// assert_eq!(radius(0.0, 344.0), 0.0);
/// assert!((radius(1.0, 344.0) - 344.0).abs() < 1e-3);
/// assert!(radius(0.05, 344.0) > 344.0 * 0.6);
/// ```
pub fn radius(scale: f32, max_radius: f32) -> f32 {
    let scale = scale.max(0.0);
    max_radius * (RADIUS_CURVE_K * scale).ln_1p() / RADIUS_CURVE_K.ln_1p()
}

/// Largest radius that keeps a particle of `particle_size` inside a viewport
/// of `viewport_height`.
#[inline]
pub fn max_radius(viewport_height: f32, particle_size: f32) -> f32 {
    (viewport_height - particle_size) / 2.0
}
