//! # ringtoy - interactive particle ring
//!
//! A ring of particles animates around the screen center, driven by five
//! parameters the user drags on slider controls: speed, size, particle
//! count, particle opacity and background opacity.
//!
//! The crate is host-agnostic. It consumes pointer events and frame ticks
//! and produces particle attributes; drawing is left to the host. An egui
//! viewer is available behind the `egui` feature.
//!
//! ## Quick Start
//!
//! ```ignore
//! use ringtoy::prelude::*;
//!
//! let mut scene = Scene::new(SceneConfig::default())?;
//! let mut pointers = PointerTracker::new();
//! let mut clock = FrameClock::new(60.0);
//!
//! // For every window event:
//! if let Some(pointer) = pointers.handle_window_event(&event) {
//!     scene.handle_pointer(&pointer);
//! }
//!
//! // Every frame:
//! scene.update(clock.tick(), clock.fps());
//! for particle in scene.particles().iter().filter(|p| p.visible) {
//!     draw_square(particle.position, particle.angle, particle.scale, particle.color);
//! }
//! ```
//!
//! ## Core Concepts
//!
//! ### Controls
//!
//! [`SeekBar`] is a slider with single-pointer ownership: the first pointer
//! down owns the control until it is released. It reports
//! [`SeekBarEvent::Changed`] while dragging and [`SeekBarEvent::TrackingEnd`]
//! on release. Values live in a [`NormalizedRange`].
//!
//! ### Animation
//!
//! [`AnimationEngine`] owns a fixed [`ParticlePool`] and places the active
//! particles each frame from one shared phase. The ring radius follows the
//! size parameter through [`curves::radius`]; colors come from a
//! [`ColorGradient`].
//!
//! ### Scene
//!
//! [`Scene`] wires five controls to the engine and converts to and from a
//! persisted [`Snapshot`].

pub mod curves;
pub mod engine;
pub mod error;
pub mod gradient;
pub mod input;
pub mod particle;
pub mod pool;
pub mod range;
pub mod scene;
pub mod seek_bar;
pub mod snapshot;
pub mod time;
#[cfg(feature = "egui")]
pub mod viewer;

pub use bytemuck;
pub use engine::{AnimationEngine, Viewport};
pub use error::{RangeError, SnapshotError};
pub use glam::Vec2;
pub use gradient::{ColorGradient, Rgb};
pub use input::{PointerEvent, PointerId, PointerTracker};
pub use particle::{Particle, ParticleInstance, Tint};
pub use pool::ParticlePool;
pub use range::NormalizedRange;
pub use scene::{Control, ControlEvent, ControlKind, Scene, SceneConfig};
pub use seek_bar::{SeekBar, SeekBarEvent, TrackingState};
pub use snapshot::Snapshot;
pub use time::FrameClock;

/// Convenient re-exports for common usage.
///
/// ```ignore
/// use ringtoy::prelude::*;
/// ```
pub mod prelude {
    pub use crate::engine::{AnimationEngine, Viewport};
    pub use crate::error::{RangeError, SnapshotError};
    pub use crate::gradient::{ColorGradient, Rgb};
    pub use crate::input::{PointerEvent, PointerId, PointerTracker};
    pub use crate::particle::{Particle, ParticleInstance, Tint};
    pub use crate::pool::ParticlePool;
    pub use crate::range::NormalizedRange;
    pub use crate::scene::{ControlEvent, ControlKind, Scene, SceneConfig};
    pub use crate::seek_bar::{SeekBar, SeekBarEvent};
    pub use crate::snapshot::Snapshot;
    pub use crate::time::FrameClock;
    pub use crate::Vec2;
}
