//! The toy: five sliders wired to an animation engine.
//!
//! [`Scene`] owns the controls and the [`AnimationEngine`], routes pointer
//! events to the controls and applies their events to the engine:
//!
//! | Control | Range | Applied on |
//! |---------|-------|------------|
//! | Speed | 1 – 100 | every change |
//! | Size | 0.05 – 2 | every change (radius follows) |
//! | Object count | 1 – 32 (× 32 particles) | release only |
//! | Object opacity | 0.05 – 1 | every change |
//! | Background opacity | 0 – 1 | every change |
//!
//! The host feeds pointer events and frame ticks, then draws
//! [`Scene::particles`] and [`Scene::controls`].
//!
//! ```
//! use ringtoy::{Scene, SceneConfig};
//!
//! let mut scene = Scene::new(SceneConfig::default()).unwrap();
//! scene.update(1, 60.0);
//! assert_eq!(scene.engine().active_count(), 32);
//! ```

use crate::engine::{AnimationEngine, Viewport};
use crate::error::RangeError;
use crate::gradient::ColorGradient;
use crate::input::PointerEvent;
use crate::particle::{Particle, PARTICLE_SIZE};
use crate::seek_bar::{SeekBar, SeekBarEvent};
use crate::snapshot::Snapshot;
use glam::Vec2;

/// Particles per unit of the object-count slider.
pub const PARTICLES_PER_STEP: f32 = 32.0;
/// Upper bound of the object-count slider.
pub const MAX_OBJECT_STEPS: f32 = 32.0;
/// Pool size: the largest particle count the object-count slider can ask for.
pub const MAX_PARTICLES: usize = (MAX_OBJECT_STEPS * PARTICLES_PER_STEP) as usize;

/// Which parameter a control adjusts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ControlKind {
    Speed,
    Scale,
    ObjectCount,
    Opacity,
    BackgroundOpacity,
}

impl ControlKind {
    /// All controls, in layout order.
    pub const ALL: [ControlKind; 5] = [
        ControlKind::Speed,
        ControlKind::Scale,
        ControlKind::ObjectCount,
        ControlKind::Opacity,
        ControlKind::BackgroundOpacity,
    ];

    /// Caption drawn above the control.
    pub fn label(&self) -> &'static str {
        match self {
            ControlKind::Speed => "Speed",
            ControlKind::Scale => "Size",
            ControlKind::ObjectCount => "Object count",
            ControlKind::Opacity => "Object opacity",
            ControlKind::BackgroundOpacity => "Background opacity",
        }
    }

    /// `(min, max, initial value)`.
    pub fn range(&self) -> (f32, f32, f32) {
        match self {
            ControlKind::Speed => (1.0, 100.0, 1.0),
            ControlKind::Scale => (0.05, 2.0, 0.5),
            ControlKind::ObjectCount => (1.0, MAX_OBJECT_STEPS, 1.0),
            ControlKind::Opacity => (0.05, 1.0, 0.5),
            ControlKind::BackgroundOpacity => (0.0, 1.0, 0.0),
        }
    }
}

/// Slack for mapping a restored `count / 32` slider value back to `count`.
const RESTORE_TOLERANCE: f32 = 1e-3;

/// Particle count selected by an object-count slider value. Rounds down.
pub fn particle_count(value: f32) -> usize {
    (value * PARTICLES_PER_STEP).floor().max(0.0) as usize
}

/// A slider placed on screen.
#[derive(Debug, Clone)]
pub struct Control {
    pub kind: ControlKind,
    /// Top-left corner in screen pixels.
    pub origin: Vec2,
    pub bar: SeekBar,
    label_height: f32,
}

impl Control {
    /// Whether the screen point lies on the control.
    pub fn contains(&self, point: Vec2) -> bool {
        let local = point - self.origin;
        (0.0..=self.bar.width()).contains(&local.x) && (0.0..=self.bar.height()).contains(&local.y)
    }

    /// Top-left corner of the caption.
    pub fn label_position(&self) -> Vec2 {
        self.origin - Vec2::new(0.0, self.bar.height() * 0.5 + self.label_height)
    }
}

/// A control event tagged with its source.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ControlEvent {
    pub kind: ControlKind,
    pub event: SeekBarEvent,
}

/// Scene configuration.
///
/// ```
/// use ringtoy::{SceneConfig, Viewport};
///
/// let config = SceneConfig::default()
///     .with_viewport(Viewport::new(800.0, 600.0))
///     .with_slider_size(200.0, 24.0);
/// assert_eq!(config.viewport.width, 800.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SceneConfig {
    pub viewport: Viewport,
    /// Slider width and height.
    pub slider_size: Vec2,
    /// Side of a particle square at scale 1.
    pub particle_size: f32,
    /// Height reserved for each slider caption.
    pub label_height: f32,
    pub gradient: ColorGradient,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            viewport: Viewport::default(),
            slider_size: Vec2::new(160.0, 32.0),
            particle_size: PARTICLE_SIZE,
            label_height: 20.0,
            gradient: ColorGradient::default(),
        }
    }
}

impl SceneConfig {
    pub fn with_viewport(mut self, viewport: Viewport) -> Self {
        self.viewport = viewport;
        self
    }

    pub fn with_slider_size(mut self, width: f32, height: f32) -> Self {
        self.slider_size = Vec2::new(width, height);
        self
    }

    pub fn with_particle_size(mut self, size: f32) -> Self {
        self.particle_size = size;
        self
    }

    pub fn with_label_height(mut self, height: f32) -> Self {
        self.label_height = height;
        self
    }

    pub fn with_gradient(mut self, gradient: ColorGradient) -> Self {
        self.gradient = gradient;
        self
    }
}

/// Sliders, engine and background state of the toy.
#[derive(Debug, Clone)]
pub struct Scene {
    controls: Vec<Control>,
    engine: AnimationEngine,
    background_opacity: f32,
}

impl Scene {
    /// Build the scene with every control at its initial value.
    pub fn new(config: SceneConfig) -> Result<Self, RangeError> {
        let engine = AnimationEngine::new(config.viewport, MAX_PARTICLES)
            .with_particle_size(config.particle_size)
            .with_gradient(config.gradient);

        let (w, h) = (config.slider_size.x, config.slider_size.y);
        let x = config.viewport.width - w * 1.5;
        let block = config.label_height + h * 0.5 + h * 2.0;
        let first_y = h * 3.0 + config.label_height + h * 0.5;

        let controls = ControlKind::ALL
            .iter()
            .enumerate()
            .map(|(i, &kind)| {
                let (min, max, value) = kind.range();
                Ok(Control {
                    kind,
                    origin: Vec2::new(x, first_y + i as f32 * block),
                    bar: SeekBar::with_range(w, h, value, min, max)?,
                    label_height: config.label_height,
                })
            })
            .collect::<Result<Vec<_>, RangeError>>()?;

        let mut scene = Self {
            controls,
            engine,
            background_opacity: 0.0,
        };
        scene.apply_all();
        Ok(scene)
    }

    #[inline]
    pub fn engine(&self) -> &AnimationEngine {
        &self.engine
    }

    #[inline]
    pub fn controls(&self) -> &[Control] {
        &self.controls
    }

    /// The control adjusting `kind`.
    pub fn control(&self, kind: ControlKind) -> &Control {
        &self.controls[kind as usize]
    }

    /// Every pooled particle; draw only the visible ones.
    #[inline]
    pub fn particles(&self) -> &[Particle] {
        self.engine.particles()
    }

    #[inline]
    pub fn background_opacity(&self) -> f32 {
        self.background_opacity
    }

    /// Route a screen-space pointer event to the controls.
    ///
    /// A down goes to the control under the pointer; moves and ups go to
    /// every control, and only the one tracking that pointer reacts.
    /// Returns the produced events after applying them.
    pub fn handle_pointer(&mut self, event: &PointerEvent) -> Vec<ControlEvent> {
        let mut out = Vec::new();
        match event {
            PointerEvent::Down { position, .. } => {
                if let Some(control) = self.controls.iter_mut().find(|c| c.contains(*position)) {
                    let local = event.relative_to(control.origin);
                    if let Some(ev) = control.bar.handle(&local) {
                        out.push(ControlEvent { kind: control.kind, event: ev });
                    }
                }
            }
            PointerEvent::Move { .. } | PointerEvent::Up { .. } => {
                for control in &mut self.controls {
                    let local = event.relative_to(control.origin);
                    if let Some(ev) = control.bar.handle(&local) {
                        out.push(ControlEvent { kind: control.kind, event: ev });
                    }
                }
            }
        }

        for ev in &out {
            self.apply(*ev);
        }
        out
    }

    /// Force-release every control, e.g. when the window loses focus.
    pub fn release_all(&mut self) -> Vec<ControlEvent> {
        let out: Vec<ControlEvent> = self
            .controls
            .iter_mut()
            .filter_map(|c| c.bar.force_release().map(|event| ControlEvent { kind: c.kind, event }))
            .collect();
        for ev in &out {
            self.apply(*ev);
        }
        out
    }

    /// Advance the animation to frame `age`.
    pub fn update(&mut self, age: u64, fps: f32) {
        self.engine.step(age, fps);
    }

    /// Capture the current parameters.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            speed: self.engine.speed(),
            scale: self.engine.scale(),
            object_count: self.engine.active_count() as f32,
            opacity: self.engine.opacity(),
            bg_opacity: self.background_opacity,
        }
    }

    /// Restore parameters from a snapshot. Values outside a control's range
    /// are clamped.
    pub fn restore(&mut self, snapshot: &Snapshot) {
        let values = [
            (ControlKind::Speed, snapshot.speed),
            (ControlKind::Scale, snapshot.scale),
            (ControlKind::ObjectCount, snapshot.object_count / PARTICLES_PER_STEP),
            (ControlKind::Opacity, snapshot.opacity),
            (ControlKind::BackgroundOpacity, snapshot.bg_opacity),
        ];
        for (kind, value) in values {
            self.controls[kind as usize].bar.set_value(value);
        }
        self.apply_all();

        // The slider stores a fraction, so `count / 32` can come back a hair
        // low; floor with slack to land on the saved count again.
        let value = self.control(ControlKind::ObjectCount).bar.value();
        let count = (value * PARTICLES_PER_STEP + RESTORE_TOLERANCE).floor() as usize;
        if count != self.engine.active_count() {
            self.engine.set_active_count(count);
        }
    }

    /// Push every control's current value into the engine.
    fn apply_all(&mut self) {
        for kind in ControlKind::ALL {
            let value = self.control(kind).bar.value();
            self.apply(ControlEvent {
                kind,
                event: SeekBarEvent::TrackingEnd(value),
            });
        }
    }

    fn apply(&mut self, ev: ControlEvent) {
        let value = ev.event.value();
        match (ev.kind, ev.event) {
            (ControlKind::Speed, _) => self.engine.set_speed(value),
            (ControlKind::Scale, _) => self.engine.set_scale(value),
            (ControlKind::Opacity, _) => self.engine.set_opacity(value),
            (ControlKind::BackgroundOpacity, _) => self.background_opacity = value,
            (ControlKind::ObjectCount, SeekBarEvent::TrackingEnd(_)) => {
                let count = particle_count(value);
                if count != self.engine.active_count() {
                    self.engine.set_active_count(count);
                }
            }
            (ControlKind::ObjectCount, SeekBarEvent::Changed(_)) => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::input::PointerId;

    fn scene() -> Scene {
        Scene::new(SceneConfig::default()).unwrap()
    }

    /// Screen point over the knob center of `kind` at `fraction`.
    fn knob_point(scene: &Scene, kind: ControlKind, fraction: f32) -> Vec2 {
        let c = scene.control(kind);
        let knob = c.bar.knob_size();
        c.origin + Vec2::new(knob / 2.0 + c.bar.travel() * fraction, c.bar.height() / 2.0)
    }

    #[test]
    fn test_initial_state() {
        let scene = scene();
        let engine = scene.engine();
        assert_eq!(engine.speed(), 1.0);
        assert!((engine.scale() - 0.5).abs() < 1e-6);
        assert!((engine.opacity() - 0.5).abs() < 1e-6);
        assert_eq!(engine.active_count(), 32);
        assert_eq!(engine.capacity(), MAX_PARTICLES);
        assert_eq!(scene.background_opacity(), 0.0);

        let snap = scene.snapshot();
        let default = Snapshot::default();
        assert_eq!(snap.object_count, default.object_count);
        assert!((snap.scale - default.scale).abs() < 1e-6);
        assert_eq!(snap.bg_opacity, default.bg_opacity);
    }

    #[test]
    fn test_layout_is_a_column() {
        let scene = scene();
        let xs: Vec<f32> = scene.controls().iter().map(|c| c.origin.x).collect();
        assert!(xs.iter().all(|&x| x == 1280.0 - 240.0));
        for pair in scene.controls().windows(2) {
            assert!(pair[1].label_position().y > pair[0].origin.y + pair[0].bar.height());
        }
    }

    #[test]
    fn test_control_lookup_matches_kind() {
        let scene = scene();
        for kind in ControlKind::ALL {
            assert_eq!(scene.control(kind).kind, kind);
        }
    }

    #[test]
    fn test_speed_applies_live() {
        let mut scene = scene();
        let p = knob_point(&scene, ControlKind::Speed, 1.0);
        let events = scene.handle_pointer(&PointerEvent::Down {
            id: PointerId::Mouse,
            position: p,
        });
        assert_eq!(events.len(), 1);
        assert_eq!(events[0].kind, ControlKind::Speed);
        assert_eq!(scene.engine().speed(), 100.0);
    }

    #[test]
    fn test_object_count_applies_on_release_only() {
        let mut scene = scene();
        let start = knob_point(&scene, ControlKind::ObjectCount, 0.0);
        let end = knob_point(&scene, ControlKind::ObjectCount, 1.0);

        scene.handle_pointer(&PointerEvent::Down {
            id: PointerId::Mouse,
            position: start,
        });
        let events = scene.handle_pointer(&PointerEvent::Move {
            id: PointerId::Mouse,
            start,
            start_delta: end - start,
        });
        assert_eq!(events.len(), 1);
        assert_eq!(scene.engine().active_count(), 32);

        let events = scene.handle_pointer(&PointerEvent::Up {
            id: PointerId::Mouse,
            position: end,
        });
        assert_eq!(
            events,
            vec![ControlEvent {
                kind: ControlKind::ObjectCount,
                event: SeekBarEvent::TrackingEnd(32.0),
            }]
        );
        assert_eq!(scene.engine().active_count(), MAX_PARTICLES);
    }

    #[test]
    fn test_down_outside_controls_is_ignored() {
        let mut scene = scene();
        let events = scene.handle_pointer(&PointerEvent::Down {
            id: PointerId::Mouse,
            position: Vec2::new(10.0, 10.0),
        });
        assert!(events.is_empty());
        assert!(scene.controls().iter().all(|c| !c.bar.is_tracking()));
    }

    #[test]
    fn test_second_pointer_cannot_steal() {
        let mut scene = scene();
        let p = knob_point(&scene, ControlKind::Opacity, 0.5);
        scene.handle_pointer(&PointerEvent::Down {
            id: PointerId::Touch(1),
            position: p,
        });
        let opacity = scene.engine().opacity();

        let events = scene.handle_pointer(&PointerEvent::Move {
            id: PointerId::Touch(2),
            start: p,
            start_delta: Vec2::new(-200.0, 0.0),
        });
        assert!(events.is_empty());
        assert_eq!(scene.engine().opacity(), opacity);
    }

    #[test]
    fn test_release_all_commits() {
        let mut scene = scene();
        let p = knob_point(&scene, ControlKind::ObjectCount, 0.5);
        scene.handle_pointer(&PointerEvent::Down {
            id: PointerId::Mouse,
            position: p,
        });
        let events = scene.release_all();
        assert_eq!(events.len(), 1);
        assert!(matches!(events[0].event, SeekBarEvent::TrackingEnd(_)));
        let value = scene.control(ControlKind::ObjectCount).bar.value();
        assert_eq!(scene.engine().active_count(), particle_count(value));
        assert!(scene.release_all().is_empty());
    }

    #[test]
    fn test_snapshot_restore() {
        let mut scene = scene();
        let snap = Snapshot {
            speed: 40.0,
            scale: 1.5,
            object_count: 96.0,
            opacity: 0.75,
            bg_opacity: 0.25,
        };
        scene.restore(&snap);
        assert_eq!(scene.engine().active_count(), 96);
        assert_eq!(scene.background_opacity(), 0.25);
        let back = scene.snapshot();
        assert!((back.speed - 40.0).abs() < 1e-3);
        assert!((back.scale - 1.5).abs() < 1e-5);
        assert!((back.opacity - 0.75).abs() < 1e-5);
        assert_eq!(back.object_count, 96.0);
    }

    #[test]
    fn test_restore_lands_on_every_saved_count() {
        let mut scene = scene();
        for steps in 1..=MAX_OBJECT_STEPS as usize {
            let count = steps * PARTICLES_PER_STEP as usize;
            scene.restore(&Snapshot {
                object_count: count as f32,
                ..Snapshot::default()
            });
            assert_eq!(scene.engine().active_count(), count);
            assert_eq!(scene.snapshot().object_count, count as f32);
        }
    }

    #[test]
    fn test_restore_clamps() {
        let mut scene = scene();
        scene.restore(&Snapshot {
            speed: 1000.0,
            object_count: 0.0,
            ..Snapshot::default()
        });
        assert_eq!(scene.engine().speed(), 100.0);
        assert_eq!(scene.engine().active_count(), 32);
    }

    #[test]
    fn test_particle_count() {
        assert_eq!(particle_count(1.0), 32);
        assert_eq!(particle_count(1.99), 63);
        assert_eq!(particle_count(1.99997), 63);
        assert_eq!(particle_count(32.0), 1024);
        assert_eq!(MAX_PARTICLES, 1024);
    }
}
