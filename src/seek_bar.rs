//! Seek-bar (slider) control.
//!
//! A [`SeekBar`] is a horizontal track with a square knob. Dragging the knob
//! changes the control's value; the control reports every change while the
//! drag is in progress and a final commit when the pointer is released.
//!
//! # State Machine
//!
//! ```text
//!            down(id)                 up(id)
//!   Idle ─────────────▶ Tracking(id) ────────▶ Idle
//!                        │    ▲
//!                        └────┘ move(id)
//! ```
//!
//! # Invariants
//!
//! 1. At most one pointer is tracked. While `Tracking(id)`, events from any
//!    other pointer are ignored, including downs.
//! 2. `Changed` is only emitted when the value actually changed.
//! 3. A release of the tracked pointer always emits exactly one
//!    `TrackingEnd`, even if the value never changed.
//! 4. The knob offset is always `(width - knob_size) * fraction`.
//!
//! # Failure Modes
//!
//! There is no timeout. If the host loses the release of the tracked
//! pointer, the control stays in `Tracking` until it arrives or the host
//! calls [`SeekBar::force_release`] (e.g. on focus loss).

use crate::error::RangeError;
use crate::input::{PointerEvent, PointerId};
use crate::range::NormalizedRange;

/// Height of the background track bar.
pub const TRACK_THICKNESS: f32 = 8.0;
/// Minimum widget width.
pub const MIN_WIDTH: f32 = TRACK_THICKNESS * 4.0;
/// Minimum widget height (and therefore knob size).
pub const MIN_HEIGHT: f32 = TRACK_THICKNESS * 2.0;

/// Notification produced by a [`SeekBar`].
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SeekBarEvent {
    /// The value changed during a drag.
    Changed(f32),
    /// The drag ended. Carries the final value.
    TrackingEnd(f32),
}

impl SeekBarEvent {
    /// The value carried by the event.
    pub fn value(&self) -> f32 {
        match *self {
            SeekBarEvent::Changed(v) | SeekBarEvent::TrackingEnd(v) => v,
        }
    }
}

/// Pointer ownership of a [`SeekBar`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TrackingState {
    #[default]
    Idle,
    Tracking(PointerId),
}

/// A draggable horizontal slider.
///
/// Positions passed to the pointer handlers are in the control's local
/// space: `x = 0` is the left edge of the widget.
#[derive(Debug, Clone)]
pub struct SeekBar {
    range: NormalizedRange,
    width: f32,
    height: f32,
    knob_offset: f32,
    state: TrackingState,
    pressed: bool,
}

impl SeekBar {
    /// Create a control over `0.0..=1.0` with the value at `0.0`.
    ///
    /// `width` and `height` are raised to the minimum widget size. The knob
    /// is a square of side `height`, and the width is also raised so the
    /// knob always has room to travel.
    pub fn new(width: f32, height: f32) -> Self {
        let height = height.max(MIN_HEIGHT);
        let width = width.max(MIN_WIDTH).max(height + TRACK_THICKNESS);
        Self {
            range: NormalizedRange::new(),
            width,
            height,
            knob_offset: 0.0,
            state: TrackingState::Idle,
            pressed: false,
        }
    }

    /// Create a control over `min..=max` holding `value` (clamped).
    pub fn with_range(
        width: f32,
        height: f32,
        value: f32,
        min: f32,
        max: f32,
    ) -> Result<Self, RangeError> {
        let mut bar = Self::new(width, height);
        bar.set_range(min, max)?;
        bar.set_value(value);
        Ok(bar)
    }

    // ========== Geometry ==========

    /// Widget width.
    #[inline]
    pub fn width(&self) -> f32 {
        self.width
    }

    /// Widget height.
    #[inline]
    pub fn height(&self) -> f32 {
        self.height
    }

    /// Side of the square knob.
    #[inline]
    pub fn knob_size(&self) -> f32 {
        self.height
    }

    /// Distance the knob can travel.
    #[inline]
    pub fn travel(&self) -> f32 {
        self.width - self.knob_size()
    }

    /// Left edge of the knob, relative to the widget.
    #[inline]
    pub fn knob_offset(&self) -> f32 {
        self.knob_offset
    }

    // ========== Value ==========

    /// Current value.
    #[inline]
    pub fn value(&self) -> f32 {
        self.range.value()
    }

    /// Current value as a fraction of the range.
    #[inline]
    pub fn fraction(&self) -> f32 {
        self.range.fraction()
    }

    /// Set the value, clamping it into range, and move the knob.
    pub fn set_value(&mut self, value: f32) {
        self.range.set_value(value);
        self.sync_knob();
    }

    /// Lower bound.
    #[inline]
    pub fn min(&self) -> f32 {
        self.range.min()
    }

    /// Upper bound.
    #[inline]
    pub fn max(&self) -> f32 {
        self.range.max()
    }

    /// Replace the lower bound. The value is clamped into the new range.
    pub fn set_min(&mut self, min: f32) -> Result<(), RangeError> {
        self.range.set_min(min)?;
        self.sync_knob();
        Ok(())
    }

    /// Replace the upper bound. The value is clamped into the new range.
    pub fn set_max(&mut self, max: f32) -> Result<(), RangeError> {
        self.range.set_max(max)?;
        self.sync_knob();
        Ok(())
    }

    /// Replace both bounds. The value is clamped into the new range.
    pub fn set_range(&mut self, min: f32, max: f32) -> Result<(), RangeError> {
        self.range.set_range(min, max)?;
        self.sync_knob();
        Ok(())
    }

    // ========== Tracking ==========

    /// Current pointer ownership.
    #[inline]
    pub fn state(&self) -> TrackingState {
        self.state
    }

    /// Whether a pointer is being tracked.
    #[inline]
    pub fn is_tracking(&self) -> bool {
        matches!(self.state, TrackingState::Tracking(_))
    }

    /// Whether the knob should be drawn in its pressed style.
    #[inline]
    pub fn is_pressed(&self) -> bool {
        self.pressed
    }

    /// Dispatch a pointer event in local coordinates.
    pub fn handle(&mut self, event: &PointerEvent) -> Option<SeekBarEvent> {
        match *event {
            PointerEvent::Down { id, position } => self.on_pointer_down(id, position.x),
            PointerEvent::Move { id, start, start_delta } => {
                self.on_pointer_move(id, start.x, start_delta.x)
            }
            PointerEvent::Up { id, .. } => self.on_pointer_up(id),
        }
    }

    /// Start tracking `id` and jump the knob under `x`.
    ///
    /// Ignored while another pointer is tracked.
    pub fn on_pointer_down(&mut self, id: PointerId, x: f32) -> Option<SeekBarEvent> {
        if self.is_tracking() {
            return None;
        }

        self.state = TrackingState::Tracking(id);
        tracing::debug!(?id, value = self.value(), "seek bar tracking started");
        self.track_to(x)
    }

    /// Follow the tracked pointer. The current position is `start_x + delta_x`.
    pub fn on_pointer_move(
        &mut self,
        id: PointerId,
        start_x: f32,
        delta_x: f32,
    ) -> Option<SeekBarEvent> {
        if self.state != TrackingState::Tracking(id) {
            return None;
        }
        self.track_to(start_x + delta_x)
    }

    /// Stop tracking `id` and commit the value.
    pub fn on_pointer_up(&mut self, id: PointerId) -> Option<SeekBarEvent> {
        if self.state != TrackingState::Tracking(id) {
            return None;
        }
        Some(self.end_tracking())
    }

    /// Abandon the current drag, if any, and commit the value.
    ///
    /// For hosts that can lose a release (focus loss, device removal).
    pub fn force_release(&mut self) -> Option<SeekBarEvent> {
        if !self.is_tracking() {
            return None;
        }
        Some(self.end_tracking())
    }

    fn end_tracking(&mut self) -> SeekBarEvent {
        self.state = TrackingState::Idle;
        self.pressed = false;
        let value = self.value();
        tracing::debug!(value, "seek bar tracking ended");
        SeekBarEvent::TrackingEnd(value)
    }

    /// Map a pointer x onto the range and apply it.
    fn track_to(&mut self, x: f32) -> Option<SeekBarEvent> {
        self.pressed = true;

        // Compare stored values: the fraction round trip can move a raw
        // value by an ulp, which must not count as a change.
        let before = self.value();
        self.set_value(self.value_at(x));
        let value = self.value();
        if value == before {
            return None;
        }
        tracing::trace!(value, "seek bar changed");
        Some(SeekBarEvent::Changed(value))
    }

    /// Value the control would take with the knob centered under `x`.
    pub fn value_at(&self, x: f32) -> f32 {
        let travel = self.travel();
        let offset = (x - self.knob_size() / 2.0).clamp(0.0, travel);
        self.range.denormalize(offset / travel)
    }

    fn sync_knob(&mut self) {
        self.knob_offset = self.travel() * self.range.fraction();
    }
}
