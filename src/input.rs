//! Pointer input for ringtoy controls.
//!
//! Controls consume [`PointerEvent`]s: a down, a stream of moves and an up,
//! each tagged with the [`PointerId`] that produced it. Moves carry both the
//! position where the gesture started and the delta since then, so a control
//! can track relative to the start point.
//!
//! [`PointerTracker`] builds those events from raw press/move/release calls
//! and can consume winit `WindowEvent`s directly:
//!
//! ```ignore
//! fn window_event(&mut self, _: &ActiveEventLoop, _: WindowId, event: WindowEvent) {
//!     if let Some(pointer) = self.pointers.handle_window_event(&event) {
//!         self.scene.handle_pointer(&pointer);
//!     }
//! }
//! ```

use glam::Vec2;
use std::collections::HashMap;
use winit::event::{ElementState, MouseButton, TouchPhase, WindowEvent};

/// Identity of the device that produced a pointer event.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PointerId {
    /// The (single) mouse cursor.
    Mouse,
    /// A touch contact, identified by the platform's finger id.
    Touch(u64),
}

/// A pointer event in screen coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PointerEvent {
    /// The pointer went down at `position`.
    Down { id: PointerId, position: Vec2 },
    /// The pointer moved while held. The current position is `start + start_delta`.
    Move {
        id: PointerId,
        start: Vec2,
        start_delta: Vec2,
    },
    /// The pointer was released at `position`.
    Up { id: PointerId, position: Vec2 },
}

impl PointerEvent {
    /// The pointer that produced this event.
    pub fn id(&self) -> PointerId {
        match *self {
            PointerEvent::Down { id, .. }
            | PointerEvent::Move { id, .. }
            | PointerEvent::Up { id, .. } => id,
        }
    }

    /// Current pointer position.
    pub fn position(&self) -> Vec2 {
        match *self {
            PointerEvent::Down { position, .. } | PointerEvent::Up { position, .. } => position,
            PointerEvent::Move { start, start_delta, .. } => start + start_delta,
        }
    }

    /// The same event with every position shifted by `-origin`.
    ///
    /// Used to convert screen coordinates into a control's local space.
    pub fn relative_to(&self, origin: Vec2) -> Self {
        match *self {
            PointerEvent::Down { id, position } => PointerEvent::Down {
                id,
                position: position - origin,
            },
            PointerEvent::Move { id, start, start_delta } => PointerEvent::Move {
                id,
                start: start - origin,
                start_delta,
            },
            PointerEvent::Up { id, position } => PointerEvent::Up {
                id,
                position: position - origin,
            },
        }
    }
}

/// Turns press/move/release notifications into [`PointerEvent`]s.
///
/// Remembers where each held pointer went down so moves can report the
/// delta since the gesture started. Moves of pointers that are not held
/// produce nothing.
#[derive(Debug, Default)]
pub struct PointerTracker {
    /// Start position of every held pointer.
    held: HashMap<PointerId, Vec2>,
    /// Last known mouse cursor position (winit reports button presses without one).
    cursor: Vec2,
}

impl PointerTracker {
    /// Create a tracker with no held pointers.
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether `id` is currently held down.
    pub fn is_held(&self, id: PointerId) -> bool {
        self.held.contains_key(&id)
    }

    /// Last cursor position seen by [`moved`](Self::moved) or
    /// [`handle_window_event`](Self::handle_window_event).
    pub fn cursor(&self) -> Vec2 {
        self.cursor
    }

    /// A pointer went down.
    ///
    /// A second press of an already held pointer restarts its gesture.
    pub fn press(&mut self, id: PointerId, position: Vec2) -> PointerEvent {
        if id == PointerId::Mouse {
            self.cursor = position;
        }
        self.held.insert(id, position);
        PointerEvent::Down { id, position }
    }

    /// A pointer moved. Returns `None` unless it is held.
    pub fn moved(&mut self, id: PointerId, position: Vec2) -> Option<PointerEvent> {
        if id == PointerId::Mouse {
            self.cursor = position;
        }
        let start = *self.held.get(&id)?;
        Some(PointerEvent::Move {
            id,
            start,
            start_delta: position - start,
        })
    }

    /// A pointer was released. Returns `None` unless it was held.
    pub fn release(&mut self, id: PointerId, position: Vec2) -> Option<PointerEvent> {
        if id == PointerId::Mouse {
            self.cursor = position;
        }
        self.held.remove(&id)?;
        Some(PointerEvent::Up { id, position })
    }

    /// Release every held pointer, e.g. when the window loses focus.
    ///
    /// Returns the `Up` events in no particular order.
    pub fn release_all(&mut self) -> Vec<PointerEvent> {
        let cursor = self.cursor;
        self.held
            .drain()
            .map(|(id, start)| PointerEvent::Up {
                id,
                position: if id == PointerId::Mouse { cursor } else { start },
            })
            .collect()
    }

    /// Process a winit window event.
    ///
    /// Only the left mouse button and touch contacts are pointers; a
    /// cancelled touch is reported as a release.
    pub fn handle_window_event(&mut self, event: &WindowEvent) -> Option<PointerEvent> {
        match event {
            WindowEvent::CursorMoved { position, .. } => {
                let position = Vec2::new(position.x as f32, position.y as f32);
                self.moved(PointerId::Mouse, position)
            }

            WindowEvent::MouseInput {
                state,
                button: MouseButton::Left,
                ..
            } => {
                let cursor = self.cursor;
                match state {
                    ElementState::Pressed => Some(self.press(PointerId::Mouse, cursor)),
                    ElementState::Released => self.release(PointerId::Mouse, cursor),
                }
            }

            WindowEvent::Touch(touch) => {
                let id = PointerId::Touch(touch.id);
                let position = Vec2::new(touch.location.x as f32, touch.location.y as f32);
                match touch.phase {
                    TouchPhase::Started => Some(self.press(id, position)),
                    TouchPhase::Moved => self.moved(id, position),
                    TouchPhase::Ended | TouchPhase::Cancelled => self.release(id, position),
                }
            }

            _ => None,
        }
    }
}
