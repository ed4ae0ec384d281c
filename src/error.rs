//! Error types for ringtoy.
//!
//! This module provides error types for range configuration and for
//! snapshot persistence, the only operations in the crate that can fail.

use std::fmt;

/// A min/max assignment that would invert or collapse a range.
///
/// Returned when `min >= max` or when either bound is not finite. This is a
/// configuration error: callers are expected to propagate it rather than
/// clamp around it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RangeError {
    /// The rejected lower bound.
    pub min: f32,
    /// The rejected upper bound.
    pub max: f32,
}

impl RangeError {
    pub(crate) fn new(min: f32, max: f32) -> Self {
        Self { min, max }
    }
}

impl fmt::Display for RangeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.min.is_finite() || !self.max.is_finite() {
            write!(f, "Range bounds must be finite (min={}, max={})", self.min, self.max)
        } else if self.min == self.max {
            write!(f, "Range is empty: min={} equals max={}", self.min, self.max)
        } else {
            write!(f, "Range is inverted: min={} is greater than max={}", self.min, self.max)
        }
    }
}

impl std::error::Error for RangeError {}

/// Errors that can occur while saving or loading a [`Snapshot`](crate::Snapshot).
#[derive(Debug)]
pub enum SnapshotError {
    /// Failed to read or write the snapshot file.
    Io(std::io::Error),
    /// The snapshot was not valid JSON, or a field had the wrong type.
    Json(serde_json::Error),
}

impl fmt::Display for SnapshotError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SnapshotError::Io(e) => write!(f, "Failed to access snapshot file: {}", e),
            SnapshotError::Json(e) => write!(f, "Failed to parse snapshot: {}", e),
        }
    }
}

impl std::error::Error for SnapshotError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            SnapshotError::Io(e) => Some(e),
            SnapshotError::Json(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for SnapshotError {
    fn from(e: std::io::Error) -> Self {
        SnapshotError::Io(e)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(e: serde_json::Error) -> Self {
        SnapshotError::Json(e)
    }
}
