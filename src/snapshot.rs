//! Persisted toy state.
//!
//! A [`Snapshot`] is the five numbers needed to restore the toy: the four
//! slider-driven engine parameters and the background opacity. Every field
//! is optional on load and falls back to the scene default, so snapshots
//! written by older builds keep working.
//!
//! ```
//! use ringtoy::Snapshot;
//!
//! let snap = Snapshot::from_json(r#"{ "speed": 12.5, "bgOpacity": 0.4 }"#).unwrap();
//! assert_eq!(snap.speed, 12.5);
//! assert_eq!(snap.bg_opacity, 0.4);
//! assert_eq!(snap.scale, Snapshot::default().scale);
//! ```

use crate::error::SnapshotError;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Plain-data copy of the toy parameters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Snapshot {
    /// Oscillation speed.
    pub speed: f32,
    /// Particle scale (drives the ring radius).
    pub scale: f32,
    /// Number of animated particles.
    pub object_count: f32,
    /// Particle opacity.
    pub opacity: f32,
    /// Background opacity.
    pub bg_opacity: f32,
}

impl Default for Snapshot {
    fn default() -> Self {
        Self {
            speed: 1.0,
            scale: 0.5,
            object_count: 32.0,
            opacity: 0.5,
            bg_opacity: 0.0,
        }
    }
}

impl Snapshot {
    /// Serialize to pretty-printed JSON.
    pub fn to_json(&self) -> Result<String, SnapshotError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Parse from JSON. Missing fields take their defaults.
    pub fn from_json(json: &str) -> Result<Self, SnapshotError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Save to a JSON file.
    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SnapshotError> {
        let path = path.as_ref();
        fs::write(path, self.to_json()?)?;
        tracing::info!(path = %path.display(), "snapshot saved");
        Ok(())
    }

    /// Load from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SnapshotError> {
        let path = path.as_ref();
        let snapshot = Self::from_json(&fs::read_to_string(path)?)?;
        tracing::info!(path = %path.display(), "snapshot loaded");
        Ok(snapshot)
    }
}
