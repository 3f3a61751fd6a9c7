// SPDX-License-Identifier: MIT OR Apache-2.0
//! Position configuration and partial updates.
//!
//! A [`PositionConfig`] describes a segment in full, with every field
//! defaulting to zero. A [`PositionUpdate`] carries only the fields that
//! change and is merged into an existing [`Position`](crate::Position).

use crate::error::PositionError;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Full time configuration of one scheduled media segment
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PositionConfig {
    /// Offset marking the start of usable media content
    pub media_beginning: f64,
    /// In-media offset where playback of the segment begins
    pub start_seconds: f64,
    /// In-media offset where playback of the segment ends
    pub stop_seconds: f64,
    /// Playhead in media-clock coordinates
    pub current_seconds: f64,
    /// Timeline instant at which `start_seconds` aligns
    pub timeline_start_seconds: f64,
}

impl PositionConfig {
    /// Parse a config from a RON document.
    ///
    /// Keys missing from the document take their defaults.
    pub fn from_ron_str(content: &str) -> Result<Self, PositionError> {
        ron::from_str(content).map_err(|e| PositionError::Parse(e.to_string()))
    }

    /// Serialize to pretty RON
    pub fn to_ron_string(&self) -> Result<String, PositionError> {
        let config = ron::ser::PrettyConfig::default()
            .struct_names(true)
            .enumerate_arrays(false);

        ron::ser::to_string_pretty(self, config).map_err(|e| PositionError::Serialize(e.to_string()))
    }

    /// Load a config from a RON file
    pub fn load(path: &Path) -> Result<Self, PositionError> {
        let content = std::fs::read_to_string(path)?;
        let config = Self::from_ron_str(&content)?;
        tracing::debug!("Loaded position config from {:?}", path);
        Ok(config)
    }

    /// Save the config to a RON file
    pub fn save(&self, path: &Path) -> Result<(), PositionError> {
        let content = self.to_ron_string()?;
        std::fs::write(path, content)?;
        Ok(())
    }
}

/// Partial update merged into a position; `None` keeps the stored value
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PositionUpdate {
    /// New media beginning offset
    pub media_beginning: Option<f64>,
    /// New in-media start offset
    pub start_seconds: Option<f64>,
    /// New in-media stop offset
    pub stop_seconds: Option<f64>,
    /// New playhead
    pub current_seconds: Option<f64>,
    /// New timeline alignment instant
    pub timeline_start_seconds: Option<f64>,
}

impl PositionUpdate {
    /// Create an empty update
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the media beginning offset
    pub fn with_media_beginning(mut self, seconds: f64) -> Self {
        self.media_beginning = Some(seconds);
        self
    }

    /// Set the in-media start offset
    pub fn with_start_seconds(mut self, seconds: f64) -> Self {
        self.start_seconds = Some(seconds);
        self
    }

    /// Set the in-media stop offset
    pub fn with_stop_seconds(mut self, seconds: f64) -> Self {
        self.stop_seconds = Some(seconds);
        self
    }

    /// Set the playhead
    pub fn with_current_seconds(mut self, seconds: f64) -> Self {
        self.current_seconds = Some(seconds);
        self
    }

    /// Set the timeline alignment instant
    pub fn with_timeline_start_seconds(mut self, seconds: f64) -> Self {
        self.timeline_start_seconds = Some(seconds);
        self
    }

    /// Whether the update carries no field at all
    pub fn is_empty(&self) -> bool {
        *self == Self::default()
    }
}

impl From<PositionConfig> for PositionUpdate {
    fn from(config: PositionConfig) -> Self {
        Self {
            media_beginning: Some(config.media_beginning),
            start_seconds: Some(config.start_seconds),
            stop_seconds: Some(config.stop_seconds),
            current_seconds: Some(config.current_seconds),
            timeline_start_seconds: Some(config.timeline_start_seconds),
        }
    }
}
