// SPDX-License-Identifier: MIT OR Apache-2.0
//! Segment position on the timeline and media clocks.
//!
//! A segment places the `[start_seconds, stop_seconds]` window of a clip
//! onto the timeline so that `start_seconds` lines up with
//! `timeline_start_seconds`. The two clocks differ by a constant offset:
//!
//! ```text
//! mct = (tct - timeline_start_seconds) + start_seconds
//! tct = (mct - start_seconds) + timeline_start_seconds
//! ```
//!
//! The two mappings are inverses up to `f64` rounding: a round trip may land
//! one ULP away from the input when the offsets are not exactly
//! representable.

use crate::bound;
use crate::config::{PositionConfig, PositionUpdate};
use crate::error::PositionError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Snapshot of a position's fields
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct PositionValues {
    /// Offset marking the start of usable media content
    pub media_beginning: f64,
    /// In-media start offset
    pub start_seconds: f64,
    /// In-media stop offset
    pub stop_seconds: f64,
    /// Playhead in media-clock coordinates
    pub current_seconds: f64,
    /// Timeline instant aligned with `start_seconds`
    pub timeline_start_seconds: f64,
    /// `stop_seconds - start_seconds`
    pub media_duration: f64,
    /// Timeline instant of the playhead
    pub calculated_tct: f64,
}

impl fmt::Display for PositionValues {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Position {{ media_beginning: {}, start_seconds: {}, stop_seconds: {}, \
             current_seconds: {}, timeline_start_seconds: {}, media_duration: {}, \
             calculated_tct: {} }}",
            self.media_beginning,
            self.start_seconds,
            self.stop_seconds,
            self.current_seconds,
            self.timeline_start_seconds,
            self.media_duration,
            self.calculated_tct,
        )
    }
}

/// Position of one scheduled media segment.
///
/// Holds the segment's time configuration and its playhead. The playhead is
/// not tied to `[start_seconds, stop_seconds]`: it may sit before the start
/// or past the stop, and [`Position::is_media_to_play`] is how callers tell.
#[derive(Debug, Clone, PartialEq)]
pub struct Position {
    media_beginning: f64,
    start_seconds: f64,
    stop_seconds: f64,
    current_seconds: f64,
    timeline_start_seconds: f64,
    media_duration: f64,
}

impl Position {
    /// Create a position from a full config
    pub fn new(config: PositionConfig) -> Self {
        let mut position = Self {
            media_beginning: 0.0,
            start_seconds: 0.0,
            stop_seconds: 0.0,
            current_seconds: 0.0,
            timeline_start_seconds: 0.0,
            media_duration: 0.0,
        };
        position.update_values(config.into());
        position
    }

    /// Merge `update` into the stored fields and return the new snapshot.
    ///
    /// Fields left as `None` keep their current value. The media duration is
    /// recomputed on every call and may come out negative; no validation is
    /// done here, see [`Position::validate`].
    pub fn update_values(&mut self, update: PositionUpdate) -> PositionValues {
        if let Some(seconds) = update.media_beginning {
            self.media_beginning = seconds;
        }
        if let Some(seconds) = update.start_seconds {
            self.start_seconds = seconds;
        }
        if let Some(seconds) = update.stop_seconds {
            self.stop_seconds = seconds;
        }
        if let Some(seconds) = update.current_seconds {
            self.current_seconds = seconds;
        }
        if let Some(seconds) = update.timeline_start_seconds {
            self.timeline_start_seconds = seconds;
        }

        self.media_duration = self.stop_seconds - self.start_seconds;
        if self.media_duration < 0.0 {
            tracing::debug!(
                "Position has negative media duration: start {} stop {}",
                self.start_seconds,
                self.stop_seconds
            );
        }

        self.values()
    }

    /// Snapshot of the stored fields
    pub fn values(&self) -> PositionValues {
        PositionValues {
            media_beginning: self.media_beginning,
            start_seconds: self.start_seconds,
            stop_seconds: self.stop_seconds,
            current_seconds: self.current_seconds,
            timeline_start_seconds: self.timeline_start_seconds,
            media_duration: self.media_duration,
            calculated_tct: self.current_tct(),
        }
    }

    /// Media beginning offset
    pub fn media_beginning(&self) -> f64 {
        self.media_beginning
    }

    /// In-media start offset
    pub fn start_seconds(&self) -> f64 {
        self.start_seconds
    }

    /// In-media stop offset
    pub fn stop_seconds(&self) -> f64 {
        self.stop_seconds
    }

    /// Playhead in media-clock coordinates
    pub fn current_seconds(&self) -> f64 {
        self.current_seconds
    }

    /// Timeline instant aligned with the start offset
    pub fn timeline_start_seconds(&self) -> f64 {
        self.timeline_start_seconds
    }

    /// Length of the segment in media time
    pub fn media_duration(&self) -> f64 {
        self.media_duration
    }

    /// Clamp `value` into `[lower, upper]`, see [`bound::bound_within`]
    pub fn bound_within(value: f64, lower: f64, upper: f64) -> f64 {
        bound::bound_within(value, lower, upper)
    }

    /// Map a timeline instant to media time. Not clamped.
    pub fn calculate_mct(&self, tct: f64) -> f64 {
        (tct - self.timeline_start_seconds) + self.start_seconds
    }

    /// Media time of the timeline instant implied by the playhead
    pub fn current_mct(&self) -> f64 {
        self.current_seconds
    }

    /// Map a timeline instant to media time and move the playhead there
    pub fn update_mct(&mut self, tct: f64) -> f64 {
        self.current_seconds = self.calculate_mct(tct);
        tracing::trace!("Playhead moved to {} (tct {})", self.current_seconds, tct);
        self.current_seconds
    }

    /// Map a media instant to timeline time
    pub fn calculate_tct(&self, mct: f64) -> f64 {
        (mct - self.start_seconds) + self.timeline_start_seconds
    }

    /// Timeline time of the playhead
    pub fn current_tct(&self) -> f64 {
        self.calculate_tct(self.current_seconds)
    }

    /// Timeline instant at which the segment stops
    pub fn timeline_stop_seconds(&self) -> f64 {
        self.calculate_tct(self.stop_seconds)
    }

    /// Whether the segment should be playing at timeline instant `tct`.
    ///
    /// Both ends of `[start_seconds, stop_seconds]` count as playable.
    pub fn is_media_to_play(&self, tct: f64) -> bool {
        let mct = self.calculate_mct(tct);
        self.start_seconds <= mct && mct <= self.stop_seconds
    }

    /// Whether the segment starts somewhere other than the media beginning
    pub fn is_media_beginning_offset(&self) -> bool {
        self.start_seconds != self.media_beginning
    }

    /// Check the stored fields for NaN and for a stop before the start
    pub fn validate(&self) -> Result<(), PositionError> {
        let fields = [
            self.media_beginning,
            self.start_seconds,
            self.stop_seconds,
            self.current_seconds,
            self.timeline_start_seconds,
        ];
        if fields.iter().any(|v| v.is_nan()) {
            return Err(PositionError::NotANumber);
        }
        if self.stop_seconds < self.start_seconds {
            return Err(PositionError::NegativeDuration {
                start: self.start_seconds,
                stop: self.stop_seconds,
            });
        }
        Ok(())
    }
}

impl Default for Position {
    fn default() -> Self {
        Self::new(PositionConfig::default())
    }
}

impl From<PositionConfig> for Position {
    fn from(config: PositionConfig) -> Self {
        Self::new(config)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.values().fmt(f)
    }
}
