// SPDX-License-Identifier: MIT OR Apache-2.0
//! Timeline and media clock mapping for a scheduled media segment.
//!
//! A [`Position`] answers two questions for one segment:
//! - Given a timeline instant (TCT), what is the media instant (MCT), and back
//! - Should the segment be playing at a given timeline instant
//!
//! ## Architecture
//!
//! The crate is built on:
//! - [`PositionConfig`] for the full segment setup, loadable from RON
//! - [`PositionUpdate`] for partial, merging updates
//! - [`PositionValues`] snapshots for reading state
//! - [`bound_within`] clamping helper

pub mod bound;
pub mod config;
pub mod error;
pub mod position;

pub use bound::{bound_within, try_bound_within};
pub use config::{PositionConfig, PositionUpdate};
pub use error::PositionError;
pub use position::{Position, PositionValues};
