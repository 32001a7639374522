//! Scene-viewer marker message model.
//!
//! The shapes mirror `visualization_msgs/Marker` closely enough that a
//! [`MarkerArray`] serialised with serde can be forwarded to a rosbridge-style
//! viewer as-is: [`MarkerKind`] and [`MarkerAction`] serialise to the integer
//! codes the viewer expects.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::geometry::Pose;

/// Raised when deserialising a marker code the model does not know.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
#[error("unknown marker code {0}")]
pub struct UnknownMarkerCode(pub u8);

// ────────────────────────────────────────────────────────────────────────────
// Header
// ────────────────────────────────────────────────────────────────────────────

/// Point in time attached to a marker header.  Always supplied by the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default, Serialize, Deserialize)]
pub struct Stamp {
    pub sec: i64,
    pub nanosec: u32,
}

impl Stamp {
    pub fn new(sec: i64, nanosec: u32) -> Self {
        Self { sec, nanosec }
    }
}

impl From<DateTime<Utc>> for Stamp {
    fn from(t: DateTime<Utc>) -> Self {
        Self::new(t.timestamp(), t.timestamp_subsec_nanos())
    }
}

#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Header {
    pub frame_id: String,
    pub stamp: Stamp,
}

// ────────────────────────────────────────────────────────────────────────────
// Appearance
// ────────────────────────────────────────────────────────────────────────────

/// RGBA colour, every channel in `[0, 1]`.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct ColorRgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl ColorRgba {
    pub fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Same colour with a different alpha.
    pub fn with_alpha(self, a: f32) -> Self {
        Self { a, ..self }
    }
}

/// Marker extent along each axis (metres).  Text markers only use `z` as the
/// font height.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Scale {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Scale {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }
}

/// Primitive shape of a marker.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MarkerKind {
    #[default]
    Cube,
    TextViewFacing,
}

impl From<MarkerKind> for u8 {
    fn from(kind: MarkerKind) -> Self {
        match kind {
            MarkerKind::Cube => 1,
            MarkerKind::TextViewFacing => 9,
        }
    }
}

impl TryFrom<u8> for MarkerKind {
    type Error = UnknownMarkerCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            1 => Ok(MarkerKind::Cube),
            9 => Ok(MarkerKind::TextViewFacing),
            other => Err(UnknownMarkerCode(other)),
        }
    }
}

/// What the viewer should do with the marker at `(ns, id)`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum MarkerAction {
    /// Add the marker, or replace the one already shown under the same key.
    #[default]
    Add,
    /// Remove the marker shown under the same key.  Every other field is
    /// irrelevant.
    Delete,
}

impl From<MarkerAction> for u8 {
    fn from(action: MarkerAction) -> Self {
        match action {
            MarkerAction::Add => 0,
            MarkerAction::Delete => 2,
        }
    }
}

impl TryFrom<u8> for MarkerAction {
    type Error = UnknownMarkerCode;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(MarkerAction::Add),
            2 => Ok(MarkerAction::Delete),
            other => Err(UnknownMarkerCode(other)),
        }
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Marker
// ────────────────────────────────────────────────────────────────────────────

/// A single additive or retraction directive for the viewer.
///
/// Markers are keyed by `(ns, id)`: an [`MarkerAction::Add`] with a key the
/// viewer already shows replaces it in place.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct Marker {
    pub header: Header,
    pub ns: String,
    pub id: u32,
    #[serde(rename = "type")]
    pub kind: MarkerKind,
    pub action: MarkerAction,
    pub pose: Pose,
    pub scale: Scale,
    pub color: ColorRgba,
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub text: String,
}

impl Marker {
    /// Retraction directive for `(ns, id)`.
    pub fn retraction(ns: impl Into<String>, id: u32) -> Self {
        Self {
            ns: ns.into(),
            id,
            action: MarkerAction::Delete,
            ..Self::default()
        }
    }

    pub fn is_retraction(&self) -> bool {
        self.action == MarkerAction::Delete
    }
}

/// Ordered batch of markers sent to the viewer in one message.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MarkerArray {
    pub markers: Vec<Marker>,
}

impl MarkerArray {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.markers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Markers with [`MarkerAction::Add`].
    pub fn additions(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(|m| !m.is_retraction())
    }

    /// Markers with [`MarkerAction::Delete`].
    pub fn retractions(&self) -> impl Iterator<Item = &Marker> {
        self.markers.iter().filter(|m| m.is_retraction())
    }
}
