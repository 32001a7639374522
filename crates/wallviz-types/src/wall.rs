//! Virtual wall specification submitted by planning modules each cycle.

use serde::{Deserialize, Serialize};

use crate::geometry::Pose;

/// Visual style of a virtual wall.  The set is closed: every consumer
/// matches on it exhaustively.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WallStyle {
    /// The vehicle must stop at the wall.
    #[default]
    Stop,
    /// The vehicle must slow down from the wall onwards.
    Slowdown,
    /// Last point at which an action must have been taken.
    Deadline,
}

impl WallStyle {
    /// Token used to build the style's marker namespaces.
    pub fn ns_token(self) -> &'static str {
        match self {
            WallStyle::Stop => "stop",
            WallStyle::Slowdown => "slow_down",
            WallStyle::Deadline => "dead_line",
        }
    }
}

impl std::fmt::Display for WallStyle {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.ns_token())
    }
}

/// One planning constraint to be drawn this cycle.
///
/// `ns` is used as the namespace prefix handed to the renderer; the markers
/// it produces may live in `ns` itself or in style-derived sub-namespaces.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct VirtualWall {
    pub pose: Pose,
    pub text: String,
    pub ns: String,
    pub style: WallStyle,
    /// Distance (metres) the wall is moved along the pose heading before
    /// drawing.
    pub longitudinal_offset: f64,
}

impl VirtualWall {
    pub fn new(style: WallStyle, pose: Pose, ns: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            pose,
            text: text.into(),
            ns: ns.into(),
            style,
            longitudinal_offset: 0.0,
        }
    }

    pub fn with_longitudinal_offset(mut self, offset: f64) -> Self {
        self.longitudinal_offset = offset;
        self
    }
}
