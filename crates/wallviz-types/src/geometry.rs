//! Rigid-body geometry primitives.
//!
//! Positions are metres in the viewer's fixed frame, orientations are unit
//! quaternions in (w, x, y, z) convention.  Only the operations the marker
//! pipeline needs are provided: rotating a vector and offsetting a pose along
//! its own heading.
//!
//! # Example
//!
//! ```rust
//! use wallviz_types::geometry::{Pose, Quaternion, Vec3};
//!
//! // Facing +Y (90° yaw), 2 m ahead lands at y = 2.
//! let pose = Pose::new(Vec3::zero(), Quaternion::from_yaw(std::f64::consts::FRAC_PI_2));
//! let ahead = pose.offset_along_heading(2.0);
//! assert!(ahead.position.x.abs() < 1e-9);
//! assert!((ahead.position.y - 2.0).abs() < 1e-9);
//! ```

use serde::{Deserialize, Serialize};

// ────────────────────────────────────────────────────────────────────────────
// Vec3
// ────────────────────────────────────────────────────────────────────────────

/// A 3-D point or translation vector.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Vec3 {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Vec3 {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Self { x, y, z }
    }

    pub fn zero() -> Self {
        Self::new(0.0, 0.0, 0.0)
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Quaternion
// ────────────────────────────────────────────────────────────────────────────

/// A unit quaternion representing a 3-D rotation (w, x, y, z convention).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Quaternion {
    pub w: f64,
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Default for Quaternion {
    fn default() -> Self {
        Self::identity()
    }
}

impl Quaternion {
    /// Create a quaternion.  The caller is responsible for providing a unit
    /// quaternion (|q| = 1).
    pub fn new(w: f64, x: f64, y: f64, z: f64) -> Self {
        Self { w, x, y, z }
    }

    /// The identity rotation.
    pub fn identity() -> Self {
        Self::new(1.0, 0.0, 0.0, 0.0)
    }

    /// Rotation of `yaw` radians about the +Z axis.
    pub fn from_yaw(yaw: f64) -> Self {
        let half = yaw * 0.5;
        Self::new(half.cos(), 0.0, 0.0, half.sin())
    }

    /// Rotate a vector by this quaternion: p' = q * p * q*.
    pub fn rotate(self, v: Vec3) -> Vec3 {
        let p = Self::new(0.0, v.x, v.y, v.z);
        let conjugate = Self::new(self.w, -self.x, -self.y, -self.z);
        let rotated = self.hamilton(p).hamilton(conjugate);
        Vec3::new(rotated.x, rotated.y, rotated.z)
    }

    fn hamilton(self, rhs: Self) -> Self {
        Self::new(
            self.w * rhs.w - self.x * rhs.x - self.y * rhs.y - self.z * rhs.z,
            self.w * rhs.x + self.x * rhs.w + self.y * rhs.z - self.z * rhs.y,
            self.w * rhs.y - self.x * rhs.z + self.y * rhs.w + self.z * rhs.x,
            self.w * rhs.z + self.x * rhs.y - self.y * rhs.x + self.z * rhs.w,
        )
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Pose
// ────────────────────────────────────────────────────────────────────────────

/// Position plus orientation of an object in the fixed frame.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Pose {
    pub position: Vec3,
    pub orientation: Quaternion,
}

impl Pose {
    pub fn new(position: Vec3, orientation: Quaternion) -> Self {
        Self {
            position,
            orientation,
        }
    }

    /// Return this pose translated by `offset` expressed in the pose's own
    /// frame.  The orientation is unchanged.
    pub fn offset_by(self, offset: Vec3) -> Self {
        let d = self.orientation.rotate(offset);
        let p = self.position;
        Self::new(Vec3::new(p.x + d.x, p.y + d.y, p.z + d.z), self.orientation)
    }

    /// Return this pose moved `distance` metres along its local +X axis
    /// (the heading).  Negative distances move backwards.
    pub fn offset_along_heading(self, distance: f64) -> Self {
        self.offset_by(Vec3::new(distance, 0.0, 0.0))
    }

    /// Return this pose raised by `dz` metres in the fixed frame.
    pub fn raised(mut self, dz: f64) -> Self {
        self.position.z += dz;
        self
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
