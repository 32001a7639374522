//! `wallviz-types` – shared data model.
//!
//! # Modules
//!
//! - [`geometry`] – [`Vec3`], [`Quaternion`] and [`Pose`], with the pose
//!   offset used to place walls ahead of their anchor.
//! - [`marker`] – [`Marker`] / [`MarkerArray`]: the additive and retraction
//!   directives consumed by the scene viewer.
//! - [`wall`] – [`VirtualWall`] and the closed [`WallStyle`] set.

pub mod geometry;
pub mod marker;
pub mod wall;

pub use geometry::{Pose, Quaternion, Vec3};
pub use marker::{
    ColorRgba, Header, Marker, MarkerAction, MarkerArray, MarkerKind, Scale, Stamp,
    UnknownMarkerCode,
};
pub use wall::{VirtualWall, WallStyle};
