//! [`VirtualWallMarkerCreator`] – the per-session marker engine.
//!
//! Planning modules submit walls during a cycle; once per cycle the owner
//! calls [`VirtualWallMarkerCreator::create_markers`] and forwards the
//! returned [`MarkerArray`] to the viewer.  The creator remembers how many
//! markers each namespace showed, so walls that disappear are explicitly
//! deleted instead of lingering in the scene.
//!
//! # Example
//!
//! ```rust
//! use wallviz_markers::VirtualWallMarkerCreator;
//! use wallviz_types::{Pose, Stamp, VirtualWall, WallStyle};
//!
//! let mut creator = VirtualWallMarkerCreator::new();
//! creator.add_virtual_wall(VirtualWall::new(WallStyle::Stop, Pose::default(), "crosswalk_", "crosswalk"));
//!
//! let first = creator.create_markers(Stamp::new(1, 0));
//! assert_eq!(first.additions().count(), 2); // wall + label
//!
//! // Nothing submitted: both markers are deleted.
//! let second = creator.create_markers(Stamp::new(2, 0));
//! assert_eq!(second.retractions().count(), 2);
//! ```

use tracing::debug;
use wallviz_types::{MarkerArray, Stamp, VirtualWall};

use crate::config::MarkerConfig;
use crate::reconcile::{reconcile, MarkerCount, NamespaceCounters};
use crate::renderer::WallRenderers;
use crate::store::WallSpecStore;

/// Turns the walls submitted each cycle into add/delete marker directives.
///
/// Construct once per session; not internally synchronised, so submissions
/// and [`create_markers`][Self::create_markers] must come from the owning
/// thread (or be serialised by the caller).
#[derive(Debug, Default)]
pub struct VirtualWallMarkerCreator {
    walls: WallSpecStore,
    counters: NamespaceCounters,
    renderers: WallRenderers,
}

impl VirtualWallMarkerCreator {
    /// Creator using the stock renderers and default appearance.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creator using the stock renderers configured by `config`.
    pub fn with_config(config: &MarkerConfig) -> Self {
        Self::with_renderers(WallRenderers::from_config(config))
    }

    /// Creator using caller-supplied renderers.
    pub fn with_renderers(renderers: WallRenderers) -> Self {
        Self {
            walls: WallSpecStore::new(),
            counters: NamespaceCounters::new(),
            renderers,
        }
    }

    /// Queue one wall for the next [`create_markers`][Self::create_markers].
    pub fn add_virtual_wall(&mut self, wall: VirtualWall) {
        self.walls.submit(wall);
    }

    /// Queue several walls, keeping their order.
    pub fn add_virtual_walls<I>(&mut self, walls: I)
    where
        I: IntoIterator<Item = VirtualWall>,
    {
        self.walls.submit_all(walls);
    }

    /// Number of walls queued since the last pass.
    pub fn pending_walls(&self) -> usize {
        self.walls.len()
    }

    /// Namespaces whose markers are still being tracked, in ascending order.
    pub fn tracked_namespaces(&self) -> impl Iterator<Item = &str> {
        self.counters.namespaces()
    }

    /// Counts held for `ns`, or `None` if it is not tracked.
    pub fn marker_count(&self, ns: &str) -> Option<MarkerCount> {
        self.counters.get(ns)
    }

    /// Render the queued walls and delete whatever they no longer cover.
    ///
    /// The queue is always empty afterwards.  Calling twice with nothing
    /// queued in between deletes everything the first call added.
    pub fn create_markers(&mut self, stamp: Stamp) -> MarkerArray {
        let walls = self.walls.take();
        let out = reconcile(
            std::mem::take(&mut self.counters),
            &walls,
            &self.renderers,
            stamp,
        );
        self.counters = out.counters;

        debug!(
            walls = walls.len(),
            added = out.markers.additions().count(),
            deleted = out.markers.retractions().count(),
            tracked = self.counters.len(),
            "virtual wall markers created"
        );
        out.markers
    }
}
