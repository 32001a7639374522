//! Desired-vs-shown reconciliation of wall markers.
//!
//! [`reconcile`] is a pure function from the previous [`NamespaceCounters`]
//! and this cycle's walls to the next counters and the marker payload.  One
//! pass runs four phases:
//!
//! 1. **Snapshot** – every tracked namespace moves `current` into `previous`
//!    and restarts `current` at zero.
//! 2. **Emission** – walls are rendered in submission order; each returned
//!    marker gets the next free id of its namespace.
//! 3. **Retraction** – for each namespace, ids in `[current, previous)` were
//!    shown last cycle and are not reused, so a delete is emitted for each.
//! 4. **Pruning** – namespaces at zero in both cycles are forgotten.
//!
//! After a pass the ids in use for a namespace are exactly `[0, current)`.
//! Counters are kept in a `BTreeMap`, so retractions come out ordered by
//! namespace and the whole payload is a function of the inputs only.

use std::collections::BTreeMap;

use tracing::trace;
use wallviz_types::{Marker, MarkerAction, MarkerArray, Stamp, VirtualWall};

use crate::renderer::{WallRenderRequest, WallRenderers};

// ────────────────────────────────────────────────────────────────────────────
// Counters
// ────────────────────────────────────────────────────────────────────────────

/// Markers shown for one namespace in the previous and the current cycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct MarkerCount {
    pub previous: u32,
    pub current: u32,
}

impl MarkerCount {
    fn is_unused(self) -> bool {
        self.previous == 0 && self.current == 0
    }
}

/// Per-namespace marker counts carried from one cycle to the next.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NamespaceCounters {
    counts: BTreeMap<String, MarkerCount>,
}

impl NamespaceCounters {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, ns: &str) -> Option<MarkerCount> {
        self.counts.get(ns).copied()
    }

    pub fn len(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Tracked namespaces in ascending order.
    pub fn namespaces(&self) -> impl Iterator<Item = &str> {
        self.counts.keys().map(String::as_str)
    }

    fn snapshot(&mut self) {
        for count in self.counts.values_mut() {
            count.previous = count.current;
            count.current = 0;
        }
    }

    /// Claim the next id in `ns`, creating the entry on first use.
    fn next_id(&mut self, ns: &str) -> u32 {
        let count = self.counts.entry(ns.to_string()).or_default();
        let id = count.current;
        count.current += 1;
        id
    }

    fn retractions(&self) -> impl Iterator<Item = Marker> + '_ {
        self.counts
            .iter()
            .flat_map(|(ns, count)| {
                (count.current..count.previous).map(move |id| Marker::retraction(ns.as_str(), id))
            })
    }

    fn prune(&mut self) {
        self.counts.retain(|ns, count| {
            let keep = !count.is_unused();
            if !keep {
                trace!(ns = %ns, "retiring marker namespace");
            }
            keep
        });
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Reconciliation pass
// ────────────────────────────────────────────────────────────────────────────

/// Outcome of one [`reconcile`] pass.
#[derive(Debug, Clone, PartialEq)]
pub struct Reconciliation {
    /// State to carry into the next pass.
    pub counters: NamespaceCounters,
    /// Additive directives (submission order) followed by retractions.
    pub markers: MarkerArray,
}

/// Run one snapshot / emit / retract / prune pass.
pub fn reconcile(
    mut counters: NamespaceCounters,
    walls: &[VirtualWall],
    renderers: &WallRenderers,
    stamp: Stamp,
) -> Reconciliation {
    counters.snapshot();

    let mut markers = Vec::new();
    for wall in walls {
        let request = WallRenderRequest {
            pose: &wall.pose,
            text: &wall.text,
            stamp,
            base_id: 0,
            longitudinal_offset: wall.longitudinal_offset,
            ns_prefix: &wall.ns,
        };
        for mut marker in renderers.for_style(wall.style).render(&request) {
            marker.id = counters.next_id(&marker.ns);
            marker.action = MarkerAction::Add;
            markers.push(marker);
        }
    }

    markers.extend(counters.retractions());
    counters.prune();

    Reconciliation {
        counters,
        markers: MarkerArray { markers },
    }
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
