//! Per-cycle accumulation of wall specifications.

use wallviz_types::VirtualWall;

/// Walls submitted since the last generation pass, in submission order.
///
/// Append-only between passes; drained by [`WallSpecStore::take`].
#[derive(Debug, Clone, Default)]
pub struct WallSpecStore {
    walls: Vec<VirtualWall>,
}

impl WallSpecStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one wall.  No validation is performed.
    pub fn submit(&mut self, wall: VirtualWall) {
        self.walls.push(wall);
    }

    /// Append several walls, keeping their relative order.
    pub fn submit_all<I>(&mut self, walls: I)
    where
        I: IntoIterator<Item = VirtualWall>,
    {
        self.walls.extend(walls);
    }

    pub fn len(&self) -> usize {
        self.walls.len()
    }

    pub fn is_empty(&self) -> bool {
        self.walls.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &VirtualWall> {
        self.walls.iter()
    }

    /// Remove and return every stored wall, leaving the store empty.
    pub fn take(&mut self) -> Vec<VirtualWall> {
        std::mem::take(&mut self.walls)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use wallviz_types::{Pose, WallStyle};

    fn wall(ns: &str) -> VirtualWall {
        VirtualWall::new(WallStyle::Stop, Pose::default(), ns, "")
    }

    #[test]
    fn submit_all_equals_repeated_submit() {
        let mut a = WallSpecStore::new();
        a.submit(wall("x"));
        a.submit(wall("y"));

        let mut b = WallSpecStore::new();
        b.submit_all(vec![wall("x"), wall("y")]);

        let ns_a: Vec<_> = a.iter().map(|w| w.ns.clone()).collect();
        let ns_b: Vec<_> = b.iter().map(|w| w.ns.clone()).collect();
        assert_eq!(ns_a, ns_b);
        assert_eq!(ns_a, ["x", "y"]);
    }

    #[test]
    fn take_drains_in_order() {
        let mut store = WallSpecStore::new();
        store.submit(wall("first"));
        store.submit_all([wall("second"), wall("third")]);
        assert_eq!(store.len(), 3);

        let drained = store.take();
        assert!(store.is_empty());
        assert_eq!(drained[0].ns, "first");
        assert_eq!(drained[2].ns, "third");
    }
}
