use std::hash::{Hash, Hasher};

use geo::Point;

use crate::{Cost, NodeId, WayId};

/// A node of the road graph.
///
/// Coordinates are stored as 32-bit floats in degrees. Equality and
/// hashing go by identity only; the spatial attributes are immutable
/// once the node is part of a graph.
#[derive(Debug, Clone, Copy)]
pub struct RoadNode {
    /// Internal id of the node
    pub id: NodeId,
    /// Latitude in degrees
    pub lat: f32,
    /// Longitude in degrees
    pub lon: f32,
}

impl RoadNode {
    pub fn new(id: NodeId, lat: f32, lon: f32) -> Self {
        Self { id, lat, lon }
    }

    /// A node with no meaningful position, for graph tests that only
    /// care about identities.
    pub fn bare(id: NodeId) -> Self {
        Self::new(id, 0.0, 0.0)
    }

    /// Position of the node as a `geo` point (x = longitude, y = latitude).
    pub fn point(&self) -> Point<f64> {
        Point::new(f64::from(self.lon), f64::from(self.lat))
    }
}

impl PartialEq for RoadNode {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for RoadNode {}

impl Hash for RoadNode {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

/// A directed edge of the road graph.
///
/// `cost` is the traversal time in seconds at the speed limit of the
/// way the edge belongs to; edges of the same OSM way share `way_id`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoadEdge {
    /// Id of the node the edge leaves
    pub source: NodeId,
    /// Id of the node the edge enters
    pub destination: NodeId,
    /// Traversal time in seconds, non-negative
    pub cost: Cost,
    /// Internal id of the way the edge belongs to
    pub way_id: WayId,
}

impl RoadEdge {
    pub fn new(source: NodeId, destination: NodeId, cost: Cost, way_id: WayId) -> Self {
        debug_assert!(cost >= 0.0, "edge costs must be non-negative");
        Self {
            source,
            destination,
            cost,
            way_id,
        }
    }

    /// The same edge with its orientation flipped.
    pub fn reversed(&self) -> Self {
        Self {
            source: self.destination,
            destination: self.source,
            cost: self.cost,
            way_id: self.way_id,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use hashbrown::HashSet;

    #[test]
    fn node_equality_is_by_identity() {
        let a = RoadNode::new(7, 48.0, 7.8);
        let b = RoadNode::new(7, 52.5, 13.4);
        let c = RoadNode::bare(8);
        assert_eq!(a, b);
        assert_ne!(a, c);

        let mut set = HashSet::new();
        set.insert(a);
        assert!(set.contains(&b));
        assert!(!set.contains(&c));
    }

    #[test]
    fn edge_reversal_flips_endpoints_only() {
        let edge = RoadEdge::new(1, 2, 4.5, 9);
        let reversed = edge.reversed();
        assert_eq!(reversed.source, 2);
        assert_eq!(reversed.destination, 1);
        assert_eq!(reversed.cost, 4.5);
        assert_eq!(reversed.way_id, 9);
        assert_eq!(reversed.reversed(), edge);
    }

    #[test]
    fn point_uses_lon_as_x() {
        let node = RoadNode::new(1, 48.0, 7.8);
        let point = node.point();
        assert!((point.x() - 7.8).abs() < 1e-6);
        assert!((point.y() - 48.0).abs() < 1e-6);
    }
}
