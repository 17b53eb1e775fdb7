use hashbrown::HashMap;

use super::Metric;
use crate::model::RoadNode;
use crate::{Cost, NodeId};

/// Shortest-path cost tables of one landmark, built once after the
/// graph is frozen and read-only thereafter.
#[derive(Debug, Clone)]
pub struct LandmarkTable {
    landmark: NodeId,
    /// d(landmark, node) over forward edges
    from_landmark: HashMap<NodeId, Cost>,
    /// d(node, landmark), computed on the reversed graph
    to_landmark: HashMap<NodeId, Cost>,
}

impl LandmarkTable {
    pub fn new(
        landmark: NodeId,
        from_landmark: HashMap<NodeId, Cost>,
        to_landmark: HashMap<NodeId, Cost>,
    ) -> Self {
        Self {
            landmark,
            from_landmark,
            to_landmark,
        }
    }

    pub fn landmark(&self) -> NodeId {
        self.landmark
    }

    /// Triangle-inequality lower bound on d(a, b) contributed by this
    /// landmark. A direction is skipped when either node is
    /// unreachable in it; `None` means neither direction applies.
    fn lower_bound(&self, a: NodeId, b: NodeId) -> Option<Cost> {
        let forward = self
            .from_landmark
            .get(&b)
            .zip(self.from_landmark.get(&a))
            .map(|(to_b, to_a)| to_b - to_a);
        let backward = self
            .to_landmark
            .get(&a)
            .zip(self.to_landmark.get(&b))
            .map(|(from_a, from_b)| from_a - from_b);
        match (forward, backward) {
            (None, None) => None,
            (forward, backward) => Some(
                forward
                    .unwrap_or(0.0)
                    .max(backward.unwrap_or(0.0))
                    .max(0.0),
            ),
        }
    }
}

/// ALT metric: the best landmark lower bound.
///
/// Not necessarily symmetric; zero when no landmark covers the pair.
pub struct LandmarkMetric {
    tables: Vec<LandmarkTable>,
}

impl LandmarkMetric {
    pub fn new(tables: Vec<LandmarkTable>) -> Self {
        Self { tables }
    }

    pub fn landmarks(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.tables.iter().map(LandmarkTable::landmark)
    }

    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

impl Metric for LandmarkMetric {
    fn distance(&self, a: &RoadNode, b: &RoadNode) -> Cost {
        self.tables
            .iter()
            .filter_map(|table| table.lower_bound(a.id, b.id))
            .fold(0.0, Cost::max)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn table(landmark: NodeId, from: &[(NodeId, Cost)], to: &[(NodeId, Cost)]) -> LandmarkTable {
        LandmarkTable::new(
            landmark,
            from.iter().copied().collect(),
            to.iter().copied().collect(),
        )
    }

    #[test]
    fn bound_is_the_best_directed_difference() {
        // On a line 0 -(3s)- 1 -(4s)- 2 with landmark 0:
        // d(0, 1) = 3, d(0, 2) = 7, so d(1, 2) >= 4.
        let metric = LandmarkMetric::new(vec![table(
            0,
            &[(0, 0.0), (1, 3.0), (2, 7.0)],
            &[(0, 0.0), (1, 3.0), (2, 7.0)],
        )]);
        let a = RoadNode::bare(1);
        let b = RoadNode::bare(2);
        assert!((metric.distance(&a, &b) - 4.0).abs() < 1e-12);
        assert!((metric.distance(&b, &a) - 4.0).abs() < 1e-12);
    }

    #[test]
    fn unreachable_landmarks_are_skipped() {
        let covered = table(0, &[(1, 2.0), (2, 9.0)], &[]);
        let uncovered = table(5, &[(1, 1.0)], &[(2, 1.0)]);
        let metric = LandmarkMetric::new(vec![covered, uncovered]);
        let a = RoadNode::bare(1);
        let b = RoadNode::bare(2);
        // Only the first table covers both nodes in one direction
        assert!((metric.distance(&a, &b) - 7.0).abs() < 1e-12);
    }

    #[test]
    fn no_usable_landmark_means_zero() {
        let metric = LandmarkMetric::new(vec![table(0, &[(1, 2.0)], &[(1, 2.0)])]);
        let a = RoadNode::bare(3);
        let b = RoadNode::bare(4);
        assert_eq!(metric.distance(&a, &b), 0.0);
        assert!(!metric.is_empty());
        assert!(LandmarkMetric::new(Vec::new()).is_empty());
    }

    #[test]
    fn bound_never_goes_negative() {
        let metric = LandmarkMetric::new(vec![table(0, &[(1, 9.0), (2, 2.0)], &[])]);
        let a = RoadNode::bare(1);
        let b = RoadNode::bare(2);
        assert_eq!(metric.distance(&a, &b), 0.0);
    }
}
