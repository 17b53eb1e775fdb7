//! Landmark selection for the ALT heuristic.

use std::sync::Arc;

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use rayon::prelude::*;

use crate::model::RoadGraph;
use crate::routing::dijkstra::ModularDijkstra;
use crate::routing::metrics::LandmarkTable;
use crate::NodeId;

/// Greedy farthest-point landmark selection.
///
/// The first landmark is drawn uniformly at random; every further one
/// is the node with the greatest shortest-path cost from the set picked
/// so far. Ties settle on the lowest node id, nodes unreachable from
/// every landmark are ignored.
pub struct GreedyFarthestLandmarks {
    graph: Arc<RoadGraph>,
    rng: StdRng,
}

impl GreedyFarthestLandmarks {
    pub fn new(graph: Arc<RoadGraph>) -> Self {
        Self {
            graph,
            rng: StdRng::from_entropy(),
        }
    }

    /// A provider with a fixed seed, for reproducible selections.
    pub fn with_seed(graph: Arc<RoadGraph>, seed: u64) -> Self {
        Self {
            graph,
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Picks up to `amount` landmarks; the amount silently clamps to
    /// the node count.
    pub fn select(&mut self, amount: usize) -> Vec<NodeId> {
        let ids = self.graph.node_ids();
        if ids.is_empty() || amount == 0 {
            return Vec::new();
        }
        let amount = amount.min(ids.len());

        let mut landmarks = Vec::with_capacity(amount);
        landmarks.push(ids[self.rng.gen_range(0..ids.len())]);

        let engine = ModularDijkstra::new(Arc::clone(&self.graph));
        while landmarks.len() < amount {
            let costs = engine.shortest_path_costs(&landmarks);
            let farthest = costs
                .iter()
                .filter(|(node, _)| !landmarks.contains(*node))
                .max_by(|a, b| a.1.total_cmp(b.1).then_with(|| b.0.cmp(a.0)))
                .map(|(&node, _)| node);
            match farthest {
                Some(node) => landmarks.push(node),
                // Nothing reachable beyond the current set
                None => break,
            }
        }
        landmarks
    }

    /// Builds the cost tables of the given landmarks, one forward and
    /// one backward one-to-all run each.
    pub fn build_tables(&self, landmarks: &[NodeId]) -> Vec<LandmarkTable> {
        let reversed = Arc::new(self.graph.reverse());
        let tables: Vec<LandmarkTable> = landmarks
            .par_iter()
            .map(|&landmark| {
                let forward =
                    ModularDijkstra::new(Arc::clone(&self.graph)).shortest_path_costs(&[landmark]);
                let backward =
                    ModularDijkstra::new(Arc::clone(&reversed)).shortest_path_costs(&[landmark]);
                LandmarkTable::new(landmark, forward, backward)
            })
            .collect();
        info!("Built cost tables for {} landmarks", tables.len());
        tables
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RoadEdge, RoadNode};
    use crate::routing::metrics::{LandmarkMetric, Metric};
    use hashbrown::HashSet;

    /// A 10 by 10 grid with bidirectional unit-cost edges between
    /// 4-neighbors; node id = row * 10 + column.
    fn grid() -> Arc<RoadGraph> {
        let mut graph = RoadGraph::new();
        for row in 0..10 {
            for column in 0..10 {
                graph.add_node(RoadNode::bare(row * 10 + column));
            }
        }
        for row in 0..10i64 {
            for column in 0..10i64 {
                let id = row * 10 + column;
                if column < 9 {
                    graph.add_edge(RoadEdge::new(id, id + 1, 1.0, 0));
                    graph.add_edge(RoadEdge::new(id + 1, id, 1.0, 0));
                }
                if row < 9 {
                    graph.add_edge(RoadEdge::new(id, id + 10, 1.0, 0));
                    graph.add_edge(RoadEdge::new(id + 10, id, 1.0, 0));
                }
            }
        }
        Arc::new(graph)
    }

    #[test]
    fn selects_distinct_reachable_landmarks() {
        let graph = grid();
        let mut provider = GreedyFarthestLandmarks::with_seed(Arc::clone(&graph), 42);
        let landmarks = provider.select(5);
        assert_eq!(landmarks.len(), 5);
        let distinct: HashSet<NodeId> = landmarks.iter().copied().collect();
        assert_eq!(distinct.len(), 5);
        for landmark in &landmarks {
            assert!(graph.contains_node(*landmark));
        }
    }

    #[test]
    fn selection_is_reproducible_under_a_seed() {
        let graph = grid();
        let first = GreedyFarthestLandmarks::with_seed(Arc::clone(&graph), 7).select(4);
        let second = GreedyFarthestLandmarks::with_seed(graph, 7).select(4);
        assert_eq!(first, second);
    }

    #[test]
    fn amount_clamps_to_the_node_count() {
        let graph = grid();
        let mut provider = GreedyFarthestLandmarks::with_seed(graph, 3);
        assert_eq!(provider.select(500).len(), 100);
    }

    #[test]
    fn empty_graph_yields_no_landmarks() {
        let graph = Arc::new(RoadGraph::new());
        let mut provider = GreedyFarthestLandmarks::with_seed(graph, 3);
        assert!(provider.select(5).is_empty());
    }

    #[test]
    fn disconnected_remainder_is_ignored() {
        let mut graph = RoadGraph::new();
        for id in 0..4 {
            graph.add_node(RoadNode::bare(id));
        }
        // 3 is unreachable from everything else
        graph.add_edge(RoadEdge::new(0, 1, 1.0, 0));
        graph.add_edge(RoadEdge::new(1, 0, 1.0, 0));
        graph.add_edge(RoadEdge::new(1, 2, 1.0, 0));
        graph.add_edge(RoadEdge::new(2, 1, 1.0, 0));
        let mut provider = GreedyFarthestLandmarks::with_seed(Arc::new(graph), 1);
        let landmarks = provider.select(4);
        // The unreachable node can only ever be the random first pick
        assert!(landmarks.len() < 4);
        assert!(!landmarks[1..].contains(&3));
    }

    #[test]
    fn landmark_estimates_never_exceed_true_costs() {
        let graph = grid();
        let mut provider = GreedyFarthestLandmarks::with_seed(Arc::clone(&graph), 42);
        let landmarks = provider.select(5);
        let metric = LandmarkMetric::new(provider.build_tables(&landmarks));
        let engine = ModularDijkstra::new(Arc::clone(&graph));

        let mut rng = StdRng::seed_from_u64(4242);
        for _ in 0..1000 {
            let a = rng.gen_range(0..100);
            let b = rng.gen_range(0..100);
            let truth = engine
                .shortest_path(&[a], b)
                .map(|path| path.total_cost())
                .unwrap();
            let estimate = metric.distance(graph.node(a).unwrap(), graph.node(b).unwrap());
            assert!(
                estimate <= truth + 1e-9,
                "estimate {estimate} exceeds true cost {truth} for ({a}, {b})"
            );
        }
    }
}
