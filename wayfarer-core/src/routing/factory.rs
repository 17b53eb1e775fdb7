//! Assembly of ready-to-run shortest-path engines.

use std::sync::Arc;

use log::info;

use crate::model::RoadGraph;
use crate::routing::dijkstra::{AStar, DijkstraModule, ModularDijkstra};
use crate::routing::landmarks::GreedyFarthestLandmarks;
use crate::routing::metrics::{AsTheCrowFlies, LandmarkMetric, Metric};

/// Which heuristic the factory wires into created engines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HeuristicPolicy {
    /// Plain Dijkstra without estimates.
    None,
    /// A-star with the straight-line travel-time bound.
    CrowFlies { max_speed_kmh: f64 },
    /// A-star with landmark (ALT) lower bounds.
    Landmarks { amount: usize },
}

/// Builds shortest-path engines pre-wired for one policy.
///
/// Landmark tables are computed once at construction and shared by all
/// engines, as is the graph, so handing out a fresh engine per request
/// is cheap.
pub struct ComputationFactory {
    graph: Arc<RoadGraph>,
    metric: Option<Arc<dyn Metric>>,
}

impl ComputationFactory {
    pub fn new(graph: Arc<RoadGraph>, policy: HeuristicPolicy) -> Self {
        let metric: Option<Arc<dyn Metric>> = match policy {
            HeuristicPolicy::None => None,
            HeuristicPolicy::CrowFlies { max_speed_kmh } => {
                Some(Arc::new(AsTheCrowFlies::new(max_speed_kmh)))
            }
            HeuristicPolicy::Landmarks { amount } => {
                let mut provider = GreedyFarthestLandmarks::new(Arc::clone(&graph));
                let landmarks = provider.select(amount);
                info!("Selected {} landmarks", landmarks.len());
                let tables = provider.build_tables(&landmarks);
                Some(Arc::new(LandmarkMetric::new(tables)))
            }
        };
        Self { graph, metric }
    }

    /// A factory around a caller-provided metric.
    pub fn with_metric(graph: Arc<RoadGraph>, metric: Arc<dyn Metric>) -> Self {
        Self {
            graph,
            metric: Some(metric),
        }
    }

    pub fn graph(&self) -> &Arc<RoadGraph> {
        &self.graph
    }

    /// A fresh engine for one computation.
    pub fn create_computation(&self) -> ModularDijkstra {
        let mut modules: Vec<Box<dyn DijkstraModule>> = Vec::new();
        if let Some(metric) = &self.metric {
            modules.push(Box::new(AStar::new(Arc::clone(metric))));
        }
        ModularDijkstra::with_modules(Arc::clone(&self.graph), modules)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::{RoadEdge, RoadNode};
    use crate::routing::landmarks::GreedyFarthestLandmarks;

    /// A small geographic network around Freiburg with edge costs
    /// derived from driving the segments at 50 km/h.
    fn geo_graph() -> Arc<RoadGraph> {
        let mut graph = RoadGraph::new();
        let coords = [
            (1, 47.995, 7.850),
            (2, 47.999, 7.852),
            (3, 48.003, 7.858),
            (4, 47.997, 7.862),
            (5, 48.006, 7.849),
        ];
        for (id, lat, lon) in coords {
            graph.add_node(RoadNode::new(id, lat, lon));
        }
        let metric = AsTheCrowFlies::new(50.0);
        let links = [(1, 2), (2, 3), (3, 5), (1, 4), (4, 3), (2, 5)];
        for (way, (from, to)) in links.into_iter().enumerate() {
            let cost = metric.distance(graph.node(from).unwrap(), graph.node(to).unwrap());
            graph.add_edge(RoadEdge::new(from, to, cost, way as i64));
            graph.add_edge(RoadEdge::new(to, from, cost, way as i64));
        }
        Arc::new(graph)
    }

    fn cost_between(factory: &ComputationFactory, from: i64, to: i64) -> f64 {
        factory
            .create_computation()
            .shortest_path(&[from], to)
            .map(|path| path.total_cost())
            .unwrap()
    }

    #[test]
    fn all_policies_agree_on_optimal_costs() {
        let graph = geo_graph();
        let plain = ComputationFactory::new(Arc::clone(&graph), HeuristicPolicy::None);
        let crow = ComputationFactory::new(
            Arc::clone(&graph),
            HeuristicPolicy::CrowFlies {
                max_speed_kmh: 130.0,
            },
        );
        let mut provider = GreedyFarthestLandmarks::with_seed(Arc::clone(&graph), 11);
        let landmarks = provider.select(3);
        let alt = ComputationFactory::with_metric(
            Arc::clone(&graph),
            Arc::new(LandmarkMetric::new(provider.build_tables(&landmarks))),
        );

        for from in [1i64, 2, 3, 4, 5] {
            for to in [1i64, 2, 3, 4, 5] {
                let expected = cost_between(&plain, from, to);
                assert!((cost_between(&crow, from, to) - expected).abs() < 1e-9);
                assert!((cost_between(&alt, from, to) - expected).abs() < 1e-9);
            }
        }
    }

    #[test]
    fn crow_flies_estimate_is_admissible_on_the_network() {
        let graph = geo_graph();
        let metric = AsTheCrowFlies::new(130.0);
        let plain = ComputationFactory::new(Arc::clone(&graph), HeuristicPolicy::None);
        for from in [1i64, 2, 3, 4, 5] {
            for to in [1i64, 2, 3, 4, 5] {
                let truth = cost_between(&plain, from, to);
                let estimate =
                    metric.distance(graph.node(from).unwrap(), graph.node(to).unwrap());
                assert!(estimate <= truth + 1e-9);
            }
        }
    }
}
