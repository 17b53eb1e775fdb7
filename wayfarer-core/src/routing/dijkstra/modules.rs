//! Composable behavior modules of the shortest-path engine.

use std::sync::Arc;

use crate::model::{RoadEdge, RoadNode};
use crate::routing::metrics::Metric;
use crate::Cost;

/// A capability hook into the Dijkstra engine.
///
/// Every method has a neutral default; a module overrides the hooks it
/// cares about. Modules combine as follows: an edge is relaxed only if
/// every module accepts it, estimates combine by maximum (an explicit
/// `None` disables the heuristic term for the whole search), and any
/// module may request an early abort.
pub trait DijkstraModule: Send + Sync {
    /// Filters or adjusts the cost of traversing `edge`. Returning
    /// `None` excludes the edge; an adjusted cost must not undercut
    /// `cost`, otherwise the heuristic loses admissibility.
    fn consider_edge(&self, _edge: &RoadEdge, cost: Cost) -> Option<Cost> {
        Some(cost)
    }

    /// Lower bound on the remaining cost from `node` to `destination`.
    /// The default is the trivial bound of zero.
    fn estimate(&self, _node: &RoadNode, _destination: &RoadNode) -> Option<Cost> {
        Some(0.0)
    }

    /// Requests termination after `node` was settled at `cost`. Once a
    /// module returns `true` it must keep doing so for the rest of the
    /// run.
    fn should_abort(&self, _node: &RoadNode, _cost: Cost) -> bool {
        false
    }
}

/// A-star as an engine module: estimates the remaining cost with a
/// metric, which must be monotone and admissible.
pub struct AStar {
    metric: Arc<dyn Metric>,
}

impl AStar {
    pub fn new(metric: Arc<dyn Metric>) -> Self {
        Self { metric }
    }
}

impl DijkstraModule for AStar {
    fn estimate(&self, node: &RoadNode, destination: &RoadNode) -> Option<Cost> {
        Some(self.metric.distance(node, destination))
    }
}
