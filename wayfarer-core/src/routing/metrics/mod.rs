//! Distance estimators between road nodes.

mod crow_flies;
mod landmark;

pub use crow_flies::AsTheCrowFlies;
pub use landmark::{LandmarkMetric, LandmarkTable};

use crate::model::RoadNode;
use crate::Cost;

/// Estimates the cost of traveling from `a` to `b` in seconds.
///
/// For use as an A-star heuristic the estimate must never exceed the
/// true shortest-path cost and must stay consistent along edges.
pub trait Metric: Send + Sync {
    fn distance(&self, a: &RoadNode, b: &RoadNode) -> Cost;
}
