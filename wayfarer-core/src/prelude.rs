//! Convenience re-exports of the crate's main types.

pub use crate::db::{InMemoryDatabase, RoutingDatabase};
pub use crate::loading::{create_road_model, ModelConfig, RoadModel};
pub use crate::model::{RoadEdge, RoadGraph, RoadNode, RoutePath};
pub use crate::routing::dijkstra::{AStar, DijkstraModule, ModularDijkstra};
pub use crate::routing::factory::{ComputationFactory, HeuristicPolicy};
pub use crate::routing::journey::{
    Journey, RequestHandler, RouteElement, RoutingRequest, RoutingResponse, TransportationMode,
};
pub use crate::routing::landmarks::GreedyFarthestLandmarks;
pub use crate::routing::metrics::{AsTheCrowFlies, LandmarkMetric, LandmarkTable, Metric};
pub use crate::{Cost, Error, NodeId, OsmId, WayId, DEFAULT_MAX_SPEED_KMH};
