//! Road graph components: nodes, edges, the graph itself and paths on it.

mod components;
mod path;
mod road_graph;

pub use components::{RoadEdge, RoadNode};
pub use path::RoutePath;
pub use road_graph::RoadGraph;
