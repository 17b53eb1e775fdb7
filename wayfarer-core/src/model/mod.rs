//! Data model of the road network.

pub mod graph;

pub use graph::{RoadEdge, RoadGraph, RoadNode, RoutePath};
