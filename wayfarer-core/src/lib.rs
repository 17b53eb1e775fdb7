//! Point-to-point shortest-path routing over OpenStreetMap road networks.
//!
//! The crate keeps an in-memory road graph, answers queries with a modular
//! Dijkstra engine (plain, A-star over a straight-line bound, or A-star
//! over ALT landmark bounds) and materializes results into journey
//! documents for the HTTP surface.

pub mod algo;
pub mod db;
pub mod error;
pub mod loading;
pub mod model;
pub mod prelude;
pub mod routing;

pub use error::Error;

/// Internal node id, unique within one graph.
pub type NodeId = i64;
/// Internal way id grouping edges that belong to the same OSM way.
pub type WayId = i64;
/// Identifier assigned by OpenStreetMap.
pub type OsmId = i64;
/// Travel cost in seconds.
pub type Cost = f64;

/// Fallback maximum legal road speed in km/h. The straight-line travel
/// time bound stays admissible as long as no edge of the network is
/// faster than this.
pub const DEFAULT_MAX_SPEED_KMH: f64 = 130.0;
