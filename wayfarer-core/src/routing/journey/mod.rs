//! Request handling and journey materialization.
//!
//! The wire model mirrors what the web client exchanges: a request
//! names two OSM nodes and a departure time, the response carries the
//! computed journeys as alternating node and path route elements.

mod to_geojson;

use std::sync::Arc;
use std::time::Instant;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::db::RoutingDatabase;
use crate::model::{RoadGraph, RoadNode, RoutePath};
use crate::routing::factory::ComputationFactory;
use crate::{NodeId, OsmId};

/// Transportation mode of a route element, carried as a small integer
/// code on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(into = "u8", try_from = "u8")]
pub enum TransportationMode {
    Car,
    Bike,
    Foot,
    Tram,
}

impl From<TransportationMode> for u8 {
    fn from(mode: TransportationMode) -> u8 {
        match mode {
            TransportationMode::Car => 0,
            TransportationMode::Bike => 1,
            TransportationMode::Foot => 2,
            TransportationMode::Tram => 3,
        }
    }
}

impl TryFrom<u8> for TransportationMode {
    type Error = String;

    fn try_from(code: u8) -> Result<Self, Self::Error> {
        match code {
            0 => Ok(TransportationMode::Car),
            1 => Ok(TransportationMode::Bike),
            2 => Ok(TransportationMode::Foot),
            3 => Ok(TransportationMode::Tram),
            other => Err(format!("unknown transportation mode code {other}")),
        }
    }
}

/// A routing request as received over the wire.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RoutingRequest {
    /// Departure time, epoch milliseconds
    #[serde(rename = "depTime")]
    pub dep_time: i64,
    /// Requested transportation modes
    pub modes: Vec<TransportationMode>,
    /// OSM id of the source node
    pub from: OsmId,
    /// OSM id of the destination node
    pub to: OsmId,
}

/// One element of a journey: a stop at a node, or a continuous path
/// segment between two stops.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum RouteElement {
    Node {
        name: String,
        /// A single `[lat, lon]` pair
        geom: Vec<[f32; 2]>,
    },
    Path {
        mode: TransportationMode,
        name: String,
        /// `[lat, lon]` pairs from the path source through every edge
        /// destination
        geom: Vec<[f32; 2]>,
    },
}

/// One journey option of a response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Journey {
    #[serde(rename = "depTime")]
    pub dep_time: i64,
    #[serde(rename = "arrTime")]
    pub arr_time: i64,
    pub route: Vec<RouteElement>,
}

/// The response to a routing request. `time` is the number of
/// milliseconds spent computing and building the answer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RoutingResponse {
    pub time: u64,
    pub from: OsmId,
    pub to: OsmId,
    pub journeys: Vec<Journey>,
}

/// Answers routing requests: resolves the endpoints through the
/// database, runs the shortest-path engine and materializes the result
/// into a journey document.
pub struct RequestHandler {
    graph: Arc<RoadGraph>,
    factory: Arc<ComputationFactory>,
    database: Arc<dyn RoutingDatabase>,
}

impl RequestHandler {
    pub fn new(
        graph: Arc<RoadGraph>,
        factory: Arc<ComputationFactory>,
        database: Arc<dyn RoutingDatabase>,
    ) -> Self {
        Self {
            graph,
            factory,
            database,
        }
    }

    /// Handles one request. Unresolvable endpoints and unreachable
    /// destinations both answer with an empty journey list; the timing
    /// is reported honestly either way.
    pub fn handle(&self, request: &RoutingRequest) -> RoutingResponse {
        debug!("Handling request: {request:?}");
        let start = Instant::now();

        let Some(source) = self.resolve(request.from) else {
            return empty_response(request, start);
        };
        let Some(destination) = self.resolve(request.to) else {
            return empty_response(request, start);
        };

        let computation = self.factory.create_computation();
        let Some(path) = computation.shortest_path(&[source.id], destination.id) else {
            return empty_response(request, start);
        };

        let journey = self.build_journey(request, &path);
        RoutingResponse {
            time: start.elapsed().as_millis() as u64,
            from: request.from,
            to: request.to,
            journeys: vec![journey],
        }
    }

    /// OSM id to graph node, through the internal id mapping.
    fn resolve(&self, osm_id: OsmId) -> Option<RoadNode> {
        let internal = self.database.internal_node_by_osm(osm_id)?;
        self.graph.node(internal).copied()
    }

    fn build_journey(&self, request: &RoutingRequest, path: &RoutePath) -> Journey {
        let dep_time = request.dep_time;
        let duration = (path.total_cost() * 1000.0).ceil() as i64;
        let arr_time = dep_time + duration;

        let mut route = Vec::with_capacity(3);
        if let Some(source) = self.graph.node(path.source()) {
            route.push(self.build_node(source));
        }
        if !path.is_empty() {
            route.push(self.build_path(path));
            if let Some(destination) = self.graph.node(path.destination()) {
                route.push(self.build_node(destination));
            }
        }

        Journey {
            dep_time,
            arr_time,
            route,
        }
    }

    fn node_name(&self, node: NodeId) -> Option<String> {
        let osm = self.database.osm_node_by_internal(node)?;
        self.database.node_name(osm)
    }

    fn way_name(&self, way: i64) -> Option<String> {
        let osm = self.database.osm_way_by_internal(way)?;
        self.database.way_name(osm)
    }

    fn build_node(&self, node: &RoadNode) -> RouteElement {
        RouteElement::Node {
            name: self.node_name(node.id).unwrap_or_default(),
            geom: vec![[node.lat, node.lon]],
        }
    }

    /// A continuous path element. The geometry runs from the path
    /// source through every edge destination; the name joins the source
    /// node's name with the name of every way the path switches onto.
    fn build_path(&self, path: &RoutePath) -> RouteElement {
        let mut names = Vec::new();
        let mut geom = Vec::with_capacity(path.len() + 1);

        if let Some(source) = self.graph.node(path.source()) {
            geom.push([source.lat, source.lon]);
            if let Some(name) = self.node_name(source.id) {
                names.push(name);
            }
        }

        let mut last_way_id = None;
        for edge in path {
            if let Some(destination) = self.graph.node(edge.destination) {
                geom.push([destination.lat, destination.lon]);
            }
            if last_way_id != Some(edge.way_id) {
                if let Some(name) = self.way_name(edge.way_id) {
                    names.push(name);
                }
            }
            last_way_id = Some(edge.way_id);
        }

        RouteElement::Path {
            mode: TransportationMode::Car,
            name: names.join(", "),
            geom,
        }
    }
}

fn empty_response(request: &RoutingRequest, start: Instant) -> RoutingResponse {
    RoutingResponse {
        time: start.elapsed().as_millis() as u64,
        from: request.from,
        to: request.to,
        journeys: Vec::new(),
    }
}
