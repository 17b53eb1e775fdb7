//! Serde model of the network snapshot.

use serde::{Deserialize, Serialize};

use crate::{Cost, NodeId, OsmId, WayId};

/// A road network as handed over by the ingestion pipeline: nodes with
/// OSM ids and coordinates, directed edges with traversal costs, and
/// the ways the edges reference.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NetworkSnapshot {
    pub nodes: Vec<SnapshotNode>,
    pub edges: Vec<SnapshotEdge>,
    #[serde(default)]
    pub ways: Vec<SnapshotWay>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotNode {
    pub id: NodeId,
    pub osm_id: OsmId,
    pub lat: f32,
    pub lon: f32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotEdge {
    pub from: NodeId,
    pub to: NodeId,
    /// Traversal time in seconds
    pub cost: Cost,
    pub way: WayId,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SnapshotWay {
    pub id: WayId,
    pub osm_id: OsmId,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
}
