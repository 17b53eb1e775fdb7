//! Metadata lookups for graph objects.
//!
//! The routing core resolves the OSM ids of a request into internal
//! graph ids and decorates results with node and way names. This trait
//! is the seam to whatever store ingestion populated.

use hashbrown::HashMap;

use crate::{NodeId, OsmId, WayId};

/// Read side of the routing metadata store. Implementations must be
/// safe for concurrent reads.
pub trait RoutingDatabase: Send + Sync {
    /// Internal id of an OSM node.
    fn internal_node_by_osm(&self, osm_id: OsmId) -> Option<NodeId>;
    /// OSM id of an internal node.
    fn osm_node_by_internal(&self, id: NodeId) -> Option<OsmId>;
    /// OSM id of an internal way.
    fn osm_way_by_internal(&self, id: WayId) -> Option<OsmId>;
    /// Display name of an OSM node.
    fn node_name(&self, osm_id: OsmId) -> Option<String>;
    /// Display name of an OSM way.
    fn way_name(&self, osm_id: OsmId) -> Option<String>;
}

/// Hash-map backed database, populated during ingestion and read-only
/// afterwards.
#[derive(Debug, Default, Clone)]
pub struct InMemoryDatabase {
    node_by_osm: HashMap<OsmId, NodeId>,
    osm_by_node: HashMap<NodeId, OsmId>,
    osm_by_way: HashMap<WayId, OsmId>,
    node_names: HashMap<OsmId, String>,
    way_names: HashMap<OsmId, String>,
}

impl InMemoryDatabase {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert_node(&mut self, internal: NodeId, osm: OsmId, name: Option<String>) {
        self.node_by_osm.insert(osm, internal);
        self.osm_by_node.insert(internal, osm);
        if let Some(name) = name {
            self.node_names.insert(osm, name);
        }
    }

    pub fn insert_way(&mut self, internal: WayId, osm: OsmId, name: Option<String>) {
        self.osm_by_way.insert(internal, osm);
        if let Some(name) = name {
            self.way_names.insert(osm, name);
        }
    }
}

impl RoutingDatabase for InMemoryDatabase {
    fn internal_node_by_osm(&self, osm_id: OsmId) -> Option<NodeId> {
        self.node_by_osm.get(&osm_id).copied()
    }

    fn osm_node_by_internal(&self, id: NodeId) -> Option<OsmId> {
        self.osm_by_node.get(&id).copied()
    }

    fn osm_way_by_internal(&self, id: WayId) -> Option<OsmId> {
        self.osm_by_way.get(&id).copied()
    }

    fn node_name(&self, osm_id: OsmId) -> Option<String> {
        self.node_names.get(&osm_id).cloned()
    }

    fn way_name(&self, osm_id: OsmId) -> Option<String> {
        self.way_names.get(&osm_id).cloned()
    }
}
