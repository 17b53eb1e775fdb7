use std::fs::File;
use std::io::BufReader;
use std::sync::Arc;

use log::{info, warn};

use super::config::ModelConfig;
use super::snapshot::NetworkSnapshot;
use crate::algo::scc::reduce_to_largest_component;
use crate::db::InMemoryDatabase;
use crate::error::Error;
use crate::model::{RoadEdge, RoadGraph, RoadNode};

/// A road model ready for routing: the frozen graph and the metadata
/// database built from the same snapshot.
#[derive(Debug, Clone)]
pub struct RoadModel {
    pub graph: Arc<RoadGraph>,
    pub database: Arc<InMemoryDatabase>,
}

/// Creates a road model from a network snapshot file.
///
/// # Errors
///
/// Returns an error if the snapshot cannot be read or parsed, or if it
/// contains no nodes.
pub fn create_road_model(config: &ModelConfig) -> Result<RoadModel, Error> {
    info!("Loading network snapshot: {}", config.network_path.display());
    let reader = BufReader::new(File::open(&config.network_path)?);
    let snapshot: NetworkSnapshot = serde_json::from_reader(reader)?;
    build_model(snapshot, config.prune_to_largest_component)
}

/// Builds graph and database from an already parsed snapshot.
///
/// # Errors
///
/// Returns an error if the snapshot contains no nodes.
pub fn build_model(snapshot: NetworkSnapshot, prune: bool) -> Result<RoadModel, Error> {
    if snapshot.nodes.is_empty() {
        return Err(Error::InvalidData(
            "network snapshot contains no nodes".to_string(),
        ));
    }

    let mut graph = RoadGraph::new();
    let mut database = InMemoryDatabase::new();

    for node in snapshot.nodes {
        graph.add_node(RoadNode::new(node.id, node.lat, node.lon));
        database.insert_node(node.id, node.osm_id, node.name);
    }
    let mut skipped = 0usize;
    for edge in snapshot.edges {
        if !graph.add_edge(RoadEdge::new(edge.from, edge.to, edge.cost, edge.way)) {
            skipped += 1;
        }
    }
    if skipped > 0 {
        warn!("Skipped {skipped} edges with endpoints missing from the snapshot");
    }
    for way in snapshot.ways {
        database.insert_way(way.id, way.osm_id, way.name);
    }

    info!(
        "Loaded road graph with {} nodes and {} edges",
        graph.node_count(),
        graph.edge_count()
    );

    if prune {
        let removed = reduce_to_largest_component(&mut graph);
        if removed > 0 {
            info!("Pruned {removed} nodes outside the largest strongly connected component");
        }
    }

    Ok(RoadModel {
        graph: Arc::new(graph),
        database: Arc::new(database),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::RoutingDatabase;

    fn snapshot_json() -> &'static str {
        r#"{
            "nodes": [
                { "id": 1, "osm_id": 101, "lat": 48.0, "lon": 7.80, "name": "Schwabentor" },
                { "id": 2, "osm_id": 102, "lat": 48.0, "lon": 7.81 },
                { "id": 3, "osm_id": 103, "lat": 48.0, "lon": 7.82 },
                { "id": 4, "osm_id": 104, "lat": 49.0, "lon": 8.00 }
            ],
            "edges": [
                { "from": 1, "to": 2, "cost": 5.0, "way": 1 },
                { "from": 2, "to": 1, "cost": 5.0, "way": 1 },
                { "from": 2, "to": 3, "cost": 7.0, "way": 1 },
                { "from": 3, "to": 2, "cost": 7.0, "way": 1 },
                { "from": 3, "to": 4, "cost": 9.0, "way": 2 },
                { "from": 5, "to": 1, "cost": 1.0, "way": 2 }
            ],
            "ways": [
                { "id": 1, "osm_id": 901, "name": "Oberlinden" },
                { "id": 2, "osm_id": 902 }
            ]
        }"#
    }

    #[test]
    fn snapshot_parses_and_builds_the_model() {
        let snapshot: NetworkSnapshot = serde_json::from_str(snapshot_json()).unwrap();
        let model = build_model(snapshot, false).unwrap();
        assert_eq!(model.graph.node_count(), 4);
        // The dangling edge from unknown node 5 is dropped
        assert_eq!(model.graph.edge_count(), 5);
        assert_eq!(model.database.internal_node_by_osm(101), Some(1));
        assert_eq!(model.database.way_name(901).as_deref(), Some("Oberlinden"));
    }

    #[test]
    fn pruning_drops_nodes_outside_the_largest_component() {
        let snapshot: NetworkSnapshot = serde_json::from_str(snapshot_json()).unwrap();
        let model = build_model(snapshot, true).unwrap();
        // Node 4 is reachable but cannot get back, so it is pruned
        assert_eq!(model.graph.node_count(), 3);
        assert!(!model.graph.contains_node(4));
        assert!(model.graph.contains_node(1));
    }

    #[test]
    fn an_empty_snapshot_is_rejected() {
        let snapshot: NetworkSnapshot =
            serde_json::from_str(r#"{ "nodes": [], "edges": [] }"#).unwrap();
        assert!(matches!(
            build_model(snapshot, true),
            Err(Error::InvalidData(_))
        ));
    }

    #[test]
    fn missing_files_surface_as_io_errors() {
        let config = ModelConfig::new("/nonexistent/network.json".into());
        assert!(matches!(create_road_model(&config), Err(Error::Io(_))));
    }
}
