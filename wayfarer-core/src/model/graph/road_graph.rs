use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

use super::components::{RoadEdge, RoadNode};
use crate::NodeId;

/// Directed multigraph over road nodes.
///
/// Incidence is kept for both directions so that forward and backward
/// searches are O(degree). Node iteration follows insertion order,
/// which keeps traversals reproducible.
#[derive(Debug, Default, Clone)]
pub struct RoadGraph {
    nodes: HashMap<NodeId, RoadNode>,
    node_order: Vec<NodeId>,
    outgoing: HashMap<NodeId, Vec<RoadEdge>>,
    incoming: HashMap<NodeId, Vec<RoadEdge>>,
}

impl RoadGraph {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn node_count(&self) -> usize {
        self.nodes.len()
    }

    pub fn edge_count(&self) -> usize {
        self.outgoing.values().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Inserts `node` unless a node with the same id is already present.
    /// An existing node is never replaced.
    ///
    /// Returns whether the node was newly inserted.
    pub fn add_node(&mut self, node: RoadNode) -> bool {
        match self.nodes.entry(node.id) {
            Entry::Occupied(_) => false,
            Entry::Vacant(entry) => {
                entry.insert(node);
                self.node_order.push(node.id);
                true
            }
        }
    }

    /// Removes the node and every incident edge, in both directions.
    ///
    /// Returns whether the node was present.
    pub fn remove_node(&mut self, id: NodeId) -> bool {
        if self.nodes.remove(&id).is_none() {
            return false;
        }
        self.node_order.retain(|&other| other != id);
        for edge in self.outgoing.remove(&id).unwrap_or_default() {
            if edge.destination != id {
                if let Some(edges) = self.incoming.get_mut(&edge.destination) {
                    edges.retain(|e| e.source != id);
                }
            }
        }
        for edge in self.incoming.remove(&id).unwrap_or_default() {
            if edge.source != id {
                if let Some(edges) = self.outgoing.get_mut(&edge.source) {
                    edges.retain(|e| e.destination != id);
                }
            }
        }
        true
    }

    /// Inserts a directed edge. Both endpoints must already be part of
    /// the graph; returns whether the edge was inserted. Parallel edges
    /// are allowed.
    pub fn add_edge(&mut self, edge: RoadEdge) -> bool {
        if !self.nodes.contains_key(&edge.source) || !self.nodes.contains_key(&edge.destination) {
            return false;
        }
        self.outgoing.entry(edge.source).or_default().push(edge);
        self.incoming.entry(edge.destination).or_default().push(edge);
        true
    }

    /// Removes one occurrence of `edge` from both incidence sides.
    ///
    /// Returns whether the edge was present.
    pub fn remove_edge(&mut self, edge: &RoadEdge) -> bool {
        let Some(out) = self.outgoing.get_mut(&edge.source) else {
            return false;
        };
        let Some(position) = out.iter().position(|e| e == edge) else {
            return false;
        };
        out.remove(position);
        if let Some(inc) = self.incoming.get_mut(&edge.destination) {
            if let Some(position) = inc.iter().position(|e| e == edge) {
                inc.remove(position);
            }
        }
        true
    }

    pub fn contains_node(&self, id: NodeId) -> bool {
        self.nodes.contains_key(&id)
    }

    /// O(1) lookup by internal id.
    pub fn node(&self, id: NodeId) -> Option<&RoadNode> {
        self.nodes.get(&id)
    }

    /// Nodes in insertion order.
    pub fn nodes(&self) -> impl Iterator<Item = &RoadNode> + '_ {
        self.node_order.iter().filter_map(|id| self.nodes.get(id))
    }

    /// Node ids in insertion order.
    pub fn node_ids(&self) -> &[NodeId] {
        &self.node_order
    }

    /// Edges leaving `id`. The returned slice is stable while the graph
    /// is not mutated.
    pub fn outgoing_edges(&self, id: NodeId) -> &[RoadEdge] {
        self.outgoing.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// Edges entering `id`.
    pub fn incoming_edges(&self, id: NodeId) -> &[RoadEdge] {
        self.incoming.get(&id).map(Vec::as_slice).unwrap_or_default()
    }

    /// A copy of the graph with every edge's orientation flipped, used
    /// for backward one-to-all searches.
    pub fn reverse(&self) -> RoadGraph {
        let mut reversed = RoadGraph::new();
        for node in self.nodes() {
            reversed.add_node(*node);
        }
        for &id in &self.node_order {
            for edge in self.outgoing_edges(id) {
                reversed.add_edge(edge.reversed());
            }
        }
        reversed
    }
}
