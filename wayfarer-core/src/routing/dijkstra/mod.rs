//! Modular shortest-path engine.

mod modules;
mod state;

pub use modules::{AStar, DijkstraModule};

use std::collections::BinaryHeap;
use std::sync::Arc;

use hashbrown::hash_map::Entry;
use hashbrown::HashMap;

use crate::model::{RoadEdge, RoadGraph, RoadNode, RoutePath};
use crate::{Cost, NodeId};

use state::QueueEntry;

/// Tentative distance of a relaxed node; the parent edge is `None` for
/// search sources.
#[derive(Debug, Clone, Copy)]
struct TentativeDistance {
    cost: Cost,
    parent: Option<RoadEdge>,
}

/// Dijkstra skeleton driven by a set of behavior modules.
///
/// The engine carries no per-query state; queue and distance maps are
/// allocated per call, so one instance can serve concurrent requests
/// over the shared graph.
pub struct ModularDijkstra {
    graph: Arc<RoadGraph>,
    modules: Vec<Box<dyn DijkstraModule>>,
}

impl ModularDijkstra {
    /// A plain engine without modules.
    pub fn new(graph: Arc<RoadGraph>) -> Self {
        Self::with_modules(graph, Vec::new())
    }

    pub fn with_modules(graph: Arc<RoadGraph>, modules: Vec<Box<dyn DijkstraModule>>) -> Self {
        Self { graph, modules }
    }

    pub fn add_module(&mut self, module: Box<dyn DijkstraModule>) {
        self.modules.push(module);
    }

    /// Shortest path from any of `sources` to `destination`.
    ///
    /// Sources start at cost zero. Returns `None` when the destination
    /// is unreachable under the module filters, or when neither the
    /// destination nor any source is part of the graph.
    pub fn shortest_path(&self, sources: &[NodeId], destination: NodeId) -> Option<RoutePath> {
        let destination_node = *self.graph.node(destination)?;

        let mut distances: HashMap<NodeId, TentativeDistance> = HashMap::new();
        let mut settled: HashMap<NodeId, TentativeDistance> = HashMap::new();
        let mut queue = BinaryHeap::new();

        for &source in sources {
            if !self.graph.contains_node(source) {
                continue;
            }
            distances.insert(
                source,
                TentativeDistance {
                    cost: 0.0,
                    parent: None,
                },
            );
            queue.push(QueueEntry {
                key: self.queue_key(source, 0.0, Some(&destination_node)),
                cost: 0.0,
                node: source,
            });
        }

        while let Some(QueueEntry { cost, node, .. }) = queue.pop() {
            if settled.contains_key(&node) {
                continue;
            }
            let record = distances[&node];
            if cost > record.cost {
                // Stale entry superseded by a later relaxation
                continue;
            }
            settled.insert(node, record);

            if node == destination {
                return Some(reconstruct(destination, &settled));
            }
            if let Some(settled_node) = self.graph.node(node) {
                if self.modules.iter().any(|m| m.should_abort(settled_node, cost)) {
                    break;
                }
            }
            self.relax(
                node,
                cost,
                Some(&destination_node),
                &mut distances,
                &settled,
                &mut queue,
            );
        }
        None
    }

    /// Final cost of every node reachable from `sources`, running the
    /// search to exhaustion with estimates disabled.
    pub fn shortest_path_costs(&self, sources: &[NodeId]) -> HashMap<NodeId, Cost> {
        let mut distances: HashMap<NodeId, TentativeDistance> = HashMap::new();
        let mut settled: HashMap<NodeId, TentativeDistance> = HashMap::new();
        let mut queue = BinaryHeap::new();

        for &source in sources {
            if !self.graph.contains_node(source) {
                continue;
            }
            distances.insert(
                source,
                TentativeDistance {
                    cost: 0.0,
                    parent: None,
                },
            );
            queue.push(QueueEntry {
                key: 0.0,
                cost: 0.0,
                node: source,
            });
        }

        while let Some(QueueEntry { cost, node, .. }) = queue.pop() {
            if settled.contains_key(&node) {
                continue;
            }
            let record = distances[&node];
            if cost > record.cost {
                continue;
            }
            settled.insert(node, record);

            if let Some(settled_node) = self.graph.node(node) {
                if self.modules.iter().any(|m| m.should_abort(settled_node, cost)) {
                    break;
                }
            }
            self.relax(node, cost, None, &mut distances, &settled, &mut queue);
        }

        settled
            .into_iter()
            .map(|(node, record)| (node, record.cost))
            .collect()
    }

    /// Relaxes every admissible edge out of `node`.
    fn relax(
        &self,
        node: NodeId,
        node_cost: Cost,
        destination: Option<&RoadNode>,
        distances: &mut HashMap<NodeId, TentativeDistance>,
        settled: &HashMap<NodeId, TentativeDistance>,
        queue: &mut BinaryHeap<QueueEntry>,
    ) {
        'edges: for edge in self.graph.outgoing_edges(node) {
            let mut edge_cost = edge.cost;
            for module in &self.modules {
                match module.consider_edge(edge, edge_cost) {
                    Some(adjusted) => edge_cost = adjusted,
                    None => continue 'edges,
                }
            }

            let next = edge.destination;
            if settled.contains_key(&next) {
                continue;
            }
            let next_cost = node_cost + edge_cost;
            match distances.entry(next) {
                Entry::Vacant(entry) => {
                    entry.insert(TentativeDistance {
                        cost: next_cost,
                        parent: Some(*edge),
                    });
                    queue.push(QueueEntry {
                        key: self.queue_key(next, next_cost, destination),
                        cost: next_cost,
                        node: next,
                    });
                }
                Entry::Occupied(mut entry) => {
                    if next_cost < entry.get().cost {
                        *entry.get_mut() = TentativeDistance {
                            cost: next_cost,
                            parent: Some(*edge),
                        };
                        queue.push(QueueEntry {
                            key: self.queue_key(next, next_cost, destination),
                            cost: next_cost,
                            node: next,
                        });
                    }
                }
            }
        }
    }

    /// Queue key of `node`: tentative cost plus the combined heuristic
    /// estimate. Estimates combine by maximum; if any module declines,
    /// the key falls back to the tentative cost alone.
    fn queue_key(&self, node: NodeId, cost: Cost, destination: Option<&RoadNode>) -> Cost {
        let Some(destination) = destination else {
            return cost;
        };
        let Some(node) = self.graph.node(node) else {
            return cost;
        };
        let mut estimate: Cost = 0.0;
        for module in &self.modules {
            match module.estimate(node, destination) {
                Some(value) => estimate = estimate.max(value),
                None => return cost,
            }
        }
        cost + estimate
    }
}

/// Walks parent edges back from the destination and emits them in
/// travel order. A destination that is itself a source yields the
/// empty path.
fn reconstruct(destination: NodeId, settled: &HashMap<NodeId, TentativeDistance>) -> RoutePath {
    let mut edges = Vec::new();
    let mut current = destination;
    while let Some(record) = settled.get(&current) {
        match record.parent {
            Some(edge) => {
                edges.push(edge);
                current = edge.source;
            }
            None => break,
        }
    }
    edges.reverse();
    RoutePath::from_edges(edges).unwrap_or_else(|| RoutePath::empty(destination))
}
