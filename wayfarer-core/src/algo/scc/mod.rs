//! Strongly connected components of the road graph.
//!
//! Iterative Tarjan with an explicit task deque; recursion on road
//! graphs of realistic size would overflow the stack. The largest
//! component is what ingestion keeps as the usable road network.

mod task;

pub use task::{TarjanStep, TarjanTaskElement};

use hashbrown::{HashMap, HashSet};

use crate::model::RoadGraph;
use crate::NodeId;

/// Enumerates all strongly connected components of `graph`.
///
/// Successors are expanded in the graph's outgoing-edge order and
/// components are emitted in the order their roots finalize, so the
/// output is reproducible for a given insertion sequence.
pub fn strongly_connected_components(graph: &RoadGraph) -> Vec<Vec<NodeId>> {
    let mut state = TarjanState::default();
    for &node in graph.node_ids() {
        if !state.index.contains_key(&node) {
            state.connect(graph, node);
        }
    }
    state.components
}

/// The largest strongly connected component. On equal sizes the
/// component whose root finalized first wins.
pub fn largest_component(graph: &RoadGraph) -> Vec<NodeId> {
    strongly_connected_components(graph)
        .into_iter()
        .fold(Vec::new(), |best, component| {
            if component.len() > best.len() {
                component
            } else {
                best
            }
        })
}

/// Removes every node outside the largest strongly connected component.
///
/// Returns the number of removed nodes.
pub fn reduce_to_largest_component(graph: &mut RoadGraph) -> usize {
    let keep: HashSet<NodeId> = largest_component(graph).into_iter().collect();
    let drop: Vec<NodeId> = graph
        .node_ids()
        .iter()
        .copied()
        .filter(|id| !keep.contains(id))
        .collect();
    for &id in &drop {
        graph.remove_node(id);
    }
    drop.len()
}

#[derive(Default)]
struct TarjanState {
    counter: usize,
    index: HashMap<NodeId, usize>,
    lowlink: HashMap<NodeId, usize>,
    on_stack: HashSet<NodeId>,
    stack: Vec<NodeId>,
    tasks: Vec<TarjanTaskElement>,
    components: Vec<Vec<NodeId>>,
}

impl TarjanState {
    /// Runs one depth-first pass rooted at `root`, driving every task
    /// element through its three steps.
    fn connect(&mut self, graph: &RoadGraph, root: NodeId) {
        self.tasks.push(TarjanTaskElement::new(root, None));

        while let Some(mut task) = self.tasks.pop() {
            let node = task.node();
            match task.current_step() {
                Some(TarjanStep::Index) => {
                    if self.index.contains_key(&node) {
                        // Already discovered through a sibling subtree
                        continue;
                    }
                    self.index.insert(node, self.counter);
                    self.lowlink.insert(node, self.counter);
                    self.counter += 1;
                    self.stack.push(node);
                    self.on_stack.insert(node);
                    task.advance();
                    self.tasks.push(task);
                }
                Some(TarjanStep::GetSuccessors) => {
                    task.advance();
                    self.tasks.push(task);
                    // Reversed so the deque expands successors in edge
                    // order, all of them before this node's SetLowlink
                    for edge in graph.outgoing_edges(node).iter().rev() {
                        let successor = edge.destination;
                        if let Some(&successor_index) = self.index.get(&successor) {
                            if self.on_stack.contains(&successor) {
                                let low = self.lowlink[&node].min(successor_index);
                                self.lowlink.insert(node, low);
                            }
                        } else {
                            self.tasks.push(TarjanTaskElement::new(successor, Some(node)));
                        }
                    }
                }
                Some(TarjanStep::SetLowlink) => {
                    let low = self.lowlink[&node];
                    if let Some(predecessor) = task.predecessor() {
                        let folded = self.lowlink[&predecessor].min(low);
                        self.lowlink.insert(predecessor, folded);
                    }
                    if low == self.index[&node] {
                        let mut component = Vec::new();
                        while let Some(member) = self.stack.pop() {
                            self.on_stack.remove(&member);
                            component.push(member);
                            if member == node {
                                break;
                            }
                        }
                        self.components.push(component);
                    }
                    task.advance();
                }
                None => {}
            }
        }
    }
}
