use crate::collections::FxIndexMap;
use crate::errors::PathError;
use crate::geometry::node_distance;
use crate::graph::{Graph, NodeId};
use super::shortest_path;

use std::{collections::BinaryHeap, cmp::Ordering};
use tracing::{debug, trace, warn};


/// How a search ended
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum PathOutcome {
    Found { distance: f64 }, // end reached over at least one edge
    SameNode, // start == end, zero hops
    NoPath, // end missing or unreachable from start
    StartNotFound,
}

/// Everything one search produced
/// Rebuilt from scratch on every call, nothing is cached between calls
#[derive(Clone, Debug, PartialEq)]
pub struct SearchResult {
    /// Nodes in the order they left the queue - the animation trace.
    /// Stale queue entries show up here too, they are popped like any other
    pub visited_order: Vec<NodeId>,
    /// node name -> predecessor name, for every node relaxed at least once
    pub parent_of: FxIndexMap<String, String>,
    /// Node names from start to end, empty unless a route exists
    pub optimal_path: Vec<String>,
    pub total_distance: f64,
    pub outcome: PathOutcome,
}

/// Borrowed view of a successful search
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Route<'a> {
    pub path: &'a [String],
    pub distance: f64,
}

impl SearchResult {

    fn empty(outcome: PathOutcome) -> Self {
        Self {
            visited_order: Vec::new(),
            parent_of: FxIndexMap::default(),
            optimal_path: Vec::new(),
            total_distance: 0.0,
            outcome,
        }
    }

    /// True when a route exists, including the zero hop start == end case
    pub fn is_found(&self) -> bool {
        matches!(self.outcome, PathOutcome::Found { .. } | PathOutcome::SameNode)
    }

    /// The route, or why there is none
    /// start/end are only used to name the failure
    pub fn route(&self, start: &str, end: &str) -> Result<Route<'_>, PathError> {
        match self.outcome {
            PathOutcome::Found { .. } | PathOutcome::SameNode => Ok(Route {
                path: &self.optimal_path,
                distance: self.total_distance,
            }),
            PathOutcome::NoPath => Err(PathError::NoPath {
                start: start.to_string(),
                end: end.to_string(),
            }),
            PathOutcome::StartNotFound => Err(PathError::StartNotFound(start.to_string())),
        }
    }

    /// Names of the visited nodes, in visit order
    pub fn visited_names<'g>(&self, graph: &'g Graph) -> Vec<&'g str> {
        self.visited_order
            .iter()
            .filter_map(|&index| graph.node(index))
            .map(|node| node.name())
            .collect()
    }
}


/// Dijkstra's Algorithm over a road map
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
/// Edge weights are the euclidean distance between node coordinates, so
/// they are never negative. The finder holds no state between calls
#[derive(Clone, Copy, Debug, Default)]
pub struct ShortestPathFinder {}

impl ShortestPathFinder {

    pub fn new() -> Self {
        Self {}
    }

    /// From the start node, settle nodes in order of distance until the end
    /// node leaves the queue or the queue runs dry
    /// Resets the graph first and leaves the search state on its nodes
    /// (distance, previous, processed, on_shortest_path) for renderers
    pub fn compute_shortest_path(&self, graph: &mut Graph, start: &str, end: &str) -> SearchResult {

        graph.reset();

        let Some(start_index) = graph.node_id(start) else {
            debug!(start, "start node not found");
            return SearchResult::empty(PathOutcome::StartNotFound);
        };
        let end_index = graph.node_id(end);

        let (visited_order, parent_of) = self.build_search_tree(graph, start_index, end_index);

        let (outcome, path) = match end_index {
            Some(end_index) if end_index == start_index => (PathOutcome::SameNode, vec![start_index]),
            Some(end_index) => self.reconstruct(graph, end_index),
            None => (PathOutcome::NoPath, Vec::new()),
        };

        // Flag the route for renderers
        for &index in &path {
            if let Some(node) = graph.node_mut(index) {
                node.set_on_shortest_path(true);
            }
        }

        let total_distance = match outcome {
            PathOutcome::Found { distance } => distance,
            _ => 0.0,
        };
        let optimal_path = path
            .iter()
            .filter_map(|&index| graph.node(index))
            .map(|node| node.name().to_string())
            .collect();

        debug!(
            start,
            end,
            visited = visited_order.len(),
            ?outcome,
            "shortest path search finished"
        );

        SearchResult {
            visited_order,
            parent_of,
            optimal_path,
            total_distance,
            outcome,
        }
    }


    /// Traverses the graph, writing distance / previous / processed on its nodes
    /// Returns the pop order and the parent map
    fn build_search_tree(&self, graph: &mut Graph, start_index: NodeId, end_index: Option<NodeId>) -> (Vec<NodeId>, FxIndexMap<String, String>) {

        let mut visited_order = Vec::new();
        let mut parent_of: FxIndexMap<String, String> = FxIndexMap::default();

        // Nodes to visit - binary heap sorts Biggest to Smallest, QueueEntry
        // reverses that so the closest node comes out first
        let mut nodes_to_visit: BinaryHeap<QueueEntry> = BinaryHeap::new();
        let mut seq = 0;

        if let Some(start) = graph.node_mut(start_index) {
            start.set_distance(0.0);
        }
        nodes_to_visit.push(QueueEntry {
            index: start_index,
            distance: 0.0,
            seq,
        });

        while let Some(QueueEntry { index, distance, .. }) = nodes_to_visit.pop() {

            visited_order.push(index);
            trace!(index, distance, "pop");

            // The end node is settled the moment it is first popped
            if Some(index) == end_index {
                break;
            }

            let Some(node) = graph.node_mut(index) else {
                continue;
            };

            // Stale duplicate - a shorter entry for this node was popped already
            if node.is_processed() {
                continue;
            }
            node.set_processed(true);

            let degree = node.neighbors().len();
            for position in 0..degree {
                let current = &graph.nodes()[index];
                let neighbor_index = current.neighbors()[position];
                let Some(neighbor) = graph.node(neighbor_index) else {
                    continue;
                };

                let candidate = current.distance() + node_distance(current, neighbor);

                // Only improvements are relaxed
                if candidate >= neighbor.distance() {
                    continue;
                }

                parent_of.insert(neighbor.name().to_string(), current.name().to_string());

                if let Some(neighbor) = graph.node_mut(neighbor_index) {
                    neighbor.set_distance(candidate);
                    neighbor.set_previous(Some(index));
                }
                trace!(from = index, to = neighbor_index, candidate, "relax");

                // Old entries for this neighbor stay queued, they are skipped once popped
                seq += 1;
                nodes_to_visit.push(QueueEntry {
                    index: neighbor_index,
                    distance: candidate,
                    seq,
                });
            }
        }

        (visited_order, parent_of)
    }

    /// Path and outcome for an end node other than the start
    fn reconstruct(&self, graph: &Graph, end_index: NodeId) -> (PathOutcome, Vec<NodeId>) {

        let Some(end) = graph.node(end_index) else {
            return (PathOutcome::NoPath, Vec::new());
        };

        // Never relaxed - nothing reached it
        if end.previous().is_none() {
            return (PathOutcome::NoPath, Vec::new());
        }

        match shortest_path(graph, end_index) {
            Ok(path) => (PathOutcome::Found { distance: end.distance() }, path),
            Err(error) => {
                warn!(%error, "discarding path");
                (PathOutcome::NoPath, Vec::new())
            }
        }
    }
}


/// Shortest path between two named nodes using a fresh `ShortestPathFinder`
pub fn compute_shortest_path(graph: &mut Graph, start: &str, end: &str) -> SearchResult {
    ShortestPathFinder::new().compute_shortest_path(graph, start, end)
}


/// Queue entry
/// - for ordering we only need the distance and a way to identify the node
/// - seq breaks ties first in first out, keeping the visit trace reproducible
#[derive(Debug)]
struct QueueEntry {
    index: NodeId,
    distance: f64,
    seq: usize,
}

impl Ord for QueueEntry {
    fn cmp(&self, other: &Self) -> Ordering {
        other.distance
            .total_cmp(&self.distance)
            .then_with(|| other.seq.cmp(&self.seq))
    }
}
impl PartialOrd for QueueEntry {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}
impl PartialEq for QueueEntry {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}
impl Eq for QueueEntry {}
