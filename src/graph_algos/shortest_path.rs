use crate::errors::PathError;
use crate::graph::{Graph, NodeId};

/// Construct the shortest path from the goal node back to the start node
/// Follows the `previous` index each node was given during relaxation
/// Returns the ordered path from start to goal
/// graph: &Graph - graph after a search, nodes still carry their parents
/// goal_index: NodeId - node the path ends at
pub(crate) fn shortest_path(graph: &Graph, goal_index: NodeId) -> Result<Vec<NodeId>, PathError> {

    let mut path = Vec::new();
    let mut current_index = Some(goal_index);

    // Trace back from goal to start
    while let Some(index) = current_index {
        // A chain longer than the graph must contain a cycle
        if path.len() >= graph.len() {
            return Err(PathError::BrokenParentChain(index));
        }
        let node = graph.node(index).ok_or(PathError::BrokenParentChain(index))?;
        path.push(index);
        current_index = node.previous();
    }

    // The path is in reverse order, so reverse it
    path.reverse();

    Ok(path)
}
