use crate::graph::Vertex;
use super::GraphNodeMap;

/// Construct the path from start to goal by walking predecessors back from the goal
/// node_map: GraphNodeMap - search state with predecessor indices
/// start_index / goal_index: positions of the endpoints in node_map
///
/// If the walk runs out of predecessors before reaching start, the vertices
/// collected so far are returned without start; callers read that as "no path".
pub(crate) fn shortest_path(node_map: &GraphNodeMap, start_index: usize, goal_index: usize) -> Vec<Vertex> {

    let mut path = Vec::new();
    let mut current = Some(goal_index);

    // Trace back from goal to start
    while let Some(index) = current {
        if index == start_index {
            break;
        }
        let node = &node_map[index];
        path.push(node.vertex);
        current = node.parent;

        // predecessor links form a tree, this only trips on corrupted state
        if path.len() > node_map.len() {
            return Vec::new();
        }
    }

    if current == Some(start_index) {
        path.push(node_map[start_index].vertex);
    }

    // The path is in reverse order, so reverse it
    path.reverse();
    path
}
