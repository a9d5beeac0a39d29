use crate::graph::{Edge, Vertex, VertexId};
use super::{SearchResult, SearchSpace};


/// Identify the shortest path using Dijkstra's Algorithm
/// https://en.wikipedia.org/wiki/Dijkstra%27s_algorithm
///
/// Every vertex starts in the frontier. Each step takes the frontier vertex with
/// the lowest known cost (ties go to whichever comes first in the frontier),
/// records the arc it was reached through, stops if it is `end`, and otherwise
/// relaxes its outgoing arcs. Vertices that were never reached still come out,
/// at infinite cost, and are recorded as self-entries.
///
/// The frontier is re-sorted with a stable sort every step, which keeps the
/// trace order deterministic. Inputs are small so the O(V^2 log V) cost is fine.
pub fn dijkstra(vertices: &[Vertex], edges: &[Edge], start: VertexId, end: VertexId) -> SearchResult {

    let Some(mut space) = SearchSpace::new(vertices, edges, start, end) else {
        return SearchResult::default();
    };

    let mut frontier: Vec<usize> = (0..space.nodes.len()).collect();
    let mut visited: Vec<Edge> = Vec::with_capacity(frontier.len());

    while !frontier.is_empty() {
        frontier.sort_by(|a, b| space.nodes[*a].cost.total_cmp(&space.nodes[*b].cost));
        let current = frontier.remove(0);

        visited.push(space.arrival_edge(current));
        log::trace!("dijkstra finalized {} at {}", space.nodes[current].vertex.id, space.nodes[current].cost);

        if current == space.end {
            break;
        }

        let arcs = std::mem::take(&mut space.adjacency[current]);
        for &(next, weight) in &arcs {
            space.relax(current, next, weight);
        }
        space.adjacency[current] = arcs;
    }

    space.into_result(visited)
}
