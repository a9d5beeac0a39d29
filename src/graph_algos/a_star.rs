use crate::collections::PriorityQueue;
use crate::graph::{Edge, Vertex, VertexId};
use super::{SearchResult, SearchSpace};


/// Straight-line distance to the goal
/// Admissible whenever arc weights are Euclidean distances
pub fn euclidean_heuristic(vertex: &Vertex, goal: &Vertex) -> f64 {
    vertex.distance(goal)
}


/// A* Algorithm
/// https://en.wikipedia.org/wiki/A*_search_algorithm
///
/// The open list is seeded with every vertex, the start at `h(start)` and the rest
/// at infinity. Improving a vertex re-queues it at `cost + h` instead of
/// decreasing its key, so entries whose priority no longer matches the vertex's
/// current `cost + h` are stale and skipped.
///
/// Unlike Dijkstra, the visited trace records arcs when they are relaxed.
///
/// The heuristic must be admissible (never overestimate the remaining cost) for
/// the returned path to be a shortest one.
pub fn a_star<H>(vertices: &[Vertex], edges: &[Edge], start: VertexId, end: VertexId, heuristic: H) -> SearchResult
where
    H: Fn(&Vertex, &Vertex) -> f64,
{
    let Some(mut space) = SearchSpace::new(vertices, edges, start, end) else {
        return SearchResult::default();
    };

    let goal = space.nodes[space.end].vertex;
    let estimate = |index: usize, space: &SearchSpace| {
        let node = &space.nodes[index];
        node.cost + heuristic(&node.vertex, &goal)
    };

    // Open List - sorted by f cost (cost + heuristic)
    let mut open_list: PriorityQueue<usize> = PriorityQueue::with_capacity(space.nodes.len());
    for index in 0..space.nodes.len() {
        open_list.enqueue(index, estimate(index, &space));
    }

    let mut visited: Vec<Edge> = Vec::new();

    while let Some((current, f_cost)) = open_list.dequeue_with_priority() {

        // A better route was queued after this entry
        if f_cost > estimate(current, &space) {
            continue;
        }

        if current == space.end {
            break;
        }

        log::trace!("a* expanding {} at {}", space.nodes[current].vertex.id, space.nodes[current].cost);

        let arcs = std::mem::take(&mut space.adjacency[current]);
        for &(next, weight) in &arcs {
            if space.relax(current, next, weight) {
                open_list.enqueue(next, estimate(next, &space));
                visited.push(space.arrival_edge(next));
            }
        }
        space.adjacency[current] = arcs;
    }

    space.into_result(visited)
}
