pub mod dijkstra;
pub mod a_star;
mod shortest_path;

pub use dijkstra::dijkstra;
pub use a_star::{a_star, euclidean_heuristic};

use std::{fmt, str::FromStr};
use shortest_path::shortest_path;

use crate::collections::FxIndexMap;
use crate::errors::GraphError;
use crate::graph::{Edge, Vertex, VertexId};


/// Search strategy selected by the control panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Algorithm {
    #[default]
    Dijkstra,
    AStar,
}

impl Algorithm {
    pub fn name(&self) -> &'static str {
        match self {
            Algorithm::Dijkstra => "dijkstra",
            Algorithm::AStar => "astar",
        }
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Algorithm {
    type Err = GraphError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "dijkstra" => Ok(Algorithm::Dijkstra),
            "astar" => Ok(Algorithm::AStar),
            other => Err(GraphError::UnknownAlgorithm(other.to_string())),
        }
    }
}


/// Outcome of one search
/// path: vertices from start to end. Empty when start or end is not in the graph,
///       and missing its start when the end is unreachable
/// visited: arcs in the order the search examined them, drives the trace animation
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchResult {
    pub path: Vec<Vertex>,
    pub visited: Vec<Edge>,
}

impl SearchResult {

    /// True when the path actually connects start to end
    pub fn is_found(&self, start: VertexId, end: VertexId) -> bool {
        match (self.path.first(), self.path.last()) {
            (Some(first), Some(last)) => first.id == start && last.id == end,
            _ => false,
        }
    }

    /// Consecutive (from, to) pairs along the path
    pub fn path_edges(&self) -> Vec<(Vertex, Vertex)> {
        self.path.windows(2).map(|hop| (hop[0], hop[1])).collect()
    }
}


/// Run the selected algorithm, A* uses the straight-line distance to `end`
pub fn find_path(algorithm: Algorithm, vertices: &[Vertex], edges: &[Edge], start: VertexId, end: VertexId) -> SearchResult {
    let result = match algorithm {
        Algorithm::Dijkstra => dijkstra(vertices, edges, start, end),
        Algorithm::AStar => a_star(vertices, edges, start, end, euclidean_heuristic),
    };

    log::debug!(
        "{algorithm} {start} -> {end}: visited {}, path {}, found {}",
        result.visited.len(), result.path.len(), result.is_found(start, end)
    );

    result
}


/// Per-query state for one vertex
#[derive(Clone, Debug)]
pub(crate) struct SearchNode {
    pub vertex: Vertex,
    pub cost: f64, // best known distance from start
    pub parent: Option<usize>, // index of the predecessor in the node map
    pub arrival: f64, // weight of the arc from the predecessor
}

/// Search state keyed by vertex id, indices follow the vertex order
pub(crate) type GraphNodeMap = FxIndexMap<VertexId, SearchNode>;


/// Transient state shared by both strategies
pub(crate) struct SearchSpace {
    pub nodes: GraphNodeMap,
    pub adjacency: Vec<Vec<(usize, f64)>>, // node index -> (neighbor index, weight)
    pub start: usize,
    pub end: usize,
}

impl SearchSpace {

    /// Index the vertices and derive outgoing arcs per vertex
    /// Returns None if start or end is not one of the vertices
    pub fn new(vertices: &[Vertex], edges: &[Edge], start: VertexId, end: VertexId) -> Option<Self> {
        let mut nodes = GraphNodeMap::default();
        for vertex in vertices {
            nodes.entry(vertex.id).or_insert(SearchNode {
                vertex: *vertex,
                cost: f64::INFINITY,
                parent: None,
                arrival: 0.0,
            });
        }

        let start = nodes.get_index_of(&start)?;
        let end = nodes.get_index_of(&end)?;
        nodes[start].cost = 0.0;

        // arcs touching unknown vertices are ignored
        let mut adjacency = vec![Vec::new(); nodes.len()];
        for edge in edges {
            if let (Some(from), Some(to)) = (nodes.get_index_of(&edge.from), nodes.get_index_of(&edge.to)) {
                adjacency[from].push((to, edge.weight));
            }
        }

        Some(Self { nodes, adjacency, start, end })
    }

    /// Arc through which a node was reached, or a self-entry if it has no predecessor
    pub fn arrival_edge(&self, index: usize) -> Edge {
        let node = &self.nodes[index];
        match node.parent {
            Some(parent) => Edge::new(self.nodes[parent].vertex.id, node.vertex.id, node.arrival),
            None => Edge::new(node.vertex.id, node.vertex.id, 0.0),
        }
    }

    /// Record a cheaper route to `to` through `from`
    /// Returns true if it improved the known cost
    pub fn relax(&mut self, from: usize, to: usize, weight: f64) -> bool {
        let alt = self.nodes[from].cost + weight;
        if alt < self.nodes[to].cost {
            let node = &mut self.nodes[to];
            node.cost = alt;
            node.parent = Some(from);
            node.arrival = weight;
            true
        } else {
            false
        }
    }

    pub fn into_result(self, visited: Vec<Edge>) -> SearchResult {
        SearchResult {
            path: shortest_path(&self.nodes, self.start, self.end),
            visited,
        }
    }
}
