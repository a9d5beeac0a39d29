pub mod builder;

use std::fmt;
use crate::geometry::Point;
use crate::graph_algos::{self, Algorithm, SearchResult};


/// Stable vertex identity
/// Lookups and equality go through the id, never through coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VertexId(pub usize);

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "v{}", self.0)
    }
}


/// Immutable point on the plane with an identity
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Vertex {
    pub id: VertexId,
    pub point: Point,
}

impl Vertex {

    pub fn new(id: usize, x: f64, y: f64) -> Self {
        Self {
            id: VertexId(id),
            point: Point::new(x, y),
        }
    }

    pub fn x(&self) -> f64 {
        self.point.x
    }

    pub fn y(&self) -> f64 {
        self.point.y
    }

    /// Euclidean distance between two vertices
    pub fn distance(&self, other: &Vertex) -> f64 {
        self.point.distance(&other.point)
    }
}


/// Directed, weighted arc
/// Undirected connections are stored as two arcs with the same weight
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    pub weight: f64, // never negative
}

impl Edge {

    pub fn new(from: VertexId, to: VertexId, weight: f64) -> Self {
        Self { from, to, weight }
    }

    /// Same arc pointing the other way
    pub fn reversed(&self) -> Self {
        Self {
            from: self.to,
            to: self.from,
            weight: self.weight,
        }
    }

    pub fn is_self_loop(&self) -> bool {
        self.from == self.to
    }
}


/// Vertex set plus flat edge list
/// The edge list is the authoritative relation, per-vertex neighbors are derived from it
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Graph {
    vertices: Vec<Vertex>,
    edges: Vec<Edge>,
}

impl Graph {

    pub fn new(vertices: Vec<Vertex>, edges: Vec<Edge>) -> Self {
        Self { vertices, edges }
    }

    pub fn vertices(&self) -> &[Vertex] {
        &self.vertices
    }

    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    pub fn vertex(&self, id: VertexId) -> Option<&Vertex> {
        self.vertices.iter().find(|vertex| vertex.id == id)
    }

    pub fn contains(&self, id: VertexId) -> bool {
        self.vertex(id).is_some()
    }

    /// Outgoing arcs of a vertex as (neighbor, weight), in edge-list order
    pub fn neighbors(&self, id: VertexId) -> impl Iterator<Item = (VertexId, f64)> + '_ {
        self.edges.iter()
            .filter(move |edge| edge.from == id)
            .map(|edge| (edge.to, edge.weight))
    }

    /// Out-degree, counting duplicated arcs
    pub fn degree(&self, id: VertexId) -> usize {
        self.neighbors(id).count()
    }

    /// Total weight along a path
    /// Returns None when two consecutive vertices have no arc between them
    pub fn path_cost(&self, path: &[Vertex]) -> Option<f64> {
        path_cost(&self.edges, path)
    }

    /// Run a search between two vertices of this graph
    pub fn find_path(&self, algorithm: Algorithm, start: VertexId, end: VertexId) -> SearchResult {
        graph_algos::find_path(algorithm, &self.vertices, &self.edges, start, end)
    }
}


/// Sum the cheapest arc weight between each consecutive pair on the path
pub fn path_cost(edges: &[Edge], path: &[Vertex]) -> Option<f64> {
    path.windows(2).try_fold(0.0, |total, hop| {
        edges.iter()
            .filter(|edge| edge.from == hop[0].id && edge.to == hop[1].id)
            .map(|edge| edge.weight)
            .min_by(f64::total_cmp)
            .map(|weight| total + weight)
    })
}
