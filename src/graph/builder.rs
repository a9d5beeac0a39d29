use crate::config::{GraphConfig, DEFAULT_MIN_SEPARATION};
use crate::errors::GraphError;
use crate::graph::{Edge, Graph, Vertex};
use crate::sampling_algos::generate_vertices;

use rand::Rng;


/// Connect vertices that are closer than `min(width, height) * density`
///
/// Vertices are scanned in order. Vertex `i` accepts candidates `j` (also in
/// order) until it has made `max_degree` connections; each accepted pair is
/// emitted as the arcs `i -> j` and `j -> i` weighted by their distance.
///
/// The cap only counts connections a vertex makes during its own scan. A vertex
/// picked by many others can end up with more arcs than `max_degree`, and a pair
/// inside each other's scans is emitted once from each side.
pub fn connect_vertices(vertices: &[Vertex], width: f64, height: f64, density: f64, max_degree: usize) -> Vec<Edge> {
    let radius = f64::min(width, height) * density;
    let mut edges = Vec::new();

    for (i, vertex) in vertices.iter().enumerate() {
        let mut connections = 0;

        for (j, candidate) in vertices.iter().enumerate() {
            if connections >= max_degree {
                break;
            }
            if i == j {
                continue;
            }

            let distance = vertex.distance(candidate);
            if distance < radius {
                let edge = Edge::new(vertex.id, candidate.id, distance);
                edges.push(edge);
                edges.push(edge.reversed());
                connections += 1;
            }
        }
    }

    edges
}


/// Generates a fresh graph per configuration
#[derive(Clone, Debug)]
pub struct GraphBuilder {
    config: GraphConfig,
}

impl GraphBuilder {

    pub fn new(config: GraphConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &GraphConfig {
        &self.config
    }

    /// Place vertices and connect them
    /// Validates the configuration first, the rest never fails on valid input
    pub fn build<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Graph, GraphError> {
        let config = self.config();
        config.validate()?;
        let bounds = config.bounds()?;
        let anchor = config.anchor_center.then(|| bounds.center());

        let vertices = generate_vertices(rng, &bounds, config.vertex_count, config.min_separation, config.margin, anchor)?;
        let edges = connect_vertices(&vertices, config.width, config.height, config.density, config.max_degree);
        let graph = Graph::new(vertices, edges);

        if log::log_enabled!(log::Level::Debug) {
            let busiest = graph.vertices().iter().map(|vertex| graph.degree(vertex.id)).max().unwrap_or(0);
            log::debug!(
                "built graph: {} vertices, {} edges, radius {:.1}, max out-degree {} (cap {})",
                graph.vertices().len(), graph.edges().len(), config.connection_radius(), busiest, config.max_degree
            );
        }

        Ok(graph)
    }
}


/// Build a graph with the default vertex separation and the thread rng
pub fn build_graph(width: f64, height: f64, vertex_count: usize, density: f64, max_degree: usize) -> Result<Graph, GraphError> {
    let config = GraphConfig::new(width, height)
        .with_vertex_count(vertex_count)
        .with_density(density)
        .with_max_degree(max_degree)
        .with_min_separation(DEFAULT_MIN_SEPARATION);

    GraphBuilder::new(config).build(&mut rand::rng())
}
