//! Random geometric graphs and traced shortest-path search.
//!
//! A [`GraphBuilder`] scatters vertices over a plane with a minimum spacing and
//! connects each one to nearby vertices, producing a symmetric edge list weighted
//! by Euclidean distance. [`find_path`] then runs Dijkstra or A* between two
//! vertices and returns the path together with the visited trace, the ordered
//! arcs a renderer replays to animate the search.
//!
//! ```no_run
//! use pathgraph::{Algorithm, GraphBuilder, GraphConfig, VertexId};
//!
//! let config = GraphConfig::new(1280.0, 720.0).with_vertex_count(40);
//! let graph = GraphBuilder::new(config).build(&mut rand::rng())?;
//!
//! let result = graph.find_path(Algorithm::AStar, VertexId(0), VertexId(1));
//! if result.is_found(VertexId(0), VertexId(1)) {
//!     println!("{} hops", result.path.len() - 1);
//! }
//! # Ok::<(), pathgraph::GraphError>(())
//! ```

mod collections;
pub mod config;
pub mod errors;
pub mod geometry;
pub mod graph;
pub mod graph_algos;
pub mod sampling_algos;

pub use collections::PriorityQueue;
pub use config::{Density, GraphConfig};
pub use errors::{GeometryError, GraphError};
pub use graph::builder::{build_graph, connect_vertices, GraphBuilder};
pub use graph::{Edge, Graph, Vertex, VertexId};
pub use graph_algos::{a_star, dijkstra, find_path, Algorithm, SearchResult};
pub use sampling_algos::generate_vertices;
