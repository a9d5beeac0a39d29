pub mod rejection;

pub use rejection::generate_vertices;
