use std::fmt;


#[derive(Debug, Clone, PartialEq)]
pub enum GraphError {
    InvalidConfig(String), // Configuration rejected before generation
    UnknownAlgorithm(String), // Algorithm name not recognized
    Geometry(GeometryError),
    KdTreeError(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum GeometryError {
    InvalidBounds, // Rectangle has no positive, finite area
    MarginTooLarge, // Margin leaves no interior
}


impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GraphError::InvalidConfig(reason) => write!(f, "invalid graph config: {reason}"),
            GraphError::UnknownAlgorithm(name) => write!(f, "unknown algorithm `{name}` (expected `dijkstra` or `astar`)"),
            GraphError::Geometry(e) => write!(f, "geometry error: {e}"),
            GraphError::KdTreeError(e) => write!(f, "spatial index error: {e}"),
        }
    }
}

impl fmt::Display for GeometryError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GeometryError::InvalidBounds => f.write_str("bounds must have finite, positive width and height"),
            GeometryError::MarginTooLarge => f.write_str("margin leaves no interior"),
        }
    }
}

impl std::error::Error for GraphError {}
impl std::error::Error for GeometryError {}


impl From<kdtree::ErrorKind> for GraphError {
    fn from(error: kdtree::ErrorKind) -> Self {
        GraphError::KdTreeError(error.to_string())
    }
}

impl From<GeometryError> for GraphError {
    fn from(error: GeometryError) -> Self {
        GraphError::Geometry(error)
    }
}
