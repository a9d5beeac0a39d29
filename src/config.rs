use crate::errors::GraphError;
use crate::geometry::Rect;


/// Max connections a vertex makes during its own scan on a regular viewport
pub const MAX_DEGREE: usize = 4;
/// Max connections per vertex on small viewports
pub const MAX_DEGREE_COMPACT: usize = 3;
/// Minimum distance between any two generated vertices
pub const DEFAULT_MIN_SEPARATION: f64 = 50.0;
pub const DEFAULT_VERTEX_COUNT: usize = 48;
pub const VERTEX_COUNT_COMPACT: usize = 16;
/// Largest vertex count `validate` accepts
pub const MAX_VERTEX_COUNT: usize = 1_000;

/// Windows narrower than this get the compact layout
pub const COMPACT_BREAKPOINT: f64 = 700.0;
/// Share of the window width the plane takes up
const PLANE_SHARE: f64 = 0.6;
const PLANE_SHARE_COMPACT: f64 = 0.9;


/// Named density presets offered by the control panel
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Density {
    Sparse,
    #[default]
    Medium,
    Dense,
}

impl Density {

    /// Connection radius multiplier
    pub fn factor(&self) -> f64 {
        match self {
            Density::Sparse => 0.3,
            Density::Medium => 0.5,
            Density::Dense => 0.7,
        }
    }

    /// Preset matching an exact factor, if any
    pub fn from_factor(factor: f64) -> Option<Self> {
        [Density::Sparse, Density::Medium, Density::Dense]
            .into_iter()
            .find(|preset| preset.factor() == factor)
    }
}


/// Parameters for one graph generation
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct GraphConfig {
    pub width: f64,
    pub height: f64,
    pub vertex_count: usize,
    pub density: f64, // connection radius = min(width, height) * density
    pub max_degree: usize,
    pub min_separation: f64,
    pub margin: f64, // keeps vertices away from the plane edges
    pub anchor_center: bool, // place the first vertex at the plane's center
}

impl GraphConfig {

    pub fn new(width: f64, height: f64) -> Self {
        Self {
            width,
            height,
            ..Self::default()
        }
    }

    /// Configuration for small viewports - fewer vertices, lower degree cap
    pub fn compact(width: f64, height: f64) -> Self {
        Self::new(width, height)
            .with_vertex_count(VERTEX_COUNT_COMPACT)
            .with_max_degree(MAX_DEGREE_COMPACT)
    }

    /// Derive the plane from the browser window width
    /// The plane is 60% of the window (90% below the breakpoint) with a 16:9 aspect
    pub fn for_viewport(window_width: f64) -> Self {
        let compact = window_width < COMPACT_BREAKPOINT;
        let share = if compact { PLANE_SHARE_COMPACT } else { PLANE_SHARE };
        let width = window_width * share;
        let height = width * 9.0 / 16.0;

        if compact {
            Self::compact(width, height)
        } else {
            Self::new(width, height)
        }
    }

    pub fn with_vertex_count(mut self, vertex_count: usize) -> Self {
        self.vertex_count = vertex_count;
        self
    }

    pub fn with_density(mut self, density: f64) -> Self {
        self.density = density;
        self
    }

    pub fn with_density_preset(self, density: Density) -> Self {
        self.with_density(density.factor())
    }

    pub fn with_max_degree(mut self, max_degree: usize) -> Self {
        self.max_degree = max_degree;
        self
    }

    pub fn with_min_separation(mut self, min_separation: f64) -> Self {
        self.min_separation = min_separation;
        self
    }

    pub fn with_margin(mut self, margin: f64) -> Self {
        self.margin = margin;
        self
    }

    pub fn with_anchored_center(mut self, anchor_center: bool) -> Self {
        self.anchor_center = anchor_center;
        self
    }

    /// Distance below which two vertices get connected
    pub fn connection_radius(&self) -> f64 {
        f64::min(self.width, self.height) * self.density
    }

    /// Plane bounds
    pub fn bounds(&self) -> Result<Rect, GraphError> {
        Ok(Rect::new(self.width, self.height)?)
    }

    /// Reject configurations that cannot produce a graph
    pub fn validate(&self) -> Result<(), GraphError> {
        let bounds = Rect::new(self.width, self.height).map_err(|_| {
            GraphError::InvalidConfig(format!(
                "plane must be finite and positive, got {}x{}", self.width, self.height
            ))
        })?;

        if self.vertex_count > MAX_VERTEX_COUNT {
            return Err(GraphError::InvalidConfig(format!(
                "vertex count must be at most {MAX_VERTEX_COUNT}, got {}", self.vertex_count
            )));
        }

        if !(self.density > 0.0 && self.density <= 1.0) {
            return Err(GraphError::InvalidConfig(format!(
                "density must be in (0, 1], got {}", self.density
            )));
        }

        if !(self.min_separation.is_finite() && self.min_separation > 0.0) {
            return Err(GraphError::InvalidConfig(format!(
                "min separation must be finite and positive, got {}", self.min_separation
            )));
        }

        bounds.shrink(self.margin).map_err(|e| {
            GraphError::InvalidConfig(format!("margin {}: {e}", self.margin))
        })?;

        Ok(())
    }
}

impl Default for GraphConfig {
    fn default() -> Self {
        Self {
            width: 1280.0,
            height: 720.0,
            vertex_count: DEFAULT_VERTEX_COUNT,
            density: Density::default().factor(),
            max_degree: MAX_DEGREE,
            min_separation: DEFAULT_MIN_SEPARATION,
            margin: 0.0,
            anchor_center: false,
        }
    }
}
