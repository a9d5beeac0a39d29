use num_traits::Float;
use rand::Rng;
use crate::errors::GeometryError;


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

/// Squared Euclidean distance
pub fn squared_euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    (x1 - x2).powi(2) + (y1 - y2).powi(2)
}


/// 2D Point
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Euclidean distance to another point
    pub fn distance(&self, other: &Point) -> f64 {
        euclidean(self.x, self.y, other.x, other.y)
    }
}


/// Axis-aligned rectangle, `min` inclusive and `max` exclusive
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub min: Point,
    pub max: Point,
}

impl Rect {

    /// Plane of the given size anchored at the origin
    pub fn new(width: f64, height: f64) -> Result<Self, GeometryError> {
        if !(width.is_finite() && height.is_finite() && width > 0.0 && height > 0.0) {
            return Err(GeometryError::InvalidBounds);
        }
        Ok(Self {
            min: Point::new(0.0, 0.0),
            max: Point::new(width, height),
        })
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Point {
        Point::new(
            (self.min.x + self.max.x) / 2.0,
            (self.min.y + self.max.y) / 2.0,
        )
    }

    /// Length of the shorter side
    pub fn min_side(&self) -> f64 {
        f64::min(self.width(), self.height())
    }

    /// Rectangle pulled in by `margin` on every side
    pub fn shrink(&self, margin: f64) -> Result<Self, GeometryError> {
        if !(margin.is_finite() && margin >= 0.0) {
            return Err(GeometryError::InvalidBounds);
        }
        if 2.0 * margin >= self.min_side() {
            return Err(GeometryError::MarginTooLarge);
        }
        Ok(Self {
            min: Point::new(self.min.x + margin, self.min.y + margin),
            max: Point::new(self.max.x - margin, self.max.y - margin),
        })
    }

    pub fn contains(&self, point: &Point) -> bool {
        point.x >= self.min.x && point.x < self.max.x &&
        point.y >= self.min.y && point.y < self.max.y
    }

    /// Uniformly random point inside the rectangle
    pub fn random_point<R: Rng + ?Sized>(&self, rng: &mut R) -> Point {
        Point {
            x: rng.random::<f64>() * self.width() + self.min.x,
            y: rng.random::<f64>() * self.height() + self.min.y,
        }
    }
}
