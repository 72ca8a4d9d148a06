use num_traits::Float;
use crate::graph::Node;


/// Euclidean distance
pub fn euclidean<T>(x1: T, y1: T, x2: T, y2: T) -> T
where
    T: Float,
    {
    ((x1 - x2).powi(2) + (y1 - y2).powi(2)).sqrt()
}

/// Straight line distance between two nodes - the edge weight of the road map
/// Integer coordinates are widened first so the subtraction cannot overflow
pub fn node_distance(from: &Node, to: &Node) -> f64 {
    euclidean(
        f64::from(from.x()),
        f64::from(from.y()),
        f64::from(to.x()),
        f64::from(to.y()),
    )
}


/// Axis aligned bounding box over node coordinates
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Bounds {
    pub min_x: i32,
    pub max_x: i32,
    pub min_y: i32,
    pub max_y: i32,
}

impl Bounds {

    /// Bounds of a single point
    pub fn point(x: i32, y: i32) -> Self {
        Self { min_x: x, max_x: x, min_y: y, max_y: y }
    }

    /// Grow the box to include a point
    pub fn include(&mut self, x: i32, y: i32) {
        self.min_x = self.min_x.min(x);
        self.max_x = self.max_x.max(x);
        self.min_y = self.min_y.min(y);
        self.max_y = self.max_y.max(y);
    }

    /// Horizontal extent, i64 so that i32::MIN..i32::MAX still fits
    pub fn width(&self) -> i64 {
        i64::from(self.max_x) - i64::from(self.min_x)
    }

    /// Vertical extent
    pub fn height(&self) -> i64 {
        i64::from(self.max_y) - i64::from(self.min_y)
    }
}
