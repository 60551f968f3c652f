// 2D bounding box module: axis-aligned bounds in the tiling plane
// Used for the requested view extent and for the extent of a built tiling

use nalgebra::Vector2;

/// 2D axis-aligned bounding box
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoundingBox2D {
    /// Minimum corner (bottom-left in standard coordinate system)
    pub min: Vector2<f64>,
    /// Maximum corner (top-right in standard coordinate system)
    pub max: Vector2<f64>,
}

impl BoundingBox2D {
    /// Create a new bounding box from minimum and maximum corners
    ///
    /// # Panics
    /// This function will panic in debug mode if min coordinates are greater than max coordinates
    pub fn new(min: Vector2<f64>, max: Vector2<f64>) -> Self {
        debug_assert!(
            min.x <= max.x && min.y <= max.y,
            "Minimum coordinates must be less than or equal to maximum coordinates"
        );
        Self { min, max }
    }

    /// Create a box of the given size centred on the origin
    pub fn centered(width: f64, height: f64) -> Self {
        let half_size = Vector2::new(width, height) / 2.0;
        Self::new(-half_size, half_size)
    }

    /// Create a bounding box from a collection of points
    ///
    /// Returns `None` if the iterator is empty
    pub fn from_points<I>(points: I) -> Option<Self>
    where
        I: IntoIterator<Item = Vector2<f64>>,
    {
        let mut points_iter = points.into_iter();
        let first_point = points_iter.next()?;

        let (min, max) = points_iter.fold((first_point, first_point), |(min, max), point| {
            (
                Vector2::new(min.x.min(point.x), min.y.min(point.y)),
                Vector2::new(max.x.max(point.x), max.y.max(point.y)),
            )
        });

        Some(Self { min, max })
    }

    /// Check if a point is inside the bounding box (inclusive of boundaries)
    pub fn contains(&self, point: Vector2<f64>) -> bool {
        point.x >= self.min.x && point.x <= self.max.x && point.y >= self.min.y && point.y <= self.max.y
    }

    pub fn width(&self) -> f64 {
        self.max.x - self.min.x
    }

    pub fn height(&self) -> f64 {
        self.max.y - self.min.y
    }

    pub fn center(&self) -> Vector2<f64> {
        (self.min + self.max) / 2.0
    }

    /// Corners in counter-clockwise order, starting at `min`
    pub fn corners(&self) -> [Vector2<f64>; 4] {
        [
            self.min,
            Vector2::new(self.max.x, self.min.y),
            self.max,
            Vector2::new(self.min.x, self.max.y),
        ]
    }

    /// Grow the box by `margin` on every side
    pub fn expand(&self, margin: f64) -> BoundingBox2D {
        let offset = Vector2::new(margin, margin);
        BoundingBox2D::new(self.min - offset, self.max + offset)
    }
}
