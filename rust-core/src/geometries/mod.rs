// Geometries module: planar primitives shared by the acceptance test and the projector
// This module provides convex-polygon clipping and axis-aligned bounds in the tiling plane

// ======================== MODULE DECLARATIONS ========================
pub mod geometry2d_bounding_box;
pub mod half_plane;


// ======================== GEOMETRIC UTILITIES ========================
pub use geometry2d_bounding_box::BoundingBox2D; // struct - 2D axis-aligned bounding box
// BoundingBox2D impl methods:
//   new(min: Vector2<f64>, max: Vector2<f64>) -> Self        - creates bounding box from corners
//   centered(width: f64, height: f64) -> Self                - creates box centred on the origin
//   from_points(points: I) -> Option<Self>                   - smallest box containing all points
//   contains(&self, point: Vector2<f64>) -> bool             - checks if point is inside box
//   width(&self) / height(&self) -> f64                      - box extents
//   center(&self) -> Vector2<f64>                            - box center point
//   corners(&self) -> [Vector2<f64>; 4]                      - counter-clockwise corners
//   expand(&self, margin: f64) -> BoundingBox2D              - grows box by margin on every side

pub use half_plane::{
    clip_polygon_by_halfspace, // fn(polygon, normal, distance) -> Vec<Vector2<f64>> - keeps normal·p <= distance
    clip_polygon_to_slab,      // fn(polygon, normal, lower, upper) -> Vec<Vector2<f64>> - keeps lower <= normal·p <= upper
    parallelogram_from_slabs,  // fn(n0, range0, n1, range1) -> Option<Vec<Vector2<f64>>> - intersection of two slabs
    polygon_area,              // fn(vertices) -> f64 - shoelace area (absolute)
    projected_range,           // fn(polygon, normal) -> Option<(f64, f64)> - extent of normal·p over the polygon
};
