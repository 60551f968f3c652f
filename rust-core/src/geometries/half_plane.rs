// Half-plane clipping of convex polygons
//
// The acceptance cells of the multigrid are intersections of slabs
// { lower <= n·z <= upper }. Cells are built by clipping a starting
// parallelogram against one slab per remaining axis.

use nalgebra::{Matrix2, Vector2};

/// Sutherland-Hodgman clipping of a convex polygon against `normal·p <= distance`.
pub fn clip_polygon_by_halfspace(
    polygon: &[Vector2<f64>],
    normal: &Vector2<f64>,
    distance: f64,
) -> Vec<Vector2<f64>> {
    let Some(&last) = polygon.last() else {
        return Vec::new();
    };

    let mut clipped_polygon = Vec::with_capacity(polygon.len() + 1);
    let mut previous_vertex = last;
    let mut previous_inside = normal.dot(&previous_vertex) - distance <= 0.0;

    for &current_vertex in polygon {
        let current_inside = normal.dot(&current_vertex) - distance <= 0.0;

        // Edge crosses the boundary
        if current_inside != previous_inside {
            let t = (distance - normal.dot(&previous_vertex))
                / normal.dot(&(current_vertex - previous_vertex));
            clipped_polygon.push(previous_vertex + (current_vertex - previous_vertex) * t);
        }

        if current_inside {
            clipped_polygon.push(current_vertex);
        }

        previous_vertex = current_vertex;
        previous_inside = current_inside;
    }

    clipped_polygon
}

/// Clip a convex polygon to the slab `lower <= normal·p <= upper`.
pub fn clip_polygon_to_slab(
    polygon: &[Vector2<f64>],
    normal: &Vector2<f64>,
    lower: f64,
    upper: f64,
) -> Vec<Vector2<f64>> {
    let upper_clipped = clip_polygon_by_halfspace(polygon, normal, upper);
    clip_polygon_by_halfspace(&upper_clipped, &(-normal), -lower)
}

/// Intersection of two slabs with non-parallel normals, as a counter-clockwise
/// parallelogram. `None` if the normals are (numerically) parallel.
pub fn parallelogram_from_slabs(
    normal_0: &Vector2<f64>,
    range_0: (f64, f64),
    normal_1: &Vector2<f64>,
    range_1: (f64, f64),
) -> Option<Vec<Vector2<f64>>> {
    // Rows are the slab normals: M z = (n0·z, n1·z)
    let rows = Matrix2::new(normal_0.x, normal_0.y, normal_1.x, normal_1.y);
    let inverse = rows.try_inverse()?;

    let mut corners = vec![
        inverse * Vector2::new(range_0.0, range_1.0),
        inverse * Vector2::new(range_0.1, range_1.0),
        inverse * Vector2::new(range_0.1, range_1.1),
        inverse * Vector2::new(range_0.0, range_1.1),
    ];
    if signed_area(&corners) < 0.0 {
        corners.reverse();
    }
    Some(corners)
}

/// Extent of `normal·p` over the polygon's vertices.
pub fn projected_range(polygon: &[Vector2<f64>], normal: &Vector2<f64>) -> Option<(f64, f64)> {
    polygon.iter().map(|vertex| normal.dot(vertex)).fold(None, |range, value| {
        Some(match range {
            None => (value, value),
            Some((low, high)) => (low.min(value), high.max(value)),
        })
    })
}

/// Polygon area using the shoelace formula.
pub fn polygon_area(vertices: &[Vector2<f64>]) -> f64 {
    signed_area(vertices).abs()
}

fn signed_area(vertices: &[Vector2<f64>]) -> f64 {
    let vertex_count = vertices.len();
    if vertex_count < 3 {
        return 0.0;
    }

    let mut area = 0.0;
    for i in 0..vertex_count {
        let current = vertices[i];
        let next = vertices[(i + 1) % vertex_count];
        area += current.x * next.y - next.x * current.y;
    }
    0.5 * area
}
