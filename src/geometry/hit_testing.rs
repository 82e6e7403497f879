use crate::point::Point;

pub const DEFAULT_HIT_RADIUS: i32 = 6;

/// Index of the first vertex within `radius` of `pos` (boundary inclusive).
///
/// Vertices are scanned in list order and the first hit wins, even if a later
/// vertex is closer. Vertices sit further apart than the radius in practice.
pub fn find_vertex_near(vertices: &[Point], pos: Point, radius: i32) -> Option<usize> {
    let radius = i128::from(radius);
    let radius_sq = radius * radius;
    vertices
        .iter()
        .position(|vertex| vertex.distance_sq(pos) <= radius_sq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_radius_boundary_is_inclusive() {
        let vertices = [Point::new(100, 100)];
        assert_eq!(find_vertex_near(&vertices, Point::new(106, 100), DEFAULT_HIT_RADIUS), Some(0));
        assert_eq!(find_vertex_near(&vertices, Point::new(100, 107), DEFAULT_HIT_RADIUS), None);
    }

    #[test]
    fn test_first_vertex_in_radius_wins() {
        let vertices = [Point::new(0, 0), Point::new(4, 0)];
        // (3,0) is nearer to vertex 1, but vertex 0 comes first.
        assert_eq!(find_vertex_near(&vertices, Point::new(3, 0), DEFAULT_HIT_RADIUS), Some(0));
    }

    #[test]
    fn test_empty_has_no_hit() {
        assert_eq!(find_vertex_near(&[], Point::new(0, 0), DEFAULT_HIT_RADIUS), None);
    }
}
