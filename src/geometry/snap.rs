use crate::point::Point;

/// Replaces `current` with the closest point on the horizontal, vertical or
/// 45° diagonal through `anchor`.
///
/// Candidates are compared by exact squared distance; on a tie the earlier
/// candidate (horizontal, vertical, diagonal) wins.
pub fn snap(anchor: Point, current: Point) -> Point {
    if anchor == current {
        return current;
    }

    let candidates = snap_candidates(anchor, current);

    let mut best = candidates[0];
    let mut best_distance = best.distance_sq(current);
    for &candidate in &candidates[1..] {
        let distance = candidate.distance_sq(current);
        if distance < best_distance {
            best = candidate;
            best_distance = distance;
        }
    }
    best
}

/// Horizontal, vertical and diagonal candidates, in tie-break order.
pub fn snap_candidates(anchor: Point, current: Point) -> [Point; 3] {
    let dx = i64::from(current.x) - i64::from(anchor.x);
    let dy = i64::from(current.y) - i64::from(anchor.y);
    let m = dx.abs().min(dy.abs());

    let horizontal = Point::new(current.x, anchor.y);
    let vertical = Point::new(anchor.x, current.y);
    // Lies between anchor and current on both axes, so it fits in i32.
    let diagonal = Point::new(
        (i64::from(anchor.x) + dx.signum() * m) as i32,
        (i64::from(anchor.y) + dy.signum() * m) as i32,
    );

    [horizontal, vertical, diagonal]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_distance_returns_current() {
        let p = Point::new(12, -4);
        assert_eq!(snap(p, p), p);
    }

    #[test]
    fn test_mostly_horizontal_snaps_horizontal() {
        assert_eq!(snap(Point::new(0, 0), Point::new(10, 2)), Point::new(10, 0));
    }

    #[test]
    fn test_mostly_vertical_snaps_vertical() {
        assert_eq!(snap(Point::new(0, 0), Point::new(-1, 9)), Point::new(0, 9));
    }

    #[test]
    fn test_near_diagonal_snaps_diagonal() {
        // horizontal/vertical are 9 and 10 away, diagonal (9,-9) is 1 away.
        assert_eq!(snap(Point::new(0, 0), Point::new(10, -9)), Point::new(9, -9));
    }

    #[test]
    fn test_exact_diagonal_snaps_to_itself() {
        assert_eq!(snap(Point::new(0, 0), Point::new(5, 5)), Point::new(5, 5));
    }

    #[test]
    fn test_tie_prefers_horizontal() {
        // horizontal (4,0) and diagonal (2,2) are both at squared distance 4.
        assert_eq!(snap(Point::new(0, 0), Point::new(4, 2)), Point::new(4, 0));
    }

    #[test]
    fn test_far_apart_points_do_not_overflow() {
        let anchor = Point::new(i32::MIN, 0);
        assert_eq!(snap(anchor, Point::new(i32::MAX, 1)), Point::new(i32::MAX, 0));
        assert_eq!(
            snap(Point::new(i32::MIN, i32::MIN), Point::new(i32::MAX, i32::MAX)),
            Point::new(i32::MAX, i32::MAX)
        );
        assert_eq!(snap(Point::new(i32::MAX, 0), Point::new(i32::MIN, 3)), Point::new(i32::MIN, 0));
    }

    #[test]
    fn test_result_is_minimum_of_candidates() {
        let anchor = Point::new(50, 50);
        for x in (0..=100).step_by(7) {
            for y in (0..=100).step_by(11) {
                let current = Point::new(x, y);
                let snapped = snap(anchor, current);
                let best = snapped.distance_sq(current);
                for candidate in snap_candidates(anchor, current) {
                    assert!(best <= candidate.distance_sq(current));
                }
            }
        }
    }
}
