//! Point and segment predicates used by hit testing.

use kurbo::Point;

/// Half-width of the square around a corner or endpoint that counts as a hit.
pub const HANDLE_TOLERANCE: f64 = 5.0;
/// Slack allowed by [`on_segment`] for straight lines.
pub const LINE_TOLERANCE: f64 = 1.0;
/// Slack allowed by [`on_segment`] for freehand strokes, whose points are sparse.
pub const FREEHAND_TOLERANCE: f64 = 5.0;

/// Euclidean distance between two points.
pub fn distance(a: Point, b: Point) -> f64 {
    ((a.x - b.x).powi(2) + (a.y - b.y).powi(2)).sqrt()
}

/// Returns `tag` if `point` lies strictly within the square of half-width
/// [`HANDLE_TOLERANCE`] centred on `target`.
///
/// This is a per-axis test, not a radius: points near the square's corners
/// are accepted even though they are further than the tolerance away.
pub fn near_point<T>(point: Point, target: Point, tag: T) -> Option<T> {
    if (point.x - target.x).abs() < HANDLE_TOLERANCE
        && (point.y - target.y).abs() < HANDLE_TOLERANCE
    {
        Some(tag)
    } else {
        None
    }
}

/// Check whether `point` lies on the segment `a`-`b`.
///
/// Uses the triangle inequality slack `|ab| - (|ap| + |bp|)` rather than the
/// perpendicular distance, so the effective band narrows towards the
/// endpoints and widens with segment length.
pub fn on_segment(a: Point, b: Point, point: Point, tolerance: f64) -> bool {
    let offset = distance(a, b) - (distance(a, point) + distance(b, point));
    offset.abs() < tolerance
}

/// Check whether `point` lies within the rectangle spanned by `min` and `max`,
/// taken literally (no reordering of the corners).
pub fn inside_rect(point: Point, min: Point, max: Point) -> bool {
    point.x >= min.x && point.x <= max.x && point.y >= min.y && point.y <= max.y
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_distance() {
        let d = distance(Point::new(0.0, 0.0), Point::new(3.0, 4.0));
        assert!((d - 5.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_near_point_square_tolerance() {
        let target = Point::new(10.0, 10.0);
        assert_eq!(near_point(Point::new(12.0, 8.0), target, "tl"), Some("tl"));
        // Diagonal distance ~6.2 is still inside the square.
        assert_eq!(near_point(Point::new(14.4, 14.4), target, "tl"), Some("tl"));
        // The bound is strict.
        assert_eq!(near_point(Point::new(15.0, 10.0), target, "tl"), None);
        assert_eq!(near_point(Point::new(10.0, 4.0), target, "tl"), None);
    }

    #[test]
    fn test_on_segment() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);
        assert!(on_segment(a, b, Point::new(50.0, 0.0), LINE_TOLERANCE));
        assert!(on_segment(a, b, Point::new(50.0, 3.0), LINE_TOLERANCE));
        assert!(!on_segment(a, b, Point::new(50.0, 10.0), LINE_TOLERANCE));
        // Collinear but past the end.
        assert!(!on_segment(a, b, Point::new(120.0, 0.0), LINE_TOLERANCE));
    }

    #[test]
    fn test_on_segment_narrows_near_endpoints() {
        let a = Point::new(0.0, 0.0);
        let b = Point::new(100.0, 0.0);
        // Same perpendicular offset, accepted mid-segment, rejected near the end.
        assert!(on_segment(a, b, Point::new(50.0, 4.0), LINE_TOLERANCE));
        assert!(!on_segment(a, b, Point::new(2.0, 4.0), LINE_TOLERANCE));
    }

    #[test]
    fn test_inside_rect_is_literal() {
        let min = Point::new(0.0, 0.0);
        let max = Point::new(10.0, 10.0);
        assert!(inside_rect(Point::new(5.0, 5.0), min, max));
        assert!(inside_rect(Point::new(10.0, 0.0), min, max));
        // Swapped corners describe no area.
        assert!(!inside_rect(Point::new(5.0, 5.0), max, min));
    }
}
