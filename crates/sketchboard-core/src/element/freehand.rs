//! Freehand stroke element.

use super::ElementId;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// A freehand stroke (series of points).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Freehand {
    pub(crate) id: ElementId,
    /// Points in drawing order.
    pub points: Vec<Point>,
}

impl Freehand {
    /// Start a stroke at a single point.
    pub fn new(id: ElementId, start: Point) -> Self {
        Self { id, points: vec![start] }
    }

    /// Create from existing points.
    pub fn from_points(id: ElementId, points: Vec<Point>) -> Self {
        Self { id, points }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Add a point to the end of the stroke.
    pub fn add_point(&mut self, point: Point) {
        self.points.push(point);
    }

    /// Get the number of points.
    pub fn len(&self) -> usize {
        self.points.len()
    }

    /// Check if the stroke is empty.
    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn bounds(&self) -> Rect {
        let Some((first, rest)) = self.points.split_first() else {
            return Rect::ZERO;
        };
        rest.iter()
            .fold(Rect::from_points(*first, *first), |acc, p| acc.union_pt(*p))
    }

    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        let Some((first, rest)) = self.points.split_first() else {
            return path;
        };
        path.move_to(*first);
        for point in rest {
            path.line_to(*point);
        }
        path
    }
}
