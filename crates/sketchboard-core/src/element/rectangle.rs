//! Rectangle element.

use super::ElementId;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle given by two opposite corners.
///
/// The corners are stored as drawn; `start` is not necessarily the top-left
/// until the rectangle has been normalized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Rectangle {
    pub(crate) id: ElementId,
    /// First corner (`x1`, `y1`).
    pub start: Point,
    /// Opposite corner (`x2`, `y2`).
    pub end: Point,
}

impl Rectangle {
    /// Create a new rectangle.
    pub fn new(id: ElementId, start: Point, end: Point) -> Self {
        Self { id, start, end }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Same rectangle with `start` at the minimum and `end` at the maximum corner.
    pub fn normalized(&self) -> Self {
        Self::new(
            self.id,
            Point::new(self.start.x.min(self.end.x), self.start.y.min(self.end.y)),
            Point::new(self.start.x.max(self.end.x), self.start.y.max(self.end.y)),
        )
    }

    /// The literal corners as (top-left, top-right, bottom-left, bottom-right),
    /// where "top-left" means (`x1`, `y1`) whether or not it is normalized.
    pub fn corners(&self) -> [Point; 4] {
        let (x1, y1, x2, y2) = (self.start.x, self.start.y, self.end.x, self.end.y);
        [
            Point::new(x1, y1),
            Point::new(x2, y1),
            Point::new(x1, y2),
            Point::new(x2, y2),
        ]
    }

    pub fn width(&self) -> f64 {
        self.end.x - self.start.x
    }

    pub fn height(&self) -> f64 {
        self.end.y - self.start.y
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    pub fn to_path(&self) -> BezPath {
        let [tl, tr, bl, br] = self.corners();
        let mut path = BezPath::new();
        path.move_to(tl);
        path.line_to(tr);
        path.line_to(br);
        path.line_to(bl);
        path.close_path();
        path
    }
}
