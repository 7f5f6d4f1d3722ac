//! Line element.

use super::ElementId;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};

/// A straight line segment.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Line {
    pub(crate) id: ElementId,
    /// Start point (`x1`, `y1`).
    pub start: Point,
    /// End point (`x2`, `y2`).
    pub end: Point,
}

impl Line {
    /// Create a new line.
    pub fn new(id: ElementId, start: Point, end: Point) -> Self {
        Self { id, start, end }
    }

    pub fn id(&self) -> ElementId {
        self.id
    }

    /// Same line with its endpoints in lexicographic order.
    pub fn normalized(&self) -> Self {
        let ordered = self.start.x < self.end.x
            || (self.start.x == self.end.x && self.start.y <= self.end.y);
        if ordered {
            self.clone()
        } else {
            Self::new(self.id, self.end, self.start)
        }
    }

    pub fn bounds(&self) -> Rect {
        Rect::from_points(self.start, self.end)
    }

    pub fn to_path(&self) -> BezPath {
        let mut path = BezPath::new();
        path.move_to(self.start);
        path.line_to(self.end);
        path
    }
}
