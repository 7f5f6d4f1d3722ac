//! Element definitions for the whiteboard.

mod freehand;
mod line;
mod rectangle;

pub use freehand::Freehand;
pub use line::Line;
pub use rectangle::Rectangle;

use crate::error::BoardError;
use kurbo::{BezPath, Point, Rect};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of an element: its position in the scene.
pub type ElementId = usize;

/// The closed set of element kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ElementKind {
    Line,
    Rectangle,
    Freehand,
}

impl ElementKind {
    pub fn name(self) -> &'static str {
        match self {
            ElementKind::Line => "line",
            ElementKind::Rectangle => "rectangle",
            ElementKind::Freehand => "freehand",
        }
    }
}

impl fmt::Display for ElementKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ElementKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "line" => Ok(ElementKind::Line),
            "rectangle" => Ok(ElementKind::Rectangle),
            "freehand" | "pencil" => Ok(ElementKind::Freehand),
            other => Err(BoardError::UnknownElementKind(other.to_string())),
        }
    }
}

/// A shape on the board.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Element {
    Line(Line),
    Rectangle(Rectangle),
    Freehand(Freehand),
}

impl Element {
    pub fn id(&self) -> ElementId {
        match self {
            Element::Line(s) => s.id,
            Element::Rectangle(s) => s.id,
            Element::Freehand(s) => s.id,
        }
    }

    pub fn kind(&self) -> ElementKind {
        match self {
            Element::Line(_) => ElementKind::Line,
            Element::Rectangle(_) => ElementKind::Rectangle,
            Element::Freehand(_) => ElementKind::Freehand,
        }
    }

    /// Get the axis-aligned bounding box.
    pub fn bounds(&self) -> Rect {
        match self {
            Element::Line(s) => s.bounds(),
            Element::Rectangle(s) => s.bounds(),
            Element::Freehand(s) => s.bounds(),
        }
    }

    /// Get the path representation for rendering.
    pub fn to_path(&self) -> BezPath {
        match self {
            Element::Line(s) => s.to_path(),
            Element::Rectangle(s) => s.to_path(),
            Element::Freehand(s) => s.to_path(),
        }
    }

    /// Canonical form of this element. See [`normalize`].
    pub fn normalized(&self) -> Element {
        match self {
            Element::Line(s) => Element::Line(s.normalized()),
            Element::Rectangle(s) => Element::Rectangle(s.normalized()),
            Element::Freehand(_) => self.clone(),
        }
    }

    /// Check if this element kind has a normalized form.
    pub fn is_normalizable(&self) -> bool {
        matches!(self, Element::Line(_) | Element::Rectangle(_))
    }
}

/// Create a fresh element of `kind`.
///
/// Lines and rectangles span `start`..`end`; a freehand stroke starts as the
/// single point `start`.
pub fn create_element(id: ElementId, start: Point, end: Point, kind: ElementKind) -> Element {
    match kind {
        ElementKind::Line => Element::Line(Line::new(id, start, end)),
        ElementKind::Rectangle => Element::Rectangle(Rectangle::new(id, start, end)),
        ElementKind::Freehand => Element::Freehand(Freehand::new(id, start)),
    }
}

/// Canonicalize the stored coordinates of an element.
///
/// Rectangles get min/max corners, lines get their endpoints in
/// lexicographic order. Freehand strokes are returned unchanged.
pub fn normalize(element: &Element) -> Element {
    element.normalized()
}
