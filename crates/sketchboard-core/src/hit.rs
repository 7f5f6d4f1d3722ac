//! Hit testing: which element, and which part of it, lies under a point.

use crate::element::{Element, Freehand, Line, Rectangle};
use crate::geometry::{FREEHAND_TOLERANCE, LINE_TOLERANCE, inside_rect, near_point, on_segment};
use crate::scene::Scene;
use kurbo::Point;
use serde::{Deserialize, Serialize};

/// The part of an element a point falls on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Region {
    /// Rectangle corner at (`x1`, `y1`).
    TopLeft,
    /// Rectangle corner at (`x2`, `y1`).
    TopRight,
    /// Rectangle corner at (`x1`, `y2`).
    BottomLeft,
    /// Rectangle corner at (`x2`, `y2`).
    BottomRight,
    /// Line start point.
    Start,
    /// Line end point.
    End,
    /// Body of the element.
    Inside,
}

impl Region {
    /// Check if grabbing this region resizes rather than moves.
    pub fn is_handle(self) -> bool {
        !matches!(self, Region::Inside)
    }
}

/// Pointer cursor shown while hovering with the selection tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum CursorKind {
    #[default]
    Default,
    /// Diagonal resize, top-left to bottom-right.
    ResizeNwse,
    /// Diagonal resize, top-right to bottom-left.
    ResizeNesw,
    Move,
}

/// An element together with the region that was hit.
#[derive(Debug, Clone, PartialEq)]
pub struct Hit {
    pub element: Element,
    pub region: Region,
}

/// Find the region of `element` under `point`, if any.
pub fn position_within(point: Point, element: &Element) -> Option<Region> {
    match element {
        Element::Rectangle(rect) => rectangle_region(point, rect),
        Element::Line(line) => line_region(point, line),
        Element::Freehand(stroke) => freehand_region(point, stroke),
    }
}

fn rectangle_region(point: Point, rect: &Rectangle) -> Option<Region> {
    let [tl, tr, bl, br] = rect.corners();
    near_point(point, tl, Region::TopLeft)
        .or_else(|| near_point(point, tr, Region::TopRight))
        .or_else(|| near_point(point, bl, Region::BottomLeft))
        .or_else(|| near_point(point, br, Region::BottomRight))
        // Literal corners: an unnormalized rectangle has no interior here.
        .or_else(|| inside_rect(point, rect.start, rect.end).then_some(Region::Inside))
}

fn line_region(point: Point, line: &Line) -> Option<Region> {
    near_point(point, line.start, Region::Start)
        .or_else(|| near_point(point, line.end, Region::End))
        .or_else(|| {
            on_segment(line.start, line.end, point, LINE_TOLERANCE).then_some(Region::Inside)
        })
}

fn freehand_region(point: Point, stroke: &Freehand) -> Option<Region> {
    stroke
        .points
        .windows(2)
        .any(|w| on_segment(w[0], w[1], point, FREEHAND_TOLERANCE))
        .then_some(Region::Inside)
}

/// Find the first element in creation order that `point` hits.
///
/// On overlap the earliest-created element wins, even though later elements
/// are drawn on top of it.
pub fn element_at(point: Point, scene: &Scene) -> Option<Hit> {
    scene.iter().find_map(|element| {
        position_within(point, element).map(|region| Hit {
            element: element.clone(),
            region,
        })
    })
}

/// Cursor to show when hovering over `region`.
pub fn cursor_for(region: Region) -> CursorKind {
    match region {
        Region::TopLeft | Region::BottomRight | Region::Start | Region::End => {
            CursorKind::ResizeNwse
        }
        Region::TopRight | Region::BottomLeft => CursorKind::ResizeNesw,
        Region::Inside => CursorKind::Move,
    }
}
