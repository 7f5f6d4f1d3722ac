//! Board state and pointer gesture handling.

use crate::element::{
    Element, ElementId, ElementKind, Freehand, Line, Rectangle, create_element,
};
use crate::error::BoardResult;
use crate::hit::{CursorKind, Region, cursor_for, element_at};
use crate::history::History;
use crate::scene::Scene;
use crate::tools::ToolKind;
use kurbo::{Point, Vec2};
use serde::{Deserialize, Serialize};

/// Board settings chosen by the host.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    /// Tool active when the board is created.
    pub initial_tool: ToolKind,
    /// Maximum number of undo entries (`None` = unbounded).
    pub history_limit: Option<usize>,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            initial_tool: ToolKind::Line,
            history_limit: None,
        }
    }
}

/// What the current gesture is doing.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Action {
    #[default]
    None,
    Drawing,
    Moving,
    Resizing,
}

/// Where the pointer holds an element being moved.
#[derive(Debug, Clone, PartialEq)]
enum MoveAnchor {
    /// Pointer minus the element's start point.
    Offset(Vec2),
    /// Pointer minus each point of a freehand stroke.
    PerPoint(Vec<Vec2>),
}

/// State of an in-progress gesture, dropped at pointer-up.
#[derive(Debug, Clone, PartialEq)]
enum Gesture {
    Drawing { id: ElementId },
    Moving { original: Element, anchor: MoveAnchor },
    Resizing { original: Element, region: Region },
}

impl Gesture {
    fn action(&self) -> Action {
        match self {
            Gesture::Drawing { .. } => Action::Drawing,
            Gesture::Moving { .. } => Action::Moving,
            Gesture::Resizing { .. } => Action::Resizing,
        }
    }

    fn element_id(&self) -> ElementId {
        match self {
            Gesture::Drawing { id } => *id,
            Gesture::Moving { original, .. } | Gesture::Resizing { original, .. } => original.id(),
        }
    }
}

/// The scene editing engine.
///
/// Hosts feed pointer events, tool changes and undo/redo into the board and
/// pull [`Board::scene`] to render after each call. Every gesture starts with
/// one history commit and updates that entry in place until pointer-up, so a
/// whole draw, move or resize is a single undo step.
#[derive(Debug, Clone)]
pub struct Board {
    history: History<Scene>,
    tool: ToolKind,
    gesture: Option<Gesture>,
    cursor: CursorKind,
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

impl Board {
    /// Create a board with an empty scene and default settings.
    pub fn new() -> Self {
        Self::with_config(&BoardConfig::default())
    }

    pub fn with_config(config: &BoardConfig) -> Self {
        let history = match config.history_limit {
            Some(limit) => History::with_limit(Scene::new(), limit),
            None => History::new(Scene::new()),
        };
        Self {
            history,
            tool: config.initial_tool,
            gesture: None,
            cursor: CursorKind::Default,
        }
    }

    /// The current scene.
    pub fn scene(&self) -> &Scene {
        self.history.current()
    }

    pub fn history(&self) -> &History<Scene> {
        &self.history
    }

    pub fn tool(&self) -> ToolKind {
        self.tool
    }

    pub fn action(&self) -> Action {
        self.gesture.as_ref().map_or(Action::None, Gesture::action)
    }

    /// Id of the element the current gesture acts on.
    pub fn active_element(&self) -> Option<ElementId> {
        self.gesture.as_ref().map(Gesture::element_id)
    }

    /// Hover cursor for the selection tool.
    pub fn cursor(&self) -> CursorKind {
        self.cursor
    }

    /// Set the current tool.
    pub fn select_tool(&mut self, tool: ToolKind) {
        log::debug!("tool: {} -> {}", self.tool, tool);
        self.tool = tool;
        self.cursor = CursorKind::Default;
    }

    /// Set the current tool by name, rejecting names outside the tool set.
    pub fn select_tool_named(&mut self, name: &str) -> BoardResult<()> {
        let tool = name.parse()?;
        self.select_tool(tool);
        Ok(())
    }

    /// Undo the last gesture. Ignored while a gesture is in progress.
    pub fn undo(&mut self) -> bool {
        if self.gesture.is_some() {
            log::warn!("undo ignored during {:?}", self.action());
            return false;
        }
        self.history.undo()
    }

    /// Redo the last undone gesture. Ignored while a gesture is in progress.
    pub fn redo(&mut self) -> bool {
        if self.gesture.is_some() {
            log::warn!("redo ignored during {:?}", self.action());
            return false;
        }
        self.history.redo()
    }

    pub fn pointer_down(&mut self, point: Point) {
        if self.gesture.is_some() {
            log::warn!("pointer down during {:?}; finishing it first", self.action());
            self.pointer_up();
        }

        match self.tool.element_kind() {
            Ok(kind) => self.begin_drawing(point, kind),
            Err(_) => self.begin_selection(point),
        }
    }

    fn begin_drawing(&mut self, point: Point, kind: ElementKind) {
        let id = self.scene().next_id();
        let element = create_element(id, point, point, kind);
        self.history.append_with(|scene| scene.with_appended(element));
        self.gesture = Some(Gesture::Drawing { id });
        log::debug!("drawing {kind} #{id} from ({}, {})", point.x, point.y);
    }

    fn begin_selection(&mut self, point: Point) {
        let Some(hit) = element_at(point, self.scene()) else {
            return;
        };

        // Snapshot the untouched scene so the drag below is its own undo step.
        self.history.append_with(Scene::clone);

        log::debug!("grabbed #{} at {:?}", hit.element.id(), hit.region);
        self.gesture = Some(if hit.region.is_handle() {
            Gesture::Resizing {
                original: hit.element,
                region: hit.region,
            }
        } else {
            let anchor = anchor_for(&hit.element, point);
            Gesture::Moving {
                original: hit.element,
                anchor,
            }
        });
    }

    pub fn pointer_move(&mut self, point: Point) {
        log::trace!("pointer move ({}, {})", point.x, point.y);

        let updated = match &self.gesture {
            None => {
                if self.tool == ToolKind::Select {
                    self.cursor = element_at(point, self.scene())
                        .map_or(CursorKind::Default, |hit| cursor_for(hit.region));
                }
                return;
            }
            Some(Gesture::Drawing { id }) => {
                self.scene().get(*id).map(|current| extend(current, point))
            }
            Some(Gesture::Moving { original, anchor }) => moved(original, anchor, point),
            Some(Gesture::Resizing { original, region }) => resized(original, *region, point),
        };

        match updated {
            Some(element) => self.replace(element),
            None => log::warn!("{:?} frame ignored: no applicable element", self.action()),
        }
    }

    pub fn pointer_up(&mut self) {
        let Some(gesture) = self.gesture.take() else {
            return;
        };

        if matches!(gesture, Gesture::Drawing { .. } | Gesture::Resizing { .. }) {
            let id = gesture.element_id();
            let normalized = self
                .scene()
                .get(id)
                .filter(|element| element.is_normalizable())
                .map(Element::normalized);
            if let Some(element) = normalized {
                self.replace(element);
            }
        }
        self.history.trim_to_limit();
        log::debug!("{:?} of #{} finished", gesture.action(), gesture.element_id());
    }

    /// Abandon the current gesture, restoring the scene and the history from
    /// before it began.
    ///
    /// Returns false if no gesture was in progress.
    pub fn cancel(&mut self) -> bool {
        let Some(gesture) = self.gesture.take() else {
            return false;
        };
        self.history.discard_current();
        log::debug!("{:?} of #{} cancelled", gesture.action(), gesture.element_id());
        true
    }

    /// Overwrite the current history entry with `element` swapped in.
    fn replace(&mut self, element: Element) {
        match self.scene().with_replaced(element) {
            Some(scene) => self.history.overwrite(scene),
            None => log::warn!("element missing from scene; update dropped"),
        }
    }
}

/// Where the pointer holds `element` for a move.
fn anchor_for(element: &Element, point: Point) -> MoveAnchor {
    match element {
        Element::Freehand(stroke) => {
            MoveAnchor::PerPoint(stroke.points.iter().map(|p| point - *p).collect())
        }
        Element::Line(line) => MoveAnchor::Offset(point - line.start),
        Element::Rectangle(rect) => MoveAnchor::Offset(point - rect.start),
    }
}

/// Grow an element being drawn towards `point`.
fn extend(current: &Element, point: Point) -> Element {
    match current {
        Element::Line(line) => Element::Line(Line::new(line.id, line.start, point)),
        Element::Rectangle(rect) => Element::Rectangle(Rectangle::new(rect.id, rect.start, point)),
        Element::Freehand(stroke) => {
            let mut stroke = stroke.clone();
            stroke.add_point(point);
            Element::Freehand(stroke)
        }
    }
}

/// Rigidly translate `original` so its anchor follows `point`.
fn moved(original: &Element, anchor: &MoveAnchor, point: Point) -> Option<Element> {
    match (original, anchor) {
        (Element::Freehand(stroke), MoveAnchor::PerPoint(offsets))
            if offsets.len() == stroke.len() =>
        {
            let points = offsets.iter().map(|offset| point - *offset).collect();
            Some(Element::Freehand(Freehand::from_points(stroke.id, points)))
        }
        (Element::Line(line), MoveAnchor::Offset(offset)) => {
            let start = point - *offset;
            let end = start + (line.end - line.start);
            Some(Element::Line(Line::new(line.id, start, end)))
        }
        (Element::Rectangle(rect), MoveAnchor::Offset(offset)) => {
            let start = point - *offset;
            let end = start + (rect.end - rect.start);
            Some(Element::Rectangle(Rectangle::new(rect.id, start, end)))
        }
        _ => None,
    }
}

/// Move the grabbed corner or endpoint of `original` to `point`, holding the
/// opposite one fixed.
fn resized(original: &Element, region: Region, point: Point) -> Option<Element> {
    match original {
        Element::Rectangle(rect) => {
            let (start, end) = (rect.start, rect.end);
            let (start, end) = match region {
                Region::TopLeft => (point, end),
                Region::TopRight => (Point::new(start.x, point.y), Point::new(point.x, end.y)),
                Region::BottomLeft => (Point::new(point.x, start.y), Point::new(end.x, point.y)),
                Region::BottomRight => (start, point),
                _ => return None,
            };
            Some(Element::Rectangle(Rectangle::new(rect.id, start, end)))
        }
        Element::Line(line) => match region {
            Region::Start => Some(Element::Line(Line::new(line.id, point, line.end))),
            Region::End => Some(Element::Line(Line::new(line.id, line.start, point))),
            _ => None,
        },
        Element::Freehand(_) => None,
    }
}
