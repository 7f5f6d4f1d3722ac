//! Tool set for the whiteboard.

use crate::element::ElementKind;
use crate::error::{BoardError, BoardResult};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Available tools.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum ToolKind {
    /// Pick, move and resize existing elements.
    #[serde(rename = "selection", alias = "select")]
    Select,
    #[default]
    Line,
    Rectangle,
    /// Freehand pencil.
    Pencil,
}

impl ToolKind {
    /// All tools, in toolbar order.
    pub const ALL: [ToolKind; 4] = [
        ToolKind::Select,
        ToolKind::Line,
        ToolKind::Rectangle,
        ToolKind::Pencil,
    ];

    /// Name used by hosts and scripts.
    pub fn name(self) -> &'static str {
        match self {
            ToolKind::Select => "selection",
            ToolKind::Line => "line",
            ToolKind::Rectangle => "rectangle",
            ToolKind::Pencil => "pencil",
        }
    }

    /// The kind of element this tool draws.
    pub fn element_kind(self) -> BoardResult<ElementKind> {
        match self {
            ToolKind::Line => Ok(ElementKind::Line),
            ToolKind::Rectangle => Ok(ElementKind::Rectangle),
            ToolKind::Pencil => Ok(ElementKind::Freehand),
            ToolKind::Select => Err(BoardError::NotADrawingTool(self)),
        }
    }

    /// Check if this tool creates new elements on pointer-down.
    pub fn is_drawing_tool(self) -> bool {
        !matches!(self, ToolKind::Select)
    }
}

impl fmt::Display for ToolKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ToolKind {
    type Err = BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "selection" | "select" => Ok(ToolKind::Select),
            "line" => Ok(ToolKind::Line),
            "rectangle" => Ok(ToolKind::Rectangle),
            "pencil" | "freehand" => Ok(ToolKind::Pencil),
            other => Err(BoardError::UnknownTool(other.to_string())),
        }
    }
}
