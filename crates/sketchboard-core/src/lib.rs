//! Sketchboard Core Library
//!
//! Platform-agnostic scene editing engine: element model, hit testing,
//! snapshot history and the pointer interaction state machine.

pub mod board;
pub mod element;
pub mod error;
pub mod geometry;
pub mod hit;
pub mod history;
pub mod scene;
pub mod tools;

pub use board::{Action, Board, BoardConfig};
pub use element::{
    Element, ElementId, ElementKind, Freehand, Line, Rectangle, create_element, normalize,
};
pub use error::{BoardError, BoardResult};
pub use hit::{CursorKind, Hit, Region, cursor_for, element_at, position_within};
pub use history::History;
pub use scene::Scene;
pub use tools::ToolKind;
