//! Contract violation errors raised by the engine.

use crate::tools::ToolKind;
use thiserror::Error;

/// Errors signalled when the host hands the engine something outside its
/// closed sets of tools and element kinds.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardError {
    #[error("Unrecognized tool: {0}")]
    UnknownTool(String),
    #[error("Unrecognized element kind: {0}")]
    UnknownElementKind(String),
    #[error("Tool {0:?} does not create elements")]
    NotADrawingTool(ToolKind),
}

/// Result type for board operations.
pub type BoardResult<T> = Result<T, BoardError>;
