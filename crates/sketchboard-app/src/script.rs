//! Recorded input scripts.

use crate::error::AppResult;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// One recorded host event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum ScriptEvent {
    Down { x: f64, y: f64 },
    Move { x: f64, y: f64 },
    Up,
    /// Toolbar selection by tool name.
    Tool { name: String },
    /// Key press with modifier state.
    Key {
        key: String,
        #[serde(default)]
        ctrl: bool,
        #[serde(default)]
        shift: bool,
        /// Command key on macOS; treated like `ctrl`.
        #[serde(default)]
        meta: bool,
    },
}

/// Parse a JSON array of events.
pub fn parse_script(json: &str) -> AppResult<Vec<ScriptEvent>> {
    Ok(serde_json::from_str(json)?)
}

/// Read and parse a script file.
pub fn load_script(path: &Path) -> AppResult<Vec<ScriptEvent>> {
    let json = std::fs::read_to_string(path)?;
    parse_script(&json)
}
