//! Sketchboard Application
//!
//! A headless host for the board: feeds recorded pointer, tool and keyboard
//! events into the engine and renders the resulting scene.

mod app;
mod cli;
mod error;
mod script;
mod shortcuts;

pub use app::{App, AppConfig, SerializableColor};
pub use cli::CliArgs;
pub use error::{AppError, AppResult};
pub use script::{ScriptEvent, load_script, parse_script};
pub use shortcuts::{Command, Shortcut, ShortcutRegistry};
