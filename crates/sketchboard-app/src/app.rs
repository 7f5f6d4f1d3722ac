//! Headless host driving a board from recorded events.

use crate::error::AppResult;
use crate::script::ScriptEvent;
use crate::shortcuts::{Command, ShortcutRegistry};
use kurbo::{Point, Size};
use peniko::Color;
use serde::{Deserialize, Serialize};
use sketchboard_core::{Board, BoardConfig};
use sketchboard_render::{RenderContext, Renderer, SvgRenderer};
use std::path::Path;

/// Serializable color representation (RGBA8).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SerializableColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl SerializableColor {
    pub fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn black() -> Self {
        Self::new(0, 0, 0, 255)
    }
}

impl From<SerializableColor> for Color {
    fn from(color: SerializableColor) -> Self {
        Color::from_rgba8(color.r, color.g, color.b, color.a)
    }
}

/// Host configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    /// Viewport width in pixels.
    pub width: u32,
    /// Viewport height in pixels.
    pub height: u32,
    pub background_color: SerializableColor,
    pub stroke_color: SerializableColor,
    pub stroke_width: f64,
    pub board: BoardConfig,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "Sketchboard".to_string(),
            width: 1280,
            height: 800,
            background_color: SerializableColor::new(250, 250, 250, 255),
            stroke_color: SerializableColor::black(),
            stroke_width: 2.0,
            board: BoardConfig::default(),
        }
    }
}

impl AppConfig {
    /// Load a config file; missing fields take their defaults.
    pub fn load(path: &Path) -> AppResult<Self> {
        let json = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&json)?;
        log::info!("Loaded config from: {:?}", path);
        Ok(config)
    }

    pub fn viewport_size(&self) -> Size {
        Size::new(f64::from(self.width), f64::from(self.height))
    }
}

/// Main application struct.
pub struct App {
    config: AppConfig,
    board: Board,
    renderer: SvgRenderer,
}

impl App {
    pub fn new(config: AppConfig) -> Self {
        let board = Board::with_config(&config.board);
        Self {
            config,
            board,
            renderer: SvgRenderer::new(),
        }
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    /// Apply one host event to the board.
    pub fn handle_event(&mut self, event: &ScriptEvent) -> AppResult<()> {
        match event {
            ScriptEvent::Down { x, y } => self.board.pointer_down(Point::new(*x, *y)),
            ScriptEvent::Move { x, y } => self.board.pointer_move(Point::new(*x, *y)),
            ScriptEvent::Up => self.board.pointer_up(),
            ScriptEvent::Tool { name } => self.board.select_tool_named(name)?,
            ScriptEvent::Key {
                key,
                ctrl,
                shift,
                meta,
            } => self.handle_key(key, *ctrl || *meta, *shift),
        }
        Ok(())
    }

    fn handle_key(&mut self, key: &str, ctrl: bool, shift: bool) {
        let Some(command) = ShortcutRegistry::command_for(key, ctrl, shift) else {
            log::debug!("No shortcut for key {key:?}");
            return;
        };
        match command {
            Command::Undo => {
                self.board.undo();
            }
            Command::Redo => {
                self.board.redo();
            }
            Command::Cancel => {
                self.board.cancel();
            }
            Command::Tool(tool) => self.board.select_tool(tool),
        }
    }

    /// Apply every event in order, stopping at the first error.
    pub fn replay<'a>(
        &mut self,
        events: impl IntoIterator<Item = &'a ScriptEvent>,
    ) -> AppResult<()> {
        let mut count = 0usize;
        for event in events {
            self.handle_event(event)?;
            count += 1;
        }
        log::info!(
            "Replayed {} events: {} elements, history {}/{}",
            count,
            self.board.scene().len(),
            self.board.history().index() + 1,
            self.board.history().len()
        );
        Ok(())
    }

    /// Render the current scene to SVG.
    pub fn render(&mut self) -> AppResult<String> {
        let ctx = RenderContext::new(self.board.scene(), self.config.viewport_size())
            .with_title(&self.config.title)
            .with_background(self.config.background_color.into())
            .with_stroke(self.config.stroke_color.into(), self.config.stroke_width);
        self.renderer.build_scene(&ctx)?;
        Ok(self.renderer.svg().to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::AppError;
    use crate::script::parse_script;
    use sketchboard_core::{Action, BoardError, ToolKind};
    use sketchboard_render::RendererError;
    use std::io::Write;

    fn run(app: &mut App, json: &str) -> AppResult<()> {
        let events = parse_script(json)?;
        app.replay(&events)
    }

    #[test]
    fn test_replay_draw_and_undo() {
        let mut app = App::new(AppConfig::default());
        run(
            &mut app,
            r#"[
                {"type": "tool", "name": "rectangle"},
                {"type": "down", "x": 10, "y": 10},
                {"type": "move", "x": 5, "y": 5},
                {"type": "up"},
                {"type": "key", "key": "l"},
                {"type": "down", "x": 0, "y": 50},
                {"type": "move", "x": 40, "y": 50},
                {"type": "up"}
            ]"#,
        )
        .unwrap();
        assert_eq!(app.board().scene().len(), 2);
        assert_eq!(app.board().tool(), ToolKind::Line);

        run(&mut app, r#"[{"type": "key", "key": "z", "meta": true}]"#).unwrap();
        assert_eq!(app.board().scene().len(), 1);
        run(&mut app, r#"[{"type": "key", "key": "Z", "ctrl": true, "shift": true}]"#).unwrap();
        assert_eq!(app.board().scene().len(), 2);
    }

    #[test]
    fn test_escape_cancels_gesture() {
        let mut app = App::new(AppConfig::default());
        run(
            &mut app,
            r#"[
                {"type": "down", "x": 0, "y": 0},
                {"type": "move", "x": 30, "y": 30},
                {"type": "key", "key": "Escape"},
                {"type": "up"}
            ]"#,
        )
        .unwrap();
        assert!(app.board().scene().is_empty());
        assert_eq!(app.board().action(), Action::None);
    }

    #[test]
    fn test_unknown_tool_is_an_error() {
        let mut app = App::new(AppConfig::default());
        let result = run(&mut app, r#"[{"type": "tool", "name": "lasso"}]"#);
        assert!(matches!(
            result,
            Err(AppError::Board(BoardError::UnknownTool(name))) if name == "lasso"
        ));
    }

    #[test]
    fn test_render_uses_config_colors() {
        let config = AppConfig {
            width: 320,
            height: 240,
            stroke_color: SerializableColor::new(0xaa, 0xbb, 0xcc, 255),
            ..AppConfig::default()
        };
        let mut app = App::new(config);
        run(
            &mut app,
            r#"[
                {"type": "down", "x": 1, "y": 1},
                {"type": "move", "x": 9, "y": 9},
                {"type": "up"}
            ]"#,
        )
        .unwrap();

        let svg = app.render().unwrap();
        assert!(svg.contains(r#"width="320""#));
        assert!(svg.contains("#fafafa"));
        assert!(svg.contains("#aabbcc"));
        assert!(svg.contains("<title>Sketchboard</title>"));
        assert_eq!(svg.matches("<path").count(), 1);
    }

    #[test]
    fn test_render_rejects_bad_stroke_width() {
        let config = AppConfig {
            stroke_width: -1.0,
            ..AppConfig::default()
        };
        let mut app = App::new(config);
        assert!(matches!(
            app.render(),
            Err(AppError::Render(RendererError::RenderFailed(_)))
        ));
    }

    #[test]
    fn test_load_config_with_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"width": 640, "board": {{"initial_tool": "selection", "history_limit": 10}}}}"#
        )
        .unwrap();

        let config = AppConfig::load(file.path()).unwrap();
        assert_eq!(config.width, 640);
        assert_eq!(config.height, 800);
        assert_eq!(config.board.initial_tool, ToolKind::Select);
        assert_eq!(config.board.history_limit, Some(10));

        let app = App::new(config);
        assert_eq!(app.board().tool(), ToolKind::Select);
        assert_eq!(app.config().title, "Sketchboard");
    }

    #[test]
    fn test_load_config_invalid_json() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();
        assert!(matches!(AppConfig::load(file.path()), Err(AppError::Json(_))));
    }
}
