//! Renderer trait abstraction.

use kurbo::{BezPath, Circle, Shape as KurboShape, Size};
use peniko::Color;
use sketchboard_core::{Element, ElementId, Scene};
use thiserror::Error;

/// Renderer errors.
#[derive(Debug, Error)]
pub enum RendererError {
    #[error("Render failed: {0}")]
    RenderFailed(String),
    #[error("Output error: {0}")]
    Output(#[from] std::fmt::Error),
}

/// Result type for renderer operations.
pub type RenderResult<T> = Result<T, RendererError>;

/// Radius of the dot drawn for a one-point stroke, relative to stroke width.
pub const DOT_RADIUS_FACTOR: f64 = 0.5;

/// Context for a single render frame.
pub struct RenderContext<'a> {
    /// The scene to render.
    pub scene: &'a Scene,
    /// Viewport size in pixels.
    pub viewport_size: Size,
    /// Document title, if any.
    pub title: Option<&'a str>,
    /// Background color.
    pub background_color: Color,
    /// Stroke color for every element.
    pub stroke_color: Color,
    /// Stroke width for every element.
    pub stroke_width: f64,
}

impl<'a> RenderContext<'a> {
    /// Create a new render context.
    pub fn new(scene: &'a Scene, viewport_size: Size) -> Self {
        Self {
            scene,
            viewport_size,
            title: None,
            background_color: Color::from_rgba8(255, 255, 255, 255),
            stroke_color: Color::from_rgba8(0, 0, 0, 255),
            stroke_width: 2.0,
        }
    }

    /// Set the document title.
    pub fn with_title(mut self, title: &'a str) -> Self {
        self.title = Some(title);
        self
    }

    /// Set the background color.
    pub fn with_background(mut self, color: Color) -> Self {
        self.background_color = color;
        self
    }

    /// Set the stroke color and width.
    pub fn with_stroke(mut self, color: Color, width: f64) -> Self {
        self.stroke_color = color;
        self.stroke_width = width;
        self
    }
}

/// One drawable item, in paint order.
#[derive(Debug, Clone)]
pub struct DrawCommand {
    /// Element this command draws.
    pub element: ElementId,
    pub path: BezPath,
    pub stroke: Color,
    pub stroke_width: f64,
    /// Fill color (None = outline only).
    pub fill: Option<Color>,
}

/// Build the draw commands for a frame.
///
/// One command per element, in scene order, so later elements paint over
/// earlier ones. A stroke with a single point becomes a filled dot; empty
/// strokes are skipped.
pub fn draw_list(ctx: &RenderContext) -> Vec<DrawCommand> {
    ctx.scene
        .iter()
        .filter_map(|element| {
            let outline = DrawCommand {
                element: element.id(),
                path: element.to_path(),
                stroke: ctx.stroke_color,
                stroke_width: ctx.stroke_width,
                fill: None,
            };
            match element {
                Element::Freehand(stroke) if stroke.is_empty() => None,
                Element::Freehand(stroke) if stroke.len() == 1 => {
                    let dot = Circle::new(stroke.points[0], ctx.stroke_width * DOT_RADIUS_FACTOR);
                    Some(DrawCommand {
                        path: dot.to_path(0.1),
                        fill: Some(ctx.stroke_color),
                        ..outline
                    })
                }
                _ => Some(outline),
            }
        })
        .collect()
}

/// Trait for rendering backends.
pub trait Renderer {
    /// Build the output for a frame from the context's scene.
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()>;

    /// Get the background color (for clearing).
    fn background_color(&self, ctx: &RenderContext) -> Color {
        ctx.background_color
    }
}
