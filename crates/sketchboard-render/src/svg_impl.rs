//! SVG renderer implementation.

use crate::renderer::{
    DrawCommand, RenderContext, RenderResult, Renderer, RendererError, draw_list,
};
use peniko::Color;
use std::fmt::Write as _;

/// Renders frames to an SVG document.
#[derive(Debug, Default)]
pub struct SvgRenderer {
    output: String,
}

impl SvgRenderer {
    /// Create a new SVG renderer.
    pub fn new() -> Self {
        Self::default()
    }

    /// The document produced by the last [`Renderer::build_scene`] call.
    pub fn svg(&self) -> &str {
        &self.output
    }

    pub fn into_svg(self) -> String {
        self.output
    }

    fn write_command(&mut self, command: &DrawCommand) -> RenderResult<()> {
        let fill = command.fill.map_or_else(|| "none".to_string(), hex);
        writeln!(
            self.output,
            r#"  <path d="{}" fill="{}" stroke="{}" stroke-width="{}" stroke-linecap="round" stroke-linejoin="round"{}/>"#,
            command.path.to_svg(),
            fill,
            hex(command.stroke),
            command.stroke_width,
            opacity_attr(command.stroke),
        )?;
        Ok(())
    }
}

impl Renderer for SvgRenderer {
    fn build_scene(&mut self, ctx: &RenderContext) -> RenderResult<()> {
        if !ctx.stroke_width.is_finite() || ctx.stroke_width <= 0.0 {
            return Err(RendererError::RenderFailed(format!(
                "invalid stroke width {}",
                ctx.stroke_width
            )));
        }
        self.output.clear();
        let size = ctx.viewport_size;
        let background = hex(self.background_color(ctx));
        writeln!(
            self.output,
            r#"<svg xmlns="http://www.w3.org/2000/svg" width="{w}" height="{h}" viewBox="0 0 {w} {h}">"#,
            w = size.width,
            h = size.height,
        )?;
        if let Some(title) = ctx.title {
            writeln!(self.output, "  <title>{}</title>", escape(title))?;
        }

        writeln!(
            self.output,
            r#"  <rect width="100%" height="100%" fill="{background}"/>"#
        )?;

        let commands = draw_list(ctx);
        log::debug!("svg frame: {} commands", commands.len());
        for command in &commands {
            self.write_command(command)?;
        }

        self.output.push_str("</svg>\n");
        Ok(())
    }
}

/// Escape text for use in XML character data.
fn escape(text: &str) -> String {
    text.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}

/// Format a color as `#rrggbb`.
fn hex(color: Color) -> String {
    let rgba = color.to_rgba8();
    format!("#{:02x}{:02x}{:02x}", rgba.r, rgba.g, rgba.b)
}

fn opacity_attr(color: Color) -> String {
    let alpha = color.to_rgba8().a;
    if alpha == u8::MAX {
        String::new()
    } else {
        format!(r#" stroke-opacity="{:.3}""#, f64::from(alpha) / 255.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kurbo::{Point, Size};
    use sketchboard_core::{ElementKind, Scene, create_element};

    #[test]
    fn test_empty_scene() {
        let scene = Scene::new();
        let ctx = RenderContext::new(&scene, Size::new(640.0, 480.0));
        let mut renderer = SvgRenderer::new();
        renderer.build_scene(&ctx).unwrap();

        let svg = renderer.svg();
        assert!(svg.starts_with("<svg"));
        assert!(svg.contains(r#"width="640""#));
        assert!(svg.contains("#ffffff"));
        assert!(!svg.contains("<path"));
        assert!(svg.trim_end().ends_with("</svg>"));
    }

    #[test]
    fn test_elements_become_paths() {
        let scene = Scene::from_elements(vec![
            create_element(0, Point::new(1.0, 2.0), Point::new(30.0, 40.0), ElementKind::Line),
            create_element(1, Point::new(5.0, 5.0), Point::new(5.0, 5.0), ElementKind::Freehand),
        ]);
        let ctx = RenderContext::new(&scene, Size::new(100.0, 100.0))
            .with_stroke(Color::from_rgba8(0x11, 0x22, 0x33, 128), 3.0);
        let mut renderer = SvgRenderer::new();
        renderer.build_scene(&ctx).unwrap();

        let line_path = scene.elements()[0].to_path().to_svg();
        let svg = renderer.into_svg();
        assert_eq!(svg.matches("<path").count(), 2);
        assert!(svg.contains(&format!(r#"d="{line_path}""#)));
        assert!(svg.contains(r##"stroke="#112233""##));
        assert!(svg.contains(r##"fill="#112233""##));
        assert!(svg.contains("stroke-opacity="));
    }

    #[test]
    fn test_title_is_escaped() {
        let scene = Scene::new();
        let ctx = RenderContext::new(&scene, Size::new(10.0, 10.0)).with_title("A & <B>");
        let mut renderer = SvgRenderer::new();
        renderer.build_scene(&ctx).unwrap();
        assert!(renderer.svg().contains("<title>A &amp; &lt;B&gt;</title>"));
    }

    #[test]
    fn test_invalid_stroke_width_fails() {
        let scene = Scene::new();
        let mut renderer = SvgRenderer::new();
        for width in [0.0, -2.0, f64::NAN] {
            let ctx = RenderContext::new(&scene, Size::new(10.0, 10.0))
                .with_stroke(Color::from_rgba8(0, 0, 0, 255), width);
            assert!(matches!(
                renderer.build_scene(&ctx),
                Err(RendererError::RenderFailed(_))
            ));
        }
    }

    #[test]
    fn test_rebuild_replaces_previous_frame() {
        let mut renderer = SvgRenderer::new();
        let first = Scene::from_elements(vec![create_element(
            0,
            Point::ZERO,
            Point::new(10.0, 10.0),
            ElementKind::Rectangle,
        )]);
        renderer
            .build_scene(&RenderContext::new(&first, Size::new(50.0, 50.0)))
            .unwrap();
        renderer
            .build_scene(&RenderContext::new(&Scene::new(), Size::new(50.0, 50.0)))
            .unwrap();
        assert_eq!(renderer.svg().matches("<svg").count(), 1);
        assert!(!renderer.svg().contains("<path"));
    }
}
