//! Sketchboard Render Library
//!
//! Renderer abstraction for Sketchboard. Scenes are turned into a flat list of
//! draw commands by a pure function; backends consume that list. The default
//! backend writes SVG.

mod renderer;

#[cfg(feature = "svg-renderer")]
mod svg_impl;

pub use renderer::{
    DOT_RADIUS_FACTOR, DrawCommand, RenderContext, RenderResult, Renderer, RendererError,
    draw_list,
};

#[cfg(feature = "svg-renderer")]
pub use svg_impl::SvgRenderer;
