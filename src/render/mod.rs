mod frame;
mod null_renderer;
mod primitives;

pub use frame::RenderFrame;
pub use null_renderer::NullRenderer;
pub use primitives::{
    CirclePrimitive, Color, DEFAULT_PALETTE, DEFAULT_SERIES_COLOR, GRID_COLOR, LABEL_COLOR,
    LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive,
};

use crate::error::ChartResult;

/// Contract implemented by the host's drawing surface.
///
/// Backends receive a fully materialized, deterministic `RenderFrame` so
/// drawing code stays isolated from chart layout logic.
pub trait Renderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()>;
}
