use tracing::trace;

use crate::core::DataPoint;
use crate::error::ChartResult;
use crate::render::Renderer;

use super::{ChartKind, ChartOutput};

/// Binds one chart kind to a drawing surface.
///
/// Holds no series data: every `render` call lays the chart out from scratch
/// and hands the resulting frame to the renderer.
pub struct ChartEngine<R: Renderer> {
    renderer: R,
    kind: ChartKind,
}

impl<R: Renderer> ChartEngine<R> {
    pub fn new(renderer: R, kind: impl Into<ChartKind>) -> ChartResult<Self> {
        let kind = kind.into();
        kind.validate()?;
        Ok(Self { renderer, kind })
    }

    #[must_use]
    pub fn kind(&self) -> &ChartKind {
        &self.kind
    }

    pub fn set_kind(&mut self, kind: impl Into<ChartKind>) -> ChartResult<()> {
        let kind = kind.into();
        kind.validate()?;
        self.kind = kind;
        Ok(())
    }

    /// Builds geometry for `series` and draws it.
    ///
    /// Returns the geometry so hosts can read legends and hit targets.
    pub fn render(&mut self, series: &[DataPoint]) -> ChartResult<ChartOutput> {
        let output = self.kind.build(series)?;
        let frame = output.to_render_frame();
        trace!(
            kind = self.kind.name(),
            rects = frame.rects.len(),
            paths = frame.paths.len(),
            texts = frame.texts.len(),
            "render frame"
        );
        self.renderer.render(&frame)?;
        Ok(output)
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }
}
