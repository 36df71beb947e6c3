use crate::error::ChartResult;
use crate::render::{RenderFrame, Renderer};

/// No-op renderer used by tests and headless hosts.
///
/// It still validates frame content so tests catch invalid geometry before a
/// real drawing surface sees it.
#[derive(Debug, Default)]
pub struct NullRenderer {
    pub frames_rendered: usize,
    pub last_rect_count: usize,
    pub last_path_count: usize,
    pub last_text_count: usize,
}

impl Renderer for NullRenderer {
    fn render(&mut self, frame: &RenderFrame) -> ChartResult<()> {
        frame.validate()?;
        self.frames_rendered += 1;
        self.last_rect_count = frame.rects.len();
        self.last_path_count = frame.paths.len();
        self.last_text_count = frame.texts.len();
        Ok(())
    }
}
