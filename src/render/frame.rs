use serde::{Deserialize, Serialize};

use crate::core::Viewport;
use crate::error::ChartResult;
use crate::render::{CirclePrimitive, LinePrimitive, PathPrimitive, RectPrimitive, TextPrimitive};

/// Backend-agnostic scene for one chart draw pass.
///
/// Primitive lists are drawn in declaration order: gridlines first, then
/// rects and paths, circles, and texts on top.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderFrame {
    pub viewport: Viewport,
    pub lines: Vec<LinePrimitive>,
    pub rects: Vec<RectPrimitive>,
    pub paths: Vec<PathPrimitive>,
    pub circles: Vec<CirclePrimitive>,
    pub texts: Vec<TextPrimitive>,
}

impl RenderFrame {
    #[must_use]
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            lines: Vec::new(),
            rects: Vec::new(),
            paths: Vec::new(),
            circles: Vec::new(),
            texts: Vec::new(),
        }
    }

    #[must_use]
    pub fn with_line(mut self, line: LinePrimitive) -> Self {
        self.lines.push(line);
        self
    }

    #[must_use]
    pub fn with_rect(mut self, rect: RectPrimitive) -> Self {
        self.rects.push(rect);
        self
    }

    #[must_use]
    pub fn with_path(mut self, path: PathPrimitive) -> Self {
        self.paths.push(path);
        self
    }

    #[must_use]
    pub fn with_circle(mut self, circle: CirclePrimitive) -> Self {
        self.circles.push(circle);
        self
    }

    /// Adds a label, skipping empty text so blank categories never reach a backend.
    #[must_use]
    pub fn with_text(mut self, text: TextPrimitive) -> Self {
        if !text.label.text.is_empty() {
            self.texts.push(text);
        }
        self
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport.validate()?;

        for line in &self.lines {
            line.validate()?;
        }
        for rect in &self.rects {
            rect.validate()?;
        }
        for path in &self.paths {
            path.validate()?;
        }
        for circle in &self.circles {
            circle.validate()?;
        }
        for text in &self.texts {
            text.validate()?;
        }

        Ok(())
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
            && self.rects.is_empty()
            && self.paths.is_empty()
            && self.circles.is_empty()
            && self.texts.is_empty()
    }
}
