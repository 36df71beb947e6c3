use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::core::primitives::{decimal_to_f64, parse_iso_date};
use crate::error::{ChartError, ChartResult};

/// Canvas size in output coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    #[must_use]
    pub fn is_valid(self) -> bool {
        self.width.is_finite() && self.height.is_finite() && self.width > 0.0 && self.height > 0.0
    }

    pub fn validate(self) -> ChartResult<()> {
        if self.is_valid() {
            Ok(())
        } else {
            Err(ChartError::InvalidViewport {
                width: self.width,
                height: self.height,
            })
        }
    }
}

/// Space reserved around the plot for axis and category labels.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Margins {
    pub top: f64,
    pub right: f64,
    pub bottom: f64,
    pub left: f64,
}

impl Margins {
    #[must_use]
    pub const fn new(top: f64, right: f64, bottom: f64, left: f64) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }
}

impl Default for Margins {
    fn default() -> Self {
        Self::new(10.0, 10.0, 30.0, 40.0)
    }
}

/// Rectangle that bars, lines and gridlines are laid out inside.
///
/// `y` is the top edge; the baseline sits at `y + height`.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PlotArea {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl PlotArea {
    #[must_use]
    pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Insets a viewport by `margins`, clamping to a zero-sized area when the
    /// margins eat the whole canvas.
    #[must_use]
    pub fn inset(viewport: Viewport, margins: Margins) -> Self {
        Self {
            x: margins.left,
            y: margins.top,
            width: (viewport.width - margins.left - margins.right).max(0.0),
            height: (viewport.height - margins.top - margins.bottom).max(0.0),
        }
    }

    #[must_use]
    pub fn right(self) -> f64 {
        self.x + self.width
    }

    #[must_use]
    pub fn baseline(self) -> f64 {
        self.y + self.height
    }

    #[must_use]
    pub fn center_x(self) -> f64 {
        self.x + self.width * 0.5
    }

    pub fn validate(self) -> ChartResult<()> {
        let finite = [self.x, self.y, self.width, self.height]
            .iter()
            .all(|v| v.is_finite());
        if !finite || self.width < 0.0 || self.height < 0.0 {
            return Err(ChartError::InvalidData(
                "plot area must be finite with non-negative size".to_owned(),
            ));
        }
        Ok(())
    }
}

/// One labeled observation of a chart series.
///
/// Series order is significant: it is the category order for bar and line
/// charts and the clockwise segment order for donut charts.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataPoint {
    pub label: String,
    pub value: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
    /// Caller-supplied share. Donut layout always recomputes shares from `value`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub percentage: Option<f64>,
}

impl DataPoint {
    #[must_use]
    pub fn new(label: impl Into<String>, value: f64) -> Self {
        Self {
            label: label.into(),
            value,
            date: None,
            percentage: None,
        }
    }

    /// Builds a point from a monetary amount such as invoice or rent totals.
    pub fn from_decimal(label: impl Into<String>, amount: Decimal) -> ChartResult<Self> {
        Ok(Self::new(label, decimal_to_f64(amount, "value")?))
    }

    /// Builds a dated point labeled like `Mar 05`.
    #[must_use]
    pub fn from_date(date: NaiveDate, value: f64) -> Self {
        Self::new(date.format("%b %d").to_string(), value).with_date(date)
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date.format("%Y-%m-%d").to_string());
        self
    }

    #[must_use]
    pub fn with_percentage(mut self, percentage: f64) -> Self {
        self.percentage = Some(percentage);
        self
    }

    /// Parses `date` when it holds an ISO `YYYY-MM-DD` string.
    #[must_use]
    pub fn parsed_date(&self) -> Option<NaiveDate> {
        self.date.as_deref().and_then(parse_iso_date)
    }
}

pub(crate) fn ensure_finite_values(series: &[DataPoint]) -> ChartResult<()> {
    match series.iter().find(|point| !point.value.is_finite()) {
        Some(point) => Err(ChartError::InvalidData(format!(
            "value for `{}` must be finite",
            point.label
        ))),
        None => Ok(()),
    }
}
