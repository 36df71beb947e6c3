use serde::{Deserialize, Serialize};

use crate::core::{
    BarOrientation, DEFAULT_BAR_GAP_RATIO, DEFAULT_INNER_RADIUS_RATIO,
    DEFAULT_MAX_VISIBLE_LABELS, DEFAULT_TICK_COUNT, Margins, PlotArea, ValueFormatter, Viewport,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{Color, DEFAULT_PALETTE, DEFAULT_SERIES_COLOR};

const DEFAULT_CHART_WIDTH: f64 = 600.0;
const DEFAULT_CHART_HEIGHT: f64 = 300.0;
const DEFAULT_DONUT_SIZE: f64 = 200.0;
const DEFAULT_LINE_COLOR: Color = DEFAULT_PALETTE[1];

/// Bar chart options.
///
/// Serializable so dashboards can persist chart setup; `format_value` is a
/// runtime-only hook and is skipped.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct BarChartConfig {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub color: Color,
    pub show_grid: bool,
    pub show_values: bool,
    pub horizontal: bool,
    pub bar_gap_ratio: f64,
    pub tick_count: usize,
    pub max_visible_labels: usize,
    #[serde(skip)]
    pub format_value: Option<ValueFormatter>,
}

impl Default for BarChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            margins: Margins::default(),
            color: DEFAULT_SERIES_COLOR,
            show_grid: true,
            show_values: false,
            horizontal: false,
            bar_gap_ratio: DEFAULT_BAR_GAP_RATIO,
            tick_count: DEFAULT_TICK_COUNT,
            max_visible_labels: DEFAULT_MAX_VISIBLE_LABELS,
            format_value: None,
        }
    }
}

impl BarChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    #[must_use]
    pub fn with_values(mut self, show_values: bool) -> Self {
        self.show_values = show_values;
        self
    }

    #[must_use]
    pub fn with_horizontal(mut self, horizontal: bool) -> Self {
        self.horizontal = horizontal;
        self
    }

    #[must_use]
    pub fn with_bar_gap_ratio(mut self, bar_gap_ratio: f64) -> Self {
        self.bar_gap_ratio = bar_gap_ratio;
        self
    }

    #[must_use]
    pub fn with_max_visible_labels(mut self, max_visible_labels: usize) -> Self {
        self.max_visible_labels = max_visible_labels;
        self
    }

    #[must_use]
    pub fn with_format_value(mut self, formatter: ValueFormatter) -> Self {
        self.format_value = Some(formatter);
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea::inset(self.viewport(), self.margins)
    }

    #[must_use]
    pub fn orientation(&self) -> BarOrientation {
        if self.horizontal {
            BarOrientation::Horizontal
        } else {
            BarOrientation::Vertical
        }
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport().validate()?;
        self.color.validate()?;
        if !self.bar_gap_ratio.is_finite() || !(0.0..1.0).contains(&self.bar_gap_ratio) {
            return Err(ChartError::InvalidConfig(
                "bar gap ratio must be finite and in [0, 1)".to_owned(),
            ));
        }
        Ok(())
    }
}

/// Line chart options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LineChartConfig {
    pub width: f64,
    pub height: f64,
    pub margins: Margins,
    pub color: Color,
    pub show_grid: bool,
    pub show_points: bool,
    pub fill_area: bool,
    pub stroke_width: f64,
    pub point_radius: f64,
    pub hit_radius: f64,
    pub tick_count: usize,
    pub max_visible_labels: usize,
    #[serde(skip)]
    pub format_value: Option<ValueFormatter>,
}

impl Default for LineChartConfig {
    fn default() -> Self {
        Self {
            width: DEFAULT_CHART_WIDTH,
            height: DEFAULT_CHART_HEIGHT,
            margins: Margins::default(),
            color: DEFAULT_LINE_COLOR,
            show_grid: true,
            show_points: true,
            fill_area: true,
            stroke_width: 2.0,
            point_radius: 4.0,
            hit_radius: 10.0,
            tick_count: DEFAULT_TICK_COUNT,
            max_visible_labels: DEFAULT_MAX_VISIBLE_LABELS,
            format_value: None,
        }
    }
}

impl LineChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size(mut self, width: f64, height: f64) -> Self {
        self.width = width;
        self.height = height;
        self
    }

    #[must_use]
    pub fn with_margins(mut self, margins: Margins) -> Self {
        self.margins = margins;
        self
    }

    #[must_use]
    pub fn with_color(mut self, color: Color) -> Self {
        self.color = color;
        self
    }

    #[must_use]
    pub fn with_grid(mut self, show_grid: bool) -> Self {
        self.show_grid = show_grid;
        self
    }

    #[must_use]
    pub fn with_points(mut self, show_points: bool) -> Self {
        self.show_points = show_points;
        self
    }

    #[must_use]
    pub fn with_fill_area(mut self, fill_area: bool) -> Self {
        self.fill_area = fill_area;
        self
    }

    #[must_use]
    pub fn with_format_value(mut self, formatter: ValueFormatter) -> Self {
        self.format_value = Some(formatter);
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.width, self.height)
    }

    #[must_use]
    pub fn plot_area(&self) -> PlotArea {
        PlotArea::inset(self.viewport(), self.margins)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport().validate()?;
        self.color.validate()?;
        for (name, value) in [
            ("stroke width", self.stroke_width),
            ("point radius", self.point_radius),
            ("hit radius", self.hit_radius),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(ChartError::InvalidConfig(format!(
                    "line {name} must be finite and > 0"
                )));
            }
        }
        Ok(())
    }
}

/// Donut (or pie, with `inner_radius == 0`) chart options.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DonutChartConfig {
    pub size: f64,
    pub colors: Vec<Color>,
    /// Hole radius as a fraction of the outer radius.
    pub inner_radius: f64,
    pub show_legend: bool,
    #[serde(skip)]
    pub format_value: Option<ValueFormatter>,
}

impl Default for DonutChartConfig {
    fn default() -> Self {
        Self {
            size: DEFAULT_DONUT_SIZE,
            colors: DEFAULT_PALETTE.to_vec(),
            inner_radius: DEFAULT_INNER_RADIUS_RATIO,
            show_legend: true,
            format_value: None,
        }
    }
}

impl DonutChartConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_size(mut self, size: f64) -> Self {
        self.size = size;
        self
    }

    #[must_use]
    pub fn with_colors(mut self, colors: Vec<Color>) -> Self {
        self.colors = colors;
        self
    }

    #[must_use]
    pub fn with_inner_radius(mut self, inner_radius: f64) -> Self {
        self.inner_radius = inner_radius;
        self
    }

    #[must_use]
    pub fn with_legend(mut self, show_legend: bool) -> Self {
        self.show_legend = show_legend;
        self
    }

    #[must_use]
    pub fn with_format_value(mut self, formatter: ValueFormatter) -> Self {
        self.format_value = Some(formatter);
        self
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        Viewport::new(self.size, self.size)
    }

    pub fn validate(&self) -> ChartResult<()> {
        self.viewport().validate()?;
        for color in &self.colors {
            color.validate()?;
        }
        if !self.inner_radius.is_finite() || !(0.0..1.0).contains(&self.inner_radius) {
            return Err(ChartError::InvalidConfig(
                "donut inner radius must be finite and in [0, 1)".to_owned(),
            ));
        }
        Ok(())
    }
}
