use ordered_float::OrderedFloat;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::core::{
    BarOrientation, DataPoint, LabelPlacement, LinearScale, PlotArea, Rect, TextAnchor, Viewport,
    format_plain_value, layout_bars, thin_labels,
};
use crate::error::ChartResult;
use crate::render::Color;

use super::value_axis::{
    AXIS_LABEL_GAP_PX, CATEGORY_LABEL_OFFSET_PX, GridLine, TEXT_BASELINE_NUDGE_PX,
    ValueAxisSide, build_value_axis,
};
use super::{BarChartConfig, ChartOutput, NoDataPlaceholder};

const VALUE_LABEL_GAP_PX: f64 = 5.0;

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarShape {
    pub rect: Rect,
    pub label: String,
    pub value: f64,
}

/// Complete geometry for one bar chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BarChart {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub orientation: BarOrientation,
    pub color: Color,
    pub bars: Vec<BarShape>,
    pub gridlines: Vec<GridLine>,
    pub axis_labels: Vec<LabelPlacement>,
    pub category_labels: Vec<LabelPlacement>,
    pub value_labels: Vec<LabelPlacement>,
}

/// Lays out a bar chart, or the no-data placeholder for an empty series.
pub fn build_bar_chart(series: &[DataPoint], config: &BarChartConfig) -> ChartResult<ChartOutput> {
    config.validate()?;
    let viewport = config.viewport();
    if series.is_empty() {
        debug!(kind = "bar", "empty series, emitting no-data placeholder");
        return Ok(ChartOutput::NoData(NoDataPlaceholder::new(viewport)));
    }

    let negative = series.iter().filter(|point| point.value < 0.0).count();
    if negative > 0 {
        warn!(kind = "bar", negative, "negative bar values clamped to zero height");
    }

    let plot = config.plot_area();
    let orientation = config.orientation();
    let formatter = config.format_value.as_ref();
    let rects = layout_bars(series, plot, config.bar_gap_ratio, orientation)?;

    let max_value = series
        .iter()
        .map(|point| OrderedFloat(point.value))
        .max()
        .map_or(0.0, |max| max.0);
    let (scale, side) = match orientation {
        BarOrientation::Vertical => (
            LinearScale::from_zero(max_value, plot.baseline(), plot.y)?,
            ValueAxisSide::Left,
        ),
        BarOrientation::Horizontal => (
            LinearScale::from_zero(max_value, plot.x, plot.right())?,
            ValueAxisSide::Bottom,
        ),
    };
    let axis = build_value_axis(
        scale,
        plot,
        side,
        config.tick_count,
        config.show_grid,
        formatter,
    );

    let visible = thin_labels(series, config.max_visible_labels);
    let category_labels = visible
        .iter()
        .map(|&index| {
            let (rect, point) = (rects[index], &series[index]);
            match orientation {
                BarOrientation::Vertical => LabelPlacement::new(
                    rect.center_x(),
                    plot.baseline() + CATEGORY_LABEL_OFFSET_PX,
                    point.label.clone(),
                    TextAnchor::Middle,
                ),
                BarOrientation::Horizontal => LabelPlacement::new(
                    plot.x - AXIS_LABEL_GAP_PX,
                    rect.center_y() + TEXT_BASELINE_NUDGE_PX,
                    point.label.clone(),
                    TextAnchor::End,
                ),
            }
        })
        .collect();

    let value_labels = if config.show_values {
        rects
            .iter()
            .zip(series)
            .map(|(rect, point)| {
                let text = format_plain_value(point.value, formatter);
                match orientation {
                    BarOrientation::Vertical => LabelPlacement::new(
                        rect.center_x(),
                        rect.y - VALUE_LABEL_GAP_PX,
                        text,
                        TextAnchor::Middle,
                    ),
                    BarOrientation::Horizontal => LabelPlacement::new(
                        rect.x + rect.width + VALUE_LABEL_GAP_PX,
                        rect.center_y() + TEXT_BASELINE_NUDGE_PX,
                        text,
                        TextAnchor::Start,
                    ),
                }
            })
            .collect()
    } else {
        Vec::new()
    };

    let bars = rects
        .into_iter()
        .zip(series)
        .map(|(rect, point)| BarShape {
            rect,
            label: point.label.clone(),
            value: point.value,
        })
        .collect::<Vec<_>>();
    debug!(kind = "bar", bars = bars.len(), ?orientation, "bar chart laid out");

    Ok(ChartOutput::Bar(BarChart {
        viewport,
        plot,
        orientation,
        color: config.color,
        bars,
        gridlines: axis.gridlines,
        axis_labels: axis.labels,
        category_labels,
        value_labels,
    }))
}
