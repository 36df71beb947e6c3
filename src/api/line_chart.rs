use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::core::{
    DataPoint, LabelPlacement, PlotArea, Point, TextAnchor, Viewport, build_line_path,
    thin_labels,
};
use crate::error::ChartResult;
use crate::render::Color;

use super::value_axis::{CATEGORY_LABEL_OFFSET_PX, GridLine, ValueAxisSide, build_value_axis};
use super::{ChartOutput, LineChartConfig, NoDataPlaceholder};

/// Visible point marker plus the larger invisible circle hosts hit-test against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PointMarker {
    pub center: Point,
    pub radius: f64,
    pub hit_radius: f64,
    pub label: String,
    pub value: f64,
}

/// Complete geometry for one line chart.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineChart {
    pub viewport: Viewport,
    pub plot: PlotArea,
    pub color: Color,
    pub stroke_width: f64,
    pub line_path: String,
    /// Present when area fill is enabled.
    pub area_path: Option<String>,
    pub points: Vec<LabelPlacement>,
    pub markers: Vec<PointMarker>,
    pub gridlines: Vec<GridLine>,
    pub axis_labels: Vec<LabelPlacement>,
    pub category_labels: Vec<LabelPlacement>,
}

/// Lays out a line chart, or the no-data placeholder for an empty series.
pub fn build_line_chart(
    series: &[DataPoint],
    config: &LineChartConfig,
) -> ChartResult<ChartOutput> {
    config.validate()?;
    let viewport = config.viewport();
    if series.is_empty() {
        debug!(kind = "line", "empty series, emitting no-data placeholder");
        return Ok(ChartOutput::NoData(NoDataPlaceholder::new(viewport)));
    }

    let plot = config.plot_area();
    let path = build_line_path(series, plot)?;
    let Some(scale) = path.scale else {
        return Ok(ChartOutput::NoData(NoDataPlaceholder::new(viewport)));
    };
    let axis = build_value_axis(
        scale,
        plot,
        ValueAxisSide::Left,
        config.tick_count,
        config.show_grid,
        config.format_value.as_ref(),
    );

    let markers = if config.show_points {
        path.points
            .iter()
            .zip(series)
            .map(|(placement, point)| PointMarker {
                center: Point::new(placement.x, placement.y),
                radius: config.point_radius,
                hit_radius: config.hit_radius,
                label: point.label.clone(),
                value: point.value,
            })
            .collect()
    } else {
        Vec::new()
    };

    let category_labels = thin_labels(series, config.max_visible_labels)
        .into_iter()
        .map(|index| {
            let placement = &path.points[index];
            LabelPlacement::new(
                placement.x,
                plot.baseline() + CATEGORY_LABEL_OFFSET_PX,
                placement.text.clone(),
                TextAnchor::Middle,
            )
        })
        .collect();

    debug!(kind = "line", points = path.points.len(), "line chart laid out");

    Ok(ChartOutput::Line(LineChart {
        viewport,
        plot,
        color: config.color,
        stroke_width: config.stroke_width,
        line_path: path.line_path,
        area_path: config.fill_area.then_some(path.area_path),
        points: path.points,
        markers,
        gridlines: axis.gridlines,
        axis_labels: axis.labels,
        category_labels,
    }))
}
