use crate::core::LabelPlacement;
use crate::render::{
    CirclePrimitive, Color, GRID_COLOR, LABEL_COLOR, LinePrimitive, PathPrimitive, RectPrimitive,
    RenderFrame, TextPrimitive,
};

use super::value_axis::GridLine;
use super::{BarChart, ChartOutput, DonutChart, LineChart, NoDataPlaceholder};

const GRID_STROKE_WIDTH_PX: f64 = 1.0;
const AXIS_FONT_SIZE_PX: f64 = 11.0;
const CATEGORY_FONT_SIZE_PX: f64 = 12.0;
const PLACEHOLDER_FONT_SIZE_PX: f64 = 14.0;
const TOTAL_FONT_SIZE_PX: f64 = 16.0;
const AREA_FILL_ALPHA: f64 = 0.1;

impl ChartOutput {
    /// Flattens chart geometry into backend-agnostic draw commands.
    ///
    /// Donut legends are not drawn into the frame; hosts lay them out next to
    /// the chart from `DonutChart::legend`.
    #[must_use]
    pub fn to_render_frame(&self) -> RenderFrame {
        match self {
            Self::NoData(placeholder) => no_data_frame(placeholder),
            Self::Bar(chart) => bar_frame(chart),
            Self::Line(chart) => line_frame(chart),
            Self::Donut(chart) => donut_frame(chart),
        }
    }
}

fn no_data_frame(placeholder: &NoDataPlaceholder) -> RenderFrame {
    RenderFrame::new(placeholder.viewport).with_text(TextPrimitive::new(
        placeholder.label.clone(),
        PLACEHOLDER_FONT_SIZE_PX,
        LABEL_COLOR,
    ))
}

fn with_gridlines(frame: RenderFrame, gridlines: &[GridLine]) -> RenderFrame {
    gridlines.iter().fold(frame, |frame, line| {
        frame.with_line(LinePrimitive::new(
            line.from.x,
            line.from.y,
            line.to.x,
            line.to.y,
            GRID_STROKE_WIDTH_PX,
            GRID_COLOR,
        ))
    })
}

fn with_labels(frame: RenderFrame, labels: &[LabelPlacement], font_size_px: f64) -> RenderFrame {
    labels.iter().fold(frame, |frame, label| {
        frame.with_text(TextPrimitive::new(label.clone(), font_size_px, LABEL_COLOR))
    })
}

fn bar_frame(chart: &BarChart) -> RenderFrame {
    let mut frame = with_gridlines(RenderFrame::new(chart.viewport), &chart.gridlines);
    for bar in &chart.bars {
        frame = frame.with_rect(RectPrimitive::new(bar.rect, chart.color));
    }
    let frame = with_labels(frame, &chart.axis_labels, AXIS_FONT_SIZE_PX);
    let frame = with_labels(frame, &chart.category_labels, CATEGORY_FONT_SIZE_PX);
    with_labels(frame, &chart.value_labels, AXIS_FONT_SIZE_PX)
}

fn line_frame(chart: &LineChart) -> RenderFrame {
    let mut frame = with_gridlines(RenderFrame::new(chart.viewport), &chart.gridlines);
    if let Some(area) = &chart.area_path {
        frame = frame.with_path(PathPrimitive::filled(
            area.clone(),
            chart.color.with_alpha(AREA_FILL_ALPHA),
        ));
    }
    frame = frame.with_path(PathPrimitive::stroked(
        chart.line_path.clone(),
        chart.color,
        chart.stroke_width,
    ));
    for marker in &chart.markers {
        frame = frame
            .with_circle(CirclePrimitive {
                center: marker.center,
                radius: marker.radius,
                fill: chart.color,
            })
            .with_circle(CirclePrimitive {
                center: marker.center,
                radius: marker.hit_radius,
                fill: Color::rgba(0.0, 0.0, 0.0, 0.0),
            });
    }
    let frame = with_labels(frame, &chart.axis_labels, AXIS_FONT_SIZE_PX);
    with_labels(frame, &chart.category_labels, CATEGORY_FONT_SIZE_PX)
}

fn donut_frame(chart: &DonutChart) -> RenderFrame {
    let mut frame = RenderFrame::new(chart.viewport);
    for arc in &chart.arcs {
        frame = frame.with_path(PathPrimitive::filled(arc.path.clone(), arc.color));
    }
    match &chart.total_label {
        Some(label) => frame.with_text(TextPrimitive::new(
            label.clone(),
            TOTAL_FONT_SIZE_PX,
            LABEL_COLOR,
        )),
        None => frame,
    }
}
